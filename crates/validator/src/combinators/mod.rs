//! Rule combinators
//!
//! - [`RuleFn`]: adapts a plain function into a [`Rule`](crate::foundation::Rule)
//! - [`Dive`] / [`DiveDeref`]: per-element validation with index attribution
//! - [`Optional`]: validates the value inside a present `Option`
//! - [`Nested`]: delegates to the input's own [`Validatable`](crate::foundation::Validatable) impl

pub mod dive;
pub mod func;
pub mod nested;
pub mod optional;

pub use dive::{Dive, DiveDeref, dive, dive_deref};
pub use func::{RuleFn, rule_fn};
pub use nested::{Nested, nested};
pub use optional::{Optional, optional};

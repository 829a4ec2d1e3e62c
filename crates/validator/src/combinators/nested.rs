//! Self-validation as a rule
//!
//! [`Nested`] calls [`Validatable::validate`] on its input, which lets a chain
//! dive into a collection of self-validating values.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::combinators::nested;
//! use fieldcheck_validator::foundation::{Error, Rule, Validatable};
//!
//! struct Port(u16);
//!
//! impl Validatable for Port {
//!     fn validate(&self) -> Result<(), Error> {
//!         if self.0 == 0 {
//!             return Err(Error::rule("port", "must not be zero"));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! assert!(nested().validate(&Port(443)).is_ok());
//! assert!(nested().validate(&Port(0)).is_err());
//! ```

use std::marker::PhantomData;

use crate::foundation::{Error, Rule, Validatable};

/// Validates a value by delegating to its own [`Validatable`] impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nested<T: ?Sized> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T: Validatable + ?Sized> Rule for Nested<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), Error> {
        input.validate()
    }
}

/// Creates a [`Nested`] rule.
#[must_use]
pub fn nested<T: Validatable + ?Sized>() -> Nested<T> {
    Nested {
        _phantom: PhantomData,
    }
}

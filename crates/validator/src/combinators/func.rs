//! Function-rule adapter
//!
//! Lets any `Fn(&T) -> Result<(), Error>` stand in for a [`Rule`], so ad hoc
//! predicates plug into a chain without a named type.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::combinators::rule_fn;
//! use fieldcheck_validator::foundation::{Error, Rule};
//!
//! let ascii = rule_fn(|s: &str| {
//!     if s.is_ascii() {
//!         Ok(())
//!     } else {
//!         Err(Error::rule("ascii", "must contain only ASCII characters"))
//!     }
//! });
//!
//! assert!(ascii.validate("sensor-01").is_ok());
//! assert!(ascii.validate("zürich").is_err());
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Error, Rule};

/// A rule backed by a closure or function pointer.
pub struct RuleFn<T: ?Sized, F> {
    check: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> RuleFn<T, F> {
    /// Wraps `check` as a rule.
    pub fn new(check: F) -> Self {
        Self {
            check,
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized, F: Clone> Clone for RuleFn<T, F> {
    fn clone(&self) -> Self {
        Self::new(self.check.clone())
    }
}

impl<T: ?Sized, F> fmt::Debug for RuleFn<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleFn").finish_non_exhaustive()
    }
}

impl<T, F> Rule for RuleFn<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), Error>,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), Error> {
        (self.check)(input)
    }
}

/// Creates a [`RuleFn`] from a function.
#[must_use]
pub fn rule_fn<T, F>(check: F) -> RuleFn<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), Error>,
{
    RuleFn::new(check)
}

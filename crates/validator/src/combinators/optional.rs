//! OPTIONAL combinator - validates the value inside an `Option`
//!
//! `None` passes; `Some(v)` hands `v` to the inner rule. The failure is
//! returned as is, with no index or wrap layer, since there is exactly one
//! value to attribute it to.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::combinators::optional;
//! use fieldcheck_validator::foundation::Rule;
//! use fieldcheck_validator::validators::greater;
//!
//! let rule = optional(greater(0_u16));
//! assert!(rule.validate(&None).is_ok());
//! assert!(rule.validate(&Some(8080)).is_ok());
//! assert_eq!(rule.validate(&Some(0)).unwrap_err().to_string(), "must be greater than 0");
//! ```

use crate::foundation::{Error, Rule};

/// Applies `rule` to the contents of a present `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<R> {
    rule: R,
}

impl<R> Optional<R> {
    /// Wraps `rule`.
    pub fn new(rule: R) -> Self {
        Self { rule }
    }

    pub fn inner(&self) -> &R {
        &self.rule
    }

    pub fn into_inner(self) -> R {
        self.rule
    }
}

impl<R, T> Rule for Optional<R>
where
    R: Rule<Input = T>,
{
    type Input = Option<T>;

    fn validate(&self, input: &Option<T>) -> Result<(), Error> {
        match input {
            None => Ok(()),
            Some(value) => self.rule.validate(value),
        }
    }
}

/// Creates an [`Optional`] rule.
#[must_use]
pub fn optional<R>(rule: R) -> Optional<R> {
    Optional::new(rule)
}

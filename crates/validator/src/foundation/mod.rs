//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Rule`], [`Validatable`], [`Valid`]
//! - **Errors**: [`RuleError`], [`Error`], [`Errors`]
//! - **Capabilities**: [`Ordered`], [`ZeroComparable`], [`Nilable`], [`Measured`], [`Elements`]
//!
//! # Architecture
//!
//! ## 1. Type Safety
//!
//! Rules are generic over their input type, and the capability traits decide
//! at compile time which rules apply to which values:
//!
//! ```
//! use fieldcheck_validator::foundation::{Error, Rule};
//!
//! struct NonZero;
//!
//! impl Rule for NonZero {
//!     type Input = u32;
//!
//!     fn validate(&self, input: &u32) -> Result<(), Error> {
//!         if *input == 0 {
//!             return Err(Error::rule("non_zero", "must not be zero"));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! assert!(NonZero.validate(&1).is_ok());
//! ```
//!
//! ## 2. Field-path errors
//!
//! Failures are a closed tree. A chain attributes its failure to a field name,
//! a dive attributes it to an element index, and the aggregate keeps sibling
//! failures in evaluation order:
//!
//! ```
//! use fieldcheck_validator::foundation::{Error, RuleError};
//!
//! let error = Error::value("tags", Error::index(2, RuleError::new("required", "cannot be blank")));
//! assert_eq!(error.to_string(), "tags: [2]: cannot be blank");
//! assert_eq!(error.code(), Some("required"));
//! ```

pub mod capability;
pub mod error;
pub mod traits;
mod tree;

pub use capability::{Elements, Measured, Nilable, Ordered, ZeroComparable};
pub use error::{Error, Errors, RuleError};
pub use traits::{Rule, Valid, Validatable};

// ============================================================================
// PRELUDE
// ============================================================================

/// Common imports for writing rules by hand.
///
/// ```
/// use fieldcheck_validator::foundation::prelude::*;
///
/// let failure = RuleError::new("custom", "is not acceptable");
/// assert_eq!(Error::from(failure).code(), Some("custom"));
/// ```
pub mod prelude {
    pub use super::{
        Elements, Error, Errors, Measured, Nilable, Ordered, Rule, RuleError, Valid, Validatable,
        ValidationResult, ZeroComparable,
    };
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// The outcome of every rule, chain and aggregate.
pub type ValidationResult = Result<(), Error>;

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs `rule` against `value`.
///
/// Convenience for one-off checks outside a chain.
///
/// ```
/// use fieldcheck_validator::foundation::validate_value;
/// use fieldcheck_validator::validators::less;
///
/// assert!(validate_value(&3, &less(5)).is_ok());
/// assert!(validate_value(&7, &less(5)).is_err());
/// ```
#[must_use = "validation result must be checked"]
pub fn validate_value<R>(value: &R::Input, rule: &R) -> ValidationResult
where
    R: Rule + ?Sized,
{
    rule.validate(value)
}

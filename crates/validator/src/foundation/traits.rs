//! Core traits for the validation system
//!
//! - [`Rule`]: the atomic check every rule, dive and chain implements
//! - [`Validatable`]: a type that knows how to validate itself
//! - [`Valid`]: a validator already bound to a named value

use std::rc::Rc;
use std::sync::Arc;

use crate::foundation::Error;

// ============================================================================
// RULE TRAIT
// ============================================================================

/// The core trait that all rules must implement.
///
/// A rule is a pure, total check over one value: it returns `Ok(())` or the
/// failure describing why the value was rejected. Rules never panic for
/// well-typed input and never perform I/O.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{Error, Rule};
///
/// struct Even;
///
/// impl Rule for Even {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), Error> {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(Error::rule("even", "must be even"))
///         }
///     }
/// }
///
/// assert!(Even.validate(&4).is_ok());
/// assert!(Even.validate(&3).is_err());
/// ```
pub trait Rule {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), Error>;
}

impl<R: Rule + ?Sized> Rule for &R {
    type Input = R::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), Error> {
        (**self).validate(input)
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    type Input = R::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), Error> {
        (**self).validate(input)
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    type Input = R::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), Error> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATABLE TRAIT
// ============================================================================

/// Trait for types that can validate themselves.
///
/// A struct usually implements this by running one validator per field and
/// aggregating the results with [`all`](crate::chain::all) or
/// [`validate_all!`](crate::validate_all).
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// struct Device {
///     model: String,
///     screen_width: u32,
/// }
///
/// impl Validatable for Device {
///     fn validate(&self) -> Result<(), Error> {
///         validate_all!(
///             Validator::new(&self.model, "model").required(true),
///             Validator::new(&self.screen_width, "screen_width").less_or_equal(8192),
///         )
///     }
/// }
///
/// let device = Device { model: String::new(), screen_width: 1080 };
/// assert_eq!(device.validate().unwrap_err().to_string(), "model: cannot be blank");
/// ```
pub trait Validatable {
    /// Validates the instance.
    fn validate(&self) -> Result<(), Error>;
}

impl<T: Validatable + ?Sized> Validatable for &T {
    fn validate(&self) -> Result<(), Error> {
        (**self).validate()
    }
}

impl<T: Validatable + ?Sized> Validatable for Box<T> {
    fn validate(&self) -> Result<(), Error> {
        (**self).validate()
    }
}

impl<T: Validatable + ?Sized> Validatable for Rc<T> {
    fn validate(&self) -> Result<(), Error> {
        (**self).validate()
    }
}

impl<T: Validatable + ?Sized> Validatable for Arc<T> {
    fn validate(&self) -> Result<(), Error> {
        (**self).validate()
    }
}

/// An absent value has nothing to validate.
impl<T: Validatable> Validatable for Option<T> {
    fn validate(&self) -> Result<(), Error> {
        self.as_ref().map_or(Ok(()), Validatable::validate)
    }
}

// ============================================================================
// VALID TRAIT
// ============================================================================

/// A validator bound to a named value.
///
/// `valid()` runs the attached rules against the bound value and attributes
/// any failure to the value's name.
pub trait Valid {
    /// Evaluates the bound value.
    fn valid(&self) -> Result<(), Error>;
}

impl<V: Valid + ?Sized> Valid for &V {
    fn valid(&self) -> Result<(), Error> {
        (**self).valid()
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! Required-ness rules
//!
//! A value is "blank" when it equals its type's zero instance
//! ([`ZeroComparable`]), or when a caller-supplied predicate says so
//! ([`RequiredWith`]). Both rules only fire while their `condition` holds,
//! which expresses "required only when some other field is set" without
//! branching at the call site.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::foundation::Rule;
//! use fieldcheck_validator::validators::required;
//!
//! assert!(required::<String>(true).validate(&String::new()).is_err());
//! assert!(required::<String>(false).validate(&String::new()).is_ok());
//! assert!(required::<u32>(true).validate(&7).is_ok());
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Error, Rule, ZeroComparable};

pub(crate) fn blank() -> Error {
    Error::rule("required", "cannot be blank")
}

// ============================================================================
// REQUIRED
// ============================================================================

/// Rejects the zero value of `T` while `condition` is true.
///
/// Zero means [`Default::default`]: `0`, `""`, an empty `Vec`, `None`.
/// `Some(vec![])` is not zero; use [`NotEmpty`](super::NotEmpty) to reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Required<T> {
    condition: bool,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ZeroComparable> Rule for Required<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), Error> {
        if self.condition && input.is_zero() {
            Err(blank())
        } else {
            Ok(())
        }
    }
}

/// Creates a [`Required`] rule.
#[must_use]
pub fn required<T>(condition: bool) -> Required<T> {
    Required {
        condition,
        _phantom: PhantomData,
    }
}

// ============================================================================
// REQUIRED WITH PREDICATE
// ============================================================================

/// Rejects values that `is_default` reports as blank while `condition` is
/// true.
///
/// For types without a structural zero value.
///
/// ```
/// use fieldcheck_validator::foundation::Rule;
/// use fieldcheck_validator::validators::required_with;
///
/// struct Origin { x: f64, y: f64 }
///
/// let rule = required_with(true, |o: &Origin| o.x == 0.0 && o.y == 0.0);
/// assert!(rule.validate(&Origin { x: 0.0, y: 0.0 }).is_err());
/// assert!(rule.validate(&Origin { x: 1.0, y: 0.0 }).is_ok());
/// ```
pub struct RequiredWith<T: ?Sized, F> {
    condition: bool,
    is_default: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> fmt::Debug for RequiredWith<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequiredWith")
            .field("condition", &self.condition)
            .finish_non_exhaustive()
    }
}

impl<T, F> Rule for RequiredWith<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), Error> {
        if self.condition && (self.is_default)(input) {
            Err(blank())
        } else {
            Ok(())
        }
    }
}

/// Creates a [`RequiredWith`] rule.
#[must_use]
pub fn required_with<T, F>(condition: bool, is_default: F) -> RequiredWith<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    RequiredWith {
        condition,
        is_default,
        _phantom: PhantomData,
    }
}

// ============================================================================
// TESTS
// ============================================================================

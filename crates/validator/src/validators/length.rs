//! Length rule
//!
//! Counts elements for collections and Unicode scalar values for strings
//! (see [`Measured`]). Both bounds are inclusive; a `max` of `None` leaves the
//! upper end open.

use std::marker::PhantomData;

use crate::foundation::{Error, Measured, Rule, RuleError};

/// Validates that the measured length lies in `[min, max]`.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::Rule;
/// use fieldcheck_validator::validators::length;
///
/// let rule = length::<str>(2, Some(4));
/// assert!(rule.validate("abc").is_ok());
/// assert_eq!(
///     rule.validate("a").unwrap_err().to_string(),
///     "the length must be between 2 and 4"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Length<T: ?Sized> {
    min: usize,
    max: Option<usize>,
    failure: RuleError,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Length<T> {
    /// Creates a length rule. `max: None` means unbounded.
    #[must_use]
    pub fn new(min: usize, max: Option<usize>) -> Self {
        let message = match max {
            Some(max) if min == max => format!("the length must be exactly {min}"),
            Some(max) if min == 0 => format!("the length must be no more than {max}"),
            Some(max) => format!("the length must be between {min} and {max}"),
            None => format!("the length must be no less than {min}"),
        };
        Self {
            min,
            max,
            failure: RuleError::new("length", message),
            _phantom: PhantomData,
        }
    }

    /// Returns the inclusive lower bound.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Returns the inclusive upper bound, if any.
    pub fn max(&self) -> Option<usize> {
        self.max
    }
}

impl<T: Measured + ?Sized> Rule for Length<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), Error> {
        let len = input.measure();
        let too_long = self.max.is_some_and(|max| len > max);
        if len < self.min || too_long {
            return Err(Error::Rule(self.failure.clone()));
        }
        Ok(())
    }
}

/// Creates a [`Length`] rule.
#[must_use]
pub fn length<T: ?Sized>(min: usize, max: Option<usize>) -> Length<T> {
    Length::new(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(2, true)]
    #[case(3, false)]
    fn test_max_only(#[case] len: usize, #[case] ok: bool) {
        let input = vec![0_u8; len];
        assert_eq!(length(0, Some(2)).validate(&input).is_ok(), ok);
    }

    #[rstest]
    #[case(1, false)]
    #[case(2, true)]
    #[case(1000, true)]
    fn test_unbounded_max(#[case] len: usize, #[case] ok: bool) {
        let input = "x".repeat(len);
        assert_eq!(length(2, None).validate(&input).is_ok(), ok);
    }

    #[rstest]
    #[case(3, Some(3), 8, "the length must be exactly 3")]
    #[case(0, Some(5), 8, "the length must be no more than 5")]
    #[case(2, Some(5), 8, "the length must be between 2 and 5")]
    #[case(4, None, 1, "the length must be no less than 4")]
    fn test_messages(
        #[case] min: usize,
        #[case] max: Option<usize>,
        #[case] len: usize,
        #[case] want: &str,
    ) {
        let input = vec![0_u8; len];
        let error = length::<[u8]>(min, max).validate(&input).unwrap_err();
        assert_eq!(error.code(), Some("length"));
        assert_eq!(error.to_string(), want);
    }

    #[test]
    fn test_absent_measures_zero() {
        assert!(length::<Option<Vec<u8>>>(1, None).validate(&None).is_err());
        assert!(length::<Option<Vec<u8>>>(0, Some(1)).validate(&None).is_ok());
    }
}

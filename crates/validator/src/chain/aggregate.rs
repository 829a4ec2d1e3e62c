//! Aggregation of independent validators
//!
//! Unlike a chain, aggregation never short-circuits: every validator runs and
//! every failure is kept, in evaluation order. Zero failures is `Ok(())`,
//! never an empty [`Errors`].

use crate::foundation::{Error, Errors, Valid};

/// Runs every validator and collects the failures.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::chain::{Validator, all};
///
/// let (width, height) = (0_u32, 600_u32);
/// let error = all(&[
///     &Validator::new(&width, "width").required(true),
///     &Validator::new(&height, "height").less_or_equal(480),
/// ])
/// .unwrap_err();
///
/// assert_eq!(error.to_string(), "width: cannot be blank; height: must be no greater than 480");
/// assert_eq!(error.as_errors().map(|e| e.len()), Some(2));
/// ```
pub fn all(validators: &[&dyn Valid]) -> Result<(), Error> {
    collect(validators.iter().map(|validator| validator.valid()))
}

/// Collects the failures among `results`, keeping their order.
pub fn collect<I>(results: I) -> Result<(), Error>
where
    I: IntoIterator<Item = Result<(), Error>>,
{
    let mut total = 0_usize;
    let errors: Errors = results
        .into_iter()
        .inspect(|_| total += 1)
        .filter_map(Result::err)
        .collect();

    tracing::debug!(total, failed = errors.len(), "aggregated validation results");
    errors.into_result()
}

//! Nil and emptiness rules
//!
//! These rules keep "absent" and "present but empty" apart. For
//! `Option<Vec<T>>`, `None` is absent and `Some(vec![])` is present with zero
//! items; the two states trigger different rules:
//!
//! | input            | `Nil` | `NotNil` | `Empty` | `NotEmpty` | `NilOrNotEmpty` |
//! |------------------|-------|----------|---------|------------|-----------------|
//! | absent           | ok    | fails    | ok      | fails      | ok              |
//! | present, 0 items | fails | ok       | ok      | fails      | fails           |
//! | present, N items | fails | ok       | fails   | ok         | ok              |
//!
//! Every rule is a no-op while its `condition` is false.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::foundation::Rule;
//! use fieldcheck_validator::validators::nil_or_not_empty;
//!
//! let rule = nil_or_not_empty(true);
//! assert!(rule.validate(&None::<Vec<u8>>).is_ok());
//! assert!(rule.validate(&Some(Vec::<u8>::new())).is_err());
//! assert!(rule.validate(&Some(vec![1_u8])).is_ok());
//! ```

use std::marker::PhantomData;

use crate::foundation::{Error, Measured, Nilable, Rule};

/// Declares a rule whose only state is its `condition` flag.
macro_rules! conditional {
    ($(#[$meta:meta])* $name:ident, $factory:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name<T: ?Sized> {
            condition: bool,
            _phantom: PhantomData<fn(&T)>,
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`] rule.")]
        #[must_use]
        pub fn $factory<T: ?Sized>(condition: bool) -> $name<T> {
            $name {
                condition,
                _phantom: PhantomData,
            }
        }
    };
}

conditional! {
    /// Requires the handle to be absent.
    Nil, nil
}

conditional! {
    /// Requires the handle to be present. Emptiness is not checked.
    NotNil, not_nil
}

conditional! {
    /// Rejects values with at least one element or character.
    Empty, empty
}

conditional! {
    /// Rejects values with zero elements or characters, absent handles included.
    NotEmpty, not_empty
}

conditional! {
    /// Accepts an absent handle or a non-empty one; rejects present-but-empty.
    NilOrNotEmpty, nil_or_not_empty
}

// ============================================================================
// RULE IMPLS
// ============================================================================

impl<T: Nilable + ?Sized> Rule for Nil<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), Error> {
        if self.condition && !input.is_nil() {
            return Err(Error::rule("nil", "must be blank"));
        }
        Ok(())
    }
}

impl<T: Nilable + ?Sized> Rule for NotNil<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), Error> {
        if self.condition && input.is_nil() {
            return Err(Error::rule("not_nil", "is required"));
        }
        Ok(())
    }
}

impl<T: Measured + ?Sized> Rule for Empty<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), Error> {
        if self.condition && input.measure() > 0 {
            return Err(Error::rule("empty", "must be empty"));
        }
        Ok(())
    }
}

impl<T: Measured + ?Sized> Rule for NotEmpty<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), Error> {
        if self.condition && input.measure() == 0 {
            return Err(Error::rule("not_empty", "cannot be empty"));
        }
        Ok(())
    }
}

impl<T: Nilable + Measured + ?Sized> Rule for NilOrNotEmpty<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), Error> {
        if self.condition && !input.is_nil() && input.measure() == 0 {
            return Err(Error::rule("nil_or_not_empty", "cannot be empty"));
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

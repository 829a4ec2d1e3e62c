//! DIVE combinator - validates each element of an ordered collection
//!
//! A dive runs one rule against every element in positional order and stops
//! at the first failing element. The failure is attributed to that element's
//! position with [`Error::Index`]; later elements are never inspected.
//!
//! With `wrap` enabled the element failure is first wrapped in
//! [`Error::Wrap`], marking that it came from one recursion level down.
//!
//! Two variants exist:
//!
//! - [`Dive`] hands each element to the rule by reference
//! - [`DiveDeref`] hands the rule the pointee of each element, for
//!   collections of `Box<T>`, `String`, `Rc<T>` and other smart pointers
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::combinators::dive;
//! use fieldcheck_validator::foundation::Rule;
//! use fieldcheck_validator::validators::less;
//!
//! let rule = dive::<Vec<u8>, _>(less(10));
//! assert!(rule.validate(&vec![1, 2, 3]).is_ok());
//! assert_eq!(rule.validate(&vec![1, 20, 30]).unwrap_err().to_string(), "[1]: must be less than 10");
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use crate::foundation::{Elements, Error, Rule};

fn attribute(index: usize, error: Error, wrap: bool) -> Error {
    tracing::trace!(index, wrap, "dive element failed");
    if wrap {
        Error::index(index, Error::wrap(error))
    } else {
        Error::index(index, error)
    }
}

// ============================================================================
// DIVE
// ============================================================================

/// Applies `rule` to each element of a collection, short-circuiting.
pub struct Dive<C: ?Sized, R> {
    rule: R,
    wrap: bool,
    _phantom: PhantomData<fn(&C)>,
}

impl<C: ?Sized, R> Dive<C, R> {
    /// Creates a dive that reports element failures unwrapped.
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            wrap: false,
            _phantom: PhantomData,
        }
    }

    /// Sets whether element failures are wrapped in [`Error::Wrap`].
    #[must_use = "builder methods must be chained or built"]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Returns a reference to the element rule.
    pub fn inner(&self) -> &R {
        &self.rule
    }
}

impl<C: ?Sized, R: fmt::Debug> fmt::Debug for Dive<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dive")
            .field("rule", &self.rule)
            .field("wrap", &self.wrap)
            .finish()
    }
}

impl<C, R> Rule for Dive<C, R>
where
    C: Elements + ?Sized,
    R: Rule<Input = C::Item>,
{
    type Input = C;

    fn validate(&self, input: &C) -> Result<(), Error> {
        for (index, element) in input.elements().enumerate() {
            if let Err(error) = self.rule.validate(element) {
                return Err(attribute(index, error, self.wrap));
            }
        }
        Ok(())
    }
}

/// Creates a [`Dive`] over `C`'s elements.
#[must_use]
pub fn dive<C, R>(rule: R) -> Dive<C, R>
where
    C: Elements + ?Sized,
    R: Rule<Input = C::Item>,
{
    Dive::new(rule)
}

// ============================================================================
// DIVE DEREF
// ============================================================================

/// Applies `rule` to the pointee of each element, short-circuiting.
pub struct DiveDeref<C: ?Sized, R> {
    rule: R,
    wrap: bool,
    _phantom: PhantomData<fn(&C)>,
}

impl<C: ?Sized, R> DiveDeref<C, R> {
    /// Creates a dive that reports element failures unwrapped.
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            wrap: false,
            _phantom: PhantomData,
        }
    }

    /// Sets whether element failures are wrapped in [`Error::Wrap`].
    #[must_use = "builder methods must be chained or built"]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }
}

impl<C: ?Sized, R: fmt::Debug> fmt::Debug for DiveDeref<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiveDeref")
            .field("rule", &self.rule)
            .field("wrap", &self.wrap)
            .finish()
    }
}

impl<C, R> Rule for DiveDeref<C, R>
where
    C: Elements + ?Sized,
    C::Item: Deref<Target = R::Input>,
    R: Rule,
{
    type Input = C;

    fn validate(&self, input: &C) -> Result<(), Error> {
        for (index, element) in input.elements().enumerate() {
            if let Err(error) = self.rule.validate(element.deref()) {
                return Err(attribute(index, error, self.wrap));
            }
        }
        Ok(())
    }
}

/// Creates a [`DiveDeref`] over `C`'s elements.
#[must_use]
pub fn dive_deref<C, R>(rule: R) -> DiveDeref<C, R>
where
    C: Elements + ?Sized,
    C::Item: Deref<Target = R::Input>,
    R: Rule,
{
    DiveDeref::new(rule)
}

// ============================================================================
// TESTS
// ============================================================================

//! Error types for validation failures
//!
//! Five shapes cover every failure the crate produces:
//!
//! - [`RuleError`]: a single check failed (`code` + already formatted `message`)
//! - [`Error::Value`]: attributes a failure to a named field
//! - [`Error::Index`]: attributes a failure to a collection position
//! - [`Error::Wrap`]: marks a recursion boundary without adding attribution
//! - [`Errors`]: ordered aggregate of independent failures
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.
//!
//! # Flat rendering
//!
//! `Display` renders the whole tree as one line:
//!
//! ```
//! use fieldcheck_validator::foundation::{Error, Errors, RuleError};
//!
//! let errors: Errors = vec![
//!     Error::value("foo", Error::index(0, RuleError::new("bad", "bar"))),
//!     Error::value("baz", RuleError::new("bad", "quux")),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(errors.to_string(), "foo: [0]: bar; baz: quux");
//! ```

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// RULE ERROR
// ============================================================================

/// A leaf failure produced by one rule.
///
/// `code` is a short stable identifier (`"required"`, `"between"`) meant for
/// programmatic handling; `message` is the human-readable text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct RuleError {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl RuleError {
    /// Creates a new rule error with a code and message.
    ///
    /// ```
    /// use fieldcheck_validator::foundation::RuleError;
    ///
    /// // Static strings, zero allocation:
    /// let error = RuleError::new("required", "cannot be blank");
    ///
    /// // Dynamic strings, allocates only when needed:
    /// let error = RuleError::new("less", format!("must be less than {}", 5));
    /// assert_eq!(error.message(), "must be less than 5");
    /// ```
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// ERROR TREE
// ============================================================================

/// A validation failure, possibly attributed to a field path.
///
/// Errors are immutable values; wrappers own their nested error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A single rule failed.
    #[error("{0}")]
    Rule(RuleError),

    /// The failure belongs to the named value.
    #[error("{name}: {nested}")]
    Value {
        /// Field or value name, never empty when produced by a validator.
        name: Cow<'static, str>,
        /// The wrapped failure.
        nested: Box<Error>,
    },

    /// The failure belongs to the element at `index`.
    #[error("[{index}]: {nested}")]
    Index {
        /// Zero-based position of the failing element.
        index: usize,
        /// The wrapped failure.
        nested: Box<Error>,
    },

    /// The failure came from a recursively invoked sub-validation.
    #[error("({0})")]
    Wrap(Box<Error>),

    /// Several independent failures.
    #[error("{0}")]
    Errors(Errors),
}

impl Error {
    /// Creates a leaf rule failure.
    pub fn rule(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Rule(RuleError::new(code, message))
    }

    /// Attributes `nested` to the value called `name`.
    pub fn value(name: impl Into<Cow<'static, str>>, nested: impl Into<Error>) -> Self {
        Self::Value {
            name: name.into(),
            nested: Box::new(nested.into()),
        }
    }

    /// Attributes `nested` to the element at `index`.
    pub fn index(index: usize, nested: impl Into<Error>) -> Self {
        Self::Index {
            index,
            nested: Box::new(nested.into()),
        }
    }

    /// Marks `nested` as coming from one recursion level down.
    pub fn wrap(nested: impl Into<Error>) -> Self {
        Self::Wrap(Box::new(nested.into()))
    }

    /// Returns the leaf code, looking through value, index and wrap layers.
    ///
    /// Aggregates have no single code and return `None`.
    pub fn code(&self) -> Option<&str> {
        self.leaf().map(RuleError::code)
    }

    /// Returns the leaf rule failure, looking through single-child wrappers.
    pub fn leaf(&self) -> Option<&RuleError> {
        match self {
            Self::Rule(e) => Some(e),
            Self::Value { nested, .. } | Self::Index { nested, .. } | Self::Wrap(nested) => {
                nested.leaf()
            }
            Self::Errors(_) => None,
        }
    }

    /// Returns the value name if this is a [`Error::Value`].
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Value { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Returns the element index if this is an [`Error::Index`].
    pub fn index_of(&self) -> Option<usize> {
        match self {
            Self::Index { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Returns the directly wrapped error, if this shape wraps one.
    pub fn nested(&self) -> Option<&Error> {
        match self {
            Self::Value { nested, .. } | Self::Index { nested, .. } | Self::Wrap(nested) => {
                Some(nested)
            }
            Self::Rule(_) | Self::Errors(_) => None,
        }
    }

    /// Returns the aggregate if this is an [`Error::Errors`].
    pub fn as_errors(&self) -> Option<&Errors> {
        match self {
            Self::Errors(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<RuleError> for Error {
    fn from(error: RuleError) -> Self {
        Self::Rule(error)
    }
}

impl From<Errors> for Error {
    fn from(errors: Errors) -> Self {
        Self::Errors(errors)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of validation failures.
///
/// Insertion order is evaluation order. Duplicates and unrelated shapes may
/// coexist. An empty collection means "no error" and is never surfaced as a
/// failure by [`Errors::into_result`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Errors {
    errors: Vec<Error>,
}

impl Errors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn push(&mut self, error: impl Into<Error>) {
        self.errors.push(error.into());
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns an iterator over the errors in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// Returns all errors.
    #[must_use]
    pub fn as_slice(&self) -> &[Error] {
        &self.errors
    }

    /// Converts to a `Result`, mapping an empty collection to `Ok(())`.
    pub fn into_result(self) -> Result<(), Error> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::Errors(self))
        }
    }
}

impl FromIterator<Error> for Errors {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_rule_error_accessors() {
        let error = RuleError::new("foo", "bar");
        assert_eq!(error.code(), "foo");
        assert_eq!(error.message(), "bar");
        assert_eq!(error.to_string(), "bar");
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = RuleError::new("required", "cannot be blank");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[rstest]
    #[case("a", "b", "a: b")]
    #[case("hello", "world", "hello: world")]
    #[case("foo", "bar", "foo: bar")]
    fn test_value_error_display(
        #[case] name: &'static str,
        #[case] msg: &'static str,
        #[case] want: &str,
    ) {
        let error = Error::value(name, RuleError::new("x", msg));
        assert_eq!(error.to_string(), want);
        assert_eq!(error.name(), Some(name));
    }

    #[rstest]
    #[case(0, "b", "[0]: b")]
    #[case(1337, "hello world", "[1337]: hello world")]
    #[case(0xdead_beef, "foobar", "[3735928559]: foobar")]
    fn test_index_error_display(
        #[case] index: usize,
        #[case] msg: &'static str,
        #[case] want: &str,
    ) {
        let error = Error::index(index, RuleError::new("x", msg));
        assert_eq!(error.to_string(), want);
        assert_eq!(error.index_of(), Some(index));
    }

    #[test]
    fn test_wrap_error_display() {
        let error = Error::wrap(RuleError::new("x", "world"));
        assert_eq!(error.to_string(), "(world)");
    }

    #[test]
    fn test_errors_display_mixed_shapes() {
        let errors: Errors = vec![
            Error::value("foo", RuleError::new("x", "bar")),
            Error::wrap(RuleError::new("x", "all your codebase are belong to us")),
            Error::index(13, RuleError::new("x", "out of bounds")),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            errors.to_string(),
            "foo: bar; (all your codebase are belong to us); [13]: out of bounds"
        );
    }

    #[test]
    fn test_empty_errors_is_no_error() {
        assert_eq!(Errors::new().to_string(), "");
        assert!(Errors::new().into_result().is_ok());
    }

    #[test]
    fn test_code_looks_through_wrappers() {
        let leaf = RuleError::new("required", "cannot be blank");
        let error = Error::value("device", Error::wrap(Error::index(2, leaf)));
        assert_eq!(error.code(), Some("required"));

        let aggregate = Error::Errors(vec![error].into_iter().collect());
        assert_eq!(aggregate.code(), None);
    }
}

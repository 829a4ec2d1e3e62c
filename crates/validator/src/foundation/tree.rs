//! Field-path tree serialization
//!
//! An [`Errors`] aggregate serializes to an object keyed by the names of its
//! [`Error::Value`] entries. Entries of any other shape are dropped: only
//! named failures are addressable by field path.
//!
//! Each named payload is encoded recursively:
//!
//! - nested [`Error::Errors`]: another object keyed by value names
//! - [`Error::Value`]: `{"<name>": <payload>}`
//! - [`Error::Index`]: `{"<index>": <payload>}`
//! - [`Error::Wrap`]: transparent, encodes its nested error directly
//! - anything else: a JSON string holding the flat message
//!
//! Keys are emitted in evaluation order. Consumers should treat that order as
//! best effort, since JSON objects are unordered by definition. A name that
//! occurs more than once keeps the position of its first occurrence and the
//! payload of its last, so every key is unique.
//!
//! ```
//! use fieldcheck_validator::foundation::{Error, Errors, RuleError};
//!
//! let errors: Errors = vec![
//!     Error::value("foo", Error::index(0, RuleError::new("x", "bar"))),
//!     Error::rule("x", "unlabeled"),
//!     Error::value("baz", RuleError::new("x", "quux")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let json = serde_json::to_string(&errors).unwrap();
//! assert_eq!(json, r#"{"foo":{"0":"bar"},"baz":"quux"}"#);
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::foundation::error::{Error, Errors};

/// Named entries of `errors`, one per distinct name.
fn named(errors: &Errors) -> Vec<(&str, &Error)> {
    let mut entries: Vec<(&str, &Error)> = Vec::new();
    for error in errors {
        if let Error::Value { name, nested } = error {
            match entries.iter_mut().find(|(seen, _)| *seen == &**name) {
                Some(entry) => entry.1 = &**nested,
                None => entries.push((&**name, &**nested)),
            }
        }
    }
    entries
}

impl Serialize for Errors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries = named(self);
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (name, nested) in entries {
            map.serialize_entry(name, nested)?;
        }
        map.end()
    }
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Errors(errors) => errors.serialize(serializer),
            Self::Value { name, nested } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(&**name, &**nested)?;
                map.end()
            }
            Self::Index { index, nested } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(&index.to_string(), &**nested)?;
                map.end()
            }
            Self::Wrap(nested) => nested.serialize(serializer),
            Self::Rule(_) => serializer.collect_str(self),
        }
    }
}

impl Errors {
    /// Converts the aggregate to its field-path tree.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Object(
            named(self)
                .into_iter()
                .map(|(name, nested)| (name.to_owned(), nested.to_json_value()))
                .collect(),
        )
    }
}

impl Error {
    /// Converts the error to its field-path tree.
    ///
    /// A bare leaf becomes a JSON string; see the module docs for the full
    /// encoding.
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::Errors(errors) => errors.to_json_value(),
            Self::Value { name, nested } => single(name.to_string(), nested),
            Self::Index { index, nested } => single(index.to_string(), nested),
            Self::Wrap(nested) => nested.to_json_value(),
            Self::Rule(_) => serde_json::Value::String(self.to_string()),
        }
    }
}

fn single(key: String, nested: &Error) -> serde_json::Value {
    let mut map = serde_json::Map::with_capacity(1);
    map.insert(key, nested.to_json_value());
    serde_json::Value::Object(map)
}

// ============================================================================
// TESTS
// ============================================================================

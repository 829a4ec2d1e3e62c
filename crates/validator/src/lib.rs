//! # fieldcheck-validator
//!
//! Composable rule chains for structured data, with failures that remember
//! where they happened.
//!
//! ## Quick Start
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! struct Endpoint {
//!     host: String,
//!     port: u16,
//!     tags: Option<Vec<String>>,
//! }
//!
//! impl Validatable for Endpoint {
//!     fn validate(&self) -> Result<(), Error> {
//!         validate_all!(
//!             Validator::new(&self.host, "host").required(true).length(1, Some(253)),
//!             Validator::new(&self.port, "port").between_or_equal(1, 65535),
//!             Validator::new(&self.tags, "tags")
//!                 .nil_or_not_empty(true)
//!                 .dive(Validator::unbound().required(true)),
//!         )
//!     }
//! }
//!
//! let endpoint = Endpoint {
//!     host: String::new(),
//!     port: 0,
//!     tags: Some(vec![String::from("edge"), String::new()]),
//! };
//!
//! let error = endpoint.validate().unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "host: cannot be blank; port: must inclusively be between 1 and 65535; tags: [1]: cannot be blank"
//! );
//! assert_eq!(
//!     error.to_json_value(),
//!     serde_json::json!({
//!         "host": "cannot be blank",
//!         "port": "must inclusively be between 1 and 65535",
//!         "tags": {"1": "cannot be blank"},
//!     })
//! );
//! ```
//!
//! ## Building Blocks
//!
//! - [`Rule`](foundation::Rule): the atomic check. Write one by hand, with
//!   [`rule!`], or from a closure with [`rule_fn`](combinators::rule_fn).
//! - [`Validator`](chain::Validator): an ordered chain of rules bound to one
//!   named value. Stops at the first failure.
//! - [`all`](chain::all) / [`validate_all!`]: run many validators and keep
//!   every failure.
//! - [`Error`](foundation::Error): the failure tree. `Display` gives the flat
//!   message, `Serialize` gives the field-path object.
//!
//! ## Features
//!
//! - `temporal` (default): time rules over `chrono::DateTime`.

pub mod chain;
pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

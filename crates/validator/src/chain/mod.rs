//! Chain builder and aggregation
//!
//! - [`Validator`]: attaches rules to one named value and evaluates them in order
//! - [`all`] / [`collect`]: run many independent validators and aggregate the failures

pub mod aggregate;
pub mod validator;

pub use aggregate::{all, collect};
pub use validator::Validator;

//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck_validator::prelude::*;` import that
//! brings in the traits, the error types, the chain builder, every built-in
//! rule and the combinators.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let port = 0_u16;
//! let result = Validator::new(&port, "port").by(greater(0)).valid();
//! assert_eq!(result.unwrap_err().code(), Some("greater"));
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, capabilities
// ============================================================================

pub use crate::foundation::{
    Elements, Error, Errors, Measured, Nilable, Ordered, Rule, RuleError, Valid, Validatable,
    ValidationResult, ZeroComparable,
};

// ============================================================================
// CHAIN: Builder and aggregation
// ============================================================================

pub use crate::chain::{Validator, all, collect};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Function rules, dives, nested validation
// ============================================================================

pub use crate::combinators::{
    Dive, DiveDeref, Nested, Optional, RuleFn, dive, dive_deref, nested, optional, rule_fn,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{rule, validate_all};

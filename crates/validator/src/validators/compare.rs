//! Ordered comparison rules
//!
//! Single-bound comparisons ([`Equal`], [`Less`], [`LessOrEqual`],
//! [`Greater`], [`GreaterOrEqual`]) and the two range rules ([`Between`],
//! [`BetweenOrEqual`]).
//!
//! Range bounds are not checked at construction. A range whose lower bound
//! exceeds its upper bound accepts nothing, so every value fails.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::foundation::Rule;
//! use fieldcheck_validator::validators::{between, greater_or_equal};
//!
//! assert!(greater_or_equal(18).validate(&18).is_ok());
//! assert!(between(0.0, 1.0).validate(&1.0).is_err());
//! ```

use crate::foundation::{Ordered, RuleError};

// ============================================================================
// SINGLE BOUND
// ============================================================================

crate::rule! {
    /// Accepts only values equal to `bound`.
    pub Equal<T: Ordered> { bound: T } for T;
    rule(self, input) { *input == self.bound }
    failure(bound) { RuleError::new("equal", format!("must be equal to {bound}")) }
    fn equal(bound: T);
}

crate::rule! {
    /// Accepts values strictly less than `bound`.
    pub Less<T: Ordered> { bound: T } for T;
    rule(self, input) { *input < self.bound }
    failure(bound) { RuleError::new("less", format!("must be less than {bound}")) }
    fn less(bound: T);
}

crate::rule! {
    /// Accepts values less than or equal to `bound`.
    pub LessOrEqual<T: Ordered> { bound: T } for T;
    rule(self, input) { *input <= self.bound }
    failure(bound) { RuleError::new("less_equal", format!("must be no greater than {bound}")) }
    fn less_or_equal(bound: T);
}

crate::rule! {
    /// Accepts values strictly greater than `bound`.
    pub Greater<T: Ordered> { bound: T } for T;
    rule(self, input) { *input > self.bound }
    failure(bound) { RuleError::new("greater", format!("must be greater than {bound}")) }
    fn greater(bound: T);
}

crate::rule! {
    /// Accepts values greater than or equal to `bound`.
    pub GreaterOrEqual<T: Ordered> { bound: T } for T;
    rule(self, input) { *input >= self.bound }
    failure(bound) { RuleError::new("greater_equal", format!("must be no less than {bound}")) }
    fn greater_or_equal(bound: T);
}

// ============================================================================
// RANGES
// ============================================================================

crate::rule! {
    /// Accepts values strictly inside `(min, max)`.
    pub Between<T: Ordered> { min: T, max: T } for T;
    rule(self, input) { self.min < *input && *input < self.max }
    failure(min, max) {
        RuleError::new("between", format!("must exclusively be between {min} and {max}"))
    }
    fn between(min: T, max: T);
}

crate::rule! {
    /// Accepts values inside `[min, max]`, bounds included.
    pub BetweenOrEqual<T: Ordered> { min: T, max: T } for T;
    rule(self, input) { self.min <= *input && *input <= self.max }
    failure(min, max) {
        RuleError::new("between_equal", format!("must inclusively be between {min} and {max}"))
    }
    fn between_or_equal(min: T, max: T);
}

// ============================================================================
// TESTS
// ============================================================================

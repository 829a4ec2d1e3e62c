//! Time rules over [`chrono::DateTime`]
//!
//! Timestamps compare by instant, so two values in different offsets that
//! denote the same moment are equal. Bounds render in RFC 3339 inside failure
//! messages. The zero timestamp is the Unix epoch.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use fieldcheck_validator::foundation::Rule;
//! use fieldcheck_validator::validators::less_time;
//!
//! let deadline = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
//! let rule = less_time(deadline);
//!
//! let late = Utc.with_ymd_and_hms(2031, 6, 1, 0, 0, 0).unwrap();
//! assert_eq!(
//!     rule.validate(&late).unwrap_err().to_string(),
//!     "must be less than 2030-01-01T00:00:00+00:00"
//! );
//! ```

use std::marker::PhantomData;

use chrono::{DateTime, TimeZone};

use crate::foundation::{Error, Rule, RuleError};

fn rfc3339<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.fixed_offset().to_rfc3339()
}

// ============================================================================
// SINGLE BOUND
// ============================================================================

crate::rule! {
    /// Accepts only the instant `bound`.
    pub EqualTime<Tz: TimeZone> { bound: DateTime<Tz> } for DateTime<Tz>;
    rule(self, input) { *input == self.bound }
    failure(bound) { RuleError::new("equal", format!("must be equal to {}", rfc3339(bound))) }
    fn equal_time(bound: DateTime<Tz>);
}

crate::rule! {
    /// Accepts instants strictly before `bound`.
    pub LessTime<Tz: TimeZone> { bound: DateTime<Tz> } for DateTime<Tz>;
    rule(self, input) { *input < self.bound }
    failure(bound) { RuleError::new("less", format!("must be less than {}", rfc3339(bound))) }
    fn less_time(bound: DateTime<Tz>);
}

crate::rule! {
    /// Accepts instants at or before `bound`.
    pub LessOrEqualTime<Tz: TimeZone> { bound: DateTime<Tz> } for DateTime<Tz>;
    rule(self, input) { *input <= self.bound }
    failure(bound) {
        RuleError::new("less_equal", format!("must be no greater than {}", rfc3339(bound)))
    }
    fn less_or_equal_time(bound: DateTime<Tz>);
}

crate::rule! {
    /// Accepts instants strictly after `bound`.
    pub GreaterTime<Tz: TimeZone> { bound: DateTime<Tz> } for DateTime<Tz>;
    rule(self, input) { *input > self.bound }
    failure(bound) { RuleError::new("greater", format!("must be greater than {}", rfc3339(bound))) }
    fn greater_time(bound: DateTime<Tz>);
}

crate::rule! {
    /// Accepts instants at or after `bound`.
    pub GreaterOrEqualTime<Tz: TimeZone> { bound: DateTime<Tz> } for DateTime<Tz>;
    rule(self, input) { *input >= self.bound }
    failure(bound) {
        RuleError::new("greater_equal", format!("must be no less than {}", rfc3339(bound)))
    }
    fn greater_or_equal_time(bound: DateTime<Tz>);
}

// ============================================================================
// RANGES
// ============================================================================

crate::rule! {
    /// Accepts instants strictly inside `(min, max)`.
    pub BetweenTime<Tz: TimeZone> { min: DateTime<Tz>, max: DateTime<Tz> } for DateTime<Tz>;
    rule(self, input) { self.min < *input && *input < self.max }
    failure(min, max) {
        RuleError::new(
            "between",
            format!("must exclusively be between {} and {}", rfc3339(min), rfc3339(max)),
        )
    }
    fn between_time(min: DateTime<Tz>, max: DateTime<Tz>);
}

crate::rule! {
    /// Accepts instants inside `[min, max]`, bounds included.
    pub BetweenOrEqualTime<Tz: TimeZone> { min: DateTime<Tz>, max: DateTime<Tz> } for DateTime<Tz>;
    rule(self, input) { self.min <= *input && *input <= self.max }
    failure(min, max) {
        RuleError::new(
            "between_equal",
            format!("must inclusively be between {} and {}", rfc3339(min), rfc3339(max)),
        )
    }
    fn between_or_equal_time(min: DateTime<Tz>, max: DateTime<Tz>);
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

crate::rule! {
    /// Accepts only instants contained in `elements`.
    pub InTime<Tz: TimeZone> { elements: Vec<DateTime<Tz>> } for DateTime<Tz>;
    rule(self, input) { self.elements.contains(input) }
    failure() { RuleError::new("in", "must be a valid value") }
    fn in_time(elements: Vec<DateTime<Tz>>);
}

crate::rule! {
    /// Rejects instants contained in `elements`.
    pub NotInTime<Tz: TimeZone> { elements: Vec<DateTime<Tz>> } for DateTime<Tz>;
    rule(self, input) { !self.elements.contains(input) }
    failure() { RuleError::new("not_in", "must not be in list") }
    fn not_in_time(elements: Vec<DateTime<Tz>>);
}

// ============================================================================
// REQUIRED
// ============================================================================

/// Rejects the Unix epoch while `condition` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequiredTime<Tz> {
    condition: bool,
    _phantom: PhantomData<fn(&Tz)>,
}

impl<Tz: TimeZone> Rule for RequiredTime<Tz> {
    type Input = DateTime<Tz>;

    fn validate(&self, input: &Self::Input) -> Result<(), Error> {
        if self.condition && input.timestamp() == 0 && input.timestamp_subsec_nanos() == 0 {
            return Err(super::required::blank());
        }
        Ok(())
    }
}

/// Creates a [`RequiredTime`] rule.
#[must_use]
pub fn required_time<Tz: TimeZone>(condition: bool) -> RequiredTime<Tz> {
    RequiredTime {
        condition,
        _phantom: PhantomData,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use pretty_assertions::assert_eq;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_compares_by_instant_across_offsets() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let noon_utc = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let same_instant = noon_utc.with_timezone(&plus_two);

        assert!(equal_time(noon_utc.fixed_offset()).validate(&same_instant).is_ok());
        assert!(less_time(noon_utc.fixed_offset()).validate(&same_instant).is_err());
    }

    #[test]
    fn test_between_time_bounds() {
        let rule = between_time(at(8), at(10));
        assert!(rule.validate(&at(8)).is_err());
        assert!(rule.validate(&at(9)).is_ok());
        assert!(rule.validate(&at(10)).is_err());

        let rule = between_or_equal_time(at(8), at(10));
        assert!(rule.validate(&at(8)).is_ok());
        assert!(rule.validate(&at(10)).is_ok());
        assert!(rule.validate(&at(11)).is_err());
    }

    #[test]
    fn test_messages_render_rfc3339() {
        let error = between_time(at(8), at(10)).validate(&at(11)).unwrap_err();
        assert_eq!(error.code(), Some("between"));
        assert_eq!(
            error.to_string(),
            "must exclusively be between 2024-05-01T08:00:00+00:00 and 2024-05-01T10:00:00+00:00"
        );
        assert_eq!(
            greater_or_equal_time(at(8)).validate(&at(7)).unwrap_err().code(),
            Some("greater_equal")
        );
    }

    #[test]
    fn test_membership() {
        assert!(in_time(vec![at(1), at(2)]).validate(&at(2)).is_ok());
        assert!(in_time(vec![at(1)]).validate(&at(2)).is_err());
        assert!(not_in_time(vec![at(1)]).validate(&at(1)).is_err());
    }

    #[test]
    fn test_required_time_rejects_epoch() {
        let epoch = DateTime::<Utc>::UNIX_EPOCH;
        assert!(required_time(true).validate(&epoch).is_err());
        assert!(required_time(false).validate(&epoch).is_ok());
        assert!(required_time(true).validate(&at(0)).is_ok());
    }
}

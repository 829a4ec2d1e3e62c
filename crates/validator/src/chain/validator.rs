//! The chain builder
//!
//! A [`Validator`] is an ordered list of rules, optionally bound to a named
//! value. Rules run in attachment order and evaluation stops at the first
//! failure. [`Validator::valid`] attributes that failure to the bound name;
//! [`Validator::evaluate`] returns it as is, so the same chain can serve as a
//! top-level field check and as a reusable nested rule.
//!
//! Shorthands are only available when the bound type has the matching
//! capability: `less` needs [`Ordered`], `required` needs
//! [`ZeroComparable`], `dive` needs [`Elements`], and so on.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let tags = vec![String::from("prod"), String::new()];
//!
//! let result = Validator::new(&tags, "tags")
//!     .length(1, Some(8))
//!     .dive(Validator::unbound().required(true))
//!     .valid();
//!
//! assert_eq!(result.unwrap_err().to_string(), "tags: [1]: cannot be blank");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

#[cfg(feature = "temporal")]
use chrono::{DateTime, TimeZone};

use crate::combinators::{Dive, DiveDeref, Optional, RuleFn};
use crate::foundation::{
    Elements, Error, Measured, Nilable, Ordered, Rule, Valid, Validatable, ZeroComparable,
};
use crate::validators;

// ============================================================================
// VALIDATOR
// ============================================================================

/// An ordered, skippable chain of rules over one value.
///
/// The builder is consuming: every method takes `self` and returns the
/// updated chain. Once [`skip_when`](Self::skip_when) latches, further
/// attachments are ignored and evaluation succeeds immediately.
pub struct Validator<'a, T: ?Sized> {
    target: Option<(&'a T, Cow<'static, str>)>,
    rules: Vec<Box<dyn Rule<Input = T> + 'a>>,
    self_check: Option<fn(&T) -> Result<(), Error>>,
    skip: bool,
    wrap: bool,
}

impl<'a, T: ?Sized + 'a> Validator<'a, T> {
    /// Creates a validator bound to `value`, reported as `name`.
    ///
    /// `name` must not be empty.
    pub fn new(value: &'a T, name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "validator name must not be empty");
        Self {
            target: Some((value, name)),
            ..Self::unbound()
        }
    }

    /// Creates a validator with no target, for use as a nested rule set.
    pub fn unbound() -> Self {
        Self {
            target: None,
            rules: Vec::new(),
            self_check: None,
            skip: false,
            wrap: false,
        }
    }

    /// Returns the bound name, if any.
    pub fn name(&self) -> Option<&str> {
        self.target.as_ref().map(|(_, name)| &**name)
    }

    /// Returns true once a skip condition has latched.
    pub fn is_skipped(&self) -> bool {
        self.skip
    }

    /// Returns the number of attached rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule is attached.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    // ------------------------------------------------------------------------
    // Composition
    // ------------------------------------------------------------------------

    /// Latches the skip flag when `condition` is true. The latch never resets.
    pub fn skip_when(mut self, condition: bool) -> Self {
        self.skip |= condition;
        self
    }

    /// Wraps failures that come from one recursion level down.
    ///
    /// Applies to the self-validation of [`nested`](Self::nested) chains and
    /// to dives attached after this call.
    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    /// Attaches a rule.
    pub fn by<R>(mut self, rule: R) -> Self
    where
        R: Rule<Input = T> + 'a,
    {
        if !self.skip {
            self.rules.push(Box::new(rule));
        }
        self
    }

    /// Attaches several boxed rules, in order.
    pub fn by_all<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Rule<Input = T> + 'a>>,
    {
        if !self.skip {
            self.rules.extend(rules);
        }
        self
    }

    /// Attaches a plain function as a rule.
    pub fn with<F>(self, check: F) -> Self
    where
        F: Fn(&T) -> Result<(), Error> + 'a,
    {
        self.by(RuleFn::new(check))
    }

    /// Attaches several plain functions, in order.
    pub fn with_all<I, F>(mut self, checks: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Fn(&T) -> Result<(), Error> + 'a,
    {
        for check in checks {
            self = self.with(check);
        }
        self
    }

    /// Attaches `if_true` only when `condition` holds.
    pub fn when<R>(self, condition: bool, if_true: R) -> Self
    where
        R: Rule<Input = T> + 'a,
    {
        if condition { self.by(if_true) } else { self }
    }

    /// Attaches `if_true` when `condition` holds, `if_false` otherwise.
    pub fn when_else<R, E>(self, condition: bool, if_true: R, if_false: E) -> Self
    where
        R: Rule<Input = T> + 'a,
        E: Rule<Input = T> + 'a,
    {
        if condition {
            self.by(if_true)
        } else {
            self.by(if_false)
        }
    }

    /// Attaches [`RequiredWith`](validators::RequiredWith): `is_default` decides
    /// what counts as blank.
    pub fn required_with<F>(self, condition: bool, is_default: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        self.by(validators::required_with(condition, is_default))
    }

    // ------------------------------------------------------------------------
    // Evaluation
    // ------------------------------------------------------------------------

    /// Runs the chain against the bound value and attributes a failure to the
    /// bound name.
    ///
    /// An unbound validator has nothing to check and returns `Ok(())`.
    pub fn valid(&self) -> Result<(), Error> {
        let Some((value, name)) = &self.target else {
            tracing::warn!("valid() called on an unbound validator, use evaluate() instead");
            return Ok(());
        };

        self.run(value, self.wrap).map_err(|error| {
            tracing::trace!(
                field = %name,
                code = error.code().unwrap_or("aggregate"),
                "validation failed"
            );
            Error::value(name.clone(), error)
        })
    }

    /// Runs the chain against `input` without name attribution.
    pub fn evaluate(&self, input: &T) -> Result<(), Error> {
        self.run(input, false)
    }

    fn run(&self, input: &T, wrap_self_check: bool) -> Result<(), Error> {
        if self.skip {
            return Ok(());
        }
        for rule in &self.rules {
            rule.validate(input)?;
        }
        if let Some(check) = self.self_check {
            check(input).map_err(|error| {
                if wrap_self_check {
                    Error::wrap(error)
                } else {
                    error
                }
            })?;
        }
        Ok(())
    }
}

// ============================================================================
// SELF-VALIDATING VALUES
// ============================================================================

impl<'a, T: Validatable + ?Sized + 'a> Validator<'a, T> {
    /// Creates a bound validator that also runs the value's own
    /// [`Validatable::validate`] once every attached rule has passed.
    ///
    /// ```
    /// use fieldcheck_validator::prelude::*;
    ///
    /// struct Device {
    ///     model: String,
    /// }
    ///
    /// impl Validatable for Device {
    ///     fn validate(&self) -> Result<(), Error> {
    ///         validate_all!(Validator::new(&self.model, "model").required(true))
    ///     }
    /// }
    ///
    /// let device = Device { model: String::new() };
    /// let error = Validator::nested(&device, "device").wrap().valid().unwrap_err();
    /// assert_eq!(error.to_string(), "device: (model: cannot be blank)");
    /// ```
    pub fn nested(value: &'a T, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            self_check: Some(<T as Validatable>::validate),
            ..Self::new(value, name)
        }
    }

    /// Creates an unbound validator that runs the value's own validation last.
    pub fn nested_unbound() -> Self {
        Self {
            self_check: Some(<T as Validatable>::validate),
            ..Self::unbound()
        }
    }
}

// ============================================================================
// SHORTHANDS: ZERO VALUE
// ============================================================================

impl<'a, T: ZeroComparable + 'a> Validator<'a, T> {
    /// Attaches [`Required`](validators::Required).
    pub fn required(self, condition: bool) -> Self {
        self.by(validators::required(condition))
    }
}

// ============================================================================
// SHORTHANDS: ORDERED
// ============================================================================

impl<'a, T: Ordered + 'a> Validator<'a, T> {
    /// Attaches [`Equal`](validators::Equal).
    pub fn equal(self, bound: T) -> Self {
        self.by(validators::equal(bound))
    }

    /// Attaches [`Less`](validators::Less).
    pub fn less(self, bound: T) -> Self {
        self.by(validators::less(bound))
    }

    /// Attaches [`LessOrEqual`](validators::LessOrEqual).
    pub fn less_or_equal(self, bound: T) -> Self {
        self.by(validators::less_or_equal(bound))
    }

    /// Attaches [`Greater`](validators::Greater).
    pub fn greater(self, bound: T) -> Self {
        self.by(validators::greater(bound))
    }

    /// Attaches [`GreaterOrEqual`](validators::GreaterOrEqual).
    pub fn greater_or_equal(self, bound: T) -> Self {
        self.by(validators::greater_or_equal(bound))
    }

    /// Attaches [`Between`](validators::Between).
    pub fn between(self, min: T, max: T) -> Self {
        self.by(validators::between(min, max))
    }

    /// Attaches [`BetweenOrEqual`](validators::BetweenOrEqual).
    pub fn between_or_equal(self, min: T, max: T) -> Self {
        self.by(validators::between_or_equal(min, max))
    }
}

// ============================================================================
// SHORTHANDS: MEMBERSHIP
// ============================================================================

impl<'a, T: PartialEq + 'a> Validator<'a, T> {
    /// Attaches [`In`](validators::In).
    pub fn is_in(self, elements: impl IntoIterator<Item = T>) -> Self {
        self.by(validators::is_in(elements.into_iter().collect()))
    }

    /// Attaches [`NotIn`](validators::NotIn).
    pub fn not_in(self, elements: impl IntoIterator<Item = T>) -> Self {
        self.by(validators::not_in(elements.into_iter().collect()))
    }
}

// ============================================================================
// SHORTHANDS: NIL AND LENGTH
// ============================================================================

impl<'a, T: Nilable + ?Sized + 'a> Validator<'a, T> {
    /// Attaches [`Nil`](validators::Nil).
    pub fn nil(self, condition: bool) -> Self {
        self.by(validators::nil(condition))
    }

    /// Attaches [`NotNil`](validators::NotNil).
    pub fn not_nil(self, condition: bool) -> Self {
        self.by(validators::not_nil(condition))
    }
}

impl<'a, T: Measured + ?Sized + 'a> Validator<'a, T> {
    /// Attaches [`Empty`](validators::Empty).
    pub fn empty(self, condition: bool) -> Self {
        self.by(validators::empty(condition))
    }

    /// Attaches [`NotEmpty`](validators::NotEmpty).
    pub fn not_empty(self, condition: bool) -> Self {
        self.by(validators::not_empty(condition))
    }

    /// Attaches [`Length`](validators::Length). `max: None` is unbounded.
    pub fn length(self, min: usize, max: Option<usize>) -> Self {
        self.by(validators::length(min, max))
    }
}

impl<'a, T: Nilable + Measured + ?Sized + 'a> Validator<'a, T> {
    /// Attaches [`NilOrNotEmpty`](validators::NilOrNotEmpty).
    pub fn nil_or_not_empty(self, condition: bool) -> Self {
        self.by(validators::nil_or_not_empty(condition))
    }
}

// ============================================================================
// SHORTHANDS: DIVE
// ============================================================================

impl<'a, T: Elements + ?Sized + 'a> Validator<'a, T> {
    /// Runs `rule` on every element, stopping at the first failing one.
    ///
    /// Honors [`wrap`](Self::wrap) if it was called before this method.
    pub fn dive<R>(self, rule: R) -> Self
    where
        R: Rule<Input = T::Item> + 'a,
    {
        let wrap = self.wrap;
        self.by(Dive::new(rule).with_wrap(wrap))
    }

    /// Runs several rules on every element, in order, stopping at the first
    /// failing element and, within it, at the first failing rule.
    ///
    /// Equivalent to diving with an unbound chain built from `rules`.
    pub fn dive_all<I>(self, rules: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Rule<Input = T::Item> + 'a>>,
        T::Item: 'a,
    {
        self.dive(Validator::unbound().by_all(rules))
    }

    /// Like [`dive`](Self::dive), but hands `rule` the pointee of each element.
    pub fn dive_deref<R>(self, rule: R) -> Self
    where
        R: Rule + 'a,
        T::Item: Deref<Target = R::Input>,
    {
        let wrap = self.wrap;
        self.by(DiveDeref::new(rule).with_wrap(wrap))
    }
}

impl<'a, T: 'a> Validator<'a, Option<T>> {
    /// Runs `rule` against the contained value when present. `None` passes.
    ///
    /// The failure is attributed to the bound name only, with no index layer.
    pub fn dive_some<R>(self, rule: R) -> Self
    where
        R: Rule<Input = T> + 'a,
    {
        self.by(Optional::new(rule))
    }
}

// ============================================================================
// SHORTHANDS: TIME
// ============================================================================

#[cfg(feature = "temporal")]
impl<'a, Tz: TimeZone + 'a> Validator<'a, DateTime<Tz>> {
    /// Attaches [`RequiredTime`](validators::RequiredTime).
    pub fn required_time(self, condition: bool) -> Self {
        self.by(validators::required_time(condition))
    }

    /// Attaches [`EqualTime`](validators::EqualTime).
    pub fn equal_time(self, bound: DateTime<Tz>) -> Self {
        self.by(validators::equal_time(bound))
    }

    /// Attaches [`LessTime`](validators::LessTime).
    pub fn less_time(self, bound: DateTime<Tz>) -> Self {
        self.by(validators::less_time(bound))
    }

    /// Attaches [`LessOrEqualTime`](validators::LessOrEqualTime).
    pub fn less_or_equal_time(self, bound: DateTime<Tz>) -> Self {
        self.by(validators::less_or_equal_time(bound))
    }

    /// Attaches [`GreaterTime`](validators::GreaterTime).
    pub fn greater_time(self, bound: DateTime<Tz>) -> Self {
        self.by(validators::greater_time(bound))
    }

    /// Attaches [`GreaterOrEqualTime`](validators::GreaterOrEqualTime).
    pub fn greater_or_equal_time(self, bound: DateTime<Tz>) -> Self {
        self.by(validators::greater_or_equal_time(bound))
    }

    /// Attaches [`BetweenTime`](validators::BetweenTime).
    pub fn between_time(self, min: DateTime<Tz>, max: DateTime<Tz>) -> Self {
        self.by(validators::between_time(min, max))
    }

    /// Attaches [`BetweenOrEqualTime`](validators::BetweenOrEqualTime).
    pub fn between_or_equal_time(self, min: DateTime<Tz>, max: DateTime<Tz>) -> Self {
        self.by(validators::between_or_equal_time(min, max))
    }

    /// Attaches [`InTime`](validators::InTime).
    pub fn in_time(self, elements: impl IntoIterator<Item = DateTime<Tz>>) -> Self {
        self.by(validators::in_time(elements.into_iter().collect()))
    }

    /// Attaches [`NotInTime`](validators::NotInTime).
    pub fn not_in_time(self, elements: impl IntoIterator<Item = DateTime<Tz>>) -> Self {
        self.by(validators::not_in_time(elements.into_iter().collect()))
    }
}

// ============================================================================
// TRAIT IMPLS
// ============================================================================

impl<T: ?Sized> Rule for Validator<'_, T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), Error> {
        self.evaluate(input)
    }
}

impl<T: ?Sized> Valid for Validator<'_, T> {
    fn valid(&self) -> Result<(), Error> {
        Self::valid(self)
    }
}

impl<T: ?Sized> fmt::Debug for Validator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("name", &self.name())
            .field("rules", &self.rules.len())
            .field("nested", &self.self_check.is_some())
            .field("skip", &self.skip)
            .field("wrap", &self.wrap)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{greater, less};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    struct Endpoint {
        host: String,
        port: u16,
    }

    impl Validatable for Endpoint {
        fn validate(&self) -> Result<(), Error> {
            crate::validate_all!(
                Validator::new(&self.host, "host").required(true),
                Validator::new(&self.port, "port").greater(0),
            )
        }
    }

    #[test]
    fn test_stops_at_first_failing_rule() {
        let calls = Cell::new(0);
        let count = |_: &i32| {
            calls.set(calls.get() + 1);
            Ok(())
        };

        let value = 50;
        let error = Validator::new(&value, "value")
            .less(10)
            .with(count)
            .valid()
            .unwrap_err();

        assert_eq!(error.to_string(), "value: must be less than 10");
        assert_eq!(error.name(), Some("value"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_no_rules_is_success() {
        let value = 0;
        assert!(Validator::new(&value, "value").valid().is_ok());
    }

    #[test]
    fn test_skip_latches() {
        let value = 0_u32;
        let validator = Validator::new(&value, "value")
            .skip_when(true)
            .required(true)
            .skip_when(false)
            .greater(5);

        assert!(validator.is_skipped());
        assert!(validator.is_empty());
        assert!(validator.valid().is_ok());
    }

    #[test]
    fn test_skip_short_circuits_rules_attached_before() {
        let value = 0_u32;
        let validator = Validator::new(&value, "value").required(true).skip_when(true);
        assert_eq!(validator.len(), 1);
        assert!(validator.valid().is_ok());
    }

    #[test]
    fn test_when_branches() {
        let value = 7;
        assert!(Validator::new(&value, "v").when(false, less(5)).valid().is_ok());
        assert!(Validator::new(&value, "v").when(true, less(5)).valid().is_err());

        let error = Validator::new(&value, "v")
            .when_else(false, less(5), greater(10))
            .valid()
            .unwrap_err();
        assert_eq!(error.code(), Some("greater"));
    }

    #[test]
    fn test_evaluate_does_not_attribute_name() {
        let chain = Validator::unbound().between(1, 3);
        let error = chain.evaluate(&5).unwrap_err();
        assert_eq!(error.to_string(), "must exclusively be between 1 and 3");
        assert_eq!(error.name(), None);
    }

    #[test]
    fn test_unbound_valid_is_noop() {
        let chain: Validator<'_, i32> = Validator::unbound().less(0);
        assert!(chain.valid().is_ok());
    }

    #[test]
    fn test_by_all_and_with_all() {
        let value = 4;
        let rules: Vec<Box<dyn Rule<Input = i32> + '_>> =
            vec![Box::new(greater(0)), Box::new(less(3))];
        let error = Validator::new(&value, "n").by_all(rules).valid().unwrap_err();
        assert_eq!(error.code(), Some("less"));

        let checks: [fn(&i32) -> Result<(), Error>; 2] = [
            |n: &i32| {
                if *n > 0 {
                    Ok(())
                } else {
                    Err(Error::rule("positive", "must be positive"))
                }
            },
            |n: &i32| {
                if n % 2 == 1 {
                    Ok(())
                } else {
                    Err(Error::rule("odd", "must be odd"))
                }
            },
        ];
        let error = Validator::new(&value, "n").with_all(checks).valid().unwrap_err();
        assert_eq!(error.code(), Some("odd"));
    }

    #[test]
    fn test_nested_wrap_adds_one_layer() {
        let endpoint = Endpoint {
            host: String::new(),
            port: 80,
        };

        let wrapped = Validator::nested(&endpoint, "endpoint").wrap().valid().unwrap_err();
        assert_eq!(wrapped.to_string(), "endpoint: (host: cannot be blank)");

        let plain = Validator::nested(&endpoint, "endpoint").valid().unwrap_err();
        assert_eq!(plain.to_string(), "endpoint: host: cannot be blank");
    }

    #[test]
    fn test_nested_rules_run_before_self_check() {
        let endpoint = Endpoint {
            host: String::new(),
            port: 0,
        };
        let error = Validator::nested(&endpoint, "endpoint")
            .with(|p: &Endpoint| {
                if p.port == 0 {
                    Err(Error::rule("closed", "port is closed"))
                } else {
                    Ok(())
                }
            })
            .valid()
            .unwrap_err();
        assert_eq!(error.to_string(), "endpoint: port is closed");
    }

    #[test]
    fn test_dive_with_nested_chain_and_wrap() {
        let endpoints = vec![
            Endpoint {
                host: "a".into(),
                port: 1,
            },
            Endpoint {
                host: "b".into(),
                port: 0,
            },
        ];
        let error = Validator::new(&endpoints, "endpoints")
            .wrap()
            .dive(Validator::nested_unbound())
            .valid()
            .unwrap_err();
        assert_eq!(error.to_string(), "endpoints: [1]: (port: must be greater than 0)");
    }

    #[test]
    fn test_dive_deref_on_strings() {
        let names = vec![String::from("ok"), String::from("way too long")];
        let error = Validator::new(&names, "names")
            .dive_deref(Validator::<str>::unbound().length(1, Some(4)))
            .valid()
            .unwrap_err();
        assert_eq!(error.to_string(), "names: [1]: the length must be between 1 and 4");
    }

    #[test]
    fn test_dive_all_runs_rules_in_order_per_element() {
        let names = vec![String::from("ok"), String::new(), String::from("way too long")];
        let rules: Vec<Box<dyn Rule<Input = String> + '_>> = vec![
            Box::new(validators::required::<String>(true)),
            Box::new(validators::length::<String>(1, Some(4))),
        ];

        let error = Validator::new(&names, "names").dive_all(rules).valid().unwrap_err();
        assert_eq!(error.to_string(), "names: [1]: cannot be blank");
        assert_eq!(error.code(), Some("required"));
    }

    #[test]
    fn test_dive_some_checks_present_value_only() {
        let absent: Option<u16> = None;
        assert!(Validator::new(&absent, "port").dive_some(greater(0)).valid().is_ok());

        let closed = Some(0_u16);
        let error = Validator::new(&closed, "port").dive_some(greater(0)).valid().unwrap_err();
        assert_eq!(error, Error::value("port", Error::rule("greater", "must be greater than 0")));

        let open = Some(443_u16);
        assert!(Validator::new(&open, "port").dive_some(greater(0)).valid().is_ok());
    }

    #[test]
    fn test_dive_some_with_chain_on_struct() {
        fn unprivileged(p: &Endpoint) -> Result<(), Error> {
            if p.port < 1024 {
                Err(Error::rule("privileged", "must not be a privileged port"))
            } else {
                Ok(())
            }
        }

        let absent: Option<Endpoint> = None;
        let chain = Validator::nested_unbound().with(unprivileged);
        assert!(Validator::new(&absent, "endpoint").dive_some(chain).valid().is_ok());

        let present = Some(Endpoint {
            host: String::from("db"),
            port: 22,
        });
        let chain = Validator::nested_unbound().with(unprivileged);
        let error = Validator::new(&present, "endpoint").dive_some(chain).valid().unwrap_err();
        assert_eq!(error.to_string(), "endpoint: must not be a privileged port");
    }

    #[test]
    fn test_nil_family_on_optional_collection() {
        let absent: Option<Vec<u8>> = None;
        let empty: Option<Vec<u8>> = Some(Vec::new());

        assert!(Validator::new(&absent, "a").nil_or_not_empty(true).valid().is_ok());
        assert!(Validator::new(&empty, "e").nil_or_not_empty(true).valid().is_err());
        assert!(Validator::new(&absent, "a").not_nil(true).valid().is_err());
        assert!(Validator::new(&empty, "e").nil(true).valid().is_err());
    }

    #[test]
    fn test_membership_shorthands() {
        let method = String::from("TRACE");
        let error = Validator::new(&method, "method")
            .is_in(["GET", "POST"].map(String::from))
            .valid()
            .unwrap_err();
        assert_eq!(error.to_string(), "method: must be a valid value");
    }

    #[cfg(feature = "temporal")]
    #[test]
    fn test_time_shorthands() {
        use chrono::Utc;

        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();

        let error = Validator::new(&at, "at")
            .required_time(true)
            .between_or_equal_time(start, end)
            .valid()
            .unwrap_err();
        assert_eq!(error.code(), Some("between_equal"));
        assert_eq!(error.name(), Some("at"));
    }

    #[test]
    fn test_validator_is_a_rule() {
        let inner = Validator::unbound().greater(0);
        let value = 0;
        let error = Validator::new(&value, "outer").by(inner).valid().unwrap_err();
        assert_eq!(error.to_string(), "outer: must be greater than 0");
    }
}

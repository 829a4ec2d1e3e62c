//! Macros for declaring rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: declare a complete rule (struct + `Rule` impl + factory fn)
//! - [`validate_all!`]: run several bound validators and aggregate the failures
//!
//! # Examples
//!
//! ```
//! use std::fmt::Display;
//!
//! use fieldcheck_validator::foundation::{Rule, RuleError};
//! use fieldcheck_validator::rule;
//!
//! rule! {
//!     /// Rejects values that are not a multiple of `step`.
//!     pub MultipleOf<T: Step + Display> { step: T } for T;
//!     rule(self, input) { input.fits(&self.step) }
//!     failure(step) { RuleError::new("multiple_of", format!("must be a multiple of {step}")) }
//!     fn multiple_of(step: T);
//! }
//!
//! pub trait Step {
//!     fn fits(&self, step: &Self) -> bool;
//! }
//!
//! impl Step for u32 {
//!     fn fits(&self, step: &Self) -> bool {
//!         self % step == 0
//!     }
//! }
//!
//! assert!(multiple_of(5_u32).validate(&15).is_ok());
//! assert_eq!(
//!     multiple_of(5_u32).validate(&7).unwrap_err().to_string(),
//!     "must be a multiple of 5"
//! );
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a rule: struct definition, `Rule` implementation, constructor and
/// factory function.
///
/// The failure is built once, in the constructor, from the fields named in
/// `failure(...)`. Each named field is bound by reference inside the block.
/// Evaluation only clones the prepared [`RuleError`](crate::foundation::RuleError).
///
/// `#[derive(Debug, Clone)]` is always applied.
///
/// # Variants
///
/// **Struct with fields**:
/// ```ignore
/// rule! {
///     pub MaxDepth { max: usize } for usize;
///     rule(self, input) { *input <= self.max }
///     failure(max) { RuleError::new("max_depth", format!("must be at most {max} levels deep")) }
///     fn max_depth(max: usize);
/// }
/// ```
///
/// **Generic rule** (bounds must be plain identifiers, import them first):
/// ```ignore
/// rule! {
///     pub Less<T: Ordered> { bound: T } for T;
///     rule(self, input) { *input < self.bound }
///     failure(bound) { RuleError::new("less", format!("must be less than {bound}")) }
///     fn less(bound: T);
/// }
/// ```
///
/// Omit the trailing `fn ...;` line to skip the factory function.
#[macro_export]
macro_rules! rule {
    // ── Variant 1a: Struct with fields + factory fn ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        failure($($bind:ident),* $(,)?) $failure:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            failure($($bind),*) $failure
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 1b: Struct with fields, no factory ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        failure($($bind:ident),* $(,)?) $failure:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
            failure: $crate::foundation::RuleError,
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                let failure = {
                    $(let $bind = &$bind;)*
                    $failure
                };
                Self { $($field,)+ failure }
            }
        }

        impl $crate::foundation::Rule for $name {
            type Input = $input;

            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::Error> {
                if $rule {
                    Ok(())
                } else {
                    Err($crate::foundation::Error::Rule($self_.failure.clone()))
                }
            }
        }
    };

    // ── Variant 2a: Generic struct + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        failure($($bind:ident),* $(,)?) $failure:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name<$gen: $first_bound $(+ $rest_bound)*>
                { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            failure($($bind),*) $failure
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Generic struct, no factory ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        failure($($bind:ident),* $(,)?) $failure:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen: $first_bound $(+ $rest_bound)*> {
            $($field: $fty,)+
            failure: $crate::foundation::RuleError,
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                let failure = {
                    $(let $bind = &$bind;)*
                    $failure
                };
                Self { $($field,)+ failure }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Rule for $name<$gen> {
            type Input = $input;

            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::Error> {
                if $rule {
                    Ok(())
                } else {
                    Err($crate::foundation::Error::Rule($self_.failure.clone()))
                }
            }
        }
    };
}

// ============================================================================
// VALIDATE ALL MACRO
// ============================================================================

/// Runs every bound validator and aggregates the failures.
///
/// Expands to [`chain::all`](crate::chain::all) over the given expressions.
/// Every validator runs; zero failures is `Ok(())`.
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let name = String::from("sensor");
/// let retries = 12_u8;
///
/// let result = validate_all!(
///     Validator::new(&name, "name").required(true),
///     Validator::new(&retries, "retries").less_or_equal(10),
/// );
/// assert_eq!(result.unwrap_err().to_string(), "retries: must be no greater than 10");
/// ```
#[macro_export]
macro_rules! validate_all {
    ($($validator:expr),* $(,)?) => {
        $crate::chain::all(&[$(&$validator as &dyn $crate::foundation::Valid),*])
    };
}

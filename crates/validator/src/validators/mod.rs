//! Built-in rules
//!
//! # Categories
//!
//! - **Comparison**: [`Equal`], [`Less`], [`LessOrEqual`], [`Greater`],
//!   [`GreaterOrEqual`], [`Between`], [`BetweenOrEqual`]
//! - **Membership**: [`In`], [`NotIn`]
//! - **Required-ness**: [`Required`], [`RequiredWith`]
//! - **Nil and emptiness**: [`Nil`], [`NotNil`], [`Empty`], [`NotEmpty`], [`NilOrNotEmpty`]
//! - **Length**: [`Length`]
//! - **Time** (feature `temporal`): the comparison, membership and required
//!   rules over `chrono::DateTime`
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::foundation::Rule;
//! use fieldcheck_validator::validators::{is_in, not_empty, required};
//!
//! assert!(required::<u16>(true).validate(&8080).is_ok());
//! assert!(is_in(vec!["tcp", "udp"]).validate(&"icmp").is_err());
//! assert!(not_empty::<[u8]>(true).validate(&[]).is_err());
//! ```

pub mod compare;
pub mod length;
pub mod membership;
pub mod nullable;
pub mod required;
#[cfg(feature = "temporal")]
pub mod time;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use compare::{
    Between, BetweenOrEqual, Equal, Greater, GreaterOrEqual, Less, LessOrEqual, between,
    between_or_equal, equal, greater, greater_or_equal, less, less_or_equal,
};
pub use length::{Length, length};
pub use membership::{In, NotIn, is_in, not_in};
pub use nullable::{
    Empty, Nil, NilOrNotEmpty, NotEmpty, NotNil, empty, nil, nil_or_not_empty, not_empty, not_nil,
};
pub use required::{Required, RequiredWith, required, required_with};
#[cfg(feature = "temporal")]
pub use time::{
    BetweenOrEqualTime, BetweenTime, EqualTime, GreaterOrEqualTime, GreaterTime, InTime,
    LessOrEqualTime, LessTime, NotInTime, RequiredTime, between_or_equal_time, between_time,
    equal_time, greater_or_equal_time, greater_time, in_time, less_or_equal_time, less_time,
    not_in_time, required_time,
};

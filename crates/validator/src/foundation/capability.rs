//! Capability traits that gate which rules apply to which types
//!
//! - [`Ordered`]: supports `<`, `<=`, `==`, `>`, `>=` and can be printed in a message
//! - [`ZeroComparable`]: has a default ("zero") value it can be compared against
//! - [`Nilable`]: has an absent state distinct from "present but empty"
//! - [`Measured`]: has an element or character count
//! - [`Elements`]: can be walked element by element, in order
//!
//! `Option<C>` is the nilable handle: `None` is absent, `Some(vec![])` is
//! present but empty. The two states are distinct and different rules fire for
//! each.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Display;

// ============================================================================
// ORDERED / ZERO COMPARABLE
// ============================================================================

/// Values that can be ordered and rendered into a failure message.
pub trait Ordered: PartialOrd + Display {}

impl<T: PartialOrd + Display + ?Sized> Ordered for T {}

/// Values with a well-defined zero (default) instance.
pub trait ZeroComparable: PartialEq + Default {
    /// Returns true if `self` equals the type's default value.
    fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl<T: PartialEq + Default> ZeroComparable for T {}

// ============================================================================
// NILABLE
// ============================================================================

/// Handles with an absent state.
pub trait Nilable {
    /// Returns true if the handle is absent.
    fn is_nil(&self) -> bool;
}

impl<T> Nilable for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

// ============================================================================
// MEASURED
// ============================================================================

/// Values with a length: elements for collections, characters for strings.
pub trait Measured {
    /// Returns the number of elements (or Unicode scalar values).
    fn measure(&self) -> usize;
}

impl Measured for str {
    fn measure(&self) -> usize {
        self.chars().count()
    }
}

impl Measured for String {
    fn measure(&self) -> usize {
        self.as_str().measure()
    }
}

impl<T> Measured for [T] {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Measured for [T; N] {
    fn measure(&self) -> usize {
        N
    }
}

impl<T> Measured for Vec<T> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T> Measured for VecDeque<T> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Measured for HashMap<K, V, S> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<K, V> Measured for BTreeMap<K, V> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T, S> Measured for HashSet<T, S> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T> Measured for BTreeSet<T> {
    fn measure(&self) -> usize {
        self.len()
    }
}

/// An absent handle measures as zero.
impl<C: Measured> Measured for Option<C> {
    fn measure(&self) -> usize {
        self.as_ref().map_or(0, Measured::measure)
    }
}

impl<C: Measured + ?Sized> Measured for &C {
    fn measure(&self) -> usize {
        (**self).measure()
    }
}

// ============================================================================
// ELEMENTS
// ============================================================================

/// Ordered collections whose elements can be validated one by one.
pub trait Elements {
    /// Element type.
    type Item;

    /// Iterates over the elements in positional order.
    fn elements(&self) -> impl Iterator<Item = &Self::Item>;
}

impl<T> Elements for [T] {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, const N: usize> Elements for [T; N] {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Elements for Vec<T> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Elements for VecDeque<T> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

/// An absent handle has no elements.
impl<C: Elements> Elements for Option<C> {
    type Item = C::Item;

    fn elements(&self) -> impl Iterator<Item = &C::Item> {
        self.iter().flat_map(|c| c.elements())
    }
}

// ============================================================================
// TESTS
// ============================================================================

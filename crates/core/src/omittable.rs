//! Omittable wrapper type
//!
//! `Omittable<T>` tells apart a value that was never supplied from a value that
//! was supplied, even when the supplied value is null:
//!
//! ```text
//! PATCH /people/7  {}                 -> name: Omittable::Absent
//! PATCH /people/7  {"name": null}     -> name: Omittable::Present(None)
//! PATCH /people/7  {"name": "Karl"}   -> name: Omittable::Present(Some("Karl"))
//! ```
//!
//! `Option<T>` collapses the first two cases. Presence and nullness are
//! orthogonal, so a nullable field is spelled `Omittable<Option<T>>`.
//!
//! ## Combinators
//!
//! Every combinator short-circuits on `Absent` without calling its closure.
//! Closures are called at most once, synchronously.
//!
//! ```
//! use omittable_core::Omittable;
//!
//! let len = Omittable::of("Hello, World!").map(str::len);
//! assert_eq!(len, Omittable::of(13));
//!
//! let nothing = Omittable::<&str>::absent().filter(|_| unreachable!());
//! assert!(nothing.is_absent());
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

/// A value that is either absent or present
///
/// ## Invariants
///
/// - Exactly one variant holds
/// - `Present` carries exactly one value, which may be a null payload
///   (e.g. `None` when `T = Option<U>`)
/// - Equality is structural: both absent, or both present with equal values
/// - `Present(v)` hashes like `v`; `Absent` hashes like a `None` payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Omittable<T> {
    /// The value was not supplied at all
    Absent,
    /// The value was explicitly supplied
    Present(T),
}

impl<T> Omittable<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an absent value
    #[inline]
    pub const fn absent() -> Self {
        Omittable::Absent
    }

    /// Create a present value
    ///
    /// Accepts null payloads: `Omittable::of(None::<u32>)` is present.
    #[inline]
    pub const fn of(value: T) -> Self {
        Omittable::Present(value)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Check if the value is absent
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Omittable::Absent)
    }

    /// Check if the value is present
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Omittable::Present(_))
    }

    /// Return the contained value
    ///
    /// # Errors
    ///
    /// Returns `Error::NoSuchElement` if the value is absent.
    pub fn get_or_throw(self) -> Result<T> {
        self.or_else_throw()
    }

    /// Return the contained value
    ///
    /// # Errors
    ///
    /// Returns `Error::NoSuchElement` if the value is absent.
    pub fn or_else_throw(self) -> Result<T> {
        match self {
            Omittable::Present(value) => Ok(value),
            Omittable::Absent => Err(Error::NoSuchElement),
        }
    }

    /// Return the contained value, or the error produced by `err`
    ///
    /// `err` is only called when the value is absent.
    pub fn or_else_throw_with<E, F>(self, err: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Omittable::Present(value) => Ok(value),
            Omittable::Absent => Err(err()),
        }
    }

    /// Return the contained value, or `other` if absent
    ///
    /// A present null payload is returned as is.
    pub fn or_else(self, other: T) -> T {
        match self {
            Omittable::Present(value) => value,
            Omittable::Absent => other,
        }
    }

    /// Return the contained value, or compute a fallback if absent
    pub fn or_else_get<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Omittable::Present(value) => value,
            Omittable::Absent => f(),
        }
    }

    /// Get a reference to the contained value
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Omittable::Present(value) => Some(value),
            Omittable::Absent => None,
        }
    }

    /// Convert into an `Option`, losing nothing but the variant names
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Omittable::Present(value) => Some(value),
            Omittable::Absent => None,
        }
    }

    /// Borrow the contained value
    #[inline]
    pub const fn as_ref(&self) -> Omittable<&T> {
        match self {
            Omittable::Present(value) => Omittable::Present(value),
            Omittable::Absent => Omittable::Absent,
        }
    }

    /// Mutably borrow the contained value
    ///
    /// The variant itself cannot be changed through the borrow.
    #[inline]
    pub fn as_mut(&mut self) -> Omittable<&mut T> {
        match self {
            Omittable::Present(value) => Omittable::Present(value),
            Omittable::Absent => Omittable::Absent,
        }
    }

    // =========================================================================
    // Side effects
    // =========================================================================

    /// Call `action` with the value if present
    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Omittable::Present(value) = self {
            action(value);
        }
    }

    /// Call `action` with the value if present, otherwise call `absent_action`
    ///
    /// Exactly one of the two closures is called.
    pub fn if_present_or_else<F, G>(&self, action: F, absent_action: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match self {
            Omittable::Present(value) => action(value),
            Omittable::Absent => absent_action(),
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Keep the value only if `predicate` accepts it
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Omittable::Present(value) => {
                if predicate(&value) {
                    Omittable::Present(value)
                } else {
                    Omittable::Absent
                }
            }
            Omittable::Absent => Omittable::Absent,
        }
    }

    /// Map the contained value to a new type
    ///
    /// The result of `f` is always wrapped as present, even a null payload.
    pub fn map<U, F>(self, f: F) -> Omittable<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Omittable::Present(value) => Omittable::Present(f(value)),
            Omittable::Absent => Omittable::Absent,
        }
    }

    /// Map the contained value to another `Omittable`
    ///
    /// `f` decides the presence of the result.
    pub fn flat_map<U, F>(self, f: F) -> Omittable<U>
    where
        F: FnOnce(T) -> Omittable<U>,
    {
        match self {
            Omittable::Present(value) => f(value),
            Omittable::Absent => Omittable::Absent,
        }
    }

    /// Return `self` if present, otherwise the value produced by `f`
    ///
    /// A present null payload counts as present.
    pub fn or<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Omittable::Present(_) => self,
            Omittable::Absent => f(),
        }
    }

    /// Iterate over the contained value
    ///
    /// Yields nothing if absent and exactly one item if present.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.value(),
        }
    }

    // =========================================================================
    // PATCH application
    // =========================================================================

    /// Overwrite `target` with the value if present
    ///
    /// Returns `true` if `target` was written.
    pub fn apply_to(self, target: &mut T) -> bool {
        match self {
            Omittable::Present(value) => {
                *target = value;
                true
            }
            Omittable::Absent => false,
        }
    }
}

// ============================================================================
// Nullable payloads
// ============================================================================

impl<T> Omittable<Option<T>> {
    /// Check if the value is present with a null payload
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Omittable::Present(None))
    }

    /// Build from the `Option<Option<T>>` encoding of an omittable nullable field
    pub fn from_nullable_field(field: Option<Option<T>>) -> Self {
        match field {
            Some(value) => Omittable::Present(value),
            None => Omittable::Absent,
        }
    }

    /// Convert into the `Option<Option<T>>` encoding of an omittable nullable field
    pub fn into_nullable_field(self) -> Option<Option<T>> {
        self.into_option()
    }

    /// Display adapter that renders a null payload as `null`
    pub fn display_nullable(&self) -> DisplayNullable<'_, T>
    where
        T: fmt::Display,
    {
        DisplayNullable(self)
    }
}

/// Renders `Omittable<Option<T>>` with `null` for a `None` payload
///
/// Created by [`Omittable::display_nullable`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayNullable<'a, T>(&'a Omittable<Option<T>>);

impl<T: fmt::Display> fmt::Display for DisplayNullable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Omittable::Absent => f.write_str("Omittable.absent"),
            Omittable::Present(Some(value)) => write!(f, "Omittable[{}]", value),
            Omittable::Present(None) => f.write_str("Omittable[null]"),
        }
    }
}

// ============================================================================
// Trait implementations
// ============================================================================

impl<T> Default for Omittable<T> {
    /// Absent, so that missing fields default to "not supplied"
    fn default() -> Self {
        Omittable::Absent
    }
}

impl<T> From<T> for Omittable<T> {
    fn from(value: T) -> Self {
        Omittable::Present(value)
    }
}

impl<T: Hash> Hash for Omittable<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            // Same bytes as a `None` payload, so `of(None)` and `absent()` collide.
            Omittable::Absent => None::<&T>.hash(state),
            Omittable::Present(value) => value.hash(state),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Omittable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Omittable::Absent => f.write_str("Omittable.absent"),
            Omittable::Present(value) => write!(f, "Omittable[{}]", value),
        }
    }
}

// ============================================================================
// Iteration
// ============================================================================

/// Iterator over a reference to the contained value
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over the contained value
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Omittable<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Omittable<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

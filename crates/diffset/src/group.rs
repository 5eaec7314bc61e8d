//! Finite abelian groups as direct products of cyclic groups.
//!
//! A group is given by its factor orders `[n1, n2, ..., nr]` and is the
//! direct product `Z/n1 × Z/n2 × ... × Z/nr`. The factors are usually the
//! invariant factors, but any sequence of positive orders is accepted so
//! that a catalog can store sets in an alternate representation.
//!
//! Elements are always fixed-length coordinate sequences. The single-factor
//! case is simply arity 1.

use core::fmt;

use crate::error::{DiffsetError, Result};

/// An element of an [`AbelianGroup`].
///
/// Coordinates are reduced: coordinate `i` lies in `0..factors[i]`.
/// Only [`AbelianGroup`] constructs elements, so the invariant holds for
/// every value of this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element(Box<[u64]>);

impl Element {
    /// The coordinates of this element.
    #[inline]
    #[must_use]
    pub fn coords(&self) -> &[u64] {
        &self.0
    }

    /// Number of coordinates.
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// True if every coordinate is zero.
    ///
    /// This is a whole-tuple test. An element such as `(0, 1)` is not the
    /// identity even though one of its coordinates is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }
}

/// Arity-1 elements print as a bare integer, others as `(a,b,...)`.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [single] = &*self.0 {
            return write!(f, "{single}");
        }
        f.write_str("(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}

/// A finite abelian group `Z/n1 × ... × Z/nr`.
///
/// # Example
///
/// ```
/// use diffset::AbelianGroup;
///
/// let g = AbelianGroup::new(vec![3, 3]).unwrap();
/// let a = g.element(&[1, 0]).unwrap();
/// let b = g.element(&[2, 2]).unwrap();
/// assert_eq!(g.sub(&a, &b), g.element(&[2, 1]).unwrap());
/// assert_eq!(g.order(), Some(9));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbelianGroup {
    factors: Vec<u64>,
}

impl AbelianGroup {
    /// Creates the direct product of cyclic groups of the given orders.
    ///
    /// # Errors
    ///
    /// Returns [`DiffsetError::EmptyGroup`] for an empty factor list and
    /// [`DiffsetError::ZeroFactor`] if any order is zero.
    pub fn new(factors: Vec<u64>) -> Result<Self> {
        if factors.is_empty() {
            return Err(DiffsetError::EmptyGroup);
        }
        if let Some(index) = factors.iter().position(|&n| n == 0) {
            return Err(DiffsetError::ZeroFactor { index });
        }
        Ok(Self { factors })
    }

    /// The cyclic group `Z/n`.
    ///
    /// # Errors
    ///
    /// Returns [`DiffsetError::ZeroFactor`] if `n` is zero.
    pub fn cyclic(n: u64) -> Result<Self> {
        Self::new(vec![n])
    }

    /// The cyclic factor orders.
    #[inline]
    #[must_use]
    pub fn factors(&self) -> &[u64] {
        &self.factors
    }

    /// Number of cyclic factors (the arity of every element).
    #[inline]
    #[must_use]
    pub fn rank(&self) -> usize {
        self.factors.len()
    }

    /// Group order, or `None` if it does not fit in a `u64`.
    #[must_use]
    pub fn order(&self) -> Option<u64> {
        self.factors
            .iter()
            .try_fold(1u64, |acc, &n| acc.checked_mul(n))
    }

    /// The all-zero element.
    #[must_use]
    pub fn identity(&self) -> Element {
        Element(vec![0; self.rank()].into_boxed_slice())
    }

    /// True if `e` is the identity of this group.
    #[inline]
    #[must_use]
    pub fn is_identity(&self, e: &Element) -> bool {
        e.is_zero()
    }

    /// Builds an element from raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`DiffsetError::ArityMismatch`] if the coordinate count differs
    /// from [`rank`](Self::rank), and [`DiffsetError::CoordinateOutOfRange`]
    /// if a coordinate is negative or not below its factor. Values are never
    /// reduced silently.
    pub fn element(&self, coords: &[i64]) -> Result<Element> {
        self.element_at(0, coords)
    }

    /// Builds a candidate set from raw coordinate sequences.
    ///
    /// Errors name the position of the offending element.
    ///
    /// # Errors
    ///
    /// Returns the first validation error from [`element`](Self::element).
    pub fn elements<I, C>(&self, set: I) -> Result<Vec<Element>>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[i64]>,
    {
        set.into_iter()
            .enumerate()
            .map(|(i, coords)| self.element_at(i, coords.as_ref()))
            .collect()
    }

    fn element_at(&self, index: usize, coords: &[i64]) -> Result<Element> {
        if coords.len() != self.rank() {
            return Err(DiffsetError::ArityMismatch {
                element: index,
                expected: self.rank(),
                actual: coords.len(),
            });
        }
        coords
            .iter()
            .zip(&self.factors)
            .enumerate()
            .map(|(coordinate, (&value, &factor))| {
                u64::try_from(value)
                    .ok()
                    .filter(|&c| c < factor)
                    .ok_or(DiffsetError::CoordinateOutOfRange {
                        element: index,
                        coordinate,
                        value,
                        factor,
                    })
            })
            .collect::<Result<Vec<u64>>>()
            .map(|c| Element(c.into_boxed_slice()))
    }

    /// Componentwise `a - b`, reduced modulo each factor.
    ///
    /// Both arguments must be elements of this group.
    #[must_use]
    pub fn sub(&self, a: &Element, b: &Element) -> Element {
        self.zip_with(a, b, |x, y, n| if x >= y { x - y } else { n - (y - x) })
    }

    /// Componentwise `a + b`, reduced modulo each factor.
    #[must_use]
    pub fn add(&self, a: &Element, b: &Element) -> Element {
        self.zip_with(a, b, |x, y, n| {
            // x, y < n, so n - y > 0 and no intermediate overflows
            if x >= n - y {
                x - (n - y)
            } else {
                x + y
            }
        })
    }

    /// The inverse `-a`.
    #[must_use]
    pub fn neg(&self, a: &Element) -> Element {
        self.sub(&self.identity(), a)
    }

    fn zip_with(&self, a: &Element, b: &Element, op: impl Fn(u64, u64, u64) -> u64) -> Element {
        debug_assert_eq!(a.arity(), self.rank());
        debug_assert_eq!(b.arity(), self.rank());
        let coords: Vec<u64> = a
            .0
            .iter()
            .zip(b.0.iter())
            .zip(&self.factors)
            .map(|((&x, &y), &n)| op(x, y, n))
            .collect();
        Element(coords.into_boxed_slice())
    }
}

impl fmt::Display for AbelianGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, n) in self.factors.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{n}")?;
        }
        f.write_str("]")
    }
}

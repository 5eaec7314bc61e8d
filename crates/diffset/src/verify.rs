//! The difference-set verifier.
//!
//! A `(v, k, λ)` difference set in a group `G` of order `v` is a `k`-subset
//! `D` such that every non-identity element of `G` occurs exactly `λ` times
//! as a difference `s1 - s2` with `s1, s2 ∈ D`.
//!
//! The check implemented here walks the observed differences only. Group
//! elements that never occur as a difference are not compared against `λ`,
//! so for a degenerate candidate (too few distinct differences) a `true`
//! verdict is necessary but not sufficient. [`Verdict::is_complete_cover`]
//! reports whether every non-identity element was actually observed.

use core::fmt;

use crate::autocorrelation::Autocorrelation;
use crate::error::Result;
use crate::group::{AbelianGroup, Element};

/// The `(v, k, λ)` parameters of a difference set.
///
/// `v` and `k` are informational. The verifier only uses `lambda`;
/// agreement of `v` with the group order and of `k` with the set size is
/// the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameters {
    /// Group order.
    pub v: u64,
    /// Set size.
    pub k: u64,
    /// Required multiplicity of each non-identity difference.
    pub lambda: u64,
}

impl Parameters {
    /// Creates a parameter triple.
    #[must_use]
    pub const fn new(v: u64, k: u64, lambda: u64) -> Self {
        Self { v, k, lambda }
    }

    /// The order `n = k - λ`, or `None` when `λ > k`.
    #[must_use]
    pub const fn order_n(&self) -> Option<u64> {
        self.k.checked_sub(self.lambda)
    }

    /// True if `λ(v - 1) = k(k - 1)`, the counting condition every
    /// difference set satisfies.
    #[must_use]
    pub fn is_admissible(&self) -> bool {
        let lhs = u128::from(self.lambda) * u128::from(self.v.saturating_sub(1));
        let rhs = u128::from(self.k) * u128::from(self.k.saturating_sub(1));
        lhs == rhs
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.v, self.k, self.lambda)
    }
}

/// A non-identity difference whose multiplicity is not `λ`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The offending difference.
    pub difference: Element,
    /// How often it occurred.
    pub count: usize,
    /// The required multiplicity.
    pub expected: u64,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "difference {} occurs {} time(s), expected {}",
            self.difference, self.count, self.expected
        )
    }
}

/// Outcome of [`verify`].
#[derive(Debug, Clone)]
pub struct Verdict {
    violation: Option<Violation>,
    distinct_nonzero: usize,
    group_order: Option<u64>,
    autocorrelation: Autocorrelation,
}

impl Verdict {
    /// True if every observed non-identity difference occurs exactly `λ` times.
    #[inline]
    #[must_use]
    pub fn is_difference_set(&self) -> bool {
        self.violation.is_none()
    }

    /// The smallest offending difference, if any.
    #[must_use]
    pub fn violation(&self) -> Option<&Violation> {
        self.violation.as_ref()
    }

    /// True if every non-identity group element occurred as a difference.
    ///
    /// Together with [`is_difference_set`](Self::is_difference_set) this is
    /// the full definition. Always false if the group order overflows.
    #[must_use]
    pub fn is_complete_cover(&self) -> bool {
        self.group_order
            .and_then(|v| usize::try_from(v).ok())
            .is_some_and(|v| self.distinct_nonzero + 1 == v)
    }

    /// The autocorrelation the verdict was computed from.
    #[must_use]
    pub fn autocorrelation(&self) -> &Autocorrelation {
        &self.autocorrelation
    }
}

/// Checks the difference-set property of already validated elements.
///
/// Every observed non-identity difference must occur exactly
/// `params.lambda` times. The identity is excluded whatever its count.
///
/// # Example
///
/// ```
/// use diffset::{verify, AbelianGroup, Parameters};
///
/// let g = AbelianGroup::cyclic(7).unwrap();
/// let d = g.elements([[0i64], [1], [3]]).unwrap();
/// assert!(verify(&Parameters::new(7, 3, 1), &g, &d).is_difference_set());
/// ```
#[must_use]
pub fn verify(params: &Parameters, group: &AbelianGroup, set: &[Element]) -> Verdict {
    let autocorrelation = Autocorrelation::of(group, set);
    let nonzero = autocorrelation.nonzero();
    let distinct_nonzero = nonzero.len();
    let violation = nonzero
        .into_iter()
        .find(|&(_, count)| count as u64 != params.lambda)
        .map(|(g, count)| Violation {
            difference: g.clone(),
            count,
            expected: params.lambda,
        });
    Verdict {
        violation,
        distinct_nonzero,
        group_order: group.order(),
        autocorrelation,
    }
}

/// Decides whether `set` is a difference set with multiplicity `params.lambda`
/// in `Z/factors[0] × ... × Z/factors[r-1]`.
///
/// Each element of `set` is a coordinate sequence with one entry per factor;
/// single-factor groups use one-element sequences.
///
/// # Errors
///
/// Returns a [`DiffsetError`](crate::DiffsetError) if `factors` is empty or
/// contains a zero, if an element's arity differs from `factors.len()`, or if
/// a coordinate lies outside `0..factor`.
///
/// # Example
///
/// ```
/// use diffset::{is_ds, Parameters};
///
/// assert!(is_ds(&Parameters::new(7, 3, 1), &[7], [[0i64], [1], [3]]).unwrap());
/// assert!(!is_ds(&Parameters::new(7, 3, 1), &[7], [[0i64], [1], [2]]).unwrap());
/// ```
pub fn is_ds<I, C>(params: &Parameters, factors: &[u64], set: I) -> Result<bool>
where
    I: IntoIterator<Item = C>,
    C: AsRef<[i64]>,
{
    let group = AbelianGroup::new(factors.to_vec())?;
    let elements = group.elements(set)?;
    Ok(verify(params, &group, &elements).is_difference_set())
}

//! Parameter names of the form `DS(v,k,λ,[g1,...,gr])`.
//!
//! A name fixes the parameters and the group (by its invariant factors).
//! Whitespace is ignored when parsing; [`Display`](core::fmt::Display)
//! prints the canonical form without any.

use core::fmt;
use core::str::FromStr;

use diffset::Parameters;

use crate::error::CatalogError;

/// A parsed parameter name.
///
/// Ordering is by `v`, then `k`, then `λ`, then the group factors, so a
/// sorted catalog lists parameters numerically.
///
/// # Example
///
/// ```
/// use diffset_catalog::DsName;
///
/// let name: DsName = "DS(16, 6, 2, [4, 4])".parse().unwrap();
/// assert_eq!(name.group(), &[4, 4]);
/// assert_eq!(name.to_string(), "DS(16,6,2,[4,4])");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DsName {
    v: u64,
    k: u64,
    lambda: u64,
    group: Vec<u64>,
}

impl DsName {
    /// Creates a name from its components.
    #[must_use]
    pub fn new(v: u64, k: u64, lambda: u64, group: Vec<u64>) -> Self {
        Self {
            v,
            k,
            lambda,
            group,
        }
    }

    /// Group order `v`.
    #[must_use]
    pub fn v(&self) -> u64 {
        self.v
    }

    /// Set size `k`.
    #[must_use]
    pub fn k(&self) -> u64 {
        self.k
    }

    /// Multiplicity `λ`.
    #[must_use]
    pub fn lambda(&self) -> u64 {
        self.lambda
    }

    /// Invariant factors of the group.
    #[must_use]
    pub fn group(&self) -> &[u64] {
        &self.group
    }

    /// The `(v, k, λ)` triple.
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        Parameters::new(self.v, self.k, self.lambda)
    }

    /// Order `n = k - λ`, negative for inadmissible names.
    #[must_use]
    pub fn order_n(&self) -> i128 {
        i128::from(self.k) - i128::from(self.lambda)
    }

    /// True if this name has the given `(v, k, λ)`, whatever the group.
    #[must_use]
    pub fn matches(&self, v: u64, k: u64, lambda: u64) -> bool {
        self.v == v && self.k == k && self.lambda == lambda
    }

    /// `DS(v,k,λ)` without the group, as used in summaries.
    #[must_use]
    pub fn short(&self) -> String {
        format!("DS({},{},{})", self.v, self.k, self.lambda)
    }
}

/// Formats a factor list as `[a,b,...]`.
pub(crate) fn format_group(factors: &[u64]) -> String {
    let inner: Vec<String> = factors.iter().map(u64::to_string).collect();
    format!("[{}]", inner.join(","))
}

impl fmt::Display for DsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DS({},{},{},{})",
            self.v,
            self.k,
            self.lambda,
            format_group(&self.group)
        )
    }
}

impl FromStr for DsName {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| CatalogError::InvalidName {
            name: s.to_owned(),
            reason,
        };

        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let inner = compact
            .strip_prefix("DS(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| invalid("expected DS(...)"))?;
        let (head, group) = inner
            .split_once(",[")
            .ok_or_else(|| invalid("missing group list"))?;
        let group = group
            .strip_suffix(']')
            .ok_or_else(|| invalid("unterminated group list"))?;

        let fields: Vec<&str> = head.split(',').collect();
        let &[v, k, lambda] = fields.as_slice() else {
            return Err(invalid("expected three parameters v,k,lambda"));
        };
        let number = |field: &str| {
            field
                .parse::<u64>()
                .map_err(|_| invalid("parameter is not a non-negative integer"))
        };

        if group.is_empty() {
            return Err(invalid("empty group list"));
        }
        let group = group
            .split(',')
            .map(|g| {
                g.parse::<u64>()
                    .map_err(|_| invalid("group factor is not a non-negative integer"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            v: number(v)?,
            k: number(k)?,
            lambda: number(lambda)?,
            group,
        })
    }
}

//! Record types stored in the catalog file.
//!
//! These mirror the JSON schema one-to-one. A record is keyed by its
//! [`DsName`](crate::DsName) and carries an existence status, a reference
//! comment, zero or more known sets, and optionally the group in which the
//! set elements are written when that differs from the invariant factors.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Existence status of a parameter record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// All difference sets with these parameters are known and stored.
    All,
    /// At least one difference set exists.
    Yes,
    /// Existence is an open problem.
    Open,
    /// No difference set exists.
    No,
}

impl Status {
    /// The string used in the catalog file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::All => "All",
            Status::Yes => "Yes",
            Status::Open => "Open",
            Status::No => "No",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set element as written in the catalog: a bare integer for cyclic
/// groups, an integer array for products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawElement {
    /// Element of a single-factor group.
    Scalar(i64),
    /// Element of a multi-factor group, one coordinate per factor.
    Tuple(Vec<i64>),
}

impl RawElement {
    /// Coordinates of the element; a scalar is a one-coordinate sequence.
    #[must_use]
    pub fn coords(&self) -> &[i64] {
        match self {
            RawElement::Scalar(x) => core::slice::from_ref(x),
            RawElement::Tuple(xs) => xs,
        }
    }
}

impl AsRef<[i64]> for RawElement {
    fn as_ref(&self) -> &[i64] {
        self.coords()
    }
}

/// Scalars print bare, tuples as `(a,b,...)`.
impl fmt::Display for RawElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawElement::Scalar(x) => write!(f, "{x}"),
            RawElement::Tuple(xs) => {
                let inner: Vec<String> = xs.iter().map(i64::to_string).collect();
                write!(f, "({})", inner.join(","))
            }
        }
    }
}

/// One parameter record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Existence status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// How the status is known (construction, reference, non-existence proof).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Known difference sets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sets: Vec<Vec<RawElement>>,
    /// Group the set elements are written in, if not the invariant factors.
    #[serde(rename = "G_rep", default, skip_serializing_if = "Option::is_none")]
    pub g_rep: Option<Vec<u64>>,
}

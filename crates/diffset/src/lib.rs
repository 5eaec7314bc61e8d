//! Difference sets in finite abelian groups.
//!
//! A `(v, k, λ)` difference set is a `k`-subset `D` of a group `G` of order
//! `v` in which every non-identity element of `G` is a difference of two
//! elements of `D` exactly `λ` times. This crate represents groups as direct
//! products of cyclic groups and checks candidate sets against that property.
//!
//! # Entry Points
//!
//! ```
//! use diffset::{is_ds, Parameters};
//!
//! // The (7,3,1) Fano plane set in Z/7
//! assert!(is_ds(&Parameters::new(7, 3, 1), &[7], [[0i64], [1], [3]]).unwrap());
//!
//! // A two-factor group: (4,3,2) in Z/2 × Z/2
//! let d: [[i64; 2]; 3] = [[0, 1], [1, 0], [1, 1]];
//! assert!(is_ds(&Parameters::new(4, 3, 2), &[2, 2], d).unwrap());
//! ```
//!
//! The typed API avoids re-validating input:
//!
//! ```
//! use diffset::{verify, AbelianGroup, Parameters};
//!
//! let g = AbelianGroup::new(vec![3, 3]).unwrap();
//! let d = g.elements([[0i64, 0], [1, 0], [0, 1], [2, 2]]).unwrap();
//! let verdict = verify(&Parameters::new(9, 4, 1), &g, &d);
//! assert!(!verdict.is_difference_set());
//! assert_eq!(verdict.autocorrelation().identity_count(), 4);
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`group`] | [`AbelianGroup`], [`Element`], componentwise arithmetic |
//! | [`autocorrelation`] | [`Autocorrelation`]: difference multiplicities |
//! | [`verify`](mod@verify) | [`verify()`], [`is_ds`], [`Parameters`], [`Verdict`] |
//! | [`error`] | [`DiffsetError`] |

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod autocorrelation;
pub mod error;
pub mod group;
pub mod verify;

pub use autocorrelation::Autocorrelation;
pub use error::{DiffsetError, Result};
pub use group::{AbelianGroup, Element};
pub use verify::{is_ds, verify, Parameters, Verdict, Violation};

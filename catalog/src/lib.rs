//! Catalog of difference-set parameters.
//!
//! The catalog is a JSON object keyed by parameter names
//! `DS(v,k,λ,[g1,...])`. Each record states whether difference sets with
//! those parameters exist in that group, cites a reference, and stores the
//! known sets. This crate loads the catalog, answers lookups, formats
//! summaries and tables, and audits every stored set with the
//! [`diffset`] verifier.
//!
//! # Entry Point
//!
//! ```
//! use diffset_catalog::{audit, Catalog, Status};
//!
//! let catalog = Catalog::from_json_str(r#"{
//!     "DS(7,3,1,[7])": {"status": "All", "comment": "Singer", "sets": [[0,1,3],[0,1,5]]},
//!     "DS(16,6,2,[4,4])": {"status": "Yes", "sets": [[[0,0],[0,1],[0,2],[1,0],[2,1],[3,2]]]}
//! }"#).unwrap();
//!
//! let name = "DS(7,3,1,[7])".parse().unwrap();
//! assert_eq!(catalog.status(&name).unwrap(), Some(Status::All));
//! assert!(catalog.get_ds(16, 6, 2, &[4, 4], 0).unwrap().is_ds().unwrap());
//! assert!(audit(&catalog).all_passed());
//! ```
//!
//! # File Format
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `status` | `All`, `Yes`, `Open` or `No` |
//! | `comment` | how the status is known |
//! | `sets` | known sets; elements are integers or integer arrays |
//! | `G_rep` | group the elements are written in, if not the invariant factors |

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod audit;
pub mod error;
pub mod model;
pub mod name;
pub mod store;
pub mod summary;
pub mod table;

pub use audit::{audit, AuditReport, AuditResult, Severity};
pub use error::{CatalogError, Result};
pub use model::{RawElement, Record, Status};
pub use name::DsName;
pub use store::{Catalog, Entry};
pub use summary::{all_groups, Summary};
pub use table::{Row, Table};

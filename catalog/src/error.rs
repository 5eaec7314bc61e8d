//! Catalog error type.

use std::path::PathBuf;

use diffset::DiffsetError;
use thiserror::Error;

use crate::name::DsName;

/// Errors raised while loading or querying a [`Catalog`](crate::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON or does not match the record schema.
    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// A parameter name does not have the form `DS(v,k,λ,[g1,...])`.
    #[error("invalid parameter name {name:?}: {reason}")]
    InvalidName {
        /// The text that failed to parse.
        name: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Two catalog keys parse to the same name.
    #[error("{name} appears twice in catalog, as {first:?} and {second:?}")]
    DuplicateName {
        /// The shared name.
        name: DsName,
        /// The key seen first.
        first: String,
        /// The key that clashed with it.
        second: String,
    },

    /// No record exists under this name.
    #[error("{0} not in catalog")]
    UnknownName(DsName),

    /// The record exists but stores no sets.
    #[error("no {0} difference sets in catalog")]
    NoSets(DsName),

    /// A set index past the end of the stored sets.
    #[error("only {available} {name} difference set(s) in catalog, index {index} requested")]
    SetIndexOutOfRange {
        /// The record name.
        name: DsName,
        /// Requested index.
        index: usize,
        /// Number of stored sets.
        available: usize,
    },

    /// A stored set does not fit its representation group.
    #[error("{name} set {index}: {source}")]
    Element {
        /// The record name.
        name: DsName,
        /// Index of the offending set.
        index: usize,
        /// The validation failure.
        #[source]
        source: DiffsetError,
    },
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

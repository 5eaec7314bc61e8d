//! Parameter tables: one row per record with `v`, `k`, `λ`, `n`, status
//! and comment.

use core::fmt;

use crate::error::Result;
use crate::model::Status;
use crate::name::DsName;
use crate::store::Catalog;

const HEADERS: [&str; 6] = ["v", "k", "lambda", "n", "status", "comment"];

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Group order.
    pub v: u64,
    /// Set size.
    pub k: u64,
    /// Multiplicity.
    pub lambda: u64,
    /// Order `n = k - λ` (negative for inadmissible names).
    pub n: i128,
    /// Status string, empty when the record has none.
    pub status: String,
    /// Comment, empty when the record has none.
    pub comment: String,
}

impl Row {
    fn cells(&self) -> [String; 6] {
        [
            self.v.to_string(),
            self.k.to_string(),
            self.lambda.to_string(),
            self.n.to_string(),
            self.status.clone(),
            self.comment.clone(),
        ]
    }
}

/// A text table of parameter records.
///
/// Rendering left-aligns every column, separates columns by two spaces and
/// prints no index column.
///
/// # Example
///
/// ```
/// use diffset_catalog::{Catalog, Table};
///
/// let catalog = Catalog::from_json_str(
///     r#"{"DS(7,3,1,[7])": {"status": "All", "comment": "Singer"}}"#,
/// ).unwrap();
/// let table = Table::from_catalog(&catalog, None);
/// assert_eq!(table.rows()[0].n, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every record of `catalog` in name order, optionally only those with
    /// the given status.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog, status: Option<Status>) -> Self {
        let rows = catalog
            .iter()
            .filter(|(_, record)| status.is_none() || record.status == status)
            .map(|(name, record)| row(name, record.status, record.comment.as_deref()))
            .collect();
        Self { rows }
    }

    /// Appends the row for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownName`](crate::CatalogError::UnknownName)
    /// if the record does not exist.
    pub fn push(&mut self, catalog: &Catalog, name: &DsName) -> Result<()> {
        let record = catalog.record(name)?;
        self.rows
            .push(row(name, record.status, record.comment.as_deref()));
        Ok(())
    }

    /// The rows in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn row(name: &DsName, status: Option<Status>, comment: Option<&str>) -> Row {
    Row {
        v: name.v(),
        k: name.k(),
        lambda: name.lambda(),
        n: name.order_n(),
        status: status.map(|s| s.as_str().to_owned()).unwrap_or_default(),
        comment: comment.unwrap_or_default().to_owned(),
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<[String; 6]> = self.rows.iter().map(Row::cells).collect();
        let mut widths = HEADERS.map(str::len);
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let header = HEADERS.map(str::to_owned);
        for line in core::iter::once(&header).chain(&cells) {
            let mut text = String::new();
            for (i, (cell, w)) in line.iter().zip(widths).enumerate() {
                if i > 0 {
                    text.push_str("  ");
                }
                text.push_str(cell);
                let pad = w.saturating_sub(cell.chars().count());
                text.extend(core::iter::repeat(' ').take(pad));
            }
            writeln!(f, "{}", text.trim_end())?;
        }
        Ok(())
    }
}

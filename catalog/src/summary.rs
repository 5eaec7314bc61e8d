//! Human-readable summaries of parameter records.

use core::fmt;

use crate::error::Result;
use crate::model::{Record, Status};
use crate::name::{format_group, DsName};
use crate::store::Catalog;

/// The existence statement, reference and stored sets of one record.
///
/// # Example
///
/// ```
/// use diffset_catalog::{Catalog, Summary};
///
/// let catalog = Catalog::from_json_str(
///     r#"{"DS(7,3,1,[7])": {"status": "All", "comment": "Singer", "sets": [[0,1,3]]}}"#,
/// ).unwrap();
/// let name = "DS(7,3,1,[7])".parse().unwrap();
/// let text = Summary::new(&catalog, &name).unwrap().to_string();
/// assert!(text.starts_with("There is exactly 1 DS(7,3,1) in group [7]\n"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    name: &'a DsName,
    record: &'a Record,
}

impl<'a> Summary<'a> {
    /// Summary of the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownName`](crate::CatalogError::UnknownName)
    /// if there is no such record.
    pub fn new(catalog: &'a Catalog, name: &'a DsName) -> Result<Self> {
        Ok(Self {
            name,
            record: catalog.record(name)?,
        })
    }

    /// The headline existence statement, or `None` when the record has no status.
    #[must_use]
    pub fn headline(&self) -> Option<String> {
        let ds = self.name.short();
        let group = format_group(self.name.group());
        let n = self.record.sets.len();
        let line = match self.record.status? {
            Status::All if n <= 1 => format!("There is exactly {n} {ds} in group {group}"),
            Status::All => format!("There are exactly {n} {ds} in group {group}"),
            Status::Yes if n == 0 => format!(
                "There is at least one {ds} in group {group}, but it is not in this dataset"
            ),
            Status::Yes if n == 1 => format!("There is at least 1 {ds} in group {group}"),
            Status::Yes => format!("There are at least {n} {ds} in group {group}"),
            Status::No => format!("No {ds} exists in group {group}"),
            Status::Open => format!("Existence of {ds} in group {group} is open"),
        };
        Some(line)
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.headline() {
            writeln!(f, "{line}")?;
        }
        if let Some(comment) = &self.record.comment {
            writeln!(f, "Reference: {comment}")?;
            writeln!(f)?;
        }
        if let Some(rep) = &self.record.g_rep {
            writeln!(f, "DS given as elements of {}", format_group(rep))?;
        }
        let numbered = self.record.sets.len() > 1;
        for (i, set) in self.record.sets.iter().enumerate() {
            if numbered {
                write!(f, "{i}:\t")?;
            }
            let elements: Vec<String> = set.iter().map(ToString::to_string).collect();
            writeln!(f, "{}", elements.join(" "))?;
        }
        Ok(())
    }
}

/// Summaries of every group carrying `(v, k, λ)`, each followed by a blank line.
///
/// Returns an empty string when no record has these parameters.
#[must_use]
pub fn all_groups(catalog: &Catalog, v: u64, k: u64, lambda: u64) -> String {
    let mut out = String::new();
    for (name, record) in catalog.iter().filter(|(n, _)| n.matches(v, k, lambda)) {
        out.push_str(&Summary { name, record }.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json_str(
            r#"{
            "DS(7,3,1,[7])": {"status": "All", "comment": "Singer", "sets": [[0,1,3],[0,1,5]]},
            "DS(11,5,2,[11])": {"status": "Yes", "sets": [[1,3,4,5,9]]},
            "DS(16,6,2,[2,8])": {"status": "Yes"},
            "DS(16,6,2,[16])": {"status": "No", "comment": "Turyn"},
            "DS(16,6,2,[4,4])": {"status": "Yes", "G_rep": [4,4], "sets": [[[0,0],[0,1],[0,2],[1,0],[2,1],[3,2]]]},
            "DS(31,10,3,[31])": {"status": "Open"},
            "DS(37,9,2,[37])": {}
        }"#,
        )
        .unwrap()
    }

    fn summary(c: &Catalog, s: &str) -> String {
        let name: DsName = s.parse().unwrap();
        Summary::new(c, &name).unwrap().to_string()
    }

    #[test]
    fn all_with_several_sets() {
        let c = catalog();
        assert_eq!(
            summary(&c, "DS(7,3,1,[7])"),
            "There are exactly 2 DS(7,3,1) in group [7]\n\
             Reference: Singer\n\
             \n\
             0:\t0 1 3\n\
             1:\t0 1 5\n"
        );
    }

    #[test]
    fn all_without_stored_sets_is_singular() {
        let c = Catalog::from_json_str(r#"{"DS(7,3,1,[7])": {"status": "All"}}"#).unwrap();
        assert_eq!(
            summary(&c, "DS(7,3,1,[7])"),
            "There is exactly 0 DS(7,3,1) in group [7]\n"
        );
    }

    #[test]
    fn yes_variants() {
        let c = catalog();
        assert_eq!(
            summary(&c, "DS(11,5,2,[11])"),
            "There is at least 1 DS(11,5,2) in group [11]\n1 3 4 5 9\n"
        );
        assert_eq!(
            summary(&c, "DS(16,6,2,[2,8])"),
            "There is at least one DS(16,6,2) in group [2,8], but it is not in this dataset\n"
        );
    }

    #[test]
    fn no_and_open() {
        let c = catalog();
        assert_eq!(
            summary(&c, "DS(16,6,2,[16])"),
            "No DS(16,6,2) exists in group [16]\nReference: Turyn\n\n"
        );
        assert_eq!(
            summary(&c, "DS(31,10,3,[31])"),
            "Existence of DS(31,10,3) in group [31] is open\n"
        );
        assert_eq!(summary(&c, "DS(37,9,2,[37])"), "");
    }

    #[test]
    fn representation_and_tuples() {
        let c = catalog();
        assert_eq!(
            summary(&c, "DS(16,6,2,[4,4])"),
            "There is at least 1 DS(16,6,2) in group [4,4]\n\
             DS given as elements of [4,4]\n\
             (0,0) (0,1) (0,2) (1,0) (2,1) (3,2)\n"
        );
    }

    #[test]
    fn all_groups_covers_every_group() {
        let c = catalog();
        let text = all_groups(&c, 16, 6, 2);
        assert!(text.contains("in group [2,8]"));
        assert!(text.contains("in group [4,4]"));
        assert!(text.contains("in group [16]"));
        assert!(all_groups(&c, 7, 3, 10).is_empty());
    }

    #[test]
    fn all_groups_keeps_name_order_and_blank_lines() {
        let c = catalog();
        assert_eq!(
            all_groups(&c, 16, 6, 2),
            "There is at least one DS(16,6,2) in group [2,8], but it is not in this dataset\n\
             \n\
             There is at least 1 DS(16,6,2) in group [4,4]\n\
             DS given as elements of [4,4]\n\
             (0,0) (0,1) (0,2) (1,0) (2,1) (3,2)\n\
             \n\
             No DS(16,6,2) exists in group [16]\n\
             Reference: Turyn\n\
             \n\
             \n"
        );
    }
}

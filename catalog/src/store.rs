//! The parameter-record store.
//!
//! A [`Catalog`] is loaded once from a JSON file and then queried by
//! [`DsName`]. Lookups that have no answer (unknown name, no stored sets,
//! index past the end) are errors rather than empty values.

use std::collections::BTreeMap;
use std::path::Path;

use diffset::{AbelianGroup, Element, Parameters, Verdict};
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::model::{RawElement, Record, Status};
use crate::name::DsName;

/// All parameter records, ordered by name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: BTreeMap<DsName, Record>,
}

impl Catalog {
    /// Reads a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, and the
    /// errors of [`from_json_str`](Self::from_json_str) otherwise.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;
        debug!(path = %path.display(), records = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Parses a catalog from JSON text.
    ///
    /// The top level must be an object mapping parameter names to records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] for malformed JSON or records,
    /// [`CatalogError::InvalidName`] for a key that is not a parameter name,
    /// and [`CatalogError::DuplicateName`] when two keys spell the same name.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Record> = serde_json::from_str(json)?;
        let mut spellings: BTreeMap<DsName, String> = BTreeMap::new();
        let mut records = BTreeMap::new();
        for (key, record) in raw {
            let name: DsName = key.parse()?;
            if let Some(first) = spellings.get(&name) {
                return Err(CatalogError::DuplicateName {
                    name,
                    first: first.clone(),
                    second: key,
                });
            }
            spellings.insert(name.clone(), key);
            records.insert(name, record);
        }
        Ok(Self { records })
    }

    /// Builds a catalog from records already in memory.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = (DsName, Record)>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All record names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &DsName> {
        self.records.keys()
    }

    /// All records in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&DsName, &Record)> {
        self.records.iter()
    }

    /// The record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownName`] if there is none.
    pub fn record(&self, name: &DsName) -> Result<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| CatalogError::UnknownName(name.clone()))
    }

    /// Existence status, if the record states one.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownName`] for a missing record.
    pub fn status(&self, name: &DsName) -> Result<Option<Status>> {
        Ok(self.record(name)?.status)
    }

    /// The reference comment, if any.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownName`] for a missing record.
    pub fn comment(&self, name: &DsName) -> Result<Option<&str>> {
        Ok(self.record(name)?.comment.as_deref())
    }

    /// Number of stored sets (0 when the record has none).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownName`] for a missing record.
    pub fn num_sets(&self, name: &DsName) -> Result<usize> {
        Ok(self.record(name)?.sets.len())
    }

    /// The group the stored sets are written in: `G_rep` if present,
    /// otherwise the invariant factors from the name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownName`] for a missing record.
    pub fn representation<'a>(&'a self, name: &'a DsName) -> Result<&'a [u64]> {
        Ok(self
            .record(name)?
            .g_rep
            .as_deref()
            .unwrap_or_else(|| name.group()))
    }

    /// The `index`-th stored set.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownName`], [`CatalogError::NoSets`] if the
    /// record stores no sets, or [`CatalogError::SetIndexOutOfRange`].
    pub fn set(&self, name: &DsName, index: usize) -> Result<&[RawElement]> {
        let sets = &self.record(name)?.sets;
        if sets.is_empty() {
            return Err(CatalogError::NoSets(name.clone()));
        }
        sets.get(index)
            .map(Vec::as_slice)
            .ok_or_else(|| CatalogError::SetIndexOutOfRange {
                name: name.clone(),
                index,
                available: sets.len(),
            })
    }

    /// The `index`-th `(v, k, λ)` difference set in the group with the given
    /// invariant factors, ready for verification.
    ///
    /// # Errors
    ///
    /// As for [`set`](Self::set).
    pub fn get_ds(
        &self,
        v: u64,
        k: u64,
        lambda: u64,
        group: &[u64],
        index: usize,
    ) -> Result<Entry<'_>> {
        let key = DsName::new(v, k, lambda, group.to_vec());
        let (name, record) = self
            .records
            .get_key_value(&key)
            .ok_or(CatalogError::UnknownName(key))?;
        let set = self.set(name, index)?;
        Ok(Entry {
            name,
            index,
            representation: record.g_rep.as_deref().unwrap_or_else(|| name.group()),
            set,
        })
    }

    /// Names of every record with these parameters, over all groups.
    #[must_use]
    pub fn groups_for(&self, v: u64, k: u64, lambda: u64) -> Vec<&DsName> {
        self.names().filter(|n| n.matches(v, k, lambda)).collect()
    }

    /// Every stored set of every record, in name order.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.records.iter().flat_map(|(name, record)| {
            let representation = record.g_rep.as_deref().unwrap_or_else(|| name.group());
            record
                .sets
                .iter()
                .enumerate()
                .map(move |(index, set)| Entry {
                    name,
                    index,
                    representation,
                    set,
                })
        })
    }
}

/// One stored set together with what is needed to verify it.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    /// The record name.
    pub name: &'a DsName,
    /// Position of the set within the record.
    pub index: usize,
    /// Factor orders of the group the elements are written in.
    pub representation: &'a [u64],
    /// The raw elements.
    pub set: &'a [RawElement],
}

impl Entry<'_> {
    /// The `(v, k, λ)` triple of the record.
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        self.name.parameters()
    }

    /// The representation group and the validated elements.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Element`] if the representation group is
    /// malformed or an element does not belong to it.
    pub fn elements(&self) -> Result<(AbelianGroup, Vec<Element>)> {
        let wrap = |source| CatalogError::Element {
            name: self.name.clone(),
            index: self.index,
            source,
        };
        let group = AbelianGroup::new(self.representation.to_vec()).map_err(wrap)?;
        let elements = group.elements(self.set).map_err(wrap)?;
        Ok((group, elements))
    }

    /// Runs the verifier on this set.
    ///
    /// # Errors
    ///
    /// As for [`elements`](Self::elements).
    pub fn verify(&self) -> Result<Verdict> {
        let (group, elements) = self.elements()?;
        Ok(diffset::verify(&self.parameters(), &group, &elements))
    }

    /// True if this set passes the difference-set check.
    ///
    /// # Errors
    ///
    /// As for [`elements`](Self::elements).
    pub fn is_ds(&self) -> Result<bool> {
        Ok(self.verify()?.is_difference_set())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "DS(7,3,1,[7])": {"status": "All", "comment": "Singer", "sets": [[0,1,3],[0,1,5]]},
        "DS(16,6,2,[4,4])": {"status": "Yes", "sets": [[[0,0],[0,1],[0,2],[1,0],[2,1],[3,2]]]},
        "DS(16,6,2,[2,2,2,2])": {"status": "Yes"},
        "DS(36,15,6,[6,6])": {"status": "Yes", "G_rep": [2,2,3,3]}
    }"#;

    fn name(s: &str) -> DsName {
        s.parse().unwrap()
    }

    #[test]
    fn loads_and_orders() {
        let c = Catalog::from_json_str(JSON).unwrap();
        assert_eq!(c.len(), 4);
        let names: Vec<String> = c.names().map(ToString::to_string).collect();
        assert_eq!(
            names,
            [
                "DS(7,3,1,[7])",
                "DS(16,6,2,[2,2,2,2])",
                "DS(16,6,2,[4,4])",
                "DS(36,15,6,[6,6])"
            ]
        );
    }

    #[test]
    fn bad_key_is_rejected() {
        let err = Catalog::from_json_str(r#"{"DS(7,3,1)": {}}"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidName { .. }));
    }

    #[test]
    fn differently_spelled_duplicates_are_rejected() {
        let err = Catalog::from_json_str(
            r#"{
            "DS(7,3,1,[7])": {"status": "All", "sets": [[0,1,3]]},
            "DS(7, 3, 1, [7])": {"status": "No"}
        }"#,
        )
        .unwrap_err();
        assert!(
            matches!(
                &err,
                CatalogError::DuplicateName { name, first, second }
                    if name.to_string() == "DS(7,3,1,[7])"
                        && first == "DS(7, 3, 1, [7])"
                        && second == "DS(7,3,1,[7])"
            ),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn accessors() {
        let c = Catalog::from_json_str(JSON).unwrap();
        let fano = name("DS(7,3,1,[7])");
        assert_eq!(c.status(&fano).unwrap(), Some(Status::All));
        assert_eq!(c.comment(&fano).unwrap(), Some("Singer"));
        assert_eq!(c.num_sets(&fano).unwrap(), 2);
        assert_eq!(c.set(&fano, 1).unwrap()[2], RawElement::Scalar(5));

        let rep = name("DS(36,15,6,[6,6])");
        assert_eq!(c.representation(&rep).unwrap(), &[2, 2, 3, 3]);
        assert_eq!(c.representation(&fano).unwrap(), &[7]);
    }

    #[test]
    fn lookup_errors() {
        let c = Catalog::from_json_str(JSON).unwrap();
        assert!(matches!(
            c.status(&name("DS(9,4,1,[9])")),
            Err(CatalogError::UnknownName(_))
        ));
        assert!(matches!(
            c.set(&name("DS(16,6,2,[2,2,2,2])"), 0),
            Err(CatalogError::NoSets(_))
        ));
        assert!(matches!(
            c.set(&name("DS(7,3,1,[7])"), 2),
            Err(CatalogError::SetIndexOutOfRange {
                index: 2,
                available: 2,
                ..
            })
        ));
    }

    #[test]
    fn get_ds_and_verify() {
        let c = Catalog::from_json_str(JSON).unwrap();
        let e = c.get_ds(16, 6, 2, &[4, 4], 0).unwrap();
        assert_eq!(e.representation, &[4, 4]);
        assert!(e.is_ds().unwrap());

        let e = c.get_ds(7, 3, 1, &[7], 1).unwrap();
        assert!(e.is_ds().unwrap());
    }

    #[test]
    fn groups_for_matches_structurally() {
        let c = Catalog::from_json_str(JSON).unwrap();
        assert_eq!(c.groups_for(16, 6, 2).len(), 2);
        assert!(c.groups_for(7, 3, 10).is_empty());
    }

    #[test]
    fn entries_visit_every_set() {
        let c = Catalog::from_json_str(JSON).unwrap();
        let visited: Vec<(String, usize)> =
            c.entries().map(|e| (e.name.to_string(), e.index)).collect();
        assert_eq!(
            visited,
            [
                ("DS(7,3,1,[7])".to_string(), 0),
                ("DS(7,3,1,[7])".to_string(), 1),
                ("DS(16,6,2,[4,4])".to_string(), 0),
            ]
        );
    }

    #[test]
    fn element_errors_name_the_set() {
        let c = Catalog::from_json_str(r#"{"DS(7,3,1,[7])": {"sets": [[0,1,7]]}}"#).unwrap();
        let e = c.get_ds(7, 3, 1, &[7], 0).unwrap();
        let err = e.verify().unwrap_err();
        assert!(matches!(err, CatalogError::Element { index: 0, .. }));
        assert!(err.to_string().starts_with("DS(7,3,1,[7]) set 0:"));
    }
}

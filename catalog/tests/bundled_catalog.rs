//! Tests against the bundled `data/ds.json` catalog.

use std::path::{Path, PathBuf};

use diffset_catalog::{
    all_groups, audit, Catalog, CatalogError, DsName, Severity, Status, Summary, Table,
};

fn catalog_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/ds.json")
}

fn load() -> Catalog {
    Catalog::from_path(&catalog_path()).unwrap()
}

fn name(s: &str) -> DsName {
    s.parse().unwrap()
}

#[test]
fn loads_every_record() {
    let c = load();
    assert_eq!(c.len(), 10);
    assert_eq!(c.entries().count(), 8);
}

#[test]
fn every_stored_set_verifies() {
    let report = audit(&load());
    for r in &report.results {
        assert_eq!(r.severity, Severity::Pass, "{}: {}", r.subject, r.message);
    }
    assert_eq!(report.count(Severity::Pass), 8);
}

#[test]
fn representation_group_differs_from_invariant_factors() {
    let c = load();
    let n = name("DS(21,5,1,[21])");
    assert_eq!(n.group(), &[21]);
    assert_eq!(c.representation(&n).unwrap(), &[3, 7]);

    let entry = c.get_ds(21, 5, 1, &[21], 0).unwrap();
    assert_eq!(entry.representation, &[3, 7]);
    assert!(entry.is_ds().unwrap());
}

#[test]
fn sixteen_six_two_over_all_groups() {
    let c = load();
    let groups: Vec<String> = c
        .groups_for(16, 6, 2)
        .into_iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        groups,
        ["DS(16,6,2,[2,8])", "DS(16,6,2,[4,4])", "DS(16,6,2,[16])"]
    );
    let text = all_groups(&c, 16, 6, 2);
    assert!(text.contains(
        "No DS(16,6,2) exists in group [16]\nReference: Turyn exponent bound\n"
    ));
    assert!(text.contains("There is at least 1 DS(16,6,2) in group [4,4]\n"));
}

#[test]
fn summary_of_singer_plane() {
    let c = load();
    let n = name("DS(13,4,1,[13])");
    assert_eq!(
        Summary::new(&c, &n).unwrap().to_string(),
        "There is exactly 1 DS(13,4,1) in group [13]\nReference: Singer, PG(2,3)\n\n0 1 3 9\n"
    );
}

#[test]
fn table_of_nonexistent_parameters() {
    let t = Table::from_catalog(&load(), Some(Status::No));
    let rows: Vec<(u64, i128)> = t.rows().iter().map(|r| (r.v, r.n)).collect();
    assert_eq!(rows, [(16, 4), (25, 6)]);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Catalog::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn lookups_on_nonexistent_parameters() {
    let c = load();
    assert!(matches!(
        c.get_ds(25, 9, 3, &[25], 0),
        Err(CatalogError::NoSets(_))
    ));
    assert!(matches!(
        c.get_ds(9, 4, 1, &[9], 0),
        Err(CatalogError::UnknownName(_))
    ));
}

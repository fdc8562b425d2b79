//! Cross-Reference Resolution Test Suite
//!
//! Covers alias transitivity, duplicate-chain resolution, the embedded
//! sample database and the write-once shared handle.

use std::collections::BTreeSet;

use sky_xref::db::{DbConfig, SharedObjectDb};
use sky_xref::{
    encode, Catalog, CatalogIndex, CelestialObject, DbError, LookupError, ObjectDb,
    ObjectDbBuilder, ObjectType,
};

fn idx(text: &str) -> CatalogIndex {
    encode(text).unwrap()
}

/// A <-> B and B <-> C make C reachable from A
#[test]
fn test_alias_transitivity() {
    let (a, b, c) = (idx("NGC 1976"), idx("M42"), idx("Sh2-281"));
    let mut builder = ObjectDbBuilder::new();
    builder.add_cross_reference(a, b);
    builder.add_cross_reference(b, c);
    let db = builder.build();

    let cross = db.try_get_cross_indices(a);
    assert!(cross.contains(&b));
    assert!(cross.contains(&c));
    assert!(!cross.contains(&a));
}

/// A duplicate pointing at one real object resolves to it; pointing at two
/// distinct objects resolves to nothing
#[test]
fn test_duplicate_resolution() {
    let mut builder = ObjectDbBuilder::new();
    builder.add_object(CelestialObject::new(idx("NGC 6885"), ObjectType::OpenCluster).with_magnitude(8.1));
    builder.add_object(CelestialObject::new(idx("NGC 6882"), ObjectType::Duplicate));
    builder.add_object(CelestialObject::new(idx("NGC 5194"), ObjectType::Galaxy));
    builder.add_object(CelestialObject::new(idx("NGC 5195"), ObjectType::Galaxy));
    builder.add_object(CelestialObject::new(idx("IC 4988"), ObjectType::Duplicate));
    builder.add_duplicate_of(idx("NGC 6882"), idx("NGC 6885"));
    builder.add_duplicate_of(idx("IC 4988"), idx("NGC 5194"));
    builder.add_duplicate_of(idx("IC 4988"), idx("NGC 5195"));
    let db = builder.build();

    let resolved = db.try_lookup_by_index(idx("NGC 6882")).unwrap();
    assert_eq!(resolved.index, idx("NGC 6885"));
    assert_eq!(resolved.v_mag, Some(8.1));

    assert!(db.try_lookup_by_index(idx("IC 4988")).is_none());
    assert!(matches!(
        db.resolve(idx("IC 4988")),
        Err(LookupError::AmbiguousDuplicate { .. })
    ));
}

/// A duplicate whose aliases include another duplicate only counts real objects
#[test]
fn test_duplicate_ignores_other_duplicates() {
    let mut builder = ObjectDbBuilder::new();
    builder.add_object(CelestialObject::new(idx("NGC 1"), ObjectType::Duplicate));
    builder.add_object(CelestialObject::new(idx("NGC 2"), ObjectType::Duplicate));
    builder.add_object(CelestialObject::new(idx("NGC 3"), ObjectType::Galaxy));
    builder.add_duplicate_of(idx("NGC 1"), idx("NGC 2"));
    builder.add_duplicate_of(idx("NGC 1"), idx("NGC 3"));
    let db = builder.build();

    assert_eq!(db.try_lookup_by_index(idx("NGC 1")).map(|o| o.index), Some(idx("NGC 3")));
}

/// Alias-only catalogs try the primary alias first, then the extras
#[test]
fn test_alias_order() {
    let mut builder = ObjectDbBuilder::new();
    builder.add_object(CelestialObject::new(idx("NGC 5195"), ObjectType::Galaxy));
    builder.add_cross_reference(idx("UGC 8494"), idx("NGC 9000"));
    builder.add_cross_reference(idx("UGC 8494"), idx("NGC 5195"));
    let db = builder.build();

    let resolved = db.resolve(idx("UGC 8494")).unwrap();
    assert_eq!(resolved.via, idx("NGC 5195"));
}

/// The embedded sample resolves Messier, HR, HD and coordinate aliases
#[test]
fn test_embedded_database() {
    let db = ObjectDb::load_embedded().unwrap();

    for (alias, primary) in [
        ("M31", "NGC 224"),
        ("M 42", "NGC 1976"),
        ("M45", "Mel 22"),
        ("HR 2491", "HIP 32349"),
        ("HD 172167", "HIP 91262"),
        ("TYC 4628-237-1", "HIP 11767"),
        ("NGC 6882", "NGC 6885"),
        ("C20", "NGC 7000"),
    ] {
        let object = db
            .try_lookup_by_name(alias)
            .unwrap_or_else(|| panic!("{alias} did not resolve"));
        assert_eq!(object.index, idx(primary), "{alias}");
    }

    // Not alias-only, so no fallback through the alias table
    assert!(db.try_lookup_by_name("2MASX J00424433+4116074").is_none());
    assert!(db.try_lookup_by_name("IC 4988").is_none());
    assert!(db.try_lookup_by_name("Not an index").is_none());

    let polaris = db.try_get_cross_indices(idx("HIP 11767"));
    assert!(polaris.contains(&idx("WDS J02318+8916")));
    assert!(polaris.contains(&idx("BD+88 8")));

    let sirius = db.try_resolve_common_name("SIRIUS").unwrap();
    assert_eq!(sirius, &BTreeSet::from([idx("HIP 32349")]));

    assert!(db.catalogs().contains(&Catalog::Psr));
    assert!(db.catalogs().contains(&Catalog::Tycho2));
    assert!(db.common_names().contains("Crab Nebula"));
    assert_eq!(db.all_object_indices().len(), db.len());
}

/// Dense storage is an optimization only; results are identical without it
#[test]
fn test_dense_storage_is_transparent() {
    let json = include_str!("../catalogs/objects.json");
    let dense = ObjectDb::from_json(json).unwrap();
    let sparse = ObjectDb::from_json_with_config(json, DbConfig { dense_catalog: None }).unwrap();

    assert_eq!(dense.all_object_indices(), sparse.all_object_indices());
    for name in ["HIP 32349", "HR 7001", "HD 39801", "M31"] {
        assert_eq!(
            dense.try_lookup_by_name(name).map(|o| o.index),
            sparse.try_lookup_by_name(name).map(|o| o.index),
            "{name}"
        );
    }
}

/// Export and reload preserve objects, aliases and resolution
#[test]
fn test_export_round_trip() {
    let db = ObjectDb::load_embedded().unwrap();
    let reloaded = ObjectDb::from_json(&db.to_json().unwrap()).unwrap();

    assert_eq!(reloaded.all_object_indices(), db.all_object_indices());
    assert_eq!(reloaded.catalogs(), db.catalogs());
    for index in db.all_object_indices() {
        assert_eq!(
            reloaded.try_get_cross_indices(*index),
            db.try_get_cross_indices(*index),
            "{index}"
        );
    }
}

/// Loading from disk goes through the same path as the embedded data
#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("objects.json");
    std::fs::write(&path, include_str!("../catalogs/objects.json")).unwrap();
    assert!(ObjectDb::load_from_file(&path).unwrap().len() > 10);

    let missing = dir.path().join("missing.json");
    assert!(matches!(ObjectDb::load_from_file(&missing), Err(DbError::Read(_))));
}

/// The shared handle accepts exactly one initialization
#[test]
fn test_shared_handle_initializes_once() {
    static OBJECTS: SharedObjectDb = SharedObjectDb::new();

    let mut builder = ObjectDbBuilder::new();
    builder.add_object(CelestialObject::new(idx("NGC 224"), ObjectType::Galaxy));
    builder.add_cross_reference(idx("NGC 224"), idx("M31"));
    OBJECTS.initialize(builder).unwrap();

    assert!(matches!(
        OBJECTS.initialize(ObjectDbBuilder::new()),
        Err(DbError::AlreadyInitialized)
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let db = OBJECTS.get().unwrap();
                db.try_lookup_by_name("M31").map(|o| o.index)
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(idx("NGC 224")));
    }
}

//! Identifier Codec Test Suite
//!
//! Exercises the public encode/decode/render surface end to end: canonical
//! round trips for every catalog, bit-exact coordinate fields, rejection of
//! malformed input and longest-prefix catalog identification.

use sky_xref::codec::{abbreviation, canonical, decode, encode, normalize, Designation};
use sky_xref::{Catalog, CatalogIndex, CodecError, DisplayFormat, Epoch};

/// One minimal valid designation per catalog
fn minimal_designation(catalog: Catalog) -> String {
    match catalog {
        Catalog::TwoMass => "2MASS J11400198+3152397".to_string(),
        Catalog::TwoMassX => "2MASX J00424433+4116074".to_string(),
        Catalog::Psr => "PSR J0002+6216".to_string(),
        Catalog::Wds => "WDS J02318+8916".to_string(),
        Catalog::BonnerDurchmusterung => "BD+38 3238".to_string(),
        Catalog::Tycho2 => "TYC 4628-237-1".to_string(),
        _ => format!("{}1", catalog.prefix()),
    }
}

/// Abbreviations of plain and extended designations
#[test]
fn test_plain_round_trip_examples() {
    let n11 = encode("N11").unwrap();
    let decoded = decode(n11).unwrap();
    assert_eq!(decoded.catalog, Catalog::Ngc);
    assert_eq!(canonical(n11, DisplayFormat::Normal).unwrap(), "NGC 0011");
    assert_eq!(abbreviation(n11).unwrap(), "N0011");

    assert_eq!(abbreviation(encode("NGC0526A").unwrap()).unwrap(), "N0526_A");
    assert_eq!(abbreviation(encode("M51a").unwrap()).unwrap(), "M51a");
    assert_eq!(abbreviation(encode("Sh 2 - 6").unwrap()).unwrap(), "Sh2-0006");
    assert_eq!(abbreviation(encode("IC4473 NED01").unwrap()).unwrap(), "I4473N01");
}

/// Every catalog claims its own minimal designation, and the canonical text
/// re-encodes to the same identifier
#[test]
fn test_every_catalog_round_trips() {
    for catalog in Catalog::ALL {
        let text = minimal_designation(catalog);
        let index = encode(&text).unwrap_or_else(|e| panic!("{text}: {e}"));
        assert_eq!(index.is_coordinate_encoded(), catalog.is_coordinate_encoded());
        assert_eq!(decode(index).unwrap().catalog, catalog, "{text}");

        let normalized = normalize(&text).unwrap();
        assert_eq!(encode(&normalized).unwrap(), index, "{text} -> {normalized}");
        assert_eq!(normalize(&normalized).unwrap(), normalized);
    }
}

/// Digit values never change which catalog owns an identifier
#[test]
fn test_partition_under_adversarial_digits() {
    for catalog in Catalog::ALL {
        if catalog.is_coordinate_encoded() {
            continue;
        }
        for digit in ['0', '1', '7', '9'] {
            let number: String = std::iter::once('1')
                .chain(std::iter::repeat(digit))
                .take(catalog.width())
                .collect();
            let text = format!("{}{number}", catalog.prefix());
            let index = encode(&text).unwrap_or_else(|e| panic!("{text}: {e}"));
            assert_eq!(decode(index).unwrap().catalog, catalog, "{text}");
        }
    }
}

/// Coordinate fields survive bit for bit; epochs stay distinguishable
#[test]
fn test_coordinate_fields_round_trip() {
    let j = decode(encode("PSR J0002+6216").unwrap()).unwrap();
    let b = decode(encode("PSR B0633+17").unwrap()).unwrap();
    assert_eq!(
        j.designation,
        Designation::Equatorial {
            ra: 2,
            dec: 62 * 60 + 16,
            epoch: Epoch::J2000,
            south: false,
        }
    );
    match b.designation {
        Designation::Equatorial { epoch, dec, .. } => {
            assert_eq!(epoch, Epoch::B1950);
            assert_eq!(dec, 17);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_ne!(
        abbreviation(encode("PSR J0002+6216").unwrap()).unwrap(),
        abbreviation(encode("PSR B0633+17").unwrap()).unwrap()
    );

    let two_mass = decode(encode("2MASS J11400198-3152397").unwrap()).unwrap();
    assert_eq!(
        two_mass.designation,
        Designation::Equatorial {
            ra: ((11 * 60 + 40) * 60 + 1) * 100 + 98,
            dec: ((31 * 60 + 52) * 60 + 39) * 10 + 7,
            epoch: Epoch::J2000,
            south: true,
        }
    );

    let tycho = decode(encode("TYC 65535-65535-3").unwrap()).unwrap();
    assert_eq!(
        tycho.designation,
        Designation::Tycho {
            region: 65535,
            number: 65535,
            component: 3,
        }
    );
}

/// Normal and alternative renders both re-encode to the original identifier
#[test]
fn test_alternative_renders_are_encodable() {
    for text in ["M13", "B 33", "Mel 22", "Cr 399", "C 41", "ACO 2151", "Sh2-6", "N 526A"] {
        let index = encode(text).unwrap();
        let alternative = canonical(index, DisplayFormat::Alternative).unwrap();
        assert_eq!(encode(&alternative).unwrap(), index, "{text} -> {alternative}");
    }
    assert_eq!(
        canonical(encode("B 33").unwrap(), DisplayFormat::Alternative).unwrap(),
        "B 33"
    );
}

/// Encoding is deterministic and insensitive to spacing
#[test]
fn test_determinism() {
    assert_eq!(encode("NGC 224").unwrap(), encode("NGC 224").unwrap());
    assert_eq!(encode("NGC 224").unwrap(), encode("  N 0224 ").unwrap());
    assert_eq!(decode(encode("M31").unwrap()), decode(encode("M 31").unwrap()));
}

/// Malformed or unsupported input is NotRecognized, never a panic
#[test]
fn test_rejection() {
    for text in [
        "",
        "Not an index",
        "N 0526__",
        "Gaia DR2 5975481144442221696",
        "NGC",
        "M",
        "HIP 1234567",
        "PSR X0002+6216",
        "2MASS J1140019+3152397",
        "WDS J2431+8916",
        "TYC 1-2",
        "ngc 224",
    ] {
        match encode(text) {
            Err(CodecError::NotRecognized { input }) => assert_eq!(input, text),
            other => panic!("{text:?} should be rejected, got {other:?}"),
        }
    }
}

/// Zero is unrepresentable; foreign values surface DecodeInconsistency
#[test]
fn test_reserved_and_foreign_identifiers() {
    assert!(CatalogIndex::from_raw(0).is_none());

    let foreign = CatalogIndex::from_raw(0x7F).unwrap();
    assert!(matches!(
        decode(foreign),
        Err(CodecError::DecodeInconsistency { .. })
    ));
    assert!(canonical(foreign, DisplayFormat::Normal).is_err());
    assert!(abbreviation(foreign).is_err());
}

/// Identifiers are usable as hash keys and parse from text
#[test]
fn test_identifier_traits() {
    let index: CatalogIndex = "HIP 32349".parse().unwrap();
    let mut set = std::collections::HashSet::new();
    set.insert(index);
    assert!(set.contains(&encode("HIP 32349").unwrap()));
    assert_eq!(index.to_string(), "HIP 32349");
    assert_eq!(index.catalog(), Some(Catalog::Hip));
}

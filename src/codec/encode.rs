use once_cell::sync::Lazy;
use regex::Regex;

use crate::codec::layout::{compose, dec_digits, ra_digits};
use crate::codec::{base91, packing, CodecError, Designation, COORDINATE_FLAG};
use crate::core::catalog::Catalog;
use crate::core::index::CatalogIndex;
use crate::core::types::Epoch;

/// Accepted spellings of each catalog's prefix in free-form input.
///
/// Matching is case-sensitive and picks the longest spelling that prefixes
/// the normalized input.
const SPELLINGS: &[(&str, Catalog)] = &[
    ("Abell", Catalog::Abell),
    ("ACO", Catalog::Abell),
    ("Barnard", Catalog::Barnard),
    ("B", Catalog::Barnard),
    ("Caldwell", Catalog::Caldwell),
    ("C", Catalog::Caldwell),
    ("Ced", Catalog::Ced),
    ("CG", Catalog::Cg),
    ("Collinder", Catalog::Collinder),
    ("Cr", Catalog::Collinder),
    ("DG", Catalog::Dg),
    ("Dobashi", Catalog::Dobashi),
    ("Do", Catalog::Dobashi),
    ("Gum", Catalog::Gum),
    ("GUM", Catalog::Gum),
    ("HCG", Catalog::Hcg),
    ("HD", Catalog::Hd),
    ("HH", Catalog::Hh),
    ("HIP", Catalog::Hip),
    ("HR", Catalog::Hr),
    ("IC", Catalog::Ic),
    ("I", Catalog::Ic),
    ("LDN", Catalog::Ldn),
    ("Melotte", Catalog::Melotte),
    ("Mel", Catalog::Melotte),
    ("Messier", Catalog::Messier),
    ("M", Catalog::Messier),
    ("NGC", Catalog::Ngc),
    ("N", Catalog::Ngc),
    ("RCW", Catalog::Rcw),
    ("Sharpless2-", Catalog::Sharpless),
    ("Sh2-", Catalog::Sharpless),
    ("TrES", Catalog::Tres),
    ("UGC", Catalog::Ugc),
    ("U", Catalog::Ugc),
    ("vdB", Catalog::VdB),
    ("WASP", Catalog::Wasp),
    ("XO", Catalog::Xo),
    ("2MASSX", Catalog::TwoMassX),
    ("2MASX", Catalog::TwoMassX),
    ("2MASS", Catalog::TwoMass),
    ("PSR", Catalog::Psr),
    ("WDS", Catalog::Wds),
    ("BD", Catalog::BonnerDurchmusterung),
    ("TYC", Catalog::Tycho2),
];

/// NGC/IC component (`0526A`, `0526_A`) and NED companion (`4473NED01`, `4473N01`) forms
static EXTENDED_NGC_IC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,4})(?:([A-Za-z])|_([A-Za-z])|NED(\d{1,2})|N(\d{2}))$").unwrap()
});

static PSR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^PSR([BJ])(\d{4})([+-])(\d{2}|\d{4})$").unwrap());

static TWO_MASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^2MASS?X?J?(\d{8})([+-])(\d{7})$").unwrap());

static WDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^WDSJ?(\d{5})([+-])(\d{4})$").unwrap());

/// Matched before spaces are dropped; the space separates zone from number
static DURCHMUSTERUNG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^BD\s*([+-])\s*(\d{1,2})\s+(\d{1,5})$").unwrap());

static TYCHO2: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^TYC(\d{1,5})-(\d{1,5})-(\d)$").unwrap());

/// Encode free-form designation text into a catalog identifier.
///
/// # Examples
///
/// ```
/// use sky_xref::codec::{abbreviation, encode};
///
/// assert_eq!(abbreviation(encode("N11").unwrap()).unwrap(), "N0011");
/// assert_eq!(abbreviation(encode("Sh 2 - 6").unwrap()).unwrap(), "Sh2-0006");
/// assert!(encode("Not an index").is_err());
/// ```
///
/// # Errors
///
/// Returns `CodecError::NotRecognized` if no catalog matches, a numeric field
/// is malformed or out of range, or the abbreviation would not fit 63 bits.
pub fn encode(text: &str) -> Result<CatalogIndex, CodecError> {
    let normalized = normalize_input(text);
    let (catalog, rest) =
        guess_catalog(&normalized).ok_or_else(|| CodecError::not_recognized(text))?;

    let raw = if catalog.is_coordinate_encoded() {
        parse_coordinates(catalog, &normalized, text.trim())
            .and_then(|d| wrap_designation(catalog, &d))
    } else {
        plain_payload(catalog, rest)
            .and_then(|payload| packing::pack(&format!("{}{payload}", catalog.prefix())))
    };

    raw.and_then(CatalogIndex::from_raw)
        .ok_or_else(|| CodecError::not_recognized(text))
}

/// Trim and drop every space
fn normalize_input(text: &str) -> String {
    text.trim().chars().filter(|c| *c != ' ').collect()
}

/// Longest matching spelling wins; returns the catalog and the text after it
fn guess_catalog(normalized: &str) -> Option<(Catalog, &str)> {
    SPELLINGS
        .iter()
        .filter(|(spelling, _)| normalized.starts_with(spelling))
        .max_by_key(|(spelling, _)| spelling.len())
        .map(|(spelling, catalog)| (*catalog, &normalized[spelling.len()..]))
}

/// Canonical payload text (the abbreviation minus its prefix) of a
/// plain-text designation, e.g. `"11"` -> `"0011"` for NGC.
pub(crate) fn plain_payload(catalog: Catalog, rest: &str) -> Option<String> {
    let rest = rest.strip_prefix('-').unwrap_or(rest);

    if matches!(catalog, Catalog::Ngc | Catalog::Ic) {
        if let Some(caps) = EXTENDED_NGC_IC.captures(rest) {
            let number: u32 = caps[1].parse().ok()?;
            if let Some(letter) = caps.get(2).or_else(|| caps.get(3)) {
                return Some(format!("{number:04}_{}", letter.as_str()));
            }
            if let Some(ned) = caps.get(4).or_else(|| caps.get(5)) {
                let companion: u32 = ned.as_str().parse().ok()?;
                return Some(format!("{number:04}N{companion:02}"));
            }
        }
    }

    fill_template(catalog.placeholders(), strip_leading_zeros(rest))
}

fn strip_leading_zeros(value: &str) -> &str {
    let trimmed = value.trim_start_matches('0');
    if trimmed.is_empty() && !value.is_empty() {
        &value[value.len() - 1..]
    } else {
        trimmed
    }
}

/// Right-align `value` against the placeholders.
///
/// Unfilled `0` slots stay `0`, unfilled `*` slots are dropped. The value
/// must start with a digit and may not be longer than the template.
fn fill_template(placeholders: &str, value: &str) -> Option<String> {
    let slots = placeholders.as_bytes();
    let chars = value.as_bytes();
    if chars.is_empty() || chars.len() > slots.len() || !chars[0].is_ascii_digit() {
        return None;
    }

    let offset = slots.len() - chars.len();
    let mut out = String::with_capacity(slots.len());
    for (i, &slot) in slots.iter().enumerate() {
        if i < offset {
            match slot {
                b'0' => out.push('0'),
                b'*' => {}
                _ => return None,
            }
            continue;
        }

        let c = chars[i - offset];
        let fits = match slot {
            b'0' => c.is_ascii_digit(),
            b'*' => c.is_ascii_alphanumeric(),
            _ => false,
        };
        if !fits {
            return None;
        }
        out.push(char::from(c));
    }
    Some(out)
}

/// Extract the structured fields of a coordinate-encoded designation
fn parse_coordinates(catalog: Catalog, normalized: &str, trimmed: &str) -> Option<Designation> {
    match catalog {
        Catalog::TwoMass | Catalog::TwoMassX => {
            let caps = TWO_MASS.captures(normalized)?;
            Some(Designation::Equatorial {
                ra: ra_digits(catalog)?.parse(&caps[1])?,
                dec: dec_digits(catalog, Epoch::J2000)?.parse(&caps[3])?,
                epoch: Epoch::J2000,
                south: &caps[2] == "-",
            })
        }
        Catalog::Psr => {
            let caps = PSR.captures(normalized)?;
            let epoch = Epoch::from_letter(caps[1].chars().next()?)?;
            Some(Designation::Equatorial {
                ra: ra_digits(catalog)?.parse(&caps[2])?,
                // J names carry ddmm, B names only dd; the width check rejects mixes
                dec: dec_digits(catalog, epoch)?.parse(&caps[4])?,
                epoch,
                south: &caps[3] == "-",
            })
        }
        Catalog::Wds => {
            let caps = WDS.captures(normalized)?;
            Some(Designation::Equatorial {
                ra: ra_digits(catalog)?.parse(&caps[1])?,
                dec: dec_digits(catalog, Epoch::J2000)?.parse(&caps[3])?,
                epoch: Epoch::J2000,
                south: &caps[2] == "-",
            })
        }
        Catalog::BonnerDurchmusterung => {
            let caps = DURCHMUSTERUNG.captures(trimmed)?;
            Some(Designation::Zone {
                zone: caps[2].parse().ok()?,
                number: caps[3].parse().ok()?,
                south: &caps[1] == "-",
            })
        }
        Catalog::Tycho2 => {
            let caps = TYCHO2.captures(normalized)?;
            Some(Designation::Tycho {
                region: caps[1].parse().ok()?,
                number: caps[2].parse().ok()?,
                component: caps[3].parse().ok()?,
            })
        }
        _ => None,
    }
}

/// Payload word -> base-91 text -> seven-bit packing, with bit 63 set
pub(crate) fn wrap_designation(catalog: Catalog, designation: &Designation) -> Option<u64> {
    let payload = compose(catalog, designation)?;
    if payload >> 56 != 0 {
        return None;
    }

    let bytes = payload.to_be_bytes();
    let text = base91::encode(&bytes[1..]);
    packing::pack(&text).map(|packed| packed | COORDINATE_FLAG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::render::abbreviation;

    fn abbrev(text: &str) -> String {
        abbreviation(encode(text).unwrap()).unwrap()
    }

    #[test]
    fn test_plain_templates() {
        assert_eq!(abbrev("N11"), "N0011");
        assert_eq!(abbrev("NGC 11"), "N0011");
        assert_eq!(abbrev("NGC 0011"), "N0011");
        assert_eq!(abbrev("M51a"), "M51a");
        assert_eq!(abbrev("M 13"), "M13");
        assert_eq!(abbrev("M013"), "M13");
        assert_eq!(abbrev("Messier 110"), "M110");
        assert_eq!(abbrev("HIP 120416"), "HIP120416");
        assert_eq!(abbrev("Cr 399"), "Cr399");
        assert_eq!(abbrev("Collinder 21"), "Cr021");
        assert_eq!(abbrev("Ced 214a"), "Ced214a");
        assert_eq!(abbrev("Ced 214"), "Ced0214");
        assert_eq!(abbrev("UGC 12345"), "U12345");
    }

    #[test]
    fn test_dash_catalogs() {
        assert_eq!(abbrev("Sh 2 - 6"), "Sh2-0006");
        assert_eq!(abbrev("Sharpless 2-155"), "Sh2-0155");
        assert_eq!(abbrev("TrES-3"), "TrES-03");
        assert_eq!(abbrev("TrES 3"), "TrES-03");
        assert_eq!(abbrev("WASP-12"), "WASP-012");
        assert_eq!(abbrev("XO-7"), "XO-07");
    }

    #[test]
    fn test_extended_ngc_ic() {
        assert_eq!(abbrev("NGC0526A"), "N0526_A");
        assert_eq!(abbrev("N0526_A"), "N0526_A");
        assert_eq!(abbrev("IC4473 NED01"), "I4473N01");
        assert_eq!(abbrev("I4473N01"), "I4473N01");
        assert_eq!(abbrev("IC 4473 NED1"), "I4473N01");
    }

    #[test]
    fn test_longest_spelling_wins() {
        assert_eq!(guess_catalog("Mel22").map(|g| g.0), Some(Catalog::Melotte));
        assert_eq!(guess_catalog("M22").map(|g| g.0), Some(Catalog::Messier));
        assert_eq!(guess_catalog("Cr22").map(|g| g.0), Some(Catalog::Collinder));
        assert_eq!(guess_catalog("CG22").map(|g| g.0), Some(Catalog::Cg));
        assert_eq!(guess_catalog("C22").map(|g| g.0), Some(Catalog::Caldwell));
        assert_eq!(guess_catalog("BD+351234").map(|g| g.0), Some(Catalog::BonnerDurchmusterung));
        assert_eq!(guess_catalog("2MASXJ1").map(|g| g.0), Some(Catalog::TwoMassX));
        assert_eq!(guess_catalog("Gaia"), None);
    }

    #[test]
    fn test_rejections() {
        for text in [
            "",
            "   ",
            "Not an index",
            "N 0526__",
            "Gaia DR2 5975481144442221696",
            "NGC 12345",
            "HD 1234567",
            "M abc",
            "Mabc",
            "Ced 21ab",
            "PSR J0002+62",
            "PSR B0633+1700",
            "PSR J2400+0000",
            "2MASS J11400198+315239",
            "TYC 1234-5678-4",
            "BD+90 1",
            "BD+31234",
            "BD+123 4",
            "PSR J0000+9059",
            "2MASS J00000000+9059599",
        ] {
            assert!(
                matches!(encode(text), Err(CodecError::NotRecognized { .. })),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_coordinate_identifiers_have_flag() {
        for text in [
            "PSR J0002+6216",
            "PSR B0633+17",
            "2MASS J11400198+3152397",
            "2MASX J11400198+3152397",
            "WDS J00057+4549",
            "BD+35 1234",
            "BD-00 17",
            "TYC 1234-5678-1",
        ] {
            let index = encode(text).unwrap();
            assert!(index.is_coordinate_encoded(), "{text}");
        }
    }

    #[test]
    fn test_durchmusterung_zone_ends_at_space() {
        let short_zone = encode("BD+3 1234").unwrap();
        assert_eq!(short_zone, encode("BD+03 1234").unwrap());
        assert_ne!(short_zone, encode("BD+31 234").unwrap());
        assert_eq!(short_zone.to_string(), "BD+03 1234");
        assert_eq!(encode(" BD + 38  3238 ").unwrap(), encode("BD+38 3238").unwrap());
    }

    #[test]
    fn test_declination_at_pole() {
        assert!(encode("PSR J0000+9000").is_ok());
        assert!(encode("2MASS J00000000-9000000").is_ok());
    }

    #[test]
    fn test_durchmusterung_zero_zone_sign_is_kept() {
        let north = encode("BD+00 17").unwrap();
        let south = encode("BD-00 17").unwrap();
        assert_ne!(north, south);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(encode("NGC 224").unwrap(), encode("N224").unwrap());
        assert_eq!(
            encode("PSR J0002+6216").unwrap(),
            encode(" PSR J0002+6216 ").unwrap()
        );
    }
}

//! Canonical text of identifiers.
//!
//! Every string produced here encodes back to the identifier it was
//! rendered from, in both display formats.

use crate::codec::decode::decode;
use crate::codec::layout::{dec_digits, ra_digits};
use crate::codec::{packing, CodecError, Decoded, Designation, COORDINATE_FLAG};
use crate::core::catalog::Catalog;
use crate::core::index::CatalogIndex;
use crate::core::types::DisplayFormat;

/// Short packed form of an identifier (`N0526_A`, `M51a`, or the base-91
/// text of a coordinate payload), suitable as a stable storage key.
///
/// # Errors
///
/// Returns `CodecError::DecodeInconsistency` for identifiers the encoder
/// never produces.
pub fn abbreviation(index: CatalogIndex) -> Result<String, CodecError> {
    decode(index)?;
    let raw = index.raw();
    packing::unpack(raw & !COORDINATE_FLAG)
        .ok_or_else(|| CodecError::inconsistent(raw, "payload is not packed text"))
}

/// Human-readable designation, e.g. `NGC 0526A`, `M13`, `PSR J0002+6216`.
///
/// # Errors
///
/// Returns `CodecError::DecodeInconsistency` for identifiers the encoder
/// never produces.
pub fn canonical(index: CatalogIndex, format: DisplayFormat) -> Result<String, CodecError> {
    let decoded = decode(index)?;
    render(&decoded, format)
        .ok_or_else(|| CodecError::inconsistent(index.raw(), "fields cannot be rendered"))
}

/// Render already decoded fields
#[must_use]
pub fn render(decoded: &Decoded, format: DisplayFormat) -> Option<String> {
    let catalog = decoded.catalog;
    match &decoded.designation {
        Designation::Numbered { number } => Some(render_numbered(catalog, number, format)),
        Designation::Equatorial {
            ra,
            dec,
            epoch,
            south,
        } => {
            let ra = ra_digits(catalog)?.format(*ra)?;
            let dec = dec_digits(catalog, *epoch)?.format(*dec)?;
            let sign = if *south { '-' } else { '+' };
            let epoch = catalog.implied_epoch().unwrap_or(*epoch);
            Some(format!("{} {}{ra}{sign}{dec}", catalog.label(), epoch.letter()))
        }
        Designation::Zone {
            zone,
            number,
            south,
        } => {
            let sign = if *south { '-' } else { '+' };
            Some(format!("{}{sign}{zone:02} {number}", catalog.label()))
        }
        Designation::Tycho {
            region,
            number,
            component,
        } => Some(format!("{} {region}-{number}-{component}", catalog.label())),
    }
}

fn render_numbered(catalog: Catalog, number: &str, format: DisplayFormat) -> String {
    if matches!(catalog, Catalog::Ngc | Catalog::Ic) {
        return render_ngc_ic(catalog, number, format);
    }

    let label = match format {
        DisplayFormat::Normal => catalog.label(),
        DisplayFormat::Alternative => catalog.alternative_label().unwrap_or(catalog.label()),
    };
    // Single-letter catalogs and dashed labels glue to the number
    let glued = label.ends_with('-')
        || (format == DisplayFormat::Normal && matches!(catalog, Catalog::Messier | Catalog::Caldwell));

    if glued {
        format!("{label}{number}")
    } else {
        format!("{label} {number}")
    }
}

/// `NGC 0526`, `NGC 0526A`, `IC 4473 NED01`; the alternative form drops
/// the zero padding
fn render_ngc_ic(catalog: Catalog, number: &str, format: DisplayFormat) -> String {
    let split = number
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(number.len());
    let (digits, suffix) = number.split_at(split);

    let digits = match format {
        DisplayFormat::Normal => format!("{digits:0>4}"),
        DisplayFormat::Alternative => digits.to_string(),
    };

    let suffix = if let Some(letter) = suffix.strip_prefix('_') {
        letter.to_string()
    } else if let Some(companion) = suffix.strip_prefix('N') {
        format!(" NED{companion}")
    } else {
        suffix.to_string()
    };

    format!("{} {digits}{suffix}", catalog.label())
}

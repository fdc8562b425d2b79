use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::codec::encode::{plain_payload, wrap_designation};
use crate::codec::layout::{compose, extract, payload_tag};
use crate::codec::{base91, packing, CodecError, Decoded, Designation, COORDINATE_FLAG};
use crate::core::catalog::Catalog;
use crate::core::index::CatalogIndex;

/// Plain-text catalogs grouped by the first character of their prefix,
/// longest prefix first inside each group.
static PARTITION: Lazy<HashMap<u8, Vec<Catalog>>> = Lazy::new(|| {
    let mut partition: HashMap<u8, Vec<Catalog>> = HashMap::new();
    for catalog in Catalog::ALL {
        if catalog.is_coordinate_encoded() {
            continue;
        }
        let first = catalog.prefix().as_bytes()[0];
        partition.entry(first).or_default().push(catalog);
    }
    for candidates in partition.values_mut() {
        candidates.sort_by_key(|c| std::cmp::Reverse(c.prefix().len()));
    }
    partition
});

/// Leading seven-bit group of a plain identifier
fn leading_char(raw: u64) -> u8 {
    let groups = packing::group_count(raw);
    ((raw >> ((groups - 1) * 7)) & 0x7F) as u8
}

/// Longest-prefix match of a plain identifier.
///
/// Returns the catalog and the bit width of the payload below its key.
fn match_prefix(raw: u64) -> Option<(Catalog, u32)> {
    let candidates = PARTITION.get(&leading_char(raw))?;
    let raw_lzc = raw.leading_zeros();
    candidates.iter().find_map(|&catalog| {
        let key = catalog.key();
        let shift = key.leading_zeros().checked_sub(raw_lzc)?;
        // A bare prefix without payload is never produced by the encoder
        if shift == 0 || raw >> shift != key {
            return None;
        }
        Some((catalog, shift))
    })
}

fn payload_bits(raw: u64, shift: u32) -> u64 {
    raw & !(u64::MAX << shift)
}

/// Recover the owning catalog and payload of an identifier.
///
/// # Errors
///
/// Returns `CodecError::DecodeInconsistency` if the identifier was not
/// produced by [`encode`](crate::codec::encode).
pub fn decode(index: CatalogIndex) -> Result<Decoded, CodecError> {
    let raw = index.raw();
    if raw & COORDINATE_FLAG != 0 {
        decode_coordinates(raw)
    } else {
        decode_plain(raw)
    }
}

fn decode_plain(raw: u64) -> Result<Decoded, CodecError> {
    let (catalog, shift) =
        match_prefix(raw).ok_or_else(|| CodecError::inconsistent(raw, "no catalog prefix matches"))?;

    let payload = packing::unpack(payload_bits(raw, shift))
        .ok_or_else(|| CodecError::inconsistent(raw, "payload is not packed text"))?;

    // Only the canonical payload is ever packed
    if plain_payload(catalog, &payload).as_deref() != Some(payload.as_str()) {
        return Err(CodecError::inconsistent(raw, "payload does not fit the catalog template"));
    }

    Ok(Decoded {
        catalog,
        designation: Designation::Numbered {
            number: trim_number(&payload).to_string(),
        },
    })
}

fn decode_coordinates(raw: u64) -> Result<Decoded, CodecError> {
    let text = packing::unpack(raw & !COORDINATE_FLAG)
        .ok_or_else(|| CodecError::inconsistent(raw, "payload is not packed text"))?;
    let bytes = base91::decode(&text)
        .ok_or_else(|| CodecError::inconsistent(raw, "payload is not base-91 text"))?;
    let bytes: [u8; 7] = bytes
        .try_into()
        .map_err(|_| CodecError::inconsistent(raw, "payload has the wrong length"))?;

    let mut word = [0u8; 8];
    word[1..].copy_from_slice(&bytes);
    let payload = u64::from_be_bytes(word);

    let catalog = Catalog::from_tag(payload_tag(payload))
        .ok_or_else(|| CodecError::inconsistent(raw, "unknown coordinate catalog tag"))?;
    let designation = extract(catalog, payload)
        .ok_or_else(|| CodecError::inconsistent(raw, "payload fields are malformed"))?;

    if compose(catalog, &designation) != Some(payload) {
        return Err(CodecError::inconsistent(raw, "payload fields are out of range"));
    }
    if wrap_designation(catalog, &designation) != Some(raw) {
        return Err(CodecError::inconsistent(raw, "payload text is not canonical"));
    }

    Ok(Decoded {
        catalog,
        designation,
    })
}

/// Owning catalog of an identifier, without materializing the payload.
///
/// Assumes the identifier came out of the encoder; use [`decode`] to
/// validate foreign values.
#[must_use]
pub fn catalog_of(index: CatalogIndex) -> Option<Catalog> {
    let raw = index.raw();
    if raw & COORDINATE_FLAG == 0 {
        return match_prefix(raw).map(|(catalog, _)| catalog);
    }

    let text = packing::unpack(raw & !COORDINATE_FLAG)?;
    let bytes = base91::decode(&text)?;
    let tag = *bytes.last()?;
    Catalog::from_tag(tag & 0x7F)
}

/// Object number of a purely numeric plain identifier of `catalog`,
/// e.g. `120416` for `HIP 120416`.
///
/// Walks the packed digits in place; returns `None` for another catalog,
/// a suffixed payload, or a coordinate-encoded identifier.
#[must_use]
pub fn plain_number(index: CatalogIndex, catalog: Catalog) -> Option<u32> {
    let raw = index.raw();
    if raw & COORDINATE_FLAG != 0 || catalog.is_coordinate_encoded() {
        return None;
    }

    let key = catalog.key();
    let shift = key.leading_zeros().checked_sub(raw.leading_zeros())?;
    if shift == 0 || shift % 7 != 0 || raw >> shift != key {
        return None;
    }
    // A longer prefix sharing this one (`Mel` vs `M`) owns the identifier
    if match_prefix(raw).map(|(owner, _)| owner) != Some(catalog) {
        return None;
    }

    let payload = payload_bits(raw, shift);
    let mut number = 0u32;
    for i in (0..shift / 7).rev() {
        let c = ((payload >> (i * 7)) & 0x7F) as u8;
        if !c.is_ascii_digit() {
            return None;
        }
        number = number.checked_mul(10)?.checked_add(u32::from(c - b'0'))?;
    }
    Some(number)
}

/// Payload text with leading zeros removed, keeping at least one digit
pub(crate) fn trim_number(payload: &str) -> &str {
    let digits = payload.bytes().take_while(u8::is_ascii_digit).count();
    let zeros = payload.bytes().take_while(|b| *b == b'0').count();
    &payload[zeros.min(digits.saturating_sub(1))..]
}

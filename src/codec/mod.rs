//! Catalog identifier codec.
//!
//! Packs a human-readable catalog designation into a single 64-bit
//! [`CatalogIndex`] and unpacks it back into canonical text.
//!
//! ## Families
//!
//! | Family | MSB | Packed form |
//! |--------|-----|-------------|
//! | Plain text (NGC, IC, Messier, HIP, ...) | 0 | abbreviation such as `N0526_A`, seven bits per character |
//! | Coordinate encoded (2MASS, PSR, WDS, BD, Tycho-2) | 1 | structured RA/Dec payload, base-91 text, seven bits per character |
//!
//! ## Example
//!
//! ```rust
//! use sky_xref::codec::{abbreviation, canonical, decode, encode};
//! use sky_xref::core::catalog::Catalog;
//! use sky_xref::core::types::DisplayFormat;
//!
//! let index = encode("NGC0526A").unwrap();
//! assert_eq!(decode(index).unwrap().catalog, Catalog::Ngc);
//! assert_eq!(abbreviation(index).unwrap(), "N0526_A");
//! assert_eq!(canonical(index, DisplayFormat::Normal).unwrap(), "NGC 0526A");
//! ```

pub mod base91;
pub mod decode;
pub mod encode;
pub mod layout;
pub mod packing;
pub mod render;

use serde::Serialize;
use thiserror::Error;

use crate::core::catalog::Catalog;
use crate::core::index::CatalogIndex;
use crate::core::types::Epoch;

pub use decode::{catalog_of, decode, plain_number};
pub use encode::encode;
pub use render::{abbreviation, canonical};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("'{input}' is not a recognized catalog designation")]
    NotRecognized { input: String },

    #[error("identifier {raw:#018x} does not belong to any known catalog: {reason}")]
    DecodeInconsistency { raw: u64, reason: &'static str },
}

impl CodecError {
    pub(crate) fn not_recognized(input: &str) -> Self {
        Self::NotRecognized {
            input: input.to_string(),
        }
    }

    pub(crate) fn inconsistent(raw: u64, reason: &'static str) -> Self {
        Self::DecodeInconsistency { raw, reason }
    }
}

/// Payload of a decoded identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Designation {
    /// Object number with leading zeros trimmed, plus any suffix
    /// (`"526"`, `"526_A"`, `"4473N01"`, `"51a"`)
    Numbered { number: String },

    /// Equatorial position in catalog-specific linear units
    /// (see [`layout::ra_digits`] and [`layout::dec_digits`])
    Equatorial {
        ra: u32,
        dec: u32,
        epoch: Epoch,
        south: bool,
    },

    /// Durchmusterung zone (declination degree band) and running number
    Zone { zone: u8, number: u32, south: bool },

    /// Tycho-2 region, running number and component
    Tycho {
        region: u16,
        number: u16,
        component: u8,
    },
}

/// A decoded identifier: owning catalog plus payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub catalog: Catalog,
    pub designation: Designation,
}

/// Bit 63 marks a coordinate-encoded identifier
pub const COORDINATE_FLAG: u64 = 1 << 63;

/// Encode `text` and render it back in Normal form
///
/// # Errors
///
/// Returns `CodecError::NotRecognized` if `text` is not a valid designation.
pub fn normalize(text: &str) -> Result<String, CodecError> {
    let index: CatalogIndex = encode(text)?;
    canonical(index, crate::core::types::DisplayFormat::Normal)
}

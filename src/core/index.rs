use std::num::NonZeroU64;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{self, CodecError};
use crate::core::catalog::Catalog;
use crate::core::types::DisplayFormat;

/// Opaque 64-bit catalog identifier.
///
/// Bit 63 set marks a coordinate-encoded identifier. Zero is reserved for
/// "no object" and cannot be represented; absence is `Option::None`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CatalogIndex(NonZeroU64);

impl CatalogIndex {
    /// Wrap a raw value; `None` for the reserved zero.
    ///
    /// Any other value is accepted as-is. Use [`codec::decode`] to check
    /// that it belongs to a known catalog.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Option<Self> {
        match NonZeroU64::new(raw) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0.get()
    }

    #[must_use]
    pub const fn is_coordinate_encoded(self) -> bool {
        self.raw() & codec::COORDINATE_FLAG != 0
    }

    /// Owning catalog, if the identifier belongs to one
    #[must_use]
    pub fn catalog(self) -> Option<Catalog> {
        codec::catalog_of(self)
    }

    /// # Errors
    ///
    /// Returns `CodecError::DecodeInconsistency` for foreign identifiers.
    pub fn to_canonical(self, format: DisplayFormat) -> Result<String, CodecError> {
        codec::canonical(self, format)
    }

    /// Parse either a designation or a raw identifier written as `0x…` hex.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::NotRecognized` if neither form applies.
    pub fn parse_any(text: &str) -> Result<Self, CodecError> {
        let trimmed = text.trim();
        if let Some(hex) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            return u64::from_str_radix(hex, 16)
                .ok()
                .and_then(Self::from_raw)
                .ok_or_else(|| CodecError::not_recognized(text));
        }
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return trimmed
                .parse::<u64>()
                .ok()
                .and_then(Self::from_raw)
                .ok_or_else(|| CodecError::not_recognized(text));
        }
        codec::encode(trimmed)
    }
}

impl std::fmt::Display for CatalogIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match codec::canonical(*self, DisplayFormat::Normal) {
            Ok(text) => write!(f, "{text}"),
            Err(_) => write!(f, "{:#018x}", self.raw()),
        }
    }
}

impl std::fmt::Debug for CatalogIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CatalogIndex({self} = {:#x})", self.raw())
    }
}

impl FromStr for CatalogIndex {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::encode(s)
    }
}

impl Serialize for CatalogIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CatalogIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        codec::encode(&text).map_err(serde::de::Error::custom)
    }
}

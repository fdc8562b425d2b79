use serde::{Deserialize, Serialize};

use crate::core::types::{Epoch, Family};

/// Pack an ASCII prefix seven bits per character, first character most significant.
const fn pack_prefix(prefix: &str) -> u64 {
    let bytes = prefix.as_bytes();
    let mut key = 0u64;
    let mut i = 0;
    while i < bytes.len() {
        key = (key << 7) | bytes[i] as u64;
        i += 1;
    }
    key
}

/// One of the historical naming schemes an identifier can belong to.
///
/// The set is closed: every encode/decode path matches on it exhaustively, so
/// adding a variant forces every table below to be extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Catalog {
    /// Abell rich clusters of galaxies (ACO)
    Abell,
    /// Barnard dark nebulae
    Barnard,
    /// Patrick Moore's Caldwell list
    Caldwell,
    /// Cederblad bright diffuse nebulae
    Ced,
    /// Cometary globules
    Cg,
    /// Collinder open clusters
    Collinder,
    /// Dorschner-Gürtler reflection nebulae
    Dg,
    /// Dobashi dark clouds
    Dobashi,
    /// Gum HII regions
    Gum,
    /// Hickson compact groups
    Hcg,
    /// Henry Draper catalogue
    Hd,
    /// Herbig-Haro objects
    Hh,
    /// Hipparcos catalogue
    Hip,
    /// Yale Bright Star catalogue (Harvard Revised)
    Hr,
    /// Index Catalogue
    Ic,
    /// Lynds dark nebulae
    Ldn,
    /// Melotte clusters
    Melotte,
    /// Messier objects
    Messier,
    /// New General Catalogue
    Ngc,
    /// Rodgers, Campbell & Whiteoak HII regions
    Rcw,
    /// Sharpless HII regions (Sh2)
    Sharpless,
    /// Trans-Atlantic Exoplanet Survey hosts
    Tres,
    /// Uppsala General Catalogue of galaxies
    Ugc,
    /// van den Bergh reflection nebulae
    VdB,
    /// Wide Angle Search for Planets hosts
    Wasp,
    /// XO project exoplanet hosts
    Xo,
    /// 2MASS point sources
    TwoMass,
    /// 2MASS extended sources
    TwoMassX,
    /// Pulsars
    Psr,
    /// Washington Double Star catalogue
    Wds,
    /// Bonner Durchmusterung
    BonnerDurchmusterung,
    /// Tycho-2
    Tycho2,
}

impl Catalog {
    /// Every catalog in the registry.
    pub const ALL: [Catalog; 32] = [
        Catalog::Abell,
        Catalog::Barnard,
        Catalog::Caldwell,
        Catalog::Ced,
        Catalog::Cg,
        Catalog::Collinder,
        Catalog::Dg,
        Catalog::Dobashi,
        Catalog::Gum,
        Catalog::Hcg,
        Catalog::Hd,
        Catalog::Hh,
        Catalog::Hip,
        Catalog::Hr,
        Catalog::Ic,
        Catalog::Ldn,
        Catalog::Melotte,
        Catalog::Messier,
        Catalog::Ngc,
        Catalog::Rcw,
        Catalog::Sharpless,
        Catalog::Tres,
        Catalog::Ugc,
        Catalog::VdB,
        Catalog::Wasp,
        Catalog::Xo,
        Catalog::TwoMass,
        Catalog::TwoMassX,
        Catalog::Psr,
        Catalog::Wds,
        Catalog::BonnerDurchmusterung,
        Catalog::Tycho2,
    ];

    /// The packed prefix of this catalog's abbreviations (1-5 printable characters).
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Abell => "ACO",
            Self::Barnard => "B",
            Self::Caldwell => "C",
            Self::Ced => "Ced",
            Self::Cg => "CG",
            Self::Collinder => "Cr",
            Self::Dg => "DG",
            Self::Dobashi => "Do",
            Self::Gum => "Gum",
            Self::Hcg => "HCG",
            Self::Hd => "HD",
            Self::Hh => "HH",
            Self::Hip => "HIP",
            Self::Hr => "HR",
            Self::Ic => "I",
            Self::Ldn => "LDN",
            Self::Melotte => "Mel",
            Self::Messier => "M",
            Self::Ngc => "N",
            Self::Rcw => "RCW",
            Self::Sharpless => "Sh2-",
            Self::Tres => "TrES-",
            Self::Ugc => "U",
            Self::VdB => "vdB",
            Self::Wasp => "WASP-",
            Self::Xo => "XO-",
            Self::TwoMass => "2M",
            Self::TwoMassX => "2MX",
            Self::Psr => "PSR",
            Self::Wds => "WDS",
            Self::BonnerDurchmusterung => "BD",
            Self::Tycho2 => "TYC",
        }
    }

    /// Placeholders following the prefix in the abbreviation template.
    ///
    /// `0` requires a digit, `*` accepts a digit or a letter. Empty for the
    /// coordinate-encoded family.
    #[must_use]
    pub const fn placeholders(self) -> &'static str {
        match self {
            Self::Abell | Self::Cg | Self::Dobashi | Self::Hh | Self::Hr | Self::Ic => "0000",
            Self::Ldn | Self::Ngc | Self::Sharpless => "0000",
            Self::Barnard | Self::Caldwell | Self::Collinder | Self::Dg | Self::Gum => "000",
            Self::Hcg | Self::Melotte | Self::Rcw | Self::VdB | Self::Wasp => "000",
            Self::Ced => "000*",
            Self::Messier => "***",
            Self::Hd | Self::Hip => "000000",
            Self::Ugc => "00000",
            Self::Tres | Self::Xo => "00",
            Self::TwoMass
            | Self::TwoMassX
            | Self::Psr
            | Self::Wds
            | Self::BonnerDurchmusterung
            | Self::Tycho2 => "",
        }
    }

    /// Digits reserved for the object number, 0 for coordinate-encoded catalogs.
    #[must_use]
    pub const fn width(self) -> usize {
        self.placeholders().len()
    }

    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::TwoMass
            | Self::TwoMassX
            | Self::Psr
            | Self::Wds
            | Self::BonnerDurchmusterung
            | Self::Tycho2 => Family::CoordinateEncoded,
            _ => Family::PlainText,
        }
    }

    #[must_use]
    pub const fn is_coordinate_encoded(self) -> bool {
        matches!(self.family(), Family::CoordinateEncoded)
    }

    /// The prefix packed seven bits per character, e.g. `Cr` -> `'C' << 7 | 'r'`.
    #[must_use]
    pub const fn key(self) -> u64 {
        pack_prefix(self.prefix())
    }

    /// Low seven bits of the key; identifies the catalog inside a coordinate payload.
    #[must_use]
    pub const fn tag(self) -> u8 {
        (self.key() & 0x7F) as u8
    }

    /// Catalogs whose entries are only reachable through cross references:
    /// a direct miss on one of these consults the alias table.
    #[must_use]
    pub const fn is_alias_only(self) -> bool {
        matches!(
            self,
            Self::Messier
                | Self::Ic
                | Self::Caldwell
                | Self::Collinder
                | Self::Hr
                | Self::Hd
                | Self::Hip
                | Self::Barnard
                | Self::Ced
                | Self::Cg
                | Self::Dg
                | Self::Dobashi
                | Self::Gum
                | Self::Hh
                | Self::Ldn
                | Self::Melotte
                | Self::Rcw
                | Self::Sharpless
                | Self::Ugc
                | Self::VdB
                | Self::Tycho2
        )
    }

    /// Epoch implied by the designation scheme, `None` when the designation
    /// carries its own epoch letter or has no equatorial coordinates.
    #[must_use]
    pub const fn implied_epoch(self) -> Option<Epoch> {
        match self {
            Self::TwoMass | Self::TwoMassX | Self::Wds => Some(Epoch::J2000),
            _ => None,
        }
    }

    /// Label used in front of the number when rendering canonical text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Abell => "ACO",
            Self::Barnard => "Barnard",
            Self::Caldwell => "C",
            Self::Ced => "Ced",
            Self::Cg => "CG",
            Self::Collinder => "Cr",
            Self::Dg => "DG",
            Self::Dobashi => "Dobashi",
            Self::Gum => "Gum",
            Self::Hcg => "HCG",
            Self::Hd => "HD",
            Self::Hh => "HH",
            Self::Hip => "HIP",
            Self::Hr => "HR",
            Self::Ic => "IC",
            Self::Ldn => "LDN",
            Self::Melotte => "Mel",
            Self::Messier => "M",
            Self::Ngc => "NGC",
            Self::Rcw => "RCW",
            Self::Sharpless => "Sh2-",
            Self::Tres => "TrES-",
            Self::Ugc => "UGC",
            Self::VdB => "vdB",
            Self::Wasp => "WASP-",
            Self::Xo => "XO-",
            Self::TwoMass => "2MASS",
            Self::TwoMassX => "2MASX",
            Self::Psr => "PSR",
            Self::Wds => "WDS",
            Self::BonnerDurchmusterung => "BD",
            Self::Tycho2 => "TYC",
        }
    }

    /// Alternative label used for autocomplete lists, if the catalog has one.
    #[must_use]
    pub const fn alternative_label(self) -> Option<&'static str> {
        match self {
            Self::Abell => Some("Abell"),
            Self::Barnard => Some("B"),
            Self::Caldwell => Some("Caldwell"),
            Self::Collinder => Some("Collinder"),
            Self::Melotte => Some("Melotte"),
            Self::Messier => Some("Messier"),
            Self::Sharpless => Some("Sharpless 2-"),
            _ => None,
        }
    }

    /// Find the coordinate-encoded catalog owning a payload tag.
    #[must_use]
    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.is_coordinate_encoded() && c.tag() == tag)
    }
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abell => write!(f, "Abell"),
            Self::Barnard => write!(f, "Barnard"),
            Self::Caldwell => write!(f, "Caldwell"),
            Self::Ced => write!(f, "Cederblad"),
            Self::Cg => write!(f, "CG"),
            Self::Collinder => write!(f, "Collinder"),
            Self::Dg => write!(f, "DG"),
            Self::Dobashi => write!(f, "Dobashi"),
            Self::Gum => write!(f, "Gum"),
            Self::Hcg => write!(f, "HCG"),
            Self::Hd => write!(f, "HD"),
            Self::Hh => write!(f, "HH"),
            Self::Hip => write!(f, "HIP"),
            Self::Hr => write!(f, "HR"),
            Self::Ic => write!(f, "IC"),
            Self::Ldn => write!(f, "LDN"),
            Self::Melotte => write!(f, "Melotte"),
            Self::Messier => write!(f, "Messier"),
            Self::Ngc => write!(f, "NGC"),
            Self::Rcw => write!(f, "RCW"),
            Self::Sharpless => write!(f, "Sharpless"),
            Self::Tres => write!(f, "TrES"),
            Self::Ugc => write!(f, "UGC"),
            Self::VdB => write!(f, "vdB"),
            Self::Wasp => write!(f, "WASP"),
            Self::Xo => write!(f, "XO"),
            Self::TwoMass => write!(f, "2MASS"),
            Self::TwoMassX => write!(f, "2MASX"),
            Self::Psr => write!(f, "PSR"),
            Self::Wds => write!(f, "WDS"),
            Self::BonnerDurchmusterung => write!(f, "BD"),
            Self::Tycho2 => write!(f, "Tycho-2"),
        }
    }
}

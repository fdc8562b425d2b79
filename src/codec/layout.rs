//! Bit layouts of coordinate-encoded payloads.
//!
//! ```text
//! payload = (ra  & ra_mask)  << (ra_shift + dec_shift)
//!         | (dec & dec_mask) << dec_shift
//!         | j2000            << epoch_shift   (only when the epoch is explicit)
//!         | south            << 7
//!         | tag                                (low seven bits of the catalog key)
//! ```
//!
//! `epoch_shift` is 7 when the catalog implies its epoch and 8 otherwise;
//! `dec_shift` is `epoch_shift + 1`. Tycho-2 has its own simpler layout.
//!
//! Sexagesimal fields are stored as a single linear count of their smallest
//! unit (e.g. `hhmmssss` as centiseconds of time), which keeps every payload
//! below bit 56.

use crate::codec::Designation;
use crate::core::catalog::Catalog;
use crate::core::types::Epoch;

pub const SIGN_SHIFT: u32 = 7;
const TAG_MASK: u64 = 0x7F;

/// Digit groups of a field as `(width, radix)` pairs, most significant first.
///
/// The radix of the leading group is only an upper bound on its digits; the
/// others are the mixed-radix bases used to fold the groups into one
/// integer. `max` bounds the folded value as a whole.
#[derive(Debug, Clone, Copy)]
pub struct DigitGroups {
    groups: &'static [(usize, u32)],
    max: u32,
}

/// Product of the radixes below the leading group
const fn tail_product(groups: &[(usize, u32)]) -> u32 {
    let mut product = 1;
    let mut i = 1;
    while i < groups.len() {
        product *= groups[i].1;
        i += 1;
    }
    product
}

impl DigitGroups {
    /// Every group stays below its radix, e.g. `23595999` for hours of RA
    const fn cyclic(groups: &'static [(usize, u32)]) -> Self {
        Self {
            groups,
            max: groups[0].1 * tail_product(groups) - 1,
        }
    }

    /// The leading group reaches `limit` only with zeros after it,
    /// e.g. `9000000` but not `9059599` for degrees of declination
    const fn capped(groups: &'static [(usize, u32)], limit: u32) -> Self {
        Self {
            groups,
            max: limit * tail_product(groups),
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.groups.iter().map(|(width, _)| width).sum()
    }

    /// Parse exactly [`width`](Self::width) digits into a linear unit count
    #[must_use]
    pub fn parse(&self, digits: &str) -> Option<u32> {
        if digits.len() != self.width() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let mut value = 0u32;
        let mut pos = 0;
        for (i, &(width, radix)) in self.groups.iter().enumerate() {
            let group: u32 = digits[pos..pos + width].parse().ok()?;
            if group >= radix {
                return None;
            }
            value = if i == 0 { group } else { value * radix + group };
            pos += width;
        }
        (value <= self.max).then_some(value)
    }

    /// Render a linear unit count back into zero-padded digit groups
    #[must_use]
    pub fn format(&self, value: u32) -> Option<String> {
        if value > self.max {
            return None;
        }
        let (&(_, lead_radix), tail) = self.groups.split_first()?;
        let mut groups = Vec::with_capacity(self.groups.len());
        let mut rest = value;
        for &(_, radix) in tail.iter().rev() {
            groups.push(rest % radix);
            rest /= radix;
        }
        if rest >= lead_radix {
            return None;
        }
        groups.push(rest);
        groups.reverse();

        Some(
            groups
                .iter()
                .zip(self.groups)
                .map(|(group, &(width, _))| format!("{group:0width$}"))
                .collect(),
        )
    }
}

/// Right ascension digits of a coordinate designation
#[must_use]
pub const fn ra_digits(catalog: Catalog) -> Option<DigitGroups> {
    match catalog {
        // hh mm ss cc
        Catalog::TwoMass | Catalog::TwoMassX => {
            Some(DigitGroups::cyclic(&[(2, 24), (2, 60), (2, 60), (2, 100)]))
        }
        // hh mm
        Catalog::Psr => Some(DigitGroups::cyclic(&[(2, 24), (2, 60)])),
        // hh mm m
        Catalog::Wds => Some(DigitGroups::cyclic(&[(2, 24), (2, 60), (1, 10)])),
        _ => None,
    }
}

/// Declination digits of a coordinate designation; PSR B names only carry degrees
#[must_use]
pub const fn dec_digits(catalog: Catalog, epoch: Epoch) -> Option<DigitGroups> {
    match (catalog, epoch) {
        // dd mm ss s
        (Catalog::TwoMass | Catalog::TwoMassX, _) => {
            Some(DigitGroups::capped(&[(2, 91), (2, 60), (2, 60), (1, 10)], MAX_DEC_DEGREES))
        }
        (Catalog::Psr, Epoch::J2000) | (Catalog::Wds, _) => {
            Some(DigitGroups::capped(&[(2, 91), (2, 60)], MAX_DEC_DEGREES))
        }
        (Catalog::Psr, Epoch::B1950) => Some(DigitGroups::capped(&[(2, 91)], MAX_DEC_DEGREES)),
        _ => None,
    }
}

/// Declination magnitude in whole degrees
const MAX_DEC_DEGREES: u32 = 90;

/// Highest Durchmusterung zone (declination band in whole degrees)
pub const MAX_ZONE: u8 = 89;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquatorialLayout {
    pub ra_mask: u64,
    pub ra_shift: u32,
    pub dec_mask: u64,
    /// Whether the epoch bit is stored (catalog does not imply J2000)
    pub explicit_epoch: bool,
}

impl EquatorialLayout {
    #[must_use]
    pub const fn epoch_shift(&self) -> u32 {
        SIGN_SHIFT + self.explicit_epoch as u32
    }

    #[must_use]
    pub const fn dec_shift(&self) -> u32 {
        self.epoch_shift() + 1
    }

    fn pack(&self, ra: u32, dec: u32, j2000: bool, south: bool, tag: u8) -> Option<u64> {
        let (ra, dec) = (u64::from(ra), u64::from(dec));
        if ra > self.ra_mask || dec > self.dec_mask {
            return None;
        }

        let mut payload = (ra & self.ra_mask) << (self.ra_shift + self.dec_shift())
            | (dec & self.dec_mask) << self.dec_shift()
            | u64::from(south) << SIGN_SHIFT
            | u64::from(tag);
        if self.explicit_epoch {
            payload |= u64::from(j2000) << self.epoch_shift();
        }
        Some(payload)
    }

    fn unpack(&self, payload: u64) -> (u32, u32, bool, bool) {
        let ra = (payload >> (self.ra_shift + self.dec_shift())) & self.ra_mask;
        let dec = (payload >> self.dec_shift()) & self.dec_mask;
        let j2000 = self.explicit_epoch && (payload >> self.epoch_shift()) & 1 == 1;
        let south = (payload >> SIGN_SHIFT) & 1 == 1;
        // Masks are at most 25 bits wide
        (ra as u32, dec as u32, j2000, south)
    }
}

#[must_use]
pub const fn equatorial_layout(catalog: Catalog) -> Option<EquatorialLayout> {
    match catalog {
        Catalog::TwoMass | Catalog::TwoMassX => Some(EquatorialLayout {
            ra_mask: 0x1FF_FFFF,
            ra_shift: 24,
            dec_mask: 0xFF_FFFF,
            explicit_epoch: false,
        }),
        Catalog::Psr => Some(EquatorialLayout {
            ra_mask: 0xFFF,
            ra_shift: 14,
            dec_mask: 0x3FFF,
            explicit_epoch: true,
        }),
        Catalog::Wds => Some(EquatorialLayout {
            ra_mask: 0x3FFF,
            ra_shift: 14,
            dec_mask: 0x3FFF,
            explicit_epoch: false,
        }),
        // RA slot holds the running number, Dec slot the zone
        Catalog::BonnerDurchmusterung => Some(EquatorialLayout {
            ra_mask: 0xFFFF,
            ra_shift: 7,
            dec_mask: 0x7F,
            explicit_epoch: false,
        }),
        _ => None,
    }
}

/// Build the payload word for a coordinate-encoded designation.
///
/// Returns `None` if the designation does not belong to `catalog` or a
/// field is out of range.
#[must_use]
pub fn compose(catalog: Catalog, designation: &Designation) -> Option<u64> {
    let tag = catalog.tag();
    match (catalog, designation) {
        (
            Catalog::Tycho2,
            Designation::Tycho {
                region,
                number,
                component,
            },
        ) => {
            if *component > 3 {
                return None;
            }
            Some(
                u64::from(*region) << 25
                    | u64::from(*number) << 9
                    | u64::from(*component) << 7
                    | u64::from(tag),
            )
        }
        (
            Catalog::BonnerDurchmusterung,
            Designation::Zone {
                zone,
                number,
                south,
            },
        ) => {
            if *zone > MAX_ZONE {
                return None;
            }
            equatorial_layout(catalog)?.pack(*number, u32::from(*zone), false, *south, tag)
        }
        (
            Catalog::TwoMass | Catalog::TwoMassX | Catalog::Psr | Catalog::Wds,
            Designation::Equatorial {
                ra,
                dec,
                epoch,
                south,
            },
        ) => {
            if catalog.implied_epoch().is_some_and(|implied| implied != *epoch) {
                return None;
            }
            // Both fields must render back to valid digit groups
            ra_digits(catalog)?.format(*ra)?;
            dec_digits(catalog, *epoch)?.format(*dec)?;
            equatorial_layout(catalog)?.pack(*ra, *dec, *epoch == Epoch::J2000, *south, tag)
        }
        _ => None,
    }
}

/// Split a payload word back into its designation fields
#[must_use]
pub fn extract(catalog: Catalog, payload: u64) -> Option<Designation> {
    match catalog {
        Catalog::Tycho2 => Some(Designation::Tycho {
            region: ((payload >> 25) & 0xFFFF) as u16,
            number: ((payload >> 9) & 0xFFFF) as u16,
            component: ((payload >> 7) & 0x3) as u8,
        }),
        Catalog::BonnerDurchmusterung => {
            let (number, zone, _, south) = equatorial_layout(catalog)?.unpack(payload);
            Some(Designation::Zone {
                zone: u8::try_from(zone).ok()?,
                number,
                south,
            })
        }
        Catalog::TwoMass | Catalog::TwoMassX | Catalog::Psr | Catalog::Wds => {
            let (ra, dec, j2000, south) = equatorial_layout(catalog)?.unpack(payload);
            let epoch = match catalog.implied_epoch() {
                Some(epoch) => epoch,
                None if j2000 => Epoch::J2000,
                None => Epoch::B1950,
            };
            Some(Designation::Equatorial {
                ra,
                dec,
                epoch,
                south,
            })
        }
        _ => None,
    }
}

/// Catalog tag stored in the low seven bits of a payload
#[must_use]
pub const fn payload_tag(payload: u64) -> u8 {
    (payload & TAG_MASK) as u8
}

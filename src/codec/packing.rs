//! Seven-bit character packing.
//!
//! Each ASCII character occupies exactly seven bits, the first character in
//! the most significant group, like a base-128 number. Nine characters fill
//! the 63 bits below the family flag.

/// Maximum number of characters that fit below bit 63
pub const MAX_PACKED_CHARS: usize = 9;

const GROUP_BITS: u32 = 7;
const GROUP_MASK: u64 = 0x7F;

/// Pack text seven bits per character.
///
/// Returns `None` for empty text, text longer than [`MAX_PACKED_CHARS`], or
/// any character outside `1..=127`.
#[must_use]
pub fn pack(text: &str) -> Option<u64> {
    let bytes = text.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_PACKED_CHARS {
        return None;
    }

    let mut value = 0u64;
    for &b in bytes {
        if b == 0 || !b.is_ascii() {
            return None;
        }
        value = (value << GROUP_BITS) | u64::from(b);
    }
    Some(value)
}

/// Number of significant seven-bit groups in `value`
#[must_use]
pub fn group_count(value: u64) -> u32 {
    (u64::BITS - value.leading_zeros()).div_ceil(GROUP_BITS)
}

/// Unpack text produced by [`pack`].
///
/// Returns `None` when a zero group sits between significant groups, which
/// [`pack`] never produces.
#[must_use]
pub fn unpack(value: u64) -> Option<String> {
    let groups = group_count(value);
    let mut text = String::with_capacity(groups as usize);
    for i in (0..groups).rev() {
        let c = ((value >> (i * GROUP_BITS)) & GROUP_MASK) as u8;
        if c == 0 {
            return None;
        }
        text.push(char::from(c));
    }
    Some(text)
}

//! basE91 binary-to-text transform.
//!
//! Bits are consumed in 13- or 14-bit groups, each emitted as two symbols of
//! a 91-character printable alphabet. Seven input bytes never produce more
//! than nine symbols, which is what lets a coordinate payload fit the
//! seven-bit packing.

const ALPHABET: &[u8; 91] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&()*+,./:;<=>?@[]^_`{|}~\"";

/// Reverse lookup: ASCII byte -> symbol value, 0xFF when not in the alphabet
const DECODE_TABLE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

fn symbol(value: u32) -> char {
    char::from(ALPHABET[value as usize])
}

#[must_use]
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 16 / 13 + 2);
    let mut bits: u32 = 0;
    let mut count: u32 = 0;

    for &byte in data {
        bits |= u32::from(byte) << count;
        count += 8;
        if count > 13 {
            let mut value = bits & 8191;
            if value > 88 {
                bits >>= 13;
                count -= 13;
            } else {
                value = bits & 16383;
                bits >>= 14;
                count -= 14;
            }
            out.push(symbol(value % 91));
            out.push(symbol(value / 91));
        }
    }

    if count > 0 {
        out.push(symbol(bits % 91));
        if count > 7 || bits > 90 {
            out.push(symbol(bits / 91));
        }
    }

    out
}

/// Decode basE91 text; `None` if a character is outside the alphabet.
#[must_use]
pub fn decode(text: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len() * 14 / 16 + 1);
    let mut bits: u32 = 0;
    let mut count: u32 = 0;
    let mut pending: Option<u32> = None;

    for &c in text.as_bytes() {
        let digit = *DECODE_TABLE.get(usize::from(c))?;
        if digit == 0xFF {
            return None;
        }
        let digit = u32::from(digit);

        match pending.take() {
            None => pending = Some(digit),
            Some(low) => {
                let value = low + digit * 91;
                bits |= value << count;
                count += if value & 8191 > 88 { 13 } else { 14 };
                loop {
                    out.push((bits & 0xFF) as u8);
                    bits >>= 8;
                    count -= 8;
                    if count <= 7 {
                        break;
                    }
                }
            }
        }
    }

    if let Some(low) = pending {
        out.push(((bits | (low << count)) & 0xFF) as u8);
    }

    Some(out)
}

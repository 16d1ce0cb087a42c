//! Base62 encoding of mapping identifiers.
//!
//! The alphabet is digits, then uppercase, then lowercase, so codes sort in
//! the same order as the ids they encode. Encoding is deterministic and
//! total over `u64`.

/// The 62-symbol alphabet in encoding order.
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u64 = 62;

/// Encodes a mapping identifier as a base62 string.
///
/// `encode(0)` is `"0"`, never the empty string. The output length is
/// unbounded by this function; ids below 62^10 encode to at most ten
/// characters, which is the range the store schema is sized for.
pub fn encode(mut id: u64) -> String {
    if id == 0 {
        return "0".to_owned();
    }
    // u64::MAX needs eleven base62 digits.
    let mut digits = [0u8; 11];
    let mut start = digits.len();
    while id > 0 {
        start -= 1;
        digits[start] = ALPHABET[(id % BASE) as usize];
        id /= BASE;
    }
    digits[start..].iter().map(|&b| char::from(b)).collect()
}

/// Decodes a base62 string back into the identifier it encodes.
///
/// Returns `None` for the empty string, for characters outside the
/// alphabet, and for values that overflow `u64`.
pub fn decode(code: &str) -> Option<u64> {
    if code.is_empty() {
        return None;
    }
    let mut value: u64 = 0;
    for byte in code.bytes() {
        let digit = digit_value(byte)?;
        value = value.checked_mul(BASE)?.checked_add(u64::from(digit))?;
    }
    Some(value)
}

fn digit_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'Z' => Some(byte - b'A' + 10),
        b'a'..=b'z' => Some(byte - b'a' + 36),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_encodes_to_zero_digit() {
        assert_eq!(encode(0), "0");
        assert_eq!(decode("0"), Some(0));
    }

    #[test]
    fn alphabet_boundaries() {
        assert_eq!(encode(1), "1");
        assert_eq!(encode(9), "9");
        assert_eq!(encode(10), "A");
        assert_eq!(encode(35), "Z");
        assert_eq!(encode(36), "a");
        assert_eq!(encode(61), "z");
        assert_eq!(encode(62), "10");
        assert_eq!(encode(3843), "zz");
        assert_eq!(encode(3844), "100");
    }

    #[test]
    fn round_trip() {
        for id in (0..10_000).chain([u64::MAX / 2, u64::MAX - 1, u64::MAX]) {
            assert_eq!(decode(&encode(id)), Some(id), "id = {id}");
        }
    }

    #[test]
    fn distinct_ids_yield_distinct_codes() {
        use std::collections::HashSet;
        let codes: HashSet<String> = (0..10_000).map(encode).collect();
        assert_eq!(codes.len(), 10_000);
    }

    #[test]
    fn ten_digits_cover_the_operating_range() {
        use crate::mapping::MAX_CODE_LEN;

        assert_eq!(encode(62u64.pow(10) - 1).len(), MAX_CODE_LEN);
        assert_eq!(encode(62u64.pow(10)).len(), MAX_CODE_LEN + 1);
    }

    #[test]
    fn decode_rejects_invalid_input() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("abc!"), None);
        assert_eq!(decode("with space"), None);
        assert_eq!(decode("-1"), None);
    }

    #[test]
    fn decode_rejects_overflow() {
        // Eleven `z` digits exceed u64::MAX.
        assert_eq!(decode("zzzzzzzzzzz"), None);
        assert_eq!(decode(&encode(u64::MAX)), Some(u64::MAX));
    }
}

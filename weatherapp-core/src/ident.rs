//! Session correlation tokens.

use rand::Rng;

/// UUID-v4 textual layout: `x` slots take a random hex digit, the `y`
/// slot takes a random hex digit with its top two bits forced to `10`,
/// everything else is copied literally.
const TEMPLATE: &[u8] = b"xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Generate a fresh 36-character correlation token.
///
/// Each call draws new entropy from the thread-local RNG, so two calls
/// return different values with overwhelming probability. Uniqueness is
/// probabilistic, not guaranteed.
pub fn generate_guid() -> String {
    let mut rng = rand::thread_rng();
    let mut out = String::with_capacity(TEMPLATE.len());

    for &slot in TEMPLATE {
        let byte = match slot {
            b'x' => HEX[rng.gen_range(0..16usize)],
            b'y' => HEX[(rng.gen_range(0..16usize) & 0x3) | 0x8],
            literal => literal,
        };
        out.push(byte as char);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_uuid_v4_layout() {
        let guid = generate_guid();
        let bytes = guid.as_bytes();

        assert_eq!(guid.len(), 36);

        for (i, &b) in bytes.iter().enumerate() {
            match i {
                8 | 13 | 18 | 23 => assert_eq!(b, b'-', "hyphen expected at {i}"),
                14 => assert_eq!(b, b'4', "version nibble expected at {i}"),
                19 => assert!(
                    matches!(b, b'8' | b'9' | b'a' | b'b'),
                    "variant nibble out of range at {i}: {}",
                    b as char
                ),
                _ => assert!(b.is_ascii_hexdigit() && !b.is_ascii_uppercase()),
            }
        }
    }

    #[test]
    fn successive_tokens_differ() {
        assert_ne!(generate_guid(), generate_guid());
    }
}

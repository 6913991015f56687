use sha2::{Digest, Sha256};

pub const ID_LEN: usize = 10;

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Stable card id for a front text: leading base-36 digits of its SHA-256.
pub fn identify(front: &str) -> String {
    let digest = Sha256::digest(front.as_bytes());
    let mut id = to_base36(&digest);
    id.truncate(ID_LEN);
    while id.len() < ID_LEN {
        id.insert(0, '0');
    }
    id
}

/// Base-36 rendering of a big-endian unsigned integer, without leading zeros.
/// Zero renders as the empty string.
pub fn to_base36(bytes: &[u8]) -> String {
    let mut value: Vec<u8> = bytes.iter().copied().skip_while(|&b| b == 0).collect();
    let mut digits = Vec::new();

    while !value.is_empty() {
        let mut remainder: u32 = 0;
        let mut quotient = Vec::with_capacity(value.len());
        for &byte in &value {
            let acc = (remainder << 8) | byte as u32;
            let q = (acc / 36) as u8;
            remainder = acc % 36;
            if !(quotient.is_empty() && q == 0) {
                quotient.push(q);
            }
        }
        digits.push(BASE36_DIGITS[remainder as usize]);
        value = quotient;
    }

    digits.reverse();
    // Only ASCII digits were pushed.
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_base36_small_values() {
        assert_eq!(to_base36(&[]), "");
        assert_eq!(to_base36(&[0, 0]), "");
        assert_eq!(to_base36(&[35]), "Z");
        assert_eq!(to_base36(&[36]), "10");
        assert_eq!(to_base36(&[0x01, 0x00]), "74");
        assert_eq!(to_base36(&[0xFF, 0xFF, 0xFF, 0xFF]), "1Z141Z3");
    }

    #[test]
    fn test_id_is_deterministic() {
        assert_eq!(identify("das Haus"), identify("das Haus"));
        assert_ne!(identify("das Haus"), identify("das haus"));
    }

    #[test]
    fn test_id_shape() {
        for front in ["", "Haus", "das Auto (Autos)", "Buch(es)", "über"] {
            let id = identify(front);
            assert_eq!(id.len(), ID_LEN);
            assert!(id.bytes().all(|b| BASE36_DIGITS.contains(&b)), "{id}");
        }
    }

    #[test]
    fn test_id_matches_digest_prefix() {
        let digest = Sha256::digest(b"Haus");
        assert_eq!(identify("Haus"), to_base36(&digest)[..ID_LEN]);
    }

    #[test]
    fn test_no_collisions_in_corpus() {
        let ids: HashSet<String> = (0..5000).map(|i| identify(&format!("Wort {i}"))).collect();
        assert_eq!(ids.len(), 5000);
    }
}

//! Seed derivation for deterministic fixture generation.

use sha2::{Digest, Sha256};

/// Derives a 64-bit RNG seed from a base seed and a list of key parts.
///
/// The parts are hashed with a unit separator between them, so
/// `["ab", "c"]` and `["a", "bc"]` produce different seeds.
pub fn derive_seed(base: u64, parts: &[&str]) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(base.to_le_bytes());
    for part in parts {
        hasher.update([0x1f]);
        hasher.update(part.as_bytes());
    }
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_seed_deterministic() {
        let a = derive_seed(42, &["entrance", "CAM-HS-MAIN-ENTRANCE-01"]);
        let b = derive_seed(42, &["entrance", "CAM-HS-MAIN-ENTRANCE-01"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_derive_seed_depends_on_base() {
        let a = derive_seed(1, &["library"]);
        let b = derive_seed(2, &["library"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_derive_seed_separates_parts() {
        let a = derive_seed(7, &["ab", "c"]);
        let b = derive_seed(7, &["a", "bc"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_derive_seed_empty_parts() {
        // No parts still mixes the base seed
        assert_ne!(derive_seed(0, &[]), derive_seed(1, &[]));
    }
}

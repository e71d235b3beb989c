//! Stable content hashing.

use serde::Serialize;

use crate::CacheError;

/// Computes a deterministic hash over a value's canonical serialized form.
///
/// The value is serialized to JSON and the bytes are hashed with BLAKE3,
/// truncated to a `u64`. Struct fields serialize in declaration order and
/// callers keep map/set data in ordered containers, so the hash carries no
/// insertion-order or pointer-identity artifact: equal logical values hash
/// equal across repeated calls and across process restarts.
pub fn stable_hash<T: Serialize>(value: &T) -> Result<u64, CacheError> {
    let bytes =
        serde_json::to_vec(value).map_err(|e| CacheError::Serialization(e.to_string()))?;
    let digest = blake3::hash(&bytes);

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest.as_bytes()[..8]);
    Ok(u64::from_le_bytes(prefix))
}

/// Formats a stable hash as a fixed-width, filesystem-safe hex string.
pub fn hash_hex(hash: u64) -> String {
    format!("{hash:016x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_hash_is_repeatable() {
        let value = vec!["alpha".to_string(), "beta".to_string()];

        assert_eq!(stable_hash(&value).unwrap(), stable_hash(&value).unwrap());
    }

    #[test]
    fn test_hash_is_order_sensitive() {
        let forward = vec!["alpha", "beta"];
        let reversed = vec!["beta", "alpha"];

        assert_ne!(
            stable_hash(&forward).unwrap(),
            stable_hash(&reversed).unwrap()
        );
    }

    #[test]
    fn test_hash_distinguishes_values() {
        assert_ne!(
            stable_hash(&"a.md").unwrap(),
            stable_hash(&"b.md").unwrap()
        );
    }

    #[test]
    fn test_ordered_maps_hash_independent_of_insertion() {
        let mut first = BTreeMap::new();
        first.insert("k1", 1);
        first.insert("k2", 2);

        let mut second = BTreeMap::new();
        second.insert("k2", 2);
        second.insert("k1", 1);

        assert_eq!(stable_hash(&first).unwrap(), stable_hash(&second).unwrap());
    }

    #[test]
    fn test_hash_hex_is_fixed_width() {
        assert_eq!(hash_hex(0).len(), 16);
        assert_eq!(hash_hex(u64::MAX), "ffffffffffffffff");
        assert_eq!(hash_hex(0x2a), "000000000000002a");
    }
}

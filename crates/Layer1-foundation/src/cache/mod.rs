//! # Confit Cache Stores
//!
//! Shipped `CacheStore` backends plus the key discipline they share.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  CacheStore (trait)                         │
//! │  ┌──────────────────┐  ┌─────────────────────────────────┐  │
//! │  │   MemoryStore    │  │           FileStore             │  │
//! │  │  in-process map  │  │  one JSON file per key under a  │  │
//! │  │  (tests, single  │  │  base dir - survives process    │  │
//! │  │   process runs)  │  │  restarts                       │  │
//! │  └──────────────────┘  └─────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key discipline
//!
//! Keys follow the portable cache-key contract: non-empty, and none of the
//! reserved characters `{}()/\@:`. Both shipped stores validate on `get`
//! and `save`, so a rejected key never reaches the backend. External
//! `CacheStore` implementations can reuse [`validate_key`].

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::CacheError;

/// Characters a cache key must not contain.
pub const RESERVED_KEY_CHARS: &[char] = &['{', '}', '(', ')', '/', '\\', '@', ':'];

/// Validate a cache key against the shared key discipline.
///
/// Rejects the empty key and any key containing a reserved character.
/// Because `/` and `\` are reserved, a validated key is safe to embed in a
/// file name.
pub fn validate_key(key: &str) -> Result<(), CacheError> {
    if key.is_empty() {
        return Err(CacheError::invalid_key(key, "key must not be empty"));
    }
    if let Some(ch) = key.chars().find(|c| RESERVED_KEY_CHARS.contains(c)) {
        return Err(CacheError::invalid_key(
            key,
            format!("reserved character {ch:?}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_plain_keys() {
        assert!(validate_key("config_cache_item").is_ok());
        assert!(validate_key("a").is_ok());
        assert!(validate_key("with-dash.and_dot").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_empty() {
        let err = validate_key("").unwrap_err();
        assert!(matches!(err, CacheError::InvalidKey { .. }));
    }

    #[test]
    fn test_validate_key_rejects_reserved_characters() {
        for ch in RESERVED_KEY_CHARS {
            let key = format!("bad{ch}key");
            let err = validate_key(&key).unwrap_err();
            match err {
                CacheError::InvalidKey { key: k, .. } => assert_eq!(k, key),
                other => panic!("expected InvalidKey, got {other:?}"),
            }
        }
    }
}

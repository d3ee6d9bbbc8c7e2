//! # Common Types

/// A dense embedding vector.
pub type Vector = Vec<f32>;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type UMHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type UMHashSet<V> = ahash::AHashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> UMHashMap<K, V> {
            UMHashMap::with_capacity(capacity)
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type UMHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type UMHashSet<V> = std::collections::HashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> UMHashMap<K, V> {
            UMHashMap::with_capacity(capacity)
        }
    }
}

/// Map of ``{ token string -> weight }``.
pub type TfidfTable = UMHashMap<String, f32>;

/// Map of ``{ token string -> vector }``; a bot-wide vocabulary.
pub type TokenVectorMap = UMHashMap<String, Vector>;

/// Compile-time check that a value is `Send`.
pub fn check_is_send<S: Send>(_: S) {}

/// Compile-time check that a value is `Sync`.
pub fn check_is_sync<S: Sync>(_: S) {}

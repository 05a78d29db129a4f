//! Keyed single-entry memo for derived geometry.
//!
//! The value is rebuilt only when the key differs from the one it was built
//! with, so callers state their inputs explicitly instead of mutating cached
//! fields in place.

/// Single-slot cache keyed by the full input tuple of the derived value.
#[derive(Debug)]
pub struct Cached<K, V> {
    entry: Option<(K, V)>,
    rebuilds: u64,
}

impl<K, V> Default for Cached<K, V> {
    fn default() -> Self {
        Self { entry: None, rebuilds: 0 }
    }
}

impl<K: PartialEq, V> Cached<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, rebuilding it with `build` if the key changed.
    pub fn get_or_update(&mut self, key: K, build: impl FnOnce(&K) -> V) -> &V {
        let hit = matches!(&self.entry, Some((k, _)) if *k == key);
        if !hit {
            self.entry = None;
            self.rebuilds += 1;
        }
        let (_, v) = self.entry.get_or_insert_with(|| {
            let v = build(&key);
            (key, v)
        });
        v
    }

    /// Number of times a value has been (re)built.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::hash::Hash;

pub trait DashMapExtension<K: Eq + Hash, V: Clone> {
  /// Returns the stored value when `key` is present, otherwise stores `value`.
  /// The flag is `true` when the value was already present.
  fn load_or_store(&self, key: K, value: V) -> (V, bool);

  /// Like [`DashMapExtension::load_or_store`], but only builds the value when the slot is vacant.
  /// The shard stays locked while `f` runs, so concurrent callers for the same key observe one value.
  fn load_or_store_with<F>(&self, key: K, f: F) -> (V, bool)
  where
    F: FnOnce() -> V;
}

impl<K: Eq + Hash, V: Clone> DashMapExtension<K, V> for DashMap<K, V> {
  fn load_or_store(&self, key: K, value: V) -> (V, bool) {
    self.load_or_store_with(key, || value)
  }

  fn load_or_store_with<F>(&self, key: K, f: F) -> (V, bool)
  where
    F: FnOnce() -> V, {
    match self.entry(key) {
      Entry::Occupied(entry) => (entry.get().clone(), true),
      Entry::Vacant(entry) => (entry.insert(f()).clone(), false),
    }
  }
}

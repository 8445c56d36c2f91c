//! Storage strategies.
//!
//! A [`Storage`] holds the raw mappings of a [`Container`](crate::Container).
//! It knows nothing of the container's configuration: checks and modification
//! tracking are done by the container before reaching the storage.
mod hashed;
mod linked;
mod ordered;

pub use linked::{Link, Linked};

/// Mapping slot: `None` is the absent-like value.
pub type Slot<V> = Option<V>;

/// Iterator over the slots of a storage.
pub type Slots<'a, K, V> = Box<dyn Iterator<Item = (&'a K, &'a Slot<V>)> + 'a>;

/// Iterator over mutable references to the slots of a storage.
pub type SlotsMut<'a, K, V> = Box<dyn Iterator<Item = (&'a K, &'a mut Slot<V>)> + 'a>;

/// Raw key to slot storage.
///
/// Key equivalence is decided by the storage: `Eq + Hash` for hashed storage,
/// `Ord` for ordered storage, `PartialEq` for linked storage.
pub trait Storage<K, V> {
	fn len(&self) -> usize;

	fn slot(&self, key: &K) -> Option<&Slot<V>>;

	/// Inserts or overwrites the slot of `key`, returning the previous slot.
	fn insert(&mut self, key: K, slot: Slot<V>) -> Option<Slot<V>>;

	/// Removes the slot of `key`.
	fn remove(&mut self, key: &K) -> Option<Slot<V>>;

	fn clear(&mut self);

	fn slots(&self) -> Slots<'_, K, V>;

	fn slots_mut(&mut self) -> SlotsMut<'_, K, V>;

	fn retain(&mut self, f: &mut dyn FnMut(&K, &mut Slot<V>) -> bool);
}

use super::{Slot, Slots, SlotsMut, Storage};
use std::{
	collections::HashMap,
	hash::{BuildHasher, Hash},
};

impl<K: Hash + Eq, V, H: BuildHasher> Storage<K, V> for HashMap<K, Slot<V>, H> {
	#[inline]
	fn len(&self) -> usize {
		HashMap::len(self)
	}

	#[inline]
	fn slot(&self, key: &K) -> Option<&Slot<V>> {
		HashMap::get(self, key)
	}

	#[inline]
	fn insert(&mut self, key: K, slot: Slot<V>) -> Option<Slot<V>> {
		HashMap::insert(self, key, slot)
	}

	#[inline]
	fn remove(&mut self, key: &K) -> Option<Slot<V>> {
		HashMap::remove(self, key)
	}

	#[inline]
	fn clear(&mut self) {
		HashMap::clear(self)
	}

	fn slots(&self) -> Slots<'_, K, V> {
		Box::new(HashMap::iter(self))
	}

	fn slots_mut(&mut self) -> SlotsMut<'_, K, V> {
		Box::new(HashMap::iter_mut(self))
	}

	fn retain(&mut self, f: &mut dyn FnMut(&K, &mut Slot<V>) -> bool) {
		HashMap::retain(self, |k, slot| f(k, slot))
	}
}

use super::{Slot, Slots, SlotsMut, Storage};
use std::collections::BTreeMap;

impl<K: Ord, V> Storage<K, V> for BTreeMap<K, Slot<V>> {
	#[inline]
	fn len(&self) -> usize {
		BTreeMap::len(self)
	}

	#[inline]
	fn slot(&self, key: &K) -> Option<&Slot<V>> {
		BTreeMap::get(self, key)
	}

	#[inline]
	fn insert(&mut self, key: K, slot: Slot<V>) -> Option<Slot<V>> {
		BTreeMap::insert(self, key, slot)
	}

	#[inline]
	fn remove(&mut self, key: &K) -> Option<Slot<V>> {
		BTreeMap::remove(self, key)
	}

	#[inline]
	fn clear(&mut self) {
		BTreeMap::clear(self)
	}

	fn slots(&self) -> Slots<'_, K, V> {
		Box::new(BTreeMap::iter(self))
	}

	fn slots_mut(&mut self) -> SlotsMut<'_, K, V> {
		Box::new(BTreeMap::iter_mut(self))
	}

	fn retain(&mut self, f: &mut dyn FnMut(&K, &mut Slot<V>) -> bool) {
		BTreeMap::retain(self, |k, slot| f(k, slot))
	}
}

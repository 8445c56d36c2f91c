use crate::{Config, Result};
use std::{
	cmp::Ordering,
	fmt,
	hash::{Hash, Hasher},
};

/// A mapping, as yielded by the entry-set view.
///
/// The value is `None` when the key is mapped to an absent-like value.
pub struct Entry<'a, K, V> {
	key: &'a K,
	value: Option<&'a V>,
}

impl<'a, K, V> Entry<'a, K, V> {
	#[inline]
	pub fn new(key: &'a K, value: Option<&'a V>) -> Self {
		Entry { key, value }
	}

	#[inline]
	pub fn key(&self) -> &'a K {
		self.key
	}

	#[inline]
	pub fn value(&self) -> Option<&'a V> {
		self.value
	}

	#[inline]
	pub fn into_pair(self) -> (&'a K, Option<&'a V>) {
		(self.key, self.value)
	}
}

impl<'a, K, V> Clone for Entry<'a, K, V> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<'a, K, V> Copy for Entry<'a, K, V> {}

impl<'a, 'b, K: PartialEq, V: PartialEq> PartialEq<Entry<'b, K, V>> for Entry<'a, K, V> {
	fn eq(&self, other: &Entry<'b, K, V>) -> bool {
		self.key == other.key && self.value == other.value
	}
}

impl<'a, K: Eq, V: Eq> Eq for Entry<'a, K, V> {}

/// Hashes the key and the value independently and combines them with a xor,
/// so that the hash of a map can be computed without an iteration order.
impl<'a, K: Hash, V: Hash> Hash for Entry<'a, K, V> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		state.write_u64(pair_hash(self.key, self.value))
	}
}

pub(crate) fn pair_hash<K: Hash, V: Hash>(key: &K, value: Option<&V>) -> u64 {
	use std::collections::hash_map::DefaultHasher;

	let mut h = DefaultHasher::new();
	key.hash(&mut h);
	let k = h.finish();

	let mut h = DefaultHasher::new();
	value.hash(&mut h);
	k ^ h.finish()
}

impl<'a, K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entry<'a, K, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Entry")
			.field(&self.key)
			.field(&self.value)
			.finish()
	}
}

/// Compares entries by the natural order of their keys.
///
/// # Example
///
/// ```
/// use assoc_map::{entry, HashedMap, Map, MapExt};
///
/// let mut map = HashedMap::new();
/// map.put("b", 1).unwrap();
/// map.put("a", 2).unwrap();
///
/// let mut entries: Vec<_> = map.entry_set().iter().collect();
/// entries.sort_by(entry::by_key);
/// assert_eq!(*entries[0].key(), "a");
/// ```
pub fn by_key<K: Ord, V>(a: &Entry<K, V>, b: &Entry<K, V>) -> Ordering {
	a.key.cmp(b.key)
}

/// Compares entries by the natural order of their values.
///
/// Absent-like values are ordered before every present value.
pub fn by_value<K, V: Ord>(a: &Entry<K, V>, b: &Entry<K, V>) -> Ordering {
	a.value.cmp(&b.value)
}

/// Compares entries by key using the given comparison.
pub fn by_key_with<K, V, F>(cmp: F) -> impl Fn(&Entry<K, V>, &Entry<K, V>) -> Ordering
where
	F: Fn(&K, &K) -> Ordering,
{
	move |a: &Entry<K, V>, b: &Entry<K, V>| cmp(a.key, b.key)
}

/// Compares entries by value using the given comparison.
pub fn by_value_with<K, V, F>(cmp: F) -> impl Fn(&Entry<K, V>, &Entry<K, V>) -> Ordering
where
	F: Fn(Option<&V>, Option<&V>) -> Ordering,
{
	move |a: &Entry<K, V>, b: &Entry<K, V>| cmp(a.value, b.value)
}

/// Write-through handle on a mapping, yielded by [`Map::iter_mut`](crate::Map::iter_mut).
///
/// The key is fixed for the lifetime of the handle. Rewriting the value goes
/// through the same checks as [`Map::put`](crate::Map::put) and is immediately
/// visible in the backing container.
pub struct EntryMut<'a, K, V> {
	key: &'a K,
	slot: &'a mut Option<V>,
	config: &'a Config<K, V>,
}

impl<'a, K, V> EntryMut<'a, K, V> {
	#[inline]
	pub fn new(key: &'a K, slot: &'a mut Option<V>, config: &'a Config<K, V>) -> Self {
		EntryMut { key, slot, config }
	}

	#[inline]
	pub fn key(&self) -> &'a K {
		self.key
	}

	#[inline]
	pub fn value(&self) -> Option<&V> {
		self.slot.as_ref()
	}

	/// Replaces the value, returning the previous one.
	#[inline]
	pub fn set_value(&mut self, value: V) -> Result<Option<V>> {
		self.set_option(Some(value))
	}

	/// Replaces the value with a possibly absent-like one, returning the previous one.
	pub fn set_option(&mut self, value: Option<V>) -> Result<Option<V>> {
		self.config.check_mutable("set_value")?;
		self.config.validate_value(value.as_ref())?;
		Ok(std::mem::replace(self.slot, value))
	}

	#[inline]
	pub fn as_entry(&self) -> Entry<'_, K, V> {
		Entry::new(self.key, self.slot.as_ref())
	}
}

impl<'a, K: fmt::Debug, V: fmt::Debug> fmt::Debug for EntryMut<'a, K, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("EntryMut")
			.field(&self.key)
			.field(&self.slot)
			.finish()
	}
}

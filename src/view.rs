//! Live views of a map.
//!
//! A view borrows its map and forwards every operation to it: it never holds
//! copies of keys or values. Views obtained from a shared borrow can only be
//! queried and iterated; the `*Mut` views can also remove mappings from the map.
//! No view can insert mappings.
use crate::{
	map::{Iter, IterMut},
	Entry, Map, MapExt, Result,
};

/// Live view of the keys of a map.
pub struct KeySet<'a, M: ?Sized> {
	map: &'a M,
}

impl<'a, M: Map + ?Sized> KeySet<'a, M> {
	#[inline]
	pub fn new(map: &'a M) -> Self {
		KeySet { map }
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.map.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	#[inline]
	pub fn contains(&self, key: &M::Key) -> bool {
		self.map.contains_key(key)
	}

	/// Iterates over the keys, each exactly once.
	#[inline]
	pub fn iter(&self) -> Keys<'a, M::Key, M::Value> {
		Keys {
			inner: self.map.iter(),
		}
	}
}

impl<'a, M: ?Sized> Clone for KeySet<'a, M> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<'a, M: ?Sized> Copy for KeySet<'a, M> {}

impl<'a, M: Map + ?Sized> IntoIterator for KeySet<'a, M> {
	type IntoIter = Keys<'a, M::Key, M::Value>;
	type Item = &'a M::Key;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Live view of the keys of a map, allowing removal.
pub struct KeySetMut<'a, M: ?Sized> {
	map: &'a mut M,
}

impl<'a, M: Map + ?Sized> KeySetMut<'a, M> {
	#[inline]
	pub fn new(map: &'a mut M) -> Self {
		KeySetMut { map }
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.map.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	#[inline]
	pub fn contains(&self, key: &M::Key) -> bool {
		self.map.contains_key(key)
	}

	#[inline]
	pub fn iter(&self) -> Keys<'_, M::Key, M::Value> {
		Keys {
			inner: self.map.iter(),
		}
	}

	/// Removes the mapping of `key`.
	///
	/// Returns whether `key` was mapped.
	pub fn remove(&mut self, key: &M::Key) -> Result<bool> {
		let mapped = self.map.contains_key(key);
		self.map.remove(key)?;
		Ok(mapped)
	}

	/// Removes the mappings of every key for which `f` returns `false`.
	pub fn retain<F>(&mut self, mut f: F) -> Result<()>
	where
		F: FnMut(&M::Key) -> bool,
	{
		self.map.retain(&mut |key, _| f(key))
	}

	#[inline]
	pub fn clear(&mut self) -> Result<()> {
		self.map.clear()
	}
}

/// Iterator over the keys of a map.
pub struct Keys<'a, K, V> {
	inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
	type Item = &'a K;

	#[inline]
	fn next(&mut self) -> Option<&'a K> {
		self.inner.next().map(|(key, _)| key)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

/// Live view of the values of a map.
///
/// A value is yielded once per mapping holding it. Absent-like values are
/// yielded as `None`.
pub struct ValueCollection<'a, M: ?Sized> {
	map: &'a M,
}

impl<'a, M: Map + ?Sized> ValueCollection<'a, M> {
	#[inline]
	pub fn new(map: &'a M) -> Self {
		ValueCollection { map }
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.map.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	/// Runs in time proportional to the length of the map.
	#[inline]
	pub fn contains(&self, value: &M::Value) -> bool
	where
		M::Value: PartialEq,
	{
		self.map.contains_value(value)
	}

	#[inline]
	pub fn iter(&self) -> Values<'a, M::Key, M::Value> {
		Values {
			inner: self.map.iter(),
		}
	}
}

impl<'a, M: ?Sized> Clone for ValueCollection<'a, M> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<'a, M: ?Sized> Copy for ValueCollection<'a, M> {}

impl<'a, M: Map + ?Sized> IntoIterator for ValueCollection<'a, M> {
	type IntoIter = Values<'a, M::Key, M::Value>;
	type Item = Option<&'a M::Value>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Live view of the values of a map, allowing removal.
pub struct ValueCollectionMut<'a, M: ?Sized> {
	map: &'a mut M,
}

impl<'a, M: Map + ?Sized> ValueCollectionMut<'a, M> {
	#[inline]
	pub fn new(map: &'a mut M) -> Self {
		ValueCollectionMut { map }
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.map.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	#[inline]
	pub fn contains(&self, value: &M::Value) -> bool
	where
		M::Value: PartialEq,
	{
		self.map.contains_value(value)
	}

	#[inline]
	pub fn iter(&self) -> Values<'_, M::Key, M::Value> {
		Values {
			inner: self.map.iter(),
		}
	}

	/// Removes one mapping holding `value`: the first one in iteration order.
	///
	/// Pass `None` to remove a mapping holding an absent-like value.
	/// Returns whether a mapping has been removed.
	pub fn remove(&mut self, value: Option<&M::Value>) -> Result<bool>
	where
		M::Value: PartialEq,
	{
		let mut found = false;
		self.map.retain(&mut |_, v| {
			if !found && v == value {
				found = true;
				false
			} else {
				true
			}
		})?;

		Ok(found)
	}

	/// Removes every mapping whose value does not satisfy `f`.
	pub fn retain<F>(&mut self, mut f: F) -> Result<()>
	where
		F: FnMut(Option<&M::Value>) -> bool,
	{
		self.map.retain(&mut |_, value| f(value))
	}

	#[inline]
	pub fn clear(&mut self) -> Result<()> {
		self.map.clear()
	}
}

/// Iterator over the values of a map.
pub struct Values<'a, K, V> {
	inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
	type Item = Option<&'a V>;

	#[inline]
	fn next(&mut self) -> Option<Option<&'a V>> {
		self.inner.next().map(|(_, value)| value)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

/// Live view of the mappings of a map.
pub struct EntrySet<'a, M: ?Sized> {
	map: &'a M,
}

impl<'a, M: Map + ?Sized> EntrySet<'a, M> {
	#[inline]
	pub fn new(map: &'a M) -> Self {
		EntrySet { map }
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.map.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	/// Checks that `key` is mapped to `value`.
	pub fn contains(&self, key: &M::Key, value: Option<&M::Value>) -> bool
	where
		M::Value: PartialEq,
	{
		self.map.lookup(key).map_or(false, |v| v == value)
	}

	#[inline]
	pub fn iter(&self) -> Entries<'a, M::Key, M::Value> {
		Entries {
			inner: self.map.iter(),
		}
	}
}

impl<'a, M: ?Sized> Clone for EntrySet<'a, M> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<'a, M: ?Sized> Copy for EntrySet<'a, M> {}

impl<'a, M: Map + ?Sized> IntoIterator for EntrySet<'a, M> {
	type IntoIter = Entries<'a, M::Key, M::Value>;
	type Item = Entry<'a, M::Key, M::Value>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Live view of the mappings of a map, allowing removal and value rewriting.
///
/// # Example
///
/// ```
/// use assoc_map::{LinkedMap, Map, MapExt};
///
/// let mut map = LinkedMap::new();
/// map.put("a", 1).unwrap();
/// map.put("b", 2).unwrap();
///
/// for mut entry in map.entry_set_mut().iter_mut() {
/// 	if *entry.key() == "a" {
/// 		entry.set_value(9).unwrap();
/// 	}
/// }
///
/// assert_eq!(map.get(&"a"), Some(&9));
/// ```
pub struct EntrySetMut<'a, M: ?Sized> {
	map: &'a mut M,
}

impl<'a, M: Map + ?Sized> EntrySetMut<'a, M> {
	#[inline]
	pub fn new(map: &'a mut M) -> Self {
		EntrySetMut { map }
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.map.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	pub fn contains(&self, key: &M::Key, value: Option<&M::Value>) -> bool
	where
		M::Value: PartialEq,
	{
		self.map.lookup(key).map_or(false, |v| v == value)
	}

	#[inline]
	pub fn iter(&self) -> Entries<'_, M::Key, M::Value> {
		Entries {
			inner: self.map.iter(),
		}
	}

	/// Iterates over write-through handles on the mappings.
	#[inline]
	pub fn iter_mut(&mut self) -> IterMut<'_, M::Key, M::Value> {
		self.map.iter_mut()
	}

	/// Removes the mapping of `key` if it maps to `value`.
	#[inline]
	pub fn remove(&mut self, key: &M::Key, value: Option<&M::Value>) -> Result<bool>
	where
		M::Value: PartialEq,
	{
		self.map.remove_if_eq(key, value)
	}

	/// Removes every mapping for which `f` returns `false`.
	pub fn retain<F>(&mut self, mut f: F) -> Result<()>
	where
		F: FnMut(Entry<M::Key, M::Value>) -> bool,
	{
		self.map.retain(&mut |key, value| f(Entry::new(key, value)))
	}

	#[inline]
	pub fn clear(&mut self) -> Result<()> {
		self.map.clear()
	}
}

/// Iterator over the mappings of a map.
pub struct Entries<'a, K, V> {
	inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
	type Item = Entry<'a, K, V>;

	#[inline]
	fn next(&mut self) -> Option<Entry<'a, K, V>> {
		self.inner.next().map(|(key, value)| Entry::new(key, value))
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

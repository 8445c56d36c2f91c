use crate::{Error, Map, Result};
use smallvec::SmallVec;

/// Fail-fast cursor over the keys of a map.
///
/// Unlike borrowed iterators, a cursor does not hold on to its map: the map is
/// passed to each step, and may be modified in between. The cursor snapshots
/// the keys and the [modification count](Map::modifications) of the map at
/// creation. Every step fails with [`Error::ConcurrentStateChanged`] if the
/// map has been structurally modified since, by any other path than the
/// cursor's own [`remove`](Cursor::remove). Value rewrites through
/// [`set_value`](Cursor::set_value) or [`Map::put`] on a mapped key are not
/// structural and leave the cursor valid.
///
/// # Example
///
/// ```
/// use assoc_map::{Error, LinkedMap, Map, MapExt};
///
/// let mut map = LinkedMap::new();
/// map.put("a", 1).unwrap();
/// map.put("b", 2).unwrap();
///
/// let mut cursor = map.cursor();
/// assert_eq!(cursor.next(&map), Ok(Some(&"a")));
/// cursor.set_value(&mut map, 10).unwrap();
/// map.put("c", 3).unwrap();
/// assert_eq!(cursor.next(&map), Err(Error::ConcurrentStateChanged));
/// assert_eq!(map.get(&"a"), Some(&10));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<K> {
	keys: SmallVec<[K; 8]>,

	/// Index of the next key.
	next: usize,

	/// Index of the current key, unless it has been removed by the cursor.
	current: Option<usize>,

	/// Expected modification count of the map.
	expected: usize,
}

impl<K: Clone> Cursor<K> {
	pub fn new<M: Map<Key = K> + ?Sized>(map: &M) -> Self {
		Cursor {
			keys: map.iter().map(|(key, _)| key.clone()).collect(),
			next: 0,
			current: None,
			expected: map.modifications(),
		}
	}

	/// Rewrites the value of the current key through [`Map::put`].
	///
	/// Returns the previous value.
	pub fn set_value<M>(&mut self, map: &mut M, value: M::Value) -> Result<Option<M::Value>>
	where
		M: Map<Key = K> + ?Sized,
	{
		self.check(&*map)?;
		let key = self.key().ok_or(Error::IllegalState("set_value"))?;
		if !map.contains_key(key) {
			log::debug!("cursor key removed behind the cursor");
			return Err(Error::ConcurrentStateChanged);
		}

		map.put(key.clone(), value)
	}
}

impl<K> Cursor<K> {
	fn check<M: Map<Key = K> + ?Sized>(&self, map: &M) -> Result<()> {
		let found = map.modifications();
		if found == self.expected {
			Ok(())
		} else {
			log::debug!(
				"cursor invalidated: expected {} modifications, found {}",
				self.expected,
				found
			);
			Err(Error::ConcurrentStateChanged)
		}
	}

	/// Number of keys not yet visited.
	#[inline]
	pub fn remaining(&self) -> usize {
		self.keys.len() - self.next
	}

	/// Current key.
	#[inline]
	pub fn key(&self) -> Option<&K> {
		self.current.map(|i| &self.keys[i])
	}

	/// Moves to the next key and returns it.
	pub fn next<M: Map<Key = K> + ?Sized>(&mut self, map: &M) -> Result<Option<&K>> {
		self.check(map)?;
		if self.next < self.keys.len() {
			let i = self.next;
			self.next += 1;
			self.current = Some(i);
			Ok(Some(&self.keys[i]))
		} else {
			self.current = None;
			Ok(None)
		}
	}

	/// Value of the current key.
	pub fn value<'m, M: Map<Key = K> + ?Sized>(&self, map: &'m M) -> Result<Option<&'m M::Value>> {
		self.check(map)?;
		match self.key() {
			Some(key) => Ok(map.get(key)),
			None => Err(Error::IllegalState("value")),
		}
	}

	/// Removes the mapping of the current key, returning its value.
	///
	/// The cursor stays valid.
	pub fn remove<M: Map<Key = K> + ?Sized>(&mut self, map: &mut M) -> Result<Option<M::Value>> {
		self.check(&*map)?;
		let i = self.current.ok_or(Error::IllegalState("remove"))?;
		let value = map.remove(&self.keys[i])?;
		self.current = None;
		self.expected = map.modifications();
		Ok(value)
	}
}

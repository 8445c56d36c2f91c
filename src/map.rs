use crate::{EntryMut, Result};

/// Iterator over the mappings of a [`Map`].
pub type Iter<'a, K, V> = Box<dyn Iterator<Item = (&'a K, Option<&'a V>)> + 'a>;

/// Iterator over write-through handles on the mappings of a [`Map`].
pub type IterMut<'a, K, V> = Box<dyn Iterator<Item = EntryMut<'a, K, V>> + 'a>;

/// Key-to-value associative container.
///
/// This trait only holds the primitives a storage strategy must provide.
/// Compound operations, views and cursors are provided once for every
/// implementor by [`MapExt`](crate::MapExt). The trait is object safe:
/// compound operations are available on `dyn Map` as well.
///
/// Values are held in slots of type `Option<Self::Value>`, where `None` is the
/// absent-like value. Whether a container accepts absent-like values is decided
/// by its [`NullPolicy`](crate::NullPolicy).
///
/// # Correctness
///
/// It is a logic error for a key to be modified in such a way that its equality
/// (or hash, or ordering, depending on the storage) changes while it is in the map.
pub trait Map {
	type Key;
	type Value;

	/// Number of mappings.
	fn len(&self) -> usize;

	#[inline]
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Looks up the mapping of `key`.
	///
	/// Returns `None` if the key is unmapped, `Some(None)` if it is mapped to an
	/// absent-like value.
	fn lookup(&self, key: &Self::Key) -> Option<Option<&Self::Value>>;

	#[inline]
	fn contains_key(&self, key: &Self::Key) -> bool {
		self.lookup(key).is_some()
	}

	/// Returns the value mapped to `key`.
	///
	/// `None` does not prove the key is unmapped when the container permits
	/// absent-like values: use [`contains_key`](Map::contains_key) to tell.
	#[inline]
	fn get(&self, key: &Self::Key) -> Option<&Self::Value> {
		self.lookup(key).flatten()
	}

	/// Runs in time proportional to the length of the map.
	fn contains_value(&self, value: &Self::Value) -> bool
	where
		Self::Value: PartialEq,
	{
		self.iter().any(|(_, v)| v == Some(value))
	}

	/// Maps `key` to the given slot, returning the previous value.
	fn put_option(&mut self, key: Self::Key, value: Option<Self::Value>) -> Result<Option<Self::Value>>;

	/// Maps `key` to `value`, returning the previous value.
	#[inline]
	fn put(&mut self, key: Self::Key, value: Self::Value) -> Result<Option<Self::Value>> {
		self.put_option(key, Some(value))
	}

	/// Removes the mapping of `key`, returning its value.
	///
	/// Removing an unmapped key does nothing.
	fn remove(&mut self, key: &Self::Key) -> Result<Option<Self::Value>>;

	/// Removes every mapping.
	fn clear(&mut self) -> Result<()>;

	/// Iterates over the mappings, in an order defined by the storage.
	fn iter(&self) -> Iter<'_, Self::Key, Self::Value>;

	/// Iterates over write-through handles on the mappings, in the same order as
	/// [`iter`](Map::iter).
	fn iter_mut(&mut self) -> IterMut<'_, Self::Key, Self::Value>;

	/// Removes every mapping for which `f` returns `false`.
	fn retain(&mut self, f: &mut dyn FnMut(&Self::Key, Option<&Self::Value>) -> bool) -> Result<()>;

	/// Number of structural modifications (new key, removed key, non-empty clear)
	/// since the creation of the map.
	///
	/// Used by [`Cursor`](crate::Cursor) to detect concurrent modifications.
	/// Implementations not tracking modifications return a constant.
	#[inline]
	fn modifications(&self) -> usize {
		0
	}
}

impl<'m, M: Map + ?Sized> Map for &'m mut M {
	type Key = M::Key;
	type Value = M::Value;

	#[inline]
	fn len(&self) -> usize {
		M::len(&**self)
	}

	#[inline]
	fn lookup(&self, key: &M::Key) -> Option<Option<&M::Value>> {
		M::lookup(&**self, key)
	}

	#[inline]
	fn put_option(&mut self, key: M::Key, value: Option<M::Value>) -> Result<Option<M::Value>> {
		M::put_option(&mut **self, key, value)
	}

	#[inline]
	fn remove(&mut self, key: &M::Key) -> Result<Option<M::Value>> {
		M::remove(&mut **self, key)
	}

	#[inline]
	fn clear(&mut self) -> Result<()> {
		M::clear(&mut **self)
	}

	#[inline]
	fn iter(&self) -> Iter<'_, M::Key, M::Value> {
		M::iter(&**self)
	}

	#[inline]
	fn iter_mut(&mut self) -> IterMut<'_, M::Key, M::Value> {
		M::iter_mut(&mut **self)
	}

	#[inline]
	fn retain(&mut self, f: &mut dyn FnMut(&M::Key, Option<&M::Value>) -> bool) -> Result<()> {
		M::retain(&mut **self, f)
	}

	#[inline]
	fn modifications(&self) -> usize {
		M::modifications(&**self)
	}
}

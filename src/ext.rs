//! Compound operations.
//!
//! Every operation of [`MapExt`] is written once, in terms of the [`Map`]
//! primitives, and is available to every map, including `dyn Map`.
//!
//! # Atomicity
//!
//! These operations are sequences of primitive calls: they are not atomic.
//! The primitives are called in the documented order and the first failing one
//! stops the sequence. Nothing is rolled back: the map is left in the state
//! produced by the primitives that completed. Maps wanting stronger guarantees
//! must document them, as [`Concurrent`](crate::Concurrent) does.
use crate::{
	entry::pair_hash,
	view::{EntrySet, EntrySetMut, KeySet, KeySetMut, ValueCollection, ValueCollectionMut},
	Cursor, Map, Result,
};
use std::hash::Hash;

/// Compound operations, views and cursors, for every [`Map`].
pub trait MapExt: Map {
	/// Returns the value mapped to `key`, or `default` if `key` is unmapped.
	///
	/// A key mapped to an absent-like value yields `None`, not `default`.
	fn get_or_default<'a>(&'a self, key: &Self::Key, default: &'a Self::Value) -> Option<&'a Self::Value> {
		match self.get(key) {
			Some(value) => Some(value),
			None if self.contains_key(key) => None,
			None => Some(default),
		}
	}

	/// Calls `f` once per mapping, in iteration order.
	fn for_each<F>(&self, mut f: F)
	where
		F: FnMut(&Self::Key, Option<&Self::Value>),
	{
		for (key, value) in self.iter() {
			f(key, value)
		}
	}

	/// Calls `f` once per mapping, in iteration order, stopping at the first error.
	fn try_for_each<E, F>(&self, mut f: F) -> std::result::Result<(), E>
	where
		F: FnMut(&Self::Key, Option<&Self::Value>) -> std::result::Result<(), E>,
	{
		for (key, value) in self.iter() {
			f(key, value)?
		}

		Ok(())
	}

	/// Replaces every value `v` of key `k` with `f(k, v)`, in iteration order.
	///
	/// Stops at the first rejected replacement. Values already replaced stay
	/// replaced.
	fn replace_all<F>(&mut self, mut f: F) -> Result<()>
	where
		F: FnMut(&Self::Key, Option<&Self::Value>) -> Option<Self::Value>,
	{
		for mut entry in self.iter_mut() {
			let value = f(entry.key(), entry.value());
			entry.set_option(value)?;
		}

		Ok(())
	}

	/// Maps `key` to `value` if it is unmapped or mapped to an absent-like value.
	///
	/// Returns the current value if there is one, `None` otherwise.
	fn put_if_absent(&mut self, key: Self::Key, value: Self::Value) -> Result<Option<&Self::Value>> {
		if self.get(&key).is_some() {
			return Ok(Map::get(&*self, &key));
		}

		self.put(key, value)?;
		Ok(None)
	}

	/// Removes the mapping of `key` if its value is `expected`.
	///
	/// Returns whether the mapping has been removed.
	fn remove_if_eq(&mut self, key: &Self::Key, expected: Option<&Self::Value>) -> Result<bool>
	where
		Self::Value: PartialEq,
	{
		let matches = match self.lookup(key) {
			Some(current) => current == expected,
			None => false,
		};

		if matches {
			self.remove(key)?;
		}

		Ok(matches)
	}

	/// Maps `key` to `value` if it is currently mapped to `expected`.
	///
	/// Returns whether the value has been replaced.
	fn replace_if_eq(
		&mut self,
		key: Self::Key,
		expected: Option<&Self::Value>,
		value: Self::Value,
	) -> Result<bool>
	where
		Self::Value: PartialEq,
	{
		let matches = match self.lookup(&key) {
			Some(current) => current == expected,
			None => false,
		};

		if matches {
			self.put(key, value)?;
		}

		Ok(matches)
	}

	/// Maps `key` to `value` only if `key` is mapped.
	///
	/// Returns the previous value.
	fn replace(&mut self, key: Self::Key, value: Self::Value) -> Result<Option<Self::Value>> {
		if self.contains_key(&key) {
			self.put(key, value)
		} else {
			Ok(None)
		}
	}

	/// If `key` is unmapped or mapped to an absent-like value, maps it to `f(key)`
	/// unless `f` returns `None`.
	///
	/// Returns the current (possibly new) value. `f` is not called when `key`
	/// already has a value, and must not itself modify the mapping of `key`.
	fn compute_if_absent<F>(&mut self, key: Self::Key, f: F) -> Result<Option<&Self::Value>>
	where
		Self::Key: Clone,
		F: FnOnce(&Self::Key) -> Option<Self::Value>,
	{
		if self.get(&key).is_none() {
			return match f(&key) {
				Some(value) => {
					self.put(key.clone(), value)?;
					Ok(Map::get(&*self, &key))
				}
				None => Ok(None),
			};
		}

		Ok(Map::get(&*self, &key))
	}

	/// If `key` has a value `old`, replaces it with `f(key, old)`, or removes the
	/// mapping if `f` returns `None`.
	///
	/// Returns the new value.
	fn compute_if_present<F>(&mut self, key: Self::Key, f: F) -> Result<Option<&Self::Value>>
	where
		Self::Key: Clone,
		F: FnOnce(&Self::Key, &Self::Value) -> Option<Self::Value>,
	{
		let new_value = match self.get(&key) {
			Some(old) => f(&key, old),
			None => return Ok(None),
		};

		match new_value {
			Some(value) => {
				self.put(key.clone(), value)?;
				Ok(Map::get(&*self, &key))
			}
			None => {
				self.remove(&key)?;
				Ok(None)
			}
		}
	}

	/// Maps `key` to `f(key, old)` where `old` is its current value, if any.
	///
	/// If `f` returns `None`, the mapping is removed if there was one.
	/// Returns the new value.
	fn compute<F>(&mut self, key: Self::Key, f: F) -> Result<Option<&Self::Value>>
	where
		Self::Key: Clone,
		F: FnOnce(&Self::Key, Option<&Self::Value>) -> Option<Self::Value>,
	{
		let old = self.get(&key);
		let had_value = old.is_some();
		let new_value = f(&key, old);

		match new_value {
			Some(value) => {
				self.put(key.clone(), value)?;
				Ok(Map::get(&*self, &key))
			}
			None => {
				if had_value || self.contains_key(&key) {
					self.remove(&key)?;
				}

				Ok(None)
			}
		}
	}

	/// Maps `key` to `value` if it has no value, otherwise to `f(old, value)`,
	/// removing the mapping if `f` returns `None`.
	///
	/// Returns the new value.
	///
	/// # Example
	///
	/// ```
	/// use assoc_map::{Map, MapExt, OrderedMap};
	///
	/// let mut words: OrderedMap<&str, usize> = OrderedMap::new();
	/// for word in "the cat and the hat".split(' ') {
	/// 	words.merge(word, 1, |count, one| Some(count + one)).unwrap();
	/// }
	///
	/// assert_eq!(words.get(&"the"), Some(&2));
	/// assert_eq!(words.get(&"cat"), Some(&1));
	/// ```
	fn merge<F>(&mut self, key: Self::Key, value: Self::Value, f: F) -> Result<Option<&Self::Value>>
	where
		Self::Key: Clone,
		F: FnOnce(&Self::Value, Self::Value) -> Option<Self::Value>,
	{
		let new_value = match self.get(&key) {
			Some(old) => f(old, value),
			None => Some(value),
		};

		match new_value {
			Some(value) => {
				self.put(key.clone(), value)?;
				Ok(Map::get(&*self, &key))
			}
			None => {
				self.remove(&key)?;
				Ok(None)
			}
		}
	}

	/// Puts every mapping of `other` in this map, in the iteration order of `other`.
	///
	/// Stops at the first rejected mapping.
	fn put_all<M>(&mut self, other: &M) -> Result<()>
	where
		M: Map<Key = Self::Key, Value = Self::Value> + ?Sized,
		Self::Key: Clone,
		Self::Value: Clone,
	{
		log::trace!("putting {} mappings", other.len());
		for (key, value) in other.iter() {
			self.put_option(key.clone(), value.cloned())?;
		}

		Ok(())
	}

	/// Checks that this map and `other` hold the same mappings.
	fn same_mappings<M>(&self, other: &M) -> bool
	where
		M: Map<Key = Self::Key, Value = Self::Value> + ?Sized,
		Self::Value: PartialEq,
	{
		self.len() == other.len()
			&& self
				.iter()
				.all(|(key, value)| other.lookup(key).map_or(false, |v| v == value))
	}

	/// Order-independent hash of the mappings.
	///
	/// Maps holding the same mappings have the same hash code.
	fn hash_code(&self) -> u64
	where
		Self::Key: Hash,
		Self::Value: Hash,
	{
		self.iter()
			.fold(0u64, |sum, (key, value)| sum.wrapping_add(pair_hash(key, value)))
	}

	/// Live view of the keys.
	#[inline]
	fn key_set(&self) -> KeySet<'_, Self> {
		KeySet::new(self)
	}

	/// Live view of the keys, allowing removal.
	#[inline]
	fn key_set_mut(&mut self) -> KeySetMut<'_, Self> {
		KeySetMut::new(self)
	}

	/// Live view of the values.
	#[inline]
	fn values(&self) -> ValueCollection<'_, Self> {
		ValueCollection::new(self)
	}

	/// Live view of the values, allowing removal.
	#[inline]
	fn values_mut(&mut self) -> ValueCollectionMut<'_, Self> {
		ValueCollectionMut::new(self)
	}

	/// Live view of the mappings.
	#[inline]
	fn entry_set(&self) -> EntrySet<'_, Self> {
		EntrySet::new(self)
	}

	/// Live view of the mappings, allowing removal and value rewriting.
	#[inline]
	fn entry_set_mut(&mut self) -> EntrySetMut<'_, Self> {
		EntrySetMut::new(self)
	}

	/// Fail-fast cursor over the current keys of the map.
	#[inline]
	fn cursor(&self) -> Cursor<Self::Key>
	where
		Self::Key: Clone,
	{
		Cursor::new(self)
	}
}

impl<M: Map + ?Sized> MapExt for M {}

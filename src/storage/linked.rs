use super::{Slot, Slots, SlotsMut, Storage};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use std::marker::PhantomData;

/// Link of a [`Linked`] storage.
#[derive(Clone)]
pub struct Link<K, V> {
	key: K,
	slot: Slot<V>,
	prev: Option<usize>,
	next: Option<usize>,
}

/// Insertion-ordered storage requiring nothing more than key equality.
///
/// Mappings are kept in a doubly-linked list whose links are allocated in a
/// slab-like container `C`, reducing the cost of link allocations.
/// Any container implementing "slab-like" functionalities can be used.
/// If the `std-slab` feature is enabled, [`LinkedMap`](crate::LinkedMap) uses
/// [`slab::Slab`].
///
/// Since keys are only compared for equality, lookups walk the list and run in
/// time linear in the number of mappings. Iteration follows insertion order;
/// overwriting the value of a key does not move it.
#[derive(Clone)]
pub struct Linked<K, V, C> {
	/// Allocated links.
	links: C,

	/// Oldest link.
	head: Option<usize>,

	/// Newest link.
	tail: Option<usize>,

	/// Number of links in the list.
	len: usize,

	k: PhantomData<K>,
	v: PhantomData<V>,
}

impl<K, V, C> Linked<K, V, C> {
	#[inline]
	pub fn new() -> Self
	where
		C: Default,
	{
		Linked {
			links: Default::default(),
			head: None,
			tail: None,
			len: 0,
			k: PhantomData,
			v: PhantomData,
		}
	}
}

impl<K, V, C: Default> Default for Linked<K, V, C> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<K, V, C: Slab<Link<K, V>>> Linked<K, V, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn link(&self, id: usize) -> &Link<K, V> {
		C::into_ref(self.links.get(id).unwrap())
	}

	fn find(&self, key: &K) -> Option<usize>
	where
		K: PartialEq,
	{
		let mut current = self.head;
		while let Some(id) = current {
			let link = self.link(id);
			if link.key == *key {
				return Some(id);
			}

			current = link.next
		}

		None
	}
}

impl<K, V, C: SlabMut<Link<K, V>>> Linked<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn link_mut(&mut self, id: usize) -> &mut Link<K, V> {
		C::into_mut(self.links.get_mut(id).unwrap())
	}

	fn push_back(&mut self, key: K, slot: Slot<V>) {
		let id = self.links.insert(Link {
			key,
			slot,
			prev: self.tail,
			next: None,
		});

		match self.tail {
			Some(tail) => self.link_mut(tail).next = Some(id),
			None => self.head = Some(id),
		}

		self.tail = Some(id);
		self.len += 1;
	}

	fn unlink(&mut self, id: usize) -> Link<K, V> {
		let link = self.links.remove(id).unwrap();

		match link.prev {
			Some(prev) => self.link_mut(prev).next = link.next,
			None => self.head = link.next,
		}

		match link.next {
			Some(next) => self.link_mut(next).prev = link.prev,
			None => self.tail = link.prev,
		}

		self.len -= 1;
		link
	}
}

impl<K: PartialEq, V, C: SlabMut<Link<K, V>>> Storage<K, V> for Linked<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
	C: cc_traits::Clear,
{
	#[inline]
	fn len(&self) -> usize {
		self.len
	}

	fn slot(&self, key: &K) -> Option<&Slot<V>> {
		self.find(key).map(|id| &self.link(id).slot)
	}

	fn insert(&mut self, key: K, slot: Slot<V>) -> Option<Slot<V>> {
		match self.find(&key) {
			Some(id) => Some(std::mem::replace(&mut self.link_mut(id).slot, slot)),
			None => {
				self.push_back(key, slot);
				None
			}
		}
	}

	fn remove(&mut self, key: &K) -> Option<Slot<V>> {
		let id = self.find(key)?;
		Some(self.unlink(id).slot)
	}

	fn clear(&mut self) {
		self.head = None;
		self.tail = None;
		self.len = 0;
		self.links.clear()
	}

	fn slots(&self) -> Slots<'_, K, V> {
		Box::new(Iter {
			links: &self.links,
			next: self.head,
			k: PhantomData,
			v: PhantomData,
		})
	}

	fn slots_mut(&mut self) -> SlotsMut<'_, K, V> {
		Box::new(IterMut {
			next: self.head,
			links: &mut self.links,
			k: PhantomData,
			v: PhantomData,
		})
	}

	fn retain(&mut self, f: &mut dyn FnMut(&K, &mut Slot<V>) -> bool) {
		let mut current = self.head;
		while let Some(id) = current {
			let link = self.link_mut(id);
			current = link.next;
			if !f(&link.key, &mut link.slot) {
				self.unlink(id);
			}
		}
	}
}

/// Iterator over the slots of a [`Linked`] storage, in insertion order.
pub struct Iter<'a, K, V, C> {
	links: &'a C,
	next: Option<usize>,
	k: PhantomData<K>,
	v: PhantomData<V>,
}

impl<'a, K: 'a, V: 'a, C: Slab<Link<K, V>>> Iterator for Iter<'a, K, V, C>
where
	C: SimpleCollectionRef,
{
	type Item = (&'a K, &'a Slot<V>);

	fn next(&mut self) -> Option<Self::Item> {
		let id = self.next?;
		let links: &'a C = self.links;
		let link = C::into_ref(links.get(id)?);
		self.next = link.next;
		Some((&link.key, &link.slot))
	}
}

/// Iterator over mutable references to the slots of a [`Linked`] storage,
/// in insertion order.
pub struct IterMut<'a, K, V, C> {
	links: &'a mut C,
	next: Option<usize>,
	k: PhantomData<K>,
	v: PhantomData<V>,
}

impl<'a, K: 'a, V: 'a, C: SlabMut<Link<K, V>>> Iterator for IterMut<'a, K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type Item = (&'a K, &'a mut Slot<V>);

	fn next(&mut self) -> Option<Self::Item> {
		let id = self.next?;
		let link = C::into_mut(self.links.get_mut(id)?);
		self.next = link.next;
		// this is safe because only one mutable reference to the same link can be emitted.
		let link: &'a mut Link<K, V> = unsafe { &mut *(link as *mut Link<K, V>) };
		Some((&link.key, &mut link.slot))
	}
}

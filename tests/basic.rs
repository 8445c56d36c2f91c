use assoc_map::{HashedMap, LinkedMap, Map, MapExt, OrderedMap};
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use std::collections::BTreeMap;

const SEED: u64 = 0x5eed;

/// Runs the primitive checks against an empty map.
fn primitives<M: Map<Key = usize, Value = usize>>(mut map: M) {
	assert!(map.is_empty());
	assert_eq!(map.get(&1), None);
	assert!(!map.contains_key(&1));

	assert_eq!(map.put(1, 10), Ok(None));
	assert_eq!(map.put(2, 20), Ok(None));
	assert_eq!(map.len(), 2);
	assert_eq!(map.get(&1), Some(&10));
	assert!(map.contains_value(&20));
	assert!(!map.contains_value(&30));

	// overwrite keeps the size.
	assert_eq!(map.put(1, 11), Ok(Some(10)));
	assert_eq!(map.len(), 2);
	assert_eq!(map.get(&1), Some(&11));

	assert_eq!(map.remove(&1), Ok(Some(11)));
	assert_eq!(map.remove(&1), Ok(None));
	assert_eq!(map.len(), 1);
	assert!(!map.contains_key(&1));

	map.clear().unwrap();
	map.clear().unwrap();
	assert!(map.is_empty());
	assert_eq!(map.iter().count(), 0);
}

#[test]
pub fn hashed_primitives() {
	primitives(HashedMap::new())
}

#[test]
pub fn ordered_primitives() {
	primitives(OrderedMap::new())
}

#[test]
pub fn linked_primitives() {
	primitives(LinkedMap::new())
}

#[test]
pub fn primitives_through_mut_ref() {
	let mut map = LinkedMap::new();
	primitives(&mut map);
	assert!(map.is_empty());
}

#[test]
pub fn dyn_map() {
	let mut map: Box<dyn Map<Key = &str, Value = i32>> = Box::new(HashedMap::<&str, i32>::new());
	map.put("a", 1).unwrap();
	assert_eq!(map.put_if_absent("a", 2), Ok(Some(&1)));
	assert_eq!(map.merge("a", 5, |a, b| Some(a + b)), Ok(Some(&6)));
	assert_eq!(map.get_or_default(&"b", &0), Some(&0));
	assert_eq!(map.len(), 1);
}

#[test]
pub fn iteration_visits_each_mapping_once() {
	let mut map = HashedMap::new();
	for i in 0..100 {
		map.put(i, i * 2).unwrap();
	}

	let mut seen: Vec<_> = map.iter().map(|(k, v)| (*k, *v.unwrap())).collect();
	assert_eq!(seen.len(), map.len());
	seen.sort();
	for (i, (k, v)) in seen.into_iter().enumerate() {
		assert_eq!(k, i);
		assert_eq!(v, i * 2);
	}
}

#[test]
pub fn ordered_iteration() {
	let mut map = OrderedMap::new();
	for i in [5, 3, 9, 1, 7].iter() {
		map.put(*i, ()).unwrap();
	}

	let keys: Vec<_> = map.key_set().iter().cloned().collect();
	assert_eq!(keys, [1, 3, 5, 7, 9]);
}

#[test]
pub fn insertion_order() {
	let mut map = LinkedMap::new();
	map.put("c", 1).unwrap();
	map.put("a", 2).unwrap();
	map.put("b", 3).unwrap();

	// overwriting does not move the key.
	map.put("c", 4).unwrap();
	map.remove(&"a").unwrap();
	map.put("a", 5).unwrap();

	let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v.unwrap())).collect();
	assert_eq!(entries, [("c", 4), ("b", 3), ("a", 5)]);
}

#[test]
pub fn linked_keys_only_need_equality() {
	#[derive(Debug, PartialEq)]
	struct Point(f64, f64);

	let mut map = LinkedMap::new();
	map.put(Point(0.0, 1.0), "a").unwrap();
	map.put(Point(1.0, 0.0), "b").unwrap();
	map.put(Point(0.0, 1.0), "c").unwrap();

	assert_eq!(map.len(), 2);
	assert_eq!(map.get(&Point(0.0, 1.0)), Some(&"c"));
}

#[test]
pub fn index() {
	let map: OrderedMap<_, _> = vec![(1, "one"), (2, "two")].into_iter().collect();
	assert_eq!(map[&2], "two");
}

#[test]
#[should_panic]
pub fn index_unmapped() {
	let map: OrderedMap<i32, i32> = OrderedMap::new();
	let _ = map[&1];
}

/// Applies the same random operations to each container and to a model.
fn against_model<M: Map<Key = u32, Value = u32>>(mut map: M) {
	let mut model = BTreeMap::new();
	let mut rng = SmallRng::seed_from_u64(SEED);

	let mut keys: Vec<u32> = (0..64).collect();
	keys.shuffle(&mut rng);

	for _ in 0..1000 {
		let key = keys[rng.gen_range(0..keys.len())];
		match rng.gen_range(0..4) {
			0 | 1 => {
				let value = rng.gen();
				assert_eq!(map.put(key, value), Ok(model.insert(key, value)));
			}
			2 => assert_eq!(map.remove(&key), Ok(model.remove(&key))),
			_ => assert_eq!(map.get(&key), model.get(&key)),
		}

		assert_eq!(map.len(), model.len());
	}

	for (key, value) in &model {
		assert_eq!(map.get(key), Some(value));
	}
}

#[test]
pub fn hashed_against_model() {
	against_model(HashedMap::new())
}

#[test]
pub fn ordered_against_model() {
	against_model(OrderedMap::new())
}

#[test]
pub fn linked_against_model() {
	against_model(LinkedMap::new())
}

use assoc_map::{Concurrent, Config, Error, HashedMap, LinkedMap, Map, MapExt, OrderedMap};
use std::{sync::Arc, thread};

fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
pub fn cursor_visits_every_key() {
	init_logger();
	let mut map = OrderedMap::new();
	for i in 0..20 {
		map.put(i, i).unwrap();
	}

	let mut cursor = map.cursor();
	assert_eq!(cursor.remaining(), 20);
	assert_eq!(cursor.key(), None);

	let mut keys = Vec::new();
	while let Some(key) = cursor.next(&map).unwrap() {
		keys.push(*key);
	}

	assert_eq!(keys, (0..20).collect::<Vec<_>>());
	assert_eq!(cursor.remaining(), 0);
}

#[test]
pub fn cursor_detects_insertion() {
	init_logger();
	let mut map = HashedMap::new();
	map.put("a", 1).unwrap();
	map.put("b", 2).unwrap();

	let mut cursor = map.cursor();
	cursor.next(&map).unwrap();
	map.put("c", 3).unwrap();

	assert_eq!(cursor.next(&map), Err(Error::ConcurrentStateChanged));
	assert_eq!(cursor.value(&map), Err(Error::ConcurrentStateChanged));
	assert_eq!(cursor.remove(&mut map), Err(Error::ConcurrentStateChanged));
	assert_eq!(map.len(), 3);
}

#[test]
pub fn cursor_detects_removal() {
	init_logger();
	let mut map = LinkedMap::new();
	map.put("a", 1).unwrap();
	map.put("b", 2).unwrap();

	let mut cursor = map.cursor();
	map.remove(&"b").unwrap();
	assert_eq!(cursor.next(&map), Err(Error::ConcurrentStateChanged));
}

#[test]
pub fn cursor_ignores_value_rewrites() {
	init_logger();
	let mut map = LinkedMap::new();
	map.put("a", 1).unwrap();
	map.put("b", 2).unwrap();

	let mut cursor = map.cursor();
	assert_eq!(cursor.next(&map), Ok(Some(&"a")));
	map.put("b", 20).unwrap();
	assert_eq!(cursor.set_value(&mut map, 10), Ok(Some(1)));
	assert_eq!(cursor.value(&map), Ok(Some(&10)));
	assert_eq!(cursor.next(&map), Ok(Some(&"b")));
	assert_eq!(cursor.value(&map), Ok(Some(&20)));
}

#[test]
pub fn cursor_remove() {
	init_logger();
	let mut map = LinkedMap::new();
	for i in 0..10 {
		map.put(i, i * i).unwrap();
	}

	let mut cursor = map.cursor();
	while let Some(key) = cursor.next(&map).unwrap() {
		if key % 2 == 1 {
			cursor.remove(&mut map).unwrap();
		}
	}

	assert_eq!(map.key_set().iter().cloned().collect::<Vec<_>>(), [0, 2, 4, 6, 8]);
}

#[test]
pub fn cursor_illegal_state() {
	init_logger();
	let mut map = OrderedMap::new();
	map.put(1, 1).unwrap();

	let mut cursor = map.cursor();
	assert_eq!(cursor.remove(&mut map), Err(Error::IllegalState("remove")));
	assert_eq!(cursor.value(&map), Err(Error::IllegalState("value")));

	cursor.next(&map).unwrap();
	assert_eq!(cursor.remove(&mut map), Ok(Some(1)));
	assert_eq!(cursor.remove(&mut map), Err(Error::IllegalState("remove")));
	assert_eq!(cursor.set_value(&mut map, 2), Err(Error::IllegalState("set_value")));
	assert!(map.is_empty());
}

#[test]
pub fn cursor_on_read_only() {
	init_logger();
	let map: OrderedMap<_, _> = vec![(1, 1)].into_iter().collect();
	let mut map = map.freeze();

	let mut cursor = map.cursor();
	cursor.next(&map).unwrap();
	assert_eq!(cursor.remove(&mut map), Err(Error::UnsupportedOperation("remove")));
	assert_eq!(map.len(), 1);
}

#[test]
pub fn concurrent_merge() {
	init_logger();
	let words = Arc::new(Concurrent::new(HashedMap::new()));

	let handles: Vec<_> = (0..8)
		.map(|t| {
			let words = words.clone();
			thread::spawn(move || {
				for i in 0..1000 {
					let key = if (i + t) % 2 == 0 { "even" } else { "odd" };
					words.merge(key, 1, |a, b| Some(a + b)).unwrap();
				}
			})
		})
		.collect();

	for handle in handles {
		handle.join().unwrap();
	}

	assert_eq!(words.get(&"even"), Some(4000));
	assert_eq!(words.get(&"odd"), Some(4000));
	assert_eq!(words.len(), 2);
}

#[test]
pub fn concurrent_compute_if_absent_once() {
	init_logger();
	let map = Arc::new(Concurrent::new(OrderedMap::new()));
	let calls = Arc::new(Concurrent::new(OrderedMap::new()));

	let handles: Vec<_> = (0..8)
		.map(|t| {
			let map = map.clone();
			let calls = calls.clone();
			thread::spawn(move || {
				map.compute_if_absent("key", |_| {
					calls.put(t, ()).unwrap();
					Some(t)
				})
				.unwrap()
			})
		})
		.collect();

	let values: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
	assert_eq!(calls.len(), 1);

	let winner = map.get(&"key");
	assert!(winner.is_some());
	assert!(values.iter().all(|v| *v == winner));
}

#[test]
pub fn concurrent_operations() {
	init_logger();
	let map = Concurrent::new(LinkedMap::with_config(Config::new().permit_nulls()));

	assert_eq!(map.put("a", 1), Ok(None));
	assert_eq!(map.put_option("b", None), Ok(None));
	assert_eq!(map.lookup(&"b"), Some(None));
	assert_eq!(map.get_or_default(&"b", 0), None);
	assert_eq!(map.get_or_default(&"c", 0), Some(0));
	assert!(map.contains_key(&"b"));
	assert!(map.contains_value(&1));

	assert_eq!(map.put_if_absent("b", 2), Ok(None));
	assert_eq!(map.put_if_absent("b", 3), Ok(Some(2)));
	assert_eq!(map.replace("a", 5), Ok(Some(1)));
	assert_eq!(map.replace_if_eq("a", Some(&5), 6), Ok(true));
	assert_eq!(map.compute_if_present("a", |_, v| Some(v + 1)), Ok(Some(7)));
	assert_eq!(map.compute("c", |_, old| old.map(|v| v + 1)), Ok(None));
	assert!(!map.contains_key(&"c"));

	map.replace_all(|_, v| v.map(|v| v * 10)).unwrap();
	let mut sum = 0;
	map.for_each(|_, v| sum += v.unwrap());
	assert_eq!(sum, 90);

	assert_eq!(map.remove_if_eq(&"a", Some(&70)), Ok(true));
	assert_eq!(map.remove(&"b"), Ok(Some(20)));
	assert!(map.is_empty());

	let mut other = OrderedMap::new();
	other.put("x", 1).unwrap();
	map.put_all(&other).unwrap();
	assert_eq!(map.read().get(&"x"), Some(&1));

	map.clear().unwrap();
	assert!(map.into_inner().is_empty());
}

#[test]
pub fn concurrent_cursor() {
	init_logger();
	let map = Concurrent::new(HashedMap::new());
	map.put(1, "one").unwrap();

	let mut cursor = map.cursor();
	assert_eq!(cursor.next(&*map.read()), Ok(Some(&1)));
	map.put(2, "two").unwrap();
	assert_eq!(cursor.next(&*map.read()), Err(Error::ConcurrentStateChanged));
}

#[test]
pub fn poisoned_lock_is_recovered() {
	init_logger();
	let map = Arc::new(Concurrent::new(HashedMap::new()));
	map.put(1, 1).unwrap();

	let poisoner = map.clone();
	let result = thread::spawn(move || {
		let _guard = poisoner.write();
		panic!("poisoning the lock");
	})
	.join();
	assert!(result.is_err());

	assert_eq!(map.get(&1), Some(1));
	assert_eq!(map.put(2, 2), Ok(None));
	assert_eq!(map.len(), 2);
}

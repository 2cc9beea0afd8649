#![no_main]

use libfuzzer_sys::fuzz_target;
use memokit::kind::CacheKind;

// Fuzz arbitrary get sequences against both cache modes
//
// Drives a cache with a fuzzer-chosen capacity and keep-hot flag through an
// arbitrary key stream, with the fill source failing on a subset of keys,
// and checks the capacity bound and map/order agreement after every call.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let capacity = (data[0] as usize % 32).max(1);
    let keep_hot = data[1] % 2 == 1;

    let kind = CacheKind::new()
        .with_capacity(capacity)
        .with_keep_hot(keep_hot);
    let mut cache = kind.build(|key: &u8| {
        if key % 7 == 0 {
            Err("unfillable key")
        } else {
            Ok(u16::from(*key) * 3)
        }
    });

    for &key in &data[2..] {
        if key % 7 == 0 {
            assert!(cache.get(&key).is_err());
            assert!(!cache.contains(&key), "failed fill must leave no trace");
        } else {
            assert_eq!(cache.get(&key), Ok(&(u16::from(key) * 3)));
            assert!(cache.contains(&key));
        }

        // Capacity bound and map/order agreement hold after every call.
        assert!(cache.len() <= capacity);
        let ordered: Vec<u8> = cache.ordered_keys().copied().collect();
        assert_eq!(ordered.len(), cache.len());
        for tracked in &ordered {
            assert!(cache.peek(tracked).is_some());
        }
    }
});

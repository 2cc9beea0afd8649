// ==============================================
// FILL-CACHE CONTRACT TESTS (integration)
// ==============================================
//
// End-to-end checks of the observable cache contract through the public
// surface only: fill invocation counts, the capacity bound, eviction order
// with and without keep-hot, and failure behavior.

use std::cell::Cell;
use std::convert::Infallible;

use memokit::cache::FillCache;
use memokit::kind::CacheKind;

// ==============================================
// Miss-then-hit
// ==============================================

#[test]
fn fill_runs_exactly_once_per_key() {
    let fills = Cell::new(0u32);
    let mut cache = CacheKind::new().with_capacity(8).build(|key: &u32| {
        fills.set(fills.get() + 1);
        Ok::<_, Infallible>(key * 100)
    });

    assert_eq!(cache.get(&7), Ok(&700));
    assert_eq!(fills.get(), 1);

    // Hits never reach the fill source, however often they repeat.
    for _ in 0..10 {
        assert_eq!(cache.get(&7), Ok(&700));
    }
    assert_eq!(fills.get(), 1);

    assert_eq!(cache.get(&8), Ok(&800));
    assert_eq!(fills.get(), 2);
}

// ==============================================
// Capacity bound
// ==============================================

#[test]
fn len_never_exceeds_capacity_under_distinct_misses() {
    let mut cache = CacheKind::new()
        .with_capacity(3)
        .build(|key: &u32| Ok::<_, Infallible>(*key));

    for i in 0..100 {
        let _ = cache.get(&i);
        assert!(cache.len() <= 3, "capacity bound violated after get({i})");
    }
    assert_eq!(cache.len(), 3);
}

#[test]
fn capacity_one_holds_only_the_newest_key() {
    let mut cache = CacheKind::new()
        .with_capacity(1)
        .build(|key: &u32| Ok::<_, Infallible>(*key));

    for i in 0..5 {
        let _ = cache.get(&i);
        assert_eq!(cache.len(), 1);
    }
    assert!(cache.contains(&4));
}

// ==============================================
// Eviction order
// ==============================================

fn lookup(key: &char) -> Result<i32, Infallible> {
    Ok(match key {
        'a' => 123,
        'b' => 234,
        'c' => 345,
        _ => 0,
    })
}

#[test]
fn oldest_key_is_evicted_when_capacity_is_exceeded() {
    let mut cache = CacheKind::new().with_capacity(2).build(lookup);

    let _ = cache.get(&'a');
    let _ = cache.get(&'b');
    let _ = cache.get(&'c');

    let order: Vec<char> = cache.ordered_keys().copied().collect();
    assert_eq!(order, ['c', 'b']);

    assert!(!cache.contains(&'a'));
    assert_eq!(cache.peek(&'b'), Some(&234));
    assert_eq!(cache.peek(&'c'), Some(&345));
}

#[test]
fn hits_keep_insertion_order_without_keep_hot() {
    let mut cache = CacheKind::new().with_capacity(2).build(lookup);

    let _ = cache.get(&'a');
    let _ = cache.get(&'b');
    let _ = cache.get(&'a');

    let order: Vec<char> = cache.ordered_keys().copied().collect();
    assert_eq!(order, ['b', 'a']);
}

// ==============================================
// Keep-hot promotion
// ==============================================

#[test]
fn keep_hot_promotes_re_accessed_keys_to_front() {
    let mut cache = CacheKind::new()
        .with_capacity(2)
        .with_keep_hot(true)
        .build(lookup);

    let _ = cache.get(&'a');
    let _ = cache.get(&'b');
    let _ = cache.get(&'a');

    let order: Vec<char> = cache.ordered_keys().copied().collect();
    assert_eq!(order, ['a', 'b']);
}

#[test]
fn keep_hot_changes_which_key_survives_eviction() {
    let fifo = CacheKind::new().with_capacity(2);
    let hot = fifo.with_keep_hot(true);

    // Same access sequence against both kinds.
    let mut plain = fifo.build(lookup);
    let mut promoted = hot.build(lookup);
    for cache in [&mut plain, &mut promoted] {
        let _ = cache.get(&'a');
        let _ = cache.get(&'b');
        let _ = cache.get(&'a');
        let _ = cache.get(&'c');
    }

    // Pure FIFO evicts 'a' (oldest insertion); keep-hot evicts 'b'.
    assert!(!plain.contains(&'a'));
    assert!(plain.contains(&'b'));

    assert!(promoted.contains(&'a'));
    assert!(!promoted.contains(&'b'));
}

// ==============================================
// Unimplemented fill
// ==============================================

#[test]
fn unfilled_cache_kind_fails_on_every_get() {
    let mut cache: FillCache<&str, i32> = FillCache::unfilled(CacheKind::new());

    for _ in 0..3 {
        let err = cache.get(&"key").unwrap_err();
        assert_eq!(
            err.to_string(),
            "a fill(key) capability must be defined for this cache kind"
        );
    }
    assert!(cache.is_empty());
}

// ==============================================
// Default policy
// ==============================================

#[test]
fn unconfigured_kind_uses_default_policy() {
    let kind = CacheKind::default();
    assert_eq!(kind.capacity(), 1000);
    assert!(!kind.keep_hot());

    let cache: FillCache<u64, u64> = FillCache::unfilled(kind);
    assert_eq!(cache.capacity(), 1000);
    assert!(!cache.kind().keep_hot());
}

// ==============================================
// Fill failure
// ==============================================

#[test]
fn failed_fill_leaves_mapping_and_order_untouched() {
    let mut cache = CacheKind::new().with_capacity(2).build(|key: &&str| {
        if *key == "boom" {
            Err("fill failed")
        } else {
            Ok(key.len())
        }
    });

    assert_eq!(cache.get(&"ok"), Ok(&2));
    assert_eq!(cache.get(&"fine"), Ok(&4));

    assert_eq!(cache.get(&"boom"), Err("fill failed"));

    // No trace of the failed key, no eviction of the survivors.
    assert!(!cache.contains(&"boom"));
    assert_eq!(cache.len(), 2);
    let order: Vec<&str> = cache.ordered_keys().copied().collect();
    assert_eq!(order, ["fine", "ok"]);

    // The failure is not cached either; the source runs again next time.
    assert_eq!(cache.get(&"boom"), Err("fill failed"));
}

// ==============================================
// Absence markers
// ==============================================

#[test]
fn absent_results_are_cached_like_any_value() {
    let fills = Cell::new(0u32);
    let mut cache = CacheKind::new().with_capacity(4).build(|key: &u8| {
        fills.set(fills.get() + 1);
        Ok::<_, Infallible>(if key % 2 == 0 { Some(*key) } else { None })
    });

    assert_eq!(cache.get(&3), Ok(&None));
    assert_eq!(cache.get(&3), Ok(&None));
    assert_eq!(fills.get(), 1, "a cached None must hit, not recompute");

    // And it occupies a slot like any other entry.
    assert_eq!(cache.len(), 1);
}

//! DHAT heap profiler for memokit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::convert::Infallible;

use memokit::kind::CacheKind;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

const OPERATIONS: usize = 200_000;
const KEY_SPACE: u64 = 4096;

fn run_workload(name: &str, kind: CacheKind) {
    let mut rng = XorShift64::new(0x5eed_cafe);
    let mut cache = kind.build(|key: &u64| {
        // Variable-size payloads so allocation patterns show up in dhat.
        Ok::<_, Infallible>(vec![0u8; (key % 256) as usize])
    });

    for _ in 0..OPERATIONS {
        let key = rng.next_u64() % KEY_SPACE;
        let _ = cache.get(&key);
    }

    println!("{name}: {}/{} entries resident", cache.len(), cache.capacity());
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    run_workload("fifo", CacheKind::new().with_capacity(1024));
    run_workload(
        "keep_hot",
        CacheKind::new().with_capacity(1024).with_keep_hot(true),
    );
}

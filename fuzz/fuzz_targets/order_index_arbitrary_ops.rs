#![no_main]

use libfuzzer_sys::fuzz_target;
use memokit::ds::OrderIndex;

// Fuzz arbitrary operation sequences on OrderIndex
//
// Tests random sequences of push_front, pop_back, promote, and contains
// operations to find ordering edge cases and uniqueness violations.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let mut index: OrderIndex<u8> = OrderIndex::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 4;
        let key = data[idx + 1];

        match op {
            0 => {
                // push_front has a uniqueness precondition
                if !index.contains(&key) {
                    index.push_front(key);
                }
            }
            1 => {
                let popped = index.pop_back();
                if let Some(popped) = popped {
                    assert!(!index.contains(&popped));
                }
            }
            2 => {
                let was_tracked = index.contains(&key);
                assert_eq!(index.promote(&key), was_tracked);
                if was_tracked {
                    assert_eq!(index.front(), Some(&key));
                }
            }
            3 => {
                let _ = index.contains(&key);
            }
            _ => unreachable!(),
        }

        index.debug_validate_invariants();
        idx += 2;
    }
});

//! Concurrent access tests for the version API

use std::{
    sync::{Arc, Barrier},
    thread,
};

use instpatch::{version, Version, VERSION};

#[cfg(test)]
mod concurrent_version_tests {
    use super::*;

    /// Test: many threads querying the version at once all see the same triple
    #[test]
    fn stress_concurrent_version_queries() {
        let thread_count = 8;
        let calls_per_thread = 10_000;
        let barrier = Arc::new(Barrier::new(thread_count));

        let handles: Vec<_> = (0..thread_count)
            .map(|_| {
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    let first = version();
                    for _ in 0..calls_per_thread {
                        assert_eq!(version(), first);
                    }
                    (first, Version::current().to_string())
                })
            })
            .collect();

        for handle in handles {
            let (triple, display) = handle.join().unwrap();
            assert_eq!(triple, (1, 1, 4));
            assert_eq!(display, VERSION);
        }
    }
}

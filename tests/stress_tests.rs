//! Stress tests that push the heap through long operation sequences
//!
//! These tests perform large numbers of operations in patterns that force deep
//! trees, long cascading-cut chains and repeated consolidation.

mod common;

use fibonacci_heap::{FibonacciHandle, FibonacciHeap};

/// Deterministic xorshift generator so failures reproduce
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

#[test]
fn test_massive_operations() {
    common::init_tracing();
    let mut heap = FibonacciHeap::new();
    for i in (0..10_000).rev() {
        heap.insert(i);
    }
    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.extract_min(), Ok(i));
    }
    assert!(heap.is_empty());
}

#[test]
fn test_many_decrease_keys() {
    common::init_tracing();
    let mut heap = FibonacciHeap::new();
    let handles: Vec<_> = (0..2000).map(|i| heap.insert(100_000 + i)).collect();
    // Build deep trees first
    assert_eq!(heap.extract_min(), Ok(100_000));

    for (i, handle) in handles.iter().enumerate().skip(1) {
        assert!(heap.decrease(handle, i as i64).is_ok());
    }
    heap.validate().unwrap();

    for i in 1..2000 {
        assert_eq!(heap.extract_min(), Ok(i));
    }
}

#[test]
fn test_alternating_ops() {
    common::init_tracing();
    let mut heap = FibonacciHeap::new();
    for i in 0..500 {
        heap.insert(i * 2);
        heap.insert(i * 2 + 1);
        assert_eq!(heap.extract_min(), Ok(i));
    }
    assert_eq!(heap.len(), 500);
    heap.validate().unwrap();
}

/// Cut children in bottom-up order so every ancestor ends up marked and the
/// next cut has to cascade all the way up
#[test]
fn test_long_cascading_chains() {
    common::init_tracing();
    let mut heap = FibonacciHeap::new();
    let handles: Vec<_> = (0..4097).map(|i| heap.insert(i)).collect();
    assert_eq!(heap.extract_min(), Ok(0));
    assert_eq!(heap.root_degrees(), vec![12]);

    for (i, handle) in handles.iter().enumerate().skip(1).rev() {
        if i % 2 == 1 {
            heap.decrease(handle, -(i as i64)).unwrap();
        }
    }
    heap.validate().unwrap();

    let mut last = i64::MIN;
    let mut count = 0;
    while let Ok(value) = heap.extract_min() {
        assert!(value >= last);
        last = value;
        count += 1;
    }
    assert_eq!(count, 4096);
}

#[test]
fn test_random_mixed_workload() {
    common::init_tracing();
    let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);
    let mut heap = FibonacciHeap::new();
    let mut live: Vec<(FibonacciHandle, i64)> = Vec::new();

    for step in 0..20_000 {
        match rng.below(10) {
            0..=3 => {
                let value = rng.below(1_000_000) as i64;
                live.push((heap.insert(value), value));
            }
            4..=5 => {
                if let Ok(value) = heap.extract_min() {
                    let pos = live
                        .iter()
                        .position(|(h, _)| heap.is_orphan(h))
                        .unwrap();
                    assert_eq!(live.swap_remove(pos).1, value);
                }
            }
            6..=8 => {
                if !live.is_empty() {
                    let pos = rng.below(live.len() as u64) as usize;
                    let (handle, value) = live[pos];
                    let lowered = value - rng.below(1000) as i64;
                    heap.decrease(&handle, lowered).unwrap();
                    live[pos].1 = lowered;
                }
            }
            _ => {
                if !live.is_empty() {
                    let pos = rng.below(live.len() as u64) as usize;
                    let (handle, value) = live.swap_remove(pos);
                    assert_eq!(heap.remove(&handle), Ok(value));
                }
            }
        }

        assert_eq!(heap.len(), live.len());
        if step % 1000 == 0 {
            heap.validate().unwrap();
        }
    }

    let mut expected: Vec<i64> = live.iter().map(|&(_, v)| v).collect();
    expected.sort_unstable();
    let drained: Vec<i64> = heap.drain().collect();
    assert_eq!(drained, expected);
}

#[test]
fn test_remove_everything_by_handle() {
    common::init_tracing();
    let mut heap = FibonacciHeap::new();
    let handles: Vec<_> = (0..1000).map(|i| heap.insert(i)).collect();
    heap.extract_min().unwrap();

    // Remove from the middle outwards to hit roots and deep nodes alike
    for handle in handles.iter().skip(1).rev().step_by(2) {
        heap.remove(handle).unwrap();
    }
    heap.validate().unwrap();
    for handle in handles.iter().skip(1) {
        if heap.contains(handle) {
            heap.remove(handle).unwrap();
        }
    }
    assert!(heap.is_empty());
    heap.validate().unwrap();
}

#[cfg(feature = "tracing")]
#[test]
fn test_cascading_cuts_with_subscriber_installed() {
    common::init_tracing();
    assert!(tracing::dispatcher::has_been_set());

    let mut heap = FibonacciHeap::new();
    let handles: Vec<_> = (0..257).map(|i| heap.insert(i)).collect();
    assert_eq!(heap.extract_min(), Ok(0));
    for (i, handle) in handles.iter().enumerate().skip(1).rev() {
        if i % 3 != 0 {
            heap.decrease(handle, -(i as i64)).unwrap();
        }
    }
    heap.remove(&handles[3]).unwrap();
    heap.validate().unwrap();

    let drained: Vec<i64> = heap.drain().collect();
    assert!(drained.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(drained.len(), 255);
}

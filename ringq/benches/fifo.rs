use std::collections::VecDeque;
use std::time::{Duration, Instant};

use criterion::{Criterion, criterion_group, criterion_main};
use ringq::CircularQueue;

const CAPACITIES: &[usize] = &[2, 64, 1024];

// Enqueue every step, dequeue every other step, so the queue keeps growing
// and the doubling path is paid throughout.
fn bench_ringq(iters: usize, cap: usize) -> Duration {
    let mut q = CircularQueue::new(cap).unwrap();
    let now = Instant::now();
    for i in 0..iters {
        q.enqueue(i as u64);
        if i % 2 == 0 {
            _ = q.dequeue();
        }
    }
    now.elapsed()
}

fn bench_vecdeque(iters: usize, cap: usize) -> Duration {
    let mut q = VecDeque::with_capacity(cap);
    let now = Instant::now();
    for i in 0..iters {
        q.push_back(i as u64);
        if i % 2 == 0 {
            _ = q.pop_front();
        }
    }
    now.elapsed()
}

fn groups(c: &mut Criterion) {
    type BenchFn = fn(usize, usize) -> Duration;
    let mut g = c.benchmark_group("fifo");
    for (i, cap) in CAPACITIES.iter().copied().enumerate() {
        for (name, f) in [
            ("ringq", bench_ringq as BenchFn),
            ("vecdeque", bench_vecdeque as BenchFn),
        ] {
            let id = format!("churn_{:02}_{cap}_{name}", i + 1);
            g.bench_function(&id, |b| b.iter_custom(|iters| f(iters as usize, cap)));
        }
    }
}

criterion_group!(fifo, groups);
criterion_main!(fifo);

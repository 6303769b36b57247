use std::collections::VecDeque;

use anyhow::{Result, ensure};
use argh::FromArgs;
use ringq::CircularQueue;

#[derive(Debug, FromArgs)]
/// Growable circular FIFO queue demo
#[argh(help_triggers("--help"))]
struct Args {
    /// initial capacity of the churn queue
    #[argh(option, arg_name = "int", default = "2")]
    capacity: usize,
    /// number of randomized operations to run
    #[argh(option, arg_name = "int", default = "256")]
    ops: usize,
}

fn main() -> Result<()> {
    let args = argh::from_env::<Args>();
    tracing_subscriber::fmt()
        .without_time()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    scripted()?;
    churn(args.capacity, args.ops)?;
    Ok(())
}

/// Walks the fixed exchange: three inserts against capacity 2 force one
/// doubling, then the front is drained across the grown buffer.
fn scripted() -> Result<()> {
    let mut q = CircularQueue::new(2)?;
    for i in [5, 50, 10] {
        q.enqueue(i);
        tracing::info!("enqueued {i}, len={}, capacity={}", q.len(), q.capacity());
    }
    ensure!(q.capacity() == 4, "expected exactly one doubling");

    let (a, b) = (q.dequeue()?, q.dequeue()?);
    tracing::info!("dequeued {a}, then {b}");
    ensure!((a, b) == (5, 50), "front elements out of order");

    let front = *q.peek()?;
    tracing::info!("peeked {front}, len={}", q.len());
    ensure!(front == 10 && q.len() == 1, "peek left unexpected state");

    Ok(())
}

/// Runs a randomized enqueue/dequeue interleaving, checking every outcome
/// against a `VecDeque` model.
fn churn(capacity: usize, ops: usize) -> Result<()> {
    let mut q = CircularQueue::new(capacity)?;
    let mut model = VecDeque::new();

    for _ in 0..ops {
        if fastrand::bool() {
            let val = fastrand::u32(..);
            q.enqueue(val);
            model.push_back(val);
        } else {
            let (got, want) = (q.dequeue().ok(), model.pop_front());
            ensure!(got == want, "dequeue mismatch: got {got:?}, want {want:?}");
        }
        ensure!(q.len() == model.len(), "length diverged from model");
    }
    tracing::info!(
        "churned {ops} ops, len={}, capacity={}",
        q.len(),
        q.capacity()
    );

    Ok(())
}

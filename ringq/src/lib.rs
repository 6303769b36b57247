mod error;
pub use error::Error;

mod queue;
pub use queue::{CircularQueue, Queue};

#[test]
fn grow_then_drain() {
    let mut q = CircularQueue::new(2).unwrap();
    q.enqueue(5);
    q.enqueue(50);
    q.enqueue(10);
    assert_eq!(q.capacity(), 4);
    assert_eq!(q.dequeue(), Ok(5));
    assert_eq!(q.dequeue(), Ok(50));
    assert_eq!(q.peek(), Ok(&10));
    assert_eq!(q.len(), 1);
}

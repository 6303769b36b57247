/// Failures reported by queue construction and front-element access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("capacity must not be zero")]
    InvalidCapacity,
    #[error("queue is empty")]
    Empty,
}

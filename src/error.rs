//! Error types returned by the book's public operations.

use crate::types::OrderId;

/// Errors from [`Engine::submit`](crate::Engine::submit) and future order
/// lookup operations. All errors are reported synchronously to the caller;
/// a rejected order leaves the book exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BookError {
    /// Order rejected before touching the book: non-positive quantity or
    /// price. No state change.
    #[error("invalid order: {0}")]
    InvalidOrder(String),
    /// Order id not present in the book. Reserved for a future cancel
    /// operation; submit never produces it.
    #[error("order {0} not found")]
    NotFound(OrderId),
}

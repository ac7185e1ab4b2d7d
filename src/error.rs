//! Error types for kernel operations.
//!
//! Only input validation fails. Numeric degeneracies (normalizing a zero
//! vector, a ray that misses) are encoded in the returned value instead.

use thiserror::Error;

/// Validation errors raised by constructors and checked accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhysicsError {
    /// A vector was built from a list that does not hold exactly two values.
    #[error("Vec2 must be initialized with exactly 2 components, got {len}")]
    InvalidComponentCount { len: usize },
    /// A vector axis other than 0 (x) or 1 (y) was requested.
    #[error("Vec2 axis index {index} out of range (expected 0 or 1)")]
    AxisOutOfRange { index: usize },
    /// A chain needs at least its anchor point.
    #[error("chain needs at least one point")]
    InsufficientPoints,
    /// Target distance between chain points must be finite and non-negative.
    #[error("target point distance must be finite and non-negative")]
    InvalidDistance,
    /// Bounds must satisfy min <= max on both axes with a non-negative margin.
    #[error("bounds must satisfy min <= max with a non-negative margin")]
    InvalidBounds,
}

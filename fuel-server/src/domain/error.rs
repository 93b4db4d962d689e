//! Domain error types.
//!
//! These errors represent internally inconsistent inputs to domain
//! constructors. They are distinct from API/IO errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Total distance must be non-negative
    #[error("total distance must be non-negative, got {0} miles")]
    NegativeDistance(f64),

    /// Total duration must be non-negative
    #[error("total duration must be non-negative, got {0} seconds")]
    NegativeDuration(f64),

    /// A plan needs route geometry to be meaningful
    #[error("route geometry is empty")]
    EmptyGeometry,
}

//! Error types for enemy construction.

use thiserror::Error;

/// Errors that can occur when building an enemy.
#[derive(Debug, Error, PartialEq)]
pub enum EnemyError {
    /// Size must be a positive, finite number.
    #[error("Invalid enemy size: {0}")]
    InvalidSize(f32),

    /// Enemy was built before a position was assigned.
    #[error("Enemy has no position")]
    MissingPosition,
}

use thiserror::Error;

/// Construction-time configuration failures.
///
/// Engine-internal coordinate mistakes are not represented here; those
/// panic through the grid's bounds assertion since no caller can recover
/// from them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("maze dimensions must be nonzero, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },
}

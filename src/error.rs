use thiserror::Error;

use crate::maze::Point;

/// Errors surfaced by the engine. All of them are local, recoverable
/// conditions: the engine performs no I/O, and generation and solving are
/// deterministic for a fixed seed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Row or column count was zero or negative.
    #[error("invalid maze dimensions {rows}x{cols}; both must be positive")]
    InvalidDimensions { rows: i32, cols: i32 },
    /// The solver exhausted its search without reaching the target. Never
    /// happens on a generated maze, only on malformed or partial grids.
    #[error("no path found from {from:?} to {to:?}")]
    NoPathFound { from: Point, to: Point },
    /// A strategy name did not match any registered algorithm.
    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offender() {
        let err = Error::InvalidDimensions { rows: 0, cols: 7 };
        assert_eq!(
            err.to_string(),
            "invalid maze dimensions 0x7; both must be positive"
        );
        let err = Error::UnknownAlgorithm("a-star".to_string());
        assert_eq!(err.to_string(), "unknown algorithm \"a-star\"");
    }
}

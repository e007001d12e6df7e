/// Errors raised by engine operations.
///
/// Every variant is recoverable: a rejected call leaves the grid and the
/// counters exactly as they were before it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("'{operation}' is not allowed while {state}")]
    InvalidStateTransition {
        operation: &'static str,
        state: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;

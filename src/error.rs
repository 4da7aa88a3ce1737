use thiserror::Error;

/// Broad classification of a [`CursorError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The cursor was asked for something its lifecycle state cannot provide
    InvalidState,
    /// A sequence was built from arguments it cannot represent
    Construction,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// `current()` was called before the first successful `advance()`
    #[error("Cursor has not been advanced yet, no current element")]
    NotStarted,
    /// `current()` was called after the cursor ran past the last element
    #[error("Cursor is exhausted, no current element")]
    Exhausted,
    /// Any operation other than `release()` on a released cursor
    #[error("Cursor has been released")]
    Released,
    #[error("Starting offset {offset} is out of range for a sequence of length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },
}

impl CursorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CursorError::NotStarted | CursorError::Exhausted | CursorError::Released => {
                ErrorKind::InvalidState
            }
            CursorError::OffsetOutOfRange { .. } => ErrorKind::Construction,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::InvalidState`
    pub fn is_invalid_state(&self) -> bool {
        self.kind() == ErrorKind::InvalidState
    }
}

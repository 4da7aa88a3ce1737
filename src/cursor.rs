use crate::error::CursorError;

/// Lifecycle of a single traversal
///
/// A cursor starts `BeforeStart`, moves through `At(0)`, `At(1)`, ... and ends
/// `Exhausted`. `Released` is terminal and reachable from every other state.
/// Indices are logical: they count elements produced by this cursor, not
/// slots of whatever storage backs the sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CursorState {
    /// Created, `advance()` not called yet
    BeforeStart,
    /// Positioned on the element with this logical index
    At(usize),
    /// Ran past the last element
    Exhausted,
    /// Released by the consumer
    Released,
}

impl CursorState {
    /// Step forward over a sequence holding `len` logical elements
    ///
    /// Exhaustion is sticky: stepping an `Exhausted` state stays `Exhausted`.
    pub fn next(self, len: usize) -> Result<Self, CursorError> {
        match self {
            CursorState::BeforeStart if len == 0 => Ok(CursorState::Exhausted),
            CursorState::BeforeStart => Ok(CursorState::At(0)),
            CursorState::At(index) if index + 1 >= len => Ok(CursorState::Exhausted),
            CursorState::At(index) => Ok(CursorState::At(index + 1)),
            CursorState::Exhausted => Ok(CursorState::Exhausted),
            CursorState::Released => Err(CursorError::Released),
        }
    }

    /// Logical index of the current element, or the reason there is none
    pub fn index(self) -> Result<usize, CursorError> {
        match self {
            CursorState::BeforeStart => Err(CursorError::NotStarted),
            CursorState::At(index) => Ok(index),
            CursorState::Exhausted => Err(CursorError::Exhausted),
            CursorState::Released => Err(CursorError::Released),
        }
    }

    pub fn has_current(self) -> bool {
        matches!(self, CursorState::At(_))
    }
}

/// Stateful forward-only walk over one sequence
///
/// A cursor is obtained from a [`Sequence`](crate::Sequence), advanced one
/// element at a time and released when the consumer is done with it. The
/// trait is object safe, so `Box<dyn Cursor<Element = E>>` can stand in for
/// any concrete cursor.
pub trait Cursor {
    /// The type of elements this cursor yields
    type Element;

    /// Move to the next element
    ///
    /// Returns `Ok(true)` when a new current element is available and
    /// `Ok(false)` once the end is reached; every later call also returns
    /// `Ok(false)`. Fails with [`CursorError::Released`] after `release()`.
    fn advance(&mut self) -> Result<bool, CursorError>;

    /// Get the element the cursor is positioned on
    ///
    /// Fails before the first successful `advance()`, after exhaustion and
    /// after release.
    fn current(&self) -> Result<Self::Element, CursorError>;

    /// Relinquish whatever the cursor holds
    ///
    /// Idempotent and infallible.
    fn release(&mut self);

    /// Where the cursor is in its lifecycle
    fn state(&self) -> CursorState;

    /// Logical index of the current element, if there is one
    fn index(&self) -> Option<usize> {
        self.state().index().ok()
    }

    fn is_exhausted(&self) -> bool {
        self.state() == CursorState::Exhausted
    }

    fn is_released(&self) -> bool {
        self.state() == CursorState::Released
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Element = C::Element;

    fn advance(&mut self) -> Result<bool, CursorError> {
        (**self).advance()
    }

    fn current(&self) -> Result<Self::Element, CursorError> {
        (**self).current()
    }

    fn release(&mut self) {
        (**self).release()
    }

    fn state(&self) -> CursorState {
        (**self).state()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Element = C::Element;

    fn advance(&mut self) -> Result<bool, CursorError> {
        (**self).advance()
    }

    fn current(&self) -> Result<Self::Element, CursorError> {
        (**self).current()
    }

    fn release(&mut self) {
        (**self).release()
    }

    fn state(&self) -> CursorState {
        (**self).state()
    }
}

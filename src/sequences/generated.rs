use crate::cursor::{Cursor, CursorState};
use crate::error::CursorError;
use crate::sequence::Sequence;
use std::fmt;
use tracing::trace;

/// Sequence whose elements are produced on demand by a factory
///
/// Every cursor calls the factory once and walks the iterator it returns, so
/// cursors never share generator state. The factory is the sequence and the
/// iterator it builds is the cursor's private state; the two are never the
/// same object.
pub struct GeneratedSequence<F> {
    factory: F,
}

impl<F, I> GeneratedSequence<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    pub fn new(factory: F) -> Self {
        GeneratedSequence { factory }
    }
}

impl<F> fmt::Debug for GeneratedSequence<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedSequence").finish_non_exhaustive()
    }
}

impl<F, I> Sequence for GeneratedSequence<F>
where
    F: Fn() -> I,
    I: IntoIterator,
    I::Item: Clone,
{
    type Cursor<'seq>
        = IterCursor<I::IntoIter>
    where
        Self: 'seq;

    fn new_cursor(&self) -> IterCursor<I::IntoIter> {
        IterCursor::new((self.factory)())
    }
}

/// Adapts any [`Iterator`] to the cursor contract
///
/// The current element is buffered so it can be read more than once.
/// Exhaustion is sticky even when the wrapped iterator is not fused: the
/// iterator is dropped the first time it reports `None`. `release()` drops
/// it as well, which is where an iterator holding a file handle or a
/// connection gets to clean up.
pub struct IterCursor<I: Iterator> {
    iter: Option<I>,
    current: Option<I::Item>,
    state: CursorState,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        trace!("New iterator cursor");
        IterCursor {
            iter: Some(iter.into_iter()),
            current: None,
            state: CursorState::BeforeStart,
        }
    }
}

impl<I: Iterator> fmt::Debug for IterCursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterCursor")
            .field("state", &self.state)
            .field("holds_iterator", &self.iter.is_some())
            .finish()
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Element = I::Item;

    fn advance(&mut self) -> Result<bool, CursorError> {
        let index = match self.state {
            CursorState::Released => return Err(CursorError::Released),
            CursorState::Exhausted => return Ok(false),
            CursorState::BeforeStart => 0,
            CursorState::At(index) => index + 1,
        };

        match self.iter.as_mut().and_then(Iterator::next) {
            Some(item) => {
                self.current = Some(item);
                self.state = CursorState::At(index);
                Ok(true)
            }
            None => {
                trace!(produced = index, "Iterator cursor exhausted");
                self.iter = None;
                self.current = None;
                self.state = CursorState::Exhausted;
                Ok(false)
            }
        }
    }

    fn current(&self) -> Result<I::Item, CursorError> {
        self.state.index()?;
        self.current.clone().ok_or(CursorError::Exhausted)
    }

    fn release(&mut self) {
        if self.state != CursorState::Released {
            trace!(index = ?self.state.index().ok(), "Iterator cursor released");
            self.iter = None;
            self.current = None;
            self.state = CursorState::Released;
        }
    }

    fn state(&self) -> CursorState {
        self.state
    }
}

use crate::cursor::{Cursor, CursorState};
use crate::error::CursorError;
use crate::scoped::Scoped;
use crate::sequence::Sequence;
use tracing::trace;

/// Sequence backed by a contiguous array of elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArraySequence<T> {
    items: Box<[T]>,
}

impl<T> ArraySequence<T> {
    pub fn new(items: impl Into<Box<[T]>>) -> Self {
        ArraySequence {
            items: items.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Direct indexed access, independent of any cursor
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }
}

impl<T> FromIterator<T> for ArraySequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ArraySequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Sequence for ArraySequence<T> {
    type Cursor<'seq>
        = ArrayCursor<'seq, T>
    where
        Self: 'seq;

    fn new_cursor(&self) -> ArrayCursor<'_, T> {
        ArrayCursor::new(&self.items)
    }
}

impl<'seq, T> IntoIterator for &'seq ArraySequence<T> {
    type Item = &'seq T;
    type IntoIter = Scoped<ArrayCursor<'seq, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.scoped()
    }
}

/// Cursor over an [`ArraySequence`]
///
/// Logical index and array index coincide.
#[derive(Debug, Clone)]
pub struct ArrayCursor<'seq, T> {
    data: &'seq [T],
    state: CursorState,
}

impl<'seq, T> ArrayCursor<'seq, T> {
    pub fn new(data: &'seq [T]) -> Self {
        trace!(len = data.len(), "New array cursor");
        ArrayCursor {
            data,
            state: CursorState::BeforeStart,
        }
    }
}

impl<'seq, T> Cursor for ArrayCursor<'seq, T> {
    type Element = &'seq T;

    fn advance(&mut self) -> Result<bool, CursorError> {
        self.state = self.state.next(self.data.len())?;
        if self.state == CursorState::Exhausted {
            trace!(len = self.data.len(), "Array cursor exhausted");
        }
        Ok(self.state.has_current())
    }

    fn current(&self) -> Result<&'seq T, CursorError> {
        let index = self.state.index()?;
        // State never points past the end of `data`
        self.data.get(index).ok_or(CursorError::Exhausted)
    }

    fn release(&mut self) {
        if self.state != CursorState::Released {
            trace!(index = ?self.state.index().ok(), "Array cursor released");
            self.state = CursorState::Released;
        }
    }

    fn state(&self) -> CursorState {
        self.state
    }
}

use crate::cursor::{Cursor, CursorState};
use crate::error::CursorError;
use crate::scoped::Scoped;
use crate::sequence::Sequence;
use tracing::trace;

/// What an [`OffsetSequence`] does when traversal reaches the physical end
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Boundary {
    /// Stop at the end of the backing array, so only `offset..len` is visited
    #[default]
    Stop,
    /// Continue from index 0 up to `offset - 1`, visiting every slot once
    Wrap,
}

/// View over an array whose logical element 0 sits at a chosen physical index
///
/// This is the circular buffer read head: the backing array stays put and
/// the offset moves. With `[1, 2, 3, 4, 5]` and offset 2 the view yields
/// `3, 4, 5` under [`Boundary::Stop`] and `3, 4, 5, 1, 2` under
/// [`Boundary::Wrap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetSequence<T> {
    items: Box<[T]>,
    offset: usize,
    boundary: Boundary,
}

impl<T> OffsetSequence<T> {
    /// View starting at `offset` that stops at the physical end
    pub fn new(items: impl Into<Box<[T]>>, offset: usize) -> Result<Self, CursorError> {
        Self::with_boundary(items, offset, Boundary::Stop)
    }

    /// View starting at `offset` that wraps around through index 0
    pub fn circular(items: impl Into<Box<[T]>>, offset: usize) -> Result<Self, CursorError> {
        Self::with_boundary(items, offset, Boundary::Wrap)
    }

    /// Build a view, rejecting offsets that do not name a slot of `items`
    ///
    /// An empty backing array only accepts offset 0.
    pub fn with_boundary(
        items: impl Into<Box<[T]>>,
        offset: usize,
        boundary: Boundary,
    ) -> Result<Self, CursorError> {
        let items = items.into();
        if offset != 0 && offset >= items.len() {
            return Err(CursorError::OffsetOutOfRange {
                offset,
                len: items.len(),
            });
        }
        Ok(OffsetSequence {
            items,
            offset,
            boundary,
        })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Number of elements a full traversal visits
    pub fn len(&self) -> usize {
        match self.boundary {
            Boundary::Stop => self.items.len() - self.offset,
            Boundary::Wrap => self.items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at a logical index, counted from the offset
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        self.items.get(self.physical_index(index))
    }

    fn physical_index(&self, index: usize) -> usize {
        match self.boundary {
            Boundary::Stop => self.offset + index,
            Boundary::Wrap => (self.offset + index) % self.items.len(),
        }
    }
}

impl<T> Sequence for OffsetSequence<T> {
    type Cursor<'seq>
        = OffsetCursor<'seq, T>
    where
        Self: 'seq;

    fn new_cursor(&self) -> OffsetCursor<'_, T> {
        OffsetCursor::new(self)
    }
}

impl<'seq, T> IntoIterator for &'seq OffsetSequence<T> {
    type Item = &'seq T;
    type IntoIter = Scoped<OffsetCursor<'seq, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.scoped()
    }
}

/// Cursor over an [`OffsetSequence`]
///
/// Tracks the logical index only; the view maps it to a physical slot.
#[derive(Debug)]
pub struct OffsetCursor<'seq, T> {
    view: &'seq OffsetSequence<T>,
    state: CursorState,
}

impl<'seq, T> OffsetCursor<'seq, T> {
    pub fn new(view: &'seq OffsetSequence<T>) -> Self {
        trace!(
            offset = view.offset,
            boundary = ?view.boundary,
            len = view.len(),
            "New offset cursor"
        );
        OffsetCursor {
            view,
            state: CursorState::BeforeStart,
        }
    }
}

impl<'seq, T> Cursor for OffsetCursor<'seq, T> {
    type Element = &'seq T;

    fn advance(&mut self) -> Result<bool, CursorError> {
        self.state = self.state.next(self.view.len())?;
        if self.state == CursorState::Exhausted {
            trace!(offset = self.view.offset, "Offset cursor exhausted");
        }
        Ok(self.state.has_current())
    }

    fn current(&self) -> Result<&'seq T, CursorError> {
        let index = self.state.index()?;
        self.view.get(index).ok_or(CursorError::Exhausted)
    }

    fn release(&mut self) {
        if self.state != CursorState::Released {
            trace!(index = ?self.state.index().ok(), "Offset cursor released");
            self.state = CursorState::Released;
        }
    }

    fn state(&self) -> CursorState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Copy>(view: &OffsetSequence<T>) -> Vec<T> {
        view.into_iter().copied().collect()
    }

    #[test]
    fn test_offset_zero_is_plain_walk() {
        let view = OffsetSequence::new(vec![1, 2, 3, 4, 5], 0).unwrap();
        assert_eq!(collect(&view), vec![1, 2, 3, 4, 5]);

        let view = OffsetSequence::circular(vec![1, 2, 3, 4, 5], 0).unwrap();
        assert_eq!(collect(&view), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_stop_at_physical_end() {
        let view = OffsetSequence::new(vec![1, 2, 3, 4, 5], 2).unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(collect(&view), vec![3, 4, 5]);
    }

    #[test]
    fn test_wrap_through_zero() {
        let view = OffsetSequence::circular(vec![1, 2, 3, 4, 5], 2).unwrap();
        assert_eq!(view.len(), 5);
        assert_eq!(collect(&view), vec![3, 4, 5, 1, 2]);
    }

    #[test]
    fn test_wrap_visits_each_slot_once_then_exhausts() {
        let view = OffsetSequence::circular(vec!['a', 'b', 'c'], 1).unwrap();
        let mut cursor = view.new_cursor();
        let mut seen = Vec::new();
        while cursor.advance().unwrap() {
            seen.push(*cursor.current().unwrap());
        }
        assert_eq!(seen, vec!['b', 'c', 'a']);
        assert!(!cursor.advance().unwrap());
        assert_eq!(cursor.current(), Err(CursorError::Exhausted));
    }

    #[test]
    fn test_logical_index_is_not_physical() {
        let view = OffsetSequence::new(vec![10, 20, 30, 40], 3).unwrap();
        let mut cursor = view.new_cursor();
        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.index(), Some(0));
        assert_eq!(cursor.current().unwrap(), &40);
        assert!(!cursor.advance().unwrap());
    }

    #[test]
    fn test_offset_out_of_range() {
        let result = OffsetSequence::new(vec![1, 2, 3], 3);
        assert_eq!(
            result.unwrap_err(),
            CursorError::OffsetOutOfRange { offset: 3, len: 3 }
        );

        let result = OffsetSequence::circular(vec![1, 2, 3], 42);
        assert!(matches!(
            result,
            Err(CursorError::OffsetOutOfRange { offset: 42, len: 3 })
        ));
    }

    #[test]
    fn test_empty_backing_store() {
        let view: OffsetSequence<u8> = OffsetSequence::circular(Vec::new(), 0).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.get(0), None);

        let mut cursor = view.new_cursor();
        assert!(!cursor.advance().unwrap());

        let result: Result<OffsetSequence<u8>, _> = OffsetSequence::new(Vec::new(), 1);
        assert!(result.is_err());
    }

    #[test]
    fn test_indexed_access() {
        let view = OffsetSequence::circular(vec![1, 2, 3, 4, 5], 3).unwrap();
        assert_eq!(view.get(0), Some(&4));
        assert_eq!(view.get(1), Some(&5));
        assert_eq!(view.get(2), Some(&1));
        assert_eq!(view.get(4), Some(&3));
        assert_eq!(view.get(5), None);

        let view = OffsetSequence::new(vec![1, 2, 3, 4, 5], 3).unwrap();
        assert_eq!(view.get(1), Some(&5));
        assert_eq!(view.get(2), None);
    }

    #[test]
    fn test_accessors() {
        let view = OffsetSequence::with_boundary(vec![1, 2], 1, Boundary::Wrap).unwrap();
        assert_eq!(view.offset(), 1);
        assert_eq!(view.boundary(), Boundary::Wrap);
        assert_eq!(Boundary::default(), Boundary::Stop);
    }

    #[test]
    fn test_release_is_idempotent() {
        let view = OffsetSequence::new(vec![1, 2, 3], 1).unwrap();
        let mut cursor = view.new_cursor();
        assert!(cursor.advance().unwrap());
        cursor.release();
        cursor.release();
        assert!(cursor.is_released());
        assert_eq!(cursor.advance(), Err(CursorError::Released));
    }
}

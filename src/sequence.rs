use crate::cursor::Cursor;
use crate::scoped::Scoped;

/// An ordered collection that hands out independent cursors
///
/// A sequence keeps no traversal state of its own: every call to
/// [`new_cursor`](Sequence::new_cursor) returns a fresh cursor positioned before the
/// first element, and any number of them may be live at once. Cursors borrow
/// the sequence immutably, so its contents cannot change while one exists.
pub trait Sequence {
    /// Cursor type produced by this sequence
    type Cursor<'seq>: Cursor
    where
        Self: 'seq;

    /// Create a new cursor positioned before the first element
    fn new_cursor(&self) -> Self::Cursor<'_>;

    /// Create a new cursor wrapped in a guard that releases it on drop
    fn scoped(&self) -> Scoped<Self::Cursor<'_>> {
        Scoped::new(self.new_cursor())
    }
}

use crate::cursor::Cursor;
use crate::error::CursorError;
use crate::sequence::Sequence;
use std::iter::FusedIterator;
use std::ops::{ControlFlow, Deref, DerefMut};
use tracing::{debug, warn};

/// Guard that releases its cursor when dropped
///
/// Dropping happens on every way out of a scope: falling off the end, `break`,
/// `return`, `?` and unwinding panics. The guard also implements [`Iterator`],
/// which is what lets a Rust `for` loop drive the cursor protocol.
///
/// Cursor methods are reachable through `Deref`. Note that `Iterator` has its
/// own `position` method, which is why the cursor exposes its location as
/// [`Cursor::index`].
#[derive(Debug)]
pub struct Scoped<C: Cursor> {
    cursor: C,
}

impl<C: Cursor> Scoped<C> {
    pub fn new(cursor: C) -> Self {
        Scoped { cursor }
    }
}

impl<C: Cursor> Deref for Scoped<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.cursor
    }
}

impl<C: Cursor> DerefMut for Scoped<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.cursor
    }
}

impl<C: Cursor> Drop for Scoped<C> {
    fn drop(&mut self) {
        if !self.cursor.is_exhausted() && !self.cursor.is_released() {
            debug!(
                index = ?self.cursor.index(),
                "Releasing cursor before exhaustion"
            );
        }
        self.cursor.release();
    }
}

impl<C: Cursor> Iterator for Scoped<C> {
    type Item = C::Element;

    fn next(&mut self) -> Option<Self::Item> {
        match self.cursor.advance() {
            Ok(true) => match self.cursor.current() {
                Ok(element) => Some(element),
                Err(error) => {
                    warn!(%error, "Cursor advanced but has no current element");
                    None
                }
            },
            Ok(false) => None,
            Err(error) => {
                warn!(%error, "Cursor refused to advance, ending iteration");
                None
            }
        }
    }
}

// Cursors stay exhausted once exhausted and stay released once released
impl<C: Cursor> FusedIterator for Scoped<C> {}

/// Walk a sequence with a fresh cursor, feeding every element to `visit`
///
/// `visit` returns `ControlFlow::Break(value)` to stop early, in which case
/// `Ok(Some(value))` is returned. `Ok(None)` means the whole sequence was
/// visited. Errors from the cursor are converted into `E` through `From`;
/// errors from `visit` are passed through untouched. The cursor is released
/// before this function returns on every path, including panics in `visit`.
pub fn traverse<'seq, S, B, E, F>(sequence: &'seq S, mut visit: F) -> Result<Option<B>, E>
where
    S: Sequence + 'seq,
    E: From<CursorError>,
    F: FnMut(<S::Cursor<'seq> as Cursor>::Element) -> Result<ControlFlow<B>, E>,
{
    let mut cursor = sequence.scoped();
    while cursor.advance()? {
        let element = cursor.current()?;
        if let ControlFlow::Break(value) = visit(element)? {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

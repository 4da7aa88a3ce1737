//! # SeqCursor - Sequences and Cursors
//!
//! A small traversal library built on two separate roles:
//!
//! - A [`Sequence`] hands out cursors. It keeps no traversal state, so any
//!   number of cursors can walk it at the same time without interfering.
//! - A [`Cursor`] is one forward-only walk: `advance()`, read `current()`,
//!   and `release()` when done.
//!
//! Release is tied to scope through [`Scoped`], which calls `release()` when
//! dropped. That covers normal exhaustion, `break`, early `return`, `?` and
//! unwinding. `Scoped` is also an [`Iterator`], so a plain `for` loop over a
//! sequence follows the full acquire / advance / read / release protocol:
//!
//! ```rust
//! use seqcursor::{ArraySequence, Cursor, Sequence};
//!
//! let numbers = ArraySequence::new(vec![1, 2, 3]);
//!
//! // Sugar
//! let mut total = 0;
//! for value in &numbers {
//!     total += value;
//! }
//! assert_eq!(total, 6);
//!
//! // What the sugar does
//! let mut cursor = numbers.scoped();
//! while cursor.advance()? {
//!     let _value = cursor.current()?;
//! }
//! # Ok::<(), seqcursor::CursorError>(())
//! ```
//!
//! Errors never panic: reading a cursor with no current element, or using a
//! released one, returns [`CursorError`].

pub mod cursor;
pub mod error;
pub mod scoped;
pub mod sequence;
pub mod sequences;

pub use cursor::{Cursor, CursorState};
pub use error::{CursorError, ErrorKind};
pub use scoped::{Scoped, traverse};
pub use sequence::Sequence;
pub use sequences::{
    ArrayCursor, ArraySequence, Boundary, GeneratedSequence, IterCursor, OffsetCursor,
    OffsetSequence,
};

pub mod array;
pub mod generated;
pub mod offset;

pub use array::{ArrayCursor, ArraySequence};
pub use generated::{GeneratedSequence, IterCursor};
pub use offset::{Boundary, OffsetCursor, OffsetSequence};

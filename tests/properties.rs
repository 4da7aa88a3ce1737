use proptest::prelude::*;
use seqcursor::{ArraySequence, Cursor, CursorError, OffsetSequence, Sequence};

/// Drive a cursor to the end, collecting what it yields
fn drain<C: Cursor>(cursor: &mut C) -> Vec<C::Element> {
    let mut seen = Vec::new();
    while cursor.advance().expect("cursor is live") {
        seen.push(cursor.current().expect("advance reported a current element"));
    }
    seen
}

proptest! {
    #[test]
    fn independent_cursors_yield_the_same_stream(
        items in proptest::collection::vec(any::<i32>(), 1..64),
        lead in 0usize..64,
    ) {
        let sequence = ArraySequence::new(items.clone());
        let mut first = sequence.new_cursor();
        let mut second = sequence.new_cursor();

        // Move the first cursor ahead; the second must not notice
        for _ in 0..lead {
            first.advance().unwrap();
        }
        prop_assert_eq!(second.index(), None);

        let from_second: Vec<i32> = drain(&mut second).into_iter().copied().collect();
        prop_assert_eq!(&from_second, &items);

        let mut fresh = sequence.new_cursor();
        let from_fresh: Vec<i32> = drain(&mut fresh).into_iter().copied().collect();
        prop_assert_eq!(from_fresh, items);
    }

    #[test]
    fn exhaustion_is_sticky(
        items in proptest::collection::vec(any::<u8>(), 0..32),
        extra in 1usize..16,
    ) {
        let sequence = ArraySequence::new(items);
        let mut cursor = sequence.new_cursor();
        drain(&mut cursor);

        for _ in 0..extra {
            prop_assert_eq!(cursor.advance(), Ok(false));
            prop_assert_eq!(cursor.current(), Err(CursorError::Exhausted));
        }
    }

    #[test]
    fn release_is_idempotent(
        items in proptest::collection::vec(any::<u8>(), 0..32),
        steps in 0usize..40,
        releases in 1usize..8,
    ) {
        let sequence = ArraySequence::new(items);
        let mut cursor = sequence.new_cursor();
        for _ in 0..steps {
            cursor.advance().unwrap();
        }

        for _ in 0..releases {
            cursor.release();
            prop_assert!(cursor.is_released());
            prop_assert_eq!(cursor.advance(), Err(CursorError::Released));
            prop_assert_eq!(cursor.current(), Err(CursorError::Released));
        }
    }

    #[test]
    fn offset_views_are_rotations(
        items in proptest::collection::vec(any::<i16>(), 1..32),
        offset_seed in any::<usize>(),
    ) {
        let offset = offset_seed % items.len();

        let stop = OffsetSequence::new(items.clone(), offset).unwrap();
        let stopped: Vec<i16> = stop.scoped().copied().collect();
        prop_assert_eq!(&stopped[..], &items[offset..]);

        let wrap = OffsetSequence::circular(items.clone(), offset).unwrap();
        let wrapped: Vec<i16> = wrap.scoped().copied().collect();
        let mut rotated = items.clone();
        rotated.rotate_left(offset);
        prop_assert_eq!(wrapped, rotated);
    }

    #[test]
    fn offsets_past_the_end_are_rejected(
        len in 0usize..16,
        beyond in 0usize..16,
    ) {
        let offset = len + beyond;
        prop_assume!(offset != 0);
        let result = OffsetSequence::new(vec![0u8; len], offset);
        prop_assert_eq!(result.unwrap_err(), CursorError::OffsetOutOfRange { offset, len });
    }
}

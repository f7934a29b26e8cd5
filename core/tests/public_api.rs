//! Integration tests for the public API.
//!
//! These tests go through the exported surface only: construction from every
//! kind of backing, indexing, sub-views, casts and both iteration paths.

use memview_core::{Enumerator, Origin, View, ViewError, ViewExt, ViewMutExt};
use once_cell::sync::Lazy;
use pretty_assertions::assert_eq;

/// 100000 pseudo-random ints shared by the larger tests.
static INTS: Lazy<Vec<i32>> = Lazy::new(|| {
    let mut state = 0x2545_f491_u32;
    (0..100_000)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            i32::from_ne_bytes(state.to_ne_bytes())
        })
        .collect()
});

#[test]
fn test_array_lengths() {
    let ints = &*INTS;
    assert_eq!(ints.view().len(), ints.len());
    assert_eq!(ints.view_from(10).unwrap().len(), ints.len() - 10);
    assert_eq!(ints.view_range(10, 20).unwrap().len(), 10);
    assert_eq!(ints.view_from(ints.len()).unwrap().len(), 0);
}

#[test]
fn test_get_matches_source() {
    let ints = &*INTS;
    let view = ints.view();
    for (j, expected) in ints.iter().enumerate() {
        assert_eq!(view.get(j), Ok(*expected));
    }
}

#[test]
fn test_all_iteration_paths_agree() {
    let ints = &*INTS;
    let view = ints.view();

    let direct: Vec<i32> = ints.iter().copied().collect();
    let cursor: Vec<i32> = view.iter().collect();
    let boxed: Vec<i32> = view.boxed_iter().collect();

    let mut enumerated = Vec::with_capacity(ints.len());
    let mut enumerator = view.boxed_enumerator();
    while enumerator.advance() {
        enumerated.push(enumerator.current().unwrap());
    }

    assert_eq!(cursor, direct);
    assert_eq!(boxed, direct);
    assert_eq!(enumerated, direct);
}

#[test]
fn test_cast_to_bytes() {
    let ints = &*INTS;
    let bytes = ints.view().cast::<u8>();
    assert_eq!(bytes.len(), 400_000);
    for (i, value) in ints.iter().enumerate() {
        assert_eq!(bytes.get(i * 4), Ok(value.to_ne_bytes()[0]));
    }
    assert!(bytes.cast::<i32>().identity_eq(&ints.view()));
}

#[test]
fn test_sub_from_ten() {
    let ints = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let sub = ints.view().sub(3, 7).unwrap();
    assert_eq!(sub.to_vec(), [3, 4, 5, 6]);
    assert_eq!(sub.origin(), Origin::Offset(3 * 4));
}

#[test]
fn test_string_tail() {
    let view = "Hello, world".view_from(7).unwrap();
    assert_eq!(view.to_str(), Ok("world"));
}

#[test]
fn test_negative_and_past_end_indices() {
    let values = [1, 2, 3, 4];
    let view = values.view();
    for bad in [-1i64, 4, i64::MAX, i64::MIN] {
        assert!(view.get(bad).unwrap_err().is_out_of_range());
    }
    assert_eq!(
        view.get(-1i32),
        Err(ViewError::IndexOutOfRange { index: -1, len: 4 })
    );
    assert!(view.get(-1isize as usize).is_err());
}

#[test]
fn test_identity_of_ranges() {
    let values = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let a = values.view_range(0, 5).unwrap();
    let b = values.view_range(0, 5).unwrap();
    let c = values.view_range(1, 6).unwrap();
    assert!(a.identity_eq(&b));
    assert!(!a.identity_eq(&c));
}

#[test]
fn test_raw_memory_round_trip() {
    let mut buffer = vec![0u8; 64];
    let len = buffer.len();
    // SAFETY: `buffer` is only reached through the view in this block.
    let view = unsafe { View::from_raw_parts_mut(buffer.as_mut_ptr(), len) }.unwrap();
    view.write_at(8, 0x0102_0304_0506_0708_u64).unwrap();
    view.write_at(60, -1i32).unwrap();
    assert!(view.write_at(61, 0i32).is_err());
    assert_eq!(view.read_at::<u64>(8), Ok(0x0102_0304_0506_0708));
    assert_eq!(buffer[60..], [0xff; 4]);
}

#[test]
fn test_shared_across_threads() {
    let view = INTS.view();
    let halves = [view.sub(0, 50_000).unwrap(), view.sub_from(50_000).unwrap()];
    let sums: Vec<i64> = std::thread::scope(|scope| {
        let handles: Vec<_> = halves
            .iter()
            .map(|half| scope.spawn(move || half.iter().map(i64::from).sum::<i64>()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    let expected: i64 = INTS.iter().copied().map(i64::from).sum();
    assert_eq!(sums[0] + sums[1], expected);
}

#[test]
fn test_copy_between_backings() {
    let text = "copy me";
    let mut dest = [0u8; 10];
    text.view().copy_into(dest.view_mut()).unwrap();
    assert_eq!(&dest[..7], text.as_bytes());
    assert_eq!(
        "too long for it".view().copy_into(dest.view_mut()),
        Err(ViewError::InvalidArgument("destination is shorter than source"))
    );
}

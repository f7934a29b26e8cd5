//! End-to-end tests through the `memview` facade.

use bumpalo::Bump;
use expect_test::{Expect, expect};
use memview::{BackingKind, View, ViewError, ViewExt, ViewMutExt};
use once_cell::sync::Lazy;
use pretty_assertions::assert_eq;
use zerocopy::{FromBytes, Immutable, IntoBytes};

#[derive(Debug, Clone, Copy, PartialEq, FromBytes, IntoBytes, Immutable)]
#[repr(C)]
struct Sample {
    timestamp: u64,
    channel: u32,
    value: f32,
}

/// A recording of 1000 samples over four channels, shared by the record tests.
static RECORDING: Lazy<Vec<Sample>> = Lazy::new(|| {
    (0..1000u32)
        .map(|i| Sample {
            timestamp: u64::from(i) * 10,
            channel: i % 4,
            value: i as f32 * 0.25,
        })
        .collect()
});

fn check_error(result: Result<impl core::fmt::Debug, ViewError>, expected: Expect) {
    match result {
        Err(e) => expected.assert_eq(&e.to_string()),
        Ok(v) => panic!("Expected an error, got {v:?}"),
    }
}

#[test]
fn test_error_messages() {
    let values = [1, 2, 3, 4];
    let view = values.view();

    check_error(view.get(-1), expect!["index -1 out of range for length 4"]);
    check_error(view.get(4u32), expect!["index 4 out of range for length 4"]);
    check_error(view.sub(2, 9), expect!["index 9 out of range for length 4"]);
    check_error(view.sub(3, 1), expect!["index 3 out of range for length 4"]);
    check_error(
        view.sub_from(1).unwrap().as_bytes().read::<u128>(),
        expect!["invalid argument: view is shorter than the value"],
    );
    // SAFETY: rejected before the pointer is used.
    check_error(
        unsafe { View::<u8>::from_raw_parts(std::ptr::null(), 3) },
        expect!["invalid argument: null pointer with non-zero length"],
    );
}

#[test]
fn test_debug_output() {
    let values = [1.5f32, -2.0];
    expect!["[1.5, -2.0]"].assert_eq(&format!("{:?}", values.view()));
    expect!["[104, 105]"].assert_eq(&format!("{:?}", "hi".view()));
}

#[test]
fn test_records_over_raw_bytes() {
    let samples = RECORDING.view_range(0, 2).unwrap();

    let bytes = samples.as_bytes();
    assert_eq!(bytes.len(), 2 * size_of::<Sample>());
    assert_eq!(
        bytes.read_at::<Sample>(size_of::<Sample>()),
        Ok(RECORDING[1])
    );

    // Reading one byte in crosses a record boundary but stays in bounds.
    let shifted = bytes.sub_from(1).unwrap().cast::<Sample>();
    assert_eq!(shifted.len(), 1);

    let back = bytes.cast::<Sample>();
    assert!(back.identity_eq(&samples));
    assert_eq!(back.get(0), Ok(RECORDING[0]));
}

#[test]
fn test_scan_channel_through_bytes() {
    let bytes = RECORDING.view().as_bytes();
    let stride = size_of::<Sample>();
    let channel_offset = 8;

    let mut total = 0.0f32;
    for i in 0..RECORDING.len() {
        let channel = bytes.read_at::<u32>(i * stride + channel_offset).unwrap();
        if channel == 3 {
            total += bytes.read_at::<f32>(i * stride + 12).unwrap();
        }
    }
    let expected: f32 = RECORDING
        .iter()
        .filter(|s| s.channel == 3)
        .map(|s| s.value)
        .sum();
    assert_eq!(total, expected);
    assert!(bytes.read_at::<u32>(RECORDING.len() * stride).is_err());
}

#[test]
fn test_patch_records_in_place() {
    let mut samples = [Sample {
        timestamp: 0,
        channel: 0,
        value: 0.0,
    }; 3];

    let view = samples.view_mut();
    for (i, sample) in view.iter().enumerate() {
        view.set(
            i,
            Sample {
                timestamp: i as u64,
                ..sample
            },
        )
        .unwrap();
    }
    let bytes = view.cast::<u8>();
    bytes.write_at(size_of::<Sample>() + 8, 42u32).unwrap();

    assert_eq!(samples[1].timestamp, 1);
    assert_eq!(samples[1].channel, 42);
    assert_eq!(samples[2].timestamp, 2);
}

#[test]
fn test_arena_copy_outlives_source() {
    let arena = Bump::new();
    let copy = {
        let line = String::from("name=memview");
        let value = line.view().split(b"=").nth(1).unwrap();
        value.copy_to_arena(&arena)
    };
    assert_eq!(copy.to_vec(), b"memview");
    assert_eq!(copy.backing_kind(), Some(BackingKind::Array));
}

#[test]
fn test_tokenize_header_line() {
    let line = "Content-Type: text/plain; charset=utf-8";
    let view = line.view();

    let colon = view.index_of(":").unwrap();
    let name = view.sub(0, colon).unwrap();
    let value = view.sub_from(colon + 2).unwrap();
    assert_eq!(name.to_str(), Ok("Content-Type"));

    let params: Vec<&str> = value
        .split(b";")
        .map(|p| p.to_str().unwrap().trim())
        .collect();
    assert_eq!(params, ["text/plain", "charset=utf-8"]);
    assert!(value.ends_with("utf-8"));
}

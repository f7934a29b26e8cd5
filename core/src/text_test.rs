use super::*;
use crate::ViewExt;
use alloc::vec::Vec;
use pretty_assertions::assert_eq;

fn pieces<A: Access>(split: Split<'_, '_, A>) -> Vec<Vec<u8>> {
    split.map(|piece| piece.to_vec()).collect()
}

// ============================================================================
// Prefix, suffix, containment
// ============================================================================

#[test]
fn test_starts_with() {
    let view = "Hello, world".view();
    assert!(view.starts_with("Hello"));
    assert!(view.starts_with(""));
    assert!(view.starts_with("Hello, world"));
    assert!(!view.starts_with("Hello, world!"));
    assert!(!view.starts_with("world"));
}

#[test]
fn test_ends_with() {
    let view = "Hello, world".view();
    assert!(view.ends_with("world"));
    assert!(view.ends_with(b"ld"));
    assert!(view.ends_with(""));
    assert!(!view.ends_with("Hello"));
    assert!(!"ld".view().ends_with("world"));
}

#[test]
fn test_contains() {
    let view = "the quick brown fox".view();
    assert!(view.contains("quick"));
    assert!(view.contains("fox"));
    assert!(!view.contains("slow"));
    assert!(View::<u8>::empty().contains(""));
    assert!(!View::<u8>::empty().contains("a"));
}

#[test]
fn test_needle_from_other_view() {
    let hay = "abcabc".view();
    let needle = "xbcx".view().sub(1, 3).unwrap();
    assert_eq!(hay.index_of(needle), Some(1));
    assert_eq!(hay.last_index_of(needle), Some(4));
}

#[test]
fn test_sub_view_searches_only_its_range() {
    let view = "abcabc".view().sub(1, 5).unwrap();
    assert!(!view.starts_with("a"));
    assert_eq!(view.index_of("a"), Some(2));
    assert_eq!(view.index_of_byte(b'c'), Some(1));
}

// ============================================================================
// Searching
// ============================================================================

#[test]
fn test_index_of() {
    let view = "one two one two".view();
    assert_eq!(view.index_of("two"), Some(4));
    assert_eq!(view.last_index_of("two"), Some(12));
    assert_eq!(view.index_of("three"), None);
    assert_eq!(view.last_index_of("three"), None);
}

#[test]
fn test_index_of_empty_needle() {
    let view = "abc".view();
    assert_eq!(view.index_of(""), Some(0));
    assert_eq!(view.last_index_of(""), Some(3));
}

#[test]
fn test_needle_longer_than_view() {
    let view = "ab".view();
    assert_eq!(view.index_of("abc"), None);
    assert_eq!(view.last_index_of("abc"), None);
}

#[test]
fn test_index_of_byte() {
    let view = b"a,b,c".view();
    assert_eq!(view.index_of_byte(b','), Some(1));
    assert_eq!(view.last_index_of_byte(b','), Some(3));
    assert_eq!(view.index_of_byte(b'x'), None);
    assert_eq!(view.last_index_of_byte(b'x'), None);
}

#[test]
fn test_index_of_any() {
    let view = "path/to\\file".view();
    assert_eq!(view.index_of_any(b"/\\"), Some(4));
    assert_eq!(view.last_index_of_any(b"/\\"), Some(7));
    assert_eq!(view.index_of_any(b""), None);
    assert_eq!(view.last_index_of_any(b"?"), None);
}

// ============================================================================
// Splitting
// ============================================================================

#[test]
fn test_split_simple() {
    let view = "a,bb,ccc".view();
    assert_eq!(
        pieces(view.split(b",")),
        [b"a".to_vec(), b"bb".to_vec(), b"ccc".to_vec()]
    );
}

#[test]
fn test_split_adjacent_and_trailing_separators() {
    let view = ",a,,b,".view();
    assert_eq!(
        pieces(view.split(b",")),
        [
            b"".to_vec(),
            b"a".to_vec(),
            b"".to_vec(),
            b"b".to_vec(),
            b"".to_vec()
        ]
    );
}

#[test]
fn test_split_several_separators() {
    let view = "k=v;x=y".view();
    assert_eq!(
        pieces(view.split(b"=;")),
        [b"k".to_vec(), b"v".to_vec(), b"x".to_vec(), b"y".to_vec()]
    );
}

#[test]
fn test_split_empty_view() {
    let mut split = View::<u8>::empty().split(b",");
    assert_eq!(split.next().map(|p| p.len()), Some(0));
    assert!(split.next().is_none());
    assert!(split.next().is_none());
}

#[test]
fn test_split_pieces_share_backing() {
    let text = "left|right";
    let view = text.view();
    let right = view.split(b"|").nth(1).unwrap();
    assert!(right.identity_eq(&view.sub_from(5).unwrap()));
}

// ============================================================================
// UTF-8
// ============================================================================

#[test]
fn test_to_str() {
    let view = "Hello, world".view().sub(7, 12).unwrap();
    assert_eq!(view.to_str(), Ok("world"));
    assert_eq!(View::<u8>::empty().to_str(), Ok(""));
}

#[test]
fn test_to_str_rejects_split_character() {
    // "é" is two bytes; cut between them.
    let view = "é!".view().sub_from(1).unwrap();
    assert!(view.to_str().is_err());
}

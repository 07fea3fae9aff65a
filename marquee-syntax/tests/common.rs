#![allow(dead_code)]
//! Shared helpers for `marquee-syntax` integration tests.

use marquee_syntax::*;

pub fn compile_one(input: &str) -> Fragment {
    let mut fragments = compile(input);
    assert_eq!(
        fragments.len(),
        1,
        "expected one fragment for {input:?}, got: {fragments:?}"
    );
    fragments.remove(0)
}

pub fn kinds(fragments: &[Fragment]) -> Vec<FragmentKind> {
    fragments.iter().map(|f| f.value.kind()).collect()
}

pub fn find_kind<'a>(fragments: &'a [Fragment], kind: FragmentKind) -> &'a Fragment {
    fragments
        .iter()
        .find(|f| f.value.kind() == kind)
        .unwrap_or_else(|| panic!("no {kind:?} fragment in: {fragments:?}"))
}

pub fn genre_id(fragment: &Fragment) -> u32 {
    match fragment.value {
        FragmentValue::Genre { id } => id,
        ref other => panic!("expected Genre, got: {other:?}"),
    }
}

pub fn provider_id(fragment: &Fragment) -> u32 {
    match fragment.value {
        FragmentValue::Provider { id, .. } => id,
        ref other => panic!("expected Provider, got: {other:?}"),
    }
}

pub fn year_range_is(fragment: &Fragment, start: &str, end: &str) {
    match &fragment.value {
        FragmentValue::YearRange { start: s, end: e } => {
            assert_eq!(s, start);
            assert_eq!(e, end);
        }
        other => panic!("expected YearRange, got: {other:?}"),
    }
}

/// Replays excision over the original input: every fragment's source span
/// must still be present in the leftover text, proving that no two
/// fragments claimed the same characters.
pub fn assert_disjoint_spans(input: &str, fragments: &[Fragment]) {
    let mut remaining = input.to_string();
    for fragment in fragments {
        let at = remaining.find(&fragment.source).unwrap_or_else(|| {
            panic!(
                "span {:?} overlaps an earlier fragment in {input:?}",
                fragment.source
            )
        });
        remaining.replace_range(at..at + fragment.source.len(), "");
    }
}

/// The `(kind, value, label, source)` identity of a fragment; ids are
/// per-pass and excluded on purpose.
pub fn identity(fragment: &Fragment) -> (FragmentKind, FragmentValue, String, String) {
    (
        fragment.value.kind(),
        fragment.value.clone(),
        fragment.label.clone(),
        fragment.source.clone(),
    )
}

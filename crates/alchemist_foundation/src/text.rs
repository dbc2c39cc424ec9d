//! ASCII case-insensitive text helpers.
//!
//! Item, potion, and monster names resolve case-insensitively
//! ("Griffin" and "griffin" are the same entity), so lookups, sorts,
//! and phrase matching all route through these functions. All of them
//! operate on borrowed slices; none mutate or allocate.

use std::cmp::Ordering;

/// Returns true iff, ignoring trailing whitespace, the last character
/// of `s` is `?`.
///
/// This is the query/imperative split: a line ending in `?` is always
/// routed to the query engine.
#[must_use]
pub fn ends_with_question_mark(s: &str) -> bool {
    s.trim_end().ends_with('?')
}

/// ASCII case-insensitive equality.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// ASCII case-insensitive ordering, for sorted listings.
#[must_use]
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(|b| b.to_ascii_lowercase());
    let b = b.bytes().map(|b| b.to_ascii_lowercase());
    a.cmp(b)
}

/// Strips `prefix` from the start of `s`, ASCII case-insensitively.
///
/// Returns the remainder after the prefix, or `None` if `s` does not
/// start with it.
#[must_use]
pub fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

/// Strips `suffix` from the end of `s`, ASCII case-insensitively.
#[must_use]
pub fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    let tail = s.get(split..)?;
    if tail.eq_ignore_ascii_case(suffix) {
        Some(&s[..split])
    } else {
        None
    }
}

/// Finds the first ASCII case-insensitive occurrence of `needle` in
/// `haystack`, returning its byte offset.
#[must_use]
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .char_indices()
        .map(|(i, _)| i)
        .find(|&i| strip_prefix_ignore_case(&haystack[i..], needle).is_some())
}

/// Splits `s` around the first whitespace-delimited occurrence of
/// `word`, returning the text before and after it.
///
/// Unlike a raw substring split, `forktail` does not contain the word
/// `for`. Matching is case-sensitive.
#[must_use]
pub fn split_on_word<'a>(s: &'a str, word: &str) -> Option<(&'a str, &'a str)> {
    for (i, _) in s.match_indices(word) {
        let before_ok = i == 0 || s[..i].ends_with(char::is_whitespace);
        let rest = &s[i + word.len()..];
        let after_ok = rest.is_empty() || rest.starts_with(char::is_whitespace);
        if before_ok && after_ok {
            return Some((&s[..i], rest));
        }
    }
    None
}

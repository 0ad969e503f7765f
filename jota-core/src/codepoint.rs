//! Codepoint primitives for string-bounding logic
//!
//! All length and slicing decisions in jota are made over Unicode scalar
//! values, never over UTF-8 bytes or UTF-16 units. Indexing by storage unit
//! would split multi-unit characters (surrogate pairs in the host
//! environment's encoding).

/// Number of codepoints in a string
pub fn count(s: &str) -> usize {
    s.chars().count()
}

/// First `n` codepoints of a string, rejoined. `n` past the end returns the
/// whole string.
pub fn take(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Codepoint index of a byte offset within `s`. The offset must lie on a
/// char boundary (as returned by `str::rfind` or regex match positions).
pub fn index_of_byte(s: &str, byte_offset: usize) -> usize {
    s[..byte_offset].chars().count()
}

/// True when the codepoint needs two 16-bit storage units (outside the BMP)
pub fn is_wide(c: char) -> bool {
    c.len_utf16() == 2
}

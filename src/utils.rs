//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize what the user typed: trim and lowercase.
///
/// Whitespace inside the query is kept, so "add route" stays one pattern.
pub fn normalize_query(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Fold text for matching: lowercase, and optionally strip diacritics.
///
/// - "Café" → "café"
/// - "Café" → "cafe" (with `strip_diacritics`)
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks (category Mn = Mark, Nonspacing)
/// 3. Lowercase
///
/// Without the feature (e.g. lean WASM builds) only lowercasing happens.
#[cfg(feature = "unicode-normalization")]
pub fn fold(value: &str, strip_diacritics: bool) -> String {
    if strip_diacritics {
        value
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .collect::<String>()
            .to_lowercase()
    } else {
        value.to_lowercase()
    }
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn fold(value: &str, _strip_diacritics: bool) -> String {
    value.to_lowercase()
}

/// Check if a character is a combining mark (diacritic).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Minimum query length (in characters) before a search runs.
///
/// Numbers are allowed through at one character ("3" finds "Python 3"),
/// words need two.
pub fn min_query_len(query: &str) -> usize {
    if leading_number(query.trim()).is_some() {
        1
    } else {
        2
    }
}

/// Parse the longest numeric prefix of `s`, the way browsers parse floats.
///
/// "42abc" → 42, "2.5" → 2.5, ".5" → 0.5, "1e3x" → 1000, "abc" → None.
pub fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].replace("Infinity", "inf").parse().ok();
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Byte range of the first case-insensitive occurrence of `needle` in `haystack`.
///
/// Comparison lowercases both sides char by char, so the returned range always
/// lies on char boundaries of the original haystack.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    find_ignore_case_from(haystack, needle, 0)
}

/// Like [`find_ignore_case`], starting the scan at byte offset `from`.
pub fn find_ignore_case_from(haystack: &str, needle: &str, from: usize) -> Option<(usize, usize)> {
    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return None;
    }
    let rest = haystack.get(from..)?;
    rest.char_indices().find_map(|(start, _)| {
        match_len_at(&rest[start..], &needle).map(|len| (from + start, from + start + len))
    })
}

/// Byte length of `text`'s prefix that lowercases to `needle`, if any.
fn match_len_at(text: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, c) in text.char_indices() {
        for lower in c.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(offset + c.len_utf8());
        }
    }
    None
}

/// Number of chars in `s`. Lengths in the UI are counted in characters.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

//! Small shared helpers.

/// Return the plural suffix for a noun at a given count.
///
/// Nouns ending in `s` or `x` take `es` (1 alias, 2 aliases).
#[inline]
pub fn plural_suffix(count: usize, noun: &str) -> &'static str {
    if count == 1 {
        return "";
    }
    if noun.ends_with('s') || noun.ends_with('x') {
        "es"
    } else {
        "s"
    }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "slug")` -> `"0 slugs"`
/// - `plural_count(1, "slug")` -> `"1 slug"`
/// - `plural_count(2, "alias")` -> `"2 aliases"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_suffix(count, noun))
}

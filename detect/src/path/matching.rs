//! Case-insensitive name matching.

/// Check whether two names are equal ignoring letter case.
///
/// The names match when they are identical, when either one's uppercase form
/// equals the other as written, or when both uppercase forms are equal. The
/// one-sided comparisons let an already-uppercased name match its original.
/// Entry names that are not valid UTF-8 never reach this function; the
/// filesystem layer drops them from listings.
///
/// # Examples
///
/// ```
/// use detect::path::is_match;
///
/// assert!(is_match("FooFile.js", "foofile.js"));
/// assert!(is_match("FooFile.js", "FOOFILE.JS"));
/// assert!(is_match("straße", "STRASSE"));
/// assert!(!is_match("foo.js", "foo.ts"));
/// ```
#[must_use]
pub fn is_match(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    let upper_a = a.to_uppercase();
    if upper_a == b {
        return true;
    }
    let upper_b = b.to_uppercase();
    a == upper_b || upper_a == upper_b
}

//! Category field normalization
//!
//! Members enter ministry/department values as free text, so `"Ushering"`,
//! `" ushering "` and `"USHERING"` must all count toward the same category.
//! Normalization is applied only when matching; stored values keep their
//! original formatting for display.

/// Normalize a category name for matching: trim and case-fold.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Split a raw category field into normalized tokens.
///
/// Ministry fields may carry several comma-delimited values. Empty tokens are
/// dropped, so absent/empty input yields an empty set.
pub fn tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(name_key)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Whether a raw field value counts toward the given category name.
pub fn field_matches(raw: &str, category_name: &str) -> bool {
    let key = name_key(category_name);
    if key.is_empty() {
        return false;
    }
    tokens(raw).iter().any(|t| *t == key)
}

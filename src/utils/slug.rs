//! URL slugification for entry routes.
//!
//! Converts titles to URL-safe path segments when the provider did not
//! supply one.

use deunicode::deunicode;

/// Convert text to a lowercase ASCII slug.
///
/// Non-alphanumeric runs collapse into single dashes; leading and trailing
/// dashes are trimmed.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

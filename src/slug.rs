//! URL slugs for recipe titles.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\-]+").expect("slug charset pattern is valid"));
static REPEATED_HYPHENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("hyphen pattern is valid"));
static VALID_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// Generate a URL-friendly slug from a title.
///
/// # Example
/// ```
/// use forage_import::generate_slug;
///
/// assert_eq!(generate_slug("Wild Berry Chocolate Bark"), "wild-berry-chocolate-bark");
/// assert_eq!(generate_slug("Dandelion Green Salad!"), "dandelion-green-salad");
/// ```
pub fn generate_slug(text: &str) -> String {
    let lower = text.to_lowercase();
    let hyphenated = WHITESPACE.replace_all(lower.trim(), "-");
    let stripped = NON_SLUG_CHARS.replace_all(&hyphenated, "");
    let collapsed = REPEATED_HYPHENS.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

/// Append `-1`, `-2`, ... to `base` until it no longer collides with `existing`.
pub fn generate_unique_slug<S: AsRef<str>>(base: &str, existing: &[S]) -> String {
    let taken = |candidate: &str| existing.iter().any(|slug| slug.as_ref() == candidate);

    let mut slug = base.to_string();
    let mut counter = 1;
    while taken(&slug) {
        slug = format!("{base}-{counter}");
        counter += 1;
    }
    slug
}

/// Lowercase alphanumeric words joined by single hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    VALID_SLUG.is_match(slug)
}

//! Name Extraction
//!
//! Turns a composite dataset label such as `32019-灵异（71集）&张三&李四`
//! into the list of cleaned titles it may refer to.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading catalogue number, e.g. `32019-`
    static ref NUMERIC_PREFIX: Regex = Regex::new(r"^[0-9]+-").unwrap();
    /// Bracketed span in either full-width or half-width glyphs, e.g. `（71集）`
    static ref BRACKETED: Regex = Regex::new(r"[（(].*?[）)]").unwrap();
    /// Punctuation dropped from titles before comparison
    static ref PUNCTUATION: Regex = Regex::new(r"[！!？?。.]").unwrap();
}

/// Characters that start trailing cast credits after a title
const CREDIT_SEPARATORS: [char; 3] = ['&', '，', ','];

/// Cleaned candidate titles derived from one composite label, in split order
pub type CandidateNameSet = Vec<String>;

/// Extract every candidate title from a composite label.
///
/// The label is split on `&` and each part is cleaned on its own; parts that
/// end up empty are dropped. Duplicates are kept.
pub fn extract(composite_label: &str) -> CandidateNameSet {
    composite_label
        .split('&')
        .map(clean_part)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Clean a single `&`-separated part of a label. Step order matters.
fn clean_part(part: &str) -> String {
    let without_prefix = NUMERIC_PREFIX.replace(part, "");
    let without_brackets = BRACKETED.replace_all(&without_prefix, "");

    let title = match without_brackets.find(CREDIT_SEPARATORS) {
        Some(idx) => &without_brackets[..idx],
        None => &without_brackets[..],
    };

    PUNCTUATION.replace_all(title.trim_matches(is_label_space), "").into_owned()
}

/// Whitespace trimmed around a title: Unicode white space and U+FEFF, but not U+0085
fn is_label_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{0085}')
}

//! Link Matcher
//!
//! Finds the dataset record that corresponds to a ranked title.
//! Records are scanned in order and the first record that matches by either
//! pass wins; an earlier fuzzy hit beats a later exact hit.

use super::name_extractor::extract;
use crate::dataset::RawRecord;

/// Which pass produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// A candidate equals the target
    Exact,
    /// A candidate contains the target, or the target contains a candidate
    Fuzzy,
}

/// A successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch<'a> {
    pub link: &'a str,
    pub candidate: String,
    pub kind: MatchKind,
    /// Position of the matching record in the input sequence
    pub index: usize,
}

/// Find the first record matching `target`, reporting how it matched.
pub fn find_match<'a>(target: &str, records: &'a [RawRecord]) -> Option<LinkMatch<'a>> {
    for (index, record) in records.iter().enumerate() {
        let candidates = extract(&record.composite_label);

        // 1. Exact pass
        if let Some(name) = candidates.iter().find(|name| name.as_str() == target) {
            return Some(LinkMatch {
                link: &record.link,
                candidate: name.clone(),
                kind: MatchKind::Exact,
                index,
            });
        }

        // 2. Fuzzy pass, only for this record
        if let Some(name) = candidates
            .iter()
            .find(|name| name.contains(target) || target.contains(name.as_str()))
        {
            return Some(LinkMatch {
                link: &record.link,
                candidate: name.clone(),
                kind: MatchKind::Fuzzy,
                index,
            });
        }
    }

    None
}

/// Find the link for `target`, or `None` when nothing matches.
pub fn find_link<'a>(target: &str, records: &'a [RawRecord]) -> Option<&'a str> {
    find_match(target, records).map(|m| m.link)
}

//! Matching core
//!
//! Pure functions over in-memory values: label cleaning and record lookup.

pub mod matcher;
pub mod name_extractor;

pub use matcher::{find_link, find_match, LinkMatch, MatchKind};
pub use name_extractor::{extract, CandidateNameSet};

//! Playlet Finder Library
//!
//! Matches hot-ranking playlet titles against a local CSV of share links.

pub mod config;
pub mod core;
pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod ranking;
pub mod report;

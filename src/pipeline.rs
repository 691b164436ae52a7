//! Run Pipeline
//!
//! Load dataset, fetch ranking, match, report. Each step runs to completion
//! before the next one starts.

use crate::config::Config;
use crate::core::{find_match, MatchKind};
use crate::dataset::{load_records, RawRecord};
use crate::error::FinderResult;
use crate::ranking::{RankingClient, RankingEntry};
use crate::report::{LinkStatus, MatchResult, Report};
use tracing::{debug, info};

/// Match every ranked title against the dataset, keeping ranking order
pub fn match_all(entries: &[RankingEntry], records: &[RawRecord]) -> Report {
    let results = entries
        .iter()
        .map(|entry| {
            let hit = find_match(&entry.title, records);
            match &hit {
                Some(m) => {
                    info!("✅ #{} {} -> {}", entry.rank, entry.title, m.link);
                    if m.kind == MatchKind::Fuzzy {
                        debug!("   fuzzy match via '{}' (record {})", m.candidate, m.index);
                    }
                }
                None => info!("❌ #{} {} -> not found", entry.rank, entry.title),
            }

            MatchResult {
                rank: entry.rank,
                target: entry.title.clone(),
                link: LinkStatus::from(hit.map(|m| m.link)),
            }
        })
        .collect();

    Report::new(results)
}

/// Execute one full run and write the report to `config.output_path`
pub async fn run(config: &Config) -> FinderResult<Report> {
    config.validate()?;

    // Dataset first so a missing file fails before any network access
    let records = load_records(&config.dataset_path, &config.link_domain)?;

    let client = RankingClient::new(config)?;
    let entries = client.fetch(config).await?;

    info!("🔎 Matching {} playlets against {} records", entries.len(), records.len());
    let report = match_all(&entries, &records);

    report.log_summary();
    report.write(&config.output_path)?;
    Ok(report)
}

//! Dataset Loader
//!
//! Reads the local share-link CSV: first column is the composite label,
//! second column the share link. No header row.

use crate::error::{FinderError, FinderResult};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One accepted dataset row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub composite_label: String,
    pub link: String,
}

/// Load all accepted records from a CSV file
pub fn load_records(path: &Path, link_domain: &str) -> FinderResult<Vec<RawRecord>> {
    if !path.exists() {
        return Err(FinderError::DatasetMissing(path.to_path_buf()));
    }

    info!("📂 Reading dataset {}...", path.display());
    let file = std::fs::File::open(path)?;
    let records = parse_records(file, link_domain)?;
    info!("   -> Found {} records.", records.len());

    Ok(records)
}

/// Parse records from any CSV source, keeping only rows whose link points at `link_domain`
pub fn parse_records<R: Read>(mut reader: R, link_domain: &str) -> FinderResult<Vec<RawRecord>> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    let body = input.strip_prefix(UTF8_BOM).unwrap_or(&input[..]);
    check_quoting(body)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_reader(body);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let (Some(label), Some(link)) = (row.get(0), row.get(1)) else {
            debug!("Skipping line {}: fewer than two columns", line);
            continue;
        };

        if label.is_empty() || link.is_empty() || !link.contains(link_domain) {
            debug!("Skipping line {}: no usable label or link", line);
            continue;
        }

        records.push(RawRecord {
            composite_label: label.to_string(),
            link: link.trim().to_string(),
        });
    }

    Ok(records)
}

/// Reject quoting the csv reader would silently repair: a quote never closed,
/// text after a closing quote, or a quote inside an unquoted field.
fn check_quoting(input: &[u8]) -> FinderResult<()> {
    let malformed = |line: u64, message: &str| FinderError::Dataset {
        line,
        message: message.to_string(),
    };

    let mut line: u64 = 1;
    let mut i = 0;
    while i < input.len() {
        if input[i] == b'"' {
            let opened_on = line;
            i += 1;
            loop {
                match input.get(i) {
                    None => return Err(malformed(opened_on, "quote not closed")),
                    Some(b'"') if input.get(i + 1) == Some(&b'"') => i += 2,
                    Some(b'"') => {
                        i += 1;
                        break;
                    }
                    Some(b'\n') => {
                        line += 1;
                        i += 1;
                    }
                    Some(_) => i += 1,
                }
            }
            if !matches!(input.get(i), None | Some(b',' | b'\n' | b'\r')) {
                return Err(malformed(line, "unexpected text after closing quote"));
            }
        } else {
            while let Some(&b) = input.get(i) {
                match b {
                    b',' | b'\n' | b'\r' => break,
                    b'"' => return Err(malformed(line, "quote inside unquoted field")),
                    _ => i += 1,
                }
            }
        }

        // Field terminator
        match input.get(i) {
            Some(b'\n') => {
                line += 1;
                i += 1;
            }
            Some(_) => i += 1,
            None => {}
        }
    }

    Ok(())
}

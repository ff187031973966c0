//! Reading the match metadata and match event tables.
//!
//! Supports both plain CSV and gzip-compressed CSV files (.csv.gz).
//! Empty cells and `NaN` are treated as absent; rows where every cell is
//! absent are dropped.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use footgraph_core::{EventRecord, FootgraphError, FootgraphResult, MatchRecord};

fn open_reader(path: &Path) -> FootgraphResult<csv::Reader<Box<dyn Read>>> {
    let file = File::open(path).map_err(|e| {
        FootgraphError::input(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(ReaderBuilder::new().has_headers(true).from_reader(reader))
}

fn is_absent(cell: &str) -> bool {
    let cell = cell.trim();
    cell.is_empty() || cell.eq_ignore_ascii_case("nan")
}

fn read_table<T>(
    path: &Path,
    table: &'static str,
    validate: fn(&T, usize) -> FootgraphResult<()>,
) -> FootgraphResult<Vec<T>>
where
    T: DeserializeOwned,
{
    let mut reader = open_reader(path)?;
    let headers = reader
        .headers()
        .map_err(|e| FootgraphError::input(format!("{table}: failed to read header: {e}")))?
        .clone();

    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for (index, result) in reader.records().enumerate() {
        let row_number = index + 1;
        let record = result
            .map_err(|e| FootgraphError::input(format!("{table} row {row_number}: {e}")))?;

        let cleaned: StringRecord = record
            .iter()
            .map(|cell| if is_absent(cell) { "" } else { cell })
            .collect();
        if cleaned.iter().all(str::is_empty) {
            dropped += 1;
            continue;
        }

        let row: T = cleaned
            .deserialize(Some(&headers))
            .map_err(|e| FootgraphError::input(format!("{table} row {row_number}: {e}")))?;
        validate(&row, row_number)?;
        rows.push(row);
    }

    if dropped > 0 {
        warn!(table, dropped, "Dropped empty rows");
    }
    info!(table, rows = rows.len(), path = %path.display(), "Loaded table");
    Ok(rows)
}

/// Read the match metadata table (`ginf.csv`).
pub fn read_match_metadata(path: impl AsRef<Path>) -> FootgraphResult<Vec<MatchRecord>> {
    read_table(path.as_ref(), MatchRecord::TABLE, MatchRecord::validate)
}

/// Read the match events table (`events.csv`).
pub fn read_match_events(path: impl AsRef<Path>) -> FootgraphResult<Vec<EventRecord>> {
    read_table(path.as_ref(), EventRecord::TABLE, EventRecord::validate)
}

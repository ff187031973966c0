//! Gzip CSV relationship sink.

use std::path::{Path, PathBuf};

use tracing::debug;

use footgraph_core::model::RELATIONSHIP_COLUMNS;
use footgraph_core::{FootgraphError, FootgraphResult, Relationship, RelationshipSink};

use crate::writer::{finish, header_path, open_payload, write_header, GzCsvWriter};

/// Relationship stream written as `<name>.csv.gz` plus a
/// `<name>_header.csv` holding `:START_ID,:END_ID,:TYPE`.
pub struct RelationsFile {
    path: PathBuf,
    writer: Option<GzCsvWriter>,
    rows: usize,
}

impl RelationsFile {
    pub fn create(path: impl AsRef<Path>) -> FootgraphResult<Self> {
        let path = path.as_ref().to_path_buf();
        let columns: Vec<String> = RELATIONSHIP_COLUMNS.iter().map(|c| c.to_string()).collect();
        write_header(&header_path(&path), &columns)?;
        let writer = open_payload(&path)?;
        Ok(Self {
            path,
            writer: Some(writer),
            rows: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

impl RelationshipSink for RelationsFile {
    fn add(&mut self, relationship: Relationship) -> FootgraphResult<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or(FootgraphError::SinkClosed("relationship"))?;
        writer
            .write_record([
                relationship.start.to_string(),
                relationship.end.to_string(),
                relationship.kind.as_str().to_string(),
            ])
            .map_err(std::io::Error::from)?;
        self.rows += 1;
        Ok(())
    }

    fn close(&mut self) -> FootgraphResult<()> {
        if let Some(writer) = self.writer.take() {
            finish(writer)?;
            debug!(path = %self.path.display(), rows = self.rows, "Closed relationship file");
        }
        Ok(())
    }
}

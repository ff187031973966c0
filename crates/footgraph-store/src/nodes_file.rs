//! Gzip CSV node sink.

use std::path::{Path, PathBuf};

use tracing::debug;

use footgraph_core::model::node_header;
use footgraph_core::{FootgraphError, FootgraphResult, Node, NodeField, NodeSink, Scalar};

use crate::writer::{
    escape_backslashes, finish, header_path, open_payload, write_header, GzCsvWriter,
};

/// Node stream written as `<name>.csv.gz` plus a `<name>_header.csv`
/// holding `nodeId:ID`, `:LABEL` and every property column.
pub struct NodesFile {
    path: PathBuf,
    writer: Option<GzCsvWriter>,
    rows: usize,
}

impl NodesFile {
    pub fn create(path: impl AsRef<Path>) -> FootgraphResult<Self> {
        let path = path.as_ref().to_path_buf();
        write_header(&header_path(&path), &node_header())?;
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

fn render(value: &Scalar) -> String {
    match value {
        Scalar::Text(text) => escape_backslashes(text).into_owned(),
        other => other.to_string(),
    }
}

/// One output row: id, labels, then one cell per property column.
fn node_row(node: &Node) -> Vec<String> {
    let mut row = Vec::with_capacity(NodeField::ALL.len() + 2);
    row.push(node.id.to_string());
    row.push(node.label_cell());
    row.extend(
        NodeField::ALL
            .iter()
            .map(|field| node.get(*field).map(render).unwrap_or_default()),
    );
    row
}

impl NodeSink for NodesFile {
    fn add(&mut self, node: Node) -> FootgraphResult<()> {
        let writer = self.writer.as_mut().ok_or(FootgraphError::SinkClosed("node"))?;
        writer
            .write_record(node_row(&node))
            .map_err(std::io::Error::from)?;
        self.rows += 1;
        Ok(())
    }

    fn close(&mut self) -> FootgraphResult<()> {
        if let Some(writer) = self.writer.take() {
            finish(writer)?;
            debug!(path = %self.path.display(), rows = self.rows, "Closed node file");
        }
        Ok(())
    }
}

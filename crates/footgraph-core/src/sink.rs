//! Output sink capabilities.
//!
//! The graph builder only ever appends to a [`NodeSink`] and a
//! [`RelationshipSink`] and closes them at the end of a run. Concrete
//! storage (gzip CSV, in-memory) lives behind these traits.

use crate::error::{FootgraphError, FootgraphResult};
use crate::model::{Node, Relationship};

/// Destination for node records.
pub trait NodeSink {
    /// Append one node. Calling this after [`NodeSink::close`] is an error.
    fn add(&mut self, node: Node) -> FootgraphResult<()>;

    /// Flush and release the underlying resource.
    fn close(&mut self) -> FootgraphResult<()>;
}

/// Destination for relationship records.
pub trait RelationshipSink {
    /// Append one relationship. Calling this after
    /// [`RelationshipSink::close`] is an error.
    fn add(&mut self, relationship: Relationship) -> FootgraphResult<()>;

    /// Flush and release the underlying resource.
    fn close(&mut self) -> FootgraphResult<()>;
}

impl<T: NodeSink + ?Sized> NodeSink for &mut T {
    fn add(&mut self, node: Node) -> FootgraphResult<()> {
        (**self).add(node)
    }

    fn close(&mut self) -> FootgraphResult<()> {
        (**self).close()
    }
}

impl<T: RelationshipSink + ?Sized> RelationshipSink for &mut T {
    fn add(&mut self, relationship: Relationship) -> FootgraphResult<()> {
        (**self).add(relationship)
    }

    fn close(&mut self) -> FootgraphResult<()> {
        (**self).close()
    }
}

/// Sink that keeps every record in memory.
#[derive(Debug)]
pub struct MemorySink<T> {
    pub records: Vec<T>,
    closed: bool,
}

impl<T> Default for MemorySink<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            closed: false,
        }
    }
}

impl<T> MemorySink<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn push(&mut self, record: T, sink: &'static str) -> FootgraphResult<()> {
        if self.closed {
            return Err(FootgraphError::SinkClosed(sink));
        }
        self.records.push(record);
        Ok(())
    }
}

impl NodeSink for MemorySink<Node> {
    fn add(&mut self, node: Node) -> FootgraphResult<()> {
        self.push(node, "node")
    }

    fn close(&mut self) -> FootgraphResult<()> {
        self.closed = true;
        Ok(())
    }
}

impl RelationshipSink for MemorySink<Relationship> {
    fn add(&mut self, relationship: Relationship) -> FootgraphResult<()> {
        self.push(relationship, "relationship")
    }

    fn close(&mut self) -> FootgraphResult<()> {
        self.closed = true;
        Ok(())
    }
}

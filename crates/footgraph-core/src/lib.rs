//! footgraph core library
//!
//! Graph primitives for the football event graph: canonical node ids,
//! nodes and relationships, the fixed event enumerations, the input row
//! types and the sink traits the graph builder writes through.

pub mod catalog;
pub mod error;
pub mod id;
pub mod model;
pub mod record;
pub mod sink;

pub use catalog::ContextCategory;
pub use error::{FootgraphError, FootgraphResult};
pub use id::{EntityKind, NodeId, TimeDivision};
pub use model::{Node, NodeField, NodeLabel, RelationType, Relationship, Scalar};
pub use record::{EventRecord, MatchRecord};
pub use sink::{MemorySink, NodeSink, RelationshipSink};

//! # footgraph graph
//!
//! Turns match metadata and match event rows into nodes and relationships.
//!
//! Categorical columns are deduplicated into dictionaries, match dates are
//! folded into a year/month/day time tree, and every row is then translated
//! once, in input order, into records pushed to the output sinks.

pub mod builder;
pub mod config;
pub mod dictionary;
pub mod pipeline;
pub mod timetree;

pub use builder::{BuildCounts, GraphBuilder};
pub use config::{ExportConfig, MatchOrder};
pub use dictionary::{CategoryDictionary, DictionaryOrder, MetadataDictionaries};
pub use pipeline::{export_graph, ExportSummary};
pub use timetree::TimeTree;

//! # footgraph store
//!
//! File-backed input and output for the graph export:
//! - reading the match metadata and match event tables (plain or gzip CSV),
//! - gzip CSV node and relationship sinks with separate header files, the
//!   layout bulk graph importers expect.

pub mod nodes_file;
pub mod reader;
pub mod relations_file;
mod writer;

pub use nodes_file::NodesFile;
pub use reader::{read_match_events, read_match_metadata};
pub use relations_file::RelationsFile;
pub use writer::header_path;

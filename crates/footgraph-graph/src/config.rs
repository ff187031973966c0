//! Export configuration.

use std::path::Path;

use serde::Deserialize;

use footgraph_core::{FootgraphError, FootgraphResult};

use crate::dictionary::DictionaryOrder;

/// Order in which match rows are translated. Decides how `NEXT` chains are
/// linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOrder {
    /// Translate rows as they appear. `NEXT` chains are chronological only
    /// if the input is already sorted by date.
    #[default]
    Input,
    /// Stable sort by match date before translating.
    Chronological,
}

/// Configuration for one export run.
///
/// ```toml
/// nodes_file = "football_event_graph_nodes.csv.gz"
/// relations_file = "football_event_graph_relations.csv.gz"
/// dictionary_order = "lexicographic"
/// match_order = "input"
/// progress = true
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub nodes_file: String,
    pub relations_file: String,
    pub dictionary_order: DictionaryOrder,
    pub match_order: MatchOrder,
    pub progress: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            nodes_file: "football_event_graph_nodes.csv.gz".to_string(),
            relations_file: "football_event_graph_relations.csv.gz".to_string(),
            dictionary_order: DictionaryOrder::default(),
            match_order: MatchOrder::default(),
            progress: true,
        }
    }
}

impl ExportConfig {
    pub fn from_toml_str(content: &str) -> FootgraphResult<Self> {
        toml::from_str(content).map_err(|e| FootgraphError::config(e.to_string()))
    }

    /// Load a TOML config file. Missing keys fall back to the defaults.
    pub fn load(path: &Path) -> FootgraphResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FootgraphError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = ExportConfig::from_toml_str("match_order = \"chronological\"").unwrap();
        assert_eq!(config.match_order, MatchOrder::Chronological);
        assert_eq!(config.dictionary_order, DictionaryOrder::Lexicographic);
        assert_eq!(config.nodes_file, "football_event_graph_nodes.csv.gz");
        assert!(config.progress);
    }

    #[test]
    fn test_first_seen_order() {
        let config = ExportConfig::from_toml_str(
            "dictionary_order = \"first_seen\"\nprogress = false",
        )
        .unwrap();
        assert_eq!(config.dictionary_order, DictionaryOrder::FirstSeen);
        assert!(!config.progress);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = ExportConfig::from_toml_str("sort = true").unwrap_err();
        assert!(matches!(err, FootgraphError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        assert!(ExportConfig::load(Path::new("/nonexistent/footgraph.toml")).is_err());
    }
}

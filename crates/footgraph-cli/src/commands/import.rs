//! `footgraph import`: read both tables and write the graph files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{error, info};

use footgraph_graph::{export_graph, ExportConfig, MatchOrder};
use footgraph_store::{read_match_events, read_match_metadata, NodesFile, RelationsFile};

use crate::output;

#[derive(Args)]
pub struct ImportArgs {
    /// Match metadata table (ginf.csv, plain or .gz)
    #[arg(long, env = "FOOTGRAPH_METADATA")]
    pub metadata: PathBuf,

    /// Match events table (events.csv, plain or .gz)
    #[arg(long, env = "FOOTGRAPH_EVENTS")]
    pub events: PathBuf,

    /// Directory receiving the node, relationship and log files
    #[arg(short, long, env = "FOOTGRAPH_OUTPUT")]
    pub output: PathBuf,

    /// TOML export configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sort matches by date before linking NEXT chains
    #[arg(long)]
    pub chronological: bool,

    /// Disable progress bars
    #[arg(long)]
    pub no_progress: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl ImportArgs {
    /// Config file values (or defaults) with command-line flags applied on top.
    fn export_config(&self) -> Result<ExportConfig> {
        let mut config = match &self.config {
            Some(path) => ExportConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ExportConfig::default(),
        };
        if self.chronological {
            config.match_order = MatchOrder::Chronological;
        }
        if self.no_progress || self.json {
            config.progress = false;
        }
        Ok(config)
    }
}

pub fn execute(args: ImportArgs) -> Result<()> {
    let config = args.export_config()?;
    info!(
        metadata = %args.metadata.display(),
        events = %args.events.display(),
        output = %args.output.display(),
        "Starting football graph export"
    );

    let matches = read_match_metadata(&args.metadata).with_context(|| {
        format!("Failed to read match metadata from {}", args.metadata.display())
    })?;
    let events = read_match_events(&args.events)
        .with_context(|| format!("Failed to read match events from {}", args.events.display()))?;

    let nodes_path = args.output.join(&config.nodes_file);
    let relations_path = args.output.join(&config.relations_file);
    let nodes = NodesFile::create(&nodes_path)
        .with_context(|| format!("Failed to create {}", nodes_path.display()))?;
    let relations = RelationsFile::create(&relations_path)
        .with_context(|| format!("Failed to create {}", relations_path.display()))?;

    let summary = match export_graph(&matches, &events, &config, nodes, relations) {
        Ok(summary) => summary,
        Err(e) => {
            error!(
                error = %e,
                "Export failed; the output files are incomplete and must not be imported"
            );
            return Err(e).context("Graph export failed");
        }
    };

    if args.json {
        output::print_summary_json(&summary)?;
    } else {
        output::print_summary(&summary, &nodes_path, &relations_path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const METADATA: &str = "\
id_odsp,date,league,season,country,ht,at,fthg,ftag,odd_h,odd_d,odd_a
m1,2016-05-01,E0,2016,england,Arsenal,Chelsea,2,1,1.9,3.4,4.2
m2,2016-04-24,E0,2016,england,Chelsea,Everton,0,0,2.1,3.3,3.5
";

    const EVENTS: &str = "\
id_odsp,id_event,sort_order,time,text,event_type,event_type2,side,event_team,opponent,player,player2,player_in,player_out,shot_place,shot_outcome,is_goal,location,bodypart,assist_method,situation,fast_break
m1,m1e1,1,12,Goal!,1,12,1,Arsenal,Chelsea,theo walcott,mesut ozil,,,3,1,1,3,1,1,1,0
m1,m1e2,2,60,Substitution,7,,2,Chelsea,Arsenal,,,pedro,willian,,,0,,,0,,0
";

    fn args(dir: &Path) -> ImportArgs {
        let metadata = dir.join("ginf.csv");
        let events = dir.join("events.csv");
        std::fs::write(&metadata, METADATA).unwrap();
        std::fs::write(&events, EVENTS).unwrap();
        let output = dir.join("out");
        std::fs::create_dir_all(&output).unwrap();
        ImportArgs {
            metadata,
            events,
            output,
            config: None,
            chronological: false,
            no_progress: true,
            json: true,
        }
    }

    #[test]
    fn test_import_writes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        execute(args(dir.path())).unwrap();

        let out = dir.path().join("out");
        for name in [
            "football_event_graph_nodes.csv.gz",
            "football_event_graph_nodes_header.csv",
            "football_event_graph_relations.csv.gz",
            "football_event_graph_relations_header.csv",
        ] {
            assert!(out.join(name).exists(), "missing {name}");
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("footgraph.toml");
        std::fs::write(&config_path, "match_order = \"input\"\nprogress = true\n").unwrap();

        let mut args = args(dir.path());
        args.config = Some(config_path);
        args.chronological = true;
        let config = args.export_config().unwrap();
        assert_eq!(config.match_order, MatchOrder::Chronological);
        assert!(!config.progress);
    }

    #[test]
    fn test_unknown_team_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(dir.path());
        std::fs::write(
            &args.events,
            "id_odsp,id_event,event_team,opponent\nm1,m1e1,Arsenal,Tottenham\n",
        )
        .unwrap();
        let err = execute(args).unwrap_err();
        assert!(err.to_string().contains("Graph export failed"));
    }
}

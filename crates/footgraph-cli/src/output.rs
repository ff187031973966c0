//! Terminal output formatting.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use footgraph_graph::ExportSummary;

/// Print the export summary.
pub fn print_summary(summary: &ExportSummary, nodes_file: &Path, relations_file: &Path) {
    println!("{}", "Export complete:".green().bold());
    println!("  Nodes written:         {}", summary.nodes);
    println!("  Relationships written: {}", summary.relationships);
    println!();

    println!("{}", "Source rows".bold());
    println!("  {:<12} {:>10}", "Matches", summary.matches);
    println!("  {:<12} {:>10}", "Events", summary.events);
    println!();

    println!("{}", "Dictionaries".bold());
    println!("  {:<12} {:>10}", "Leagues", summary.leagues);
    println!("  {:<12} {:>10}", "Countries", summary.countries);
    println!("  {:<12} {:>10}", "Seasons", summary.seasons);
    println!("  {:<12} {:>10}", "Teams", summary.teams);
    println!("  {:<12} {:>10}", "Players", summary.players);
    println!("  {:<12} {:>10}", "Time nodes", summary.time_nodes);
    println!();

    println!("  {} {}", "Nodes:".dimmed(), nodes_file.display());
    println!("  {} {}", "Relations:".dimmed(), relations_file.display());
}

/// Print the export summary as pretty JSON.
pub fn print_summary_json(summary: &ExportSummary) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

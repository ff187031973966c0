//! Full export run: dictionaries, time tree, then row translation.
//!
//! All dictionaries and the time tree are built before any record is
//! emitted, so invalid dates abort the run before the sinks see a single
//! row. The sinks are closed whether translation succeeds or fails.

use std::borrow::Cow;

use serde::Serialize;
use tracing::info;

use footgraph_core::{
    ContextCategory, EventRecord, FootgraphResult, MatchRecord, NodeSink, RelationshipSink,
};

use crate::builder::GraphBuilder;
use crate::config::{ExportConfig, MatchOrder};
use crate::dictionary::{player_dictionary, MetadataDictionaries};
use crate::timetree::{parse_date, TimeTree};

/// Result of an export run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub nodes: usize,
    pub relationships: usize,
    pub matches: usize,
    pub events: usize,
    pub leagues: usize,
    pub countries: usize,
    pub seasons: usize,
    pub teams: usize,
    pub players: usize,
    pub time_nodes: usize,
}

/// Export matches and events into the two sinks.
pub fn export_graph<N, R>(
    matches: &[MatchRecord],
    events: &[EventRecord],
    config: &ExportConfig,
    nodes: N,
    relationships: R,
) -> FootgraphResult<ExportSummary>
where
    N: NodeSink,
    R: RelationshipSink,
{
    let mut builder = GraphBuilder::new(nodes, relationships).with_progress(config.progress);
    let outcome = translate(&mut builder, matches, events, config);
    let closed = builder.close();

    // A translation failure takes precedence over a close failure.
    let mut summary = outcome?;
    closed?;

    let counts = builder.counts();
    summary.nodes = counts.nodes;
    summary.relationships = counts.relationships;
    summary.matches = counts.matches;
    summary.events = counts.events;

    info!(
        nodes = summary.nodes,
        relationships = summary.relationships,
        matches = summary.matches,
        events = summary.events,
        "Export complete"
    );
    Ok(summary)
}

fn translate<N, R>(
    builder: &mut GraphBuilder<N, R>,
    matches: &[MatchRecord],
    events: &[EventRecord],
    config: &ExportConfig,
) -> FootgraphResult<ExportSummary>
where
    N: NodeSink,
    R: RelationshipSink,
{
    info!("Building maps for categorical variables");
    let dictionaries = MetadataDictionaries::build(matches, config.dictionary_order);
    let players = player_dictionary(events, config.dictionary_order);
    let time_tree = TimeTree::from_dates(matches.iter().map(|m| m.date.as_str()))?;
    let ordered = order_matches(matches, config.match_order)?;

    info!(count = dictionaries.leagues.len(), "Adding league nodes");
    builder.add_leagues(&dictionaries.leagues)?;
    info!(count = dictionaries.countries.len(), "Adding country nodes");
    builder.add_countries(&dictionaries.countries)?;
    info!(count = dictionaries.seasons.len(), "Adding season nodes");
    builder.add_seasons(&dictionaries.seasons)?;
    info!(count = dictionaries.teams.len(), "Adding team nodes");
    builder.add_teams(&dictionaries.teams)?;
    info!(count = time_tree.node_count(), "Adding date nodes");
    builder.add_dates(&time_tree)?;

    info!(
        count = ordered.len(),
        order = ?config.match_order,
        "Adding football match nodes and relations"
    );
    builder.add_football_matches(ordered.iter(), &dictionaries)?;

    for category in ContextCategory::ALL {
        info!(category = category.name(), "Adding event context nodes");
        builder.add_event_contexts(category)?;
    }

    info!(count = players.len(), "Adding player nodes");
    builder.add_players(&players)?;

    info!(count = events.len(), "Adding football event nodes and relations");
    builder.add_football_events(events, &dictionaries.teams, &players)?;

    Ok(ExportSummary {
        leagues: dictionaries.leagues.len(),
        countries: dictionaries.countries.len(),
        seasons: dictionaries.seasons.len(),
        teams: dictionaries.teams.len(),
        players: players.len(),
        time_nodes: time_tree.node_count(),
        ..Default::default()
    })
}

fn order_matches(
    matches: &[MatchRecord],
    order: MatchOrder,
) -> FootgraphResult<Cow<'_, [MatchRecord]>> {
    match order {
        MatchOrder::Input => Ok(Cow::Borrowed(matches)),
        MatchOrder::Chronological => {
            let mut keyed = matches
                .iter()
                .map(|m| parse_date(&m.date).map(|date| (date, m)))
                .collect::<FootgraphResult<Vec<_>>>()?;
            // Stable: rows sharing a date keep their input order.
            keyed.sort_by_key(|(date, _)| *date);
            Ok(Cow::Owned(keyed.into_iter().map(|(_, m)| m.clone()).collect()))
        }
    }
}

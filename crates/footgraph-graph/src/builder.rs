//! Row translator: turns dictionaries, the time tree and input rows into
//! nodes and relationships.
//!
//! Graph layout produced here:
//! - (:Month)-[:IN_YEAR]->(:Year), (:Date)-[:IN_MONTH]->(:Month)
//! - (:Match)-[:ON_DATE]->(:Date), (:Season)-[:IN_SEASON]->(:Match)
//! - (:Match)-[:HOME_TEAM|AWAY_TEAM]->(:Team)
//! - (:Match)-[:IN_LEAGUE]->(:League)-[:IN_COUNTRY]->(:Country)
//! - (:Match)-[:NEXT]->(:Match) per team
//! - (:Match)-[:HAS_MATCH_EVENT]->(:MatchEvent)
//! - (:MatchEvent)-[:EVENT_TEAM|OPPONENT_TEAM]->(:Team)
//! - (:MatchEvent)-[:PLAYER_1|PLAYER_2]->(:Player)
//! - (:MatchEvent)-[:SHOT_PLACEMENT|SHOT_OUTCOME|...]->(:MatchEventContext)

use std::collections::{HashMap, HashSet};

use chrono::Datelike;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use footgraph_core::catalog::event_type_label;
use footgraph_core::{
    ContextCategory, EventRecord, FootgraphError, FootgraphResult, MatchRecord, Node, NodeField,
    NodeId, NodeLabel, NodeSink, RelationType, Relationship, RelationshipSink,
};

use crate::dictionary::{CategoryDictionary, MetadataDictionaries};
use crate::timetree::{parse_date, TimeTree};

/// Records emitted so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildCounts {
    pub nodes: usize,
    pub relationships: usize,
    pub matches: usize,
    pub events: usize,
}

/// Translates football data into graph records pushed to two sinks.
///
/// Methods are meant to be called in dependency order: leagues, countries,
/// seasons, teams, dates, matches, the context enumerations, players and
/// finally events.
pub struct GraphBuilder<N: NodeSink, R: RelationshipSink> {
    nodes: N,
    relationships: R,
    last_match_for_team: HashMap<u32, NodeId>,
    emitted: HashSet<NodeId>,
    counts: BuildCounts,
    progress: bool,
}

impl<N: NodeSink, R: RelationshipSink> GraphBuilder<N, R> {
    pub fn new(nodes: N, relationships: R) -> Self {
        Self {
            nodes,
            relationships,
            last_match_for_team: HashMap::new(),
            emitted: HashSet::new(),
            counts: BuildCounts::default(),
            progress: false,
        }
    }

    /// Show progress bars while translating rows.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn counts(&self) -> BuildCounts {
        self.counts
    }

    /// Close both sinks. Both are always attempted; the first failure wins.
    pub fn close(&mut self) -> FootgraphResult<()> {
        let nodes = self.nodes.close();
        let relationships = self.relationships.close();
        nodes.and(relationships)
    }

    pub fn into_sinks(self) -> (N, R) {
        (self.nodes, self.relationships)
    }

    fn emit_node(&mut self, node: Node) -> FootgraphResult<()> {
        if !self.emitted.insert(node.id.clone()) {
            return Err(FootgraphError::IdentityCollision(node.id.to_string()));
        }
        self.nodes.add(node)?;
        self.counts.nodes += 1;
        Ok(())
    }

    fn emit_relationship(
        &mut self,
        start: &NodeId,
        end: &NodeId,
        kind: RelationType,
    ) -> FootgraphResult<()> {
        self.relationships
            .add(Relationship::new(start.clone(), end.clone(), kind))?;
        self.counts.relationships += 1;
        Ok(())
    }

    fn add_dictionary_nodes(
        &mut self,
        dictionary: &CategoryDictionary,
        make_id: fn(u32) -> NodeId,
        labels: &[NodeLabel],
    ) -> FootgraphResult<()> {
        for (code, value) in dictionary.entries() {
            self.emit_node(Node::new(make_id(code), labels).with(NodeField::Text, value))?;
        }
        debug!(dictionary = dictionary.name(), nodes = dictionary.len(), "Added dictionary nodes");
        Ok(())
    }

    pub fn add_leagues(&mut self, leagues: &CategoryDictionary) -> FootgraphResult<()> {
        self.add_dictionary_nodes(leagues, NodeId::league, &[NodeLabel::League])
    }

    pub fn add_countries(&mut self, countries: &CategoryDictionary) -> FootgraphResult<()> {
        self.add_dictionary_nodes(countries, NodeId::country, &[NodeLabel::Country])
    }

    pub fn add_seasons(&mut self, seasons: &CategoryDictionary) -> FootgraphResult<()> {
        self.add_dictionary_nodes(seasons, NodeId::season, &[NodeLabel::Season])
    }

    pub fn add_teams(&mut self, teams: &CategoryDictionary) -> FootgraphResult<()> {
        self.add_dictionary_nodes(teams, NodeId::team, &[NodeLabel::Entity, NodeLabel::Team])
    }

    pub fn add_players(&mut self, players: &CategoryDictionary) -> FootgraphResult<()> {
        self.add_dictionary_nodes(players, NodeId::player, &[NodeLabel::Entity, NodeLabel::Player])
    }

    /// Emit all year nodes, then each month with its `IN_YEAR`, then each
    /// day with its `IN_MONTH`.
    pub fn add_dates(&mut self, tree: &TimeTree) -> FootgraphResult<()> {
        for year in tree.years() {
            self.emit_node(
                Node::new(NodeId::year(year), [NodeLabel::Year])
                    .with(NodeField::Text, format!("{year:04}")),
            )?;
        }
        for (year, month) in tree.months() {
            let month_id = NodeId::month(year, month);
            self.emit_node(
                Node::new(month_id.clone(), [NodeLabel::Month])
                    .with(NodeField::Text, format!("{year:04}-{month:02}")),
            )?;
            self.emit_relationship(&month_id, &NodeId::year(year), RelationType::InYear)?;
        }
        for (year, month, day) in tree.days() {
            let date_id = NodeId::date(year, month, day);
            self.emit_node(
                Node::new(date_id.clone(), [NodeLabel::Date])
                    .with(NodeField::Text, format!("{year:04}-{month:02}-{day:02}")),
            )?;
            self.emit_relationship(&date_id, &NodeId::month(year, month), RelationType::InMonth)?;
        }
        Ok(())
    }

    /// Translate match metadata rows.
    ///
    /// `NEXT` links each team's previously translated match to the current
    /// one. The link follows row order, not dates: callers that want a
    /// chronological chain must pass rows sorted by date.
    pub fn add_football_matches<'a, I>(
        &mut self,
        rows: I,
        dictionaries: &MetadataDictionaries,
    ) -> FootgraphResult<()>
    where
        I: IntoIterator<Item = &'a MatchRecord>,
        I::IntoIter: ExactSizeIterator,
    {
        let rows = rows.into_iter();
        let bar = self.progress_bar(rows.len(), "matches");

        for row in rows {
            self.add_football_match(row, dictionaries)?;
            bar.inc(1);
        }

        bar.finish_and_clear();
        Ok(())
    }

    fn add_football_match(
        &mut self,
        row: &MatchRecord,
        dictionaries: &MetadataDictionaries,
    ) -> FootgraphResult<()> {
        let match_id = NodeId::football_match(&row.match_id)?;
        let [home_odds, away_odds, draw_odds, over_odds, under_odds, bts_odds, not_bts_odds] =
            row.odds();

        let node = Node::new(match_id.clone(), [NodeLabel::Match])
            .with_opt(NodeField::FulltimeHomeGoals, row.home_goals())
            .with_opt(NodeField::FulltimeAwayGoals, row.away_goals())
            .with_opt(NodeField::HomeOdds, home_odds)
            .with_opt(NodeField::AwayOdds, away_odds)
            .with_opt(NodeField::DrawOdds, draw_odds)
            .with_opt(NodeField::Over25GoalOdds, over_odds)
            .with_opt(NodeField::Under25GoalOdds, under_odds)
            .with_opt(NodeField::BothTeamsToScoreOdds, bts_odds)
            .with_opt(NodeField::NotBothTeamsToScoreOdds, not_bts_odds);
        self.emit_node(node)?;

        let date = parse_date(&row.date)?;
        let date_id = NodeId::date(date.year(), date.month(), date.day());
        self.emit_relationship(&match_id, &date_id, RelationType::OnDate)?;

        let season_id = NodeId::season(dictionaries.seasons.code_of(&row.season)?);
        self.emit_relationship(&season_id, &match_id, RelationType::InSeason)?;

        let home_code = dictionaries.teams.code_of(&row.home_team)?;
        let away_code = dictionaries.teams.code_of(&row.away_team)?;
        self.emit_relationship(&match_id, &NodeId::team(home_code), RelationType::HomeTeam)?;
        self.emit_relationship(&match_id, &NodeId::team(away_code), RelationType::AwayTeam)?;

        // Read both previous matches before updating; a team listed twice counts once.
        let mut team_codes = vec![home_code];
        if away_code != home_code {
            team_codes.push(away_code);
        }
        let previous: Vec<NodeId> = team_codes
            .iter()
            .filter_map(|code| self.last_match_for_team.get(code).cloned())
            .collect();
        for previous in &previous {
            self.emit_relationship(previous, &match_id, RelationType::Next)?;
        }
        for code in team_codes {
            self.last_match_for_team.insert(code, match_id.clone());
        }

        let league_id = NodeId::league(dictionaries.leagues.code_of(&row.league)?);
        let country_id = NodeId::country(dictionaries.countries.code_of(&row.country)?);
        self.emit_relationship(&match_id, &league_id, RelationType::InLeague)?;
        self.emit_relationship(&league_id, &country_id, RelationType::InCountry)?;

        self.counts.matches += 1;
        Ok(())
    }

    /// Emit one `MatchEventContext` node per entry of a fixed enumeration.
    pub fn add_event_contexts(&mut self, category: ContextCategory) -> FootgraphResult<()> {
        for (code, text) in category.entries() {
            self.emit_node(
                Node::new(NodeId::event_context(category, *code), [NodeLabel::MatchEventContext])
                    .with(NodeField::Text, *text)
                    .with(NodeField::Category, category.name()),
            )?;
        }
        Ok(())
    }

    pub fn add_assist_methods(&mut self) -> FootgraphResult<()> {
        self.add_event_contexts(ContextCategory::AssistMethod)
    }

    pub fn add_event_body_parts(&mut self) -> FootgraphResult<()> {
        self.add_event_contexts(ContextCategory::BodyPart)
    }

    pub fn add_event_situations(&mut self) -> FootgraphResult<()> {
        self.add_event_contexts(ContextCategory::Situation)
    }

    pub fn add_pitch_locations(&mut self) -> FootgraphResult<()> {
        self.add_event_contexts(ContextCategory::PitchLocation)
    }

    pub fn add_shot_outcomes(&mut self) -> FootgraphResult<()> {
        self.add_event_contexts(ContextCategory::ShotOutcome)
    }

    pub fn add_shot_placements(&mut self) -> FootgraphResult<()> {
        self.add_event_contexts(ContextCategory::ShotPlacement)
    }

    /// Translate match event rows.
    pub fn add_football_events(
        &mut self,
        rows: &[EventRecord],
        teams: &CategoryDictionary,
        players: &CategoryDictionary,
    ) -> FootgraphResult<()> {
        let bar = self.progress_bar(rows.len(), "events");
        let mut mixed_rows = 0usize;

        for row in rows {
            if row.mixes_player_pairs() {
                mixed_rows += 1;
            }
            self.add_football_event(row, teams, players)?;
            bar.inc(1);
        }

        bar.finish_and_clear();
        if mixed_rows > 0 {
            warn!(
                rows = mixed_rows,
                "Events populate both player pairs; all present players were linked"
            );
        }
        Ok(())
    }

    fn add_football_event(
        &mut self,
        row: &EventRecord,
        teams: &CategoryDictionary,
        players: &CategoryDictionary,
    ) -> FootgraphResult<()> {
        let match_id = NodeId::football_match(&row.match_id)?;
        let event_id = NodeId::match_event(&row.event_id)?;

        let mut labels = vec![NodeLabel::MatchEvent];
        for raw in [row.event_type, row.event_type2] {
            if let Some(label) = event_type_label(raw)? {
                if !labels.contains(&label) {
                    labels.push(label);
                }
            }
        }

        let node = Node::new(event_id.clone(), labels)
            .with(NodeField::IsFastBreak, row.is_fast_break())
            .with(NodeField::IsGoal, row.is_goal())
            .with_opt(NodeField::Text, row.text.as_deref())
            .with_opt(NodeField::MatchEventTime, row.clock_time())
            .with_opt(NodeField::SortOrder, row.sort_order());
        self.emit_node(node)?;

        self.emit_relationship(&match_id, &event_id, RelationType::HasMatchEvent)?;

        let event_team = NodeId::team(teams.code_of(&row.event_team)?);
        let opponent = NodeId::team(teams.code_of(&row.opponent)?);
        self.emit_relationship(&event_id, &event_team, RelationType::EventTeam)?;
        self.emit_relationship(&event_id, &opponent, RelationType::OpponentTeam)?;

        // (player, player2) and (player_in, player_out) share the two slots.
        let player_slots = [
            (&row.player, RelationType::Player1),
            (&row.player2, RelationType::Player2),
            (&row.player_in, RelationType::Player1),
            (&row.player_out, RelationType::Player2),
        ];
        for (name, kind) in player_slots {
            if let Some(name) = name {
                let player_id = NodeId::player(players.code_of(name)?);
                self.emit_relationship(&event_id, &player_id, kind)?;
            }
        }

        for category in ContextCategory::EVENT_ORDER {
            if let Some(code) = category.resolve(row.context_code(category))? {
                let context_id = NodeId::event_context(category, code);
                self.emit_relationship(&event_id, &context_id, category.relation())?;
            }
        }

        self.counts.events += 1;
        Ok(())
    }

    fn progress_bar(&self, len: usize, what: &'static str) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::with_template("{msg:>8} [{bar:40}] {pos}/{len} ({eta})") {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_message(what);
        bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use footgraph_core::{MemorySink, Scalar};

    use crate::dictionary::DictionaryOrder;

    type TestBuilder = GraphBuilder<MemorySink<Node>, MemorySink<Relationship>>;

    fn builder() -> TestBuilder {
        GraphBuilder::new(MemorySink::new(), MemorySink::new())
    }

    fn match_row(id: &str, date: &str, home: &str, away: &str) -> MatchRecord {
        MatchRecord {
            match_id: id.into(),
            date: date.into(),
            league: "E0".into(),
            season: "2016".into(),
            country: "england".into(),
            home_team: home.into(),
            away_team: away.into(),
            fulltime_home_goals: Some(2.0),
            fulltime_away_goals: Some(1.0),
            home_odds: Some(1.8),
            ..Default::default()
        }
    }

    fn event_row(id: &str) -> EventRecord {
        EventRecord {
            match_id: "m1".into(),
            event_id: id.into(),
            event_team: "Arsenal".into(),
            opponent: "Chelsea".into(),
            ..Default::default()
        }
    }

    fn relations_of(b: &TestBuilder, kind: RelationType) -> Vec<(String, String)> {
        b.relationships
            .records
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| (r.start.to_string(), r.end.to_string()))
            .collect()
    }

    fn translate_matches(rows: &[MatchRecord]) -> TestBuilder {
        let dicts = MetadataDictionaries::build(rows, DictionaryOrder::Lexicographic);
        let mut b = builder();
        b.add_football_matches(rows, &dicts).unwrap();
        b
    }

    fn event_dictionaries(rows: &[EventRecord]) -> (CategoryDictionary, CategoryDictionary) {
        let teams = CategoryDictionary::build(
            "team",
            ["Arsenal", "Chelsea"],
            DictionaryOrder::Lexicographic,
        );
        let players = crate::dictionary::player_dictionary(rows, DictionaryOrder::Lexicographic);
        (teams, players)
    }

    #[test]
    fn test_dictionary_nodes_carry_text() {
        let leagues =
            CategoryDictionary::build("league", ["E0", "D1"], DictionaryOrder::Lexicographic);
        let mut b = builder();
        b.add_leagues(&leagues).unwrap();
        let nodes = &b.nodes.records;
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].id.to_string(), "L:0");
        assert_eq!(nodes[0].get(NodeField::Text), Some(&Scalar::Text("D1".into())));
    }

    #[test]
    fn test_time_tree_emission_order() {
        let tree = TimeTree::from_dates(["2016-05-01", "2016-05-02", "2016-05-01"]).unwrap();
        let mut b = builder();
        b.add_dates(&tree).unwrap();

        let ids: Vec<String> = b.nodes.records.iter().map(|n| n.id.to_string()).collect();
        assert_eq!(ids, vec!["T:Y:2016", "T:M:2016:05", "T:D:2016:05:01", "T:D:2016:05:02"]);
        assert_eq!(
            relations_of(&b, RelationType::InYear),
            vec![("T:M:2016:05".to_string(), "T:Y:2016".to_string())]
        );
        assert_eq!(relations_of(&b, RelationType::InMonth).len(), 2);
        assert_eq!(
            b.nodes.records[2].get(NodeField::Text),
            Some(&Scalar::Text("2016-05-01".into()))
        );
    }

    #[test]
    fn test_match_node_and_relations() {
        let rows = vec![match_row("m1", "2016-05-01", "Arsenal", "Chelsea")];
        let b = translate_matches(&rows);

        let node = &b.nodes.records[0];
        assert_eq!(node.id.to_string(), "M:m1");
        assert_eq!(node.get(NodeField::FulltimeHomeGoals), Some(&Scalar::Int(2)));
        assert_eq!(node.get(NodeField::HomeOdds), Some(&Scalar::Float(1.8)));
        assert!(node.get(NodeField::DrawOdds).is_none());

        let expected = [
            (RelationType::OnDate, "M:m1", "T:D:2016:05:01"),
            (RelationType::InSeason, "S:0", "M:m1"),
            (RelationType::HomeTeam, "M:m1", "TEAM:0"),
            (RelationType::AwayTeam, "M:m1", "TEAM:1"),
            (RelationType::InLeague, "M:m1", "L:0"),
            (RelationType::InCountry, "L:0", "C:0"),
        ];
        for (kind, start, end) in expected {
            assert_eq!(relations_of(&b, kind), vec![(start.to_string(), end.to_string())]);
        }
        assert!(relations_of(&b, RelationType::Next).is_empty());
        assert_eq!(b.counts().matches, 1);
    }

    #[test]
    fn test_next_chain_follows_input_order() {
        let m1 = match_row("m1", "2016-01-01", "A", "B");
        let m2 = match_row("m2", "2016-01-08", "C", "A");
        let m3 = match_row("m3", "2016-01-15", "A", "D");

        let b = translate_matches(&[m1.clone(), m2.clone(), m3.clone()]);
        assert_eq!(
            relations_of(&b, RelationType::Next),
            vec![("M:m1".into(), "M:m2".into()), ("M:m2".into(), "M:m3".into())]
        );

        let b = translate_matches(&[m2, m1, m3]);
        assert_eq!(
            relations_of(&b, RelationType::Next),
            vec![("M:m2".into(), "M:m1".into()), ("M:m1".into(), "M:m3".into())]
        );
    }

    #[test]
    fn test_next_links_home_and_away_independently() {
        let rows = vec![
            match_row("m1", "2016-01-01", "A", "B"),
            match_row("m2", "2016-01-08", "B", "A"),
        ];
        let b = translate_matches(&rows);
        // Both teams played m1 then m2.
        assert_eq!(relations_of(&b, RelationType::Next).len(), 2);
    }

    #[test]
    fn test_same_team_home_and_away_never_self_links() {
        let rows = vec![
            match_row("m1", "2016-01-01", "A", "B"),
            match_row("m2", "2016-01-08", "A", "A"),
            match_row("m3", "2016-01-15", "A", "C"),
        ];
        let b = translate_matches(&rows);
        assert_eq!(
            relations_of(&b, RelationType::Next),
            vec![("M:m1".into(), "M:m2".into()), ("M:m2".into(), "M:m3".into())]
        );
    }

    #[test]
    fn test_duplicate_match_id_is_a_collision() {
        let rows = vec![
            match_row("m1", "2016-01-01", "A", "B"),
            match_row("m1", "2016-01-08", "C", "D"),
        ];
        let dicts = MetadataDictionaries::build(&rows, DictionaryOrder::Lexicographic);
        let mut b = builder();
        let err = b.add_football_matches(&rows, &dicts).unwrap_err();
        assert!(matches!(err, FootgraphError::IdentityCollision(id) if id == "M:m1"));
    }

    #[test]
    fn test_context_nodes() {
        let mut b = builder();
        b.add_shot_outcomes().unwrap();
        let nodes = &b.nodes.records;
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[2].id.to_string(), "EC:SO:3");
        assert_eq!(nodes[2].get(NodeField::Text), Some(&Scalar::Text("Blocked".into())));
        assert_eq!(nodes[2].get(NodeField::Category), Some(&Scalar::Text("shotOutcome".into())));

        // Shot placement also has a "Blocked" entry; its id must differ.
        b.add_shot_placements().unwrap();
        assert!(b.nodes.records.iter().any(|n| n.id.to_string() == "EC:SP:2"));
    }

    #[test]
    fn test_event_labels_and_properties() {
        let rows = vec![EventRecord {
            event_type: Some(1.0),
            event_type2: Some(12.0),
            text: Some("Shot by Walcott".into()),
            time: Some(23.0),
            sort_order: Some(5.0),
            is_goal: Some(1.0),
            ..event_row("e1")
        }];
        let (teams, players) = event_dictionaries(&rows);
        let mut b = builder();
        b.add_football_events(&rows, &teams, &players).unwrap();

        let node = &b.nodes.records[0];
        assert_eq!(node.id.to_string(), "MEV:e1");
        assert_eq!(
            node.labels,
            vec![NodeLabel::MatchEvent, NodeLabel::ShotAttempt, NodeLabel::KeyPass]
        );
        assert_eq!(node.get(NodeField::IsGoal), Some(&Scalar::Bool(true)));
        assert_eq!(node.get(NodeField::IsFastBreak), Some(&Scalar::Bool(false)));
        assert_eq!(node.get(NodeField::MatchEventTime), Some(&Scalar::Int(23)));
        assert_eq!(node.get(NodeField::SortOrder), Some(&Scalar::Int(5)));

        let expected = [
            (RelationType::HasMatchEvent, "M:m1", "MEV:e1"),
            (RelationType::EventTeam, "MEV:e1", "TEAM:0"),
            (RelationType::OpponentTeam, "MEV:e1", "TEAM:1"),
        ];
        for (kind, start, end) in expected {
            assert_eq!(relations_of(&b, kind), vec![(start.to_string(), end.to_string())]);
        }
    }

    #[test]
    fn test_secondary_type_omitted_when_absent() {
        let rows = vec![EventRecord {
            event_type: Some(3.0),
            ..event_row("e1")
        }];
        let (teams, players) = event_dictionaries(&rows);
        let mut b = builder();
        b.add_football_events(&rows, &teams, &players).unwrap();
        assert_eq!(b.nodes.records[0].labels, vec![NodeLabel::MatchEvent, NodeLabel::Foul]);
    }

    #[test]
    fn test_absent_context_code_is_skipped() {
        let rows = vec![EventRecord {
            shot_outcome: None,
            location: Some(3.0),
            ..event_row("e1")
        }];
        let (teams, players) = event_dictionaries(&rows);
        let mut b = builder();
        b.add_football_events(&rows, &teams, &players).unwrap();

        assert!(relations_of(&b, RelationType::ShotOutcome).is_empty());
        assert_eq!(
            relations_of(&b, RelationType::PitchLocation),
            vec![("MEV:e1".into(), "EC:PL:3".into())]
        );
    }

    #[test]
    fn test_unknown_context_code_fails() {
        let rows = vec![EventRecord {
            bodypart: Some(9.0),
            ..event_row("e1")
        }];
        let (teams, players) = event_dictionaries(&rows);
        let mut b = builder();
        let err = b.add_football_events(&rows, &teams, &players).unwrap_err();
        assert!(matches!(err, FootgraphError::UnknownCategoryCode { .. }));
    }

    #[test]
    fn test_unknown_event_team_fails() {
        let rows = vec![EventRecord {
            event_team: "Spurs".into(),
            ..event_row("e1")
        }];
        let (teams, players) = event_dictionaries(&rows);
        let mut b = builder();
        let err = b.add_football_events(&rows, &teams, &players).unwrap_err();
        assert!(matches!(err, FootgraphError::UnknownCategory { dictionary: "team", .. }));
    }

    #[test]
    fn test_player_pairs_share_relation_types() {
        let scorer = EventRecord {
            player: Some("Kane".into()),
            player2: Some("Alli".into()),
            ..event_row("e1")
        };
        let substitution = EventRecord {
            player_in: Some("Son".into()),
            player_out: Some("Kane".into()),
            ..event_row("e2")
        };
        let rows = vec![scorer, substitution];
        let (teams, players) = event_dictionaries(&rows);
        let mut b = builder();
        b.add_football_events(&rows, &teams, &players).unwrap();

        let kane = format!("P:{}", players.code_of("Kane").unwrap());
        let alli = format!("P:{}", players.code_of("Alli").unwrap());
        let son = format!("P:{}", players.code_of("Son").unwrap());
        assert_eq!(
            relations_of(&b, RelationType::Player1),
            vec![("MEV:e1".into(), kane.clone()), ("MEV:e2".into(), son)]
        );
        assert_eq!(
            relations_of(&b, RelationType::Player2),
            vec![("MEV:e1".into(), alli), ("MEV:e2".into(), kane)]
        );
    }

    #[test]
    fn test_close_closes_both_sinks() {
        let mut b = builder();
        b.close().unwrap();
        let (nodes, relationships) = b.into_sinks();
        assert!(nodes.is_closed());
        assert!(relationships.is_closed());
    }
}

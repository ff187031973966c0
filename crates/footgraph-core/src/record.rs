//! Input row types for the two source tables.
//!
//! Numeric cells are read as `Option<f64>`: empty cells become `None` and a
//! literal `NaN` is treated as absent by the accessors below.

use serde::Deserialize;

use crate::catalog::ContextCategory;
use crate::error::{FootgraphError, FootgraphResult};

fn present(v: Option<f64>) -> Option<f64> {
    v.filter(|x| !x.is_nan())
}

fn integral(v: Option<f64>) -> Option<i64> {
    present(v).filter(|x| x.fract() == 0.0).map(|x| x as i64)
}

fn flag(v: Option<f64>) -> bool {
    present(v).is_some_and(|x| x != 0.0)
}

fn require(
    value: &str,
    table: &'static str,
    field: &'static str,
    row: usize,
) -> FootgraphResult<()> {
    if value.trim().is_empty() {
        return Err(FootgraphError::MissingField { table, field, row });
    }
    Ok(())
}

/// One row of the match metadata table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "id_odsp")]
    pub match_id: String,
    pub date: String,
    pub league: String,
    pub season: String,
    pub country: String,
    #[serde(rename = "ht")]
    pub home_team: String,
    #[serde(rename = "at")]
    pub away_team: String,
    #[serde(rename = "fthg", default)]
    pub fulltime_home_goals: Option<f64>,
    #[serde(rename = "ftag", default)]
    pub fulltime_away_goals: Option<f64>,
    #[serde(rename = "odd_h", default)]
    pub home_odds: Option<f64>,
    #[serde(rename = "odd_d", default)]
    pub draw_odds: Option<f64>,
    #[serde(rename = "odd_a", default)]
    pub away_odds: Option<f64>,
    #[serde(rename = "odd_over", default)]
    pub over_25_odds: Option<f64>,
    #[serde(rename = "odd_under", default)]
    pub under_25_odds: Option<f64>,
    #[serde(rename = "odd_bts", default)]
    pub both_teams_score_odds: Option<f64>,
    #[serde(rename = "odd_bts_n", default)]
    pub not_both_teams_score_odds: Option<f64>,
}

impl MatchRecord {
    pub const TABLE: &'static str = "match metadata";

    /// Check the columns every match needs to be placed in the graph.
    pub fn validate(&self, row: usize) -> FootgraphResult<()> {
        require(&self.match_id, Self::TABLE, "id_odsp", row)?;
        require(&self.date, Self::TABLE, "date", row)?;
        require(&self.league, Self::TABLE, "league", row)?;
        require(&self.season, Self::TABLE, "season", row)?;
        require(&self.country, Self::TABLE, "country", row)?;
        require(&self.home_team, Self::TABLE, "ht", row)?;
        require(&self.away_team, Self::TABLE, "at", row)
    }

    pub fn home_goals(&self) -> Option<i64> {
        integral(self.fulltime_home_goals)
    }

    pub fn away_goals(&self) -> Option<i64> {
        integral(self.fulltime_away_goals)
    }

    /// Odds columns in node property order: home, away, draw, over 2.5,
    /// under 2.5, both teams score, not both teams score.
    pub fn odds(&self) -> [Option<f64>; 7] {
        [
            present(self.home_odds),
            present(self.away_odds),
            present(self.draw_odds),
            present(self.over_25_odds),
            present(self.under_25_odds),
            present(self.both_teams_score_odds),
            present(self.not_both_teams_score_odds),
        ]
    }
}

/// One row of the match events table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "id_odsp")]
    pub match_id: String,
    #[serde(rename = "id_event")]
    pub event_id: String,
    #[serde(default)]
    pub sort_order: Option<f64>,
    #[serde(default)]
    pub time: Option<f64>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub event_type: Option<f64>,
    #[serde(default)]
    pub event_type2: Option<f64>,
    pub event_team: String,
    pub opponent: String,
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub player2: Option<String>,
    #[serde(default)]
    pub player_in: Option<String>,
    #[serde(default)]
    pub player_out: Option<String>,
    #[serde(default)]
    pub shot_place: Option<f64>,
    #[serde(default)]
    pub shot_outcome: Option<f64>,
    #[serde(default)]
    pub is_goal: Option<f64>,
    #[serde(default)]
    pub location: Option<f64>,
    #[serde(default)]
    pub bodypart: Option<f64>,
    #[serde(default)]
    pub assist_method: Option<f64>,
    #[serde(default)]
    pub situation: Option<f64>,
    #[serde(default)]
    pub fast_break: Option<f64>,
}

impl EventRecord {
    pub const TABLE: &'static str = "match events";

    pub fn validate(&self, row: usize) -> FootgraphResult<()> {
        require(&self.match_id, Self::TABLE, "id_odsp", row)?;
        require(&self.event_id, Self::TABLE, "id_event", row)?;
        require(&self.event_team, Self::TABLE, "event_team", row)?;
        require(&self.opponent, Self::TABLE, "opponent", row)
    }

    pub fn is_goal(&self) -> bool {
        flag(self.is_goal)
    }

    pub fn is_fast_break(&self) -> bool {
        flag(self.fast_break)
    }

    /// Match clock minute of the event.
    pub fn clock_time(&self) -> Option<i64> {
        integral(self.time)
    }

    pub fn sort_order(&self) -> Option<i64> {
        integral(self.sort_order)
    }

    /// Raw code cell for a context enumeration.
    pub fn context_code(&self, category: ContextCategory) -> Option<f64> {
        match category {
            ContextCategory::AssistMethod => self.assist_method,
            ContextCategory::BodyPart => self.bodypart,
            ContextCategory::Situation => self.situation,
            ContextCategory::PitchLocation => self.location,
            ContextCategory::ShotOutcome => self.shot_outcome,
            ContextCategory::ShotPlacement => self.shot_place,
        }
    }

    /// All player names this row references, in column order.
    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        [&self.player, &self.player2, &self.player_in, &self.player_out]
            .into_iter()
            .filter_map(|p| p.as_deref())
    }

    /// True when both the (player, player2) and the (player_in, player_out)
    /// pairs carry values. The dataset keeps them mutually exclusive.
    pub fn mixes_player_pairs(&self) -> bool {
        let scorer_pair = self.player.is_some() || self.player2.is_some();
        let substitution_pair = self.player_in.is_some() || self.player_out.is_some();
        scorer_pair && substitution_pair
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_cells_are_absent() {
        let row = MatchRecord {
            home_odds: Some(f64::NAN),
            draw_odds: Some(3.4),
            fulltime_home_goals: Some(2.0),
            ..Default::default()
        };
        assert_eq!(row.odds()[0], None);
        assert_eq!(row.odds()[2], Some(3.4));
        assert_eq!(row.home_goals(), Some(2));
        assert_eq!(row.away_goals(), None);
    }

    #[test]
    fn test_validate_reports_missing_field() {
        let row = MatchRecord {
            match_id: "m1".into(),
            date: "2016-05-01".into(),
            league: "E0".into(),
            season: "2016".into(),
            country: "england".into(),
            home_team: "Arsenal".into(),
            away_team: String::new(),
            ..Default::default()
        };
        let err = row.validate(7).unwrap_err();
        assert!(matches!(err, FootgraphError::MissingField { field: "at", row: 7, .. }));
    }

    #[test]
    fn test_event_flags() {
        let row = EventRecord {
            is_goal: Some(1.0),
            fast_break: Some(0.0),
            ..Default::default()
        };
        assert!(row.is_goal());
        assert!(!row.is_fast_break());
        assert!(!EventRecord::default().is_goal());
    }

    #[test]
    fn test_player_pairs() {
        let row = EventRecord {
            player: Some("a".into()),
            player_out: Some("b".into()),
            ..Default::default()
        };
        assert_eq!(row.player_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(row.mixes_player_pairs());
    }
}

//! Categorical dictionaries: dense integer codes for distinct raw values.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Deserialize;
use tracing::debug;

use footgraph_core::{EventRecord, FootgraphError, FootgraphResult, MatchRecord};

/// Order in which distinct values are enumerated into codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DictionaryOrder {
    /// Sort values lexicographically before assigning codes.
    #[default]
    Lexicographic,
    /// Assign codes in order of first appearance in the input.
    FirstSeen,
}

/// Mapping from raw categorical value to a code in `[0, len)`.
#[derive(Debug, Clone)]
pub struct CategoryDictionary {
    name: &'static str,
    values: Vec<String>,
    codes: HashMap<String, u32>,
}

impl CategoryDictionary {
    /// Build a dictionary over the distinct values of `values`.
    pub fn build<'a, I>(name: &'static str, values: I, order: DictionaryOrder) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let values: Vec<String> = match order {
            DictionaryOrder::Lexicographic => values
                .into_iter()
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(str::to_string)
                .collect(),
            DictionaryOrder::FirstSeen => {
                let mut seen = HashSet::new();
                values
                    .into_iter()
                    .filter(|v| seen.insert(*v))
                    .map(str::to_string)
                    .collect()
            }
        };

        let codes = values
            .iter()
            .enumerate()
            .map(|(code, value)| (value.clone(), code as u32))
            .collect();

        debug!(dictionary = name, entries = values.len(), "Built dictionary");
        Self { name, values, codes }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Code of a raw value. Values that were never inserted are an error.
    pub fn code_of(&self, value: &str) -> FootgraphResult<u32> {
        self.codes
            .get(value)
            .copied()
            .ok_or_else(|| FootgraphError::UnknownCategory {
                dictionary: self.name,
                value: value.to_string(),
            })
    }

    pub fn value_of(&self, code: u32) -> Option<&str> {
        self.values.get(code as usize).map(String::as_str)
    }

    /// `(code, raw value)` pairs in code order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, &str)> {
        self.values
            .iter()
            .enumerate()
            .map(|(code, value)| (code as u32, value.as_str()))
    }
}

/// Dictionaries derived from the match metadata table.
#[derive(Debug, Clone)]
pub struct MetadataDictionaries {
    pub leagues: CategoryDictionary,
    pub countries: CategoryDictionary,
    pub seasons: CategoryDictionary,
    /// Union of the home and away team columns.
    pub teams: CategoryDictionary,
}

impl MetadataDictionaries {
    pub fn build(rows: &[MatchRecord], order: DictionaryOrder) -> Self {
        let leagues = rows.iter().map(|r| r.league.as_str());
        let countries = rows.iter().map(|r| r.country.as_str());
        let seasons = rows.iter().map(|r| r.season.as_str());
        let teams = rows
            .iter()
            .flat_map(|r| [r.home_team.as_str(), r.away_team.as_str()]);

        Self {
            leagues: CategoryDictionary::build("league", leagues, order),
            countries: CategoryDictionary::build("country", countries, order),
            seasons: CategoryDictionary::build("season", seasons, order),
            teams: CategoryDictionary::build("team", teams, order),
        }
    }
}

/// Player dictionary over the union of the player, player2, player_in and
/// player_out columns, absent cells filtered out.
pub fn player_dictionary(rows: &[EventRecord], order: DictionaryOrder) -> CategoryDictionary {
    CategoryDictionary::build("player", rows.iter().flat_map(|r| r.player_names()), order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lexicographic_codes() {
        let dict = CategoryDictionary::build(
            "league",
            ["SP1", "E0", "D1", "E0"],
            DictionaryOrder::Lexicographic,
        );
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.code_of("D1").unwrap(), 0);
        assert_eq!(dict.code_of("E0").unwrap(), 1);
        assert_eq!(dict.code_of("SP1").unwrap(), 2);
        assert_eq!(dict.value_of(2), Some("SP1"));
    }

    #[test]
    fn test_first_seen_codes() {
        let dict = CategoryDictionary::build(
            "league",
            ["SP1", "E0", "SP1", "D1"],
            DictionaryOrder::FirstSeen,
        );
        let entries: Vec<_> = dict.entries().collect();
        assert_eq!(entries, vec![(0, "SP1"), (1, "E0"), (2, "D1")]);
    }

    #[test]
    fn test_unknown_value_is_an_error() {
        let dict = CategoryDictionary::build("team", ["Arsenal"], DictionaryOrder::default());
        let err = dict.code_of("Chelsea").unwrap_err();
        assert!(matches!(
            err,
            FootgraphError::UnknownCategory { dictionary: "team", .. }
        ));
    }

    #[test]
    fn test_team_dictionary_is_union_of_home_and_away() {
        let rows = vec![
            MatchRecord {
                home_team: "Arsenal".into(),
                away_team: "Chelsea".into(),
                ..Default::default()
            },
            MatchRecord {
                home_team: "Everton".into(),
                away_team: "Arsenal".into(),
                ..Default::default()
            },
        ];
        let dicts = MetadataDictionaries::build(&rows, DictionaryOrder::Lexicographic);
        assert_eq!(dicts.teams.len(), 3);
        assert!(dicts.teams.code_of("Everton").is_ok());
    }

    #[test]
    fn test_player_dictionary_skips_absent_cells() {
        let rows = vec![
            EventRecord {
                player: Some("Kane".into()),
                player2: Some("Alli".into()),
                ..Default::default()
            },
            EventRecord {
                player_in: Some("Son".into()),
                player_out: Some("Kane".into()),
                ..Default::default()
            },
            EventRecord::default(),
        ];
        let players = player_dictionary(&rows, DictionaryOrder::Lexicographic);
        assert_eq!(players.len(), 3);
        assert_eq!(players.code_of("Alli").unwrap(), 0);
    }

    proptest! {
        #[test]
        fn prop_codes_are_unique_and_dense(values in prop::collection::vec("[a-z]{0,4}", 0..40)) {
            for order in [DictionaryOrder::Lexicographic, DictionaryOrder::FirstSeen] {
                let raw = values.iter().map(String::as_str);
                let dict = CategoryDictionary::build("test", raw, order);
                let distinct: BTreeSet<&str> = values.iter().map(String::as_str).collect();
                prop_assert_eq!(dict.len(), distinct.len());

                let mut codes: Vec<u32> =
                    distinct.iter().map(|v| dict.code_of(v).unwrap()).collect();
                codes.sort_unstable();
                let expected: Vec<u32> = (0..distinct.len() as u32).collect();
                prop_assert_eq!(codes, expected);
            }
        }
    }
}

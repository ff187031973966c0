//! Canonical node identities.
//!
//! A node id is an entity tag followed by its components, each component
//! prefixed with `:`:
//!
//! ```text
//! M:UFot0hit/          football match
//! MEV:UFot0hit1        match event
//! TEAM:12              team dictionary entry
//! T:D:2016:05:01       day in the time tree
//! EC:SP:3              shot placement context
//! ```
//!
//! Components are non-empty and never contain the separator, so splitting a
//! canonical id on `:` yields back exactly one (kind, components) tuple.

use std::fmt;
use std::str::FromStr;

use crate::catalog::ContextCategory;
use crate::error::{FootgraphError, FootgraphResult};

/// Separator between the entity tag and each component.
pub const ID_SEPARATOR: char = ':';

/// Entity kinds that own a node id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Country,
    League,
    EventContext,
    Match,
    MatchEvent,
    Player,
    Season,
    Team,
    TimeDivision,
}

impl EntityKind {
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Country,
        EntityKind::League,
        EntityKind::EventContext,
        EntityKind::Match,
        EntityKind::MatchEvent,
        EntityKind::Player,
        EntityKind::Season,
        EntityKind::Team,
        EntityKind::TimeDivision,
    ];

    /// The id prefix for this entity kind.
    pub fn tag(&self) -> &'static str {
        match self {
            EntityKind::Country => "C",
            EntityKind::League => "L",
            EntityKind::EventContext => "EC",
            EntityKind::Match => "M",
            EntityKind::MatchEvent => "MEV",
            EntityKind::Player => "P",
            EntityKind::Season => "S",
            EntityKind::Team => "TEAM",
            EntityKind::TimeDivision => "T",
        }
    }

    /// Parse an id prefix.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Human-readable name, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Country => "country",
            EntityKind::League => "league",
            EntityKind::EventContext => "event context",
            EntityKind::Match => "match",
            EntityKind::MatchEvent => "match event",
            EntityKind::Player => "player",
            EntityKind::Season => "season",
            EntityKind::Team => "team",
            EntityKind::TimeDivision => "time division",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Level of a time-tree node. Stored as the first component of a
/// [`EntityKind::TimeDivision`] id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeDivision {
    Year,
    Month,
    Date,
}

impl TimeDivision {
    pub fn tag(&self) -> &'static str {
        match self {
            TimeDivision::Year => "Y",
            TimeDivision::Month => "M",
            TimeDivision::Date => "D",
        }
    }
}

/// Canonical identity of a graph node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    kind: EntityKind,
    components: Vec<String>,
}

impl NodeId {
    /// Build an id from raw components, rejecting empty components and
    /// components that contain the separator.
    pub fn new<I, S>(kind: EntityKind, components: I) -> FootgraphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let components: Vec<String> = components.into_iter().map(Into::into).collect();
        if components.is_empty() {
            return Err(FootgraphError::MalformedIdComponent {
                kind: kind.name(),
                value: String::new(),
            });
        }
        if let Some(bad) = components
            .iter()
            .find(|c| c.is_empty() || c.contains(ID_SEPARATOR))
        {
            return Err(FootgraphError::MalformedIdComponent {
                kind: kind.name(),
                value: bad.clone(),
            });
        }
        Ok(Self { kind, components })
    }

    // Digits and fixed tags never contain the separator.
    fn trusted(kind: EntityKind, components: Vec<String>) -> Self {
        Self { kind, components }
    }

    pub fn country(code: u32) -> Self {
        Self::trusted(EntityKind::Country, vec![code.to_string()])
    }

    pub fn league(code: u32) -> Self {
        Self::trusted(EntityKind::League, vec![code.to_string()])
    }

    pub fn season(code: u32) -> Self {
        Self::trusted(EntityKind::Season, vec![code.to_string()])
    }

    pub fn team(code: u32) -> Self {
        Self::trusted(EntityKind::Team, vec![code.to_string()])
    }

    pub fn player(code: u32) -> Self {
        Self::trusted(EntityKind::Player, vec![code.to_string()])
    }

    /// Id of a match, keyed by the external match id.
    pub fn football_match(external_id: &str) -> FootgraphResult<Self> {
        Self::new(EntityKind::Match, [external_id])
    }

    /// Id of a match event, keyed by the external event id.
    pub fn match_event(external_id: &str) -> FootgraphResult<Self> {
        Self::new(EntityKind::MatchEvent, [external_id])
    }

    /// Id of one entry of a fixed context enumeration.
    pub fn event_context(category: ContextCategory, code: u32) -> Self {
        Self::trusted(
            EntityKind::EventContext,
            vec![category.tag().to_string(), code.to_string()],
        )
    }

    pub fn year(year: i32) -> Self {
        Self::trusted(
            EntityKind::TimeDivision,
            vec![TimeDivision::Year.tag().to_string(), format!("{year:04}")],
        )
    }

    pub fn month(year: i32, month: u32) -> Self {
        Self::trusted(
            EntityKind::TimeDivision,
            vec![
                TimeDivision::Month.tag().to_string(),
                format!("{year:04}"),
                format!("{month:02}"),
            ],
        )
    }

    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self::trusted(
            EntityKind::TimeDivision,
            vec![
                TimeDivision::Date.tag().to_string(),
                format!("{year:04}"),
                format!("{month:02}"),
                format!("{day:02}"),
            ],
        )
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.tag())?;
        for component in &self.components {
            write!(f, "{ID_SEPARATOR}{component}")?;
        }
        Ok(())
    }
}

impl FromStr for NodeId {
    type Err = FootgraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(ID_SEPARATOR);
        let kind = parts
            .next()
            .and_then(EntityKind::from_tag)
            .ok_or_else(|| FootgraphError::MalformedId(s.to_string()))?;
        Self::new(kind, parts)
    }
}

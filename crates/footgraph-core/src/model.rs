//! Graph primitives: labels, property fields, nodes and relationships.

use std::collections::BTreeMap;
use std::fmt;

use crate::id::NodeId;

/// Header of the node id column.
pub const NODE_ID_COLUMN: &str = "nodeId:ID";
/// Header of the node label column.
pub const NODE_LABEL_COLUMN: &str = ":LABEL";
/// Separator between multiple labels in one cell.
pub const LABEL_SEPARATOR: &str = ";";
/// Relationship stream columns.
pub const RELATIONSHIP_COLUMNS: [&str; 3] = [":START_ID", ":END_ID", ":TYPE"];

/// Node labels, including the sixteen event-type labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeLabel {
    League,
    Country,
    Season,
    Year,
    Month,
    Date,
    Entity,
    Team,
    Player,
    Match,
    MatchEvent,
    MatchEventContext,
    Announcement,
    ShotAttempt,
    Corner,
    Foul,
    YellowCard,
    SecondYellowCard,
    RedCard,
    Substitution,
    FreeKickWon,
    Offside,
    Handball,
    PenaltyConceded,
    KeyPass,
    FailedThroughBall,
    SendingOff,
    OwnGoal,
}

impl NodeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::League => "League",
            Self::Country => "Country",
            Self::Season => "Season",
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Date => "Date",
            Self::Entity => "Entity",
            Self::Team => "Team",
            Self::Player => "Player",
            Self::Match => "Match",
            Self::MatchEvent => "MatchEvent",
            Self::MatchEventContext => "MatchEventContext",
            Self::Announcement => "Announcement",
            Self::ShotAttempt => "ShotAttempt",
            Self::Corner => "Corner",
            Self::Foul => "Foul",
            Self::YellowCard => "YellowCard",
            Self::SecondYellowCard => "SecondYellowCard",
            Self::RedCard => "RedCard",
            Self::Substitution => "Substitution",
            Self::FreeKickWon => "FreeKickWon",
            Self::Offside => "Offside",
            Self::Handball => "Handball",
            Self::PenaltyConceded => "PenaltyConceded",
            Self::KeyPass => "KeyPass",
            Self::FailedThroughBall => "FailedThroughBall",
            Self::SendingOff => "SendingOff",
            Self::OwnGoal => "OwnGoal",
        }
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every property a node can carry. Declaration order is the column order
/// of the node stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeField {
    FulltimeHomeGoals,
    FulltimeAwayGoals,
    HomeOdds,
    AwayOdds,
    DrawOdds,
    Over25GoalOdds,
    Under25GoalOdds,
    BothTeamsToScoreOdds,
    NotBothTeamsToScoreOdds,
    MatchEventTime,
    IsFastBreak,
    IsGoal,
    SortOrder,
    Text,
    Category,
}

impl NodeField {
    pub const ALL: [NodeField; 15] = [
        NodeField::FulltimeHomeGoals,
        NodeField::FulltimeAwayGoals,
        NodeField::HomeOdds,
        NodeField::AwayOdds,
        NodeField::DrawOdds,
        NodeField::Over25GoalOdds,
        NodeField::Under25GoalOdds,
        NodeField::BothTeamsToScoreOdds,
        NodeField::NotBothTeamsToScoreOdds,
        NodeField::MatchEventTime,
        NodeField::IsFastBreak,
        NodeField::IsGoal,
        NodeField::SortOrder,
        NodeField::Text,
        NodeField::Category,
    ];

    /// Property key as it appears in the graph.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FulltimeHomeGoals => "fulltimeHomeGoals",
            Self::FulltimeAwayGoals => "fulltimeAwayGoals",
            Self::HomeOdds => "homeOdds",
            Self::AwayOdds => "awayOdds",
            Self::DrawOdds => "drawOdds",
            Self::Over25GoalOdds => "over25GoalOdds",
            Self::Under25GoalOdds => "under25GoalOdds",
            Self::BothTeamsToScoreOdds => "bothTeamsToScoreOdds",
            Self::NotBothTeamsToScoreOdds => "notBothTeamsToScoreOdds",
            Self::MatchEventTime => "matchEventTime",
            Self::IsFastBreak => "isFastBreak",
            Self::IsGoal => "isGoal",
            Self::SortOrder => "sortOrder",
            Self::Text => "text",
            Self::Category => "category",
        }
    }

    /// Column header with the importer's type hint.
    pub fn header(&self) -> String {
        match self.type_hint() {
            Some(hint) => format!("{}:{}", self.name(), hint),
            None => self.name().to_string(),
        }
    }

    fn type_hint(&self) -> Option<&'static str> {
        match self {
            Self::FulltimeHomeGoals
            | Self::FulltimeAwayGoals
            | Self::MatchEventTime
            | Self::SortOrder => Some("int"),
            Self::HomeOdds
            | Self::AwayOdds
            | Self::DrawOdds
            | Self::Over25GoalOdds
            | Self::Under25GoalOdds
            | Self::BothTeamsToScoreOdds
            | Self::NotBothTeamsToScoreOdds => Some("float"),
            Self::IsFastBreak | Self::IsGoal => Some("boolean"),
            Self::Text | Self::Category => None,
        }
    }
}

/// Full column header of the node stream.
pub fn node_header() -> Vec<String> {
    let mut header = vec![NODE_ID_COLUMN.to_string(), NODE_LABEL_COLUMN.to_string()];
    header.extend(NodeField::ALL.iter().map(NodeField::header));
    header
}

/// A scalar property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

/// A labeled graph node. Absent properties are simply missing from the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub labels: Vec<NodeLabel>,
    pub properties: BTreeMap<NodeField, Scalar>,
}

impl Node {
    pub fn new(id: NodeId, labels: impl Into<Vec<NodeLabel>>) -> Self {
        Self {
            id,
            labels: labels.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Set a property.
    pub fn with(mut self, field: NodeField, value: impl Into<Scalar>) -> Self {
        self.properties.insert(field, value.into());
        self
    }

    /// Set a property only when a value is present.
    pub fn with_opt<V: Into<Scalar>>(self, field: NodeField, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(field, v),
            None => self,
        }
    }

    pub fn get(&self, field: NodeField) -> Option<&Scalar> {
        self.properties.get(&field)
    }

    pub fn has_label(&self, label: NodeLabel) -> bool {
        self.labels.contains(&label)
    }

    /// Labels joined for the `:LABEL` column.
    pub fn label_cell(&self) -> String {
        self.labels
            .iter()
            .map(NodeLabel::as_str)
            .collect::<Vec<_>>()
            .join(LABEL_SEPARATOR)
    }
}

/// Relationship types of the football graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationType {
    InYear,
    InMonth,
    OnDate,
    InSeason,
    HomeTeam,
    AwayTeam,
    Next,
    InLeague,
    InCountry,
    HasMatchEvent,
    EventTeam,
    OpponentTeam,
    Player1,
    Player2,
    ShotPlacement,
    ShotOutcome,
    PitchLocation,
    BodyPart,
    AssistMethod,
    EventSituation,
}

impl RelationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InYear => "IN_YEAR",
            Self::InMonth => "IN_MONTH",
            Self::OnDate => "ON_DATE",
            Self::InSeason => "IN_SEASON",
            Self::HomeTeam => "HOME_TEAM",
            Self::AwayTeam => "AWAY_TEAM",
            Self::Next => "NEXT",
            Self::InLeague => "IN_LEAGUE",
            Self::InCountry => "IN_COUNTRY",
            Self::HasMatchEvent => "HAS_MATCH_EVENT",
            Self::EventTeam => "EVENT_TEAM",
            Self::OpponentTeam => "OPPONENT_TEAM",
            Self::Player1 => "PLAYER_1",
            Self::Player2 => "PLAYER_2",
            Self::ShotPlacement => "SHOT_PLACEMENT",
            Self::ShotOutcome => "SHOT_OUTCOME",
            Self::PitchLocation => "PITCH_LOCATION",
            Self::BodyPart => "BODY_PART",
            Self::AssistMethod => "ASSIST_METHOD",
            Self::EventSituation => "EVENT_SITUATION",
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed, typed edge without properties.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relationship {
    pub start: NodeId,
    pub end: NodeId,
    pub kind: RelationType,
}

impl Relationship {
    pub fn new(start: NodeId, end: NodeId, kind: RelationType) -> Self {
        Self { start, end, kind }
    }
}

//! Fixed code → label enumerations shipped with the event dataset.
//!
//! These tables are not derived from the data. Event rows reference them by
//! numeric code, and the context enumerations are emitted once as
//! `MatchEventContext` nodes.

use crate::error::{FootgraphError, FootgraphResult};
use crate::model::{NodeLabel, RelationType};

/// Event-type code → node label.
pub const EVENT_TYPES: [(u32, NodeLabel); 16] = [
    (0, NodeLabel::Announcement),
    (1, NodeLabel::ShotAttempt),
    (2, NodeLabel::Corner),
    (3, NodeLabel::Foul),
    (4, NodeLabel::YellowCard),
    (5, NodeLabel::SecondYellowCard),
    (6, NodeLabel::RedCard),
    (7, NodeLabel::Substitution),
    (8, NodeLabel::FreeKickWon),
    (9, NodeLabel::Offside),
    (10, NodeLabel::Handball),
    (11, NodeLabel::PenaltyConceded),
    (12, NodeLabel::KeyPass),
    (13, NodeLabel::FailedThroughBall),
    (14, NodeLabel::SendingOff),
    (15, NodeLabel::OwnGoal),
];

const ASSIST_METHODS: &[(u32, &str)] = &[
    (0, "None"),
    (1, "Pass"),
    (2, "Cross"),
    (3, "Headed pass"),
    (4, "Through ball"),
];

const BODY_PARTS: &[(u32, &str)] = &[(1, "right foot"), (2, "left foot"), (3, "head")];

const SITUATIONS: &[(u32, &str)] = &[
    (1, "Open play"),
    (2, "Set piece"),
    (3, "Corner"),
    (4, "Free kick"),
];

const PITCH_LOCATIONS: &[(u32, &str)] = &[
    (1, "Attacking half"),
    (2, "Defensive half"),
    (3, "Centre of the box"),
    (4, "Left wing"),
    (5, "Right wing"),
    (6, "Difficult angle and long range"),
    (7, "Difficult angle on the left"),
    (8, "Difficult angle on the right"),
    (9, "Left side of the box"),
    (10, "Left side of the six yard box"),
    (11, "Right side of the box"),
    (12, "Right side of the six yard box"),
    (13, "Very close range"),
    (14, "Penalty spot"),
    (15, "Outside the box"),
    (16, "Long range"),
    (17, "More than 35 yards"),
    (18, "More than 40 yards"),
    (19, "Not recorded"),
];

const SHOT_OUTCOMES: &[(u32, &str)] = &[
    (1, "On target"),
    (2, "Off target"),
    (3, "Blocked"),
    (4, "Hit the bar"),
];

const SHOT_PLACEMENTS: &[(u32, &str)] = &[
    (1, "Bit too high"),
    (2, "Blocked"),
    (3, "Bottom left corner"),
    (4, "Bottom right corner"),
    (5, "Centre of the goal"),
    (6, "High and wide"),
    (7, "Hits the bar"),
    (8, "Misses to the left"),
    (9, "Misses to the right"),
    (10, "Too high"),
    (11, "Top centre of the goal"),
    (12, "Top left corner"),
    (13, "Top right corner"),
];

/// Interpret a raw numeric cell as a category code.
///
/// `None` and NaN mean "absent". Any other value must be a non-negative
/// integer, otherwise it is reported as an unknown code.
pub fn category_code(category: &'static str, raw: Option<f64>) -> FootgraphResult<Option<u32>> {
    match raw {
        None => Ok(None),
        Some(v) if v.is_nan() => Ok(None),
        Some(v) if v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 => Ok(Some(v as u32)),
        Some(v) => Err(FootgraphError::UnknownCategoryCode { category, code: v }),
    }
}

/// Resolve an event-type cell to its label. Absent cells resolve to `None`.
pub fn event_type_label(raw: Option<f64>) -> FootgraphResult<Option<NodeLabel>> {
    let Some(code) = category_code("event type", raw)? else {
        return Ok(None);
    };
    EVENT_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| Some(*label))
        .ok_or(FootgraphError::UnknownCategoryCode {
            category: "event type",
            code: f64::from(code),
        })
}

/// The fixed enumerations an event can point at through a context node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextCategory {
    AssistMethod,
    BodyPart,
    Situation,
    PitchLocation,
    ShotOutcome,
    ShotPlacement,
}

impl ContextCategory {
    /// Emission order of the context enumerations.
    pub const ALL: [ContextCategory; 6] = [
        ContextCategory::AssistMethod,
        ContextCategory::BodyPart,
        ContextCategory::Situation,
        ContextCategory::PitchLocation,
        ContextCategory::ShotOutcome,
        ContextCategory::ShotPlacement,
    ];

    /// Order in which an event row's context references are emitted.
    pub const EVENT_ORDER: [ContextCategory; 6] = [
        ContextCategory::ShotPlacement,
        ContextCategory::ShotOutcome,
        ContextCategory::PitchLocation,
        ContextCategory::BodyPart,
        ContextCategory::AssistMethod,
        ContextCategory::Situation,
    ];

    /// Component used in the context node id.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::AssistMethod => "AM",
            Self::BodyPart => "BP",
            Self::Situation => "SI",
            Self::PitchLocation => "PL",
            Self::ShotOutcome => "SO",
            Self::ShotPlacement => "SP",
        }
    }

    /// Value of the `category` property on context nodes.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AssistMethod => "assistMethod",
            Self::BodyPart => "bodyPart",
            Self::Situation => "situation",
            Self::PitchLocation => "pitchLocation",
            Self::ShotOutcome => "shotOutcome",
            Self::ShotPlacement => "shotPlacement",
        }
    }

    /// Relationship type from an event to a node of this category.
    pub fn relation(&self) -> RelationType {
        match self {
            Self::AssistMethod => RelationType::AssistMethod,
            Self::BodyPart => RelationType::BodyPart,
            Self::Situation => RelationType::EventSituation,
            Self::PitchLocation => RelationType::PitchLocation,
            Self::ShotOutcome => RelationType::ShotOutcome,
            Self::ShotPlacement => RelationType::ShotPlacement,
        }
    }

    pub fn entries(&self) -> &'static [(u32, &'static str)] {
        match self {
            Self::AssistMethod => ASSIST_METHODS,
            Self::BodyPart => BODY_PARTS,
            Self::Situation => SITUATIONS,
            Self::PitchLocation => PITCH_LOCATIONS,
            Self::ShotOutcome => SHOT_OUTCOMES,
            Self::ShotPlacement => SHOT_PLACEMENTS,
        }
    }

    pub fn text_of(&self, code: u32) -> Option<&'static str> {
        self.entries()
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, text)| *text)
    }

    /// Resolve a raw cell to a code of this enumeration.
    ///
    /// Absent cells give `Ok(None)`; codes outside the enumeration are an
    /// error rather than a silently dropped reference.
    pub fn resolve(&self, raw: Option<f64>) -> FootgraphResult<Option<u32>> {
        let Some(code) = category_code(self.name(), raw)? else {
            return Ok(None);
        };
        match self.text_of(code) {
            Some(_) => Ok(Some(code)),
            None => Err(FootgraphError::UnknownCategoryCode {
                category: self.name(),
                code: f64::from(code),
            }),
        }
    }
}

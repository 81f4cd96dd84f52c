//! The closed position taxonomy: `Position` → `PositionGroup` → `PositionLine`.
//!
//! Parsing is total. Anything the data provider sends that is not one of the ten
//! canonical positions becomes `Position::Other`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionLine {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
    Other,
}

impl PositionLine {
    pub fn name(&self) -> &'static str {
        match self {
            PositionLine::Goalkeeper => "Goalkeeper",
            PositionLine::Defender => "Defender",
            PositionLine::Midfielder => "Midfielder",
            PositionLine::Attacker => "Attacker",
            PositionLine::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionGroup {
    Goalkeepers,
    FullBacks,
    CentreBacks,
    CentreMidfielders,
    AttackingMidfielders,
    Wingers,
    CentreForwards,
    Other,
}

impl PositionGroup {
    pub fn name(&self) -> &'static str {
        match self {
            PositionGroup::Goalkeepers => "Goalkeepers",
            PositionGroup::FullBacks => "Full backs",
            PositionGroup::CentreBacks => "Centre backs",
            PositionGroup::CentreMidfielders => "Centre midfielders",
            PositionGroup::AttackingMidfielders => "Attacking midfielders",
            PositionGroup::Wingers => "Wingers",
            PositionGroup::CentreForwards => "Centre forwards",
            PositionGroup::Other => "Other",
        }
    }

    pub fn line(&self) -> PositionLine {
        match self {
            PositionGroup::Goalkeepers => PositionLine::Goalkeeper,
            PositionGroup::FullBacks | PositionGroup::CentreBacks => PositionLine::Defender,
            PositionGroup::CentreMidfielders | PositionGroup::AttackingMidfielders => {
                PositionLine::Midfielder
            }
            PositionGroup::Wingers | PositionGroup::CentreForwards => PositionLine::Attacker,
            PositionGroup::Other => PositionLine::Other,
        }
    }
}

/// A flat playing position.
///
/// Serialized as its display name ("Left back"). Deserialization accepts display names,
/// provider codes ("LeftBack") and never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    Goalkeeper,
    LeftBack,
    RightBack,
    CentreBack,
    DefensiveMidfield,
    CentreMidfield,
    AttackingMidfield,
    LeftWing,
    RightWing,
    CentreForward,
    #[default]
    Other,
}

impl Position {
    /// The ten benchmarked positions, in the order position groups are evaluated and reported.
    pub const CANONICAL: [Position; 10] = [
        Position::Goalkeeper,
        Position::CentreBack,
        Position::LeftBack,
        Position::RightBack,
        Position::DefensiveMidfield,
        Position::CentreMidfield,
        Position::AttackingMidfield,
        Position::RightWing,
        Position::LeftWing,
        Position::CentreForward,
    ];

    /// Maps any position label onto the taxonomy. Unknown labels map to `Other`.
    pub fn from_label(label: &str) -> Self {
        let key: String = label
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "goalkeeper" => Position::Goalkeeper,
            "leftback" => Position::LeftBack,
            "rightback" => Position::RightBack,
            "centreback" | "centerback" => Position::CentreBack,
            "defensivemidfield" | "defensivemidfielder" => Position::DefensiveMidfield,
            "centremidfield" | "centralmidfield" | "centremidfielder" | "centermidfield" => {
                Position::CentreMidfield
            }
            "attackingmidfield" | "attackingmidfielder" => Position::AttackingMidfield,
            "leftwing" | "leftwinger" => Position::LeftWing,
            "rightwing" | "rightwinger" => Position::RightWing,
            "centreforward" | "centerforward" => Position::CentreForward,
            _ => Position::Other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::LeftBack => "Left back",
            Position::RightBack => "Right back",
            Position::CentreBack => "Centre back",
            Position::DefensiveMidfield => "Defensive midfield",
            Position::CentreMidfield => "Centre midfield",
            Position::AttackingMidfield => "Attacking midfield",
            Position::LeftWing => "Left wing",
            Position::RightWing => "Right wing",
            Position::CentreForward => "Centre forward",
            Position::Other => "Other",
        }
    }

    /// The compact code used by the player search provider ("LeftBack").
    pub fn code(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::LeftBack => "LeftBack",
            Position::RightBack => "RightBack",
            Position::CentreBack => "CentreBack",
            Position::DefensiveMidfield => "DefensiveMidfield",
            Position::CentreMidfield => "CentreMidfield",
            Position::AttackingMidfield => "AttackingMidfield",
            Position::LeftWing => "LeftWing",
            Position::RightWing => "RightWing",
            Position::CentreForward => "CentreForward",
            Position::Other => "Other",
        }
    }

    pub fn group(&self) -> PositionGroup {
        match self {
            Position::Goalkeeper => PositionGroup::Goalkeepers,
            Position::LeftBack | Position::RightBack => PositionGroup::FullBacks,
            Position::CentreBack => PositionGroup::CentreBacks,
            Position::DefensiveMidfield | Position::CentreMidfield => {
                PositionGroup::CentreMidfielders
            }
            Position::AttackingMidfield => PositionGroup::AttackingMidfielders,
            Position::LeftWing | Position::RightWing => PositionGroup::Wingers,
            Position::CentreForward => PositionGroup::CentreForwards,
            Position::Other => PositionGroup::Other,
        }
    }

    pub fn line(&self) -> PositionLine {
        self.group().line()
    }
}

impl FromStr for Position {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Position::from_label(s))
    }
}

impl From<String> for Position {
    fn from(label: String) -> Self {
        Position::from_label(&label)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.name().to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Day columns and container identifiers.
//!
//! # Invariants
//! - Exactly three days exist, ordered as `DayId::ALL`.
//! - Container wire ids are `floating`, `friday`, `saturday`, `sunday`.

use super::card::Card;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Wire id of the floating (unassigned) card area.
pub const FLOATING_CONTAINER_ID: &str = "floating";

/// One of the fixed day columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayId {
    Friday,
    Saturday,
    Sunday,
}

impl DayId {
    /// All days in column order.
    pub const ALL: [DayId; 3] = [DayId::Friday, DayId::Saturday, DayId::Sunday];

    /// Stable wire id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Column heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Position of this day in `DayId::ALL`.
    pub fn index(self) -> usize {
        match self {
            Self::Friday => 0,
            Self::Saturday => 1,
            Self::Sunday => 2,
        }
    }
}

impl Display for DayId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayId {
    type Err = ContainerParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            "sunday" => Ok(Self::Sunday),
            other => Err(ContainerParseError(other.to_string())),
        }
    }
}

/// One day column owning its cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub id: DayId,
    pub title: String,
    pub cards: Vec<Card>,
}

impl Day {
    /// Creates an empty column for `id`.
    pub fn empty(id: DayId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            cards: Vec::new(),
        }
    }
}

/// A place a card can live in: the floating area or one day column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerId {
    Floating,
    Day(DayId),
}

impl ContainerId {
    /// Maps an optional day to its container; `None` means floating.
    pub fn from_day(day_id: Option<DayId>) -> Self {
        day_id.map_or(Self::Floating, Self::Day)
    }

    /// Day owning this container, `None` for the floating area.
    pub fn day_id(self) -> Option<DayId> {
        match self {
            Self::Floating => None,
            Self::Day(day_id) => Some(day_id),
        }
    }

    /// Stable wire id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Floating => FLOATING_CONTAINER_ID,
            Self::Day(day_id) => day_id.as_str(),
        }
    }
}

impl Display for ContainerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerId {
    type Err = ContainerParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed == FLOATING_CONTAINER_ID {
            return Ok(Self::Floating);
        }
        trimmed.parse::<DayId>().map(Self::Day)
    }
}

/// Unknown container or day id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerParseError(pub String);

impl Display for ContainerParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown container `{}`; expected floating|friday|saturday|sunday",
            self.0
        )
    }
}

impl Error for ContainerParseError {}

#[cfg(test)]
mod tests {
    use super::{ContainerId, DayId};

    #[test]
    fn container_ids_parse_and_display_symmetrically() {
        for raw in ["floating", "friday", "saturday", "sunday"] {
            let parsed: ContainerId = raw.parse().unwrap();
            assert_eq!(parsed.to_string(), raw);
        }
    }

    #[test]
    fn unknown_container_is_rejected() {
        let err = "monday".parse::<ContainerId>().unwrap_err();
        assert!(err.to_string().contains("monday"));
        assert!("Friday".parse::<DayId>().is_err());
    }

    #[test]
    fn day_index_matches_column_order() {
        for (position, day_id) in DayId::ALL.iter().enumerate() {
            assert_eq!(day_id.index(), position);
        }
    }
}

//! Dimension catalog.
//!
//! # Responsibility
//! - Define the closed set of thematic dimensions a task can belong to.
//! - Expose the static display catalog consumed by presentation layers.
//!
//! # Invariants
//! - The catalog holds exactly one record per `Dimension`, in declaration order.
//! - Catalog records are `'static` and never mutated.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Thematic category that owns a task for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Cyberpunk metropolis.
    #[default]
    Cyber,
    /// Realm of magic.
    Magic,
    /// Cosmic void.
    Void,
}

impl Dimension {
    /// All dimensions in catalog order.
    pub const ALL: [Dimension; 3] = [Dimension::Cyber, Dimension::Magic, Dimension::Void];

    /// Stable lowercase id used on the wire and in user input.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cyber => "cyber",
            Self::Magic => "magic",
            Self::Void => "void",
        }
    }

    /// Static display record for this dimension.
    pub fn info(self) -> &'static DimensionInfo {
        match self {
            Self::Cyber => &DIMENSIONS[0],
            Self::Magic => &DIMENSIONS[1],
            Self::Void => &DIMENSIONS[2],
        }
    }

    /// Human-facing display name, e.g. `Neon Overdrive`.
    pub fn display_name(self) -> &'static str {
        self.info().name
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name one of the three dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDimensionError(pub String);

impl Display for ParseDimensionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown dimension `{}`; expected cyber|magic|void",
            self.0
        )
    }
}

impl Error for ParseDimensionError {}

impl FromStr for Dimension {
    type Err = ParseDimensionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cyber" => Ok(Self::Cyber),
            "magic" => Ok(Self::Magic),
            "void" => Ok(Self::Void),
            other => Err(ParseDimensionError(other.to_string())),
        }
    }
}

/// Static descriptive record for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionInfo {
    pub id: Dimension,
    pub name: &'static str,
    pub description: &'static str,
    /// Icon key resolved by the presentation layer.
    pub icon: &'static str,
    /// Background style class resolved by the presentation layer.
    pub bg_class: &'static str,
}

/// Fixed dimension catalog.
pub static DIMENSIONS: [DimensionInfo; 3] = [
    DimensionInfo {
        id: Dimension::Cyber,
        name: "Neon Overdrive",
        description: "Tasks in the cyberpunk metropolis. Fast-paced and tech-driven.",
        icon: "zap",
        bg_class: "cyber-bg",
    },
    DimensionInfo {
        id: Dimension::Magic,
        name: "Arcane Wonders",
        description: "Tasks in a realm of magic and wonder. Creative and inspiring.",
        icon: "sparkles",
        bg_class: "magic-bg",
    },
    DimensionInfo {
        id: Dimension::Void,
        name: "Void Runner",
        description: "Tasks in the cosmic void. Deep focus and profound importance.",
        icon: "orbit",
        bg_class: "void-bg",
    },
];

/// Looks up a catalog record by raw id.
///
/// Unknown ids fall back to the first catalog entry so display code always
/// has something to render. Use `Dimension::from_str` for strict parsing.
pub fn dimension_info_by_id(id: &str) -> &'static DimensionInfo {
    id.parse::<Dimension>()
        .map(Dimension::info)
        .unwrap_or(&DIMENSIONS[0])
}

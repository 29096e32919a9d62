//! Time filter selector.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// View selector partitioning pending tasks by due-date bucket, or selecting
/// completed tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFilter {
    #[default]
    Today,
    Tomorrow,
    Upcoming,
    Archived,
}

impl TimeFilter {
    pub const ALL: [TimeFilter; 4] = [
        TimeFilter::Today,
        TimeFilter::Tomorrow,
        TimeFilter::Upcoming,
        TimeFilter::Archived,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::Upcoming => "upcoming",
            Self::Archived => "archived",
        }
    }

    /// Heading shown above a filtered list.
    pub fn title(self) -> &'static str {
        match self {
            Self::Today => "Today's Tasks",
            Self::Tomorrow => "Tomorrow's Tasks",
            Self::Upcoming => "Upcoming Tasks",
            Self::Archived => "Completed Tasks",
        }
    }

    /// Placeholder shown when the filtered list is empty.
    pub fn empty_message(self) -> &'static str {
        match self {
            Self::Today => "No tasks for today in this dimension. Add one!",
            Self::Tomorrow => "Tomorrow looks clear in this dimension. Plan ahead?",
            Self::Upcoming => "No upcoming tasks in this dimension. The future is unwritten.",
            Self::Archived => "No completed tasks in this dimension. Get to work!",
        }
    }
}

impl Display for TimeFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeFilterError(pub String);

impl Display for ParseTimeFilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown time filter `{}`; expected today|tomorrow|upcoming|archived",
            self.0
        )
    }
}

impl Error for ParseTimeFilterError {}

impl FromStr for TimeFilter {
    type Err = ParseTimeFilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "tomorrow" => Ok(Self::Tomorrow),
            "upcoming" => Ok(Self::Upcoming),
            "archived" => Ok(Self::Archived),
            other => Err(ParseTimeFilterError(other.to_string())),
        }
    }
}

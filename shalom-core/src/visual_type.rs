use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two disjoint collections of the archive.
///
/// Every record belongs to exactly one of them. The short name doubles as
/// the media directory segment (`/dove/`, `/hawk/`) used for asset matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VisualType {
    Dove,
    Hawk,
}

const ALL_TYPES: &[VisualType] = &[VisualType::Dove, VisualType::Hawk];

impl VisualType {
    /// Lower-case name used for CLI arguments and media folder segments.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Dove => "dove",
            Self::Hawk => "hawk",
        }
    }

    /// Name as it appears in the source table's `Type` column.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Dove => "Dove",
            Self::Hawk => "Hawk",
        }
    }

    /// Both variants, Dove first.
    pub fn all() -> &'static [VisualType] {
        ALL_TYPES
    }
}

impl std::fmt::Display for VisualType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `VisualType`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown visual type: '{0}'")]
pub struct VisualTypeParseError(pub String);

impl std::str::FromStr for VisualType {
    type Err = VisualTypeParseError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_TYPES
            .iter()
            .copied()
            .find(|t| t.short_name() == lower)
            .ok_or_else(|| VisualTypeParseError(s.to_string()))
    }
}

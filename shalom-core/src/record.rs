//! The archive record and the field-level parsing rules used to build it.

use serde::{Deserialize, Serialize};

use crate::visual_type::VisualType;

/// A single visual artifact of the archive.
///
/// Records are immutable once created. Fields that could not be read from
/// the source row degrade to a default instead of failing the row:
/// empty `text`, empty `tags`, `year: None`, empty `file_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display and search key, also used to match the media asset.
    pub visual_name: String,
    pub visual_type: VisualType,
    pub headline: String,
    /// May be empty.
    pub text: String,
    /// Tags in source order. Treated as a set for membership tests.
    pub tags: Vec<String>,
    /// `None` when the `Year` column did not start with an integer.
    pub year: Option<i32>,
    /// Path of the matched media asset, or empty when nothing matched.
    pub file_path: String,
}

impl Record {
    /// Returns true if `tag` is one of this record's tags (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Returns true if a media asset was matched for this record.
    pub fn has_asset(&self) -> bool {
        !self.file_path.is_empty()
    }
}

/// Parse a year with leading-integer semantics.
///
/// Surrounding whitespace and an optional sign are accepted, then as many
/// decimal digits as are present; anything after them is ignored
/// (`"1979 (approx)"` parses as 1979). Returns `None` when no digit leads the
/// value or the number does not fit in an `i32`.
pub fn parse_year(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value: i64 = rest[..digits_end].parse().ok()?;
    let value = if negative { -value } else { value };
    i32::try_from(value).ok()
}

/// Split a raw `Tags` cell into tags.
///
/// Tags are separated by newlines or commas. Each token is trimmed and empty
/// tokens are dropped; order is preserved.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

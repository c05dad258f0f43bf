//! View-state inputs driving the displayed repository list.
//!
//! The displayed list is always a pure function of (last-fetched list,
//! [`ViewState`]); these types carry no behavior beyond parsing and
//! formatting the sort selection.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Field a repository list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    CreatedAt,
    Stars,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::CreatedAt => write!(f, "created_at"),
            SortField::Stars => write!(f, "stars"),
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(SortField::CreatedAt),
            "stars" => Ok(SortField::Stars),
            other => Err(format!("invalid sort field: '{other}'")),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("invalid sort order: '{other}'")),
        }
    }
}

/// A sort selection: field plus direction.
///
/// Parses from and formats to the `"{field}-{order}"` textual form
/// (e.g. `"created_at-desc"`, `"stars-asc"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortKey {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

impl Default for SortKey {
    /// Newest repositories first.
    fn default() -> Self {
        Self::new(SortField::CreatedAt, SortOrder::Desc)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.field, self.order)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, order) = s
            .rsplit_once('-')
            .ok_or_else(|| format!("invalid sort key: '{s}' (expected '{{field}}-{{order}}')"))?;
        Ok(Self {
            field: field.parse()?,
            order: order.parse()?,
        })
    }
}

/// The combination of search, filter, and sort inputs driving the displayed
/// list. Recomputed on any input change, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Free-text query matched case-insensitively against name, description,
    /// and language.
    pub query: String,
    /// Keep only private repositories.
    pub private_only: bool,
    pub sort: SortKey,
}

impl ViewState {
    pub fn new(query: impl Into<String>, private_only: bool, sort: SortKey) -> Self {
        Self {
            query: query.into(),
            private_only,
            sort,
        }
    }
}

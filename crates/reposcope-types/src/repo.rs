use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// A repository record as viewed through reposcope.
///
/// Records are immutable once fetched and replaced wholesale on each fetch;
/// there is no partial update path. The wire shape (GitHub JSON field names)
/// lives in the infra layer and converts into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    /// Forge-assigned identifier (unique, stable across renames).
    pub id: u64,
    pub name: String,
    /// Short description; absent for many repositories.
    pub description: Option<String>,
    /// Web URL of the repository page.
    pub web_url: String,
    pub created_at: DateTime<Utc>,
    /// Star count, non-negative.
    pub stars: u32,
    /// Primary language tag as reported by the forge.
    pub language: Option<String>,
    pub visibility: Visibility,
}

impl Repo {
    /// Whether this repository is private.
    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }
}

/// Repository visibility as reported by the forge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            other => Err(format!("invalid visibility: '{other}'")),
        }
    }
}

//! Wire types for the GitHub REST v3 API.
//!
//! Field names follow the JSON the API emits; conversion into the domain
//! [`Repo`] type happens here so nothing above this module sees
//! `stargazers_count` or `html_url` spellings.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use reposcope_types::repo::{Repo, Visibility};

/// A repository as returned by `/user/repos` and `/users/{user}/repos`.
///
/// The API returns far more fields; serde ignores the rest.
#[derive(Debug, Deserialize)]
pub(crate) struct GithubRepo {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub stargazers_count: u32,
    pub language: Option<String>,
    pub private: bool,
}

impl From<GithubRepo> for Repo {
    fn from(raw: GithubRepo) -> Self {
        Repo {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            web_url: raw.html_url,
            created_at: raw.created_at,
            stars: raw.stargazers_count,
            language: raw.language,
            visibility: if raw.private {
                Visibility::Private
            } else {
                Visibility::Public
            },
        }
    }
}

/// The authenticated account, from `GET /user`.
#[derive(Debug, Deserialize)]
pub(crate) struct GithubUser {
    pub login: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 1296269,
        "name": "Hello-World",
        "full_name": "octocat/Hello-World",
        "description": "This your first repo!",
        "html_url": "https://github.com/octocat/Hello-World",
        "created_at": "2011-01-26T19:01:12Z",
        "updated_at": "2011-01-26T19:14:43Z",
        "stargazers_count": 80,
        "watchers_count": 80,
        "language": null,
        "private": false,
        "fork": false
    }"#;

    #[test]
    fn test_parse_and_convert_repo() {
        let raw: GithubRepo = serde_json::from_str(SAMPLE).unwrap();
        let repo: Repo = raw.into();

        assert_eq!(repo.id, 1296269);
        assert_eq!(repo.name, "Hello-World");
        assert_eq!(repo.description.as_deref(), Some("This your first repo!"));
        assert_eq!(repo.web_url, "https://github.com/octocat/Hello-World");
        assert_eq!(repo.stars, 80);
        assert_eq!(repo.language, None);
        assert_eq!(repo.visibility, Visibility::Public);
        assert_eq!(repo.created_at.to_rfc3339(), "2011-01-26T19:01:12+00:00");
    }

    #[test]
    fn test_private_flag_maps_to_visibility() {
        let json = SAMPLE.replace("\"private\": false", "\"private\": true");
        let raw: GithubRepo = serde_json::from_str(&json).unwrap();
        assert_eq!(Repo::from(raw).visibility, Visibility::Private);
    }

    #[test]
    fn test_parse_user() {
        let user: GithubUser = serde_json::from_str(r#"{"login": "octocat", "id": 1}"#).unwrap();
        assert_eq!(user.login, "octocat");
    }
}

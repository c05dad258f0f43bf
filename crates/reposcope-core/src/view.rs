//! The view-state reducer.
//!
//! [`apply_view`] is the explicit pure function the displayed list is derived
//! from: (fetched list, view state) -> ordered sequence. It is invoked on
//! every input change; nothing here caches or schedules.

use reposcope_types::repo::Repo;
use reposcope_types::view::{SortField, SortOrder, ViewState};

/// Derive the displayed repository sequence from the last-fetched list and
/// the current view state.
///
/// - `private_only` keeps only private repositories.
/// - A non-empty query keeps repositories whose name, description, or
///   language contains it case-insensitively; absent fields never match.
/// - The result is sorted by the selected field and direction. Ties are
///   broken arbitrarily (stable order is not guaranteed).
///
/// Every returned record comes from the input list; the reducer never
/// invents or mutates entries.
pub fn apply_view(repos: &[Repo], view: &ViewState) -> Vec<Repo> {
    if repos.is_empty() {
        return Vec::new();
    }

    let query = view.query.to_lowercase();

    let mut filtered: Vec<Repo> = repos
        .iter()
        .filter(|repo| !view.private_only || repo.is_private())
        .filter(|repo| query.is_empty() || matches_query(repo, &query))
        .cloned()
        .collect();

    match view.sort.field {
        SortField::CreatedAt => filtered.sort_unstable_by_key(|r| r.created_at),
        SortField::Stars => filtered.sort_unstable_by_key(|r| r.stars),
    }
    if view.sort.order == SortOrder::Desc {
        filtered.reverse();
    }

    filtered
}

/// Case-insensitive substring match over name, description, and language.
/// `query` must already be lowercased.
fn matches_query(repo: &Repo, query: &str) -> bool {
    repo.name.to_lowercase().contains(query)
        || repo
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(query))
        || repo
            .language
            .as_deref()
            .is_some_and(|l| l.to_lowercase().contains(query))
}

//! Repository listing command: fetch, reduce, render.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use reposcope_core::locator::username_from_path;
use reposcope_core::service::RepoService;
use reposcope_core::view::apply_view;
use reposcope_types::repo::{Repo, Visibility};
use reposcope_types::view::{SortKey, ViewState};

use crate::state::AppState;

/// Fetch and display a user's repositories.
///
/// # Examples
///
/// ```bash
/// rscope repos u1i
/// rscope repos /u1i --query dash --sort stars-desc
/// rscope repos u1i --private-only
/// ```
pub async fn list_repos(
    state: &AppState,
    user: &str,
    query: &str,
    private_only: bool,
    sort: &str,
    json: bool,
) -> Result<()> {
    let username = username_from_path(user)
        .ok_or_else(|| anyhow::anyhow!("no username found in '{user}'"))?;
    let sort: SortKey = sort.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Fetching repositories for {username}..."));
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let client = state.github_client().await?;
    let service = RepoService::new(client);
    let fetched = service.fetch_repos(&username).await;

    spinner.finish_and_clear();

    let repos = fetched?;
    let view = ViewState::new(query, private_only, sort);
    let shown = apply_view(&repos, &view);

    if json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!();
        if repos.is_empty() {
            println!(
                "  {} {} has no repositories here.",
                style("i").blue().bold(),
                style(&username).cyan()
            );
        } else {
            println!(
                "  {} No repositories found matching your criteria.",
                style("i").blue().bold()
            );
        }
        println!();
        return Ok(());
    }

    println!();
    println!(
        "  Repositories for {} {}",
        style(&username).cyan().bold(),
        style(format!("(sorted by {})", view.sort)).dim()
    );
    println!();
    println!("{}", render_table(&shown));
    println!();
    println!(
        "  {} of {} repositor{} shown",
        style(shown.len()).bold(),
        repos.len(),
        if repos.len() == 1 { "y" } else { "ies" }
    );
    println!();

    Ok(())
}

fn render_table(repos: &[Repo]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Name").fg(Color::White),
        Cell::new("Visibility").fg(Color::White),
        Cell::new("Stars").fg(Color::White),
        Cell::new("Language").fg(Color::White),
        Cell::new("Created").fg(Color::White),
        Cell::new("Description").fg(Color::White),
    ]);

    for repo in repos {
        let visibility_cell = match repo.visibility {
            Visibility::Public => Cell::new("public").fg(Color::Green),
            Visibility::Private => Cell::new("private").fg(Color::Yellow),
        };

        table.add_row(vec![
            Cell::new(name_cell(repo)).fg(Color::Cyan),
            visibility_cell,
            Cell::new(format!("★ {}", repo.stars)),
            Cell::new(repo.language.as_deref().unwrap_or("-")),
            Cell::new(repo.created_at.format("%Y-%m-%d").to_string()).fg(Color::DarkGrey),
            Cell::new(truncate(repo.description.as_deref().unwrap_or(""), 50)),
        ]);
    }

    table
}

/// Name with the repository page URL beneath it, like the original card
/// linking its title.
fn name_cell(repo: &Repo) -> String {
    format!("{}\n{}", repo.name, repo.web_url)
}

/// Shorten a description to `max` characters, appending an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_name_cell_carries_web_url() {
        let repo = Repo {
            id: 1,
            name: "alpha".to_string(),
            description: Some("first repo".to_string()),
            web_url: "https://github.com/u1i/alpha".to_string(),
            created_at: Utc.with_ymd_and_hms(2023, 4, 1, 0, 0, 0).unwrap(),
            stars: 5,
            language: Some("Rust".to_string()),
            visibility: Visibility::Public,
        };

        assert_eq!(name_cell(&repo), "alpha\nhttps://github.com/u1i/alpha");

        // and the cell actually feeds the rendered table
        let rendered = render_table(std::slice::from_ref(&repo)).to_string();
        assert!(rendered.contains("alpha"));
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 50), "short");
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "x".repeat(60);
        let cut = truncate(&long, 50);
        assert_eq!(cut.chars().count(), 50);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_truncate_is_char_safe() {
        let text = "é".repeat(60);
        assert!(truncate(&text, 50).ends_with("..."));
    }
}

//! Token management CLI commands: set, clear, status.

use anyhow::Result;
use console::style;
use dialoguer::Password;

use reposcope_core::token::TokenService;

use crate::state::AppState;

/// Store the forge access token with a hidden input prompt.
///
/// An empty value clears the stored token, matching the original surface
/// where saving an empty string removed the entry.
///
/// # Examples
///
/// ```bash
/// # Secure prompt (recommended)
/// rscope token set
///
/// # Script/automation mode
/// rscope token set --value ghp_...
/// ```
pub async fn set_token(state: &AppState, value: Option<&str>, json: bool) -> Result<()> {
    let token_value = match value {
        Some(v) => v.to_string(),
        None => Password::new()
            .with_prompt("Enter access token (empty to clear)")
            .allow_empty_password(true)
            .interact()?,
    };

    let cleared = token_value.is_empty();
    state.token_service.set_token(&token_value).await?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "set": !cleared,
                "cleared": cleared,
                "masked": if cleared { None } else { Some(TokenService::mask_token(&token_value)) },
            })
        );
    } else if cleared {
        println!("  {} Token cleared.", style("✓").green().bold());
    } else {
        println!(
            "  {} Token stored ({})",
            style("✓").green().bold(),
            TokenService::mask_token(&token_value)
        );
    }

    Ok(())
}

/// Remove the stored token.
pub async fn clear_token(state: &AppState, json: bool) -> Result<()> {
    state.token_service.clear_token().await?;

    if json {
        println!("{}", serde_json::json!({"cleared": true}));
    } else {
        println!("  {} Token cleared.", style("✓").green().bold());
    }

    Ok(())
}

/// Show whether a token is configured, masked.
pub async fn token_status(state: &AppState, json: bool) -> Result<()> {
    let token = state.token_service.get_token().await?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "configured": token.is_some(),
                "masked": token.as_deref().map(TokenService::mask_token),
            })
        );
        return Ok(());
    }

    match token {
        Some(value) => println!(
            "  {} Token configured ({})",
            style("●").green(),
            TokenService::mask_token(&value)
        ),
        None => println!(
            "  {} No token configured. Store one with: {}",
            style("○").yellow(),
            style("rscope token set").yellow()
        ),
    }

    Ok(())
}

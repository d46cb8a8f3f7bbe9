//! Status command implementation

use chrono::Utc;
use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::output::formatters::format_expiry;
use crate::session::TokenClaims;

/// Run the status command to display login and configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Cloudstash Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
        Config::load_from(config_path)?
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created yet)".dimmed()
        );
        Config::default()
    };

    println!("API URL: {}", opts.resolve_api_url(&config).cyan());
    println!();

    match config.auth_token.as_deref() {
        Some(token) => {
            let username = config.username.as_deref().unwrap_or("unknown user");
            println!("{} Logged in as {}", "✓".green(), username.bold());
            print_token_expiry(token);
        }
        None => {
            println!("{} Not logged in", "✗".red());
            println!("  → Run 'cloudstash login' to start a session");
        }
    }

    println!();
    Ok(())
}

fn print_token_expiry(token: &str) {
    let Some(claims) = TokenClaims::from_token(token) else {
        println!("{} Token expiry unknown", "○".dimmed());
        return;
    };
    let Some(expires_at) = claims.expires_at() else {
        println!("{} Token expiry unknown", "○".dimmed());
        return;
    };

    let description = format_expiry(expires_at, Utc::now());
    if claims.is_expired() {
        println!("{} Token {}", "⚠".yellow(), description);
        println!("  → Run 'cloudstash login' to refresh it");
    } else {
        println!("{} Token {}", "✓".green(), description);
    }
}

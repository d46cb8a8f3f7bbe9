//! Login, signup and logout commands

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{prompt, require_success};
use crate::client::StorageApi;
use crate::error::Result;

/// Run the login command
///
/// A successful login initialises the session and persists the token.
pub async fn login(
    opts: &GlobalOptions,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;

    let username = prompt::username(username, "Username")?;
    let password = prompt::password(password, "Password")?;

    println!("{}", "Logging in...".cyan());
    let outcome = ctx.client.login(&username, &password).await?;
    let login = require_success("Login failed", outcome)?;

    ctx.client.session().init(login.token.clone()).await;
    ctx.config.set_login(&username, &login.token);
    ctx.save_config()?;

    println!("{} Logged in as {}", "✓".green(), username.bold());
    Ok(())
}

/// Run the signup command
pub async fn signup(
    opts: &GlobalOptions,
    invite: String,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let username = prompt::username(username, "Choose a username")?;
    let password = prompt::new_password(password)?;

    println!("{}", "Creating account...".cyan());
    let outcome = ctx.client.signup(&username, &password, &invite).await?;
    let created = require_success("Signup failed", outcome)?;

    let message = if created.message.is_empty() {
        "Account created".to_string()
    } else {
        created.message
    };
    println!("{} {}", "✓".green(), message);
    println!(
        "  → Run {} to start a session",
        format!("cloudstash login -u {}", username).cyan()
    );
    Ok(())
}

/// Run the logout command
pub async fn logout(opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;

    let was_logged_in = ctx.config.clear_login();

    if was_logged_in {
        ctx.save_config()?;
        println!("{} Logged out", "✓".green());
    } else {
        println!("{} Not logged in", "○".dimmed());
    }
    Ok(())
}

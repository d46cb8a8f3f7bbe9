//! Invite code commands

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{prompt, require_success};
use crate::client::{ApiOutcome, Credentials, StorageApi};
use crate::error::{Error, Result};

/// Run the invite verify command
///
/// An invalid or used code is reported with the server's reason and fails the
/// command.
pub async fn verify(opts: &GlobalOptions, code: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    match ctx.client.verify_invite(code).await? {
        ApiOutcome::Success { data } => {
            let message = if data.message.is_empty() {
                "Invite code is valid".to_string()
            } else {
                data.message
            };
            println!("{} {}", "✓".green(), message);
            Ok(())
        }
        ApiOutcome::AuthError { message, .. } => {
            println!("{} {}", "✗".red(), message);
            Err(Error::Other(format!("Invite code {} cannot be used", code)))
        }
        other => require_success("Invite check failed", other).map(|_| ()),
    }
}

/// Run the invite create command
pub async fn create(
    opts: &GlobalOptions,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let username = prompt::username(username, "Admin username")?;
    let password = prompt::password(password, "Admin password")?;
    let admin = Credentials::new(username, password);

    let outcome = ctx.client.generate_invite(&admin).await?;
    let invite = require_success("Invite creation failed", outcome)?;

    println!("{} Invite code: {}", "✓".green(), invite.code.bold());
    println!(
        "  → Share it with: {}",
        format!("cloudstash signup --invite {}", invite.code).cyan()
    );
    Ok(())
}

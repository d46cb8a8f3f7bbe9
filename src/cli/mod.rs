//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod auth;
pub mod completions;
pub mod context;
pub mod files;
pub mod handlers;
pub mod invite;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// Cloudstash CLI - upload and browse files on a Cloudstash server
#[derive(Parser, Debug)]
#[command(name = "cloudstash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(long, global = true, env = "CLOUDSTASH_FORMAT", hide_env = true)]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "CLOUDSTASH_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "CLOUDSTASH_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "CLOUDSTASH_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session token
    Login {
        /// Account username (prompted if omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Account password (prompted if omitted)
        #[arg(long, env = "CLOUDSTASH_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create an account with an invite code
    Signup {
        /// Invite code issued by an administrator
        #[arg(long, short = 'i')]
        invite: String,

        /// Account username (prompted if omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Account password (prompted if omitted)
        #[arg(long, env = "CLOUDSTASH_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// Show login and configuration status
    Status,

    /// Upload one or more files
    Upload {
        /// Files to upload
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Browse stored files
    #[command(subcommand)]
    Files(FilesCommands),

    /// Check or issue invite codes
    #[command(subcommand)]
    Invite(InviteCommands),

    /// Generate shell completions
    #[command(after_help = "\
  bash:   cloudstash completion bash > /etc/bash_completion.d/cloudstash
  zsh:    cloudstash completion zsh > \"${fpath[1]}/_cloudstash\"
  fish:   cloudstash completion fish > ~/.config/fish/completions/cloudstash.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Display version information
    Version,
}

/// File subcommands
#[derive(Subcommand, Debug)]
pub enum FilesCommands {
    /// List stored files
    #[command(visible_alias = "ls")]
    List,
}

/// Invite code subcommands
#[derive(Subcommand, Debug)]
pub enum InviteCommands {
    /// Check whether an invite code can still be used
    Verify {
        /// Invite code to check
        code: String,
    },

    /// Issue a new invite code (admin credentials required)
    Create {
        /// Admin username (prompted if omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Admin password (prompted if omitted)
        #[arg(long, env = "CLOUDSTASH_ADMIN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_login_flags() {
        let cli = Cli::try_parse_from([
            "cloudstash",
            "login",
            "--username",
            "alice",
            "--password",
            "secret",
            "--api-url",
            "http://localhost:8080/api",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8080/api"));
        match cli.command {
            Commands::Login { username, password } => {
                assert_eq!(username.as_deref(), Some("alice"));
                assert_eq!(password.as_deref(), Some("secret"));
            }
            other => panic!("Expected login, got {:?}", other),
        }
    }

    #[test]
    fn test_upload_requires_a_path() {
        assert!(Cli::try_parse_from(["cloudstash", "upload"]).is_err());
    }

    #[test]
    fn test_files_ls_alias() {
        let cli = Cli::try_parse_from(["cloudstash", "files", "ls", "--format", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Files(FilesCommands::List)));
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }
}

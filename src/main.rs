//! Cloudstash CLI - upload and browse files on a Cloudstash server

use clap::Parser;

use cloudstash::cli::{self, Cli, Commands, FilesCommands, GlobalOptions, InviteCommands};
use cloudstash::error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or our own debug output with `--debug`
fn init_logging(debug: bool) {
    let default_filter = if debug { "cloudstash=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { username, password } => cli::auth::login(&opts, username, password).await,
        Commands::Signup {
            invite,
            username,
            password,
        } => cli::auth::signup(&opts, invite, username, password).await,
        Commands::Logout => cli::auth::logout(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Upload { paths } => cli::files::upload(&opts, &paths).await,
        Commands::Files(files_cmd) => match files_cmd {
            FilesCommands::List => cli::files::list(&opts).await,
        },
        Commands::Invite(invite_cmd) => match invite_cmd {
            InviteCommands::Verify { code } => cli::invite::verify(&opts, &code).await,
            InviteCommands::Create { username, password } => {
                cli::invite::create(&opts, username, password).await
            }
        },
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
        Commands::Version => {
            println!("cloudstash version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

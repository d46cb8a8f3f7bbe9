//! Command execution context
//!
//! Loads the config, seeds the session from it and builds the API client.

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::StorageClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists yet)
    pub config: Config,
    /// API client sharing the session seeded from `config`
    pub client: StorageClient,
    /// Output format preference
    pub format: OutputFormat,
    config_path: Option<String>,
}

impl CommandContext {
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default_at(opts.config_ref())?;
        let format = opts.resolve_format(&config);
        let base_url = opts.resolve_api_url(&config);

        log::debug!("Using API at {}", base_url);
        let client = StorageClient::with_base_url(base_url, config.session())?;

        Ok(Self {
            config,
            client,
            format,
            config_path: opts.config.clone(),
        })
    }

    /// Persist the config back to where it was loaded from
    pub fn save_config(&self) -> Result<()> {
        self.config.save_at(self.config_path.as_deref())
    }
}

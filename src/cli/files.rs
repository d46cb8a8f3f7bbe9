//! File upload and listing commands

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::{FileUpload, StorageApi};
use crate::error::Result;
use crate::models::FileDisplay;
use crate::output::Formattable;
use crate::output::formatters::format_bytes;

/// Run the upload command
///
/// Files are uploaded one after another; the first failure stops the run.
pub async fn upload(opts: &GlobalOptions, paths: &[String]) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    warn_if_anonymous(&ctx);

    let mut uploaded = Vec::with_capacity(paths.len());
    for path in paths {
        let file = FileUpload::from_path(path).await?;
        debug!("Uploading {} ({} bytes)", file.file_name, file.len());

        let spinner = upload_spinner(&file);
        let result = ctx.client.upload_file(file).await;
        spinner.finish_and_clear();

        let info = result?;
        eprintln!("{} Uploaded {}", "✓".green(), info.name().bold());
        uploaded.push(info);
    }

    let display: Vec<FileDisplay> = uploaded.iter().map(FileDisplay::from).collect();
    display.print(ctx.format)
}

/// Run the files list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    warn_if_anonymous(&ctx);

    let files = ctx.client.list_files().await?;
    debug!("Fetched {} files", files.len());

    let display: Vec<FileDisplay> = files.into_iter().map(FileDisplay::from).collect();
    display.print(ctx.format)
}

/// Requests still go out without a token; the server decides.
fn warn_if_anonymous(ctx: &CommandContext) {
    if let Err(e) = ctx.config.require_login() {
        warn!("{} Sending request without a token.", e);
    }
}

fn upload_spinner(file: &FileUpload) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!(
        "Uploading {} ({})",
        file.file_name,
        format_bytes(file.len() as u64)
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

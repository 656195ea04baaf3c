//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::CategoryListElement;
use crate::infrastructure::di::ServiceContainer;
use crate::tree_traits::{node_label, TreeNodeConvert};

pub async fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Build { file, compact }) => {
            _build(cli.config.as_deref(), file.as_deref(), *compact).await
        }
        Some(Commands::Tree { file }) => _tree(cli.config.as_deref(), file.as_deref()).await,
        Some(Commands::Home { file }) => _home(cli.config.as_deref(), file.as_deref()).await,
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(cli.config.as_deref()),
            ConfigCommands::Path => _config_path(cli.config.as_deref()),
        },
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

/// Input file from the command line, else `source` from settings.
fn resolve_input(settings: &Settings, file: Option<&Path>) -> CliResult<PathBuf> {
    file.map(Path::to_path_buf)
        .or_else(|| settings.source.clone())
        .ok_or_else(|| {
            CliError::Usage("no input: pass a catalog file or set `source` in config".to_string())
        })
}

async fn load_tree(
    config: Option<&Path>,
    file: Option<&Path>,
) -> CliResult<Vec<CategoryListElement>> {
    let settings = Settings::load(config)?;
    let input = resolve_input(&settings, file)?;
    debug!("load_tree: input={}", input.display());

    let container = ServiceContainer::new(settings, input);
    Ok(container.category_tree.category_tree().await?)
}

#[instrument]
async fn _build(config: Option<&Path>, file: Option<&Path>, compact: bool) -> CliResult<()> {
    let categories = load_tree(config, file).await?;
    let json = if compact {
        serde_json::to_string(&categories)
    } else {
        serde_json::to_string_pretty(&categories)
    }
    .map_err(|e| CliError::Render {
        message: e.to_string(),
    })?;
    output::info(&json);
    Ok(())
}

#[instrument]
async fn _tree(config: Option<&Path>, file: Option<&Path>) -> CliResult<()> {
    let categories = load_tree(config, file).await?;
    output::info(&categories.to_tree_string());
    Ok(())
}

#[instrument]
async fn _home(config: Option<&Path>, file: Option<&Path>) -> CliResult<()> {
    let categories = load_tree(config, file).await?;
    if categories.is_empty() {
        output::warning("no categories");
        return Ok(());
    }

    let shown = categories.iter().filter(|c| c.show_on_home).count();
    output::header(&format!(
        "{} of {} categories on home page",
        shown,
        categories.len()
    ));
    for category in &categories {
        if category.show_on_home {
            output::success(&node_label(category));
        } else {
            output::skipped(&node_label(category));
        }
    }
    Ok(())
}

#[instrument]
fn _config_show(config: Option<&Path>) -> CliResult<()> {
    let settings = Settings::load(config)?;
    output::info(&settings.to_toml()?);
    Ok(())
}

#[instrument]
fn _config_path(config: Option<&Path>) -> CliResult<()> {
    output::header("Config files");
    match global_config_path() {
        Some(path) => {
            let state = if path.exists() { "" } else { " (not found)" };
            output::detail(&format!("global: {}{}", path.display(), state));
        }
        None => output::detail(&"global: unavailable (no home directory)"),
    }
    if let Some(path) = config {
        output::detail(&format!("explicit: {}", path.display()));
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

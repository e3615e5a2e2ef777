//! Command dispatch: maps parsed arguments onto services

use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::IoResultExt;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{global_config_path, local_config_path};
use crate::infrastructure::di::ServiceContainer;

/// Pseudo path used in error context for terminal output.
const STDOUT: &str = "<stdout>";

pub fn execute_command(cli: &Cli, container: &ServiceContainer, work_dir: &Path) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Add { text }) => _add(container, &text.join(" ")),
        Some(Commands::List) => _list(container),
        // a missing id is reported by the id validation, like any other bad id
        Some(Commands::Delete { id }) => _delete(container, id.as_deref().unwrap_or("")),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(container),
            ConfigCommands::Path => _config_path(container, work_dir),
        },
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => {
            Cli::command()
                .print_help()
                .with_path_context("print help to", Path::new(STDOUT))?;
            Ok(())
        }
    }
}

#[instrument(skip(container))]
fn _add(container: &ServiceContainer, text: &str) -> CliResult<()> {
    let service = container.memo_service();
    let note = service.add(text)?;
    debug!("stored as {} in {}", note, service.store().path().display());
    Ok(())
}

#[instrument(skip(container))]
fn _list(container: &ServiceContainer) -> CliResult<()> {
    let notebook = container.memo_service().list()?;
    let mut out = io::stdout().lock();
    let written = notebook
        .notes()
        .iter()
        .try_for_each(|note| writeln!(out, "{}", note))
        .and_then(|()| out.flush());
    match written {
        // reader went away early, e.g. `memo list | head -1`
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed, listing truncated");
            Ok(())
        }
        result => Ok(result.with_path_context("write listing to", Path::new(STDOUT))?),
    }
}

#[instrument(skip(container))]
fn _delete(container: &ServiceContainer, id: &str) -> CliResult<()> {
    let removed = container.memo_service().delete(id)?;
    debug!("removed {:?}", removed.text);
    Ok(())
}

fn _config_show(container: &ServiceContainer) -> CliResult<()> {
    output::info(&container.settings.to_toml()?);
    Ok(())
}

fn _config_path(container: &ServiceContainer, work_dir: &Path) -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::info(&format!("global: {}", path.display())),
        None => output::info("global: <unavailable>"),
    }
    output::info(&format!("local:  {}", local_config_path(work_dir).display()));
    output::info(&format!("data:   {}", container.settings.data_file.display()));
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    output::action("completion", &format!("generating for {shell}"));
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

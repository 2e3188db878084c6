//! Command dispatch: maps parsed arguments onto session operations.

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{Resolved, Session};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::{output, shell};
use crate::config::Settings;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load().map_err(|e| CliError::Config(e.to_string()))?;
    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| settings.default_catalog.clone());

    match &cli.command {
        None | Some(Commands::Shell) => _shell(catalog_path.as_deref()),
        Some(Commands::List) => _list(catalog_path.as_deref()),
        Some(Commands::Info { course_id }) => _info(catalog_path.as_deref(), course_id),
        Some(Commands::Completion { shell }) => _completion(*shell),
    }
}

#[instrument]
fn _shell(catalog_path: Option<&Path>) -> CliResult<()> {
    debug!("catalog_path: {:?}", catalog_path);
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell::run_shell(&mut session, catalog_path, stdin.lock(), &mut stdout)?;
    Ok(())
}

#[instrument]
fn _list(catalog_path: Option<&Path>) -> CliResult<()> {
    let session = load_session(catalog_path)?;
    output::header("Course list:");
    for course in session.catalog() {
        output::info(course);
    }
    Ok(())
}

#[instrument]
fn _info(catalog_path: Option<&Path>, course_id: &str) -> CliResult<()> {
    let session = load_session(catalog_path)?;
    let course_id = course_id.trim().to_uppercase();

    let Some((course, prerequisites)) = session.course_info(&course_id) else {
        output::info(&format!("Course {} not found.", course_id));
        return Ok(());
    };

    output::info(course);
    if prerequisites.is_empty() {
        output::info("Prerequisites: None");
        return Ok(());
    }
    output::info("Prerequisites:");
    for resolved in prerequisites {
        match resolved {
            Resolved::Known(pre) => output::detail(pre),
            Resolved::Unknown(id) => {
                output::detail(&format!("{} (course not found in catalog)", id))
            }
        }
    }
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// Load a one-shot session for the non-interactive commands.
fn load_session(catalog_path: Option<&Path>) -> CliResult<Session> {
    let path = catalog_path.ok_or_else(|| {
        CliError::InvalidArgs("no catalog file given (use --catalog or configure a default)".into())
    })?;

    let mut session = Session::new();
    let summary = session.load(path)?;
    for skipped in &summary.skipped {
        output::warning(&format!(
            "skipping malformed line {}: {}",
            skipped.line_number, skipped.content
        ));
    }
    debug!(inserted = summary.inserted, "session loaded");
    Ok(session)
}

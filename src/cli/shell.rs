//! Interactive planner shell: menu loop over a session.
//!
//! I/O is injected so the loop can be driven from byte buffers in tests.
//! Bad input never terminates the loop; only choice 9 or EOF does.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::application::{Resolved, Session};

/// One of the four valid menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    List,
    Info,
    Exit,
}

impl MenuChoice {
    /// Parse a menu entry from one input line. Total: anything that is not
    /// exactly 1, 2, 3 or 9 yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Load),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Info),
            "9" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Run the menu loop until the user exits or input ends.
///
/// `default_catalog` (from `--catalog` or config) is offered at the load
/// prompt; an empty filename accepts it.
#[instrument(level = "debug", skip(session, input, out))]
pub fn run_shell(
    session: &mut Session,
    default_catalog: Option<&Path>,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> std::io::Result<()> {
    loop {
        print_menu(out)?;

        let Some(line) = read_line(&mut input)? else {
            // EOF: leave quietly, same farewell as choice 9
            writeln!(out, "Thank you for using the course planner.")?;
            return Ok(());
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            if line.trim().parse::<u32>().is_ok() {
                writeln!(out, "ERROR: Invalid choice. Please select 1, 2, 3, or 9.")?;
            } else {
                writeln!(out, "ERROR: Please enter a valid number.")?;
            }
            continue;
        };
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::Load => handle_load(session, default_catalog, &mut input, out)?,
            MenuChoice::List => handle_list(session, out)?,
            MenuChoice::Info => handle_info(session, &mut input, out)?,
            MenuChoice::Exit => {
                writeln!(out, "Thank you for using the course planner.")?;
                return Ok(());
            }
        }
    }
}

fn print_menu(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "===== Course Planner Menu =====")?;
    writeln!(out, "  1. Load Data Structure")?;
    writeln!(out, "  2. Print Course List")?;
    writeln!(out, "  3. Print Course Information")?;
    writeln!(out, "  9. Exit")?;
    write!(out, "Enter your choice: ")?;
    out.flush()
}

fn handle_load(
    session: &mut Session,
    default_catalog: Option<&Path>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> std::io::Result<()> {
    match default_catalog {
        Some(default) => write!(out, "Enter the file name to load [{}]: ", default.display())?,
        None => write!(out, "Enter the file name to load: ")?,
    }
    out.flush()?;

    let Some(line) = read_line(input)? else {
        return Ok(());
    };
    let filename = line.trim();
    let path: PathBuf = match (filename.is_empty(), default_catalog) {
        (true, Some(default)) => default.to_path_buf(),
        _ => PathBuf::from(filename),
    };

    match session.load(&path) {
        Ok(summary) => {
            for skipped in &summary.skipped {
                writeln!(
                    out,
                    "WARNING: Skipping malformed line {}: {}",
                    skipped.line_number, skipped.content
                )?;
            }
            writeln!(
                out,
                "Courses successfully loaded from '{}' ({} courses).",
                path.display(),
                summary.inserted
            )?;
        }
        Err(e) => writeln!(out, "ERROR: {}.", e)?,
    }
    Ok(())
}

fn handle_list(session: &Session, out: &mut impl Write) -> std::io::Result<()> {
    if !session.is_ready() {
        writeln!(out, "Please load the data structure first (option 1).")?;
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "Here is a sample schedule:")?;
    for course in session.catalog() {
        writeln!(out, "{}", course)?;
    }
    Ok(())
}

fn handle_info(
    session: &Session,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> std::io::Result<()> {
    if !session.is_ready() {
        writeln!(out, "Please load the data structure first (option 1).")?;
        return Ok(());
    }

    write!(out, "Enter course number (e.g., CS300): ")?;
    out.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(());
    };
    let course_id = line.trim().to_uppercase();

    let Some((course, prerequisites)) = session.course_info(&course_id) else {
        writeln!(out, "Course {} not found.", course_id)?;
        return Ok(());
    };

    writeln!(out, "{}", course)?;
    if prerequisites.is_empty() {
        writeln!(out, "Prerequisites: None")?;
        return Ok(());
    }
    writeln!(out, "Prerequisites:")?;
    for resolved in prerequisites {
        match resolved {
            Resolved::Known(pre) => writeln!(out, "  {}", pre)?,
            Resolved::Unknown(id) => writeln!(out, "  {} (course not found in catalog)", id)?,
        }
    }
    Ok(())
}

/// Read one line, `None` on EOF.
fn read_line(input: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut buf = String::new();
    let n = input.read_line(&mut buf)?;
    if n == 0 {
        Ok(None)
    } else {
        Ok(Some(buf))
    }
}

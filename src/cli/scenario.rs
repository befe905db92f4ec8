//! Code related to the built-in scenarios and the CLI commands for interacting with them.
use super::{RunOpts, handle_run_command};
use crate::settings::Settings;
use crate::simulation::SimulationOutcome;
use anyhow::{Context, Result, bail, ensure};
use clap::Subcommand;
use include_dir::{Dir, DirEntry, include_dir};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The directory containing the built-in scenarios.
static SCENARIOS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/scenarios");

/// The available subcommands for managing built-in scenarios.
#[derive(Subcommand)]
pub enum ScenarioSubcommands {
    /// List available scenarios.
    List,
    /// Provide information about the specified scenario.
    Info {
        /// The name of the scenario.
        name: String,
    },
    /// Extract a scenario to a new directory.
    Extract {
        /// The name of the scenario to extract.
        name: String,
        /// The destination folder for the scenario.
        new_path: Option<PathBuf>,
    },
    /// Run a scenario.
    Run {
        /// The name of the scenario to run.
        name: String,
        /// Other run options
        #[command(flatten)]
        opts: RunOpts,
    },
}

impl ScenarioSubcommands {
    /// Execute the supplied scenario subcommand
    pub fn execute(self) -> Result<()> {
        match self {
            Self::List => handle_scenario_list_command(),
            Self::Info { name } => handle_scenario_info_command(&name)?,
            Self::Extract {
                name,
                new_path: dest,
            } => handle_scenario_extract_command(&name, dest.as_deref())?,
            Self::Run { name, opts } => {
                handle_scenario_run_command(&name, &opts, None)?;
            }
        }

        Ok(())
    }
}

/// The names of the built-in scenarios
pub fn scenario_names() -> impl Iterator<Item = &'static str> {
    SCENARIOS_DIR
        .dirs()
        .filter_map(|dir| dir.path().file_name()?.to_str())
}

/// Handle the `scenario list` command.
fn handle_scenario_list_command() {
    for name in scenario_names() {
        println!("{name}");
    }
}

/// Handle the `scenario info` command.
fn handle_scenario_info_command(name: &str) -> Result<()> {
    let path: PathBuf = [name, "README.txt"].iter().collect();
    let readme = SCENARIOS_DIR
        .get_file(path)
        .context("Scenario not found.")?
        .contents_utf8()
        .context("README.txt is not UTF-8 encoded")?;

    println!("{readme}");

    Ok(())
}

/// Handle the `scenario extract` command
fn handle_scenario_extract_command(name: &str, dest: Option<&Path>) -> Result<()> {
    let dest = dest.unwrap_or(Path::new(name));
    extract_scenario(name, dest)
}

/// Extract the specified scenario to a new directory
fn extract_scenario(name: &str, new_path: &Path) -> Result<()> {
    // Find the subdirectory in SCENARIOS_DIR whose name matches `name`.
    let sub_dir = SCENARIOS_DIR.get_dir(name).context("Scenario not found.")?;

    ensure!(
        !new_path.exists(),
        "Destination directory {} already exists",
        new_path.display()
    );

    // Copy the contents of the subdirectory to the destination
    fs::create_dir(new_path)?;
    for entry in sub_dir.entries() {
        match entry {
            DirEntry::Dir(_) => bail!("Subdirectories in scenarios not supported"),
            DirEntry::File(f) => {
                let file_name = f.path().file_name().context("Invalid file in scenario")?;
                let file_path = new_path.join(file_name);
                fs::write(&file_path, f.contents())?;
            }
        }
    }

    Ok(())
}

/// Handle the `scenario run` command.
pub fn handle_scenario_run_command(
    name: &str,
    opts: &RunOpts,
    settings: Option<Settings>,
) -> Result<SimulationOutcome> {
    let temp_dir = TempDir::new().context("Failed to create temporary directory.")?;
    let scenario_path = temp_dir.path().join(name);
    extract_scenario(name, &scenario_path)?;
    handle_run_command(&scenario_path, opts, settings)
}

//! The command line interface for the simulation.
use crate::log;
use crate::output::summary::render_summary;
use crate::output::{create_output_directory, get_output_dir};
use crate::scenario::load_scenario;
use crate::settings::Settings;
use crate::simulation::{SimulationOutcome, run_to_dir};
use ::log::{info, warn};
use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};

pub mod scenario;
use scenario::ScenarioSubcommands;
pub mod settings;
use settings::SettingsSubcommands;

/// The command line interface for the simulation.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Option<Commands>,
    /// Flag to provide the CLI docs as markdown
    #[arg(long, hide = true)]
    markdown_help: bool,
}

/// Options for the run command
#[derive(Args, Default)]
pub struct RunOpts {
    /// Directory for output files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// Whether to overwrite the output directory if it already exists
    #[arg(long)]
    pub overwrite: bool,
    /// Whether to write every mineral order to a CSV file
    #[arg(long)]
    pub debug_output: bool,
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Run a scenario.
    Run {
        /// Path to the scenario directory.
        scenario_dir: PathBuf,
        /// Other run options
        #[command(flatten)]
        opts: RunOpts,
    },
    /// Manage built-in scenarios.
    Scenario {
        /// The available subcommands for managing built-in scenarios.
        #[command(subcommand)]
        subcommand: ScenarioSubcommands,
    },
    /// Validate a scenario.
    Validate {
        /// The path to the scenario directory.
        scenario_dir: PathBuf,
    },
    /// Manage settings file.
    Settings {
        /// The subcommands for managing the settings file.
        #[command(subcommand)]
        subcommand: SettingsSubcommands,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Run { scenario_dir, opts } => {
                handle_run_command(&scenario_dir, &opts, None).map(|_| ())
            }
            Self::Scenario { subcommand } => subcommand.execute(),
            Self::Validate { scenario_dir } => handle_validate_command(&scenario_dir, None),
            Self::Settings { subcommand } => subcommand.execute(),
        }
    }
}

/// Parse CLI arguments and start the program
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Invoked as: `$ lexscopistan --markdown-help`
    if cli.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return Ok(());
    }

    let Some(command) = cli.command else {
        let help_str = Cli::command().render_long_help().to_string();
        println!("{help_str}");
        return Ok(());
    };

    command.execute()
}

/// Handle the `run` command.
///
/// The summary of the run is printed to the console as well as being returned.
pub fn handle_run_command(
    scenario_path: &Path,
    opts: &RunOpts,
    settings: Option<Settings>,
) -> Result<SimulationOutcome> {
    // Load program settings, if not provided
    let settings = if let Some(settings) = settings {
        settings
    } else {
        Settings::load().context("Failed to load settings.")?
    };

    // Get path to output folder
    let pathbuf: PathBuf;
    let output_path = if let Some(p) = opts.output_dir.as_deref() {
        p
    } else {
        pathbuf = get_output_dir(scenario_path)?;
        &pathbuf
    };

    let overwrite = create_output_directory(output_path, opts.overwrite || settings.overwrite)
        .with_context(|| {
            format!(
                "Failed to create output directory: {}",
                output_path.display()
            )
        })?;

    // Initialise program logger
    log::init(&settings.log_level, Some(output_path)).context("Failed to initialise logging.")?;

    // Load the scenario to run
    let scenario = load_scenario(scenario_path).context("Failed to load scenario.")?;
    info!("Loaded scenario from {}", scenario_path.display());
    info!("Output folder: {}", output_path.display());

    // NB: We have to wait until the logger is initialised to display this warning
    if overwrite {
        warn!("Output folder will be overwritten");
    }

    // Run the simulation
    let outcome = run_to_dir(
        scenario,
        scenario_path,
        output_path,
        opts.debug_output || settings.debug_output,
    )?;
    info!("Simulation complete!");

    print!(
        "{}",
        render_summary(&outcome.crop_containers, &outcome.facility)
    );

    Ok(outcome)
}

/// Handle the `validate` command.
pub fn handle_validate_command(scenario_path: &Path, settings: Option<Settings>) -> Result<()> {
    // Load program settings, if not provided
    let settings = if let Some(settings) = settings {
        settings
    } else {
        Settings::load().context("Failed to load settings.")?
    };

    // Initialise program logger (we won't save log files when running the validate command)
    log::init(&settings.log_level, None).context("Failed to initialise logging.")?;

    // Load/validate the scenario
    load_scenario(scenario_path).context("Failed to validate scenario.")?;
    info!("Scenario validation successful!");

    Ok(())
}

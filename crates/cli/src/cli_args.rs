//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. Required values (`--executable-name` for `run`) are left optional
//! here and checked by the launcher, so the error is reported the same way as
//! every other failure.

use clap::{Parser, Subcommand};

/// Command-line arguments for the dlauncher tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use dlauncher_cli::cli_args::Args;
///
/// let args = Args::parse_from(["dlauncher", "run", "-e", "chrome", "-s", "google", "-p", "cats"]);
/// assert!(!args.use_gui());
/// ```
#[derive(Parser, Debug)]
#[command(name = "dlauncher", version, about = "Launch shortcuts with your programs")]
pub struct Args {
    /// Path to the config file YAML.
    ///
    /// If not provided, `DLAUNCHER_CONFIG_PATH` is used, then
    /// `~/.config/dlauncher/config.yaml`.
    #[arg(long, short = 'c', global = true)]
    pub config_path: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Args {
    /// Whether the dialog based interaction was requested.
    #[must_use]
    pub fn use_gui(&self) -> bool {
        match &self.command {
            Commands::Run(run_args) => run_args.use_gui,
            Commands::Add(add_args) => add_args.use_gui,
            Commands::Init => false,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Runs a shortcut with an executable.
    Run(RunArgs),

    /// Creates a default configuration file.
    Init,

    /// Adds a new shortcut to the configuration file.
    Add(AddArgs),
}

#[derive(clap::Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// The program that should execute your shortcut.
    #[arg(long, short = 'e')]
    pub executable_name: Option<String>,

    /// The name of the shortcut. Prompted for if missing.
    #[arg(long, short = 's')]
    pub shortcut_name: Option<String>,

    /// Uses GUI dialogs instead of the terminal.
    #[arg(long, short = 'g', action)]
    pub use_gui: bool,

    /// The params for the shortcut template. Can be repeated.
    #[arg(long, short = 'p', action = clap::ArgAction::Append)]
    pub params: Vec<String>,

    /// Join all params with this separator and substitute them once,
    /// instead of substituting each param separately.
    #[arg(long, short = 'j')]
    pub join_params: Option<String>,

    /// Show the command that would run without launching it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,
}

#[derive(clap::Args, Debug, Default, Clone)]
pub struct AddArgs {
    /// The name of the new shortcut. Prompted for if missing.
    #[arg(long, short = 's')]
    pub shortcut_name: Option<String>,

    /// The template of the new shortcut; `%s` marks where params go.
    /// Prompted for if missing.
    #[arg(long, short = 't')]
    pub template: Option<String>,

    /// Restrict the shortcut to these executables. Can be repeated.
    #[arg(long, short = 'x', action = clap::ArgAction::Append)]
    pub supported_executable: Vec<String>,

    /// Uses GUI dialogs instead of the terminal.
    #[arg(long, short = 'g', action)]
    pub use_gui: bool,
}

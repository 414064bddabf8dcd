//! The `run`, `init` and `add` flows.
//!
//! Each flow takes the config path and the [`Interaction`] it should talk
//! through explicitly; nothing here reads global state.

use itertools::Itertools;
use log::{debug, info};

use dlauncher_core::config;
use dlauncher_core::definitions::Shortcut;
use dlauncher_core::error::{Error, Result};
use dlauncher_core::execution;
use dlauncher_core::resolution::{build_command, split_params, LaunchRequest, SubstitutionPolicy};
use dlauncher_core::store::ConfigStore;

use crate::cli_args::{AddArgs, Args, Commands, RunArgs};
use crate::interaction::Interaction;

const PARAMS_PROMPT: &str = "Params for template, comma separated";

/// Runs the subcommand selected in `args`.
///
/// # Errors
///
/// Returns the first error of the selected flow.
pub fn execute(args: &Args, interaction: &mut dyn Interaction) -> Result<()> {
    let config_path = config::resolve_config_path(args.config_path.as_deref());
    debug!("Config path: `{config_path}`");

    match &args.command {
        Commands::Run(run_args) => run(run_args, &config_path, interaction),
        Commands::Init => init(&config_path, interaction),
        Commands::Add(add_args) => add(add_args, &config_path, interaction),
    }
}

fn required<'a>(value: Option<&'a str>, flag: &str) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingRequiredInput(format!(
            "the `--{flag}` flag must be provided"
        ))),
    }
}

/// Uses `value` if given, otherwise asks for it.
fn value_or_prompt(
    value: Option<&str>,
    flag: &str,
    message: &str,
    interaction: &mut dyn Interaction,
) -> Result<String> {
    if let Ok(value) = required(value, flag) {
        return Ok(value.to_string());
    }

    let answer = interaction.prompt(message)?;
    Ok(required(Some(answer.as_str()), flag)?.to_string())
}

/// Loads the config and launches the requested shortcut.
///
/// The executable name is checked before the config file is touched.
///
/// # Errors
///
/// Returns an error if a required value is missing, a name cannot be found,
/// the command cannot be built or the process cannot be spawned.
pub fn run(args: &RunArgs, config_path: &str, interaction: &mut dyn Interaction) -> Result<()> {
    required(args.executable_name.as_deref(), "executable-name")?;

    let store = ConfigStore::load(config_path)?;
    let request = prepare_launch(args, &store, interaction)?;

    if args.dry_run {
        interaction.debug(&request);
        interaction.info(&format!(
            "Dry run, not launching: {}",
            request.command.iter().join(" ")
        ));
        return Ok(());
    }

    execution::launch(&request.command)
}

/// Resolves names, prompts for whatever is missing and builds the command.
///
/// # Errors
///
/// See [`run`].
pub fn prepare_launch(
    args: &RunArgs,
    store: &ConfigStore,
    interaction: &mut dyn Interaction,
) -> Result<LaunchRequest> {
    let executable_name = required(args.executable_name.as_deref(), "executable-name")?;

    let shortcut_name = value_or_prompt(
        args.shortcut_name.as_deref(),
        "shortcut-name",
        &format!("[{executable_name}] Shortcut name"),
        interaction,
    )?;

    let shortcut = store.get_shortcut(&shortcut_name)?;
    let executable = store.get_executable(executable_name)?;

    let mut params = args.params.clone();
    if shortcut.has_params() && params.is_empty() {
        params = split_params(&interaction.prompt(PARAMS_PROMPT)?);
    }

    let policy = args
        .join_params
        .as_ref()
        .map(|separator| SubstitutionPolicy::Joined {
            separator: separator.clone(),
        })
        .unwrap_or_default();

    let request = build_command(
        executable_name,
        executable,
        &shortcut_name,
        shortcut,
        &params,
        &policy,
    )?;
    info!("Resolved `{shortcut_name}` for `{executable_name}`: {:?}", request.command);

    Ok(request)
}

/// Writes the default config and reports where it went.
///
/// # Errors
///
/// Returns an error if the config file cannot be written.
pub fn init(config_path: &str, interaction: &mut dyn Interaction) -> Result<()> {
    let store = ConfigStore::create_default(config_path)?;
    interaction.info(&format!(
        "Default configuration file created successfully at {}",
        store.path()
    ));
    Ok(())
}

/// Adds a shortcut to the config file.
///
/// # Errors
///
/// Returns an error if a value is missing, the config cannot be loaded, the
/// name is taken or invalid, or the config cannot be written.
pub fn add(args: &AddArgs, config_path: &str, interaction: &mut dyn Interaction) -> Result<()> {
    let mut store = ConfigStore::load(config_path)?;

    let name = value_or_prompt(
        args.shortcut_name.as_deref(),
        "shortcut-name",
        "New shortcut name",
        interaction,
    )?;
    let template = value_or_prompt(
        args.template.as_deref(),
        "template",
        &format!("[{name}] Template (%s marks the params)"),
        interaction,
    )?;

    let shortcut = Shortcut {
        template,
        supported_executables: if args.supported_executable.is_empty() {
            None
        } else {
            Some(args.supported_executable.clone())
        },
    };

    let message = format!("Shortcut `{name}` added: {shortcut}");
    store.add_shortcut(&name, shortcut)?;
    interaction.info(&message);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert_eq!(required(Some("chrome"), "executable-name").unwrap(), "chrome");
        assert_eq!(required(Some(" chrome "), "executable-name").unwrap(), "chrome");
        assert!(matches!(
            required(None, "executable-name"),
            Err(Error::MissingRequiredInput(_))
        ));
        assert!(matches!(
            required(Some("  "), "executable-name"),
            Err(Error::MissingRequiredInput(_))
        ));
    }

    #[test]
    fn test_missing_flag_message_names_flag() {
        let message = required(None, "executable-name").unwrap_err().to_string();
        assert!(message.contains("--executable-name"));
    }
}

//! Configuration path utilities for dlauncher.
//!
//! This module resolves where the config file lives, honouring an explicit
//! path, the `DLAUNCHER_CONFIG_PATH` environment variable and finally the
//! default location under `~/.config`.

use std::env;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV_VAR: &str = "DLAUNCHER_CONFIG_PATH";

/// Default path for the config file
const DEFAULT_CONFIG_PATH: &str = "~/.config/dlauncher/config.yaml";

/// Resolves the configuration file path.
///
/// The first non-empty value of `config_path_arg` and `env_override` is used,
/// falling back to the default path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use dlauncher_core::config::get_config_path;
///
/// let custom_path = get_config_path(None, Some("/path/to/config.yaml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yaml");
/// ```
pub fn get_config_path(config_path_arg: Option<&str>, env_override: Option<String>) -> String {
    let config_path = config_path_arg
        .filter(|path| !path.is_empty())
        .map(ToString::to_string)
        .or_else(|| env_override.filter(|path| !path.is_empty()))
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    shellexpand::tilde(&config_path).to_string()
}

/// Resolves the configuration file path, reading the override from the
/// process environment.
pub fn resolve_config_path(config_path_arg: Option<&str>) -> String {
    get_config_path(config_path_arg, env::var(CONFIG_PATH_ENV_VAR).ok())
}

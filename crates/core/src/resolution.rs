use log::{debug, warn};

use crate::definitions::{Executable, Shortcut, TEMPLATE_MARKER};
use crate::error::{Error, Result};

/// How a list of parameters is applied to a shortcut template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubstitutionPolicy {
    /// Apply the template once per parameter, one resolved argument each.
    #[default]
    PerParameter,
    /// Join every parameter with `separator` and apply the template once.
    Joined { separator: String },
}

/// A fully resolved command, ready to launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub executable_name: String,
    pub shortcut_name: String,
    pub command: Vec<String>,
}

/// Splits a raw prompt response such as `"cats, dogs"` into parameters.
///
/// Pieces are trimmed and empty pieces are dropped.
#[must_use]
pub fn split_params(response: &str) -> Vec<String> {
    response
        .split(',')
        .map(str::trim)
        .filter(|param| !param.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Applies `params` to the template of `shortcut`.
///
/// # Errors
///
/// Returns [`Error::MissingRequiredInput`] if the template has a marker but
/// no parameters were given. Prompting for them is the caller's job.
pub fn resolve_template(
    shortcut: &Shortcut,
    params: &[String],
    policy: &SubstitutionPolicy,
) -> Result<Vec<String>> {
    if !shortcut.has_params() {
        if !params.is_empty() {
            warn!(
                "Template `{}` has no `{TEMPLATE_MARKER}` marker, ignoring params: {:?}",
                shortcut.template, params
            );
        }
        return Ok(vec![shortcut.template.clone()]);
    }

    if params.is_empty() {
        return Err(Error::MissingRequiredInput(format!(
            "params for template `{}`",
            shortcut.template
        )));
    }

    let resolved = match policy {
        SubstitutionPolicy::PerParameter => params
            .iter()
            .map(|param| shortcut.template.replace(TEMPLATE_MARKER, param))
            .collect(),
        SubstitutionPolicy::Joined { separator } => {
            vec![shortcut
                .template
                .replace(TEMPLATE_MARKER, &params.join(separator))]
        }
    };

    debug!("Resolved template `{}` to {:?}", shortcut.template, resolved);
    Ok(resolved)
}

/// Builds the argv: the executable's tokens followed by the resolved strings.
///
/// # Errors
///
/// Returns [`Error::UnsupportedExecutable`] if the shortcut is restricted to
/// other executables, [`Error::EmptyCommand`] if the executable has no
/// tokens, and any error from [`resolve_template`].
pub fn build_command(
    executable_name: &str,
    executable: &Executable,
    shortcut_name: &str,
    shortcut: &Shortcut,
    params: &[String],
    policy: &SubstitutionPolicy,
) -> Result<LaunchRequest> {
    if !shortcut.supports(executable_name) {
        return Err(Error::UnsupportedExecutable {
            shortcut: shortcut_name.to_string(),
            executable: executable_name.to_string(),
            supported: shortcut.supported_executables.clone().unwrap_or_default(),
        });
    }

    if executable.command.is_empty() {
        return Err(Error::EmptyCommand(executable_name.to_string()));
    }

    let mut command = executable.command.clone();
    command.extend(resolve_template(shortcut, params, policy)?);

    Ok(LaunchRequest {
        executable_name: executable_name.to_string(),
        shortcut_name: shortcut_name.to_string(),
        command,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn chrome() -> Executable {
        Executable {
            command: params(&["/usr/bin/google-chrome-stable", "--new-tab"]),
        }
    }

    #[test]
    fn test_split_params() {
        assert_eq!(split_params("cats"), params(&["cats"]));
        assert_eq!(split_params("cats, dogs,birds"), params(&["cats", "dogs", "birds"]));
        assert_eq!(split_params(" , cats,,"), params(&["cats"]));
        assert!(split_params("").is_empty());
    }

    #[test]
    fn test_resolve_without_marker_ignores_params() {
        let shortcut = Shortcut::new("about:blank");
        let policy = SubstitutionPolicy::default();

        assert_eq!(
            resolve_template(&shortcut, &[], &policy).unwrap(),
            params(&["about:blank"])
        );
        assert_eq!(
            resolve_template(&shortcut, &params(&["cats"]), &policy).unwrap(),
            params(&["about:blank"])
        );
    }

    #[test]
    fn test_resolve_with_marker_and_no_params() {
        let shortcut = Shortcut::new("https://www.google.com/search?q=%s");
        let result = resolve_template(&shortcut, &[], &SubstitutionPolicy::PerParameter);
        assert!(matches!(result, Err(Error::MissingRequiredInput(_))));
    }

    #[test]
    fn test_resolve_per_parameter() {
        let shortcut = Shortcut::new("https://www.google.com/search?q=%s");
        let resolved = resolve_template(
            &shortcut,
            &params(&["cats", "dogs"]),
            &SubstitutionPolicy::PerParameter,
        )
        .unwrap();

        assert_eq!(
            resolved,
            params(&[
                "https://www.google.com/search?q=cats",
                "https://www.google.com/search?q=dogs"
            ])
        );
    }

    #[test]
    fn test_resolve_joined() {
        let shortcut = Shortcut::new("https://www.google.com/search?q=%s");
        let resolved = resolve_template(
            &shortcut,
            &params(&["cats", "dogs"]),
            &SubstitutionPolicy::Joined {
                separator: "+".to_string(),
            },
        )
        .unwrap();

        assert_eq!(resolved, params(&["https://www.google.com/search?q=cats+dogs"]));
    }

    #[test]
    fn test_resolve_replaces_every_marker() {
        let shortcut = Shortcut::new("%s/%s");
        let resolved =
            resolve_template(&shortcut, &params(&["x"]), &SubstitutionPolicy::PerParameter)
                .unwrap();
        assert_eq!(resolved, params(&["x/x"]));
    }

    #[test]
    fn test_build_command() {
        let shortcut = Shortcut::new("https://www.google.com/search?q=%s");
        let request = build_command(
            "chrome",
            &chrome(),
            "google",
            &shortcut,
            &params(&["cats"]),
            &SubstitutionPolicy::default(),
        )
        .unwrap();

        assert_eq!(request.executable_name, "chrome");
        assert_eq!(request.shortcut_name, "google");
        assert_eq!(
            request.command,
            params(&[
                "/usr/bin/google-chrome-stable",
                "--new-tab",
                "https://www.google.com/search?q=cats"
            ])
        );
    }

    #[test]
    fn test_build_command_unsupported_executable() {
        let shortcut = Shortcut {
            template: "%s".to_string(),
            supported_executables: Some(params(&["firefox"])),
        };
        let result = build_command(
            "chrome",
            &chrome(),
            "any",
            &shortcut,
            &params(&["cats"]),
            &SubstitutionPolicy::default(),
        );

        assert!(matches!(result, Err(Error::UnsupportedExecutable { .. })));
    }

    #[test]
    fn test_build_command_empty_executable() {
        let result = build_command(
            "nothing",
            &Executable { command: vec![] },
            "blank",
            &Shortcut::new("about:blank"),
            &[],
            &SubstitutionPolicy::default(),
        );

        assert!(matches!(result, Err(Error::EmptyCommand(name)) if name == "nothing"));
    }
}

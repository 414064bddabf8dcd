use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required input: {}", .0)]
    MissingRequiredInput(String),

    #[error("No config file found at `{}`. Run `dlauncher init` to create a default one.", .path)]
    ConfigNotFound { path: String },

    #[error("The shortcut does not exist: `{}`", .0)]
    ShortcutNotFound(String),

    #[error("The executable does not exist: `{}`", .0)]
    ExecutableNotFound(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("Shortcut named `{}` already exists. The template is: `{}`", .name, .template)]
    ShortcutAlreadyExists { name: String, template: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Failed to launch `{}`: {}", .program, .original)]
    Launch {
        program: String,
        original: std::io::Error,
    },

    #[error("Dialog error: {}", .0)]
    Dialog(String),

    #[error("The executable `{}` has an empty command.", .0)]
    EmptyCommand(String),

    #[error("Shortcut `{}` does not support executable `{}`. Supported: {}", .shortcut, .executable, .supported.join(", "))]
    UnsupportedExecutable {
        shortcut: String,
        executable: String,
        supported: Vec<String>,
    },

    #[error("Invalid name `{}`: names may not be empty or contain whitespace", .0)]
    InvalidName(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn launch_error(program: String, original: std::io::Error) -> Self {
        Self::Launch { program, original }
    }

    /// Whether this error is one of the "name or file does not exist" kinds.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. } | Self::ShortcutNotFound(_) | Self::ExecutableNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_kinds() {
        assert!(Error::ShortcutNotFound("google".to_string()).is_not_found());
        assert!(Error::ExecutableNotFound("chrome".to_string()).is_not_found());
        assert!(Error::ConfigNotFound {
            path: "/tmp/config.yaml".to_string()
        }
        .is_not_found());
        assert!(!Error::MissingRequiredInput("executable-name".to_string()).is_not_found());
    }

    #[test]
    fn test_config_not_found_mentions_init() {
        let message = Error::ConfigNotFound {
            path: "/tmp/config.yaml".to_string(),
        }
        .to_string();
        assert!(message.contains("dlauncher init"));
        assert!(message.contains("/tmp/config.yaml"));
    }

    #[test]
    fn test_already_exists_includes_template() {
        let message = Error::ShortcutAlreadyExists {
            name: "google".to_string(),
            template: "https://www.google.com/search?q=%s".to_string(),
        }
        .to_string();
        assert!(message.contains("https://www.google.com/search?q=%s"));
    }
}

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Marker replaced by a parameter value when a shortcut is resolved.
pub const TEMPLATE_MARKER: &str = "%s";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Executable {
    pub command: Vec<String>,
}

impl Display for Executable {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.command.join(" ").as_str())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub template: String,
    #[serde(
        rename = "supportedExecutables",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub supported_executables: Option<Vec<String>>,
}

impl Shortcut {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            supported_executables: None,
        }
    }

    /// True iff the template contains the `%s` marker.
    #[must_use]
    pub fn has_params(&self) -> bool {
        self.template.contains(TEMPLATE_MARKER)
    }

    /// A shortcut without a (non-empty) `supportedExecutables` list works with any executable.
    #[must_use]
    pub fn supports(&self, executable_name: &str) -> bool {
        match &self.supported_executables {
            Some(supported) if !supported.is_empty() => {
                supported.iter().any(|name| name == executable_name)
            }
            _ => true,
        }
    }
}

impl Display for Shortcut {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.template)?;

        if let Some(supported) = &self.supported_executables {
            if !supported.is_empty() {
                write!(formatter, " ({})", supported.join(", "))?;
            }
        }

        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub executables: IndexMap<String, Executable>,
    #[serde(default)]
    pub shortcuts: IndexMap<String, Shortcut>,
}

impl Config {
    /// The starter configuration written by `dlauncher init`.
    #[must_use]
    pub fn starter() -> Self {
        let mut executables = IndexMap::new();
        executables.insert(
            "chrome".to_string(),
            Executable {
                command: vec![
                    "/usr/bin/google-chrome-stable".to_string(),
                    "--new-tab".to_string(),
                ],
            },
        );
        executables.insert(
            "firefox".to_string(),
            Executable {
                command: vec![
                    "/usr/bin/firefox".to_string(),
                    "--new-tab".to_string(),
                    "--url".to_string(),
                ],
            },
        );

        let mut shortcuts = IndexMap::new();
        shortcuts.insert("any".to_string(), Shortcut::new("%s"));
        shortcuts.insert("blank".to_string(), Shortcut::new("about:blank"));
        shortcuts.insert(
            "google".to_string(),
            Shortcut::new("https://www.google.com/search?q=%s"),
        );

        Self {
            executables,
            shortcuts,
        }
    }
}

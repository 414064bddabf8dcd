use std::fmt::Debug;
use std::io::{stderr, Write};
use std::process::{self, Command};

use log::{error, warn};

use dlauncher_core::error::{Error, Result};

use super::Interaction;

/// Program used to show dialogs
const DEFAULT_DIALOG_PROGRAM: &str = "zenity";
const DIALOG_TITLE: &str = "dlauncher";

/// Message dialogs get `--no-markup` so zenity does not read `&` and `<` as Pango markup.
fn dialog_arguments<'a>(kind: &'a str, text: &'a str) -> Vec<&'a str> {
    let mut arguments = vec![kind, "--title", DIALOG_TITLE];
    if kind != "--entry" {
        arguments.push("--no-markup");
    }
    arguments.extend(["--text", text]);
    arguments
}

/// Modal dialogs shown through `zenity` (or a compatible program).
#[derive(Debug, Clone)]
pub struct DialogInteraction {
    program: String,
}

impl Default for DialogInteraction {
    fn default() -> Self {
        Self::with_program(DEFAULT_DIALOG_PROGRAM)
    }
}

impl DialogInteraction {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Runs the dialog program and returns what it printed.
    fn run(&self, kind: &str, text: &str) -> Result<String> {
        let output = Command::new(&self.program)
            .args(dialog_arguments(kind, text))
            .output()
            .map_err(|e| Error::Dialog(format!("could not run `{}`: {e}", self.program)))?;

        if !output.status.success() {
            return Err(Error::Dialog(format!(
                "`{} {kind}` was closed or failed ({})",
                self.program, output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Shows a text entry dialog and returns the typed value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dialog`] if the dialog cannot be shown or is cancelled.
    pub fn entry(&self, message: &str) -> Result<String> {
        self.run("--entry", message)
    }

    fn show(&self, kind: &str, message: &str) {
        self.show_or_write(kind, message, &mut stderr());
    }

    /// Shows a message dialog, writing `message` to `fallback` if that fails.
    fn show_or_write(&self, kind: &str, message: &str, fallback: &mut dyn Write) {
        if let Err(e) = self.run(kind, message) {
            warn!("{e}");
            if let Err(e) = writeln!(fallback, "{message}") {
                warn!("Could not write message: {e}");
            }
        }
    }
}

impl Interaction for DialogInteraction {
    /// A failed entry dialog ends the process with status 1.
    fn prompt(&mut self, message: &str) -> Result<String> {
        match self.entry(message) {
            Ok(answer) => Ok(answer),
            Err(e) => {
                error!("{e}");
                self.error(&e.to_string());
                process::exit(1);
            }
        }
    }

    fn info(&mut self, message: &str) {
        self.show("--info", message);
    }

    fn error(&mut self, message: &str) {
        self.show("--error", message);
    }

    fn debug(&mut self, value: &dyn Debug) {
        self.show("--info", &format!("{value:#?}"));
    }
}

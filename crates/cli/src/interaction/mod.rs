//! Prompting the user and reporting results.
//!
//! Everything the launcher tells or asks the user goes through the
//! [`Interaction`] trait. Two implementations exist:
//! - [`TextInteraction`]: reads answers from a line-based input (stdin) and
//!   writes to stdout/stderr
//! - [`DialogInteraction`]: shows modal dialogs through the `zenity` program

use std::fmt::Debug;

use dlauncher_core::error::Result;

pub mod dialog;
pub mod text;

pub use dialog::DialogInteraction;
pub use text::TextInteraction;

pub trait Interaction {
    /// Asks the user for a value and returns the answer.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer could be read.
    fn prompt(&mut self, message: &str) -> Result<String>;

    fn info(&mut self, message: &str);

    fn error(&mut self, message: &str);

    /// Shows a pretty-printed value, for troubleshooting.
    fn debug(&mut self, value: &dyn Debug);
}

/// Picks the dialog implementation when `use_gui` is set, text otherwise.
#[must_use]
pub fn select(use_gui: bool) -> Box<dyn Interaction> {
    if use_gui {
        Box::new(DialogInteraction::default())
    } else {
        Box::new(TextInteraction::stdio())
    }
}

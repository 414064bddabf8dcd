use std::fmt::Debug;
use std::io::{stderr, stdin, stdout, BufRead, Stderr, StdinLock, Stdout, Write};

use log::warn;

use dlauncher_core::error::{Error, Result};

use super::Interaction;

/// Line based interaction over an input and two output streams.
pub struct TextInteraction<R, W, E> {
    input: R,
    output: W,
    error_output: E,
}

impl TextInteraction<StdinLock<'static>, Stdout, Stderr> {
    /// Reads from stdin, reports to stdout and errors to stderr.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(stdin().lock(), stdout(), stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> TextInteraction<R, W, E> {
    pub fn new(input: R, output: W, error_output: E) -> Self {
        Self {
            input,
            output,
            error_output,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn error_output(&self) -> &E {
        &self.error_output
    }
}

impl<R: BufRead, W: Write, E: Write> Interaction for TextInteraction<R, W, E> {
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}: ")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(Error::MissingRequiredInput(format!(
                "no answer given for `{message}`"
            )));
        }

        Ok(answer.trim().to_string())
    }

    fn info(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{message}") {
            warn!("Could not write message: {e}");
        }
    }

    fn error(&mut self, message: &str) {
        if let Err(e) = writeln!(self.error_output, "{message}") {
            warn!("Could not write error: {e}");
        }
    }

    fn debug(&mut self, value: &dyn Debug) {
        if let Err(e) = writeln!(self.output, "{value:#?}") {
            warn!("Could not write debug value: {e}");
        }
    }
}

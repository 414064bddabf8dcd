use std::process::{Command, Stdio};

use log::info;

use crate::error::{Error, Result};

/// Spawns `command[0]` with the remaining tokens as arguments.
///
/// The child is not waited on; its exit status is never inspected.
///
/// # Errors
///
/// Returns [`Error::EmptyCommand`] for an empty command and
/// [`Error::Launch`] if the process cannot be spawned.
pub fn launch(command: &[String]) -> Result<()> {
    let Some((program, arguments)) = command.split_first() else {
        return Err(Error::EmptyCommand(String::new()));
    };

    info!("Launching `{}` with arguments {:?}", program, arguments);

    let child = Command::new(program)
        .args(arguments)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| Error::launch_error(program.clone(), e))?;

    info!("Launched `{}` as process {}", program, child.id());
    Ok(())
}

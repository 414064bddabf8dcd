use std::process::ExitCode;

use clap::Parser;
use log::error;

use dlauncher_cli::cli_args::Args;
use dlauncher_cli::{interaction, launcher};

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let mut interaction = interaction::select(args.use_gui());

    match launcher::execute(&args, interaction.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            interaction.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

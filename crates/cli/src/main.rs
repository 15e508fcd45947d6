use std::io::{stdout, Write};
use std::process::ExitCode;

use clap::Parser;
use log::error;

use dyn_template_cli::cli_args::Args;
use dyn_template_cli::error::Result;
use dyn_template_cli::render;

fn execute() -> Result<()> {
    let args = Args::parse();

    let mut stdout = stdout().lock();
    render::run(&args, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

use std::process::ExitCode;

use clap::Parser;
use wakastat::cli::Cli;
use wakastat::render::Role;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let palette = cli.palette();

    match cli.run(&palette) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", palette.paint(Role::Error, &format!("{e:#}")));
            ExitCode::FAILURE
        }
    }
}

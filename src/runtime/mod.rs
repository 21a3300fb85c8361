use anyhow::Result;

use crate::cli::{Args, Command};

mod crates;
mod duplicates;
mod logging;
mod settings;
mod show;

pub use logging::init_logging;

pub fn run(args: Args) -> Result<()> {
    let settings = settings::load_settings();

    match args.command {
        Command::Crates(crate_args) => crates::run(&settings, crate_args),
        Command::Fd { dir } => duplicates::run(&settings, &dir),
        Command::Show { crate_file } => show::run(&settings, &crate_file),
        Command::PrintConfig => {
            print!("{}", toml::to_string_pretty(&settings)?);
            Ok(())
        }
    }
}

// src/bin/cli.rs
use color_eyre::eyre::{eyre, Result};
use iseek_export::cli::{self, Parsed};

fn main() -> Result<()> {
    color_eyre::install()?;

    match cli::parse_args(std::env::args().skip(1)).map_err(|e| eyre!("{e}"))? {
        Parsed::Help => {
            eprintln!("{}", cli::help());
            Ok(())
        }
        Parsed::Run(args) => cli::run(args).map_err(|e| eyre!("{e}")),
    }
}

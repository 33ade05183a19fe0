use clap::error::ErrorKind;
use clap::Parser;
use miette::Result;
use tiledex::cli::{Cli, Commands};
use tiledex::Printer;

fn main() -> Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::exit(0),
            _ => std::process::exit(1),
        }
    });
    let printer = Printer::new();

    match cli.command {
        Commands::Label(args) => {
            tiledex::cli::label::run(args, &printer)?;
        }
        Commands::Convert(args) => {
            tiledex::cli::convert::run(args, &printer)?;
        }
        Commands::Dedup(args) => {
            tiledex::cli::dedup::run(args, &printer)?;
        }
        Commands::Completions(args) => tiledex::cli::completions::run(args)?,
    }

    Ok(())
}

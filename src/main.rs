//! chatmodel CLI binary entry point.

use std::io;

use chatmodel::cli::{catalog, Cli, Commands};
use chatmodel::config::CatalogConfig;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let result = match &cli.command {
        Commands::List(args) => catalog::handle_list(args, &mut stdout),
        Commands::Show(args) => catalog::handle_show(args, &mut stdout),
        Commands::Check(args) => CatalogConfig::load_from(cli.config.as_deref())
            .and_then(|config| catalog::handle_check(args, &config, &mut stdout, &mut stderr)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

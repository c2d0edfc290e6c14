mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::context::Context;
use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    let result = Context::resolve(&args).and_then(|ctx| match &args.command {
        Commands::Encrypt { file, output } => {
            cli::commands::encrypt::execute(&ctx, file, output.as_deref())
        }
        Commands::Decrypt { file, output } => {
            cli::commands::decrypt::execute(&ctx, file, output.as_deref())
        }
        Commands::Inspect { file } => cli::commands::inspect::execute(file),
        Commands::Status { watch, interval } => {
            cli::commands::status::execute(&ctx, *watch, *interval)
        }
    });

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}

use clap::{Parser, Subcommand};

mod commands;
mod input;

#[derive(Parser)]
#[command(name = "stencil", version, about = "Schema-driven manifest scaffolding")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a Component manifest from a schema document stream
    Generate(commands::generate::Args),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(&args),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

//! GearHunter data generator runner.
//!
//! Regenerates the TypeScript database sources from the JSON game data
//! and templates checked into the repository.
//!
//! Usage:
//!   cargo run -p datagen_runner -- generate
//!   cargo run -p datagen_runner -- generate --out-dir ../builder/src/database
//!   cargo run -p datagen_runner -- check

mod cmd;

use clap::{Parser, Subcommand};
use cmd::{check, generate};

#[derive(Parser)]
#[command(name = "datagen_runner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate data files and write the generated sources
    Generate(generate::GenerateArgs),

    /// Validate data files without writing anything
    Check(check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::info!("datagen_runner v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(Commands::Generate(args)) => generate::execute(args),
        Some(Commands::Check(args)) => check::execute(args),
        None => {
            // Require explicit subcommand to avoid flag ambiguity at the root.
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}

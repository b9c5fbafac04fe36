//! Democracy Loadout - Entry Point
//!
//! Loads the catalogs, connects to the war status source and answers loadout
//! commands, either once from the command line or in an interactive loop.

use democracy_loadout::catalog::CatalogStore;
use democracy_loadout::command::CommandExecutor;
use democracy_loadout::core::config::{AppConfig, DEFAULT_CONFIG_PATH};
use democracy_loadout::core::error::Result;
use democracy_loadout::loadout::LoadoutComposer;
use democracy_loadout::present::Presenter;
use democracy_loadout::warstatus::{
    SnapshotSource, WarStatusClient, WarStatusSource, WorldStateResolver,
};

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

/// Democracy Loadout - pick a loadout for any active planet
#[derive(Parser, Debug)]
#[command(name = "democracy-loadout")]
#[command(about = "Generate a hazard-aware loadout against the faction holding a planet")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Read war status from campaign.json / planets.json in this directory
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Random seed for reproducible loadouts
    #[arg(long)]
    seed: Option<u64>,

    /// Name used in greetings and footers
    #[arg(long, default_value = "Helldiver")]
    user: String,

    /// Run a single command and exit, e.g. `l "bore rock" short`
    #[arg(trailing_var_arg = true)]
    command: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("democracy_loadout=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = AppConfig::load_or_default(&args.config)?;
    if let Some(dir) = &args.snapshot {
        config.war_status.snapshot_dir = Some(dir.clone());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "Seeding loadout generator");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let catalogs = CatalogStore::load(&config.catalog)?;
    let composer = LoadoutComposer::new(config.selection);
    let presenter = Presenter::new(&config.presentation);

    match &config.war_status.snapshot_dir {
        Some(dir) => {
            let resolver = WorldStateResolver::new(SnapshotSource::load(dir)?);
            let executor = CommandExecutor::new(catalogs, resolver, composer, presenter);
            run(&executor, &args, &mut rng)
        }
        None => {
            let resolver = WorldStateResolver::new(WarStatusClient::from_config(&config.war_status)?);
            let executor = CommandExecutor::new(catalogs, resolver, composer, presenter);
            run(&executor, &args, &mut rng)
        }
    }
}

fn run<S: WarStatusSource>(
    executor: &CommandExecutor<S>,
    args: &Args,
    rng: &mut ChaCha8Rng,
) -> Result<()> {
    // Network calls are async; the shell itself handles one command at a time
    let rt = Runtime::new()?;

    if !args.command.is_empty() {
        let input = join_args(&args.command);
        print!("{}", rt.block_on(executor.handle(&input, &args.user, rng)));
        return Ok(());
    }

    println!("\n=== DEMOCRACY LOADOUT ===");
    println!("Type '!help' for usage, 'quit' to exit.");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }

        println!("{}", rt.block_on(executor.handle(input, &args.user, rng)));
    }

    Ok(())
}

/// Rebuild a command line, quoting arguments the shell had already split out
fn join_args(args: &[String]) -> String {
    args.iter()
        .map(|arg| {
            if arg.contains(char::is_whitespace) {
                format!("\"{}\"", arg)
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

//! Binary entrypoint for the Treasure Hunter CLI.
//!
//! Commands:
//! - `play [--name <n>] [--mode e|n|h] [--seed <s>] [--test-kit]` - start a game in the terminal
//! - `init` - write a starter `config.toml`
//!
//! See the library crate docs for module-level details: `treasure_hunter::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

use treasure_hunter::config::Config;
use treasure_hunter::game::{prompt_setup, Console, GameSession, StdioConsole};
use treasure_hunter::hunt::Difficulty;

#[derive(Parser)]
#[command(name = "treasure-hunter")]
#[command(about = "Travel from town to town hunting for the big treasure")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new hunt
    Play {
        /// Hunter name (prompted for when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Difficulty: easy, normal or hard (prompted for when omitted)
        #[arg(short, long)]
        mode: Option<Difficulty>,

        /// Seed the random source for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Start with extra gold and every crossing item
        #[arg(long)]
        test_kit: bool,
    },
    /// Write a default configuration file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing config file is fine for play; defaults cover everything.
    let config = if Path::new(&cli.config).exists() {
        Some(Config::load(&cli.config)?)
    } else {
        None
    };
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Play {
            name,
            mode,
            seed,
            test_kit,
        } => {
            let config = config.unwrap_or_else(|| {
                info!("No config at {}; using defaults", cli.config);
                Config::default()
            });
            let mut console = StdioConsole::new();

            let (name, mode) = match (name, mode) {
                (Some(name), Some(mode)) => (name, mode),
                (name, mode) => {
                    let Some((prompted_name, prompted_mode)) =
                        prompt_setup(&mut console, config.game.difficulty)
                    else {
                        warn!("Input closed before the hunt began");
                        return Ok(());
                    };
                    (name.unwrap_or(prompted_name), mode.unwrap_or(prompted_mode))
                }
            };

            let rng = match seed.or(config.game.seed) {
                Some(s) => {
                    info!("Seeding RNG with {}", s);
                    StdRng::seed_from_u64(s)
                }
                None => StdRng::from_entropy(),
            };

            let mut session = GameSession::new(name, mode, config.shop, config.game.starting_gold, rng);
            if test_kit {
                session.apply_test_kit();
                console.show("Test kit issued: extra gold and a full pack.\n");
            }
            info!(
                "Starting Treasure Hunter v{} in {} mode",
                env!("CARGO_PKG_VERSION"),
                session.difficulty()
            );
            session.run(&mut console);
        }
        Commands::Init => {
            info!("Initializing new configuration");
            Config::create_default(&cli.config)?;
            println!("Configuration file created at {}", cli.config);
        }
    }

    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .map(|c| c.logging.level_filter())
            .unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    let log_file = config.as_ref().and_then(|c| c.logging.file.clone());
    if let Some(file) = log_file {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file)
        {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));

            // The game owns the terminal; only echo log lines there when stderr
            // is not a terminal (e.g. redirected to a file by the caller).
            let echo = !atty::is(atty::Stream::Stderr);

            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());

                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }

                if echo {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
            let _ = builder.try_init();
            return;
        }
        eprintln!("Could not open log file {}; logging to stderr", file);
    }
    builder.format(|fmt, record| {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
    });
    let _ = builder.try_init();
}

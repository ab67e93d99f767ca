//! Detective Quest
//!
//! Main entry point for the game.

use anyhow::Context;
use clap::Parser;

use dq_core::{GameOptions, Mansion, StopPolicy, SuspectDirectory};
use dq_tui::{App, TerminalConsole};

/// Environment variable holding the log filter
const LOG_ENV: &str = "DETECTIVE_QUEST_LOG";

/// Detective Quest
#[derive(Parser, Debug)]
#[command(name = "detective-quest")]
#[command(author, version, about = "Detective Quest - Explore the mansion and name the culprit!", long_about = None)]
struct Args {
    /// Keep exploring at dead ends until you choose to stop
    #[arg(long = "explicit-quit")]
    explicit_quit: bool,

    /// Never clear the screen between rooms
    #[arg(long = "no-clear")]
    no_clear: bool,

    /// Print the case report as JSON when the game ends
    #[arg(long = "json")]
    json: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

impl Args {
    fn options(&self) -> GameOptions {
        let stop_policy = if self.explicit_quit {
            StopPolicy::ExplicitQuit
        } else {
            StopPolicy::AtDeadEnd
        };
        GameOptions::default()
            .with_stop_policy(stop_policy)
            .with_clear_screen(!self.no_clear)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.quiet, args.verbose)?;

    let options = args.options();
    tracing::debug!(?options, "starting game");

    let mansion = Mansion::standard();
    let directory = SuspectDirectory::standard_with_buckets(options.bucket_count)
        .context("failed to build the suspect directory")?;

    let report = {
        let console = TerminalConsole::stdio(options.clear_screen);
        let mut app = App::new(&mansion, &directory, options, console);
        app.run().context("terminal I/O failed")?
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .context("failed to encode the case report")?;
        println!("{json}");
    }

    let rooms = mansion.release();
    let entries = directory.release();
    tracing::debug!(rooms, entries, "game state released");

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

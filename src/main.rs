//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use club_perf::{
    cli::{ClubPerf, Commands},
    commands::{
        import::handle_import,
        ladder::handle_ladder,
        performance::{handle_perf, PerfParams},
        teams::handle_teams,
    },
    Result,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = ClubPerf::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    // Logs go to stderr so `--json` output stays parseable.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Teams { source, json } => handle_teams(source, json)?,

        Commands::Perf {
            source,
            teams,
            category,
            ladder_url,
            no_ladder,
            json,
        } => {
            handle_perf(PerfParams {
                club: source.club,
                db: source.db,
                snapshot: source.snapshot,
                teams,
                category,
                ladder_url,
                no_ladder,
                json,
            })
            .await?
        }

        Commands::Ladder {
            competition,
            fixture,
            ladder_url,
            json,
        } => handle_ladder(competition, fixture, ladder_url, json).await?,

        Commands::Import {
            file,
            club,
            db,
            clear,
        } => handle_import(file, club, db, clear)?,
    }

    Ok(())
}

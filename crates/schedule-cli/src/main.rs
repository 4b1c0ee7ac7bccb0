mod args;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use schedule_core::{write_outputs, OutputPaths, ScheduleScraper, Schedule};

use args::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.effective_log_level());

    match run(&cli).await {
        Ok(schedule) => {
            tracing::info!(
                sessions = schedule.len(),
                skipped = schedule.skipped,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Scrape, then write both files. Nothing is written unless the scrape
/// succeeded.
async fn run(cli: &Cli) -> schedule_core::Result<Schedule> {
    let scraper = ScheduleScraper::new(cli.scrape_config())?;
    let schedule = scraper.scrape().await?;
    write_outputs(&schedule.sessions, &OutputPaths::from_stem(&cli.out))?;
    Ok(schedule)
}

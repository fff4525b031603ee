mod client;
mod config;
mod extractor;
mod models;
mod output;

use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::client::GraphqlFetcher;
use crate::config::Settings;
use crate::extractor::{Extractor, Limits};
use crate::output::OutputSink;

#[tokio::main]
async fn main() -> Result<()> {
    //NOTE: Everything else is configured through CREDITKARMA_* environment variables, see config::Settings
    let args: Vec<String> = std::env::args().collect();

    let log_level = args.get(1)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::INFO);

    setup_logging(log_level);

    let settings = Settings::from_env()?;
    let fetcher = GraphqlFetcher::new(&settings)?;
    let sink = OutputSink::open(&settings.output_dir)?;
    let limits = Limits {
        max_pages: settings.max_pages,
        deadline: settings.deadline
    };

    let timer = Instant::now();
    let mut extractor = Extractor::new(fetcher, sink, limits, settings.start_cursor.clone())
        .with_help_message(settings.help_message.clone());
    let records = extractor.extract_all().await?;
    let duration = timer.elapsed();

    info!("Transactions written to {}: {}", settings.output_dir.display(), records.len());
    info!("Transaction data extraction duration: {}", format_duration(duration));

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stdout)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn format_duration(duration: Duration) -> String {
    let seconds = duration.as_secs();

    if seconds > 60 {
        format!("{} minutes, {} seconds", seconds / 60, seconds % 60)
    } else {
        format!("{} seconds", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::{format_duration, parse_log_level};

    use std::time::Duration;

    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_format_duration_switches_to_minutes_above_one_minute() {
        assert_eq!(format_duration(Duration::from_secs(42)), "42 seconds");
        assert_eq!(format_duration(Duration::from_secs(60)), "60 seconds");
        assert_eq!(format_duration(Duration::from_secs(185)), "3 minutes, 5 seconds");
    }

    #[test]
    fn test_parse_log_level_falls_back_to_info() {
        assert_eq!(parse_log_level("DEBUG"), LevelFilter::DEBUG);
        assert_eq!(parse_log_level("loud"), LevelFilter::INFO);
    }
}

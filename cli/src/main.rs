use clap::Parser;
use std::time::Duration;

mod config;

use config::AppConfig;
use spaceguard_deck_tui::{PresenterOptions, run_tui, spaceguard_deck};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, PartialEq)]
#[command(name = "spaceguard-deck")]
#[command(about = "Present the SpaceGuard AI pitch deck in your terminal", long_about = None)]
struct Cli {
    /// Start at slide N (1-based, as shown on the progress dots)
    #[arg(short = 's', long = "start", default_value_t = 1)]
    start: usize,

    /// Disable slide transitions and star twinkle
    #[arg(long = "reduced-motion", default_value_t = false)]
    reduced_motion: bool,

    /// Hide the key-hint footer
    #[arg(long = "no-hints", default_value_t = false)]
    no_hints: bool,

    /// Use an alternate config file
    #[arg(short = 'c', long = "config")]
    config_path: Option<String>,

    /// Enable debug output
    #[arg(long = "debug", default_value_t = false)]
    debug: bool,
}

/// Translate the 1-based `--start` flag to a deck index, rejecting values
/// the deck cannot satisfy so the navigator only ever sees valid indices.
fn validate_start(start: usize, slide_count: usize) -> Result<usize, String> {
    if start == 0 || start > slide_count {
        return Err(format!(
            "slide {} does not exist; the deck has {} slides",
            start, slide_count
        ));
    }
    Ok(start - 1)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| format!("error,{}=debug", env!("CARGO_CRATE_NAME")).into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let config = match AppConfig::load(cli.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let deck = spaceguard_deck();
    let start_index = match validate_start(cli.start, deck.len()) {
        Ok(index) => index,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    let options = PresenterOptions {
        start_index,
        reduced_motion: cli.reduced_motion || config.reduced_motion,
        tick_rate: Duration::from_millis(config.tick_rate_ms.max(1)),
        show_hints: config.show_hints && !cli.no_hints,
    };

    tracing::debug!(
        slides = deck.len(),
        start = start_index,
        config = %config.config_path,
        "starting presenter"
    );

    if let Err(e) = run_tui(deck, options).await {
        eprintln!("Ops! something went wrong: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1, 3 => matches Ok(0))]
    #[test_case(3, 3 => matches Ok(2))]
    #[test_case(0, 3 => matches Err(_))]
    #[test_case(4, 3 => matches Err(_))]
    #[test_case(1, 1 => matches Ok(0))]
    fn start_flag_validation(start: usize, slide_count: usize) -> Result<usize, String> {
        validate_start(start, slide_count)
    }

    #[test]
    fn start_flag_is_one_based() {
        assert_eq!(validate_start(2, 3), Ok(1));
    }
}

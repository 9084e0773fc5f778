//! Walkthrough Sample Application Entry Point

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use walkthrough::config::WalkthroughConfig;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,redblack=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match WalkthroughConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            WalkthroughConfig::default()
        }
    };
    tracing::info!(keys = ?config.keys, delete = ?config.delete, "Configuration loaded");

    match walkthrough::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(violation) => {
            tracing::error!("Invariant violated: {violation}");
            ExitCode::FAILURE
        }
    }
}

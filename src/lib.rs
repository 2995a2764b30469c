//! # Docker Automation
//!
//! A menu-driven dispatcher for everyday container and cluster chores.
//! Each menu entry collects a few answers and runs the matching `docker` or
//! `kubectl` command(s), reporting success or failure on the console.
//!
//! ## Features
//!
//! - Build, run, start, stop and remove images and containers
//! - Multiplatform builds with buildx and registry pushes
//! - Kubernetes deployments (optionally with replicas) and services
//! - Dry-run mode that prints commands instead of running them
//!
//! ## Example
//!
//! ```no_run
//! use dockauto::{config::Config, core::{Dispatcher, Request}, utils::ProcessRunner};
//!
//! let config = Config::default();
//! let dispatcher = Dispatcher::new(&config, ProcessRunner::new(false, true));
//! let message = dispatcher.execute(&Request::StopContainer { container: "web".into() })?;
//! println!("{message}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

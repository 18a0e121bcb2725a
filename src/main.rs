//! waypoint (v1)
//!
//! A deterministic path-to-view route resolver with browser-style history.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                  WAYPOINT                     │
//!                        │                                              │
//!     Navigation target  │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!     ───────────────────┼─▶│ history │───▶│ routing  │───▶│  view   │  │
//!                        │  │  mode   │    │ resolver │    │ render  │  │
//!                        │  └─────────┘    └────┬─────┘    └─────────┘  │
//!                        │                      │                       │
//!                        │                      ▼                       │
//!                        │               ┌──────────────┐               │
//!                        │               │  RouteTable  │               │
//!                        │               │ (immutable)  │               │
//!                        │               └──────────────┘               │
//!                        │                                              │
//!                        │  ┌────────────────────────────────────────┐  │
//!                        │  │         Cross-Cutting Concerns          │  │
//!                        │  │   ┌─────────┐        ┌─────────────┐    │  │
//!                        │  │   │ config  │        │   tracing   │    │  │
//!                        │  │   └─────────┘        └─────────────┘    │  │
//!                        │  └────────────────────────────────────────┘  │
//!                        └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use waypoint::config::{load_config, RouterConfig};
use waypoint::navigation::Navigator;
use waypoint::routing::{Resolver, RouteTable, TableError};
use waypoint::view::TextView;

#[derive(Parser)]
#[command(name = "waypoint")]
#[command(about = "Deterministic path-to-view route resolution", long_about = None)]
struct Cli {
    /// Route table configuration (TOML). Defaults to the built-in table.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List declared routes in table order
    Routes,
    /// Resolve a single navigation target
    Resolve {
        target: String,
        /// Emit the matched entry as JSON
        #[arg(long)]
        json: bool,
    },
    /// Simulate a navigation session across several targets
    Walk { targets: Vec<String> },
}

/// Bind a placeholder view to each declared route name.
fn bind_views(config: &RouterConfig) -> Result<RouteTable, TableError> {
    let mut builder = RouteTable::builder();
    for route in &config.routes {
        let view = TextView::shared(format!("[{} view]", route.name));
        builder = builder.route(&route.path, &route.name, view);
    }
    builder.build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "waypoint=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };

    let table = bind_views(&config)?;

    tracing::info!(
        routes = table.len(),
        mode = ?config.history_mode,
        base = %config.base,
        "route table ready"
    );

    let resolver = Resolver::with_base(Arc::new(table), config.base.clone());

    match cli.command {
        Commands::Routes => {
            for entry in resolver.table().iter() {
                println!("{:<24} {}", entry.path(), entry.name());
            }
        }
        Commands::Resolve { target, json } => match resolver.resolve(&target) {
            Ok(entry) => {
                if json {
                    let out = serde_json::json!({
                        "path": entry.path(),
                        "name": entry.name(),
                    });
                    println!("{out}");
                } else {
                    println!("{} -> {}", entry.path(), entry.name());
                }
            }
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
        Commands::Walk { targets } => {
            let mut navigator = Navigator::new(resolver, config.history_mode);
            for target in targets {
                match navigator.navigate(&target) {
                    Ok(rendered) => println!("{}: {}", rendered.route, rendered.body),
                    Err(err) => println!("{err} (fallback view)"),
                }
            }
        }
    }

    Ok(())
}

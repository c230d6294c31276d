//! gridmindd — the GridMind daemon.
//!
//! Single binary that assembles the placement intelligence service:
//! - Model provider (placement classifier + outlier detector)
//! - Decision engine and anomaly classifier
//! - REST API
//!
//! # Usage
//!
//! ```text
//! gridmindd serve --port 8000 \
//!     --placement-model models/placement.json \
//!     --anomaly-model models/anomaly.json
//! gridmindd simulate --samples 2000 --seed 42 --out training_data.csv
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use gridmind_engine::{AnomalyClassifier, DecisionEngine};
use gridmind_model::ModelProvider;

#[derive(Parser)]
#[command(name = "gridmindd", about = "GridMind placement intelligence daemon")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the placement and anomaly APIs.
    Serve {
        /// Port to listen on.
        #[arg(long, default_value = "8000")]
        port: u16,

        /// Path to the placement classifier artifact.
        #[arg(long)]
        placement_model: PathBuf,

        /// Path to the telemetry outlier detector artifact.
        #[arg(long)]
        anomaly_model: PathBuf,
    },

    /// Generate a synthetic training corpus.
    Simulate {
        /// Number of samples to generate.
        #[arg(long, default_value = "2000")]
        samples: usize,

        /// RNG seed; the same seed regenerates the same corpus.
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Output CSV path.
        #[arg(long, default_value = "training_data.csv")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gridmindd=debug,gridmind=debug".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            port,
            placement_model,
            anomaly_model,
        } => run_serve(port, placement_model, anomaly_model).await,
        Command::Simulate { samples, seed, out } => run_simulate(samples, seed, out),
    }
}

async fn run_serve(
    port: u16,
    placement_model: PathBuf,
    anomaly_model: PathBuf,
) -> anyhow::Result<()> {
    info!("GridMind daemon starting");

    // Both models must be loaded before the listener binds; a missing model
    // aborts startup instead of serving partial capability.
    let provider = ModelProvider::load(&placement_model, &anomaly_model)?;

    let engine = DecisionEngine::new(provider.clone())?;
    info!("decision engine initialized");

    let classifier = AnomalyClassifier::new(provider)?;
    info!("anomaly classifier initialized");

    let router = gridmind_api::build_router(engine, classifier);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!(%addr, "API server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Graceful shutdown on Ctrl-C.
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install CTRL+C handler");
            info!("shutdown signal received");
        })
        .await?;

    info!("GridMind daemon stopped");
    Ok(())
}

fn run_simulate(samples: usize, seed: u64, out: PathBuf) -> anyhow::Result<()> {
    let corpus = gridmind_simulator::generate(samples, seed);
    std::fs::write(&out, gridmind_simulator::to_csv(&corpus))?;
    info!(samples, seed, path = %out.display(), "synthetic corpus written");
    Ok(())
}

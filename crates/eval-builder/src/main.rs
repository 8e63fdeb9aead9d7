//! Build chess eval files from a PGN corpus.
//!
//! Usage: cargo run --release --bin build-evals -- <corpus.pgn>
//!
//! The eval registry directory is taken from REGISTRY_PATH; see
//! `Config::from_env` for the optional sampling knobs.

use std::path::PathBuf;

use eval_builder::Config;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Load .env file for local dev
    let _ = dotenvy::dotenv();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <corpus.pgn>", args[0]);
        std::process::exit(1);
    }
    let corpus_path = PathBuf::from(&args[1]);

    let config = Config::from_env()?;
    eval_builder::run(&config, &corpus_path)?;
    Ok(())
}

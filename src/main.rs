use anyhow::{Context, Result};
use clap::Parser;
use neurobreed_lib::config::AppConfig;
use neurobreed_lib::demo::{self, DEFAULT_EXPECTED, DEFAULT_INPUT_VALUE};
use neurobreed_lib::metrics::init_logging_with_level;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Seed overriding the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Comma-separated input vector
    #[arg(short, long)]
    inputs: Option<String>,

    /// Comma-separated expected output vector
    #[arg(short, long)]
    expected: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(path: &str) -> Result<AppConfig> {
    if !Path::new(path).exists() {
        tracing::warn!(path, "Config file not found, using defaults");
        return Ok(AppConfig::default());
    }
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading config file {path}"))?;
    AppConfig::from_toml(&content).with_context(|| format!("parsing config file {path}"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging_with_level(if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    });

    let mut config = load_config(&args.config)?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let inputs = match &args.inputs {
        Some(text) => demo::parse_vector(text)?,
        None => vec![DEFAULT_INPUT_VALUE; config.network.inputs],
    };
    let output_size = config
        .network
        .layer_sizes
        .last()
        .copied()
        .unwrap_or(config.network.inputs);
    let expected = match &args.expected {
        Some(text) => Some(demo::parse_vector(text)?),
        None if output_size == DEFAULT_EXPECTED.len() => Some(DEFAULT_EXPECTED.to_vec()),
        None => None,
    };

    let report = demo::run(&config, &inputs, expected.as_deref())?;

    println!("config {}", report.fingerprint);
    println!("parent {:?}", report.parent_output);
    if let Some(error) = report.parent_error {
        println!("parent error {error}");
    }
    println!("child  {:?}", report.child_output);
    if let Some(error) = report.child_error {
        println!("child error {error}");
    }

    Ok(())
}

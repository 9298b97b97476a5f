use anyhow::Context;
use clap::Parser;
use std::ffi::OsString;
use std::process::ExitCode;
use thyroid_verdict::{EngineConfig, Verdict};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod args;
use args::{Args, normalize_args};

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    // Default to warn level, can be overridden with RUST_LOG env var.
    // Logs go to stderr, stdout only carries the verdict.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _tracing = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init();

    let raw: Vec<OsString> = std::env::args_os().collect();
    tracing::debug!("The complete set of arguments given is {:?}", raw);

    // Prints the cause plus usage and exits with 2 on any invalid or missing flag
    let args = Args::parse_from(normalize_args(raw));

    match run(args) {
        Ok(verdict) => {
            println!("{verdict}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Something went wrong with the algorithm! {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<Verdict> {
    let config = EngineConfig::from_env();
    let input = args.into_input();
    tracing::debug!("Validated input: {:?} (referral {})", input, input.referral_source);

    thyroid_verdict::predict(&config, &input)
        .with_context(|| format!("classifying with model {}", config.model_path.display()))
}

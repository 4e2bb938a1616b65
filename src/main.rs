//! passkey-origin-validator
//!
//! Counts the eTLD+1 labels in a relying party's `.well-known/webauthn`
//! document and checks caller origins against it the way browsers do.
//!
//! Exit codes: 0 success, 1 fetch or parse error, 2 label count exceeds the
//! limit, 3 caller origin not authorized.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use passkey_origin_validator::counter::{format_results, validate_well_known_json, LabelCount};
use passkey_origin_validator::{
    count_labels, count_labels_from_file, demo, Config, SourceOptions, MAX_LABELS,
};
use tracing::debug;

const EXIT_ERROR: u8 = 1;
const EXIT_EXCEEDS_LIMIT: u8 = 2;
const EXIT_NOT_AUTHORIZED: u8 = 3;

/// Validate passkey/WebAuthn origin constraints in .well-known/webauthn endpoints
#[derive(Parser, Debug)]
#[command(name = "passkey-origin-validator")]
#[command(version, disable_version_flag = true)]
#[command(
    about = "A tool for validating passkey/WebAuthn origin constraints in .well-known/webauthn endpoints",
    long_about = "A tool for validating passkey/WebAuthn origin constraints in .well-known/webauthn endpoints.\n\n\
It fetches the .well-known/webauthn document of a domain, counts the unique eTLD+1 labels \
it lists, and checks whether a caller origin is authorized under the same label limit \
browsers enforce."
)]
struct Args {
    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Config file (default is $HOME/.passkey-origin-validator.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Use a local JSON file instead of fetching from a domain
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Run with example data
    #[arg(long, global = true)]
    example: bool,

    /// Print the label census as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count the unique labels in a .well-known/webauthn endpoint
    Count {
        /// Domain to query (defaults to the configured domain)
        domain: Option<String>,
    },

    /// Validate if a caller origin is authorized by a domain's .well-known/webauthn file
    Validate {
        /// Domain to query (defaults to the configured domain)
        domain: Option<String>,

        /// The caller origin to validate
        #[arg(long)]
        origin: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(EXIT_ERROR);
        }
    };
    config.debug |= args.debug;

    // Initialize tracing
    let filter = if config.debug { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(args, &config).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

async fn run(args: Args, config: &Config) -> anyhow::Result<ExitCode> {
    if args.example {
        demo::run_example(&mut io::stdout().lock())
            .context("failed to write example output")?;
        return Ok(ExitCode::SUCCESS);
    }

    let options = SourceOptions::from(config);

    match args.command {
        Some(Command::Count { domain }) => {
            let result = load(args.file.as_deref(), domain, config, &options).await?;

            if !result.is_error() {
                debug!(
                    count = result.count,
                    labels = ?result.labels_found,
                    exceeds_limit = result.exceeds_limit,
                    "census complete"
                );
            }

            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&result).context("failed to encode result")?
                );
            } else {
                println!("{}", format_results(&result));
            }

            if result.exceeds_limit {
                return Ok(ExitCode::from(EXIT_EXCEEDS_LIMIT));
            }
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Validate { domain, origin }) => {
            debug!(origin = %origin, "validating caller origin");
            let result = load(args.file.as_deref(), domain, config, &options).await?;

            if let Some(message) = &result.error_message {
                eprintln!("Error: {message}");
                return Ok(ExitCode::from(EXIT_ERROR));
            }

            let status = validate_well_known_json(&origin, result.raw_json.as_bytes());

            println!(
                "Validating caller origin: {} against domain: {}",
                origin, result.target
            );
            println!("Status: {status}");

            if !status.is_success() {
                return Ok(ExitCode::from(EXIT_NOT_AUTHORIZED));
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            Args::command().print_help().context("failed to print help")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn load(
    file: Option<&std::path::Path>,
    domain: Option<String>,
    config: &Config,
    options: &SourceOptions,
) -> anyhow::Result<LabelCount> {
    let result = match file {
        Some(path) => {
            debug!(path = %path.display(), "reading from file");
            count_labels_from_file(path, options)?
        }
        None => {
            let domain = domain.unwrap_or_else(|| config.default_domain.clone());
            debug!(domain = %domain, max_labels = MAX_LABELS, "testing domain");
            count_labels(&domain, options).await?
        }
    };
    Ok(result)
}

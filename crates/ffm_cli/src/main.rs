//! ffm CLI
//!
//! Runs league player requests (ratings, wages, profiles, youngster
//! seasons) from JSON files through the ffm_core engine.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use ffm_cli::{
    config_schema, failure_code, load_config, read_request, wage_request, write_output, Endpoint,
};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "ffm")]
#[command(about = "Fantasy league player rating and progression engine", version, long_about = None)]
struct Cli {
    /// Engine config JSON (defaults to $FFM_ENGINE_CONFIG_PATH, then built-in rules)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Overall rating breakdown and wage
    Rate {
        /// Input RatingRequest JSON file
        #[arg(long)]
        r#in: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Base wage for a rating and positions string
    Wage {
        /// Input WageRequest JSON file
        #[arg(long, conflicts_with_all = ["rating", "positions"])]
        r#in: Option<PathBuf>,

        #[arg(long, requires = "positions")]
        rating: Option<f64>,

        /// Positions string, e.g. "CB,CDM"
        #[arg(long, requires = "rating")]
        positions: Option<String>,

        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Full player profile
    Profile {
        #[arg(long)]
        r#in: PathBuf,

        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// End-of-season progression for one youngster
    Season {
        #[arg(long)]
        r#in: PathBuf,

        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// End-of-season progression for a whole squad
    BatchSeason {
        #[arg(long)]
        r#in: PathBuf,

        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the JSON Schema of a request body or the engine config
    Schema {
        #[arg(value_enum)]
        target: SchemaTarget,

        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum SchemaTarget {
    Rate,
    Wage,
    Profile,
    Season,
    BatchSeason,
    Config,
}

#[cfg(feature = "cli")]
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ffm_core=info,ffm_cli=info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[cfg(feature = "cli")]
fn run_endpoint(
    endpoint: Endpoint,
    request_json: &str,
    config_path: Option<&Path>,
    out: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let response = endpoint.call(request_json, &config);
    write_output(out, &response)?;

    if let Some(code) = failure_code(&response) {
        anyhow::bail!("{} request failed: {}", endpoint.name(), code);
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Rate { r#in, out } => {
            run_endpoint(Endpoint::Rate, &read_request(&r#in)?, config, out.as_deref())?;
        }

        Commands::Wage { r#in, rating, positions, out } => {
            let request = match (r#in, rating, positions) {
                (Some(path), _, _) => read_request(&path)?,
                (None, Some(rating), Some(positions)) => wage_request(rating, &positions),
                _ => anyhow::bail!("wage needs either --in or both --rating and --positions"),
            };
            run_endpoint(Endpoint::Wage, &request, config, out.as_deref())?;
        }

        Commands::Profile { r#in, out } => {
            run_endpoint(Endpoint::Profile, &read_request(&r#in)?, config, out.as_deref())?;
        }

        Commands::Season { r#in, out } => {
            run_endpoint(Endpoint::Season, &read_request(&r#in)?, config, out.as_deref())?;
        }

        Commands::BatchSeason { r#in, out } => {
            run_endpoint(Endpoint::BatchSeason, &read_request(&r#in)?, config, out.as_deref())?;
        }

        Commands::Schema { target, out } => {
            let schema = match target {
                SchemaTarget::Rate => Endpoint::Rate.request_schema()?,
                SchemaTarget::Wage => Endpoint::Wage.request_schema()?,
                SchemaTarget::Profile => Endpoint::Profile.request_schema()?,
                SchemaTarget::Season => Endpoint::Season.request_schema()?,
                SchemaTarget::BatchSeason => Endpoint::BatchSeason.request_schema()?,
                SchemaTarget::Config => config_schema()?,
            };
            let body = serde_json::to_string_pretty(&schema).context("Failed to render schema")?;
            write_output(out.as_deref(), &body)?;
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("ffm CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}

mod commands;
mod config;

use clap::{Parser, Subcommand};
use commands::{cmd_normalize, cmd_tree, cmd_validate, read_input, Format};
use config::{read_config_file, resolve_decode_options, EnvOverrides, FlagOverrides};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "content")]
#[command(about = "Validate, normalise and inspect tagged content payloads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// YAML config file with decoder settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Maximum node nesting depth (overrides CONTENT_MAX_DEPTH)
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Reject keys that are not part of a component's layout
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a payload decodes
    Validate {
        /// Payload file, or '-' for stdin
        input: String,
        /// Input format (default: from file extension)
        #[arg(long, value_enum)]
        from: Option<Format>,
    },
    /// Re-encode a payload with canonical tags and explicit defaults
    Normalize {
        /// Payload file, or '-' for stdin
        input: String,
        /// Input format (default: from file extension)
        #[arg(long, value_enum)]
        from: Option<Format>,
        /// Output format (default: same as input)
        #[arg(long, value_enum)]
        to: Option<Format>,
        /// Indent JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print an outline of a payload's nodes
    Tree {
        /// Payload file, or '-' for stdin
        input: String,
        /// Input format (default: from file extension)
        #[arg(long, value_enum)]
        from: Option<Format>,
    },
}

/// Entry point for the `content` tool.
///
/// # Environment Variables
/// - `CONTENT_MAX_DEPTH`: maximum node nesting depth (default: 32, at most 40)
/// - `CONTENT_STRICT`: reject unknown keys when set to a true value
/// - `RUST_LOG`: tracing filter (default directive: `content=info`)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("content=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config_file = cli.config.as_deref().map(read_config_file).transpose()?;
    let options = resolve_decode_options(
        config_file.as_ref(),
        &EnvOverrides::from_env(),
        &FlagOverrides {
            max_depth: cli.max_depth,
            strict: cli.strict,
        },
    )?;

    let output = match cli.command {
        Commands::Validate { input, from } => {
            let format = Format::detect(&input, from);
            tracing::info!(%input, ?format, "validating payload");
            cmd_validate(&read_input(&input)?, format, &options)?
        }
        Commands::Normalize {
            input,
            from,
            to,
            pretty,
        } => {
            let from = Format::detect(&input, from);
            let to = to.unwrap_or(from);
            tracing::info!(%input, ?from, ?to, "normalising payload");
            cmd_normalize(&read_input(&input)?, from, to, pretty, &options)?
        }
        Commands::Tree { input, from } => {
            let format = Format::detect(&input, from);
            cmd_tree(&read_input(&input)?, format, &options)?
        }
    };

    println!("{output}");

    Ok(())
}

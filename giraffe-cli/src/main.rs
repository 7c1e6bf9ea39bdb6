use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use config::Config;
use error::{format_error_with_suggestions, CliError};

#[derive(Parser)]
#[command(name = "giraffe")]
#[command(about = "Giraffe - feature types and feature record export")]
#[command(version)]
#[command(long_about = "
Lists the feature type vocabulary and turns feature declarations into the
structured records consumed by sequence map renderers.

Examples:
  giraffe types --json
  giraffe lookup 'Restriction Enzyme'
  giraffe export --input features.json --output records.json
  giraffe config --example --output giraffe.toml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every feature type with its id
    Types {
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Look up a feature type by id or label
    Lookup {
        /// Numeric id or exact label
        key: String,
    },

    /// Build feature records from a JSON array of declarations
    Export {
        /// Input JSON file
        #[arg(short, long, required = true)]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write compact JSON regardless of configuration
        #[arg(long)]
        compact: bool,
    },

    /// Configuration helpers
    Config {
        /// Use the default configuration instead of the loaded one
        #[arg(long)]
        example: bool,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Types { json } => commands::types::execute(json)?,
        Commands::Lookup { key } => commands::lookup::execute(&key)?,
        Commands::Export { input, output, compact } => {
            commands::export::execute(&config, input, output, compact)?
        }
        Commands::Config { example, output } => {
            match (output, example) {
                (Some(path), true) => Config::default().save_to_file(&path)?,
                (Some(path), false) => config.save_to_file(&path)?,
                (None, true) => print!("{}", Config::example_toml()?),
                (None, false) => print!("{}", toml::to_string_pretty(&config)?),
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            eprintln!("Error: {}", format_error_with_suggestions(cli_err));
            std::process::exit(1);
        }
        return Err(err);
    }

    Ok(())
}

//! Error-code logger CLI.
//!
//! # Architecture Overview
//!
//! ```text
//!   errcode.toml ──▶ config ──▶ catalog bundle(s) ──▶ MessageCatalog
//!                      │                                   │
//!                      ▼                                   ▼
//!               observability ◀── TracingFacade ◀── ErrorCodeLogger ◀── emit
//!                (subscriber)                              ▲
//!                                                          │
//!                                format / lookup / list ───┘ (catalog only)
//! ```
//!
//! # Commands
//! - `format <code> [args...]`: print the display text for a code
//! - `lookup <code>`: print the raw template for a code
//! - `list [--json]`: print every catalog entry
//! - `emit [--level L] [--marker M] [--logger NAME] <code> [args...]`:
//!   log one enriched record through `tracing`

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use error_code_logger::catalog::{self, MessageCatalog};
use error_code_logger::config::{load_config, AppConfig};
use error_code_logger::logger::{self, Level, Marker};
use error_code_logger::observability;

#[derive(Parser)]
#[command(name = "error-code-logger")]
#[command(about = "Resolve and log application error codes", long_about = None)]
struct Cli {
    /// Configuration file (TOML). Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(long)]
    log_level: Option<Level>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the display text for a code with positional arguments
    Format {
        code: String,
        args: Vec<String>,
    },
    /// Print the catalog template for a code
    Lookup {
        code: String,
    },
    /// List every code in the catalog
    List {
        /// Print as a JSON object
        #[arg(long)]
        json: bool,
    },
    /// Log one enriched record
    Emit {
        #[arg(short, long, default_value = "info")]
        level: Level,

        /// Categorization tag attached to the record
        #[arg(short, long)]
        marker: Option<String>,

        /// Logger name
        #[arg(long, default_value = "error-code-logger")]
        logger: String,

        code: String,
        args: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    observability::init_logging(&config.logging)?;

    let catalog = catalog::install(config.catalog.load_catalog()?)?;
    tracing::debug!(
        locale = %catalog.locale(),
        entries = catalog.len(),
        "Message catalog ready"
    );

    match cli.command {
        Commands::Format { code, args } => {
            println!("{}", catalog.error_message(&code, &display_args(&args)));
        }
        Commands::Lookup { code } => match catalog.lookup(&code) {
            Some(template) => println!("{template}"),
            None => {
                let locale = catalog.locale();
                return Err(format!("{code}: no catalog entry for locale {locale}").into());
            }
        },
        Commands::List { json } => print_entries(&catalog, json)?,
        Commands::Emit {
            level,
            marker,
            logger: name,
            code,
            args,
        } => {
            let log = logger::get_logger(&name);
            let marker = marker.map(Marker::new);
            log.emit(level, marker.as_ref(), &code, &display_args(&args), None);
        }
    }

    Ok(())
}

fn display_args(args: &[String]) -> Vec<&dyn Display> {
    args.iter().map(|arg| arg as &dyn Display).collect()
}

fn print_entries(catalog: &MessageCatalog, json: bool) -> Result<(), serde_json::Error> {
    if json {
        let entries: BTreeMap<&str, &str> = catalog.entries().into_iter().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for (code, template) in catalog.entries() {
            println!("{code}\t{template}");
        }
    }
    Ok(())
}

//! `contractctl` — run the contract chaincode against a local ledger file.
//!
//! Usage:
//!   contractctl [--config FILE] [--data-dir DIR] [--db FILE] [-o table|json] <command>
//!
//! The ledger is a redb file, by default `{data_dir}/ledger.redb`.

mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use chaincode_core::{Executor, ServiceConfig};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

/// Contract chaincode host.
#[derive(Parser, Debug)]
#[command(name = "contractctl", about = "Run the contract chaincode against a local ledger")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long = "config", short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Directory holding the ledger (overrides the config file).
    #[arg(long = "data-dir", global = true)]
    data_dir: Option<PathBuf>,

    /// Ledger file (overrides data dir).
    #[arg(long = "db", global = true)]
    db: Option<PathBuf>,

    /// Output format.
    #[arg(long = "output", short = 'o', global = true, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Instantiate the chaincode (runs Init).
    Init,

    /// Invoke a chaincode function, e.g. `invoke queryContract C1`.
    Invoke {
        /// Function name (insertContract, queryContract).
        function: String,
        /// Function arguments, in order.
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List every contract stored in the ledger.
    State,

    /// Show version.
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Version = cli.command {
        println!("contractctl v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::default(),
    };
    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir.clone();
    }
    if cli.db.is_some() {
        config.db_path = cli.db.clone();
    }

    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let db_path = config.resolve_db_path();
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    info!("Opening ledger {}", db_path.display());
    let store = chaincode_kv::RedbStore::open(&db_path)
        .map_err(|e| anyhow::anyhow!("failed to open ledger: {}", e))?;
    let executor = Executor::new(Arc::new(store));
    let json_output = cli.output == OutputFormat::Json;

    match cli.command {
        Commands::Init => commands::init(&executor, json_output),
        Commands::Invoke { function, args } => {
            commands::invoke(&executor, function, args, json_output)
        }
        Commands::State => commands::state(&executor, json_output),
        Commands::Version => Ok(()),
    }
}

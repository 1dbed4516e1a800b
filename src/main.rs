//! `terraform-provider-vsphere` command line: schema dump, validation, configure and data-source reads.

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use terraform_provider_vsphere::provider;

#[derive(Parser)]
#[command(name = "terraform-provider-vsphere", version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the provider, resource and data source schemas as JSON
    Schema,
    /// Validate a provider configuration block
    Validate {
        #[arg(long)]
        config: PathBuf,
    },
    /// Validate a provider configuration block and log in to vSphere
    Configure {
        #[arg(long)]
        config: PathBuf,
    },
    /// Configure the provider, then read one data source
    ReadDataSource {
        name: String,
        #[arg(long)]
        config: PathBuf,
        #[arg(long)]
        args: Option<PathBuf>,
    },
}

fn read_json(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    Ok(serde_json::from_str(&text)?)
}

fn print_diagnostics(diags: &[provider_core::Diagnostic]) {
    for diag in diags {
        eprintln!("{diag}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // stdout carries command output; logs go to stderr.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    if cfg!(feature = "logs-json") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let p = provider();

    match cli.command {
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&p.schema_json())?);
        }
        Commands::Validate { config } => {
            let diags = p.validate(&read_json(&config)?)?;
            print_diagnostics(&diags);
            if provider_core::diagnostics::has_errors(&diags) {
                return Err("provider configuration is invalid".into());
            }
            tracing::info!("provider configuration is valid");
        }
        Commands::Configure { config } => {
            let warnings = p.configure(read_json(&config)?).await?;
            print_diagnostics(&warnings);
            tracing::info!("provider configured");
        }
        Commands::ReadDataSource { name, config, args } => {
            let warnings = p.configure(read_json(&config)?).await?;
            print_diagnostics(&warnings);
            let args = match args {
                Some(path) => read_json(&path)?,
                None => Value::Null,
            };
            let state = p.read_data_source(&name, args).await?;
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
    }

    Ok(())
}

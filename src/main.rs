use anyhow::Result;
use clap::{Parser, Subcommand};
use message_template_cache::app::engine::TemplateEngine;
use message_template_cache::{cli, server};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Harvest message templates from a source tree, validate call sites, and
/// resolve or serve the resulting table.
#[derive(Parser)]
#[command(name = "mtctool", version, about)]
struct Cli {
    /// Root directory to scan.
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan and print a harvest summary.
    Harvest {
        /// Dump the full table as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Run the uniqueness check and call-site validation, printing diagnostics.
    Check,
    /// Emit the generated static-initialization source.
    Generate {
        /// Output file (stdout when omitted).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Resolve one request against the harvested table.
    Resolve {
        #[arg(long)]
        file: String,
        #[arg(long)]
        method: String,
        #[arg(long)]
        line: u32,
        #[arg(long)]
        tag: Option<String>,
    },
    /// Serve the harvested table over HTTP.
    Serve {
        #[arg(long, default_value = "127.0.0.1:8474")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Cli::parse();
    let engine = TemplateEngine::load_from_root(&args.root)?;

    match args.command {
        Command::Harvest { json } => cli::run_harvest(&engine, json),
        Command::Check => cli::run_check(&engine),
        Command::Generate { out } => cli::run_generate(&engine, out.as_deref()),
        Command::Resolve {
            file,
            method,
            line,
            tag,
        } => cli::run_resolve(&engine, &file, &method, line, tag.as_deref()),
        Command::Serve { addr } => {
            tracing::info!(%addr, "serving harvested table");
            server::http::serve(engine, addr).await
        }
    }
}

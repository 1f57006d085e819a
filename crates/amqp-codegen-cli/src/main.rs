//! amqp-codegen CLI - Generate typed Java bindings from an AMQP spec
//!
//! Usage:
//! - `amqp-codegen api amqp0-9-1.json -o AMQP.java` - public contracts and builders
//! - `amqp-codegen impl amqp0-9-1.json ext.json` - implementation, printed to stdout

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod generate;

#[derive(Parser)]
#[command(name = "amqp-codegen")]
#[command(author, version, about = "Generate Java AMQP bindings from a protocol spec", long_about = None)]
struct Cli {
    /// Artifact to generate
    #[arg(value_enum)]
    artifact: ArtifactArg,

    /// Base spec JSON, followed by extension specs merged in order
    #[arg(required = true)]
    specs: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Generator configuration TOML
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log progress to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ArtifactArg {
    /// Public contracts, builders and properties classes
    Api,
    /// Concrete method types, visitors and decode tables
    Impl,
}

impl From<ArtifactArg> for amqp_codegen::Artifact {
    fn from(arg: ArtifactArg) -> Self {
        match arg {
            ArtifactArg::Api => amqp_codegen::Artifact::Api,
            ArtifactArg::Impl => amqp_codegen::Artifact::Impl,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    generate::run(
        cli.artifact.into(),
        &cli.specs,
        cli.config.as_deref(),
        cli.output.as_deref(),
    )
}

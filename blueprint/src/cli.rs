// blueprint/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blueprint")]
#[command(about = "Declarative asset, partition & check configuration validator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the configuration document comes from.
#[derive(Args, Debug, Clone)]
pub struct DocumentArgs {
    /// Explicit document path (overrides BLUEPRINT_CONFIG and discovery)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Directory searched for assets.yml / blueprint.yml
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ✅ Validates the document and reports every error found
    Validate {
        #[command(flatten)]
        document: DocumentArgs,

        /// Output format: text | json (canonical document)
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Resource available at runtime; when given, every asset resource must be listed
        #[arg(long = "resource", short)]
        resources: Vec<String>,
    },

    /// 🗺️ Prints the materialization order of the assets
    Plan {
        #[command(flatten)]
        document: DocumentArgs,
    },

    /// 🔍 Lists assets with their dependencies, partitions and checks
    Inspect {
        #[command(flatten)]
        document: DocumentArgs,
    },

    /// 🧹 Prints (or writes back) the canonical form of the document
    Fmt {
        #[command(flatten)]
        document: DocumentArgs,

        /// Rewrite the file in place instead of printing it
        #[arg(long)]
        write: bool,
    },
}

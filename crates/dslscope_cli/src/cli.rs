//! CLI argument definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use dslscope_core::render::OutputFormat;

/// dslscope - Structural analyzer for design DSL documents
#[derive(Parser)]
#[command(name = "dslscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API token (defaults to MASTERGO_TOKEN)
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    /// API endpoint (defaults to MASTERGO_ENDPOINT)
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a DSL document
    Analyze {
        /// Design URL or short link to fetch
        url: Option<String>,

        /// Read the DSL JSON from stdin
        #[arg(long, conflicts_with_all = ["url", "input"])]
        stdin: bool,

        /// Read the DSL JSON from a file
        #[arg(short, long, conflicts_with = "url")]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Tree)]
        format: Format,

        /// Emit compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Run a single extractor and print its JSON result
    Extract {
        /// What to extract
        #[arg(value_enum)]
        kind: ExtractKind,

        /// Read the DSL JSON from a file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Pretty print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Fetch the DSL document of a layer
    GetDsl {
        #[command(flatten)]
        layer: LayerArgs,

        /// Pretty print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Fetch the site metadata of a layer
    Meta {
        #[command(flatten)]
        layer: LayerArgs,
    },

    /// Fetch component documentation
    Docs {
        /// Documentation URLs to fetch
        urls: Vec<String>,

        /// Also fetch every component link found in a DSL document
        #[arg(long)]
        from_dsl: bool,

        /// DSL document for --from-dsl (defaults to stdin)
        #[arg(short, long, requires = "from_dsl")]
        input: Option<PathBuf>,

        /// Output a JSON object keyed by URL
        #[arg(long)]
        json: bool,
    },
}

/// Layer selection shared by the fetching commands.
#[derive(Args)]
pub struct LayerArgs {
    /// Design URL or short link
    pub url: Option<String>,

    /// File ID
    #[arg(long, conflicts_with = "url", requires = "layer_id")]
    pub file_id: Option<String>,

    /// Layer ID
    #[arg(long, conflicts_with = "url", requires = "file_id")]
    pub layer_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Tree,
    Json,
    Flat,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Tree => OutputFormat::Tree,
            Format::Json => OutputFormat::Json,
            Format::Flat => OutputFormat::Flat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExtractKind {
    Texts,
    Navigations,
    Components,
    Tokens,
    Tree,
}

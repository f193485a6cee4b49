use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roimap")]
#[command(about = "ROI calculator for process-improvement indicators", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute ROI metrics for one indicator record
    Indicator {
        /// JSON file holding the indicator record
        path: PathBuf,

        /// Output format (defaults to the configured format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Dry run the persistence step against an in-memory store
        #[arg(long)]
        store: bool,
    },

    /// Aggregate ROI metrics over a project's indicators
    Project {
        /// JSON file shaped {"project": {...}, "indicators": [...]}
        path: PathBuf,

        /// Project id to aggregate (defaults to project.id in the file)
        #[arg(long = "project-id", env = "ROIMAP_PROJECT_ID")]
        project_id: Option<String>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run a category calculator on a baseline and a post-change payload
    Category {
        /// Category label, e.g. RevenueIncrease or reducao-custo
        category: String,

        /// JSON file with the baseline payload
        baseline: PathBuf,

        /// JSON file with the post-change payload
        post_change: PathBuf,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize a .roimap.toml configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

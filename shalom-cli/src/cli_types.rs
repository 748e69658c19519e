//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use shalom_lib::VisualType;

#[derive(Parser)]
#[command(name = "shalom")]
#[command(about = "Browse the Shalom archive catalog", long_about = None)]
pub(crate) struct Cli {
    /// Settings file (defaults to ~/.config/shalom/settings.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Source table: a base URL (http/https) or a local CSV file
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    /// Media directory to match records against (e.g. ./public/data)
    #[arg(short, long, global = true)]
    pub assets: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show record, type, year and tag totals
    Summary,

    /// List the distinct years with their record counts
    Years,

    /// Move the year cursor to a year and list its records
    Year {
        /// Year to show (defaults to the earliest year)
        year: Option<i32>,
    },

    /// List tags with their counts
    Tags {
        /// Only tags used by records of this type (dove or hawk)
        #[arg(short = 't', long = "type")]
        visual_type: Option<VisualType>,

        /// Only tags that appear next to this tag
        #[arg(long)]
        related: Option<String>,
    },

    /// List records carrying every given tag
    Filter {
        /// Tag to select (repeatable)
        #[arg(long = "tag", required = true)]
        tags: Vec<String>,

        /// Match records carrying any of the tags instead of all
        #[arg(long)]
        any: bool,
    },

    /// Search headlines, texts and tags (case-insensitive)
    Search {
        query: String,
    },

    /// Show records drawn at random
    Random {
        /// Number of records to draw
        #[arg(short, long, default_value_t = 5)]
        count: usize,

        /// Only draw records of this type (dove or hawk)
        #[arg(short = 't', long = "type")]
        visual_type: Option<VisualType>,
    },

    /// List records dated within an inclusive year range
    Range {
        start: i32,
        end: i32,
    },

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Show the effective settings
    Show,
}

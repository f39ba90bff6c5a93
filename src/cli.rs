//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bloglist - blog list service with like statistics
///
/// Serves a JSON API for storing blog entries and reporting who
/// writes the most and who collects the most likes.
///
/// Examples:
///   bloglist
///   bloglist --port 8080 --seed blogs.json
///   bloglist --report blogs.json --format json -o stats.json
///   bloglist --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, value_name = "HOST", env = "BLOGLIST_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, value_name = "PORT", env = "BLOGLIST_PORT")]
    pub port: Option<u16>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .bloglist.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON file of blogs to load into the store at startup
    #[arg(long, value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Disable permissive CORS headers
    #[arg(long)]
    pub no_cors: bool,

    /// Print statistics for a JSON file of blogs instead of serving
    ///
    /// The file holds an array of blogs in the same shape the API returns.
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE", requires = "report")]
    pub output: Option<PathBuf>,

    /// Report format (markdown, json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Number of authors listed in report tables
    #[arg(long, value_name = "COUNT")]
    pub top_authors: Option<usize>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .bloglist.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if self.port == Some(0) {
            return Err("Port must be between 1 and 65535".to_string());
        }

        if self.top_authors == Some(0) {
            return Err("Top authors must be at least 1".to_string());
        }

        if let Some(ref report) = self.report {
            if !report.is_file() {
                return Err(format!("Report input does not exist: {}", report.display()));
            }
        }

        if let Some(ref seed) = self.seed {
            if !seed.is_file() {
                return Err(format!("Seed file does not exist: {}", seed.display()));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

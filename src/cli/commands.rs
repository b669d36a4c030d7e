//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "newshead")]
#[command(about = "Head meta-tag renderer for news content", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Post slug to render head tags for (content/<slug>.md)
    #[arg(value_name = "SLUG")]
    pub slug: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new content root
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Site base URL
        #[arg(short, long, default_value = "https://example.org")]
        site: String,
    },

    /// List posts in the content directory
    List,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

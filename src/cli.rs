use clap::{Parser, Subcommand};
use snaker::Case;
use std::path::PathBuf;

/// Convert identifiers between snake_case and camelCase, keeping initialisms intact
#[derive(Parser, Debug)]
#[command(name = "snaker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert identifiers to another case
    Convert {
        /// Identifiers to convert; read from --input files or stdin when empty
        idents: Vec<String>,

        /// Target case: snake, upper_camel or lower_camel
        #[arg(short, long)]
        to: Option<Case>,

        /// Files with one identifier per line
        #[arg(short, long)]
        input: Vec<PathBuf>,

        /// Path to the configuration file
        #[arg(short, long, default_value = "snaker.toml")]
        config: PathBuf,

        /// Enable verbose output
        #[arg(short, long, default_value = "false")]
        verbose: bool,
    },

    /// Print the words an identifier is split into
    Split {
        /// Identifiers to split; read from stdin when empty
        idents: Vec<String>,

        /// Placed between the words
        #[arg(short, long)]
        separator: Option<String>,

        /// Path to the configuration file
        #[arg(short, long, default_value = "snaker.toml")]
        config: PathBuf,
    },

    /// List the recognized initialisms
    Initialisms,

    /// Initialize a new configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(short, long, default_value = "snaker.toml")]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(short, long, default_value = "false")]
        force: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

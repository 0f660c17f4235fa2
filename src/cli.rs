use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// microtopo - microscope device topology checker
#[derive(Parser, Debug)]
#[command(name = "microtopo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (one JSON event per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Config file (default: microtopo.toml next to the topology file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the components of a topology file
    Parse {
        /// Topology file (*.odm.yaml)
        file: PathBuf,
    },

    /// Validate a topology file (exits non-zero on errors)
    Check {
        /// Topology file (*.odm.yaml)
        file: PathBuf,

        /// Fail on warnings too (CI mode)
        #[arg(long)]
        strict_warnings: bool,
    },

    /// Print the order in which components have to be instantiated
    Order {
        /// Topology file (*.odm.yaml)
        file: PathBuf,
    },

    /// Print which metadata each affects edge keeps up to date
    Affects {
        /// Topology file (*.odm.yaml)
        file: PathBuf,
    },

    /// List components by role
    Roles {
        /// Topology file (*.odm.yaml)
        file: PathBuf,

        /// Only show components with this role
        role: Option<String>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Parse { .. } => "parse",
            Commands::Check { .. } => "check",
            Commands::Order { .. } => "order",
            Commands::Affects { .. } => "affects",
            Commands::Roles { .. } => "roles",
        }
    }
}

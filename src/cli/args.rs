//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::ClassCategory;

/// Schema-typed NeXus base classes: typed accessors, node factory and NXDL tooling
#[derive(Parser, Debug)]
#[command(name = "nxbind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Project directory for local config (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List known base classes
    Classes {
        /// Only classes of this category
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },

    /// Show fields, groups and attributes of a class
    Describe {
        /// Class name, e.g. NXsample
        class: String,
        /// Print the definition as TOML
        #[arg(long)]
        toml: bool,
    },

    /// Create an empty instance through the node factory
    Create {
        /// Class name, e.g. NXdetector
        class: String,
        /// Use this object id instead of drawing a fresh one
        #[arg(long)]
        oid: Option<u64>,
    },

    /// Build a tree from node specs and print it
    ///
    /// SPEC is PATH (a group, last segment with class), PATH=VALUE[@UNITS]
    /// or PATH->TARGET, e.g. /entry:NXentry/sample:NXsample/temperature=300@K
    Build {
        /// Node specs, applied in order
        #[arg(required = true)]
        specs: Vec<String>,
        /// Validate the tree after building
        #[arg(long)]
        validate: bool,
        /// File name recorded as the tree source
        #[arg(long)]
        uri: Option<String>,
    },

    /// Build a tree from node specs and validate it
    Validate {
        /// Node specs, applied in order
        #[arg(required = true)]
        specs: Vec<String>,
    },

    /// Parse an NXDL file and show the definition
    Nxdl {
        /// Path to a *.nxdl.xml file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Print the definition as TOML
        #[arg(long)]
        toml: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Print a commented config template
    Template,

    /// Show config paths
    Path,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryArg {
    Base,
    Contributed,
    Application,
}

impl From<CategoryArg> for ClassCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Base => ClassCategory::Base,
            CategoryArg::Contributed => ClassCategory::Contributed,
            CategoryArg::Application => ClassCategory::Application,
        }
    }
}

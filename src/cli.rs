//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for assetr using the `clap` crate.
//!
//! # Commands
//!
//! - **list**: Show assets per section, optionally filtered by section and type
//! - **import**: Add files to a section, as a file picker would
//! - **drop**: Simulate a drop (an asset id, files, or both) onto a section
//! - **move** / **delete**: Reassign or remove an asset by id
//! - **config**: Read or change configuration settings
//!
//! # Examples
//!
//! ```
//! use assetr::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["assetr", "move", "abc", "target"]);
//! assert!(matches!(cli.command, Some(Commands::Move { .. })));
//! ```

use crate::assets::{AssetType, Section};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Section argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionArg {
    Source,
    Target,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Source => Self::Source,
            SectionArg::Target => Self::Target,
        }
    }
}

/// Asset type argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeArg {
    Image,
    Audio,
    Video,
}

impl From<TypeArg> for AssetType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Image => Self::Image,
            TypeArg::Audio => Self::Audio,
            TypeArg::Video => Self::Video,
        }
    }
}

/// A two-bucket media asset sorter
#[derive(Parser, Debug)]
#[command(name = "assetr", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Use this database directory instead of the configured one
    #[arg(long = "db", value_name = "PATH", global = true)]
    pub db: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List assets (default)
    #[command(visible_alias = "ls")]
    List {
        /// Only show this section
        #[arg(short = 's', long = "section", value_enum)]
        section: Option<SectionArg>,

        /// Only show assets of this type
        #[arg(short = 't', long = "type", value_enum)]
        asset_type: Option<TypeArg>,
    },

    /// Import files into a section
    #[command(visible_alias = "i")]
    Import {
        /// Target section (defaults to the configured default section)
        #[arg(short = 's', long = "section", value_enum)]
        section: Option<SectionArg>,

        /// Files to import
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Drop an asset id or files onto a section
    Drop {
        /// Section receiving the drop (defaults to the configured default section)
        #[arg(short = 's', long = "section", value_enum)]
        section: Option<SectionArg>,

        /// Plain-text payload; an asset id moves that asset
        #[arg(long = "text", value_name = "ID")]
        text: Option<String>,

        /// Files carried by the drop
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Move an asset to another section
    #[command(visible_alias = "mv")]
    Move {
        /// Asset id
        id: String,

        /// Destination section (defaults to the section it is not in)
        #[arg(value_enum)]
        section: Option<SectionArg>,
    },

    /// Delete an asset
    #[command(visible_alias = "rm")]
    Delete {
        /// Asset id
        id: String,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value (key=value)
    Set {
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Print a configuration value
    Get {
        key: String,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run, defaulting to an unfiltered `list`
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List {
            section: None,
            asset_type: None,
        })
    }
}

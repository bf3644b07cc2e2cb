//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Glyph
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `preload`: Scan template files and warm the icon cache
//! - `init`: Initialize glyph configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by commands that operate on a project tree.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory to scan
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Icon component identifier (overrides config file)
    #[arg(long, env = "GLYPH_NAME")]
    pub name: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct PreloadCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Preload every icon statically referenced by the project's templates
    Preload(PreloadCommand),
    /// Initialize a new .glyphrc.json configuration file
    Init,
}

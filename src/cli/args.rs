//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// nodevm - Per-user Node.js version manager.
#[derive(Debug, Parser)]
#[command(name = "nodevm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding downloaded and installed versions (default: ~/.nodevm)
    #[arg(long, global = true, env = "NODEVM_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Base URL Node.js distributions are downloaded from
    #[arg(long, global = true, env = "NODEVM_MIRROR", value_name = "URL")]
    pub mirror: Option<String>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download, install and switch to a Node.js version
    #[command(long_about = "Automatically download, install, and symlink the given Node.js version.")]
    Use(UseArgs),

    /// List installed Node.js versions
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show the active Node.js version
    Current,

    /// Show the nodevm version
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `use` command.
#[derive(Debug, Clone, clap::Args)]
pub struct UseArgs {
    /// Exact version to activate (e.g. 18.16.0)
    #[arg(id = "node_version", value_name = "VERSION")]
    pub version: String,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

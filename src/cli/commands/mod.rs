//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`].

pub mod completions;
pub mod current;
pub mod dispatcher;
pub mod list;
pub mod use_version;
pub mod version;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

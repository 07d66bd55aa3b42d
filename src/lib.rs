//! nodevm - Per-user Node.js version manager.
//!
//! nodevm keeps every Node.js version it installs under one managed root
//! (`~/.nodevm` by default) and switches between them by repointing a single
//! `bin` symlink. Putting `<root>/bin` on `PATH` is all a shell needs.
//!
//! # Modules
//!
//! - [`archive`] - Archive extraction
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Process-wide settings
//! - [`download`] - Archive retrieval over HTTP
//! - [`error`] - Error types and result aliases
//! - [`manager`] - The download, unarchive and link pipeline
//! - [`naming`] - Versions, installation names and download URLs
//! - [`paths`] - Managed directory layout
//! - [`platform`] - Host OS and architecture naming
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use nodevm::{InstallationName, Platform, Version};
//!
//! let name = InstallationName::new(
//!     Version::parse("v18.16.0").unwrap(),
//!     Platform::new("linux", "amd64"),
//! );
//! assert_eq!(name.to_string(), "node-v18.16.0-linux-x64");
//! assert_eq!(
//!     name.download_url("https://nodejs.org/dist"),
//!     "https://nodejs.org/dist/v18.16.0/node-v18.16.0-linux-x64.tar.gz"
//! );
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod manager;
pub mod naming;
pub mod paths;
pub mod platform;
pub mod ui;

pub use config::Config;
pub use error::{NodevmError, Result};
pub use manager::{ActivationOutcome, Stage, VersionManager};
pub use naming::{InstallationName, Version};
pub use paths::Layout;
pub use platform::Platform;

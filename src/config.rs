//! Process-wide configuration.
//!
//! A [`Config`] is built once, at startup, and passed to every operation. The
//! core never reads environment variables itself; the CLI resolves flags and
//! their `NODEVM_*` fallbacks and hands the results to [`Config::resolve`].

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{NodevmError, Result};
use crate::naming::DEFAULT_MIRROR;
use crate::paths::Layout;

/// Name of the managed root directory inside the user's home.
pub const DEFAULT_DIR_NAME: &str = ".nodevm";

/// Connect timeout used when none is configured.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings shared by every version-management operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Managed root containing `sources/`, `versions/` and `bin`.
    pub root: PathBuf,
    /// Base URL distributions are downloaded from.
    pub mirror: String,
    /// Upper bound on establishing a connection to the mirror.
    pub connect_timeout: Duration,
}

impl Config {
    /// Resolve configuration from optional overrides.
    ///
    /// Without a `dir` override the root is `~/.nodevm`; this is the only
    /// place the home directory is looked up.
    ///
    /// A relative `dir` is anchored to the current directory here, since the
    /// active-version symlink stores its target verbatim.
    pub fn resolve(dir: Option<PathBuf>, mirror: Option<String>) -> Result<Self> {
        let root = match dir {
            Some(dir) => std::path::absolute(&dir)?,
            None => dirs::home_dir()
                .ok_or(NodevmError::HomeDirNotFound)?
                .join(DEFAULT_DIR_NAME),
        };
        let mut config = Self::with_root(root);
        if let Some(mirror) = mirror {
            config.mirror = mirror;
        }
        Ok(config)
    }

    /// Configuration rooted at `root` with default mirror and timeout.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            mirror: DEFAULT_MIRROR.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Set the mirror base URL.
    pub fn with_mirror(mut self, mirror: impl Into<String>) -> Self {
        self.mirror = mirror.into();
        self
    }

    /// Directory layout under the managed root.
    pub fn layout(&self) -> Layout {
        Layout::new(self.root.clone())
    }
}

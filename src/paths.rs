//! Managed directory layout.
//!
//! ```text
//! <root>/
//!   bin -> versions/<name>/bin     # active-version pointer (symlink)
//!   sources/<name>.tar.gz          # cached archives
//!   versions/<name>/               # extracted installations
//!     bin/                         # per-version executables
//! ```

use std::path::{Path, PathBuf};

use crate::naming::InstallationName;

/// Fixed paths under one managed root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding cached archives.
    pub fn sources_dir(&self) -> PathBuf {
        self.root.join("sources")
    }

    /// Directory holding extracted installations.
    pub fn versions_dir(&self) -> PathBuf {
        self.root.join("versions")
    }

    /// The active-version symlink.
    pub fn bin_link(&self) -> PathBuf {
        self.root.join("bin")
    }

    pub fn archive_path(&self, name: &InstallationName) -> PathBuf {
        self.sources_dir().join(name.archive_file_name())
    }

    pub fn installation_dir(&self, name: &InstallationName) -> PathBuf {
        self.versions_dir().join(name.to_string())
    }

    /// The directory the active-version symlink targets.
    pub fn installation_bin_dir(&self, name: &InstallationName) -> PathBuf {
        self.installation_dir(name).join("bin")
    }

    /// Scratch directory an archive is unpacked into before it is moved into place.
    pub(crate) fn staging_dir(&self, name: &InstallationName) -> PathBuf {
        self.versions_dir().join(format!(".staging-{}", name))
    }

    /// Temporary symlink path used while swapping the active version.
    pub(crate) fn staged_link(&self) -> PathBuf {
        self.root.join(format!(".bin-{}", std::process::id()))
    }
}

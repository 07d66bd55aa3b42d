//! Version activation and inventory.
//!
//! [`VersionManager::use_version`] drives one version through the activation
//! stages:
//!
//! ```text
//! Uninitialized -> Initialized -> SourceReady -> Extracted -> Linked
//! ```
//!
//! Each stage except linking is skipped when its output already exists, so
//! activating an installed version again only swaps the pointer.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::archive::{Archiver, TarGzArchiver};
use crate::config::Config;
use crate::download::{DownloadError, Downloader, HttpDownloader};
use crate::error::{NodevmError, Result};
use crate::naming::{InstallationName, Version};
use crate::paths::Layout;
use crate::platform::Platform;

/// Stages of the activation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Uninitialized,
    Initialized,
    SourceReady,
    Extracted,
    Linked,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::Initialized => "initialized",
            Self::SourceReady => "source-ready",
            Self::Extracted => "extracted",
            Self::Linked => "linked",
        };
        f.write_str(name)
    }
}

/// What a successful activation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationOutcome {
    /// The activated installation.
    pub installation: InstallationName,
    /// Whether the archive was fetched during this call.
    pub downloaded: bool,
    /// Whether the archive was extracted during this call.
    pub extracted: bool,
    /// Directory the active-version pointer now targets.
    pub bin_dir: PathBuf,
}

/// Installs and activates Node.js versions under one managed root.
pub struct VersionManager<D = HttpDownloader, A = TarGzArchiver> {
    config: Config,
    layout: Layout,
    platform: Platform,
    downloader: D,
    archiver: A,
}

impl VersionManager {
    /// Create a manager for the host platform using HTTP and tar.gz
    /// collaborators.
    pub fn new(config: Config) -> Result<Self> {
        let downloader = HttpDownloader::new(config.connect_timeout)?;
        Ok(Self::with_collaborators(
            config,
            Platform::current(),
            downloader,
            TarGzArchiver,
        ))
    }
}

impl<D: Downloader, A: Archiver> VersionManager<D, A> {
    /// Create a manager with explicit platform and collaborators.
    pub fn with_collaborators(
        config: Config,
        platform: Platform,
        downloader: D,
        archiver: A,
    ) -> Self {
        let layout = config.layout();
        Self {
            config,
            layout,
            platform,
            downloader,
            archiver,
        }
    }

    /// Ensure the managed root and its `sources` and `versions` subtrees exist.
    ///
    /// Directories created before a failure are left in place.
    pub fn init(&self) -> Result<()> {
        for dir in [
            self.layout.root().to_path_buf(),
            self.layout.sources_dir(),
            self.layout.versions_dir(),
        ] {
            if dir.is_dir() {
                continue;
            }
            debug!("Creating {}", dir.display());
            fs::create_dir_all(&dir)
                .map_err(|source| NodevmError::CreateDir { path: dir, source })?;
        }
        Ok(())
    }

    /// Download, extract and activate `version`.
    ///
    /// Stops at the first failing stage. Nothing is rolled back; a later call
    /// resumes from whatever the existence checks find.
    pub fn use_version(&self, version: &Version) -> Result<ActivationOutcome> {
        let name = self.installation_name(version);
        info!("Activating {}", name);

        self.init().map_err(|err| match err {
            NodevmError::CreateDir { path, source } => NodevmError::Prepare {
                version: version.to_string(),
                path,
                source,
            },
            other => other,
        })?;
        debug!(stage = %Stage::Initialized, "{}", name);

        let downloaded = if self.layout.archive_path(&name).exists() {
            debug!("Archive for {} already cached", name);
            false
        } else {
            self.download(&name)?;
            true
        };
        debug!(stage = %Stage::SourceReady, "{}", name);

        let extracted = if self.layout.installation_dir(&name).exists() {
            debug!("{} already extracted", name);
            false
        } else {
            self.unarchive(&name)?;
            true
        };
        debug!(stage = %Stage::Extracted, "{}", name);

        self.link(&name)?;
        debug!(stage = %Stage::Linked, "{}", name);

        info!("Node {} is now active", version);
        Ok(ActivationOutcome {
            bin_dir: self.layout.installation_bin_dir(&name),
            installation: name,
            downloaded,
            extracted,
        })
    }

    /// Fetch the archive for `name` into the source cache.
    pub fn download(&self, name: &InstallationName) -> Result<()> {
        let url = name.download_url(&self.config.mirror);
        let destination = self.layout.archive_path(name);
        info!("Downloading {}", url);

        self.downloader
            .download(&url, &destination)
            .map_err(|err| match err {
                DownloadError::NotFound { url, status } => NodevmError::VersionNotFound {
                    version: name.version().to_string(),
                    url,
                    status,
                },
                other => NodevmError::Download {
                    version: name.version().to_string(),
                    message: other.to_string(),
                },
            })
    }

    /// Extract the cached archive for `name` into `versions/`.
    ///
    /// The archive is unpacked into a staging directory and its top-level
    /// installation directory is renamed into place, so `versions/<name>`
    /// only ever appears complete.
    pub fn unarchive(&self, name: &InstallationName) -> Result<()> {
        let archive = self.layout.archive_path(name);
        let staging = self.layout.staging_dir(name);
        let target = self.layout.installation_dir(name);
        let extract_error = |message: String| NodevmError::Extract {
            version: name.version().to_string(),
            message,
        };

        remove_path(&staging).map_err(|e| extract_error(e.to_string()))?;

        let result = self
            .archiver
            .unarchive(&archive, &staging)
            .map_err(|e| extract_error(format!("{:#}", e)))
            .and_then(|()| {
                let unpacked = staging.join(name.to_string());
                if !unpacked.is_dir() {
                    return Err(extract_error(format!(
                        "archive {} does not contain {}",
                        archive.display(),
                        name
                    )));
                }
                fs::rename(&unpacked, &target).map_err(|e| {
                    extract_error(format!("cannot move into {}: {}", target.display(), e))
                })
            });

        if let Err(e) = remove_path(&staging) {
            debug!("Leaving staging directory {}: {}", staging.display(), e);
        }
        result
    }

    /// Point the active-version symlink at `name`'s `bin` directory.
    ///
    /// The new link is created under a temporary name and renamed over the
    /// pointer path, so readers see either the old target or the new one.
    pub fn link(&self, name: &InstallationName) -> Result<()> {
        let target = self.layout.installation_bin_dir(name);
        let pointer = self.layout.bin_link();
        let staged = self.layout.staged_link();
        debug!("Linking {} -> {}", pointer.display(), target.display());

        let link_error = |source| NodevmError::Link {
            version: name.version().to_string(),
            source,
        };

        remove_path(&staged).map_err(link_error)?;
        symlink_dir(&target, &staged).map_err(link_error)?;

        // rename() replaces files and symlinks but not real directories.
        if needs_clearing(&pointer) {
            remove_path(&pointer).map_err(link_error)?;
        }

        fs::rename(&staged, &pointer).map_err(|source| {
            let _ = remove_path(&staged);
            link_error(source)
        })
    }
}

impl VersionManager<(), ()> {
    /// Create a manager for the host platform that can only answer
    /// inventory queries.
    pub fn read_only(config: Config) -> Self {
        let layout = config.layout();
        Self {
            config,
            layout,
            platform: Platform::current(),
            downloader: (),
            archiver: (),
        }
    }
}

impl<D, A> VersionManager<D, A> {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Installation name of `version` on this manager's platform.
    pub fn installation_name(&self, version: &Version) -> InstallationName {
        InstallationName::new(version.clone(), self.platform.clone())
    }

    /// Versions installed under `versions/`, in no particular order.
    ///
    /// Installations for every platform are reported.
    pub fn list(&self) -> Result<Vec<Version>> {
        Ok(self
            .installations()?
            .into_iter()
            .map(|name| name.version().clone())
            .collect())
    }

    /// Parsed names of every installation under `versions/`.
    pub fn installations(&self) -> Result<Vec<InstallationName>> {
        let versions_dir = self.layout.versions_dir();
        if !versions_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut found = Vec::new();
        for entry in fs::read_dir(&versions_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str().and_then(InstallationName::parse) {
                found.push(name);
            }
        }
        Ok(found)
    }

    /// The installation the active-version pointer targets, if any.
    ///
    /// A pointer whose target has since disappeared is still reported.
    pub fn current(&self) -> Result<Option<InstallationName>> {
        let pointer = self.layout.bin_link();
        let target = match fs::read_link(&pointer) {
            Ok(target) => target,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) if e.kind() == io::ErrorKind::InvalidInput => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(target
            .parent()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .and_then(InstallationName::parse))
    }
}

/// Remove whatever is at `path` (file, symlink or directory tree).
///
/// A missing path is not an error.
fn remove_path(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path).or_else(|e| {
            // Directory symlinks on Windows are removed as directories.
            if cfg!(windows) {
                fs::remove_dir(path)
            } else {
                Err(e)
            }
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Whether `pointer` must be deleted before a rename can replace it.
fn needs_clearing(pointer: &Path) -> bool {
    match fs::symlink_metadata(pointer) {
        Ok(meta) => cfg!(windows) || meta.is_dir(),
        Err(_) => false,
    }
}

#[cfg(unix)]
fn symlink_dir(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_dir(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

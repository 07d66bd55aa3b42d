//! Archive extraction.
//!
//! [`Archiver`] is the seam the version manager unpacks archives through;
//! [`TarGzArchiver`] handles the `.tar.gz` distributions Node.js publishes.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Component, Path};

use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;
use tar::Archive;
use tracing::debug;

/// Unpacks an archive into a directory.
pub trait Archiver {
    /// Extract `archive` under `destination`, preserving its internal
    /// structure (including any top-level directory it contains).
    fn unarchive(&self, archive: &Path, destination: &Path) -> Result<()>;
}

/// Extracts gzip-compressed tarballs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TarGzArchiver;

impl Archiver for TarGzArchiver {
    fn unarchive(&self, archive: &Path, destination: &Path) -> Result<()> {
        debug!("Extracting {} to {}", archive.display(), destination.display());

        fs::create_dir_all(destination)
            .with_context(|| format!("Failed to create directory: {}", destination.display()))?;

        let file = File::open(archive)
            .with_context(|| format!("Failed to open archive: {}", archive.display()))?;
        let mut tarball = Archive::new(GzDecoder::new(BufReader::new(file)));

        let entries = tarball
            .entries()
            .with_context(|| format!("Failed to read tar entries: {}", archive.display()))?;

        for entry in entries {
            let mut entry = entry
                .with_context(|| format!("Failed to read tar entry: {}", archive.display()))?;
            let entry_path = entry
                .path()
                .context("Failed to get entry path")?
                .into_owned();

            if entry_path.is_absolute()
                || entry_path
                    .components()
                    .any(|c| matches!(c, Component::ParentDir))
            {
                bail!(
                    "Refusing to extract path outside the destination: {}",
                    entry_path.display()
                );
            }

            entry
                .unpack_in(destination)
                .with_context(|| format!("Failed to extract: {}", entry_path.display()))?;
        }

        Ok(())
    }
}

/// Write a small distribution-shaped tarball rooted at `root_name`.
#[cfg(test)]
pub(crate) fn write_test_archive(path: &Path, root_name: &str) {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let file = File::create(path).unwrap();
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));

    let node = b"#!/bin/sh\necho node\n";
    let mut header = tar::Header::new_gnu();
    header.set_size(node.len() as u64);
    header.set_mode(0o755);
    header.set_cksum();
    builder
        .append_data(&mut header, format!("{root_name}/bin/node"), node.as_slice())
        .unwrap();

    let license = b"MIT";
    let mut header = tar::Header::new_gnu();
    header.set_size(license.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    builder
        .append_data(&mut header, format!("{root_name}/LICENSE"), license.as_slice())
        .unwrap();

    builder.into_inner().unwrap().finish().unwrap();
}

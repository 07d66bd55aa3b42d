//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::fs::File;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use nodevm::{InstallationName, Platform, Version};

/// Installation name for `version` on the machine running the tests.
pub fn host_installation(version: &str) -> InstallationName {
    InstallationName::new(Version::parse(version).unwrap(), Platform::current())
}

/// Build a gzip tarball laid out like a Node.js distribution.
pub fn distribution_tarball(root_name: &str) -> Vec<u8> {
    let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));

    let node = format!("#!/bin/sh\necho {root_name}\n");
    let mut header = tar::Header::new_gnu();
    header.set_size(node.len() as u64);
    header.set_mode(0o755);
    header.set_cksum();
    builder
        .append_data(&mut header, format!("{root_name}/bin/node"), node.as_bytes())
        .unwrap();

    let mut header = tar::Header::new_gnu();
    header.set_size(0);
    header.set_mode(0o644);
    header.set_cksum();
    builder
        .append_data(&mut header, format!("{root_name}/include/node/.keep"), &[][..])
        .unwrap();

    builder.into_inner().unwrap().finish().unwrap()
}

/// Write [`distribution_tarball`] output to `path`.
pub fn write_distribution_tarball(path: &Path, root_name: &str) {
    use std::io::Write;
    let mut file = File::create(path).unwrap();
    file.write_all(&distribution_tarball(root_name)).unwrap();
}

//! Canonical names for versions, installations, archives and download URLs.
//!
//! Every name nodevm writes to disk or requests from a mirror is produced
//! here, and [`InstallationName::parse`] is the only way a name read back from
//! disk is turned into a version again. Keep [`fmt::Display`] and `parse` in
//! lock-step: `parse(name.to_string()) == Some(name)` for every name.

use std::fmt;

use crate::error::{NodevmError, Result};
use crate::platform::Platform;

/// Default mirror for official Node.js distributions.
pub const DEFAULT_MIRROR: &str = "https://nodejs.org/dist";

/// Prefix shared by every installation directory name.
const NAME_PREFIX: &str = "node-v";

/// Extension of distribution archives.
pub const ARCHIVE_EXTENSION: &str = ".tar.gz";

/// An exact Node.js version token such as `18.16.0`.
///
/// The token is never interpreted as a semantic version. It never carries the
/// leading `v` used in distribution names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version(String);

impl Version {
    /// Parse a user-supplied version, accepting an optional leading `v`.
    ///
    /// ```
    /// use nodevm::naming::Version;
    ///
    /// assert_eq!(Version::parse("v18.16.0").unwrap().as_str(), "18.16.0");
    /// assert!(Version::parse("../18").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let token = trimmed.strip_prefix('v').unwrap_or(trimmed);
        validate_token(token)
            .map(|()| Self(token.to_string()))
            .map_err(|reason| NodevmError::InvalidVersion {
                input: input.to_string(),
                reason,
            })
    }

    /// The bare version token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn validate_token(token: &str) -> std::result::Result<(), &'static str> {
    if token.is_empty() {
        return Err("version must not be empty");
    }
    if token.starts_with('v') {
        return Err("version must have at most one leading 'v'");
    }
    if token.chars().any(char::is_whitespace) {
        return Err("version must not contain whitespace");
    }
    if token.contains(['/', '\\']) || token.contains("..") {
        return Err("version must not contain path separators");
    }
    Ok(())
}

/// Name of one installation: `node-v{version}-{os}-{arch}`.
///
/// The same string names the extracted directory under `versions/` and, with
/// [`ARCHIVE_EXTENSION`] appended, the cached archive under `sources/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstallationName {
    version: Version,
    platform: Platform,
}

impl InstallationName {
    pub fn new(version: Version, platform: Platform) -> Self {
        Self { version, platform }
    }

    /// Parse a directory name produced by [`fmt::Display`].
    ///
    /// The version is everything between the prefix and the last two `-`
    /// separated segments, so versions containing `-` still round-trip.
    /// Returns `None` for names that are not installation names.
    pub fn parse(name: &str) -> Option<Self> {
        let rest = name.strip_prefix(NAME_PREFIX)?;
        let mut parts = rest.rsplitn(3, '-');
        let arch = parts.next()?;
        let os = parts.next()?;
        let version = parts.next()?;
        if arch.is_empty() || os.is_empty() {
            return None;
        }
        validate_token(version).ok()?;
        Some(Self {
            version: Version(version.to_string()),
            platform: Platform::new(os, arch),
        })
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// File name of the cached archive for this installation.
    pub fn archive_file_name(&self) -> String {
        format!("{}{}", self, ARCHIVE_EXTENSION)
    }

    /// URL of the distribution archive on `mirror`.
    pub fn download_url(&self, mirror: &str) -> String {
        format!(
            "{}/v{}/{}",
            mirror.trim_end_matches('/'),
            self.version,
            self.archive_file_name()
        )
    }
}

impl fmt::Display for InstallationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}-{}-{}",
            NAME_PREFIX,
            self.version,
            self.platform.os(),
            self.platform.arch()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linux_amd64() -> Platform {
        Platform::new("linux", "amd64")
    }

    fn name(version: &str) -> InstallationName {
        InstallationName::new(Version::parse(version).unwrap(), linux_amd64())
    }

    #[test]
    fn installation_name_for_linux_amd64() {
        assert_eq!(name("18.16.0").to_string(), "node-v18.16.0-linux-x64");
    }

    #[test]
    fn archive_file_name_appends_extension() {
        let n = name("18.16.0");
        assert_eq!(n.archive_file_name(), "node-v18.16.0-linux-x64.tar.gz");
        assert_eq!(n.archive_file_name(), format!("{}.tar.gz", n));
    }

    #[test]
    fn download_url_embeds_archive_name() {
        let n = name("18.16.0");
        let url = n.download_url(DEFAULT_MIRROR);
        assert_eq!(
            url,
            "https://nodejs.org/dist/v18.16.0/node-v18.16.0-linux-x64.tar.gz"
        );
        assert!(url.ends_with(&format!("/v18.16.0/{}", n.archive_file_name())));
    }

    #[test]
    fn download_url_trims_trailing_slash() {
        let url = name("20.1.0").download_url("http://127.0.0.1:8080/");
        assert_eq!(
            url,
            "http://127.0.0.1:8080/v20.1.0/node-v20.1.0-linux-x64.tar.gz"
        );
    }

    #[test]
    fn naming_is_deterministic() {
        assert_eq!(name("16.20.2"), name("16.20.2"));
        assert_eq!(name("16.20.2").to_string(), name("16.20.2").to_string());
    }

    #[test]
    fn distinct_versions_give_distinct_names() {
        let versions = ["18.16.0", "18.16.1", "18.1.60", "1.8.16", "20.0.0-rc.1"];
        let names: std::collections::HashSet<String> =
            versions.iter().map(|v| name(v).to_string()).collect();
        assert_eq!(names.len(), versions.len());
    }

    #[test]
    fn parse_inverts_display() {
        for v in ["18.16.0", "0.10.48", "20.0.0-rc.1", "21.0.0-nightly20231010"] {
            let n = name(v);
            assert_eq!(InstallationName::parse(&n.to_string()), Some(n));
        }
    }

    #[test]
    fn parse_extracts_version_and_platform() {
        let parsed = InstallationName::parse("node-v20.5.1-darwin-arm64").unwrap();
        assert_eq!(parsed.version().as_str(), "20.5.1");
        assert_eq!(parsed.platform(), &Platform::new("macos", "aarch64"));
    }

    #[test]
    fn parse_rejects_foreign_names() {
        assert!(InstallationName::parse("python-3.11").is_none());
        assert!(InstallationName::parse("node-v18.16.0").is_none());
        assert!(InstallationName::parse("node-v-linux-x64").is_none());
        assert!(InstallationName::parse(".staging-node-v18.16.0-linux-x64").is_none());
    }

    #[test]
    fn version_strips_single_leading_v() {
        assert_eq!(Version::parse("v18.16.0").unwrap().as_str(), "18.16.0");
        assert_eq!(Version::parse("18.16.0").unwrap().as_str(), "18.16.0");
        assert!(Version::parse("vv18").is_err());
    }

    #[test]
    fn version_rejects_unsafe_tokens() {
        for bad in ["", "  ", "18 16", "../18.0.0", "18/0", "18\\0"] {
            assert!(
                matches!(
                    Version::parse(bad),
                    Err(NodevmError::InvalidVersion { .. })
                ),
                "expected {:?} to be rejected",
                bad
            );
        }
    }
}

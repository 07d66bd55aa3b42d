//! Platform detection for Node.js distribution downloads.
//!
//! Node.js publishes one archive per operating system and CPU architecture,
//! named with its own vocabulary (`linux-x64`, `darwin-arm64`, ...). This
//! module maps host names onto that vocabulary.

use std::fmt;

/// The (operating system, architecture) pair of a distribution variant.
///
/// Both fields are stored already normalized, so two platforms that name the
/// same distribution compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    os: String,
    arch: String,
}

impl Platform {
    /// Build a platform tag from host-style names, normalizing both parts.
    pub fn new(os: &str, arch: &str) -> Self {
        Self {
            os: normalize_os(os).to_string(),
            arch: normalize_arch(arch).to_string(),
        }
    }

    /// Detect the platform of the running host.
    pub fn current() -> Self {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Operating system as it appears in distribution names.
    pub fn os(&self) -> &str {
        &self.os
    }

    /// Architecture as it appears in distribution names.
    pub fn arch(&self) -> &str {
        &self.arch
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

/// Map an architecture name onto the Node.js distribution name.
///
/// Accepts both Go-style (`amd64`, `386`) and Rust-style (`x86_64`, `x86`)
/// names. Unknown architectures pass through unchanged.
pub fn normalize_arch(arch: &str) -> &str {
    match arch {
        "amd64" | "x86_64" => "x64",
        "386" | "x86" => "x86",
        "aarch64" => "arm64",
        other => other,
    }
}

/// Map an operating-system name onto the Node.js distribution name.
pub fn normalize_os(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        "windows" => "win",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amd64_normalizes_to_x64() {
        assert_eq!(normalize_arch("amd64"), "x64");
        assert_eq!(normalize_arch("x86_64"), "x64");
    }

    #[test]
    fn i386_normalizes_to_x86() {
        assert_eq!(normalize_arch("386"), "x86");
        assert_eq!(normalize_arch("x86"), "x86");
    }

    #[test]
    fn unknown_arch_passes_through() {
        assert_eq!(normalize_arch("ppc64le"), "ppc64le");
        assert_eq!(normalize_arch("s390x"), "s390x");
    }

    #[test]
    fn normalization_is_idempotent() {
        for arch in ["amd64", "386", "aarch64", "armv7l"] {
            let once = normalize_arch(arch);
            assert_eq!(normalize_arch(once), once);
        }
    }

    #[test]
    fn macos_is_named_darwin() {
        assert_eq!(Platform::new("macos", "aarch64").to_string(), "darwin-arm64");
    }

    #[test]
    fn linux_amd64_platform() {
        let platform = Platform::new("linux", "amd64");
        assert_eq!(platform.os(), "linux");
        assert_eq!(platform.arch(), "x64");
        assert_eq!(platform, Platform::new("linux", "x86_64"));
    }

    #[test]
    fn current_platform_is_normalized() {
        let platform = Platform::current();
        assert_eq!(normalize_arch(platform.arch()), platform.arch());
        assert!(!platform.os().is_empty());
    }
}

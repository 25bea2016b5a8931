//! Host platform selection for platform-scoped properties

use std::env;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The platform a PIPL is produced for.
///
/// Windows and macOS hosts read different entry point keys, so every encode
/// call names the platform explicitly. [`HostPlatform::current`] gives the
/// platform of the running process, which is what build tooling normally wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HostPlatform {
    Windows,
    Mac,
}

impl HostPlatform {
    /// Detect the current platform
    #[must_use]
    pub fn current() -> Self {
        Self::from_os(env::consts::OS)
    }

    /// Map an OS name as reported by `std::env::consts::OS`.
    ///
    /// Anything that is not Windows builds the macOS layout.
    #[must_use]
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            _ => Self::Mac,
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Mac => write!(f, "mac"),
        }
    }
}

/// Which hosts a property definition applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum PlatformScope {
    Universal,
    WindowsOnly,
    MacOnly,
}

impl PlatformScope {
    /// Returns whether a property with this scope is written for `platform`.
    #[must_use]
    pub const fn applies_to(&self, platform: HostPlatform) -> bool {
        matches!(
            (self, platform),
            (Self::Universal, _)
                | (Self::WindowsOnly, HostPlatform::Windows)
                | (Self::MacOnly, HostPlatform::Mac)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_detection() {
        let platform = HostPlatform::current();

        #[cfg(target_os = "windows")]
        assert_eq!(platform, HostPlatform::Windows);

        #[cfg(not(target_os = "windows"))]
        assert_eq!(platform, HostPlatform::Mac);
    }

    #[test]
    fn test_from_os() {
        assert_eq!(HostPlatform::from_os("windows"), HostPlatform::Windows);
        assert_eq!(HostPlatform::from_os("macos"), HostPlatform::Mac);
        assert_eq!(HostPlatform::from_os("linux"), HostPlatform::Mac);
    }

    #[test]
    fn test_scope_applies_to() {
        assert!(PlatformScope::Universal.applies_to(HostPlatform::Windows));
        assert!(PlatformScope::Universal.applies_to(HostPlatform::Mac));
        assert!(PlatformScope::WindowsOnly.applies_to(HostPlatform::Windows));
        assert!(!PlatformScope::WindowsOnly.applies_to(HostPlatform::Mac));
        assert!(PlatformScope::MacOnly.applies_to(HostPlatform::Mac));
        assert!(!PlatformScope::MacOnly.applies_to(HostPlatform::Windows));
    }
}

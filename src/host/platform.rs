//! Platform identification.

use serde::Serialize;

use crate::error::{Result, WizError};

/// Operating system family the catalog can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
}

impl Platform {
    /// Map a `std::env::consts::OS` style name to a platform.
    pub fn from_os(os: &str) -> Result<Self> {
        match os {
            "windows" => Ok(Platform::Windows),
            "macos" => Ok(Platform::MacOS),
            "linux" => Ok(Platform::Linux),
            other => Err(WizError::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }

    /// Human-readable platform name.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOS => "macOS",
            Platform::Linux => "Linux",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What the probe learned about the machine.
///
/// Produced once at startup and passed by reference into the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostEnvironment {
    pub platform: Platform,
    /// Only set on Linux.
    pub package_manager: Option<String>,
}

impl HostEnvironment {
    /// A Windows host.
    pub fn windows() -> Self {
        Self {
            platform: Platform::Windows,
            package_manager: None,
        }
    }

    /// A macOS host.
    pub fn macos() -> Self {
        Self {
            platform: Platform::MacOS,
            package_manager: None,
        }
    }

    /// A Linux host using the given package manager.
    pub fn linux(package_manager: &str) -> Self {
        Self {
            platform: Platform::Linux,
            package_manager: Some(package_manager.to_string()),
        }
    }

    /// The `install_commands` key this host reads.
    ///
    /// `windows` and `macos` key off the platform; Linux keys off the
    /// detected package manager name.
    pub fn install_key(&self) -> Option<&str> {
        match self.platform {
            Platform::Windows => Some("windows"),
            Platform::MacOS => Some("macos"),
            Platform::Linux => self.package_manager.as_deref(),
        }
    }

    /// One-line description for status output.
    pub fn describe(&self) -> String {
        match &self.package_manager {
            Some(pm) => format!("{} ({})", self.platform, pm),
            None => self.platform.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_os_maps_supported_platforms() {
        assert_eq!(Platform::from_os("windows").unwrap(), Platform::Windows);
        assert_eq!(Platform::from_os("macos").unwrap(), Platform::MacOS);
        assert_eq!(Platform::from_os("linux").unwrap(), Platform::Linux);
    }

    #[test]
    fn from_os_rejects_unknown() {
        let err = Platform::from_os("freebsd").unwrap_err();
        assert!(matches!(err, WizError::UnsupportedPlatform { ref os } if os == "freebsd"));
    }

    #[test]
    fn install_key_per_platform() {
        assert_eq!(HostEnvironment::windows().install_key(), Some("windows"));
        assert_eq!(HostEnvironment::macos().install_key(), Some("macos"));
        assert_eq!(HostEnvironment::linux("pacman").install_key(), Some("pacman"));
    }

    #[test]
    fn linux_without_manager_has_no_key() {
        let host = HostEnvironment {
            platform: Platform::Linux,
            package_manager: None,
        };
        assert_eq!(host.install_key(), None);
    }

    #[test]
    fn describe_includes_package_manager() {
        assert_eq!(HostEnvironment::linux("dnf").describe(), "Linux (dnf)");
        assert_eq!(HostEnvironment::macos().describe(), "macOS");
    }
}

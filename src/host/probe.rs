//! Package manager probe.
//!
//! On Linux the installer for each dependency depends on which system
//! package manager is present. The probe walks a fixed candidate list
//! against a fixed list of directories and takes the first executable hit.
//! Candidate order wins over directory order: `apt` in `/bin/` beats
//! `pacman` in `/usr/bin/`.

use std::path::{Path, PathBuf};

use crate::error::{Result, WizError};

use super::platform::{HostEnvironment, Platform};

/// Package manager binaries, in priority order.
pub const PACKAGE_MANAGER_CANDIDATES: &[&str] = &["apt", "pacman", "dnf"];

/// Directories searched for each candidate, in order.
pub const SEARCH_DIRS: &[&str] = &["/usr/bin/", "/bin/"];

/// Check whether a path is a file the current user may execute.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    if !path.is_file() {
        return false;
    }
    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string that outlives the call
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Find the first candidate binary present in any of the search directories.
pub fn find_package_manager<F>(candidates: &[&str], dirs: &[&str], is_exec: F) -> Option<String>
where
    F: Fn(&Path) -> bool,
{
    for candidate in candidates {
        for dir in dirs {
            let path = PathBuf::from(dir).join(candidate);
            if is_exec(&path) {
                tracing::debug!("Found package manager {} at {}", candidate, path.display());
                return Some(candidate.to_string());
            }
        }
    }
    None
}

/// Probe the running host.
///
/// `package_manager_override` skips the Linux filesystem probe; it is
/// ignored on Windows and macOS, which never key installs off a manager.
pub fn probe(package_manager_override: Option<&str>) -> Result<HostEnvironment> {
    probe_with(std::env::consts::OS, package_manager_override, is_executable)
}

/// Probe with an explicit OS name and filesystem check.
///
/// This allows testing the Linux path on any host.
pub fn probe_with<F>(
    os: &str,
    package_manager_override: Option<&str>,
    is_exec: F,
) -> Result<HostEnvironment>
where
    F: Fn(&Path) -> bool,
{
    let platform = Platform::from_os(os)?;

    match platform {
        Platform::Windows => Ok(HostEnvironment::windows()),
        Platform::MacOS => Ok(HostEnvironment::macos()),
        Platform::Linux => {
            if let Some(name) = package_manager_override {
                tracing::debug!("Using package manager override: {}", name);
                return Ok(HostEnvironment::linux(name));
            }

            find_package_manager(PACKAGE_MANAGER_CANDIDATES, SEARCH_DIRS, is_exec)
                .map(|pm| HostEnvironment::linux(&pm))
                .ok_or_else(|| WizError::NoPackageManager {
                    searched: PACKAGE_MANAGER_CANDIDATES.join(", "),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn fake_fs(present: &[&str]) -> impl Fn(&Path) -> bool {
        let present: HashSet<PathBuf> = present.iter().map(PathBuf::from).collect();
        move |p: &Path| present.contains(p)
    }

    #[test]
    fn linux_picks_first_candidate() {
        let host = probe_with("linux", None, fake_fs(&["/usr/bin/apt", "/usr/bin/dnf"])).unwrap();
        assert_eq!(host, HostEnvironment::linux("apt"));
    }

    #[test]
    fn candidate_order_beats_directory_order() {
        let host = probe_with("linux", None, fake_fs(&["/usr/bin/pacman", "/bin/apt"])).unwrap();
        assert_eq!(host.package_manager.as_deref(), Some("apt"));
    }

    #[test]
    fn falls_back_to_second_directory() {
        let host = probe_with("linux", None, fake_fs(&["/bin/dnf"])).unwrap();
        assert_eq!(host.package_manager.as_deref(), Some("dnf"));
    }

    #[test]
    fn linux_without_manager_is_an_error() {
        let err = probe_with("linux", None, fake_fs(&[])).unwrap_err();
        match err {
            WizError::NoPackageManager { searched } => {
                assert_eq!(searched, "apt, pacman, dnf");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn override_skips_filesystem_probe() {
        let host = probe_with("linux", Some("zypper"), fake_fs(&[])).unwrap();
        assert_eq!(host.package_manager.as_deref(), Some("zypper"));
    }

    #[test]
    fn windows_and_macos_have_no_manager() {
        let win = probe_with("windows", Some("apt"), fake_fs(&[])).unwrap();
        assert_eq!(win, HostEnvironment::windows());

        let mac = probe_with("macos", None, fake_fs(&["/usr/bin/apt"])).unwrap();
        assert_eq!(mac, HostEnvironment::macos());
    }

    #[test]
    fn unsupported_os_fails() {
        let err = probe_with("haiku", None, fake_fs(&[])).unwrap_err();
        assert!(matches!(err, WizError::UnsupportedPlatform { .. }));
    }

    #[test]
    fn find_package_manager_respects_custom_lists() {
        let found = find_package_manager(
            &["brew"],
            &["/opt/homebrew/bin"],
            fake_fs(&["/opt/homebrew/bin/brew"]),
        );
        assert_eq!(found.as_deref(), Some("brew"));
    }

    #[cfg(unix)]
    #[test]
    fn is_executable_checks_permission_bits() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let script = temp.path().join("apt");
        std::fs::write(&script, "#!/bin/sh\n").unwrap();

        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o644)).unwrap();
        assert!(!is_executable(&script));

        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert!(is_executable(&script));
    }

    #[test]
    fn is_executable_rejects_directories() {
        let temp = tempfile::TempDir::new().unwrap();
        assert!(!is_executable(temp.path()));
    }
}

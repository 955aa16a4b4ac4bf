//! Host environment probing.
//!
//! Detects the operating system family and, on Linux, which system package
//! manager is installed. The result is an immutable [`HostEnvironment`] that
//! the catalog loader uses to pick one install command per dependency.
//!
//! # Example
//!
//! ```
//! use projectwiz::host::{HostEnvironment, Platform};
//!
//! let host = HostEnvironment::linux("apt");
//! assert_eq!(host.platform, Platform::Linux);
//! assert_eq!(host.install_key(), Some("apt"));
//! ```

pub mod platform;
pub mod probe;

pub use platform::{HostEnvironment, Platform};
pub use probe::{
    find_package_manager, is_executable, probe, probe_with, PACKAGE_MANAGER_CANDIDATES,
    SEARCH_DIRS,
};

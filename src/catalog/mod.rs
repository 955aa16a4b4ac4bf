//! Tool catalog: data model, loading and discovery.
//!
//! - Types in [`model`]
//! - Document parsing and dependency resolution in [`loader`]
//! - Locating `config.json` in [`locate`]
//!
//! # Example
//!
//! ```
//! use projectwiz::catalog::load;
//! use projectwiz::host::HostEnvironment;
//!
//! let doc = br#"{
//!     "dependencies": [],
//!     "categories": [{"name": "Web", "frameworks": [{"name": "React", "tools": [
//!         {"name": "Vite", "command": "npm create vite@latest {}", "dependencies": []}
//!     ]}]}]
//! }"#;
//!
//! let catalog = load(doc, &HostEnvironment::macos()).unwrap();
//! let tool = catalog.find_tool("Web", "React", "Vite").unwrap();
//! assert!(tool.requires_project_name());
//! ```

pub mod loader;
pub mod locate;
pub mod model;

pub use loader::{load, load_catalog_file};
pub use locate::{config_path_for_exe, resolve_config_path, CONFIG_FILE_NAME};
pub use model::{Catalog, Category, Dependency, Framework, Tool, PLACEHOLDER};

//! In-memory catalog types.
//!
//! A [`Catalog`] is built once by the loader and never changes afterwards.
//! Tools hold shared references into the catalog's global dependency list,
//! so a dependency's commands are defined in exactly one place.

use std::sync::Arc;

use serde::Serialize;

/// Token in a run command that is replaced by the project name.
pub const PLACEHOLDER: &str = "{}";

/// A named prerequisite of one or more tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    /// Unique name within the catalog.
    pub name: String,
    /// Shell command that exits 0 when the dependency is present.
    pub check_command: String,
    /// Install command selected for this host at load time.
    pub install_command: String,
}

/// An executable action shown in the last menu level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    pub name: String,
    /// Shell command, possibly containing [`PLACEHOLDER`].
    pub run_command: String,
    /// Resolved dependencies in declaration order.
    pub dependencies: Vec<Arc<Dependency>>,
}

impl Tool {
    /// Whether running this tool needs a project name.
    pub fn requires_project_name(&self) -> bool {
        self.run_command.contains(PLACEHOLDER)
    }

    /// Names of this tool's dependencies, in order.
    pub fn dependency_names(&self) -> Vec<&str> {
        self.dependencies.iter().map(|d| d.name.as_str()).collect()
    }
}

/// A named group of tools, such as a language ecosystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Framework {
    pub name: String,
    pub tools: Vec<Tool>,
}

/// Top-level menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub frameworks: Vec<Framework>,
}

/// The loaded configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
    dependencies: Vec<Arc<Dependency>>,
}

impl Catalog {
    /// Assemble a catalog from already validated parts.
    pub(crate) fn new(categories: Vec<Category>, dependencies: Vec<Arc<Dependency>>) -> Self {
        Self {
            categories,
            dependencies,
        }
    }

    /// Categories in document order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category at a menu position.
    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Global dependency set in document order.
    pub fn dependencies(&self) -> &[Arc<Dependency>] {
        &self.dependencies
    }

    /// Look up a global dependency by exact name.
    pub fn dependency(&self, name: &str) -> Option<&Arc<Dependency>> {
        self.dependencies.iter().find(|d| d.name == name)
    }

    /// Look up a tool by its category, framework and tool names.
    pub fn find_tool(&self, category: &str, framework: &str, tool: &str) -> Option<&Tool> {
        self.categories
            .iter()
            .find(|c| c.name == category)?
            .frameworks
            .iter()
            .find(|f| f.name == framework)?
            .tools
            .iter()
            .find(|t| t.name == tool)
    }

    /// Total number of tools across all categories.
    pub fn tool_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| &c.frameworks)
            .map(|f| f.tools.len())
            .sum()
    }

    /// Whether the catalog has nothing to show.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(name: &str) -> Arc<Dependency> {
        Arc::new(Dependency {
            name: name.to_string(),
            check_command: format!("{name} --version"),
            install_command: format!("apt install -y {name}"),
        })
    }

    fn sample() -> Catalog {
        let node = dep("node");
        let tools = vec![
            Tool {
                name: "Vite".to_string(),
                run_command: "npm create vite@latest {}".to_string(),
                dependencies: vec![Arc::clone(&node)],
            },
            Tool {
                name: "Dev server".to_string(),
                run_command: "npm run dev".to_string(),
                dependencies: vec![],
            },
        ];
        Catalog::new(
            vec![Category {
                name: "Web".to_string(),
                frameworks: vec![Framework {
                    name: "React".to_string(),
                    tools,
                }],
            }],
            vec![node],
        )
    }

    #[test]
    fn requires_project_name_detects_placeholder() {
        let catalog = sample();
        let tools = &catalog.categories()[0].frameworks[0].tools;
        assert!(tools[0].requires_project_name());
        assert!(!tools[1].requires_project_name());
    }

    #[test]
    fn find_tool_by_names() {
        let catalog = sample();
        let tool = catalog.find_tool("Web", "React", "Vite").unwrap();
        assert_eq!(tool.run_command, "npm create vite@latest {}");
        assert!(catalog.find_tool("Web", "Vue", "Vite").is_none());
        assert!(catalog.find_tool("Mobile", "React", "Vite").is_none());
    }

    #[test]
    fn tool_dependencies_share_global_entry() {
        let catalog = sample();
        let tool = catalog.find_tool("Web", "React", "Vite").unwrap();
        let global = catalog.dependency("node").unwrap();
        assert!(Arc::ptr_eq(&tool.dependencies[0], global));
    }

    #[test]
    fn counts_and_lookups() {
        let catalog = sample();
        assert_eq!(catalog.tool_count(), 2);
        assert!(!catalog.is_empty());
        assert!(catalog.category(0).is_some());
        assert!(catalog.category(1).is_none());
        assert!(catalog.dependency("python").is_none());
    }

    #[test]
    fn dependency_names_in_order() {
        let tool = Tool {
            name: "t".to_string(),
            run_command: "true".to_string(),
            dependencies: vec![dep("git"), dep("node")],
        };
        assert_eq!(tool.dependency_names(), vec!["git", "node"]);
    }
}

//! Catalog document loading.
//!
//! The document is parsed into a `serde_json::Value` first and then walked
//! by hand, so that every schema violation can name the exact location of
//! the offending value. Loading is fail-fast: the first violation aborts the
//! whole load and no partial catalog is ever returned.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::{Result, WizError};
use crate::host::HostEnvironment;

use super::model::{Catalog, Category, Dependency, Framework, Tool};

const ROOT: &str = "$";

/// Read and load a catalog document from disk.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist, `Io` if it can't be
/// read, and `Syntax`/`Schema` if the content is invalid.
pub fn load_catalog_file(path: &Path, host: &HostEnvironment) -> Result<Catalog> {
    let content = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            WizError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            WizError::Io(e)
        }
    })?;

    tracing::debug!("Loading catalog from {} ({} bytes)", path.display(), content.len());
    load(&content, host)
}

/// Parse document bytes into a catalog for the given host.
pub fn load(content: &[u8], host: &HostEnvironment) -> Result<Catalog> {
    let document: Value = serde_json::from_slice(content).map_err(|e| WizError::Syntax {
        message: e.to_string(),
    })?;

    let root = document
        .as_object()
        .ok_or_else(|| WizError::schema(ROOT, "document must be an object"))?;

    let dependencies = parse_dependencies(root, host)?;

    let index: HashMap<&str, &Arc<Dependency>> = dependencies
        .iter()
        .map(|d| (d.name.as_str(), d))
        .collect();

    let categories = require_array(root, "categories", ROOT)?
        .iter()
        .enumerate()
        .map(|(i, value)| parse_category(value, &format!("categories[{}]", i), &index))
        .collect::<Result<Vec<_>>>()?;

    let catalog = Catalog::new(categories, dependencies);
    tracing::debug!(
        "Loaded {} categories, {} tools, {} dependencies",
        catalog.categories().len(),
        catalog.tool_count(),
        catalog.dependencies().len()
    );
    Ok(catalog)
}

fn parse_dependencies(
    root: &Map<String, Value>,
    host: &HostEnvironment,
) -> Result<Vec<Arc<Dependency>>> {
    let entries = require_array(root, "dependencies", ROOT)?;
    let mut dependencies: Vec<Arc<Dependency>> = Vec::with_capacity(entries.len());

    for (i, value) in entries.iter().enumerate() {
        let at = format!("dependencies[{}]", i);
        let dependency = parse_dependency(value, &at, host)?;

        if dependencies.iter().any(|d| d.name == dependency.name) {
            return Err(WizError::schema(
                at,
                format!("duplicate dependency {}", dependency.name),
            ));
        }
        dependencies.push(Arc::new(dependency));
    }

    Ok(dependencies)
}

fn parse_dependency(value: &Value, at: &str, host: &HostEnvironment) -> Result<Dependency> {
    let obj = require_object(value, at)?;
    let name = require_str(obj, "name", at)?;
    let check_command = require_str(obj, "check_command", at)?;

    let commands_at = child(at, "install_commands");
    let install_commands = obj
        .get("install_commands")
        .and_then(Value::as_object)
        .ok_or_else(|| WizError::schema(&commands_at, "install_commands must be an object"))?;

    let install_command = host
        .install_key()
        .and_then(|key| install_commands.get(key))
        .and_then(Value::as_str)
        .ok_or_else(|| {
            WizError::schema(
                &commands_at,
                format!("missing installation command for dependency {}", name),
            )
        })?;

    Ok(Dependency {
        name: name.to_string(),
        check_command: check_command.to_string(),
        install_command: install_command.to_string(),
    })
}

fn parse_category(
    value: &Value,
    at: &str,
    index: &HashMap<&str, &Arc<Dependency>>,
) -> Result<Category> {
    let obj = require_object(value, at)?;
    let name = require_str(obj, "name", at)?;
    let frameworks = require_array(obj, "frameworks", at)?
        .iter()
        .enumerate()
        .map(|(i, v)| parse_framework(v, &format!("{}.frameworks[{}]", at, i), index))
        .collect::<Result<Vec<_>>>()?;

    Ok(Category {
        name: name.to_string(),
        frameworks,
    })
}

fn parse_framework(
    value: &Value,
    at: &str,
    index: &HashMap<&str, &Arc<Dependency>>,
) -> Result<Framework> {
    let obj = require_object(value, at)?;
    let name = require_str(obj, "name", at)?;
    let tools = require_array(obj, "tools", at)?
        .iter()
        .enumerate()
        .map(|(i, v)| parse_tool(v, &format!("{}.tools[{}]", at, i), index))
        .collect::<Result<Vec<_>>>()?;

    Ok(Framework {
        name: name.to_string(),
        tools,
    })
}

fn parse_tool(value: &Value, at: &str, index: &HashMap<&str, &Arc<Dependency>>) -> Result<Tool> {
    let obj = require_object(value, at)?;
    let name = require_str(obj, "name", at)?;
    let run_command = require_str(obj, "command", at)?;

    let mut dependencies = Vec::new();
    for (i, reference) in require_array(obj, "dependencies", at)?.iter().enumerate() {
        let ref_at = format!("{}.dependencies[{}]", at, i);
        let dep_name = reference
            .as_str()
            .ok_or_else(|| WizError::schema(&ref_at, "dependency reference must be a string"))?;
        let resolved = index.get(dep_name).ok_or_else(|| {
            WizError::schema(&ref_at, format!("unknown dependency reference {}", dep_name))
        })?;
        dependencies.push(Arc::clone(resolved));
    }

    Ok(Tool {
        name: name.to_string(),
        run_command: run_command.to_string(),
        dependencies,
    })
}

fn child(at: &str, key: &str) -> String {
    if at == ROOT {
        key.to_string()
    } else {
        format!("{}.{}", at, key)
    }
}

fn require_object<'a>(value: &'a Value, at: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| WizError::schema(at, "expected an object"))
}

fn require_str<'a>(obj: &'a Map<String, Value>, key: &str, at: &str) -> Result<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| WizError::schema(child(at, key), format!("{} must be a string", key)))
}

fn require_array<'a>(obj: &'a Map<String, Value>, key: &str, at: &str) -> Result<&'a Vec<Value>> {
    obj.get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| WizError::schema(child(at, key), format!("{} must be an array", key)))
}

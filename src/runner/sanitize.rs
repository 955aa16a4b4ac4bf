//! Project name sanitization.
//!
//! Names are spliced into shell commands without quoting. This guard keeps
//! them to characters that mean nothing to `sh` or `cmd`. It is applied by
//! the menu and `exec` unless `--allow-unsafe-names` is given.

use crate::error::{Result, WizError};

/// Characters allowed besides ASCII letters and digits.
const ALLOWED_PUNCTUATION: &[char] = &['-', '_', '.', '/', '@', '+'];

/// Check that a project name is safe to splice into a command.
///
/// Allows ASCII letters, digits and `- _ . / @ +`; rejects empty names and
/// names starting with `-`, which tools would parse as a flag.
pub fn validate_project_name(name: &str) -> Result<()> {
    let reject = |reason: &str| {
        Err(WizError::UnsafeProjectName {
            name: name.to_string(),
            reason: reason.to_string(),
        })
    };

    if name.is_empty() {
        return reject("name is empty");
    }
    if name.starts_with('-') {
        return reject("name must not start with '-'");
    }
    if let Some(c) = name
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !ALLOWED_PUNCTUATION.contains(c))
    {
        return reject(&format!("character {:?} is not allowed", c));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_names() {
        for name in ["foo", "my-app", "my_app", "app2", "@scope/pkg", "v1.2", "c++"] {
            assert!(validate_project_name(name).is_ok(), "{name} should be allowed");
        }
    }

    #[test]
    fn rejects_empty() {
        let err = validate_project_name("").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn rejects_leading_dash() {
        assert!(validate_project_name("--force").is_err());
    }

    #[test]
    fn rejects_shell_syntax() {
        for name in ["a;b", "a b", "$(id)", "`id`", "a|b", "a&b", "a>b", "it's", "a\nb"] {
            assert!(validate_project_name(name).is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn reason_names_offending_character() {
        let err = validate_project_name("app;rm").unwrap_err();
        assert!(err.to_string().contains("';'"));
    }
}

use std::{collections::HashMap, fs, path::Path};

use crate::error::CliError;

/// Substrings (lowercase) of variable names whose values are never logged.
const SENSITIVE_PATTERNS: [&str; 5] = ["password", "passwd", "secret", "credential", "database_url"];

/// Connection settings from the process environment, optionally overlaid by
/// a .env file.
#[derive(Debug, Clone, Default)]
pub struct EnvManager {
    vars: HashMap<String, String>,
}

impl EnvManager {
    pub fn new() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// An empty manager that ignores the process environment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Overlays `KEY=VALUE` lines from a .env file on top of what is loaded.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read env file {}: {}", path.display(), e))
        })?;

        self.parse_env_content(&content)
    }

    /// Returns a non-empty value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Whether a variable name looks like it holds a credential.
    pub fn is_sensitive(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        SENSITIVE_PATTERNS.iter().any(|pattern| key.contains(pattern))
    }

    pub(crate) fn parse_env_content(&mut self, content: &str) -> Result<(), CliError> {
        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line = line.strip_prefix("export ").unwrap_or(line);
            let Some((key, value)) = line.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid env file: line {} is not KEY=VALUE",
                    idx + 1
                )));
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(CliError::Config(format!(
                    "Invalid env file: empty key at line {}",
                    idx + 1
                )));
            }
            self.set(key, unquote(value.trim()));
        }

        Ok(())
    }
}

fn unquote(value: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|&q| value.strip_prefix(q).and_then(|v| v.strip_suffix(q)))
        .unwrap_or(value)
}

//! Configuration with layered hierarchy
//!
//! The only tunable is the machine root: the path prefix the CNC
//! controller expects in every `File` reference. Sources merge in
//! priority order; the CLI flag, handled by the commands, beats all of
//! these.

use serde::Deserialize;
use std::path::PathBuf;

/// Machine root used when nothing overrides it. This is where the
/// controller mounts the transferred program folders.
pub const DEFAULT_MACHINE_ROOT: &str = r"C:\GannoMAT Programs";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path prefix for the synthetic `File` references in generated
    /// documents
    pub machine_root: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            machine_root: DEFAULT_MACHINE_ROOT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources, merging in priority order.
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in default (already in Default impl)

        // 2. Global user config (~/.config/worklister/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config = global;
                    }
                }
            }
        }

        // 3. Environment variable
        if let Ok(machine_root) = std::env::var("WORKLISTER_MACHINE_ROOT") {
            if !machine_root.is_empty() {
                config.machine_root = machine_root;
            }
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "worklister")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_machine_root() {
        let config = Config::default();
        assert_eq!(config.machine_root, r"C:\GannoMAT Programs");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: Config = serde_yml::from_str("machine_root: 'D:\\Programs'").unwrap();
        assert_eq!(config.machine_root, "D:\\Programs");

        let empty: Config = serde_yml::from_str("{}").unwrap();
        assert_eq!(empty.machine_root, DEFAULT_MACHINE_ROOT);
    }
}

// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;
use crate::options::GenerationOptions;

pub const CONFIG_FILE: &str = "charades.toml";

pub const DEFAULT_PORT: u16 = 8000;

/// Library-level settings, read from `charades.toml` in the library root.
/// Every field is optional.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub generation: GenerationOptions,
    pub server: ServerConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Config {
    /// Load the configuration of the library at `directory`, falling back to
    /// the defaults when there is no configuration file.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE);
        if !path.exists() {
            log::debug!("No {CONFIG_FILE}, using defaults.");
            return Ok(Self::default());
        }
        log::debug!("Loading configuration from {}", path.display());
        let content = read_to_string(&path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Fallible<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;
    use crate::types::difficulty::Difficulty;
    use crate::types::language::Language;

    #[test]
    fn test_missing_file_is_default() -> Fallible<()> {
        let dir = tempdir()?;
        let config = Config::load(dir.path())?;
        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 8000);
        Ok(())
    }

    #[test]
    fn test_full_file() -> Fallible<()> {
        let dir = tempdir()?;
        write(
            dir.path().join(CONFIG_FILE),
            r#"
[generation]
count = 9
shuffle = false
languages = ["en", "es"]
difficulties = ["easy", "medium"]

[server]
port = 9123
"#,
        )?;
        let config = Config::load(dir.path())?;
        assert_eq!(config.generation.count, 9);
        assert!(!config.generation.shuffle);
        assert_eq!(
            config.generation.languages,
            BTreeSet::from([Language::En, Language::Es])
        );
        assert_eq!(
            config.generation.difficulties,
            BTreeSet::from([Difficulty::Easy, Difficulty::Medium])
        );
        assert_eq!(config.server.port, 9123);
        Ok(())
    }

    #[test]
    fn test_partial_file() -> Fallible<()> {
        let config = Config::parse("[server]\nport = 8080\n")?;
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.generation, GenerationOptions::default());
        Ok(())
    }

    #[test]
    fn test_unknown_language_is_an_error() {
        let result = Config::parse("[generation]\nlanguages = [\"fr\"]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_section_is_an_error() {
        let result = Config::parse("[printer]\ncolumns = 4\n");
        assert!(result.is_err());
    }
}

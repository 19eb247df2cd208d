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

use std::env::current_dir;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::theme::ThemeData;
use crate::types::theme::ThemeIndex;
use crate::types::theme::ThemeSummary;

pub const INDEX_FILE: &str = "themes.json";

pub const THEMES_DIR: &str = "themes";

/// A directory of themes: an optional `themes.json` index, one
/// `themes/<id>.json` file per theme, and an optional `charades.toml`.
pub struct Library {
    directory: PathBuf,
    config: Config,
}

/// Reasons a theme identifier is refused. Identifiers come from the command
/// line and from query strings, so they must never be able to name a file
/// outside the themes directory.
#[derive(Debug, PartialEq)]
pub enum ThemeIdError {
    Empty,
    /// Contains something other than ASCII letters, digits, `-` and `_`.
    InvalidCharacter(char),
}

impl Display for ThemeIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeIdError::Empty => write!(f, "theme id is empty."),
            ThemeIdError::InvalidCharacter(c) => {
                write!(f, "theme id contains invalid character {c:?}.")
            }
        }
    }
}

pub fn validate_theme_id(id: &str) -> Result<(), ThemeIdError> {
    if id.is_empty() {
        return Err(ThemeIdError::Empty);
    }
    match id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        Some(c) => Err(ThemeIdError::InvalidCharacter(c)),
        None => Ok(()),
    }
}

impl Library {
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        Self::open(&directory)
    }

    pub fn open(directory: &Path) -> Fallible<Self> {
        let directory = if directory.exists() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };
        let config = Config::load(&directory)?;
        Ok(Self { directory, config })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme_path(&self, id: &str) -> PathBuf {
        self.directory.join(THEMES_DIR).join(format!("{id}.json"))
    }

    /// List the library's themes: from the index if there is one, otherwise
    /// by reading every theme file.
    pub fn load_themes(&self) -> Fallible<Vec<ThemeSummary>> {
        let index_path = self.directory.join(INDEX_FILE);
        if index_path.exists() {
            log::debug!("Loading theme index...");
            let content = read_to_string(&index_path)?;
            let index: ThemeIndex = serde_json::from_str(&content)
                .map_err(|e| ErrorReport::new(format!("invalid {INDEX_FILE}: {e}")))?;
            log::debug!("Index lists {} themes.", index.themes.len());
            return Ok(index.themes);
        }
        log::debug!("No {INDEX_FILE}, discovering theme files...");
        let mut summaries = Vec::new();
        for path in self.theme_files()? {
            let theme = read_theme_file(&path)?;
            summaries.push(theme.summary());
        }
        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(summaries)
    }

    /// Load a theme by identifier. `None` if there is no such theme.
    pub fn load_theme(&self, id: &str) -> Fallible<Option<ThemeData>> {
        validate_theme_id(id).map_err(|e| ErrorReport::new(e.to_string()))?;
        let path = self.theme_path(id);
        if !path.is_file() {
            log::debug!("No theme file at {}", path.display());
            return Ok(None);
        }
        log::debug!("Loading theme {id}...");
        let start = Instant::now();
        let theme = read_theme_file(&path)?;
        let duration = start.elapsed().as_millis();
        log::debug!("Theme {id} loaded in {duration}ms ({} words).", theme.words.len());
        Ok(Some(theme))
    }

    /// Every `.json` file directly inside the themes directory, sorted by
    /// name.
    pub fn theme_files(&self) -> Fallible<Vec<PathBuf>> {
        let themes_dir = self.directory.join(THEMES_DIR);
        if !themes_dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut files = Vec::new();
        for entry in WalkDir::new(&themes_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                files.push(path.to_path_buf());
            }
        }
        Ok(files)
    }
}

pub fn read_theme_file(path: &Path) -> Fallible<ThemeData> {
    let content = read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| ErrorReport::new(format!("invalid theme file {}: {e}", path.display())))
}

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

use serde::Deserialize;
use serde::Serialize;

use crate::types::word::Word;

/// A theme as listed in the library index.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub icon: String,
}

/// The library index file.
#[derive(Serialize, Deserialize, Debug)]
pub struct ThemeIndex {
    pub themes: Vec<ThemeSummary>,
}

/// A theme with its complete, ordered word list.
#[derive(Deserialize, Clone, Debug)]
pub struct ThemeData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub words: Vec<Word>,
}

impl ThemeData {
    pub fn summary(&self) -> ThemeSummary {
        ThemeSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            word_count: self.words.len(),
            icon: self.icon.clone(),
        }
    }
}

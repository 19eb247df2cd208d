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

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::types::difficulty::Difficulty;
use crate::types::language::Language;

pub const DEFAULT_COUNT: usize = 12;

/// Controls which words of a theme become cards, and how.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GenerationOptions {
    /// The maximum number of cards to generate.
    pub count: usize,
    /// Whether to shuffle the words before picking them.
    pub shuffle: bool,
    /// Languages to print on each card. Empty means English only.
    pub languages: BTreeSet<Language>,
    /// Difficulties to draw words from. Empty means all of them.
    pub difficulties: BTreeSet<Difficulty>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            shuffle: true,
            languages: default_languages(),
            difficulties: default_difficulties(),
        }
    }
}

fn default_languages() -> BTreeSet<Language> {
    BTreeSet::from([Language::En])
}

fn default_difficulties() -> BTreeSet<Difficulty> {
    Difficulty::ALL.into_iter().collect()
}

impl GenerationOptions {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn with_languages(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        self.languages = languages.into_iter().collect();
        self
    }

    pub fn with_difficulties(mut self, difficulties: impl IntoIterator<Item = Difficulty>) -> Self {
        self.difficulties = difficulties.into_iter().collect();
        self
    }

    /// Returns a copy where empty selections are replaced by their defaults.
    /// An unticked filter means "everything", never "nothing".
    pub fn normalized(&self) -> Self {
        let mut options = self.clone();
        if options.languages.is_empty() {
            options.languages = default_languages();
        }
        if options.difficulties.is_empty() {
            options.difficulties = default_difficulties();
        }
        options
    }

    /// Whether a word with the given tag passes the difficulty filter.
    /// Untagged words always pass.
    pub fn admits(&self, difficulty: Option<Difficulty>) -> bool {
        match difficulty {
            None => true,
            Some(d) => self.difficulties.contains(&d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GenerationOptions::default();
        assert_eq!(options.count, 12);
        assert!(options.shuffle);
        assert_eq!(options.languages, BTreeSet::from([Language::En]));
        assert_eq!(options.difficulties.len(), 3);
    }

    #[test]
    fn test_empty_sets_fall_back_to_defaults() {
        let options = GenerationOptions::default()
            .with_languages(Vec::new())
            .with_difficulties(Vec::new())
            .normalized();
        assert_eq!(options.languages, BTreeSet::from([Language::En]));
        assert_eq!(options.difficulties, default_difficulties());
    }

    #[test]
    fn test_normalized_keeps_explicit_choices() {
        let options = GenerationOptions::default()
            .with_languages([Language::Es])
            .with_difficulties([Difficulty::Hard])
            .normalized();
        assert_eq!(options.languages, BTreeSet::from([Language::Es]));
        assert_eq!(options.difficulties, BTreeSet::from([Difficulty::Hard]));
    }

    #[test]
    fn test_admits() {
        let options = GenerationOptions::default().with_difficulties([Difficulty::Easy]);
        assert!(options.admits(None));
        assert!(options.admits(Some(Difficulty::Easy)));
        assert!(!options.admits(Some(Difficulty::Hard)));
    }

    #[test]
    fn test_deserialize_partial() {
        let options: GenerationOptions =
            toml::from_str("count = 6\nlanguages = [\"en\", \"zh\"]").unwrap();
        assert_eq!(options.count, 6);
        assert!(options.shuffle);
        assert_eq!(options.languages, BTreeSet::from([Language::En, Language::Zh]));
    }
}

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

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::types::difficulty::Difficulty;
use crate::types::language::Language;

/// One vocabulary entry of a theme.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "RawWord")]
pub struct Word {
    /// The English text. Doubles as the translation for [`Language::En`].
    text: String,
    /// Translations into the other languages.
    translations: BTreeMap<Language, String>,
    /// The picture shown on the card.
    emoji: String,
    /// `None` when the word is untagged or the tag is not recognized.
    difficulty: Option<Difficulty>,
}

impl Word {
    #[cfg(test)]
    pub fn new(text: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            translations: BTreeMap::new(),
            emoji: emoji.into(),
            difficulty: None,
        }
    }

    #[cfg(test)]
    pub fn with_translation(mut self, lang: Language, text: impl Into<String>) -> Self {
        if lang == Language::En {
            self.text = text.into();
        } else {
            self.translations.insert(lang, text.into());
        }
        self
    }

    #[cfg(test)]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// The word's text in the given language, if it has a non-blank one.
    pub fn text_in(&self, lang: Language) -> Option<&str> {
        let text = match lang {
            Language::En => Some(self.text.as_str()),
            _ => self.translations.get(&lang).map(String::as_str),
        };
        text.filter(|t| !t.trim().is_empty())
    }
}

/// The on-disk shape of a word: translations are stored as flat keys named
/// after the language code (`"es": "Perro"`), or under a `translations`
/// object.
#[derive(Deserialize)]
struct RawWord {
    #[serde(default)]
    text: String,
    #[serde(default)]
    emoji: String,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    translations: BTreeMap<String, String>,
    #[serde(flatten)]
    rest: BTreeMap<String, Value>,
}

impl From<RawWord> for Word {
    fn from(raw: RawWord) -> Self {
        let mut translations = BTreeMap::new();
        let flat = raw
            .rest
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|s| (key.as_str(), s)));
        let nested = raw.translations.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        for (code, text) in flat.chain(nested) {
            match Language::from_code(code) {
                Some(Language::En) | None => {}
                Some(lang) => {
                    translations.insert(lang, text.to_string());
                }
            }
        }
        let difficulty = match raw.difficulty.as_deref() {
            None => None,
            Some(tag) => {
                let parsed = Difficulty::parse(tag);
                if parsed.is_none() && !tag.trim().is_empty() {
                    log::warn!(
                        "Unknown difficulty {tag:?} on word {:?}, treating as untagged.",
                        raw.text
                    );
                }
                parsed
            }
        };
        Self {
            text: raw.text,
            translations,
            emoji: raw.emoji,
            difficulty,
        }
    }
}

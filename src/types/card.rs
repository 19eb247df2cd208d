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

use serde::Serialize;

use crate::types::language::Language;

/// A single line of text on a card.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardLine {
    pub language: Language,
    pub text: String,
}

/// A generated card. Owns copies of everything it shows, so it outlives the
/// theme it was generated from.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// The card's lines, in canonical language order.
    pub lines: Vec<CardLine>,
    /// An emoji, or an image URL when `is_emoji` is false.
    pub image: String,
    pub is_emoji: bool,
}

impl Card {
    /// The text of the line in the given language, if the card has one.
    #[cfg(test)]
    pub fn text(&self, lang: Language) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.language == lang)
            .map(|line| line.text.as_str())
    }
}

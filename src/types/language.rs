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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;

/// A language a card line can be written in.
///
/// The declaration order is the canonical priority used when laying out the
/// lines of a card: English first, then Spanish, Chinese, and Arabic.
#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English. The base text of every word.
    En,
    /// Spanish.
    Es,
    /// Chinese.
    Zh,
    /// Arabic.
    Ar,
}

impl Language {
    /// Every language, in canonical priority order.
    pub const ALL: [Language; 4] = [Language::En, Language::Es, Language::Zh, Language::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Zh => "zh",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Zh => "中文",
            Language::Ar => "العربية",
        }
    }

    /// Whether each character of this script takes up two columns.
    pub fn is_double_width(self) -> bool {
        matches!(self, Language::Zh)
    }

    pub fn is_right_to_left(self) -> bool {
        matches!(self, Language::Ar)
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

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

use crate::error::Fallible;
use crate::repository::Library;
use crate::types::theme::ThemeIndex;
use crate::types::theme::ThemeSummary;

#[derive(ValueEnum, Clone)]
pub enum ListFormat {
    /// One theme per line.
    Text,
    /// JSON output, in the same shape as `themes.json`.
    Json,
}

impl Display for ListFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ListFormat::Text => write!(f, "text"),
            ListFormat::Json => write!(f, "json"),
        }
    }
}

pub fn list_themes(directory: Option<String>, format: ListFormat) -> Fallible<()> {
    let library = Library::new(directory)?;
    let themes = library.load_themes()?;
    match format {
        ListFormat::Text => {
            if themes.is_empty() {
                println!("No themes found.");
            }
            for theme in &themes {
                println!("{}", format_summary(theme));
            }
        }
        ListFormat::Json => {
            let index = ThemeIndex { themes };
            println!("{}", serde_json::to_string_pretty(&index)?);
        }
    }
    Ok(())
}

fn format_summary(theme: &ThemeSummary) -> String {
    let words = if theme.word_count == 1 { "word" } else { "words" };
    format!(
        "{}\t{} {} ({} {words})",
        theme.id, theme.icon, theme.name, theme.word_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summary() {
        let theme = ThemeSummary {
            id: "food".to_string(),
            name: "Food".to_string(),
            description: String::new(),
            word_count: 1,
            icon: "🍕".to_string(),
        };
        assert_eq!(format_summary(&theme), "food\t🍕 Food (1 word)");
    }

    #[test]
    fn test_list_themes() {
        assert!(list_themes(Some("./test".to_string()), ListFormat::Text).is_ok());
        assert!(list_themes(Some("./test".to_string()), ListFormat::Json).is_ok());
        assert!(list_themes(Some("./derpherp".to_string()), ListFormat::Text).is_err());
    }
}

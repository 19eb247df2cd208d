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

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::repository::Library;
use crate::repository::read_theme_file;

pub fn check_library(directory: Option<String>) -> Fallible<()> {
    let library = Library::new(directory)?;
    let problems = find_problems(&library)?;
    if !problems.is_empty() {
        let mut msg = String::from("Problems found in theme library:\n");
        for problem in problems {
            msg.push_str(&format!("  - {problem}\n"));
        }
        return Err(ErrorReport::new(msg));
    }
    println!("ok");
    Ok(())
}

/// Load every theme of the library and report what is wrong with it.
fn find_problems(library: &Library) -> Fallible<Vec<String>> {
    let mut problems = Vec::new();
    let summaries = library.load_themes()?;
    for summary in &summaries {
        let theme = match library.load_theme(&summary.id) {
            Ok(Some(theme)) => theme,
            Ok(None) => {
                problems.push(format!(
                    "theme {:?} is listed but {} does not exist",
                    summary.id,
                    library.theme_path(&summary.id).display()
                ));
                continue;
            }
            Err(e) => {
                problems.push(e.to_string());
                continue;
            }
        };
        if theme.words.len() != summary.word_count {
            log::warn!(
                "Theme {:?} lists {} words but has {}.",
                summary.id,
                summary.word_count,
                theme.words.len()
            );
        }
        if theme.words.is_empty() {
            log::warn!("Theme {:?} has no words.", summary.id);
        }
    }
    for path in library.theme_files()? {
        let theme = match read_theme_file(&path) {
            Ok(theme) => theme,
            Err(e) => {
                problems.push(e.to_string());
                continue;
            }
        };
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        if theme.id != stem {
            problems.push(format!(
                "{} has id {:?}, expected {stem:?}",
                path.display(),
                theme.id
            ));
        }
        for (i, word) in theme.words.iter().enumerate() {
            let position = i + 1;
            if word.text().trim().is_empty() {
                problems.push(format!("word {position} of {:?} has no text", theme.id));
            }
            if word.emoji().trim().is_empty() {
                problems.push(format!(
                    "word {position} ({:?}) of {:?} has no emoji",
                    word.text(),
                    theme.id
                ));
            }
        }
    }
    problems.dedup();
    Ok(problems)
}

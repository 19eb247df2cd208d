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
use std::fs::write;
use std::path::PathBuf;

use clap::ValueEnum;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::Fallible;
use crate::error::fail;
use crate::generate::generate_cards_with_rng;
use crate::options::GenerationOptions;
use crate::repository::Library;
use crate::sheet::render_sheet;
use crate::types::card::Card;
use crate::types::difficulty::Difficulty;
use crate::types::language::Language;

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputFormat {
    /// A printable HTML page.
    Html,
    /// The generated cards as JSON.
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// What the user asked for on the command line. Unset fields fall back to
/// the library's configuration.
pub struct SheetRequest {
    pub theme: String,
    pub count: Option<usize>,
    pub no_shuffle: bool,
    pub seed: Option<u64>,
    pub languages: Vec<Language>,
    pub difficulties: Vec<Difficulty>,
    pub format: OutputFormat,
}

impl SheetRequest {
    fn options(&self, defaults: &GenerationOptions) -> GenerationOptions {
        let mut options = defaults.clone();
        if let Some(count) = self.count {
            options = options.with_count(count);
        }
        if self.no_shuffle {
            options = options.with_shuffle(false);
        }
        if !self.languages.is_empty() {
            options = options.with_languages(self.languages.iter().copied());
        }
        if !self.difficulties.is_empty() {
            options = options.with_difficulties(self.difficulties.iter().copied());
        }
        options
    }
}

pub fn generate_sheet(
    directory: Option<String>,
    request: SheetRequest,
    output: Option<PathBuf>,
) -> Fallible<()> {
    let library = Library::new(directory)?;
    let rendered = render_request(&library, &request)?;
    match output {
        Some(path) => {
            write(&path, rendered)?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn render_request(library: &Library, request: &SheetRequest) -> Fallible<String> {
    let Some(theme) = library.load_theme(&request.theme)? else {
        return fail(format!("theme {:?} not found.", request.theme));
    };
    let options = request.options(&library.config().generation);
    log::debug!("Generating cards with {options:?}");
    let cards: Vec<Card> = match request.seed {
        Some(seed) => {
            generate_cards_with_rng(Some(&theme), &options, &mut StdRng::seed_from_u64(seed))
        }
        None => generate_cards_with_rng(Some(&theme), &options, &mut rand::thread_rng()),
    };
    if cards.is_empty() {
        log::warn!("No words of {:?} match the selected difficulties.", theme.id);
    }
    match request.format {
        OutputFormat::Html => {
            let title = format!("{} {}", theme.icon, theme.name);
            Ok(render_sheet(title.trim(), &cards).into_string())
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&cards)?),
    }
}

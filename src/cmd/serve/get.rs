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

use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::html;
use percent_encoding::NON_ALPHANUMERIC;
use percent_encoding::utf8_percent_encode;
use serde::Deserialize;

use crate::cmd::serve::state::ServerState;
use crate::generate::generate_cards;
use crate::options::GenerationOptions;
use crate::repository::validate_theme_id;
use crate::sheet::grid::render_grid;
use crate::sheet::template::Assets;
use crate::sheet::template::page_template;
use crate::types::difficulty::Difficulty;
use crate::types::language::Language;
use crate::types::theme::ThemeSummary;

const TITLE: &str = "Charades";

/// The state of the page's checkboxes. A ticked checkbox arrives as
/// `name=on`; an unticked one is absent.
#[derive(Deserialize, Default, Debug)]
pub struct Selection {
    theme: Option<String>,
    en: Option<String>,
    es: Option<String>,
    zh: Option<String>,
    ar: Option<String>,
    easy: Option<String>,
    medium: Option<String>,
    hard: Option<String>,
    shuffle: Option<String>,
}

impl Selection {
    fn ticked_languages(&self) -> Vec<Language> {
        let boxes = [&self.en, &self.es, &self.zh, &self.ar];
        Language::ALL
            .into_iter()
            .zip(boxes)
            .filter(|(_, ticked)| ticked.is_some())
            .map(|(lang, _)| lang)
            .collect()
    }

    fn ticked_difficulties(&self) -> Vec<Difficulty> {
        let boxes = [&self.easy, &self.medium, &self.hard];
        Difficulty::ALL
            .into_iter()
            .zip(boxes)
            .filter(|(_, ticked)| ticked.is_some())
            .map(|(difficulty, _)| difficulty)
            .collect()
    }

    /// Build generation options. Nothing ticked means the library defaults.
    /// Every word of the theme is shown.
    fn options(&self, defaults: &GenerationOptions, word_count: usize) -> GenerationOptions {
        let languages = self.ticked_languages();
        let difficulties = self.ticked_difficulties();
        let mut options = defaults
            .normalized()
            .with_count(word_count)
            .with_shuffle(self.shuffle.is_some());
        if !languages.is_empty() {
            options = options.with_languages(languages);
        }
        if !difficulties.is_empty() {
            options = options.with_difficulties(difficulties);
        }
        options
    }
}

pub async fn get_handler(
    State(state): State<ServerState>,
    Query(selection): Query<Selection>,
) -> (StatusCode, Html<String>) {
    let library = &state.library;
    let themes = match library.load_themes() {
        Ok(themes) => themes,
        Err(e) => {
            log::error!("Failed to load themes: {e}");
            return error_page(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load themes.");
        }
    };
    let theme_id = match (&selection.theme, themes.first()) {
        (Some(id), _) => id.clone(),
        (None, Some(first)) => first.id.clone(),
        (None, None) => {
            let body = html! {
                h1 { (TITLE) }
                div.empty-state { p { "No themes found." } }
            };
            return render(StatusCode::OK, body);
        }
    };
    if let Err(e) = validate_theme_id(&theme_id) {
        return error_page(StatusCode::BAD_REQUEST, &format!("Invalid theme: {e}"));
    }
    let theme = match library.load_theme(&theme_id) {
        Ok(Some(theme)) => theme,
        Ok(None) => {
            return error_page(StatusCode::NOT_FOUND, "Theme not found.");
        }
        Err(e) => {
            log::error!("Failed to load theme {theme_id:?}: {e}");
            return error_page(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load theme.");
        }
    };
    let options = selection.options(&library.config().generation, theme.words.len());
    let cards = generate_cards(Some(&theme), &options);
    log::debug!("Showing {} cards of {:?}.", cards.len(), theme.id);

    let body = html! {
        h1 { (TITLE) }
        (theme_picker(&themes, &theme.id, &options))
        (filters(&theme.id, &options, !cards.is_empty()))
        (render_grid(&cards))
    };
    render(StatusCode::OK, body)
}

fn render(status: StatusCode, body: Markup) -> (StatusCode, Html<String>) {
    let page = page_template(TITLE, body, Assets::Linked);
    (status, Html(page.into_string()))
}

fn error_page(status: StatusCode, message: &str) -> (StatusCode, Html<String>) {
    let body = html! {
        h1 { (TITLE) }
        div.empty-state {
            p { (message) }
            p { a href="/" { "Back to themes" } }
        }
    };
    render(status, body)
}

/// The query string that selects `theme_id` while keeping the current
/// filters.
fn selection_query(theme_id: &str, options: &GenerationOptions) -> String {
    let mut query = format!("/?theme={}", utf8_percent_encode(theme_id, NON_ALPHANUMERIC));
    for lang in &options.languages {
        query.push_str(&format!("&{}=on", lang.code()));
    }
    for difficulty in &options.difficulties {
        query.push_str(&format!("&{difficulty}=on"));
    }
    if options.shuffle {
        query.push_str("&shuffle=on");
    }
    query
}

fn theme_picker(
    themes: &[ThemeSummary],
    selected: &str,
    options: &GenerationOptions,
) -> Markup {
    html! {
        nav.themes aria-label="Select a theme" {
            @for theme in themes {
                @let class = if theme.id == selected { "theme selected" } else { "theme" };
                a class=(class) href=(selection_query(&theme.id, options)) {
                    span.icon { (theme.icon) }
                    div.content {
                        span.name { (theme.name) }
                        span.description { (theme.description) }
                        span.count { (theme.word_count) " words" }
                    }
                }
            }
        }
    }
}

fn filters(theme_id: &str, options: &GenerationOptions, printable: bool) -> Markup {
    html! {
        form id="filters" class="controls" action="/" method="get" {
            input type="hidden" name="theme" value=(theme_id);
            fieldset {
                legend { "Languages" }
                @for lang in Language::ALL {
                    label {
                        input type="checkbox" name=(lang.code()) checked[options.languages.contains(&lang)];
                        " " (lang.name())
                    }
                }
            }
            fieldset {
                legend { "Difficulty" }
                @for difficulty in Difficulty::ALL {
                    label {
                        input type="checkbox" name=(difficulty.to_string()) checked[options.difficulties.contains(&difficulty)];
                        " " (difficulty)
                    }
                }
            }
            label {
                input type="checkbox" name="shuffle" checked[options.shuffle];
                " Shuffle"
            }
            noscript {
                input type="submit" value="Apply";
            }
            button id="print-btn" type="button" disabled[!printable] { "Print" }
        }
    }
}

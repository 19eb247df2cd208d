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

use maud::Markup;
use maud::html;

use crate::present::EMOJI_SIZE_REM;
use crate::present::PresentedLine;
use crate::present::Presentation;
use crate::present::present;
use crate::types::card::Card;

pub const EMPTY_MESSAGE: &str = "Select a theme to display charade cards.";

/// Lay out cards in a three-column grid, or show the empty state.
pub fn render_grid(cards: &[Card]) -> Markup {
    if cards.is_empty() {
        return html! {
            div.empty-state {
                p { (EMPTY_MESSAGE) }
            }
        };
    }
    html! {
        div.grid {
            @for card in cards {
                (render_card(&present(card)))
            }
        }
    }
}

pub fn render_card(presentation: &Presentation) -> Markup {
    let class = match &presentation.tier {
        Some(tier) => format!("card {}", tier.class()),
        None => "card emoji-only".to_string(),
    };
    let alt = presentation
        .lines
        .first()
        .map(|line| line.text.as_str())
        .unwrap_or_default();
    html! {
        div class=(class) {
            @if presentation.is_emoji {
                span.emoji style=(format!("font-size: {EMOJI_SIZE_REM}rem")) {
                    (presentation.emoji)
                }
            } @else {
                img.picture src=(presentation.emoji) alt=(alt);
            }
            @for line in &presentation.lines {
                (render_line(line))
            }
        }
    }
}

fn render_line(line: &PresentedLine) -> Markup {
    let class = format!("word {}", line.style.class());
    let style = format!(
        "font-size: {:.2}rem; font-weight: {}",
        line.font_size_rem,
        line.style.font_weight()
    );
    html! {
        span class=(class) lang=(line.language.code()) dir=(line.direction.as_attr()) style=(style) {
            (line.text)
        }
    }
}

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

//! The printable card sheet.

pub mod grid;
pub mod template;

use maud::Markup;
use maud::html;

use crate::sheet::grid::render_grid;
use crate::sheet::template::Assets;
use crate::sheet::template::page_template;
use crate::types::card::Card;

/// A standalone, printable HTML page with the given cards. The stylesheet is
/// inlined so the file can be opened and printed without a server.
pub fn render_sheet(title: &str, cards: &[Card]) -> Markup {
    let body = html! {
        div.sheet {
            h1.sheet-title { (title) }
            div.controls {
                @if cards.is_empty() {
                    button id="print-btn" type="button" disabled { "Print" }
                } @else {
                    button id="print-btn" type="button" { "Print" }
                }
            }
            (render_grid(cards))
        }
    };
    page_template(title, body, Assets::Inline)
}

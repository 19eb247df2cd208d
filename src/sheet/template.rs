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

use maud::DOCTYPE;
use maud::Markup;
use maud::PreEscaped;
use maud::html;

pub const STYLESHEET: &str = include_str!("style.css");

pub const SCRIPT: &str = include_str!("script.js");

/// How the page gets its stylesheet and script.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Assets {
    /// Served by the web server at `/style.css` and `/script.js`.
    Linked,
    /// Embedded in the page.
    Inline,
}

pub fn page_template(title: &str, body: Markup, assets: Assets) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                @match assets {
                    Assets::Linked => {
                        link rel="stylesheet" href="/style.css";
                    }
                    Assets::Inline => {
                        style { (PreEscaped(STYLESHEET)) }
                    }
                }
            }
            body {
                (body)
                @match assets {
                    Assets::Linked => {
                        script src="/script.js" {};
                    }
                    Assets::Inline => {
                        script { (PreEscaped(SCRIPT)) }
                    }
                }
            }
        }
    }
}

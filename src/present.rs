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

//! Turns a card into the attributes needed to draw it: which lines to show,
//! in what style, and how big.

use crate::types::card::Card;
use crate::types::card::CardLine;
use crate::types::language::Language;

/// Emoji size on every card, in rem.
pub const EMOJI_SIZE_REM: f32 = 3.0;

/// How many lines a card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCount {
    Single,
    Pair,
    Many,
}

/// How long the longest line is, in visual units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LengthBand {
    /// Up to 6 units.
    Short,
    /// Up to 10 units.
    Medium,
    /// Up to 14 units. Cards with three or more lines use this for anything
    /// longer than 10.
    Long,
    /// More than 14 units.
    VeryLong,
}

/// The font size tier of a card, fixed by its line count and longest line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeTier {
    lines: LineCount,
    band: LengthBand,
}

impl SizeTier {
    /// Pick the tier for a card with `n` non-empty lines, the longest of
    /// which is `max_len` units long. Returns `None` when there are no lines.
    pub fn select(n: usize, max_len: usize) -> Option<Self> {
        let lines = match n {
            0 => return None,
            1 => LineCount::Single,
            2 => LineCount::Pair,
            _ => LineCount::Many,
        };
        let band = match max_len {
            0..=6 => LengthBand::Short,
            7..=10 => LengthBand::Medium,
            _ if lines == LineCount::Many => LengthBand::Long,
            11..=14 => LengthBand::Long,
            _ => LengthBand::VeryLong,
        };
        Some(Self { lines, band })
    }

    #[cfg(test)]
    pub fn lines(&self) -> LineCount {
        self.lines
    }

    pub fn label(&self) -> &'static str {
        use LengthBand::*;
        use LineCount::*;
        match (self.lines, self.band) {
            (Single, Short) => "A1",
            (Single, Medium) => "B1",
            (Single, Long) => "C1",
            (Single, VeryLong) => "D1",
            (Pair, Short) => "A2",
            (Pair, Medium) => "B2",
            (Pair, Long) => "C2",
            (Pair, VeryLong) => "D2",
            (Many, Short) => "A",
            (Many, Medium) => "B",
            (Many, Long | VeryLong) => "C",
        }
    }

    /// Font size of the primary line, in rem. Every single-line size is
    /// larger than every two-line size, which is larger than every size for
    /// three or more lines.
    pub fn font_size_rem(&self) -> f32 {
        use LengthBand::*;
        use LineCount::*;
        match (self.lines, self.band) {
            (Single, Short) => 2.25,
            (Single, Medium) => 2.0,
            (Single, Long) => 1.75,
            (Single, VeryLong) => 1.5,
            (Pair, Short) => 1.4,
            (Pair, Medium) => 1.25,
            (Pair, Long) => 1.1,
            (Pair, VeryLong) => 1.0,
            (Many, Short) => 0.95,
            (Many, Medium) => 0.85,
            (Many, Long | VeryLong) => 0.75,
        }
    }

    /// CSS class for the card, e.g. `tier-b2`.
    pub fn class(&self) -> String {
        format!("tier-{}", self.label().to_ascii_lowercase())
    }
}

/// The visual role of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    /// The first line.
    Primary,
    /// The second line.
    Secondary,
    /// Every line after the second.
    Tertiary,
}

impl LineStyle {
    fn for_position(index: usize) -> Self {
        match index {
            0 => LineStyle::Primary,
            1 => LineStyle::Secondary,
            _ => LineStyle::Tertiary,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            LineStyle::Primary => "word-primary",
            LineStyle::Secondary => "word-secondary",
            LineStyle::Tertiary => "word-tertiary",
        }
    }

    pub fn font_weight(&self) -> u16 {
        match self {
            LineStyle::Primary => 600,
            LineStyle::Secondary => 500,
            LineStyle::Tertiary => 400,
        }
    }

    fn scale(&self) -> f32 {
        match self {
            LineStyle::Primary => 1.0,
            LineStyle::Secondary => 0.85,
            LineStyle::Tertiary => 0.8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    pub fn for_language(lang: Language) -> Self {
        if lang.is_right_to_left() {
            TextDirection::RightToLeft
        } else {
            TextDirection::LeftToRight
        }
    }

    /// Value of the HTML `dir` attribute.
    pub fn as_attr(&self) -> &'static str {
        match self {
            TextDirection::LeftToRight => "ltr",
            TextDirection::RightToLeft => "rtl",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PresentedLine {
    pub text: String,
    pub language: Language,
    pub style: LineStyle,
    pub direction: TextDirection,
    pub font_size_rem: f32,
}

/// Everything needed to draw one card.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    pub lines: Vec<PresentedLine>,
    pub emoji: String,
    pub is_emoji: bool,
    /// `None` for an emoji-only card.
    pub tier: Option<SizeTier>,
}

/// Width of a line in visual units. Characters of double-width scripts count
/// twice.
pub fn visual_length(line: &CardLine) -> usize {
    let chars = line.text.trim().chars().count();
    if line.language.is_double_width() {
        chars * 2
    } else {
        chars
    }
}

pub fn present(card: &Card) -> Presentation {
    let visible: Vec<&CardLine> = card
        .lines
        .iter()
        .filter(|line| !line.text.trim().is_empty())
        .collect();
    let max_len = visible.iter().map(|line| visual_length(line)).max().unwrap_or(0);
    let tier = SizeTier::select(visible.len(), max_len);
    let base_size = tier.map(|t| t.font_size_rem()).unwrap_or(0.0);
    let lines = visible
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let style = LineStyle::for_position(index);
            PresentedLine {
                text: line.text.trim().to_string(),
                language: line.language,
                style,
                direction: TextDirection::for_language(line.language),
                font_size_rem: base_size * style.scale(),
            }
        })
        .collect();
    Presentation {
        lines,
        emoji: card.image.clone(),
        is_emoji: card.is_emoji,
        tier,
    }
}

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

use rand::Rng;
use rand::seq::SliceRandom;

use crate::options::GenerationOptions;
use crate::types::card::Card;
use crate::types::card::CardLine;
use crate::types::language::Language;
use crate::types::theme::ThemeData;
use crate::types::word::Word;

/// Generate cards from a theme, shuffling with the thread-local generator.
///
/// A missing theme, a theme without words, or a filter that rejects every
/// word all produce an empty list. None of these are errors.
pub fn generate_cards(theme: Option<&ThemeData>, options: &GenerationOptions) -> Vec<Card> {
    generate_cards_with_rng(theme, options, &mut rand::thread_rng())
}

/// Like [`generate_cards`], but draws the shuffle from `rng`.
pub fn generate_cards_with_rng<R: Rng + ?Sized>(
    theme: Option<&ThemeData>,
    options: &GenerationOptions,
    rng: &mut R,
) -> Vec<Card> {
    let Some(theme) = theme else {
        return Vec::new();
    };
    generate_from_words(&theme.words, options, rng)
}

/// The pipeline proper: filter by difficulty, optionally shuffle, truncate,
/// and project each word into a card.
pub fn generate_from_words<R: Rng + ?Sized>(
    words: &[Word],
    options: &GenerationOptions,
    rng: &mut R,
) -> Vec<Card> {
    let options = options.normalized();
    let mut eligible: Vec<&Word> = words
        .iter()
        .filter(|word| options.admits(word.difficulty()))
        .collect();
    log::debug!(
        "{} of {} words pass the difficulty filter.",
        eligible.len(),
        words.len()
    );
    if options.shuffle {
        eligible.shuffle(rng);
    }
    eligible.truncate(options.count);
    eligible
        .into_iter()
        .map(|word| project(word, &options))
        .collect()
}

fn project(word: &Word, options: &GenerationOptions) -> Card {
    let lines = Language::ALL
        .into_iter()
        .filter(|lang| options.languages.contains(lang))
        .filter_map(|lang| {
            word.text_in(lang).map(|text| CardLine {
                language: lang,
                text: text.to_string(),
            })
        })
        .collect();
    Card {
        lines,
        image: word.emoji().to_string(),
        is_emoji: true,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::types::difficulty::Difficulty;

    fn theme(words: Vec<Word>) -> ThemeData {
        ThemeData {
            id: "test-theme".to_string(),
            name: "Test Theme".to_string(),
            description: "A test theme".to_string(),
            icon: "🧪".to_string(),
            words,
        }
    }

    /// Twelve words cycling through easy, easy, medium, medium, hard, hard.
    fn mock_theme() -> ThemeData {
        let tags = [
            Difficulty::Easy,
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Hard,
        ];
        let words = (1..=12)
            .map(|i| {
                Word::new(format!("Word{i}"), format!("{i}\u{fe0f}\u{20e3}"))
                    .with_difficulty(tags[(i - 1) % 6])
            })
            .collect();
        theme(words)
    }

    fn unshuffled() -> GenerationOptions {
        GenerationOptions::default().with_shuffle(false)
    }

    fn texts(cards: &[Card]) -> Vec<String> {
        cards
            .iter()
            .map(|c| c.text(Language::En).unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_default_count() {
        let cards = generate_cards(Some(&mock_theme()), &unshuffled());
        assert_eq!(cards.len(), 12);
    }

    #[test]
    fn test_requested_count() {
        let cards = generate_cards(Some(&mock_theme()), &unshuffled().with_count(6));
        assert_eq!(cards.len(), 6);
    }

    #[test]
    fn test_fewer_words_than_requested() {
        let mut small = mock_theme();
        small.words.truncate(5);
        let cards = generate_cards(Some(&small), &unshuffled().with_count(12));
        assert_eq!(cards.len(), 5);
    }

    #[test]
    fn test_zero_count() {
        let cards = generate_cards(Some(&mock_theme()), &unshuffled().with_count(0));
        assert!(cards.is_empty());
    }

    #[test]
    fn test_missing_theme() {
        let cards = generate_cards(None, &GenerationOptions::default());
        assert!(cards.is_empty());
    }

    #[test]
    fn test_empty_theme() {
        let cards = generate_cards(Some(&theme(Vec::new())), &GenerationOptions::default());
        assert!(cards.is_empty());
    }

    #[test]
    fn test_cardinality_matches_filter() {
        let theme = mock_theme();
        for count in [0, 1, 3, 4, 5, 20] {
            let options = unshuffled()
                .with_count(count)
                .with_difficulties([Difficulty::Medium, Difficulty::Hard]);
            let passing = theme
                .words
                .iter()
                .filter(|w| options.admits(w.difficulty()))
                .count();
            let cards = generate_cards(Some(&theme), &options);
            assert_eq!(cards.len(), count.min(passing));
        }
    }

    #[test]
    fn test_difficulty_filter() {
        let theme = mock_theme();
        let options = unshuffled().with_difficulties([Difficulty::Easy]);
        let cards = generate_cards(Some(&theme), &options);
        assert_eq!(texts(&cards), vec!["Word1", "Word2", "Word7", "Word8"]);
    }

    #[test]
    fn test_untagged_words_always_pass() {
        let theme = theme(vec![
            Word::new("Tagged", "🏷️").with_difficulty(Difficulty::Hard),
            Word::new("Untagged", "❔"),
        ]);
        let options = unshuffled().with_difficulties([Difficulty::Easy]);
        let cards = generate_cards(Some(&theme), &options);
        assert_eq!(texts(&cards), vec!["Untagged"]);
    }

    #[test]
    fn test_cards_trace_back_to_admitted_words() {
        let theme = mock_theme();
        let options = GenerationOptions::default()
            .with_count(100)
            .with_difficulties([Difficulty::Hard]);
        let cards = generate_cards(Some(&theme), &options);
        assert_eq!(cards.len(), 4);
        for card in &cards {
            let word = theme
                .words
                .iter()
                .find(|w| Some(w.text()) == card.text(Language::En))
                .unwrap();
            assert!(options.admits(word.difficulty()));
        }
    }

    #[test]
    fn test_empty_difficulties_means_all() {
        let options = unshuffled().with_difficulties(Vec::new());
        let cards = generate_cards(Some(&mock_theme()), &options);
        assert_eq!(cards.len(), 12);
    }

    #[test]
    fn test_shuffles_by_default() {
        let theme = mock_theme();
        let orderings: HashSet<Vec<String>> = (0..10)
            .map(|_| texts(&generate_cards(Some(&theme), &GenerationOptions::default())))
            .collect();
        assert!(orderings.len() > 1);
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let theme = mock_theme();
        let options = GenerationOptions::default();
        let a = generate_cards_with_rng(Some(&theme), &options, &mut StdRng::seed_from_u64(7));
        let b = generate_cards_with_rng(Some(&theme), &options, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let theme = mock_theme();
        let options = GenerationOptions::default().with_count(100);
        let mut shuffled = texts(&generate_cards_with_rng(
            Some(&theme),
            &options,
            &mut StdRng::seed_from_u64(42),
        ));
        let mut ordered = texts(&generate_cards(Some(&theme), &unshuffled().with_count(100)));
        shuffled.sort();
        ordered.sort();
        assert_eq!(shuffled, ordered);
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let theme = mock_theme();
        let before = theme.words.clone();
        let _ = generate_cards(Some(&theme), &GenerationOptions::default());
        assert_eq!(theme.words, before);
    }

    #[test]
    fn test_unshuffled_is_deterministic() {
        let theme = mock_theme();
        let a = generate_cards(Some(&theme), &unshuffled());
        let b = generate_cards(Some(&theme), &unshuffled());
        assert_eq!(a, b);
    }

    #[test]
    fn test_preserves_first_words_when_not_shuffling() {
        let cards = generate_cards(Some(&mock_theme()), &unshuffled().with_count(3));
        assert_eq!(texts(&cards), vec!["Word1", "Word2", "Word3"]);
    }

    #[test]
    fn test_card_format() {
        let cards = generate_cards(Some(&mock_theme()), &unshuffled().with_count(1));
        assert_eq!(
            cards[0],
            Card {
                lines: vec![CardLine {
                    language: Language::En,
                    text: "Word1".to_string(),
                }],
                image: "1\u{fe0f}\u{20e3}".to_string(),
                is_emoji: true,
            }
        );
    }

    #[test]
    fn test_twenty_four_words_english_only() {
        let words = (1..=24).map(|i| Word::new(format!("W{i}"), "⭐")).collect();
        let theme = theme(words);
        let options = unshuffled().with_count(12).with_languages([Language::En]);
        let cards = generate_cards(Some(&theme), &options);
        assert_eq!(cards.len(), 12);
        for card in &cards {
            assert_eq!(card.lines.len(), 1);
            assert_eq!(card.lines[0].language, Language::En);
        }
        assert_eq!(cards[0].text(Language::En), Some("W1"));
        assert_eq!(cards[11].text(Language::En), Some("W12"));
    }

    #[test]
    fn test_bilingual_card() {
        let theme = theme(vec![
            Word::new("Dog", "🐶")
                .with_translation(Language::Es, "Perro")
                .with_difficulty(Difficulty::Easy),
        ]);
        let options = unshuffled()
            .with_languages([Language::En, Language::Es])
            .with_difficulties([Difficulty::Easy]);
        let cards = generate_cards(Some(&theme), &options);
        assert_eq!(cards.len(), 1);
        assert_eq!(
            cards[0].lines,
            vec![
                CardLine {
                    language: Language::En,
                    text: "Dog".to_string(),
                },
                CardLine {
                    language: Language::Es,
                    text: "Perro".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_lines_follow_canonical_order() {
        let theme = theme(vec![
            Word::new("Dog", "🐶")
                .with_translation(Language::Ar, "كلب")
                .with_translation(Language::Zh, "狗")
                .with_translation(Language::Es, "Perro"),
        ]);
        let options = unshuffled().with_languages([Language::Ar, Language::Zh, Language::En]);
        let cards = generate_cards(Some(&theme), &options);
        let langs: Vec<Language> = cards[0].lines.iter().map(|l| l.language).collect();
        assert_eq!(langs, vec![Language::En, Language::Zh, Language::Ar]);
    }

    #[test]
    fn test_no_unrequested_or_blank_lines() {
        let theme = theme(vec![
            Word::new("Dog", "🐶")
                .with_translation(Language::Es, "  ")
                .with_translation(Language::Zh, "狗"),
            Word::new("", "❓").with_translation(Language::Es, "Nada"),
        ]);
        let options = unshuffled().with_languages([Language::En, Language::Es]);
        let cards = generate_cards(Some(&theme), &options);
        assert_eq!(cards.len(), 2);
        for card in &cards {
            for line in &card.lines {
                assert!(options.languages.contains(&line.language));
                assert!(!line.text.trim().is_empty());
            }
        }
        assert_eq!(cards[0].lines.len(), 1);
        assert_eq!(cards[1].lines.len(), 1);
        assert_eq!(cards[1].text(Language::Es), Some("Nada"));
    }

    #[test]
    fn test_missing_translation_leaves_card_without_lines() {
        let theme = theme(vec![Word::new("Dog", "🐶")]);
        let options = unshuffled().with_languages([Language::Ar]);
        let cards = generate_cards(Some(&theme), &options);
        assert_eq!(cards.len(), 1);
        assert!(cards[0].lines.is_empty());
        assert_eq!(cards[0].image, "🐶");
    }
}

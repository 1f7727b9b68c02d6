//! Words and text lines.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{Line, Point, Rectangle};
use crate::model::element::Character;
use crate::model::font::FaceId;

/// Majority vote over weighted face observations. Ties break to the smaller
/// face id so the result is deterministic.
pub(crate) fn majority_face<I>(votes: I) -> Option<FaceId>
where
    I: IntoIterator<Item = (FaceId, usize)>,
{
    let mut counts: HashMap<FaceId, usize> = HashMap::new();
    for (face, weight) in votes {
        *counts.entry(face).or_insert(0) += weight;
    }
    counts
        .into_iter()
        .max_by_key(|(face, count)| (*count, std::cmp::Reverse(*face)))
        .map(|(face, _)| face)
}

/// An ordered run of characters sharing a line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// Member characters in left-to-right order
    pub characters: Vec<Character>,

    /// Bounding rectangle, the union of the members
    pub rect: Rectangle,

    /// Zero-based page index
    pub page: usize,

    /// Dominant font face by majority vote
    pub face: FaceId,

    /// Largest member font size
    pub font_size: f32,
}

impl Word {
    /// Build a word from its characters. Members are reordered left to
    /// right; the rectangle is the union of the member rectangles.
    pub fn from_characters(mut characters: Vec<Character>) -> Result<Self> {
        if characters.is_empty() {
            return Err(Error::Invariant("word with no characters".to_string()));
        }
        characters.sort_by(|a, b| {
            a.position
                .rect
                .min_x()
                .partial_cmp(&b.position.rect.min_x())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let rect = Rectangle::union(characters.iter().map(|c| &c.position.rect))?;
        let page = characters[0].position.page;
        let face = majority_face(characters.iter().map(|c| (c.face, 1)))
            .ok_or_else(|| Error::Invariant("word with no face votes".to_string()))?;
        let font_size = characters
            .iter()
            .map(|c| c.font_size)
            .fold(0.0f32, f32::max);
        Ok(Self {
            characters,
            rect,
            page,
            face,
            font_size,
        })
    }

    /// The word's text.
    pub fn text(&self) -> String {
        self.characters.iter().map(|c| c.text.as_str()).collect()
    }

    /// Number of member characters.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Check whether the word has no characters.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

/// An ordered sequence of words in left-to-right reading order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextLine {
    /// Member words in reading order
    pub words: Vec<Word>,

    /// Bounding rectangle, the union of the members
    pub rect: Rectangle,

    /// Zero-based page index
    pub page: usize,

    /// Baseline Y coordinate, the median bottom edge of the member words
    pub baseline_y: f32,

    /// Dominant font face by character-weighted majority vote
    pub face: FaceId,

    /// Largest member font size
    pub font_size: f32,
}

impl TextLine {
    /// Build a line from its words, reordered left to right.
    pub fn from_words(mut words: Vec<Word>) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::Invariant("line with no words".to_string()));
        }
        words.sort_by(|a, b| {
            a.rect
                .min_x()
                .partial_cmp(&b.rect.min_x())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let rect = Rectangle::union(words.iter().map(|w| &w.rect))?;
        let page = words[0].page;

        let mut bottoms: Vec<f32> = words.iter().map(|w| w.rect.min_y()).collect();
        bottoms.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let baseline_y = bottoms[bottoms.len() / 2];

        let face = majority_face(words.iter().map(|w| (w.face, w.len())))
            .ok_or_else(|| Error::Invariant("line with no face votes".to_string()))?;
        let font_size = words.iter().map(|w| w.font_size).fold(0.0f32, f32::max);
        Ok(Self {
            words,
            rect,
            page,
            baseline_y,
            face,
            font_size,
        })
    }

    /// The line's text, words separated by single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The baseline as a horizontal segment spanning the line.
    pub fn baseline(&self) -> Line {
        Line::new(
            Point::new(self.rect.min_x(), self.baseline_y),
            Point::new(self.rect.max_x(), self.baseline_y),
        )
    }

    /// Number of member characters across all words.
    pub fn character_count(&self) -> usize {
        self.words.iter().map(|w| w.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::element::Position;

    fn ch(x: f32, text: &str, face: u32) -> Character {
        Character {
            position: Position::new(0, Rectangle::new(x, 0.0, x + 5.0, 10.0)),
            text: text.to_string(),
            face: FaceId(face),
            font_size: 10.0,
            color: None,
        }
    }

    #[test]
    fn test_word_orders_characters_and_unions_rect() {
        let word = Word::from_characters(vec![ch(10.0, "b", 0), ch(5.0, "a", 0)]).unwrap();
        assert_eq!(word.text(), "ab");
        assert!(word.rect.approx_eq(&Rectangle::new(5.0, 0.0, 15.0, 10.0)));
    }

    #[test]
    fn test_word_majority_face() {
        let word =
            Word::from_characters(vec![ch(0.0, "a", 1), ch(5.0, "b", 0), ch(10.0, "c", 1)])
                .unwrap();
        assert_eq!(word.face, FaceId(1));
    }

    #[test]
    fn test_majority_face_tie_breaks_low() {
        let face = majority_face([(FaceId(3), 2), (FaceId(1), 2)]).unwrap();
        assert_eq!(face, FaceId(1));
    }

    #[test]
    fn test_empty_word_is_invariant_violation() {
        assert!(matches!(
            Word::from_characters(vec![]),
            Err(Error::Invariant(_))
        ));
    }

    #[test]
    fn test_line_text_and_baseline() {
        let w1 = Word::from_characters(vec![ch(0.0, "h", 0), ch(5.0, "i", 0)]).unwrap();
        let w2 = Word::from_characters(vec![ch(20.0, "y", 0), ch(25.0, "o", 0)]).unwrap();
        let line = TextLine::from_words(vec![w2, w1]).unwrap();
        assert_eq!(line.text(), "hi yo");
        assert_eq!(line.baseline_y, 0.0);
        assert_eq!(line.character_count(), 4);
        assert_eq!(line.baseline().start.x, line.rect.min_x());
    }
}

//! Decoder-facing input model.
//!
//! The content-stream decoder hands the analysis one element sequence per
//! page, in paint order. Paint order carries no meaning here; reading order
//! is reconstructed geometrically.

use serde::{Deserialize, Serialize};

use crate::geometry::Rectangle;
use crate::model::element::Color;

/// One page worth of decoded elements, in arbitrary paint order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageInput {
    /// Decoded elements of the page
    pub elements: Vec<InputElement>,
}

impl PageInput {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page from an element sequence.
    pub fn from_elements(elements: Vec<InputElement>) -> Self {
        Self { elements }
    }

    /// Add an element to the page.
    pub fn push(&mut self, element: InputElement) {
        self.elements.push(element);
    }

    /// Number of character elements on the page.
    pub fn character_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, InputElement::Character { .. }))
            .count()
    }
}

/// A positioned primitive produced by the content-stream decoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputElement {
    /// A glyph with its unicode text (possibly a ligature codepoint)
    Character {
        /// Glyph bounding rectangle
        rect: Rectangle,
        /// Unicode text of the glyph
        text: String,
        /// Font identity as reported by the decoder
        font_id: String,
        /// Rendered font size in points
        font_size: f32,
        /// Fill color, when known
        color: Option<Color>,
    },

    /// A vector shape; acts only as a tokenizer obstacle
    Shape {
        /// Shape bounding rectangle
        rect: Rectangle,
        /// Stroke or fill color, when known
        color: Option<Color>,
    },

    /// A raster figure; acts only as a tokenizer obstacle
    Figure {
        /// Figure bounding rectangle
        rect: Rectangle,
    },
}

impl InputElement {
    /// Shorthand for a character element without color.
    pub fn character(
        rect: Rectangle,
        text: impl Into<String>,
        font_id: impl Into<String>,
        font_size: f32,
    ) -> Self {
        InputElement::Character {
            rect,
            text: text.into(),
            font_id: font_id.into(),
            font_size,
            color: None,
        }
    }

    /// The element's bounding rectangle.
    pub fn rect(&self) -> &Rectangle {
        match self {
            InputElement::Character { rect, .. } => rect,
            InputElement::Shape { rect, .. } => rect,
            InputElement::Figure { rect } => rect,
        }
    }

    /// Whether the element carries text.
    pub fn is_character(&self) -> bool {
        matches!(self, InputElement::Character { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_input_counts_characters() {
        let mut page = PageInput::new();
        page.push(InputElement::character(
            Rectangle::new(0.0, 0.0, 5.0, 10.0),
            "a",
            "F1",
            10.0,
        ));
        page.push(InputElement::Figure {
            rect: Rectangle::new(0.0, 20.0, 50.0, 80.0),
        });
        assert_eq!(page.elements.len(), 2);
        assert_eq!(page.character_count(), 1);
    }

    #[test]
    fn test_rect_accessor() {
        let fig = InputElement::Figure {
            rect: Rectangle::new(1.0, 2.0, 3.0, 4.0),
        };
        assert_eq!(fig.rect().min_x(), 1.0);
        assert!(!fig.is_character());
    }
}

//! Positioned page elements after intake.

use serde::{Deserialize, Serialize};

use crate::geometry::Rectangle;
use crate::model::font::FaceId;

/// One placement on a page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based page index
    pub page: usize,

    /// Bounding rectangle on that page
    pub rect: Rectangle,
}

impl Position {
    /// Create a new position.
    pub fn new(page: usize, rect: Rectangle) -> Self {
        Self { page, rect }
    }
}

/// An RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

impl Color {
    /// Create a new color.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Black, the overwhelmingly common text color.
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// A glyph with resolved font face, ready for tokenization.
///
/// Characters are read-only once intake finishes; the only mutation the
/// analysis ever performs is the ligature text rewrite during intake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Placement on the page
    pub position: Position,

    /// Unicode text, with ligatures already expanded
    pub text: String,

    /// Interned font face handle
    pub face: FaceId,

    /// Rendered font size in points
    pub font_size: f32,

    /// Fill color, when known
    pub color: Option<Color>,
}

/// A vector shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// Placement on the page
    pub position: Position,

    /// Stroke or fill color, when known
    pub color: Option<Color>,
}

/// A raster figure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Figure {
    /// Placement on the page
    pub position: Position,
}

/// Any positioned element the tokenizer operates on. Shapes and figures are
/// obstacles: they shape the whitespace profile but never join words.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A glyph
    Character(Character),
    /// A vector shape
    Shape(Shape),
    /// A raster figure
    Figure(Figure),
}

impl Element {
    /// The element's placement.
    pub fn position(&self) -> &Position {
        match self {
            Element::Character(c) => &c.position,
            Element::Shape(s) => &s.position,
            Element::Figure(f) => &f.position,
        }
    }

    /// The element's bounding rectangle.
    pub fn rect(&self) -> &Rectangle {
        &self.position().rect
    }

    /// The character payload, when this element is one.
    pub fn as_character(&self) -> Option<&Character> {
        match self {
            Element::Character(c) => Some(c),
            _ => None,
        }
    }

    /// Whether the element is an obstacle rather than text.
    pub fn is_obstacle(&self) -> bool {
        !matches!(self, Element::Character(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_character() -> Character {
        Character {
            position: Position::new(0, Rectangle::new(0.0, 0.0, 5.0, 10.0)),
            text: "a".to_string(),
            face: FaceId(0),
            font_size: 10.0,
            color: Some(Color::black()),
        }
    }

    #[test]
    fn test_element_accessors() {
        let el = Element::Character(sample_character());
        assert_eq!(el.position().page, 0);
        assert_eq!(el.rect().max_x(), 5.0);
        assert!(el.as_character().is_some());
        assert!(!el.is_obstacle());
    }

    #[test]
    fn test_obstacles() {
        let shape = Element::Shape(Shape {
            position: Position::new(1, Rectangle::new(0.0, 0.0, 1.0, 1.0)),
            color: None,
        });
        assert!(shape.is_obstacle());
        assert!(shape.as_character().is_none());
    }
}

//! Text areas, blocks, and paragraphs.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Rectangle;
use crate::model::element::Position;
use crate::model::font::FaceId;
use crate::model::role::SemanticRole;
use crate::model::text::{majority_face, TextLine};

/// A maximal column-like region of a page holding one cohesive run of
/// text lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextArea {
    /// Member lines, ordered by descending baseline then ascending X
    pub lines: Vec<TextLine>,

    /// Bounding rectangle, the union of the members
    pub rect: Rectangle,

    /// Zero-based page index
    pub page: usize,

    /// Column index, 0 = leftmost
    pub column: usize,
}

impl TextArea {
    /// Build an area from its lines. Lines are put into reading order:
    /// descending baseline Y, then ascending X.
    pub fn from_lines(mut lines: Vec<TextLine>, column: usize) -> Result<Self> {
        if lines.is_empty() {
            return Err(Error::Invariant("area with no lines".to_string()));
        }
        lines.sort_by(|a, b| {
            b.baseline_y
                .partial_cmp(&a.baseline_y)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    a.rect
                        .min_x()
                        .partial_cmp(&b.rect.min_x())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });
        let rect = Rectangle::union(lines.iter().map(|l| &l.rect))?;
        let page = lines[0].page;
        Ok(Self {
            lines,
            rect,
            page,
            column,
        })
    }

    /// Number of member characters across all lines.
    pub fn character_count(&self) -> usize {
        self.lines.iter().map(|l| l.character_count()).sum()
    }
}

/// One or more contiguous lines within an area sharing font and
/// indentation; the unit of semantic classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBlock {
    /// Member lines in reading order
    pub lines: Vec<TextLine>,

    /// Bounding rectangle, the union of the members
    pub rect: Rectangle,

    /// Zero-based page index
    pub page: usize,

    /// Column index of the enclosing area
    pub column: usize,

    /// Dominant font face by character-weighted majority vote
    pub face: FaceId,

    /// Largest member font size
    pub font_size: f32,

    /// Assigned semantic role
    pub role: SemanticRole,
}

impl TextBlock {
    /// Build a block from lines already in reading order.
    pub fn from_lines(lines: Vec<TextLine>, column: usize) -> Result<Self> {
        if lines.is_empty() {
            return Err(Error::Invariant("block with no lines".to_string()));
        }
        let rect = Rectangle::union(lines.iter().map(|l| &l.rect))?;
        let page = lines[0].page;
        let face = majority_face(lines.iter().map(|l| (l.face, l.character_count())))
            .ok_or_else(|| Error::Invariant("block with no face votes".to_string()))?;
        let font_size = lines.iter().map(|l| l.font_size).fold(0.0f32, f32::max);
        Ok(Self {
            lines,
            rect,
            page,
            column,
            face,
            font_size,
            role: SemanticRole::Other,
        })
    }

    /// The block's text, lines joined by single spaces.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The block's placement.
    pub fn position(&self) -> Position {
        Position::new(self.page, self.rect)
    }

    /// Number of member characters across all lines.
    pub fn character_count(&self) -> usize {
        self.lines.iter().map(|l| l.character_count()).sum()
    }
}

/// A logical unit of one or more blocks, merged across page boundaries when
/// the text continues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    /// Member blocks in page order
    pub blocks: Vec<TextBlock>,
}

impl Paragraph {
    /// Wrap a single block.
    pub fn from_block(block: TextBlock) -> Self {
        Self {
            blocks: vec![block],
        }
    }

    /// Absorb the blocks of a following paragraph.
    pub fn append(&mut self, other: Paragraph) {
        self.blocks.extend(other.blocks);
    }

    /// The paragraph's text, blocks joined by single spaces.
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The role of the paragraph, taken from its first block.
    pub fn role(&self) -> SemanticRole {
        self.blocks
            .first()
            .map(|b| b.role)
            .unwrap_or(SemanticRole::Other)
    }

    /// One position per page the paragraph touches, each the union of the
    /// member blocks on that page, in page order.
    pub fn positions(&self) -> Vec<Position> {
        let mut positions: Vec<Position> = Vec::new();
        for block in &self.blocks {
            let same_page = positions.last().map(|p| p.page == block.page).unwrap_or(false);
            if same_page {
                if let Some(last) = positions.last_mut() {
                    last.rect.expand(&block.rect);
                }
            } else {
                positions.push(block.position());
            }
        }
        positions
    }

    /// Whether the paragraph spans more than one page.
    pub fn spans_pages(&self) -> bool {
        self.positions().len() > 1
    }
}

//! Unit selection for downstream serializers.
//!
//! A serializer chooses an extraction granularity and the set of semantic
//! roles it wants; every unit it gets back keeps its page indices and
//! rectangles, so page breaks inside a unit spanning a boundary stay
//! recoverable.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{Document, Position, SemanticRole};

/// The unit size a serializer extracts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// Individual characters
    Character,
    /// Words
    Word,
    /// Text lines
    Line,
    /// Text blocks
    Block,
    /// Paragraphs, possibly spanning pages
    Paragraph,
}

/// What a serializer wants out of a document.
#[derive(Debug, Clone)]
pub struct UnitFilter {
    /// The extraction granularity
    pub granularity: Granularity,

    /// Roles to include; `None` includes everything
    pub roles: Option<HashSet<SemanticRole>>,
}

impl UnitFilter {
    /// Include every role at the given granularity.
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            roles: None,
        }
    }

    /// Restrict the filter to a role set.
    pub fn with_roles(mut self, roles: HashSet<SemanticRole>) -> Self {
        self.roles = Some(roles);
        self
    }

    /// Whether a role passes the filter.
    pub fn includes(&self, role: SemanticRole) -> bool {
        self.roles.as_ref().map(|set| set.contains(&role)).unwrap_or(true)
    }
}

/// One extracted unit: its text, the role of the block it came from, and
/// one position per page it touches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedUnit {
    /// Text content
    pub text: String,

    /// Semantic role of the enclosing block
    pub role: SemanticRole,

    /// Placements in page order
    pub positions: Vec<Position>,
}

impl ExtractedUnit {
    /// Whether the unit crosses a page boundary.
    pub fn spans_pages(&self) -> bool {
        self.positions.len() > 1
    }
}

impl Document {
    /// Extract units at the filter's granularity, in reading order.
    pub fn extract_units(&self, filter: &UnitFilter) -> Vec<ExtractedUnit> {
        let mut units = Vec::new();
        for paragraph in &self.paragraphs {
            if filter.granularity == Granularity::Paragraph {
                if filter.includes(paragraph.role()) {
                    units.push(ExtractedUnit {
                        text: paragraph.text(),
                        role: paragraph.role(),
                        positions: paragraph.positions(),
                    });
                }
                continue;
            }
            for block in &paragraph.blocks {
                if !filter.includes(block.role) {
                    continue;
                }
                match filter.granularity {
                    Granularity::Block => units.push(ExtractedUnit {
                        text: block.text(),
                        role: block.role,
                        positions: vec![block.position()],
                    }),
                    Granularity::Line => {
                        for line in &block.lines {
                            units.push(ExtractedUnit {
                                text: line.text(),
                                role: block.role,
                                positions: vec![Position::new(line.page, line.rect)],
                            });
                        }
                    }
                    Granularity::Word => {
                        for line in &block.lines {
                            for word in &line.words {
                                units.push(ExtractedUnit {
                                    text: word.text(),
                                    role: block.role,
                                    positions: vec![Position::new(word.page, word.rect)],
                                });
                            }
                        }
                    }
                    Granularity::Character => {
                        for line in &block.lines {
                            for word in &line.words {
                                for character in &word.characters {
                                    units.push(ExtractedUnit {
                                        text: character.text.clone(),
                                        role: block.role,
                                        positions: vec![character.position],
                                    });
                                }
                            }
                        }
                    }
                    Granularity::Paragraph => {}
                }
            }
        }
        units
    }
}

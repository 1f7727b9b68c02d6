//! Document-level output types.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::block::{Paragraph, TextBlock};
use crate::model::font::{FaceId, FontFace};

/// The frozen result of one pipeline run: the paragraph tree with assigned
/// roles plus the document's font face table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Number of input pages, including pages that yielded nothing
    pub page_count: usize,

    /// Interned font faces, indexable by [`FaceId`]
    pub faces: Vec<FontFace>,

    /// Paragraphs in reading order
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a font face handle.
    pub fn face(&self, id: FaceId) -> Option<&FontFace> {
        self.faces.get(id.0 as usize)
    }

    /// All blocks across all paragraphs, in reading order.
    pub fn blocks(&self) -> impl Iterator<Item = &TextBlock> {
        self.paragraphs.iter().flat_map(|p| p.blocks.iter())
    }

    /// Number of blocks across all paragraphs.
    pub fn block_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.blocks.len()).sum()
    }

    /// Plain text of the whole document, paragraphs separated by blank
    /// lines.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Check whether the document holds any paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Serialize the document tree to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialize(e.to_string()))
    }

    /// Serialize the document tree to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialize(e.to_string()))
    }
}

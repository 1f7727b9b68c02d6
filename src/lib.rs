//! # pagecut
//!
//! Layout tokenization and semantic-role labeling for decoded PDF page
//! content.
//!
//! A content-stream decoder hands this library one element sequence per
//! page: positioned glyphs, shapes, and figures in arbitrary paint order.
//! The library reconstructs the layout hierarchy (words, lines, text areas,
//! blocks, paragraphs) with recursive XY-cut segmentation, merges
//! paragraphs that continue across page boundaries, and assigns each block
//! a semantic role (title, abstract, headings, body text) from geometric
//! and typographic signals alone.
//!
//! ## Quick Start
//!
//! ```
//! use pagecut::{process_pages, Granularity, InputElement, PageInput, Rectangle, UnitFilter};
//!
//! fn main() -> pagecut::Result<()> {
//!     let mut page = PageInput::new();
//!     for (i, c) in "Title".chars().enumerate() {
//!         let x = 100.0 + i as f32 * 9.0;
//!         page.push(InputElement::character(
//!             Rectangle::new(x, 760.0, x + 8.0, 778.0),
//!             c.to_string(),
//!             "Helvetica-Bold",
//!             18.0,
//!         ));
//!     }
//!
//!     let doc = process_pages(&[page])?;
//!     let units = doc.extract_units(&UnitFilter::new(Granularity::Block));
//!     for unit in units {
//!         println!("{:?}: {}", unit.role, unit.text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Reading order from geometry**: paint order is never trusted
//! - **Multi-column layouts**: XY-cut segmentation with obstacle handling
//! - **Cross-page paragraphs**: idempotent page-boundary merging
//! - **Rule-based roles**: deterministic, no OCR and no learned model
//! - **Parallel processing**: pages tokenize concurrently via Rayon

pub mod assemble;
pub mod error;
pub mod geometry;
pub mod ligatures;
pub mod model;
pub mod options;
pub mod pipeline;
pub mod select;
pub mod semantics;
pub mod tokenize;

// Re-export commonly used types
pub use error::{Error, Result};
pub use geometry::{Axis, Line, Point, Rectangle};
pub use model::{
    Character, Color, Document, Element, FaceId, FontFace, FontFaceCache, FontSizeStats,
    InputElement, PageInput, Paragraph, Position, SemanticRole, TextArea, TextBlock, TextLine,
    Word,
};
pub use options::{GapThresholds, LayoutOptions};
pub use pipeline::{process_pages, process_pages_with_options};
pub use select::{ExtractedUnit, Granularity, UnitFilter};
pub use semantics::{AmbientHeading, DocumentContext, RoleClassifier, RoleModule};
pub use tokenize::Tokenizer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_empty_input() {
        let doc = process_pages(&[]).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_options_flow_through() {
        let options = LayoutOptions::new().sequential();
        let doc = process_pages_with_options(&[PageInput::new()], &options).unwrap();
        assert_eq!(doc.page_count, 1);
    }

    #[test]
    fn test_document_serializes() {
        let doc = process_pages(&[]).unwrap();
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back.page_count, doc.page_count);
    }
}

//! The per-document processing pipeline.
//!
//! Stages run in a fixed order: validate and intake the decoded pages,
//! tokenize each page, assemble blocks, merge paragraphs across page
//! boundaries, classify roles, freeze the document. Tokenization is
//! page-local, so pages fan out across threads when enabled; everything
//! else is sequential. The face cache is only written during intake, before
//! any fan-out.

use log::{debug, warn};
use rayon::prelude::*;

use crate::assemble::BlockAssembler;
use crate::error::{Error, Result};
use crate::ligatures;
use crate::model::{
    Character, Document, Element, Figure, FontFaceCache, FontSizeStats, InputElement, PageInput,
    Position, Shape, TextArea,
};
use crate::options::LayoutOptions;
use crate::semantics::{DocumentContext, RoleClassifier};
use crate::tokenize::Tokenizer;

/// Process decoded pages with default options.
pub fn process_pages(pages: &[PageInput]) -> Result<Document> {
    process_pages_with_options(pages, &LayoutOptions::default())
}

/// Process decoded pages into a frozen, role-tagged document.
///
/// A page that fails validation yields an empty result and a warning;
/// the remaining pages still process.
pub fn process_pages_with_options(
    pages: &[PageInput],
    options: &LayoutOptions,
) -> Result<Document> {
    let mut cache = FontFaceCache::new();
    let mut stats = FontSizeStats::new();

    let element_pages: Vec<Vec<Element>> = pages
        .iter()
        .enumerate()
        .map(|(index, page)| {
            if let Err(e) = validate_page(page, index) {
                warn!("skipping page {}: {}", index, e);
                return Vec::new();
            }
            intake_page(page, index, &mut cache, &mut stats)
        })
        .collect();

    let ctx = DocumentContext::from_elements(&element_pages, &stats);

    let tokenizer = Tokenizer::new(options);
    let page_areas: Vec<Vec<TextArea>> = if options.parallel {
        element_pages
            .par_iter()
            .map(|elements| tokenizer.tokenize_page(elements))
            .collect::<Result<_>>()?
    } else {
        element_pages
            .iter()
            .map(|elements| tokenizer.tokenize_page(elements))
            .collect::<Result<_>>()?
    };

    let faces = cache.to_table();
    let assembler = BlockAssembler::new(options, &faces);
    let mut blocks = Vec::new();
    for areas in page_areas {
        blocks.extend(assembler.assemble_page(areas)?);
    }
    let paragraphs = assembler.paragraphs(blocks);

    let mut document = Document {
        page_count: pages.len(),
        faces,
        paragraphs,
    };
    RoleClassifier::new(options).classify_document(&mut document, &ctx);

    debug!(
        "processed {} pages into {} paragraphs",
        document.page_count,
        document.paragraphs.len()
    );
    Ok(document)
}

/// Reject pages carrying non-finite geometry.
fn validate_page(page: &PageInput, index: usize) -> Result<()> {
    for element in &page.elements {
        if !element.rect().is_finite() {
            return Err(Error::Validation(format!(
                "page {}: non-finite rectangle",
                index
            )));
        }
        if let InputElement::Character { font_size, .. } = element {
            if !font_size.is_finite() || *font_size <= 0.0 {
                return Err(Error::Validation(format!(
                    "page {}: non-finite font size",
                    index
                )));
            }
        }
    }
    Ok(())
}

/// Turn decoder elements into internal elements: intern faces, record font
/// sizes, and expand ligature codepoints. Rectangles stay untouched.
fn intake_page(
    page: &PageInput,
    page_index: usize,
    cache: &mut FontFaceCache,
    stats: &mut FontSizeStats,
) -> Vec<Element> {
    page.elements
        .iter()
        .map(|element| match element {
            InputElement::Character {
                rect,
                text,
                font_id,
                font_size,
                color,
            } => {
                let face = cache.intern(font_id, *font_size);
                stats.record(*font_size);
                let text = ligatures::resolve(text).unwrap_or_else(|| text.clone());
                Element::Character(Character {
                    position: Position::new(page_index, *rect),
                    text,
                    face,
                    font_size: *font_size,
                    color: *color,
                })
            }
            InputElement::Shape { rect, color } => Element::Shape(Shape {
                position: Position::new(page_index, *rect),
                color: *color,
            }),
            InputElement::Figure { rect } => Element::Figure(Figure {
                position: Position::new(page_index, *rect),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;

    fn word_elements(x: f32, y: f32, size: f32, font: &str, text: &str) -> Vec<InputElement> {
        text.chars()
            .enumerate()
            .map(|(i, c)| {
                let cx = x + i as f32 * size * 0.5;
                InputElement::character(
                    Rectangle::new(cx, y, cx + size * 0.45, y + size),
                    c.to_string(),
                    font,
                    size,
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_document() {
        let doc = process_pages(&[]).unwrap();
        assert_eq!(doc.page_count, 0);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_empty_page_is_not_an_error() {
        let doc = process_pages(&[PageInput::new()]).unwrap();
        assert_eq!(doc.page_count, 1);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_invalid_page_skipped_others_processed() {
        let bad = PageInput::from_elements(vec![InputElement::character(
            Rectangle::new(0.0, 0.0, f32::NAN, 10.0),
            "x",
            "F1",
            10.0,
        )]);
        let good = PageInput::from_elements(word_elements(0.0, 700.0, 10.0, "F1", "hello"));
        let doc = process_pages(&[bad, good]).unwrap();
        assert_eq!(doc.page_count, 2);
        assert_eq!(doc.plain_text(), "hello");
    }

    #[test]
    fn test_ligature_expanded_rectangle_unchanged() {
        let rect = Rectangle::new(5.5, 0.0, 11.5, 10.0);
        let page = PageInput::from_elements(vec![
            InputElement::character(Rectangle::new(0.0, 0.0, 4.5, 10.0), "a", "F1", 10.0),
            InputElement::character(rect, "\u{FB01}", "F1", 10.0),
            InputElement::character(Rectangle::new(12.0, 0.0, 16.5, 10.0), "x", "F1", 10.0),
        ]);
        let doc = process_pages(&[page]).unwrap();
        assert_eq!(doc.plain_text(), "afix");
        let block = doc.blocks().next().unwrap();
        let ligature = &block.lines[0].words[0].characters[1];
        assert_eq!(ligature.text, "fi");
        assert!(ligature.position.rect.approx_eq(&rect));
    }

    #[test]
    fn test_face_table_frozen_into_document() {
        let mut elements = word_elements(0.0, 700.0, 10.0, "Times-Roman", "body");
        elements.extend(word_elements(0.0, 650.0, 14.0, "Times-Bold", "head"));
        let doc = process_pages(&[PageInput::from_elements(elements)]).unwrap();
        assert_eq!(doc.faces.len(), 2);
        let ids: Vec<&str> = doc.faces.iter().map(|f| f.font_id.as_str()).collect();
        assert!(ids.contains(&"Times-Roman"));
        assert!(ids.contains(&"Times-Bold"));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut pages = Vec::new();
        for _ in 0..4 {
            let mut elements = word_elements(0.0, 700.0, 10.0, "F1", "alpha");
            elements.extend(word_elements(0.0, 660.0, 10.0, "F1", "beta"));
            elements.extend(word_elements(200.0, 700.0, 10.0, "F1", "gamma"));
            pages.push(PageInput::from_elements(elements));
        }
        let parallel = process_pages_with_options(&pages, &LayoutOptions::default()).unwrap();
        let sequential =
            process_pages_with_options(&pages, &LayoutOptions::default().sequential()).unwrap();
        assert_eq!(parallel.plain_text(), sequential.plain_text());
        assert_eq!(parallel.paragraphs.len(), sequential.paragraphs.len());
    }
}

//! Block assembly and cross-page paragraph merging.
//!
//! Consecutive lines of one text area form a block while their dominant
//! faces match, their left edges align, and the whitespace between them
//! stays small. Blocks become paragraphs one-to-one, except where a
//! paragraph runs off the bottom of a page and continues on the next.

use log::debug;

use crate::error::Result;
use crate::model::{FaceId, FontFace, Paragraph, TextArea, TextBlock, TextLine};
use crate::options::LayoutOptions;

/// Trailing characters ignored when looking for sentence-ending punctuation.
const CLOSING_CHARS: [char; 6] = ['"', '\'', '\u{2019}', '\u{201D}', ')', ']'];

/// Sentence-terminating punctuation.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Groups tokenized lines into blocks and merges paragraphs across page
/// boundaries.
pub struct BlockAssembler<'a> {
    options: &'a LayoutOptions,
    faces: &'a [FontFace],
}

impl<'a> BlockAssembler<'a> {
    /// Create an assembler over the given options and face table.
    pub fn new(options: &'a LayoutOptions, faces: &'a [FontFace]) -> Self {
        Self { options, faces }
    }

    /// Group one page's areas into blocks, preserving reading order.
    pub fn assemble_page(&self, areas: Vec<TextArea>) -> Result<Vec<TextBlock>> {
        let mut blocks = Vec::new();
        for area in areas {
            let column = area.column;
            let mut current: Vec<TextLine> = Vec::new();
            for line in area.lines {
                if let Some(prev) = current.last() {
                    if !self.same_block(prev, &line) {
                        blocks.push(TextBlock::from_lines(
                            std::mem::take(&mut current),
                            column,
                        )?);
                    }
                }
                current.push(line);
            }
            if !current.is_empty() {
                blocks.push(TextBlock::from_lines(current, column)?);
            }
        }
        debug!("assembled {} blocks", blocks.len());
        Ok(blocks)
    }

    /// Wrap blocks into paragraphs and merge across page boundaries.
    pub fn paragraphs(&self, blocks: Vec<TextBlock>) -> Vec<Paragraph> {
        let paragraphs = blocks.into_iter().map(Paragraph::from_block).collect();
        self.merge_page_boundaries(paragraphs)
    }

    /// Merge adjacent paragraphs whose text continues across a page
    /// boundary. Running this on an already-merged sequence changes
    /// nothing.
    pub fn merge_page_boundaries(&self, paragraphs: Vec<Paragraph>) -> Vec<Paragraph> {
        let mut merged: Vec<Paragraph> = Vec::new();
        for paragraph in paragraphs {
            let continues = match (merged.last(), paragraph.blocks.first()) {
                (Some(prev), Some(first)) => prev
                    .blocks
                    .last()
                    .map(|last| self.continues(last, first))
                    .unwrap_or(false),
                _ => false,
            };
            if continues {
                if let Some(prev) = merged.last_mut() {
                    prev.append(paragraph);
                    continue;
                }
            }
            merged.push(paragraph);
        }
        merged
    }

    /// Whether two consecutive lines belong to the same block.
    fn same_block(&self, prev: &TextLine, line: &TextLine) -> bool {
        if !self.faces_match(prev.face, line.face) {
            return false;
        }
        let indent_limit = self.options.indent_tolerance * line.font_size;
        if (prev.rect.min_x() - line.rect.min_x()).abs() > indent_limit {
            return false;
        }
        let gap = prev.rect.min_y() - line.rect.max_y();
        gap <= self.options.line_gap_multiplier * prev.rect.height()
    }

    /// Whether `next` (first block of a page) continues `prev` (last block
    /// of the previous page).
    fn continues(&self, prev: &TextBlock, next: &TextBlock) -> bool {
        if next.page != prev.page + 1 {
            return false;
        }
        if !self.faces_match(prev.face, next.face) {
            return false;
        }
        if ends_sentence(&prev.text()) {
            return false;
        }
        // A heading-style first-line indent marks an independent block.
        let indent_limit = self.options.indent_tolerance * next.font_size;
        match next.lines.first() {
            Some(first) => (first.rect.min_x() - next.rect.min_x()).abs() <= indent_limit,
            None => false,
        }
    }

    /// Same font identity, size within the configured tolerance.
    fn faces_match(&self, a: FaceId, b: FaceId) -> bool {
        if a == b {
            return true;
        }
        match (self.faces.get(a.0 as usize), self.faces.get(b.0 as usize)) {
            (Some(fa), Some(fb)) => {
                fa.font_id == fb.font_id
                    && (fa.size - fb.size).abs()
                        <= self.options.block_font_tolerance_ratio * fa.size.max(fb.size)
            }
            _ => false,
        }
    }
}

/// Whether the text ends a sentence, ignoring trailing closing quotes and
/// brackets.
fn ends_sentence(text: &str) -> bool {
    text.trim_end()
        .trim_end_matches(|c| CLOSING_CHARS.contains(&c))
        .chars()
        .last()
        .map(|c| TERMINATORS.contains(&c))
        .unwrap_or(false)
}

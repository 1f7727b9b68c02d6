//! Recursive page segmentation.
//!
//! One page's characters are segmented into TextAreas, TextLines, and Words
//! by recursive cuts at whitespace gaps. Area-level cuts alternate between
//! the X and Y axes so both columns and row bands separate; line cuts always
//! run along Y inside an area, word cuts along X inside a line. Shapes and
//! figures take part in the area-level occupancy profile but never become
//! members of a line or word.

mod xycut;

use std::collections::HashMap;

use log::debug;

use crate::error::{Error, Result};
use crate::geometry::{Axis, Rectangle};
use crate::model::{Character, Element, TextArea, TextLine, Word};
use crate::options::LayoutOptions;

/// Two areas whose X projections overlap by at least this fraction of the
/// narrower one belong to the same column.
pub const COLUMN_OVERLAP_RATIO: f32 = 0.5;

/// Page tokenizer. Stateless across pages: one instance may tokenize many
/// pages, and distinct pages never observe each other's geometry.
pub struct Tokenizer<'a> {
    options: &'a LayoutOptions,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over the given options.
    pub fn new(options: &'a LayoutOptions) -> Self {
        Self { options }
    }

    /// Segment one page's elements into text areas in reading order.
    ///
    /// A page with zero characters yields zero areas.
    pub fn tokenize_page(&self, elements: &[Element]) -> Result<Vec<TextArea>> {
        if !elements.iter().any(|e| !e.is_obstacle()) {
            return Ok(Vec::new());
        }

        let rects: Vec<Rectangle> = elements.iter().map(|e| *e.rect()).collect();
        let items: Vec<usize> = (0..elements.len()).collect();

        let mut regions: Vec<Vec<usize>> = Vec::new();
        self.cut_area(&items, elements, &rects, Axis::X, &mut regions);

        let mut candidates: Vec<Vec<TextLine>> = Vec::new();
        for region in regions {
            let chars: Vec<usize> = region
                .into_iter()
                .filter(|&i| !elements[i].is_obstacle())
                .collect();
            if chars.is_empty() {
                continue;
            }
            candidates.push(self.cut_lines(&chars, elements, &rects)?);
        }

        let areas = assign_columns(candidates)?;
        debug!(
            "tokenized page: {} areas, {} lines",
            areas.len(),
            areas.iter().map(|a| a.lines.len()).sum::<usize>()
        );
        Ok(areas)
    }

    /// Area-level recursion. The preferred axis alternates per level; when
    /// it shows no qualifying gap the other axis is probed, so a full-width
    /// figure band still separates the text above and below it.
    fn cut_area(
        &self,
        items: &[usize],
        elements: &[Element],
        rects: &[Rectangle],
        axis: Axis,
        out: &mut Vec<Vec<usize>>,
    ) {
        if items.len() <= 1 {
            out.push(items.to_vec());
            return;
        }
        let Some(font_size) = dominant_font_size(items, elements) else {
            out.push(items.to_vec());
            return;
        };
        let min_gap = self.options.min_gap.area * font_size;

        let found = xycut::find_gap(items, rects, axis, min_gap)
            .map(|gap| (axis, gap))
            .or_else(|| {
                xycut::find_gap(items, rects, axis.flipped(), min_gap)
                    .map(|gap| (axis.flipped(), gap))
            });

        match found {
            Some((cut_axis, gap)) => {
                let (first, second) = xycut::split(items, rects, cut_axis, gap.midpoint());
                self.cut_area(&first, elements, rects, cut_axis.flipped(), out);
                self.cut_area(&second, elements, rects, cut_axis.flipped(), out);
            }
            None => out.push(items.to_vec()),
        }
    }

    /// Fixed-axis recursion for the line and word granularities.
    fn cut_fixed(
        &self,
        items: &[usize],
        elements: &[Element],
        rects: &[Rectangle],
        axis: Axis,
        gap_factor: f32,
        out: &mut Vec<Vec<usize>>,
    ) {
        if items.len() <= 1 {
            out.push(items.to_vec());
            return;
        }
        let Some(font_size) = dominant_font_size(items, elements) else {
            out.push(items.to_vec());
            return;
        };
        match xycut::find_gap(items, rects, axis, gap_factor * font_size) {
            Some(gap) => {
                let (first, second) = xycut::split(items, rects, axis, gap.midpoint());
                self.cut_fixed(&first, elements, rects, axis, gap_factor, out);
                self.cut_fixed(&second, elements, rects, axis, gap_factor, out);
            }
            None => out.push(items.to_vec()),
        }
    }

    /// Cut one area's characters into lines, and each line into words.
    fn cut_lines(
        &self,
        chars: &[usize],
        elements: &[Element],
        rects: &[Rectangle],
    ) -> Result<Vec<TextLine>> {
        let mut row_leaves: Vec<Vec<usize>> = Vec::new();
        self.cut_fixed(
            chars,
            elements,
            rects,
            Axis::Y,
            self.options.min_gap.line,
            &mut row_leaves,
        );

        let mut lines = Vec::with_capacity(row_leaves.len());
        for row in row_leaves {
            let mut word_leaves: Vec<Vec<usize>> = Vec::new();
            self.cut_fixed(
                &row,
                elements,
                rects,
                Axis::X,
                self.options.min_gap.word,
                &mut word_leaves,
            );
            let mut words = Vec::with_capacity(word_leaves.len());
            for leaf in word_leaves {
                let members: Vec<Character> = leaf
                    .iter()
                    .filter_map(|&i| elements[i].as_character().cloned())
                    .collect();
                words.push(Word::from_characters(members)?);
            }
            lines.push(TextLine::from_words(words)?);
        }
        Ok(lines)
    }
}

/// Modal 0.1pt-bucketed font size of the characters in a region. Ties break
/// to the smaller size. `None` when the region holds no characters.
fn dominant_font_size(items: &[usize], elements: &[Element]) -> Option<f32> {
    let mut histogram: HashMap<i32, usize> = HashMap::new();
    for &i in items {
        if let Some(c) = elements[i].as_character() {
            *histogram.entry((c.font_size * 10.0).round() as i32).or_insert(0) += 1;
        }
    }
    histogram
        .into_iter()
        .max_by_key(|(bucket, count)| (*count, -*bucket))
        .map(|(bucket, _)| bucket as f32 / 10.0)
}

/// Group leaf regions into columns by horizontal overlap, then order them
/// into column-major reading order and assign column indices.
fn assign_columns(candidates: Vec<Vec<TextLine>>) -> Result<Vec<TextArea>> {
    let mut rects: Vec<Rectangle> = Vec::with_capacity(candidates.len());
    for lines in &candidates {
        rects.push(Rectangle::union(lines.iter().map(|l| &l.rect))?);
    }

    // Column groups, each the running union of its members' rectangles.
    let mut groups: Vec<(Rectangle, Vec<usize>)> = Vec::new();
    for (i, rect) in rects.iter().enumerate() {
        let found = groups
            .iter()
            .position(|(group_rect, _)| {
                group_rect.horizontal_overlap_ratio(rect) >= COLUMN_OVERLAP_RATIO
            });
        match found {
            Some(g) => {
                let (group_rect, members) = &mut groups[g];
                group_rect.expand(rect);
                members.push(i);
            }
            None => groups.push((*rect, vec![i])),
        }
    }

    groups.sort_by(|a, b| {
        a.0.min_x()
            .partial_cmp(&b.0.min_x())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut slots: Vec<Option<Vec<TextLine>>> = candidates.into_iter().map(Some).collect();
    let mut areas = Vec::with_capacity(slots.len());
    for (column, (_, mut members)) in groups.into_iter().enumerate() {
        members.sort_by(|&a, &b| {
            rects[b]
                .max_y()
                .partial_cmp(&rects[a].max_y())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for i in members {
            let lines = slots[i]
                .take()
                .ok_or_else(|| Error::Invariant("column groups overlap".to_string()))?;
            areas.push(TextArea::from_lines(lines, column)?);
        }
    }
    Ok(areas)
}

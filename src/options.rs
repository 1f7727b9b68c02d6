//! Analysis options and calibratable constants.
//!
//! The numeric thresholds here are empirically tuned. They are exposed as
//! named configuration rather than embedded literals so callers can
//! recalibrate for unusual document classes.

use std::collections::HashMap;

use crate::model::SemanticRole;

/// Default minimum gap for area cuts, as a fraction of the local font size.
pub const DEFAULT_AREA_GAP_FACTOR: f32 = 1.0;

/// Default minimum gap for line cuts, as a fraction of the local font size.
pub const DEFAULT_LINE_GAP_FACTOR: f32 = 0.3;

/// Default minimum gap for word cuts, as a fraction of the local font size.
pub const DEFAULT_WORD_GAP_FACTOR: f32 = 0.25;

/// Default relative font-size tolerance when comparing block faces.
pub const DEFAULT_BLOCK_FONT_TOLERANCE_RATIO: f32 = 0.05;

/// Default maximum inter-line whitespace within a block, as a multiple of
/// line height.
pub const DEFAULT_LINE_GAP_MULTIPLIER: f32 = 0.75;

/// Default indentation tolerance, in multiples of the font size.
pub const DEFAULT_INDENT_TOLERANCE: f32 = 2.0;

/// Default size delta (points above body size) for generic headings.
pub const DEFAULT_HEADING_SIZE_DELTA: f32 = 1.5;

/// Default size delta (points above body size) for the title.
pub const DEFAULT_TITLE_SIZE_DELTA: f32 = 3.0;

/// Default fraction of the page height counted as "near the top".
pub const DEFAULT_PAGE_TOP_FRACTION: f32 = 0.3;

/// Minimum whitespace gaps for the three cut granularities, each a fraction
/// of the region's dominant font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapThresholds {
    /// Area-level cuts (column and region separation)
    pub area: f32,
    /// Line-level cuts (row separation within an area)
    pub line: f32,
    /// Word-level cuts (word separation within a line)
    pub word: f32,
}

impl Default for GapThresholds {
    fn default() -> Self {
        Self {
            area: DEFAULT_AREA_GAP_FACTOR,
            line: DEFAULT_LINE_GAP_FACTOR,
            word: DEFAULT_WORD_GAP_FACTOR,
        }
    }
}

/// Options for layout tokenization and role classification.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Minimum gap thresholds for the tokenizer
    pub min_gap: GapThresholds,

    /// Relative font-size tolerance when comparing faces across lines
    pub block_font_tolerance_ratio: f32,

    /// Maximum inter-line whitespace within a block, as a multiple of line
    /// height
    pub line_gap_multiplier: f32,

    /// Indentation tolerance in multiples of the font size
    pub indent_tolerance: f32,

    /// Size delta above body size for generic heading detection, in points
    pub heading_size_delta: f32,

    /// Size delta above body size for title detection, in points
    pub title_size_delta: f32,

    /// Fraction of the page height counted as "near the top" for title and
    /// abstract placement
    pub page_top_fraction: f32,

    /// Per-role heading keyword vocabulary, matched case-insensitively
    pub heading_keywords: HashMap<SemanticRole, Vec<String>>,

    /// Whether to tokenize pages in parallel
    pub parallel: bool,
}

impl LayoutOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum gap thresholds.
    pub fn with_min_gap(mut self, min_gap: GapThresholds) -> Self {
        self.min_gap = min_gap;
        self
    }

    /// Set the block font tolerance ratio.
    pub fn with_block_font_tolerance(mut self, ratio: f32) -> Self {
        self.block_font_tolerance_ratio = ratio;
        self
    }

    /// Set the line gap multiplier.
    pub fn with_line_gap_multiplier(mut self, multiplier: f32) -> Self {
        self.line_gap_multiplier = multiplier;
        self
    }

    /// Set the indentation tolerance.
    pub fn with_indent_tolerance(mut self, tolerance: f32) -> Self {
        self.indent_tolerance = tolerance;
        self
    }

    /// Replace the keyword vocabulary for one role.
    pub fn with_heading_keywords(
        mut self,
        role: SemanticRole,
        keywords: Vec<String>,
    ) -> Self {
        self.heading_keywords.insert(role, keywords);
        self
    }

    /// Enable or disable parallel page tokenization.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel page tokenization.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Keywords configured for a role.
    pub fn keywords(&self, role: SemanticRole) -> &[String] {
        self.heading_keywords
            .get(&role)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        let mut heading_keywords = HashMap::new();
        heading_keywords.insert(
            SemanticRole::Abstract,
            vec!["abstract".to_string()],
        );
        heading_keywords.insert(
            SemanticRole::AcknowledgmentsHeading,
            vec![
                "acknowledgments".to_string(),
                "acknowledgements".to_string(),
                "acknowledgment".to_string(),
                "acknowledgement".to_string(),
            ],
        );
        heading_keywords.insert(
            SemanticRole::AppendixHeading,
            vec!["appendix".to_string(), "appendices".to_string()],
        );
        heading_keywords.insert(
            SemanticRole::ReferencesHeading,
            vec![
                "references".to_string(),
                "bibliography".to_string(),
                "reference".to_string(),
            ],
        );

        Self {
            min_gap: GapThresholds::default(),
            block_font_tolerance_ratio: DEFAULT_BLOCK_FONT_TOLERANCE_RATIO,
            line_gap_multiplier: DEFAULT_LINE_GAP_MULTIPLIER,
            indent_tolerance: DEFAULT_INDENT_TOLERANCE,
            heading_size_delta: DEFAULT_HEADING_SIZE_DELTA,
            title_size_delta: DEFAULT_TITLE_SIZE_DELTA,
            page_top_fraction: DEFAULT_PAGE_TOP_FRACTION,
            heading_keywords,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = LayoutOptions::new()
            .with_line_gap_multiplier(1.2)
            .with_indent_tolerance(1.0)
            .sequential();

        assert_eq!(options.line_gap_multiplier, 1.2);
        assert_eq!(options.indent_tolerance, 1.0);
        assert!(!options.parallel);
    }

    #[test]
    fn test_default_keywords() {
        let options = LayoutOptions::default();
        assert!(options
            .keywords(SemanticRole::ReferencesHeading)
            .contains(&"bibliography".to_string()));
        assert!(options.keywords(SemanticRole::BodyText).is_empty());
    }

    #[test]
    fn test_keyword_override() {
        let options = LayoutOptions::new().with_heading_keywords(
            SemanticRole::ReferencesHeading,
            vec!["literatur".to_string()],
        );
        assert_eq!(
            options.keywords(SemanticRole::ReferencesHeading),
            ["literatur".to_string()]
        );
    }
}

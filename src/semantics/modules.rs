//! The individual role modules of the classification pipeline.

use regex::Regex;

use crate::geometry::COORD_TOLERANCE;
use crate::model::{SemanticRole, TextBlock};
use crate::semantics::{AmbientHeading, DocumentContext, RoleModule};

/// Compile a whole-block matcher for a heading vocabulary: optional section
/// numbering, one of the keywords, optional trailing colon or period.
/// Matching is case-insensitive. Returns `None` for an empty vocabulary.
pub(crate) fn keyword_pattern(keywords: &[String]) -> Option<Regex> {
    if keywords.is_empty() {
        return None;
    }
    let alternatives = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        r"(?i)^\s*(?:\d+(?:\.\d+)*\.?\s+)?(?:{})\s*[:.]?\s*$",
        alternatives
    );
    // The alternatives are escaped, so the pattern always compiles.
    Regex::new(&pattern).ok()
}

/// Title: the largest text near the top of the first page.
pub struct TitleModule {
    size_delta: f32,
    top_fraction: f32,
}

impl TitleModule {
    /// Create the module with the configured size delta and top fraction.
    pub fn new(size_delta: f32, top_fraction: f32) -> Self {
        Self {
            size_delta,
            top_fraction,
        }
    }
}

impl RoleModule for TitleModule {
    fn role(&self) -> SemanticRole {
        SemanticRole::Title
    }

    fn test(
        &self,
        block: &TextBlock,
        ctx: &DocumentContext,
        _ambient: Option<&AmbientHeading>,
    ) -> bool {
        block.page == 0
            && ctx.near_page_top(block, self.top_fraction)
            && ctx.outranks_body(block.font_size, self.size_delta)
            && block.font_size >= ctx.max_font_page_one - COORD_TOLERANCE
    }
}

/// Abstract: the "abstract" heading near the top of the first page, plus
/// the first-page body it governs.
pub struct AbstractModule {
    matcher: Option<Regex>,
    top_fraction: f32,
    size_delta: f32,
}

impl AbstractModule {
    /// Create the module with a precompiled keyword matcher.
    pub fn new(matcher: Option<Regex>, top_fraction: f32, size_delta: f32) -> Self {
        Self {
            matcher,
            top_fraction,
            size_delta,
        }
    }
}

impl RoleModule for AbstractModule {
    fn role(&self) -> SemanticRole {
        SemanticRole::Abstract
    }

    fn test(
        &self,
        block: &TextBlock,
        ctx: &DocumentContext,
        ambient: Option<&AmbientHeading>,
    ) -> bool {
        if block.page != 0 {
            return false;
        }
        let keyword_match = self
            .matcher
            .as_ref()
            .map(|m| m.is_match(&block.text()))
            .unwrap_or(false);
        if keyword_match && ctx.near_page_top(block, self.top_fraction) {
            return true;
        }
        // Inherited abstract body: body-sized text under an open abstract
        // context. Heading-sized blocks fall through to later modules.
        ambient
            .map(|a| a.inherited == SemanticRole::Abstract)
            .unwrap_or(false)
            && !ctx.outranks_body(block.font_size, self.size_delta)
    }
}

/// A keyword section heading (acknowledgments, appendix, references).
pub struct SectionHeadingModule {
    role: SemanticRole,
    matcher: Option<Regex>,
}

impl SectionHeadingModule {
    /// Create the module for one role and its vocabulary.
    pub fn new(role: SemanticRole, keywords: &[String]) -> Self {
        Self {
            role,
            matcher: keyword_pattern(keywords),
        }
    }
}

impl RoleModule for SectionHeadingModule {
    fn role(&self) -> SemanticRole {
        self.role
    }

    fn test(
        &self,
        block: &TextBlock,
        _ctx: &DocumentContext,
        _ambient: Option<&AmbientHeading>,
    ) -> bool {
        self.matcher
            .as_ref()
            .map(|m| m.is_match(&block.text()))
            .unwrap_or(false)
    }
}

/// A generic body-text heading, detected by font-size rank, or body text
/// governed by an active special section context.
pub struct BodyTextHeadingModule {
    size_delta: f32,
}

impl BodyTextHeadingModule {
    /// Create the module with the configured size delta.
    pub fn new(size_delta: f32) -> Self {
        Self { size_delta }
    }
}

impl RoleModule for BodyTextHeadingModule {
    fn role(&self) -> SemanticRole {
        SemanticRole::BodyTextHeading
    }

    fn test(
        &self,
        block: &TextBlock,
        ctx: &DocumentContext,
        ambient: Option<&AmbientHeading>,
    ) -> bool {
        if ctx.outranks_body(block.font_size, self.size_delta) {
            return true;
        }
        ambient
            .map(|a| a.inherited == SemanticRole::BodyTextHeading)
            .unwrap_or(false)
    }
}

/// Regular body text: font size close to the document's body size.
pub struct BodyTextModule {
    size_delta: f32,
}

impl BodyTextModule {
    /// Create the module with the configured size delta.
    pub fn new(size_delta: f32) -> Self {
        Self { size_delta }
    }
}

impl RoleModule for BodyTextModule {
    fn role(&self) -> SemanticRole {
        SemanticRole::BodyText
    }

    fn test(
        &self,
        block: &TextBlock,
        ctx: &DocumentContext,
        _ambient: Option<&AmbientHeading>,
    ) -> bool {
        (block.font_size - ctx.body_font_size).abs() < self.size_delta
    }
}

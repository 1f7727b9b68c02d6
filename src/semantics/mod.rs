//! Semantic role classification.
//!
//! Blocks run through a fixed-priority pipeline of role modules; the first
//! module whose test matches assigns its role, and a block no module claims
//! stays [`SemanticRole::Other`]. A matched section heading establishes an
//! ambient context that later body blocks inherit until another heading of
//! equal or higher rank supersedes it. The context is a value carried
//! through one left-to-right pass, never module state, so classification is
//! deterministic for a fixed block sequence.

mod modules;

use log::debug;

use crate::geometry::Rectangle;
use crate::model::{Document, Element, FontSizeStats, SemanticRole, TextBlock};
use crate::options::LayoutOptions;

pub use modules::{
    AbstractModule, BodyTextHeadingModule, BodyTextModule, SectionHeadingModule, TitleModule,
};

/// Document-wide signals available to every role test. Computed once per
/// document; classification never mutates it.
#[derive(Debug, Clone)]
pub struct DocumentContext {
    /// The document's most frequent character font size
    pub body_font_size: f32,

    /// Number of input pages
    pub page_count: usize,

    /// Union of element rectangles per page; `None` for empty pages
    pub page_bounds: Vec<Option<Rectangle>>,

    /// Largest character font size on the first page
    pub max_font_page_one: f32,
}

impl DocumentContext {
    /// Compute the context from the intake element pages and the document
    /// font statistics.
    pub fn from_elements(pages: &[Vec<Element>], stats: &FontSizeStats) -> Self {
        let page_bounds = pages
            .iter()
            .map(|elements| {
                Rectangle::union(elements.iter().map(|e| e.rect())).ok()
            })
            .collect();
        let max_font_page_one = pages
            .first()
            .map(|elements| {
                elements
                    .iter()
                    .filter_map(|e| e.as_character())
                    .map(|c| c.font_size)
                    .fold(0.0f32, f32::max)
            })
            .unwrap_or(0.0);
        Self {
            body_font_size: stats.body_size(),
            page_count: pages.len(),
            page_bounds,
            max_font_page_one,
        }
    }

    /// Whether a block sits within the top `fraction` of its page.
    pub fn near_page_top(&self, block: &TextBlock, fraction: f32) -> bool {
        match self.page_bounds.get(block.page).copied().flatten() {
            Some(bounds) => block.rect.max_y() >= bounds.max_y() - fraction * bounds.height(),
            None => false,
        }
    }

    /// Whether a font size ranks distinctly above the body size.
    pub fn outranks_body(&self, font_size: f32, delta: f32) -> bool {
        font_size >= self.body_font_size + delta
    }
}

/// Ambient heading context carried across the block sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbientHeading {
    /// The heading that established the context
    pub heading: SemanticRole,

    /// The role body blocks inherit while the context is active
    pub inherited: SemanticRole,
}

/// One entry of the classification pipeline.
///
/// Modules are pure: a test may read the block, the document context, and
/// the ambient value, nothing else.
pub trait RoleModule {
    /// The role this module assigns.
    fn role(&self) -> SemanticRole;

    /// Whether the block carries this module's role.
    fn test(
        &self,
        block: &TextBlock,
        ctx: &DocumentContext,
        ambient: Option<&AmbientHeading>,
    ) -> bool;
}

/// The fixed-priority classification pipeline.
pub struct RoleClassifier {
    modules: Vec<Box<dyn RoleModule>>,
    abstract_matcher: Option<regex::Regex>,
    heading_size_delta: f32,
}

impl RoleClassifier {
    /// Build the pipeline from the configured vocabulary and thresholds.
    pub fn new(options: &LayoutOptions) -> Self {
        let abstract_matcher =
            modules::keyword_pattern(options.keywords(SemanticRole::Abstract));
        let modules: Vec<Box<dyn RoleModule>> = vec![
            Box::new(TitleModule::new(
                options.title_size_delta,
                options.page_top_fraction,
            )),
            Box::new(AbstractModule::new(
                abstract_matcher.clone(),
                options.page_top_fraction,
                options.heading_size_delta,
            )),
            Box::new(SectionHeadingModule::new(
                SemanticRole::AcknowledgmentsHeading,
                options.keywords(SemanticRole::AcknowledgmentsHeading),
            )),
            Box::new(SectionHeadingModule::new(
                SemanticRole::AppendixHeading,
                options.keywords(SemanticRole::AppendixHeading),
            )),
            Box::new(SectionHeadingModule::new(
                SemanticRole::ReferencesHeading,
                options.keywords(SemanticRole::ReferencesHeading),
            )),
            Box::new(BodyTextHeadingModule::new(options.heading_size_delta)),
            Box::new(BodyTextModule::new(options.heading_size_delta)),
        ];
        Self {
            modules,
            abstract_matcher,
            heading_size_delta: options.heading_size_delta,
        }
    }

    /// Assign a role to every block of the document, in reading order.
    pub fn classify_document(&self, document: &mut Document, ctx: &DocumentContext) {
        let mut ambient: Option<AmbientHeading> = None;
        let mut assigned = 0usize;
        for paragraph in &mut document.paragraphs {
            for block in &mut paragraph.blocks {
                let role = self.classify_block(block, ctx, ambient.as_ref());
                block.role = role;
                ambient = self.next_ambient(block, role, ctx, ambient);
                assigned += 1;
            }
        }
        debug!("classified {} blocks", assigned);
    }

    /// Run the pipeline for one block. The first matching module wins.
    pub fn classify_block(
        &self,
        block: &TextBlock,
        ctx: &DocumentContext,
        ambient: Option<&AmbientHeading>,
    ) -> SemanticRole {
        self.modules
            .iter()
            .find(|module| module.test(block, ctx, ambient))
            .map(|module| module.role())
            .unwrap_or(SemanticRole::Other)
    }

    /// Advance the ambient context past a classified block.
    fn next_ambient(
        &self,
        block: &TextBlock,
        role: SemanticRole,
        ctx: &DocumentContext,
        ambient: Option<AmbientHeading>,
    ) -> Option<AmbientHeading> {
        let established = match role {
            SemanticRole::Title => Some(None),
            SemanticRole::AcknowledgmentsHeading
            | SemanticRole::AppendixHeading
            | SemanticRole::ReferencesHeading => Some(Some(AmbientHeading {
                heading: role,
                inherited: SemanticRole::BodyTextHeading,
            })),
            // The abstract heading block opens an abstract context; the
            // inherited body keeps the context as it found it.
            SemanticRole::Abstract if self.matches_abstract_keyword(block) => {
                Some(Some(AmbientHeading {
                    heading: SemanticRole::Abstract,
                    inherited: SemanticRole::Abstract,
                }))
            }
            // A generic heading closes any open section context.
            SemanticRole::BodyTextHeading
                if ctx.outranks_body(block.font_size, self.heading_size_delta) =>
            {
                Some(None)
            }
            _ => None,
        };

        match established {
            Some(next) => {
                let current_rank = ambient.map(|a| a.heading.rank()).unwrap_or(0);
                if role.rank() >= current_rank {
                    next
                } else {
                    ambient
                }
            }
            None => ambient,
        }
    }

    fn matches_abstract_keyword(&self, block: &TextBlock) -> bool {
        self.abstract_matcher
            .as_ref()
            .map(|m| m.is_match(&block.text()))
            .unwrap_or(false)
    }
}

//! Semantic roles.

use serde::{Deserialize, Serialize};

/// The logical function of a text block, independent of its visual
/// appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticRole {
    /// The document title
    Title,
    /// The abstract heading and its body
    Abstract,
    /// An acknowledgments section heading
    AcknowledgmentsHeading,
    /// An appendix section heading
    AppendixHeading,
    /// A references or bibliography section heading
    ReferencesHeading,
    /// A generic body-text heading, or body text governed by a special
    /// section heading
    BodyTextHeading,
    /// Regular body text
    BodyText,
    /// Anything no classifier matched
    Other,
}

impl SemanticRole {
    /// Whether this role marks a heading block.
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            SemanticRole::Title
                | SemanticRole::AcknowledgmentsHeading
                | SemanticRole::AppendixHeading
                | SemanticRole::ReferencesHeading
                | SemanticRole::BodyTextHeading
        )
    }

    /// Supersession rank: a heading only displaces an ambient section
    /// context when its rank is equal or higher.
    pub fn rank(&self) -> u8 {
        match self {
            SemanticRole::Title => 3,
            SemanticRole::Abstract
            | SemanticRole::AcknowledgmentsHeading
            | SemanticRole::AppendixHeading
            | SemanticRole::ReferencesHeading
            | SemanticRole::BodyTextHeading => 2,
            SemanticRole::BodyText | SemanticRole::Other => 0,
        }
    }
}

impl Default for SemanticRole {
    fn default() -> Self {
        SemanticRole::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_roles() {
        assert!(SemanticRole::Title.is_heading());
        assert!(SemanticRole::ReferencesHeading.is_heading());
        assert!(!SemanticRole::BodyText.is_heading());
        assert!(!SemanticRole::Abstract.is_heading());
    }

    #[test]
    fn test_ranks() {
        assert!(SemanticRole::Title.rank() > SemanticRole::ReferencesHeading.rank());
        assert_eq!(
            SemanticRole::ReferencesHeading.rank(),
            SemanticRole::BodyTextHeading.rank()
        );
        assert_eq!(SemanticRole::Other.rank(), 0);
    }

    #[test]
    fn test_default_role() {
        assert_eq!(SemanticRole::default(), SemanticRole::Other);
    }
}

//! Font faces and font-size statistics.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Handle to a [`FontFace`] interned in a [`FontFaceCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FaceId(pub u32);

/// The pairing of a font identity and a rendered size, the unit of
/// typographic comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontFace {
    /// Font identity as reported by the decoder (e.g. "Helvetica-Bold")
    pub font_id: String,

    /// Rendered size in points
    pub size: f32,
}

impl FontFace {
    /// Whether the font name suggests a bold face.
    pub fn is_bold(&self) -> bool {
        let lower = self.font_id.to_lowercase();
        lower.contains("bold") || lower.contains("black") || lower.contains("heavy")
    }

    /// Whether the font name suggests an italic face.
    pub fn is_italic(&self) -> bool {
        let lower = self.font_id.to_lowercase();
        lower.contains("italic") || lower.contains("oblique")
    }
}

/// Bucket a font size to 0.1pt precision.
fn size_bucket(size: f32) -> i32 {
    (size * 10.0).round() as i32
}

/// Memoizes (font identity, size) pairs per document, handing out stable
/// integer handles. One face exists per (font id, 0.1pt size bucket) for the
/// document's lifetime. Owned by the processing context; all interning
/// happens before pages fan out, so tokenization only ever reads it.
#[derive(Debug, Default)]
pub struct FontFaceCache {
    faces: Vec<FontFace>,
    index: HashMap<(String, i32), FaceId>,
}

impl FontFaceCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up or create the face for a (font id, size) pair.
    pub fn intern(&mut self, font_id: &str, size: f32) -> FaceId {
        let key = (font_id.to_string(), size_bucket(size));
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = FaceId(self.faces.len() as u32);
        self.faces.push(FontFace {
            font_id: font_id.to_string(),
            size,
        });
        self.index.insert(key, id);
        id
    }

    /// Get a face by handle.
    pub fn get(&self, id: FaceId) -> Option<&FontFace> {
        self.faces.get(id.0 as usize)
    }

    /// Number of distinct faces seen so far.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Check whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// The interned faces, indexable by `FaceId`.
    pub fn faces(&self) -> &[FontFace] {
        &self.faces
    }

    /// Clone the face table out of the cache, e.g. to freeze it into a
    /// finished document.
    pub fn to_table(&self) -> Vec<FontFace> {
        self.faces.clone()
    }
}

/// Document-wide font size histogram.
///
/// The most frequent size is taken as the body text size; role classification
/// ranks block sizes against it.
#[derive(Debug, Clone, Default)]
pub struct FontSizeStats {
    histogram: HashMap<i32, usize>,
}

impl FontSizeStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one character's font size.
    pub fn record(&mut self, size: f32) {
        *self.histogram.entry(size_bucket(size)).or_insert(0) += 1;
    }

    /// Total number of recorded observations.
    pub fn observations(&self) -> usize {
        self.histogram.values().sum()
    }

    /// The most frequent font size. Ties break to the smaller size so the
    /// result is deterministic. Returns 12.0 when nothing was recorded.
    pub fn body_size(&self) -> f32 {
        self.histogram
            .iter()
            .max_by_key(|(bucket, count)| (**count, -**bucket))
            .map(|(bucket, _)| *bucket as f32 / 10.0)
            .unwrap_or(12.0)
    }
}

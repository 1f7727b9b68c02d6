//! Ligature expansion.
//!
//! PDF fonts frequently emit a single glyph for letter pairs such as "fi" or
//! "ae". Downstream tokenization and keyword matching work on plain character
//! sequences, so ligature codepoints are rewritten to their constituent
//! letters before word assembly. The glyph's bounding rectangle is left
//! untouched; only the text changes.

use unicode_normalization::UnicodeNormalization;

/// Expansion for a single ligature codepoint, or `None` when the character
/// is not a known ligature.
pub fn expand(c: char) -> Option<&'static str> {
    let expanded = match c {
        '\u{00C6}' => "AE",
        '\u{00E6}' => "ae",
        '\u{0152}' => "OE",
        '\u{0153}' => "oe",
        '\u{0132}' => "IJ",
        '\u{0133}' => "ij",
        '\u{1D6B}' => "ue",
        '\u{A728}' => "TZ",
        '\u{A729}' => "tz",
        '\u{A732}' => "AA",
        '\u{A733}' => "aa",
        '\u{A734}' => "AO",
        '\u{A735}' => "ao",
        '\u{A736}' => "AU",
        '\u{A737}' => "au",
        '\u{A738}' => "AV",
        '\u{A739}' => "av",
        '\u{A73C}' => "AY",
        '\u{A73D}' => "ay",
        '\u{A74E}' => "OO",
        '\u{A74F}' => "oo",
        '\u{AB50}' => "ui",
        '\u{FB00}' => "ff",
        '\u{FB01}' => "fi",
        '\u{FB02}' => "fl",
        '\u{FB03}' => "ffi",
        '\u{FB04}' => "ffl",
        '\u{FB06}' => "st",
        _ => return None,
    };
    Some(expanded)
}

/// Rewrite the textual content of a glyph when it is a single ligature
/// codepoint. Returns `None` when the text is left unchanged.
///
/// Codepoints in the Alphabetic Presentation Forms block that are missing
/// from the fixed table fall back to their compatibility decomposition.
pub fn resolve(text: &str) -> Option<String> {
    let mut chars = text.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        // Multi-character glyph texts arrive pre-expanded from the decoder.
        return None;
    }

    if let Some(expanded) = expand(c) {
        return Some(expanded.to_string());
    }

    if ('\u{FB00}'..='\u{FB4F}').contains(&c) {
        let decomposed: String = c.nfkc().collect();
        if decomposed.chars().count() > 1 {
            return Some(decomposed);
        }
    }

    None
}

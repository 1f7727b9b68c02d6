//! Integration tests for semantic role assignment.

use pagecut::{
    process_pages, Granularity, InputElement, PageInput, Rectangle, SemanticRole, UnitFilter,
};

fn word(x: f32, y: f32, size: f32, font: &str, text: &str) -> Vec<InputElement> {
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let cx = x + i as f32 * size * 0.5;
            InputElement::character(
                Rectangle::new(cx, y, cx + size * 0.45, y + size * 0.7),
                c.to_string(),
                font,
                size,
            )
        })
        .collect()
}

fn line(x: f32, y: f32, size: f32, font: &str, words: &[&str]) -> Vec<InputElement> {
    let mut elements = Vec::new();
    let mut cursor = x;
    for w in words {
        elements.extend(word(cursor, y, size, font, w));
        cursor += w.chars().count() as f32 * size * 0.5 + size * 0.3;
    }
    elements
}

/// A small two-page article: title and abstract on page one, references and
/// an appendix on page two.
fn article() -> Vec<PageInput> {
    let mut first = Vec::new();
    first.extend(line(50.0, 765.0, 18.0, "Nimbus-Bold", &["A", "Study", "of", "Gap", "Detection"]));
    first.extend(line(50.0, 700.0, 10.0, "Nimbus", &["Abstract"]));
    first.extend(line(50.0, 676.0, 10.0, "Nimbus", &["We", "reconstruct", "layout", "purely"]));
    first.extend(line(50.0, 664.0, 10.0, "Nimbus", &["from", "geometric", "signals."]));
    first.extend(line(50.0, 600.0, 13.0, "Nimbus-Bold", &["1.", "Overview"]));
    first.extend(line(50.0, 560.0, 10.0, "Nimbus", &["Plain", "prose", "follows", "the"]));
    first.extend(line(50.0, 548.0, 10.0, "Nimbus", &["section", "heading", "here."]));
    first.extend(line(50.0, 512.0, 10.0, "Nimbus", &["A", "second", "paragraph", "of"]));
    first.extend(line(50.0, 500.0, 10.0, "Nimbus", &["prose", "continues."]));

    let mut second = Vec::new();
    second.extend(line(50.0, 700.0, 10.0, "Nimbus", &["References"]));
    second.extend(line(50.0, 676.0, 10.0, "Nimbus", &["Smith,", "Gap", "profiles,", "2019."]));
    second.extend(line(50.0, 652.0, 10.0, "Nimbus", &["Jones,", "Cut", "order,", "2021."]));
    second.extend(line(50.0, 600.0, 10.0, "Nimbus", &["Appendix"]));
    second.extend(line(50.0, 576.0, 10.0, "Nimbus", &["Extra", "material", "lives", "here."]));

    vec![
        PageInput::from_elements(first),
        PageInput::from_elements(second),
    ]
}

fn roles(pages: &[PageInput]) -> Vec<(String, SemanticRole)> {
    let doc = process_pages(pages).unwrap();
    doc.blocks().map(|b| (b.text(), b.role)).collect()
}

#[test]
fn test_title_detected_on_page_one() {
    let assigned = roles(&article());
    assert_eq!(assigned[0].0, "A Study of Gap Detection");
    assert_eq!(assigned[0].1, SemanticRole::Title);
}

#[test]
fn test_abstract_heading_and_body() {
    let assigned = roles(&article());
    assert_eq!(assigned[1].0, "Abstract");
    assert_eq!(assigned[1].1, SemanticRole::Abstract);
    assert_eq!(assigned[2].1, SemanticRole::Abstract);
}

#[test]
fn test_generic_heading_and_body_text() {
    let assigned = roles(&article());
    assert_eq!(assigned[3].0, "1. Overview");
    assert_eq!(assigned[3].1, SemanticRole::BodyTextHeading);
    assert_eq!(assigned[4].1, SemanticRole::BodyText);
    assert_eq!(assigned[5].1, SemanticRole::BodyText);
}

#[test]
fn test_references_section_governs_following_blocks() {
    let assigned = roles(&article());
    assert_eq!(assigned[6].0, "References");
    assert_eq!(assigned[6].1, SemanticRole::ReferencesHeading);
    // Reference entries inherit the section context until the next heading.
    assert_eq!(assigned[7].1, SemanticRole::BodyTextHeading);
    assert_eq!(assigned[8].1, SemanticRole::BodyTextHeading);
    assert_eq!(assigned[9].0, "Appendix");
    assert_eq!(assigned[9].1, SemanticRole::AppendixHeading);
    assert_eq!(assigned[10].1, SemanticRole::BodyTextHeading);
}

#[test]
fn test_every_block_gets_exactly_one_role() {
    let doc = process_pages(&article()).unwrap();
    assert!(doc.block_count() > 0);
    // Roles are total: nothing panics, and re-classification is stable.
    let first: Vec<SemanticRole> = doc.blocks().map(|b| b.role).collect();
    let doc2 = process_pages(&article()).unwrap();
    let second: Vec<SemanticRole> = doc2.blocks().map(|b| b.role).collect();
    assert_eq!(first, second);
}

#[test]
fn test_role_filter_selects_heading_units() {
    let doc = process_pages(&article()).unwrap();
    let filter = UnitFilter::new(Granularity::Block)
        .with_roles([SemanticRole::Title, SemanticRole::ReferencesHeading]
            .into_iter()
            .collect());
    let units = doc.extract_units(&filter);
    let texts: Vec<&str> = units.iter().map(|u| u.text.as_str()).collect();
    assert_eq!(texts, vec!["A Study of Gap Detection", "References"]);
}

#[test]
fn test_unmatched_small_text_is_other() {
    let mut elements = Vec::new();
    elements.extend(line(50.0, 700.0, 10.0, "Nimbus", &["regular", "body", "text", "here"]));
    elements.extend(line(50.0, 100.0, 7.0, "Nimbus", &["tiny", "footnote"]));
    let doc = process_pages(&[PageInput::from_elements(elements)]).unwrap();
    let assigned: Vec<SemanticRole> = doc.blocks().map(|b| b.role).collect();
    assert!(assigned.contains(&SemanticRole::Other));
}

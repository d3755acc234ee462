use super::*;

fn related() -> RelatedPostData {
    RelatedPostData { title: "A".to_owned(), url: "http://x".to_owned(), description: "d".to_owned() }
}

#[test]
fn compose_puts_paragraphs_before_related_posts() {
    let doc = EditorDocument::compose("First\n\n  Second  ", &[related()], 42);
    let views: Vec<BlockView> = doc.blocks.iter().map(EditorBlock::view).collect();
    assert_eq!(views, vec![
        BlockView::Paragraph("First".to_owned()),
        BlockView::Paragraph("Second".to_owned()),
        BlockView::RelatedPost(related()),
    ]);
    assert_eq!(doc.time, 42);
}

#[test]
fn stored_content_uses_editor_block_shape() {
    let content = EditorDocument::compose("Hi", &[related()], 1).to_content();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["blocks"][0], serde_json::json!({ "type": "paragraph", "data": { "text": "Hi" } }));
    assert_eq!(json["blocks"][1]["type"], "relatedPost");
    assert_eq!(json["blocks"][1]["data"]["url"], "http://x");
}

#[test]
fn parse_reads_back_composed_content() {
    let original = EditorDocument::compose("Body", &[related()], 7);
    let parsed = EditorDocument::parse(&original.to_content());
    assert_eq!(parsed.body_text(), "Body");
    assert_eq!(parsed.related_posts(), vec![related()]);
}

#[test]
fn parse_falls_back_to_plain_text_paragraphs() {
    let doc = EditorDocument::parse("line one\nline two");
    assert_eq!(doc.body_text(), "line one\nline two");
    assert!(doc.related_posts().is_empty());
}

#[test]
fn related_post_block_with_missing_fields_views_as_empty_strings() {
    let block = EditorBlock { id: Some("b1".to_owned()), kind: "relatedPost".to_owned(), data: serde_json::json!({ "title": "A" }) };
    assert_eq!(block.view(), BlockView::RelatedPost(RelatedPostData { title: "A".to_owned(), ..RelatedPostData::default() }));
}

#[test]
fn unknown_blocks_are_kept_and_reported() {
    let doc = EditorDocument::parse(r#"{"time":1,"blocks":[{"id":"x","type":"header","data":{"text":"T","level":2}}],"version":"2.28.0"}"#);
    assert_eq!(doc.blocks[0].view(), BlockView::Unsupported("header".to_owned()));
    let round = EditorDocument::parse(&doc.to_content());
    assert_eq!(round, doc);
}

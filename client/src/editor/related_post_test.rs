use super::*;

fn full_input() -> RelatedPostInput {
    RelatedPostInput {
        title: Some("A".to_owned()),
        url: Some("http://x".to_owned()),
        description: Some("d".to_owned()),
    }
}

// =============================================================
// Construction defaults
// =============================================================

#[test]
fn missing_fields_default_to_empty_strings() {
    let tool = RelatedPostTool::new(RelatedPostInput { title: Some("A".to_owned()), ..RelatedPostInput::default() });
    let data = tool.data();
    assert_eq!(data.title, "A");
    assert_eq!(data.url, "");
    assert_eq!(data.description, "");
}

#[test]
fn partial_json_input_decodes_with_defaults() {
    let input: RelatedPostInput = serde_json::from_str(r#"{"title":"A"}"#).unwrap();
    assert_eq!(RelatedPostData::from_input(input), RelatedPostData {
        title: "A".to_owned(),
        url: String::new(),
        description: String::new(),
    });
}

// =============================================================
// Render / save
// =============================================================

#[test]
fn save_without_edits_returns_rendered_data() {
    let tool = RelatedPostTool::new(full_input());
    let rendered = tool.layout();

    assert_eq!(tool.save(&rendered), RelatedPostData {
        title: "A".to_owned(),
        url: "http://x".to_owned(),
        description: "d".to_owned(),
    });
}

#[test]
fn layout_orders_controls_title_url_description() {
    let rendered = RelatedPostTool::new(full_input()).layout();
    let classes: Vec<&str> = rendered.fields.iter().map(|f| f.field.class()).collect();
    assert_eq!(classes, vec![TITLE_CLASS, URL_CLASS, DESCRIPTION_CLASS]);
    assert!(RelatedPostField::Description.is_multiline());
    assert!(!RelatedPostField::Url.is_multiline());
}

#[test]
fn save_reads_the_rendered_controls_not_local_state() {
    let tool = RelatedPostTool::new(full_input());
    let mut rendered = tool.layout();

    rendered.type_into(RelatedPostField::Url, "http://y");

    assert_eq!(tool.save(&rendered).url, "http://y");
    assert_eq!(tool.data().url, "http://x");
}

#[test]
fn input_events_write_into_local_state() {
    let tool = RelatedPostTool::new(RelatedPostInput::default());
    let listener_handle = tool.clone();

    listener_handle.on_input(RelatedPostField::Description, "fresh".to_owned());

    assert_eq!(tool.data().description, "fresh");
    assert_eq!(tool.layout().field_value(DESCRIPTION_CLASS).as_deref(), Some("fresh"));
}

#[test]
fn save_tolerates_missing_control() {
    let tool = RelatedPostTool::new(full_input());
    let mut rendered = tool.layout();
    rendered.fields.retain(|f| f.field != RelatedPostField::Title);

    assert_eq!(tool.save(&rendered).title, "");
}

// =============================================================
// Toolbox
// =============================================================

#[test]
fn toolbox_advertises_title_and_icon() {
    let toolbox = RelatedPostTool::toolbox();
    assert_eq!(toolbox.title, "Related Post");
    assert!(toolbox.icon.starts_with("<svg"));
}

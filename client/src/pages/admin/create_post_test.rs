use super::*;

fn related() -> RelatedPostData {
    RelatedPostData { title: "Intro".to_owned(), url: "http://x/intro".to_owned(), description: "start here".to_owned() }
}

#[test]
fn new_id_selects_create_mode() {
    assert_eq!(EditorMode::from_param("new"), EditorMode::Create);
    assert_eq!(EditorMode::from_param(""), EditorMode::Create);
    assert_eq!(EditorMode::from_param("p-42"), EditorMode::Update("p-42".to_owned()));
    assert_eq!(EditorMode::Create.heading(), "Create a post");
}

#[test]
fn payload_requires_title() {
    let form = PostForm::default();
    assert_eq!(form.payload(&[], 0), Err("A post needs a title."));
}

#[test]
fn payload_composes_editor_document() {
    let form = PostForm {
        title: "  Hello ".to_owned(),
        category: "rust".to_owned(),
        body: "First\nSecond".to_owned(),
        ..PostForm::default()
    };
    let payload = form.payload(&[related()], 99).unwrap();

    assert_eq!(payload.title, "Hello");
    assert_eq!(payload.status, "draft");
    let document = EditorDocument::parse(&payload.content);
    assert_eq!(document.time, 99);
    assert_eq!(document.body_text(), "First\nSecond");
    assert_eq!(document.related_posts(), vec![related()]);
}

#[test]
fn from_blog_unpacks_stored_document() {
    let content = EditorDocument::compose("Body text", &[related()], 5).to_content();
    let post = Blog {
        title: "T".to_owned(),
        status: "published".to_owned(),
        content,
        ..Blog::default()
    };
    let form = PostForm::from_blog(&post);
    assert_eq!(form.title, "T");
    assert_eq!(form.status, "published");
    assert_eq!(form.body, "Body text");
    assert_eq!(form.related, vec![related()]);
}

#[test]
fn from_blog_defaults_blank_status_to_draft() {
    let form = PostForm::from_blog(&Blog::default());
    assert_eq!(form.status, "draft");
    assert!(form.related.is_empty());
}

use chrono::{TimeZone, Utc};
use feedline_types::*;

#[test]
fn test_locale_parsing() {
    assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
    assert_eq!("pt_br".parse::<Locale>().unwrap(), Locale::PtBr);
    assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
    assert_eq!(
        "fr".parse::<Locale>(),
        Err(Error::UnknownLocale("fr".to_string()))
    );
}

#[test]
fn test_locale_serde_tags() {
    assert_eq!(serde_json::to_string(&Locale::PtBr).unwrap(), "\"pt-br\"");
    let parsed: Locale = serde_json::from_str("\"pt-BR\"").unwrap();
    assert_eq!(parsed, Locale::PtBr);
}

#[test]
fn test_comments_with_same_text_have_distinct_ids() {
    let author = Author::new("Leslie Alexander", "UI Designer", "");
    let at = Utc.with_ymd_and_hms(2022, 6, 28, 0, 30, 0).unwrap();

    let a = Comment::new(author.clone(), "Nice post!!", at);
    let b = Comment::new(author, "Nice post!!", at);

    assert_eq!(a.text, b.text);
    assert_ne!(a.id, b.id);
}

#[test]
fn test_post_serializes_blocks_with_ids() {
    let post = Post::new(
        7,
        Author::new("Gus Prado", "Web developer", "https://github.com/gusprado.png"),
        vec![
            ContentBlock::paragraph("Hello"),
            ContentBlock::link("example.com/x"),
        ],
        Utc.with_ymd_and_hms(2022, 6, 28, 0, 30, 0).unwrap(),
    );

    let json = serde_json::to_value(&post).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["content"][0]["id"], 0);
    assert_eq!(json["content"][0]["type"], "paragraph");
    assert_eq!(json["content"][0]["content"], "Hello");
    assert_eq!(json["content"][1]["type"], "link");
    assert_eq!(json["content"][1]["content"], "example.com/x");
    assert_eq!(json["published_at"], "2022-06-28T00:30:00Z");
}

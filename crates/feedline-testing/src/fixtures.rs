//! Post data fixtures.

use serde_json::{Value, json};

/// Fixed clock for deterministic relative timestamps: one hour after publication.
pub const FIXED_NOW: &str = "2022-06-28T01:30:00Z";

/// A post record as accepted by `--posts` JSON files.
pub fn post_record(id: u64, author: &str, role: &str, content: Value) -> Value {
    json!({
        "id": id,
        "author": {
            "name": author,
            "role": role,
            "avatar_url": format!("https://example.com/{}.png", id),
        },
        "content": content,
        "published_at": "2022-06-28T00:30:00Z",
    })
}

/// Two posts: paragraphs and links, in the order the page shows them.
pub fn sample_posts_json() -> String {
    let posts = json!([
        post_record(
            1,
            "Gus Prado",
            "Web developer",
            json!([
                {"type": "paragraph", "content": "Hello"},
                {"type": "link", "content": "example.com/x"},
            ]),
        ),
        post_record(
            2,
            "Mario Souto",
            "Dev Front-End",
            json!([
                {"type": "paragraph", "content": "Acabei de subir mais um projeto"},
                {"type": "link", "content": "Link", "href": "https://example.com/project"},
            ]),
        ),
    ]);
    posts.to_string()
}

/// Same ids twice; rejected at load time.
pub fn duplicate_posts_json() -> String {
    json!([
        post_record(7, "A", "x", json!([])),
        post_record(7, "B", "y", json!([])),
    ])
    .to_string()
}

pub fn sample_posts_toml() -> &'static str {
    r#"[[posts]]
id = 1
published_at = "2022-06-28T00:30:00Z"

[posts.author]
name = "Gus Prado"
role = "Web developer"
avatar_url = "https://github.com/gusprado.png"

[[posts.content]]
type = "paragraph"
content = "Fala galeraa"
"#
}

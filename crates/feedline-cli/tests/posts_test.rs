use feedline_testing::{TestWorld, fixtures};

#[test]
fn test_posts_prints_records() {
    let world = TestWorld::new();
    let posts = world
        .write_posts("posts.json", &fixtures::sample_posts_json())
        .unwrap();

    let result = world
        .run(&["--posts", posts.to_str().unwrap(), "posts"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr);

    let json = result.json().unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], 1);
    assert_eq!(records[0]["published_at"], "2022-06-28T00:30:00Z");
    assert_eq!(records[0]["content"][0]["id"], 0);
    assert_eq!(records[0]["content"][0]["type"], "paragraph");
    assert_eq!(records[0]["content"][1]["content"], "example.com/x");
}

#[test]
fn test_log_file_receives_logs() {
    let world = TestWorld::new();
    let log = world.temp_dir().join("feedline.log");

    let result = world
        .run(&[
            "--log-level",
            "info",
            "--log-file",
            log.to_str().unwrap(),
            "render",
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stderr.is_empty());

    let content = std::fs::read_to_string(&log).unwrap();
    assert!(content.contains("feed loaded"));
}

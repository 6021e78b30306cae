//! Wildcard specs
//!
//! Verify segment matching when wildcard mode is enabled.

use crate::prelude::*;

fn wildcard_fixture() -> Fixture {
    Fixture::with_options(BusOptions {
        wildcard: true,
        delimiter: ".".to_string(),
        ..BusOptions::default()
    })
}

#[tokio::test]
async fn star_pattern_matches_each_child_event() {
    let fixture = wildcard_fixture();

    fixture.bus.emit("test.one", json!({ "_": "1" })).await.unwrap();
    fixture.bus.emit("test.two", json!({ "_": "2" })).await.unwrap();

    assert_eq!(
        summary(&fixture.mock_on.calls()),
        vec![
            ("on_test_wildcard".to_string(), json!({ "_": "1" })),
            ("on_test_wildcard".to_string(), json!({ "_": "2" })),
        ]
    );
}

#[tokio::test]
async fn star_pattern_skips_parent_and_siblings() {
    let fixture = wildcard_fixture();

    fixture.bus.emit("test", json!({ "_": "parent" })).await.unwrap();
    fixture.bus.emit("other.one", json!({ "_": "other" })).await.unwrap();

    assert!(fixture.mock_on.calls_to("on_test_wildcard").is_empty());
    assert_eq!(fixture.mock_on.calls_to("on_test").len(), 1);
}

#[tokio::test]
async fn star_pattern_is_literal_without_wildcard_mode() {
    let fixture = Fixture::new();

    assert_eq!(fixture.bus.emit("test.one", json!(1)).await.unwrap(), 0);
    assert_eq!(fixture.bus.emit("test.*", json!(2)).await.unwrap(), 1);
    assert_eq!(
        summary(&fixture.mock_on.calls()),
        vec![("on_test_wildcard".to_string(), json!(2))]
    );
}

//! Options specs
//!
//! Verify that operator options loaded from TOML drive the bus.

use crate::prelude::*;
use std::io::Write;

#[tokio::test]
async fn options_file_enables_wildcards() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "wildcard = true").unwrap();
    writeln!(file, "delimiter = \".\"").unwrap();

    let options = BusOptions::load(file.path()).unwrap();
    let fixture = Fixture::with_options(options);

    fixture.bus.emit("test.one", json!({ "_": "1" })).await.unwrap();

    assert_eq!(fixture.mock_on.calls_to("on_test_wildcard").len(), 1);
}

#[test]
fn invalid_options_fail_bootstrap() {
    let options = BusOptions::from_toml_str("wildcard = true\ndelimiter = \"\"");
    assert!(options.is_err());

    let options = BusOptions {
        wildcard: true,
        delimiter: String::new(),
        global: false,
        ..BusOptions::default()
    };
    let catalog = Catalog::new();
    let result = Bootstrap::new(options).run(&catalog, &ListenerTable::new(), catalog.clone());
    assert!(result.is_err());
}

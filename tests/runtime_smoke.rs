// End-to-end runtime smoke test (headless)
// - Runs issue_facets::app::run against the bundled demo data.
// - ISSUE_FACETS_HEADLESS=1 skips raw mode and the event loop.

use std::path::PathBuf;

use issue_facets::app::{RunOptions, run};

#[test]
fn runtime_smoke_headless_loads_demo_data() {
    unsafe {
        std::env::set_var("ISSUE_FACETS_HEADLESS", "1");
    }
    let opts = RunOptions {
        data_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/files_facet.json"),
        locale: Some("en-US".into()),
        ..RunOptions::default()
    };
    if let Err(e) = run(&opts) {
        panic!("app::run returned error: {e:?}");
    }
}

#[test]
fn runtime_reports_missing_data() {
    unsafe {
        std::env::set_var("ISSUE_FACETS_HEADLESS", "1");
    }
    let opts = RunOptions {
        data_path: PathBuf::from("/nonexistent/issue-facets.json"),
        ..RunOptions::default()
    };
    assert!(run(&opts).is_err());
}

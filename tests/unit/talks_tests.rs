use std::fs;
use std::path::PathBuf;

use ogn::talks::TalkTable;
use ogn::test_utils::{TestCase, run_table_tests};

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn talk_table_from_fixtures() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "basic",
            input: "tests/fixtures/talks/basic.yml",
            expected: (1usize, vec!["lightning".to_string()]),
            should_panic: false,
        },
        TestCase {
            name: "full",
            input: "tests/fixtures/talks/full.yml",
            expected: (
                2usize,
                vec!["geo_workshop".to_string(), "lightning".to_string()],
            ),
            should_panic: false,
        },
    ];

    run_table_tests(cases, |relative_path| {
        let path = fixture_path(relative_path);
        let content = fs::read_to_string(&path).expect("read fixture");
        let table = TalkTable::parse_str(&content, &path).expect("parse talks");
        (
            table.len(),
            table.names().map(ToString::to_string).collect::<Vec<_>>(),
        )
    })?;
    Ok(())
}

#[test]
fn full_fixture_spec_fields() {
    let path = fixture_path("tests/fixtures/talks/full.yml");
    let content = fs::read_to_string(&path).expect("read fixture");
    let table = TalkTable::parse_str(&content, &path).expect("parse talks");

    let talk = table.get("geo_workshop").expect("geo_workshop present");
    assert_eq!(
        talk.files,
        vec![
            "notebooks/workshop.ipynb",
            "observer-geospatial-notebooks/MHM-Groups-Dashboard/dashboard.ipynb",
        ]
    );
    assert_eq!(
        talk.folders.get("data/shapefiles").map(String::as_str),
        Some("data")
    );
    assert_eq!(
        talk.rename.get("notebooks/workshop.ipynb").map(String::as_str),
        Some("index.ipynb")
    );
}

#[test]
fn load_reports_missing_file_path() {
    let err = TalkTable::load("/definitely/not/here/talks.yml").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("talks"));
    assert!(message.contains("/definitely/not/here/talks.yml"));
}

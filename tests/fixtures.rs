use std::fs;
use std::path::PathBuf;

use bbscolor::{find, html, Bbs};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("fixtures")
}

#[test]
fn input_output() {
    let test_cases = vec![
        "ansi",
        "celerity",
        "pcboard",
        "plain",
        "renegade",
        "wwiv_heart",
    ];

    let fixtures = fixtures_dir();

    for name in test_cases {
        let input_path = fixtures.join(format!("{}.input", name));
        let input = fs::read(&input_path)
            .unwrap_or_else(|_| panic!("Failed to read input file: {:?}", input_path));

        let output_path = fixtures.join(format!("{}.output", name));
        let expected: Value = serde_json::from_str(
            &fs::read_to_string(&output_path)
                .unwrap_or_else(|_| panic!("Failed to read output file: {:?}", output_path)),
        )
        .unwrap_or_else(|_| panic!("Failed to parse output JSON for {}", name));

        let mut out = Vec::new();
        match html(&mut out, &input[..]) {
            Ok(format) => {
                assert_eq!(
                    format.name(),
                    expected["format"].as_str().unwrap(),
                    "Format mismatch for test case: {}",
                    name
                );
                assert_eq!(
                    String::from_utf8(out).unwrap(),
                    expected["html"].as_str().unwrap(),
                    "Output mismatch for test case: {}",
                    name
                );
            }
            Err(err) => {
                assert_eq!(
                    err.to_string(),
                    expected["error"].as_str().unwrap(),
                    "Error mismatch for test case: {}",
                    name
                );
                assert!(out.is_empty(), "Partial output for test case: {}", name);
            }
        }
    }
}

#[test]
fn detection_is_stable() {
    let fixtures = fixtures_dir();
    for (name, want) in [
        ("ansi", Some(Bbs::Ansi)),
        ("celerity", Some(Bbs::Celerity)),
        ("pcboard", Some(Bbs::PCBoard)),
        ("plain", None),
        ("renegade", Some(Bbs::Renegade)),
        ("wwiv_heart", Some(Bbs::WWIVHeart)),
    ] {
        let input = fs::read(fixtures.join(format!("{}.input", name))).unwrap();
        for _ in 0..2 {
            assert_eq!(find(&input[..]).unwrap(), want, "{}", name);
        }
    }
}

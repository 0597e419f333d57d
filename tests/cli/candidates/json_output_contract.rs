use crate::harness::TestContext;
use serde_json::Value;

#[test]
fn candidates_json_describes_folder_context() {
    let ctx = TestContext::new();
    ctx.touch(&["src/a/b.js", "tests/a/b.spec.js"]);

    let output = ctx.cli().args(["candidates", "src/a/b.js", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["status"], "mapped");
    assert_eq!(json["role"], "source");
    assert_eq!(json["file"], "src/a/b.js");
    assert_eq!(json["folder"]["containing_folder"], "");
    assert_eq!(json["folder"]["test_folder_name"], "tests");
    assert_eq!(json["folder"]["has_source_folder"], true);

    let candidates = json["candidates"].as_array().unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0]["path"], "tests/a/b.spec.js");
    assert_eq!(candidates[0]["exists"], true);
    assert_eq!(candidates[1]["path"], "tests/a/b.spec.ts");
    assert_eq!(candidates[1]["exists"], false);
}

#[test]
fn candidates_json_reports_skip_reason() {
    let ctx = TestContext::new();
    ctx.touch(&["src/foo.ts"]);

    let output = ctx.cli().args(["candidates", "src/foo.ts", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "skipped");
    assert_eq!(json["reason"], "no_test_folder");
}

use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn switch_ignores_unrecognized_extension() {
    let ctx = TestContext::new();
    ctx.touch(&["lib/util.py"]);
    ctx.mkdirs(&["tests"]);

    ctx.cli()
        .args(["switch", "lib/util.py", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    ctx.assert_file_not_exists("tests/lib/util.spec.py");
}

#[test]
fn switch_without_test_folder_does_nothing() {
    let ctx = TestContext::new();
    ctx.touch(&["src/foo.ts"]);

    ctx.cli()
        .args(["switch", "src/foo.ts", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(!ctx.path("tests").exists());
    assert!(!ctx.path("test").exists());
}

#[test]
fn switch_with_missing_file_does_nothing() {
    let ctx = TestContext::new();
    ctx.mkdirs(&["tests"]);

    ctx.cli()
        .args(["switch", "src/ghost.ts", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn switch_reports_invalid_layout_config() {
    let ctx = TestContext::new();
    ctx.touch(&["src/foo.ts"]);
    ctx.write_file(".spec-switch.toml", "[layout]\ntest_folder_names = []\n");

    ctx.cli()
        .args(["switch", "src/foo.ts"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: Invalid layout configuration"));
}

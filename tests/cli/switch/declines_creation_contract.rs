use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn switch_no_create_leaves_project_untouched() {
    let ctx = TestContext::new();
    ctx.touch(&["packages/a/src/x.ts"]);
    ctx.mkdirs(&["packages/a/tests"]);

    ctx.cli()
        .args(["switch", "packages/a/src/x.ts", "--no-create"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("was not created"));

    ctx.assert_file_not_exists("packages/a/tests/x.spec.ts");
}

#[test]
fn switch_rejects_yes_with_no_create() {
    let ctx = TestContext::new();
    ctx.touch(&["src/x.ts"]);

    ctx.cli()
        .args(["switch", "src/x.ts", "--yes", "--no-create"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

use crate::harness::TestContext;

#[test]
fn switch_opens_existing_spec_in_tests_folder() {
    let ctx = TestContext::new();
    ctx.touch(&["src/foo.ts", "tests/foo.spec.ts"]);

    ctx.cli()
        .args(["switch", "src/foo.ts"])
        .assert()
        .success()
        .stdout(ctx.opened_line("tests/foo.spec.ts"));
}

#[test]
fn switch_prefers_nearest_test_folder_in_monorepo() {
    let ctx = TestContext::new();
    ctx.touch(&["tests/x.spec.ts", "packages/a/src/x.ts", "packages/a/tests/x.spec.ts"]);

    ctx.cli()
        .args(["s", "packages/a/src/x.ts", "--root", "."])
        .assert()
        .success()
        .stdout(ctx.opened_line("packages/a/tests/x.spec.ts"));
}

#[test]
fn switch_prefers_tests_over_test() {
    let ctx = TestContext::new();
    ctx.touch(&["src/foo.ts", "tests/foo.spec.ts", "test/foo.spec.ts"]);

    ctx.cli()
        .args(["switch", "src/foo.ts"])
        .assert()
        .success()
        .stdout(ctx.opened_line("tests/foo.spec.ts"));
}

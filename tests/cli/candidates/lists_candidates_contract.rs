use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn candidates_lists_both_extensions_in_preference_order() {
    let ctx = TestContext::new();
    ctx.touch(&["foo.ts", "test/foo.spec.js"]);

    let expected = format!(
        "   {}\n✅ {}\n",
        ctx.path("test/foo.spec.ts").display(),
        ctx.path("test/foo.spec.js").display()
    );

    ctx.cli().args(["candidates", "foo.ts"]).assert().success().stdout(expected);

    ctx.assert_file_not_exists("test/foo.spec.ts");
}

#[test]
fn candidates_explains_skips_on_stderr() {
    let ctx = TestContext::new();
    ctx.touch(&["lib/util.py"]);

    ctx.cli()
        .args(["c", "lib/util.py"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("file extension is not recognized"));
}

use crate::harness::TestContext;

#[test]
fn switch_maps_nested_spec_back_into_src() {
    let ctx = TestContext::new();
    ctx.touch(&["src/util/strings.js", "tests/util/strings.spec.js"]);

    ctx.cli()
        .args(["switch", "tests/util/strings.spec.js"])
        .assert()
        .success()
        .stdout(ctx.opened_line("src/util/strings.js"));
}

#[test]
fn switch_accepts_absolute_paths_from_other_directories() {
    let ctx = TestContext::new();
    ctx.touch(&["lib.ts", "test/lib.spec.ts"]);
    let spec = ctx.path("test/lib.spec.ts");

    ctx.cli_in(ctx.path("test"))
        .arg("switch")
        .arg(&spec)
        .assert()
        .success()
        .stdout(ctx.opened_line("lib.ts"));
}

//! Help output and argument handling.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use shopfront_testing::TestWorld;

#[test]
fn test_main_help_lists_commands() {
    cargo_bin_cmd!("shopfront")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("products"))
        .stdout(predicate::str::contains("favorites"))
        .stdout(predicate::str::contains("--base-url"));
}

#[test]
fn test_products_help() {
    let output = cargo_bin_cmd!("shopfront")
        .args(["products", "--help"])
        .output()
        .unwrap();
    let help = String::from_utf8(output.stdout).unwrap();

    insta::assert_snapshot!(help.lines().next().unwrap_or_default(), @"List products, optionally filtered by category and search text");
    assert!(help.contains("--category <CATEGORY>"));
    assert!(help.contains("--search <SEARCH>"));
    assert!(help.contains("--compact"));
}

#[test]
fn test_browse_rejects_unknown_route() {
    let world = TestWorld::new();
    let result = world.run(&["browse", "--route", "/cart"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("unknown route: /cart"));
}

#[test]
fn test_browse_needs_terminal() {
    let world = TestWorld::new();
    let result = world.run(&["browse", "--route", "/list"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("interactive terminal"));
    // Browse logs to a file rather than the terminal
    assert!(world.data_dir().join("shopfront.log").exists());
}

#[test]
fn test_unknown_format_is_rejected() {
    let world = TestWorld::new();
    let result = world.run(&["theme", "show", "--format", "yaml"]).unwrap();
    assert!(!result.success());
}

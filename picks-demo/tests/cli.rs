use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

fn stdout_of(args: &[&str]) -> String {
    let mut cmd = cargo_bin_cmd!("picks-demo");
    let output = cmd
        .args(args)
        .env("RUST_LOG", "warn")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8_lossy(&output).into_owned()
}

/// Rendering after the final command.
fn last_frame(stdout: &str) -> &str {
    stdout.rsplit("\n> ").next().unwrap_or(stdout)
}

#[test]
fn two_steps_forward_shows_products_three_and_four() {
    let stdout = stdout_of(&["--script", "next,next"]);
    let frame = last_frame(&stdout);

    assert!(frame.contains("slide 3 of 5"), "{frame}");
    assert!(frame.contains("#3 "));
    assert!(frame.contains("#4 "));
    assert!(!frame.contains("#1 "));
    assert!(frame.contains("live: Next slide"));
}

#[test]
fn full_script_ends_on_slide_three_with_a_notification() {
    let stdout = stdout_of(&["--script", "next,next,goto 3,prev,select 2"]);

    assert!(stdout.contains(
        "[INFO] Shop Now: Navigating to Fellow Aiden Coffee Brewer"
    ));
    assert!(last_frame(&stdout).contains("○ ○ ● ○ ○  slide 3 of 5"));
}

#[test]
fn boundaries_disable_buttons() {
    let stdout = stdout_of(&["--script", "prev"]);
    assert!(last_frame(&stdout).contains("previous: disabled  next: enabled"));

    let stdout = stdout_of(&["--script", "goto 4,next"]);
    let frame = last_frame(&stdout);
    assert!(frame.contains("previous: enabled  next: disabled"));
    assert!(frame.contains("#5 "));
    assert!(frame.contains("#1 "));
}

#[test]
fn unknown_selection_is_reported() {
    let stdout = stdout_of(&["--script", "select missing-id"]);
    assert!(stdout.contains("No product with id missing-id"));
    assert!(!stdout.contains("[INFO]"));
}

#[test]
fn custom_catalog_and_props() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"products": [
            {{"id": "k1", "displayName": "Gooseneck Kettle", "price": 165, "isOlivePick": true}},
            {{"id": "k2", "name": "Burr Grinder", "price": "call us", "rating": 4.26}},
            {{"id": "k3", "name": "Scale", "price": 49.5}}
        ]}}"#
    )
    .unwrap();
    let path = file.path().to_str().unwrap();

    let stdout = stdout_of(&[
        "--products",
        path,
        "--title",
        "Brew Gear",
        "--dots-per-product",
        "--script",
        "show",
    ]);

    assert!(stdout.starts_with("== Brew Gear ==\n"));
    assert!(stdout.contains("Curated just for you • 3 items"));
    assert!(stdout.contains("Gooseneck Kettle  [Olive Pick]"));
    assert!(stdout.contains("$0.00  rated 4.3"));
    assert!(stdout.contains("slide 1 of 3"));
}

#[test]
fn invalid_script_fails_before_rendering() {
    let mut cmd = cargo_bin_cmd!("picks-demo");
    cmd.args(["--script", "next,dance"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown command 'dance'"));
}

#[test]
fn missing_catalog_is_an_error() {
    let mut cmd = cargo_bin_cmd!("picks-demo");
    cmd.args(["--products", "/no/such/catalog.json", "--script", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load products"));
}

#[test]
fn help_lists_the_options() {
    let mut cmd = cargo_bin_cmd!("picks-demo");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--script"))
        .stdout(predicate::str::contains("--products"));
}

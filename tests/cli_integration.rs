use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn shelf(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env("BOOKSHELF_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_list_search() {
    let home = TempDir::new().unwrap();

    shelf(&home)
        .args(["add", "War and Peace", "Tolstoy", "1869"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added (1): War and Peace"));

    shelf(&home)
        .args(["add", "1984", "Orwell", "1949"])
        .assert()
        .success();

    shelf(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("War and Peace"))
        .stdout(predicate::str::contains("1984"));

    shelf(&home)
        .args(["search", "--author", "tolstoy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("War and Peace"))
        .stdout(predicate::str::contains("Orwell").not());

    assert!(home.path().join("books.json").exists());
}

#[test]
fn test_default_command_lists() {
    let home = TempDir::new().unwrap();
    shelf(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("The catalog is empty."));
}

#[test]
fn test_status_checkout_return() {
    let home = TempDir::new().unwrap();
    shelf(&home)
        .args(["add", "Dune", "Herbert", "1965"])
        .assert()
        .success();

    shelf(&home)
        .args(["checkout", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("available -> checked out"));

    shelf(&home)
        .args(["return", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("checked out -> available"));

    shelf(&home)
        .args(["status", "1", "lent to Sam"])
        .assert()
        .success();

    let text = fs::read_to_string(home.path().join("books.json")).unwrap();
    assert!(text.contains("lent to Sam"));
}

#[test]
fn test_delete_missing_is_not_an_error() {
    let home = TempDir::new().unwrap();
    shelf(&home)
        .args(["add", "Dune", "Herbert", "1965"])
        .assert()
        .success();

    shelf(&home)
        .args(["delete", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book deleted (1): Dune"))
        .stdout(predicate::str::contains("No book with id 1"));
}

#[test]
fn test_non_numeric_year_is_rejected_by_parser() {
    let home = TempDir::new().unwrap();
    shelf(&home)
        .args(["add", "Dune", "Herbert", "nineteen"])
        .assert()
        .failure();
    assert!(!home.path().join("books.json").exists());
}

#[test]
fn test_malformed_catalog_fails_and_config_recovers() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("books.json"),
        r#"[{"id": 1, "title": "No year", "author": "A", "status": "available"}]"#,
    )
    .unwrap();

    shelf(&home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed record"));

    shelf(&home)
        .args(["config", "strict-load", "false"])
        .assert()
        .success();

    shelf(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The catalog is empty."));
}

#[test]
fn test_config_show() {
    let home = TempDir::new().unwrap();
    shelf(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file = books.json"))
        .stdout(predicate::str::contains("strict-load = true"));

    shelf(&home)
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_interactive_shell() {
    let home = TempDir::new().unwrap();
    shelf(&home)
        .arg("shell")
        .write_stdin("1\nВойна и мир\nТолстой\n1869\n3\n\nтолстой\n\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added (1): Война и мир"))
        .stdout(predicate::str::contains("Bye."));

    let text = fs::read_to_string(home.path().join("books.json")).unwrap();
    assert!(text.contains("Война и мир"));
}

#[test]
fn test_dir_flag_overrides_env() {
    let home = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    shelf(&home)
        .arg("--dir")
        .arg(other.path())
        .args(["add", "Dune", "Herbert", "1965"])
        .assert()
        .success();

    assert!(other.path().join("books.json").exists());
    assert!(!home.path().join("books.json").exists());
}

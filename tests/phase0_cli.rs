use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn iconls() -> Command {
    let mut cmd = Command::cargo_bin("iconls").unwrap();
    cmd.env_remove("ICONLS_LOG");
    cmd
}

#[test]
fn test_help_flag() {
    iconls()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Colorized directory listing"))
        .stdout(predicate::str::contains("--long"))
        .stdout(predicate::str::contains("--human"))
        .stdout(predicate::str::contains("--tree"))
        .stdout(predicate::str::contains("--depth"))
        .stdout(predicate::str::contains("--ignore"))
        .stdout(predicate::str::contains("--no-color"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_version_flag() {
    iconls()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("iconls"));
}

#[test]
fn test_nonexistent_path_exits_with_error() {
    iconls()
        .arg("/this/path/does/not/exist")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("iconls:"))
        .stderr(predicate::str::contains("No such file"));
}

#[test]
fn test_file_path_lists_the_file() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("afile.txt");
    fs::write(&file, "hello").unwrap();

    iconls()
        .args(["--no-color", "-s"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("afile.txt"))
        .stdout(predicate::str::contains("5"));
}

#[test]
fn test_directory_listing_without_color() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.go"), "package main").unwrap();
    fs::create_dir(tmp.path().join("b")).unwrap();
    fs::write(tmp.path().join(".hidden"), "").unwrap();

    iconls()
        .arg("--no-color")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.go"))
        .stdout(predicate::str::contains("b"))
        .stdout(predicate::str::contains(".hidden").not())
        .stdout(predicate::str::contains("\u{1b}").not());
}

#[test]
fn test_no_color_env_disables_escapes() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("main.rs"), "").unwrap();

    iconls()
        .env("NO_COLOR", "1")
        .args(["-l"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("main.rs"))
        .stdout(predicate::str::contains("\u{1b}").not());
}

#[test]
fn test_empty_directory_prints_message() {
    let tmp = TempDir::new().unwrap();
    iconls()
        .arg("--no-color")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("No files found.\n");
}

#[test]
fn test_invalid_ignore_pattern_is_rejected() {
    iconls()
        .args(["-I", "a["])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid ignore pattern"));
}

#[test]
fn test_depth_below_minus_one_is_rejected() {
    iconls()
        .args(["-r", "-d", "-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("depth"));
}

#[test]
fn test_max_name_below_two_is_rejected() {
    iconls()
        .args(["-w", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2"));
}

#[test]
fn test_allow_and_deny_overlap_is_rejected() {
    iconls()
        .args(["-e", "go", "-x", ".go"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("both allowed and denied"));
}

#[test]
fn test_pattern_without_extension_is_rejected() {
    let tmp = TempDir::new().unwrap();
    iconls()
        .arg(tmp.path())
        .arg("Makefile")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no extension"));
}

#[test]
fn test_sort_flags_conflict() {
    iconls().args(["-o", "-t"]).assert().failure();
}

#[test]
fn test_multiple_ignore_patterns() {
    use clap::Parser;
    use iconls::cli::Args;
    let args = Args::parse_from(["iconls", "-I", "*.log", "-I", "node_modules", "."]);
    assert_eq!(args.ignore, vec!["*.log", "node_modules"]);
}

#[test]
fn test_verbose_count_levels() {
    use clap::Parser;
    use iconls::cli::Args;
    let args = Args::parse_from(["iconls", "-vv", "."]).validated();
    assert_eq!(args.verbose, 2);
}

#[test]
fn test_quiet_resets_verbose() {
    use clap::Parser;
    use iconls::cli::Args;
    let args = Args::parse_from(["iconls", "-vv", "--quiet", "."]).validated();
    assert!(args.quiet);
    assert_eq!(args.verbose, 0, "quiet should reset verbosity to 0");
}

#[test]
fn test_combined_short_flags() {
    use clap::Parser;
    use iconls::cli::Args;
    let args = Args::parse_from(["iconls", "-lhafr", "-d", "2"]);
    assert!(args.long_format && args.human_readable && args.show_hidden);
    assert!(args.summary && args.recursive);
    assert_eq!(args.depth, 2);
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("x.txt"), "").unwrap();
    iconls()
        .args(["--no-color", "-vv"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("x.txt"))
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("enumerated directory"));
}

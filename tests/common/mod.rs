#![allow(dead_code)]

use iconls::config::Config;
use iconls::style::Resolvers;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Config for `root` with color off and an 80-column terminal.
pub fn default_config(root: &Path) -> Config {
    Config {
        target_path: root.to_path_buf(),
        use_color: false,
        terminal_width: 80,
        ..Config::default()
    }
}

/// Resolvers with color disabled.
pub fn no_color() -> Resolvers<'static> {
    Resolvers::defaults(false)
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Write `len` bytes to `root/rel`, creating parents.
pub fn write_sized(root: &Path, rel: &str, len: usize) {
    let full = root.join(rel);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full, vec![b'x'; len]).unwrap();
}

/// Run a whole listing into a string.
pub fn run_to_string(config: &Config) -> String {
    let config = config.clone().validated().unwrap();
    let mut out = Vec::new();
    iconls::listing::run(&config, no_color(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Output lines of a listing, without the trailing empty line.
pub fn run_lines(config: &Config) -> Vec<String> {
    run_to_string(config).lines().map(str::to_string).collect()
}

/// Whether some output line mentions `name` as a whole word-ish token.
pub fn mentions(lines: &[String], name: &str) -> bool {
    lines
        .iter()
        .any(|l| l.split_whitespace().any(|tok| tok == name))
}

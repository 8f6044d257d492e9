mod common;

use common::{create_fixture, default_config, no_color, run_lines, run_to_string};
use iconls::config::Config;
use iconls::entry;
use iconls::summary::{summarize, summary_lines, Summary};
use iconls::tree::print_tree;
use tempfile::TempDir;

fn with_summary(cfg: Config) -> Config {
    Config {
        show_summary: true,
        one_column: true,
        ..cfg
    }
}

fn summary_block(lines: &[String]) -> Vec<String> {
    let blank = lines.iter().rposition(|l| l.is_empty()).expect("blank separator");
    lines[blank + 1..].to_vec()
}

#[test]
fn test_flat_summary_counts_visible_entries() {
    let tmp = create_fixture(&["a.txt", "b.txt", "dir/", ".hidden"]);
    let lines = run_lines(&with_summary(default_config(tmp.path())));
    let block = summary_block(&lines);
    assert!(block[0].ends_with("Directories: 1"));
    assert!(block[1].ends_with("Files: 2"));
    assert!(block[2].ends_with("Symlinks to directories: 0"));
    assert!(block[3].ends_with("Symlinks to files: 0"));
    assert_eq!(block.last().unwrap(), "Total: 3");
}

#[test]
#[cfg(unix)]
fn test_symlinks_are_classified_by_target() {
    let tmp = create_fixture(&["file.txt", "dir/"]);
    let root = tmp.path();
    std::os::unix::fs::symlink(root.join("file.txt"), root.join("to_file")).unwrap();
    std::os::unix::fs::symlink(root.join("dir"), root.join("to_dir")).unwrap();
    std::os::unix::fs::symlink(root.join("missing"), root.join("dangling")).unwrap();

    let entries = entry::read_dir(root).unwrap();
    let s = summarize(&entries);
    assert_eq!(
        s,
        Summary {
            files: 1,
            dirs: 1,
            symlink_files: 1,
            symlink_dirs: 1,
            broken_symlinks: 1,
        }
    );

    let lines = run_lines(&with_summary(default_config(root)));
    let block = summary_block(&lines);
    assert!(block.iter().any(|l| l.ends_with("Broken symlinks: 1")));
    assert_eq!(block.last().unwrap(), "Total: 5");
}

#[test]
fn test_no_broken_line_without_broken_links() {
    let tmp = create_fixture(&["a"]);
    let text = run_to_string(&with_summary(default_config(tmp.path())));
    assert!(!text.contains("Broken"));
}

#[test]
fn test_summary_respects_filters() {
    let tmp = create_fixture(&["a.rs", "b.rs", "c.md", "sub/"]);
    let lines = run_lines(&with_summary(Config {
        files_only: true,
        extension_allow: vec!["rs".into()],
        ..default_config(tmp.path())
    }));
    assert_eq!(summary_block(&lines).last().unwrap(), "Total: 2");
}

#[test]
fn test_tree_summary_covers_every_level() {
    let tmp = create_fixture(&["a/b/c.txt", "a/d.txt", "e.txt", "f/"]);
    let cfg = Config {
        recursive: true,
        ..default_config(tmp.path())
    };
    let mut out = Vec::new();
    let s = print_tree(&cfg, no_color(), &mut out).unwrap();
    assert_eq!(s.dirs, 3);
    assert_eq!(s.files, 3);

    let lines = run_lines(&with_summary(cfg));
    assert_eq!(summary_block(&lines).last().unwrap(), "Total: 6");
}

#[test]
fn test_tree_summary_respects_depth() {
    let tmp = create_fixture(&["a/b/c.txt", "top.txt"]);
    let cfg = Config {
        recursive: true,
        max_depth: Some(0),
        ..default_config(tmp.path())
    };
    let mut out = Vec::new();
    let s = print_tree(&cfg, no_color(), &mut out).unwrap();
    assert_eq!(s.total(), 2);
}

#[test]
fn test_summary_lines_use_icons() {
    let lines = summary_lines(&Summary::default(), no_color());
    for line in &lines[..4] {
        let text = line.plain_text();
        let first = text.chars().next().unwrap();
        assert!(!first.is_ascii(), "expected an icon prefix in {text:?}");
    }
}

#[test]
fn test_empty_listing_has_no_summary() {
    let tmp = TempDir::new().unwrap();
    let lines = run_lines(&with_summary(default_config(tmp.path())));
    assert_eq!(lines, vec!["No files found.".to_string()]);
}

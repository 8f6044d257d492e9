//! Entry name rendering shared by every layout.

use crate::config::Config;
use crate::entry::{Entry, EntryKind, LinkTarget};
use crate::style::{Category, Resolvers, StyledText};

/// Marker appended to truncated names.
pub const ELLIPSIS: char = '\u{2026}';

/// Arrow between a symlink and its target.
pub const LINK_ARROW: &str = "==>";

/// Sanitize control characters to avoid terminal control-sequence injection.
pub fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Cut `name` to `max - 1` characters plus an ellipsis when it is longer
/// than `max` characters.
pub fn truncate_name(name: &str, max: Option<usize>) -> String {
    match max {
        Some(max) if max > 0 && name.chars().count() > max => {
            let mut out: String = name.chars().take(max - 1).collect();
            out.push(ELLIPSIS);
            out
        }
        _ => name.to_string(),
    }
}

/// Icon plus (possibly truncated) name, colored by entry kind.
pub fn entry_name(entry: &Entry, config: &Config, resolvers: Resolvers<'_>) -> StyledText {
    styled_name(entry, config.max_name_len, config.dir_icon_left, resolvers)
}

/// `entry_name` with the truncation length and directory icon side given
/// explicitly.
pub fn styled_name(
    entry: &Entry,
    max_name_len: Option<usize>,
    dir_icon_left: bool,
    resolvers: Resolvers<'_>,
) -> StyledText {
    let name = truncate_name(&sanitize_terminal_text(&entry.name), max_name_len);
    let mut out = StyledText::new();

    match entry.kind {
        EntryKind::Directory => {
            let color = resolvers.color(Category::Directory);
            let icon = resolvers.icons.directory_icon(&entry.name);
            if dir_icon_left {
                out.push(format!("{icon} {name}"), color);
            } else {
                out.push(format!("{name} {icon}"), color);
            }
        }
        EntryKind::Symlink => {
            let target = entry.link_target();
            let to_dir = target.is_some_and(LinkTarget::points_to_dir);
            let category = match target {
                Some(LinkTarget::Resolved { is_dir: true, .. }) => Category::SymlinkDir,
                Some(LinkTarget::Resolved { .. }) => Category::Symlink,
                _ => Category::BrokenSymlink,
            };
            let color = resolvers.color(category);
            out.push(resolvers.icons.symlink_icon(to_dir), color);
            out.push(" ", None);
            out.push(name, color);
        }
        EntryKind::Regular => {
            let exec = entry.is_executable().then(|| resolvers.color(Category::Executable)).flatten();
            let icon_color = entry
                .extension()
                .and_then(|ext| resolvers.colors.extension_color(ext))
                .or(exec);
            out.push(resolvers.icons.file_icon(&entry.name), icon_color);
            out.push(" ", None);
            out.push(name, exec);
        }
    }
    out
}

/// ` ==> target` for a symlink, or an error marker when the link is unreadable.
pub fn link_annotation(target: &LinkTarget, resolvers: Resolvers<'_>) -> StyledText {
    let mut out = StyledText::plain(" ");
    out.push(LINK_ARROW, resolvers.color(Category::LinkArrow));
    out.push(" ", None);
    match target {
        LinkTarget::Resolved { target, .. } => {
            out.push(
                sanitize_terminal_text(&target.to_string_lossy()),
                resolvers.color(Category::LinkArrow),
            );
        }
        LinkTarget::Dangling { target } => {
            out.push(
                sanitize_terminal_text(&target.to_string_lossy()),
                resolvers.color(Category::BrokenSymlink),
            );
        }
        LinkTarget::Unreadable(err) => {
            out.push(
                format!("[unreadable link: {}]", sanitize_terminal_text(err)),
                resolvers.color(Category::Error),
            );
        }
    }
    out
}

/// `name [reason]` in the error color.
pub fn error_marker(name: &str, reason: &str, resolvers: Resolvers<'_>) -> StyledText {
    let text = format!(
        "{} [{}]",
        sanitize_terminal_text(name),
        sanitize_terminal_text(reason)
    );
    StyledText::colored(text, resolvers.color(Category::Error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryMeta;
    use std::time::UNIX_EPOCH;

    fn plain() -> Resolvers<'static> {
        Resolvers::defaults(false)
    }

    fn regular(name: &str, mode: u32) -> Entry {
        Entry::new(
            name,
            format!("/tmp/{name}"),
            EntryKind::Regular,
            Some(EntryMeta {
                size: 0,
                mode,
                modified: UNIX_EPOCH,
                uid: 0,
                gid: 0,
            }),
        )
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_name("short", Some(10)), "short");
        assert_eq!(truncate_name("exactly10!", Some(10)), "exactly10!");
        assert_eq!(truncate_name("much_too_long_name", Some(6)), "much_\u{2026}");
        assert_eq!(truncate_name("日本語のファイル", Some(4)), "日本語\u{2026}");
        assert_eq!(truncate_name("anything", None), "anything");
    }

    #[test]
    fn directory_icon_side_follows_config() {
        let dir = Entry::new("src", "/tmp/src", EntryKind::Directory, None);
        let right = entry_name(&dir, &Config::default(), plain()).plain_text();
        assert!(right.starts_with("src "));

        let cfg = Config {
            dir_icon_left: true,
            ..Config::default()
        };
        let left = entry_name(&dir, &cfg, plain()).plain_text();
        assert!(left.ends_with(" src"));
    }

    #[test]
    fn file_name_has_icon_prefix() {
        let text = entry_name(&regular("main.go", 0o644), &Config::default(), plain()).plain_text();
        assert_eq!(text, "\u{e627} main.go");
    }

    #[test]
    fn executable_names_are_colored() {
        let res = Resolvers::defaults(true);
        let text = entry_name(&regular("run", 0o755), &Config::default(), res);
        let name_seg = text.segments().last().unwrap();
        assert_eq!(name_seg.text, "run");
        assert!(name_seg.color.is_some());

        let text = entry_name(&regular("data", 0o644), &Config::default(), res);
        assert_eq!(text.segments().last().unwrap().color, None);
    }

    #[test]
    fn control_characters_are_escaped() {
        let s = sanitize_terminal_text("a\u{1b}[2Jb\n\u{85}");
        assert_eq!(s, "a\\x1B[2Jb\\n\\x85");
    }
}

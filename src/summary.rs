//! File / directory / symlink counts shared by every layout.

use crate::entry::{Entry, EntryKind, LinkTarget};
use crate::error::ListError;
use crate::style::{Category, Resolvers, StyledText};
use std::io::Write;
use std::ops::AddAssign;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub dirs: usize,
    pub symlink_files: usize,
    pub symlink_dirs: usize,
    /// Links whose target cannot be stat-ed (or read).
    pub broken_symlinks: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.files + self.dirs + self.symlink_files + self.symlink_dirs + self.broken_symlinks
    }

    /// Count one entry, resolving symlinks to classify them.
    pub fn record(&mut self, entry: &Entry) {
        match entry.kind {
            EntryKind::Directory => self.dirs += 1,
            EntryKind::Regular => self.files += 1,
            EntryKind::Symlink => match entry.link_target() {
                Some(LinkTarget::Resolved { is_dir: true, .. }) => self.symlink_dirs += 1,
                Some(LinkTarget::Resolved { .. }) => self.symlink_files += 1,
                _ => self.broken_symlinks += 1,
            },
        }
    }
}

impl AddAssign for Summary {
    fn add_assign(&mut self, other: Summary) {
        self.files += other.files;
        self.dirs += other.dirs;
        self.symlink_files += other.symlink_files;
        self.symlink_dirs += other.symlink_dirs;
        self.broken_symlinks += other.broken_symlinks;
    }
}

/// Single pass over `entries`.
pub fn summarize<'a, I>(entries: I) -> Summary
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut summary = Summary::default();
    for entry in entries {
        summary.record(entry);
    }
    summary
}

fn count_line(icon: &str, label: &str, count: usize, category: Category, resolvers: Resolvers<'_>) -> StyledText {
    let color = resolvers.color(category);
    let mut line = StyledText::colored(icon, color);
    line.push(format!(" {label}: "), None);
    line.push(count.to_string(), color);
    line
}

/// Summary block lines: four counts, broken links when present, then total.
pub fn summary_lines(summary: &Summary, resolvers: Resolvers<'_>) -> Vec<StyledText> {
    let icons = resolvers.icons;
    let mut lines = vec![
        count_line(icons.directory_icon(""), "Directories", summary.dirs, Category::SummaryDirs, resolvers),
        count_line(icons.file_icon(""), "Files", summary.files, Category::SummaryFiles, resolvers),
        count_line(
            icons.symlink_icon(true),
            "Symlinks to directories",
            summary.symlink_dirs,
            Category::SummaryLinks,
            resolvers,
        ),
        count_line(
            icons.symlink_icon(false),
            "Symlinks to files",
            summary.symlink_files,
            Category::SummaryLinks,
            resolvers,
        ),
    ];
    if summary.broken_symlinks > 0 {
        lines.push(count_line(
            icons.symlink_icon(false),
            "Broken symlinks",
            summary.broken_symlinks,
            Category::BrokenSymlink,
            resolvers,
        ));
    }
    let mut total = StyledText::plain("Total: ");
    total.push(summary.total().to_string(), resolvers.color(Category::SummaryTotal));
    lines.push(total);
    lines
}

/// Blank separator line, then the summary block.
pub fn render<W: Write>(summary: &Summary, resolvers: Resolvers<'_>, out: &mut W) -> Result<(), ListError> {
    writeln!(out)?;
    for line in summary_lines(summary, resolvers) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

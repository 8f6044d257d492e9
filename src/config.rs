//! Resolved, immutable listing configuration.

use crate::error::ListError;
use globset::GlobSet;
use std::path::PathBuf;

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep enumeration (file-name) order.
    #[default]
    None,
    BySize,
    ByTime,
}

/// Everything the engine needs to produce one listing.
///
/// Built once by the command line (or a test) and passed by reference into
/// every stage; nothing in the engine mutates it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory (or single file) to list.
    pub target_path: PathBuf,
    /// Detailed permissions/size/owner/time table.
    pub long_format: bool,
    /// One line per entry with a size column.
    pub size_format: bool,
    /// Render sizes in KB/MB/GB/TB instead of raw bytes.
    pub human_readable: bool,
    pub sort_key: SortKey,
    /// Include dotfiles.
    pub show_hidden: bool,
    /// Only dotfiles (implies `show_hidden`).
    pub hidden_only: bool,
    /// Only entries that are themselves symlinks.
    pub symlinks_only: bool,
    /// Only directories. Wins over `files_only`.
    pub dirs_only: bool,
    /// Only non-directories.
    pub files_only: bool,
    /// Extensions (without the dot) to keep. Empty keeps everything.
    pub extension_allow: Vec<String>,
    /// Extensions (without the dot) to drop.
    pub extension_deny: Vec<String>,
    /// Glob patterns matched against entry names.
    pub ignore: GlobSet,
    /// Put the directory icon before the name instead of after it.
    pub dir_icon_left: bool,
    /// One name per line, no grid.
    pub one_column: bool,
    /// Print file/directory/symlink counts after the listing.
    pub show_summary: bool,
    /// Recursive tree output.
    pub recursive: bool,
    /// Deepest tree level entered (`None` for unlimited).
    pub max_depth: Option<usize>,
    /// Names longer than this are cut to `max - 1` chars plus an ellipsis.
    pub max_name_len: Option<usize>,
    /// Treat an unresolvable owner/group id as fatal.
    pub strict_ids: bool,
    pub use_color: bool,
    /// Terminal width in columns used by the grid layout.
    pub terminal_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_path: PathBuf::from("."),
            long_format: false,
            size_format: false,
            human_readable: false,
            sort_key: SortKey::None,
            show_hidden: false,
            hidden_only: false,
            symlinks_only: false,
            dirs_only: false,
            files_only: false,
            extension_allow: Vec::new(),
            extension_deny: Vec::new(),
            ignore: GlobSet::empty(),
            dir_icon_left: false,
            one_column: false,
            show_summary: false,
            recursive: false,
            max_depth: None,
            max_name_len: None,
            strict_ids: false,
            use_color: true,
            terminal_width: 80,
        }
    }
}

impl Config {
    /// Normalize implied flags and reject contradictory ones.
    pub fn validated(mut self) -> Result<Self, ListError> {
        if self.hidden_only {
            self.show_hidden = true;
        }

        self.extension_allow = normalize_extensions(self.extension_allow)?;
        self.extension_deny = normalize_extensions(self.extension_deny)?;

        if let Some(ext) = self
            .extension_allow
            .iter()
            .find(|ext| self.extension_deny.contains(ext))
        {
            return Err(ListError::InvalidConfiguration(format!(
                "extension '{ext}' is both allowed and denied"
            )));
        }

        if let Some(max) = self.max_name_len {
            if max < 2 {
                return Err(ListError::InvalidConfiguration(format!(
                    "maximum name length must be at least 2, got {max}"
                )));
            }
        }

        if self.terminal_width == 0 {
            self.terminal_width = 80;
        }

        Ok(self)
    }
}

/// Strip a leading dot and reject empty extensions.
fn normalize_extensions(exts: Vec<String>) -> Result<Vec<String>, ListError> {
    let mut out: Vec<String> = Vec::with_capacity(exts.len());
    for ext in exts {
        let trimmed = ext.trim().trim_start_matches('.');
        if trimmed.is_empty() {
            return Err(ListError::InvalidConfiguration(format!(
                "empty extension in filter list: '{ext}'"
            )));
        }
        if !out.iter().any(|e| e == trimmed) {
            out.push(trimmed.to_string());
        }
    }
    Ok(out)
}

/// Convert the command-line depth convention (-1 = unlimited) into `Option`.
pub fn depth_from_signed(depth: i64) -> Result<Option<usize>, ListError> {
    match depth {
        -1 => Ok(None),
        d if d < -1 => Err(ListError::InvalidConfiguration(format!(
            "depth must be -1 (unlimited) or a non-negative integer, got {d}"
        ))),
        d => Ok(Some(d as usize)),
    }
}

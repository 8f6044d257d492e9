//! Composable entry predicates.

use crate::config::Config;
use crate::entry::Entry;
use crate::error::ListError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;

/// Build a GlobSet from user ignore patterns. An invalid pattern is a
/// configuration error.
pub fn build_ignore_set(patterns: &[String]) -> Result<GlobSet, ListError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            ListError::InvalidConfiguration(format!("invalid ignore pattern '{pattern}': {e}"))
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| ListError::InvalidConfiguration(format!("failed to build ignore set: {e}")))
}

/// One predicate of the chain. Every variant is a pure `&Entry -> bool`.
#[derive(Debug, Clone)]
pub enum Filter {
    /// Drop dotfiles.
    HideDotfiles,
    /// Keep only dotfiles.
    OnlyDotfiles,
    /// Keep entries whose un-followed type is a symlink.
    OnlySymlinks,
    OnlyDirs,
    /// Keep everything that is not a directory.
    OnlyFiles,
    /// Keep files whose extension is listed. Directories always pass.
    AllowExtensions(Vec<String>),
    /// Drop files whose extension is listed. Directories always pass.
    DenyExtensions(Vec<String>),
    /// Drop entries whose name matches a glob.
    Ignore(GlobSet),
}

impl Filter {
    pub fn keeps(&self, entry: &Entry) -> bool {
        match self {
            Filter::HideDotfiles => !entry.is_hidden(),
            Filter::OnlyDotfiles => entry.is_hidden(),
            Filter::OnlySymlinks => entry.is_symlink(),
            Filter::OnlyDirs => entry.is_dir(),
            Filter::OnlyFiles => !entry.is_dir(),
            Filter::AllowExtensions(exts) => {
                entry.is_dir() || entry.extension().is_some_and(|ext| exts.iter().any(|e| e == ext))
            }
            Filter::DenyExtensions(exts) => {
                entry.is_dir() || !entry.extension().is_some_and(|ext| exts.iter().any(|e| e == ext))
            }
            Filter::Ignore(set) => !set.is_match(&entry.name),
        }
    }
}

/// AND-composition of the enabled filters.
#[derive(Debug, Clone, Default)]
pub struct FilterChain {
    stages: Vec<Filter>,
}

impl FilterChain {
    /// Build the chain a validated `Config` asks for.
    pub fn from_config(config: &Config) -> Self {
        let mut stages = Vec::new();

        if config.hidden_only {
            stages.push(Filter::OnlyDotfiles);
        } else if !config.show_hidden {
            stages.push(Filter::HideDotfiles);
        }
        if config.symlinks_only {
            stages.push(Filter::OnlySymlinks);
        }
        // dirs-only takes precedence when both are requested
        if config.dirs_only {
            stages.push(Filter::OnlyDirs);
        } else if config.files_only {
            stages.push(Filter::OnlyFiles);
        }
        if !config.extension_allow.is_empty() {
            stages.push(Filter::AllowExtensions(config.extension_allow.clone()));
        }
        if !config.extension_deny.is_empty() {
            stages.push(Filter::DenyExtensions(config.extension_deny.clone()));
        }
        if !config.ignore.is_empty() {
            stages.push(Filter::Ignore(config.ignore.clone()));
        }

        Self { stages }
    }

    pub fn keeps(&self, entry: &Entry) -> bool {
        self.stages.iter().all(|f| f.keeps(entry))
    }

    /// Borrow the entries that pass every stage, preserving order.
    pub fn apply<'a, I>(&self, entries: I) -> Vec<&'a Entry>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let kept: Vec<&Entry> = entries.into_iter().filter(|e| self.keeps(e)).collect();
        debug!(stages = self.stages.len(), kept = kept.len(), "applied filter chain");
        kept
    }
}

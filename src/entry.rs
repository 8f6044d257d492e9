//! Entry source: one directory (or one file) snapshotted into `Entry` values.

use crate::error::ListError;
use std::cell::OnceCell;
use std::fs;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Un-followed type of a directory member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
}

/// Metadata captured once at enumeration time (from `lstat`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMeta {
    pub size: u64,
    /// Raw `st_mode`, including file-type and setuid/setgid/sticky bits.
    pub mode: u32,
    pub modified: SystemTime,
    pub uid: u32,
    pub gid: u32,
}

impl From<&fs::Metadata> for EntryMeta {
    fn from(m: &fs::Metadata) -> Self {
        Self {
            size: m.size(),
            mode: m.mode(),
            modified: m.modified().unwrap_or(UNIX_EPOCH),
            uid: m.uid(),
            gid: m.gid(),
        }
    }
}

/// Where a symlink points, resolved on first use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// The target exists.
    Resolved { target: PathBuf, is_dir: bool },
    /// `readlink` worked but the target cannot be stat-ed.
    Dangling { target: PathBuf },
    /// `readlink` itself failed.
    Unreadable(String),
}

impl LinkTarget {
    pub fn points_to_dir(&self) -> bool {
        matches!(self, LinkTarget::Resolved { is_dir: true, .. })
    }
}

/// A single directory member.
#[derive(Debug, Clone)]
pub struct Entry {
    /// File name component only.
    pub name: String,
    /// Full filesystem path.
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Snapshot metadata, `None` when the stat failed.
    pub meta: Option<EntryMeta>,
    /// Why `meta` is missing.
    pub meta_error: Option<String>,
    target: OnceCell<LinkTarget>,
}

impl Entry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, kind: EntryKind, meta: Option<EntryMeta>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind,
            meta,
            meta_error: None,
            target: OnceCell::new(),
        }
    }

    fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        match fs::symlink_metadata(path) {
            Ok(m) => Self::new(name, path, kind_of(m.file_type()), Some(EntryMeta::from(&m))),
            Err(e) => Self::unavailable(name, path, EntryKind::Regular, &e),
        }
    }

    fn from_dir_entry(de: &walkdir::DirEntry) -> Self {
        let name = de.file_name().to_string_lossy().to_string();
        let kind = kind_of(de.file_type());
        match de.metadata() {
            Ok(m) => Self::new(name, de.path(), kind, Some(EntryMeta::from(&m))),
            Err(e) => {
                let e: io::Error = e.into();
                Self::unavailable(name, de.path(), kind, &e)
            }
        }
    }

    fn unavailable(name: String, path: &Path, kind: EntryKind, err: &io::Error) -> Self {
        debug!(path = %path.display(), error = %err, "metadata unavailable");
        let mut entry = Self::new(name, path, kind, None);
        entry.meta_error = Some(err.to_string());
        entry
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Suffix after the last `.`, if non-empty.
    pub fn extension(&self) -> Option<&str> {
        let idx = self.name.rfind('.')?;
        let ext = &self.name[idx + 1..];
        (!ext.is_empty()).then_some(ext)
    }

    pub fn is_executable(&self) -> bool {
        self.meta.is_some_and(|m| m.mode & 0o111 != 0)
    }

    /// Metadata, or `MetadataUnavailable` for callers that cannot skip.
    pub fn require_meta(&self) -> Result<&EntryMeta, ListError> {
        self.meta.as_ref().ok_or_else(|| ListError::MetadataUnavailable {
            path: self.path.clone(),
            source: io::Error::new(
                io::ErrorKind::Other,
                self.meta_error.clone().unwrap_or_else(|| "unknown error".to_string()),
            ),
        })
    }

    /// Resolved symlink target, computed on first call. `None` for non-links.
    pub fn link_target(&self) -> Option<&LinkTarget> {
        if !self.is_symlink() {
            return None;
        }
        Some(self.target.get_or_init(|| resolve_link(&self.path)))
    }
}

fn kind_of(ft: fs::FileType) -> EntryKind {
    if ft.is_symlink() {
        EntryKind::Symlink
    } else if ft.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::Regular
    }
}

fn resolve_link(path: &Path) -> LinkTarget {
    match fs::read_link(path) {
        Err(e) => LinkTarget::Unreadable(e.to_string()),
        Ok(target) => match fs::metadata(path) {
            Ok(m) => LinkTarget::Resolved {
                target,
                is_dir: m.is_dir(),
            },
            Err(_) => LinkTarget::Dangling { target },
        },
    }
}

/// Entries of one listing plus the directory they are rendered against.
#[derive(Debug)]
pub struct Listing {
    /// Directory containing the entries (the parent, for a single file).
    pub dir: PathBuf,
    pub entries: Vec<Entry>,
    /// The target was a file rather than a directory.
    pub single_file: bool,
}

/// Enumerate `path`: its direct children if it is a directory, or a single
/// synthetic entry if it is a file.
pub fn list(path: &Path) -> Result<Listing, ListError> {
    let followed = match fs::metadata(path) {
        Ok(m) => m,
        // A dangling link given directly is still listable as itself.
        Err(e) if e.kind() == io::ErrorKind::NotFound => match fs::symlink_metadata(path) {
            Ok(m) if m.file_type().is_symlink() => return Ok(single(path)),
            _ => return Err(ListError::from_io(path, e)),
        },
        Err(e) => return Err(ListError::from_io(path, e)),
    };

    if !followed.is_dir() {
        return Ok(single(path));
    }

    let entries = read_dir(path)?;
    Ok(Listing {
        dir: path.to_path_buf(),
        entries,
        single_file: false,
    })
}

fn single(path: &Path) -> Listing {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    debug!(path = %path.display(), "listing single file");
    Listing {
        dir,
        entries: vec![Entry::from_path(path)],
        single_file: true,
    }
}

/// Direct children of `dir` in file-name order.
pub fn read_dir(dir: &Path) -> Result<Vec<Entry>, ListError> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for item in walker {
        match item {
            Ok(de) => entries.push(Entry::from_dir_entry(&de)),
            Err(e) if e.depth() == 0 => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
                let io_err: io::Error = e.into();
                return Err(ListError::from_io(&path, io_err));
            }
            Err(e) => warn!(dir = %dir.display(), error = %e, "skipping unreadable entry"),
        }
    }
    debug!(dir = %dir.display(), count = entries.len(), "enumerated directory");
    Ok(entries)
}

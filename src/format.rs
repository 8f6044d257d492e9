//! Field formatting for the long and size layouts.

use crate::entry::EntryKind;
use crate::error::{IdKind, ListError};
use chrono::{DateTime, Local};
use std::time::SystemTime;
use tracing::debug;
use uzers::{Groups, Users, UsersCache};

const KB: u64 = 1 << 10;
const MB: u64 = 1 << 20;
const GB: u64 = 1 << 30;
const TB: u64 = 1 << 40;

/// Raw decimal bytes, or the largest power-of-1024 unit the size reaches,
/// with two decimals.
pub fn format_size(size: u64, human: bool) -> String {
    if !human {
        return size.to_string();
    }
    let scaled = |unit: u64, suffix: &str| format!("{:.2} {}", size as f64 / unit as f64, suffix);
    match size {
        s if s >= TB => scaled(TB, "TB"),
        s if s >= GB => scaled(GB, "GB"),
        s if s >= MB => scaled(MB, "MB"),
        s if s >= KB => scaled(KB, "KB"),
        s => format!("{s} B"),
    }
}

/// Ten-character `ls`-style mode string: type flag then three rwx triads.
pub fn permission_string(kind: EntryKind, mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(match kind {
        EntryKind::Directory => 'd',
        EntryKind::Symlink => 'l',
        EntryKind::Regular => '-',
    });
    triad(&mut out, mode >> 6, mode & 0o4000 != 0, 's');
    triad(&mut out, mode >> 3, mode & 0o2000 != 0, 's');
    triad(&mut out, mode, mode & 0o1000 != 0, 't');
    out
}

fn triad(out: &mut String, bits: u32, special: bool, special_char: char) {
    out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
    out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
    let exec = bits & 0o1 != 0;
    out.push(match (exec, special) {
        (true, false) => 'x',
        (false, false) => '-',
        (true, true) => special_char,
        (false, true) => special_char.to_ascii_uppercase(),
    });
}

/// Modification time split into the three long-format columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    /// Three-letter month.
    pub month: String,
    /// Day of month, space-padded to two columns.
    pub day: String,
    /// `HH:MM:SS YYYY`.
    pub time: String,
}

pub fn timestamp(t: SystemTime) -> Timestamp {
    let dt: DateTime<Local> = t.into();
    Timestamp {
        month: dt.format("%b").to_string(),
        day: dt.format("%e").to_string(),
        time: dt.format("%H:%M:%S %Y").to_string(),
    }
}

/// Owner/group name lookups, cached for the lifetime of one listing.
pub struct IdentityCache {
    strict: bool,
    cache: UsersCache,
}

impl IdentityCache {
    /// With `strict`, an unknown id is an error instead of its number.
    pub fn new(strict: bool) -> Self {
        Self {
            strict,
            cache: UsersCache::new(),
        }
    }

    pub fn user_name(&self, uid: u32) -> Result<String, ListError> {
        let name = self
            .cache
            .get_user_by_uid(uid)
            .map(|u| u.name().to_string_lossy().into_owned());
        finish(name, IdKind::User, uid, self.strict)
    }

    pub fn group_name(&self, gid: u32) -> Result<String, ListError> {
        let name = self
            .cache
            .get_group_by_gid(gid)
            .map(|g| g.name().to_string_lossy().into_owned());
        finish(name, IdKind::Group, gid, self.strict)
    }
}

fn finish(name: Option<String>, kind: IdKind, id: u32, strict: bool) -> Result<String, ListError> {
    match name {
        Some(name) => Ok(name),
        None if strict => Err(ListError::IdentityLookupFailed { kind, id }),
        None => {
            debug!(%kind, id, "unresolvable id, printing it raw");
            Ok(id.to_string())
        }
    }
}

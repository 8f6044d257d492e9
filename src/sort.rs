//! Stable ordering of filtered entries.

use crate::config::SortKey;
use crate::entry::Entry;
use tracing::debug;

/// Sort ascending by `key`. Equal keys keep their incoming order, and entries
/// without metadata sort before everything else.
pub fn sort_entries(entries: &mut [&Entry], key: SortKey) {
    match key {
        SortKey::None => return,
        SortKey::BySize => entries.sort_by_key(|e| e.meta.map(|m| m.size)),
        SortKey::ByTime => entries.sort_by_key(|e| e.meta.map(|m| m.modified)),
    }
    debug!(?key, count = entries.len(), "sorted entries");
}

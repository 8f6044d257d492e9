//! Long-format listing: permissions, size, owner, group, date, name.

use super::table::{Column, Table};
use crate::config::Config;
use crate::entry::{Entry, EntryMeta};
use crate::error::ListError;
use crate::format::{format_size, permission_string, timestamp, IdentityCache};
use crate::render::{error_marker, link_annotation, styled_name};
use crate::style::{Category, Resolvers, StyledText};
use std::io::Write;
use tracing::debug;

/// permissions, size, owner, group, month, day, time
const LONG_COLUMNS: [Column; 7] = [
    Column::left(2),
    Column::right(2),
    Column::left(2),
    Column::left(1),
    Column::left(1),
    Column::left(1),
    Column::left(1),
];

/// Color each permission character by its class.
pub fn colorize_permissions(perms: &str, resolvers: Resolvers<'_>) -> StyledText {
    let mut out = StyledText::new();
    for (i, c) in perms.chars().enumerate() {
        let category = match c {
            'd' if i == 0 => Category::PermDir,
            'l' if i == 0 => Category::PermSymlink,
            'r' => Category::PermRead,
            'w' => Category::PermWrite,
            'x' | 's' | 'S' | 't' | 'T' => Category::PermExec,
            _ => Category::PermNone,
        };
        out.push(c.to_string(), resolvers.color(category));
    }
    out
}

fn row_cells(
    entry: &Entry,
    meta: &EntryMeta,
    config: &Config,
    resolvers: Resolvers<'_>,
    ids: &IdentityCache,
) -> Result<Vec<StyledText>, ListError> {
    let perms = permission_string(entry.kind, meta.mode);
    let size = format_size(meta.size, config.human_readable);
    let owner = ids.user_name(meta.uid)?;
    let group = ids.group_name(meta.gid)?;
    let ts = timestamp(meta.modified);
    let date = resolvers.color(Category::Date);

    Ok(vec![
        colorize_permissions(&perms, resolvers),
        StyledText::colored(size, resolvers.color(Category::Size)),
        StyledText::colored(owner, resolvers.color(Category::Owner)),
        StyledText::colored(group, resolvers.color(Category::Group)),
        StyledText::colored(ts.month, date),
        StyledText::colored(ts.day, date),
        StyledText::colored(ts.time, date),
    ])
}

/// Build the aligned table for `entries`. Entries without metadata become
/// unaligned marker rows.
pub fn build_table(
    entries: &[&Entry],
    config: &Config,
    resolvers: Resolvers<'_>,
) -> Result<Table, ListError> {
    let ids = IdentityCache::new(config.strict_ids);
    let mut table = Table::new(LONG_COLUMNS.to_vec());

    for entry in entries {
        let Some(meta) = entry.meta.as_ref() else {
            let reason = entry.meta_error.as_deref().unwrap_or("unknown error");
            debug!(path = %entry.path.display(), reason, "long listing skips entry without metadata");
            table.push_raw(error_marker(
                &entry.name,
                &format!("metadata unavailable: {reason}"),
                resolvers,
            ));
            continue;
        };

        let cells = row_cells(entry, meta, config, resolvers, &ids)?;
        let mut trailing = styled_name(entry, None, true, resolvers);
        if let Some(target) = entry.link_target() {
            trailing.append(link_annotation(target, resolvers));
        }
        table.push_row(cells, trailing);
    }

    debug!(rows = table.len(), "built long-format table");
    Ok(table)
}

pub fn render<W: Write>(
    entries: &[&Entry],
    config: &Config,
    resolvers: Resolvers<'_>,
    out: &mut W,
) -> Result<(), ListError> {
    let table = build_table(entries, config, resolvers)?;
    for line in table.render() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

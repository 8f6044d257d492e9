//! Flat listing: right-aligned size column, then the rendered name.

use super::table::{Column, Table};
use crate::config::Config;
use crate::entry::Entry;
use crate::error::ListError;
use crate::format::format_size;
use crate::render::entry_name;
use crate::style::{Category, Resolvers, StyledText};
use std::io::Write;

pub fn build_table(entries: &[&Entry], config: &Config, resolvers: Resolvers<'_>) -> Table {
    let mut table = Table::new(vec![Column::right(2)]);
    for entry in entries {
        let size = entry
            .meta
            .map(|m| format_size(m.size, config.human_readable))
            .unwrap_or_else(|| "?".to_string());
        table.push_row(
            vec![StyledText::colored(size, resolvers.color(Category::Size))],
            entry_name(entry, config, resolvers),
        );
    }
    table
}

pub fn render<W: Write>(
    entries: &[&Entry],
    config: &Config,
    resolvers: Resolvers<'_>,
    out: &mut W,
) -> Result<(), ListError> {
    for line in build_table(entries, config, resolvers).render() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

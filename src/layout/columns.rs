//! Grid layout sized from the terminal width and the widest rendered name.

use crate::config::Config;
use crate::entry::Entry;
use crate::error::ListError;
use crate::render::entry_name;
use crate::style::{Resolvers, StyledText};
use std::io::Write;
use tracing::debug;

/// Number of grid columns for names at most `max_name_width` wide.
pub fn column_count(terminal_width: usize, max_name_width: usize) -> usize {
    (terminal_width / (max_name_width + 1)).max(1)
}

/// Lay `cells` out row-major. Every cell except the last of its row is padded
/// to `max width + 1` columns.
pub fn grid(cells: Vec<StyledText>, terminal_width: usize) -> Vec<StyledText> {
    let max_width = cells.iter().map(StyledText::width).max().unwrap_or(0);
    let cell_width = max_width + 1;
    let columns = column_count(terminal_width, max_width);
    debug!(max_width, columns, "computed grid");

    let mut lines = Vec::with_capacity(cells.len().div_ceil(columns));
    let mut iter = cells.into_iter().peekable();
    while iter.peek().is_some() {
        let mut line = StyledText::new();
        for col in 0..columns {
            let Some(mut cell) = iter.next() else { break };
            if col + 1 < columns && iter.peek().is_some() {
                cell.pad_to(cell_width);
            }
            line.append(cell);
        }
        lines.push(line);
    }
    lines
}

/// Grid (or one-per-line) listing of `entries`.
pub fn render<W: Write>(
    entries: &[&Entry],
    config: &Config,
    resolvers: Resolvers<'_>,
    out: &mut W,
) -> Result<(), ListError> {
    let cells: Vec<StyledText> = entries
        .iter()
        .map(|e| entry_name(e, config, resolvers))
        .collect();

    let lines = if config.one_column {
        cells
    } else {
        grid(cells, config.terminal_width)
    };

    for line in &lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

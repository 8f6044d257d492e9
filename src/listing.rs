//! Engine entry point: source -> filter -> sort -> layout -> summary.

use crate::config::Config;
use crate::entry;
use crate::error::ListError;
use crate::filter::FilterChain;
use crate::layout::{self, FlatLayout, Layout};
use crate::sort::sort_entries;
use crate::style::Resolvers;
use crate::summary::{self, summarize};
use crate::tree;
use std::io::Write;
use tracing::info;

/// Printed when nothing survives filtering.
pub const EMPTY_MESSAGE: &str = "No files found.";

/// Produce one complete listing for `config` on `out`.
pub fn run<W: Write>(config: &Config, resolvers: Resolvers<'_>, out: &mut W) -> Result<(), ListError> {
    let layout = Layout::for_config(config);
    info!(path = %config.target_path.display(), ?layout, "listing");

    match layout {
        Layout::Tree => {
            tree::print_tree(config, resolvers, out)?;
            Ok(())
        }
        Layout::Flat(flat) => run_flat(flat, config, resolvers, out),
    }
}

fn run_flat<W: Write>(
    layout: FlatLayout,
    config: &Config,
    resolvers: Resolvers<'_>,
    out: &mut W,
) -> Result<(), ListError> {
    let listing = entry::list(&config.target_path)?;
    // A file named on the command line is shown even if a filter would drop it.
    let mut entries = if listing.single_file {
        listing.entries.iter().collect()
    } else {
        FilterChain::from_config(config).apply(&listing.entries)
    };
    sort_entries(&mut entries, config.sort_key);

    if entries.is_empty() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
        return Ok(());
    }

    match layout {
        FlatLayout::Long => layout::long::render(&entries, config, resolvers, out)?,
        FlatLayout::Size => layout::size::render(&entries, config, resolvers, out)?,
        FlatLayout::Columns => layout::columns::render(&entries, config, resolvers, out)?,
    }

    if config.show_summary {
        summary::render(&summarize(entries.iter().copied()), resolvers, out)?;
    }
    Ok(())
}

//! Recursive tree listing.

mod layout;
pub(crate) mod walk;

use crate::config::Config;
use crate::error::ListError;
use crate::style::Resolvers;
use crate::summary::Summary;
use std::io::Write;

pub use layout::{branch, child_prefix, continuation};
pub use walk::TreeWalker;

/// Print the tree for `config.target_path` to `out` and return the counts of
/// everything shown.
pub fn print_tree<W: Write>(config: &Config, resolvers: Resolvers<'_>, out: &mut W) -> Result<Summary, ListError> {
    TreeWalker::new(config, resolvers, out).run()
}

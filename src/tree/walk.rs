use std::io::Write;
use std::path::Path;
use tracing::debug;

use super::layout::{branch, child_prefix};
use crate::config::Config;
use crate::entry::{self, Entry};
use crate::error::ListError;
use crate::filter::FilterChain;
use crate::render::{entry_name, link_annotation, sanitize_terminal_text};
use crate::sort::sort_entries;
use crate::style::{Category, Resolvers, StyledText};
use crate::summary::Summary;

/// Depth-first tree printer. Counts flow back through return values.
pub struct TreeWalker<'a, W: Write> {
    config: &'a Config,
    resolvers: Resolvers<'a>,
    chain: FilterChain,
    out: &'a mut W,
}

impl<'a, W: Write> TreeWalker<'a, W> {
    pub fn new(config: &'a Config, resolvers: Resolvers<'a>, out: &'a mut W) -> Self {
        Self {
            config,
            resolvers,
            chain: FilterChain::from_config(config),
            out,
        }
    }

    /// Print the tree under the configured target and return its counts.
    /// Failing to read the root is fatal; failures below it are printed inline.
    pub fn run(mut self) -> Result<Summary, ListError> {
        let listing = entry::list(&self.config.target_path)?;
        // A file named on the command line is shown even if a filter would drop it.
        let summary = if listing.single_file {
            self.print_level(listing.entries.iter().collect(), "", 0)?
        } else {
            self.walk_entries(&listing.entries, "", 0)?
        };
        if self.config.show_summary {
            crate::summary::render(&summary, self.resolvers, self.out)?;
        }
        Ok(summary)
    }

    fn beyond_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth > max)
    }

    fn walk(&mut self, dir: &Path, prefix: &str, depth: usize) -> Result<Summary, ListError> {
        if self.beyond_depth(depth) {
            return Ok(Summary::default());
        }
        let entries = entry::read_dir(dir)?;
        self.walk_entries(&entries, prefix, depth)
    }

    fn walk_entries(&mut self, entries: &[Entry], prefix: &str, depth: usize) -> Result<Summary, ListError> {
        let children = self.chain.apply(entries);
        self.print_level(children, prefix, depth)
    }

    fn print_level(&mut self, mut children: Vec<&Entry>, prefix: &str, depth: usize) -> Result<Summary, ListError> {
        sort_entries(&mut children, self.config.sort_key);

        let mut total = Summary::default();
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            let is_last = i + 1 == count;
            let name = entry_name(child, self.config, self.resolvers);
            self.write_line(prefix, branch(is_last), name)?;
            total.record(child);

            let next_prefix = child_prefix(prefix, is_last);
            if child.is_dir() {
                match self.walk(&child.path, &next_prefix, depth + 1) {
                    Ok(sub) => total += sub,
                    Err(e) if e.is_recoverable_in_subtree() => {
                        debug!(path = %child.path.display(), error = %e, "cannot read subdirectory");
                        let marker = StyledText::colored(
                            format!(
                                "[{}: {}]",
                                sanitize_terminal_text(&child.name),
                                sanitize_terminal_text(&e.reason())
                            ),
                            self.resolvers.color(Category::Error),
                        );
                        self.write_line(&next_prefix, branch(true), marker)?;
                    }
                    Err(e) => return Err(e),
                }
            } else if let Some(target) = child.link_target() {
                let arrow = link_annotation(target, self.resolvers);
                self.write_line(&next_prefix, "", arrow)?;
            }
        }
        debug!(depth, entries = count, "walked directory");
        Ok(total)
    }

    fn write_line(&mut self, prefix: &str, connector: &str, content: StyledText) -> Result<(), ListError> {
        let mut line = StyledText::colored(
            format!("{prefix}{connector}"),
            self.resolvers.color(Category::TreeBranch),
        );
        line.append(content);
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}

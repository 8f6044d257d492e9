//! Output layouts for a flat (non-recursive) listing.

pub mod columns;
pub mod long;
pub mod size;
pub mod table;

use crate::config::Config;

/// Which renderer a listing goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Tree,
    Flat(FlatLayout),
}

/// Renderers for a single directory level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatLayout {
    Long,
    Size,
    Columns,
}

impl Layout {
    /// Tree wins over long, long over size, size over the grid.
    pub fn for_config(config: &Config) -> Self {
        if config.recursive {
            Layout::Tree
        } else if config.long_format {
            Layout::Flat(FlatLayout::Long)
        } else if config.size_format {
            Layout::Flat(FlatLayout::Size)
        } else {
            Layout::Flat(FlatLayout::Columns)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config() -> Config {
        Config {
            target_path: PathBuf::from("."),
            ..Config::default()
        }
    }

    #[test]
    fn precedence_is_tree_long_size_columns() {
        let all = Config {
            recursive: true,
            long_format: true,
            size_format: true,
            ..config()
        };
        assert_eq!(Layout::for_config(&all), Layout::Tree);

        let flat = Config { recursive: false, ..all.clone() };
        assert_eq!(Layout::for_config(&flat), Layout::Flat(FlatLayout::Long));

        let size = Config { long_format: false, ..flat };
        assert_eq!(Layout::for_config(&size), Layout::Flat(FlatLayout::Size));

        assert_eq!(Layout::for_config(&config()), Layout::Flat(FlatLayout::Columns));
    }
}

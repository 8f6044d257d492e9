#![forbid(unsafe_code)]
//! iconls: a colorized, icon-annotated directory listing engine with grid,
//! long, size and tree layouts.

pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod filter;
pub mod format;
pub mod layout;
pub mod listing;
pub mod render;
pub mod sort;
pub mod style;
pub mod summary;
pub mod terminal;
pub mod tree;

pub use config::{Config, SortKey};
pub use error::ListError;
pub use listing::run;

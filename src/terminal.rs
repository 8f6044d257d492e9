//! Terminal queries and buffered output.

use crossterm::terminal;
use std::io::{self, Stdout};

/// Get the current terminal size, falling back to (80, 24) if unavailable.
pub fn terminal_size() -> (u16, u16) {
    terminal::size().unwrap_or((80, 24))
}

/// Width used by the column layout; never zero.
pub fn terminal_width() -> usize {
    match terminal_size() {
        (0, _) => 80,
        (w, _) => w as usize,
    }
}

/// Create a BufWriter wrapping stdout with a generous buffer.
pub fn buffered_stdout() -> io::BufWriter<Stdout> {
    io::BufWriter::with_capacity(64 * 1024, io::stdout())
}

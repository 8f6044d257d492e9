//! Box-drawing pieces of a tree line.

/// Connector drawn before an entry.
pub fn branch(is_last: bool) -> &'static str {
    if is_last {
        "\u{2514}\u{2500}\u{2500} " // └──
    } else {
        "\u{251c}\u{2500}\u{2500} " // ├──
    }
}

/// Column continued under an entry for its children.
pub fn continuation(is_last: bool) -> &'static str {
    if is_last {
        "    "
    } else {
        "\u{2502}   " // │
    }
}

/// Prefix handed to the children of an entry drawn with `prefix`.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    format!("{prefix}{}", continuation(is_last))
}

//! Icon and color lookup collaborators, and styled text with visual width.

use crossterm::style::{Color, Stylize};
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Semantic class of a piece of output that may be colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Directory,
    Executable,
    Symlink,
    SymlinkDir,
    BrokenSymlink,
    Error,
    PermRead,
    PermWrite,
    PermExec,
    PermDir,
    PermSymlink,
    PermNone,
    Size,
    Owner,
    Group,
    Date,
    LinkArrow,
    TreeBranch,
    SummaryDirs,
    SummaryFiles,
    SummaryLinks,
    SummaryTotal,
}

/// Maps semantic categories (and file extensions) to terminal colors.
pub trait ColorResolver {
    fn color(&self, category: Category) -> Option<Color>;

    /// Color for a regular file with this extension, if the table has one.
    fn extension_color(&self, _ext: &str) -> Option<Color> {
        None
    }
}

/// Maps names to glyphs. Every lookup is total.
pub trait IconResolver {
    /// Special file name first, then extension, then the default file glyph.
    fn file_icon(&self, name: &str) -> &str;
    /// Glyph for a directory by its base name.
    fn directory_icon(&self, dir_name: &str) -> &str;
    fn symlink_icon(&self, points_to_dir: bool) -> &str;
}

/// The pair of lookups every layout consults.
#[derive(Clone, Copy)]
pub struct Resolvers<'a> {
    pub icons: &'a dyn IconResolver,
    pub colors: &'a dyn ColorResolver,
}

impl Resolvers<'static> {
    /// Built-in tables; `NoColor` when color is disabled.
    pub fn defaults(use_color: bool) -> Self {
        let colors: &'static dyn ColorResolver = if use_color { &DefaultColors } else { &NoColor };
        Self {
            icons: &DefaultIcons,
            colors,
        }
    }
}

impl<'a> Resolvers<'a> {
    pub fn color(&self, category: Category) -> Option<Color> {
        self.colors.color(category)
    }
}

/// Resolver that never colors anything.
pub struct NoColor;

impl ColorResolver for NoColor {
    fn color(&self, _category: Category) -> Option<Color> {
        None
    }
}

/// Built-in palette.
pub struct DefaultColors;

const CATEGORY_COLORS: &[(Category, Color)] = &[
    (Category::Directory, Color::Blue),
    (Category::Executable, Color::Green),
    (Category::Symlink, Color::AnsiValue(51)),
    (Category::SymlinkDir, Color::AnsiValue(198)),
    (Category::BrokenSymlink, Color::Red),
    (Category::Error, Color::Red),
    (Category::PermRead, Color::Magenta),
    (Category::PermWrite, Color::AnsiValue(46)),
    (Category::PermExec, Color::Red),
    (Category::PermDir, Color::Blue),
    (Category::PermSymlink, Color::AnsiValue(51)),
    (Category::PermNone, Color::AnsiValue(250)),
    (Category::Size, Color::Yellow),
    (Category::Owner, Color::Cyan),
    (Category::Group, Color::AnsiValue(33)),
    (Category::Date, Color::Magenta),
    (Category::LinkArrow, Color::Cyan),
    (Category::TreeBranch, Color::DarkGrey),
    (Category::SummaryDirs, Color::Blue),
    (Category::SummaryFiles, Color::Red),
    (Category::SummaryLinks, Color::Cyan),
    (Category::SummaryTotal, Color::White),
];

const EXTENSION_COLORS: &[(&str, Color)] = &[
    ("go", Color::Cyan),
    ("mod", Color::Cyan),
    ("md", Color::Cyan),
    ("epub", Color::Cyan),
    ("cpp", Color::Blue),
    ("hpp", Color::Blue),
    ("cxx", Color::Blue),
    ("hxx", Color::Blue),
    ("css", Color::AnsiValue(12)),
    ("c", Color::AnsiValue(33)),
    ("h", Color::AnsiValue(33)),
    ("php", Color::AnsiValue(33)),
    ("lua", Color::AnsiValue(33)),
    ("sql", Color::AnsiValue(33)),
    ("mp3", Color::AnsiValue(33)),
    ("flac", Color::AnsiValue(33)),
    ("ogg", Color::AnsiValue(33)),
    ("cs", Color::AnsiValue(90)),
    ("mp4", Color::AnsiValue(90)),
    ("mkv", Color::AnsiValue(90)),
    ("webm", Color::AnsiValue(90)),
    ("png", Color::AnsiValue(18)),
    ("jpg", Color::AnsiValue(18)),
    ("jpeg", Color::AnsiValue(18)),
    ("webp", Color::AnsiValue(18)),
    ("gif", Color::Magenta),
    ("xml", Color::AnsiValue(14)),
    ("html", Color::AnsiValue(208)),
    ("htm", Color::AnsiValue(208)),
    ("java", Color::AnsiValue(208)),
    ("jar", Color::AnsiValue(208)),
    ("txt", Color::White),
    ("zip", Color::AnsiValue(183)),
    ("tar", Color::AnsiValue(183)),
    ("gz", Color::AnsiValue(183)),
    ("xz", Color::AnsiValue(183)),
    ("7z", Color::AnsiValue(183)),
    ("js", Color::Yellow),
    ("json", Color::AnsiValue(226)),
    ("py", Color::AnsiValue(172)),
    ("yml", Color::AnsiValue(196)),
    ("yaml", Color::AnsiValue(196)),
    ("pdf", Color::AnsiValue(196)),
    ("toml", Color::AnsiValue(208)),
    ("zig", Color::AnsiValue(208)),
    ("rb", Color::Red),
    ("pl", Color::Red),
    ("vim", Color::AnsiValue(22)),
    ("rs", Color::AnsiValue(173)),
    ("sh", Color::AnsiValue(46)),
];

impl ColorResolver for DefaultColors {
    fn color(&self, category: Category) -> Option<Color> {
        CATEGORY_COLORS
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, color)| *color)
    }

    fn extension_color(&self, ext: &str) -> Option<Color> {
        EXTENSION_COLORS
            .iter()
            .find(|(e, _)| *e == ext)
            .map(|(_, color)| *color)
    }
}

/// Built-in Nerd Font glyph tables.
pub struct DefaultIcons;

const DEFAULT_FILE_ICON: &str = "\u{f15b}";
const DEFAULT_DIR_ICON: &str = "\u{f07b}";
const SYMLINK_FILE_ICON: &str = "\u{f481}";
const SYMLINK_DIR_ICON: &str = "\u{f482}";

const SPECIAL_NAME_ICONS: &[(&str, &str)] = &[
    ("Makefile", "\u{e673}"),
    ("Dockerfile", "\u{f308}"),
    ("LICENSE", "\u{f0219}"),
    ("PKGBUILD", "\u{f08c7}"),
    (".gitconfig", "\u{e702}"),
    (".gitignore", "\u{e702}"),
    (".bashrc", "\u{f1183}"),
    (".zshrc", "\u{f1183}"),
    ("Cargo.toml", "\u{e7a8}"),
    ("Cargo.lock", "\u{e7a8}"),
];

const EXTENSION_ICONS: &[(&str, &str)] = &[
    ("go", "\u{e627}"),
    ("mod", "\u{e627}"),
    ("rs", "\u{e7a8}"),
    ("sh", "\u{f489}"),
    ("c", "\u{e61e}"),
    ("h", "\u{e61e}"),
    ("cpp", "\u{e61d}"),
    ("hpp", "\u{e61d}"),
    ("cs", "\u{f031b}"),
    ("css", "\u{e749}"),
    ("html", "\u{f13b}"),
    ("htm", "\u{f13b}"),
    ("js", "\u{e74e}"),
    ("json", "\u{e60b}"),
    ("py", "\u{e606}"),
    ("rb", "\u{e791}"),
    ("lua", "\u{e620}"),
    ("java", "\u{e738}"),
    ("md", "\u{f48a}"),
    ("txt", "\u{f15c}"),
    ("toml", "\u{e615}"),
    ("yml", "\u{e615}"),
    ("yaml", "\u{e615}"),
    ("xml", "\u{f05c0}"),
    ("png", "\u{f1c5}"),
    ("jpg", "\u{f1c5}"),
    ("jpeg", "\u{f1c5}"),
    ("gif", "\u{f1c5}"),
    ("webp", "\u{f1c5}"),
    ("mp3", "\u{f1c7}"),
    ("flac", "\u{f1c7}"),
    ("ogg", "\u{f1c7}"),
    ("mp4", "\u{f1c8}"),
    ("mkv", "\u{f1c8}"),
    ("zip", "\u{f410}"),
    ("tar", "\u{f410}"),
    ("gz", "\u{f410}"),
    ("xz", "\u{f410}"),
    ("7z", "\u{f410}"),
    ("pdf", "\u{f1c1}"),
    ("db", "\u{f1c0}"),
    ("sql", "\u{f1c0}"),
    ("lock", "\u{f023}"),
    ("vim", "\u{e62b}"),
];

const DIRECTORY_ICONS: &[(&str, &str)] = &[
    (".git", "\u{e5fb}"),
    (".config", "\u{e5fc}"),
    ("node_modules", "\u{e5fa}"),
    ("Desktop", "\u{f108}"),
    ("Documents", "\u{f0c82}"),
    ("Downloads", "\u{f024d}"),
    ("Music", "\u{f1359}"),
    ("Pictures", "\u{f024f}"),
    ("Videos", "\u{f03d}"),
];

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

impl IconResolver for DefaultIcons {
    fn file_icon(&self, name: &str) -> &str {
        if let Some(icon) = lookup(SPECIAL_NAME_ICONS, name) {
            return icon;
        }
        name.rfind('.')
            .and_then(|idx| lookup(EXTENSION_ICONS, &name[idx + 1..]))
            .unwrap_or(DEFAULT_FILE_ICON)
    }

    fn directory_icon(&self, dir_name: &str) -> &str {
        lookup(DIRECTORY_ICONS, dir_name).unwrap_or(DEFAULT_DIR_ICON)
    }

    fn symlink_icon(&self, points_to_dir: bool) -> &str {
        if points_to_dir {
            SYMLINK_DIR_ICON
        } else {
            SYMLINK_FILE_ICON
        }
    }
}

/// A run of text with one optional foreground color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub color: Option<Color>,
}

/// Colored text whose width is measured without escape bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    segments: Vec<Segment>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::colored(text, None)
    }

    pub fn colored(text: impl Into<String>, color: Option<Color>) -> Self {
        let mut out = Self::new();
        out.push(text, color);
        out
    }

    /// Append a segment. Empty text is ignored.
    pub fn push(&mut self, text: impl Into<String>, color: Option<Color>) -> &mut Self {
        let text = text.into();
        if !text.is_empty() {
            self.segments.push(Segment { text, color });
        }
        self
    }

    pub fn append(&mut self, other: StyledText) -> &mut Self {
        self.segments.extend(other.segments);
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Printable column count.
    pub fn width(&self) -> usize {
        self.segments.iter().map(|s| s.text.width()).sum()
    }

    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Right-pad with uncolored spaces up to `width` columns.
    pub fn pad_to(&mut self, width: usize) -> &mut Self {
        let current = self.width();
        if width > current {
            self.push(" ".repeat(width - current), None);
        }
        self
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in &self.segments {
            match seg.color {
                Some(color) => write!(f, "{}", seg.text.as_str().with(color))?,
                None => f.write_str(&seg.text)?,
            }
        }
        Ok(())
    }
}

/// Remove CSI escape sequences (`ESC [ ... final`) from `s`.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Printable width of an already-rendered string, escape bytes excluded.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

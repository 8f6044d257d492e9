use crate::config::{depth_from_signed, Config, SortKey};
use crate::error::ListError;
use crate::filter::build_ignore_set;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "iconls",
    version,
    about = "Colorized directory listing with file-type icons",
    disable_help_flag = true,
    after_help = "Examples:\n  iconls -l ~/src\n  iconls -r -d 2 .\n  iconls . '*.go'\n  iconls -lho -e rs,toml"
)]
pub struct Args {
    /// Directory or file to list (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Optional name pattern such as '*.go'; its extension is added to the allow-list
    pub pattern: Option<String>,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    pub help: Option<bool>,

    /// Long listing: permissions, size, owner, group, date
    #[arg(short = 'l', long = "long")]
    pub long_format: bool,

    /// Print sizes next to names
    #[arg(short = 's', long = "size")]
    pub size_format: bool,

    /// Human-readable sizes (KB, MB, GB, TB)
    #[arg(short = 'h', long = "human")]
    pub human_readable: bool,

    /// Sort by size, smallest first
    #[arg(short = 'o', long = "sort-size", conflicts_with = "sort_time")]
    pub sort_size: bool,

    /// Sort by modification time, oldest first
    #[arg(short = 't', long = "sort-time")]
    pub sort_time: bool,

    /// Show hidden files (dotfiles)
    #[arg(short = 'a', long = "all")]
    pub show_hidden: bool,

    /// Show only hidden files
    #[arg(short = 'A', long = "hidden-only")]
    pub hidden_only: bool,

    /// Show only symbolic links
    #[arg(short = 'm', long = "symlinks-only")]
    pub symlinks_only: bool,

    /// Show only directories
    #[arg(short = 'D', long = "dirs-only")]
    pub dirs_only: bool,

    /// Show only non-directories
    #[arg(short = 'F', long = "files-only")]
    pub files_only: bool,

    /// Only files with these extensions (repeatable, comma separated)
    #[arg(short = 'e', long = "ext", value_delimiter = ',', action = clap::ArgAction::Append)]
    pub extensions: Vec<String>,

    /// Hide files with these extensions (repeatable, comma separated)
    #[arg(short = 'x', long = "exclude-ext", value_delimiter = ',', action = clap::ArgAction::Append)]
    pub exclude_extensions: Vec<String>,

    /// Glob patterns to exclude (repeatable)
    #[arg(short = 'I', long = "ignore", action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Put directory icons left of the name
    #[arg(short = 'i', long = "icon-left")]
    pub dir_icon_left: bool,

    /// One entry per line
    #[arg(short = 'c', long = "one-column")]
    pub one_column: bool,

    /// Print a summary of files, directories and symlinks
    #[arg(short = 'f', long = "summary")]
    pub summary: bool,

    /// Recursive tree view
    #[arg(short = 'r', long = "tree")]
    pub recursive: bool,

    /// Max tree depth (-1 = unlimited)
    #[arg(short = 'd', long = "depth", default_value_t = -1, allow_negative_numbers = true)]
    pub depth: i64,

    /// Truncate names longer than N characters
    #[arg(short = 'w', long = "max-name")]
    pub max_name_len: Option<usize>,

    /// Fail instead of printing numeric ids when an owner or group is unknown
    #[arg(long = "strict-ids")]
    pub strict_ids: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        // Respect NO_COLOR env var
        if std::env::var_os("NO_COLOR").is_some() {
            self.no_color = true;
        }
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    /// Resolve the parsed flags into a validated listing `Config`.
    pub fn to_config(&self, terminal_width: usize) -> Result<Config, ListError> {
        let sort_key = if self.sort_size {
            SortKey::BySize
        } else if self.sort_time {
            SortKey::ByTime
        } else {
            SortKey::None
        };

        let mut extension_allow = self.extensions.clone();
        if let Some(pattern) = &self.pattern {
            extension_allow.push(pattern_extension(pattern)?);
        }

        Config {
            target_path: self.path.clone(),
            long_format: self.long_format,
            size_format: self.size_format,
            human_readable: self.human_readable,
            sort_key,
            show_hidden: self.show_hidden,
            hidden_only: self.hidden_only,
            symlinks_only: self.symlinks_only,
            dirs_only: self.dirs_only,
            files_only: self.files_only,
            extension_allow,
            extension_deny: self.exclude_extensions.clone(),
            ignore: build_ignore_set(&self.ignore)?,
            dir_icon_left: self.dir_icon_left,
            one_column: self.one_column,
            show_summary: self.summary,
            recursive: self.recursive,
            max_depth: depth_from_signed(self.depth)?,
            max_name_len: self.max_name_len,
            strict_ids: self.strict_ids,
            use_color: !self.no_color,
            terminal_width,
        }
        .validated()
    }
}

/// Extension carried by a name pattern such as `*.go`.
fn pattern_extension(pattern: &str) -> Result<String, ListError> {
    Path::new(pattern)
        .extension()
        .map(|ext| ext.to_string_lossy().to_string())
        .filter(|ext| !ext.is_empty() && !ext.contains('*'))
        .ok_or_else(|| ListError::InvalidConfiguration(format!("pattern '{pattern}' has no extension")))
}

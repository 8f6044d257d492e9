#![forbid(unsafe_code)]

use anyhow::Context;
use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use iconls::cli::Args;
use std::fs;
use std::path::PathBuf;

/// Write shell completions and the man page for `iconls`.
/// Usage: generate-assets [OUT_DIR]   (default: dist)
fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));
    let completions_dir = out_dir.join("completions");
    let man_dir = out_dir.join("man");

    fs::create_dir_all(&completions_dir)
        .with_context(|| format!("creating {}", completions_dir.display()))?;
    fs::create_dir_all(&man_dir).with_context(|| format!("creating {}", man_dir.display()))?;

    let mut cmd = Args::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
        generate_to(shell, &mut cmd, "iconls", &completions_dir)?;
    }

    let mut page = Vec::new();
    Man::new(Args::command()).render(&mut page)?;
    fs::write(man_dir.join("iconls.1"), page)?;

    eprintln!("iconls: wrote completions and man page to {}", out_dir.display());
    Ok(())
}

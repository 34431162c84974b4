mod output;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use retitle_core::{Mode, Rulebook};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "retitle",
    version,
    about = "Rewrite diary-style markdown frontmatter titles into task-oriented ones"
)]
struct Cli {
    /// Report what would change without writing any file.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Content root to scan for markdown documents.
    #[arg(env = "RETITLE_ROOT", default_value = "docs")]
    root: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!("retitle v{}", env!("CARGO_PKG_VERSION"));

    let mode = if cli.dry_run { Mode::DryRun } else { Mode::Apply };
    let book = Rulebook::new().context("building rewrite rules")?;
    let report = retitle_core::run(&book, &cli.root, mode)
        .with_context(|| format!("processing {}", cli.root.display()))?;

    output::write_report(&report, io::stdout().lock())?;
    output::log_summary(&report);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_apply_on_docs() {
        let cli = Cli::try_parse_from(["retitle"]).unwrap();
        assert!(!cli.dry_run);
        // RETITLE_ROOT may be set in the environment running the tests.
        if std::env::var_os("RETITLE_ROOT").is_none() {
            assert_eq!(cli.root, PathBuf::from("docs"));
        }
    }

    #[test]
    fn dry_run_and_positional_root() {
        let cli = Cli::try_parse_from(["retitle", "--dry-run", "site/content"]).unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.root, PathBuf::from("site/content"));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["retitle", "--force"]).is_err());
    }
}

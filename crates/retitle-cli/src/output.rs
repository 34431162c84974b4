//! Report rendering: JSON on stdout, a one-line summary in the log.

use std::io::Write;

use anyhow::{Context, Result};
use retitle_core::Report;
use tracing::info;

/// Write `report` as pretty JSON followed by a newline.
pub fn write_report(report: &Report, mut out: impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, report).context("serialising report")?;
    writeln!(out).context("writing report")?;
    Ok(())
}

/// Human-readable totals for the run.
pub fn summary(report: &Report) -> String {
    format!(
        "{}: scanned {}, changed {}, skipped {}, failed {}",
        report.mode.as_str(),
        report.scanned,
        report.changed,
        report.skipped,
        report.failed
    )
}

pub fn log_summary(report: &Report) {
    info!(
        mode = report.mode.as_str(),
        scanned = report.scanned,
        changed = report.changed,
        skipped = report.skipped,
        failed = report.failed,
        "{}",
        summary(report)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use retitle_core::{Mode, Rulebook, run};
    use std::fs;
    use tempfile::TempDir;

    fn sample_report() -> Report {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.md"), "---\ntitle: 关于 Go\n---\n").unwrap();
        fs::write(tmp.path().join("b.md"), "no frontmatter\n").unwrap();
        run(&Rulebook::new().unwrap(), tmp.path(), Mode::DryRun).unwrap()
    }

    #[test]
    fn json_report_shape() {
        let report = sample_report();
        let mut buf = Vec::new();
        write_report(&report, &mut buf).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["mode"], "dry-run");
        assert_eq!(json["scanned"], 2);
        assert_eq!(json["skipped"], 1);
        assert_eq!(json["failed"], 0);
        assert_eq!(json["changed"], 1);
        assert_eq!(json["changes"][0]["oldTitle"], "关于 Go");
        assert_eq!(
            json["changes"][0]["newTitle"],
            "Go 完整指南 - 全面了解核心功能与最佳实践"
        );
        assert!(buf.ends_with(b"\n"));
    }

    #[test]
    fn summary_line() {
        assert_eq!(
            summary(&sample_report()),
            "dry-run: scanned 2, changed 1, skipped 1, failed 0"
        );
    }
}

#![forbid(unsafe_code)]

//! Human-readable report
//!
//! Every section is written regardless of whether an earlier one failed, so a
//! single run shows both violations and stale baseline entries.

use crate::engine::{CheckReport, Violation};
use crate::types::{Language, RelPath};
use std::collections::BTreeSet;
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// Human-readable report formatter
pub struct HumanFormatter {
    marker: String,
    baseline_path: String,
}

impl HumanFormatter {
    /// Creates a formatter
    ///
    /// # Arguments
    /// * `marker` - Exemption marker quoted in the remediation hints
    /// * `baseline_path` - Baseline location as shown to the user
    pub fn new(marker: impl Into<String>, baseline_path: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            baseline_path: baseline_path.into().replace('\\', "/"),
        }
    }

    fn baseline_file_name(&self) -> &str {
        self.baseline_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.baseline_path)
    }

    /// Writes the line announcing which files are checked
    pub fn write_header(&self, out: &mut dyn WriteColor) -> io::Result<()> {
        let extensions = Language::all()
            .iter()
            .flat_map(|lang| lang.patterns())
            .map(|pattern| pattern.trim_start_matches('*'))
            .collect::<Vec<_>>()
            .join("/");
        writeln!(out, "🔍 Checking file size limits ({})...", extensions)
    }

    /// Writes the full report
    pub fn write_report(&self, report: &CheckReport, out: &mut dyn WriteColor) -> io::Result<()> {
        self.write_violations(&report.scan.violations, out)?;
        self.write_stale(report, out)?;

        writeln!(out)?;
        writeln!(
            out,
            "📊 Baseline exceptions: {} file(s)",
            report.scan.baseline_hits.len()
        )?;

        if report.passed() {
            colored_line(out, Color::Green, "🚀 File size check passed!")?;
        }
        Ok(())
    }

    fn write_violations(
        &self,
        violations: &[Violation],
        out: &mut dyn WriteColor,
    ) -> io::Result<()> {
        if violations.is_empty() {
            return colored_line(
                out,
                Color::Green,
                "✅ All files are within limits or have valid exceptions.",
            );
        }

        colored_line(out, Color::Red, "❌ Files exceeding line-count limit:")?;
        for violation in violations {
            writeln!(out, "  - {}", violation)?;
        }
        writeln!(out)?;
        writeln!(out, "To fix, either:")?;
        writeln!(out, "  1. Refactor the file to stay within the limit")?;
        writeln!(
            out,
            "  2. Add a // {}: <reason> comment to the file",
            self.marker
        )?;
        writeln!(out, "  3. Add the file path to {}", self.baseline_path)
    }

    fn write_stale(&self, report: &CheckReport, out: &mut dyn WriteColor) -> io::Result<()> {
        let stale = &report.stale;
        if stale.is_empty() {
            return Ok(());
        }

        colored_line(
            out,
            Color::Yellow,
            &format!(
                "⚠️  Stale baseline entries (remove from {}):",
                self.baseline_file_name()
            ),
        )?;
        write_entries(out, &stale.removed, "file no longer exists")?;
        write_entries(out, &stale.within_limit, "now within limit")?;
        write_entries(
            out,
            &stale.has_exemption,
            &format!("has {} comment", self.marker),
        )
    }
}

fn write_entries(
    out: &mut dyn WriteColor,
    entries: &BTreeSet<RelPath>,
    note: &str,
) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "  - {}  ({})", entry, note)?;
    }
    Ok(())
}

fn colored_line(out: &mut dyn WriteColor, color: Color, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", text)?;
    out.reset()?;
    writeln!(out)
}

//!
//! The persisted report file.
//!

use std::path::Path;

use crate::model::metadata::Metadata;
use crate::ranking::Ranking;
use crate::report::banner::WIDTH;
use crate::report::time;

///
/// The persisted report file, reduced to the ranked totals.
///
pub struct File<'a> {
    /// The report title.
    pub title: &'a str,
    /// The languages subtitle.
    pub subtitle: &'a str,
    /// The run metadata.
    pub metadata: &'a Metadata,
    /// The ranking.
    pub ranking: &'a Ranking,
}

impl File<'_> {
    ///
    /// Writes the file to `path`, overwriting any previous report.
    ///
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.to_string())
            .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))
    }
}

impl std::fmt::Display for File<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "=".repeat(WIDTH);
        let dashes = "-".repeat(WIDTH);

        writeln!(f, "{rule}")?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.subtitle)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Date: {}", self.metadata.date())?;
        writeln!(f, "Platform: {}", self.metadata.platform)?;
        writeln!(f)?;

        writeln!(f, "{dashes}")?;
        writeln!(f, "TOTAL TIMES (RANKED)")?;
        writeln!(f, "{dashes}")?;
        writeln!(f)?;

        for entry in self.ranking.entries().iter() {
            writeln!(
                f,
                "{}. {}: {}",
                entry.position,
                entry.language,
                time::format(Some(entry.total_ms))
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{rule}")
    }
}

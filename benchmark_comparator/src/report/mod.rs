//!
//! The comparison report.
//!


pub mod banner;
pub mod diagnostics;
pub mod file;
pub mod grid;
pub mod summary;
pub mod table;
pub mod time;

use std::path::Path;

use crate::grammar::Grammar;
use crate::model::metadata::Metadata;
use crate::model::result::LanguageResult;
use crate::ranking::Ranking;

use self::banner::Banner;
use self::diagnostics::Diagnostics;
use self::file::File;
use self::grid::Grid;
use self::summary::Summary;
use self::table::Table;

///
/// The comparison report.
///
/// Rendering is a pure function of its inputs, so rendering the same
/// results twice yields identical text.
///
pub struct Report<'a> {
    /// All languages in enumeration order, including the failed ones.
    results: &'a [LanguageResult],
    /// The recognized tests.
    grammar: &'a Grammar,
    /// The ranking of `results`.
    ranking: &'a Ranking,
    /// The run metadata.
    metadata: &'a Metadata,
    /// The language whose standing is summarized.
    subject: &'a str,
    /// The language the subject is compared against.
    baseline: &'a str,
    /// The languages subtitle, e.g. `C vs Python`.
    subtitle: String,
}

impl<'a> Report<'a> {
    /// The report title.
    pub const TITLE: &'static str = "MULTI-LANGUAGE PERFORMANCE COMPARISON";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        results: &'a [LanguageResult],
        grammar: &'a Grammar,
        ranking: &'a Ranking,
        metadata: &'a Metadata,
        subject: &'a str,
        baseline: &'a str,
    ) -> Self {
        let subtitle = results
            .iter()
            .map(|result| result.language())
            .collect::<Vec<&str>>()
            .join(" vs ");

        Self {
            results,
            grammar,
            ranking,
            metadata,
            subject,
            baseline,
            subtitle,
        }
    }

    ///
    /// Renders the full console report.
    ///
    pub fn console(&self) -> String {
        let grid = Grid {
            results: self.results,
            grammar: self.grammar,
        };
        let table = Table {
            ranking: self.ranking,
        };
        let summary = Summary {
            ranking: self.ranking,
            subject: self.subject,
            baseline: self.baseline,
        };
        let diagnostics = Diagnostics {
            results: self.results,
            grammar: self.grammar,
        };
        let diagnostics = if diagnostics.is_empty() {
            String::new()
        } else {
            format!("{}\n{diagnostics}\n", Banner("DIAGNOSTICS"))
        };

        format!(
            "{}{}\nDate: {}\nPlatform: {}\n\n{}\n{grid}\n{}\n{table}\n{}\n{summary}\n{diagnostics}{}\n",
            Banner(Self::TITLE),
            self.subtitle,
            self.metadata.date(),
            self.metadata.platform,
            Banner("DETAILED RESULTS"),
            Banner("TOTAL TIME COMPARISON"),
            Banner("SUMMARY"),
            "=".repeat(banner::WIDTH),
        )
    }

    ///
    /// Renders the persisted report file.
    ///
    pub fn file(&self) -> File<'_> {
        File {
            title: Self::TITLE,
            subtitle: self.subtitle.as_str(),
            metadata: self.metadata,
            ranking: self.ranking,
        }
    }

    ///
    /// Writes the persisted report file to `path`.
    ///
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        self.file().write_to_file(path)
    }
}

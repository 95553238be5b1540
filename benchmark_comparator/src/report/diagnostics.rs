//!
//! The per-language diagnostics.
//!

use crate::grammar::Grammar;
use crate::model::result::LanguageResult;

///
/// The per-language diagnostics: failed executions and unreported tests.
///
pub struct Diagnostics<'a> {
    /// All languages, including the failed ones.
    pub results: &'a [LanguageResult],
    /// The recognized tests.
    pub grammar: &'a Grammar,
}

impl Diagnostics<'_> {
    ///
    /// Whether there is nothing to report.
    ///
    pub fn is_empty(&self) -> bool {
        self.results.iter().all(|result| {
            result.error().is_none() && result.missing_tests(self.grammar).is_empty()
        })
    }
}

impl std::fmt::Display for Diagnostics<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for result in self.results.iter() {
            if let Some(error) = result.error() {
                let mut lines = error.lines();
                writeln!(
                    f,
                    "  {}: skipped, {}",
                    result.language(),
                    lines.next().unwrap_or_default()
                )?;
                for line in lines {
                    writeln!(f, "      {line}")?;
                }
                continue;
            }

            let missing = result.missing_tests(self.grammar);
            if !missing.is_empty() {
                writeln!(
                    f,
                    "  {}: not reported: {}",
                    result.language(),
                    missing
                        .iter()
                        .map(|test| test.label.as_str())
                        .collect::<Vec<&str>>()
                        .join(", ")
                )?;
            }
        }

        Ok(())
    }
}

//!
//! The per-test comparison grid.
//!

use crate::grammar::Grammar;
use crate::model::result::LanguageResult;
use crate::report::time;

///
/// The per-test comparison grid.
///
/// One row per test in declaration order, one column per language in
/// enumeration order. Failed languages show `N/A` in every cell.
///
pub struct Grid<'a> {
    /// All languages, including the failed ones.
    pub results: &'a [LanguageResult],
    /// The recognized tests.
    pub grammar: &'a Grammar,
}

impl Grid<'_> {
    /// The test label column width.
    pub const LABEL_WIDTH: usize = 20;

    /// The language column width.
    pub const CELL_WIDTH: usize = 14;
}

impl std::fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut header = format!("  {:<width$}", "Test", width = Self::LABEL_WIDTH);
        for result in self.results.iter() {
            header.push_str(
                format!(" {:<width$}", result.language(), width = Self::CELL_WIDTH).as_str(),
            );
        }
        writeln!(f, "{}", header.trim_end())?;
        writeln!(
            f,
            "  {}",
            "-".repeat(Self::LABEL_WIDTH + (Self::CELL_WIDTH + 1) * self.results.len())
        )?;

        for test in self.grammar.tests().iter() {
            let mut row = format!("  {:<width$}", test.label, width = Self::LABEL_WIDTH);
            for result in self.results.iter() {
                let cell = time::format(result.measurement(test.id.as_str()));
                row.push_str(format!(" {cell:<width$}", width = Self::CELL_WIDTH).as_str());
            }
            writeln!(f, "{}", row.trim_end())?;
        }

        Ok(())
    }
}

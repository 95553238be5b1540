//!
//! The measurement grammar.
//!
//! The grammar is the single source of truth for what the output parser
//! recognizes. Adding a sub-benchmark is a one-line addition to the table.
//!

pub mod error;
pub mod table;
pub mod test_case;

use std::collections::BTreeSet;

use regex::Regex;

use self::error::Error;
use self::table::Table;
use self::test_case::TestCase;

///
/// The measurement grammar.
///
#[derive(Debug, Clone)]
pub struct Grammar {
    /// The recognized tests, in declaration order.
    tests: Vec<TestCase>,
    /// The explicit total pattern.
    total: Regex,
}

impl Grammar {
    /// The table compiled into the binary.
    pub const EMBEDDED_TABLE: &'static str = include_str!("default.json");

    /// The measurement tail appended to every marker.
    pub const MEASUREMENT_PATTERN: &'static str =
        r"\s*(?P<value>[-+]?[0-9.]+(?:[eE][-+]?[0-9]+)?)\s*(?P<unit>ms|µs|μs|us|ns|s)\b";

    /// The value capture group name.
    pub const GROUP_VALUE: &'static str = "value";

    /// The unit capture group name.
    pub const GROUP_UNIT: &'static str = "unit";

    /// The identifier used for the total pattern in errors.
    pub const TOTAL_IDENTIFIER: &'static str = "total";

    ///
    /// Compiles and validates the grammar table.
    ///
    pub fn new(table: Table) -> Result<Self, Error> {
        if table.tests.is_empty() {
            return Err(Error::Empty);
        }

        let mut identifiers = BTreeSet::new();
        let mut tests = Vec::with_capacity(table.tests.len());
        for (index, entry) in table.tests.into_iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(Error::EmptyIdentifier { index });
            }
            if !identifiers.insert(entry.id.clone()) {
                return Err(Error::DuplicateIdentifier { id: entry.id });
            }

            let pattern = Self::compile(entry.id.as_str(), entry.marker.as_str())?;
            tests.push(TestCase::new(entry.id, entry.label, pattern));
        }

        let total = Self::compile(Self::TOTAL_IDENTIFIER, table.total.as_str())?;

        Ok(Self { tests, total })
    }

    ///
    /// Loads the table compiled into the binary.
    ///
    pub fn embedded() -> Result<Self, Error> {
        Self::try_from(Self::EMBEDDED_TABLE)
    }

    ///
    /// The recognized tests, in declaration order.
    ///
    pub fn tests(&self) -> &[TestCase] {
        self.tests.as_slice()
    }

    ///
    /// The explicit total pattern.
    ///
    pub fn total(&self) -> &Regex {
        &self.total
    }

    ///
    /// Returns the display name of the test `id`, if declared.
    ///
    pub fn label(&self, id: &str) -> Option<&str> {
        self.tests
            .iter()
            .find(|test| test.id == id)
            .map(|test| test.label.as_str())
    }

    ///
    /// Compiles a marker into a case-insensitive, multi-line tolerant pattern.
    ///
    fn compile(id: &str, marker: &str) -> Result<Regex, Error> {
        Regex::new(format!("(?is){marker}{}", Self::MEASUREMENT_PATTERN).as_str()).map_err(
            |error| Error::Pattern {
                id: id.to_owned(),
                error,
            },
        )
    }
}

impl TryFrom<&str> for Grammar {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let table = Table::try_from(text)?;
        Self::new(table)
    }
}

#[cfg(test)]
mod tests {
    use super::error::Error;
    use super::table::Entry;
    use super::table::Table;
    use super::Grammar;

    #[test]
    fn embedded_table_is_valid() {
        let grammar = Grammar::embedded().expect("Always valid");
        assert_eq!(grammar.tests().len(), 12);
        assert_eq!(grammar.tests()[0].id, "fibonacci");
        assert_eq!(grammar.label("tak"), Some("Tak(18,12,6)"));
        assert_eq!(grammar.label("unknown"), None);
    }

    #[test]
    fn declaration_order_is_kept() {
        let grammar = Grammar::new(Table {
            tests: vec![
                Entry::new("b", "B", "B:"),
                Entry::new("a", "A", "A:"),
            ],
            total: "Total:".to_owned(),
        })
        .expect("Always valid");
        let ids: Vec<&str> = grammar.tests().iter().map(|test| test.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn error_empty() {
        let result = Grammar::new(Table {
            tests: vec![],
            total: "Total:".to_owned(),
        });
        assert!(matches!(result, Err(Error::Empty)));
    }

    #[test]
    fn error_duplicate_identifier() {
        let result = Grammar::new(Table {
            tests: vec![Entry::new("a", "A", "A:"), Entry::new("a", "A2", "A2:")],
            total: "Total:".to_owned(),
        });
        assert!(matches!(result, Err(Error::DuplicateIdentifier { id }) if id == "a"));
    }

    #[test]
    fn error_empty_identifier() {
        let result = Grammar::new(Table {
            tests: vec![Entry::new("a", "A", "A:"), Entry::new(" ", "B", "B:")],
            total: "Total:".to_owned(),
        });
        assert!(matches!(result, Err(Error::EmptyIdentifier { index: 1 })));
    }

    #[test]
    fn error_invalid_pattern() {
        let result = Grammar::new(Table {
            tests: vec![Entry::new("a", "A", "A:(")],
            total: "Total:".to_owned(),
        });
        assert!(matches!(result, Err(Error::Pattern { id, .. }) if id == "a"));
    }

    #[test]
    fn error_invalid_total_pattern() {
        let result = Grammar::new(Table {
            tests: vec![Entry::new("a", "A", "A:")],
            total: "Total:[".to_owned(),
        });
        assert!(matches!(result, Err(Error::Pattern { id, .. }) if id == "total"));
    }

    #[test]
    fn error_invalid_json() {
        let result = Grammar::try_from("{ \"tests\": 5 }");
        assert!(matches!(result, Err(Error::Table(_))));
    }
}

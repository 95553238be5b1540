//!
//! A recognized sub-benchmark.
//!

use regex::Regex;

///
/// A recognized sub-benchmark.
///
#[derive(Debug, Clone)]
pub struct TestCase {
    /// The identifier, unique within the grammar.
    pub id: String,
    /// The display name used in reports.
    pub label: String,
    /// The compiled pattern with `value` and `unit` capture groups.
    pub pattern: Regex,
}

impl TestCase {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(id: String, label: String, pattern: Regex) -> Self {
        Self { id, label, pattern }
    }
}

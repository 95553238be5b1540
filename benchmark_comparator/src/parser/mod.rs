//!
//! The benchmark output parser.
//!


use std::collections::BTreeMap;

use regex::Regex;

use crate::grammar::Grammar;
use crate::unit::Unit;

///
/// The measurements extracted from one program output.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedOutput {
    /// The measured tests in milliseconds. Unmatched tests are absent.
    pub measurements: BTreeMap<String, f64>,
    /// The explicitly reported total in milliseconds, if matched.
    pub total: Option<f64>,
}

impl ParsedOutput {
    ///
    /// Extracts every measurement `grammar` recognizes from `text`.
    ///
    /// Each test is searched for independently in the whole text, so a
    /// missing or malformed entry never affects the others.
    ///
    pub fn parse(text: &str, grammar: &Grammar) -> Self {
        let measurements = grammar
            .tests()
            .iter()
            .filter_map(|test| {
                Self::capture(&test.pattern, text).map(|value| (test.id.clone(), value))
            })
            .collect();
        let total = Self::capture(grammar.total(), text);

        Self {
            measurements,
            total,
        }
    }

    ///
    /// Whether nothing at all was recognized.
    ///
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty() && self.total.is_none()
    }

    ///
    /// Returns the first match of `pattern` normalized to milliseconds.
    ///
    fn capture(pattern: &Regex, text: &str) -> Option<f64> {
        let captures = pattern.captures(text)?;
        let value = captures
            .name(Grammar::GROUP_VALUE)?
            .as_str()
            .parse::<f64>()
            .ok()?;
        let unit = captures
            .name(Grammar::GROUP_UNIT)?
            .as_str()
            .parse::<Unit>()
            .ok()?;

        let milliseconds = unit.to_milliseconds(value);
        (milliseconds.is_finite() && milliseconds >= 0.0).then_some(milliseconds)
    }
}

//!
//! The aggregated result of one language.
//!

use std::collections::BTreeMap;

use crate::grammar::test_case::TestCase;
use crate::grammar::Grammar;
use crate::model::execution::RawExecution;
use crate::parser::ParsedOutput;

///
/// The aggregated result of one language.
///
/// Once aggregated, a result is never modified. A new run builds new results.
///
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageResult {
    /// The language name.
    language: String,
    /// The measured tests in milliseconds. Unmatched tests are absent.
    measurements: BTreeMap<String, f64>,
    /// The total in milliseconds.
    total_ms: Option<f64>,
    /// The diagnostic of a failed execution.
    error: Option<String>,
}

impl LanguageResult {
    ///
    /// Aggregates a raw execution, parsing its output if it completed.
    ///
    pub fn from_execution(execution: RawExecution, grammar: &Grammar) -> Self {
        let RawExecution {
            language,
            output,
            status,
        } = execution;

        if !status.is_ok() {
            return Self::failed(language, status.to_string());
        }

        Self::from_parsed(language, ParsedOutput::parse(output.as_str(), grammar))
    }

    ///
    /// Aggregates parsed measurements.
    ///
    /// The explicit total wins even if it disagrees with the measurements.
    /// Otherwise the total is the sum of the measurements that are present,
    /// so several unmatched markers understate it.
    ///
    pub fn from_parsed(language: String, parsed: ParsedOutput) -> Self {
        let ParsedOutput {
            measurements,
            total,
        } = parsed;

        let total_ms = match total {
            Some(total) => Some(total),
            None if measurements.is_empty() => None,
            None => Some(measurements.values().sum()),
        };

        Self {
            language,
            measurements,
            total_ms,
            error: None,
        }
    }

    ///
    /// A shortcut constructor for a language whose execution failed.
    ///
    pub fn failed(language: String, error: String) -> Self {
        Self {
            language,
            measurements: BTreeMap::new(),
            total_ms: None,
            error: Some(error),
        }
    }

    ///
    /// The language name.
    ///
    pub fn language(&self) -> &str {
        self.language.as_str()
    }

    ///
    /// The measured tests in milliseconds.
    ///
    pub fn measurements(&self) -> &BTreeMap<String, f64> {
        &self.measurements
    }

    ///
    /// The measurement of test `id` in milliseconds, if present.
    ///
    pub fn measurement(&self, id: &str) -> Option<f64> {
        self.measurements.get(id).copied()
    }

    ///
    /// The total in milliseconds.
    ///
    pub fn total_ms(&self) -> Option<f64> {
        self.total_ms
    }

    ///
    /// The diagnostic of a failed execution.
    ///
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    ///
    /// Whether the language takes part in the ranking.
    ///
    pub fn is_ranked(&self) -> bool {
        matches!(self.total_ms, Some(total) if total > 0.0)
    }

    ///
    /// The tests of `grammar` the output did not report.
    ///
    /// Failed executions report nothing, but their error already says why,
    /// so only completed executions list missing tests.
    ///
    pub fn missing_tests<'a>(&self, grammar: &'a Grammar) -> Vec<&'a TestCase> {
        if self.error.is_some() {
            return vec![];
        }

        grammar
            .tests()
            .iter()
            .filter(|test| !self.measurements.contains_key(test.id.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::PathBuf;
    use std::time::Duration;

    use crate::grammar::Grammar;
    use crate::model::execution::status::Status;
    use crate::model::execution::RawExecution;
    use crate::parser::ParsedOutput;

    use super::LanguageResult;

    fn parsed(measurements: &[(&str, f64)], total: Option<f64>) -> ParsedOutput {
        ParsedOutput {
            measurements: measurements
                .iter()
                .map(|(id, value)| (id.to_string(), *value))
                .collect::<BTreeMap<String, f64>>(),
            total,
        }
    }

    #[test]
    fn fallback_total_is_sum_of_present() {
        let result =
            LanguageResult::from_parsed("C".to_owned(), parsed(&[("a", 2.0), ("b", 3.5)], None));

        assert_eq!(result.total_ms(), Some(5.5));
        assert!(result.is_ranked());
        assert_eq!(result.error(), None);
    }

    #[test]
    fn explicit_total_wins() {
        let result = LanguageResult::from_parsed(
            "C".to_owned(),
            parsed(&[("a", 2.0), ("b", 3.5)], Some(100.0)),
        );

        assert_eq!(result.total_ms(), Some(100.0));
    }

    #[test]
    fn explicit_total_without_measurements() {
        let result = LanguageResult::from_parsed("C".to_owned(), parsed(&[], Some(7.0)));

        assert_eq!(result.total_ms(), Some(7.0));
        assert!(result.measurements().is_empty());
    }

    #[test]
    fn nothing_recognized() {
        let result = LanguageResult::from_parsed("C".to_owned(), parsed(&[], None));

        assert_eq!(result.total_ms(), None);
        assert!(!result.is_ranked());
        assert_eq!(result.error(), None);
    }

    #[test]
    fn zero_total_is_not_ranked() {
        let result = LanguageResult::from_parsed("C".to_owned(), parsed(&[("a", 0.0)], None));

        assert_eq!(result.total_ms(), Some(0.0));
        assert!(!result.is_ranked());
    }

    #[test]
    fn timeout_scenario() {
        let grammar = Grammar::embedded().expect("Always valid");
        let execution = RawExecution::failed(
            "PHP".to_owned(),
            Status::Timeout(Duration::from_secs(300)),
        );

        let result = LanguageResult::from_execution(execution, &grammar);

        assert!(result.measurements().is_empty());
        assert_eq!(result.total_ms(), None);
        assert!(!result.is_ranked());
        assert_eq!(result.error(), Some("timed out after 300s"));
        assert!(result.missing_tests(&grammar).is_empty());
    }

    #[test]
    fn failed_status_ignores_output() {
        let grammar = Grammar::embedded().expect("Always valid");
        let execution = RawExecution::new(
            "C".to_owned(),
            "Test 1: x\n  Sure: 2.0 ms\n".to_owned(),
            Status::RuntimeFailure("exit status: 139".to_owned()),
        );

        let result = LanguageResult::from_execution(execution, &grammar);

        assert!(result.measurements().is_empty());
        assert_eq!(result.error(), Some("runtime failure: exit status: 139"));
    }

    #[test]
    fn not_found_keeps_diagnostic() {
        let grammar = Grammar::embedded().expect("Always valid");
        let execution = RawExecution::failed(
            "Tulpar".to_owned(),
            Status::NotFound(PathBuf::from("./tulpar")),
        );

        let result = LanguageResult::from_execution(execution, &grammar);

        assert_eq!(result.error(), Some(r#""./tulpar" not found"#));
    }

    #[test]
    fn completed_execution_is_parsed() {
        let grammar = Grammar::embedded().expect("Always valid");
        let execution = RawExecution::ok(
            "JavaScript".to_owned(),
            "Test 1: x\n  Sure: 2.0 ms\nTest 2: y\n  Sure: 500 us\n".to_owned(),
        );

        let result = LanguageResult::from_execution(execution, &grammar);

        assert_eq!(result.measurement("fibonacci"), Some(2.0));
        assert_eq!(result.measurement("factorial"), Some(0.5));
        assert_eq!(result.measurement("loop"), None);
        assert_eq!(result.total_ms(), Some(2.5));

        let missing: Vec<&str> = result
            .missing_tests(&grammar)
            .into_iter()
            .map(|test| test.id.as_str())
            .collect();
        assert_eq!(missing.len(), grammar.tests().len() - 2);
        assert!(!missing.contains(&"fibonacci"));
        assert!(missing.contains(&"loop"));
    }
}

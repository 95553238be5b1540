//!
//! The comparison session.
//!

use std::time::Instant;

use chrono::Local;
use colored::Colorize;

use crate::grammar::Grammar;
use crate::model::execution::RawExecution;
use crate::model::metadata::Metadata;
use crate::model::result::LanguageResult;
use crate::runner::Runner;
use crate::settings::Settings;

///
/// The results of a comparison session.
///
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Information associated with the run.
    pub metadata: Metadata,
    /// The aggregated results, in language enumeration order.
    pub results: Vec<LanguageResult>,
}

///
/// The comparison session.
///
/// Executes every language strictly one after another and aggregates each
/// output right after its execution.
///
#[derive(Debug, Clone)]
pub struct Session {
    /// The fixed settings.
    settings: Settings,
    /// The measurement grammar.
    grammar: Grammar,
    /// The benchmark program runner.
    runner: Runner,
}

impl Session {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(settings: Settings, grammar: Grammar) -> Self {
        let runner = Runner::new(&settings);
        Self {
            settings,
            grammar,
            runner,
        }
    }

    ///
    /// Runs every language and aggregates the results.
    ///
    /// A failure of one language never aborts the session.
    ///
    pub fn run(&self) -> Outcome {
        let start = Local::now();
        let mut results = Vec::with_capacity(self.settings.languages.len());

        for language in self.settings.languages.iter() {
            println!(
                "     {} {} benchmark",
                "Running".bright_green().bold(),
                language,
            );

            let run_time_start = Instant::now();
            let execution = self.runner.run(language);
            let result = self.aggregate(execution, run_time_start);
            results.push(result);
        }

        let metadata = Metadata::new(start, Local::now(), Metadata::host_platform());
        Outcome { metadata, results }
    }

    ///
    /// The fixed settings.
    ///
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    ///
    /// The measurement grammar.
    ///
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    ///
    /// Aggregates one execution and reports its status.
    ///
    fn aggregate(&self, execution: RawExecution, run_time_start: Instant) -> LanguageResult {
        let result = LanguageResult::from_execution(execution, &self.grammar);

        if let Some(error) = result.error() {
            println!(
                "     {} {}: {}",
                "Skipped".bright_yellow().bold(),
                result.language(),
                error.lines().next().unwrap_or_default(),
            );
            return result;
        }

        println!(
            "    {} {} in {}.{:03}s",
            "Finished".bright_green().bold(),
            result.language(),
            run_time_start.elapsed().as_secs(),
            run_time_start.elapsed().subsec_millis(),
        );

        let missing = result.missing_tests(&self.grammar);
        if !missing.is_empty() {
            println!(
                "     {} {} did not report {} of {} tests",
                "Warning".bright_yellow().bold(),
                result.language(),
                missing.len(),
                self.grammar.tests().len(),
            );
        }

        result
    }
}

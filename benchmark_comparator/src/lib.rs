//!
//! The benchmark comparator library.
//!

pub mod grammar;
pub mod model;
pub mod parser;
pub mod ranking;
pub mod report;
pub mod runner;
pub mod session;
pub mod settings;
pub mod unit;

pub use crate::grammar::error::Error as GrammarError;
pub use crate::grammar::table::Entry as GrammarEntry;
pub use crate::grammar::table::Table as GrammarTable;
pub use crate::grammar::test_case::TestCase;
pub use crate::grammar::Grammar;
pub use crate::model::execution::status::Status as ExecutionStatus;
pub use crate::model::execution::RawExecution;
pub use crate::model::language::Language;
pub use crate::model::language::Toolchain;
pub use crate::model::metadata::Metadata as RunMetadata;
pub use crate::model::result::LanguageResult;
pub use crate::parser::ParsedOutput;
pub use crate::ranking::comparison::Comparison as PairwiseComparison;
pub use crate::ranking::entry::Entry as RankingEntry;
pub use crate::ranking::standing::Standing;
pub use crate::ranking::Ranking;
pub use crate::report::Report;
pub use crate::runner::Runner;
pub use crate::session::Session;
pub use crate::settings::Settings;
pub use crate::unit::Unit;

/// The process exit code on success.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on a fatal error.
pub const EXIT_CODE_FAILURE: i32 = 1;

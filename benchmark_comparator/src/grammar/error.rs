//!
//! The measurement grammar error.
//!

///
/// The measurement grammar error.
///
/// Any of these makes the whole comparison impossible, so it is the only
/// error that aborts a run.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The table is not valid JSON or does not match the expected layout.
    #[error("Grammar table parsing: {0}")]
    Table(#[from] serde_json::Error),
    /// The table declares no tests.
    #[error("Grammar table declares no tests")]
    Empty,
    /// A test has an empty identifier.
    #[error("Grammar test #{index} has an empty identifier")]
    EmptyIdentifier {
        /// The zero-based position of the test in the table.
        index: usize,
    },
    /// A test identifier is declared twice.
    #[error("Grammar test `{id}` is declared more than once")]
    DuplicateIdentifier {
        /// The repeated identifier.
        id: String,
    },
    /// A marker does not compile into a valid regular expression.
    #[error("Grammar pattern of `{id}` compiling: {error}")]
    Pattern {
        /// The identifier of the offending test, or `total`.
        id: String,
        /// The underlying regex error.
        error: regex::Error,
    },
}

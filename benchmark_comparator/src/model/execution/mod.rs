//!
//! The raw outcome of executing one language's benchmark program.
//!

pub mod status;

use self::status::Status;

///
/// The raw outcome of executing one language's benchmark program.
///
/// It is consumed by the aggregator right after the execution and never kept.
///
#[derive(Debug, Clone, PartialEq)]
pub struct RawExecution {
    /// The language name.
    pub language: String,
    /// The captured output, empty if nothing was run.
    pub output: String,
    /// The execution status.
    pub status: Status,
}

impl RawExecution {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(language: String, output: String, status: Status) -> Self {
        Self {
            language,
            output,
            status,
        }
    }

    ///
    /// A shortcut constructor for a successful execution.
    ///
    pub fn ok(language: String, output: String) -> Self {
        Self::new(language, output, Status::Ok)
    }

    ///
    /// A shortcut constructor for an execution that produced no usable output.
    ///
    pub fn failed(language: String, status: Status) -> Self {
        Self::new(language, String::new(), status)
    }
}

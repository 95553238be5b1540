//!
//! The execution status.
//!

use std::path::PathBuf;
use std::time::Duration;

///
/// The execution status.
///
/// Every variant except `Ok` only affects its own language.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The program ran to completion.
    Ok,
    /// The source or executable artifact is absent.
    NotFound(PathBuf),
    /// None of the required compilers or interpreters is in `${PATH}`.
    ToolMissing(String),
    /// The compiler returned non-zero. Holds its diagnostics verbatim.
    BuildFailed(String),
    /// The build or run step exceeded its bound.
    Timeout(Duration),
    /// The program could not be spawned or exited non-zero.
    RuntimeFailure(String),
}

impl Status {
    ///
    /// Whether the program ran to completion.
    ///
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "completed"),
            Self::NotFound(path) => write!(f, "{path:?} not found"),
            Self::ToolMissing(tool) => write!(f, "`{tool}` not found in ${{PATH}}"),
            Self::BuildFailed(diagnostic) => write!(f, "build failed: {}", diagnostic.trim_end()),
            Self::Timeout(timeout) => write!(f, "timed out after {}s", timeout.as_secs()),
            Self::RuntimeFailure(diagnostic) => {
                write!(f, "runtime failure: {}", diagnostic.trim_end())
            }
        }
    }
}

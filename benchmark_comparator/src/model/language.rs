//!
//! A benchmarked language and the way its program is executed.
//!

///
/// The way a language's benchmark program is built and executed.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toolchain {
    /// The source is compiled into a temporary executable, which is run and removed.
    Compiled {
        /// The compiler executable name, resolved in `${PATH}`.
        compiler: &'static str,
        /// The compiler flags preceding the source path.
        flags: &'static [&'static str],
        /// The source file name in the benchmarks directory.
        source: &'static str,
        /// The temporary executable name in the benchmarks directory.
        binary: &'static str,
    },
    /// The source is run by the first interpreter found in `${PATH}`.
    Interpreted {
        /// The interpreter candidates, in order of preference.
        interpreters: &'static [&'static str],
        /// The source file name in the benchmarks directory.
        source: &'static str,
    },
    /// The source is run by an executable shipped with the project itself.
    Project {
        /// The executable candidates relative to the project directory.
        executables: &'static [&'static str],
        /// The source file name in the benchmarks directory.
        source: &'static str,
    },
}

///
/// A benchmarked language.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// The display name.
    pub name: &'static str,
    /// The build and execution method.
    pub toolchain: Toolchain,
}

impl Language {
    ///
    /// A shortcut constructor.
    ///
    pub const fn new(name: &'static str, toolchain: Toolchain) -> Self {
        Self { name, toolchain }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

//!
//! The fixed settings of a comparison run.
//!

use std::path::PathBuf;
use std::time::Duration;

use crate::model::language::Language;
use crate::model::language::Toolchain;

///
/// The fixed settings of a comparison run.
///
/// There is no configuration file and no command-line interface: the
/// defaults below are the configuration.
///
#[derive(Debug, Clone)]
pub struct Settings {
    /// The directory containing the benchmark sources.
    pub benchmarks_directory: PathBuf,
    /// The directory containing the project's own executable.
    pub project_directory: PathBuf,
    /// The persisted report path.
    pub report_path: PathBuf,
    /// The bound of a compile step.
    pub build_timeout: Duration,
    /// The bound of a run step.
    pub run_timeout: Duration,
    /// The language whose standing is summarized.
    pub subject: String,
    /// The language the subject is compared against.
    pub baseline: String,
    /// The benchmarked languages, in enumeration order.
    pub languages: Vec<Language>,
}

impl Settings {
    /// The benchmark sources directory.
    pub const BENCHMARKS_DIRECTORY: &'static str = "./benchmarks/";

    /// The project directory.
    pub const PROJECT_DIRECTORY: &'static str = "./";

    /// The persisted report path.
    pub const REPORT_PATH: &'static str = "./benchmark_results.txt";

    /// The bound of a compile step.
    pub const BUILD_TIMEOUT: Duration = Duration::from_secs(60);

    /// The bound of a run step.
    pub const RUN_TIMEOUT: Duration = Duration::from_secs(300);

    /// The language whose standing is summarized.
    pub const SUBJECT: &'static str = "Tulpar";

    /// The language the subject is compared against.
    pub const BASELINE: &'static str = "Python";

    /// The benchmarked languages, in enumeration order.
    pub const LANGUAGES: [Language; 5] = [
        Language::new(
            "C",
            Toolchain::Compiled {
                compiler: "gcc",
                flags: &["-O2"],
                source: "benchmark.c",
                binary: "benchmark_c",
            },
        ),
        Language::new(
            "JavaScript",
            Toolchain::Interpreted {
                interpreters: &["node"],
                source: "benchmark.js",
            },
        ),
        Language::new(
            "Python",
            Toolchain::Interpreted {
                interpreters: &["python3", "python"],
                source: "benchmark.py",
            },
        ),
        Language::new(
            "PHP",
            Toolchain::Interpreted {
                interpreters: &["php"],
                source: "benchmark.php",
            },
        ),
        Language::new(
            "Tulpar",
            Toolchain::Project {
                executables: &["tulpar", "tulpar.exe"],
                source: "benchmark.tpr",
            },
        ),
    ];
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            benchmarks_directory: PathBuf::from(Self::BENCHMARKS_DIRECTORY),
            project_directory: PathBuf::from(Self::PROJECT_DIRECTORY),
            report_path: PathBuf::from(Self::REPORT_PATH),
            build_timeout: Self::BUILD_TIMEOUT,
            run_timeout: Self::RUN_TIMEOUT,
            subject: Self::SUBJECT.to_owned(),
            baseline: Self::BASELINE.to_owned(),
            languages: Self::LANGUAGES.to_vec(),
        }
    }
}

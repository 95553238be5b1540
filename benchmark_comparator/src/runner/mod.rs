//!
//! The benchmark program runner.
//!

pub mod artifact;
pub mod process;

use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

use crate::model::execution::status::Status;
use crate::model::execution::RawExecution;
use crate::model::language::Language;
use crate::model::language::Toolchain;
use crate::settings::Settings;

use self::artifact::Artifact;
use self::process::Outcome;

///
/// The benchmark program runner.
///
/// Runs one program at a time, so that concurrent processes never distort
/// each other's self-measured timings.
///
#[derive(Debug, Clone)]
pub struct Runner {
    /// The directory containing the benchmark sources.
    benchmarks_directory: PathBuf,
    /// The directory containing the project's own executable.
    project_directory: PathBuf,
    /// The bound of a compile step.
    build_timeout: Duration,
    /// The bound of a run step.
    run_timeout: Duration,
}

impl Runner {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(settings: &Settings) -> Self {
        Self {
            benchmarks_directory: settings.benchmarks_directory.clone(),
            project_directory: settings.project_directory.clone(),
            build_timeout: settings.build_timeout,
            run_timeout: settings.run_timeout,
        }
    }

    ///
    /// Builds if needed and runs the benchmark program of `language`.
    ///
    pub fn run(&self, language: &Language) -> RawExecution {
        let result = match &language.toolchain {
            Toolchain::Compiled {
                compiler,
                flags,
                source,
                binary,
            } => self.run_compiled(compiler, flags, source, binary),
            Toolchain::Interpreted {
                interpreters,
                source,
            } => self.run_interpreted(interpreters, source),
            Toolchain::Project {
                executables,
                source,
            } => self.run_project(executables, source),
        };

        match result {
            Ok(output) => RawExecution::ok(language.name.to_owned(), output),
            Err(status) => RawExecution::failed(language.name.to_owned(), status),
        }
    }

    ///
    /// Compiles the source, runs the executable, and removes it.
    ///
    fn run_compiled(
        &self,
        compiler: &str,
        flags: &[&str],
        source: &str,
        binary: &str,
    ) -> Result<String, Status> {
        let source = self.source(source)?;
        let compiler = Self::resolve_tool(&[compiler])?;

        let artifact = Artifact::new(
            self.benchmarks_directory
                .join(format!("{binary}{}", std::env::consts::EXE_SUFFIX)),
        );

        let mut command = Command::new(compiler);
        command.args(flags);
        command.arg(source.as_path());
        command.arg("-o");
        command.arg(artifact.path());
        match process::run(command, self.build_timeout) {
            Ok(Outcome::Exited { success: true, .. }) => {}
            Ok(Outcome::Exited {
                status,
                stdout,
                stderr,
                ..
            }) => {
                let diagnostic = process::combine(stdout.as_str(), stderr.as_str());
                return Err(Status::BuildFailed(if diagnostic.trim().is_empty() {
                    status
                } else {
                    diagnostic
                }));
            }
            Ok(Outcome::TimedOut) => return Err(Status::Timeout(self.build_timeout)),
            Err(error) => return Err(Status::BuildFailed(error.to_string())),
        }

        self.execute(Command::new(artifact.path()))
    }

    ///
    /// Runs the source with the first available interpreter.
    ///
    fn run_interpreted(&self, interpreters: &[&str], source: &str) -> Result<String, Status> {
        let source = self.source(source)?;
        let interpreter = Self::resolve_tool(interpreters)?;

        let mut command = Command::new(interpreter);
        command.arg(source);
        self.execute(command)
    }

    ///
    /// Runs the source with the project's own executable.
    ///
    fn run_project(&self, executables: &[&str], source: &str) -> Result<String, Status> {
        let executable = executables
            .iter()
            .map(|executable| self.project_directory.join(executable))
            .find(|path| path.is_file())
            .ok_or_else(|| {
                Status::NotFound(
                    executables
                        .first()
                        .map(|executable| self.project_directory.join(executable))
                        .unwrap_or_else(|| self.project_directory.clone()),
                )
            })?;
        let source = self.source(source)?;

        let mut command = Command::new(executable);
        command.arg(source);
        self.execute(command)
    }

    ///
    /// Runs a benchmark program and captures its combined output.
    ///
    fn execute(&self, command: Command) -> Result<String, Status> {
        match process::run(command, self.run_timeout) {
            Ok(Outcome::Exited {
                success: true,
                stdout,
                stderr,
                ..
            }) => Ok(process::combine(stdout.as_str(), stderr.as_str())),
            Ok(Outcome::Exited { status, stderr, .. }) => Err(Status::RuntimeFailure(
                process::combine(format!("{status}\n").as_str(), stderr.as_str()),
            )),
            Ok(Outcome::TimedOut) => Err(Status::Timeout(self.run_timeout)),
            Err(error) => Err(Status::RuntimeFailure(error.to_string())),
        }
    }

    ///
    /// Locates a benchmark source file.
    ///
    fn source(&self, name: &str) -> Result<PathBuf, Status> {
        let path = self.benchmarks_directory.join(name);
        if !path.is_file() {
            return Err(Status::NotFound(path));
        }
        Ok(path)
    }

    ///
    /// Resolves the first of `candidates` found in `${PATH}`.
    ///
    fn resolve_tool(candidates: &[&str]) -> Result<PathBuf, Status> {
        candidates
            .iter()
            .find_map(|candidate| which::which(candidate).ok())
            .ok_or_else(|| Status::ToolMissing(candidates.join(" or ")))
    }
}

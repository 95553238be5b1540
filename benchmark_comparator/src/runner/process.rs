//!
//! A subprocess run with a time bound.
//!

use std::io::Read;
use std::process::Command;
use std::process::Stdio;
use std::thread::JoinHandle;
use std::time::Duration;
use std::time::Instant;

///
/// The outcome of a bounded subprocess run.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The process exited by itself.
    Exited {
        /// Whether the exit status was zero.
        success: bool,
        /// The exit status description, e.g. `exit status: 1`.
        status: String,
        /// The captured standard output.
        stdout: String,
        /// The captured standard error.
        stderr: String,
    },
    /// The process exceeded its bound and was killed.
    TimedOut,
}

/// The interval between child status checks.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

///
/// Joins the standard output and the standard error, in that order.
///
pub fn combine(stdout: &str, stderr: &str) -> String {
    if stderr.is_empty() {
        return stdout.to_owned();
    }
    if stdout.is_empty() || stdout.ends_with('\n') {
        return format!("{stdout}{stderr}");
    }
    format!("{stdout}\n{stderr}")
}

///
/// Runs `command` to completion or until `timeout` expires.
///
/// The output pipes are drained on helper threads, so a child writing more
/// than the pipe buffer cannot stall while the status is being polled.
///
pub fn run(mut command: Command, timeout: Duration) -> anyhow::Result<Outcome> {
    let program = command.get_program().to_string_lossy().to_string();

    command.stdin(Stdio::null());
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    let mut child = command
        .spawn()
        .map_err(|error| anyhow::anyhow!("{program} subprocess spawning error: {error}"))?;
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let started = Instant::now();
    let status = loop {
        match child
            .try_wait()
            .map_err(|error| anyhow::anyhow!("{program} subprocess waiting error: {error}"))?
        {
            Some(status) => break Some(status),
            None if started.elapsed() >= timeout => {
                let _ = child.kill();
                let _ = child.wait();
                break None;
            }
            None => std::thread::sleep(POLL_INTERVAL),
        }
    };

    // Descendants of a killed child may still hold the pipes open, so the
    // readers are detached rather than joined.
    let Some(status) = status else {
        return Ok(Outcome::TimedOut);
    };

    Ok(Outcome::Exited {
        success: status.success(),
        status: status.to_string(),
        stdout: collect(stdout),
        stderr: collect(stderr),
    })
}

///
/// Reads a child pipe to the end on a helper thread.
///
fn drain<R>(pipe: Option<R>) -> Option<JoinHandle<String>>
where
    R: Read + Send + 'static,
{
    pipe.map(|mut pipe| {
        std::thread::spawn(move || {
            let mut buffer = Vec::new();
            let _ = pipe.read_to_end(&mut buffer);
            String::from_utf8_lossy(buffer.as_slice()).to_string()
        })
    })
}

///
/// Joins a pipe reader, treating a missing or panicked reader as no output.
///
fn collect(reader: Option<JoinHandle<String>>) -> String {
    reader
        .and_then(|reader| reader.join().ok())
        .unwrap_or_default()
}

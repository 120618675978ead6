//! Completion backend that pipes prompts to an external CLI.
//!
//! The prompt (context first, then a blank line, then the prompt) is written
//! to the child's stdin and its stdout is the reply. The subject hint is
//! exported to the child as `STUDYBUDDY_SUBJECT`.

use std::io::{Read, Write};
use std::process::{Child, Command, Output, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::{apology, CompletionError, CompletionService};

/// Environment variable carrying the subject hint.
pub const SUBJECT_ENV: &str = "STUDYBUDDY_SUBJECT";

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs a configured command for every completion.
#[derive(Debug, Clone)]
pub struct CommandCompletion {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandCompletion {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the command and return its stdout.
    pub fn try_complete(
        &self,
        prompt: &str,
        context: &str,
        subject_hint: &str,
    ) -> Result<String, CompletionError> {
        let full_prompt = if context.is_empty() {
            prompt.to_string()
        } else {
            format!("{context}\n\n{prompt}")
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env(SUBJECT_ENV, subject_hint)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => CompletionError::NotAvailable(self.program.clone()),
                _ => CompletionError::Io(e),
            })?;

        debug!(program = %self.program, bytes = full_prompt.len(), "sending completion prompt");
        if let Some(mut stdin) = child.stdin.take() {
            // Closing stdin on drop marks the end of the prompt
            thread::spawn(move || {
                if let Err(e) = stdin.write_all(full_prompt.as_bytes()) {
                    debug!(error = %e, "completion command closed stdin early");
                }
            });
        }

        let output = match wait_with_timeout(&mut child, self.timeout) {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => {
                return Err(CompletionError::Timeout(self.timeout))
            }
            Err(e) => return Err(CompletionError::Io(e)),
        };

        if !output.status.success() {
            return Err(CompletionError::ExitCode {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        let reply = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if reply.is_empty() {
            return Err(CompletionError::EmptyReply);
        }
        Ok(reply)
    }
}

impl CompletionService for CommandCompletion {
    fn name(&self) -> &str {
        &self.program
    }

    fn complete(&self, prompt: &str, context: &str, subject_hint: &str) -> String {
        match self.try_complete(prompt, context, subject_hint) {
            Ok(reply) => reply,
            Err(e) => {
                warn!(program = %self.program, error = %e, "completion failed");
                apology(&e)
            }
        }
    }
}

/// Read a pipe to the end on its own thread.
fn drain<R: Read + Send + 'static>(stream: Option<R>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut s) = stream {
            s.read_to_end(&mut buf).ok();
        }
        buf
    })
}

/// Poll `child` until it exits or `timeout` passes. A timed-out child is
/// killed and reaped.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> std::io::Result<Output> {
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());
    let start = Instant::now();
    loop {
        match child.try_wait()? {
            Some(status) => {
                return Ok(Output {
                    status,
                    stdout: stdout.join().unwrap_or_default(),
                    stderr: stderr.join().unwrap_or_default(),
                });
            }
            None if start.elapsed() >= timeout => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(std::io::Error::new(
                    std::io::ErrorKind::TimedOut,
                    "completion command timed out",
                ));
            }
            None => thread::sleep(POLL_INTERVAL),
        }
    }
}

//! Spawning the external bundler and collecting its outcome.
//!
//! [`run`] is the only place a child process is created. Output is captured
//! only in [`StdioMode::Pipe`]; the other modes hand the streams to the
//! child directly and report empty captures.

mod capture;

pub use capture::OutputBuffer;

use crate::bundler::{
    error::{Error, Result},
    settings::{RunOptions, StdioMode},
};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use thiserror::Error as DeriveError;
use tokio::io::AsyncRead;
use tokio::process::{Child, Command};

/// Outcome of a successful bundler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Exit code, always 0 for a successful run.
    pub code: i32,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

/// A bundler run that exited unsuccessfully.
///
/// The message is `SFX bundler exited with code <n>`, followed by a newline
/// and the captured stderr when there is any.
#[derive(Debug, Clone, DeriveError)]
#[error("{message}")]
pub struct RunError {
    /// Resolved bundler executable.
    pub command: PathBuf,
    /// Arguments the bundler was started with.
    pub args: Vec<String>,
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// Human readable description.
    pub message: String,
}

impl RunError {
    fn new(
        command: PathBuf,
        args: Vec<String>,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    ) -> Self {
        let mut message = match code {
            Some(code) => format!("SFX bundler exited with code {code}"),
            None => "SFX bundler was terminated by a signal".to_string(),
        };
        if !stderr.is_empty() {
            message.push('\n');
            message.push_str(&stderr);
        }

        Self {
            command,
            args,
            code,
            stdout,
            stderr,
            message,
        }
    }
}

/// Runs `command` with `args` and waits for it to exit.
///
/// # Errors
///
/// - [`Error::Spawn`] if the executable cannot be launched
/// - [`Error::Run`] if it exits with a non-zero status
pub async fn run(command: &Path, args: &[String], options: &RunOptions) -> Result<RunResult> {
    log::debug!("Spawning {} {:?}", command.display(), args);

    let mut cmd = Command::new(command);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    match options.stdio {
        StdioMode::Pipe => {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());
        }
        StdioMode::Inherit => {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        }
        StdioMode::Ignore => {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
        }
    }

    let mut child = cmd.spawn().map_err(|source| Error::Spawn {
        command: command.to_path_buf(),
        source,
    })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let (status, stdout, stderr) = collect(&mut child, stdout, stderr).await?;

    let stdout = stdout.into_string();
    let stderr = stderr.into_string();

    if status.success() {
        log::debug!("{} finished successfully", command.display());
        return Ok(RunResult {
            code: 0,
            stdout,
            stderr,
        });
    }

    log::debug!("{} failed with status {}", command.display(), status);
    Err(RunError::new(
        command.to_path_buf(),
        args.to_vec(),
        status.code(),
        stdout,
        stderr,
    )
    .into())
}

/// Drains both streams, then waits for `child`.
///
/// If reading either stream fails the child is killed and reaped before the
/// error is returned.
async fn collect<O, E>(
    child: &mut Child,
    stdout: Option<O>,
    stderr: Option<E>,
) -> std::io::Result<(ExitStatus, OutputBuffer, OutputBuffer)>
where
    O: AsyncRead + Unpin,
    E: AsyncRead + Unpin,
{
    // Both pipes must be drained together or a chatty child can block on a full pipe.
    let drained = tokio::try_join!(capture_stream(stdout), capture_stream(stderr));

    match drained {
        Ok((stdout, stderr)) => Ok((child.wait().await?, stdout, stderr)),
        Err(err) => {
            log::warn!("Reading bundler output failed, stopping it: {}", err);
            let _ = child.start_kill();
            let _ = child.wait().await;
            Err(err)
        }
    }
}

async fn capture_stream<R>(stream: Option<R>) -> std::io::Result<OutputBuffer>
where
    R: AsyncRead + Unpin,
{
    match stream {
        Some(reader) => OutputBuffer::default().drain(reader).await,
        None => Ok(OutputBuffer::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_appends_stderr() {
        let err = RunError::new(
            PathBuf::from("bundler"),
            vec!["-v".into()],
            Some(2),
            String::new(),
            "bad archive".into(),
        );
        assert_eq!(err.message, "SFX bundler exited with code 2\nbad archive");
        assert!(err.to_string().ends_with("bad archive"));
    }

    #[test]
    fn message_without_stderr_is_plain() {
        let err = RunError::new(PathBuf::from("bundler"), vec![], Some(1), "out".into(), String::new());
        assert_eq!(err.to_string(), "SFX bundler exited with code 1");
    }

    #[test]
    fn signal_termination_has_no_code() {
        let err = RunError::new(PathBuf::from("bundler"), vec![], None, String::new(), String::new());
        assert!(err.code.is_none());
        assert!(err.to_string().contains("signal"));
    }

    struct BrokenPipe;

    impl AsyncRead for BrokenPipe {
        fn poll_read(
            self: std::pin::Pin<&mut Self>,
            _cx: &mut std::task::Context<'_>,
            _buf: &mut tokio::io::ReadBuf<'_>,
        ) -> std::task::Poll<std::io::Result<()>> {
            std::task::Poll::Ready(Err(std::io::ErrorKind::BrokenPipe.into()))
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn read_failure_reaps_the_child() {
        let mut child = Command::new("sleep").arg("30").spawn().unwrap();

        let err = collect(&mut child, Some(BrokenPipe), None::<BrokenPipe>)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
        let status = child.try_wait().unwrap();
        assert!(status.is_some_and(|s| !s.success()));
    }

    #[tokio::test]
    async fn missing_binary_is_a_spawn_error() {
        let err = run(
            Path::new("/nonexistent/sfx-bin/x64/bundler"),
            &[],
            &RunOptions::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
    }
}

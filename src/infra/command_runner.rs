//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` uses tokio for async process execution with
//! guaranteed timeout and kill on all platforms.

use std::process::{Output, Stdio};
use std::time::Duration;

use tokio::io::AsyncReadExt;

use crate::application::ports::CommandRunner;
use crate::domain::RunError;

/// Production `CommandRunner`.
///
/// `tokio::time::timeout` around `.output().await` does NOT kill the child
/// process when the timeout fires — the future is dropped but the OS process
/// keeps running. This implementation uses `tokio::select!` with an explicit
/// `child.kill()` so no provider or ssh process outlives its wait bound.
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output, RunError> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RunError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        tokio::select! {
            result = async {
                let (status, stdout, stderr) = tokio::join!(
                    child.wait(),
                    read_all(&mut stdout_handle),
                    read_all(&mut stderr_handle),
                );
                Ok(Output {
                    status: status.map_err(|source| RunError::Wait {
                        program: program.to_string(),
                        source,
                    })?,
                    stdout,
                    stderr,
                })
            } => result,
            () = tokio::time::sleep(timeout) => {
                let _ = child.kill().await;
                Err(RunError::TimedOut {
                    program: program.to_string(),
                    secs: timeout.as_secs(),
                })
            }
        }
    }
}

async fn read_all<R: tokio::io::AsyncRead + Unpin>(handle: &mut Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(h) = handle {
        let _ = h.read_to_end(&mut buf).await;
    }
    buf
}

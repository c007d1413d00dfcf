//! Remote executor adapter over the system `ssh` client.
//!
//! One client process per `run` call, key-based auth, no interactive shell.
//! The session is torn down on every exit path: the runner kills the child
//! on timeout, and a finished child has no session left to leak.

use std::time::Duration;

use tracing::info;

use crate::application::ports::{CommandRunner, RemoteExecutor};
use crate::domain::{ExecError, RunError};

/// Wait bound covering session establishment plus remote command completion.
const SESSION_TIMEOUT: Duration = Duration::from_secs(300);

/// The ssh client reserves exit status 255 for its own failures; anything
/// else is the remote command's exit status.
const SSH_CLIENT_FAILURE: i32 = 255;

pub struct SshExecutor<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> SshExecutor<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> RemoteExecutor for SshExecutor<R> {
    async fn run(
        &self,
        host: &str,
        user: &str,
        key_path: &str,
        command: &str,
    ) -> Result<(), ExecError> {
        let key = expand_key_path(key_path);
        info!(%host, %user, "running remote command");

        let output = self
            .runner
            .run(
                "ssh",
                &[
                    "-i",
                    &key,
                    "-l",
                    user,
                    "-o",
                    "BatchMode=yes",
                    "-o",
                    "StrictHostKeyChecking=accept-new",
                    host,
                    command,
                ],
                SESSION_TIMEOUT,
            )
            .await
            .map_err(|e| {
                let detail = match e {
                    RunError::TimedOut { secs, .. } => format!("timed out after {secs}s"),
                    other => other.to_string(),
                };
                ExecError::ConnectionFailed {
                    host: host.to_string(),
                    detail,
                }
            })?;

        match output.status.code() {
            Some(0) => Ok(()),
            Some(SSH_CLIENT_FAILURE) => Err(ExecError::ConnectionFailed {
                host: host.to_string(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }),
            Some(exit_code) => Err(ExecError::RemoteCommandFailed { exit_code }),
            None => Err(ExecError::ConnectionFailed {
                host: host.to_string(),
                detail: "session terminated by signal".to_string(),
            }),
        }
    }
}

/// Expand a leading `~/` to the user's home directory. Paths without the
/// shorthand pass through unchanged.
fn expand_key_path(key_path: &str) -> String {
    if let Some(rest) = key_path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest).to_string_lossy().into_owned();
    }
    key_path.to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::cell::RefCell;
    use std::os::unix::process::ExitStatusExt;
    use std::process::{ExitStatus, Output};

    use super::*;

    struct ExitRunner {
        code: i32,
        seen_args: RefCell<Vec<String>>,
    }

    impl ExitRunner {
        fn new(code: i32) -> Self {
            Self {
                code,
                seen_args: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for ExitRunner {
        async fn run(
            &self,
            _: &str,
            args: &[&str],
            _: Duration,
        ) -> Result<Output, RunError> {
            *self.seen_args.borrow_mut() = args.iter().map(ToString::to_string).collect();
            Ok(Output {
                status: ExitStatus::from_raw(self.code << 8),
                stdout: Vec::new(),
                stderr: b"diagnostic".to_vec(),
            })
        }
    }

    #[tokio::test]
    async fn zero_exit_is_success() {
        let runner = ExitRunner::new(0);
        let executor = SshExecutor::new(runner);
        executor
            .run("1.2.3.4", "mc", "/keys/id", "echo hi")
            .await
            .expect("run");
    }

    #[tokio::test]
    async fn exit_255_is_a_connection_failure() {
        let executor = SshExecutor::new(ExitRunner::new(255));
        let err = executor
            .run("1.2.3.4", "mc", "/keys/id", "echo hi")
            .await
            .expect_err("expected Err");
        match err {
            ExecError::ConnectionFailed { host, detail } => {
                assert_eq!(host, "1.2.3.4");
                assert_eq!(detail, "diagnostic");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn nonzero_exit_is_a_remote_command_failure() {
        let executor = SshExecutor::new(ExitRunner::new(7));
        let err = executor
            .run("1.2.3.4", "mc", "/keys/id", "false")
            .await
            .expect_err("expected Err");
        assert!(matches!(
            err,
            ExecError::RemoteCommandFailed { exit_code: 7 }
        ));
    }

    #[tokio::test]
    async fn target_and_command_are_passed_through() {
        let runner = ExitRunner::new(0);
        let executor = SshExecutor::new(runner);
        executor
            .run("9.8.7.6", "ops", "/keys/id", "sudo docker run x")
            .await
            .expect("run");
        let args = executor.runner.seen_args.borrow();
        assert!(args.contains(&"9.8.7.6".to_string()));
        assert!(args.contains(&"ops".to_string()));
        assert!(args.contains(&"/keys/id".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("sudo docker run x"));
    }

    #[test]
    fn tilde_prefix_expands_to_home() {
        let home = dirs::home_dir().expect("home dir");
        assert_eq!(
            expand_key_path("~/.ssh/id_ed25519"),
            home.join(".ssh/id_ed25519").to_string_lossy()
        );
        assert_eq!(expand_key_path("/abs/key"), "/abs/key");
    }
}

//! Instance lifecycle adapter over the `gcloud compute instances` CLI.
//!
//! Routes all provider calls through a [`CommandRunner`], generic over
//! `R: CommandRunner` so tests can inject a canned runner without spawning
//! real processes. The gcloud CLI itself blocks until the provider's
//! long-running operation resolves, so a single timed process invocation
//! covers the whole wait.

use std::process::Output;
use std::time::Duration;

use tracing::{info, warn};

use crate::application::ports::{CommandRunner, InstanceLifecycle};
use crate::domain::{ComputeError, RunError, Settings};

/// Default wait bound for provider long-running operations.
pub const OPERATION_TIMEOUT: Duration = Duration::from_secs(300);

pub struct GcloudCompute<R: CommandRunner> {
    runner: R,
    project: String,
    zone: String,
    instance: String,
    timeout: Duration,
}

impl<R: CommandRunner> GcloudCompute<R> {
    pub fn new(runner: R, settings: &Settings) -> Self {
        Self {
            runner,
            project: settings.project_id.clone(),
            zone: settings.zone.clone(),
            instance: settings.instance.clone(),
            timeout: OPERATION_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn instances(
        &self,
        operation: &'static str,
        verb: &str,
    ) -> Result<Output, ComputeError> {
        let args = [
            "compute",
            "instances",
            verb,
            self.instance.as_str(),
            "--project",
            self.project.as_str(),
            "--zone",
            self.zone.as_str(),
            "--format",
            "json",
        ];
        let output = self
            .runner
            .run("gcloud", &args, self.timeout)
            .await
            .map_err(|e| match e {
                RunError::TimedOut { secs, .. } => {
                    ComputeError::OperationTimeout { operation, secs }
                }
                other => ComputeError::Unavailable {
                    detail: other.to_string(),
                },
            })?;

        if !output.status.success() {
            return Err(ComputeError::OperationFailed {
                code: output.status.code().unwrap_or(-1),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // gcloud reports warnings on stderr even when the operation succeeds;
        // they are diagnostics, never fatal.
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if !stderr.is_empty() {
            warn!(operation, "{stderr}");
        }
        Ok(output)
    }
}

impl<R: CommandRunner> InstanceLifecycle for GcloudCompute<R> {
    async fn start(&self) -> Result<(), ComputeError> {
        info!(instance = %self.instance, "start instance request received");
        self.instances("instance start", "start").await.map(|_| ())
    }

    async fn stop(&self) -> Result<(), ComputeError> {
        info!(instance = %self.instance, "stop instance request received");
        self.instances("instance stop", "stop").await.map(|_| ())
    }

    async fn external_ipv4(&self) -> Result<Vec<String>, ComputeError> {
        let output = self.instances("instance describe", "describe").await?;
        parse_nat_ips(&output.stdout)
    }
}

/// Extract the `natIP` of every one-to-one NAT access config from
/// `gcloud compute instances describe --format json` output. An instance
/// with no network interfaces yields an empty vec.
fn parse_nat_ips(stdout: &[u8]) -> Result<Vec<String>, ComputeError> {
    let doc: serde_json::Value =
        serde_json::from_slice(stdout).map_err(|e| ComputeError::Unavailable {
            detail: format!("invalid JSON from provider: {e}"),
        })?;

    let mut ips = Vec::new();
    if let Some(interfaces) = doc.get("networkInterfaces").and_then(|v| v.as_array()) {
        for iface in interfaces {
            let Some(configs) = iface.get("accessConfigs").and_then(|v| v.as_array()) else {
                continue;
            };
            for config in configs {
                if config.get("type").and_then(|t| t.as_str()) == Some("ONE_TO_ONE_NAT")
                    && let Some(ip) = config.get("natIP").and_then(|n| n.as_str())
                {
                    ips.push(ip.to_string());
                }
            }
        }
    }
    Ok(ips)
}

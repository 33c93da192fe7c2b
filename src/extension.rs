// Host-facing extension contract
// A custom job receives an opaque configuration and a status callback, and
// must hand back exactly one JobResult -- never a propagated error.

use crate::errors::ExecutionError;
use crate::models::{JobConfiguration, JobResult, UpdateCallback};
use async_trait::async_trait;
use tracing::{error, info};

/// CustomJobExtension is the single entry point the orchestrator host
/// invokes for a custom job type.
///
/// Implementations provide `run`, which does the actual work and may return
/// a status string for the host's update callback. The provided
/// `process_job` wrapper owns the contract with the host: every error is
/// caught and downgraded to a Failure result, and the callback fires at most
/// once, only on success.
#[async_trait]
pub trait CustomJobExtension: Send + Sync {
    /// Registered extension name. May be blank.
    fn extension_name(&self) -> &str {
        ""
    }

    /// Execute the job. On success, `Some(status)` is forwarded to the
    /// host's update callback; `None` completes silently.
    async fn run(&self, config: &JobConfiguration) -> Result<Option<String>, ExecutionError>;

    /// Process one job invocation on behalf of the host.
    async fn process_job(
        &self,
        config: &JobConfiguration,
        submit_update: UpdateCallback,
    ) -> JobResult {
        info!(
            job_history_id = config.job_history_id,
            extension = self.extension_name(),
            "processing custom job"
        );

        match self.run(config).await {
            Ok(status) => {
                if let Some(status) = status {
                    submit_update(status);
                }
                JobResult::success()
            }
            Err(err) => {
                error!(
                    job_history_id = config.job_history_id,
                    error = %err,
                    "custom job failed"
                );
                JobResult::failure(err.to_string())
            }
        }
    }
}

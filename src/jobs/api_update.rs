// Job variant that authenticates and updates a downstream resource

use crate::client::ApiClient;
use crate::config::ApiConfig;
use crate::errors::ExecutionError;
use crate::extension::CustomJobExtension;
use crate::models::JobConfiguration;
use async_trait::async_trait;
use tracing::{debug, info};

/// ApiUpdateJob extracts a correlation id, exchanges the configured client
/// credentials for a bearer token, and PUTs a resource update to the
/// downstream API.
///
/// Whether the host callback is invoked on success is an explicit option:
/// by default the job completes silently, matching the historical behavior
/// of this job type; `with_update_report` turns the callback on.
pub struct ApiUpdateJob {
    client: ApiClient,
    report_update: bool,
}

impl ApiUpdateJob {
    pub fn new(settings: ApiConfig) -> Result<Self, ExecutionError> {
        Ok(Self {
            client: ApiClient::new(settings)?,
            report_update: false,
        })
    }

    /// Invoke the host callback with a short summary on success.
    pub fn with_update_report(mut self) -> Self {
        self.report_update = true;
        self
    }
}

#[async_trait]
impl CustomJobExtension for ApiUpdateJob {
    async fn run(&self, config: &JobConfiguration) -> Result<Option<String>, ExecutionError> {
        let correlation_id = config.get_string("CorrelationId")?;

        info!(
            job_history_id = config.job_history_id,
            correlation_id = %correlation_id,
            "submitting resource update"
        );

        let body = self.client.update_resource(&correlation_id).await?;
        debug!(response = %body, "resource update response");

        Ok(self
            .report_update
            .then(|| format!("resource update accepted for {}", correlation_id)))
    }
}

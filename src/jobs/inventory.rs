// Inventory job receiving certificate material from the host

use crate::errors::ExecutionError;
use crate::extension::CustomJobExtension;
use crate::models::{InventoryParameters, JobConfiguration};
use async_trait::async_trait;
use tracing::info;

/// InventoryParameterJob receives a correlation id plus certificate
/// material (certificate, pin, private key) and persists the joined values
/// through the host callback.
///
/// All four fields are validated as present and non-empty up front. Only
/// the correlation id is logged; pin and private key never reach the log.
#[derive(Debug, Default)]
pub struct InventoryParameterJob;

impl InventoryParameterJob {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CustomJobExtension for InventoryParameterJob {
    async fn run(&self, config: &JobConfiguration) -> Result<Option<String>, ExecutionError> {
        let params = InventoryParameters::from_config(config)?;

        info!(
            job_history_id = config.job_history_id,
            correlation_id = %params.correlation_id,
            "received certificate material"
        );

        Ok(Some(params.status_line()))
    }
}

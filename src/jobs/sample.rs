// Sample job demonstrating the four supported parameter types

use crate::errors::ExecutionError;
use crate::extension::CustomJobExtension;
use crate::models::{JobConfiguration, SampleParameters};
use async_trait::async_trait;
use tracing::info;

/// SampleParameterJob extracts one parameter of each supported type
/// (string, integer, date-time, boolean), logs them, and hands the host a
/// comma-joined status line for persistence.
#[derive(Debug, Default)]
pub struct SampleParameterJob;

impl SampleParameterJob {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CustomJobExtension for SampleParameterJob {
    async fn run(&self, config: &JobConfiguration) -> Result<Option<String>, ExecutionError> {
        let params = SampleParameters::from_config(config)?;

        info!(job_history_id = config.job_history_id, "job history id");
        info!(param_string = %params.param_string, "ParamString");
        info!(param_int = params.param_int, "ParamInt");
        info!(param_date = %params.param_date, "ParamDate");
        info!(param_bool = params.param_bool, "ParamBool");

        Ok(Some(params.status_line()))
    }
}

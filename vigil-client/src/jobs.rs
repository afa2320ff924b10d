//! Job-related API endpoints

use serde::Serialize;
use tracing::debug;

use crate::SchedulerClient;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct EnsureJobRequest {
    pool_id: String,
}

impl SchedulerClient {
    /// Create a job on a pool if it does not already exist
    ///
    /// Idempotent: a job that already exists is reported, not an error.
    ///
    /// # Arguments
    /// * `job_id` - The job to create
    /// * `pool_id` - The pool the job's tasks run on
    ///
    /// # Returns
    /// `true` if the job already existed, `false` if it was just created
    pub async fn ensure_job(&self, job_id: &str, pool_id: &str) -> Result<bool> {
        let url = format!("{}/api/jobs/{}", self.base_url, job_id);
        let response = self
            .client
            .put(&url)
            .json(&EnsureJobRequest {
                pool_id: pool_id.to_string(),
            })
            .send()
            .await?;

        if response.status().as_u16() == 409 {
            debug!("Job {} already exists on pool {}", job_id, pool_id);
            return Ok(true);
        }

        self.handle_empty_response(response).await?;
        Ok(false)
    }
}

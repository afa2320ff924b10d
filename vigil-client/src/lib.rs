//! Vigil Scheduler Client
//!
//! A type-safe HTTP client for the remote batch scheduler API.
//!
//! This crate draws the boundary between the monitoring core and the
//! scheduler: the [`Scheduler`] trait carries exactly the operations the
//! monitors need (list, fetch, reactivate, terminate), and
//! [`SchedulerClient`] is its HTTP implementation. The monitors never see
//! a transport; anything implementing [`Scheduler`] can stand in.
//!
//! # Example
//!
//! ```no_run
//! use vigil_client::SchedulerClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SchedulerClient::new("http://localhost:8080");
//!
//!     let tasks = client.list_tasks("reservoir-sim").await?;
//!     println!("job has {} tasks", tasks.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;
mod scheduler;
mod tasks;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use scheduler::Scheduler;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// HTTP client for the batch scheduler API
///
/// Endpoint methods are grouped into:
/// - Task state (list, get)
/// - Task recovery (reactivate, terminate)
/// - Job bootstrap (idempotent ensure)
#[derive(Debug, Clone)]
pub struct SchedulerClient {
    /// Base URL of the scheduler (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl SchedulerClient {
    /// Create a new scheduler client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the scheduler API (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use vigil_client::SchedulerClient;
    ///
    /// let client = SchedulerClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new scheduler client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the scheduler API
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use vigil_client::SchedulerClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = SchedulerClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the scheduler
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize the JSON body
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("bad JSON from scheduler: {}", e)))
    }

    /// Handle an API response that carries no body
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        Self::check_status(response).await.map(|_| ())
    }

    /// Shared status gate for every scheduler response
    ///
    /// A 404 names a job or task the scheduler does not know and becomes
    /// [`ClientError::NotFound`] so callers can tell a missing resource
    /// from a scheduler fault. Server-side errors are logged here; the
    /// monitors abort on them without retrying, so this is the one place
    /// they are visible.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let path = response.url().path().to_string();
        let message = response.text().await.unwrap_or_default();

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(path));
        }

        if status.is_server_error() {
            warn!("Scheduler error on {}: {} {}", path, status, message);
        } else {
            debug!("Scheduler rejected {}: {} {}", path, status, message);
        }
        Err(ClientError::api_error(status.as_u16(), message))
    }
}

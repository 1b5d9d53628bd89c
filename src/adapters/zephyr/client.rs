//! Zephyr ZAPI HTTP client with rate limiting.
//!
//! Wraps the `/rest/zapi/latest` REST surface, providing the entity
//! collections the engine consumes. Includes a token-bucket rate limiter
//! to stay within the instance's request-per-minute budget. The client
//! performs no retries; failures map to [`EngineError::Fetch`] and
//! propagate unchanged.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::{EngineError, EngineResult};
use crate::domain::models::{Config, Cycle, DefectSummary, Execution, Project, Version};
use crate::domain::ports::EntityFetcher;

use super::models::{
    collection_records, cycle_from_record, execution_from_record, execution_records,
    project_from_record, version_from_record,
};

/// Path prefix of the ZAPI REST surface.
const ZAPI_PREFIX: &str = "rest/zapi/latest";

/// Token-bucket rate limiter.
///
/// Allows up to `capacity` requests per `window`. When the bucket is
/// exhausted, [`acquire`](RateLimiter::acquire) sleeps until a token
/// becomes available.
#[derive(Debug)]
pub struct RateLimiter {
    /// Maximum tokens in the bucket.
    capacity: u32,
    /// Current available tokens.
    tokens: u32,
    /// Duration of the refill window.
    window: Duration,
    /// When the current window started.
    window_start: Instant,
}

impl RateLimiter {
    /// Create a new rate limiter with the given capacity and window.
    pub fn new(capacity: u32, window: Duration) -> Self {
        Self {
            capacity,
            tokens: capacity,
            window,
            window_start: Instant::now(),
        }
    }

    /// Acquire a single token, sleeping if necessary.
    ///
    /// If the current window has elapsed, the bucket is refilled.
    /// If no tokens are available, this method sleeps until the
    /// window resets.
    pub async fn acquire(&mut self) {
        let elapsed = self.window_start.elapsed();
        if elapsed >= self.window {
            self.tokens = self.capacity;
            self.window_start = Instant::now();
        }

        if self.tokens > 0 {
            self.tokens -= 1;
        } else {
            let remaining = self.window.saturating_sub(elapsed);
            tracing::warn!(
                sleep_ms = remaining.as_millis() as u64,
                "Zephyr rate limit reached, sleeping"
            );
            tokio::time::sleep(remaining).await;
            self.tokens = self.capacity - 1;
            self.window_start = Instant::now();
        }
    }
}

/// Authentication mode for the ZAPI.
#[derive(Debug, Clone)]
enum Auth {
    /// Bearer access key.
    AccessKey(String),
    /// HTTP basic auth.
    Basic { username: String, password: String },
}

/// HTTP client for the Zephyr ZAPI, implementing [`EntityFetcher`].
///
/// Configuration is an explicit value injected at construction; nothing is
/// read from ambient process state, so tests can run multiple differently
/// configured instances side by side.
#[derive(Debug, Clone)]
pub struct ZephyrClient {
    /// The underlying HTTP client.
    http: Client,
    /// Instance base URL without a trailing slash.
    base_url: String,
    /// Configured authentication mode.
    auth: Auth,
    /// Shared rate limiter.
    rate_limiter: Arc<Mutex<RateLimiter>>,
}

impl ZephyrClient {
    /// Create a new client from the given configuration.
    ///
    /// An access key takes precedence over basic credentials, matching the
    /// remote service's own auth rules.
    pub fn new(config: &Config) -> Self {
        let auth = if config.uses_access_key() {
            Auth::AccessKey(config.access_key.clone())
        } else {
            Auth::Basic {
                username: config.username.clone(),
                password: config.password.clone(),
            }
        };
        let rate_limiter = RateLimiter::new(
            config.fetch.requests_per_minute.max(1),
            Duration::from_secs(60),
        );
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth,
            rate_limiter: Arc::new(Mutex::new(rate_limiter)),
        }
    }

    /// Issue a rate-limited, authenticated GET and parse the JSON body.
    async fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> EngineResult<Value> {
        self.rate_limiter.lock().await.acquire().await;

        let url = format!("{}/{}/{}", self.base_url, ZAPI_PREFIX, endpoint);
        let mut request = self
            .http
            .get(&url)
            .header("Content-Type", "application/json")
            .query(params);
        request = match &self.auth {
            Auth::AccessKey(key) => request.bearer_auth(key),
            Auth::Basic { username, password } => request.basic_auth(username, Some(password)),
        };

        let response = request.send().await.map_err(|e| {
            EngineError::Fetch(format!("Zephyr request to {endpoint} failed: {e}"))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::Fetch(format!(
                "Zephyr request to {endpoint} returned {status}: {body}"
            )));
        }

        response.json::<Value>().await.map_err(|e| {
            EngineError::Fetch(format!("Zephyr response from {endpoint} parse failed: {e}"))
        })
    }
}

#[async_trait]
impl EntityFetcher for ZephyrClient {
    async fn list_projects(&self) -> EngineResult<Vec<Project>> {
        let payload = self.get("util/project", &[]).await?;
        collection_records(payload)
            .iter()
            .map(project_from_record)
            .collect()
    }

    async fn list_versions(&self, project_id: &str) -> EngineResult<Vec<Version>> {
        let endpoint = format!("util/versionBoard-versions/{project_id}");
        let payload = self.get(&endpoint, &[]).await?;
        collection_records(payload)
            .iter()
            .map(version_from_record)
            .collect()
    }

    async fn list_cycles(&self, project_id: &str, version_id: &str) -> EngineResult<Vec<Cycle>> {
        let payload = self
            .get(
                "cycle",
                &[("projectId", project_id), ("versionId", version_id)],
            )
            .await?;
        collection_records(payload)
            .iter()
            .map(cycle_from_record)
            .collect()
    }

    async fn list_executions(
        &self,
        project_id: &str,
        version_id: &str,
        cycle_id: Option<&str>,
    ) -> EngineResult<Vec<Execution>> {
        let mut params = vec![("projectId", project_id), ("versionId", version_id)];
        if let Some(cycle_id) = cycle_id {
            params.push(("cycleId", cycle_id));
        }
        let payload = self.get("execution", &params).await?;
        execution_records(payload)
            .iter()
            .map(execution_from_record)
            .collect()
    }

    async fn defect_summary(
        &self,
        project_id: &str,
        version_id: Option<&str>,
    ) -> EngineResult<DefectSummary> {
        let mut params = vec![("projectId", project_id)];
        if let Some(version_id) = version_id {
            params.push(("versionId", version_id));
        }
        let payload = self
            .get("dashboard/gadget/defect-summary-gadget", &params)
            .await?;
        Ok(DefectSummary(payload))
    }
}

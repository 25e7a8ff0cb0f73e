//! Publisher adapter over the ingestion endpoint.

use async_trait::async_trait;
use insamo_core::Reading;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Publish attempt timed out")]
    Timeout,

    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    #[error("Server returned error: {status} - {body}")]
    Server { status: u16, body: String },
}

/// Counters shared by all device loops of one run.
#[derive(Debug, Default)]
pub struct PublishStats {
    pub published: AtomicU64,
    pub failed: AtomicU64,
}

impl PublishStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&self) {
        self.published.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }
}

/// One-shot publication of a reading.
///
/// A single attempt per call, bounded by the adapter's timeout. Retry
/// policy, if any, belongs to the caller; the device loop deliberately has
/// none and drops the reading on failure.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, reading: &Reading) -> Result<(), PublishError>;
}

/// Publisher that POSTs readings as JSON to the INSAMO ingestion API.
#[derive(Clone)]
pub struct HttpPublisher {
    client: reqwest::Client,
    ingest_url: String,
}

impl HttpPublisher {
    pub fn new(server_url: &str, timeout: Duration) -> Result<Self, PublishError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PublishError::Http)?;

        let ingest_url = format!("{}/sensor-readings", server_url.trim_end_matches('/'));

        Ok(Self { client, ingest_url })
    }
}

#[async_trait]
impl Publisher for HttpPublisher {
    async fn publish(&self, reading: &Reading) -> Result<(), PublishError> {
        let response = self
            .client
            .post(&self.ingest_url)
            .json(reading)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PublishError::Timeout
                } else {
                    PublishError::Http(e)
                }
            })?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(PublishError::Server { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingest_url_joins_cleanly() {
        let p = HttpPublisher::new("http://localhost:8000/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(p.ingest_url, "http://localhost:8000/api/sensor-readings");

        let p = HttpPublisher::new("http://localhost:8000/api", Duration::from_secs(5)).unwrap();
        assert_eq!(p.ingest_url, "http://localhost:8000/api/sensor-readings");
    }

    #[test]
    fn stats_count_outcomes() {
        let stats = PublishStats::new();
        stats.record_success();
        stats.record_success();
        stats.record_failure();

        assert_eq!(stats.published.load(Ordering::Relaxed), 2);
        assert_eq!(stats.failed.load(Ordering::Relaxed), 1);
    }
}

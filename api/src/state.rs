//! API State Management

use axum::http::{header::AUTHORIZATION, HeaderMap};
use campaign::CampaignRegistry;
use economics::CurrencyFormat;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{ApiError, ApiResult};

#[derive(Clone)]
pub struct ApiState {
    /// Single write lock serializes reservations against each other
    pub registry: Arc<RwLock<CampaignRegistry>>,
    pub admin_token: Option<String>,
    pub data_file: Option<PathBuf>,
    pub currency: CurrencyFormat,
    pub start_time: std::time::Instant,
}

impl ApiState {
    pub fn new(registry: CampaignRegistry, admin_token: Option<String>) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            admin_token,
            data_file: None,
            currency: CurrencyFormat::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Persist the registry here after every mutation
    pub fn with_data_file(mut self, path: PathBuf) -> Self {
        self.data_file = Some(path);
        self
    }

    /// Currency used for the `formatted` blocks in responses
    pub fn with_currency(mut self, currency: CurrencyFormat) -> Self {
        self.currency = currency;
        self
    }

    /// Admin routes need `Authorization: Bearer <token>`. With no token
    /// configured they are closed entirely.
    pub fn require_admin(&self, headers: &HeaderMap) -> ApiResult<()> {
        let expected = self
            .admin_token
            .as_deref()
            .ok_or_else(|| ApiError::Unauthorized("admin access is disabled".to_string()))?;

        let provided = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))?;

        if provided != expected {
            return Err(ApiError::Unauthorized("invalid admin token".to_string()));
        }
        Ok(())
    }

    /// Write a snapshot if a data file is configured. The file I/O runs on
    /// the blocking pool; callers keep the registry lock across the await so
    /// snapshots land in mutation order. A failed write is logged, the
    /// mutation it follows has already succeeded.
    pub async fn persist(&self, registry: &CampaignRegistry) {
        let Some(path) = self.data_file.clone() else {
            return;
        };

        let snapshot = registry.clone();
        let path_str = path.display().to_string();
        match tokio::task::spawn_blocking(move || snapshot.save(&path)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::warn!(path = %path_str, error = %e, "failed to persist registry");
            }
            Err(e) => {
                tracing::warn!(path = %path_str, error = %e, "registry persist task failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        h
    }

    #[test]
    fn test_admin_token_check() {
        let state = ApiState::new(CampaignRegistry::new(), Some("s3cret".to_string()));

        assert!(state.require_admin(&headers("Bearer s3cret")).is_ok());
        assert!(state.require_admin(&headers("Bearer wrong")).is_err());
        assert!(state.require_admin(&headers("s3cret")).is_err());
        assert!(state.require_admin(&HeaderMap::new()).is_err());
    }

    #[test]
    fn test_admin_disabled_without_token() {
        let state = ApiState::new(CampaignRegistry::new(), None);
        assert!(matches!(
            state.require_admin(&headers("Bearer anything")),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn test_persist_writes_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("campaigns.json");
        let state = ApiState::new(CampaignRegistry::new(), None).with_data_file(path.clone());

        let registry = state.registry.read().await;
        state.persist(&registry).await;
        drop(registry);

        assert!(path.exists());
        assert_eq!(CampaignRegistry::load(&path).unwrap().campaign_count(), 0);
    }

    #[tokio::test]
    async fn test_persist_failure_is_logged_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in the way makes the final rename fail
        let path = dir.path().join("campaigns.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), b"x").unwrap();
        let state = ApiState::new(CampaignRegistry::new(), None).with_data_file(path.clone());

        let registry = state.registry.read().await;
        state.persist(&registry).await;

        assert!(path.is_dir());
    }

    #[tokio::test]
    async fn test_persist_without_data_file_is_noop() {
        let state = ApiState::new(CampaignRegistry::new(), None);
        let registry = state.registry.read().await;
        state.persist(&registry).await;
    }
}

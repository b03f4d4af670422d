//! Caller for the recommendation service with an offline fallback
//!
//! When the service cannot produce a result the client answers locally from
//! the reduced offline rule set, so callers always get a recommendation.

use reqwest::Client as HttpClient;
use std::time::Duration;

use crate::{
    error::{AppError, AppResult},
    models::{RecommendationEnvelope, RecommendationRequest},
    rules::RuleTable,
    services::generator,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct StylistClient {
    http_client: HttpClient,
    endpoint: String,
    api_key: Option<String>,
    offline_rules: &'static RuleTable,
}

impl StylistClient {
    /// `endpoint` is the full URL of the recommendation function
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> AppResult<Self> {
        Self::with_timeout(endpoint, api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        Ok(Self {
            http_client: HttpClient::builder().timeout(timeout).build()?,
            endpoint: endpoint.into(),
            api_key,
            offline_rules: RuleTable::offline(),
        })
    }

    /// Requests a recommendation, falling back to a local one on any failure
    pub async fn get_recommendation(&self, request: &RecommendationRequest) -> RecommendationEnvelope {
        match self.fetch(request).await {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(
                    endpoint = %self.endpoint,
                    error = %e,
                    "Recommendation service unavailable, using offline rules"
                );
                self.offline_recommendation(request)
            }
        }
    }

    async fn fetch(&self, request: &RecommendationRequest) -> AppResult<RecommendationEnvelope> {
        let mut builder = self.http_client.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status();
        let envelope: RecommendationEnvelope = response.json().await?;

        if !status.is_success() || !envelope.success || envelope.recommendation.is_none() {
            return Err(AppError::ExternalApi(format!(
                "Recommendation service returned status {}: {}",
                status,
                envelope
                    .error
                    .as_deref()
                    .unwrap_or("Failed to get recommendation")
            )));
        }

        Ok(envelope)
    }

    /// Locally generated result. No caption is available offline.
    pub fn offline_recommendation(&self, request: &RecommendationRequest) -> RecommendationEnvelope {
        let recommendation = generator::generate_selected(
            self.offline_rules,
            &request.item_type,
            request.gender,
            &request.categories(),
            None,
        );
        RecommendationEnvelope::success(recommendation, None)
    }
}

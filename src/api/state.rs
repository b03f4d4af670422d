use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    rules::RuleTable,
    services::{
        captioning::{Captioner, DisabledCaptioner, HuggingFaceCaptioner},
        history::{MemoryStore, PostgresStore, RecommendationStore},
    },
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub rules: &'static RuleTable,
    pub captioner: Arc<dyn Captioner>,
    pub store: Arc<dyn RecommendationStore>,
}

impl AppState {
    pub fn new(captioner: Arc<dyn Captioner>, store: Arc<dyn RecommendationStore>) -> Self {
        Self {
            rules: RuleTable::authored(),
            captioner,
            store,
        }
    }

    /// State with captioning disabled and an in-memory history
    pub fn in_memory() -> Self {
        Self::new(Arc::new(DisabledCaptioner), Arc::new(MemoryStore::new()))
    }

    /// Wires collaborators from configuration
    pub async fn from_config(config: &Config) -> AppResult<Self> {
        let captioner: Arc<dyn Captioner> = if config.captioning_enabled {
            Arc::new(HuggingFaceCaptioner::new(
                config.huggingface_api_key.clone(),
                config.caption_model_url.clone(),
                config.caption_timeout(),
            )?)
        } else {
            Arc::new(DisabledCaptioner)
        };

        let store: Arc<dyn RecommendationStore> = match &config.database_url {
            Some(url) => Arc::new(PostgresStore::connect(url).await?),
            None => {
                tracing::warn!("DATABASE_URL not set, keeping recommendation history in memory");
                Arc::new(MemoryStore::new())
            }
        };

        tracing::info!(
            captioner = captioner.name(),
            store = store.name(),
            "Application state initialized"
        );

        Ok(Self::new(captioner, store))
    }
}

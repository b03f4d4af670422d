use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{FashionRecommendation, Gender, RecommendationRequest},
};

/// Characters of the uploaded image kept in the history row
const IMAGE_PREVIEW_CHARS: usize = 100;

/// Row written to the recommendation history
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecommendationRecord {
    pub user_id: Option<String>,
    pub uploaded_item_type: String,
    pub uploaded_image_url: String,
    pub gender: Gender,
    pub recommendation_data: Value,
    pub selected_categories: Option<Vec<String>>,
}

impl NewRecommendationRecord {
    pub fn new(request: &RecommendationRequest, recommendation: &FashionRecommendation) -> AppResult<Self> {
        Ok(Self {
            user_id: request.user_id.clone(),
            uploaded_item_type: request.item_type.clone(),
            uploaded_image_url: image_preview(&request.image_base64),
            gender: request.gender,
            recommendation_data: serde_json::to_value(recommendation)?,
            selected_categories: request.selected_categories.clone(),
        })
    }
}

/// Truncated copy of the base64 payload; the full image is never stored
fn image_preview(image_base64: &str) -> String {
    let prefix: String = image_base64.chars().take(IMAGE_PREVIEW_CHARS).collect();
    format!("{}...", prefix)
}

/// Append-only recommendation history
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationStore: Send + Sync {
    /// Stores a record and returns its identifier
    async fn save(&self, record: &NewRecommendationRecord) -> AppResult<Uuid>;

    fn name(&self) -> &'static str;
}

/// History stored in the `recommendations` table
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connects, then applies pending migrations
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl RecommendationStore for PostgresStore {
    async fn save(&self, record: &NewRecommendationRecord) -> AppResult<Uuid> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO recommendations
                (user_id, uploaded_item_type, uploaded_image_url, gender,
                 recommendation_data, selected_categories)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&record.user_id)
        .bind(&record.uploaded_item_type)
        .bind(&record.uploaded_image_url)
        .bind(record.gender.as_str())
        .bind(&record.recommendation_data)
        .bind(&record.selected_categories)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}

/// Stored history entry held by [`MemoryStore`]
#[derive(Debug, Clone)]
pub struct StoredRecommendation {
    pub id: Uuid,
    pub record: NewRecommendationRecord,
    pub created_at: DateTime<Utc>,
}

/// In-process history used when no database is configured
#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<Vec<StoredRecommendation>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<StoredRecommendation> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl RecommendationStore for MemoryStore {
    async fn save(&self, record: &NewRecommendationRecord) -> AppResult<Uuid> {
        let stored = StoredRecommendation {
            id: Uuid::new_v4(),
            record: record.clone(),
            created_at: Utc::now(),
        };
        let id = stored.id;
        self.records.write().await.push(stored);
        Ok(id)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

use crate::{
    error::AppResult,
    models::{RecommendationEnvelope, RecommendationRequest},
    rules::RuleTable,
    services::{
        captioning::Captioner,
        generator,
        history::{NewRecommendationRecord, RecommendationStore},
    },
};

/// Produces the response envelope for an uploaded garment
///
/// 1. Ask the captioner for a description (absent on any failure)
/// 2. Generate recommendations from the rule table
/// 3. Record the request and result in the history store
///
/// Storage is best effort. A failed save is logged and the envelope is
/// returned without a `recommendationId`.
pub async fn recommend(
    rules: &RuleTable,
    captioner: &dyn Captioner,
    store: &dyn RecommendationStore,
    request: &RecommendationRequest,
) -> AppResult<RecommendationEnvelope> {
    let categories = request.categories();

    let caption = captioner.caption(&request.image_base64).await;
    tracing::debug!(
        captioner = captioner.name(),
        captioned = caption.is_some(),
        "Caption lookup finished"
    );

    let recommendation = generator::generate_selected(
        rules,
        &request.item_type,
        request.gender,
        &categories,
        caption.as_deref(),
    );

    let record = NewRecommendationRecord::new(request, &recommendation)?;
    let recommendation_id = match store.save(&record).await {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::error!(
                store = store.name(),
                error = %e,
                "Failed to store recommendation history"
            );
            None
        }
    };

    tracing::info!(
        item_type = %request.item_type,
        gender = %request.gender,
        categories = recommendation.recommendations.len(),
        stored = recommendation_id.is_some(),
        "Recommendation generated"
    );

    Ok(RecommendationEnvelope::success(recommendation, recommendation_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{Category, Gender};
    use crate::services::captioning::MockCaptioner;
    use crate::services::history::MockRecommendationStore;
    use mockall::predicate::eq;
    use uuid::Uuid;

    fn request(item_type: &str, gender: Gender, categories: Option<Vec<&str>>) -> RecommendationRequest {
        RecommendationRequest {
            image_base64: "aW1hZ2U=".to_string(),
            item_type: item_type.to_string(),
            gender,
            selected_categories: categories
                .map(|c| c.into_iter().map(String::from).collect()),
            user_id: None,
        }
    }

    fn captioner(caption: Option<&'static str>) -> MockCaptioner {
        let mut captioner = MockCaptioner::new();
        captioner
            .expect_caption()
            .with(eq("aW1hZ2U="))
            .times(1)
            .returning(move |_| caption.map(String::from));
        captioner.expect_name().return_const("mock");
        captioner
    }

    #[tokio::test]
    async fn test_caption_and_store_id_are_included() {
        let id = Uuid::new_v4();
        let mut store = MockRecommendationStore::new();
        store
            .expect_save()
            .withf(|record| record.uploaded_item_type == "shirt" && record.gender == Gender::Male)
            .times(1)
            .returning(move |_| Ok(id));
        store.expect_name().return_const("mock");

        let envelope = recommend(
            RuleTable::authored(),
            &captioner(Some("a blue striped shirt")),
            &store,
            &request("shirt", Gender::Male, Some(vec!["shoes"])),
        )
        .await
        .unwrap();

        assert!(envelope.success);
        assert_eq!(envelope.recommendation_id, Some(id));
        let recommendation = envelope.recommendation.unwrap();
        assert!(recommendation
            .analysis
            .ends_with("Detected: a blue striped shirt"));
        assert_eq!(recommendation.recommendations.len(), 1);
        assert_eq!(recommendation.recommendations[0].category, Category::Shoes);
    }

    #[tokio::test]
    async fn test_missing_caption_and_failed_store_still_succeed() {
        let mut store = MockRecommendationStore::new();
        store
            .expect_save()
            .times(1)
            .returning(|_| Err(AppError::Internal("database unavailable".to_string())));
        store.expect_name().return_const("mock");

        let envelope = recommend(
            RuleTable::authored(),
            &captioner(None),
            &store,
            &request("jeans", Gender::Female, None),
        )
        .await
        .unwrap();

        assert!(envelope.success);
        assert!(envelope.recommendation_id.is_none());
        let recommendation = envelope.recommendation.unwrap();
        assert_eq!(
            recommendation.analysis,
            "Versatile denim perfect for casual and smart-casual looks"
        );
        assert_eq!(recommendation.recommendations.len(), 3);
    }
}

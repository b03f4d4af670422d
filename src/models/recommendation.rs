use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Category, Gender};

/// One suggested companion product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationItem {
    pub name: String,
    /// Free-form color name or hex value
    pub color: String,
    pub style: String,
    pub description: String,
    pub match_reason: String,
}

/// Up to three items recommended for a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationCategory {
    pub category: Category,
    pub items: Vec<RecommendationItem>,
}

/// Full result returned for an uploaded garment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FashionRecommendation {
    pub analysis: String,
    pub recommendations: Vec<RecommendationCategory>,
}

impl FashionRecommendation {
    /// Returns the recommendation bucket for a category, if one was produced
    pub fn category(&self, category: Category) -> Option<&RecommendationCategory> {
        self.recommendations.iter().find(|c| c.category == category)
    }
}

/// Inbound request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    /// Only forwarded to the captioning service
    pub image_base64: String,
    pub item_type: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl RecommendationRequest {
    /// Categories to generate, in output order
    pub fn categories(&self) -> Vec<Category> {
        Category::resolve_selection(self.selected_categories.as_deref())
    }
}

/// Client-facing response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<FashionRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecommendationEnvelope {
    pub fn success(recommendation: FashionRecommendation, recommendation_id: Option<Uuid>) -> Self {
        Self {
            success: true,
            recommendation: Some(recommendation),
            recommendation_id,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            recommendation: None,
            recommendation_id: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let json = r#"{
            "imageBase64": "aGVsbG8=",
            "itemType": "jeans",
            "gender": "female",
            "selectedCategories": ["shoes", "accessories"],
            "userId": "user-42"
        }"#;

        let request: RecommendationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.item_type, "jeans");
        assert_eq!(request.gender, Gender::Female);
        assert_eq!(request.user_id.as_deref(), Some("user-42"));
        assert_eq!(
            request.categories(),
            vec![Category::Shoes, Category::Accessories]
        );
    }

    #[test]
    fn test_request_without_categories_requests_all() {
        let json = r#"{"imageBase64": "", "itemType": "shirt", "gender": "unisex"}"#;
        let request: RecommendationRequest = serde_json::from_str(json).unwrap();
        assert!(request.selected_categories.is_none());
        assert_eq!(request.categories(), Category::ALL.to_vec());
    }

    #[test]
    fn test_item_serializes_match_reason_in_camel_case() {
        let item = RecommendationItem {
            name: "Loafers".to_string(),
            color: "Brown".to_string(),
            style: "Smart Casual".to_string(),
            description: "Slip-on leather shoes".to_string(),
            match_reason: "Sophisticated yet comfortable".to_string(),
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["matchReason"], "Sophisticated yet comfortable");
        assert!(value.get("match_reason").is_none());
    }

    #[test]
    fn test_failure_envelope_omits_recommendation() {
        let value = serde_json::to_value(RecommendationEnvelope::failure("boom")).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "boom");
        assert!(value.get("recommendation").is_none());
        assert!(value.get("recommendationId").is_none());
    }
}

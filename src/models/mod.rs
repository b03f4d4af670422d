mod fashion;
mod recommendation;

pub use fashion::{Category, ClothingType, Gender};
pub use recommendation::{
    FashionRecommendation, RecommendationCategory, RecommendationEnvelope, RecommendationItem,
    RecommendationRequest,
};

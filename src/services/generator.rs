use crate::{
    models::{Category, FashionRecommendation, Gender, RecommendationCategory},
    rules::{substitution, RuleTable},
};

/// Most items returned per category
pub const MAX_ITEMS_PER_CATEGORY: usize = 3;

/// Builds a recommendation from the rule table
///
/// Pure and deterministic: the output depends only on the arguments and the
/// table. Unknown clothing types use the table's default entry, categories
/// with no authored items are skipped, and an empty caption is treated as
/// no caption. An empty category list requests all four categories.
pub fn generate(
    table: &RuleTable,
    clothing_type: &str,
    gender: Gender,
    categories: &[Category],
    image_description: Option<&str>,
) -> FashionRecommendation {
    let categories: &[Category] = if categories.is_empty() {
        &Category::ALL
    } else {
        categories
    };

    generate_selected(table, clothing_type, gender, categories, image_description)
}

/// Like [`generate`], but `categories` is taken literally
///
/// Used with a selection already resolved by
/// [`Category::resolve_selection`], where an empty list means every
/// requested name was unknown and no buckets are produced.
pub fn generate_selected(
    table: &RuleTable,
    clothing_type: &str,
    gender: Gender,
    categories: &[Category],
    image_description: Option<&str>,
) -> FashionRecommendation {
    let entry = table.lookup(clothing_type);

    let analysis = match image_description.map(str::trim).filter(|d| !d.is_empty()) {
        Some(description) => format!("{}. Detected: {}", entry.analysis, description),
        None => entry.analysis.to_string(),
    };

    let mut recommendations: Vec<RecommendationCategory> = Vec::with_capacity(categories.len());
    for &category in categories {
        let templates = entry.items(category);
        if templates.is_empty() || recommendations.iter().any(|r| r.category == category) {
            continue;
        }

        let items = templates
            .iter()
            .map(|template| substitution::apply(gender, category, template.to_item()))
            .take(MAX_ITEMS_PER_CATEGORY)
            .collect();

        recommendations.push(RecommendationCategory { category, items });
    }

    FashionRecommendation {
        analysis,
        recommendations,
    }
}

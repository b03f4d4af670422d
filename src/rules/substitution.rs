use crate::models::{Category, Gender, RecommendationItem};

/// Replacement name and description for an item, keyed by its authored name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameOverride {
    pub original: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const FEMALE_SHOES: &[NameOverride] = &[
    NameOverride {
        original: "Sneakers",
        name: "Fashion Sneakers",
        description: "Stylish athletic-inspired shoes with feminine touch",
    },
    NameOverride {
        original: "Loafers",
        name: "Ballet Flats or Loafers",
        description: "Elegant comfortable flat shoes",
    },
    NameOverride {
        original: "Chelsea Boots",
        name: "Ankle Boots",
        description: "Versatile heeled or flat ankle boots",
    },
];

pub const FEMALE_ACCESSORIES: &[NameOverride] = &[
    NameOverride {
        original: "Baseball Cap",
        name: "Fashion Hat or Cap",
        description: "Stylish headwear options",
    },
    NameOverride {
        original: "Beanie",
        name: "Beanie or Beret",
        description: "Fashionable winter headwear",
    },
];

/// Override table that applies to a gender and category, if any
pub fn overrides_for(gender: Gender, category: Category) -> &'static [NameOverride] {
    match (gender, category) {
        (Gender::Female, Category::Shoes) => FEMALE_SHOES,
        (Gender::Female, Category::Accessories) => FEMALE_ACCESSORIES,
        _ => &[],
    }
}

/// Exact-name lookup
pub fn find_override(gender: Gender, category: Category, name: &str) -> Option<&'static NameOverride> {
    overrides_for(gender, category)
        .iter()
        .find(|o| o.original == name)
}

/// Rewrites name and description when an override matches; all other fields are kept
pub fn apply(gender: Gender, category: Category, item: RecommendationItem) -> RecommendationItem {
    match find_override(gender, category, &item.name) {
        Some(o) => RecommendationItem {
            name: o.name.to_string(),
            description: o.description.to_string(),
            ..item
        },
        None => item,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> RecommendationItem {
        RecommendationItem {
            name: name.to_string(),
            color: "Brown".to_string(),
            style: "Smart Casual".to_string(),
            description: "Original description".to_string(),
            match_reason: "Original reason".to_string(),
        }
    }

    #[test]
    fn test_female_shoes_are_renamed() {
        let result = apply(Gender::Female, Category::Shoes, item("Loafers"));
        assert_eq!(result.name, "Ballet Flats or Loafers");
        assert_eq!(result.description, "Elegant comfortable flat shoes");
        assert_eq!(result.color, "Brown");
        assert_eq!(result.style, "Smart Casual");
        assert_eq!(result.match_reason, "Original reason");
    }

    #[test]
    fn test_female_accessories_are_renamed() {
        let result = apply(Gender::Female, Category::Accessories, item("Beanie"));
        assert_eq!(result.name, "Beanie or Beret");
    }

    #[test]
    fn test_male_and_unisex_pass_through() {
        for gender in [Gender::Male, Gender::Unisex] {
            assert_eq!(apply(gender, Category::Shoes, item("Sneakers")), item("Sneakers"));
            assert_eq!(
                apply(gender, Category::Accessories, item("Baseball Cap")),
                item("Baseball Cap")
            );
        }
    }

    #[test]
    fn test_other_categories_pass_through_for_female() {
        // "Sneakers" only has an override among shoes
        assert_eq!(apply(Gender::Female, Category::Tops, item("Sneakers")), item("Sneakers"));
        assert!(overrides_for(Gender::Female, Category::Bottoms).is_empty());
    }

    #[test]
    fn test_match_is_exact() {
        assert!(find_override(Gender::Female, Category::Shoes, "sneakers").is_none());
        assert!(find_override(Gender::Female, Category::Shoes, "High-Top Sneakers").is_none());
        assert!(find_override(Gender::Female, Category::Shoes, "Sneakers").is_some());
    }
}

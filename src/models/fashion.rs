use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Gender context chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unisex => "unisex",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Companion-item bucket a recommendation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tops,
    Bottoms,
    Shoes,
    Accessories,
}

impl Category {
    /// All categories, in the order they are recommended when none are selected
    pub const ALL: [Category; 4] = [
        Category::Tops,
        Category::Bottoms,
        Category::Shoes,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
        }
    }

    /// Parses a wire category name. Names outside the four buckets yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "tops" => Some(Category::Tops),
            "bottoms" => Some(Category::Bottoms),
            "shoes" => Some(Category::Shoes),
            "accessories" => Some(Category::Accessories),
            _ => None,
        }
    }

    /// Resolves the categories a caller asked for.
    ///
    /// An absent or empty selection means all four categories in fixed order.
    /// Unknown names are skipped and repeated names keep their first position.
    pub fn resolve_selection<S: AsRef<str>>(selected: Option<&[S]>) -> Vec<Category> {
        let selected = match selected {
            Some(names) if !names.is_empty() => names,
            _ => return Category::ALL.to_vec(),
        };

        let mut resolved = Vec::with_capacity(Category::ALL.len());
        for category in selected.iter().filter_map(|name| Category::parse(name.as_ref())) {
            if !resolved.contains(&category) {
                resolved.push(category);
            }
        }
        resolved
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of garment in the uploaded photo
///
/// The wire format carries an open string; anything outside the known keys
/// is folded into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClothingType {
    TShirt,
    Shirt,
    Pants,
    Jeans,
    Shoes,
    Jacket,
    Dress,
    Skirt,
    Shorts,
    Sweater,
    Hoodie,
    Other,
}

impl ClothingType {
    /// Case-sensitive lookup of a wire key
    pub fn from_key(key: &str) -> Self {
        match key {
            "t-shirt" => ClothingType::TShirt,
            "shirt" => ClothingType::Shirt,
            "pants" => ClothingType::Pants,
            "jeans" => ClothingType::Jeans,
            "shoes" => ClothingType::Shoes,
            "jacket" => ClothingType::Jacket,
            "dress" => ClothingType::Dress,
            "skirt" => ClothingType::Skirt,
            "shorts" => ClothingType::Shorts,
            "sweater" => ClothingType::Sweater,
            "hoodie" => ClothingType::Hoodie,
            _ => ClothingType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClothingType::TShirt => "t-shirt",
            ClothingType::Shirt => "shirt",
            ClothingType::Pants => "pants",
            ClothingType::Jeans => "jeans",
            ClothingType::Shoes => "shoes",
            ClothingType::Jacket => "jacket",
            ClothingType::Dress => "dress",
            ClothingType::Skirt => "skirt",
            ClothingType::Shorts => "shorts",
            ClothingType::Sweater => "sweater",
            ClothingType::Hoodie => "hoodie",
            ClothingType::Other => "other",
        }
    }
}

impl Display for ClothingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clothing_type_round_trips_known_keys() {
        for key in [
            "t-shirt", "shirt", "pants", "jeans", "shoes", "jacket", "dress", "skirt", "shorts",
            "sweater", "hoodie", "other",
        ] {
            assert_eq!(ClothingType::from_key(key).as_str(), key);
        }
    }

    #[test]
    fn test_clothing_type_is_case_sensitive() {
        assert_eq!(ClothingType::from_key("Jeans"), ClothingType::Other);
        assert_eq!(ClothingType::from_key("spacesuit"), ClothingType::Other);
    }

    #[test]
    fn test_empty_selection_means_all_categories() {
        let empty: Vec<String> = vec![];
        assert_eq!(Category::resolve_selection(Some(empty.as_slice())), Category::ALL.to_vec());
        assert_eq!(
            Category::resolve_selection::<String>(None),
            Category::ALL.to_vec()
        );
    }

    #[test]
    fn test_selection_keeps_order_and_drops_duplicates() {
        let selected = ["shoes", "tops", "shoes", "hats"];
        assert_eq!(
            Category::resolve_selection(Some(&selected[..])),
            vec![Category::Shoes, Category::Tops]
        );
    }

    #[test]
    fn test_gender_deserialization() {
        let gender: Gender = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(gender, Gender::Female);
        assert!(serde_json::from_str::<Gender>("\"robot\"").is_err());
    }
}

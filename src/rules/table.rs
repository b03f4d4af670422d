use std::collections::HashMap;

use crate::models::{Category, ClothingType, RecommendationItem};

/// Authored companion item, as stored in a rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTemplate {
    pub name: &'static str,
    pub color: &'static str,
    pub style: &'static str,
    pub description: &'static str,
    pub match_reason: &'static str,
}

impl ItemTemplate {
    pub fn to_item(&self) -> RecommendationItem {
        RecommendationItem {
            name: self.name.to_string(),
            color: self.color.to_string(),
            style: self.style.to_string(),
            description: self.description.to_string(),
            match_reason: self.match_reason.to_string(),
        }
    }
}

/// Analysis text and companion lists for one clothing type
///
/// Lists may hold more than three items; truncation happens when a
/// recommendation is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleEntry {
    pub analysis: &'static str,
    pub tops: &'static [ItemTemplate],
    pub bottoms: &'static [ItemTemplate],
    pub shoes: &'static [ItemTemplate],
    pub accessories: &'static [ItemTemplate],
}

impl RuleEntry {
    pub fn items(&self, category: Category) -> &'static [ItemTemplate] {
        match category {
            Category::Tops => self.tops,
            Category::Bottoms => self.bottoms,
            Category::Shoes => self.shoes,
            Category::Accessories => self.accessories,
        }
    }
}

/// Immutable mapping from clothing type to rule entry with a designated fallback
#[derive(Debug, Clone)]
pub struct RuleTable {
    entries: HashMap<ClothingType, RuleEntry>,
    default_type: ClothingType,
    default_entry: RuleEntry,
}

impl RuleTable {
    /// Creates a table whose only entry is the fallback used for unmatched types
    pub fn new(default_type: ClothingType, default_entry: RuleEntry) -> Self {
        let mut entries = HashMap::new();
        entries.insert(default_type, default_entry);

        Self {
            entries,
            default_type,
            default_entry,
        }
    }

    /// Adds an entry. Replacing the default type also replaces the fallback.
    pub fn with_entry(mut self, clothing_type: ClothingType, entry: RuleEntry) -> Self {
        if clothing_type == self.default_type {
            self.default_entry = entry;
        }
        self.entries.insert(clothing_type, entry);
        self
    }

    /// Looks up a wire clothing-type key; unknown keys resolve to the default entry
    pub fn lookup(&self, clothing_type: &str) -> &RuleEntry {
        self.lookup_type(ClothingType::from_key(clothing_type))
    }

    pub fn lookup_type(&self, clothing_type: ClothingType) -> &RuleEntry {
        match self.entries.get(&clothing_type) {
            Some(entry) => entry,
            None => &self.default_entry,
        }
    }

    pub fn default_type(&self) -> ClothingType {
        self.default_type
    }

    /// Whether the type has its own authored entry
    pub fn contains(&self, clothing_type: ClothingType) -> bool {
        self.entries.contains_key(&clothing_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COAT: ItemTemplate = ItemTemplate {
        name: "Coat",
        color: "Camel",
        style: "Classic",
        description: "Wool overcoat",
        match_reason: "Layers over anything",
    };

    const DEFAULT: RuleEntry = RuleEntry {
        analysis: "Default entry",
        tops: &[COAT],
        bottoms: &[],
        shoes: &[],
        accessories: &[],
    };

    const JEANS: RuleEntry = RuleEntry {
        analysis: "Jeans entry",
        tops: &[],
        bottoms: &[],
        shoes: &[COAT, COAT],
        accessories: &[],
    };

    #[test]
    fn test_lookup_exact_match() {
        let table = RuleTable::new(ClothingType::Shirt, DEFAULT).with_entry(ClothingType::Jeans, JEANS);
        assert_eq!(table.lookup("jeans"), &JEANS);
        assert_eq!(table.lookup("shirt"), &DEFAULT);
    }

    #[test]
    fn test_lookup_unknown_falls_back_to_default() {
        let table = RuleTable::new(ClothingType::Shirt, DEFAULT).with_entry(ClothingType::Jeans, JEANS);
        assert_eq!(table.lookup("spacesuit"), &DEFAULT);
        assert_eq!(table.lookup("JEANS"), &DEFAULT);
        assert_eq!(table.lookup_type(ClothingType::Dress), &DEFAULT);
        assert!(!table.contains(ClothingType::Dress));
    }

    #[test]
    fn test_replacing_default_entry_updates_fallback() {
        let table = RuleTable::new(ClothingType::Shirt, DEFAULT).with_entry(ClothingType::Shirt, JEANS);
        assert_eq!(table.lookup("unknown"), &JEANS);
    }

    #[test]
    fn test_items_by_category() {
        assert_eq!(JEANS.items(Category::Shoes).len(), 2);
        assert!(JEANS.items(Category::Tops).is_empty());
    }

    #[test]
    fn test_template_to_item_copies_every_field() {
        let item = COAT.to_item();
        assert_eq!(item.name, "Coat");
        assert_eq!(item.color, "Camel");
        assert_eq!(item.style, "Classic");
        assert_eq!(item.description, "Wool overcoat");
        assert_eq!(item.match_reason, "Layers over anything");
    }
}

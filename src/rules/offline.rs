//! Reduced rule set used when the service cannot be reached

use super::table::{ItemTemplate, RuleEntry, RuleTable};
use crate::models::ClothingType;

const T_SHIRT: RuleEntry = RuleEntry {
    analysis: "Casual t-shirt perfect for everyday wear",
    tops: &[],
    bottoms: &[
        ItemTemplate { name: "Slim Fit Jeans", color: "Dark Blue", style: "Casual", description: "Classic denim jeans", match_reason: "Perfect casual combination" },
        ItemTemplate { name: "Chino Pants", color: "Khaki", style: "Smart Casual", description: "Versatile pants", match_reason: "Elevates the t-shirt look" },
    ],
    shoes: &[
        ItemTemplate { name: "White Sneakers", color: "White", style: "Casual", description: "Clean sneakers", match_reason: "Classic casual footwear" },
        ItemTemplate { name: "Canvas Shoes", color: "Navy", style: "Casual", description: "Comfortable shoes", match_reason: "Complements casual style" },
    ],
    accessories: &[
        ItemTemplate { name: "Baseball Cap", color: "Black", style: "Casual", description: "Sporty headwear", match_reason: "Adds sporty element" },
        ItemTemplate { name: "Canvas Backpack", color: "Navy", style: "Casual", description: "Practical bag", match_reason: "Functional accessory" },
    ],
};

const SHIRT: RuleEntry = RuleEntry {
    analysis: "Versatile button-up shirt suitable for various occasions",
    tops: &[],
    bottoms: &[
        ItemTemplate { name: "Dress Pants", color: "Navy", style: "Formal", description: "Professional trousers", match_reason: "Creates polished look" },
        ItemTemplate { name: "Dark Jeans", color: "Indigo", style: "Smart Casual", description: "Refined denim", match_reason: "Balances formal and casual" },
    ],
    shoes: &[
        ItemTemplate { name: "Oxford Shoes", color: "Brown", style: "Formal", description: "Classic dress shoes", match_reason: "Professional pairing" },
        ItemTemplate { name: "Loafers", color: "Brown", style: "Smart Casual", description: "Comfortable dress shoes", match_reason: "Sophisticated yet comfortable" },
    ],
    accessories: &[
        ItemTemplate { name: "Leather Belt", color: "Brown", style: "Formal", description: "Quality belt", match_reason: "Essential accessory" },
        ItemTemplate { name: "Classic Watch", color: "Silver", style: "Formal", description: "Elegant timepiece", match_reason: "Adds sophistication" },
    ],
};

pub(super) fn build() -> RuleTable {
    RuleTable::new(ClothingType::Shirt, SHIRT).with_entry(ClothingType::TShirt, T_SHIRT)
}

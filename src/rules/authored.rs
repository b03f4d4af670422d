//! Full rule set served by the recommendation endpoint

use super::table::{ItemTemplate, RuleEntry, RuleTable};
use crate::models::ClothingType;

const fn item(
    name: &'static str,
    color: &'static str,
    style: &'static str,
    description: &'static str,
    match_reason: &'static str,
) -> ItemTemplate {
    ItemTemplate {
        name,
        color,
        style,
        description,
        match_reason,
    }
}

const T_SHIRT: RuleEntry = RuleEntry {
    analysis: "Casual t-shirt perfect for everyday wear",
    tops: &[],
    bottoms: &[
        item("Slim Fit Jeans", "Dark Blue", "Casual", "Classic denim jeans that pair well with any t-shirt", "Denim is a timeless match for casual tees, creating a relaxed yet put-together look"),
        item("Chino Pants", "Khaki or Navy", "Smart Casual", "Versatile pants that elevate your t-shirt look", "Chinos add a touch of sophistication while maintaining comfort"),
        item("Cargo Shorts", "Olive or Beige", "Casual", "Perfect for warm weather and relaxed settings", "Great for a laid-back, functional summer style"),
    ],
    shoes: &[
        item("White Sneakers", "White", "Casual", "Clean, minimalist sneakers", "White sneakers are versatile and match any t-shirt color perfectly"),
        item("Canvas Shoes", "Navy or Black", "Casual", "Comfortable everyday footwear", "Canvas shoes complement the casual vibe of a t-shirt"),
        item("Slip-on Sneakers", "Gray", "Casual", "Easy-to-wear comfortable shoes", "Effortless style that matches the easy-going nature of tees"),
    ],
    accessories: &[
        item("Baseball Cap", "Black or Navy", "Casual", "Classic sporty headwear", "Adds a sporty, youthful element to your outfit"),
        item("Leather Watch", "Brown or Black", "Casual", "Simple timepiece with leather strap", "Adds a touch of maturity without being too formal"),
        item("Canvas Backpack", "Navy or Gray", "Casual", "Practical and stylish bag", "Functional accessory that fits the casual aesthetic"),
    ],
};

const SHIRT: RuleEntry = RuleEntry {
    analysis: "Versatile button-up shirt suitable for various occasions",
    tops: &[],
    bottoms: &[
        item("Dress Pants", "Charcoal or Navy", "Formal", "Tailored trousers for professional settings", "Creates a polished, business-appropriate ensemble"),
        item("Dark Jeans", "Dark Indigo", "Smart Casual", "Refined denim for a modern look", "Balances the formality of a shirt with casual comfort"),
        item("Chino Pants", "Navy or Stone", "Smart Casual", "Versatile pants for work or weekend", "Perfect middle ground between formal and casual"),
    ],
    shoes: &[
        item("Oxford Shoes", "Brown or Black", "Formal", "Classic leather dress shoes", "Traditional pairing for a professional, put-together look"),
        item("Loafers", "Brown", "Smart Casual", "Slip-on leather shoes", "Sophisticated yet comfortable, ideal for business casual"),
        item("Chelsea Boots", "Black or Tan", "Smart Casual", "Sleek ankle boots", "Modern, versatile footwear that works day to night"),
    ],
    accessories: &[
        item("Leather Belt", "Brown or Black", "Formal", "Quality leather belt matching shoes", "Essential accessory that ties the whole outfit together"),
        item("Classic Watch", "Silver or Gold", "Formal", "Elegant timepiece with metal strap", "Adds sophistication and shows attention to detail"),
        item("Leather Briefcase", "Brown", "Professional", "Professional bag for work essentials", "Completes a business-ready appearance"),
    ],
};

const PANTS: RuleEntry = RuleEntry {
    analysis: "Well-fitted pants as a foundation for stylish outfits",
    tops: &[
        item("Button-Up Shirt", "White or Light Blue", "Smart Casual", "Classic dress shirt", "Timeless combination for a sharp, professional look"),
        item("Polo Shirt", "Navy or Gray", "Casual", "Collared knit shirt", "Smart casual option that balances comfort and style"),
        item("Crew Neck Sweater", "Navy or Burgundy", "Smart Casual", "Comfortable knitwear", "Adds warmth and sophistication for cooler weather"),
    ],
    bottoms: &[],
    shoes: &[
        item("Dress Shoes", "Black or Brown", "Formal", "Polished leather footwear", "Elevates the pants for professional or formal occasions"),
        item("Loafers", "Brown or Burgundy", "Smart Casual", "Comfortable slip-on shoes", "Versatile choice that works for various settings"),
        item("Clean Sneakers", "White or Minimal", "Casual", "Modern minimal sneakers", "Contemporary look mixing formal pants with casual footwear"),
    ],
    accessories: &[
        item("Leather Belt", "Matching Shoe Color", "Essential", "Quality belt in coordinating color", "Must-have accessory that creates visual cohesion"),
        item("Watch", "Silver or Leather Strap", "Classic", "Elegant timepiece", "Adds a refined finishing touch"),
        item("Pocket Square", "Complementary", "Formal", "Folded fabric for breast pocket", "Adds personality and flair to dressy outfits"),
    ],
};

const JEANS: RuleEntry = RuleEntry {
    analysis: "Versatile denim perfect for casual and smart-casual looks",
    tops: &[
        item("Graphic T-Shirt", "Any", "Casual", "Tee with prints or designs", "Classic casual combo perfect for everyday wear"),
        item("Henley Shirt", "Gray or Navy", "Casual", "Collarless pullover with button placket", "Step up from basic tees while staying comfortable"),
        item("Denim Jacket", "Contrasting Wash", "Casual", "Classic denim jacket in different shade", "Double denim works when washes contrast properly"),
    ],
    bottoms: &[],
    shoes: &[
        item("Sneakers", "White or Black", "Casual", "Comfortable athletic-inspired shoes", "Perfect pairing for denim, versatile and comfortable"),
        item("Desert Boots", "Tan or Brown", "Casual", "Suede ankle boots", "Adds texture and elevates jeans for smart casual"),
        item("High-Top Sneakers", "Various", "Streetwear", "Athletic shoes with ankle coverage", "Creates a street-style edge with denim"),
    ],
    accessories: &[
        item("Canvas Belt", "Navy or Khaki", "Casual", "Fabric belt with metal buckle", "Casual accessory that complements denim perfectly"),
        item("Beanie", "Black or Gray", "Casual", "Knit winter cap", "Adds urban style for cooler weather"),
        item("Backpack", "Black or Navy", "Casual", "Practical everyday bag", "Functional accessory for casual denim outfits"),
    ],
};

const SHOES: RuleEntry = RuleEntry {
    analysis: "Quality footwear to anchor your outfit",
    tops: &[
        item("Casual Shirt", "Complementary", "Casual", "Relaxed button-up or tee", "Balances your shoe choice with appropriate casualness"),
        item("Sweater", "Neutral Tones", "Smart Casual", "Comfortable knitwear", "Creates cohesive look with smart footwear"),
    ],
    bottoms: &[
        item("Jeans", "Dark or Medium Wash", "Casual", "Classic denim pants", "Universal pairing that works with most shoe styles"),
        item("Chinos", "Navy or Khaki", "Smart Casual", "Versatile cotton pants", "Elevates sneakers or complements dress shoes"),
        item("Joggers", "Black or Gray", "Athleisure", "Comfortable athletic pants", "Perfect for sporty footwear and casual style"),
    ],
    shoes: &[],
    accessories: &[
        item("Watch", "Matches Shoe Hardware", "Coordinated", "Timepiece in coordinating metal", "Creates harmony between shoe details and accessories"),
        item("Belt", "Matches Shoe Color", "Essential", "Belt in similar tone to shoes", "Classic rule of matching leather goods"),
        item("Socks", "Fun or Neutral", "Personal", "Ankle or crew socks", "Shows personality while maintaining comfort"),
    ],
};

/// Builds the five-type table with `shirt` as the fallback entry
pub(super) fn build() -> RuleTable {
    RuleTable::new(ClothingType::Shirt, SHIRT)
        .with_entry(ClothingType::TShirt, T_SHIRT)
        .with_entry(ClothingType::Pants, PANTS)
        .with_entry(ClothingType::Jeans, JEANS)
        .with_entry(ClothingType::Shoes, SHOES)
}

pub mod captioning;
pub mod generator;
pub mod history;
pub mod recommendations;

pub use captioning::{Captioner, DisabledCaptioner, HuggingFaceCaptioner};
pub use generator::generate;
pub use history::{MemoryStore, PostgresStore, RecommendationStore};

//! Rarity tiers and weighted tier assignment

mod assigner;
mod table;

pub use assigner::{select_tier, RarityAssigner, ValuableFactors};
pub use table::{is_rarity_lore, RarityTable, RarityTier, RARITY_LORE_PREFIX};

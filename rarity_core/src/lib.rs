//! rarity_core - Rarity tiers and rarity-driven item buffs
//!
//! This library provides:
//! - RarityTable: The five rarity tiers with weights and buff multipliers
//! - RarityAssigner: Weighted random tier selection, boosted for valuable materials
//! - BuffComposer: Attribute deltas, bonus enchantments and lore for a (category, tier) pair
//! - effects: Strike bonuses and mining experience for high tiers
//! - RarityEngine: Material classification plus assignment and composition in one call
//!
//! Applying a BuffSet to a live item and storing its tier belong to the host.

pub mod buff;
pub mod config;
pub mod effects;
pub mod enchant;
pub mod engine;
pub mod material;
pub mod prelude;
pub mod random;
pub mod rarity;
pub mod stacking;
pub mod types;

// Re-export core types for convenience
pub use buff::{BonusEnchantment, BuffComposer, BuffSet, BuffToggles};
pub use config::{default_config, ConfigError, RarityConfig};
pub use effects::{bonus_experience, strike_multiplier, StrikeEffect};
pub use enchant::{EnchantmentCatalog, EnchantmentKind, VanillaCatalog};
pub use engine::{ItemRoll, RarityEngine};
pub use material::{material_to_category, should_have_rarity, BaseDamageTable, ValuableMaterials};
pub use random::{ScriptedSource, SharedRng, UniformSource};
pub use rarity::{RarityAssigner, RarityTable, RarityTier};
pub use stacking::can_stack;
pub use types::{
    ArmorSlot, AssignmentTrigger, AttributeKind, CategoryKind, ItemCategory, RarityAssignmentRequest, RarityId,
    UnknownRarity,
};

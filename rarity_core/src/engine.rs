//! RarityEngine - Rolls a rarity and its buffs for a host item

use crate::buff::{BuffComposer, BuffSet};
use crate::config::RarityConfig;
use crate::effects;
use crate::enchant::EnchantmentCatalog;
use crate::material::{self, BaseDamageTable, ValuableMaterials};
use crate::random::UniformSource;
use crate::rarity::{RarityAssigner, RarityTable, RarityTier};
use crate::types::{ItemCategory, RarityId};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Result of rolling one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRoll {
    /// Normalized material id
    pub material: String,
    pub category: ItemCategory,
    pub tier: RarityId,
    pub buffs: BuffSet,
}

/// Bundles assignment, composition and the material lookup tables
#[derive(Debug, Clone, Default)]
pub struct RarityEngine {
    assigner: RarityAssigner,
    composer: BuffComposer,
    valuable: ValuableMaterials,
    damage: BaseDamageTable,
}

impl RarityEngine {
    pub fn new(table: RarityTable) -> Self {
        RarityEngine {
            assigner: RarityAssigner::new(table),
            ..RarityEngine::default()
        }
    }

    /// Build an engine from a validated config
    pub fn from_config(config: &RarityConfig) -> Self {
        RarityEngine {
            assigner: RarityAssigner::new(config.rarity_table()),
            composer: BuffComposer::default().with_toggles(config.buffs),
            valuable: config.valuable_materials(),
            damage: BaseDamageTable::default(),
        }
    }

    pub fn with_catalog(mut self, catalog: Arc<dyn EnchantmentCatalog>) -> Self {
        self.composer = BuffComposer::new(catalog).with_toggles(self.composer.toggles());
        self
    }

    pub fn with_damage_table(mut self, damage: BaseDamageTable) -> Self {
        self.damage = damage;
        self
    }

    pub fn table(&self) -> &RarityTable {
        self.assigner.table()
    }

    pub fn assigner(&self) -> &RarityAssigner {
        &self.assigner
    }

    pub fn composer(&self) -> &BuffComposer {
        &self.composer
    }

    pub fn valuable(&self) -> &ValuableMaterials {
        &self.valuable
    }

    pub fn classify(&self, material: &str) -> ItemCategory {
        material::classify(material, &self.damage)
    }

    /// Roll a random rarity and its buffs. Returns `None` for materials
    /// that never carry a rarity.
    pub fn roll(&self, material: &str, rng: &mut impl UniformSource) -> Option<ItemRoll> {
        if !material::should_have_rarity(material) {
            debug!("{} does not take a rarity", material);
            return None;
        }

        let category = self.classify(material);
        let is_valuable = self.valuable.is_valuable(material);
        let tier = self.assigner.assign(&category, is_valuable, rng);
        Some(self.build(material, category, tier, rng))
    }

    /// Apply a chosen tier, as the admin `set`/`give` commands do
    pub fn apply_tier(&self, material: &str, tier: RarityId, rng: &mut impl UniformSource) -> ItemRoll {
        let category = self.classify(material);
        let tier = self.assigner.table().tier(tier);
        self.build(material, category, tier, rng)
    }

    /// Damage factor for one hit with an item of this tier
    ///
    /// Returns `None` when no strike triggered or special effects are
    /// disabled; in the disabled case no randomness is consumed.
    pub fn strike_multiplier(&self, tier: RarityId, rng: &mut impl UniformSource) -> Option<f64> {
        if !self.composer.toggles().enable_special_effects {
            return None;
        }
        effects::strike_multiplier(tier, rng)
    }

    /// Extra experience for a block broken with an item of this tier
    pub fn bonus_experience(&self, tier: RarityId) -> u32 {
        if !self.composer.toggles().enable_special_effects {
            return 0;
        }
        effects::bonus_experience(self.table().tier(tier))
    }

    fn build(&self, material: &str, category: ItemCategory, tier: &RarityTier, rng: &mut impl UniformSource) -> ItemRoll {
        let buffs = self.composer.compose(&category, tier, rng);
        ItemRoll {
            material: material::normalize_material(material),
            category,
            tier: tier.id,
            buffs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;
    use crate::types::{ArmorSlot, AttributeKind};

    #[test]
    fn test_roll_skips_plain_materials() {
        let engine = RarityEngine::default();
        let mut rng = ScriptedSource::new(vec![0.5]);
        assert!(engine.roll("COBBLESTONE", &mut rng).is_none());
        assert!(engine.roll("AIR", &mut rng).is_none());
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_roll_valuable_material() {
        let engine = RarityEngine::default();
        // r = 0.5 * 100.5 lands in Uncommon once weights are boosted
        let mut rng = ScriptedSource::new(vec![0.5, 0.9]);
        let roll = engine.roll("diamond_sword", &mut rng).unwrap();
        assert_eq!(roll.material, "DIAMOND_SWORD");
        assert_eq!(roll.tier, RarityId::Uncommon);
        assert_eq!(roll.category, ItemCategory::Weapon { base_damage: 7.0 });
        assert!((roll.buffs.delta(AttributeKind::AttackDamage).unwrap() - 0.7).abs() < 1e-9);
        assert!(roll.buffs.bonus_enchantments.is_empty());
    }

    #[test]
    fn test_roll_ordinary_material() {
        let engine = RarityEngine::default();
        let mut rng = ScriptedSource::new(vec![0.5]);
        let roll = engine.roll("IRON_SWORD", &mut rng).unwrap();
        assert_eq!(roll.tier, RarityId::Common);
        assert_eq!(roll.buffs.delta(AttributeKind::AttackDamage), Some(0.0));
    }

    #[test]
    fn test_apply_tier() {
        let engine = RarityEngine::default();
        let mut rng = ScriptedSource::new(vec![0.0]);
        let roll = engine.apply_tier("NETHERITE_BOOTS", RarityId::Mythic, &mut rng);
        assert_eq!(roll.category, ItemCategory::armor(ArmorSlot::Feet));
        assert_eq!(roll.buffs.delta(AttributeKind::MovementSpeed), Some(0.02));
        assert!(!roll.buffs.bonus_enchantments.is_empty());
    }

    #[test]
    fn test_shield_rolls_without_buffs() {
        let engine = RarityEngine::default();
        let mut rng = ScriptedSource::new(vec![0.999]);
        let roll = engine.roll("SHIELD", &mut rng).unwrap();
        assert_eq!(roll.category, ItemCategory::Other);
        assert!(roll.buffs.is_empty());
    }

    #[test]
    fn test_from_config_applies_settings() {
        let mut config = RarityConfig::default();
        config.rarity_multipliers.mythic = 3.0;
        config.valuable_materials.enabled = false;
        config.buffs.enable_enchantment_bonuses = false;
        let engine = RarityEngine::from_config(&config);

        assert!(!engine.valuable().is_valuable("DIAMOND_SWORD"));
        let mut rng = ScriptedSource::new(vec![0.0]);
        let roll = engine.apply_tier("DIAMOND_SWORD", RarityId::Mythic, &mut rng);
        assert!((roll.buffs.delta(AttributeKind::AttackDamage).unwrap() - 14.0).abs() < 1e-9);
        assert!(roll.buffs.bonus_enchantments.is_empty());
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_tier_effects_follow_config() {
        let engine = RarityEngine::default();
        let mut rng = ScriptedSource::new(vec![0.05]);
        assert_eq!(engine.strike_multiplier(RarityId::Mythic, &mut rng), Some(1.5));
        assert_eq!(engine.bonus_experience(RarityId::Epic), 1);

        let mut config = RarityConfig::default();
        config.rarity_multipliers.uncommon = 2.0;
        let boosted = RarityEngine::from_config(&config);
        assert_eq!(boosted.bonus_experience(RarityId::Uncommon), 2);
    }

    #[test]
    fn test_tier_effects_disabled() {
        let mut config = RarityConfig::default();
        config.buffs.enable_special_effects = false;
        let engine = RarityEngine::from_config(&config);

        let mut rng = ScriptedSource::new(vec![0.0]);
        assert_eq!(engine.strike_multiplier(RarityId::Epic, &mut rng), None);
        assert_eq!(rng.consumed(), 0);
        assert_eq!(engine.bonus_experience(RarityId::Mythic), 0);
    }
}

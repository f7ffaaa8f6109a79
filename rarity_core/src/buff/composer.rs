//! BuffComposer - Maps (category, tier) to a concrete BuffSet

use crate::buff::BuffSet;
use crate::enchant::{EnchantmentCatalog, VanillaCatalog};
use crate::random::UniformSource;
use crate::rarity::RarityTier;
use crate::types::{ArmorSlot, AttributeKind, CategoryKind, ItemCategory, RarityId};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Attack speed added per point of bonus scale on Rare+ weapons
const ATTACK_SPEED_SCALE: f64 = 0.5;
/// Armor toughness added per point of bonus scale on Rare+ armor
const ARMOR_TOUGHNESS_SCALE: f64 = 2.0;
/// Max health added per point of bonus scale on Epic+ armor
const MAX_HEALTH_SCALE: f64 = 4.0;
/// Flat movement speed on Mythic boots
const MYTHIC_BOOTS_SPEED: f64 = 0.02;

/// One Bernoulli draw for a bonus enchantment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnchantRoll {
    /// Success chance; 1.0 is guaranteed and consumes no randomness
    pub chance: f64,
    /// Level ceiling before the enchantment's own cap
    pub max_level: u32,
}

const fn roll(chance: f64, max_level: u32) -> EnchantRoll {
    EnchantRoll { chance, max_level }
}

/// Bonus enchantment draws for a tier, in the order they are taken
pub fn enchant_rolls(tier: RarityId) -> &'static [EnchantRoll] {
    const UNCOMMON: &[EnchantRoll] = &[roll(0.25, 1)];
    const RARE: &[EnchantRoll] = &[roll(0.5, 2)];
    const EPIC: &[EnchantRoll] = &[roll(0.75, 3)];
    const MYTHIC: &[EnchantRoll] = &[roll(1.0, 4), roll(0.5, 3)];

    match tier {
        RarityId::Common => &[],
        RarityId::Uncommon => UNCOMMON,
        RarityId::Rare => RARE,
        RarityId::Epic => EPIC,
        RarityId::Mythic => MYTHIC,
    }
}

/// Feature switches for the kinds of buffs composed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuffToggles {
    /// Attribute deltas (damage, speed, toughness, health)
    #[serde(default = "default_true")]
    pub enable_attribute_modifiers: bool,
    /// Bonus enchantment draws
    #[serde(default = "default_true")]
    pub enable_enchantment_bonuses: bool,
    /// Lore tags, the Mythic boots speed bonus, strike and experience effects
    #[serde(default = "default_true")]
    pub enable_special_effects: bool,
}

impl Default for BuffToggles {
    fn default() -> Self {
        BuffToggles {
            enable_attribute_modifiers: true,
            enable_enchantment_bonuses: true,
            enable_special_effects: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Composes buff sets against an enchantment catalog
#[derive(Clone)]
pub struct BuffComposer {
    catalog: Arc<dyn EnchantmentCatalog>,
    toggles: BuffToggles,
}

impl Default for BuffComposer {
    fn default() -> Self {
        BuffComposer::new(Arc::new(VanillaCatalog))
    }
}

impl std::fmt::Debug for BuffComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuffComposer")
            .field("toggles", &self.toggles)
            .finish_non_exhaustive()
    }
}

impl BuffComposer {
    pub fn new(catalog: Arc<dyn EnchantmentCatalog>) -> Self {
        BuffComposer {
            catalog,
            toggles: BuffToggles::default(),
        }
    }

    pub fn with_toggles(mut self, toggles: BuffToggles) -> Self {
        self.toggles = toggles;
        self
    }

    pub fn toggles(&self) -> BuffToggles {
        self.toggles
    }

    /// Compose the full buff set for an item
    ///
    /// Attribute deltas and lore depend only on (category, tier). Bonus
    /// enchantments consume draws from `rng`. Never fails; `Other` yields
    /// an empty set.
    pub fn compose(&self, category: &ItemCategory, tier: &RarityTier, rng: &mut impl UniformSource) -> BuffSet {
        let mut buffs = self.compose_fixed(category, tier);
        if self.toggles.enable_enchantment_bonuses {
            self.roll_enchantments(&mut buffs, category.kind(), tier.id, rng);
        }
        debug!("composed {} buffs for {:?}: {:?}", tier.id, category, buffs);
        buffs
    }

    /// The deterministic part of [`compose`](Self::compose): attribute
    /// deltas and lore tags, no randomness consumed
    pub fn compose_fixed(&self, category: &ItemCategory, tier: &RarityTier) -> BuffSet {
        let mut buffs = BuffSet::new();
        let scale = tier.bonus_scale();
        let attributes = self.toggles.enable_attribute_modifiers;
        let special = self.toggles.enable_special_effects;

        match *category {
            ItemCategory::Weapon { base_damage } => {
                if attributes {
                    buffs.add_delta(AttributeKind::AttackDamage, scale * base_damage);
                    if tier.id.at_least(RarityId::Rare) {
                        buffs.add_delta(AttributeKind::AttackSpeed, scale * ATTACK_SPEED_SCALE);
                    }
                }
            }
            ItemCategory::Tool => {
                if special && tier.id.at_least(RarityId::Uncommon) {
                    buffs.add_lore(mining_speed_lore(scale));
                }
            }
            ItemCategory::Armor { slot } => {
                if attributes {
                    if tier.id.at_least(RarityId::Rare) {
                        buffs.add_delta(AttributeKind::ArmorToughness, scale * ARMOR_TOUGHNESS_SCALE);
                    }
                    if tier.id.at_least(RarityId::Epic) {
                        buffs.add_delta(AttributeKind::MaxHealth, scale * MAX_HEALTH_SCALE);
                    }
                    if special && tier.id == RarityId::Mythic && slot == ArmorSlot::Feet {
                        buffs.add_delta(AttributeKind::MovementSpeed, MYTHIC_BOOTS_SPEED);
                    }
                }
            }
            ItemCategory::Other => {}
        }

        buffs
    }

    fn roll_enchantments(&self, buffs: &mut BuffSet, category: CategoryKind, tier: RarityId, rng: &mut impl UniformSource) {
        let pool = self.catalog.pool(category);
        if pool.is_empty() {
            return;
        }

        for draw in enchant_rolls(tier) {
            if draw.chance < 1.0 && rng.next_uniform() >= draw.chance {
                continue;
            }

            let index = pick_index(rng.next_uniform(), pool.len());
            let kind = pool[index];
            let cap = draw.max_level.min(self.catalog.max_level(category, kind)).max(1);
            let level = pick_index(rng.next_uniform(), cap as usize) as u32 + 1;
            buffs.add_enchantment(kind, level);
        }
    }
}

/// Lore tag shown on Uncommon+ tools
fn mining_speed_lore(scale: f64) -> String {
    // Truncation toward zero, so 1.1 shows +10%
    format!("Mining Speed: +{}%", (scale * 100.0) as i64)
}

/// Map a uniform draw onto `0..len`
fn pick_index(u: f64, len: usize) -> usize {
    ((u * len as f64) as usize).min(len.saturating_sub(1))
}

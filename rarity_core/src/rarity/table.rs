//! RarityTable - Tier definitions with weights and buff multipliers

use crate::types::RarityId;
use serde::{Deserialize, Serialize};

/// Lore line prefix the host uses to mark an item's tier
pub const RARITY_LORE_PREFIX: &str = "Rarity: ";

/// A single rarity tier definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityTier {
    pub id: RarityId,
    /// Label shown to players
    pub display_name: String,
    /// Host color name (e.g. "gold")
    pub color_tag: String,
    /// Relative selection weight, must be > 0
    pub base_weight: f64,
    /// Buff multiplier, must be >= 1.0
    pub multiplier: f64,
}

impl RarityTier {
    pub fn new(id: RarityId, display_name: &str, color_tag: &str, base_weight: f64, multiplier: f64) -> Self {
        RarityTier {
            id,
            display_name: display_name.to_string(),
            color_tag: color_tag.to_string(),
            base_weight,
            multiplier,
        }
    }

    /// Line appended under the item's lore
    pub fn lore_line(&self) -> String {
        format!("{}{}", RARITY_LORE_PREFIX, self.display_name)
    }

    /// Buff scale applied to every multiplier-based delta
    pub fn bonus_scale(&self) -> f64 {
        self.multiplier - 1.0
    }
}

/// Check whether a lore line is a rarity marker written by [`RarityTier::lore_line`]
pub fn is_rarity_lore(line: &str) -> bool {
    line.contains(RARITY_LORE_PREFIX.trim_end())
}

/// The five rarity tiers, indexed by [`RarityId`]
///
/// Weights and multipliers may be overridden from config; tier ids and
/// their order are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityTable {
    tiers: [RarityTier; 5],
}

impl Default for RarityTable {
    fn default() -> Self {
        RarityTable {
            tiers: [
                RarityTier::new(RarityId::Common, "Common", "white", 60.0, 1.0),
                RarityTier::new(RarityId::Uncommon, "Uncommon", "green", 25.0, 1.1),
                RarityTier::new(RarityId::Rare, "Rare", "blue", 10.0, 1.25),
                RarityTier::new(RarityId::Epic, "Epic", "dark_purple", 4.0, 1.5),
                RarityTier::new(RarityId::Mythic, "Mythic", "gold", 1.0, 2.0),
            ],
        }
    }
}

impl RarityTable {
    /// Build the default table with injected weights and multipliers
    ///
    /// Both arrays are in declaration order (Common first). Values are
    /// expected to be validated by the caller.
    pub fn with_values(weights: [f64; 5], multipliers: [f64; 5]) -> Self {
        let mut table = RarityTable::default();
        for (i, tier) in table.tiers.iter_mut().enumerate() {
            tier.base_weight = weights[i];
            tier.multiplier = multipliers[i];
        }
        table
    }

    pub fn tier(&self, id: RarityId) -> &RarityTier {
        &self.tiers[id.index()]
    }

    /// Tiers in declaration order
    pub fn tiers(&self) -> impl Iterator<Item = &RarityTier> {
        self.tiers.iter()
    }

    pub fn weight_of(&self, id: RarityId) -> f64 {
        self.tier(id).base_weight
    }

    pub fn multiplier_of(&self, id: RarityId) -> f64 {
        self.tier(id).multiplier
    }

    /// Sum of all base weights
    pub fn total_base_weight(&self) -> f64 {
        self.tiers.iter().map(|t| t.base_weight).sum()
    }

    /// Look up a tier by id name, storage key or display name (case-insensitive)
    pub fn parse(&self, name: &str) -> Option<&RarityTier> {
        let name = name.trim();
        self.tiers.iter().find(|t| {
            t.id.key().eq_ignore_ascii_case(name) || t.display_name.eq_ignore_ascii_case(name)
        })
    }
}

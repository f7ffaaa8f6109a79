//! BuffSet - The composed output for one item

use crate::enchant::EnchantmentKind;
use crate::types::AttributeKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A bonus enchantment granted by rarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusEnchantment {
    pub kind: EnchantmentKind,
    /// Always >= 1
    pub level: u32,
}

/// Attribute deltas, bonus enchantments and lore tags for one item
///
/// The host merges these into the item; nothing here touches host state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuffSet {
    pub attribute_deltas: BTreeMap<AttributeKind, f64>,
    pub bonus_enchantments: Vec<BonusEnchantment>,
    pub lore_tags: Vec<String>,
}

impl BuffSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.attribute_deltas.is_empty() && self.bonus_enchantments.is_empty() && self.lore_tags.is_empty()
    }

    /// Add to an attribute delta, inserting it at zero first
    pub fn add_delta(&mut self, attribute: AttributeKind, value: f64) {
        *self.attribute_deltas.entry(attribute).or_insert(0.0) += value;
    }

    pub fn delta(&self, attribute: AttributeKind) -> Option<f64> {
        self.attribute_deltas.get(&attribute).copied()
    }

    /// Add an enchantment. An enchantment already present keeps its
    /// position and takes the new level.
    pub fn add_enchantment(&mut self, kind: EnchantmentKind, level: u32) {
        let level = level.max(1);
        match self.bonus_enchantments.iter_mut().find(|e| e.kind == kind) {
            Some(existing) => existing.level = level,
            None => self.bonus_enchantments.push(BonusEnchantment { kind, level }),
        }
    }

    pub fn enchantment_level(&self, kind: EnchantmentKind) -> Option<u32> {
        self.bonus_enchantments
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| e.level)
    }

    pub fn add_lore(&mut self, tag: impl Into<String>) {
        self.lore_tags.push(tag.into());
    }
}

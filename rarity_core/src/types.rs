//! Core identifiers shared across the rarity engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rarity tier identifier, ordered from most to least common
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RarityId {
    Common,
    Uncommon,
    Rare,
    Epic,
    Mythic,
}

impl RarityId {
    /// All tiers in declaration order. Weighted draws walk this order.
    pub fn all() -> &'static [RarityId] {
        &[
            RarityId::Common,
            RarityId::Uncommon,
            RarityId::Rare,
            RarityId::Epic,
            RarityId::Mythic,
        ]
    }

    /// Position in declaration order (Common = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Upper-case key used when tagging an item instance with its tier
    pub fn key(self) -> &'static str {
        match self {
            RarityId::Common => "COMMON",
            RarityId::Uncommon => "UNCOMMON",
            RarityId::Rare => "RARE",
            RarityId::Epic => "EPIC",
            RarityId::Mythic => "MYTHIC",
        }
    }

    /// Check if this tier meets a minimum threshold ("at least Rare")
    pub fn at_least(self, threshold: RarityId) -> bool {
        self >= threshold
    }
}

impl fmt::Display for RarityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a tier name matches no known rarity
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown rarity '{0}' (expected one of: Common, Uncommon, Rare, Epic, Mythic)")]
pub struct UnknownRarity(pub String);

impl FromStr for RarityId {
    type Err = UnknownRarity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        RarityId::all()
            .iter()
            .copied()
            .find(|id| id.key().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownRarity(s.to_string()))
    }
}

/// Armor equipment slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorSlot {
    Head,
    Chest,
    Legs,
    Feet,
}

/// Broad classification of an item's base type
///
/// Weapons carry the base attack damage of their material so that buff
/// composition stays a function of (category, tier) alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemCategory {
    Weapon { base_damage: f64 },
    Tool,
    Armor { slot: ArmorSlot },
    Other,
}

impl ItemCategory {
    /// Weapon with the default base damage for unmapped materials
    pub fn weapon() -> Self {
        ItemCategory::Weapon {
            base_damage: crate::material::DEFAULT_BASE_DAMAGE,
        }
    }

    pub fn armor(slot: ArmorSlot) -> Self {
        ItemCategory::Armor { slot }
    }

    /// Coarse kind, used to key enchantment pools
    pub fn kind(&self) -> CategoryKind {
        match self {
            ItemCategory::Weapon { .. } => CategoryKind::Weapon,
            ItemCategory::Tool => CategoryKind::Tool,
            ItemCategory::Armor { .. } => CategoryKind::Armor,
            ItemCategory::Other => CategoryKind::Other,
        }
    }
}

/// ItemCategory without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Weapon,
    Tool,
    Armor,
    Other,
}

/// Attribute a buff can modify on the host item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    AttackDamage,
    AttackSpeed,
    ArmorToughness,
    MaxHealth,
    MovementSpeed,
}

/// Host events that may roll a rarity for an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentTrigger {
    Craft,
    Join,
    Drop,
    /// Explicit admin command, always honored
    Command,
}

/// Ephemeral input to a rarity draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RarityAssignmentRequest {
    pub category: ItemCategory,
    pub is_valuable_material: bool,
}

impl RarityAssignmentRequest {
    pub fn new(category: ItemCategory, is_valuable_material: bool) -> Self {
        RarityAssignmentRequest {
            category,
            is_valuable_material,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_ordering() {
        assert!(RarityId::Common < RarityId::Uncommon);
        assert!(RarityId::Epic < RarityId::Mythic);
        assert!(RarityId::Mythic.at_least(RarityId::Rare));
        assert!(RarityId::Rare.at_least(RarityId::Rare));
        assert!(!RarityId::Uncommon.at_least(RarityId::Rare));
    }

    #[test]
    fn test_declaration_order_matches_index() {
        for (i, id) in RarityId::all().iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("epic".parse::<RarityId>(), Ok(RarityId::Epic));
        assert_eq!("MYTHIC".parse::<RarityId>(), Ok(RarityId::Mythic));
        assert_eq!(" Rare ".parse::<RarityId>(), Ok(RarityId::Rare));
        assert!("legendary".parse::<RarityId>().is_err());
    }

    #[test]
    fn test_category_serde_shape() {
        let json = serde_json::to_string(&ItemCategory::armor(ArmorSlot::Feet)).unwrap();
        assert_eq!(json, r#"{"type":"armor","slot":"feet"}"#);

        let back: ItemCategory = serde_json::from_str(r#"{"type":"weapon","base_damage":7.0}"#).unwrap();
        assert_eq!(back, ItemCategory::Weapon { base_damage: 7.0 });
    }
}

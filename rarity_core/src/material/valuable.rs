//! Premium materials that roll with boosted rarity weights

use super::normalize_material;
use std::collections::HashSet;

const DEFAULT_VALUABLE: &[&str] = &[
    // Diamond gear
    "DIAMOND_SWORD",
    "DIAMOND_PICKAXE",
    "DIAMOND_AXE",
    "DIAMOND_SHOVEL",
    "DIAMOND_HOE",
    "DIAMOND_HELMET",
    "DIAMOND_CHESTPLATE",
    "DIAMOND_LEGGINGS",
    "DIAMOND_BOOTS",
    // Netherite gear
    "NETHERITE_SWORD",
    "NETHERITE_PICKAXE",
    "NETHERITE_AXE",
    "NETHERITE_SHOVEL",
    "NETHERITE_HOE",
    "NETHERITE_HELMET",
    "NETHERITE_CHESTPLATE",
    "NETHERITE_LEGGINGS",
    "NETHERITE_BOOTS",
    // Special items
    "ELYTRA",
    "TRIDENT",
    "CROSSBOW",
    "BOW",
    "SHIELD",
    "TOTEM_OF_UNDYING",
];

/// Set membership test for valuable materials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuableMaterials {
    enabled: bool,
    materials: HashSet<String>,
}

impl Default for ValuableMaterials {
    fn default() -> Self {
        ValuableMaterials::from_ids(DEFAULT_VALUABLE.iter().copied())
    }
}

impl ValuableMaterials {
    pub fn from_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        ValuableMaterials {
            enabled: true,
            materials: ids.into_iter().map(normalize_material).collect(),
        }
    }

    /// Built-in premium material ids
    pub fn default_ids() -> &'static [&'static str] {
        DEFAULT_VALUABLE
    }

    /// A disabled set reports every material as ordinary
    pub fn disabled() -> Self {
        ValuableMaterials {
            enabled: false,
            materials: HashSet::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_valuable(&self, material: &str) -> bool {
        self.enabled && self.materials.contains(&normalize_material(material))
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let valuable = ValuableMaterials::default();
        assert_eq!(valuable.len(), 24);
        assert!(valuable.is_valuable("DIAMOND_SWORD"));
        assert!(valuable.is_valuable("netherite_boots"));
        assert!(valuable.is_valuable("TOTEM_OF_UNDYING"));
        assert!(!valuable.is_valuable("IRON_SWORD"));
        assert!(!valuable.is_valuable("GOLDEN_HELMET"));
    }

    #[test]
    fn test_disabled_set() {
        let valuable = ValuableMaterials::disabled();
        assert!(!valuable.is_enabled());
        assert!(!valuable.is_valuable("DIAMOND_SWORD"));
    }

    #[test]
    fn test_custom_ids() {
        let valuable = ValuableMaterials::from_ids(["golden_apple", "minecraft:iron_sword"]);
        assert!(valuable.is_valuable("GOLDEN_APPLE"));
        assert!(valuable.is_valuable("IRON_SWORD"));
        assert!(!valuable.is_valuable("DIAMOND_SWORD"));
    }
}

//! Material taxonomy: item classification and per-material lookup tables
//!
//! Material ids are host identifiers such as `DIAMOND_SWORD`. Matching is
//! case-insensitive; `minecraft:diamond_sword` style namespaced ids are
//! accepted as well.

mod damage;
mod valuable;

pub use damage::{BaseDamageTable, DEFAULT_BASE_DAMAGE};
pub use valuable::ValuableMaterials;

use crate::types::{ArmorSlot, ItemCategory};

/// Items that receive a rarity without being a weapon, tool or armor piece
const SPECIAL_RARITY_ITEMS: &[&str] = &["SHIELD", "ELYTRA", "FISHING_ROD", "FLINT_AND_STEEL", "SHEARS"];

/// Strip an optional namespace and upper-case the id
pub fn normalize_material(material: &str) -> String {
    let name = material.trim();
    let name = name.rsplit(':').next().unwrap_or(name);
    name.to_ascii_uppercase()
}

/// Armor slot for a material, if it is an armor piece
pub fn armor_slot(material: &str) -> Option<ArmorSlot> {
    let name = normalize_material(material);
    if name.contains("HELMET") {
        Some(ArmorSlot::Head)
    } else if name.contains("CHESTPLATE") {
        Some(ArmorSlot::Chest)
    } else if name.contains("LEGGINGS") {
        Some(ArmorSlot::Legs)
    } else if name.contains("BOOTS") {
        Some(ArmorSlot::Feet)
    } else {
        None
    }
}

fn is_tool_name(name: &str) -> bool {
    name.contains("PICKAXE") || name.contains("SHOVEL") || name.contains("HOE")
}

fn is_weapon_name(name: &str) -> bool {
    // PICKAXE also contains AXE; tools are checked first
    name.contains("SWORD")
        || name.contains("AXE")
        || matches!(name, "BOW" | "CROSSBOW" | "TRIDENT")
}

/// Classify a material using the default damage table
pub fn material_to_category(material: &str) -> ItemCategory {
    classify(material, &BaseDamageTable::default())
}

/// Classify a material, resolving weapon base damage from `damage`
pub fn classify(material: &str, damage: &BaseDamageTable) -> ItemCategory {
    let name = normalize_material(material);

    if is_tool_name(&name) {
        ItemCategory::Tool
    } else if is_weapon_name(&name) {
        ItemCategory::Weapon {
            base_damage: damage.base_damage(&name),
        }
    } else if let Some(slot) = armor_slot(&name) {
        ItemCategory::Armor { slot }
    } else {
        ItemCategory::Other
    }
}

/// Whether the host should roll a rarity for this material at all
pub fn should_have_rarity(material: &str) -> bool {
    let name = normalize_material(material);
    if name.is_empty() || name == "AIR" {
        return false;
    }
    is_tool_name(&name)
        || is_weapon_name(&name)
        || armor_slot(&name).is_some()
        || SPECIAL_RARITY_ITEMS.contains(&name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_weapons() {
        assert_eq!(
            material_to_category("DIAMOND_SWORD"),
            ItemCategory::Weapon { base_damage: 7.0 }
        );
        assert_eq!(
            material_to_category("netherite_axe"),
            ItemCategory::Weapon { base_damage: 10.0 }
        );
        assert_eq!(
            material_to_category("BOW"),
            ItemCategory::Weapon { base_damage: 1.0 }
        );
        assert_eq!(
            material_to_category("minecraft:trident"),
            ItemCategory::Weapon { base_damage: 9.0 }
        );
    }

    #[test]
    fn test_classify_tools_before_axe_match() {
        assert_eq!(material_to_category("IRON_PICKAXE"), ItemCategory::Tool);
        assert_eq!(material_to_category("GOLDEN_SHOVEL"), ItemCategory::Tool);
        assert_eq!(material_to_category("wooden_hoe"), ItemCategory::Tool);
    }

    #[test]
    fn test_classify_armor_slots() {
        assert_eq!(material_to_category("LEATHER_HELMET"), ItemCategory::armor(ArmorSlot::Head));
        assert_eq!(material_to_category("IRON_CHESTPLATE"), ItemCategory::armor(ArmorSlot::Chest));
        assert_eq!(material_to_category("CHAINMAIL_LEGGINGS"), ItemCategory::armor(ArmorSlot::Legs));
        assert_eq!(material_to_category("NETHERITE_BOOTS"), ItemCategory::armor(ArmorSlot::Feet));
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(material_to_category("SHIELD"), ItemCategory::Other);
        assert_eq!(material_to_category("DIRT"), ItemCategory::Other);
        assert_eq!(material_to_category(""), ItemCategory::Other);
    }

    #[test]
    fn test_should_have_rarity() {
        assert!(should_have_rarity("DIAMOND_SWORD"));
        assert!(should_have_rarity("stone_pickaxe"));
        assert!(should_have_rarity("GOLDEN_BOOTS"));
        assert!(should_have_rarity("ELYTRA"));
        assert!(should_have_rarity("FLINT_AND_STEEL"));
        assert!(!should_have_rarity("AIR"));
        assert!(!should_have_rarity("COBBLESTONE"));
        assert!(!should_have_rarity("TOTEM_OF_UNDYING"));
    }
}

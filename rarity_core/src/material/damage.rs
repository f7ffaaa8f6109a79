//! Weapon base attack damage by material

use super::normalize_material;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base damage for weapon materials missing from the table
pub const DEFAULT_BASE_DAMAGE: f64 = 1.0;

/// Lookup table of weapon base damage, keyed by normalized material id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseDamageTable {
    entries: HashMap<String, f64>,
}

impl Default for BaseDamageTable {
    fn default() -> Self {
        let entries = [
            ("WOODEN_SWORD", 4.0),
            ("STONE_SWORD", 5.0),
            ("IRON_SWORD", 6.0),
            ("DIAMOND_SWORD", 7.0),
            ("NETHERITE_SWORD", 8.0),
            ("WOODEN_AXE", 7.0),
            ("STONE_AXE", 9.0),
            ("IRON_AXE", 9.0),
            ("DIAMOND_AXE", 9.0),
            ("NETHERITE_AXE", 10.0),
            ("TRIDENT", 9.0),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        BaseDamageTable { entries }
    }
}

impl BaseDamageTable {
    pub fn empty() -> Self {
        BaseDamageTable {
            entries: HashMap::new(),
        }
    }

    /// Add or replace an entry
    pub fn with_entry(mut self, material: &str, damage: f64) -> Self {
        self.entries.insert(normalize_material(material), damage);
        self
    }

    pub fn base_damage(&self, material: &str) -> f64 {
        self.entries
            .get(&normalize_material(material))
            .copied()
            .unwrap_or(DEFAULT_BASE_DAMAGE)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

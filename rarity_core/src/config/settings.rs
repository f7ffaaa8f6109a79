//! Rarity configuration sections

use super::ConfigError;
use crate::buff::BuffToggles;
use crate::material::ValuableMaterials;
use crate::rarity::RarityTable;
use crate::types::{AssignmentTrigger, RarityId};
use serde::{Deserialize, Serialize};

/// Top-level rarity configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RarityConfig {
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub rarity_weights: RarityWeights,
    #[serde(default)]
    pub rarity_multipliers: RarityMultipliers,
    #[serde(default)]
    pub buffs: BuffToggles,
    #[serde(default)]
    pub valuable_materials: ValuableSettings,
}

impl RarityConfig {
    /// Reject weights that are not strictly positive and multipliers below 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = self.rarity_weights.to_array();
        let multipliers = self.rarity_multipliers.to_array();

        for id in RarityId::all() {
            let weight = weights[id.index()];
            if !weight.is_finite() || weight <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "rarity_weights.{} must be a positive number, got {}",
                    id.key().to_ascii_lowercase(),
                    weight
                )));
            }

            let multiplier = multipliers[id.index()];
            if !multiplier.is_finite() || multiplier < 1.0 {
                return Err(ConfigError::ValidationError(format!(
                    "rarity_multipliers.{} must be at least 1.0, got {}",
                    id.key().to_ascii_lowercase(),
                    multiplier
                )));
            }
        }

        Ok(())
    }

    /// Build the rarity table with the configured weights and multipliers
    pub fn rarity_table(&self) -> RarityTable {
        RarityTable::with_values(self.rarity_weights.to_array(), self.rarity_multipliers.to_array())
    }

    pub fn valuable_materials(&self) -> ValuableMaterials {
        self.valuable_materials.to_set()
    }
}

/// When the host should roll rarities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSettings {
    #[serde(default = "default_true")]
    pub assign_on_craft: bool,
    #[serde(default)]
    pub assign_on_join: bool,
    #[serde(default)]
    pub assign_on_drop: bool,
    /// Refuse to stack items whose rarities differ
    #[serde(default = "default_true")]
    pub prevent_different_rarity_stacking: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        GeneralSettings {
            assign_on_craft: true,
            assign_on_join: false,
            assign_on_drop: false,
            prevent_different_rarity_stacking: true,
        }
    }
}

impl GeneralSettings {
    /// Whether an item without a rarity should get one on this trigger
    pub fn assigns_on(&self, trigger: AssignmentTrigger) -> bool {
        match trigger {
            AssignmentTrigger::Craft => self.assign_on_craft,
            AssignmentTrigger::Join => self.assign_on_join,
            AssignmentTrigger::Drop => self.assign_on_drop,
            AssignmentTrigger::Command => true,
        }
    }
}

/// Base selection weight per tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RarityWeights {
    #[serde(default = "default_common_weight")]
    pub common: f64,
    #[serde(default = "default_uncommon_weight")]
    pub uncommon: f64,
    #[serde(default = "default_rare_weight")]
    pub rare: f64,
    #[serde(default = "default_epic_weight")]
    pub epic: f64,
    #[serde(default = "default_mythic_weight")]
    pub mythic: f64,
}

impl Default for RarityWeights {
    fn default() -> Self {
        RarityWeights {
            common: 60.0,
            uncommon: 25.0,
            rare: 10.0,
            epic: 4.0,
            mythic: 1.0,
        }
    }
}

impl RarityWeights {
    pub fn to_array(&self) -> [f64; 5] {
        [self.common, self.uncommon, self.rare, self.epic, self.mythic]
    }
}

fn default_common_weight() -> f64 {
    60.0
}
fn default_uncommon_weight() -> f64 {
    25.0
}
fn default_rare_weight() -> f64 {
    10.0
}
fn default_epic_weight() -> f64 {
    4.0
}
fn default_mythic_weight() -> f64 {
    1.0
}

/// Buff multiplier per tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RarityMultipliers {
    #[serde(default = "default_common_multiplier")]
    pub common: f64,
    #[serde(default = "default_uncommon_multiplier")]
    pub uncommon: f64,
    #[serde(default = "default_rare_multiplier")]
    pub rare: f64,
    #[serde(default = "default_epic_multiplier")]
    pub epic: f64,
    #[serde(default = "default_mythic_multiplier")]
    pub mythic: f64,
}

impl Default for RarityMultipliers {
    fn default() -> Self {
        RarityMultipliers {
            common: 1.0,
            uncommon: 1.1,
            rare: 1.25,
            epic: 1.5,
            mythic: 2.0,
        }
    }
}

impl RarityMultipliers {
    pub fn to_array(&self) -> [f64; 5] {
        [self.common, self.uncommon, self.rare, self.epic, self.mythic]
    }
}

fn default_common_multiplier() -> f64 {
    1.0
}
fn default_uncommon_multiplier() -> f64 {
    1.1
}
fn default_rare_multiplier() -> f64 {
    1.25
}
fn default_epic_multiplier() -> f64 {
    1.5
}
fn default_mythic_multiplier() -> f64 {
    2.0
}

/// Premium materials that roll with boosted weights
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuableSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_valuable_materials")]
    pub materials: Vec<String>,
}

impl Default for ValuableSettings {
    fn default() -> Self {
        ValuableSettings {
            enabled: true,
            materials: default_valuable_materials(),
        }
    }
}

impl ValuableSettings {
    pub fn to_set(&self) -> ValuableMaterials {
        if !self.enabled {
            return ValuableMaterials::disabled();
        }
        ValuableMaterials::from_ids(self.materials.iter().map(String::as_str))
    }
}

fn default_valuable_materials() -> Vec<String> {
    ValuableMaterials::default_ids()
        .iter()
        .map(|id| id.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

//! Enchantment vocabulary and per-category enchantment pools

use crate::types::CategoryKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Enchantments a bonus draw can grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnchantmentKind {
    // Weapon
    Sharpness,
    Smite,
    BaneOfArthropods,
    Knockback,
    FireAspect,
    Looting,
    SweepingEdge,
    // Tool
    Efficiency,
    SilkTouch,
    Fortune,
    // Armor
    Protection,
    FireProtection,
    ProjectileProtection,
    BlastProtection,
    Thorns,
    // Any
    Mending,
}

impl EnchantmentKind {
    /// Highest level the host allows for this enchantment
    pub fn max_level(self) -> u32 {
        use EnchantmentKind::*;
        match self {
            Sharpness | Smite | BaneOfArthropods | Efficiency => 5,
            Protection | FireProtection | ProjectileProtection | BlastProtection => 4,
            Looting | SweepingEdge | Fortune | Thorns => 3,
            Knockback | FireAspect => 2,
            SilkTouch | Mending => 1,
        }
    }

    pub fn display_name(self) -> &'static str {
        use EnchantmentKind::*;
        match self {
            Sharpness => "Sharpness",
            Smite => "Smite",
            BaneOfArthropods => "Bane of Arthropods",
            Knockback => "Knockback",
            FireAspect => "Fire Aspect",
            Looting => "Looting",
            SweepingEdge => "Sweeping Edge",
            Efficiency => "Efficiency",
            SilkTouch => "Silk Touch",
            Fortune => "Fortune",
            Protection => "Protection",
            FireProtection => "Fire Protection",
            ProjectileProtection => "Projectile Protection",
            BlastProtection => "Blast Protection",
            Thorns => "Thorns",
            Mending => "Mending",
        }
    }
}

impl fmt::Display for EnchantmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Host enchantment catalog as seen by buff composition
pub trait EnchantmentCatalog: Send + Sync {
    /// Enchantments eligible for a category, in a fixed order
    fn pool(&self, category: CategoryKind) -> &[EnchantmentKind];

    /// Maximum level of `kind` when applied to `category`
    fn max_level(&self, _category: CategoryKind, kind: EnchantmentKind) -> u32 {
        kind.max_level()
    }
}

const WEAPON_POOL: &[EnchantmentKind] = &[
    EnchantmentKind::Sharpness,
    EnchantmentKind::BaneOfArthropods,
    EnchantmentKind::Smite,
    EnchantmentKind::Knockback,
    EnchantmentKind::FireAspect,
    EnchantmentKind::Looting,
    EnchantmentKind::SweepingEdge,
    EnchantmentKind::Mending,
];

const TOOL_POOL: &[EnchantmentKind] = &[
    EnchantmentKind::Efficiency,
    EnchantmentKind::SilkTouch,
    EnchantmentKind::Fortune,
    EnchantmentKind::Mending,
];

const ARMOR_POOL: &[EnchantmentKind] = &[
    EnchantmentKind::Protection,
    EnchantmentKind::FireProtection,
    EnchantmentKind::ProjectileProtection,
    EnchantmentKind::BlastProtection,
    EnchantmentKind::Thorns,
    EnchantmentKind::Mending,
];

/// Default pools with vanilla level caps
#[derive(Debug, Clone, Copy, Default)]
pub struct VanillaCatalog;

impl EnchantmentCatalog for VanillaCatalog {
    fn pool(&self, category: CategoryKind) -> &[EnchantmentKind] {
        match category {
            CategoryKind::Weapon => WEAPON_POOL,
            CategoryKind::Tool => TOOL_POOL,
            CategoryKind::Armor => ARMOR_POOL,
            CategoryKind::Other => &[],
        }
    }
}

//! Prelude module for convenient imports
//!
//! ```rust
//! use rarity_core::prelude::*;
//! ```

// Core types
pub use crate::types::{ArmorSlot, AttributeKind, ItemCategory, RarityId};

// Tiers and assignment
pub use crate::rarity::{RarityAssigner, RarityTable, RarityTier};

// Buffs
pub use crate::buff::{BuffComposer, BuffSet};
pub use crate::enchant::EnchantmentKind;

// Engine
pub use crate::engine::{ItemRoll, RarityEngine};
pub use crate::material::material_to_category;

// Randomness
pub use crate::random::{SharedRng, UniformSource};

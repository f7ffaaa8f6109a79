//! Buff composition: attribute deltas, bonus enchantments and lore tags

mod composer;
mod set;

pub use composer::{enchant_rolls, BuffComposer, BuffToggles, EnchantRoll};
pub use set::{BonusEnchantment, BuffSet};

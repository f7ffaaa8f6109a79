//! Tier-driven combat and mining effects applied by the host at event time

use crate::random::UniformSource;
use crate::rarity::RarityTier;
use crate::types::RarityId;
use log::debug;

/// Chance-based damage bonus on a weapon hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrikeEffect {
    /// Probability of the bonus triggering on one hit
    pub chance: f64,
    /// Factor applied to the hit's damage
    pub damage_multiplier: f64,
    /// Message shown to the attacker
    pub label: &'static str,
}

const EPIC_STRIKE: StrikeEffect = StrikeEffect {
    chance: 0.10,
    damage_multiplier: 1.2,
    label: "Epic Strike!",
};

const MYTHIC_CRITICAL: StrikeEffect = StrikeEffect {
    chance: 0.15,
    damage_multiplier: 1.5,
    label: "Mythic Critical Hit!",
};

/// Experience gained per point of bonus scale when breaking a block
const BONUS_EXPERIENCE_SCALE: f64 = 2.0;

/// The strike bonus a tier carries, if any
pub fn strike_effect(tier: RarityId) -> Option<StrikeEffect> {
    match tier {
        RarityId::Epic => Some(EPIC_STRIKE),
        RarityId::Mythic => Some(MYTHIC_CRITICAL),
        _ => None,
    }
}

/// Roll the strike bonus for one hit
///
/// Returns the triggered effect. Tiers without a strike consume no
/// randomness; Epic and Mythic consume exactly one draw.
pub fn strike(tier: RarityId, rng: &mut impl UniformSource) -> Option<StrikeEffect> {
    let effect = strike_effect(tier)?;
    if rng.next_uniform() < effect.chance {
        debug!("{} triggered {}", tier, effect.label);
        Some(effect)
    } else {
        None
    }
}

/// Damage factor for one hit, `None` when nothing triggered
pub fn strike_multiplier(tier: RarityId, rng: &mut impl UniformSource) -> Option<f64> {
    strike(tier, rng).map(|effect| effect.damage_multiplier)
}

/// Extra experience dropped when a block is broken with an item of this tier
pub fn bonus_experience(tier: &RarityTier) -> u32 {
    if !tier.id.at_least(RarityId::Uncommon) {
        return 0;
    }
    (tier.bonus_scale() * BONUS_EXPERIENCE_SCALE) as u32
}

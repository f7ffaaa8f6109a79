//! RarityAssigner - Weighted random tier selection

use crate::random::UniformSource;
use crate::rarity::{RarityTable, RarityTier};
use crate::types::{ItemCategory, RarityAssignmentRequest, RarityId};
use log::{debug, trace, warn};

/// Weight factors applied to each tier when the material is valuable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuableFactors {
    pub common: f64,
    pub uncommon: f64,
    pub rare: f64,
    pub epic: f64,
    pub mythic: f64,
}

impl Default for ValuableFactors {
    fn default() -> Self {
        ValuableFactors {
            common: 0.5,
            uncommon: 1.5,
            rare: 2.0,
            epic: 2.5,
            mythic: 3.0,
        }
    }
}

impl ValuableFactors {
    pub fn get(&self, id: RarityId) -> f64 {
        match id {
            RarityId::Common => self.common,
            RarityId::Uncommon => self.uncommon,
            RarityId::Rare => self.rare,
            RarityId::Epic => self.epic,
            RarityId::Mythic => self.mythic,
        }
    }
}

/// Draws rarity tiers from a [`RarityTable`]
#[derive(Debug, Clone, Default)]
pub struct RarityAssigner {
    table: RarityTable,
    factors: ValuableFactors,
}

impl RarityAssigner {
    pub fn new(table: RarityTable) -> Self {
        RarityAssigner {
            table,
            factors: ValuableFactors::default(),
        }
    }

    pub fn with_factors(mut self, factors: ValuableFactors) -> Self {
        self.factors = factors;
        self
    }

    pub fn table(&self) -> &RarityTable {
        &self.table
    }

    /// Reweighting factor for a tier
    pub fn factor(&self, id: RarityId, is_valuable: bool) -> f64 {
        if is_valuable {
            self.factors.get(id)
        } else {
            1.0
        }
    }

    /// Per-tier weights after the valuable reweighting, in declaration order
    pub fn adjusted_weights(&self, is_valuable: bool) -> [f64; 5] {
        let mut weights = [0.0; 5];
        for tier in self.table.tiers() {
            weights[tier.id.index()] = tier.base_weight * self.factor(tier.id, is_valuable);
        }
        weights
    }

    /// Expected selection probability per tier
    pub fn probabilities(&self, is_valuable: bool) -> [f64; 5] {
        let weights = self.adjusted_weights(is_valuable);
        let total: f64 = weights.iter().sum();
        weights.map(|w| w / total)
    }

    /// Draw a tier for an item
    ///
    /// The category does not change the weights; only the valuable flag does.
    pub fn assign(
        &self,
        category: &ItemCategory,
        is_valuable: bool,
        rng: &mut impl UniformSource,
    ) -> &RarityTier {
        let weights = self.adjusted_weights(is_valuable);
        let total: f64 = weights.iter().sum();
        trace!("adjusted weights {:?} (total {}) for {:?}", weights, total, category);

        let r = rng.next_uniform() * total;
        let id = select_tier(&weights, r);
        debug!("assigned {} to {:?} (valuable: {}, r = {:.4})", id, category, is_valuable, r);
        self.table.tier(id)
    }

    pub fn assign_request(&self, request: &RarityAssignmentRequest, rng: &mut impl UniformSource) -> &RarityTier {
        self.assign(&request.category, request.is_valuable_material, rng)
    }
}

/// Walk tiers in declaration order and return the first whose cumulative
/// weight reaches `r`. Falls back to Common if rounding leaves `r` past
/// every boundary.
pub fn select_tier(weights: &[f64; 5], r: f64) -> RarityId {
    let mut cumulative = 0.0;
    for id in RarityId::all() {
        cumulative += weights[id.index()];
        if r <= cumulative {
            return *id;
        }
    }
    warn!("weighted draw r = {} exceeded cumulative weight {}, falling back to Common", r, cumulative);
    RarityId::Common
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;
    use proptest::prelude::*;

    #[test]
    fn test_adjusted_weights_normal() {
        let assigner = RarityAssigner::default();
        let weights = assigner.adjusted_weights(false);
        assert_eq!(weights, [60.0, 25.0, 10.0, 4.0, 1.0]);
    }

    #[test]
    fn test_adjusted_weights_valuable() {
        let assigner = RarityAssigner::default();
        let weights = assigner.adjusted_weights(true);
        assert_eq!(weights, [30.0, 37.5, 20.0, 10.0, 3.0]);
        let total: f64 = weights.iter().sum();
        assert!((total - 100.5).abs() < 1e-9);
    }

    #[test]
    fn test_select_tier_boundaries() {
        let weights = [60.0, 25.0, 10.0, 4.0, 1.0];
        assert_eq!(select_tier(&weights, 0.0), RarityId::Common);
        assert_eq!(select_tier(&weights, 60.0), RarityId::Common);
        assert_eq!(select_tier(&weights, 60.0001), RarityId::Uncommon);
        assert_eq!(select_tier(&weights, 85.0), RarityId::Uncommon);
        assert_eq!(select_tier(&weights, 95.0), RarityId::Rare);
        assert_eq!(select_tier(&weights, 99.0), RarityId::Epic);
        assert_eq!(select_tier(&weights, 99.5), RarityId::Mythic);
    }

    #[test]
    fn test_select_tier_upper_boundary_is_last_tier() {
        let assigner = RarityAssigner::default();
        for valuable in [false, true] {
            let weights = assigner.adjusted_weights(valuable);
            let total: f64 = weights.iter().sum();
            assert_eq!(select_tier(&weights, total), RarityId::Mythic);
        }
    }

    #[test]
    fn test_select_tier_fallback() {
        let weights = [60.0, 25.0, 10.0, 4.0, 1.0];
        assert_eq!(select_tier(&weights, 100.0 + 1e-6), RarityId::Common);
    }

    #[test]
    fn test_assign_uses_one_draw() {
        let assigner = RarityAssigner::default();
        let mut rng = ScriptedSource::new(vec![0.995]);
        let tier = assigner.assign(&ItemCategory::Tool, false, &mut rng);
        assert_eq!(tier.id, RarityId::Mythic);
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn test_valuable_shifts_mass_upward() {
        let assigner = RarityAssigner::default();
        let normal = assigner.probabilities(false);
        let valuable = assigner.probabilities(true);
        assert!(valuable[RarityId::Mythic.index()] > normal[RarityId::Mythic.index()]);
        assert!(valuable[RarityId::Common.index()] < normal[RarityId::Common.index()]);
        // Same draw lands on a higher tier for valuable items
        let mut a = ScriptedSource::new(vec![0.5]);
        let mut b = ScriptedSource::new(vec![0.5]);
        let plain = assigner.assign(&ItemCategory::Tool, false, &mut a).id;
        let boosted = assigner.assign(&ItemCategory::Tool, true, &mut b).id;
        assert_eq!(plain, RarityId::Common);
        assert_eq!(boosted, RarityId::Uncommon);
    }

    #[test]
    fn test_assign_request_matches_assign() {
        let assigner = RarityAssigner::default();
        let request = RarityAssignmentRequest::new(ItemCategory::armor(crate::types::ArmorSlot::Head), true);
        for u in [0.0, 0.3, 0.6, 0.95, 0.999] {
            let direct = assigner.assign(&request.category, request.is_valuable_material, &mut ScriptedSource::new(vec![u])).id;
            let via_request = assigner.assign_request(&request, &mut ScriptedSource::new(vec![u])).id;
            assert_eq!(direct, via_request);
        }
    }

    #[test]
    fn test_custom_factors() {
        let flat = ValuableFactors {
            common: 1.0,
            uncommon: 1.0,
            rare: 1.0,
            epic: 1.0,
            mythic: 1.0,
        };
        let assigner = RarityAssigner::default().with_factors(flat);
        assert_eq!(assigner.adjusted_weights(true), assigner.adjusted_weights(false));
    }

    proptest! {
        #[test]
        fn prop_assign_is_deterministic_for_draw(u in 0.0f64..1.0, valuable in any::<bool>()) {
            let assigner = RarityAssigner::default();
            let first = assigner.assign(&ItemCategory::Other, valuable, &mut ScriptedSource::new(vec![u])).id;
            let second = assigner.assign(&ItemCategory::Other, valuable, &mut ScriptedSource::new(vec![u])).id;
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_adjusted_total_positive(valuable in any::<bool>()) {
            let assigner = RarityAssigner::default();
            let total: f64 = assigner.adjusted_weights(valuable).iter().sum();
            prop_assert!(total > 0.0);
        }
    }
}

//! Sampling utilities for the simulator

use rarity_core::effects::strike_effect;
use rarity_core::{should_have_rarity, ItemCategory, RarityEngine, RarityId, UniformSource};

/// One line of the `tiers` report
pub struct TierRow {
    pub display_name: String,
    pub color_tag: String,
    pub weight: f64,
    pub multiplier: f64,
    pub normal_chance: f64,
    pub valuable_chance: f64,
    /// Strike chance and damage factor, when the tier has one
    pub strike: Option<(f64, f64)>,
    pub bonus_experience: u32,
}

impl TierRow {
    pub fn table(engine: &RarityEngine) -> Vec<TierRow> {
        let normal = engine.assigner().probabilities(false);
        let valuable = engine.assigner().probabilities(true);

        engine
            .table()
            .tiers()
            .map(|tier| TierRow {
                display_name: tier.display_name.clone(),
                color_tag: tier.color_tag.clone(),
                weight: tier.base_weight,
                multiplier: tier.multiplier,
                normal_chance: normal[tier.id.index()],
                valuable_chance: valuable[tier.id.index()],
                strike: strike_effect(tier.id).map(|s| (s.chance, s.damage_multiplier)),
                bonus_experience: engine.bonus_experience(tier.id),
            })
            .collect()
    }
}

/// Observed tier counts for one material
pub struct Distribution {
    pub category: ItemCategory,
    pub is_valuable: bool,
    pub samples: usize,
    counts: [usize; 5],
    expected: [f64; 5],
    names: Vec<String>,
}

/// One line of the `distribution` report
pub struct DistributionRow<'a> {
    pub display_name: &'a str,
    pub count: usize,
    pub observed: f64,
    pub expected: f64,
}

impl Distribution {
    /// Draw `samples` tiers for a material. Returns `None` for materials
    /// that never carry a rarity.
    pub fn run(engine: &RarityEngine, material: &str, samples: usize, rng: &mut impl UniformSource) -> Option<Self> {
        if !should_have_rarity(material) {
            return None;
        }

        let category = engine.classify(material);
        let is_valuable = engine.valuable().is_valuable(material);
        let mut counts = [0usize; 5];

        for _ in 0..samples {
            let tier = engine.assigner().assign(&category, is_valuable, rng);
            counts[tier.id.index()] += 1;
        }

        Some(Distribution {
            category,
            is_valuable,
            samples,
            counts,
            expected: engine.assigner().probabilities(is_valuable),
            names: engine.table().tiers().map(|t| t.display_name.clone()).collect(),
        })
    }

    pub fn rows(&self) -> Vec<DistributionRow<'_>> {
        RarityId::all()
            .iter()
            .map(|id| {
                let i = id.index();
                DistributionRow {
                    display_name: &self.names[i],
                    count: self.counts[i],
                    observed: self.observed(i),
                    expected: self.expected[i],
                }
            })
            .collect()
    }

    fn observed(&self, index: usize) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.counts[index] as f64 / self.samples as f64
        }
    }

    /// Pearson chi-square statistic against the expected chances
    pub fn chi_square(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        let n = self.samples as f64;
        self.counts
            .iter()
            .zip(self.expected.iter())
            .map(|(&observed, &p)| {
                let expected = p * n;
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_tier_rows_sum_to_one() {
        let engine = RarityEngine::default();
        let rows = TierRow::table(&engine);
        assert_eq!(rows.len(), 5);
        let normal: f64 = rows.iter().map(|r| r.normal_chance).sum();
        let valuable: f64 = rows.iter().map(|r| r.valuable_chance).sum();
        assert!((normal - 1.0).abs() < 1e-9);
        assert!((valuable - 1.0).abs() < 1e-9);
        assert!(rows[2].strike.is_none());
        assert_eq!(rows[4].strike, Some((0.15, 1.5)));
        assert_eq!(rows[4].bonus_experience, 2);
    }

    #[test]
    fn test_distribution_counts() {
        let engine = RarityEngine::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let dist = Distribution::run(&engine, "NETHERITE_HELMET", 10_000, &mut rng).unwrap();
        assert!(dist.is_valuable);
        let total: usize = dist.rows().iter().map(|r| r.count).sum();
        assert_eq!(total, 10_000);
        assert!(dist.chi_square() >= 0.0);
    }

    #[test]
    fn test_empty_distribution() {
        let engine = RarityEngine::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let dist = Distribution::run(&engine, "IRON_SWORD", 0, &mut rng).unwrap();
        assert!(dist.rows().iter().all(|r| r.observed == 0.0));
        assert_eq!(dist.chi_square(), 0.0);
    }

    #[test]
    fn test_distribution_skips_plain_materials() {
        let engine = RarityEngine::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(Distribution::run(&engine, "COBBLESTONE", 1_000, &mut rng).is_none());
        assert!(Distribution::run(&engine, "shield", 10, &mut rng).is_some());
    }
}

//! Seeded train/test splitting for the training collaborator.

use risk_structs::HealthRecord;

/// Seed used for the dataset split unless the caller overrides it.
pub const DEFAULT_SPLIT_SEED: u64 = 42;

/// Fraction of records assigned to the training side by default.
pub const DEFAULT_TRAIN_RATIO: f64 = 0.8;

/// Records partitioned into the training and evaluation sides.
#[derive(Debug, Clone, Default)]
pub struct DatasetSplit {
    /// Records the model is fitted on.
    pub training: Vec<HealthRecord>,
    /// Held-out records used only for evaluation.
    pub evaluation: Vec<HealthRecord>,
}

impl DatasetSplit {
    /// Total number of records across both sides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.training.len() + self.evaluation.len()
    }

    /// Returns true if both sides are empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.training.is_empty() && self.evaluation.is_empty()
    }
}

/// Shuffles the records with a fixed seed and splits them by ratio.
///
/// The same seed always produces the same partition, so a training run is
/// reproducible end to end.
#[must_use]
pub fn train_test_split(
    mut records: Vec<HealthRecord>,
    train_ratio: f64,
    seed: u64,
) -> DatasetSplit {
    shuffle(&mut records, seed);

    let split_at = ((records.len() as f64) * train_ratio.clamp(0.0, 1.0)).round() as usize;
    let evaluation = records.split_off(split_at.min(records.len()));

    DatasetSplit {
        training: records,
        evaluation,
    }
}

/// Shuffles items in place using an LCG-driven Fisher-Yates pass.
fn shuffle<T>(items: &mut [T], seed: u64) {
    let mut rng_state = seed.wrapping_add(12345);

    for i in (1..items.len()).rev() {
        // LCG: state = (a * state + c) mod 2^64
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let j = ((rng_state >> 33) as usize) % (i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use risk_structs::{HealthProfile, RiskLabel};

    use super::*;

    fn records(count: usize) -> Vec<HealthRecord> {
        (0..count)
            .map(|i| HealthRecord {
                profile: HealthProfile {
                    pregnancies: i as u32,
                    glucose: 100.0,
                    blood_pressure: 70.0,
                    skin_thickness: 20.0,
                    insulin: 80.0,
                    bmi: 25.0,
                    pedigree: 0.5,
                    age: 30,
                },
                outcome: RiskLabel::from((i % 2) as u8),
            })
            .collect()
    }

    #[test]
    fn test_split_proportions() {
        let split = train_test_split(records(100), DEFAULT_TRAIN_RATIO, DEFAULT_SPLIT_SEED);
        assert_eq!(split.training.len(), 80);
        assert_eq!(split.evaluation.len(), 20);
        assert_eq!(split.len(), 100);
    }

    #[test]
    fn test_split_is_deterministic() {
        let a = train_test_split(records(50), 0.8, 7);
        let b = train_test_split(records(50), 0.8, 7);
        assert_eq!(a.training, b.training);
        assert_eq!(a.evaluation, b.evaluation);
    }

    #[test]
    fn test_split_preserves_records() {
        let split = train_test_split(records(25), 0.8, DEFAULT_SPLIT_SEED);
        let mut seen: Vec<u32> = split
            .training
            .iter()
            .chain(split.evaluation.iter())
            .map(|r| r.profile.pregnancies)
            .collect();
        seen.sort_unstable();
        let expected: Vec<u32> = (0..25).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_shuffle_permutes() {
        let mut items: Vec<usize> = (0..20).collect();
        let original = items.clone();

        shuffle(&mut items, 42);

        assert_ne!(items, original, "Shuffle should change order");
        items.sort_unstable();
        assert_eq!(items, original, "Shuffle should preserve elements");
    }

    #[test]
    fn test_empty_input() {
        let split = train_test_split(Vec::new(), 0.8, DEFAULT_SPLIT_SEED);
        assert!(split.is_empty());
    }
}

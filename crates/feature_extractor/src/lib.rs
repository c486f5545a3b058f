//! Feature extractor crate for the diabetes risk model.
//!
//! This crate is the single place that marshals a [`HealthProfile`] into
//! the ordered attribute vector the classifier was trained on. Fields are
//! read by name, never positionally from caller-supplied arrays, so the
//! training-time column order cannot drift out of sync with inference.

use risk_structs::{HealthProfile, HealthRecord, RiskLabel};

/// The number of features per profile, in training-time column order:
/// Pregnancies, Glucose, BloodPressure, SkinThickness, Insulin, BMI,
/// DiabetesPedigreeFunction, Age.
pub const FEATURE_COUNT: usize = 8;

/// Documented upper bounds of the intake form, also used to scale each
/// feature into `[0, 1]` for the network.
pub mod bounds {
    /// Maximum number of pregnancies accepted by the form.
    pub const MAX_PREGNANCIES: f32 = 20.0;
    /// Maximum glucose level (mg/dL).
    pub const MAX_GLUCOSE: f32 = 300.0;
    /// Maximum diastolic blood pressure (mm Hg).
    pub const MAX_BLOOD_PRESSURE: f32 = 200.0;
    /// Maximum skin fold thickness (mm).
    pub const MAX_SKIN_THICKNESS: f32 = 100.0;
    /// Maximum 2-hour serum insulin (mu U/mL).
    pub const MAX_INSULIN: f32 = 900.0;
    /// Maximum body mass index.
    pub const MAX_BMI: f32 = 70.0;
    /// Maximum diabetes pedigree function value.
    pub const MAX_PEDIGREE: f32 = 3.0;
    /// Maximum age in years.
    pub const MAX_AGE: f32 = 120.0;
    /// Minimum age in years.
    pub const MIN_AGE: f32 = 1.0;
    /// Minimum sleep duration accepted by the form (hours).
    pub const MIN_SLEEP_HOURS: f32 = 3.0;
    /// Maximum sleep duration accepted by the form (hours).
    pub const MAX_SLEEP_HOURS: f32 = 12.0;
}

/// Feature vector marshaled from a single health profile.
///
/// Values are scaled to `[0, 1]` and laid out in the fixed column order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFeatures {
    /// The scaled feature vector.
    pub features: [f32; FEATURE_COUNT],
}

impl Default for ProfileFeatures {
    fn default() -> Self {
        Self {
            features: [0.0; FEATURE_COUNT],
        }
    }
}

/// Training sample pairing a feature vector with the recorded outcome.
#[derive(Debug, Clone)]
pub struct TrainingSample {
    pub features: ProfileFeatures,
    /// Recorded outcome as the regression target, 0.0 or 1.0.
    pub outcome: f32,
}

/// Marshals a health profile into the model input vector.
///
/// Each field is scaled by its documented form bound; the order is the
/// training schema and must not change independently of retraining.
#[must_use]
pub fn extract_features(profile: &HealthProfile) -> ProfileFeatures {
    ProfileFeatures {
        features: [
            profile.pregnancies as f32 / bounds::MAX_PREGNANCIES,
            profile.glucose / bounds::MAX_GLUCOSE,
            profile.blood_pressure / bounds::MAX_BLOOD_PRESSURE,
            profile.skin_thickness / bounds::MAX_SKIN_THICKNESS,
            profile.insulin / bounds::MAX_INSULIN,
            profile.bmi / bounds::MAX_BMI,
            profile.pedigree / bounds::MAX_PEDIGREE,
            profile.age as f32 / bounds::MAX_AGE,
        ],
    }
}

/// Converts labeled dataset rows into training samples.
#[must_use]
pub fn extract_training_samples(records: &[HealthRecord]) -> Vec<TrainingSample> {
    records
        .iter()
        .map(|record| TrainingSample {
            features: extract_features(&record.profile),
            outcome: outcome_target(record.outcome),
        })
        .collect()
}

/// Regression target for a recorded outcome.
#[must_use]
pub fn outcome_target(label: RiskLabel) -> f32 {
    f32::from(u8::from(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_structs::HealthProfile;

    const fn zero_profile() -> HealthProfile {
        HealthProfile {
            pregnancies: 0,
            glucose: 0.0,
            blood_pressure: 0.0,
            skin_thickness: 0.0,
            insulin: 0.0,
            bmi: 0.0,
            pedigree: 0.0,
            age: 0,
        }
    }

    #[test]
    fn test_zero_profile_maps_to_zeros() {
        let features = extract_features(&zero_profile());
        assert_eq!(features.features.len(), FEATURE_COUNT);
        assert!(features.features.iter().all(|&f| f == 0.0));
    }

    #[test]
    fn test_bounds_scale_to_one() {
        let profile = HealthProfile {
            pregnancies: 20,
            glucose: 300.0,
            blood_pressure: 200.0,
            skin_thickness: 100.0,
            insulin: 900.0,
            bmi: 70.0,
            pedigree: 3.0,
            age: 120,
        };
        let features = extract_features(&profile);
        for value in features.features {
            assert!((value - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_column_order_is_training_schema() {
        // Pin each column to its field so a reordering cannot slip in
        // silently.
        let profile = HealthProfile {
            pregnancies: 2,
            glucose: 150.0,
            blood_pressure: 100.0,
            skin_thickness: 25.0,
            insulin: 90.0,
            bmi: 35.0,
            pedigree: 1.5,
            age: 60,
        };
        let f = extract_features(&profile).features;
        assert!((f[0] - 2.0 / bounds::MAX_PREGNANCIES).abs() < f32::EPSILON);
        assert!((f[1] - 150.0 / bounds::MAX_GLUCOSE).abs() < f32::EPSILON);
        assert!((f[2] - 100.0 / bounds::MAX_BLOOD_PRESSURE).abs() < f32::EPSILON);
        assert!((f[3] - 25.0 / bounds::MAX_SKIN_THICKNESS).abs() < f32::EPSILON);
        assert!((f[4] - 90.0 / bounds::MAX_INSULIN).abs() < f32::EPSILON);
        assert!((f[5] - 35.0 / bounds::MAX_BMI).abs() < f32::EPSILON);
        assert!((f[6] - 1.5 / bounds::MAX_PEDIGREE).abs() < f32::EPSILON);
        assert!((f[7] - 60.0 / bounds::MAX_AGE).abs() < f32::EPSILON);
    }

    #[test]
    fn test_outcome_target() {
        assert!((outcome_target(RiskLabel::Low) - 0.0).abs() < f32::EPSILON);
        assert!((outcome_target(RiskLabel::High) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_extract_training_samples() {
        let records = vec![
            HealthRecord {
                profile: zero_profile(),
                outcome: RiskLabel::High,
            },
            HealthRecord {
                profile: zero_profile(),
                outcome: RiskLabel::Low,
            },
        ];
        let samples = extract_training_samples(&records);
        assert_eq!(samples.len(), 2);
        assert!((samples[0].outcome - 1.0).abs() < f32::EPSILON);
        assert!((samples[1].outcome - 0.0).abs() < f32::EPSILON);
    }
}

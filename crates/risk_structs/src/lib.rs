//! Common structs for risk evaluation shared across crates.

use serde::{Deserialize, Serialize};

mod activity;
mod label;
mod tier;

pub use activity::*;
pub use label::*;
pub use tier::*;

/// Clinical inputs for one risk evaluation.
///
/// Field order matches the training schema of the classifier:
/// Pregnancies, Glucose, BloodPressure, SkinThickness, Insulin, BMI,
/// DiabetesPedigreeFunction, Age. Constructed fresh per request and
/// consumed once by the predictor.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct HealthProfile {
    /// Number of pregnancies
    pub pregnancies: u32,

    /// Plasma glucose concentration (mg/dL)
    pub glucose: f32,

    /// Diastolic blood pressure (mm Hg)
    pub blood_pressure: f32,

    /// Triceps skin fold thickness (mm)
    pub skin_thickness: f32,

    /// 2-hour serum insulin (mu U/mL)
    pub insulin: f32,

    /// Body mass index
    pub bmi: f32,

    /// Diabetes pedigree function
    pub pedigree: f32,

    /// Age in years
    pub age: u32,
}

/// Self-reported habits for one risk evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LifestyleProfile {
    /// Whether the person smokes
    pub smoking: bool,

    /// Whether the person consumes alcohol
    pub alcohol: bool,

    /// Physical activity level
    pub activity: ActivityLevel,

    /// Average sleep duration in hours
    pub sleep_hours: f32,

    /// Family history of diabetes
    pub family_history: bool,
}

/// One labeled row of the training dataset: clinical inputs plus the
/// recorded outcome column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthRecord {
    /// Clinical inputs for this row
    pub profile: HealthProfile,

    /// Recorded outcome used as the training label
    pub outcome: RiskLabel,
}

/// Outcome of one combined evaluation.
///
/// Exists only for the duration of the evaluation; nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskResult {
    /// Label predicted by the classifier
    pub label: RiskLabel,

    /// Additive lifestyle score in `[0, 9]`
    pub lifestyle_score: u8,
}

impl RiskResult {
    /// Returns the message tier for the lifestyle score.
    #[must_use]
    pub const fn lifestyle_tier(&self) -> LifestyleTier {
        LifestyleTier::from_score(self.lifestyle_score)
    }

    /// Returns the combined guidance for this evaluation.
    #[must_use]
    pub const fn guidance(&self) -> OverallGuidance {
        OverallGuidance::from_evaluation(self.label, self.lifestyle_score)
    }
}

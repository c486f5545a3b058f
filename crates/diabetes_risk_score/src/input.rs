//! Input collection and validation for the risk evaluation commands.
//!
//! The CLI flags stand in for the original intake form: every value is
//! checked against the documented ranges before a profile is built, so
//! the predictor and scorer only ever see in-range inputs.

use anyhow::{Context, Result};
use clap::Args;
use feature_extractor::bounds;
use risk_structs::{ActivityLevel, HealthProfile, LifestyleProfile};

/// Clinical inputs, defaulted to the original form's starting values.
#[derive(Debug, Args)]
pub struct HealthArgs {
    /// Number of pregnancies (0-20)
    #[arg(long, default_value = "1")]
    pub pregnancies: u32,

    /// Glucose level in mg/dL (0-300)
    #[arg(long, default_value = "120")]
    pub glucose: f32,

    /// Diastolic blood pressure in mm Hg (0-200)
    #[arg(long, default_value = "80")]
    pub blood_pressure: f32,

    /// Skin fold thickness in mm (0-100)
    #[arg(long, default_value = "20")]
    pub skin_thickness: f32,

    /// 2-hour serum insulin in mu U/mL (0-900)
    #[arg(long, default_value = "80")]
    pub insulin: f32,

    /// Body mass index (0-70)
    #[arg(long, default_value = "25.0")]
    pub bmi: f32,

    /// Diabetes pedigree function (0-3)
    #[arg(long, default_value = "0.5")]
    pub pedigree: f32,

    /// Age in years (1-120)
    #[arg(long, default_value = "30")]
    pub age: u32,
}

impl HealthArgs {
    /// Validates the collected values and builds a health profile.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first out-of-range field.
    pub fn into_profile(self) -> Result<HealthProfile> {
        check_range(
            "pregnancies",
            self.pregnancies as f32,
            0.0,
            bounds::MAX_PREGNANCIES,
        )?;
        check_range("glucose", self.glucose, 0.0, bounds::MAX_GLUCOSE)?;
        check_range(
            "blood-pressure",
            self.blood_pressure,
            0.0,
            bounds::MAX_BLOOD_PRESSURE,
        )?;
        check_range(
            "skin-thickness",
            self.skin_thickness,
            0.0,
            bounds::MAX_SKIN_THICKNESS,
        )?;
        check_range("insulin", self.insulin, 0.0, bounds::MAX_INSULIN)?;
        check_range("bmi", self.bmi, 0.0, bounds::MAX_BMI)?;
        check_range("pedigree", self.pedigree, 0.0, bounds::MAX_PEDIGREE)?;
        check_range("age", self.age as f32, bounds::MIN_AGE, bounds::MAX_AGE)?;

        Ok(HealthProfile {
            pregnancies: self.pregnancies,
            glucose: self.glucose,
            blood_pressure: self.blood_pressure,
            skin_thickness: self.skin_thickness,
            insulin: self.insulin,
            bmi: self.bmi,
            pedigree: self.pedigree,
            age: self.age,
        })
    }
}

/// Lifestyle inputs, defaulted to the original form's starting values.
#[derive(Debug, Args)]
pub struct LifestyleArgs {
    /// Whether you smoke
    #[arg(long)]
    pub smoking: bool,

    /// Whether you consume alcohol
    #[arg(long)]
    pub alcohol: bool,

    /// Physical activity level
    #[arg(long, default_value = "moderate")]
    pub activity: String,

    /// Average sleep duration in hours (3-12)
    #[arg(long, default_value = "7")]
    pub sleep_hours: f32,

    /// Family history of diabetes
    #[arg(long)]
    pub family_history: bool,
}

impl LifestyleArgs {
    /// Validates the collected values and builds a lifestyle profile.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown activity level or out-of-range
    /// sleep duration.
    pub fn into_profile(self) -> Result<LifestyleProfile> {
        let activity = self
            .activity
            .parse::<ActivityLevel>()
            .context("Invalid activity level. Use: low, moderate, high")?;

        check_range(
            "sleep-hours",
            self.sleep_hours,
            bounds::MIN_SLEEP_HOURS,
            bounds::MAX_SLEEP_HOURS,
        )?;

        Ok(LifestyleProfile {
            smoking: self.smoking,
            alcohol: self.alcohol,
            activity,
            sleep_hours: self.sleep_hours,
            family_history: self.family_history,
        })
    }
}

/// Rejects values outside the documented form range for a field.
fn check_range(field: &str, value: f32, min: f32, max: f32) -> Result<()> {
    if value < min || value > max {
        anyhow::bail!("--{field} must be between {min} and {max}, got {value}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health_args() -> HealthArgs {
        HealthArgs {
            pregnancies: 1,
            glucose: 120.0,
            blood_pressure: 80.0,
            skin_thickness: 20.0,
            insulin: 80.0,
            bmi: 25.0,
            pedigree: 0.5,
            age: 30,
        }
    }

    fn lifestyle_args() -> LifestyleArgs {
        LifestyleArgs {
            smoking: false,
            alcohol: false,
            activity: String::from("moderate"),
            sleep_hours: 7.0,
            family_history: false,
        }
    }

    #[test]
    fn test_form_defaults_are_valid() {
        assert!(health_args().into_profile().is_ok());
        assert!(lifestyle_args().into_profile().is_ok());
    }

    #[test]
    fn test_out_of_range_glucose_rejected() {
        let mut args = health_args();
        args.glucose = 301.0;
        let err = args.into_profile().unwrap_err();
        assert!(err.to_string().contains("glucose"));
    }

    #[test]
    fn test_zero_age_rejected() {
        let mut args = health_args();
        args.age = 0;
        assert!(args.into_profile().is_err());
    }

    #[test]
    fn test_unknown_activity_rejected() {
        let mut args = lifestyle_args();
        args.activity = String::from("couch");
        assert!(args.into_profile().is_err());
    }

    #[test]
    fn test_sleep_bounds() {
        let mut args = lifestyle_args();
        args.sleep_hours = 2.5;
        assert!(args.into_profile().is_err());

        let mut args = lifestyle_args();
        args.sleep_hours = 12.0;
        assert!(args.into_profile().is_ok());
    }
}

//! Lifestyle risk scoring for the diabetes risk tool.
//!
//! Maps self-reported habits to an additive score used as a risk proxy
//! alongside the trained classifier. All rules are independent and total
//! over their domains, so scoring has no failure modes.

use risk_structs::{ActivityLevel, LifestyleProfile};

/// Maximum reachable lifestyle score:
/// 2 (smoking) + 1 (alcohol) + 2 (low activity) + 1 (short sleep)
/// + 3 (family history).
pub const MAX_SCORE: u8 = 9;

/// Sleep durations below this many hours add a point.
pub const SHORT_SLEEP_HOURS: f32 = 6.0;

/// Computes the lifestyle risk score for a profile.
///
/// Rules are additive and evaluated unconditionally; the activity bands
/// are mutually exclusive, so exactly one of 0, 1 or 2 points comes from
/// activity. The result is always in `[0, MAX_SCORE]`.
#[must_use]
pub fn score(profile: &LifestyleProfile) -> u8 {
    let mut score = 0;

    if profile.smoking {
        score += 2;
    }
    if profile.alcohol {
        score += 1;
    }

    score += activity_points(profile.activity);

    if profile.sleep_hours < SHORT_SLEEP_HOURS {
        score += 1;
    }
    if profile.family_history {
        score += 3;
    }

    score
}

/// Points contributed by the activity band.
#[must_use]
pub const fn activity_points(activity: ActivityLevel) -> u8 {
    match activity {
        ActivityLevel::Low => 2,
        ActivityLevel::Moderate => 1,
        ActivityLevel::High => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn profile(
        smoking: bool,
        alcohol: bool,
        activity: ActivityLevel,
        sleep_hours: f32,
        family_history: bool,
    ) -> LifestyleProfile {
        LifestyleProfile {
            smoking,
            alcohol,
            activity,
            sleep_hours,
            family_history,
        }
    }

    #[test]
    fn test_maximum_score() {
        let p = profile(true, true, ActivityLevel::Low, 5.0, true);
        assert_eq!(score(&p), MAX_SCORE);
    }

    #[test]
    fn test_minimum_score() {
        let p = profile(false, false, ActivityLevel::High, 8.0, false);
        assert_eq!(score(&p), 0);
    }

    #[test]
    fn test_moderate_boundary() {
        // Smoking plus moderate activity lands exactly on the moderate
        // message tier.
        let p = profile(true, false, ActivityLevel::Moderate, 7.0, false);
        assert_eq!(score(&p), 3);
    }

    #[test]
    fn test_short_sleep_boundary() {
        let short = profile(false, false, ActivityLevel::High, 5.9, false);
        let enough = profile(false, false, ActivityLevel::High, 6.0, false);
        assert_eq!(score(&short), 1);
        assert_eq!(score(&enough), 0);
    }

    #[test]
    fn test_activity_bands_are_exclusive() {
        for activity in [
            ActivityLevel::Low,
            ActivityLevel::Moderate,
            ActivityLevel::High,
        ] {
            let base = profile(false, false, activity, 8.0, false);
            assert_eq!(score(&base), activity_points(activity));
            assert!(activity_points(activity) <= 2);
        }
    }

    #[test]
    fn test_score_always_in_range() {
        // Exhaustive sweep over the boolean/enum domain with boundary
        // sleep values.
        for smoking in [false, true] {
            for alcohol in [false, true] {
                for activity in [
                    ActivityLevel::Low,
                    ActivityLevel::Moderate,
                    ActivityLevel::High,
                ] {
                    for sleep_hours in [3.0, 5.9, 6.0, 12.0] {
                        for family_history in [false, true] {
                            let p = profile(
                                smoking,
                                alcohol,
                                activity,
                                sleep_hours,
                                family_history,
                            );
                            assert!(score(&p) <= MAX_SCORE);
                        }
                    }
                }
            }
        }
    }
}

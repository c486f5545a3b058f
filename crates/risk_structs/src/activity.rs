use core::str::FromStr;

/// Physical activity level reported on the intake form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    /// Returns the form string representation for this level.
    #[must_use]
    pub const fn as_form_string(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = anyhow::Error;

    /// Returns the activity level from a string representation.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            _ => Err(anyhow::anyhow!("Invalid activity level: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_mixed_case() {
        assert_eq!(
            "Moderate".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::Moderate
        );
        assert_eq!("LOW".parse::<ActivityLevel>().unwrap(), ActivityLevel::Low);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("sedentary".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_round_trip() {
        for level in [
            ActivityLevel::Low,
            ActivityLevel::Moderate,
            ActivityLevel::High,
        ] {
            assert_eq!(
                level.as_form_string().parse::<ActivityLevel>().unwrap(),
                level
            );
        }
    }
}

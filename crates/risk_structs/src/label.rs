/// Binary classifier output.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
)]
pub enum RiskLabel {
    /// Low risk of diabetes (outcome 0)
    #[default]
    Low,
    /// High risk of diabetes (outcome 1)
    High,
}

impl RiskLabel {
    /// Returns true for the high-risk label.
    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

impl From<u8> for RiskLabel {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Low,
            _ => Self::High,
        }
    }
}

impl From<RiskLabel> for u8 {
    fn from(label: RiskLabel) -> Self {
        match label {
            RiskLabel::Low => 0,
            RiskLabel::High => 1,
        }
    }
}

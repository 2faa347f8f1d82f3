use std::fmt;

/// Prism risk rating, ordered from least to most severe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskRating {
    #[default]
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskRating {
    /// All ratings, most severe first (the order used in summaries)
    pub const ALL: [RiskRating; 5] = [
        RiskRating::Critical,
        RiskRating::High,
        RiskRating::Medium,
        RiskRating::Low,
        RiskRating::Info,
    ];

    /// The exact string Prism expects in `*_risk_rating` fields
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskRating::Info => "Info",
            RiskRating::Low => "Low",
            RiskRating::Medium => "Medium",
            RiskRating::High => "High",
            RiskRating::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(RiskRating::Info.as_str(), "Info");
        assert_eq!(RiskRating::Low.as_str(), "Low");
        assert_eq!(RiskRating::Medium.as_str(), "Medium");
        assert_eq!(RiskRating::High.as_str(), "High");
        assert_eq!(RiskRating::Critical.as_str(), "Critical");
    }

    #[test]
    fn test_display_matches_as_str() {
        for rating in RiskRating::ALL {
            assert_eq!(format!("{}", rating), rating.as_str());
        }
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(RiskRating::default(), RiskRating::Info);
    }

    #[test]
    fn test_ordering() {
        assert!(RiskRating::Critical > RiskRating::High);
        assert!(RiskRating::High > RiskRating::Medium);
        assert!(RiskRating::Medium > RiskRating::Low);
        assert!(RiskRating::Low > RiskRating::Info);
    }
}

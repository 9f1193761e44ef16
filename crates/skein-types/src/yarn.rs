//! Yarn weight classes and knitting gauge.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::InvalidInput;

/// Standardized yarn thickness category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YarnWeight {
    /// Lace (CYC 0-1).
    Lace,
    /// Fingering (CYC 1-2).
    Fingering,
    /// Double knitting (CYC 3).
    Dk,
    /// Worsted (CYC 4).
    Worsted,
    /// Chunky (CYC 5-6).
    Chunky,
}

impl YarnWeight {
    /// Returns the yarn weight as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lace => "lace",
            Self::Fingering => "fingering",
            Self::Dk => "dk",
            Self::Worsted => "worsted",
            Self::Chunky => "chunky",
        }
    }

    /// Returns the display label shown in the community UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Lace => "레이스 (0-1번)",
            Self::Fingering => "핑거링 (1-2번)",
            Self::Dk => "DK (3번)",
            Self::Worsted => "워스티드 (4번)",
            Self::Chunky => "청키 (5-6번)",
        }
    }

    /// Returns all yarn weights, thinnest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Lace,
            Self::Fingering,
            Self::Dk,
            Self::Worsted,
            Self::Chunky,
        ]
    }
}

impl std::fmt::Display for YarnWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for YarnWeight {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lace" => Ok(Self::Lace),
            "fingering" => Ok(Self::Fingering),
            "dk" => Ok(Self::Dk),
            "worsted" => Ok(Self::Worsted),
            "chunky" => Ok(Self::Chunky),
            _ => Err(InvalidInput::YarnWeight(s.to_string())),
        }
    }
}

/// Knitting gauge in stitches per inch.
///
/// Always within [`Gauge::MIN`]..=[`Gauge::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Gauge(u32);

impl Gauge {
    /// Loosest accepted gauge.
    pub const MIN: u32 = 1;
    /// Tightest accepted gauge.
    pub const MAX: u32 = 20;
    /// Gauge the coefficient tables are calibrated against.
    pub const REFERENCE: Self = Self(4);

    /// Creates a gauge, rejecting values outside the accepted range.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::Gauge`] if `stitches_per_inch` is not in `1..=20`.
    pub fn new(stitches_per_inch: i64) -> Result<Self, InvalidInput> {
        match u32::try_from(stitches_per_inch) {
            Ok(value) if (Self::MIN..=Self::MAX).contains(&value) => Ok(Self(value)),
            _ => Err(InvalidInput::Gauge(stitches_per_inch)),
        }
    }

    /// Returns the stitches per inch.
    #[must_use]
    pub const fn stitches_per_inch(&self) -> u32 {
        self.0
    }

    /// Returns the ratio of this gauge to the reference gauge.
    #[must_use]
    pub fn factor(&self) -> f64 {
        f64::from(self.0) / f64::from(Self::REFERENCE.0)
    }
}

impl Default for Gauge {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl TryFrom<i64> for Gauge {
    type Error = InvalidInput;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Gauge> for u32 {
    fn from(gauge: Gauge) -> Self {
        gauge.0
    }
}

impl std::fmt::Display for Gauge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} st/in", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yarn_weight_parse() {
        assert_eq!("DK".parse::<YarnWeight>().unwrap(), YarnWeight::Dk);
        assert_eq!(" Worsted ".parse::<YarnWeight>().unwrap(), YarnWeight::Worsted);
        assert_eq!(
            "jumbo".parse::<YarnWeight>(),
            Err(InvalidInput::YarnWeight("jumbo".to_string()))
        );
    }

    #[test]
    fn test_yarn_weight_rejects_other_names() {
        for name in ["aran", "bulky", "sock", "sport"] {
            assert_eq!(
                name.parse::<YarnWeight>(),
                Err(InvalidInput::YarnWeight(name.to_string()))
            );
        }
    }

    #[test]
    fn test_gauge_bounds() {
        assert_eq!(Gauge::new(1).unwrap().stitches_per_inch(), 1);
        assert_eq!(Gauge::new(20).unwrap().stitches_per_inch(), 20);
        assert_eq!(Gauge::new(0), Err(InvalidInput::Gauge(0)));
        assert_eq!(Gauge::new(-4), Err(InvalidInput::Gauge(-4)));
        assert_eq!(Gauge::new(21), Err(InvalidInput::Gauge(21)));
        assert_eq!(Gauge::default().stitches_per_inch(), 4);
    }

    #[test]
    fn test_gauge_factor() {
        assert!((Gauge::default().factor() - 1.0).abs() < f64::EPSILON);
        assert!((Gauge::new(8).unwrap().factor() - 2.0).abs() < f64::EPSILON);
        assert!((Gauge::new(2).unwrap().factor() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gauge_serde() {
        let gauge: Gauge = serde_json::from_str("6").unwrap();
        assert_eq!(gauge.stitches_per_inch(), 6);
        assert_eq!(serde_json::to_string(&gauge).unwrap(), "6");
        assert!(serde_json::from_str::<Gauge>("0").is_err());
        assert!(serde_json::from_str::<Gauge>("-3").is_err());
    }
}

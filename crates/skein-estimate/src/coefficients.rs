//! Coefficient tables behind the yarn estimate.
//!
//! Fabric yields are meters of yarn per square meter of stockinette at the
//! reference gauge of 4 stitches per inch. Project areas are approximate
//! finished-object surface in square meters.

use serde::{Deserialize, Serialize};
use skein_types::{PatternType, Size, YarnWeight};

/// Length and density characteristics of a yarn weight class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YarnProfile {
    /// Yarn weight this profile describes.
    pub yarn_weight: YarnWeight,
    /// Meters of yarn consumed per square meter of fabric.
    pub meters_per_square_meter: f64,
    /// Meters of yarn per gram.
    pub meters_per_gram: f64,
}

impl YarnProfile {
    /// Returns the profile for a yarn weight.
    #[must_use]
    pub const fn for_weight(yarn_weight: YarnWeight) -> Self {
        let (meters_per_square_meter, meters_per_gram) = match yarn_weight {
            YarnWeight::Lace => (2400.0, 8.0),
            YarnWeight::Fingering => (1600.0, 4.0),
            YarnWeight::Dk => (1150.0, 2.5),
            YarnWeight::Worsted => (950.0, 2.0),
            YarnWeight::Chunky => (600.0, 1.2),
        };
        Self {
            yarn_weight,
            meters_per_square_meter,
            meters_per_gram,
        }
    }

    /// Returns the fabric weight in grams per square meter.
    #[must_use]
    pub const fn grams_per_square_meter(&self) -> f64 {
        self.meters_per_square_meter / self.meters_per_gram
    }
}

/// Returns the fabric area in square meters of a project, or `None` if the
/// size is not offered for the pattern type.
#[must_use]
pub const fn project_area(pattern_type: PatternType, size: Size) -> Option<f64> {
    let area = match (pattern_type, size) {
        (PatternType::Hat, Size::Baby) => 0.06,
        (PatternType::Hat, Size::Child) => 0.09,
        (PatternType::Hat, Size::Adult) => 0.12,
        (PatternType::Scarf, Size::Short) => 0.20,
        (PatternType::Scarf, Size::Medium) => 0.30,
        (PatternType::Scarf, Size::Long) => 0.40,
        (PatternType::Sweater, Size::Baby) => 0.35,
        (PatternType::Sweater, Size::Child) => 0.70,
        (PatternType::Sweater, Size::Adult) => 1.30,
        (PatternType::Blanket, Size::Baby) => 0.60,
        (PatternType::Blanket, Size::Throw) => 1.50,
        (PatternType::Blanket, Size::Full) => 3.00,
        _ => return None,
    };
    Some(area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thinner_yarn_goes_further() {
        let weights = YarnWeight::all();
        for pair in weights.windows(2) {
            let thin = YarnProfile::for_weight(pair[0]);
            let thick = YarnProfile::for_weight(pair[1]);
            assert!(thin.meters_per_gram > thick.meters_per_gram);
            assert!(thin.meters_per_square_meter > thick.meters_per_square_meter);
        }
    }

    #[test]
    fn test_every_offered_size_has_area() {
        for pattern_type in PatternType::all() {
            for size in Size::all() {
                assert_eq!(
                    project_area(*pattern_type, *size).is_some(),
                    size.applies_to(*pattern_type),
                    "{pattern_type}/{size}"
                );
            }
        }
    }

    #[test]
    fn test_areas_grow_with_size() {
        for pattern_type in PatternType::all() {
            let areas: Vec<f64> = pattern_type
                .sizes()
                .iter()
                .filter_map(|size| project_area(*pattern_type, *size))
                .collect();
            assert!(areas.windows(2).all(|w| w[0] < w[1]), "{pattern_type}");
        }
    }

    #[test]
    fn test_fabric_weight() {
        let worsted = YarnProfile::for_weight(YarnWeight::Worsted);
        assert!((worsted.grams_per_square_meter() - 475.0).abs() < 1e-9);

        const CHUNKY: f64 = YarnProfile::for_weight(YarnWeight::Chunky).grams_per_square_meter();
        assert!((CHUNKY - 500.0).abs() < 1e-9);
    }
}

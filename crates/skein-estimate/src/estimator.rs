//! Yarn estimation logic.

use std::sync::OnceLock;

use skein_types::{EstimationRequest, EstimationResult, InvalidInput, SkeinError};

use crate::coefficients::{YarnProfile, project_area};

/// Extra yarn bought on top of the estimate, as a fraction (15%).
pub const DEFAULT_SAFETY_MARGIN: f64 = 0.15;

/// Nominal skein size in grams.
pub const DEFAULT_SKEIN_GRAMS: f64 = 50.0;

/// Static estimator instance.
static ESTIMATOR: OnceLock<YarnEstimator> = OnceLock::new();

/// Yarn quantity estimator.
///
/// Estimates are pure functions of the request and the estimator's two
/// settings, so a single instance can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YarnEstimator {
    /// Fraction of extra yarn added before rounding up to whole skeins.
    safety_margin: f64,
    /// Grams of yarn per skein.
    skein_grams: f64,
}

impl YarnEstimator {
    /// Creates an estimator with the given margin and skein size.
    ///
    /// # Errors
    ///
    /// Returns [`SkeinError::Config`] if the margin is negative or not
    /// finite, or the skein size is not a positive finite number.
    pub fn new(safety_margin: f64, skein_grams: f64) -> Result<Self, SkeinError> {
        if !safety_margin.is_finite() || safety_margin < 0.0 {
            return Err(SkeinError::Config(format!(
                "safety margin must be a non-negative fraction, got {safety_margin}"
            )));
        }
        if !skein_grams.is_finite() || skein_grams <= 0.0 {
            return Err(SkeinError::Config(format!(
                "skein size must be a positive number of grams, got {skein_grams}"
            )));
        }
        Ok(Self {
            safety_margin,
            skein_grams,
        })
    }

    /// Returns the global estimator instance with default settings.
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR.get_or_init(Self::default)
    }

    /// Returns the safety margin fraction.
    #[must_use]
    pub const fn safety_margin(&self) -> f64 {
        self.safety_margin
    }

    /// Returns the skein size in grams.
    #[must_use]
    pub const fn skein_grams(&self) -> f64 {
        self.skein_grams
    }

    /// Estimates the yarn needed for a project.
    ///
    /// meters = fabric yield of the yarn weight * project area * gauge factor,
    /// grams = meters / meters per gram. Both are reported to one decimal and
    /// the skein count is derived from the reported grams.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::SizeForPattern`] if the size has no area for
    /// the pattern type.
    pub fn estimate(&self, request: &EstimationRequest) -> Result<EstimationResult, InvalidInput> {
        let pattern_type = request.pattern_type();
        let size = request.size();
        let area = project_area(pattern_type, size)
            .ok_or_else(|| InvalidInput::size_for_pattern(pattern_type, size))?;
        let profile = YarnProfile::for_weight(request.yarn_weight());

        let meters = profile.meters_per_square_meter * area * request.gauge().factor();
        let estimated_meters = round_tenth(meters);
        let estimated_grams = round_tenth(meters / profile.meters_per_gram);

        Ok(EstimationResult {
            estimated_grams,
            estimated_meters,
            recommended_skeins: self.skeins_for(estimated_grams),
            pattern_type,
            size,
            yarn_weight: request.yarn_weight(),
        })
    }

    /// Parses untyped input and estimates it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if any field is outside its recognized domain.
    pub fn estimate_str(
        &self,
        pattern_type: &str,
        size: &str,
        yarn_weight: &str,
        gauge: Option<i64>,
    ) -> Result<EstimationResult, InvalidInput> {
        let request = EstimationRequest::parse(pattern_type, size, yarn_weight, gauge)?;
        self.estimate(&request)
    }

    /// Returns the number of skeins to buy for `grams` of yarn, margin included.
    #[must_use]
    pub fn skeins_for(&self, grams: f64) -> u32 {
        let with_margin = grams * (1.0 + self.safety_margin);
        (with_margin / self.skein_grams).ceil().max(1.0) as u32
    }

    /// Formats a result as a human-readable summary.
    #[must_use]
    pub fn format_result(&self, result: &EstimationResult) -> String {
        format!(
            "Project: {} / {} / {}\n\
             Yarn:    {} ({})\n\
             Skeins:  {} x {}g (includes {:.0}% margin)",
            result.pattern_type,
            result.size,
            result.yarn_weight,
            Self::format_grams(result.estimated_grams),
            Self::format_meters(result.estimated_meters),
            result.recommended_skeins,
            self.skein_grams,
            self.safety_margin * 100.0,
        )
    }

    /// Formats a mass in human-readable form (e.g., "57.0 g", "1.52 kg").
    #[must_use]
    pub fn format_grams(grams: f64) -> String {
        if grams >= 1000.0 {
            format!("{:.2} kg", grams / 1000.0)
        } else {
            format!("{grams:.1} g")
        }
    }

    /// Formats a length in human-readable form (e.g., "114.0 m", "3.42 km").
    #[must_use]
    pub fn format_meters(meters: f64) -> String {
        if meters >= 1000.0 {
            format!("{:.2} km", meters / 1000.0)
        } else {
            format!("{meters:.1} m")
        }
    }
}

impl Default for YarnEstimator {
    fn default() -> Self {
        Self {
            safety_margin: DEFAULT_SAFETY_MARGIN,
            skein_grams: DEFAULT_SKEIN_GRAMS,
        }
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

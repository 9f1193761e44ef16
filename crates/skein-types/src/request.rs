//! Yarn estimation request and result.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Gauge, InvalidInput, PatternType, Size, YarnWeight};

/// Untyped estimation input as submitted by a form or JSON client.
///
/// Convert with [`EstimationInput::validate`] (or `TryFrom`) to obtain an
/// [`EstimationRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationInput {
    /// Pattern type name (e.g., "hat").
    pub pattern_type: String,
    /// Size class name (e.g., "adult").
    pub size: String,
    /// Yarn weight name (e.g., "worsted").
    pub yarn_weight: String,
    /// Stitches per inch; the reference gauge is used when absent.
    ///
    /// HTML forms submit numbers as text, so `"4"` is read as 4 and `""` as
    /// absent.
    #[serde(default, deserialize_with = "form_number")]
    pub gauge: Option<i64>,
}

fn form_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse().map(Some).map_err(|_| {
                D::Error::custom(format!("invalid gauge '{text}', expected a whole number"))
            })
        }
    }
}

impl EstimationInput {
    /// Validates the input into a typed request.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidInput`] encountered, checking pattern type,
    /// size, yarn weight and gauge in that order.
    pub fn validate(self) -> Result<EstimationRequest, InvalidInput> {
        EstimationRequest::parse(&self.pattern_type, &self.size, &self.yarn_weight, self.gauge)
    }
}

/// Validated description of a project to estimate yarn for.
///
/// The size is guaranteed to be one offered for the pattern type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EstimationInput")]
pub struct EstimationRequest {
    pattern_type: PatternType,
    size: Size,
    yarn_weight: YarnWeight,
    gauge: Gauge,
}

impl EstimationRequest {
    /// Creates a request from typed parts.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::SizeForPattern`] if `size` is not offered for
    /// `pattern_type`.
    pub fn new(
        pattern_type: PatternType,
        size: Size,
        yarn_weight: YarnWeight,
        gauge: Gauge,
    ) -> Result<Self, InvalidInput> {
        if !size.applies_to(pattern_type) {
            return Err(InvalidInput::size_for_pattern(pattern_type, size));
        }

        Ok(Self {
            pattern_type,
            size,
            yarn_weight,
            gauge,
        })
    }

    /// Parses a request from untyped parts.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if any field is outside its recognized domain.
    pub fn parse(
        pattern_type: &str,
        size: &str,
        yarn_weight: &str,
        gauge: Option<i64>,
    ) -> Result<Self, InvalidInput> {
        let pattern_type = pattern_type.parse()?;
        let size = size.parse()?;
        let yarn_weight = yarn_weight.parse()?;
        let gauge = gauge.map(Gauge::new).transpose()?.unwrap_or_default();
        Self::new(pattern_type, size, yarn_weight, gauge)
    }

    /// Returns the pattern type.
    #[must_use]
    pub const fn pattern_type(&self) -> PatternType {
        self.pattern_type
    }

    /// Returns the size class.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Returns the yarn weight.
    #[must_use]
    pub const fn yarn_weight(&self) -> YarnWeight {
        self.yarn_weight
    }

    /// Returns the gauge.
    #[must_use]
    pub const fn gauge(&self) -> Gauge {
        self.gauge
    }
}

impl TryFrom<EstimationInput> for EstimationRequest {
    type Error = InvalidInput;

    fn try_from(input: EstimationInput) -> Result<Self, Self::Error> {
        input.validate()
    }
}

/// Estimated yarn requirement for a project.
///
/// Echoes the request's project fields for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Estimated yarn mass in grams.
    pub estimated_grams: f64,
    /// Estimated yarn length in meters.
    pub estimated_meters: f64,
    /// Number of skeins to buy, including the safety margin.
    pub recommended_skeins: u32,
    /// Pattern type the estimate was computed for.
    pub pattern_type: PatternType,
    /// Size class the estimate was computed for.
    pub size: Size,
    /// Yarn weight the estimate was computed for.
    pub yarn_weight: YarnWeight,
}

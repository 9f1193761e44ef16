//! Benchmark fixtures for skein.

use skein_lib::prelude::*;
use skein_lib::{Difficulty, NewPattern, NewUser, PatternCategory};

/// Gauges sampled across the accepted range.
pub const GAUGES: [i64; 5] = [1, 4, 7, 12, 20];

/// Every valid (pattern type, size, yarn weight) combination at each gauge in
/// [`GAUGES`].
#[must_use]
pub fn request_grid() -> Vec<EstimationRequest> {
    let mut requests = Vec::new();
    for &pattern_type in PatternType::all() {
        for &size in pattern_type.sizes() {
            for &yarn_weight in YarnWeight::all() {
                for gauge in GAUGES {
                    let gauge = Gauge::new(gauge).unwrap_or_default();
                    if let Ok(request) =
                        EstimationRequest::new(pattern_type, size, yarn_weight, gauge)
                    {
                        requests.push(request);
                    }
                }
            }
        }
    }
    requests
}

/// The same combinations as [`request_grid`] as raw strings, the way they
/// arrive over HTTP.
#[must_use]
pub fn raw_grid() -> Vec<(String, String, String, i64)> {
    request_grid()
        .iter()
        .map(|r| {
            (
                r.pattern_type().as_str().to_uppercase(),
                format!(" {} ", r.size()),
                r.yarn_weight().to_string(),
                i64::from(u32::from(r.gauge())),
            )
        })
        .collect()
}

/// Builds a catalog holding one author and `count` patterns spread over every
/// difficulty and category.
///
/// # Errors
///
/// Returns an error if a record is rejected by the catalog.
pub async fn seeded_catalog(count: usize) -> Result<Catalog> {
    let catalog = Catalog::new();
    let author = catalog
        .create_user(NewUser {
            username: "bench".to_string(),
            email: "bench@example.com".to_string(),
            full_name: "Bench Knitter".to_string(),
        })
        .await?;

    let difficulties = [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced];
    let categories = [
        PatternCategory::Hat,
        PatternCategory::Scarf,
        PatternCategory::Sweater,
        PatternCategory::Blanket,
        PatternCategory::Accessories,
    ];
    for i in 0..count {
        catalog
            .create_pattern(NewPattern {
                title: format!("Pattern {i}"),
                description: "Benchmark pattern".to_string(),
                difficulty: difficulties[i % difficulties.len()],
                category: categories[i % categories.len()],
                yarn_weight: None,
                needle_size: None,
                estimated_time: None,
                is_public: i % 10 != 0,
                author_id: author.id,
            })
            .await?;
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_covers_every_combination() {
        // 12 sizes across 4 pattern types, 5 weights, 5 gauges
        assert_eq!(request_grid().len(), 12 * 5 * GAUGES.len());
    }

    #[test]
    fn test_raw_grid_parses() {
        for (pattern_type, size, yarn_weight, gauge) in raw_grid() {
            let parsed = EstimationRequest::parse(&pattern_type, &size, &yarn_weight, Some(gauge));
            assert!(parsed.is_ok(), "{pattern_type}/{size}/{yarn_weight}");
        }
    }
}

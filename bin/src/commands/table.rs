//! Table command implementation.
//!
//! Prints the coefficients the estimator works from.

use skein_lib::prelude::*;
use skein_lib::project_area;

/// Print the yarn weight and project size tables.
pub(crate) fn show_table() {
    println!(
        "{:<12} {:<10} {:>10} {:>8} {:>8}",
        "WEIGHT", "LABEL", "M/M2", "M/G", "G/M2"
    );
    println!("{}", "-".repeat(52));
    for &weight in YarnWeight::all() {
        let profile = YarnProfile::for_weight(weight);
        println!(
            "{:<12} {:<10} {:>10.0} {:>8.1} {:>8.0}",
            weight.as_str(),
            weight.label(),
            profile.meters_per_square_meter,
            profile.meters_per_gram,
            profile.grams_per_square_meter(),
        );
    }

    println!();
    println!("{:<10} {:<8} {:>8}", "PROJECT", "SIZE", "AREA M2");
    println!("{}", "-".repeat(28));
    for &pattern_type in PatternType::all() {
        for &size in pattern_type.sizes() {
            if let Some(area) = project_area(pattern_type, size) {
                println!(
                    "{:<10} {:<8} {:>8.2}",
                    pattern_type.as_str(),
                    size.as_str(),
                    area
                );
            }
        }
    }

    println!("\nYarn estimates are at a gauge of 4 stitches per inch and scale with gauge.");
}

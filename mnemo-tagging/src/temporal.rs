//! Year → publication period. Never consults classifiers.

use mnemo_core::taxonomy::PERIOD_RANGES;
use mnemo_core::{Category, CategoryPrediction, CategoryStatus, Confidence, TagScore};

/// The single period containing `year`. Years before 1860 all map to T1.
pub fn period_for_year(year: i32) -> &'static str {
    PERIOD_RANGES
        .iter()
        .find(|r| r.contains(year))
        .map_or("T1", |r| r.code)
}

/// Exactly one tag with full confidence when the year is known, otherwise an
/// empty `NoYear` result.
pub fn predict_time(year: Option<i32>) -> CategoryPrediction {
    let Some(year) = year else {
        return CategoryPrediction::empty(Category::Time, CategoryStatus::NoYear);
    };
    let code = period_for_year(year).to_string();
    CategoryPrediction {
        category: Category::Time,
        tags: vec![code.clone()],
        confidence: Confidence::CERTAIN,
        status: CategoryStatus::Tagged,
        scores: vec![TagScore {
            code,
            ml: 0.0,
            rule: 1.0,
            blended: 1.0,
            family_spread: 0.0,
            support: 0,
            confidence: Confidence::CERTAIN,
        }],
    }
}

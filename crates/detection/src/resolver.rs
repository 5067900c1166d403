//! Classification resolution
//!
//! A query may legitimately fire several classifiers at once ("top 5
//! counties in California" is both a ranking and a contained-in query).
//! Resolution picks the single type that drives response construction.

use tracing::debug;

use statquery_common::metrics;

use crate::attributes::NLClassifier;
use crate::classification::ClassificationType;

/// The supported classifications in priority order. Later entry is preferred.
///
/// An explicit constant, independent of the enum wire values, so priority
/// can change without renumbering the serialization contract.
pub const RANKED_CLASSIFICATION_TYPES: [ClassificationType; 7] = [
    ClassificationType::Simple,
    ClassificationType::Comparison,
    ClassificationType::ContainedIn,
    ClassificationType::Ranking,
    ClassificationType::Correlation,
    ClassificationType::TimeDelta,
    ClassificationType::Event,
];

/// Resolve the final query type from the classifiers that fired.
///
/// The highest-priority ranked type with at least one matching classifier
/// wins. When no ranked type fired, the result is `Other` if some classifier
/// explicitly declared the query uncategorized, else `Unknown`. Never fails:
/// downstream handles `Unknown` and `Other` like any other type.
pub fn resolve_query_type(classifications: &[NLClassifier]) -> ClassificationType {
    let mut resolved = ClassificationType::Unknown;
    for candidate in RANKED_CLASSIFICATION_TYPES {
        if classifications.iter().any(|c| c.kind() == candidate) {
            resolved = candidate;
        }
    }

    if resolved == ClassificationType::Unknown
        && classifications
            .iter()
            .any(|c| c.kind() == ClassificationType::Other)
    {
        resolved = ClassificationType::Other;
    }

    debug!(
        query_type = %resolved,
        classifiers = classifications.len(),
        "Classification resolved"
    );
    metrics::record_resolution(&resolved.to_string(), classifications.len());

    resolved
}

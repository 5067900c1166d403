//! Detection result assembly
//!
//! Pure aggregation: combines the collaborator outputs into one snapshot
//! and resolves the final query type. No I/O, no side effects beyond
//! logging and counters.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::attributes::NLClassifier;
use crate::classification::ClassificationType;
use crate::place::PlaceDetection;
use crate::resolver::resolve_query_type;
use crate::sv::SVDetection;

/// The complete understanding of one query: places, SV candidates, fired
/// classifiers, and the resolved query type.
///
/// Treated as an immutable snapshot once assembled; re-running
/// classification goes through [`Detection::reclassified`] and yields a new
/// instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub original_query: String,

    /// The query after normalization (lowercasing, punctuation stripping).
    pub cleaned_query: String,

    pub places_detected: PlaceDetection,

    pub svs_detected: SVDetection,

    /// Every classifier that fired, in detector execution order.
    classifications: Vec<NLClassifier>,

    query_type: ClassificationType,
}

impl Detection {
    /// Assemble a detection result.
    ///
    /// The query type is resolved here; there is no half-built state with an
    /// unresolved type.
    pub fn new(
        original_query: impl Into<String>,
        cleaned_query: impl Into<String>,
        places_detected: PlaceDetection,
        svs_detected: SVDetection,
        classifications: Vec<NLClassifier>,
    ) -> Self {
        let original_query = original_query.into();
        let query_type = resolve_query_type(&classifications);

        info!(
            query = %original_query,
            query_type = %query_type,
            "Detection assembled"
        );

        Self {
            original_query,
            cleaned_query: cleaned_query.into(),
            places_detected,
            svs_detected,
            classifications,
            query_type,
        }
    }

    /// The resolved classification driving response construction.
    pub fn query_type(&self) -> ClassificationType {
        self.query_type
    }

    /// Every classifier that fired, in detector execution order.
    pub fn classifications(&self) -> &[NLClassifier] {
        &self.classifications
    }

    /// The classifier record for a given type, if one fired.
    pub fn classification(&self, kind: ClassificationType) -> Option<&NLClassifier> {
        self.classifications.iter().find(|c| c.kind() == kind)
    }

    /// A new snapshot with a replacement classifier list; the query type is
    /// re-resolved.
    pub fn reclassified(&self, classifications: Vec<NLClassifier>) -> Self {
        Self::new(
            self.original_query.clone(),
            self.cleaned_query.clone(),
            self.places_detected.clone(),
            self.svs_detected.clone(),
            classifications,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};

    use super::*;
    use crate::attributes::{
        ClassificationAttributes, ContainedInAttributes, RankingAttributes,
    };
    use crate::classification::{ContainedInPlaceType, RankingType};
    use crate::place::Place;

    fn sample_places() -> PlaceDetection {
        PlaceDetection::new(
            "top 5 counties in california by income",
            "top 5 counties by income",
            vec!["geoId/06".to_string()],
            Place {
                dcid: "geoId/06".to_string(),
                name: "California".to_string(),
                place_type: "State".to_string(),
            },
            false,
            false,
        )
        .unwrap()
    }

    fn sample_svs() -> SVDetection {
        SVDetection::new(
            "top 5 counties by income",
            vec!["Median_Income_Household".to_string()],
            vec![0.87],
            HashMap::new(),
        )
        .unwrap()
    }

    fn ranking_classifier() -> NLClassifier {
        NLClassifier::new(
            ClassificationType::Ranking,
            vec![ClassificationAttributes::Ranking(RankingAttributes {
                ranking_type: BTreeSet::from([RankingType::High]),
                ranking_trigger_words: vec!["top".to_string()],
            })],
        )
        .unwrap()
    }

    fn contained_in_classifier() -> NLClassifier {
        NLClassifier::new(
            ClassificationType::ContainedIn,
            vec![ClassificationAttributes::ContainedIn(ContainedInAttributes {
                contained_in_place_type: ContainedInPlaceType::County,
            })],
        )
        .unwrap()
    }

    #[test]
    fn assembly_resolves_the_query_type() {
        let detection = Detection::new(
            "Top 5 counties in California by income",
            "top 5 counties in california by income",
            sample_places(),
            sample_svs(),
            vec![contained_in_classifier(), ranking_classifier()],
        );
        assert_eq!(detection.query_type(), ClassificationType::Ranking);
        assert_eq!(detection.classifications().len(), 2);
    }

    #[test]
    fn assembly_without_classifiers_resolves_to_unknown() {
        let detection = Detection::new(
            "gibberish",
            "gibberish",
            sample_places(),
            sample_svs(),
            vec![],
        );
        assert_eq!(detection.query_type(), ClassificationType::Unknown);
    }

    #[test]
    fn classification_lookup_finds_the_fired_record() {
        let detection = Detection::new(
            "Top 5 counties in California by income",
            "top 5 counties in california by income",
            sample_places(),
            sample_svs(),
            vec![contained_in_classifier(), ranking_classifier()],
        );

        let record = detection
            .classification(ClassificationType::ContainedIn)
            .unwrap();
        match record.primary_attributes().unwrap() {
            ClassificationAttributes::ContainedIn(attrs) => {
                assert_eq!(attrs.contained_in_place_type, ContainedInPlaceType::County);
            }
            other => panic!("unexpected attributes: {other:?}"),
        }

        assert!(detection.classification(ClassificationType::Event).is_none());
    }

    #[test]
    fn reclassification_produces_a_new_snapshot() {
        let detection = Detection::new(
            "Top 5 counties in California by income",
            "top 5 counties in california by income",
            sample_places(),
            sample_svs(),
            vec![ranking_classifier()],
        );
        assert_eq!(detection.query_type(), ClassificationType::Ranking);

        let retried = detection.reclassified(vec![contained_in_classifier()]);
        assert_eq!(retried.query_type(), ClassificationType::ContainedIn);

        // The original snapshot is untouched.
        assert_eq!(detection.query_type(), ClassificationType::Ranking);
    }

    #[test]
    fn detection_round_trips_through_json() {
        let detection = Detection::new(
            "Top 5 counties in California by income",
            "top 5 counties in california by income",
            sample_places(),
            sample_svs(),
            vec![contained_in_classifier(), ranking_classifier()],
        );

        let json = serde_json::to_string(&detection).unwrap();
        let parsed: Detection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, detection);
        assert_eq!(parsed.query_type(), ClassificationType::Ranking);
    }
}

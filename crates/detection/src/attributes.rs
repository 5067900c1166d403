//! Per-classification-type attribute payloads
//!
//! Each classification type carries a statically distinct payload shape so
//! downstream consumers can switch on [`ClassificationType`] and pattern-match
//! the matching fields. There is intentionally no shared behavior across the
//! variants.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use statquery_common::{metrics, AppError, Result};
use validator::Validate;

use crate::classification::{
    ClassificationType, ContainedInPlaceType, EventType, PeriodType, RankingType, TimeDeltaType,
};

/// Ranking classification attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingAttributes {
    /// Ranking directions requested; never empty for a fired classifier.
    pub ranking_type: BTreeSet<RankingType>,

    /// Words which made this a ranking query: "top", "most", "least", ...
    pub ranking_trigger_words: Vec<String>,
}

/// Comparison classification attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonAttributes {
    pub comparison_trigger_words: Vec<String>,
}

/// Temporal classification attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalAttributes {
    /// The date expression as it appeared in the query.
    pub date_str: String,

    pub date_type: PeriodType,
}

/// Contained-in classification attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainedInAttributes {
    pub contained_in_place_type: ContainedInPlaceType,
}

/// Clustering-based correlation classification attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringAttributes {
    pub sv_dcid_1: String,
    pub sv_dcid_2: String,

    /// When set, `sv_dcid_1` comes from `cluster_1_svs` and `sv_dcid_2`
    /// from `cluster_2_svs`; otherwise both may come from the same cluster.
    pub is_using_clusters: bool,

    /// Words that implied a relationship: "correlation between", "related to"
    pub correlation_trigger_words: String,

    pub cluster_1_svs: Vec<String>,
    pub cluster_2_svs: Vec<String>,
}

/// Heuristic-based correlation classification attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationAttributes {
    /// Words that implied a relationship: "correlation between", "related to"
    pub correlation_trigger_words: String,
}

/// Event classification attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EventAttributes {
    /// Which event classes the query refers to; never empty for a fired
    /// classifier.
    #[validate(length(min = 1, message = "event classifier fired without event types"))]
    pub event_types: Vec<EventType>,

    /// Words that made this an event query
    pub event_trigger_words: Vec<String>,
}

/// Overview classification attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewAttributes {
    pub overview_trigger_words: Vec<String>,
}

/// Time-delta classification attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TimeDeltaAttributes {
    /// Change directions requested; never empty for a fired classifier.
    #[validate(length(min = 1, message = "time-delta classifier fired without delta types"))]
    pub time_delta_types: Vec<TimeDeltaType>,

    /// Words which made this a time-delta query: "increase", "growth", ...
    pub time_delta_trigger_words: Vec<String>,
}

/// Capability-tagged attribute payload, one variant per classification type.
///
/// `Simple`, `Other` and `Unknown` carry no payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationAttributes {
    Simple,
    Other,
    Unknown,
    Ranking(RankingAttributes),
    Comparison(ComparisonAttributes),
    Temporal(TemporalAttributes),
    ContainedIn(ContainedInAttributes),
    Clustering(ClusteringAttributes),
    Correlation(CorrelationAttributes),
    Event(EventAttributes),
    Overview(OverviewAttributes),
    TimeDelta(TimeDeltaAttributes),
}

impl ClassificationAttributes {
    /// The classification type this payload shape belongs to.
    pub fn classification_type(&self) -> ClassificationType {
        match self {
            ClassificationAttributes::Simple => ClassificationType::Simple,
            ClassificationAttributes::Other => ClassificationType::Other,
            ClassificationAttributes::Unknown => ClassificationType::Unknown,
            ClassificationAttributes::Ranking(_) => ClassificationType::Ranking,
            ClassificationAttributes::Comparison(_) => ClassificationType::Comparison,
            ClassificationAttributes::Temporal(_) => ClassificationType::Temporal,
            ClassificationAttributes::ContainedIn(_) => ClassificationType::ContainedIn,
            ClassificationAttributes::Clustering(_) => ClassificationType::Clustering,
            ClassificationAttributes::Correlation(_) => ClassificationType::Correlation,
            ClassificationAttributes::Event(_) => ClassificationType::Event,
            ClassificationAttributes::Overview(_) => ClassificationType::Overview,
            ClassificationAttributes::TimeDelta(_) => ClassificationType::TimeDelta,
        }
    }

    fn validate_payload(&self) -> Result<()> {
        match self {
            ClassificationAttributes::Ranking(attrs) if attrs.ranking_type.is_empty() => {
                Err(AppError::Validation {
                    message: "ranking classifier fired without ranking types".to_string(),
                    field: Some("ranking_type".to_string()),
                })
            }
            ClassificationAttributes::Event(attrs) => {
                attrs.validate().map_err(|e| AppError::Validation {
                    message: e.to_string(),
                    field: Some("event_types".to_string()),
                })
            }
            ClassificationAttributes::TimeDelta(attrs) => {
                attrs.validate().map_err(|e| AppError::Validation {
                    message: e.to_string(),
                    field: Some("time_delta_types".to_string()),
                })
            }
            _ => Ok(()),
        }
    }
}

/// A classifier record: one fired classifier and its typed attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NLClassifier {
    #[serde(rename = "type")]
    kind: ClassificationType,
    attributes: Vec<ClassificationAttributes>,
}

impl NLClassifier {
    /// Build a classifier record.
    ///
    /// Every attribute must be the variant matching `kind`; a mismatched
    /// shape corrupts downstream pattern-matching and is rejected here.
    pub fn new(
        kind: ClassificationType,
        attributes: Vec<ClassificationAttributes>,
    ) -> Result<Self> {
        for attr in &attributes {
            let found = attr.classification_type();
            if found != kind {
                metrics::record_validation_failure("classifier");
                return Err(AppError::ClassifierMismatch {
                    expected: kind.to_string(),
                    found: found.to_string(),
                });
            }
            if let Err(err) = attr.validate_payload() {
                metrics::record_validation_failure("classifier");
                return Err(err);
            }
        }
        Ok(Self { kind, attributes })
    }

    /// The classification type this classifier detects.
    pub fn kind(&self) -> ClassificationType {
        self.kind
    }

    /// Attribute payloads, in the order the classifier produced them.
    pub fn attributes(&self) -> &[ClassificationAttributes] {
        &self.attributes
    }

    /// The first attribute payload, authoritative when several were produced.
    pub fn primary_attributes(&self) -> Option<&ClassificationAttributes> {
        self.attributes.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking_attributes() -> ClassificationAttributes {
        ClassificationAttributes::Ranking(RankingAttributes {
            ranking_type: BTreeSet::from([RankingType::High]),
            ranking_trigger_words: vec!["top".to_string(), "most".to_string()],
        })
    }

    #[test]
    fn classifier_accepts_matching_attributes() {
        let classifier =
            NLClassifier::new(ClassificationType::Ranking, vec![ranking_attributes()]).unwrap();
        assert_eq!(classifier.kind(), ClassificationType::Ranking);
        assert_eq!(classifier.attributes().len(), 1);
    }

    #[test]
    fn classifier_accepts_empty_attribute_list() {
        let classifier = NLClassifier::new(ClassificationType::Simple, vec![]).unwrap();
        assert_eq!(classifier.kind(), ClassificationType::Simple);
        assert!(classifier.primary_attributes().is_none());
    }

    #[test]
    fn classifier_rejects_mismatched_variant() {
        let comparison = ClassificationAttributes::Comparison(ComparisonAttributes {
            comparison_trigger_words: vec!["versus".to_string()],
        });
        let err = NLClassifier::new(ClassificationType::Ranking, vec![comparison]).unwrap_err();
        match err {
            AppError::ClassifierMismatch { expected, found } => {
                assert_eq!(expected, "ranking");
                assert_eq!(found, "comparison");
            }
            other => panic!("expected ClassifierMismatch, got {other}"),
        }
    }

    #[test]
    fn classifier_rejects_empty_ranking_types() {
        let empty = ClassificationAttributes::Ranking(RankingAttributes {
            ranking_type: BTreeSet::new(),
            ranking_trigger_words: vec!["top".to_string()],
        });
        let err = NLClassifier::new(ClassificationType::Ranking, vec![empty]).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn classifier_rejects_empty_event_types() {
        let empty = ClassificationAttributes::Event(EventAttributes {
            event_types: vec![],
            event_trigger_words: vec!["fires".to_string()],
        });
        let err = NLClassifier::new(ClassificationType::Event, vec![empty]).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn classifier_rejects_empty_time_delta_types() {
        let empty = ClassificationAttributes::TimeDelta(TimeDeltaAttributes {
            time_delta_types: vec![],
            time_delta_trigger_words: vec!["growth".to_string()],
        });
        let err = NLClassifier::new(ClassificationType::TimeDelta, vec![empty]).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn classifier_type_serializes_by_wire_value() {
        let classifier =
            NLClassifier::new(ClassificationType::Ranking, vec![ranking_attributes()]).unwrap();
        let json = serde_json::to_string(&classifier).unwrap();
        assert!(json.contains("\"type\":2"), "{json}");
    }

    #[test]
    fn classifier_round_trips() {
        let classifier = NLClassifier::new(
            ClassificationType::ContainedIn,
            vec![ClassificationAttributes::ContainedIn(ContainedInAttributes {
                contained_in_place_type: ContainedInPlaceType::County,
            })],
        )
        .unwrap();

        let json = serde_json::to_string(&classifier).unwrap();
        let parsed: NLClassifier = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, classifier);
    }
}

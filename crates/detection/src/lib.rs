//! StatQuery Detection Core
//!
//! The result schema for the query-understanding pipeline:
//! - Place and statistical-variable detection results
//! - Per-classification-type attribute variants
//! - Classification resolution (which detected intent wins)
//!
//! External collaborators (place resolution, SV embedding search, the
//! per-intent classifiers) produce the inputs; response construction
//! consumes the finished [`Detection`].

pub mod attributes;
pub mod classification;
pub mod detection;
pub mod place;
pub mod resolver;
pub mod sv;

// Re-export commonly used types
pub use attributes::{
    ClassificationAttributes, ClusteringAttributes, ComparisonAttributes, ContainedInAttributes,
    CorrelationAttributes, EventAttributes, NLClassifier, OverviewAttributes, RankingAttributes,
    TemporalAttributes, TimeDeltaAttributes,
};
pub use classification::{
    BinaryClassificationResultType, ClassificationType, ContainedInPlaceType, EventType,
    PeriodType, RankingType, TimeDeltaType,
};
pub use detection::Detection;
pub use place::{Place, PlaceDetection};
pub use resolver::{resolve_query_type, RANKED_CLASSIFICATION_TYPES};
pub use sv::SVDetection;

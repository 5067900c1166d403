//! Place detection results
//!
//! Produced once per query by the place-resolution collaborator and
//! immutable afterwards.

use serde::{Deserialize, Serialize};
use statquery_common::{config::DetectionConfig, metrics, AppError, Result};

/// A resolved real-world place entity.
///
/// Identity is the `dcid`; `name` and `place_type` are display metadata
/// carried along from the geo-resolution service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub dcid: String,
    pub name: String,
    pub place_type: String,
}

/// Everything the place collaborator detected for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetection {
    pub query_original: String,

    /// The query with the place mention stripped out.
    pub query_without_place_substr: String,

    /// Place dcids found in the query, in detection order.
    pub places_found: Vec<String>,

    pub main_place: Place,

    /// The main place is the configured default, not detected from the query.
    #[serde(default)]
    pub using_default_place: bool,

    /// The main place was carried over from conversation context.
    #[serde(default)]
    pub using_from_context: bool,
}

impl PlaceDetection {
    /// Build a place detection result.
    ///
    /// `main_place` must be one of `places_found` unless it came from a
    /// fallback source (`using_default_place` or `using_from_context`).
    pub fn new(
        query_original: impl Into<String>,
        query_without_place_substr: impl Into<String>,
        places_found: Vec<String>,
        main_place: Place,
        using_default_place: bool,
        using_from_context: bool,
    ) -> Result<Self> {
        if !using_default_place
            && !using_from_context
            && !places_found.contains(&main_place.dcid)
        {
            metrics::record_validation_failure("place_detection");
            return Err(AppError::Validation {
                message: format!(
                    "main place {} is not among the detected places",
                    main_place.dcid
                ),
                field: Some("main_place".to_string()),
            });
        }

        Ok(Self {
            query_original: query_original.into(),
            query_without_place_substr: query_without_place_substr.into(),
            places_found,
            main_place,
            using_default_place,
            using_from_context,
        })
    }

    /// Fallback used when the query names no place: the configured default
    /// place becomes the main place.
    pub fn with_default_place(
        query_original: impl Into<String>,
        query_without_place_substr: impl Into<String>,
        config: &DetectionConfig,
    ) -> Self {
        Self {
            query_original: query_original.into(),
            query_without_place_substr: query_without_place_substr.into(),
            places_found: Vec::new(),
            main_place: Place {
                dcid: config.default_place_dcid.clone(),
                name: config.default_place_name.clone(),
                place_type: config.default_place_type.clone(),
            },
            using_default_place: true,
            using_from_context: false,
        }
    }
}

//! Classification enumerations
//!
//! Closed, stable-valued sets shared across the pipeline. Wire values are
//! part of the serialization contract between services and must not be
//! renumbered; priority between classifications lives in
//! [`crate::resolver::RANKED_CLASSIFICATION_TYPES`], not here.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Raised when a closed enum receives a wire value outside its declared set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized {kind} wire value: {value}")]
pub struct UnknownEnumValue {
    kind: &'static str,
    value: u8,
}

/// The query intent classes produced by the classifier collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ClassificationType {
    /// A classifier matched the query but could not categorize it.
    Other,
    /// The universal fallback intent: a plain statistic lookup.
    Simple,
    Ranking,
    Temporal,
    ContainedIn,
    Correlation,
    Clustering,
    Comparison,
    TimeDelta,
    Event,
    Overview,
    /// No classifier ran, or all abstained.
    Unknown,
}

impl From<ClassificationType> for u8 {
    fn from(value: ClassificationType) -> Self {
        match value {
            ClassificationType::Other => 0,
            ClassificationType::Simple => 1,
            ClassificationType::Ranking => 2,
            ClassificationType::Temporal => 3,
            ClassificationType::ContainedIn => 4,
            ClassificationType::Correlation => 5,
            ClassificationType::Clustering => 6,
            ClassificationType::Comparison => 7,
            ClassificationType::TimeDelta => 8,
            ClassificationType::Event => 9,
            ClassificationType::Overview => 10,
            ClassificationType::Unknown => 11,
        }
    }
}

impl From<u8> for ClassificationType {
    fn from(value: u8) -> Self {
        match value {
            0 => ClassificationType::Other,
            1 => ClassificationType::Simple,
            2 => ClassificationType::Ranking,
            3 => ClassificationType::Temporal,
            4 => ClassificationType::ContainedIn,
            5 => ClassificationType::Correlation,
            6 => ClassificationType::Clustering,
            7 => ClassificationType::Comparison,
            8 => ClassificationType::TimeDelta,
            9 => ClassificationType::Event,
            10 => ClassificationType::Overview,
            // Values from newer producers map to Unknown, never an error.
            _ => ClassificationType::Unknown,
        }
    }
}

impl fmt::Display for ClassificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassificationType::Other => "other",
            ClassificationType::Simple => "simple",
            ClassificationType::Ranking => "ranking",
            ClassificationType::Temporal => "temporal",
            ClassificationType::ContainedIn => "contained_in",
            ClassificationType::Correlation => "correlation",
            ClassificationType::Clustering => "clustering",
            ClassificationType::Comparison => "comparison",
            ClassificationType::TimeDelta => "time_delta",
            ClassificationType::Event => "event",
            ClassificationType::Overview => "overview",
            ClassificationType::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// The ranking direction a ranking query asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum RankingType {
    None,

    /// "most populous cities", "top five places", "highest amount of"
    High,

    /// "least populous cities", "lowest amount of"
    Low,

    /// "best": with a negative-intent SV this flips the direction,
    /// e.g. "best cities by crime" means low crime.
    Best,

    /// "worst": with a negative-intent SV this flips the direction,
    /// e.g. "worst cities by crime" means high crime.
    Worst,
}

impl From<RankingType> for u8 {
    fn from(value: RankingType) -> Self {
        match value {
            RankingType::None => 0,
            RankingType::High => 1,
            RankingType::Low => 2,
            RankingType::Best => 3,
            RankingType::Worst => 4,
        }
    }
}

impl From<u8> for RankingType {
    fn from(value: u8) -> Self {
        match value {
            1 => RankingType::High,
            2 => RankingType::Low,
            3 => RankingType::Best,
            4 => RankingType::Worst,
            _ => RankingType::None,
        }
    }
}

/// Generic result of a binary (yes/no) classifier collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum BinaryClassificationResultType {
    Failure,
    Success,
}

impl From<BinaryClassificationResultType> for u8 {
    fn from(value: BinaryClassificationResultType) -> Self {
        match value {
            BinaryClassificationResultType::Failure => 0,
            BinaryClassificationResultType::Success => 1,
        }
    }
}

impl From<u8> for BinaryClassificationResultType {
    fn from(value: u8) -> Self {
        match value {
            1 => BinaryClassificationResultType::Success,
            _ => BinaryClassificationResultType::Failure,
        }
    }
}

/// The geographic containment granularity requested by a query.
///
/// Serialized by knowledge-graph entity-type string, not by ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainedInPlaceType {
    Country,
    State,
    Province,
    County,
    City,
    District,
    Town,
    #[serde(rename = "CensusZipCodeTabulationArea")]
    Zip,
    /// The query used "across" without naming a concrete contained type.
    Across,
    /// The most generic type; unknown wire values also land here.
    #[serde(other)]
    Place,
}

/// The kind of date range a temporal query specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum PeriodType {
    None,
    Exact,
    Until,
    From,
}

impl From<PeriodType> for u8 {
    fn from(value: PeriodType) -> Self {
        match value {
            PeriodType::None => 0,
            PeriodType::Exact => 1,
            PeriodType::Until => 2,
            PeriodType::From => 3,
        }
    }
}

impl From<u8> for PeriodType {
    fn from(value: u8) -> Self {
        match value {
            1 => PeriodType::Exact,
            2 => PeriodType::Until,
            3 => PeriodType::From,
            _ => PeriodType::None,
        }
    }
}

/// Which class of event a query refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EventType {
    /// ColdTemperatureEvent
    Cold,
    /// CycloneEvent
    Cyclone,
    /// EarthquakeEvent
    Earthquake,
    /// DroughtEvent
    Drought,
    /// WildfireEvent or WildlandFireEvent
    Fire,
    /// FloodEvent
    Flood,
    /// HeatTemperatureEvent
    Heat,
    /// WetBulbTemperatureEvent
    WetBulb,
}

impl From<EventType> for u8 {
    fn from(value: EventType) -> Self {
        match value {
            EventType::Cold => 0,
            EventType::Cyclone => 1,
            EventType::Earthquake => 2,
            EventType::Drought => 3,
            EventType::Fire => 4,
            EventType::Flood => 5,
            EventType::Heat => 6,
            EventType::WetBulb => 7,
        }
    }
}

impl TryFrom<u8> for EventType {
    type Error = UnknownEnumValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EventType::Cold),
            1 => Ok(EventType::Cyclone),
            2 => Ok(EventType::Earthquake),
            3 => Ok(EventType::Drought),
            4 => Ok(EventType::Fire),
            5 => Ok(EventType::Flood),
            6 => Ok(EventType::Heat),
            7 => Ok(EventType::WetBulb),
            _ => Err(UnknownEnumValue {
                kind: "event type",
                value,
            }),
        }
    }
}

/// Whether a query refers to an increase or decrease in SV values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TimeDeltaType {
    Increase,
    Decrease,
}

impl From<TimeDeltaType> for u8 {
    fn from(value: TimeDeltaType) -> Self {
        match value {
            TimeDeltaType::Increase => 0,
            TimeDeltaType::Decrease => 1,
        }
    }
}

impl TryFrom<u8> for TimeDeltaType {
    type Error = UnknownEnumValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TimeDeltaType::Increase),
            1 => Ok(TimeDeltaType::Decrease),
            _ => Err(UnknownEnumValue {
                kind: "time delta type",
                value,
            }),
        }
    }
}

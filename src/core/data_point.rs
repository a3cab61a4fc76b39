use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Stable identity of one data point.
///
/// Identity is only used to key lists; it never takes part in chart math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataPointId(Uuid);

impl DataPointId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for DataPointId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DataPointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Accessors shared by plain and ranged points.
pub trait ChartDataPoint {
    fn id(&self) -> DataPointId;
    fn label(&self) -> Option<&str>;
    fn description(&self) -> Option<&str>;
}

/// Single plotted value used by line and bar charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    id: DataPointId,
    value: f64,
    label: Option<String>,
    description: Option<String>,
    date: Option<DateTime<Utc>>,
}

impl DataPoint {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            id: DataPointId::new(),
            value,
            label: None,
            description: None,
            date: None,
        }
    }

    pub fn from_decimal(value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(decimal_to_f64(value, "value")?))
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    #[must_use]
    pub fn date_unix_seconds(&self) -> Option<f64> {
        self.date.map(datetime_to_unix_seconds)
    }

    /// Compares every field except identity.
    #[must_use]
    pub fn content_eq(&self, other: &Self) -> bool {
        self.value == other.value
            && self.label == other.label
            && self.description == other.description
            && self.date == other.date
    }
}

impl ChartDataPoint for DataPoint {
    fn id(&self) -> DataPointId {
        self.id
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Value range plotted by ranged-bar charts.
///
/// `lower_bound <= upper_bound` holds for every constructed point, including
/// deserialized ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangedDataPointRepr")]
pub struct RangedDataPoint {
    id: DataPointId,
    lower_bound: f64,
    upper_bound: f64,
    label: Option<String>,
    description: Option<String>,
}

impl RangedDataPoint {
    pub fn new(lower_bound: f64, upper_bound: f64) -> ChartResult<Self> {
        if !lower_bound.is_finite() || !upper_bound.is_finite() {
            return Err(ChartError::InvalidData(
                "ranged point bounds must be finite".to_owned(),
            ));
        }
        if lower_bound > upper_bound {
            return Err(ChartError::InvalidRange {
                lower: lower_bound,
                upper: upper_bound,
            });
        }

        Ok(Self {
            id: DataPointId::new(),
            lower_bound,
            upper_bound,
            label: None,
            description: None,
        })
    }

    pub fn from_decimal(lower_bound: Decimal, upper_bound: Decimal) -> ChartResult<Self> {
        Self::new(
            decimal_to_f64(lower_bound, "lower bound")?,
            decimal_to_f64(upper_bound, "upper bound")?,
        )
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    #[must_use]
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    #[must_use]
    pub fn mid_point(&self) -> f64 {
        (self.lower_bound + self.upper_bound) * 0.5
    }

    #[must_use]
    pub fn content_eq(&self, other: &Self) -> bool {
        self.lower_bound == other.lower_bound
            && self.upper_bound == other.upper_bound
            && self.label == other.label
            && self.description == other.description
    }
}

#[derive(Deserialize)]
struct RangedDataPointRepr {
    id: DataPointId,
    lower_bound: f64,
    upper_bound: f64,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<RangedDataPointRepr> for RangedDataPoint {
    type Error = ChartError;

    fn try_from(repr: RangedDataPointRepr) -> ChartResult<Self> {
        let mut point = Self::new(repr.lower_bound, repr.upper_bound)?;
        point.id = repr.id;
        point.label = repr.label;
        point.description = repr.description;
        Ok(point)
    }
}

impl ChartDataPoint for RangedDataPoint {
    fn id(&self) -> DataPointId {
        self.id
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

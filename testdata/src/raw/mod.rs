//! Boundary value providers.
//!
//! A provider knows the range `[min, max]` declared for an element and the
//! absolute limits of its domain, and answers the thirteen boundary questions
//! of [`Boundary`] from them.

mod double;
mod step_range;

pub use double::DoubleGenerator;
pub use step_range::{
    DateDomain, DateGenerator, DateTimeDomain, DateTimeGenerator, LengthDomain, LengthGenerator, LongDomain,
    LongGenerator, StepDomain, StepRangeGenerator, TimeDomain, TimeGenerator,
};

use crate::{Boundary, Cfg, DataGenError, DataGenResult};
use rand::Rng;
use scenaria_core::{UiPropertyKind, Value, ValueType};

/// Boundary values of a range within a domain.
///
/// When there are no values strictly between the bounds, the median, the
/// values just above the minimum and just below the maximum and the random
/// value between them all degenerate to the minimum.
pub trait RawDataGenerator {
    type Value: Clone + PartialOrd;

    fn has_values_below_min(&self) -> bool;
    fn has_values_between_min_and_max(&self) -> bool;
    fn has_values_above_max(&self) -> bool;

    fn lowest(&self) -> Self::Value;
    fn random_below_min<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Value;
    fn just_below_min(&self) -> Self::Value;
    fn min(&self) -> Self::Value;
    fn just_above_min(&self) -> Self::Value;
    fn zero(&self) -> Self::Value;
    fn median(&self) -> Self::Value;
    fn random_between_min_and_max<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Value;
    fn just_below_max(&self) -> Self::Value;
    fn max(&self) -> Self::Value;
    fn just_above_max(&self) -> Self::Value;
    fn random_above_max<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Value;
    fn greatest(&self) -> Self::Value;

    /// Value at a boundary.
    fn at<R: Rng + ?Sized>(&self, boundary: Boundary, rng: &mut R) -> Self::Value {
        match boundary {
            Boundary::Lowest => self.lowest(),
            Boundary::RandomBelowMin => self.random_below_min(rng),
            Boundary::JustBelowMin => self.just_below_min(),
            Boundary::Min => self.min(),
            Boundary::JustAboveMin => self.just_above_min(),
            Boundary::Zero => self.zero(),
            Boundary::Median => self.median(),
            Boundary::RandomBetweenMinMax => self.random_between_min_and_max(rng),
            Boundary::JustBelowMax => self.just_below_max(),
            Boundary::Max => self.max(),
            Boundary::JustAboveMax => self.just_above_max(),
            Boundary::RandomAboveMax => self.random_above_max(rng),
            Boundary::Greatest => self.greatest(),
        }
    }

    /// Value at a boundary that does not involve chance.
    fn fixed_at(&self, boundary: Boundary) -> Option<Self::Value> {
        let value = match boundary {
            Boundary::Lowest => self.lowest(),
            Boundary::JustBelowMin => self.just_below_min(),
            Boundary::Min => self.min(),
            Boundary::JustAboveMin => self.just_above_min(),
            Boundary::Zero => self.zero(),
            Boundary::Median => self.median(),
            Boundary::JustBelowMax => self.just_below_max(),
            Boundary::Max => self.max(),
            Boundary::JustAboveMax => self.just_above_max(),
            Boundary::Greatest => self.greatest(),
            Boundary::RandomBelowMin | Boundary::RandomBetweenMinMax | Boundary::RandomAboveMax => return None,
        };
        Some(value)
    }

    /// Whether the value lies within `[min, max]`.
    fn contains(&self, value: &Self::Value) -> bool {
        *value >= self.min() && *value <= self.max()
    }

    /// Whether a fixed boundary falls within `[min, max]`.
    fn fixed_in_range(&self, boundary: Boundary) -> bool {
        self.fixed_at(boundary)
            .map(|value| self.contains(&value))
            .unwrap_or(false)
    }
}

/// Provider for the value range of an element, chosen by its data type.
#[derive(Debug, Clone)]
pub enum ValueRange {
    Integer(LongGenerator),
    Real(DoubleGenerator),
    Date(DateGenerator),
    Time(TimeGenerator),
    DateTime(DateTimeGenerator),
}

macro_rules! dispatch {
    ($range:expr, $gen:ident => $body:expr) => {
        match $range {
            ValueRange::Integer($gen) => $body,
            ValueRange::Real($gen) => $body,
            ValueRange::Date($gen) => $body,
            ValueRange::Time($gen) => $body,
            ValueRange::DateTime($gen) => $body,
        }
    };
}

impl ValueRange {
    /// Provider for the element's declared minimum and maximum values.
    /// `None` when the data type is not ordered.
    pub fn for_cfg(cfg: &Cfg, real_delta: Option<f64>) -> DataGenResult<Option<Self>> {
        let min = cfg.min_value.as_ref();
        let max = cfg.max_value.as_ref();
        let range = match cfg.data_type {
            ValueType::Integer => ValueRange::Integer(LongGenerator::new(
                typed(min, UiPropertyKind::MinValue, Value::as_int)?,
                typed(max, UiPropertyKind::MaxValue, Value::as_int)?,
            )?),
            ValueType::Real => ValueRange::Real(DoubleGenerator::new(
                typed(min, UiPropertyKind::MinValue, Value::as_float)?,
                typed(max, UiPropertyKind::MaxValue, Value::as_float)?,
                real_delta,
            )?),
            ValueType::Date => ValueRange::Date(DateGenerator::new(
                typed(min, UiPropertyKind::MinValue, Value::as_date)?,
                typed(max, UiPropertyKind::MaxValue, Value::as_date)?,
            )?),
            ValueType::Time => ValueRange::Time(TimeGenerator::new(
                typed(min, UiPropertyKind::MinValue, Value::as_time)?,
                typed(max, UiPropertyKind::MaxValue, Value::as_time)?,
            )?),
            ValueType::DateTime => ValueRange::DateTime(DateTimeGenerator::new(
                typed(min, UiPropertyKind::MinValue, Value::as_date_time)?,
                typed(max, UiPropertyKind::MaxValue, Value::as_date_time)?,
            )?),
            ValueType::String | ValueType::Boolean => return Ok(None),
        };
        Ok(Some(range))
    }

    /// Provider covering the whole domain of an ordered data type.
    pub fn unbounded(data_type: ValueType) -> Option<Self> {
        let range = match data_type {
            ValueType::Integer => ValueRange::Integer(LongGenerator::unbounded()),
            ValueType::Real => ValueRange::Real(DoubleGenerator::unbounded()),
            ValueType::Date => ValueRange::Date(DateGenerator::unbounded()),
            ValueType::Time => ValueRange::Time(TimeGenerator::unbounded()),
            ValueType::DateTime => ValueRange::DateTime(DateTimeGenerator::unbounded()),
            ValueType::String | ValueType::Boolean => return None,
        };
        Some(range)
    }

    pub fn at<R: Rng + ?Sized>(&self, boundary: Boundary, rng: &mut R) -> Value {
        dispatch!(self, gen => Value::from(gen.at(boundary, rng)))
    }

    pub fn fixed_in_range(&self, boundary: Boundary) -> bool {
        dispatch!(self, gen => gen.fixed_in_range(boundary))
    }

    pub fn has_values_below_min(&self) -> bool {
        dispatch!(self, gen => gen.has_values_below_min())
    }

    pub fn has_values_between_min_and_max(&self) -> bool {
        dispatch!(self, gen => gen.has_values_between_min_and_max())
    }

    pub fn has_values_above_max(&self) -> bool {
        dispatch!(self, gen => gen.has_values_above_max())
    }
}

fn typed<T>(
    value: Option<&Value>,
    property: UiPropertyKind,
    convert: impl Fn(&Value) -> Option<T>,
) -> DataGenResult<Option<T>> {
    value
        .map(|v| {
            convert(v).ok_or_else(|| DataGenError::InvalidValue {
                property: property.to_string(),
                value: v.to_string(),
            })
        })
        .transpose()
}

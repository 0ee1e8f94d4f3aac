//! Boundary values for domains made of equally spaced steps.
//!
//! Integers, string lengths, dates, times and dates with times all behave the
//! same once their values are mapped to step indexes: an integer is its own
//! index, a date is its day count and a time its second count. The arithmetic
//! is done on `i128` so that ranges spanning the whole `i64` domain cannot
//! overflow.

use super::RawDataGenerator;
use crate::limits::{DateLimits, DateTimeLimits, LongLimits, StringLimits, TimeLimits};
use crate::{DataGenError, DataGenResult};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rand::Rng;
use std::fmt;
use std::marker::PhantomData;

/// A domain whose values map one-to-one onto a contiguous range of indexes.
pub trait StepDomain {
    type Value: Clone + PartialOrd + fmt::Debug + fmt::Display;

    /// Index of the lowest value of the domain.
    const LOWEST: i128;
    /// Index of the greatest value of the domain.
    const GREATEST: i128;
    /// Index of the domain's zero.
    const ZERO: i128;
    /// Whether a declared maximum may lie beyond `GREATEST`. The greatest
    /// value then moves one step past that maximum.
    const OPEN_ABOVE: bool = false;

    fn index_of(value: &Self::Value) -> i128;

    /// Value at an index within `[LOWEST, GREATEST]`.
    fn value_at(index: i128) -> Self::Value;
}

#[derive(Debug, Clone, Copy)]
pub struct LongDomain;

impl StepDomain for LongDomain {
    type Value = i64;

    const LOWEST: i128 = LongLimits::MIN as i128;
    const GREATEST: i128 = LongLimits::MAX as i128;
    const ZERO: i128 = 0;

    fn index_of(value: &i64) -> i128 {
        *value as i128
    }

    fn value_at(index: i128) -> i64 {
        index.clamp(Self::LOWEST, Self::GREATEST) as i64
    }
}

/// String lengths.
#[derive(Debug, Clone, Copy)]
pub struct LengthDomain;

impl StepDomain for LengthDomain {
    type Value = usize;

    const LOWEST: i128 = StringLimits::MIN_LENGTH as i128;
    const GREATEST: i128 = StringLimits::MAX_LENGTH as i128;
    const ZERO: i128 = 0;
    const OPEN_ABOVE: bool = true;

    fn index_of(value: &usize) -> i128 {
        *value as i128
    }

    fn value_at(index: i128) -> usize {
        index.clamp(Self::LOWEST, usize::MAX as i128) as usize
    }
}

/// Dates, one step per day. The zero of dates is their lowest value.
#[derive(Debug, Clone, Copy)]
pub struct DateDomain;

impl StepDomain for DateDomain {
    type Value = NaiveDate;

    const LOWEST: i128 = DateLimits::MIN_DAYS_FROM_CE as i128;
    const GREATEST: i128 = DateLimits::MAX_DAYS_FROM_CE as i128;
    const ZERO: i128 = Self::LOWEST;

    fn index_of(value: &NaiveDate) -> i128 {
        value.num_days_from_ce() as i128
    }

    fn value_at(index: i128) -> NaiveDate {
        let days = index.clamp(Self::LOWEST, Self::GREATEST) as i32;
        NaiveDate::from_num_days_from_ce_opt(days).unwrap_or_default()
    }
}

/// Times of day, one step per second.
#[derive(Debug, Clone, Copy)]
pub struct TimeDomain;

impl StepDomain for TimeDomain {
    type Value = NaiveTime;

    const LOWEST: i128 = TimeLimits::MIN_SECONDS as i128;
    const GREATEST: i128 = TimeLimits::MAX_SECONDS as i128;
    const ZERO: i128 = Self::LOWEST;

    fn index_of(value: &NaiveTime) -> i128 {
        value.num_seconds_from_midnight() as i128
    }

    fn value_at(index: i128) -> NaiveTime {
        let seconds = index.clamp(Self::LOWEST, Self::GREATEST) as u32;
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or_default()
    }
}

/// Dates with times, one step per second.
#[derive(Debug, Clone, Copy)]
pub struct DateTimeDomain;

impl StepDomain for DateTimeDomain {
    type Value = NaiveDateTime;

    const LOWEST: i128 = DateTimeLimits::MIN_TIMESTAMP as i128;
    const GREATEST: i128 = DateTimeLimits::MAX_TIMESTAMP as i128;
    const ZERO: i128 = Self::LOWEST;

    fn index_of(value: &NaiveDateTime) -> i128 {
        value.and_utc().timestamp() as i128
    }

    fn value_at(index: i128) -> NaiveDateTime {
        let timestamp = index.clamp(Self::LOWEST, Self::GREATEST) as i64;
        DateTime::from_timestamp(timestamp, 0)
            .map(|dt| dt.naive_utc())
            .unwrap_or_default()
    }
}

/// Boundary values of a `[min, max]` range over a step domain.
///
/// Absent bounds default to the domain limits. Declared bounds beyond the
/// domain limits are clamped to them, except a maximum above an open-ended
/// domain, which raises the greatest value instead.
#[derive(Debug, Clone)]
pub struct StepRangeGenerator<D: StepDomain> {
    min: i128,
    max: i128,
    greatest: i128,
    domain: PhantomData<D>,
}

pub type LongGenerator = StepRangeGenerator<LongDomain>;
pub type LengthGenerator = StepRangeGenerator<LengthDomain>;
pub type DateGenerator = StepRangeGenerator<DateDomain>;
pub type TimeGenerator = StepRangeGenerator<TimeDomain>;
pub type DateTimeGenerator = StepRangeGenerator<DateTimeDomain>;

impl<D: StepDomain> StepRangeGenerator<D> {
    pub fn new(min: Option<D::Value>, max: Option<D::Value>) -> DataGenResult<Self> {
        let declared_max = max.as_ref().map(D::index_of);
        let greatest = match declared_max {
            Some(hi) if D::OPEN_ABOVE && hi >= D::GREATEST => hi + 1,
            _ => D::GREATEST,
        };
        let clamp = |index: i128| index.clamp(D::LOWEST, greatest);
        let lo = min.as_ref().map(D::index_of).map(clamp).unwrap_or(D::LOWEST);
        let hi = declared_max.map(clamp).unwrap_or(D::GREATEST);
        if lo > hi {
            return Err(DataGenError::InvalidRange {
                min: D::value_at(lo).to_string(),
                max: D::value_at(hi).to_string(),
            });
        }
        Ok(Self {
            min: lo,
            max: hi,
            greatest,
            domain: PhantomData,
        })
    }

    /// Range covering the whole domain.
    pub fn unbounded() -> Self {
        Self {
            min: D::LOWEST,
            max: D::GREATEST,
            greatest: D::GREATEST,
            domain: PhantomData,
        }
    }

    fn value(&self, index: i128) -> D::Value {
        D::value_at(index)
    }
}

impl<D: StepDomain> RawDataGenerator for StepRangeGenerator<D> {
    type Value = D::Value;

    fn has_values_below_min(&self) -> bool {
        self.min > D::LOWEST
    }

    fn has_values_between_min_and_max(&self) -> bool {
        self.max - self.min > 1
    }

    fn has_values_above_max(&self) -> bool {
        self.max < self.greatest
    }

    fn lowest(&self) -> D::Value {
        self.value(D::LOWEST)
    }

    fn random_below_min<R: Rng + ?Sized>(&self, rng: &mut R) -> D::Value {
        if !self.has_values_below_min() {
            return self.min();
        }
        self.value(rng.gen_range(D::LOWEST..self.min))
    }

    fn just_below_min(&self) -> D::Value {
        self.value((self.min - 1).max(D::LOWEST))
    }

    fn min(&self) -> D::Value {
        self.value(self.min)
    }

    fn just_above_min(&self) -> D::Value {
        if !self.has_values_between_min_and_max() {
            return self.min();
        }
        self.value(self.min + 1)
    }

    fn zero(&self) -> D::Value {
        self.value(D::ZERO)
    }

    fn median(&self) -> D::Value {
        if !self.has_values_between_min_and_max() {
            return self.min();
        }
        self.value(self.min + (self.max - self.min) / 2)
    }

    fn random_between_min_and_max<R: Rng + ?Sized>(&self, rng: &mut R) -> D::Value {
        if !self.has_values_between_min_and_max() {
            return self.min();
        }
        self.value(rng.gen_range(self.min + 1..self.max))
    }

    fn just_below_max(&self) -> D::Value {
        if !self.has_values_between_min_and_max() {
            return self.min();
        }
        self.value(self.max - 1)
    }

    fn max(&self) -> D::Value {
        self.value(self.max)
    }

    fn just_above_max(&self) -> D::Value {
        self.value((self.max + 1).min(self.greatest))
    }

    fn random_above_max<R: Rng + ?Sized>(&self, rng: &mut R) -> D::Value {
        if !self.has_values_above_max() {
            return self.max();
        }
        self.value(rng.gen_range(self.max + 1..=self.greatest))
    }

    fn greatest(&self) -> D::Value {
        self.value(self.greatest)
    }
}

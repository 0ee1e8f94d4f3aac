//! Boundary values for real numbers.

use super::RawDataGenerator;
use crate::limits::DoubleLimits;
use crate::{DataGenError, DataGenResult};
use rand::Rng;

/// Largest magnitude below which values are rounded to the delta's precision.
const ROUNDING_LIMIT: f64 = 1e15;
const MAX_DECIMALS: usize = 15;

/// Boundary values of a `[min, max]` range of reals.
///
/// Neighbouring values are `delta` apart. Unless given explicitly, the delta
/// is `0.01`, or finer when a bound is declared with more decimal places.
#[derive(Debug, Clone)]
pub struct DoubleGenerator {
    min: f64,
    max: f64,
    delta: f64,
    decimals: usize,
}

impl DoubleGenerator {
    pub fn new(min: Option<f64>, max: Option<f64>, delta: Option<f64>) -> DataGenResult<Self> {
        let lo = min.unwrap_or(DoubleLimits::MIN);
        let hi = max.unwrap_or(DoubleLimits::MAX);
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Err(DataGenError::InvalidRange {
                min: lo.to_string(),
                max: hi.to_string(),
            });
        }
        let (delta, decimals) = match delta.filter(|d| d.is_finite() && *d > 0.0) {
            Some(delta) => (delta, fractional_digits(delta)),
            None => {
                let decimals = [min, max]
                    .iter()
                    .flatten()
                    .map(|v| fractional_digits(*v))
                    .fold(fractional_digits(DoubleLimits::DELTA), usize::max);
                (1.0 / 10f64.powi(decimals as i32), decimals)
            }
        };
        Ok(Self {
            min: lo,
            max: hi,
            delta,
            decimals,
        })
    }

    pub fn unbounded() -> Self {
        Self {
            min: DoubleLimits::MIN,
            max: DoubleLimits::MAX,
            delta: DoubleLimits::DELTA,
            decimals: fractional_digits(DoubleLimits::DELTA),
        }
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    fn round(&self, value: f64) -> f64 {
        if value.abs() >= ROUNDING_LIMIT {
            return value;
        }
        let factor = 10f64.powi(self.decimals as i32);
        (value * factor).round() / factor
    }

    /// Value in `[lo, hi]`, interpolated so that spans wider than `f64::MAX`
    /// do not overflow.
    fn random_in<R: Rng + ?Sized>(&self, rng: &mut R, lo: f64, hi: f64) -> f64 {
        let t: f64 = rng.gen();
        self.round(lo * (1.0 - t) + hi * t).max(lo).min(hi)
    }
}

fn fractional_digits(value: f64) -> usize {
    let text = value.to_string();
    text.split_once('.')
        .map(|(_, fraction)| fraction.len())
        .unwrap_or(0)
        .min(MAX_DECIMALS)
}

impl RawDataGenerator for DoubleGenerator {
    type Value = f64;

    fn has_values_below_min(&self) -> bool {
        self.min > DoubleLimits::MIN
    }

    fn has_values_between_min_and_max(&self) -> bool {
        self.max - self.min > self.delta
    }

    fn has_values_above_max(&self) -> bool {
        self.max < DoubleLimits::MAX
    }

    fn lowest(&self) -> f64 {
        DoubleLimits::MIN
    }

    fn random_below_min<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if !self.has_values_below_min() {
            return self.min;
        }
        self.random_in(rng, DoubleLimits::MIN, self.just_below_min())
    }

    fn just_below_min(&self) -> f64 {
        if !self.has_values_below_min() {
            return self.min;
        }
        self.round(self.min - self.delta)
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn just_above_min(&self) -> f64 {
        if !self.has_values_between_min_and_max() {
            return self.min;
        }
        self.round(self.min + self.delta)
    }

    fn zero(&self) -> f64 {
        0.0
    }

    fn median(&self) -> f64 {
        if !self.has_values_between_min_and_max() {
            return self.min;
        }
        self.round(self.min / 2.0 + self.max / 2.0)
    }

    fn random_between_min_and_max<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if !self.has_values_between_min_and_max() {
            return self.min;
        }
        self.random_in(rng, self.just_above_min(), self.just_below_max())
    }

    fn just_below_max(&self) -> f64 {
        if !self.has_values_between_min_and_max() {
            return self.min;
        }
        self.round(self.max - self.delta)
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn just_above_max(&self) -> f64 {
        if !self.has_values_above_max() {
            return self.max;
        }
        self.round(self.max + self.delta)
    }

    fn random_above_max<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if !self.has_values_above_max() {
            return self.max;
        }
        self.random_in(rng, self.just_above_max(), DoubleLimits::MAX)
    }

    fn greatest(&self) -> f64 {
        DoubleLimits::MAX
    }
}

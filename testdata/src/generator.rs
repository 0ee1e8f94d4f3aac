//! Data generator: concrete values for data test cases.

use crate::raw::{LengthGenerator, RawDataGenerator, ValueRange};
use crate::{
    Boundary, Cfg, DataGenError, DataGenResult, DataTestCase, DataTestCaseAnalyzer, ExpectedResult, FormatGenerator,
    RandomString,
};
use rand::seq::SliceRandom;
use rand::Rng;
use scenaria_core::{Value, ValueType};
use tracing::trace;

/// Produces values for data test cases.
///
/// All randomness comes from the generator passed to each call, so a seeded
/// stream reproduces the same values.
#[derive(Debug, Clone)]
pub struct DataGenerator {
    random_tries_to_invalid_values: usize,
    min_random_string_size: usize,
    max_random_string_size: usize,
    real_delta: Option<f64>,
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self {
            random_tries_to_invalid_values: 5,
            min_random_string_size: 0,
            max_random_string_size: 100,
            real_delta: None,
        }
    }
}

impl DataGenerator {
    pub fn new(random_tries_to_invalid_values: usize) -> Self {
        Self {
            random_tries_to_invalid_values,
            ..Self::default()
        }
    }

    /// Size of random strings produced when no length is declared.
    pub fn with_random_string_size(mut self, min: usize, max: usize) -> Self {
        self.min_random_string_size = min;
        self.max_random_string_size = max.max(min);
        self
    }

    /// Distance between neighbouring real values.
    pub fn with_real_delta(mut self, delta: f64) -> Self {
        self.real_delta = Some(delta);
        self
    }

    /// A random string sized by the configured limits.
    pub fn random_string<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        RandomString::between(rng, self.min_random_string_size, self.max_random_string_size)
    }

    /// Value for the data test case.
    ///
    /// Fails with [`DataGenError::Incompatible`] when the classifier rejects
    /// the case for the configuration.
    pub fn generate<R: Rng + ?Sized>(&self, dtc: DataTestCase, cfg: &Cfg, rng: &mut R) -> DataGenResult<Value> {
        if DataTestCaseAnalyzer::classify(dtc, cfg) == ExpectedResult::Incompatible {
            return Err(self.incompatible(dtc, cfg));
        }
        let value = match dtc {
            DataTestCase::ValueLowest
            | DataTestCase::ValueRandomBelowMin
            | DataTestCase::ValueJustBelowMin
            | DataTestCase::ValueMin
            | DataTestCase::ValueJustAboveMin
            | DataTestCase::ValueZero
            | DataTestCase::ValueMedian
            | DataTestCase::ValueRandomBetweenMinMax
            | DataTestCase::ValueJustBelowMax
            | DataTestCase::ValueMax
            | DataTestCase::ValueJustAboveMax
            | DataTestCase::ValueRandomAboveMax
            | DataTestCase::ValueGreatest => {
                let range = ValueRange::for_cfg(cfg, self.real_delta)?;
                match (range, dtc.value_boundary()) {
                    (Some(range), Some(boundary)) => range.at(boundary, rng),
                    _ => return Err(self.incompatible(dtc, cfg)),
                }
            }

            DataTestCase::LengthLowest
            | DataTestCase::LengthRandomBelowMin
            | DataTestCase::LengthJustBelowMin
            | DataTestCase::LengthMin
            | DataTestCase::LengthJustAboveMin
            | DataTestCase::LengthZero
            | DataTestCase::LengthMedian
            | DataTestCase::LengthRandomBetweenMinMax
            | DataTestCase::LengthJustBelowMax
            | DataTestCase::LengthMax
            | DataTestCase::LengthJustAboveMax
            | DataTestCase::LengthRandomAboveMax
            | DataTestCase::LengthGreatest => {
                let lengths = LengthGenerator::new(cfg.min_length, cfg.max_length)?;
                let Some(boundary) = dtc.length_boundary() else {
                    return Err(self.incompatible(dtc, cfg));
                };
                let length = lengths.at(boundary, rng);
                Value::String(RandomString::exactly(rng, length))
            }

            DataTestCase::FormatValid => Value::String(self.format(dtc, cfg)?.valid(rng)),
            DataTestCase::FormatInvalid => {
                let format = self.format(dtc, cfg)?;
                let tries = self.random_tries_to_invalid_values;
                format
                    .invalid(rng, tries, self.min_random_string_size, self.max_random_string_size)
                    .map(Value::String)
                    .ok_or(DataGenError::NoInvalidValue { case: dtc, tries })?
            }

            DataTestCase::SetFirstElement => self.from_set(dtc, cfg, cfg.value_set.first())?,
            DataTestCase::SetRandomElement => self.from_set(dtc, cfg, cfg.value_set.choose(rng))?,
            DataTestCase::SetLastElement => self.from_set(dtc, cfg, cfg.value_set.last())?,
            DataTestCase::SetNotInSet => self.not_in_set(cfg, rng)?,

            DataTestCase::RequiredFilled => self.filled(cfg, rng)?,
            DataTestCase::RequiredNotFilled => Value::String(String::new()),

            DataTestCase::Computed => cfg
                .value
                .clone()
                .ok_or(DataGenError::MissingValue { case: dtc })?,
        };
        trace!(case = %dtc, value = %value, "generated value");
        Ok(value)
    }

    /// A random valid data test case of the configuration.
    ///
    /// Cases that leave the element empty are never chosen; with no other
    /// valid case the element is simply filled.
    pub fn valid_case<R: Rng + ?Sized>(&self, cfg: &Cfg, rng: &mut R) -> DataTestCase {
        let candidates: Vec<DataTestCase> = DataTestCaseAnalyzer::cases_with(cfg, ExpectedResult::Valid)
            .into_iter()
            .filter(|dtc| {
                !matches!(
                    dtc,
                    DataTestCase::RequiredNotFilled | DataTestCase::LengthZero | DataTestCase::LengthLowest
                )
            })
            .collect();
        candidates
            .choose(rng)
            .copied()
            .unwrap_or(DataTestCase::RequiredFilled)
    }

    /// A value for a random valid data test case of the configuration.
    pub fn generate_valid_value<R: Rng + ?Sized>(&self, cfg: &Cfg, rng: &mut R) -> DataGenResult<Value> {
        let dtc = self.valid_case(cfg, rng);
        self.generate(dtc, cfg, rng)
    }

    fn incompatible(&self, dtc: DataTestCase, cfg: &Cfg) -> DataGenError {
        DataGenError::Incompatible {
            case: dtc,
            data_type: cfg.data_type,
        }
    }

    fn format(&self, dtc: DataTestCase, cfg: &Cfg) -> DataGenResult<FormatGenerator> {
        match &cfg.format {
            Some(pattern) => FormatGenerator::new(pattern),
            None => Err(self.incompatible(dtc, cfg)),
        }
    }

    fn from_set(&self, dtc: DataTestCase, cfg: &Cfg, picked: Option<&Value>) -> DataGenResult<Value> {
        picked.cloned().ok_or_else(|| self.incompatible(dtc, cfg))
    }

    fn not_in_set<R: Rng + ?Sized>(&self, cfg: &Cfg, rng: &mut R) -> DataGenResult<Value> {
        let tries = self.random_tries_to_invalid_values;
        (0..tries)
            .map(|_| self.random_of_type(cfg.data_type, rng))
            .find(|candidate| !cfg.value_set.contains(candidate))
            .ok_or(DataGenError::NoInvalidValue {
                case: DataTestCase::SetNotInSet,
                tries,
            })
    }

    /// Any non-empty value of the data type.
    fn random_of_type<R: Rng + ?Sized>(&self, data_type: ValueType, rng: &mut R) -> Value {
        match (ValueRange::unbounded(data_type), data_type) {
            (Some(range), _) => range.at(Boundary::RandomBetweenMinMax, rng),
            (None, ValueType::Boolean) => Value::Bool(rng.gen()),
            (None, _) => Value::String(self.non_empty_string(rng)),
        }
    }

    fn non_empty_string<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        RandomString::between(
            rng,
            self.min_random_string_size.max(1),
            self.max_random_string_size.max(1),
        )
    }

    /// A filled value: the declared value, an element of the value set, a
    /// string in the declared format, a value within the declared range, or a
    /// random non-empty string, whichever applies first.
    fn filled<R: Rng + ?Sized>(&self, cfg: &Cfg, rng: &mut R) -> DataGenResult<Value> {
        if let Some(value) = &cfg.value {
            return Ok(value.clone());
        }
        if let Some(value) = cfg.value_set.choose(rng) {
            return Ok(value.clone());
        }
        if let Some(pattern) = &cfg.format {
            return Ok(Value::String(FormatGenerator::new(pattern)?.valid(rng)));
        }
        if let Some(range) = ValueRange::for_cfg(cfg, self.real_delta)? {
            return Ok(range.at(Boundary::RandomBetweenMinMax, rng));
        }
        match cfg.data_type {
            ValueType::Boolean => Ok(Value::Bool(rng.gen())),
            _ if cfg.has_length_bounds() => {
                let lengths = LengthGenerator::new(cfg.min_length, cfg.max_length)?;
                let lo = lengths.min().max(1);
                let hi = lengths.max().max(lo);
                let length = RandomString::length(rng, lo, hi);
                Ok(Value::String(RandomString::exactly(rng, length)))
            }
            _ => Ok(Value::String(self.non_empty_string(rng))),
        }
    }
}

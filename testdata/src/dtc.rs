//! Data test cases: the closed set of value intents a test can exercise.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Intent for the value typed into a UI element.
///
/// The declaration order is meaningful: combination strategies that pick by
/// index ("index of each") follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataTestCase {
    ValueLowest,
    ValueRandomBelowMin,
    ValueJustBelowMin,
    ValueMin,
    ValueJustAboveMin,
    ValueZero,
    ValueMedian,
    ValueRandomBetweenMinMax,
    ValueJustBelowMax,
    ValueMax,
    ValueJustAboveMax,
    ValueRandomAboveMax,
    ValueGreatest,

    LengthLowest,
    LengthRandomBelowMin,
    LengthJustBelowMin,
    LengthMin,
    LengthJustAboveMin,
    LengthZero,
    LengthMedian,
    LengthRandomBetweenMinMax,
    LengthJustBelowMax,
    LengthMax,
    LengthJustAboveMax,
    LengthRandomAboveMax,
    LengthGreatest,

    FormatValid,
    FormatInvalid,

    SetFirstElement,
    SetRandomElement,
    SetLastElement,
    SetNotInSet,

    RequiredFilled,
    RequiredNotFilled,

    Computed,
}

/// Group a data test case belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DtcFamily {
    Value,
    Length,
    Format,
    Set,
    Required,
    Computed,
}

/// Position relative to a range, shared by the value and length families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Boundary {
    Lowest,
    RandomBelowMin,
    JustBelowMin,
    Min,
    JustAboveMin,
    Zero,
    Median,
    RandomBetweenMinMax,
    JustBelowMax,
    Max,
    JustAboveMax,
    RandomAboveMax,
    Greatest,
}

impl Boundary {
    pub const ALL: [Boundary; 13] = [
        Boundary::Lowest,
        Boundary::RandomBelowMin,
        Boundary::JustBelowMin,
        Boundary::Min,
        Boundary::JustAboveMin,
        Boundary::Zero,
        Boundary::Median,
        Boundary::RandomBetweenMinMax,
        Boundary::JustBelowMax,
        Boundary::Max,
        Boundary::JustAboveMax,
        Boundary::RandomAboveMax,
        Boundary::Greatest,
    ];

    /// Whether the value at this boundary is drawn at random.
    pub fn is_random(&self) -> bool {
        matches!(
            self,
            Boundary::RandomBelowMin | Boundary::RandomBetweenMinMax | Boundary::RandomAboveMax
        )
    }
}

impl DataTestCase {
    /// Every data test case, in declaration order.
    pub const ALL: [DataTestCase; 35] = [
        DataTestCase::ValueLowest,
        DataTestCase::ValueRandomBelowMin,
        DataTestCase::ValueJustBelowMin,
        DataTestCase::ValueMin,
        DataTestCase::ValueJustAboveMin,
        DataTestCase::ValueZero,
        DataTestCase::ValueMedian,
        DataTestCase::ValueRandomBetweenMinMax,
        DataTestCase::ValueJustBelowMax,
        DataTestCase::ValueMax,
        DataTestCase::ValueJustAboveMax,
        DataTestCase::ValueRandomAboveMax,
        DataTestCase::ValueGreatest,
        DataTestCase::LengthLowest,
        DataTestCase::LengthRandomBelowMin,
        DataTestCase::LengthJustBelowMin,
        DataTestCase::LengthMin,
        DataTestCase::LengthJustAboveMin,
        DataTestCase::LengthZero,
        DataTestCase::LengthMedian,
        DataTestCase::LengthRandomBetweenMinMax,
        DataTestCase::LengthJustBelowMax,
        DataTestCase::LengthMax,
        DataTestCase::LengthJustAboveMax,
        DataTestCase::LengthRandomAboveMax,
        DataTestCase::LengthGreatest,
        DataTestCase::FormatValid,
        DataTestCase::FormatInvalid,
        DataTestCase::SetFirstElement,
        DataTestCase::SetRandomElement,
        DataTestCase::SetLastElement,
        DataTestCase::SetNotInSet,
        DataTestCase::RequiredFilled,
        DataTestCase::RequiredNotFilled,
        DataTestCase::Computed,
    ];

    /// Identifier used in dictionaries and serialized plans.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataTestCase::ValueLowest => "VALUE_LOWEST",
            DataTestCase::ValueRandomBelowMin => "VALUE_RANDOM_BELOW_MIN",
            DataTestCase::ValueJustBelowMin => "VALUE_JUST_BELOW_MIN",
            DataTestCase::ValueMin => "VALUE_MIN",
            DataTestCase::ValueJustAboveMin => "VALUE_JUST_ABOVE_MIN",
            DataTestCase::ValueZero => "VALUE_ZERO",
            DataTestCase::ValueMedian => "VALUE_MEDIAN",
            DataTestCase::ValueRandomBetweenMinMax => "VALUE_RANDOM_BETWEEN_MIN_MAX",
            DataTestCase::ValueJustBelowMax => "VALUE_JUST_BELOW_MAX",
            DataTestCase::ValueMax => "VALUE_MAX",
            DataTestCase::ValueJustAboveMax => "VALUE_JUST_ABOVE_MAX",
            DataTestCase::ValueRandomAboveMax => "VALUE_RANDOM_ABOVE_MAX",
            DataTestCase::ValueGreatest => "VALUE_GREATEST",
            DataTestCase::LengthLowest => "LENGTH_LOWEST",
            DataTestCase::LengthRandomBelowMin => "LENGTH_RANDOM_BELOW_MIN",
            DataTestCase::LengthJustBelowMin => "LENGTH_JUST_BELOW_MIN",
            DataTestCase::LengthMin => "LENGTH_MIN",
            DataTestCase::LengthJustAboveMin => "LENGTH_JUST_ABOVE_MIN",
            DataTestCase::LengthZero => "LENGTH_ZERO",
            DataTestCase::LengthMedian => "LENGTH_MEDIAN",
            DataTestCase::LengthRandomBetweenMinMax => "LENGTH_RANDOM_BETWEEN_MIN_MAX",
            DataTestCase::LengthJustBelowMax => "LENGTH_JUST_BELOW_MAX",
            DataTestCase::LengthMax => "LENGTH_MAX",
            DataTestCase::LengthJustAboveMax => "LENGTH_JUST_ABOVE_MAX",
            DataTestCase::LengthRandomAboveMax => "LENGTH_RANDOM_ABOVE_MAX",
            DataTestCase::LengthGreatest => "LENGTH_GREATEST",
            DataTestCase::FormatValid => "FORMAT_VALID",
            DataTestCase::FormatInvalid => "FORMAT_INVALID",
            DataTestCase::SetFirstElement => "SET_FIRST_ELEMENT",
            DataTestCase::SetRandomElement => "SET_RANDOM_ELEMENT",
            DataTestCase::SetLastElement => "SET_LAST_ELEMENT",
            DataTestCase::SetNotInSet => "SET_NOT_IN_SET",
            DataTestCase::RequiredFilled => "REQUIRED_FILLED",
            DataTestCase::RequiredNotFilled => "REQUIRED_NOT_FILLED",
            DataTestCase::Computed => "COMPUTED",
        }
    }

    pub fn family(&self) -> DtcFamily {
        match self {
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
            | DataTestCase::ValueGreatest => DtcFamily::Value,
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
            | DataTestCase::LengthGreatest => DtcFamily::Length,
            DataTestCase::FormatValid | DataTestCase::FormatInvalid => DtcFamily::Format,
            DataTestCase::SetFirstElement
            | DataTestCase::SetRandomElement
            | DataTestCase::SetLastElement
            | DataTestCase::SetNotInSet => DtcFamily::Set,
            DataTestCase::RequiredFilled | DataTestCase::RequiredNotFilled => DtcFamily::Required,
            DataTestCase::Computed => DtcFamily::Computed,
        }
    }

    /// Boundary of a value-family case.
    pub fn value_boundary(&self) -> Option<Boundary> {
        let boundary = match self {
            DataTestCase::ValueLowest => Boundary::Lowest,
            DataTestCase::ValueRandomBelowMin => Boundary::RandomBelowMin,
            DataTestCase::ValueJustBelowMin => Boundary::JustBelowMin,
            DataTestCase::ValueMin => Boundary::Min,
            DataTestCase::ValueJustAboveMin => Boundary::JustAboveMin,
            DataTestCase::ValueZero => Boundary::Zero,
            DataTestCase::ValueMedian => Boundary::Median,
            DataTestCase::ValueRandomBetweenMinMax => Boundary::RandomBetweenMinMax,
            DataTestCase::ValueJustBelowMax => Boundary::JustBelowMax,
            DataTestCase::ValueMax => Boundary::Max,
            DataTestCase::ValueJustAboveMax => Boundary::JustAboveMax,
            DataTestCase::ValueRandomAboveMax => Boundary::RandomAboveMax,
            DataTestCase::ValueGreatest => Boundary::Greatest,
            _ => return None,
        };
        Some(boundary)
    }

    /// Boundary of a length-family case.
    pub fn length_boundary(&self) -> Option<Boundary> {
        let boundary = match self {
            DataTestCase::LengthLowest => Boundary::Lowest,
            DataTestCase::LengthRandomBelowMin => Boundary::RandomBelowMin,
            DataTestCase::LengthJustBelowMin => Boundary::JustBelowMin,
            DataTestCase::LengthMin => Boundary::Min,
            DataTestCase::LengthJustAboveMin => Boundary::JustAboveMin,
            DataTestCase::LengthZero => Boundary::Zero,
            DataTestCase::LengthMedian => Boundary::Median,
            DataTestCase::LengthRandomBetweenMinMax => Boundary::RandomBetweenMinMax,
            DataTestCase::LengthJustBelowMax => Boundary::JustBelowMax,
            DataTestCase::LengthMax => Boundary::Max,
            DataTestCase::LengthJustAboveMax => Boundary::JustAboveMax,
            DataTestCase::LengthRandomAboveMax => Boundary::RandomAboveMax,
            DataTestCase::LengthGreatest => Boundary::Greatest,
            _ => return None,
        };
        Some(boundary)
    }
}

impl fmt::Display for DataTestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a data test case for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpectedResult {
    /// The produced value is accepted.
    Valid,
    /// The produced value is rejected; the element's "otherwise" steps apply.
    Invalid,
    /// The configuration does not support the case.
    Incompatible,
}

impl ExpectedResult {
    pub fn is_valid(&self) -> bool {
        *self == ExpectedResult::Valid
    }

    pub fn is_invalid(&self) -> bool {
        *self == ExpectedResult::Invalid
    }
}

impl fmt::Display for ExpectedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExpectedResult::Valid => "VALID",
            ExpectedResult::Invalid => "INVALID",
            ExpectedResult::Incompatible => "INCOMPATIBLE",
        })
    }
}

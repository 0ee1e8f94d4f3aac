//! Classification of data test cases against an element configuration.

use crate::raw::{LengthGenerator, RawDataGenerator, ValueRange};
use crate::{Boundary, Cfg, DataTestCase, ExpectedResult};
use std::collections::BTreeMap;

/// Classifies data test cases as valid, invalid or incompatible.
///
/// Classification is pure: the same configuration always yields the same
/// results, and no value is generated.
pub struct DataTestCaseAnalyzer;

impl DataTestCaseAnalyzer {
    /// Classifies every data test case for the configuration.
    pub fn analyze(cfg: &Cfg) -> BTreeMap<DataTestCase, ExpectedResult> {
        DataTestCase::ALL
            .iter()
            .map(|dtc| (*dtc, Self::classify(*dtc, cfg)))
            .collect()
    }

    /// Data test cases with the given result, in declaration order.
    pub fn cases_with(cfg: &Cfg, result: ExpectedResult) -> Vec<DataTestCase> {
        DataTestCase::ALL
            .into_iter()
            .filter(|dtc| Self::classify(*dtc, cfg) == result)
            .collect()
    }

    pub fn classify(dtc: DataTestCase, cfg: &Cfg) -> ExpectedResult {
        use ExpectedResult::{Incompatible, Invalid, Valid};

        match dtc {
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
                let (Some(boundary), true) = (dtc.value_boundary(), cfg.data_type.is_ordered()) else {
                    return Incompatible;
                };
                match ValueRange::for_cfg(cfg, None) {
                    Ok(Some(range)) => classify_boundary(
                        boundary,
                        Declared {
                            min: cfg.min_value.is_some(),
                            max: cfg.max_value.is_some(),
                        },
                        Outside {
                            below: range.has_values_below_min(),
                            above: range.has_values_above_max(),
                        },
                        |b| range.fixed_in_range(b),
                    ),
                    _ => Incompatible,
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
                let (Some(boundary), true) = (dtc.length_boundary(), cfg.data_type == scenaria_core::ValueType::String)
                else {
                    return Incompatible;
                };
                match LengthGenerator::new(cfg.min_length, cfg.max_length) {
                    Ok(range) => classify_boundary(
                        boundary,
                        Declared {
                            min: cfg.min_length.is_some(),
                            max: cfg.max_length.is_some(),
                        },
                        Outside {
                            below: range.has_values_below_min(),
                            above: range.has_values_above_max(),
                        },
                        |b| range.fixed_in_range(b),
                    ),
                    Err(_) => Incompatible,
                }
            }

            DataTestCase::FormatValid if cfg.format.is_some() => Valid,
            DataTestCase::FormatInvalid if cfg.format.is_some() => Invalid,
            DataTestCase::FormatValid | DataTestCase::FormatInvalid => Incompatible,

            DataTestCase::SetFirstElement | DataTestCase::SetRandomElement | DataTestCase::SetLastElement
                if cfg.has_value_set() =>
            {
                Valid
            }
            DataTestCase::SetNotInSet if cfg.has_value_set() => Invalid,
            DataTestCase::SetFirstElement
            | DataTestCase::SetRandomElement
            | DataTestCase::SetLastElement
            | DataTestCase::SetNotInSet => Incompatible,

            DataTestCase::RequiredFilled => Valid,
            DataTestCase::RequiredNotFilled if cfg.required => Invalid,
            DataTestCase::RequiredNotFilled => Valid,

            DataTestCase::Computed if cfg.computed => Valid,
            DataTestCase::Computed => Incompatible,
        }
    }
}

/// Bounds declared by the element.
struct Declared {
    min: bool,
    max: bool,
}

/// Whether the domain has values outside the range.
struct Outside {
    below: bool,
    above: bool,
}

/// Rules shared by the value and the length families.
///
/// Cases below or at the minimum need a declared minimum, cases at or above
/// the maximum need a declared maximum, and the remaining ones need at least
/// one of them. The lowest, zero and greatest values are valid only when they
/// fall within the range. Cases below the minimum or above the maximum are
/// invalid only when the domain has such values; otherwise they degenerate
/// to the bound itself.
fn classify_boundary(
    boundary: Boundary,
    declared: Declared,
    outside: Outside,
    in_range: impl Fn(Boundary) -> bool,
) -> ExpectedResult {
    use ExpectedResult::{Incompatible, Invalid, Valid};

    let applies = match boundary {
        Boundary::RandomBelowMin | Boundary::JustBelowMin | Boundary::Min | Boundary::JustAboveMin => declared.min,
        Boundary::JustBelowMax | Boundary::Max | Boundary::JustAboveMax | Boundary::RandomAboveMax => declared.max,
        Boundary::Lowest
        | Boundary::Zero
        | Boundary::Median
        | Boundary::RandomBetweenMinMax
        | Boundary::Greatest => declared.min || declared.max,
    };
    if !applies {
        return Incompatible;
    }
    let invalid_if = |outside: bool| if outside { Invalid } else { Valid };
    match boundary {
        Boundary::Lowest | Boundary::Zero | Boundary::Greatest => invalid_if(!in_range(boundary)),
        Boundary::Min
        | Boundary::JustAboveMin
        | Boundary::Median
        | Boundary::RandomBetweenMinMax
        | Boundary::JustBelowMax
        | Boundary::Max => Valid,
        Boundary::RandomBelowMin | Boundary::JustBelowMin => invalid_if(outside.below),
        Boundary::JustAboveMax | Boundary::RandomAboveMax => invalid_if(outside.above),
    }
}

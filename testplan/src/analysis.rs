//! Test analysis: every data test case of every UI element, with the
//! oracle steps that apply when the case is invalid.

use crate::UieTestPlan;
use scenaria_core::{Step, UiElement, UiPropertyKind, Value};
use scenaria_testdata::{Boundary, Cfg, DataGenError, DataTestCase, DataTestCaseAnalyzer, DtcFamily};
use std::collections::BTreeMap;
use tracing::trace;

/// Analysis of one UI element, keyed by data test case.
pub type ElementAnalysis = BTreeMap<DataTestCase, UieTestPlan>;

/// Analysis of several UI elements, keyed by the element's variable.
pub type TestAnalysisMap = BTreeMap<String, ElementAnalysis>;

/// Builds test analysis maps.
pub struct TestAnalyzer;

impl TestAnalyzer {
    /// Classifies every data test case of the element.
    ///
    /// Fails when the element's properties do not form a valid configuration.
    pub fn analyze_element(uie: &UiElement) -> Result<ElementAnalysis, DataGenError> {
        let cfg = Cfg::from_ui_element(uie)?;
        let analysis = DataTestCaseAnalyzer::analyze(&cfg)
            .into_iter()
            .map(|(dtc, result)| {
                let oracles = if result.is_invalid() {
                    responsible_property(dtc, &cfg)
                        .and_then(|kind| uie.property(kind))
                        .map(|p| p.otherwise.clone())
                        .unwrap_or_default()
                } else {
                    Vec::new()
                };
                (dtc, UieTestPlan::new(dtc, result, oracles))
            })
            .collect::<ElementAnalysis>();
        trace!(
            element = %uie.full_variable_name(),
            valid = analysis.values().filter(|p| p.result.is_valid()).count(),
            invalid = analysis.values().filter(|p| p.result.is_invalid()).count(),
            "analyzed element"
        );
        Ok(analysis)
    }

    /// Analyzes the elements. Elements whose configuration is invalid are left
    /// out of the map and reported with their variable.
    pub fn analyze_elements<'a>(
        uies: impl IntoIterator<Item = &'a UiElement>,
    ) -> (TestAnalysisMap, Vec<(String, DataGenError)>) {
        let mut map = TestAnalysisMap::new();
        let mut errors = Vec::new();
        for uie in uies {
            let variable = uie.full_variable_name();
            if map.contains_key(&variable) {
                continue;
            }
            match Self::analyze_element(uie) {
                Ok(analysis) => {
                    map.insert(variable, analysis);
                }
                Err(e) => errors.push((variable, e)),
            }
        }
        (map, errors)
    }

    /// Oracle steps of an element plan, as stored in the analysis.
    pub fn oracles<'a>(map: &'a TestAnalysisMap, variable: &str, dtc: DataTestCase) -> &'a [Step] {
        map.get(variable)
            .and_then(|analysis| analysis.get(&dtc))
            .map(|plan| plan.otherwise_steps.as_slice())
            .unwrap_or(&[])
    }
}

/// Property whose constraint an invalid data test case violates.
fn responsible_property(dtc: DataTestCase, cfg: &Cfg) -> Option<UiPropertyKind> {
    match dtc.family() {
        DtcFamily::Value => {
            let boundary = dtc.value_boundary()?;
            bound_property(
                boundary,
                zero_below_min(cfg),
                UiPropertyKind::MinValue,
                UiPropertyKind::MaxValue,
            )
        }
        DtcFamily::Length => {
            let boundary = dtc.length_boundary()?;
            let zero_below_min = cfg.min_length.map(|min| min > 0).unwrap_or(false);
            bound_property(
                boundary,
                zero_below_min,
                UiPropertyKind::MinLength,
                UiPropertyKind::MaxLength,
            )
        }
        DtcFamily::Format => Some(UiPropertyKind::Format),
        DtcFamily::Set => Some(UiPropertyKind::Value),
        DtcFamily::Required => Some(UiPropertyKind::Required),
        DtcFamily::Computed => None,
    }
}

fn bound_property(
    boundary: Boundary,
    zero_below_min: bool,
    min: UiPropertyKind,
    max: UiPropertyKind,
) -> Option<UiPropertyKind> {
    match boundary {
        Boundary::Lowest | Boundary::RandomBelowMin | Boundary::JustBelowMin => Some(min),
        Boundary::JustAboveMax | Boundary::RandomAboveMax | Boundary::Greatest => Some(max),
        Boundary::Zero if zero_below_min => Some(min),
        Boundary::Zero => Some(max),
        _ => None,
    }
}

/// Whether the zero of the element's domain lies below its declared minimum.
/// The zero of dates and times is their lowest value.
fn zero_below_min(cfg: &Cfg) -> bool {
    match &cfg.min_value {
        Some(Value::Int(n)) => *n > 0,
        Some(Value::Float(f)) => *f > 0.0,
        Some(Value::Date(_)) | Some(Value::Time(_)) | Some(Value::DateTime(_)) => true,
        _ => false,
    }
}

//! Invalid values and the oracles they bring.

use scenaria_tests::prelude::*;

fn otherwise(message: &str) -> Vec<Step> {
    vec![Step::new(
        format!("Otherwise I must see the message \"{}\"", message),
        NodeType::Otherwise,
        Location::new(4, 9).in_file("doc1.feature"),
    )]
}

mod lowest_value {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("lowest_value")
            .document(
                Document::new("doc1.feature").with_ui_element(
                    UiElement::new("A")
                        .with_property(UiProperty::new(UiPropertyKind::MinValue, 5).with_otherwise(otherwise("bar"))),
                ),
            )
            .sentences(&["When I fill {A}"])
            .planner(DataTestCaseMix::JustOneInvalid, CombinationStrategy::IndexOfEach(0))
            .pre_test_cases(1)
            .expect(0, |a| {
                a.lines(&["When I fill <a> with -9223372036854775808 # {A}, invalid: lowest applicable value"])
                    .oracles(&["Then I must see the message \"bar\" # from <a>"])
                    .invalid(true)
            })
    }

    #[test]
    fn test_lowest_value_brings_its_oracle() {
        let outcome = scenario().run().unwrap();
        let oracle = &outcome.pre_test_cases[0].oracles[0];
        assert_eq!(oracle.node_type, NodeType::Then);
        assert_eq!(oracle.location, Location::new(4, 9).in_file("doc1.feature"));
    }
}

mod just_one_invalid {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("just_one_invalid")
            .document(
                Document::new("doc1.feature")
                    .with_ui_element(
                        UiElement::new("A")
                            .with_property(UiProperty::new(UiPropertyKind::MinValue, 5).with_otherwise(otherwise("bar"))),
                    )
                    .with_ui_element(
                        UiElement::new("B")
                            .with_property(UiProperty::new(UiPropertyKind::Required, true).with_otherwise(otherwise("required"))),
                    ),
            )
            .sentences(&["When I fill {A} and {B}", "Then I see \"done\""])
            .planner(DataTestCaseMix::JustOneInvalid, CombinationStrategy::IndexOfEach(0))
            .pre_test_cases(2)
            .expect(0, |a| {
                a.line(0, "When I fill <a> with -9223372036854775808 # {A}, invalid: lowest applicable value")
                    .line_matches(1, r#"And I fill <b> with ".+" # \{B\}, valid: .+"#)
                    .line(2, "Then I see \"done\"")
                    .oracles(&["Then I must see the message \"bar\" # from <a>"])
            })
            .expect(1, |a| {
                a.lines(&[
                    "When I fill <a> with 5 # {A}, valid: minimum value",
                    "And I fill <b> with \"\" # {B}, invalid: not filled",
                    "Then I see \"done\"",
                ])
                .oracles(&["Then I must see the message \"required\" # from <b>"])
            })
    }

    #[test]
    fn test_each_plan_has_a_single_invalid_element() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_only_valid_plans_have_no_oracles() {
        Scenario::new("only_valid")
            .document(
                Document::new("doc1.feature").with_ui_element(
                    UiElement::new("A")
                        .with_property(UiProperty::new(UiPropertyKind::MinValue, 5).with_otherwise(otherwise("bar"))),
                ),
            )
            .sentences(&["When I fill {A}"])
            .planner(DataTestCaseMix::OnlyValid, CombinationStrategy::IndexOfEach(0))
            .expect(0, |a| {
                a.lines(&["When I fill <a> with 5 # {A}, valid: minimum value"])
                    .no_oracles()
                    .invalid(false)
            })
            .run()
            .unwrap();
    }
}

mod configuration_errors {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("configuration_errors")
            .document(
                Document::new("doc1.feature").with_ui_element(
                    UiElement::new("Age")
                        .with_property(UiProperty::new(UiPropertyKind::MinValue, 10))
                        .with_property(UiProperty::new(UiPropertyKind::MaxValue, 1)),
                ),
            )
            .sentences(&["When I fill {Age}"])
            .planner(DataTestCaseMix::OnlyValid, CombinationStrategy::IndexOfEach(0))
    }

    #[test]
    fn test_errors_fail_the_scenario() {
        let err = scenario().run().unwrap_err();
        assert!(matches!(err, ScenarioError::Generation { .. }));
    }

    #[test]
    fn test_allowed_errors_still_generate() {
        let outcome = scenario()
            .allow_errors()
            .pre_test_cases(1)
            .expect(0, |a| a.line_matches(0, r#"When I fill <age> with ".*" # \{Age\}, valid: random"#))
            .run()
            .unwrap();
        assert_eq!(outcome.errors.len(), 1);
        assert!(matches!(outcome.errors[0], GenError::Configuration { .. }));
    }
}

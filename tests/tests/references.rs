//! References to constants, UI elements and UI element values.

use scenaria_tests::prelude::*;

mod constants {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("constants")
            .document(Document::new("doc1.feature").with_constant(Constant::new("pi", 3.14)))
            .sentences(&["When I fill <b> with [pi]", "Then I see [pi]"])
            .planner(DataTestCaseMix::OnlyValid, CombinationStrategy::IndexOfEach(0))
            .pre_test_cases(1)
            .expect(0, |a| {
                a.lines(&["When I fill <b> with 3.14 # [pi]", "Then I see 3.14 # [pi]"])
                    .no_oracles()
                    .invalid(false)
            })
    }

    #[test]
    fn test_constants_render_as_their_values() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_string_constants_are_quoted() {
        Scenario::new("string_constants")
            .document(Document::new("doc1.feature").with_constant(Constant::new("ipsum", "lorem \"ipsum\"")))
            .sentences(&["When I fill <b> with [ipsum]"])
            .planner(DataTestCaseMix::OnlyValid, CombinationStrategy::IndexOfEach(0))
            .expect(0, |a| a.line(0, r#"When I fill <b> with "lorem \"ipsum\"" # [ipsum]"#))
            .run()
            .unwrap();
    }

    #[test]
    fn test_unknown_constants_are_warnings() {
        let outcome = Scenario::new("unknown_constants")
            .document(Document::new("doc1.feature"))
            .sentences(&["When I fill <b> with [nope]"])
            .planner(DataTestCaseMix::OnlyValid, CombinationStrategy::IndexOfEach(0))
            .expect(0, |a| a.line(0, r#"When I fill <b> with "" # [nope]"#))
            .run()
            .unwrap();
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].to_string().contains("nope"));
    }
}

mod ui_elements {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("ui_elements")
            .document(
                Document::new("doc1.feature")
                    .with_ui_element(UiElement::new("Name").with_property(UiProperty::new(UiPropertyKind::Id, "#name")))
                    .with_ui_element(UiElement::new("Zip Code")),
            )
            .sentences(&["When I fill {Name} with \"Bob\"", "And I fill {Zip Code} with 12345", "Then I see {Name}"])
            .planner(DataTestCaseMix::OnlyValid, CombinationStrategy::IndexOfEach(0))
            .expect(0, |a| {
                a.lines(&[
                    "When I fill <#name> with \"Bob\" # {Name}",
                    "And I fill <zipCode> with 12345 # {Zip Code}",
                    "Then I see <#name> # {Name}",
                ])
            })
    }

    #[test]
    fn test_ui_elements_render_as_their_literals() {
        scenario().run().unwrap();
    }
}

mod property_references {
    use super::*;
    use pretty_assertions::assert_eq;

    fn document() -> Document {
        Document::new("doc1.feature").with_ui_element(
            UiElement::new("A")
                .with_property(UiProperty::new(UiPropertyKind::MinLength, 3))
                .with_property(UiProperty::new(UiPropertyKind::MaxLength, 6)),
        )
    }

    pub fn scenario() -> Scenario {
        Scenario::new("property_references")
            .document(document())
            .sentences(&[
                "When I see {A|value}",
                "And I see {A|value}",
                "And I fill {A} with 5",
                "Then I see {A|value}",
            ])
            .planner(DataTestCaseMix::OnlyValid, CombinationStrategy::IndexOfEach(0))
            .pre_test_cases(1)
            .expect(0, |a| {
                a.line_matches(0, r#"When I see "[A-Za-z0-9]{3,6}""#)
                    .line(2, "And I fill <a> with 5 # {A}")
                    .line(3, "Then I see 5")
            })
    }

    #[test]
    fn test_values_are_generated_on_demand_then_reused() {
        let outcome = scenario().run().unwrap();

        let lines = outcome.pre_test_cases[0].lines();
        let first = lines[0].trim_start_matches("When I see ");
        let second = lines[1].trim_start_matches("And I see ");
        assert_eq!(first, second);
    }

    #[test]
    fn test_unsupported_properties_are_kept_as_written() {
        let outcome = Scenario::new("unsupported_property")
            .document(document())
            .sentences(&["Then I see {A|maxlength}"])
            .planner(DataTestCaseMix::OnlyValid, CombinationStrategy::IndexOfEach(0))
            .expect(0, |a| a.lines(&["Then I see {A|maxlength}"]))
            .run()
            .unwrap();
        assert!(matches!(outcome.warnings[0], GenError::UnsupportedProperty { .. }));
    }
}

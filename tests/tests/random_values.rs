//! Random values for UI literals and unconstrained UI elements.

use scenaria_tests::prelude::*;

/// Strings the assembler draws for a plan, in step order.
fn expected_strings(seed: &str, plan: usize, count: usize, min: usize, max: usize) -> Vec<String> {
    let mut rng = SeedStream::new(seed).for_index(plan);
    (0..count).map(|_| RandomString::between(&mut rng, min, max)).collect()
}

mod ui_literals {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("ui_literals")
            .sentences(&["When I fill <b>", "And I fill <c> and <d>"])
            .planner(DataTestCaseMix::OnlyValid, CombinationStrategy::IndexOfEach(0))
            .pre_test_cases(1)
    }

    #[test]
    fn test_ui_literals_receive_random_strings() {
        let strings = expected_strings(DEFAULT_SEED, 0, 3, 0, 100);
        let expected = vec![
            format!("When I fill <b> with \"{}\" # valid: random", strings[0]),
            format!("And I fill <c> with \"{}\" # valid: random", strings[1]),
            format!("And I fill <d> with \"{}\" # valid: random", strings[2]),
        ];
        let expected: Vec<&str> = expected.iter().map(String::as_str).collect();

        scenario()
            .expect(0, |a| a.lines(&expected).no_oracles())
            .run()
            .unwrap();
    }

    #[test]
    fn test_random_strings_respect_the_configured_size() {
        let outcome = scenario()
            .config(GenerationConfig::new().with_seed("sizes").with_random_string_size(4, 7))
            .expect(0, |a| a.line_matches(0, r#"When I fill <b> with "[A-Za-z0-9]{4,7}" # valid: random"#))
            .run()
            .unwrap();
        assert_eq!(outcome.seed, "sizes");
    }
}

mod determinism {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scenario(seed: &str) -> Scenario {
        Scenario::new("determinism")
            .document(
                Document::new("doc1.feature")
                    .with_ui_element(UiElement::new("Name"))
                    .with_ui_element(
                        UiElement::new("Age")
                            .with_property(UiProperty::new(UiPropertyKind::MinValue, 18))
                            .with_property(UiProperty::new(UiPropertyKind::MaxValue, 99)),
                    ),
            )
            .sentences(&["Given that I fill <b>", "When I fill {Name} and {Age}", "Then I see {Name|value}"])
            .config(GenerationConfig::new().with_random_string_size(10, 10))
            .seed(seed)
            .planner(DataTestCaseMix::Unfiltered, CombinationStrategy::SingleRandomOfEach)
    }

    #[test]
    fn test_same_seed_same_pre_test_cases() {
        // GIVEN
        let first = scenario("2024-05-01 10:00:00").run().unwrap();

        // WHEN
        let second = scenario("2024-05-01 10:00:00").run().unwrap();

        // THEN
        assert_eq!(first.pre_test_cases.len(), 2);
        assert_eq!(first.pre_test_cases, second.pre_test_cases);
    }

    #[test]
    fn test_other_seed_other_random_strings() {
        let first = scenario("alpha").run().unwrap();
        let second = scenario("omega").run().unwrap();
        assert_ne!(first.pre_test_cases[0].lines()[0], second.pre_test_cases[0].lines()[0]);
    }
}

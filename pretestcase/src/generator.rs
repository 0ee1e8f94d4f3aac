//! Pre-test-case generator.

use crate::sentence::{format_value, otherwise_as_then, ui_literal};
use crate::{ExternalStep, GenContext, GenError, GenResult, GenerationConfig, PreTestCase};
use rand::Rng;
use scenaria_core::{
    split_feature, Entity, EntityKind, KeywordDictionary, Location, NodeType, Step, UiElement, UiPropertyKind, Value,
};
use scenaria_testdata::{Cfg, DataGenerator, DataTestCase, SeedStream};
use scenaria_testplan::{TestAnalysisMap, TestAnalyzer, TestPlan, TestPlanner};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, error, trace};

/// Turns the steps of a scenario into pre-test-cases, one per test plan.
pub struct PreTestCaseGenerator {
    dict: KeywordDictionary,
    config: GenerationConfig,
    seed: String,
    data_gen: DataGenerator,
}

impl PreTestCaseGenerator {
    pub fn new(dict: KeywordDictionary, config: GenerationConfig) -> Self {
        let seed = config.seed_or_generated();
        if config.is_generated_seed() {
            debug!(seed = %seed, "generated seed");
        }
        let mut data_gen = DataGenerator::new(config.random_tries_to_invalid_values)
            .with_random_string_size(config.min_random_string_size, config.max_random_string_size);
        if let Some(delta) = config.real_delta {
            data_gen = data_gen.with_real_delta(delta);
        }
        Self {
            dict,
            config,
            seed,
            data_gen,
        }
    }

    /// Seed of the run, generated when the configuration has none.
    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// The configured test planners, seeded with the run seed.
    pub fn test_planners(&self) -> Vec<TestPlanner> {
        self.config.test_planners(&self.seed)
    }

    /// Generates one pre-test-case per plan of the planners.
    ///
    /// The UI elements filled by the steps are analyzed once. Elements filled
    /// by external steps only ever receive valid values. A plan whose
    /// assembly fails is reported in the context and skipped; the others are
    /// still generated. Without any plan, the steps still yield one
    /// pre-test-case.
    pub fn generate(&self, steps: &[Step], ctx: &mut GenContext<'_>, planners: &[TestPlanner]) -> Vec<PreTestCase> {
        let analysis = self.analyze(steps, ctx);
        let mut plans: Vec<TestPlan> = planners
            .iter()
            .flat_map(|planner| planner.make(&analysis.map, &analysis.always_valid))
            .collect();
        if plans.is_empty() {
            plans.push(TestPlan::new());
        }
        debug!(plans = plans.len(), steps = steps.len(), "planned pre-test-cases");

        let stream = SeedStream::new(self.seed.as_str());
        let mut external_rng = stream.for_label("external");
        plans
            .into_iter()
            .enumerate()
            .filter_map(|(index, plan)| {
                let mut rng = stream.for_index(index);
                match self.assemble(steps, plan, &analysis, ctx, &mut rng, &mut external_rng) {
                    Ok(ptc) => {
                        debug!(
                            index,
                            steps = ptc.steps.len(),
                            oracles = ptc.oracles.len(),
                            "assembled pre-test-case"
                        );
                        Some(ptc)
                    }
                    Err(err) => {
                        error!(index, error = %err, "aborted pre-test-case");
                        ctx.push_error(err);
                        None
                    }
                }
            })
            .collect()
    }

    fn analyze(&self, steps: &[Step], ctx: &mut GenContext<'_>) -> Analysis {
        let mut uies: Vec<&UiElement> = Vec::new();
        let mut always_valid = BTreeSet::new();
        for step in steps.iter().filter(|s| s.fill_action().is_some()) {
            for entity in step.entities_of(EntityKind::UiElement) {
                // Unresolved elements are reported where they are used.
                let Some(uie) = ctx.ui_element(&entity.value) else {
                    continue;
                };
                if step.external {
                    always_valid.insert(uie.full_variable_name());
                }
                uies.push(uie);
            }
        }

        let (map, errors) = TestAnalyzer::analyze_elements(uies.iter().copied());
        for (element, source) in errors {
            let location = uies
                .iter()
                .find(|u| u.full_variable_name() == element)
                .map(|u| u.location.clone())
                .unwrap_or_default();
            ctx.push_error(GenError::Configuration {
                element,
                source,
                location,
            });
        }
        let cfgs = uies
            .iter()
            .filter(|u| map.contains_key(&u.full_variable_name()))
            .filter_map(|u| Cfg::from_ui_element(u).ok().map(|cfg| (u.full_variable_name(), cfg)))
            .collect();
        Analysis {
            map,
            cfgs,
            always_valid,
        }
    }

    fn assemble(
        &self,
        steps: &[Step],
        plan: TestPlan,
        analysis: &Analysis,
        ctx: &mut GenContext<'_>,
        rng: &mut impl Rng,
        external_rng: &mut impl Rng,
    ) -> GenResult<PreTestCase> {
        let mut assembly = Assembly::new(self, analysis, Some(&plan));
        let mut assembled = Vec::with_capacity(steps.len());
        for step in steps {
            if step.external {
                let external = self.external_step(step, analysis, ctx, external_rng)?;
                assembly.values.extend(external.values);
                assembled.extend(external.steps);
            } else {
                assembled.extend(assembly.step(step, ctx, rng)?);
            }
        }
        let oracles = assembly.oracles(ctx, rng)?;
        Ok(PreTestCase::new(plan, assembled, oracles))
    }

    /// Transforms an external step once; later plans reuse the result.
    fn external_step(
        &self,
        step: &Step,
        analysis: &Analysis,
        ctx: &mut GenContext<'_>,
        rng: &mut impl Rng,
    ) -> GenResult<ExternalStep> {
        if let Some(cached) = ctx.external_step(&step.content) {
            return Ok(cached.clone());
        }
        let mut assembly = Assembly::new(self, analysis, None);
        assembly.values = ctx.external_values().clone();
        let steps = assembly.step(step, ctx, rng)?;
        let external = ExternalStep {
            steps,
            values: assembly.values,
        };
        ctx.cache_external_step(step.content.clone(), external.clone());
        Ok(external)
    }
}

/// Analysis of the UI elements filled by the steps of a scenario.
struct Analysis {
    map: TestAnalysisMap,
    cfgs: BTreeMap<String, Cfg>,
    always_valid: BTreeSet<String>,
}

/// State of one pre-test-case under assembly.
struct Assembly<'g> {
    gen: &'g PreTestCaseGenerator,
    analysis: &'g Analysis,
    /// `None` for external steps, which only receive valid values.
    plan: Option<&'g TestPlan>,
    /// Value typed into each UI element, keyed by variable.
    values: BTreeMap<String, Value>,
    /// Elements filled with the value of the plan, with their UI literal.
    filled: Vec<(String, String)>,
}

impl<'g> Assembly<'g> {
    fn new(gen: &'g PreTestCaseGenerator, analysis: &'g Analysis, plan: Option<&'g TestPlan>) -> Self {
        Self {
            gen,
            analysis,
            plan,
            values: BTreeMap::new(),
            filled: Vec::new(),
        }
    }

    fn step(&mut self, step: &Step, ctx: &mut GenContext<'_>, rng: &mut impl Rng) -> GenResult<Vec<Step>> {
        check_entities(step, ctx)?;
        let targets: Vec<&Entity> = step
            .entities
            .iter()
            .filter(|e| matches!(e.kind, EntityKind::UiLiteral | EntityKind::UiElement))
            .collect();
        match step.fill_action() {
            Some(action) if !step.has_value() && !targets.is_empty() => {
                self.expand_fill(step, action, &targets, ctx, rng)
            }
            _ => self.rewrite(step, ctx, rng).map(|s| vec![s]),
        }
    }

    /// One fill step per target, each with its own value. The n-th step is
    /// placed n lines below the original one.
    fn expand_fill(
        &mut self,
        step: &Step,
        action: &Entity,
        targets: &[&Entity],
        ctx: &mut GenContext<'_>,
        rng: &mut impl Rng,
    ) -> GenResult<Vec<Step>> {
        let gen = self.gen;
        let mut expanded = Vec::with_capacity(targets.len());
        for (i, target) in targets.iter().enumerate() {
            let node_type = if i == 0 { step.node_type } else { NodeType::And };
            let (literal, value, comment) = match target.kind {
                EntityKind::UiElement => self.fill_element(step, target, ctx, rng)?,
                _ => (
                    target.value.clone(),
                    Value::String(gen.data_gen.random_string(rng)),
                    self.descriptor(None, true, &gen.dict.random),
                ),
            };
            let content = format!(
                "{} {} {} {} {} {}",
                gen.dict.keyword_for(node_type),
                gen.dict.i_word(),
                action.text,
                ui_literal(&literal),
                gen.dict.with_word(),
                format_value(&value)
            );
            let location = Location {
                line: step.location.line + i,
                ..step.location.clone()
            };
            let mut filled = Step::new(content, node_type, location).with_comment(comment);
            filled.external = step.external;
            expanded.push(filled);
        }
        Ok(expanded)
    }

    /// UI literal, value and comment of a UI element filled without an
    /// explicit value.
    fn fill_element(
        &mut self,
        step: &Step,
        target: &Entity,
        ctx: &mut GenContext<'_>,
        rng: &mut impl Rng,
    ) -> GenResult<(String, Value, String)> {
        let gen = self.gen;
        let Some(uie) = ctx.ui_element(&target.value) else {
            ctx.push_warning(GenError::UnresolvedElement {
                variable: target.value.clone(),
                location: ctx.location_of(step),
            });
            let literal = gen.config.ui_literal_case.convert(split_feature(&target.value).1);
            let value = Value::String(gen.data_gen.random_string(rng));
            return Ok((literal, value, self.descriptor(Some(&target.text), true, &gen.dict.random)));
        };
        let variable = uie.full_variable_name();
        let literal = uie.ui_literal(gen.config.ui_literal_case);
        let chosen = self.plan.and_then(|plan| plan.get(&variable));
        let contract = |source| GenError::Contract {
            element: variable.clone(),
            source,
            location: ctx.location_of(step),
        };

        let (value, comment) = match (self.analysis.cfgs.get(&variable), chosen) {
            (Some(cfg), Some(chosen)) => {
                let value = gen.data_gen.generate(chosen.dtc, cfg, rng).map_err(contract)?;
                let what = gen.dict.test_case_name(chosen.dtc.as_str());
                let comment = self.descriptor(Some(&target.text), chosen.result.is_valid(), what);
                if !self.filled.iter().any(|(v, _)| *v == variable) {
                    self.filled.push((variable.clone(), literal.clone()));
                }
                (value, comment)
            }
            (Some(cfg), None) => {
                let dtc = gen.data_gen.valid_case(cfg, rng);
                let value = gen.data_gen.generate(dtc, cfg, rng).map_err(contract)?;
                let what = gen.dict.test_case_name(dtc.as_str());
                (value, self.descriptor(Some(&target.text), true, what))
            }
            (None, _) => (
                Value::String(gen.data_gen.random_string(rng)),
                self.descriptor(Some(&target.text), true, &gen.dict.random),
            ),
        };
        trace!(element = %variable, value = %value, "filled element");
        self.values.insert(variable, value.clone());
        Ok((literal, value, comment))
    }

    /// Replaces the references of a step that is kept as a single step.
    ///
    /// UI elements become their UI literals, constants their values and
    /// property references the value of their element. A fill step with an
    /// explicit value records that value for the elements it fills.
    fn rewrite(&mut self, step: &Step, ctx: &mut GenContext<'_>, rng: &mut impl Rng) -> GenResult<Step> {
        let gen = self.gen;
        let mut content = String::with_capacity(step.content.len());
        let mut comments: Vec<String> = step.comment.iter().cloned().collect();
        let mut explicit: Option<Value> = None;
        let mut targets: Vec<String> = Vec::new();
        let mut last = 0;

        for entity in &step.entities {
            let replacement = match entity.kind {
                EntityKind::Constant => {
                    comments.push(entity.text.clone());
                    let (text, value) = self.replace_constant(step, entity, ctx);
                    if explicit.is_none() {
                        explicit = value;
                    }
                    text
                }
                EntityKind::UiElement => {
                    comments.push(entity.text.clone());
                    match ctx.ui_element(&entity.value) {
                        Some(uie) => {
                            targets.push(uie.full_variable_name());
                            ui_literal(&uie.ui_literal(gen.config.ui_literal_case))
                        }
                        None => {
                            ctx.push_warning(GenError::UnresolvedElement {
                                variable: entity.value.clone(),
                                location: ctx.location_of(step),
                            });
                            ui_literal(&gen.config.ui_literal_case.convert(split_feature(&entity.value).1))
                        }
                    }
                }
                EntityKind::UiPropertyRef => {
                    let (text, value) = self.replace_property_reference(step, entity, ctx, rng)?;
                    if explicit.is_none() {
                        explicit = value;
                    }
                    text
                }
                EntityKind::Value => {
                    explicit.get_or_insert_with(|| Value::String(entity.value.clone()));
                    continue;
                }
                EntityKind::Number => {
                    explicit.get_or_insert_with(|| Value::from_literal(&entity.value));
                    continue;
                }
                _ => continue,
            };
            content.push_str(step.content.get(last..entity.position).unwrap_or_default());
            content.push_str(&replacement);
            last = entity.position + entity.text.len();
        }
        content.push_str(step.content.get(last..).unwrap_or_default());

        if step.fill_action().is_some() {
            if let Some(value) = explicit {
                for variable in targets {
                    self.values.insert(variable, value.clone());
                }
            }
        }

        let mut rewritten = Step::new(content, step.node_type, step.location.clone());
        rewritten.external = step.external;
        if !comments.is_empty() {
            rewritten.comment = Some(comments.join(" "));
        }
        Ok(rewritten)
    }

    fn replace_constant(&self, step: &Step, entity: &Entity, ctx: &mut GenContext<'_>) -> (String, Option<Value>) {
        match ctx.constant(&entity.value) {
            Some(constant) => (format_value(&constant.value), Some(constant.value.clone())),
            None => {
                ctx.push_warning(GenError::UnresolvedConstant {
                    name: entity.value.clone(),
                    location: ctx.location_of(step),
                });
                (format_value(&Value::String(String::new())), None)
            }
        }
    }

    /// Value of a `{Element|value}` reference: the value already typed into
    /// the element, or a filled value generated now and kept for the next
    /// references.
    fn replace_property_reference(
        &mut self,
        step: &Step,
        entity: &Entity,
        ctx: &mut GenContext<'_>,
        rng: &mut impl Rng,
    ) -> GenResult<(String, Option<Value>)> {
        let gen = self.gen;
        let supported = entity
            .property
            .as_deref()
            .map(|p| p.eq_ignore_ascii_case(UiPropertyKind::Value.as_str()))
            .unwrap_or(false);
        if !supported {
            ctx.push_warning(GenError::UnsupportedProperty {
                reference: entity.text.clone(),
                location: ctx.location_of(step),
            });
            return Ok((entity.text.clone(), None));
        }
        let empty = || (format_value(&Value::String(String::new())), None);

        let Some(uie) = ctx.ui_element(&entity.value) else {
            ctx.push_warning(GenError::UnresolvedElement {
                variable: entity.value.clone(),
                location: ctx.location_of(step),
            });
            return Ok(empty());
        };
        let variable = uie.full_variable_name();
        if let Some(value) = self.values.get(&variable) {
            return Ok((format_value(value), Some(value.clone())));
        }

        let cfg = match self.analysis.cfgs.get(&variable) {
            Some(cfg) => cfg.clone(),
            None => match Cfg::from_ui_element(uie) {
                Ok(cfg) => cfg,
                Err(source) => {
                    ctx.push_error(GenError::Configuration {
                        element: variable,
                        source,
                        location: uie.location.clone(),
                    });
                    return Ok(empty());
                }
            },
        };
        let value = gen
            .data_gen
            .generate(DataTestCase::RequiredFilled, &cfg, rng)
            .map_err(|source| GenError::Contract {
                element: variable.clone(),
                source,
                location: ctx.location_of(step),
            })?;
        trace!(element = %variable, value = %value, "generated referenced value");
        self.values.insert(variable, value.clone());
        Ok((format_value(&value), Some(value)))
    }

    /// "Otherwise" steps of the invalid values this pre-test-case typed,
    /// as "then" steps.
    fn oracles(&mut self, ctx: &mut GenContext<'_>, rng: &mut impl Rng) -> GenResult<Vec<Step>> {
        let Some(plan) = self.plan else {
            return Ok(Vec::new());
        };
        let gen = self.gen;
        let mut oracles = Vec::new();
        for (variable, literal) in self.filled.clone() {
            let Some(chosen) = plan.get(&variable).filter(|c| c.result.is_invalid()) else {
                continue;
            };
            for otherwise in &chosen.otherwise_steps {
                check_entities(otherwise, ctx)?;
                let mut oracle = self.rewrite(otherwise, ctx, rng)?;
                oracle.content = otherwise_as_then(&oracle.content, &gen.dict);
                oracle.node_type = NodeType::Then;
                oracle.comment = Some(format!("{} {}", gen.dict.from, ui_literal(&literal)));
                oracles.push(oracle);
            }
        }
        Ok(oracles)
    }

    /// `<reference>, <valid|invalid>: <what>`
    fn descriptor(&self, reference: Option<&str>, valid: bool, what: &str) -> String {
        let dict = &self.gen.dict;
        let verdict = if valid { &dict.valid } else { &dict.invalid };
        match reference {
            Some(reference) => format!("{}, {}: {}", reference, verdict, what),
            None => format!("{}: {}", verdict, what),
        }
    }
}

/// Entities must appear in the content where they say they are, in order
/// and without overlapping.
fn check_entities(step: &Step, ctx: &GenContext<'_>) -> GenResult<()> {
    let mut end = 0;
    for entity in &step.entities {
        let found = step.content.get(entity.position..entity.position + entity.text.len());
        if entity.position < end || found != Some(entity.text.as_str()) {
            return Err(GenError::MalformedReference {
                text: entity.text.clone(),
                location: ctx.location_of(step),
            });
        }
        end = entity.position + entity.text.len();
    }
    Ok(())
}

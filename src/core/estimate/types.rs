//! Estimation Model Types
//!
//! Cost formulas, step definitions, the validated cost model and the
//! result types produced by the calculator.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;

/// Sample complexity tier
///
/// Ordinal only: the tier is a lookup key into a formula's multiplier table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum ComplexityTier {
    #[default]
    Easy,
    Medium,
    High,
}

impl ComplexityTier {
    /// All tiers in ordinal order
    pub const ALL: [ComplexityTier; 3] = [Self::Easy, Self::Medium, Self::High];

    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplexityTier {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(EstimateError::UnknownComplexity {
                value: s.to_string(),
            }),
        }
    }
}

/// Complexity multiplier table
///
/// Must be total over [`ComplexityTier`]; totality is checked when the
/// owning [`CostModel`] is built, not at lookup time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplexityMultipliers(BTreeMap<ComplexityTier, f64>);

impl ComplexityMultipliers {
    /// Complexity has no effect (all tiers 1.0)
    pub fn uniform() -> Self {
        Self::scaled(1.0, 1.0, 1.0)
    }

    /// Explicit factor for each tier
    pub fn scaled(easy: f64, medium: f64, high: f64) -> Self {
        Self::from_entries([
            (ComplexityTier::Easy, easy),
            (ComplexityTier::Medium, medium),
            (ComplexityTier::High, high),
        ])
    }

    /// Build from arbitrary entries; may be partial until validated
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ComplexityTier, f64)>,
    {
        Self(entries.into_iter().collect())
    }

    /// Multiplier for a tier
    pub fn get(&self, tier: ComplexityTier) -> Result<f64, EstimateError> {
        self.0
            .get(&tier)
            .copied()
            .ok_or(EstimateError::MissingMultiplier { tier })
    }

    /// True when every tier scales by 1.0
    pub fn is_uniform(&self) -> bool {
        ComplexityTier::ALL
            .iter()
            .all(|tier| self.0.get(tier).is_some_and(|m| *m == 1.0))
    }

    fn check(&self) -> Result<(), String> {
        for tier in ComplexityTier::ALL {
            match self.0.get(&tier) {
                None => return Err(format!("missing multiplier for tier {}", tier)),
                Some(m) if !m.is_finite() || *m <= 0.0 => {
                    return Err(format!(
                        "multiplier for tier {} must be a positive number, got {}",
                        tier, m
                    ));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Cost formula: `(base + per_sample * samples) * multipliers[complexity]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostFormula {
    /// Fixed hours independent of sample count
    pub base: f64,
    /// Hours contributed per sample
    pub per_sample: f64,
    /// Complexity scale factors
    pub multipliers: ComplexityMultipliers,
}

impl CostFormula {
    pub fn new(base: f64, per_sample: f64, multipliers: ComplexityMultipliers) -> Self {
        Self {
            base,
            per_sample,
            multipliers,
        }
    }

    /// Pure fixed cost: no sample or complexity sensitivity
    pub fn fixed(base: f64) -> Self {
        Self::new(base, 0.0, ComplexityMultipliers::uniform())
    }

    pub fn is_sample_sensitive(&self) -> bool {
        self.per_sample != 0.0
    }

    pub fn is_complexity_sensitive(&self) -> bool {
        !self.multipliers.is_uniform()
    }

    /// Check the formula, naming `context` in the error
    pub fn validate(&self, context: &str) -> Result<(), EstimateError> {
        let invalid = |reason: String| EstimateError::InvalidFormula {
            context: context.to_string(),
            reason,
        };

        if !self.base.is_finite() || self.base < 0.0 {
            return Err(invalid(format!(
                "base must be a non-negative number, got {}",
                self.base
            )));
        }
        if !self.per_sample.is_finite() || self.per_sample < 0.0 {
            return Err(invalid(format!(
                "per_sample must be a non-negative number, got {}",
                self.per_sample
            )));
        }
        self.multipliers.check().map_err(invalid)
    }
}

/// A named process step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDefinition {
    /// Unique name, also the display label
    pub name: String,
    /// Cost of the step itself
    pub formula: CostFormula,
    /// Optional activities, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substeps: Vec<String>,
    /// Per-substep formulas replacing the model's shared substep formula
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub substep_overrides: BTreeMap<String, CostFormula>,
}

impl StepDefinition {
    pub fn new(name: impl Into<String>, formula: CostFormula) -> Self {
        Self {
            name: name.into(),
            formula,
            substeps: Vec::new(),
            substep_overrides: BTreeMap::new(),
        }
    }

    pub fn with_substeps<I, S>(mut self, substeps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.substeps = substeps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_substep_override(mut self, substep: impl Into<String>, formula: CostFormula) -> Self {
        self.substep_overrides.insert(substep.into(), formula);
        self
    }

    pub fn has_substeps(&self) -> bool {
        !self.substeps.is_empty()
    }

    pub fn has_substep(&self, name: &str) -> bool {
        self.substeps.iter().any(|s| s == name)
    }

    /// Formula for one of this step's substeps: the override if present, else `shared`
    pub fn substep_formula<'a>(&'a self, substep: &str, shared: &'a CostFormula) -> &'a CostFormula {
        self.substep_overrides.get(substep).unwrap_or(shared)
    }

    pub fn validate(&self) -> Result<(), EstimateError> {
        if self.name.trim().is_empty() {
            return Err(EstimateError::InvalidModel {
                message: "step name cannot be empty".to_string(),
            });
        }

        self.formula.validate(&format!("step '{}'", self.name))?;

        let mut seen = HashSet::new();
        for substep in &self.substeps {
            if substep.trim().is_empty() {
                return Err(EstimateError::InvalidModel {
                    message: format!("step '{}' has an empty substep name", self.name),
                });
            }
            if !seen.insert(substep.as_str()) {
                return Err(EstimateError::InvalidModel {
                    message: format!("step '{}' lists substep '{}' twice", self.name, substep),
                });
            }
        }

        for (substep, formula) in &self.substep_overrides {
            if !self.has_substep(substep) {
                return Err(EstimateError::UnknownSubstep {
                    step: self.name.clone(),
                    substep: substep.clone(),
                });
            }
            formula.validate(&format!("substep '{}' of step '{}'", substep, self.name))?;
        }

        Ok(())
    }
}

/// The validated cost model
///
/// Steps are held in display order, which is also the evaluation order.
/// A `CostModel` can only be obtained through validation, including when
/// it is deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CostModelDef", into = "CostModelDef")]
pub struct CostModel {
    substep_formula: CostFormula,
    steps: Vec<StepDefinition>,
}

#[derive(Serialize, Deserialize)]
struct CostModelDef {
    substep_formula: CostFormula,
    steps: Vec<StepDefinition>,
}

impl TryFrom<CostModelDef> for CostModel {
    type Error = EstimateError;

    fn try_from(def: CostModelDef) -> Result<Self, Self::Error> {
        CostModel::new(def.steps, def.substep_formula)
    }
}

impl From<CostModel> for CostModelDef {
    fn from(model: CostModel) -> Self {
        Self {
            substep_formula: model.substep_formula,
            steps: model.steps,
        }
    }
}

impl CostModel {
    /// Build and validate a model
    pub fn new(steps: Vec<StepDefinition>, substep_formula: CostFormula) -> Result<Self, EstimateError> {
        let model = Self {
            substep_formula,
            steps,
        };
        model.validate()?;
        Ok(model)
    }

    /// Skips validation, to build malformed models in tests
    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(steps: Vec<StepDefinition>, substep_formula: CostFormula) -> Self {
        Self {
            substep_formula,
            steps,
        }
    }

    /// Full validation pass over every formula and name
    pub fn validate(&self) -> Result<(), EstimateError> {
        if self.steps.is_empty() {
            return Err(EstimateError::InvalidModel {
                message: "at least one step must be defined".to_string(),
            });
        }

        self.substep_formula.validate("shared substep formula")?;

        let mut names = HashSet::new();
        for step in &self.steps {
            if !names.insert(step.name.as_str()) {
                return Err(EstimateError::DuplicateStep {
                    step: step.name.clone(),
                });
            }
            step.validate()?;
        }

        Ok(())
    }

    /// Steps in display order
    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// Formula shared by every substep without an override
    pub fn substep_formula(&self) -> &CostFormula {
        &self.substep_formula
    }

    /// Look up a step; an unknown name is a configuration error
    pub fn step(&self, name: &str) -> Result<&StepDefinition, EstimateError> {
        self.find_step(name).ok_or_else(|| EstimateError::UnknownStep {
            step: name.to_string(),
        })
    }

    pub fn find_step(&self, name: &str) -> Option<&StepDefinition> {
        self.steps.iter().find(|s| s.name == name)
    }

    pub fn contains_step(&self, name: &str) -> bool {
        self.find_step(name).is_some()
    }

    pub fn step_names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Number of samples (UUTs), always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct SampleCount(NonZeroU32);

impl SampleCount {
    pub const ONE: SampleCount = SampleCount(NonZeroU32::MIN);

    /// Accept a raw count, rejecting anything below one
    pub fn new(value: i64) -> Result<Self, EstimateError> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| EstimateError::InvalidSampleCount {
                value: value.to_string(),
            })
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0.get())
    }
}

impl Default for SampleCount {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<i64> for SampleCount {
    type Error = EstimateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SampleCount> for u32 {
    fn from(count: SampleCount) -> Self {
        count.get()
    }
}

impl FromStr for SampleCount {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| EstimateError::InvalidSampleCount {
                value: s.to_string(),
            })?;
        Self::new(value)
    }
}

impl fmt::Display for SampleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of the user's step and substep choices
///
/// Owned by the caller and passed in on every evaluation. Names that do not
/// exist in the model are tolerated and ignored by the calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    steps: BTreeSet<String>,
    substeps: BTreeMap<String, BTreeSet<String>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.select_step(step);
        self
    }

    /// Select a substep, selecting its parent step too
    pub fn with_substep(mut self, step: impl Into<String>, substep: impl Into<String>) -> Self {
        self.select_substep(step, substep);
        self
    }

    /// Select a step together with every substep it declares
    pub fn with_all_substeps(mut self, step: &StepDefinition) -> Self {
        self.select_step(step.name.clone());
        for substep in &step.substeps {
            self.select_substep(step.name.clone(), substep.clone());
        }
        self
    }

    pub fn select_step(&mut self, step: impl Into<String>) {
        self.steps.insert(step.into());
    }

    pub fn select_substep(&mut self, step: impl Into<String>, substep: impl Into<String>) {
        let step = step.into();
        self.substeps
            .entry(step.clone())
            .or_default()
            .insert(substep.into());
        self.steps.insert(step);
    }

    /// Deselect a step; its substep choices are kept but no longer counted
    pub fn deselect_step(&mut self, step: &str) {
        self.steps.remove(step);
    }

    pub fn is_step_selected(&self, step: &str) -> bool {
        self.steps.contains(step)
    }

    pub fn selected_substeps(&self, step: &str) -> Option<&BTreeSet<String>> {
        self.substeps.get(step)
    }

    pub fn steps(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Cost of one selected substep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstepCost {
    pub name: String,
    pub hours: f64,
}

/// Cost of one step and its selected substeps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepCost {
    /// Step name
    pub name: String,
    /// Cost of the step's own formula
    pub base_hours: f64,
    /// Selected substeps, in the step's declared order
    pub substeps: Vec<SubstepCost>,
    /// Base plus substeps
    pub total_hours: f64,
}

impl StepCost {
    pub fn new(name: String, base_hours: f64) -> Self {
        Self {
            name,
            base_hours,
            substeps: Vec::new(),
            total_hours: base_hours,
        }
    }

    pub fn add_substep(&mut self, name: String, hours: f64) {
        self.total_hours += hours;
        self.substeps.push(SubstepCost { name, hours });
    }
}

/// Result of evaluating a selection against a cost model
///
/// Only selected steps appear in `steps`, in model order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub samples: SampleCount,
    pub complexity: ComplexityTier,
    pub steps: Vec<StepCost>,
    pub total_hours: f64,
}

impl Estimate {
    pub fn new(samples: SampleCount, complexity: ComplexityTier) -> Self {
        Self {
            samples,
            complexity,
            steps: Vec::new(),
            total_hours: 0.0,
        }
    }

    pub fn add_step(&mut self, cost: StepCost) {
        self.total_hours += cost.total_hours;
        self.steps.push(cost);
    }

    pub fn step(&self, name: &str) -> Option<&StepCost> {
        self.steps.iter().find(|s| s.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Estimation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimateError {
    #[error("Missing complexity multiplier for tier {tier}")]
    MissingMultiplier { tier: ComplexityTier },

    #[error("Unknown complexity tier: {value} (expected Easy, Medium or High)")]
    UnknownComplexity { value: String },

    #[error("Unknown step: {step}")]
    UnknownStep { step: String },

    #[error("Step '{step}' has no substep named '{substep}'")]
    UnknownSubstep { step: String, substep: String },

    #[error("Duplicate step name: {step}")]
    DuplicateStep { step: String },

    #[error("Invalid cost formula for {context}: {reason}")]
    InvalidFormula { context: String, reason: String },

    #[error("Invalid cost model: {message}")]
    InvalidModel { message: String },

    #[error("Cost overflows for {samples} samples at {complexity} complexity")]
    NonFiniteCost {
        samples: SampleCount,
        complexity: ComplexityTier,
    },

    #[error("Invalid sample count: {value} (must be a positive integer)")]
    InvalidSampleCount { value: String },
}

impl EstimateError {
    /// The cost model itself is malformed or was queried for a name it lacks
    pub fn is_configuration(&self) -> bool {
        !self.is_invalid_input()
    }

    /// A caller-supplied value was out of range
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidSampleCount { .. })
    }
}

//! Expectation checks against a resolved outcome.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use detsex::core::types::{DuctFate, Gonads, Outcome, Phenotype};

use crate::case::Expectation;

/// Collected check outcomes for a run.
#[derive(Debug, Serialize, Deserialize)]
pub struct Judgment {
    pub checks: Vec<CheckOutcome>,
}

/// Result of a single expectation check.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckOutcome {
    Wolffian {
        expected: DuctFate,
        actual: DuctFate,
        passed: bool,
    },
    Mullerian {
        expected: DuctFate,
        actual: DuctFate,
        passed: bool,
    },
    Gonads {
        expected: Gonads,
        actual: Gonads,
        passed: bool,
    },
    Phenotype {
        expected: Phenotype,
        actual: Phenotype,
        passed: bool,
    },
    DescriptionContains {
        fragment: String,
        passed: bool,
    },
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        match self {
            CheckOutcome::Wolffian { passed, .. } => *passed,
            CheckOutcome::Mullerian { passed, .. } => *passed,
            CheckOutcome::Gonads { passed, .. } => *passed,
            CheckOutcome::Phenotype { passed, .. } => *passed,
            CheckOutcome::DescriptionContains { passed, .. } => *passed,
        }
    }

    /// Stable label used to aggregate pass rates across runs.
    pub fn label(&self) -> String {
        match self {
            CheckOutcome::Wolffian { expected, .. } => format!("wolffian({expected})"),
            CheckOutcome::Mullerian { expected, .. } => format!("mullerian({expected})"),
            CheckOutcome::Gonads { expected, .. } => format!("gonads({expected})"),
            CheckOutcome::Phenotype { expected, .. } => format!("phenotype({expected})"),
            CheckOutcome::DescriptionContains { fragment, .. } => {
                format!("description_contains({fragment})")
            }
        }
    }
}

/// Check every expectation that is set, in a fixed order.
pub fn judge(expect: &Expectation, outcome: &Outcome) -> Judgment {
    let mut checks = Vec::new();
    if let Some(expected) = expect.wolffian {
        checks.push(CheckOutcome::Wolffian {
            expected,
            actual: outcome.wolffian,
            passed: expected == outcome.wolffian,
        });
    }
    if let Some(expected) = expect.mullerian {
        checks.push(CheckOutcome::Mullerian {
            expected,
            actual: outcome.mullerian,
            passed: expected == outcome.mullerian,
        });
    }
    if let Some(expected) = expect.gonads {
        checks.push(CheckOutcome::Gonads {
            expected,
            actual: outcome.gonads,
            passed: expected == outcome.gonads,
        });
    }
    if let Some(expected) = expect.phenotype {
        checks.push(CheckOutcome::Phenotype {
            expected,
            actual: outcome.phenotype,
            passed: expected == outcome.phenotype,
        });
    }
    for fragment in &expect.description_contains {
        checks.push(CheckOutcome::DescriptionContains {
            fragment: fragment.clone(),
            passed: outcome.description.contains(fragment.as_str()),
        });
    }
    for check in &checks {
        debug!(check = %check.label(), passed = check.passed(), "check result");
    }
    Judgment { checks }
}

pub fn write_judgment(path: &Path, judgment: &Judgment) -> Result<()> {
    let contents = serde_json::to_string_pretty(judgment).context("serialize checks")?;
    fs::write(path, format!("{contents}\n"))
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use detsex::core::resolver::resolve;
    use detsex::core::types::{ExperimentConfig, Implant};

    #[test]
    fn matching_expectations_pass() {
        let outcome = resolve(&ExperimentConfig {
            implant: Implant::Testosterone,
            ..ExperimentConfig::default()
        });
        let expect = Expectation {
            wolffian: Some(DuctFate::Persists),
            mullerian: Some(DuctFate::Persists),
            phenotype: Some(Phenotype::Mixed),
            description_contains: vec!["double tractus".to_string()],
            ..Expectation::default()
        };
        let judgment = judge(&expect, &outcome);
        assert_eq!(judgment.checks.len(), 4);
        assert!(judgment.checks.iter().all(CheckOutcome::passed));
    }

    #[test]
    fn mismatch_records_actual_value() {
        let outcome = resolve(&ExperimentConfig::default());
        let expect = Expectation {
            gonads: Some(Gonads::Testes),
            ..Expectation::default()
        };
        let judgment = judge(&expect, &outcome);
        match &judgment.checks[0] {
            CheckOutcome::Gonads {
                passed, actual, ..
            } => {
                assert!(!*passed);
                assert_eq!(*actual, Gonads::Ovaries);
            }
            _ => panic!("expected gonads check"),
        }
    }

    #[test]
    fn labels_are_stable() {
        let check = CheckOutcome::Phenotype {
            expected: Phenotype::Male,
            actual: Phenotype::Female,
            passed: false,
        };
        assert_eq!(check.label(), "phenotype(male)");
    }
}

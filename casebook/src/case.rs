//! Case file parsing and validation.
//!
//! Cases are TOML files pairing an experiment configuration with the outcome
//! it is expected to produce. See `casebook/cases/` for examples.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;

use detsex::core::types::{DuctFate, ExperimentConfig, Gonads, Phenotype};

/// A parsed case file: metadata, experiment and expectations.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CaseFile {
    pub case: CaseMeta,
    /// Experiment to resolve; omitted fields take the unperturbed XX embryo.
    #[serde(default)]
    pub config: ExperimentConfig,
    pub expect: Expectation,
}

/// Case metadata: identifier and human-readable title.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CaseMeta {
    /// Unique identifier (slug format: `[a-z0-9_-]+`).
    pub id: String,
    pub title: String,
}

/// Expected outcome fields. Unset fields are not checked.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Expectation {
    pub wolffian: Option<DuctFate>,
    pub mullerian: Option<DuctFate>,
    pub gonads: Option<Gonads>,
    pub phenotype: Option<Phenotype>,
    /// Fragments the description must contain.
    #[serde(default)]
    pub description_contains: Vec<String>,
}

impl CaseFile {
    /// Load and validate a case file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read case {}", path.display()))?;
        let case: CaseFile =
            toml::from_str(&contents).with_context(|| format!("parse case {}", path.display()))?;
        case.validate()
            .with_context(|| format!("validate case {}", path.display()))?;
        Ok(case)
    }

    #[cfg(test)]
    pub fn parse_str(contents: &str) -> Result<Self> {
        let case: CaseFile = toml::from_str(contents).context("parse case")?;
        case.validate()?;
        Ok(case)
    }

    fn validate(&self) -> Result<()> {
        validate_case_id(&self.case.id)?;
        if self.case.title.trim().is_empty() {
            bail!("case.title must be non-empty");
        }
        self.expect.validate().context("expect invalid")?;
        Ok(())
    }
}

impl Expectation {
    fn is_empty(&self) -> bool {
        self.wolffian.is_none()
            && self.mullerian.is_none()
            && self.gonads.is_none()
            && self.phenotype.is_none()
            && self.description_contains.is_empty()
    }

    fn validate(&self) -> Result<()> {
        if self.is_empty() {
            bail!("expect must name at least one expectation");
        }
        for (index, fragment) in self.description_contains.iter().enumerate() {
            if fragment.trim().is_empty() {
                bail!("description_contains[{}] must be non-empty", index);
            }
        }
        Ok(())
    }
}

/// Discover and load all case files from a directory.
///
/// Returns cases with their paths, sorted by id. Errors if duplicate ids are found.
pub fn discover_cases(dir: &Path) -> Result<Vec<(PathBuf, CaseFile)>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut cases = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read cases dir {}", dir.display()))? {
        let entry = entry.context("read case entry")?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            continue;
        }
        let case = CaseFile::load(&path)?;
        cases.push((path, case));
    }
    cases.sort_by(|(_, left), (_, right)| left.case.id.cmp(&right.case.id));
    for pair in cases.windows(2) {
        if pair[0].1.case.id == pair[1].1.case.id {
            return Err(anyhow!("duplicate case.id {}", pair[0].1.case.id));
        }
    }
    Ok(cases)
}

pub(crate) fn validate_case_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        bail!("case.id must be non-empty");
    }
    if !id
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
    {
        bail!("case.id must use [a-z0-9_-] only");
    }
    Ok(())
}

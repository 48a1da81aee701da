//! Closed vocabularies for experiment configurations and their outcomes.
//!
//! Every field is a sum type so the resolver's case ladders are checked for
//! exhaustiveness at build time. Serialized names are stable: they appear in
//! `history.json`, case files and CLI flags.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Developmental stage at which the interventions are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Critical window open: duct fate still follows hormones.
    #[default]
    Embryo,
    /// Critical window closed: ducts are already formed.
    Adult,
}

/// Genetic sex of the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Genotype {
    #[default]
    #[serde(rename = "XX")]
    Xx,
    #[serde(rename = "XY")]
    Xy,
}

/// Exogenous gonadal tissue added to the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Graft {
    #[default]
    None,
    Testis,
    Ovary,
}

/// Tissue-free hormone source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Implant {
    #[default]
    None,
    Testosterone,
    Amh,
    /// Testosterone and AMH together.
    Both,
}

/// Fate of an embryonic duct system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuctFate {
    Persists,
    Regresses,
}

/// Gonadal tissue physically present after ablation and grafting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gonads {
    Testes,
    Ovaries,
    /// Original ovaries alongside a testis graft.
    Mixed,
    None,
}

/// Classification of the internal genital tract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phenotype {
    Male,
    Female,
    /// Both duct systems retained (double tract).
    Mixed,
}

/// One experiment: a subject plus the interventions applied to it.
///
/// All combinations are valid input. Missing fields deserialize to the
/// unperturbed XX embryo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub stage: Stage,
    pub genotype: Genotype,
    /// Original gonads removed before the critical window.
    pub ablation: bool,
    pub graft: Graft,
    pub implant: Implant,
}

impl ExperimentConfig {
    /// True when any intervention field differs from its default.
    pub fn has_intervention(&self) -> bool {
        self.ablation || self.graft != Graft::None || self.implant != Implant::None
    }

    /// True for an unperturbed control subject.
    pub fn is_control(&self) -> bool {
        !self.has_intervention()
    }

    /// Every representable configuration, in a stable order.
    pub fn all() -> Vec<ExperimentConfig> {
        let mut configs = Vec::with_capacity(96);
        for stage in Stage::ALL {
            for genotype in Genotype::ALL {
                for ablation in [false, true] {
                    for graft in Graft::ALL {
                        for implant in Implant::ALL {
                            configs.push(ExperimentConfig {
                                stage,
                                genotype,
                                ablation,
                                graft,
                                implant,
                            });
                        }
                    }
                }
            }
        }
        configs
    }
}

/// Result of resolving one configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Male duct precursor.
    pub wolffian: DuctFate,
    /// Female duct precursor.
    pub mullerian: DuctFate,
    pub gonads: Gonads,
    pub phenotype: Phenotype,
    /// Rationale for the matched rule.
    pub description: String,
}

impl Stage {
    pub const ALL: [Stage; 2] = [Stage::Embryo, Stage::Adult];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Embryo => "embryo",
            Stage::Adult => "adult",
        }
    }
}

impl Genotype {
    pub const ALL: [Genotype; 2] = [Genotype::Xx, Genotype::Xy];

    pub fn as_str(self) -> &'static str {
        match self {
            Genotype::Xx => "XX",
            Genotype::Xy => "XY",
        }
    }
}

impl Graft {
    pub const ALL: [Graft; 3] = [Graft::None, Graft::Testis, Graft::Ovary];

    pub fn as_str(self) -> &'static str {
        match self {
            Graft::None => "none",
            Graft::Testis => "testis",
            Graft::Ovary => "ovary",
        }
    }
}

impl Implant {
    pub const ALL: [Implant; 4] = [
        Implant::None,
        Implant::Testosterone,
        Implant::Amh,
        Implant::Both,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Implant::None => "none",
            Implant::Testosterone => "testosterone",
            Implant::Amh => "amh",
            Implant::Both => "both",
        }
    }

    /// Implant supplies testosterone.
    pub fn supplies_testosterone(self) -> bool {
        matches!(self, Implant::Testosterone | Implant::Both)
    }

    /// Implant supplies anti-Müllerian hormone.
    pub fn supplies_amh(self) -> bool {
        matches!(self, Implant::Amh | Implant::Both)
    }
}

impl DuctFate {
    pub fn as_str(self) -> &'static str {
        match self {
            DuctFate::Persists => "persists",
            DuctFate::Regresses => "regresses",
        }
    }

    pub fn from_presence(present: bool) -> Self {
        if present {
            DuctFate::Persists
        } else {
            DuctFate::Regresses
        }
    }
}

impl Gonads {
    pub fn as_str(self) -> &'static str {
        match self {
            Gonads::Testes => "testes",
            Gonads::Ovaries => "ovaries",
            Gonads::Mixed => "mixed",
            Gonads::None => "none",
        }
    }
}

impl Phenotype {
    pub fn as_str(self) -> &'static str {
        match self {
            Phenotype::Male => "male",
            Phenotype::Female => "female",
            Phenotype::Mixed => "mixed",
        }
    }
}

/// Case-insensitive lookup of `input` among the names of `all`.
fn parse_variant<T: Copy>(
    field: &str,
    input: &str,
    all: &[T],
    name: impl Fn(T) -> &'static str,
) -> Result<T> {
    let needle = input.trim();
    all.iter()
        .copied()
        .find(|variant| name(*variant).eq_ignore_ascii_case(needle))
        .ok_or_else(|| {
            let accepted = all.iter().map(|v| name(*v)).collect::<Vec<_>>();
            anyhow!(
                "invalid {field} {input:?} (expected one of: {})",
                accepted.join(", ")
            )
        })
}

impl FromStr for Stage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant("stage", s, &Stage::ALL, Stage::as_str)
    }
}

impl FromStr for Genotype {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant("genotype", s, &Genotype::ALL, Genotype::as_str)
    }
}

impl FromStr for Graft {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant("graft", s, &Graft::ALL, Graft::as_str)
    }
}

impl FromStr for Implant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant("implant", s, &Implant::ALL, Implant::as_str)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Graft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Implant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DuctFate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Gonads {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Phenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

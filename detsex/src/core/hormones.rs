//! Hormone-source resolution.
//!
//! Any testicular tissue, endogenous or grafted, co-secretes testosterone and
//! AMH. Implants supply either hormone without tissue. Ovarian tissue never
//! contributes either.

use crate::core::types::{ExperimentConfig, Genotype, Graft};

/// Tissue and hormone sources present in the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HormoneSources {
    pub original_testes: bool,
    pub original_ovaries: bool,
    pub graft_testis: bool,
    pub testosterone: bool,
    pub amh: bool,
}

/// Work out which tissues remain and which hormones act on the ducts.
pub fn resolve_sources(config: &ExperimentConfig) -> HormoneSources {
    let original_testes = config.genotype == Genotype::Xy && !config.ablation;
    let original_ovaries = config.genotype == Genotype::Xx && !config.ablation;
    let graft_testis = config.graft == Graft::Testis;
    let testicular_tissue = original_testes || graft_testis;

    HormoneSources {
        original_testes,
        original_ovaries,
        graft_testis,
        testosterone: testicular_tissue || config.implant.supplies_testosterone(),
        amh: testicular_tissue || config.implant.supplies_amh(),
    }
}

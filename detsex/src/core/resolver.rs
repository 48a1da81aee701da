//! The outcome resolver: configuration in, outcome out.

use crate::core::ducts::{
    DuctFates, adult_ducts, adult_phenotype, classify_phenotype, embryo_ducts,
};
use crate::core::gonads::resolve_gonads;
use crate::core::hormones::resolve_sources;
use crate::core::narrative::{adult_description, embryo_description};
use crate::core::types::{ExperimentConfig, Outcome, Stage};

/// Resolve one experiment.
///
/// Total and pure: every configuration yields an outcome, and equal
/// configurations yield equal outcomes.
pub fn resolve(config: &ExperimentConfig) -> Outcome {
    let sources = resolve_sources(config);
    let gonads = resolve_gonads(config, &sources);

    let (fates, phenotype, description) = match config.stage {
        Stage::Adult => (
            adult_ducts(config.genotype),
            adult_phenotype(config.genotype),
            adult_description(config),
        ),
        Stage::Embryo => {
            let fates = embryo_ducts(&sources);
            (
                fates,
                classify_phenotype(fates),
                embryo_description(config, fates),
            )
        }
    };
    let DuctFates {
        wolffian,
        mullerian,
    } = fates;

    Outcome {
        wolffian,
        mullerian,
        gonads,
        phenotype,
        description,
    }
}

//! Duct-fate rules for the two developmental stages.

use crate::core::hormones::HormoneSources;
use crate::core::types::{DuctFate, Genotype, Phenotype};

/// Fates of the Wolffian and Müllerian ducts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuctFates {
    pub wolffian: DuctFate,
    pub mullerian: DuctFate,
}

/// Embryo: testosterone maintains Wolffian ducts; AMH suppresses the
/// Müllerian default.
pub fn embryo_ducts(sources: &HormoneSources) -> DuctFates {
    DuctFates {
        wolffian: DuctFate::from_presence(sources.testosterone),
        mullerian: DuctFate::from_presence(!sources.amh),
    }
}

/// Adult: the critical window has closed, so ducts follow genotype alone.
pub fn adult_ducts(genotype: Genotype) -> DuctFates {
    DuctFates {
        wolffian: DuctFate::from_presence(genotype == Genotype::Xy),
        mullerian: DuctFate::from_presence(genotype == Genotype::Xx),
    }
}

/// Adult phenotype matches the genotype-typical tract.
pub fn adult_phenotype(genotype: Genotype) -> Phenotype {
    match genotype {
        Genotype::Xy => Phenotype::Male,
        Genotype::Xx => Phenotype::Female,
    }
}

/// Classify a duct pair.
///
/// Only Wolffian-without-Müllerian is male and only both-retained is mixed.
/// Regression of both ("empty ducts") and the Müllerian default are female.
pub fn classify_phenotype(fates: DuctFates) -> Phenotype {
    match (fates.wolffian, fates.mullerian) {
        (DuctFate::Persists, DuctFate::Regresses) => Phenotype::Male,
        (DuctFate::Persists, DuctFate::Persists) => Phenotype::Mixed,
        (DuctFate::Regresses, DuctFate::Regresses) => Phenotype::Female,
        (DuctFate::Regresses, DuctFate::Persists) => Phenotype::Female,
    }
}

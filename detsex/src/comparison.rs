//! Side-by-side comparison of two recorded experiments.

use crate::core::labels::{
    duct_label, gonads_label, graft_label, implant_label, phenotype_label, stage_label,
    surgery_label,
};
use crate::history::ExperimentRecord;

/// One labelled parameter or result, valued for both experiments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub left: String,
    pub right: String,
}

impl ComparisonRow {
    fn new(label: &'static str, left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            label,
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn differs(&self) -> bool {
        self.left != self.right
    }
}

/// Parameters first, then results, in display order. Stage closes the
/// parameter rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub left_id: String,
    pub right_id: String,
    pub parameters: Vec<ComparisonRow>,
    pub results: Vec<ComparisonRow>,
}

impl Comparison {
    /// Labels of every row whose values differ.
    pub fn differences(&self) -> Vec<&'static str> {
        self.parameters
            .iter()
            .chain(&self.results)
            .filter(|row| row.differs())
            .map(|row| row.label)
            .collect()
    }
}

pub fn compare(left: &ExperimentRecord, right: &ExperimentRecord) -> Comparison {
    let (a, b) = (&left.config, &right.config);
    let parameters = vec![
        ComparisonRow::new("Génotype", a.genotype.as_str(), b.genotype.as_str()),
        ComparisonRow::new(
            "Chirurgie",
            surgery_label(a.ablation),
            surgery_label(b.ablation),
        ),
        ComparisonRow::new("Greffe", graft_label(a.graft), graft_label(b.graft)),
        ComparisonRow::new("Implant", implant_label(a.implant), implant_label(b.implant)),
        ComparisonRow::new("Stade", stage_label(a.stage), stage_label(b.stage)),
    ];

    let (a, b) = (&left.outcome, &right.outcome);
    let results = vec![
        ComparisonRow::new(
            "Canaux de Wolff",
            duct_label(a.wolffian),
            duct_label(b.wolffian),
        ),
        ComparisonRow::new(
            "Canaux de Müller",
            duct_label(a.mullerian),
            duct_label(b.mullerian),
        ),
        ComparisonRow::new("Gonades", gonads_label(a.gonads), gonads_label(b.gonads)),
        ComparisonRow::new(
            "Phénotype",
            phenotype_label(a.phenotype),
            phenotype_label(b.phenotype),
        ),
    ];

    Comparison {
        left_id: left.id.clone(),
        right_id: right.id.clone(),
        parameters,
        results,
    }
}

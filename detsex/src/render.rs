//! Plain-text rendering of outcomes, history and comparisons for stdout.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::comparison::{Comparison, ComparisonRow};
use crate::core::labels::{
    GLOSSARY, GUIDE, duct_label, gonads_label, graft_label, implant_label, intervention_summary,
    phenotype_label, stage_label, surgery_label,
};
use crate::core::types::{ExperimentConfig, Outcome};
use crate::history::{ExperimentRecord, History};

/// Parameters, results and description of one experiment.
pub fn render_outcome(config: &ExperimentConfig, outcome: &Outcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", stage_label(config.stage));
    let _ = writeln!(out, "  Génotype         : {}", config.genotype);
    let _ = writeln!(out, "  Chirurgie        : {}", surgery_label(config.ablation));
    let _ = writeln!(out, "  Greffe           : {}", graft_label(config.graft));
    let _ = writeln!(out, "  Implant          : {}", implant_label(config.implant));
    let _ = writeln!(out, "Résultat");
    let _ = writeln!(out, "  Canaux de Wolff  : {}", duct_label(outcome.wolffian));
    let _ = writeln!(out, "  Canaux de Müller : {}", duct_label(outcome.mullerian));
    let _ = writeln!(out, "  Gonades          : {}", gonads_label(outcome.gonads));
    let _ = writeln!(out, "  Phénotype        : {}", phenotype_label(outcome.phenotype));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", outcome.description);
    out
}

/// One history entry as shown in listings.
pub fn render_record(record: &ExperimentRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[{}] {} Sujet : {} ({})",
        record.id,
        format_timestamp(record.timestamp),
        record.config.genotype,
        record.config.stage
    );
    for line in intervention_summary(&record.config) {
        let _ = writeln!(out, "  • {line}");
    }
    let _ = writeln!(
        out,
        "  => {} / Wolff {} / Müller {}",
        phenotype_label(record.outcome.phenotype),
        duct_label(record.outcome.wolffian),
        duct_label(record.outcome.mullerian)
    );
    out
}

/// Most recent experiments first, as in the lab journal.
pub fn render_history(history: &History) -> String {
    if history.is_empty() {
        return "Aucune expérience enregistrée.\n".to_string();
    }
    let mut out = format!("Journal de Bord ({})\n", history.len());
    for record in history.newest_first() {
        out.push_str(&render_record(record));
    }
    out
}

pub fn render_comparison(comparison: &Comparison) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Comparaison d'Expériences : A = {} / B = {}",
        comparison.left_id, comparison.right_id
    );
    let _ = writeln!(out, "Paramètres");
    render_rows(&mut out, &comparison.parameters);
    let _ = writeln!(out, "Résultats");
    render_rows(&mut out, &comparison.results);
    out
}

fn render_rows(out: &mut String, rows: &[ComparisonRow]) {
    for row in rows {
        let marker = if row.differs() { "*" } else { " " };
        let _ = writeln!(
            out,
            "{marker} {:<18} {:<26} {}",
            row.label, row.left, row.right
        );
    }
}

pub fn render_glossary() -> String {
    let mut out = String::new();
    for entry in &GLOSSARY {
        let _ = writeln!(out, "{}\n  {}", entry.term, entry.definition);
    }
    out
}

pub fn render_guide() -> String {
    let mut out = String::new();
    for (index, step) in GUIDE.iter().enumerate() {
        let _ = writeln!(out, "{}. {} : {}", index + 1, step.title, step.text);
    }
    out
}

fn format_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| millis.to_string())
}

//! Test-only helpers for building experiments and lab directories.

use std::path::Path;

use tempfile::TempDir;

use crate::core::resolver::resolve;
use crate::core::types::{ExperimentConfig, Genotype, Graft, Implant, Stage};
use crate::history::{ExperimentRecord, History};
use crate::io::config::{LabConfig, write_config};
use crate::io::history_store::write_history;
use crate::io::init::LabPaths;

/// Embryo-stage configuration with explicit interventions.
pub fn embryo(
    genotype: Genotype,
    ablation: bool,
    graft: Graft,
    implant: Implant,
) -> ExperimentConfig {
    ExperimentConfig {
        stage: Stage::Embryo,
        genotype,
        ablation,
        graft,
        implant,
    }
}

/// Record with a fixed id; the timestamp is the id when numeric.
pub fn record(id: &str, config: ExperimentConfig) -> ExperimentRecord {
    ExperimentRecord {
        id: id.to_string(),
        timestamp: id.parse().unwrap_or(0),
        config,
        outcome: resolve(&config),
    }
}

/// Scaffold `.detsex/` under `root` with default config and the given history.
pub fn lab_with_history(root: &Path, history: &History) -> LabPaths {
    let paths = LabPaths::new(root);
    write_config(&paths.config_path, &LabConfig::default()).expect("write config");
    write_history(&paths.history_path, history).expect("write history");
    paths
}

/// Fresh temporary lab with an empty history.
pub fn temp_lab() -> (TempDir, LabPaths) {
    let temp = tempfile::tempdir().expect("tempdir");
    let paths = lab_with_history(temp.path(), &History::default());
    (temp, paths)
}

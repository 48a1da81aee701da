//! Lab orchestration for the `detsex` CLI.
//!
//! Loads the lab directory, applies configured defaults, resolves experiments
//! and keeps the history file up to date.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::comparison::{Comparison, compare};
use crate::core::resolver::resolve;
use crate::core::types::{ExperimentConfig, Genotype, Graft, Implant, Outcome, Stage};
use crate::history::{ExperimentRecord, History};
use crate::io::config::load_config;
use crate::io::history_store::{load_history, write_history};
use crate::io::init::LabPaths;

/// Per-field overrides on top of the configured defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub stage: Option<Stage>,
    pub genotype: Option<Genotype>,
    pub ablation: Option<bool>,
    pub graft: Option<Graft>,
    pub implant: Option<Implant>,
}

impl Overrides {
    pub fn apply(&self, defaults: ExperimentConfig) -> ExperimentConfig {
        ExperimentConfig {
            stage: self.stage.unwrap_or(defaults.stage),
            genotype: self.genotype.unwrap_or(defaults.genotype),
            ablation: self.ablation.unwrap_or(defaults.ablation),
            graft: self.graft.unwrap_or(defaults.graft),
            implant: self.implant.unwrap_or(defaults.implant),
        }
    }
}

/// Result of running one experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub config: ExperimentConfig,
    pub outcome: Outcome,
    /// Id of the history record, when the run was recorded.
    pub record_id: Option<String>,
}

/// Lookup result for commands that address history records by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    /// The id that could not be found.
    Missing(String),
}

/// Resolve an experiment, optionally appending it to the history.
#[instrument(skip_all, fields(record = record))]
pub fn run_experiment(root: &Path, overrides: &Overrides, record: bool) -> Result<RunOutcome> {
    let paths = LabPaths::new(root);
    let cfg = load_config(&paths.config_path).context("load lab config")?;
    let config = overrides.apply(cfg.defaults);
    debug!(?config, "experiment configured");

    if !record {
        return Ok(RunOutcome {
            config,
            outcome: resolve(&config),
            record_id: None,
        });
    }

    let mut history = load_history(&paths.history_path).context("load history")?;
    let entry = history.record(config, Utc::now(), cfg.history_limit).clone();
    write_history(&paths.history_path, &history).context("save history")?;
    info!(id = %entry.id, records = history.len(), "experiment recorded");
    Ok(RunOutcome {
        config,
        outcome: entry.outcome,
        record_id: Some(entry.id),
    })
}

/// Load the history for listing.
pub fn read_history(root: &Path) -> Result<History> {
    let paths = LabPaths::new(root);
    load_history(&paths.history_path).context("load history")
}

pub fn find_record(root: &Path, id: &str) -> Result<Lookup<ExperimentRecord>> {
    let history = read_history(root)?;
    Ok(match history.find(id) {
        Some(record) => Lookup::Found(record.clone()),
        None => Lookup::Missing(id.to_string()),
    })
}

/// Configuration of a past experiment, for re-running it.
pub fn restore_record(root: &Path, id: &str) -> Result<Lookup<ExperimentConfig>> {
    let history = read_history(root)?;
    Ok(match history.restore(id) {
        Some(config) => Lookup::Found(config),
        None => Lookup::Missing(id.to_string()),
    })
}

pub fn delete_record(root: &Path, id: &str) -> Result<Lookup<()>> {
    let paths = LabPaths::new(root);
    let mut history = load_history(&paths.history_path).context("load history")?;
    if !history.delete(id) {
        return Ok(Lookup::Missing(id.to_string()));
    }
    write_history(&paths.history_path, &history).context("save history")?;
    info!(id, remaining = history.len(), "record deleted");
    Ok(Lookup::Found(()))
}

/// Empty the history. Returns how many records were removed.
pub fn clear_history(root: &Path) -> Result<usize> {
    let paths = LabPaths::new(root);
    let mut history = load_history(&paths.history_path).context("load history")?;
    let removed = history.len();
    history.clear();
    write_history(&paths.history_path, &history).context("save history")?;
    info!(removed, "history cleared");
    Ok(removed)
}

pub fn compare_records(root: &Path, left: &str, right: &str) -> Result<Lookup<Comparison>> {
    let history = read_history(root)?;
    let Some(a) = history.find(left) else {
        return Ok(Lookup::Missing(left.to_string()));
    };
    let Some(b) = history.find(right) else {
        return Ok(Lookup::Missing(right.to_string()));
    };
    Ok(Lookup::Found(compare(a, b)))
}

//! Initialization helpers for `.detsex/` scaffolding.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::config::{LabConfig, write_config};
use super::history_store::write_history;
use crate::history::History;

/// All canonical paths within `.detsex/` for a project root.
#[derive(Debug, Clone)]
pub struct LabPaths {
    pub root: PathBuf,
    pub lab_dir: PathBuf,
    pub config_path: PathBuf,
    pub history_path: PathBuf,
}

impl LabPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let lab_dir = root.join(".detsex");
        Self {
            root,
            config_path: lab_dir.join("config.toml"),
            history_path: lab_dir.join("history.json"),
            lab_dir,
        }
    }
}

/// Options for `init_lab`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite an existing config and history.
    pub force: bool,
}

/// Create `.detsex/` with a default config and an empty history.
///
/// Existing files are kept unless `force` is set.
pub fn init_lab(root: &Path, options: &InitOptions) -> Result<LabPaths> {
    let paths = LabPaths::new(root);
    fs::create_dir_all(&paths.lab_dir)
        .with_context(|| format!("create directory {}", paths.lab_dir.display()))?;

    if options.force || !paths.config_path.exists() {
        write_config(&paths.config_path, &LabConfig::default())?;
        debug!(path = %paths.config_path.display(), "wrote default config");
    }
    if options.force || !paths.history_path.exists() {
        write_history(&paths.history_path, &History::default())?;
        debug!(path = %paths.history_path.display(), "wrote empty history");
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ExperimentConfig;
    use crate::io::history_store::load_history;
    use chrono::Utc;

    #[test]
    fn init_creates_config_and_history() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_lab(temp.path(), &InitOptions { force: false }).expect("init");
        assert!(paths.config_path.exists());
        assert!(paths.history_path.exists());
        assert!(load_history(&paths.history_path).expect("load").is_empty());
    }

    #[test]
    fn init_keeps_history_unless_forced() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_lab(temp.path(), &InitOptions { force: false }).expect("init");
        let mut history = History::default();
        history.record(ExperimentConfig::default(), Utc::now(), 10);
        write_history(&paths.history_path, &history).expect("write");

        init_lab(temp.path(), &InitOptions { force: false }).expect("re-init");
        assert_eq!(load_history(&paths.history_path).expect("load").len(), 1);

        init_lab(temp.path(), &InitOptions { force: true }).expect("force init");
        assert!(load_history(&paths.history_path).expect("load").is_empty());
    }
}

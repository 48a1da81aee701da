//! History load/save helpers with schema validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::debug;

use super::config::write_atomic;
use crate::history::History;

const HISTORY_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/history/v1.schema.json"
));

/// Load and validate history from disk.
///
/// A missing file is an empty history.
pub fn load_history(path: &Path) -> Result<History> {
    if !path.exists() {
        debug!(path = %path.display(), "history missing, starting empty");
        return Ok(History::default());
    }
    let contents =
        fs::read_to_string(path).with_context(|| format!("read history {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse history {}", path.display()))?;
    validate_schema(&value).with_context(|| format!("validate history {}", path.display()))?;
    let history: History = serde_json::from_value(value)
        .with_context(|| format!("deserialize history {}", path.display()))?;
    debug!(path = %path.display(), records = history.len(), "history loaded");
    Ok(history)
}

/// Atomically write history as pretty JSON with a trailing newline.
pub fn write_history(path: &Path, history: &History) -> Result<()> {
    let mut buf = serde_json::to_string_pretty(history).context("serialize history")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn validate_schema(history: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(HISTORY_SCHEMA).context("parse history schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(history) {
        let messages = compiled
            .iter_errors(history)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "history schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

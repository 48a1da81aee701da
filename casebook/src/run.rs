//! Case checking: resolve, judge, classify, capture.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, info, instrument};

use detsex::core::resolver::resolve;
use detsex::core::types::Outcome;

use crate::case::CaseFile;
use crate::judge::{Judgment, judge};
use crate::results::{CaptureInput, capture_results};
use crate::verdict::{Verdict, classify_verdict};

/// In-memory evaluation of a case.
#[derive(Debug)]
pub struct Evaluation {
    pub outcome: Outcome,
    pub judgment: Judgment,
    pub verdict: Verdict,
}

/// Result of checking a single case.
#[derive(Debug)]
pub struct CheckRun {
    pub run_id: String,
    pub results_dir: PathBuf,
    pub verdict: Verdict,
}

/// Resolve the case's experiment and judge it against its expectations.
pub fn evaluate(case: &CaseFile) -> Evaluation {
    let outcome = resolve(&case.config);
    let judgment = judge(&case.expect, &outcome);
    let verdict = classify_verdict(&judgment);
    Evaluation {
        outcome,
        judgment,
        verdict,
    }
}

/// Evaluate a case and persist its results under `results_base`.
#[instrument(skip_all, fields(case_id = %case.case.id))]
pub fn check_case(results_base: &Path, case_path: &Path, case: &CaseFile) -> Result<CheckRun> {
    let checked_at = Utc::now();
    let run_id = format!("check-{}", checked_at.format("%Y%m%d_%H%M%S_%3f"));
    let evaluation = evaluate(case);
    debug!(verdict = ?evaluation.verdict, "case evaluated");

    let results_dir = capture_results(
        results_base,
        &CaptureInput {
            case_id: &case.case.id,
            case_path,
            run_id: &run_id,
            checked_at,
            config: &case.config,
            outcome: &evaluation.outcome,
            judgment: &evaluation.judgment,
            verdict: evaluation.verdict,
        },
    )
    .context("capture results")?;
    info!(run_id, verdict = ?evaluation.verdict, "case checked");

    Ok(CheckRun {
        run_id,
        results_dir,
        verdict: evaluation.verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::discover_cases;

    #[test]
    fn shipped_cases_all_pass() {
        let cases_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("cases");
        let cases = discover_cases(&cases_dir).expect("discover cases");
        assert!(cases.len() >= 7, "expected shipped cases");
        for (_, case) in &cases {
            let evaluation = evaluate(case);
            let failed: Vec<String> = evaluation
                .judgment
                .checks
                .iter()
                .filter(|check| !check.passed())
                .map(|check| check.label())
                .collect();
            assert_eq!(evaluation.verdict, Verdict::Pass, "{}: {:?}", case.case.id, failed);
        }
    }

    #[test]
    fn check_case_writes_results() {
        let temp = tempfile::tempdir().expect("tempdir");
        let case_path = temp.path().join("female-control.toml");
        std::fs::write(
            &case_path,
            "[case]\nid = \"female-control\"\ntitle = \"t\"\n[expect]\nphenotype = \"female\"\n",
        )
        .expect("write case");
        let case = CaseFile::load(&case_path).expect("load case");
        let run = check_case(&temp.path().join("results"), &case_path, &case).expect("check");
        assert_eq!(run.verdict, Verdict::Pass);
        assert!(run.results_dir.join("meta.json").exists());
        assert!(run.results_dir.starts_with(temp.path().join("results/female-control")));
    }
}

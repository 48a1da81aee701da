//! CLI command implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::case::{CaseFile, discover_cases, validate_case_id};
use crate::report::aggregate;
use crate::run::check_case;
use crate::verdict::Verdict;

fn cases_dir(repo_root: &Path) -> PathBuf {
    repo_root.join("casebook").join("cases")
}

fn results_base(repo_root: &Path) -> PathBuf {
    repo_root.join("casebook").join("results")
}

/// List all available cases.
pub fn list_cases(repo_root: &Path) -> Result<()> {
    for (_, case) in discover_cases(&cases_dir(repo_root))? {
        println!("{} {}", case.case.id, case.case.title);
    }
    Ok(())
}

/// Check one case by id, or every case. Returns whether all checked cases passed.
pub fn check_cases(repo_root: &Path, case_id: Option<&str>) -> Result<bool> {
    let cases_dir = cases_dir(repo_root);
    let cases = match case_id {
        Some(case_id) => {
            validate_case_id(case_id)?;
            let case_path = cases_dir.join(format!("{case_id}.toml"));
            if !case_path.exists() {
                bail!("case {} not found at {}", case_id, case_path.display());
            }
            let case = CaseFile::load(&case_path).context("load case")?;
            if case.case.id != case_id {
                bail!(
                    "case file {} declares case.id {}, expected {}",
                    case_path.display(),
                    case.case.id,
                    case_id
                );
            }
            vec![(case_path, case)]
        }
        None => discover_cases(&cases_dir)?,
    };
    debug!(count = cases.len(), "cases loaded");

    let results_base = results_base(repo_root);
    let mut failed = 0;
    for (case_path, case) in &cases {
        let run = check_case(&results_base, case_path, case).context("check case")?;
        if run.verdict == Verdict::Fail {
            failed += 1;
        }
        println!(
            "check: case={} run_id={} verdict={:?} results={}",
            case.case.id,
            run.run_id,
            run.verdict,
            run.results_dir.display()
        );
    }
    info!(checked = cases.len(), failed, "check finished");
    Ok(failed == 0)
}

/// Show aggregated results for a case.
pub fn report_case(repo_root: &Path, case_id: &str) -> Result<()> {
    validate_case_id(case_id)?;
    let results_dir = results_base(repo_root).join(case_id);
    let (summary, warnings) = aggregate(&results_dir)?;
    println!("report: case={} runs={}", case_id, summary.runs);
    println!(
        "report: pass={} fail={} unknown={}",
        summary.pass, summary.fail, summary.unknown
    );
    for (label, (passed, total)) in summary.check_pass_rates {
        println!("report: check {} {}/{}", label, passed, total);
    }
    for warning in warnings {
        eprintln!("warning: {}", warning);
    }
    Ok(())
}

/// Remove stored results for a case.
pub fn clean_case(repo_root: &Path, case_id: &str) -> Result<()> {
    validate_case_id(case_id)?;
    let case_results = results_base(repo_root).join(case_id);
    if case_results.exists() {
        std::fs::remove_dir_all(&case_results)
            .with_context(|| format!("remove {}", case_results.display()))?;
    }
    println!("clean: case={} results={}", case_id, case_results.display());
    Ok(())
}

use serde::{Deserialize, Serialize};

use crate::judge::{CheckOutcome, Judgment};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Fail,
}

pub fn classify_verdict(judgment: &Judgment) -> Verdict {
    if judgment.checks.iter().all(CheckOutcome::passed) {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}

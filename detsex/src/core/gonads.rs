//! Physical gonad-state resolution.
//!
//! Describes which gonadal tissue is present; it does not decide which
//! hormones act. Cases are evaluated in order and the first match wins, so
//! original testes dominate whatever is grafted.

use crate::core::hormones::HormoneSources;
use crate::core::types::{ExperimentConfig, Gonads, Graft};

/// Classify the gonadal tissue left after ablation and grafting.
pub fn resolve_gonads(config: &ExperimentConfig, sources: &HormoneSources) -> Gonads {
    if sources.original_testes {
        Gonads::Testes
    } else if sources.original_ovaries && sources.graft_testis {
        Gonads::Mixed
    } else if sources.original_ovaries {
        Gonads::Ovaries
    } else if sources.graft_testis {
        Gonads::Testes
    } else if config.graft == Graft::Ovary {
        Gonads::Ovaries
    } else {
        Gonads::None
    }
}

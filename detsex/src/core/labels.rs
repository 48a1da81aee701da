//! Display labels and teaching texts shown alongside outcomes.

use crate::core::types::{DuctFate, ExperimentConfig, Gonads, Graft, Implant, Phenotype, Stage};

pub fn graft_label(graft: Graft) -> &'static str {
    match graft {
        Graft::None => "Aucune",
        Graft::Testis => "Testicule",
        Graft::Ovary => "Ovaire",
    }
}

pub fn implant_label(implant: Implant) -> &'static str {
    match implant {
        Implant::None => "Aucun",
        Implant::Testosterone => "Testostérone",
        Implant::Amh => "AMH",
        Implant::Both => "Testostérone + AMH",
    }
}

pub fn surgery_label(ablation: bool) -> &'static str {
    if ablation { "Castration" } else { "Aucune" }
}

pub fn stage_label(stage: Stage) -> &'static str {
    match stage {
        Stage::Embryo => "Stade Indifférencié",
        Stage::Adult => "Stade Adulte",
    }
}

pub fn duct_label(fate: DuctFate) -> &'static str {
    match fate {
        DuctFate::Persists => "maintenus",
        DuctFate::Regresses => "régressés",
    }
}

pub fn gonads_label(gonads: Gonads) -> &'static str {
    match gonads {
        Gonads::Testes => "Testicules",
        Gonads::Ovaries => "Ovaires",
        Gonads::Mixed => "Ovaires + Testicule greffé",
        Gonads::None => "Aucune",
    }
}

pub fn phenotype_label(phenotype: Phenotype) -> &'static str {
    match phenotype {
        Phenotype::Male => "Mâle",
        Phenotype::Female => "Femelle",
        Phenotype::Mixed => "Double tractus",
    }
}

/// Bullet lines summarizing the interventions of an experiment.
///
/// A control subject is summarized as the control group.
pub fn intervention_summary(config: &ExperimentConfig) -> Vec<String> {
    if config.is_control() {
        return vec!["Groupe Témoin".to_string()];
    }
    let mut lines = Vec::new();
    if config.ablation {
        lines.push("Castration".to_string());
    }
    if config.graft != Graft::None {
        lines.push(format!("Greffe : {}", graft_label(config.graft)));
    }
    if config.implant != Implant::None {
        lines.push(format!("Implant : {}", implant_label(config.implant)));
    }
    lines
}

/// A glossary term and its definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub definition: &'static str,
}

pub const GLOSSARY: [GlossaryEntry; 6] = [
    GlossaryEntry {
        term: "Canaux de Wolff",
        definition: "Structures embryonnaires qui se différencient en voies génitales mâles (épididyme, canal déférent) sous l'action de la Testostérone. Ils régressent en son absence.",
    },
    GlossaryEntry {
        term: "Canaux de Müller",
        definition: "Structures embryonnaires qui se différencient en voies génitales femelles (oviducte, utérus) par défaut. Ils régressent en présence d'AMH.",
    },
    GlossaryEntry {
        term: "Gonades indifférenciées",
        definition: "Organes reproducteurs primaires présents chez l'embryon, capables de devenir soit des testicules, soit des ovaires selon le patrimoine génétique.",
    },
    GlossaryEntry {
        term: "Testostérone",
        definition: "Hormone sexuelle produite par les cellules de Leydig du testicule. Elle stimule le maintien et le développement des canaux de Wolff.",
    },
    GlossaryEntry {
        term: "AMH (Hormone Anti-Müllérienne)",
        definition: "Hormone glycoprotéique produite par les cellules de Sertoli du testicule. Elle provoque la disparition des canaux de Müller.",
    },
    GlossaryEntry {
        term: "Castration",
        definition: "Ablation chirurgicale des gonades (testicules ou ovaires), supprimant ainsi la source principale d'hormones sexuelles endogènes.",
    },
];

/// One step of the usage guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideStep {
    pub title: &'static str,
    pub text: &'static str,
}

pub const GUIDE: [GuideStep; 4] = [
    GuideStep {
        title: "Configurer",
        text: "Choisissez le sexe génétique (XX/XY) et le stade de développement.",
    },
    GuideStep {
        title: "Expérimenter",
        text: "Appliquez des modifications : castration, greffes ou implants hormonaux.",
    },
    GuideStep {
        title: "Observer",
        text: "Lancez la simulation pour voir le devenir des canaux de Wolff et Müller.",
    },
    GuideStep {
        title: "Comparer",
        text: "Sélectionnez deux expériences dans l'historique pour analyser les différences.",
    },
];

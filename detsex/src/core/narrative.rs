//! Explanatory text for resolved outcomes.
//!
//! Embryo descriptions come from an ordered scenario ladder matched against the
//! input configuration, first match wins. Order is load-bearing: castration
//! must be tried before the combined-implant scenario, whose guard overlaps it.
//! Configurations outside the ladder get a two-clause text composed from the
//! duct fates.

use crate::core::ducts::DuctFates;
use crate::core::types::{DuctFate, ExperimentConfig, Genotype, Graft, Implant};

/// Named embryo scenarios with a fixed narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    FemaleControl,
    MaleControl,
    Castration,
    TestisGraft,
    TestosteroneImplant,
    AmhImplant,
    CombinedImplant,
}

struct Rule {
    scenario: Scenario,
    applies: fn(&ExperimentConfig) -> bool,
}

static LADDER: [Rule; 7] = [
    Rule {
        scenario: Scenario::FemaleControl,
        applies: is_female_control,
    },
    Rule {
        scenario: Scenario::MaleControl,
        applies: is_male_control,
    },
    Rule {
        scenario: Scenario::Castration,
        applies: is_castration_only,
    },
    Rule {
        scenario: Scenario::TestisGraft,
        applies: is_xx_testis_graft,
    },
    Rule {
        scenario: Scenario::TestosteroneImplant,
        applies: is_xx_testosterone_implant,
    },
    Rule {
        scenario: Scenario::AmhImplant,
        applies: is_xx_amh_implant,
    },
    Rule {
        scenario: Scenario::CombinedImplant,
        applies: is_combined_implant,
    },
];

fn is_female_control(config: &ExperimentConfig) -> bool {
    config.genotype == Genotype::Xx && config.is_control()
}

fn is_male_control(config: &ExperimentConfig) -> bool {
    config.genotype == Genotype::Xy && config.is_control()
}

fn is_castration_only(config: &ExperimentConfig) -> bool {
    config.ablation && config.graft == Graft::None && config.implant == Implant::None
}

fn is_xx_testis_graft(config: &ExperimentConfig) -> bool {
    config.genotype == Genotype::Xx && config.graft == Graft::Testis
}

fn is_xx_testosterone_implant(config: &ExperimentConfig) -> bool {
    config.genotype == Genotype::Xx && config.implant == Implant::Testosterone
}

fn is_xx_amh_implant(config: &ExperimentConfig) -> bool {
    config.genotype == Genotype::Xx && config.implant == Implant::Amh
}

fn is_combined_implant(config: &ExperimentConfig) -> bool {
    (config.genotype == Genotype::Xx || config.ablation) && config.implant == Implant::Both
}

impl Scenario {
    /// Scenarios in the order they are tried.
    pub fn ladder() -> impl Iterator<Item = Scenario> {
        LADDER.iter().map(|rule| rule.scenario)
    }

    pub fn text(self) -> &'static str {
        match self {
            Scenario::FemaleControl => {
                "Témoin Femelle (XX) : Les ovaires se développent. L'absence de Testostérone (T) entraîne la régression des canaux de Wolff. L'absence d'AMH permet la persistance des canaux de Müller."
            }
            Scenario::MaleControl => {
                "Témoin Mâle (XY) : Les testicules se développent. La T maintient les canaux de Wolff. L'AMH provoque la régression des canaux de Müller."
            }
            Scenario::Castration => {
                "Castration (Gonadectomie) : Le retrait des gonades supprime les sources hormonales. Le phénotype féminin par défaut se développe (persistance des canaux de Müller)."
            }
            Scenario::TestisGraft => {
                "XX + Greffe de Testicule : Le greffon sécrète T et AMH. Les canaux de Wolff sont maintenus, Müller régresse. Une masculinisation du tractus se produit."
            }
            Scenario::TestosteroneImplant => {
                "XX + Testostérone : La T maintient les canaux de Wolff. L'absence de tissu testiculaire (donc d'AMH) signifie que les canaux de Müller persistent AUSSI. Résultat : double tractus."
            }
            Scenario::AmhImplant => {
                "XX + AMH : L'absence de T entraîne la régression des canaux de Wolff. L'implant d'AMH provoque la régression des canaux de Müller. Il ne reste aucun des deux canaux (Canaux 'vides')."
            }
            Scenario::CombinedImplant => {
                "Implant T + AMH : La combinaison des deux hormones mime parfaitement l'action endocrine du testicule. La T maintient Wolff et l'AMH fait régresser Müller, conduisant à une différenciation masculine des voies génitales."
            }
        }
    }
}

/// First scenario whose trigger matches `config`, if any.
pub fn match_scenario(config: &ExperimentConfig) -> Option<Scenario> {
    LADDER
        .iter()
        .find(|rule| (rule.applies)(config))
        .map(|rule| rule.scenario)
}

/// Description for the embryo branch.
pub fn embryo_description(config: &ExperimentConfig, fates: DuctFates) -> String {
    match match_scenario(config) {
        Some(scenario) => scenario.text().to_string(),
        None => generic_description(fates),
    }
}

/// Two independent clauses, one per duct.
pub fn generic_description(fates: DuctFates) -> String {
    let wolffian = match fates.wolffian {
        DuctFate::Persists => "Canaux de Wolff maintenus (T présente).",
        DuctFate::Regresses => "Régression des canaux de Wolff (Pas de T).",
    };
    let mullerian = match fates.mullerian {
        DuctFate::Persists => "Canaux de Müller persistants (Pas d'AMH).",
        DuctFate::Regresses => "Régression des canaux de Müller (AMH présente).",
    };
    format!("{wolffian} {mullerian}")
}

/// Description for the adult branch.
///
/// Without interventions this names the genotype-typical organization;
/// otherwise it notes that the critical window has passed, adding one sentence
/// for castration and one for hormone sources.
pub fn adult_description(config: &ExperimentConfig) -> String {
    let mut sentences: Vec<&str> = Vec::new();
    if config.has_intervention() {
        sentences.push("Les voies génitales sont déjà différenciées (Période critique dépassée).");
        if config.ablation {
            sentences.push(
                "La castration retire les gonades mais ne fait pas régresser les canaux formés.",
            );
        }
        if config.graft != Graft::None || config.implant != Implant::None {
            sentences.push(
                "L'ajout d'hormones n'a plus d'effet morphologique sur l'organisation des canaux.",
            );
        }
    } else {
        sentences.push(match config.genotype {
            Genotype::Xy => {
                "Organisation masculine typique (Canaux de Wolff maintenus, Müller régressés)."
            }
            Genotype::Xx => {
                "Organisation féminine typique (Canaux de Müller maintenus, Wolff régressés)."
            }
        });
    }
    format!("Stade Adulte ({}) : {}", config.genotype, sentences.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Stage;

    fn embryo(
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

    #[test]
    fn ladder_order_is_fixed() {
        let order: Vec<Scenario> = Scenario::ladder().collect();
        assert_eq!(
            order,
            vec![
                Scenario::FemaleControl,
                Scenario::MaleControl,
                Scenario::Castration,
                Scenario::TestisGraft,
                Scenario::TestosteroneImplant,
                Scenario::AmhImplant,
                Scenario::CombinedImplant,
            ]
        );
    }

    #[test]
    fn controls_match_their_genotype() {
        let female = embryo(Genotype::Xx, false, Graft::None, Implant::None);
        assert_eq!(match_scenario(&female), Some(Scenario::FemaleControl));
        let male = embryo(Genotype::Xy, false, Graft::None, Implant::None);
        assert_eq!(match_scenario(&male), Some(Scenario::MaleControl));
    }

    #[test]
    fn castration_applies_to_any_genotype() {
        for genotype in Genotype::ALL {
            let config = embryo(genotype, true, Graft::None, Implant::None);
            assert_eq!(match_scenario(&config), Some(Scenario::Castration));
        }
    }

    #[test]
    fn testis_graft_wins_over_implants() {
        let config = embryo(Genotype::Xx, false, Graft::Testis, Implant::Amh);
        assert_eq!(match_scenario(&config), Some(Scenario::TestisGraft));
    }

    #[test]
    fn combined_implant_needs_xx_or_ablation() {
        let xx = embryo(Genotype::Xx, false, Graft::None, Implant::Both);
        assert_eq!(match_scenario(&xx), Some(Scenario::CombinedImplant));
        let castrated_xy = embryo(Genotype::Xy, true, Graft::None, Implant::Both);
        assert_eq!(match_scenario(&castrated_xy), Some(Scenario::CombinedImplant));
        let intact_xy = embryo(Genotype::Xy, false, Graft::None, Implant::Both);
        assert_eq!(match_scenario(&intact_xy), None);
    }

    #[test]
    fn unmatched_config_uses_generic_clauses() {
        let config = embryo(Genotype::Xy, true, Graft::Ovary, Implant::Testosterone);
        assert_eq!(match_scenario(&config), None);
        let text = embryo_description(
            &config,
            DuctFates {
                wolffian: DuctFate::Persists,
                mullerian: DuctFate::Persists,
            },
        );
        assert_eq!(
            text,
            "Canaux de Wolff maintenus (T présente). Canaux de Müller persistants (Pas d'AMH)."
        );
    }

    #[test]
    fn adult_control_names_typical_organization() {
        let config = ExperimentConfig {
            stage: Stage::Adult,
            genotype: Genotype::Xy,
            ..ExperimentConfig::default()
        };
        assert_eq!(
            adult_description(&config),
            "Stade Adulte (XY) : Organisation masculine typique (Canaux de Wolff maintenus, Müller régressés)."
        );
    }

    #[test]
    fn adult_interventions_are_explained() {
        let castrated = ExperimentConfig {
            stage: Stage::Adult,
            genotype: Genotype::Xy,
            ablation: true,
            ..ExperimentConfig::default()
        };
        let text = adult_description(&castrated);
        assert!(text.starts_with("Stade Adulte (XY) : Les voies génitales sont déjà différenciées"));
        assert!(text.contains("La castration retire les gonades"));
        assert!(!text.contains("L'ajout d'hormones"));

        let implanted = ExperimentConfig {
            stage: Stage::Adult,
            implant: Implant::Testosterone,
            ..ExperimentConfig::default()
        };
        let text = adult_description(&implanted);
        assert!(!text.contains("castration"));
        assert!(text.ends_with("sur l'organisation des canaux."));
    }

    #[test]
    fn adult_castration_text_is_exact() {
        let castrated = ExperimentConfig {
            stage: Stage::Adult,
            genotype: Genotype::Xy,
            ablation: true,
            ..ExperimentConfig::default()
        };
        assert_eq!(
            adult_description(&castrated),
            "Stade Adulte (XY) : Les voies génitales sont déjà différenciées (Période critique dépassée). La castration retire les gonades mais ne fait pas régresser les canaux formés."
        );

        let everything = ExperimentConfig {
            stage: Stage::Adult,
            genotype: Genotype::Xx,
            ablation: true,
            graft: Graft::Testis,
            implant: Implant::Both,
        };
        assert_eq!(
            adult_description(&everything),
            "Stade Adulte (XX) : Les voies génitales sont déjà différenciées (Période critique dépassée). La castration retire les gonades mais ne fait pas régresser les canaux formés. L'ajout d'hormones n'a plus d'effet morphologique sur l'organisation des canaux."
        );
    }

    #[test]
    fn scenario_texts_are_exact() {
        let cases = [
            (
                embryo(Genotype::Xx, false, Graft::None, Implant::None),
                "Témoin Femelle (XX) : Les ovaires se développent. L'absence de Testostérone (T) entraîne la régression des canaux de Wolff. L'absence d'AMH permet la persistance des canaux de Müller.",
            ),
            (
                embryo(Genotype::Xy, false, Graft::None, Implant::None),
                "Témoin Mâle (XY) : Les testicules se développent. La T maintient les canaux de Wolff. L'AMH provoque la régression des canaux de Müller.",
            ),
            (
                embryo(Genotype::Xy, true, Graft::None, Implant::None),
                "Castration (Gonadectomie) : Le retrait des gonades supprime les sources hormonales. Le phénotype féminin par défaut se développe (persistance des canaux de Müller).",
            ),
            (
                embryo(Genotype::Xx, false, Graft::Testis, Implant::None),
                "XX + Greffe de Testicule : Le greffon sécrète T et AMH. Les canaux de Wolff sont maintenus, Müller régresse. Une masculinisation du tractus se produit.",
            ),
            (
                embryo(Genotype::Xx, false, Graft::None, Implant::Testosterone),
                "XX + Testostérone : La T maintient les canaux de Wolff. L'absence de tissu testiculaire (donc d'AMH) signifie que les canaux de Müller persistent AUSSI. Résultat : double tractus.",
            ),
            (
                embryo(Genotype::Xx, false, Graft::None, Implant::Amh),
                "XX + AMH : L'absence de T entraîne la régression des canaux de Wolff. L'implant d'AMH provoque la régression des canaux de Müller. Il ne reste aucun des deux canaux (Canaux 'vides').",
            ),
            (
                embryo(Genotype::Xy, true, Graft::None, Implant::Both),
                "Implant T + AMH : La combinaison des deux hormones mime parfaitement l'action endocrine du testicule. La T maintient Wolff et l'AMH fait régresser Müller, conduisant à une différenciation masculine des voies génitales.",
            ),
        ];
        let mut seen = Vec::new();
        for (config, expected) in cases {
            let scenario = match_scenario(&config).expect("scenario matches");
            assert_eq!(scenario.text(), expected, "{scenario:?}");
            seen.push(scenario);
        }
        assert_eq!(seen, Scenario::ladder().collect::<Vec<_>>());
    }
}

// src/noyau/voix.rs
//
// Résolveur de commandes vocales.
//
// Entrée : une phrase transcrite (par un collaborateur externe).
// Algorithme, dans l'ordre :
// 1) découpe sur les blancs ; chaque mot est nettoyé (séparateurs de
//    milliers, ponctuation finale) puis tenté en f64 ; les succès forment
//    `litteraux` dans l'ordre d'apparition.
// 2) phrase en MAJUSCULES. Si ≥ 2 littéraux : balayage de la table binaire
//    par longueur de mot-clé décroissante (égalité départagée par l'ordre
//    FIXE de la table) ; premier mot-clé trouvé en sous-chaîne => appliqué
//    à (litteraux[0], litteraux[1]).
// 3) sinon, si ≥ 1 littéral : même balayage sur la table unaire, appliqué
//    à litteraux[0]. (Avec ≥ 2 littéraux mais aucun mot-clé binaire, on
//    retombe bien ici.)
// 4) sinon, ou si aucun mot-clé ne colle : CommandeInconnue.
//
// Déterminisme : l'ordre de balayage (longueur décroissante, tri STABLE
// sur la table) ne dépend que des tables => deux exécutions identiques
// résolvent toujours pareil, même avec des mots-clés qui se recouvrent.

use super::erreurs::ErreurCalc;
use super::fonctions;

/* ------------------------ Tables de mots-clés ------------------------ */

/// Mot-clé vocal -> nom d'opération du registre.
/// L'ordre de déclaration EST le départage des égalités de longueur.
pub struct MotCle {
    pub mot: &'static str,
    pub operation: &'static str,
}

pub static MOTS_BINAIRES: &[MotCle] = &[
    MotCle { mot: "ADD", operation: "add" },
    MotCle { mot: "PLUS", operation: "add" },
    MotCle { mot: "SUBTRACT", operation: "sub" },
    MotCle { mot: "MINUS", operation: "sub" },
    MotCle { mot: "MULTIPLY", operation: "mul" },
    MotCle { mot: "TIMES", operation: "mul" },
    MotCle { mot: "DIVIDE", operation: "div" },
    MotCle { mot: "BY", operation: "div" },
    MotCle { mot: "MOD", operation: "mod" },
    MotCle { mot: "POWER", operation: "pow" },
];

pub static MOTS_UNAIRES: &[MotCle] = &[
    MotCle { mot: "ROOT", operation: "sqrt" },
    MotCle { mot: "SQRT", operation: "sqrt" },
    MotCle { mot: "SIN", operation: "sin" },
    MotCle { mot: "COS", operation: "cos" },
    MotCle { mot: "TAN", operation: "tan" },
    MotCle { mot: "LOG", operation: "log" },
    MotCle { mot: "LN", operation: "ln" },
    MotCle { mot: "SQUARE", operation: "carre" },
    MotCle { mot: "CUBE", operation: "cube" },
    MotCle { mot: "FACTORIAL", operation: "factorial" },
];

/* ------------------------ Littéraux numériques ------------------------ */

/// Nettoie un mot transcrit : séparateurs de milliers retirés partout,
/// ponctuation de fin retirée ("3,000" -> "3000", "4?" -> "4").
fn nettoyer_mot(mot: &str) -> String {
    mot.replace(',', "")
        .trim_end_matches(['?', '!', '.', ';', ':'])
        .to_string()
}

/// Littéraux numériques de la phrase, dans l'ordre d'apparition.
pub fn extraire_litteraux(phrase: &str) -> Vec<f64> {
    phrase
        .split_whitespace()
        .filter_map(|mot| nettoyer_mot(mot).parse::<f64>().ok())
        .collect()
}

/* ------------------------ Balayage déterministe ------------------------ */

/// Ordre de balayage d'une table : longueur décroissante, tri stable
/// (les égalités gardent l'ordre de déclaration de la table).
fn ordre_balayage(table: &'static [MotCle]) -> Vec<&'static MotCle> {
    let mut ordre: Vec<&MotCle> = table.iter().collect();
    ordre.sort_by(|a, b| b.mot.len().cmp(&a.mot.len()));
    ordre
}

fn premier_match(table: &'static [MotCle], phrase_maj: &str) -> Option<&'static MotCle> {
    ordre_balayage(table)
        .into_iter()
        .find(|mc| phrase_maj.contains(mc.mot))
}

/* ------------------------ Résolution ------------------------ */

/// Résout une phrase transcrite en un résultat numérique.
pub fn resoudre(phrase: &str) -> Result<f64, ErreurCalc> {
    let litteraux = extraire_litteraux(phrase);
    let maj = phrase.to_uppercase();

    if litteraux.len() >= 2 {
        if let Some(mc) = premier_match(MOTS_BINAIRES, &maj) {
            // jamais None : cohérence vérifiée au démarrage (fail fast)
            let Some(spec) = fonctions::chercher(mc.operation) else {
                return Err(ErreurCalc::CommandeInconnue);
            };
            return spec.appliquer_binaire(litteraux[0], litteraux[1]);
        }
    }

    if let Some(premier) = litteraux.first() {
        if let Some(mc) = premier_match(MOTS_UNAIRES, &maj) {
            let Some(spec) = fonctions::chercher(mc.operation) else {
                return Err(ErreurCalc::CommandeInconnue);
            };
            return spec.appliquer_unaire(*premier);
        }
    }

    Err(ErreurCalc::CommandeInconnue)
}

/* ------------------------ Tests ------------------------ */

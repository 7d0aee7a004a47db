// src/noyau/eval.rs
//
// Noyau — évaluation (pipeline réel)
//
// tokenize -> RPN -> Expr -> eval -> garde de finitude -> f64
//
// Remarque : jamais d'éval "texte" du langage hôte. Le texte utilisateur
// ne devient jamais autre chose que des jetons puis un arbre.

use super::erreurs::ErreurCalc;
use super::jetons::tokenize;
use super::rpn::{from_rpn, to_rpn};

/// API publique : évalue une expression et retourne sa valeur f64.
///
/// Garanties:
/// - Entrée vide / jetons invalides / structure invalide => Syntaxe.
/// - Division ou modulo par zéro => Arithmetique.
/// - Domaine de fonction violé => Domaine.
/// - Jamais de NaN ni d'infini en sortie (garde finale => Arithmetique).
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurCalc> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurCalc::Syntaxe("entrée vide".into()));
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) AST
    let expr = from_rpn(&rpn)?;

    // 4) Valeur
    let v = expr.eval()?;

    // 5) Garde : les validateurs de domaine couvrent les cas connus,
    //    ceci attrape ce qui déborde quand même (ex: 1e308*10).
    if !v.is_finite() {
        return Err(ErreurCalc::Arithmetique(format!("résultat non fini ({v})")));
    }

    Ok(v)
}

/// Texte d'écran d'une valeur : f64 au plus court qui re-parse identique
/// (pas d'arrondi forcé).
pub fn format_valeur(v: f64) -> String {
    format!("{v}")
}

//! Noyau de calcul scientifique (f64)
//!
//! Organisation interne :
//! - erreurs.rs   : taxonomie d'erreurs (thiserror)
//! - jetons.rs    : tokenisation
//! - rpn.rs       : shunting-yard + construction Expr
//! - expr.rs      : AST + évaluation récursive
//! - fonctions.rs : registre d'opérations + validateurs de domaine
//! - eval.rs      : pipeline complet + format d'écran
//! - voix.rs      : résolveur de commandes vocales

pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod fonctions;
pub mod jetons;
pub mod rpn;
pub mod voix;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurCalc;
pub use eval::{eval_expression, format_valeur};

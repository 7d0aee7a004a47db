// src/noyau/erreurs.rs
//
// Taxonomie d'erreurs du noyau + pipeline vocal.
//
// Contrats:
// - Aucune erreur n'est fatale : la frontière app (etat.rs) traduit en
//   texte d'écran ("Error" / "Voice Error") et la session reste utilisable.
// - Syntaxe / Arithmetique / Domaine viennent du pipeline d'évaluation.
// - CommandeInconnue / Capture / Delai viennent du pipeline vocal.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalc {
    /// Jetons ou structure d'expression invalides (caractère inconnu,
    /// parenthèses dépareillées, opérande manquant, opérateur pendant...).
    #[error("syntaxe: {0}")]
    Syntaxe(String),

    /// Opération numériquement impossible (division/modulo par zéro,
    /// dépassement vers l'infini).
    #[error("arithmétique: {0}")]
    Arithmetique(String),

    /// Opérande hors du domaine d'une fonction (√ d'un négatif, ln(0),
    /// factorielle non entière...).
    #[error("domaine: {0}")]
    Domaine(String),

    /// Phrase transcrite sans littéral numérique ou sans mot-clé connu.
    #[error("commande vocale non reconnue")]
    CommandeInconnue,

    /// Le collaborateur de capture audio a échoué.
    #[error("capture audio: {0}")]
    Capture(String),

    /// Délai d'écoute dépassé (capture auto-annulée).
    #[error("délai d'écoute dépassé")]
    Delai,
}

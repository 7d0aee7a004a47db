//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau... sauf l'appel d'évaluation au "=").
//!
//! Rôle : contenir le tampon de session (texte éditable affiché à l'écran)
//! et sa machine à états {Vide, Edition, Resultat, ErreurAffichee}.
//!
//! Contrats :
//! - Tampon à propriétaire unique, mutations synchrones au premier plan.
//! - Après un résultat ou une erreur, la PREMIÈRE frappe repart d'un
//!   tampon réduit à cette frappe (pas de chaînage implicite).
//! - Les erreurs du noyau deviennent le texte "Error", celles du pipeline
//!   vocal "Voice Error" : jamais de crash, CE ramène toujours à Vide.

use std::sync::Arc;

use super::micro::{CaptureVocale, ControleurVocal, SyntheseVocale};
use crate::noyau::{self, ErreurCalc};

/// Texte d'écran d'une évaluation échouée.
pub const TEXTE_ERREUR: &str = "Error";

/// Texte d'écran d'un échec du pipeline vocal.
pub const TEXTE_ERREUR_VOCALE: &str = "Voice Error";

/// Texte transitoire pendant qu'une capture est en vol.
pub const TEXTE_ECOUTE: &str = "Listening...";

/// Machine à états du tampon.
/// `Resultat` couvre aussi le texte transitoire "Listening..." : dans les
/// deux cas le contenu n'est pas éditable et la prochaine frappe ressème.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Vide,
    Edition,
    Resultat,
    ErreurAffichee,
}

pub struct AppCalc {
    // --- tampon de session ---
    pub tampon: String,
    pub phase: Phase,

    // --- pipeline vocal (workers en arrière-plan) ---
    pub vocal: ControleurVocal,
}

impl AppCalc {
    pub fn nouvelle(capture: Arc<dyn CaptureVocale>, synthese: Arc<dyn SyntheseVocale>) -> Self {
        Self {
            tampon: String::new(),
            phase: Phase::Vide,
            vocal: ControleurVocal::nouveau(capture, synthese),
        }
    }

    /* ------------------------ Frappes (pavé / clavier) ------------------------ */

    /// Frappe ou insertion de fonction : "7", "+", "sqrt(", …
    /// Le fragment arrive déjà normalisé (÷ -> "/", xʸ -> "^", π -> texte
    /// numérique) : le tampon ne contient que des symboles canoniques.
    pub fn inserer(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }

        // après un résultat ou une erreur : on ressème avec cette frappe
        if matches!(self.phase, Phase::Resultat | Phase::ErreurAffichee) {
            self.tampon.clear();
        }

        self.tampon.push_str(fragment);
        self.phase = Phase::Edition;
    }

    /// C : efface le dernier caractère.
    /// Sur un résultat/erreur affiché (non éditable) : équivaut à CE.
    pub fn effacer_dernier(&mut self) {
        match self.phase {
            Phase::Vide => {}
            Phase::Edition => {
                self.tampon.pop();
                if self.tampon.is_empty() {
                    self.phase = Phase::Vide;
                }
            }
            Phase::Resultat | Phase::ErreurAffichee => self.vider(),
        }
    }

    /// CE : remise à zéro du tampon. Idempotent.
    pub fn vider(&mut self) {
        self.tampon.clear();
        self.phase = Phase::Vide;
    }

    /// "=" : évalue le tampon via le noyau.
    /// Hors Edition : aucun effet (rien à évaluer).
    pub fn evaluer(&mut self) {
        if self.phase != Phase::Edition {
            return;
        }

        match noyau::eval_expression(&self.tampon) {
            Ok(v) => {
                self.tampon = noyau::format_valeur(v);
                self.phase = Phase::Resultat;
            }
            Err(e) => {
                log::warn!("évaluation de {:?} refusée: {e}", self.tampon);
                self.tampon = TEXTE_ERREUR.to_string();
                self.phase = Phase::ErreurAffichee;
            }
        }
    }

    /* ------------------------ Pipeline vocal ------------------------ */

    /// Bouton micro : démarre la capture et affiche "Listening...".
    pub fn demarrer_ecoute(&mut self) {
        if self.vocal.ecoute_en_cours() {
            return;
        }
        self.vocal.demarrer();
        self.tampon = TEXTE_ECOUTE.to_string();
        self.phase = Phase::Resultat; // non éditable, prochaine frappe ressème
    }

    /// À appeler chaque frame : dépose l'issue vocale dans le tampon
    /// dès qu'elle arrive.
    pub fn relever_issue_vocale(&mut self) {
        if let Some(issue) = self.vocal.relever() {
            self.deposer_issue_vocale(issue);
        }
    }

    fn deposer_issue_vocale(&mut self, issue: Result<f64, ErreurCalc>) {
        match issue {
            Ok(v) => {
                self.tampon = noyau::format_valeur(v);
                self.phase = Phase::Resultat;
            }
            Err(e) => {
                log::warn!("pipeline vocal en échec: {e}");
                self.tampon = TEXTE_ERREUR_VOCALE.to_string();
                self.phase = Phase::ErreurAffichee;
            }
        }
    }
}

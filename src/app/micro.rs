// src/app/micro.rs
//
// Contrôleur vocal (micro) — capture en arrière-plan + écho parlé
// ---------------------------------------------------------------
// Rôle:
// - La capture/transcription est BLOQUANTE et vit sur un worker dédié :
//   le chemin d'entrée au premier plan ne bloque jamais.
// - Un worker par requête, UN SEUL message de complétion par requête
//   (texte transcrit résolu, délai, ou erreur de capture).
// - Annulation : passé le délai total, le Receiver est abandonné ; un
//   résultat tardif ne sera jamais relu (aucun résultat partiel).
// - La synthèse vocale est fire-and-forget sur son propre worker ; ses
//   échecs sont avalés et ne bloquent jamais la saisie.
//
// Contrats:
// - Aucun état mutable partagé entre workers : seule l'issue finale
//   traverse le canal, puis est traitée comme immuable.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::noyau::{format_valeur, voix, ErreurCalc};

/// Délai d'écoute (silence) par défaut.
pub const DELAI_ECOUTE: Duration = Duration::from_secs(5);

/// Durée maximale d'une phrase captée.
pub const LIMITE_PHRASE: Duration = Duration::from_secs(5);

/// Marge accordée au collaborateur avant annulation côté contrôleur.
const MARGE_ANNULATION: Duration = Duration::from_secs(1);

/* ------------------------ Collaborateurs externes ------------------------ */

/// Capture audio + transcription (collaborateur externe).
/// Bloquant : à n'invoquer QUE depuis un worker.
pub trait CaptureVocale: Send + Sync {
    /// Erreurs attendues : `ErreurCalc::Capture`, `ErreurCalc::Delai`.
    fn ecouter(&self, delai: Duration, limite_phrase: Duration) -> Result<String, ErreurCalc>;
}

/// Synthèse vocale (collaborateur externe). Fire-and-forget :
/// l'implémentation avale ses propres échecs.
pub trait SyntheseVocale: Send + Sync {
    fn parler(&self, texte: &str);
}

/// Aucun moteur de reconnaissance branché : échoue proprement.
pub struct CaptureIndisponible;

impl CaptureVocale for CaptureIndisponible {
    fn ecouter(&self, _delai: Duration, _limite: Duration) -> Result<String, ErreurCalc> {
        Err(ErreurCalc::Capture(
            "aucun moteur de reconnaissance vocale branché".into(),
        ))
    }
}

/// Synthèse muette : trace seulement.
pub struct SyntheseMuette;

impl SyntheseVocale for SyntheseMuette {
    fn parler(&self, texte: &str) {
        log::debug!("synthèse (muette): {texte:?}");
    }
}

/* ------------------------ Contrôleur ------------------------ */

struct RequeteEnCours {
    rx: Receiver<Result<f64, ErreurCalc>>,
    lancee: Instant,
}

pub struct ControleurVocal {
    capture: Arc<dyn CaptureVocale>,
    synthese: Arc<dyn SyntheseVocale>,
    en_cours: Option<RequeteEnCours>,
    delai_total: Duration,
}

impl ControleurVocal {
    pub fn nouveau(capture: Arc<dyn CaptureVocale>, synthese: Arc<dyn SyntheseVocale>) -> Self {
        Self {
            capture,
            synthese,
            en_cours: None,
            delai_total: DELAI_ECOUTE + LIMITE_PHRASE + MARGE_ANNULATION,
        }
    }

    pub fn ecoute_en_cours(&self) -> bool {
        self.en_cours.is_some()
    }

    /// Démarre une capture en arrière-plan. Ignoré si une est déjà en vol.
    pub fn demarrer(&mut self) {
        if self.en_cours.is_some() {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let capture = Arc::clone(&self.capture);
        let synthese = Arc::clone(&self.synthese);

        thread::spawn(move || {
            let issue = capture
                .ecouter(DELAI_ECOUTE, LIMITE_PHRASE)
                .and_then(|texte| {
                    log::info!("transcription: {texte:?}");
                    voix::resoudre(&texte)
                });

            // écho parlé du résultat, sur son propre worker
            if let Ok(v) = &issue {
                let texte = format_valeur(*v);
                thread::spawn(move || synthese.parler(&texte));
            }

            // le récepteur a pu être abandonné (annulation) : on ignore
            let _ = tx.send(issue);
        });

        self.en_cours = Some(RequeteEnCours {
            rx,
            lancee: Instant::now(),
        });
    }

    /// À appeler à chaque frame. None tant que rien n'est arrivé.
    /// Passé le délai total, la requête est abandonnée (drop du Receiver,
    /// le message tardif ne sera jamais relu) et on rapporte Delai.
    pub fn relever(&mut self) -> Option<Result<f64, ErreurCalc>> {
        let req = self.en_cours.as_ref()?;

        match req.rx.try_recv() {
            Ok(issue) => {
                self.en_cours = None;
                Some(issue)
            }
            Err(TryRecvError::Empty) => {
                if req.lancee.elapsed() > self.delai_total {
                    self.en_cours = None;
                    log::warn!("capture vocale auto-annulée (délai total dépassé)");
                    Some(Err(ErreurCalc::Delai))
                } else {
                    None
                }
            }
            Err(TryRecvError::Disconnected) => {
                self.en_cours = None;
                Some(Err(ErreurCalc::Capture("worker vocal interrompu".into())))
            }
        }
    }
}

/* ------------------------ Tests ------------------------ */

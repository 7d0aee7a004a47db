// src/main.rs
//
// Calculatrice Sakura — point d'entrée natif
// ------------------------------------------
// But:
// - Journalisation (env_logger) avant tout le reste
// - Validation des tables statiques AU DÉMARRAGE : chaque mot-clé vocal
//   doit résoudre vers une opération du registre, sinon on refuse de
//   démarrer (fail fast, jamais d'échec de résolution en cours de session)
// - eframe::run_native + NativeOptions
//
// Les collaborateurs vocaux branchés ici sont les implémentations par
// défaut (capture absente, synthèse muette) : le branchement d'un vrai
// moteur de reconnaissance/synthèse se fait en remplaçant ces deux Arc.

use std::sync::Arc;

use eframe::egui;

mod app;
mod noyau;

use app::micro::{CaptureIndisponible, SyntheseMuette};
use app::AppCalc;

/// Titre de la fenêtre.
const TITRE_APP: &str = "Calculatrice Sakura";

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Tables vocales <-> registre : toute divergence est fatale ICI,
    // avant la première interaction.
    if let Err(e) = noyau::fonctions::verifier_tables() {
        log::error!("tables vocales incohérentes: {e}");
        std::process::exit(1);
    }
    log::info!("registre d'opérations validé ({} entrées)", noyau::fonctions::REGISTRE.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([560.0, 420.0])
            .with_min_inner_size([460.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| {
            Ok(Box::new(AppCalc::nouvelle(
                Arc::new(CaptureIndisponible),
                Arc::new(SyntheseMuette),
            )))
        }),
    )
}

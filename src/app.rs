// src/app.rs
//
// Calculatrice Sakura — module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + micro.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App : clavier global + relève vocale par frame
//
// Important:
// - La relève de l'issue vocale se fait ICI, une fois par frame : le
//   tampon reste à propriétaire unique, aucun état partagé avec les
//   workers en dehors du message de complétion.

pub mod etat;
pub mod micro;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

/// Caractères de frappe directement insérables dans le tampon.
/// Tout le reste passe par les boutons (qui normalisent les glyphes).
fn frappe_canonique(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '%' | '^' | '(' | ')')
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // issue vocale éventuelle, puis repaint tant qu'on écoute
        self.relever_issue_vocale();
        if self.vocal.ecoute_en_cours() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // Clavier global :
        // - Enter  = évaluer          (comme "=")
        // - Backspace = effacer dernier (comme "C")
        // - ESC    = tout effacer     (comme "CE")
        // - frappes canoniques = insertion directe
        let mut frappes: Vec<String> = Vec::new();
        let (enter, backspace, esc) = ctx.input(|i| {
            for ev in &i.events {
                if let egui::Event::Text(t) = ev {
                    let propre: String = t.chars().filter(|c| frappe_canonique(*c)).collect();
                    if !propre.is_empty() {
                        frappes.push(propre);
                    }
                }
            }
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Escape),
            )
        });

        for f in frappes {
            self.inserer(&f);
        }
        if backspace {
            self.effacer_dernier();
        }
        if esc {
            self.vider();
        }
        if enter {
            self.evaluer();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

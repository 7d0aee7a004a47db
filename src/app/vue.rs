// src/app/vue.rs
//
// Vue (UI egui) — écran + pavé + micro
// ------------------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour toute la session : la vue ne fait que
//   traduire les boutons en événements symboliques du tampon.
// - Normalisation des glyphes À L'INSERTION : le bouton "÷" insère "/",
//   "xʸ" insère "^", "π" et "e" insèrent leur texte numérique. Le noyau
//   ne voit jamais un glyphe d'affichage.
// - L'écran est réécrit à chaque frame depuis le tampon (affichage
//   intégral, jamais d'édition directe du résultat).

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice Sakura");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);
            });
    }

    /* ------------------------ Écran + micro ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // écran : lecture seule, réécrit intégralement à chaque frame
            egui::Frame::group(ui.style())
                .fill(ui.visuals().extreme_bg_color)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width() - 72.0);
                    ui.set_min_height(2.0 * ui.text_style_height(&egui::TextStyle::Monospace));
                    ui.monospace(self.tampon.as_str());
                });

            let en_ecoute = self.vocal.ecoute_en_cours();
            let micro = ui
                .add_enabled(!en_ecoute, egui::Button::new("🎤").min_size([56.0, 40.0].into()))
                .on_hover_text("Commande vocale (ex: « 5 plus 3 »)");
            if micro.clicked() {
                self.demarrer_ecoute();
            }
        });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_sakura")
            .num_columns(8)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_ctrl(ui, "C", "Efface le dernier symbole", Ctrl::EffaceDernier);
                self.bouton_ctrl(ui, "CE", "Efface toute l'entrée", Ctrl::Vide);
                self.bouton(ui, "√", "sqrt(");
                self.bouton(ui, "+", "+");
                self.bouton(ui, "π", &pi_texte());
                self.bouton(ui, "cosθ", "cos(");
                self.bouton(ui, "tanθ", "tan(");
                self.bouton(ui, "sinθ", "sin(");
                ui.end_row();

                self.bouton(ui, "1", "1");
                self.bouton(ui, "2", "2");
                self.bouton(ui, "3", "3");
                self.bouton(ui, "-", "-");
                self.bouton(ui, "∛", "cbrt(");
                self.bouton(ui, "cosh", "cosh(");
                self.bouton(ui, "tanh", "tanh(");
                self.bouton(ui, "sinh", "sinh(");
                ui.end_row();

                self.bouton(ui, "4", "4");
                self.bouton(ui, "5", "5");
                self.bouton(ui, "6", "6");
                self.bouton(ui, "*", "*");
                self.bouton(ui, "xʸ", "^");
                self.bouton(ui, "x³", "^3");
                self.bouton(ui, "x²", "^2");
                self.bouton(ui, "x!", "factorial(");
                ui.end_row();

                self.bouton(ui, "7", "7");
                self.bouton(ui, "8", "8");
                self.bouton(ui, "9", "9");
                self.bouton(ui, "÷", "/");
                self.bouton(ui, "ln", "ln(");
                self.bouton(ui, "log₁₀", "log(");
                self.bouton(ui, "e", &e_texte());
                self.bouton(ui, "%", "%");
                ui.end_row();

                self.bouton(ui, "0", "0");
                self.bouton(ui, ".", ".");
                self.bouton(ui, "(", "(");
                self.bouton(ui, ")", ")");
                let eq = ui.add_sized([46.0, 30.0], egui::Button::new("="));
                if eq.clicked() {
                    self.evaluer();
                }
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, fragment: &str) {
        let resp = ui.add_sized([46.0, 30.0], egui::Button::new(label));
        if resp.clicked() {
            self.inserer(fragment);
        }
    }

    fn bouton_ctrl(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, ctrl: Ctrl) {
        let resp = ui
            .add_sized([46.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            match ctrl {
                Ctrl::EffaceDernier => self.effacer_dernier(),
                Ctrl::Vide => self.vider(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Ctrl {
    EffaceDernier,
    Vide,
}

/* ------------------------ Constantes insérées en texte ------------------------ */

/// π inséré comme littéral numérique (le tokenizer ne voit qu'un nombre).
fn pi_texte() -> String {
    format!("{}", std::f64::consts::PI)
}

fn e_texte() -> String {
    format!("{}", std::f64::consts::E)
}

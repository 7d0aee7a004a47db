// src/noyau/fonctions.rs
//
// Bibliothèque de fonctions : registre statique d'opérations nommées
// (unaire / binaire) avec validation de domaine AVANT calcul.
//
// Règles:
// - Registre immuable, rempli une fois, consulté par nom.
// - Chaque entrée valide ses opérandes avant de calculer : aucun NaN
//   "sauvage" ne doit sortir d'ici.
// - Les tables vocales (voix.rs) doivent toutes résoudre vers une entrée
//   du registre : verifier_tables() est appelée au démarrage (fail fast).
//
// Conventions numériques:
// - sin/cos/tan : opérande en DEGRÉS, converti en radians en interne.
// - sinh/cosh/tanh : opérande brut, pas de conversion.
// - racine cubique : racine réelle impaire (f64::cbrt), négatifs acceptés.
// - puissance : base négative + exposant non entier => Domaine
//   (la racine réelle des négatifs passe par la racine cubique dédiée).

use super::erreurs::ErreurCalc;
use super::voix;

/* ------------------------ OperationSpec ------------------------ */

#[derive(Clone, Copy)]
pub enum Calcul {
    Unaire(fn(f64) -> f64),
    Binaire(fn(f64, f64) -> f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arite {
    Unaire,
    Binaire,
}

pub struct OperationSpec {
    pub nom: &'static str,
    calcul: Calcul,
    /// Validation de domaine. Pour une unaire, le second opérande vaut 0.
    valide: fn(f64, f64) -> Result<(), ErreurCalc>,
}

impl OperationSpec {
    pub fn arite(&self) -> Arite {
        match self.calcul {
            Calcul::Unaire(_) => Arite::Unaire,
            Calcul::Binaire(_) => Arite::Binaire,
        }
    }

    /// Applique une opération unaire (valide puis calcule).
    pub fn appliquer_unaire(&self, a: f64) -> Result<f64, ErreurCalc> {
        match self.calcul {
            Calcul::Unaire(f) => {
                (self.valide)(a, 0.0)?;
                Ok(f(a))
            }
            Calcul::Binaire(_) => Err(ErreurCalc::Syntaxe(format!(
                "'{}' attend deux opérandes",
                self.nom
            ))),
        }
    }

    /// Applique une opération binaire (valide puis calcule).
    pub fn appliquer_binaire(&self, a: f64, b: f64) -> Result<f64, ErreurCalc> {
        match self.calcul {
            Calcul::Binaire(f) => {
                (self.valide)(a, b)?;
                Ok(f(a, b))
            }
            Calcul::Unaire(_) => Err(ErreurCalc::Syntaxe(format!(
                "'{}' attend un seul opérande",
                self.nom
            ))),
        }
    }
}

/* ------------------------ Validateurs ------------------------ */

fn domaine_libre(_a: f64, _b: f64) -> Result<(), ErreurCalc> {
    Ok(())
}

fn domaine_sqrt(a: f64, _b: f64) -> Result<(), ErreurCalc> {
    if a < 0.0 {
        return Err(ErreurCalc::Domaine(format!("√ d'un négatif ({a})")));
    }
    Ok(())
}

fn domaine_log(a: f64, _b: f64) -> Result<(), ErreurCalc> {
    if a <= 0.0 {
        return Err(ErreurCalc::Domaine(format!("logarithme de {a} (exige > 0)")));
    }
    Ok(())
}

/// Plus grande factorielle finie en f64 : 170! (171! déborde vers +inf).
const FACTORIELLE_MAX: f64 = 170.0;

fn domaine_factorielle(a: f64, _b: f64) -> Result<(), ErreurCalc> {
    if a < 0.0 || a.fract() != 0.0 {
        return Err(ErreurCalc::Domaine(format!(
            "factorielle de {a} (exige un entier ≥ 0)"
        )));
    }
    if a > FACTORIELLE_MAX {
        return Err(ErreurCalc::Domaine(format!(
            "factorielle de {a} (maximum {FACTORIELLE_MAX})"
        )));
    }
    Ok(())
}

fn domaine_division(_a: f64, b: f64) -> Result<(), ErreurCalc> {
    if b == 0.0 {
        return Err(ErreurCalc::Arithmetique("division par zéro".into()));
    }
    Ok(())
}

fn domaine_puissance(a: f64, b: f64) -> Result<(), ErreurCalc> {
    if a < 0.0 && b.fract() != 0.0 {
        return Err(ErreurCalc::Domaine(format!(
            "base négative ({a}) avec exposant non entier ({b})"
        )));
    }
    if a == 0.0 && b < 0.0 {
        return Err(ErreurCalc::Arithmetique("division par zéro (0^négatif)".into()));
    }
    Ok(())
}

/* ------------------------ Calculs ------------------------ */

fn factorielle(a: f64) -> f64 {
    // a est déjà validé : entier, 0..=170
    let n = a as u64;
    let mut acc = 1.0_f64;
    for k in 2..=n {
        acc *= k as f64;
    }
    acc
}

/* ------------------------ Registre ------------------------ */

/// Registre statique : rempli une fois, jamais modifié.
/// Les noms sont aussi les identifiants reconnus par le tokenizer.
pub static REGISTRE: &[OperationSpec] = &[
    // --- unaires scientifiques ---
    OperationSpec {
        nom: "sqrt",
        calcul: Calcul::Unaire(f64::sqrt),
        valide: domaine_sqrt,
    },
    OperationSpec {
        nom: "ln",
        calcul: Calcul::Unaire(f64::ln),
        valide: domaine_log,
    },
    OperationSpec {
        nom: "log",
        calcul: Calcul::Unaire(f64::log10),
        valide: domaine_log,
    },
    OperationSpec {
        nom: "sin",
        calcul: Calcul::Unaire(|a| a.to_radians().sin()),
        valide: domaine_libre,
    },
    OperationSpec {
        nom: "cos",
        calcul: Calcul::Unaire(|a| a.to_radians().cos()),
        valide: domaine_libre,
    },
    OperationSpec {
        nom: "tan",
        calcul: Calcul::Unaire(|a| a.to_radians().tan()),
        valide: domaine_libre,
    },
    OperationSpec {
        nom: "sinh",
        calcul: Calcul::Unaire(f64::sinh),
        valide: domaine_libre,
    },
    OperationSpec {
        nom: "cosh",
        calcul: Calcul::Unaire(f64::cosh),
        valide: domaine_libre,
    },
    OperationSpec {
        nom: "tanh",
        calcul: Calcul::Unaire(f64::tanh),
        valide: domaine_libre,
    },
    OperationSpec {
        nom: "carre",
        calcul: Calcul::Unaire(|a| a * a),
        valide: domaine_libre,
    },
    OperationSpec {
        nom: "cube",
        calcul: Calcul::Unaire(|a| a * a * a),
        valide: domaine_libre,
    },
    OperationSpec {
        nom: "cbrt",
        calcul: Calcul::Unaire(f64::cbrt),
        valide: domaine_libre,
    },
    OperationSpec {
        nom: "factorial",
        calcul: Calcul::Unaire(factorielle),
        valide: domaine_factorielle,
    },
    // --- binaires (évaluateur + résolveur vocal) ---
    OperationSpec {
        nom: "add",
        calcul: Calcul::Binaire(|a, b| a + b),
        valide: domaine_libre,
    },
    OperationSpec {
        nom: "sub",
        calcul: Calcul::Binaire(|a, b| a - b),
        valide: domaine_libre,
    },
    OperationSpec {
        nom: "mul",
        calcul: Calcul::Binaire(|a, b| a * b),
        valide: domaine_libre,
    },
    OperationSpec {
        nom: "div",
        calcul: Calcul::Binaire(|a, b| a / b),
        valide: domaine_division,
    },
    OperationSpec {
        nom: "mod",
        calcul: Calcul::Binaire(|a, b| a % b),
        valide: domaine_division,
    },
    OperationSpec {
        nom: "pow",
        calcul: Calcul::Binaire(f64::powf),
        valide: domaine_puissance,
    },
];

/// Recherche par nom (casse exacte : les noms canoniques sont en minuscules).
pub fn chercher(nom: &str) -> Option<&'static OperationSpec> {
    REGISTRE.iter().find(|op| op.nom == nom)
}

/// Vrai si `nom` est une fonction unaire reconnue par la grammaire.
pub fn est_fonction_unaire(nom: &str) -> bool {
    matches!(chercher(nom), Some(op) if op.arite() == Arite::Unaire)
}

/* ------------------------ Cohérence tables <-> registre ------------------------ */

/// Vérifie que chaque mot-clé vocal résout vers une entrée du registre
/// avec la bonne arité. Appelée au démarrage : toute divergence est fatale
/// AVANT la première interaction (jamais au moment d'une commande).
pub fn verifier_tables() -> Result<(), String> {
    for mc in voix::MOTS_BINAIRES {
        match chercher(mc.operation) {
            Some(op) if op.arite() == Arite::Binaire => {}
            Some(op) => {
                return Err(format!(
                    "mot-clé '{}' : '{}' n'est pas binaire",
                    mc.mot, op.nom
                ))
            }
            None => {
                return Err(format!(
                    "mot-clé '{}' : opération '{}' absente du registre",
                    mc.mot, mc.operation
                ))
            }
        }
    }

    for mc in voix::MOTS_UNAIRES {
        match chercher(mc.operation) {
            Some(op) if op.arite() == Arite::Unaire => {}
            Some(op) => {
                return Err(format!(
                    "mot-clé '{}' : '{}' n'est pas unaire",
                    mc.mot, op.nom
                ))
            }
            None => {
                return Err(format!(
                    "mot-clé '{}' : opération '{}' absente du registre",
                    mc.mot, mc.operation
                ))
            }
        }
    }

    Ok(())
}

/* ------------------------ Tests ------------------------ */

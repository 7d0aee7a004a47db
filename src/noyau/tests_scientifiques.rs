//! Tests scientifiques : le noyau complet vu par l'utilisateur.
//!
//! Précédence, associativité, fonctions en degrés, domaines, et les
//! propriétés d'aller-retour écran.

use super::erreurs::ErreurCalc;
use super::eval::{eval_expression, format_valeur};

fn ok(s: &str) -> f64 {
    eval_expression(s).unwrap_or_else(|e| panic!("eval_expression({s:?}) erreur: {e}"))
}

fn proche(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "attendu {b}, obtenu {a}");
}

/* ------------------------ Précédence / associativité ------------------------ */

#[test]
fn precedence_complete() {
    assert_eq!(ok("2+3*4"), 14.0);
    assert_eq!(ok("(2+3)*4"), 20.0);
    assert_eq!(ok("20-8/4"), 18.0);
    assert_eq!(ok("2+10%4"), 4.0);
}

#[test]
fn puissance_droite() {
    assert_eq!(ok("2^3^2"), 512.0);
    assert_eq!(ok("(2^3)^2"), 64.0);
}

#[test]
fn soustraction_gauche() {
    assert_eq!(ok("10-4-3"), 3.0);
    assert_eq!(ok("100/10/2"), 5.0);
}

#[test]
fn moins_unaire() {
    assert_eq!(ok("-5+3"), -2.0);
    assert_eq!(ok("2*-3"), -6.0);
    assert_eq!(ok("-(2+3)"), -5.0);
}

/* ------------------------ Fonctions scientifiques ------------------------ */

#[test]
fn trig_en_degres() {
    proche(ok("sin(30)"), 0.5);
    proche(ok("cos(60)"), 0.5);
    proche(ok("tan(45)"), 1.0);
    proche(ok("sin(90)"), 1.0);
}

#[test]
fn hyperboliques_brutes() {
    proche(ok("sinh(0)"), 0.0);
    proche(ok("cosh(0)"), 1.0);
    proche(ok("tanh(1)"), 1.0_f64.tanh());
}

#[test]
fn racines_et_logs() {
    assert_eq!(ok("sqrt(16)"), 4.0);
    assert_eq!(ok("cbrt(-27)"), -3.0);
    proche(ok("ln(1)"), 0.0);
    proche(ok("log(100)"), 2.0);
}

#[test]
fn factorielle() {
    assert_eq!(ok("factorial(5)"), 120.0);
    assert_eq!(ok("factorial(0)"), 1.0);
    assert!(matches!(
        eval_expression("factorial(2.5)"),
        Err(ErreurCalc::Domaine(_))
    ));
    assert!(matches!(
        eval_expression("factorial(-1)"),
        Err(ErreurCalc::Domaine(_))
    ));
}

#[test]
fn fonctions_composees() {
    proche(ok("sqrt(2)*sqrt(2)"), 2.0);
    proche(ok("sin(30)+cos(60)"), 1.0);
    assert_eq!(ok("sqrt(sqrt(16))"), 2.0);
    assert_eq!(ok("factorial(3)+1"), 7.0);
}

#[test]
fn constantes_inserees_en_texte() {
    // la vue insère π et e comme littéraux numériques
    let pi = format!("{}", std::f64::consts::PI);
    proche(ok(&format!("sin({pi}*180/{pi})")), 0.0);
    let e = format!("{}", std::f64::consts::E);
    proche(ok(&format!("ln({e})")), 1.0);
}

/* ------------------------ Domaines / erreurs ------------------------ */

#[test]
fn puissance_base_negative_exposant_fractionnaire() {
    assert_eq!(ok("(-2)^3"), -8.0);
    assert!(matches!(
        eval_expression("(-2)^0.5"),
        Err(ErreurCalc::Domaine(_))
    ));
}

#[test]
fn jamais_de_nan_a_l_ecran() {
    // tout chemin vers NaN doit être intercepté en amont
    for s in ["sqrt(-1)", "ln(0)", "ln(-5)", "(-8)^(1/3)"] {
        match eval_expression(s) {
            Ok(v) => assert!(v.is_finite(), "{s:?} a produit {v}"),
            Err(e) => assert!(
                matches!(e, ErreurCalc::Domaine(_) | ErreurCalc::Arithmetique(_)),
                "{s:?} : erreur inattendue {e}"
            ),
        }
    }
}

/* ------------------------ Aller-retour écran ------------------------ */

#[test]
fn meme_entree_meme_valeur() {
    // une expression acceptée deux fois de suite redonne la même valeur
    for s in ["2+3*4", "sin(30)", "9/4", "2^3^2", "sqrt(2)/2"] {
        assert_eq!(ok(s), ok(s), "déterminisme pour {s:?}");
    }
}

#[test]
fn resultat_reaffiche_reevaluable() {
    // Résultat écrit à l'écran puis ré-évalué (chaîne résultat -> tokenize
    // -> eval) : même valeur.
    for s in ["2+3*4", "9/4", "sqrt(2)", "-5+3", "cbrt(-27)"] {
        let v = ok(s);
        assert_eq!(ok(&format_valeur(v)), v, "round-trip pour {s:?}");
    }
}

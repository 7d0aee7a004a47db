//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte les erreurs typées attendues (arithmétique, domaine)
//! - invariant clé : jamais de panic, jamais de NaN/inf en sortie Ok

use std::time::{Duration, Instant};

use super::erreurs::ErreurCalc;
use super::eval::eval_expression;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn est_erreur_attendue(e: &ErreurCalc) -> bool {
    // Le générateur produit des expressions bien formées : seules les
    // erreurs de VALEUR sont normales ici.
    matches!(e, ErreurCalc::Arithmetique(_) | ErreurCalc::Domaine(_))
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits entiers + quelques décimaux, incluant 0 (utile pour les zéros)
    let n = rng.pick(9);
    if rng.coin() {
        format!("{n}")
    } else {
        format!("{n}.{}", rng.pick(10))
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(5) {
        0 | 1 => gen_nombre(rng),
        2 => format!("-{}", gen_nombre(rng)),
        3 => format!("sqrt({})", rng.pick(50)),
        _ => format!("sin({})", rng.pick(360)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(10) {
        0 => gen_atom(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("({}%{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        6 => format!("({}^{})", gen_nombre(rng), rng.pick(6)),
        7 => format!("cos({})", gen_expr(rng, depth - 1)),
        8 => format!("tanh({})", gen_expr(rng, depth - 1)),
        _ => format!("cbrt({})", gen_expr(rng, depth - 1)),
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_jamais_nan_ni_panic() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);

        match eval_expression(&expr) {
            Ok(v) => {
                assert!(v.is_finite(), "sortie non finie pour {expr:?}: {v}");
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    est_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne "balaye" rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop sage");
}

#[test]
fn fuzz_safe_determinisme_deux_passes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let gen = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        (0..60).map(|_| gen_expr(&mut rng, 4)).collect()
    };

    for (a, b) in gen(0xBADC0DE).into_iter().zip(gen(0xBADC0DE)) {
        budget(t0, max);
        assert_eq!(a, b);
        // même entrée => même issue, bit à bit
        assert_eq!(eval_expression(&a), eval_expression(&b));
    }
}

#[test]
fn fuzz_safe_texte_arbitraire_sans_panic() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // soupe de caractères : tout doit sortir en Err typée ou Ok fini
    let mut rng = Rng::new(0xFACADE_u64);
    let alphabet: Vec<char> = "0123456789+-*/%^()sqrtlncbx. #éπ".chars().collect();

    for _ in 0..300 {
        budget(t0, max);

        let len = 1 + rng.pick(24) as usize;
        let s: String = (0..len)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        if let Ok(v) = eval_expression(&s) {
            assert!(v.is_finite(), "sortie non finie pour {s:?}: {v}");
        }
        // Err(_) : toujours acceptable ici, on teste l'absence de panic
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    let v = eval_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));

    // 800 * 0.5 = 400
    assert_eq!(v, 400.0);
}

// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name) : doit être une fonction unaire du registre, sinon Syntaxe
//   (pas de variables dans cette calculatrice).
// - Moins unaire : un '-' qui arrive quand on n'attend PAS une valeur est
//   réécrit en Op::Neg, opérateur unaire de précédence MAXIMALE
//   (au-dessus de ^) : "-2^2" se lit (-2)^2.
// - '^' : associatif à droite ("2^3^2" se lit 2^(3^2)).
//
// NOTE:
// - Les fonctions sont traitées comme des opérateurs "collés" à leur
//   argument et sont sorties après la parenthèse fermante.

use super::erreurs::ErreurCalc;
use super::expr::Expr;
use super::fonctions;
use super::jetons::{Op, Tok};

fn precedence(op: Op) -> i32 {
    match op {
        Op::Plus | Op::Moins => 1,
        Op::Fois | Op::Divise | Op::Modulo => 2,
        Op::Puissance => 3,
        Op::Neg => 4,
    }
}

fn is_right_associative(op: Op) -> bool {
    matches!(op, Op::Puissance | Op::Neg)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Num(30), RPar]
///   rpn:    [Num(30), Ident("sin")]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // "valeur" = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                if !fonctions::est_fonction_unaire(&name) {
                    return Err(ErreurCalc::Syntaxe(format!("fonction inconnue: '{name}'")));
                }
                // fonction : on la garde sur la pile (elle sortira après son argument)
                ops.push(Tok::Ident(name));
                prev_was_value = false;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu'à '('
                let mut ouvrante_vue = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante_vue = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante_vue {
                    return Err(ErreurCalc::Syntaxe("parenthèse fermante orpheline".into()));
                }

                // si une fonction est au sommet, on la sort aussi
                if matches!(ops.last(), Some(Tok::Ident(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }

                prev_was_value = true;
            }

            Tok::Op(op) => {
                // moins unaire : réécrit en Neg, simple empilement
                // (préfixe, précédence max, associatif à droite)
                if op == Op::Moins && !prev_was_value {
                    ops.push(Tok::Op(Op::Neg));
                    continue;
                }

                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et on ne traverse pas une fonction (collée à son argument)
                // - et la précédence/associativité exige de sortir le sommet
                while let Some(top) = ops.last() {
                    let p_top = match top {
                        Tok::LPar | Tok::Ident(_) => break,
                        Tok::Op(o) => precedence(*o),
                        _ => break,
                    };
                    let p_tok = precedence(op);

                    let doit_pop = if is_right_associative(op) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if doit_pop {
                        if let Some(t) = ops.pop() {
                            out.push(t);
                        }
                    } else {
                        break;
                    }
                }

                ops.push(Tok::Op(op));
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalc::Syntaxe("parenthèses non fermées".into()));
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d'une RPN.
///
/// Toute pile incohérente (opérande manquant, opérateur pendant, jetons en
/// trop) => Syntaxe. C'est ici que "2+", "()" ou "2 3" échouent.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurCalc> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(v) => st.push(Expr::Lit(v)),

            Tok::Op(Op::Neg) => {
                let x = st
                    .pop()
                    .ok_or_else(|| ErreurCalc::Syntaxe("opérande manquant".into()))?;
                st.push(Expr::Neg(Box::new(x)));
            }

            Tok::Op(op) => {
                let b = st
                    .pop()
                    .ok_or_else(|| ErreurCalc::Syntaxe("opérande manquant".into()))?;
                let a = st
                    .pop()
                    .ok_or_else(|| ErreurCalc::Syntaxe("opérande manquant".into()))?;
                st.push(Expr::Bin(op, Box::new(a), Box::new(b)));
            }

            Tok::Ident(name) => {
                let spec = fonctions::chercher(&name)
                    .ok_or_else(|| ErreurCalc::Syntaxe(format!("fonction inconnue: '{name}'")))?;
                let x = st
                    .pop()
                    .ok_or_else(|| ErreurCalc::Syntaxe(format!("'{name}' sans argument")))?;
                st.push(Expr::Fonction(spec, Box::new(x)));
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalc::Syntaxe("parenthèse inattendue en RPN".into()))
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(e), true) => Ok(e),
        (Some(_), false) => Err(ErreurCalc::Syntaxe("jetons en trop".into())),
        (None, _) => Err(ErreurCalc::Syntaxe("expression vide".into())),
    }
}

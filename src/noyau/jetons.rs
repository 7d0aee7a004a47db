// src/noyau/jetons.rs

use super::erreurs::ErreurCalc;

/// Opérateurs binaires de la grammaire.
///
/// NOTE: `Neg` (moins unaire) n'est JAMAIS émis par le tokenizer :
/// c'est rpn.rs qui réécrit un '-' en position préfixe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
    Modulo,
    Puissance,
    Neg,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Fonctions scientifiques (sin, sqrt, factorial...).
    // NOTE: le parse (RPN->Expr) vérifie le nom contre le registre.
    Ident(String),

    Op(Op),

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5) — f64
/// - opérateurs + - * / % ^ (et ** comme synonyme de ^)
/// - parenthèses ( )
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules)
///
/// Les glyphes d'affichage (÷, xʸ, π, e) sont déjà normalisés par la vue
/// au moment de l'insertion : ici, caractère inconnu => Syntaxe.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs (** avant * !)
        if c == '*' && i + 1 < chars.len() && chars[i + 1] == '*' {
            out.push(Tok::Op(Op::Puissance));
            i += 2;
            continue;
        }
        match c {
            '+' => {
                out.push(Tok::Op(Op::Plus));
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Op(Op::Moins));
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Op(Op::Fois));
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Op(Op::Divise));
                i += 1;
                continue;
            }
            '%' => {
                out.push(Tok::Op(Op::Modulo));
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Op(Op::Puissance));
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word.to_lowercase()));
            continue;
        }

        // Nombre décimal : chiffres + au plus un point ('.5' accepté)
        if c.is_ascii_digit() || (c == '.' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit())
        {
            let start = i;
            let mut point_vu = false;
            while i < chars.len() {
                let d = chars[i];
                if d.is_ascii_digit() {
                    i += 1;
                } else if d == '.' && !point_vu {
                    point_vu = true;
                    i += 1;
                } else {
                    break;
                }
            }
            // refuse "1.2.3" (le second point démarrerait un nouveau nombre)
            if i < chars.len() && chars[i] == '.' {
                return Err(ErreurCalc::Syntaxe(format!(
                    "point décimal en trop après '{}'",
                    chars[start..i].iter().collect::<String>()
                )));
            }
            let txt: String = chars[start..i].iter().collect();
            let v: f64 = txt
                .parse()
                .map_err(|_| ErreurCalc::Syntaxe(format!("nombre invalide: '{txt}'")))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurCalc::Syntaxe(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

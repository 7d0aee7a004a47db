// src/noyau/expr.rs
//
// AST flottant (f64).
// - Lit      : littéral
// - Neg      : moins unaire
// - Fonction : fonction scientifique unaire (entrée du registre)
// - Bin      : opérateur binaire
//
// IMPORTANT (SAFE):
// - La FORME de l'arbre encode précédence et associativité : eval() est
//   un simple parcours récursif, correct quel que soit l'ordre des jetons
//   d'origine.
// - Aucun texte utilisateur n'est jamais exécuté : tout passe par cet
//   arbre et par le registre d'opérations.

use super::erreurs::ErreurCalc;
use super::fonctions::OperationSpec;
use super::jetons::Op;

#[derive(Clone)]
pub enum Expr {
    Lit(f64),
    Neg(Box<Expr>),
    Fonction(&'static OperationSpec, Box<Expr>),
    Bin(Op, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évaluation récursive vers f64.
    /// - Division / modulo par zéro => Arithmetique.
    /// - Les fonctions valident leur domaine AVANT de calculer.
    pub fn eval(&self) -> Result<f64, ErreurCalc> {
        use Expr::*;

        match self {
            Lit(v) => Ok(*v),

            Neg(x) => Ok(-x.eval()?),

            Fonction(spec, x) => spec.appliquer_unaire(x.eval()?),

            Bin(op, a, b) => {
                let a = a.eval()?;
                let b = b.eval()?;
                match op {
                    Op::Plus => Ok(a + b),
                    Op::Moins => Ok(a - b),
                    Op::Fois => Ok(a * b),
                    Op::Divise => {
                        if b == 0.0 {
                            return Err(ErreurCalc::Arithmetique("division par zéro".into()));
                        }
                        Ok(a / b)
                    }
                    Op::Modulo => {
                        if b == 0.0 {
                            return Err(ErreurCalc::Arithmetique("modulo par zéro".into()));
                        }
                        Ok(a % b)
                    }
                    Op::Puissance => super::fonctions::chercher("pow")
                        .ok_or_else(|| {
                            ErreurCalc::Syntaxe("opération 'pow' absente du registre".into())
                        })?
                        .appliquer_binaire(a, b),
                    // Neg binaire n'existe pas : rpn.rs ne le construit jamais
                    Op::Neg => Err(ErreurCalc::Syntaxe("opérateur unaire mal placé".into())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(v: f64) -> Box<Expr> {
        Box::new(Expr::Lit(v))
    }

    #[test]
    fn eval_binaire_simple() {
        let e = Expr::Bin(Op::Plus, lit(2.0), Box::new(Expr::Bin(Op::Fois, lit(3.0), lit(4.0))));
        assert_eq!(e.eval().unwrap(), 14.0);
    }

    #[test]
    fn eval_division_par_zero() {
        let e = Expr::Bin(Op::Divise, lit(5.0), lit(0.0));
        assert!(matches!(e.eval(), Err(ErreurCalc::Arithmetique(_))));
    }

    #[test]
    fn eval_neg() {
        let e = Expr::Neg(lit(7.0));
        assert_eq!(e.eval().unwrap(), -7.0);
    }
}

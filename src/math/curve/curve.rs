/// A real function of one real variable.
///
/// Implemented for every `Fn(f64) -> f64`, so closures and fn pointers can be
/// handed to anything that takes a `&dyn Curve`.
pub trait Curve {
    fn value(&self, x: f64) -> f64;
}

impl <F> Curve for F where
    F: Fn(f64) -> f64 {
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Polynomial in monomial form, `Σ c_k·x^k`.
#[derive(Clone, Debug)]
pub struct Polynomial {
    coefs: Vec<f64>
}

impl Polynomial {
    /// `coefs[k]` is the coefficient of `x^k`.
    pub fn new(coefs: Vec<f64>) -> Polynomial {
        Polynomial { coefs }
    }

    pub fn coefs(&self) -> &Vec<f64> {
        &self.coefs
    }

    pub fn degree(&self) -> usize {
        self.coefs.len().saturating_sub(1)
    }
}

impl Curve for Polynomial {
    // Horner
    fn value(&self, x: f64) -> f64 {
        self.coefs.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }
}

use crate::math::curve::curve::Curve;
use crate::math::integration::integrationerror::IntegrationError;

// ─────────────────────────────────────────────────────────────────────────────
// Composite Simpson's rule (1D)
// ─────────────────────────────────────────────────────────────────────────────
//
//   ∫_a^b f(x) dx ≈ h/3 · [f(x_0) + 4f(x_1) + 2f(x_2) + ... + 4f(x_{n-1}) + f(x_n)]
//
// 其中 h = (b - a) / n，n 為偶數且 n >= 2。
// 對三次以下多項式為精確解。

/// Coefficient of sample `index` out of `len` samples in the composite
/// pattern 1, 4, 2, 4, ..., 2, 4, 1.
pub fn simpson_weight(index: usize, len: usize) -> f64 {
    if index == 0 || index + 1 == len {
        1.0
    } else if index % 2 == 1 {
        4.0
    } else {
        2.0
    }
}

fn check_subintervals(n: i64) -> Result<(), IntegrationError> {
    if n < 2 || n % 2 != 0 {
        Err(IntegrationError::InvalidSubintervals(n))
    } else {
        Ok(())
    }
}

/// Integrates `f` from `a` to `b` using `n` equal subintervals.
///
/// `n` must be even and at least 2. `a > b` is allowed and flips the sign of
/// the result. `f` is called exactly `n + 1` times: `f(a)`, `f(b)`, then the
/// interior points in increasing order of their index. The calls are therefore
/// not sorted by `x`; `f(b)` comes second.
pub fn simpson<F>(f: F, a: f64, b: f64, n: i64) -> Result<f64, IntegrationError> where
    F: Fn(f64) -> f64 {
    check_subintervals(n)?;

    let h = (b - a) / n as f64;
    log::debug!("simpson: a={}, b={}, n={}, h={}", a, b, n, h);

    let mut sum = f(a) + f(b);
    for i in 1..n {
        let x = a + i as f64 * h;
        if i % 2 == 1 {
            sum += 4.0 * f(x);
        } else {
            sum += 2.0 * f(x);
        }
    }

    Ok(sum * h / 3.0)
}

/// Same as [`simpson`] for a curve behind a trait object.
pub fn integrate_curve(curve: &dyn Curve, a: f64, b: f64, n: i64) -> Result<f64, IntegrationError> {
    simpson(|x| curve.value(x), a, b, n)
}

/// Integrates pre-sampled values `samples[i] = f(x_0 + i·h)`.
///
/// The sample count must be odd and at least 3 (an even number of
/// subintervals).
pub fn simpson_sampled(h: f64, samples: &[f64]) -> Result<f64, IntegrationError> {
    let subintervals = samples.len() as i64 - 1;
    check_subintervals(subintervals)?;

    let len = samples.len();
    let sum: f64 = samples
        .iter()
        .enumerate()
        .map(|(i, y)| simpson_weight(i, len) * y)
        .sum();

    Ok(sum * h / 3.0)
}

// ─────────────────────────────────────────────────────────────────────────────
// SimpsonRule
// ─────────────────────────────────────────────────────────────────────────────

/// A named subinterval count, validated once at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct SimpsonRule {
    name: String,
    subintervals: i64
}

impl SimpsonRule {
    pub fn new(name: String, subintervals: i64) -> Result<SimpsonRule, IntegrationError> {
        check_subintervals(subintervals)?;
        Ok(SimpsonRule { name, subintervals })
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn subintervals(&self) -> i64 {
        self.subintervals
    }

    pub fn integrate<F>(&self, f: F, a: f64, b: f64) -> Result<f64, IntegrationError> where
        F: Fn(f64) -> f64 {
        simpson(f, a, b, self.subintervals)
    }

    pub fn integrate_curve(&self, curve: &dyn Curve, a: f64, b: f64) -> Result<f64, IntegrationError> {
        integrate_curve(curve, a, b, self.subintervals)
    }
}

use nalgebra::DMatrix;

use crate::math::integration::integrationerror::IntegrationError;
use crate::math::integration::simpson::simpson_weight;

// ─────────────────────────────────────────────────────────────────────────────
// Composite Simpson's rule (2D, tensor product)
// ─────────────────────────────────────────────────────────────────────────────
//
// 點 (i, j) 的權重為 w_i · w_j，w 即一維的 1, 4, 2, ..., 4, 1：
//
//   corner              1
//   edge, odd           4     edge, even            2
//   interior odd-odd   16     interior even-even    4
//   interior odd-even   8     interior even-odd     8
//
//   V ≈ dx·dy/9 · Σ_i Σ_j w_i·w_j·f[i][j]
//
// 注意：軸向點數為偶數（子區間為奇數）時不會報錯，但結果不是正確的 Simpson 積分。

fn weighted_sum<V>(rows: usize, cols: usize, value: V) -> f64 where
    V: Fn(usize, usize) -> f64 {
    let mut sum = 0.0;
    for i in 0..rows {
        let w_i = simpson_weight(i, rows);
        for j in 0..cols {
            sum += w_i * simpson_weight(j, cols) * value(i, j);
        }
    }
    sum
}

fn check_shape(rows: usize, cols: usize) -> Result<(), IntegrationError> {
    if rows < 2 {
        Err(IntegrationError::InsufficientRows(rows))
    } else if cols < 2 {
        Err(IntegrationError::InsufficientColumns(cols))
    } else {
        Ok(())
    }
}

/// Volume under the surface sampled by `f`, where `f[i][j] = f(x_i, y_j)` on
/// a uniform mesh with spacings `dx` and `dy`.
///
/// The grid must have at least 2 rows, at least 2 columns and rows of equal
/// length.
pub fn simpson_2d<R>(dx: f64, dy: f64, f: &[R]) -> Result<f64, IntegrationError> where
    R: AsRef<[f64]> {
    let rows = f.len();
    let cols = f.first().map_or(0, |row| row.as_ref().len());
    check_shape(rows, cols)?;

    if let Some((row, found)) = f
        .iter()
        .map(|r| r.as_ref().len())
        .enumerate()
        .find(|(_, len)| *len != cols) {
        return Err(IntegrationError::RaggedGrid { row, expected: cols, found });
    }

    log::debug!("simpson_2d: {}x{} grid, dx={}, dy={}", rows, cols, dx, dy);
    let sum = weighted_sum(rows, cols, |i, j| f[i].as_ref()[j]);
    Ok(sum * dx * dy / 9.0)
}

/// [`simpson_2d`] over a matrix whose row index runs along x and column
/// index along y.
pub fn simpson_2d_matrix(dx: f64, dy: f64, f: &DMatrix<f64>) -> Result<f64, IntegrationError> {
    let (rows, cols) = f.shape();
    check_shape(rows, cols)?;

    log::debug!("simpson_2d_matrix: {}x{} grid, dx={}, dy={}", rows, cols, dx, dy);
    let sum = weighted_sum(rows, cols, |i, j| f[(i, j)]);
    Ok(sum * dx * dy / 9.0)
}

// JLH association score between a foreground and a background matrix.
//
// For each column j:
//
//   p_fg[j] = colsum(F)[j] / total(F)
//   p_bg[j] = colsum(B)[j] / total(B)
//   jlh[j]  = (p_fg[j] / p_bg[j]) * (p_fg[j] - p_bg[j])
//
// Terms over-represented in the foreground score positive, growing with both
// the ratio and the absolute difference. Terms absent from the foreground but
// present in the background score negative. Argument order matters.

use crate::error::{AnalysisError, AnalysisResult};

use super::matrix::CountMatrix;

/// Fraction of the grand total attributable to each column.
///
/// Fails with `ZeroTotal` when the matrix holds no counts.
pub fn matrix_fraction(matrix: &CountMatrix) -> AnalysisResult<Vec<f64>> {
    let total = matrix.total();
    if total == 0 {
        return Err(AnalysisError::ZeroTotal);
    }
    let total = total as f64;
    Ok(matrix
        .column_sums()
        .into_iter()
        .map(|sum| sum as f64 / total)
        .collect())
}

/// Per-column JLH scores, aligned with the shared vocabulary.
///
/// Both matrices must share column indexing. A column with zero background
/// share fails with `DivisionByZero` rather than producing NaN.
pub fn jlh(foreground: &CountMatrix, background: &CountMatrix) -> AnalysisResult<Vec<f64>> {
    if foreground.n_cols() != background.n_cols() {
        return Err(AnalysisError::ShapeMismatch {
            foreground: foreground.n_cols(),
            background: background.n_cols(),
        });
    }

    let p_fg = matrix_fraction(foreground)?;
    let p_bg = matrix_fraction(background)?;

    p_fg.iter()
        .zip(&p_bg)
        .enumerate()
        .map(|(column, (&a, &b))| {
            if b == 0.0 {
                Err(AnalysisError::DivisionByZero { column })
            } else {
                Ok((a / b) * (a - b))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> CountMatrix {
        CountMatrix::from_dense(&[vec![1, 1, 2], vec![0, 0, 2]])
    }

    fn b() -> CountMatrix {
        CountMatrix::from_dense(&[vec![1, 2, 2], vec![1, 0, 2]])
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (x, y) in actual.iter().zip(expected) {
            assert!((x - y).abs() < 1e-12, "expected {expected:?}, got {actual:?}");
        }
    }

    #[test]
    fn test_matrix_fraction() {
        assert_close(&matrix_fraction(&a()).unwrap(), &[1.0 / 6.0, 1.0 / 6.0, 4.0 / 6.0]);
        assert_close(&matrix_fraction(&b()).unwrap(), &[2.0 / 8.0, 2.0 / 8.0, 4.0 / 8.0]);
    }

    #[test]
    fn test_jlh_golden() {
        let scores = jlh(&a(), &b()).unwrap();
        assert_close(&scores, &[-8.0 / 144.0, -8.0 / 144.0, 32.0 / 144.0]);
    }

    #[test]
    fn test_identical_distributions_score_zero() {
        let fg = CountMatrix::from_dense(&[vec![2, 4, 6]]);
        let bg = CountMatrix::from_dense(&[vec![1, 2, 3], vec![3, 6, 9]]);
        for score in jlh(&fg, &bg).unwrap() {
            assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn test_zero_background_column_errors() {
        let fg = CountMatrix::from_dense(&[vec![1, 1]]);
        let bg = CountMatrix::from_dense(&[vec![3, 0]]);
        assert_eq!(jlh(&fg, &bg), Err(AnalysisError::DivisionByZero { column: 1 }));
    }

    #[test]
    fn test_zero_total_errors() {
        let fg = CountMatrix::from_dense(&[vec![0, 0]]);
        let bg = CountMatrix::from_dense(&[vec![1, 1]]);
        assert_eq!(jlh(&fg, &bg), Err(AnalysisError::ZeroTotal));
    }

    #[test]
    fn test_shape_mismatch_errors() {
        let fg = CountMatrix::from_dense(&[vec![1, 1]]);
        let bg = CountMatrix::from_dense(&[vec![1, 1, 1]]);
        assert!(matches!(jlh(&fg, &bg), Err(AnalysisError::ShapeMismatch { .. })));
    }
}

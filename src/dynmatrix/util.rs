use alloc::vec::Vec;

use crate::traits::{FloatScalar, Scalar};

use super::DynMatrix;

// ── Transpose ───────────────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Transpose.
    ///
    /// ```
    /// use numeris_rls::DynMatrix;
    /// let x = DynMatrix::from_column(&[1.0_f64, 2.0, 3.0]);
    /// let xt = x.transpose();
    /// assert_eq!(xt.shape(), (1, 3));
    /// assert_eq!(xt[(0, 2)], 3.0);
    /// ```
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                data.push(self[(i, j)]);
            }
        }
        DynMatrix {
            data,
            nrows: self.ncols,
            ncols: self.nrows,
        }
    }
}

// ── Float comparisons ───────────────────────────────────────────────

impl<T: FloatScalar> DynMatrix<T> {
    /// Largest absolute element-wise difference, or `None` if the shapes differ.
    ///
    /// ```
    /// use numeris_rls::DynMatrix;
    /// let a = DynMatrix::from_column(&[1.0_f64, 2.0]);
    /// let b = DynMatrix::from_column(&[1.5_f64, 1.0]);
    /// assert_eq!(a.max_abs_diff(&b), Some(1.0));
    /// ```
    pub fn max_abs_diff(&self, rhs: &Self) -> Option<T> {
        if self.shape() != rhs.shape() {
            return None;
        }
        let diff = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc.max((a - b).abs()));
        Some(diff)
    }

    /// Whether the matrix is square and symmetric within `tol`.
    pub fn is_symmetric(&self, tol: T) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.nrows {
            for j in (i + 1)..self.ncols {
                if (self[(i, j)] - self[(j, i)]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Whether every element is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose_rect() {
        let m = DynMatrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], t[(j, i)]);
            }
        }
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn max_abs_diff_shape_mismatch() {
        let a = DynMatrix::zeros(2, 1, 0.0_f64);
        let b = DynMatrix::zeros(1, 2, 0.0_f64);
        assert_eq!(a.max_abs_diff(&b), None);
    }

    #[test]
    fn symmetric() {
        let s = DynMatrix::from_rows(2, 2, &[2.0_f64, 1.0, 1.0, 3.0]);
        assert!(s.is_symmetric(0.0));
        let a = DynMatrix::from_rows(2, 2, &[2.0_f64, 1.0, 1.1, 3.0]);
        assert!(!a.is_symmetric(1e-3));
        assert!(a.is_symmetric(0.2));
        assert!(!DynMatrix::zeros(2, 3, 0.0_f64).is_symmetric(1.0));
    }

    #[test]
    fn finite() {
        let mut m = DynMatrix::eye(2, 0.0_f64);
        assert!(m.is_finite());
        m[(1, 0)] = f64::NAN;
        assert!(!m.is_finite());
    }
}

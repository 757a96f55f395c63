use alloc::vec;
use core::ops::{Add, Div, Mul, Sub};

use crate::traits::Scalar;

use super::{DimensionMismatch, DynMatrix};

// ── Checked arithmetic ──────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Element-wise sum, or `DimensionMismatch` if the shapes differ.
    ///
    /// `expected` in the error is `self`'s shape.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, DimensionMismatch> {
        self.check_same_shape(rhs)?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    /// Element-wise difference, or `DimensionMismatch` if the shapes differ.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, DimensionMismatch> {
        self.check_same_shape(rhs)?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    /// Matrix product `self * rhs`.
    ///
    /// Fails if `rhs.nrows() != self.ncols()`; the error reports the
    /// row count `rhs` should have had alongside its actual shape.
    ///
    /// ```
    /// use numeris_rls::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// let x = DynMatrix::from_column(&[1.0, 1.0]);
    /// let y = a.try_matmul(&x).unwrap();
    /// assert_eq!(y.as_slice(), &[3.0, 7.0]);
    ///
    /// let bad = DynMatrix::from_column(&[1.0, 1.0, 1.0]);
    /// assert!(a.try_matmul(&bad).is_err());
    /// ```
    pub fn try_matmul(&self, rhs: &Self) -> Result<Self, DimensionMismatch> {
        if self.ncols != rhs.nrows {
            return Err(DimensionMismatch {
                expected: (self.ncols, rhs.ncols),
                got: (rhs.nrows, rhs.ncols),
            });
        }
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = vec![T::zero(); m * p];
        for j in 0..p {
            for k in 0..n {
                let b_kj = rhs.data[j * n + k];
                for i in 0..m {
                    data[j * m + i] = data[j * m + i] + self.data[k * m + i] * b_kj;
                }
            }
        }
        Ok(DynMatrix {
            data,
            nrows: m,
            ncols: p,
        })
    }

    fn check_same_shape(&self, rhs: &Self) -> Result<(), DimensionMismatch> {
        if self.shape() != rhs.shape() {
            return Err(DimensionMismatch {
                expected: self.shape(),
                got: rhs.shape(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Element-wise addition / subtraction ─────────────────────────────

impl<T: Scalar> Add<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn add(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        match self.try_add(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}: {}x{} + {}x{}", e, self.nrows, self.ncols, rhs.nrows, rhs.ncols),
        }
    }
}

impl<T: Scalar> Add for DynMatrix<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Sub<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn sub(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        match self.try_sub(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}: {}x{} - {}x{}", e, self.nrows, self.ncols, rhs.nrows, rhs.ncols),
        }
    }
}

impl<T: Scalar> Sub for DynMatrix<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

// ── Matrix multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        match self.try_matmul(rhs) {
            Ok(m) => m,
            Err(_) => panic!(
                "dimension mismatch: {}x{} * {}x{}",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols,
            ),
        }
    }
}

impl<T: Scalar> Mul for DynMatrix<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

// ── Scalar multiplication / division ────────────────────────────────

impl<T: Scalar> Mul<T> for DynMatrix<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        &self * rhs
    }
}

impl<T: Scalar> Mul<T> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: T) -> DynMatrix<T> {
        let data = self.data.iter().map(|&x| x * rhs).collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Div<T> for DynMatrix<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        &self / rhs
    }
}

impl<T: Scalar> Div<T> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn div(self, rhs: T) -> DynMatrix<T> {
        let data = self.data.iter().map(|&x| x / rhs).collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        let b = DynMatrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        let c = &a + &b;
        assert_eq!(c[(0, 0)], 6.0);
        assert_eq!(c[(1, 1)], 12.0);
        let d = b - a;
        assert_eq!(d, DynMatrix::fill(2, 2, 4.0));
    }

    #[test]
    fn try_add_mismatch() {
        let a = DynMatrix::zeros(2, 2, 0.0_f64);
        let b = DynMatrix::zeros(2, 1, 0.0_f64);
        let err = a.try_add(&b).unwrap_err();
        assert_eq!(err.expected, (2, 2));
        assert_eq!(err.got, (2, 1));
        assert!(a.try_sub(&b).is_err());
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn add_panics_on_mismatch() {
        let a = DynMatrix::zeros(2, 2, 0.0_f64);
        let b = DynMatrix::zeros(3, 2, 0.0_f64);
        let _ = &a + &b;
    }

    #[test]
    fn matmul() {
        let a = DynMatrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = DynMatrix::from_rows(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        let c = &a * &b;
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c[(0, 0)], 58.0);
        assert_eq!(c[(0, 1)], 64.0);
        assert_eq!(c[(1, 0)], 139.0);
        assert_eq!(c[(1, 1)], 154.0);
    }

    #[test]
    fn outer_product() {
        // column * row → rank-one matrix
        let k = DynMatrix::from_column(&[1.0_f64, 2.0]);
        let r = DynMatrix::from_rows(1, 3, &[3.0, 4.0, 5.0]);
        let c = k * r;
        assert_eq!(c.shape(), (2, 3));
        assert_eq!(c[(1, 2)], 10.0);
        assert_eq!(c[(0, 1)], 4.0);
    }

    #[test]
    fn try_matmul_mismatch() {
        let a = DynMatrix::zeros(2, 3, 0.0_f64);
        let x = DynMatrix::zeros(4, 1, 0.0_f64);
        let err = a.try_matmul(&x).unwrap_err();
        assert_eq!(err.expected, (3, 1));
        assert_eq!(err.got, (4, 1));
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn matmul_panics_on_mismatch() {
        let a = DynMatrix::zeros(2, 3, 0.0_f64);
        let b = DynMatrix::zeros(2, 3, 0.0_f64);
        let _ = a * b;
    }

    #[test]
    fn scalar_mul_div() {
        let a = DynMatrix::from_rows(1, 2, &[2.0_f64, -4.0]);
        assert_eq!((&a * 0.5).as_slice(), &[1.0, -2.0]);
        assert_eq!((a / 2.0).as_slice(), &[1.0, -2.0]);
    }
}

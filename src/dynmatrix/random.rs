use alloc::vec::Vec;

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::traits::Scalar;

use super::DynMatrix;

impl<T: Scalar> DynMatrix<T>
where
    StandardNormal: Distribution<T>,
{
    /// Matrix of independent standard-normal samples drawn from `rng`.
    ///
    /// Elements are drawn in storage (column-major) order, so a seeded
    /// generator always yields the same matrix.
    ///
    /// ```
    /// use numeris_rls::DynMatrix;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let w = DynMatrix::<f64>::randn(3, 2, &mut rng);
    /// assert_eq!(w.shape(), (3, 2));
    /// ```
    pub fn randn<R: Rng + ?Sized>(nrows: usize, ncols: usize, rng: &mut R) -> Self {
        let data: Vec<T> = (0..nrows * ncols)
            .map(|_| StandardNormal.sample(rng))
            .collect();
        DynMatrix { data, nrows, ncols }
    }
}

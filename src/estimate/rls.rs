use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::dynmatrix::{DimensionMismatch, DynMatrix};
use crate::traits::{FloatScalar, MatrixRef};

use super::EstimateError;

/// Forgetting factor and initial uncertainty for [`Rls`].
///
/// `Default` gives `forgetting_factor = 0.99`, `uncertainty = 10`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RlsConfig<T> {
    /// Exponential weight on past observations, in `(0, 1]`.
    pub forgetting_factor: T,
    /// Initial diagonal of `P`. Large values mean little trust in the
    /// initial weights and fast early adaptation.
    pub uncertainty: T,
}

impl<T: FloatScalar> Default for RlsConfig<T> {
    fn default() -> Self {
        Self {
            forgetting_factor: T::from(0.99).unwrap(),
            uncertainty: T::from(10.0).unwrap(),
        }
    }
}

impl<T: FloatScalar> RlsConfig<T> {
    /// Check that both parameters are usable.
    pub fn validate(&self) -> Result<(), EstimateError> {
        check_forgetting_factor(self.forgetting_factor)?;
        let u = self.uncertainty;
        if !u.is_finite() || u <= T::zero() {
            return Err(EstimateError::InvalidUncertainty);
        }
        Ok(())
    }
}

/// Recursive least-squares estimator with exponential forgetting.
///
/// Estimates `W` such that `y ≈ Wᵀ·x` for input column vectors `x`
/// (length `n`) and output column vectors `y` (length `m`).
///
/// `W` is stored `n × m`: one row per input, one column per output.
/// `P` is `n × n`.
///
/// Each [`update`](Rls::update) applies
///
/// ```text
/// K = P·x / (ff + xᵀ·P·x)
/// P = (P − K·xᵀ·P) / ff
/// W = W + K·(yᵀ − xᵀ·W)
/// ```
///
/// # Example
///
/// ```
/// use numeris_rls::estimate::{Rls, RlsConfig};
/// use numeris_rls::DynMatrix;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// // Forecast 2 sites from 3 features.
/// let mut rng = StdRng::seed_from_u64(0);
/// let mut rls = Rls::<f64>::from_config(2, 3, &RlsConfig::default(), &mut rng).unwrap();
/// assert_eq!(rls.weights().shape(), (3, 2));
///
/// let x = DynMatrix::from_column(&[1.0, 0.5, -0.2]);
/// let y = DynMatrix::from_column(&[0.3, 0.9]);
/// rls.update(&x, &y).unwrap();
/// assert_eq!(rls.predict(&x).unwrap().shape(), (2, 1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rls<T> {
    w: DynMatrix<T>,
    p: DynMatrix<T>,
    ff: T,
    n_outputs: usize,
    k: Option<DynMatrix<T>>,
    last: Option<(DynMatrix<T>, DynMatrix<T>)>,
}

impl<T: FloatScalar> Rls<T>
where
    StandardNormal: Distribution<T>,
{
    /// Create an estimator with `m` outputs and `n` inputs, drawing the
    /// initial weights from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn new(m: usize, n: usize, forgetting_factor: T, uncertainty: T) -> Result<Self, EstimateError> {
        Self::with_rng(m, n, forgetting_factor, uncertainty, &mut rand::rng())
    }

    /// Create an estimator with the default forgetting factor and uncertainty.
    #[cfg(feature = "std")]
    pub fn with_defaults(m: usize, n: usize) -> Result<Self, EstimateError> {
        Self::from_config(m, n, &RlsConfig::default(), &mut rand::rng())
    }

    /// Create an estimator, drawing the initial weights from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        m: usize,
        n: usize,
        forgetting_factor: T,
        uncertainty: T,
        rng: &mut R,
    ) -> Result<Self, EstimateError> {
        let config = RlsConfig {
            forgetting_factor,
            uncertainty,
        };
        Self::from_config(m, n, &config, rng)
    }

    /// Create an estimator from a [`RlsConfig`].
    ///
    /// - `W`: `n × m`, independent standard-normal entries
    /// - `P`: `uncertainty · I` (`n × n`)
    pub fn from_config<R: Rng + ?Sized>(
        m: usize,
        n: usize,
        config: &RlsConfig<T>,
        rng: &mut R,
    ) -> Result<Self, EstimateError> {
        if m == 0 || n == 0 {
            return Err(EstimateError::ZeroDimension);
        }
        config.validate()?;
        Ok(Self {
            w: DynMatrix::randn(n, m, rng),
            p: DynMatrix::eye(n, T::zero()) * config.uncertainty,
            ff: config.forgetting_factor,
            n_outputs: m,
            k: None,
            last: None,
        })
    }

    /// Discard everything learned and start over with fresh random weights.
    ///
    /// On error the estimator is left unchanged.
    #[cfg(feature = "std")]
    pub fn reset(&mut self, m: usize, n: usize, forgetting_factor: T, uncertainty: T) -> Result<(), EstimateError> {
        *self = Self::new(m, n, forgetting_factor, uncertainty)?;
        Ok(())
    }

    /// [`reset`](Rls::reset) with an explicit generator.
    pub fn reset_with_rng<R: Rng + ?Sized>(
        &mut self,
        m: usize,
        n: usize,
        forgetting_factor: T,
        uncertainty: T,
        rng: &mut R,
    ) -> Result<(), EstimateError> {
        *self = Self::with_rng(m, n, forgetting_factor, uncertainty, rng)?;
        Ok(())
    }
}

impl<T: FloatScalar> Rls<T> {
    /// Create an estimator from explicit initial weights.
    ///
    /// `w0` is `n × m`; both dimensions are taken from it.
    pub fn with_weights(w0: DynMatrix<T>, forgetting_factor: T, uncertainty: T) -> Result<Self, EstimateError> {
        let (n, m) = w0.shape();
        if m == 0 || n == 0 {
            return Err(EstimateError::ZeroDimension);
        }
        RlsConfig {
            forgetting_factor,
            uncertainty,
        }
        .validate()?;
        Ok(Self {
            w: w0,
            p: DynMatrix::eye(n, T::zero()) * uncertainty,
            ff: forgetting_factor,
            n_outputs: m,
            k: None,
            last: None,
        })
    }

    /// Rebuild an estimator from previously saved state.
    ///
    /// `w` must be `n × m` and `p` `n × n`. The gain and last observation
    /// start out empty.
    pub fn from_parts(w: DynMatrix<T>, p: DynMatrix<T>, forgetting_factor: T) -> Result<Self, EstimateError> {
        let (n, m) = w.shape();
        if m == 0 || n == 0 {
            return Err(EstimateError::ZeroDimension);
        }
        expect_shape(&p, (n, n))?;
        check_forgetting_factor(forgetting_factor)?;
        Ok(Self {
            w,
            p,
            ff: forgetting_factor,
            n_outputs: m,
            k: None,
            last: None,
        })
    }

    /// Input dimension `n`.
    #[inline]
    pub fn n_inputs(&self) -> usize {
        self.p.nrows()
    }

    /// Output dimension `m`.
    #[inline]
    pub fn n_outputs(&self) -> usize {
        self.n_outputs
    }

    /// Current weights (`n × m`).
    #[inline]
    pub fn weights(&self) -> &DynMatrix<T> {
        &self.w
    }

    /// Current inverse-covariance matrix (`n × n`).
    #[inline]
    pub fn covariance(&self) -> &DynMatrix<T> {
        &self.p
    }

    #[inline]
    pub fn forgetting_factor(&self) -> T {
        self.ff
    }

    /// Gain from the most recent update, `None` before the first one.
    #[inline]
    pub fn gain(&self) -> Option<&DynMatrix<T>> {
        self.k.as_ref()
    }

    /// `(x, y)` passed to the most recent update.
    pub fn last_observation(&self) -> Option<(&DynMatrix<T>, &DynMatrix<T>)> {
        self.last.as_ref().map(|(x, y)| (x, y))
    }

    /// Replace the weights, returning the old ones.
    ///
    /// The shape is not checked here; a matrix that is not `n × m` makes the
    /// next [`predict`](Rls::predict) or [`update`](Rls::update) fail with
    /// [`EstimateError::DimensionMismatch`].
    pub fn set_weights(&mut self, w: DynMatrix<T>) -> DynMatrix<T> {
        core::mem::replace(&mut self.w, w)
    }

    /// Predict the output for input `x` (`n × 1`): `Wᵀ·x` (`m × 1`).
    pub fn predict(&self, x: &DynMatrix<T>) -> Result<DynMatrix<T>, EstimateError> {
        let n = self.n_inputs();
        expect_shape(&self.w, (n, self.n_outputs))?;
        if !x.is_column() {
            return Err(mismatch((n, 1), x));
        }
        Ok(self.w.transpose().try_matmul(x)?)
    }

    /// [`predict`](Rls::predict) for a plain feature slice.
    pub fn predict_slice(&self, x: &[T]) -> Result<DynMatrix<T>, EstimateError> {
        self.predict(&DynMatrix::from_column(x))
    }

    /// Fold one observation into the estimate.
    ///
    /// `x` is the `n × 1` input and `y` the `m × 1` output observed for it.
    /// Shapes are checked before anything is modified, so a failed update
    /// leaves the estimator untouched.
    pub fn update(&mut self, x: &DynMatrix<T>, y: &DynMatrix<T>) -> Result<(), EstimateError> {
        let n = self.n_inputs();
        let m = self.n_outputs;
        expect_shape(&self.w, (n, m))?;
        expect_shape(x, (n, 1))?;
        expect_shape(y, (m, 1))?;

        let xt = x.transpose(); // 1×n
        let px = self.p.try_matmul(x)?; // n×1
        let denom = self.ff + xt.try_matmul(&px)?[(0, 0)];
        let k = px / denom; // n×1

        let kxt_p = k.try_matmul(&xt)?.try_matmul(&self.p)?; // n×n
        let p = self.p.try_sub(&kxt_p)? / self.ff;

        let residual = y.transpose().try_sub(&xt.try_matmul(&self.w)?)?; // 1×m
        let w = self.w.try_add(&k.try_matmul(&residual)?)?; // n×m

        self.p = p;
        self.w = w;
        self.k = Some(k);
        self.last = Some((x.clone(), y.clone()));

        self.check_shapes()
    }

    /// [`update`](Rls::update) for plain feature and target slices.
    pub fn update_slice(&mut self, x: &[T], y: &[T]) -> Result<(), EstimateError> {
        self.update(&DynMatrix::from_column(x), &DynMatrix::from_column(y))
    }

    /// Check that every held matrix agrees with the estimator's dimensions.
    ///
    /// `W` must be `n × m` and `P` `n × n`. Once an update has happened the
    /// stored gain and last observation are checked too (`n × 1`, `n × 1`,
    /// `m × 1`). Safe to call at any point, including straight after
    /// construction.
    pub fn check_shapes(&self) -> Result<(), EstimateError> {
        let n = self.n_inputs();
        let m = self.n_outputs;
        expect_shape(&self.p, (n, n))?;
        expect_shape(&self.w, (n, m))?;
        if let Some(k) = &self.k {
            expect_shape(k, (n, 1))?;
        }
        if let Some((x, y)) = &self.last {
            expect_shape(x, (n, 1))?;
            expect_shape(y, (m, 1))?;
        }
        check_forgetting_factor(self.ff)
    }
}

fn check_forgetting_factor<T: FloatScalar>(ff: T) -> Result<(), EstimateError> {
    if !ff.is_finite() || ff <= T::zero() || ff > T::one() {
        return Err(EstimateError::InvalidForgettingFactor);
    }
    Ok(())
}

fn mismatch<T>(expected: (usize, usize), got: &impl MatrixRef<T>) -> EstimateError {
    DimensionMismatch {
        expected,
        got: (got.nrows(), got.ncols()),
    }
    .into()
}

fn expect_shape<T>(a: &impl MatrixRef<T>, expected: (usize, usize)) -> Result<(), EstimateError> {
    if (a.nrows(), a.ncols()) != expected {
        return Err(mismatch(expected, a));
    }
    Ok(())
}

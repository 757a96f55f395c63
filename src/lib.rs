//! # numeris-rls
//!
//! Recursive least-squares (RLS) estimation with exponential forgetting,
//! on top of a small heap-allocated matrix core. `no_std` compatible
//! (requires `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use numeris_rls::{DynMatrix, Rls};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // 2 outputs (e.g. two sites) predicted from 3 features.
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut rls = Rls::<f64>::with_rng(2, 3, 0.99, 10.0, &mut rng).unwrap();
//!
//! let x = DynMatrix::from_column(&[1.0, 0.2, -0.4]);
//! let y = DynMatrix::from_column(&[0.5, 1.5]);
//!
//! let y_hat = rls.predict(&x).unwrap(); // Wᵀx, 2×1
//! rls.update(&x, &y).unwrap();
//! assert_eq!(y_hat.shape(), (2, 1));
//! ```
//!
//! ## Modules
//!
//! - [`estimate`]: [`Rls`] estimator, [`RlsConfig`] and [`EstimateError`].
//!   The weight matrix is stored inputs × outputs so that predictions are
//!   `Wᵀ·x`.
//!
//! - [`dynmatrix`]: `DynMatrix<T>` with runtime dimensions and
//!   column-major `Vec<T>` storage. Checked arithmetic (`try_add`,
//!   `try_sub`, `try_matmul`) returns [`DimensionMismatch`]; the `+ - *`
//!   operators panic on mismatched shapes. Standard-normal random fill via
//!   `rand_distr`.
//!
//! - [`traits`]: element trait hierarchy:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), used by the estimator
//!   - [`MatrixRef`]: generic read access used for shape checks
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Implies `alloc`. Thread-local RNG constructors, `std::error::Error` impls |
//! | `alloc` | via std | Heap allocation for `rand` / `rand_distr` |
//! | `libm`  | no      | Pure-Rust software float fallback for `no_std` |
//! | `all`   | no      | All features |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod dynmatrix;
pub mod estimate;
pub mod traits;

pub use dynmatrix::{DimensionMismatch, DynMatrix};
pub use estimate::{EstimateError, Rls, RlsConfig};
pub use traits::{FloatScalar, MatrixRef, Scalar};


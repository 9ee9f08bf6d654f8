//! transducer-kernels: log-domain arithmetic primitives for
//! sequence-transduction loss kernels.
//!
//! This crate is the arithmetic substrate under RNN-T/CTC-style
//! forward-backward recurrences:
//! - **Stable log-sum-exp**: `log(exp(a) + exp(b))` that never overflows or
//!   underflows, with the log(0) sentinel propagated, never turned into NaN
//! - **Interchangeable precision**: one algorithm body for `f32`, `half::f16`,
//!   and `half::bf16`; [`KernelFloat`] resolves the representation at compile
//!   time, so the hot path carries no precision branching
//! - **Functor library**: stateless operators ([`Maximum`], [`Add`],
//!   [`Identity`], [`Negate`], [`Exponential`], [`LogPlus`]) for generic
//!   reduce/transform kernels
//! - **Launch geometry**: [`div_up`] grid sizing for parallel launches
//!
//! Every operation is pure, total on its documented domain, and free of
//! side effects; the same definitions serve sequential host code and
//! concurrent kernel lanes.
//!
//! # Quick Start
//!
//! ```
//! use transducer_kernels::{log_sum_exp, neg_inf};
//!
//! let p = log_sum_exp(0.3_f32.ln(), 0.4_f32.ln());
//! assert!((p - 0.7_f32.ln()).abs() < 1e-6);
//!
//! // log(0) is the identity.
//! assert_eq!(log_sum_exp(neg_inf::<f32>(), p), p);
//! ```

pub mod kernel_types;
pub mod launch;
pub mod ops;

pub use kernel_types::{neg_inf, FloatType, KernelFloat};
pub use launch::div_up;
pub use ops::functors::{Add, BinaryOp, Exponential, Identity, Maximum, Negate, UnaryOp};
pub use ops::logspace::{log_sum_exp, log_sum_exp_all, LogPlus, CROSS_PRECISION_RTOL};
pub use ops::reduce::{par_reduce, reduce, transform};

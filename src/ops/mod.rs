pub mod functors;
pub mod logspace;
pub mod reduce;

pub use functors::{Add, BinaryOp, Exponential, Identity, Maximum, Negate, UnaryOp};
pub use logspace::{log_sum_exp, log_sum_exp_all, LogPlus, CROSS_PRECISION_RTOL};

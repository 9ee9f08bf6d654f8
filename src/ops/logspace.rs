//! Numerically stable log-domain arithmetic.
//!
//! Path probabilities accumulate in the log domain so that sums over widely
//! separated magnitudes neither overflow nor underflow. The log(0) sentinel
//! short-circuits both the function and the combinator form, which also keeps
//! `exp` away from the sentinel on hardware paths where that is unsafe.

use crate::kernel_types::KernelFloat;
use crate::ops::functors::{BinaryOp, Maximum};

/// Relative tolerance within which the reduced-precision primitives track
/// their full-precision counterparts.
pub const CROSS_PRECISION_RTOL: f32 = 1e-2;

/// Compute `log(exp(a) + exp(b))` without overflow or underflow.
///
/// The exponential always sees an argument <= 0, and `ln_1p` keeps precision
/// when the operands are far apart. One body serves every representation;
/// `KernelFloat` resolves the arithmetic at compile time.
#[inline(always)]
pub fn log_sum_exp<T: KernelFloat>(a: T, b: T) -> T {
    if a.is_neg_inf() {
        return b;
    }
    if b.is_neg_inf() {
        return a;
    }
    if a > b {
        (b - a).exp().ln_1p() + a
    } else {
        (a - b).exp().ln_1p() + b
    }
}

/// Combinator form of [`log_sum_exp`], formulated via the absolute
/// difference: `log1p(exp(-|p1 - p2|)) + max(p1, p2)`.
///
/// Exposed as a functor so generic reduction and scan routines can take it by
/// value and stay agnostic to the concrete arithmetic. Agrees with
/// [`log_sum_exp`] within round-off for every finite pair and exactly on
/// sentinel inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPlus;

impl<T: KernelFloat> BinaryOp<T> for LogPlus {
    #[inline(always)]
    fn apply(&self, p1: T, p2: T) -> T {
        if p1.is_neg_inf() {
            return p2;
        }
        if p2.is_neg_inf() {
            return p1;
        }
        (-(p1 - p2).abs()).exp().ln_1p() + Maximum.apply(p1, p2)
    }
}

/// Stable `log(sum(exp(x)))` over a slice of scores.
///
/// Max-shifted so the exponentials never overflow. An empty slice, like a
/// slice of impossible paths, reduces to the sentinel.
#[inline]
pub fn log_sum_exp_all<T: KernelFloat>(values: &[T]) -> T {
    let mut max = T::neg_inf();
    for &v in values {
        max = Maximum.apply(max, v);
    }
    if max.is_neg_inf() {
        return max;
    }

    let mut sum = T::zero();
    for &v in values {
        if !v.is_neg_inf() {
            sum = sum + (v - max).exp();
        }
    }
    max + sum.ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel_types::neg_inf;
    use half::f16;

    #[test]
    fn test_log_sum_exp_basic() {
        // log(exp(0) + exp(0)) = ln 2
        let result = log_sum_exp(0.0f32, 0.0);
        assert!((result - 2.0f32.ln()).abs() < 1e-6);

        let result = log_sum_exp(1.0f32, 2.0);
        let expected = (1.0f32.exp() + 2.0f32.exp()).ln();
        assert!((result - expected).abs() < 1e-6);
    }

    #[test]
    fn test_log_sum_exp_known_value() {
        // log(0.3) (+) log(0.4) = log(0.7)
        let result = log_sum_exp(0.3f32.ln(), 0.4f32.ln());
        assert!(
            (result - (-0.356675)).abs() < 1e-5,
            "expected ~-0.356675, got {}",
            result
        );
    }

    #[test]
    fn test_log_sum_exp_extreme_magnitudes() {
        // Large positives must not overflow through exp.
        let result = log_sum_exp(1000.0f32, 1000.0);
        assert!((result - (1000.0 + 2.0f32.ln())).abs() < 1e-3);

        // Widely separated operands collapse to the larger one.
        let result = log_sum_exp(1000.0f32, 0.0);
        assert_eq!(result, 1000.0);

        let result = log_sum_exp(-1000.0f32, -1000.0);
        assert!((result - (-1000.0 + 2.0f32.ln())).abs() < 1e-3);
    }

    #[test]
    fn test_log_sum_exp_sentinel_identity() {
        assert_eq!(log_sum_exp(neg_inf::<f32>(), 5.0), 5.0);
        assert_eq!(log_sum_exp(5.0f32, neg_inf::<f32>()), 5.0);
        assert!(log_sum_exp(neg_inf::<f32>(), neg_inf::<f32>()).is_neg_inf());

        let a = f16::from_f32(-4.25);
        assert_eq!(log_sum_exp(neg_inf::<f16>(), a), a);
        assert_eq!(log_sum_exp(a, neg_inf::<f16>()), a);
        assert!(log_sum_exp(neg_inf::<f16>(), neg_inf::<f16>()).is_neg_inf());
    }

    #[test]
    fn test_log_sum_exp_half_known_value() {
        let result = log_sum_exp(f16::from_f32(0.3f32.ln()), f16::from_f32(0.4f32.ln()));
        assert!(
            (result.to_f32() - (-0.356675)).abs() < 5e-3,
            "f16 result drifted: {}",
            result.to_f32()
        );
    }

    #[test]
    fn test_log_plus_agrees_with_log_sum_exp() {
        let pairs = [
            (0.0f32, 0.0),
            (1.0, 2.0),
            (-30.0, 10.0),
            (42.0, 41.9),
            (-0.5, -0.5),
        ];
        for &(a, b) in &pairs {
            let direct = log_sum_exp(a, b);
            let combined = LogPlus.apply(a, b);
            assert!(
                (direct - combined).abs() < 1e-5,
                "log_plus({}, {}) = {} vs {}",
                a,
                b,
                combined,
                direct
            );
        }

        assert_eq!(LogPlus.apply(neg_inf::<f32>(), 3.0), 3.0);
        assert_eq!(LogPlus.apply(3.0f32, neg_inf::<f32>()), 3.0);
        assert!(LogPlus.apply(neg_inf::<f32>(), neg_inf::<f32>()).is_neg_inf());
    }

    #[test]
    fn test_log_sum_exp_all_slice() {
        let values = [1.0f32, 2.0, 3.0];
        let result = log_sum_exp_all(&values);
        let expected = (1.0f32.exp() + 2.0f32.exp() + 3.0f32.exp()).ln();
        assert!((result - expected).abs() < 1e-5);

        // Sentinel entries contribute nothing.
        let values = [neg_inf::<f32>(), 2.0, neg_inf::<f32>()];
        assert!((log_sum_exp_all(&values) - 2.0).abs() < 1e-6);

        assert!(log_sum_exp_all::<f32>(&[]).is_neg_inf());
        assert!(log_sum_exp_all(&[neg_inf::<f32>(); 4]).is_neg_inf());
    }

    #[test]
    fn test_log_sum_exp_all_matches_pairwise_fold() {
        let values = [-3.0f32, 0.25, -11.0, 4.0, 4.0, -0.75];
        let folded = values
            .iter()
            .fold(neg_inf::<f32>(), |acc, &v| log_sum_exp(acc, v));
        let shifted = log_sum_exp_all(&values);
        assert!((folded - shifted).abs() < 1e-5);
    }
}

//! Precision-abstraction types shared across ops.

use core::ops::{Add, Neg, Sub};

/// Float type identifier for const-time kernel selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatType {
    F32,
    F16,
    BF16,
}

/// Trait for kernel-compatible score types.
///
/// A score is a log-probability; the value returned by [`KernelFloat::neg_inf`]
/// is the canonical log(0), an impossible path. Implemented for `f32`,
/// `half::f16`, and `half::bf16`. Zero-cost via monomorphization: the shared
/// algorithm bodies contain no representation-specific calls, every
/// specialization lives in these impls.
pub trait KernelFloat:
    Copy
    + Default
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Compile-time type identifier for zero-cost kernel selection.
    const TYPE_ID: FloatType;

    /// Canonical log(0) sentinel.
    fn neg_inf() -> Self;
    /// Dedicated sentinel check. On the half-width representations ordinary
    /// equality against a constructed infinity is not reliable; implementations
    /// must test infiniteness and sign instead.
    fn is_neg_inf(self) -> bool;
    fn to_f32(self) -> f32;
    fn from_f32(v: f32) -> Self;
    fn zero() -> Self;
    fn one() -> Self;
    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn ln_1p(self) -> Self;
    fn abs(self) -> Self;
}

impl KernelFloat for f32 {
    const TYPE_ID: FloatType = FloatType::F32;

    #[inline(always)]
    fn neg_inf() -> Self { f32::NEG_INFINITY }
    #[inline(always)]
    fn is_neg_inf(self) -> bool { self == f32::NEG_INFINITY }
    #[inline(always)]
    fn to_f32(self) -> f32 { self }
    #[inline(always)]
    fn from_f32(v: f32) -> Self { v }
    #[inline(always)]
    fn zero() -> Self { 0.0 }
    #[inline(always)]
    fn one() -> Self { 1.0 }
    #[inline(always)]
    fn exp(self) -> Self { f32::exp(self) }
    #[inline(always)]
    fn ln(self) -> Self { f32::ln(self) }
    #[inline(always)]
    fn ln_1p(self) -> Self { f32::ln_1p(self) }
    #[inline(always)]
    fn abs(self) -> Self { f32::abs(self) }
}

impl KernelFloat for half::f16 {
    const TYPE_ID: FloatType = FloatType::F16;

    #[inline(always)]
    fn neg_inf() -> Self { half::f16::NEG_INFINITY }
    #[inline(always)]
    fn is_neg_inf(self) -> bool { self.is_infinite() && self.is_sign_negative() }
    #[inline(always)]
    fn to_f32(self) -> f32 { half::f16::to_f32(self) }
    #[inline(always)]
    fn from_f32(v: f32) -> Self { half::f16::from_f32(v) }
    #[inline(always)]
    fn zero() -> Self { half::f16::ZERO }
    #[inline(always)]
    fn one() -> Self { half::f16::ONE }
    #[inline(always)]
    fn exp(self) -> Self { half::f16::from_f32(self.to_f32().exp()) }
    #[inline(always)]
    fn ln(self) -> Self { half::f16::from_f32(self.to_f32().ln()) }
    #[inline(always)]
    fn ln_1p(self) -> Self { half::f16::from_f32(self.to_f32().ln_1p()) }
    #[inline(always)]
    fn abs(self) -> Self { half::f16::from_bits(self.to_bits() & 0x7fff) }
}

impl KernelFloat for half::bf16 {
    const TYPE_ID: FloatType = FloatType::BF16;

    #[inline(always)]
    fn neg_inf() -> Self { half::bf16::NEG_INFINITY }
    #[inline(always)]
    fn is_neg_inf(self) -> bool { self.is_infinite() && self.is_sign_negative() }
    #[inline(always)]
    fn to_f32(self) -> f32 { half::bf16::to_f32(self) }
    #[inline(always)]
    fn from_f32(v: f32) -> Self { half::bf16::from_f32(v) }
    #[inline(always)]
    fn zero() -> Self { half::bf16::ZERO }
    #[inline(always)]
    fn one() -> Self { half::bf16::ONE }
    #[inline(always)]
    fn exp(self) -> Self { half::bf16::from_f32(self.to_f32().exp()) }
    #[inline(always)]
    fn ln(self) -> Self { half::bf16::from_f32(self.to_f32().ln()) }
    #[inline(always)]
    fn ln_1p(self) -> Self { half::bf16::from_f32(self.to_f32().ln_1p()) }
    #[inline(always)]
    fn abs(self) -> Self { half::bf16::from_bits(self.to_bits() & 0x7fff) }
}

/// Canonical log(0) sentinel for any supported representation.
#[inline(always)]
pub fn neg_inf<T: KernelFloat>() -> T {
    T::neg_inf()
}

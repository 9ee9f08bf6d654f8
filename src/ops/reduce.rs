//! Generic reduce/transform routines parameterized by functor type.
//!
//! These are the reference consumers of the functor library: the same
//! algorithm body compiles and runs for any score representation and any
//! functor, with static dispatch throughout. Lattice kernels apply the same
//! pattern across a time axis; here the routines run over plain slices.

use rayon::prelude::*;

use crate::kernel_types::KernelFloat;
use crate::ops::functors::{BinaryOp, UnaryOp};

/// Elements per rayon work unit.
const PAR_CHUNK: usize = 4096;

/// Sequential left fold of `op` over `values`, starting from `init`.
#[inline]
pub fn reduce<T: KernelFloat, Op: BinaryOp<T>>(values: &[T], init: T, op: Op) -> T {
    let mut acc = init;
    for &v in values {
        acc = op.apply(acc, v);
    }
    acc
}

/// Elementwise transform of `input` into a caller-allocated `output`.
#[inline]
pub fn transform<T: KernelFloat, Op: UnaryOp<T>>(input: &[T], output: &mut [T], op: Op) {
    debug_assert_eq!(input.len(), output.len());
    for (out, &x) in output.iter_mut().zip(input) {
        *out = op.apply(x);
    }
}

/// Chunked parallel reduction of `op` over `values`.
///
/// `init` must be an identity of `op`, and `op` associative up to round-off;
/// chunk boundaries are otherwise observable in the result.
#[inline]
pub fn par_reduce<T: KernelFloat, Op: BinaryOp<T>>(values: &[T], init: T, op: Op) -> T {
    values
        .par_chunks(PAR_CHUNK)
        .map(|chunk| reduce(chunk, init, op))
        .reduce(|| init, |a, b| op.apply(a, b))
}

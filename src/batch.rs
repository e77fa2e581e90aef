//! Slice-level evaluation of the vector kernels
//!
//! Slices are processed as consecutive lane vectors, each one guarded on its
//! own, so a single out-of-range element only sends its own vector through
//! the scalar path. Elements left over after the last whole vector are
//! computed by the scalar reference.
//!
//! Performance characteristics:
//! - Parallelization threshold: 4096 elements (`rayon` feature)
//! - Chunks are a multiple of every lane count, so the parallel and serial
//!   paths see the same vectors and produce identical results

use crate::dtype::LaneElement;
use crate::error::{Error, Result};
use crate::kernels::{self, BinaryKernel, BinaryOp, UnaryKernel, UnaryOp, fallback, guard};
use crate::lanes::LaneVector;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Parallelization threshold: skip Rayon for small slices (overhead > benefit)
#[cfg(feature = "rayon")]
const PARALLEL_THRESHOLD: usize = 4096;

#[cfg(feature = "rayon")]
const CHUNK_SIZE: usize = 4096;

/// Apply `op` to every element of `input`, writing into `output`
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if `output.len() != input.len()`.
pub fn unary_f64(op: UnaryOp, input: &[f64], output: &mut [f64]) -> Result<()> {
    unary_slice::<f64, 2>(kernels::unary_kernel_f64(op), input, output)
}

/// Apply `op` to every element of `input`, writing into `output`
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if `output.len() != input.len()`.
pub fn unary_f32(op: UnaryOp, input: &[f32], output: &mut [f32]) -> Result<()> {
    unary_slice::<f32, 4>(kernels::unary_kernel_f32(op), input, output)
}

/// Apply `op` element-wise to `lhs` and `rhs`, writing into `output`
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if `rhs` or `output` differ in length
/// from `lhs`.
pub fn binary_f64(op: BinaryOp, lhs: &[f64], rhs: &[f64], output: &mut [f64]) -> Result<()> {
    binary_slice(kernels::binary_kernel_f64(op), lhs, rhs, output)
}

/// Apply `op` element-wise to `lhs` and `rhs`, writing into `output`
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if `rhs` or `output` differ in length
/// from `lhs`.
pub fn binary_f32(op: BinaryOp, lhs: &[f32], rhs: &[f32], output: &mut [f32]) -> Result<()> {
    binary_slice(kernels::binary_kernel_f32(op), lhs, rhs, output)
}

fn ensure_len(arg: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(Error::length_mismatch(arg, expected, got));
    }
    Ok(())
}

fn unary_slice<T: LaneElement, const L: usize>(
    kernel: &UnaryKernel<T>,
    input: &[T],
    output: &mut [T],
) -> Result<()> {
    ensure_len("output", input.len(), output.len())?;

    #[cfg(feature = "rayon")]
    if input.len() >= PARALLEL_THRESHOLD {
        log::debug!(
            "{}: {} elements in chunks of {CHUNK_SIZE}",
            kernel.spec.name,
            input.len()
        );
        output
            .par_chunks_mut(CHUNK_SIZE)
            .zip(input.par_chunks(CHUNK_SIZE))
            .for_each(|(out_chunk, in_chunk)| unary_chunk::<T, L>(kernel, in_chunk, out_chunk));
        return Ok(());
    }

    unary_chunk::<T, L>(kernel, input, output);
    Ok(())
}

fn unary_chunk<T: LaneElement, const L: usize>(
    kernel: &UnaryKernel<T>,
    input: &[T],
    output: &mut [T],
) {
    let (in_vectors, in_tail) = LaneVector::<T, L>::split_slice(input);
    let (out_vectors, out_tail) = LaneVector::<T, L>::split_slice_mut(output);
    for (o, &v) in out_vectors.iter_mut().zip(in_vectors) {
        *o = guard::unary(kernel, v);
    }
    if !in_tail.is_empty() {
        log::trace!("{}: {} tail elements", kernel.spec.name, in_tail.len());
    }
    for (o, &x) in out_tail.iter_mut().zip(in_tail) {
        *o = fallback::unary(kernel.op, x);
    }
}

fn binary_slice<T: LaneElement, const L: usize>(
    kernel: &BinaryKernel<T, L>,
    lhs: &[T],
    rhs: &[T],
    output: &mut [T],
) -> Result<()> {
    ensure_len("rhs", lhs.len(), rhs.len())?;
    ensure_len("output", lhs.len(), output.len())?;

    #[cfg(feature = "rayon")]
    if lhs.len() >= PARALLEL_THRESHOLD {
        log::debug!(
            "{}: {} elements in chunks of {CHUNK_SIZE}",
            kernel.spec.name,
            lhs.len()
        );
        output
            .par_chunks_mut(CHUNK_SIZE)
            .zip(lhs.par_chunks(CHUNK_SIZE).zip(rhs.par_chunks(CHUNK_SIZE)))
            .for_each(|(out_chunk, (a, b))| binary_chunk(kernel, a, b, out_chunk));
        return Ok(());
    }

    binary_chunk(kernel, lhs, rhs, output);
    Ok(())
}

fn binary_chunk<T: LaneElement, const L: usize>(
    kernel: &BinaryKernel<T, L>,
    lhs: &[T],
    rhs: &[T],
    output: &mut [T],
) {
    let (lhs_vectors, lhs_tail) = LaneVector::<T, L>::split_slice(lhs);
    let (rhs_vectors, rhs_tail) = LaneVector::<T, L>::split_slice(rhs);
    let (out_vectors, out_tail) = LaneVector::<T, L>::split_slice_mut(output);
    for ((o, &a), &b) in out_vectors.iter_mut().zip(lhs_vectors).zip(rhs_vectors) {
        *o = guard::binary(kernel, a, b);
    }
    if !lhs_tail.is_empty() {
        log::trace!("{}: {} tail elements", kernel.spec.name, lhs_tail.len());
    }
    for ((o, &a), &b) in out_tail.iter_mut().zip(lhs_tail).zip(rhs_tail) {
        *o = fallback::binary(kernel.op, a, b);
    }
}

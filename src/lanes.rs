//! Fixed-width lane vectors
//!
//! A [`LaneVector`] is the unit every kernel consumes and produces: `L`
//! independent lanes of one precision, passed by value. The two shapes the
//! kernels are defined for are [`F64x2`] and [`F32x4`], both 128 bits wide.

use crate::dtype::LaneElement;
use bytemuck::{Pod, Zeroable};
use std::ops::{Index, Mul};

/// `L` lanes of `T`, laid out exactly like `[T; L]`
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(transparent)]
pub struct LaneVector<T, const L: usize>([T; L]);

/// Two lanes of double precision
pub type F64x2 = LaneVector<f64, 2>;

/// Four lanes of single precision
pub type F32x4 = LaneVector<f32, 4>;

// SAFETY: repr(transparent) over [T; L], which is Zeroable/Pod when T is.
unsafe impl<T: Zeroable, const L: usize> Zeroable for LaneVector<T, L> {}
unsafe impl<T: Pod, const L: usize> Pod for LaneVector<T, L> {}

impl<T: LaneElement, const L: usize> LaneVector<T, L> {
    /// Number of lanes
    pub const LANES: usize = L;

    /// Create a vector from its lanes
    #[inline]
    pub const fn new(lanes: [T; L]) -> Self {
        Self(lanes)
    }

    /// Create a vector with every lane set to `value`
    #[inline]
    pub fn splat(value: T) -> Self {
        Self([value; L])
    }

    /// Lanes as an array
    #[inline]
    pub fn to_array(self) -> [T; L] {
        self.0
    }

    /// Borrow the lanes
    #[inline]
    pub fn as_array(&self) -> &[T; L] {
        &self.0
    }

    /// Apply `f` to every lane independently
    #[inline]
    pub fn map(self, f: impl FnMut(T) -> T) -> Self {
        Self(self.0.map(f))
    }

    /// Apply `f` lane-wise to two vectors
    #[inline]
    pub fn zip_map(self, other: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        let mut out = self.0;
        for (o, b) in out.iter_mut().zip(other.0) {
            *o = f(*o, b);
        }
        Self(out)
    }

    /// Index of the first lane satisfying `pred`
    #[inline]
    pub fn position(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.0.iter().position(pred)
    }

    /// Index of the lane with the largest magnitude (first one on ties)
    pub fn argmax_magnitude(&self) -> usize {
        let mut best = 0;
        for (i, x) in self.0.iter().enumerate().skip(1) {
            if x.abs() > self.0[best].abs() {
                best = i;
            }
        }
        best
    }

    /// Index of the lane with the smallest magnitude (first one on ties)
    pub fn argmin_magnitude(&self) -> usize {
        let mut best = 0;
        for (i, x) in self.0.iter().enumerate().skip(1) {
            if x.abs() < self.0[best].abs() {
                best = i;
            }
        }
        best
    }

    /// View a slice as whole vectors plus the lanes left over
    pub fn split_slice(values: &[T]) -> (&[Self], &[T]) {
        let (head, tail) = values.split_at(values.len() - values.len() % L);
        (bytemuck::cast_slice(head), tail)
    }

    /// Mutable counterpart of [`split_slice`](Self::split_slice)
    pub fn split_slice_mut(values: &mut [T]) -> (&mut [Self], &mut [T]) {
        let split = values.len() - values.len() % L;
        let (head, tail) = values.split_at_mut(split);
        (bytemuck::cast_slice_mut(head), tail)
    }
}

impl<T: LaneElement, const L: usize> From<[T; L]> for LaneVector<T, L> {
    fn from(lanes: [T; L]) -> Self {
        Self(lanes)
    }
}

impl<T: LaneElement, const L: usize> From<LaneVector<T, L>> for [T; L] {
    fn from(v: LaneVector<T, L>) -> Self {
        v.0
    }
}

impl<T, const L: usize> Index<usize> for LaneVector<T, L> {
    type Output = T;

    #[inline]
    fn index(&self, lane: usize) -> &T {
        &self.0[lane]
    }
}

impl<T: LaneElement, const L: usize> Mul for LaneVector<T, L> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a * b)
    }
}

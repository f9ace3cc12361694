//! Tensor - The N-Dimensional Array Type
//!
//! A [`Tensor`] pairs reference-counted storage with a shape, strides, and an
//! element offset. View operations (reshape of contiguous data, transpose,
//! permute, broadcast) share storage and only rewrite the metadata;
//! arithmetic and reductions allocate fresh output and never mutate their
//! inputs.
//!
//! Elementwise arithmetic broadcasts per NumPy rules. Division by zero
//! follows IEEE semantics for floating-point element types: infinities and
//! NaN propagate, nothing raises. Reductions accept an axis set; reducing an
//! empty extent fails for max/min and yields the identity for sum.
//!
//! @version 0.1.0
//! @author Tensoric Contributors

use core::fmt;

use tensoric_core::error::{Error, Result};
use tensoric_core::kernels;
use tensoric_core::scalar::{Float, Numeric, Scalar};
use tensoric_core::storage::Storage;

use crate::shape::{
    broadcast_shape, broadcast_strides, contiguous_strides, is_contiguous, linear_index, numel,
    reduce_shape, resolve_reshape, squeeze, unravel_index, unsqueeze, validate_axes,
    validate_indices, Shape, Strides,
};

// =============================================================================
// Tensor Struct
// =============================================================================

/// An N-dimensional array: storage + shape + strides + offset.
pub struct Tensor<T: Scalar> {
    /// Shared element buffer.
    storage: Storage<T>,
    /// Extent of each logical axis.
    shape: Shape,
    /// Storage step per unit index along each axis.
    strides: Strides,
    /// Offset of the first element within the storage window.
    offset: usize,
}

impl<T: Scalar> Clone for Tensor<T> {
    /// Clones the handle; the clone shares storage with the original.
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            shape: self.shape.clone(),
            strides: self.strides.clone(),
            offset: self.offset,
        }
    }
}

// =============================================================================
// Construction
// =============================================================================

impl<T: Scalar> Tensor<T> {
    /// Builds a tensor directly from its parts. Internal constructor for
    /// view operations; callers guarantee the metadata stays in bounds.
    pub(crate) fn from_parts(
        storage: Storage<T>,
        shape: Shape,
        strides: Strides,
        offset: usize,
    ) -> Self {
        Self {
            storage,
            shape,
            strides,
            offset,
        }
    }

    /// Creates a tensor from a flat row-major vector and a shape.
    ///
    /// # Errors
    /// Fails with a shape mismatch when `data.len() != product(shape)`.
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        if data.len() != numel(shape) {
            return Err(Error::shape_mismatch(shape, &[data.len()]));
        }

        Ok(Self {
            storage: Storage::from_vec(data),
            shape: Shape::from_slice(shape),
            strides: contiguous_strides(shape),
            offset: 0,
        })
    }

    /// Creates a tensor by copying a flat row-major slice.
    pub fn from_slice(data: &[T], shape: &[usize]) -> Result<Self> {
        Self::from_vec(data.to_vec(), shape)
    }

    /// Creates a rank-0 tensor holding a single value.
    #[must_use]
    pub fn scalar(value: T) -> Self {
        Self {
            storage: Storage::from_vec(vec![value]),
            shape: Shape::new(),
            strides: Strides::new(),
            offset: 0,
        }
    }

    /// Creates a tensor of zeros (default element values) with the given
    /// shape.
    #[must_use]
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            storage: Storage::zeros(numel(shape)),
            shape: Shape::from_slice(shape),
            strides: contiguous_strides(shape),
            offset: 0,
        }
    }
}

impl<T: Numeric> Tensor<T> {
    /// Creates a tensor of ones with the given shape.
    #[must_use]
    pub fn ones(shape: &[usize]) -> Self {
        Self::full(shape, T::ONE)
    }

    /// Creates a tensor filled with `value`.
    #[must_use]
    pub fn full(shape: &[usize], value: T) -> Self {
        Self {
            storage: Storage::from_vec(vec![value; numel(shape)]),
            shape: Shape::from_slice(shape),
            strides: contiguous_strides(shape),
            offset: 0,
        }
    }
}

// =============================================================================
// Metadata Accessors
// =============================================================================

impl<T: Scalar> Tensor<T> {
    /// Returns the shape.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the strides.
    #[must_use]
    pub fn strides(&self) -> &[isize] {
        &self.strides
    }

    /// Returns the offset of the first element within the storage window.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the underlying storage handle. Low-level accessor for
    /// adapter layers that hand strided windows to compute backends.
    #[must_use]
    pub const fn storage(&self) -> &Storage<T> {
        &self.storage
    }

    /// Returns the rank (number of axes).
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Returns the total number of elements.
    #[must_use]
    pub fn numel(&self) -> usize {
        numel(&self.shape)
    }

    /// Returns true if the tensor holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numel() == 0
    }

    /// Returns true if the tensor is laid out contiguously in row-major
    /// order.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        is_contiguous(&self.shape, &self.strides)
    }
}

// =============================================================================
// Element Access
// =============================================================================

impl<T: Scalar> Tensor<T> {
    /// Reads the element at a logical index tuple.
    pub fn get(&self, indices: &[usize]) -> Result<T> {
        validate_indices(indices, &self.shape)?;
        let pos = self.offset as isize + linear_index(indices, &self.strides);
        Ok(self.storage.as_slice()[pos as usize])
    }

    /// Writes the element at a logical index tuple.
    ///
    /// Writes through a view are visible in every tensor sharing the
    /// storage; callers serialize concurrent writes to overlapping views.
    pub fn set(&self, indices: &[usize], value: T) -> Result<()> {
        validate_indices(indices, &self.shape)?;
        let pos = self.offset as isize + linear_index(indices, &self.strides);
        self.storage.as_slice_mut()[pos as usize] = value;
        Ok(())
    }

    /// Extracts the value of a single-element tensor.
    pub fn item(&self) -> Result<T> {
        if self.numel() != 1 {
            return Err(Error::invalid_operation(format!(
                "item requires exactly one element, tensor has {}",
                self.numel()
            )));
        }
        let data = self.storage.as_slice();
        Ok(data[self.offset])
    }

    /// Returns the elements in logical row-major order, regardless of the
    /// stride layout.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        let n = self.numel();
        let data = self.storage.as_slice();

        if self.is_contiguous() {
            return data[self.offset..self.offset + n].to_vec();
        }

        let mut out = Vec::with_capacity(n);
        for lin in 0..n {
            let idx = unravel_index(lin, &self.shape);
            let pos = self.offset as isize + linear_index(&idx, &self.strides);
            out.push(data[pos as usize]);
        }
        out
    }

    /// Returns a contiguous row-major tensor with the same contents: the
    /// tensor itself (sharing storage) when already contiguous, a fresh copy
    /// otherwise.
    #[must_use]
    pub fn contiguous(&self) -> Self {
        if self.is_contiguous() {
            return self.clone();
        }
        // to_vec matches the shape by construction
        Self {
            storage: Storage::from_vec(self.to_vec()),
            shape: self.shape.clone(),
            strides: contiguous_strides(&self.shape),
            offset: 0,
        }
    }

    /// Returns a copy backed by fresh storage, never aliasing the original.
    #[must_use]
    pub fn clone_deep(&self) -> Self {
        Self {
            storage: Storage::from_vec(self.to_vec()),
            shape: self.shape.clone(),
            strides: contiguous_strides(&self.shape),
            offset: 0,
        }
    }
}

// =============================================================================
// Shape Operations
// =============================================================================

impl<T: Scalar> Tensor<T> {
    /// Reshapes to a new shape with the same element count. One axis may be
    /// -1 to infer its extent.
    ///
    /// Returns a view sharing storage when the tensor is contiguous, a
    /// contiguous copy otherwise.
    pub fn reshape(&self, new_shape: &[isize]) -> Result<Self> {
        let resolved = resolve_reshape(&self.shape, new_shape)?;

        if self.is_contiguous() {
            return Ok(Self {
                storage: self.storage.clone(),
                strides: contiguous_strides(&resolved),
                shape: resolved,
                offset: self.offset,
            });
        }

        let base = self.contiguous();
        Ok(Self {
            storage: base.storage,
            strides: contiguous_strides(&resolved),
            shape: resolved,
            offset: 0,
        })
    }

    /// Flattens to rank 1.
    pub fn flatten(&self) -> Result<Self> {
        self.reshape(&[-1])
    }

    /// Removes size-1 axes (all of them, or just `axis`). Pure view.
    #[must_use]
    pub fn squeeze(&self, axis: Option<usize>) -> Self {
        let new_shape = squeeze(&self.shape, axis);
        let mut new_strides = Strides::new();
        match axis {
            Some(a) => {
                for (i, &s) in self.strides.iter().enumerate() {
                    if !(i == a && self.shape[i] == 1) {
                        new_strides.push(s);
                    }
                }
            }
            None => {
                for (&e, &s) in self.shape.iter().zip(self.strides.iter()) {
                    if e != 1 {
                        new_strides.push(s);
                    }
                }
            }
        }

        Self {
            storage: self.storage.clone(),
            shape: new_shape,
            strides: new_strides,
            offset: self.offset,
        }
    }

    /// Inserts a size-1 axis at `axis`. Pure view.
    pub fn unsqueeze(&self, axis: usize) -> Result<Self> {
        let new_shape = unsqueeze(&self.shape, axis)?;
        let mut new_strides = Strides::with_capacity(self.strides.len() + 1);
        new_strides.extend_from_slice(&self.strides[..axis]);
        // Stride of a size-1 axis never advances; zero keeps the math simple.
        new_strides.push(0);
        new_strides.extend_from_slice(&self.strides[axis..]);

        Ok(Self {
            storage: self.storage.clone(),
            shape: new_shape,
            strides: new_strides,
            offset: self.offset,
        })
    }

    /// Swaps two axes. Pure view: shape and strides reorder, data stays put.
    pub fn transpose(&self, axis0: usize, axis1: usize) -> Result<Self> {
        let ndim = self.ndim();
        for &a in &[axis0, axis1] {
            if a >= ndim {
                return Err(Error::InvalidAxis {
                    axis: a as i64,
                    ndim,
                });
            }
        }

        let mut shape = self.shape.clone();
        let mut strides = self.strides.clone();
        shape.swap(axis0, axis1);
        strides.swap(axis0, axis1);

        Ok(Self {
            storage: self.storage.clone(),
            shape,
            strides,
            offset: self.offset,
        })
    }

    /// Swaps the last two axes (the matrix transpose for rank 2).
    pub fn t(&self) -> Result<Self> {
        let ndim = self.ndim();
        if ndim < 2 {
            return Err(Error::rank_mismatch(2, ndim));
        }
        self.transpose(ndim - 2, ndim - 1)
    }

    /// Reorders all axes by a permutation of `0..ndim`. Pure view.
    pub fn permute(&self, order: &[usize]) -> Result<Self> {
        let ndim = self.ndim();
        if order.len() != ndim {
            return Err(Error::rank_mismatch(ndim, order.len()));
        }
        let mut seen = vec![false; ndim];
        for &a in order {
            if a >= ndim {
                return Err(Error::InvalidAxis {
                    axis: a as i64,
                    ndim,
                });
            }
            if seen[a] {
                return Err(Error::invalid_operation(format!(
                    "duplicate axis {a} in permutation"
                )));
            }
            seen[a] = true;
        }

        let shape: Shape = order.iter().map(|&a| self.shape[a]).collect();
        let strides: Strides = order.iter().map(|&a| self.strides[a]).collect();

        Ok(Self {
            storage: self.storage.clone(),
            shape,
            strides,
            offset: self.offset,
        })
    }

    /// Views this tensor as `target` shape, repeating broadcast axes with
    /// stride 0. No data is copied; the view aliases the source elements.
    pub fn broadcast_to(&self, target: &[usize]) -> Result<Self> {
        let joined = broadcast_shape(&self.shape, target)?;
        if joined.as_slice() != target {
            return Err(Error::broadcast(&self.shape, target));
        }

        Ok(Self {
            storage: self.storage.clone(),
            shape: Shape::from_slice(target),
            strides: broadcast_strides(&self.shape, &self.strides, target),
            offset: self.offset,
        })
    }
}

// =============================================================================
// Elementwise Arithmetic
// =============================================================================

impl<T: Numeric> Tensor<T> {
    /// Applies a broadcasting binary operation. `kernel` handles the
    /// contiguous same-shape fast path; `combine` handles the general
    /// strided walk.
    fn broadcast_binary(
        &self,
        other: &Self,
        kernel: fn(&mut [T], &[T], &[T]),
        combine: impl Fn(T, T) -> T,
    ) -> Result<Self> {
        let out_shape = broadcast_shape(&self.shape, &other.shape)?;
        let n = numel(&out_shape);

        if self.shape == out_shape
            && other.shape == out_shape
            && self.is_contiguous()
            && other.is_contiguous()
        {
            let a = self.storage.as_slice();
            let b = other.storage.as_slice();
            let mut out = vec![T::ZERO; n];
            kernel(
                &mut out,
                &a[self.offset..self.offset + n],
                &b[other.offset..other.offset + n],
            );
            drop((a, b));
            return Self::from_vec(out, &out_shape);
        }

        let strides_a = broadcast_strides(&self.shape, &self.strides, &out_shape);
        let strides_b = broadcast_strides(&other.shape, &other.strides, &out_shape);
        let a = self.storage.as_slice();
        let b = other.storage.as_slice();

        let mut out = Vec::with_capacity(n);
        for lin in 0..n {
            let idx = unravel_index(lin, &out_shape);
            let pa = self.offset as isize + linear_index(&idx, &strides_a);
            let pb = other.offset as isize + linear_index(&idx, &strides_b);
            out.push(combine(a[pa as usize], b[pb as usize]));
        }
        drop((a, b));

        Self::from_vec(out, &out_shape)
    }

    /// Elementwise addition with broadcasting.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.broadcast_binary(other, kernels::add, |a, b| a + b)
    }

    /// Elementwise subtraction with broadcasting.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.broadcast_binary(other, kernels::sub, |a, b| a - b)
    }

    /// Elementwise multiplication with broadcasting.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.broadcast_binary(other, kernels::mul, |a, b| a * b)
    }

    /// Elementwise division with broadcasting. Division by zero follows
    /// IEEE semantics for floating-point element types.
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.broadcast_binary(other, kernels::div, |a, b| a / b)
    }

    /// Adds a scalar to every element.
    #[must_use]
    pub fn add_scalar(&self, value: T) -> Self {
        self.map_kernel(|dst, src| kernels::add_scalar(dst, src, value))
    }

    /// Subtracts a scalar from every element.
    #[must_use]
    pub fn sub_scalar(&self, value: T) -> Self {
        self.map_kernel(|dst, src| kernels::sub_scalar(dst, src, value))
    }

    /// Multiplies every element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, value: T) -> Self {
        self.map_kernel(|dst, src| kernels::mul_scalar(dst, src, value))
    }

    /// Divides every element by a scalar (IEEE semantics for zero).
    #[must_use]
    pub fn div_scalar(&self, value: T) -> Self {
        self.map_kernel(|dst, src| kernels::div_scalar(dst, src, value))
    }

    /// Negates every element.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.map_kernel(kernels::neg)
    }

    fn map_kernel(&self, kernel: impl Fn(&mut [T], &[T])) -> Self {
        let src = self.to_vec();
        let mut out = vec![T::ZERO; src.len()];
        kernel(&mut out, &src);
        Self {
            storage: Storage::from_vec(out),
            shape: self.shape.clone(),
            strides: contiguous_strides(&self.shape),
            offset: 0,
        }
    }
}

// =============================================================================
// Reductions
// =============================================================================

impl<T: Numeric> Tensor<T> {
    /// Sums all elements. The empty tensor sums to zero.
    #[must_use]
    pub fn sum(&self) -> T {
        if self.is_contiguous() {
            let data = self.storage.as_slice();
            return kernels::sum(&data[self.offset..self.offset + self.numel()]);
        }
        kernels::sum(&self.to_vec())
    }

    /// Returns the largest element.
    ///
    /// # Errors
    /// Fails with an empty-reduction error on an empty tensor: max has no
    /// identity value.
    pub fn max(&self) -> Result<T> {
        kernels::max(&self.to_vec()).ok_or(Error::EmptyReduction { op: "max" })
    }

    /// Returns the smallest element.
    pub fn min(&self) -> Result<T> {
        kernels::min(&self.to_vec()).ok_or(Error::EmptyReduction { op: "min" })
    }

    /// Sums over an axis set. Reduced axes keep extent 1 when `keep_axes`
    /// is set and disappear otherwise. A zero reduced extent yields the
    /// identity 0.
    pub fn sum_axes(&self, axes: &[usize], keep_axes: bool) -> Result<Self> {
        self.reduce_axes(axes, keep_axes, Some(T::ZERO), "sum", |acc, v| acc + v)
    }

    /// Maximum over an axis set.
    ///
    /// # Errors
    /// Fails with an empty-reduction error when a reduced extent is zero and
    /// output cells would need a value.
    pub fn max_axes(&self, axes: &[usize], keep_axes: bool) -> Result<Self> {
        self.reduce_axes(axes, keep_axes, None, "max", |acc, v| {
            if v > acc {
                v
            } else {
                acc
            }
        })
    }

    /// Minimum over an axis set. Same empty-extent contract as
    /// [`Tensor::max_axes`].
    pub fn min_axes(&self, axes: &[usize], keep_axes: bool) -> Result<Self> {
        self.reduce_axes(axes, keep_axes, None, "min", |acc, v| {
            if v < acc {
                v
            } else {
                acc
            }
        })
    }

    /// Folds the elements of every reduced slice into its output cell.
    /// `identity = None` means the fold seeds from the first element and an
    /// empty slice is a contract violation.
    fn reduce_axes(
        &self,
        axes: &[usize],
        keep_axes: bool,
        identity: Option<T>,
        op: &'static str,
        combine: impl Fn(T, T) -> T,
    ) -> Result<Self> {
        validate_axes(axes, self.ndim())?;

        let out_shape = reduce_shape(&self.shape, axes, keep_axes);
        let out_numel = numel(&out_shape);
        let slice_len: usize = axes.iter().map(|&a| self.shape[a]).product();

        if identity.is_none() && slice_len == 0 && out_numel > 0 {
            return Err(Error::EmptyReduction { op });
        }

        // Map each input axis to the stride of its output cell.
        let out_cstrides = contiguous_strides(&out_shape);
        let mut cell_strides = Strides::from_elem(0, self.ndim());
        let mut o = 0;
        for i in 0..self.ndim() {
            if axes.contains(&i) {
                if keep_axes {
                    o += 1;
                }
            } else {
                cell_strides[i] = out_cstrides[o];
                o += 1;
            }
        }

        let mut out = vec![identity.unwrap_or(T::ZERO); out_numel];
        let mut seeded = vec![identity.is_some(); out_numel];
        let data = self.storage.as_slice();

        for lin in 0..self.numel() {
            let idx = unravel_index(lin, &self.shape);
            let src = self.offset as isize + linear_index(&idx, &self.strides);
            let dst = linear_index(&idx, &cell_strides) as usize;
            let v = data[src as usize];
            if seeded[dst] {
                out[dst] = combine(out[dst], v);
            } else {
                out[dst] = v;
                seeded[dst] = true;
            }
        }
        drop(data);

        Self::from_vec(out, &out_shape)
    }
}

impl<T: Float> Tensor<T> {
    /// Mean of all elements. The empty tensor yields the IEEE result of
    /// 0/0 (NaN).
    #[must_use]
    pub fn mean(&self) -> T {
        self.sum() / T::from_usize(self.numel())
    }

    /// Mean over an axis set. A zero reduced extent yields NaN cells
    /// (IEEE 0/0), propagated rather than raised.
    pub fn mean_axes(&self, axes: &[usize], keep_axes: bool) -> Result<Self> {
        let totals = self.sum_axes(axes, keep_axes)?;
        let slice_len: usize = axes.iter().map(|&a| self.shape[a]).product();
        Ok(totals.div_scalar(T::from_usize(slice_len)))
    }
}

// =============================================================================
// Operator Sugar
// =============================================================================

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $op:ident) => {
        impl<T: Numeric> core::ops::$trait<&Tensor<T>> for &Tensor<T> {
            type Output = Tensor<T>;

            /// # Panics
            /// Panics when the operand shapes are not broadcast-compatible;
            /// use the named method for a fallible version.
            fn $method(self, rhs: &Tensor<T>) -> Tensor<T> {
                self.$op(rhs).expect("operand shapes must broadcast")
            }
        }
    };
}

impl_binop!(Add, add, add);
impl_binop!(Sub, sub, sub);
impl_binop!(Mul, mul, mul);
impl_binop!(Div, div, div);

impl<T: Numeric> core::ops::Neg for &Tensor<T> {
    type Output = Tensor<T>;

    fn neg(self) -> Tensor<T> {
        Tensor::neg(self)
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: Scalar> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape.as_slice())
            .field("strides", &self.strides.as_slice())
            .field("data", &self.to_vec())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

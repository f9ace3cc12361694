//! Shape and Strides - Array Dimension Management
//!
//! Types and functions for shapes, strides, and broadcasting. A shape gives
//! the extent of each logical axis; strides give the storage offset delta
//! per unit step along each axis. Row-major layout: the last axis varies
//! fastest, `stride[i] = product(shape[i+1..])` when contiguous. Arbitrary
//! strides describe views (transposes, stride-0 broadcasts) without copying.
//!
//! # Key Features
//! - Small-vector shape representation (inline up to 6 axes)
//! - Row-major stride computation and contiguity checks
//! - NumPy-compatible broadcast rules
//! - Reshape resolution with a single inferred (-1) axis
//!
//! @version 0.1.0
//! @author Tensoric Contributors

use smallvec::SmallVec;

use tensoric_core::error::{Error, Result};

// =============================================================================
// Type Aliases
// =============================================================================

/// Shape type - extents of an array, one entry per axis.
/// Uses `SmallVec` for stack allocation of small shapes (up to 6 axes).
pub type Shape = SmallVec<[usize; 6]>;

/// Strides type - storage step per unit index along each axis.
pub type Strides = SmallVec<[isize; 6]>;

// =============================================================================
// Shape Utilities
// =============================================================================

/// Computes the total number of elements for a shape.
///
/// The empty shape (rank 0) holds one element; a zero extent anywhere makes
/// the array empty.
#[must_use]
pub fn numel(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Computes row-major (C-order) strides for a shape.
#[must_use]
pub fn contiguous_strides(shape: &[usize]) -> Strides {
    let mut strides = Strides::from_elem(0, shape.len());
    let mut step = 1isize;

    for (out, &extent) in strides.iter_mut().zip(shape.iter()).rev() {
        *out = step;
        step *= extent as isize;
    }

    strides
}

/// Checks whether the given strides describe a contiguous row-major layout
/// for the shape.
#[must_use]
pub fn is_contiguous(shape: &[usize], strides: &[isize]) -> bool {
    strides == contiguous_strides(shape).as_slice()
}

/// Resolves a logical index tuple to a flat storage offset.
///
/// The caller adds the array's base offset; indices must already be
/// validated against the shape.
#[must_use]
pub fn linear_index(indices: &[usize], strides: &[isize]) -> isize {
    debug_assert_eq!(indices.len(), strides.len());

    indices
        .iter()
        .zip(strides.iter())
        .map(|(&idx, &stride)| idx as isize * stride)
        .sum()
}

/// Converts a flat logical position into a multi-axis index tuple for the
/// given shape (row-major order).
#[must_use]
pub fn unravel_index(mut linear: usize, shape: &[usize]) -> Shape {
    let mut indices = Shape::from_elem(0, shape.len());

    for (out, &extent) in indices.iter_mut().zip(shape.iter()).rev() {
        *out = linear % extent;
        linear /= extent;
    }

    indices
}

// =============================================================================
// Broadcasting
// =============================================================================

/// Computes the broadcast shape of two shapes.
///
/// NumPy rules: shapes align from the trailing axis; a pair of extents is
/// compatible when equal or when one of them is 1; missing leading axes act
/// as extent 1. Mismatched non-1 extents fail with a broadcast error.
pub fn broadcast_shape(shape1: &[usize], shape2: &[usize]) -> Result<Shape> {
    let rank = shape1.len().max(shape2.len());
    let mut result = Shape::from_elem(0, rank);

    for i in 0..rank {
        let d1 = extent_from_right(shape1, i);
        let d2 = extent_from_right(shape2, i);

        result[rank - 1 - i] = match (d1, d2) {
            (a, b) if a == b => a,
            (1, b) => b,
            (a, 1) => a,
            _ => return Err(Error::broadcast(shape1, shape2)),
        };
    }

    Ok(result)
}

fn extent_from_right(shape: &[usize], i: usize) -> usize {
    if i < shape.len() {
        shape[shape.len() - 1 - i]
    } else {
        1
    }
}

/// Computes strides for viewing `shape`/`strides` as `target_shape`, using
/// stride 0 on every broadcast axis so the same element repeats along it.
///
/// `target_shape` must come from [`broadcast_shape`] against `shape`.
#[must_use]
pub fn broadcast_strides(shape: &[usize], strides: &[isize], target_shape: &[usize]) -> Strides {
    let lead = target_shape.len() - shape.len();
    let mut result = Strides::from_elem(0, target_shape.len());

    for (i, out) in result.iter_mut().enumerate().skip(lead) {
        let extent = shape[i - lead];
        if extent == target_shape[i] {
            *out = strides[i - lead];
        }
        // extent == 1 on a broadcast axis keeps stride 0
    }

    result
}

/// Checks whether two shapes are broadcast-compatible.
#[must_use]
pub fn can_broadcast(shape1: &[usize], shape2: &[usize]) -> bool {
    broadcast_shape(shape1, shape2).is_ok()
}

// =============================================================================
// Shape Manipulation
// =============================================================================

/// Resolves a reshape request, validating that element counts match.
///
/// One entry may be -1 to infer that axis from the remaining extents.
pub fn resolve_reshape(old_shape: &[usize], new_shape: &[isize]) -> Result<Shape> {
    let old_numel = numel(old_shape);
    let mut result = Shape::with_capacity(new_shape.len());
    let mut infer_at = None;
    let mut known = 1usize;

    for (i, &extent) in new_shape.iter().enumerate() {
        match extent {
            -1 => {
                if infer_at.is_some() {
                    return Err(Error::invalid_operation(
                        "reshape accepts at most one inferred (-1) axis",
                    ));
                }
                infer_at = Some(i);
                result.push(0);
            }
            e if e < 0 => {
                return Err(Error::invalid_operation(format!(
                    "reshape axis extent must be non-negative, got {e}"
                )));
            }
            e => {
                known *= e as usize;
                result.push(e as usize);
            }
        }
    }

    if let Some(i) = infer_at {
        if known == 0 || old_numel % known != 0 {
            return Err(Error::invalid_operation(
                "cannot infer reshape axis: element count not divisible",
            ));
        }
        result[i] = old_numel / known;
    } else if known != old_numel {
        return Err(Error::shape_mismatch(old_shape, &result));
    }

    Ok(result)
}

/// Computes the shape after removing size-1 axes.
///
/// With `axis = Some(a)` only that axis is removed (when its extent is 1);
/// with `None` every size-1 axis goes.
#[must_use]
pub fn squeeze(shape: &[usize], axis: Option<usize>) -> Shape {
    match axis {
        Some(a) => {
            let mut result = Shape::from_slice(shape);
            if a < shape.len() && shape[a] == 1 {
                result.remove(a);
            }
            result
        }
        None => shape.iter().copied().filter(|&e| e != 1).collect(),
    }
}

/// Computes the shape after inserting a size-1 axis at `axis`.
pub fn unsqueeze(shape: &[usize], axis: usize) -> Result<Shape> {
    if axis > shape.len() {
        return Err(Error::InvalidAxis {
            axis: axis as i64,
            ndim: shape.len(),
        });
    }

    let mut result = Shape::with_capacity(shape.len() + 1);
    result.extend_from_slice(&shape[..axis]);
    result.push(1);
    result.extend_from_slice(&shape[axis..]);
    Ok(result)
}

/// Computes the reduced output shape for a set of axes.
///
/// Reduced axes become extent 1 when `keep_axes` is set and disappear
/// otherwise. `axes` must be validated and duplicate-free.
#[must_use]
pub fn reduce_shape(shape: &[usize], axes: &[usize], keep_axes: bool) -> Shape {
    let mut result = Shape::new();
    for (i, &extent) in shape.iter().enumerate() {
        if axes.contains(&i) {
            if keep_axes {
                result.push(1);
            }
        } else {
            result.push(extent);
        }
    }
    result
}

// =============================================================================
// Validation
// =============================================================================

/// Normalizes an axis index, supporting negative indexing from the end.
pub fn normalize_axis(axis: i64, ndim: usize) -> Result<usize> {
    let rank = ndim as i64;
    let resolved = if axis < 0 { axis + rank } else { axis };

    if resolved < 0 || resolved >= rank {
        return Err(Error::InvalidAxis { axis, ndim });
    }

    Ok(resolved as usize)
}

/// Validates a reduction axis set: every axis in range, no duplicates.
pub fn validate_axes(axes: &[usize], ndim: usize) -> Result<()> {
    for (i, &axis) in axes.iter().enumerate() {
        if axis >= ndim {
            return Err(Error::InvalidAxis {
                axis: axis as i64,
                ndim,
            });
        }
        if axes[..i].contains(&axis) {
            return Err(Error::invalid_operation(format!(
                "duplicate axis {axis} in axis set"
            )));
        }
    }
    Ok(())
}

/// Validates that an index tuple is in bounds for a shape.
pub fn validate_indices(indices: &[usize], shape: &[usize]) -> Result<()> {
    if indices.len() != shape.len() {
        return Err(Error::rank_mismatch(shape.len(), indices.len()));
    }

    for (&idx, &extent) in indices.iter().zip(shape.iter()) {
        if idx >= extent {
            return Err(Error::IndexOutOfBounds {
                index: idx,
                size: extent,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

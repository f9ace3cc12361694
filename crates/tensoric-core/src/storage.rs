//! Storage - Raw Memory Management for Arrays
//!
//! Provides the contiguous buffer that underlies every array. Storage is
//! reference-counted so views share one allocation, and interior access goes
//! through read/write guards so aliased views never observe a torn buffer.
//!
//! Concurrent writes through overlapping views are the caller's
//! responsibility to serialize; the guards prevent torn access, not logical
//! races.
//!
//! # Key Features
//! - Reference-counted memory for zero-copy views
//! - Checked allocation against addressable-memory limits
//! - Zero-copy slicing through offset/length windows
//!
//! # Example
//! ```rust
//! use tensoric_core::Storage;
//!
//! let storage = Storage::<f64>::zeros(100);
//! assert_eq!(storage.len(), 100);
//! ```
//!
//! @version 0.1.0
//! @author Tensoric Contributors

use core::ops::{Deref, DerefMut};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::scalar::Scalar;

// =============================================================================
// Storage Struct
// =============================================================================

/// Raw memory storage for array data.
///
/// Storage manages a contiguous block of elements and is reference-counted
/// to allow efficient sharing between array views. Each handle addresses an
/// (offset, len) window of the shared buffer.
#[derive(Debug)]
pub struct Storage<T: Scalar> {
    /// The underlying data buffer, shared between views.
    inner: Arc<RwLock<Vec<T>>>,
    /// Offset into the buffer (for views).
    offset: usize,
    /// Number of elements in this view.
    len: usize,
}

impl<T: Scalar> Storage<T> {
    /// Creates new storage with the given length, initialized to the default
    /// element value (zero for all numeric types).
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self::from_vec(vec![T::default(); len])
    }

    /// Creates new zeroed storage, validating the request against the
    /// addressable-memory limit.
    ///
    /// # Errors
    /// Returns [`Error::AllocationFailed`] when the byte size overflows or
    /// exceeds `isize::MAX`.
    pub fn try_zeros(len: usize) -> Result<Self> {
        let bytes = len
            .checked_mul(core::mem::size_of::<T>())
            .ok_or(Error::AllocationFailed { size: usize::MAX })?;
        if bytes > isize::MAX as usize {
            return Err(Error::AllocationFailed { size: bytes });
        }
        Ok(Self::zeros(len))
    }

    /// Creates storage from an existing vector without copying.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        let len = data.len();
        Self {
            inner: Arc::new(RwLock::new(data)),
            offset: 0,
            len,
        }
    }

    /// Creates storage from a slice by copying the data.
    #[must_use]
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Returns the number of elements in this storage view.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the storage is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the offset into the underlying buffer.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the size in bytes of this storage view.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.len * core::mem::size_of::<T>()
    }

    /// Creates a view into a portion of this storage.
    ///
    /// # Arguments
    /// * `offset` - Starting offset relative to this view
    /// * `len` - Number of elements in the new view
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if the window exceeds the
    /// borrowed region.
    pub fn slice(&self, offset: usize, len: usize) -> Result<Self> {
        if offset + len > self.len {
            return Err(Error::IndexOutOfBounds {
                index: offset + len,
                size: self.len,
            });
        }

        Ok(Self {
            inner: Arc::clone(&self.inner),
            offset: self.offset + offset,
            len,
        })
    }

    /// Returns true if this storage is uniquely owned (not shared).
    #[must_use]
    pub fn is_unique(&self) -> bool {
        Arc::strong_count(&self.inner) == 1
    }

    /// Returns an immutable view of the data in this window.
    #[must_use]
    pub fn as_slice(&self) -> StorageReadGuard<'_, T> {
        StorageReadGuard {
            guard: self.inner.read(),
            offset: self.offset,
            len: self.len,
        }
    }

    /// Returns a mutable view of the data in this window.
    #[must_use]
    pub fn as_slice_mut(&self) -> StorageWriteGuard<'_, T> {
        StorageWriteGuard {
            guard: self.inner.write(),
            offset: self.offset,
            len: self.len,
        }
    }

    /// Copies data from another storage window into this one.
    ///
    /// # Errors
    /// Returns a shape mismatch error if lengths differ.
    pub fn copy_from(&self, other: &Self) -> Result<()> {
        if self.len != other.len {
            return Err(Error::shape_mismatch(&[self.len], &[other.len]));
        }

        let src = other.as_slice().to_vec();
        let mut dst = self.as_slice_mut();
        dst.copy_from_slice(&src);
        Ok(())
    }

    /// Makes a deep copy of this storage window.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        let data = self.as_slice().to_vec();
        Self::from_vec(data)
    }
}

impl<T: Scalar> Clone for Storage<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            offset: self.offset,
            len: self.len,
        }
    }
}

// =============================================================================
// Guard Types for Safe Access
// =============================================================================

/// Read guard for storage data.
pub struct StorageReadGuard<'a, T: Scalar> {
    guard: parking_lot::RwLockReadGuard<'a, Vec<T>>,
    offset: usize,
    len: usize,
}

impl<T: Scalar> Deref for StorageReadGuard<'_, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.guard[self.offset..self.offset + self.len]
    }
}

/// Write guard for storage data.
pub struct StorageWriteGuard<'a, T: Scalar> {
    guard: parking_lot::RwLockWriteGuard<'a, Vec<T>>,
    offset: usize,
    len: usize,
}

impl<T: Scalar> Deref for StorageWriteGuard<'_, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.guard[self.offset..self.offset + self.len]
    }
}

impl<T: Scalar> DerefMut for StorageWriteGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.guard[self.offset..self.offset + self.len]
    }
}

// =============================================================================
// Tests
// =============================================================================

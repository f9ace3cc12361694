//! End-to-end integration test for the entire Tensoric engine.
//! This test simulates what a real user would do.

use tensoric::prelude::*;

fn assert_all_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!((a - e).abs() < tol, "expected {e}, got {a}");
    }
}

/// Test 1: Basic tensor operations work
#[test]
fn test_tensor_operations() {
    let a = Tensor::<f64>::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    let b = Tensor::<f64>::from_vec(vec![5.0, 6.0, 7.0, 8.0], &[2, 2]).unwrap();

    let c = a.add(&b).unwrap();
    assert_eq!(c.to_vec(), vec![6.0, 8.0, 10.0, 12.0]);

    let d = a.mul(&b).unwrap();
    assert_eq!(d.to_vec(), vec![5.0, 12.0, 21.0, 32.0]);

    let e = a.mul_scalar(3.0).sub(&a).unwrap();
    assert_eq!(e.to_vec(), vec![2.0, 4.0, 6.0, 8.0]);

    println!("✓ Tensor operations work");
}

/// Test 2: Broadcasting aligns shapes from the right
#[test]
fn test_broadcasting() {
    // (2, 3) + (3,): the vector repeats across rows.
    let m = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    let v = Tensor::from_vec(vec![10.0, 20.0, 30.0], &[3]).unwrap();

    let sum = m.add(&v).unwrap();
    assert_eq!(sum.shape(), &[2, 3]);
    assert_eq!(sum.to_vec(), vec![11.0, 22.0, 33.0, 14.0, 25.0, 36.0]);

    // Explicit broadcast gives the same result as the implicit one.
    let expanded = v.broadcast_to(&[2, 3]).unwrap();
    assert_eq!(m.add(&expanded).unwrap().to_vec(), sum.to_vec());

    // (2, 1) * (1, 3) -> (2, 3)
    let col = Tensor::from_vec(vec![1.0, 2.0], &[2, 1]).unwrap();
    let row = Tensor::from_vec(vec![3.0, 4.0, 5.0], &[1, 3]).unwrap();
    let prod = col.mul(&row).unwrap();
    assert_eq!(prod.to_vec(), vec![3.0, 4.0, 5.0, 6.0, 8.0, 10.0]);

    // Incompatible trailing extents fail.
    let bad = Tensor::<f64>::zeros(&[4]);
    assert!(matches!(m.add(&bad), Err(Error::BroadcastError { .. })));

    println!("✓ Broadcasting works");
}

/// Test 3: Float division follows IEEE-754
#[test]
fn test_ieee_division() {
    let num = Tensor::from_vec(vec![1.0, -1.0, 0.0], &[3]).unwrap();
    let den = Tensor::<f64>::zeros(&[3]);
    let q = num.div(&den).unwrap();

    assert_eq!(q.get(&[0]).unwrap(), f64::INFINITY);
    assert_eq!(q.get(&[1]).unwrap(), f64::NEG_INFINITY);
    assert!(q.get(&[2]).unwrap().is_nan());

    println!("✓ IEEE division semantics work");
}

/// Test 4: Views share storage; copies do not
#[test]
fn test_views_and_aliasing() {
    let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();

    // Reshape of a contiguous tensor is a view: writes show through.
    let r = t.reshape(&[3, 2]).unwrap();
    r.set(&[0, 0], 99.0).unwrap();
    assert_eq!(t.get(&[0, 0]).unwrap(), 99.0);

    // Transpose is always a view.
    let tt = t.transpose(0, 1).unwrap();
    assert_eq!(tt.shape(), &[3, 2]);
    assert_eq!(tt.get(&[2, 1]).unwrap(), t.get(&[1, 2]).unwrap());

    // Transpose twice restores the original layout.
    let back = tt.transpose(0, 1).unwrap();
    assert_eq!(back.shape(), t.shape());
    assert_eq!(back.to_vec(), t.to_vec());

    // A deep copy is independent.
    let copy = t.clone_deep();
    copy.set(&[0, 0], 0.0).unwrap();
    assert_eq!(t.get(&[0, 0]).unwrap(), 99.0);

    println!("✓ Views and aliasing work");
}

/// Test 5: Reshape round trip preserves contents
#[test]
fn test_reshape_roundtrip() {
    let data: Vec<f64> = (0..24).map(f64::from).collect();
    let t = Tensor::from_vec(data.clone(), &[2, 3, 4]).unwrap();

    let flat = t.reshape(&[-1]).unwrap();
    assert_eq!(flat.shape(), &[24]);

    let back = flat.reshape(&[2, 3, 4]).unwrap();
    assert_eq!(back.to_vec(), data);

    // Reshape of a non-contiguous view copies instead.
    let perm = t.permute(&[2, 0, 1]).unwrap();
    assert!(!perm.is_contiguous());
    let reshaped = perm.reshape(&[-1]).unwrap();
    assert_eq!(reshaped.to_vec(), perm.to_vec());

    println!("✓ Reshape round trip works");
}

/// Test 6: Reductions over whole tensors and axis sets
#[test]
fn test_reductions() {
    let t: Tensor<f64> =
        Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();

    assert_eq!(t.sum(), 21.0);
    assert_eq!(t.max().unwrap(), 6.0);
    assert_eq!(t.min().unwrap(), 1.0);
    assert!((t.mean() - 3.5).abs() < 1e-12);

    let rows = t.sum_axes(&[1], false).unwrap();
    assert_eq!(rows.shape(), &[2]);
    assert_eq!(rows.to_vec(), vec![6.0, 15.0]);

    let cols = t.max_axes(&[0], true).unwrap();
    assert_eq!(cols.shape(), &[1, 3]);
    assert_eq!(cols.to_vec(), vec![4.0, 5.0, 6.0]);

    let all = t.sum_axes(&[0, 1], false).unwrap();
    assert_eq!(all.item().unwrap(), 21.0);

    println!("✓ Reductions work");
}

/// Test 7: Empty reductions - sum has an identity, max and min do not
#[test]
fn test_empty_reductions() {
    let empty = Tensor::<f64>::zeros(&[0]);

    assert_eq!(empty.sum(), 0.0);
    assert!(matches!(empty.max(), Err(Error::EmptyReduction { .. })));
    assert!(matches!(empty.min(), Err(Error::EmptyReduction { .. })));
    assert!(empty.mean().is_nan());

    // Reducing the zero-length axis of a (0, 3) tensor: sum yields zeros,
    // max has no identity to fall back on.
    let matrix = Tensor::<f64>::zeros(&[0, 3]);
    let s = matrix.sum_axes(&[0], false).unwrap();
    assert_eq!(s.to_vec(), vec![0.0, 0.0, 0.0]);
    assert!(matrix.max_axes(&[0], false).is_err());

    // Reducing the other axis produces an empty result, which is fine.
    let m = matrix.max_axes(&[1], false).unwrap();
    assert_eq!(m.shape(), &[0]);

    println!("✓ Empty reduction semantics work");
}

/// Test 8: Matrix multiplication and its dimension checks
#[test]
fn test_matmul() {
    let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    let b = Tensor::from_vec(
        vec![
            7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0,
        ],
        &[3, 4],
    )
    .unwrap();

    let c = matmul(&a, &b).unwrap();
    assert_eq!(c.shape(), &[2, 4]);
    assert_eq!(c.get(&[0, 0]).unwrap(), 74.0);

    // (2, 3) @ (4, 5) fails with the mismatched inner extents.
    let bad = Tensor::<f64>::zeros(&[4, 5]);
    assert!(matches!(
        matmul(&a, &bad),
        Err(Error::DimensionMismatch { lhs: 3, rhs: 4 })
    ));

    // Multiplying through a transposed view works without a copy.
    let at = a.t().unwrap();
    let g = matmul(&at, &a).unwrap();
    assert_eq!(g.shape(), &[3, 3]);
    assert_eq!(g.get(&[0, 0]).unwrap(), 17.0); // 1*1 + 4*4

    println!("✓ Matrix multiplication works");
}

/// Test 9: Batched matmul broadcasts leading batch axes
#[test]
fn test_batched_matmul() {
    let scales = [1.0, 2.0, 3.0];
    let eye2 = eye::<f64>(2);
    let batch = stack(
        &[
            eye2.mul_scalar(scales[0]),
            eye2.mul_scalar(scales[1]),
            eye2.mul_scalar(scales[2]),
        ],
        0,
    )
    .unwrap();
    assert_eq!(batch.shape(), &[3, 2, 2]);

    // (3, 2, 2) @ (2, 2): the single right-hand matrix repeats.
    let b = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    let c = matmul(&batch, &b).unwrap();
    assert_eq!(c.shape(), &[3, 2, 2]);
    for (i, &s) in scales.iter().enumerate() {
        assert_eq!(c.get(&[i, 0, 0]).unwrap(), s);
        assert_eq!(c.get(&[i, 1, 1]).unwrap(), 4.0 * s);
    }

    // Incompatible batch axes fail as a broadcast error.
    let other = Tensor::<f64>::zeros(&[2, 2, 2]);
    assert!(matches!(
        matmul(&batch, &other),
        Err(Error::BroadcastError { .. })
    ));

    println!("✓ Batched matrix multiplication works");
}

/// Test 10: Vector products
#[test]
fn test_vector_products() {
    let a = Tensor::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
    let b = Tensor::from_vec(vec![4.0, 5.0, 6.0], &[3]).unwrap();

    assert_eq!(inner(&a, &b).unwrap(), 32.0);

    let o = outer(&a, &b).unwrap();
    assert_eq!(o.shape(), &[3, 3]);
    assert_eq!(o.get(&[2, 0]).unwrap(), 12.0);

    println!("✓ Vector products work");
}

/// Test 11: FFT of a known sequence and the round trip
#[test]
fn test_fft() {
    // fft([1,2,3,4]) = [10, -2+2i, -2, -2-2i]
    let x = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[4]).unwrap();
    let s = fft(&x).unwrap();
    assert_eq!(s.shape(), &[4, 2]);
    assert_all_close(
        &s.to_vec(),
        &[10.0, 0.0, -2.0, 2.0, -2.0, 0.0, -2.0, -2.0],
        1e-12,
    );

    // Round trip, including a non-power-of-two length.
    for n in [4usize, 5, 8, 7] {
        let data: Vec<f64> = (0..n).map(|i| (i as f64 * 0.71).sin() + 0.25).collect();
        let t = Tensor::from_vec(data.clone(), &[n]).unwrap();
        let back = ifft(&fft(&t).unwrap()).unwrap();
        assert_all_close(&real_part(&back).unwrap().to_vec(), &data, 1e-12);
        assert_all_close(&imag_part(&back).unwrap().to_vec(), &vec![0.0; n], 1e-12);
    }

    // Length 1 is the identity; length 0 is an error.
    let one = Tensor::from_vec(vec![42.0], &[1]).unwrap();
    assert_all_close(&fft(&one).unwrap().to_vec(), &[42.0, 0.0], 1e-12);
    assert!(matches!(
        fft(&Tensor::<f64>::zeros(&[0])),
        Err(Error::EmptyInput)
    ));

    println!("✓ FFT works");
}

/// Test 12: FFT linearity
#[test]
fn test_fft_linearity() {
    let x = Tensor::from_vec(vec![1.0, -2.0, 0.5, 3.0, -1.0, 2.5, 0.0, 4.0], &[8]).unwrap();
    let y = Tensor::from_vec(vec![2.0, 1.0, -1.0, 0.25, 3.0, -0.5, 1.5, -2.0], &[8]).unwrap();

    let combined = x.mul_scalar(3.0).add(&y.mul_scalar(-2.0)).unwrap();
    let lhs = fft(&combined).unwrap();

    let rhs = fft(&x)
        .unwrap()
        .mul_scalar(3.0)
        .add(&fft(&y).unwrap().mul_scalar(-2.0))
        .unwrap();

    assert_all_close(&lhs.to_vec(), &rhs.to_vec(), 1e-12);

    println!("✓ FFT linearity holds");
}

/// Test 13: 2-D and N-D transforms
#[test]
fn test_fft_nd() {
    let data: Vec<f64> = (0..12).map(|i| f64::from(i) * 0.5 - 2.0).collect();
    let x = Tensor::from_vec(data.clone(), &[3, 4]).unwrap();

    let back = ifft2(&fft2(&x).unwrap()).unwrap();
    assert_all_close(&real_part(&back).unwrap().to_vec(), &data, 1e-12);

    // Explicit axis-by-axis passes match the joint 2-D transform.
    let c = to_complex(&x).unwrap();
    let staged = fftn(&fftn(&c, &[1]).unwrap(), &[0]).unwrap();
    assert_all_close(&fft2(&x).unwrap().to_vec(), &staged.to_vec(), 1e-12);

    println!("✓ N-dimensional FFT works");
}

/// Test 14: Joining and rotating tensors
#[test]
fn test_join_and_rotate() {
    let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    let b = Tensor::from_vec(vec![5.0, 6.0, 7.0, 8.0], &[2, 2]).unwrap();

    let rows = concat(&[a.clone(), b.clone()], 0).unwrap();
    assert_eq!(rows.shape(), &[4, 2]);

    let cols = append(&a, &b, 1).unwrap();
    assert_eq!(cols.shape(), &[2, 4]);
    assert_eq!(cols.to_vec(), vec![1.0, 2.0, 5.0, 6.0, 3.0, 4.0, 7.0, 8.0]);

    let piled = stack(&[a.clone(), b], 0).unwrap();
    assert_eq!(piled.shape(), &[2, 2, 2]);

    // Four quarter turns restore the original matrix.
    let turned = a.rot90(1).unwrap().rot90(1).unwrap().rot90(1).unwrap().rot90(1).unwrap();
    assert_eq!(turned.to_vec(), a.to_vec());
    assert_eq!(a.rot90(4).unwrap().to_vec(), a.to_vec());
    assert_eq!(a.rot90(-1).unwrap().to_vec(), a.rot90(3).unwrap().to_vec());

    println!("✓ Concat, stack, append, and rot90 work");
}

/// Test 15: Creation helpers
#[test]
fn test_creation() {
    let r = arange::<f64>(0.0, 5.0, 1.0);
    assert_eq!(r.to_vec(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);

    let l = linspace::<f64>(0.0, 1.0, 5);
    assert_all_close(&l.to_vec(), &[0.0, 0.25, 0.5, 0.75, 1.0], 1e-12);

    let i = eye::<f64>(3);
    assert_eq!(i.get(&[1, 1]).unwrap(), 1.0);
    assert_eq!(i.get(&[1, 2]).unwrap(), 0.0);
    assert_eq!(i.sum(), 3.0);

    println!("✓ Creation helpers work");
}

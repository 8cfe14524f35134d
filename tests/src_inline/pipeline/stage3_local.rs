use super::*;

#[test]
fn test_identical_densities_give_zero() {
    let density = [0.5, 1.0, 2.0, 0.25];
    let curve = compute_local_d(&density, &density, 1.0).unwrap();
    assert_eq!(curve.d, vec![0.0; 4]);
    assert_eq!(curve.likelihood_ratio, vec![1.0; 4]);
}

#[test]
fn test_zero_non_mated_is_fully_linkable() {
    let mated = [0.0, 0.3, 2.0];
    let non_mated = [0.0, 0.0, 0.0];
    let curve = compute_local_d(&mated, &non_mated, 1.0).unwrap();
    assert_eq!(curve.d, vec![1.0; 3]);
    assert!(curve.likelihood_ratio.iter().all(|v| v.is_infinite()));
}

#[test]
fn test_zero_non_mated_overrides_clip() {
    // Both densities 0: the clip rule would zero it, the support rule wins.
    let (_, d) = local_d(0.0, 0.0, 1.0);
    assert_eq!(d, 1.0);
    let (_, d) = local_d(0.0, 0.0, 1e-9);
    assert_eq!(d, 1.0);
}

#[test]
fn test_local_d_formula() {
    let (lr, d) = local_d(3.0, 1.0, 1.0);
    assert_eq!(lr, 3.0);
    assert!((d - 0.5).abs() < 1e-12);

    let (_, d) = local_d(1.0, 1.0, 4.0);
    assert!((d - 0.6).abs() < 1e-12);

    let (_, d) = local_d(1.0, 2.0, 1.0);
    assert_eq!(d, 0.0);

    let (_, d) = local_d(2.0, 1.0, 0.5);
    assert_eq!(d, 0.0);
}

#[test]
fn test_d_is_bounded_and_finite() {
    let mated = [0.0, 1e-300, 1.0, 1e300, 5.0, 0.0];
    let non_mated = [1.0, 1e-300, 1e-300, 1.0, 0.0, 0.0];
    for omega in [1e-6, 0.5, 1.0, 3.0, 1e6] {
        let curve = compute_local_d(&mated, &non_mated, omega).unwrap();
        for &v in &curve.d {
            assert!(v.is_finite());
            assert!((0.0..=1.0).contains(&v));
        }
    }
}

#[test]
fn test_monotonic_in_omega() {
    let mated = [0.1, 0.5, 1.0, 2.0, 4.0, 0.0, 3.0];
    let non_mated = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0];
    let omegas = [0.1, 0.5, 1.0, 1.5, 2.0, 10.0, 100.0];
    let mut prev = compute_local_d(&mated, &non_mated, omegas[0]).unwrap().d;
    for &omega in &omegas[1..] {
        let next = compute_local_d(&mated, &non_mated, omega).unwrap().d;
        for (a, b) in prev.iter().zip(&next) {
            assert!(b >= a);
        }
        prev = next;
    }
}

#[test]
fn test_rejects_length_mismatch() {
    assert!(matches!(
        compute_local_d(&[1.0, 2.0], &[1.0], 1.0),
        Err(EvalError::InvalidInput(_))
    ));
}

#[test]
fn test_rejects_bad_omega() {
    for omega in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            compute_local_d(&[1.0], &[1.0], omega),
            Err(EvalError::InvalidInput(_))
        ));
    }
}

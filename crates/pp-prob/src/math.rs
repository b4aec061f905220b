//! Numerical helpers shared by the distribution modules.

use pp_core::{Error, Result};

/// 5-point Gauss-Legendre nodes on `[-1, 1]`.
const GL5_NODES: [f64; 5] =
    [-0.906_179_845_938_664, -0.538_469_310_105_683_1, 0.0, 0.538_469_310_105_683_1, 0.906_179_845_938_664];

/// 5-point Gauss-Legendre weights matching [`GL5_NODES`].
const GL5_WEIGHTS: [f64; 5] = [
    0.236_926_885_056_189_1,
    0.478_628_670_499_366_5,
    0.568_888_888_888_888_9,
    0.478_628_670_499_366_5,
    0.236_926_885_056_189_1,
];

/// Panels used by [`owens_t`]. The integrand is smooth on a bounded interval,
/// so a fixed composite rule is accurate to ~1e-14 for moderate `|a|`.
const OWENS_T_PANELS: usize = 32;

/// Composite 5-point Gauss-Legendre quadrature of `f` over `[a, b]`.
pub fn gauss_legendre<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, panels: usize) -> f64 {
    let panels = panels.max(1);
    let width = (b - a) / panels as f64;
    let half = 0.5 * width;
    let mut acc = 0.0;
    for k in 0..panels {
        let mid = a + (k as f64 + 0.5) * width;
        for (x, w) in GL5_NODES.iter().zip(GL5_WEIGHTS.iter()) {
            acc += w * f(mid + half * x);
        }
    }
    acc * half
}

/// Owen's T function.
///
/// `T(h, a) = 1/(2π) ∫_0^a exp(-h²(1+x²)/2) / (1+x²) dx`
///
/// Odd in `a`, even in `h`.
pub fn owens_t(h: f64, a: f64) -> f64 {
    if a == 0.0 || !h.is_finite() {
        return 0.0;
    }
    if a < 0.0 {
        return -owens_t(h, -a);
    }
    let half_h2 = 0.5 * h * h;
    let integral = gauss_legendre(
        |x| {
            let one_x2 = 1.0 + x * x;
            (-half_h2 * one_x2).exp() / one_x2
        },
        0.0,
        a,
        OWENS_T_PANELS,
    );
    integral / (2.0 * std::f64::consts::PI)
}

/// Solve `f(x) = target` for a non-decreasing `f` by bisection.
///
/// Starts from `[lo, hi]` and widens the bracket (doubling its width) until it
/// contains the root. Stops once the bracket is narrower than `xtol`.
pub fn bisect_increasing<F: Fn(f64) -> f64>(
    f: F,
    target: f64,
    mut lo: f64,
    mut hi: f64,
    xtol: f64,
    max_iter: usize,
) -> Result<f64> {
    if lo.is_nan() || hi.is_nan() || lo >= hi {
        return Err(Error::Validation(format!("Invalid bracket: lo={} hi={}", lo, hi)));
    }

    let mut expand = 0usize;
    while f(lo) > target && expand < 64 {
        lo -= 2.0 * (hi - lo);
        expand += 1;
    }
    while f(hi) < target && expand < 128 {
        hi += 2.0 * (hi - lo);
        expand += 1;
    }
    if f(lo) > target || f(hi) < target {
        return Err(Error::Computation(format!(
            "Failed to bracket root for target {} after expansions",
            target
        )));
    }

    for _ in 0..max_iter {
        let mid = 0.5 * (lo + hi);
        if f(mid) < target {
            lo = mid;
        } else {
            hi = mid;
        }
        if (hi - lo) < xtol {
            break;
        }
    }

    Ok(0.5 * (lo + hi))
}

/// Check that `u` is a valid probability in `[0, 1]`.
pub fn check_unit(u: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&u) {
        return Err(Error::Validation(format!("probability must be in [0, 1], got {}", u)));
    }
    Ok(())
}

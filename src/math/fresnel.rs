//! Normalized Fresnel integrals.
//!
//! `S(x) = ∫₀ˣ sin(π t² / 2) dt` and `C(x) = ∫₀ˣ cos(π t² / 2) dt`.
//! Both are odd functions that tend to `±0.5` as `x → ±∞`.
use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::Complex;

/// Below this argument the power series is used, above it the continued fraction.
const SERIES_LIMIT: f64 = 1.5;

const MAX_ITERATIONS: u32 = 100;

const CONVERGENCE: f64 = 4.0 * f64::EPSILON;

/// Stand-in for zero in the modified Lentz recurrence.
const LENTZ_TINY: f64 = 1e-300;

/// Evaluates the Fresnel integral pair at `x`.
///
/// Returns `(S(x), C(x))`.
#[must_use]
pub fn fresnel(x: f64) -> (f64, f64) {
    let ax = x.abs();
    let (s, c) = if ax < LENTZ_TINY.sqrt() {
        (0.0, ax)
    } else if ax <= SERIES_LIMIT {
        power_series(ax)
    } else {
        continued_fraction(ax)
    };

    if x < 0.0 {
        (-s, -c)
    } else {
        (s, c)
    }
}

/// Sums the alternating Taylor series of both integrals in one pass.
///
/// Term `k` is `x (πx²/2)^k / (k! (2k+1))`; odd `k` feed `S`, even `k` feed `C`.
fn power_series(ax: f64) -> (f64, f64) {
    let factor = FRAC_PI_2 * ax * ax;
    let mut term = ax;
    let mut sum_s = 0.0;
    let mut sum_c = ax;

    for k in 1..=MAX_ITERATIONS {
        term *= factor / f64::from(k);
        let sign = if (k / 2) % 2 == 0 { 1.0 } else { -1.0 };
        let contribution = sign * term / f64::from(2 * k + 1);
        if k % 2 == 1 {
            sum_s += contribution;
        } else {
            sum_c += contribution;
        }
        if contribution.abs() < CONVERGENCE * (sum_s.abs() + sum_c.abs()) {
            break;
        }
    }

    (sum_s, sum_c)
}

/// Evaluates `C + iS` through the complementary error function, whose
/// continued fraction is summed with the modified Lentz method.
fn continued_fraction(ax: f64) -> (f64, f64) {
    let one = Complex::new(1.0, 0.0);
    let pix2 = PI * ax * ax;

    let mut b = Complex::new(1.0, -pix2);
    let mut c = Complex::new(1.0 / LENTZ_TINY, 0.0);
    let mut d = one / b;
    let mut h = d;
    let mut n: f64 = -1.0;

    for _ in 2..=MAX_ITERATIONS {
        n += 2.0;
        let a = -n * (n + 1.0);
        b += Complex::new(4.0, 0.0);
        d = one / (d * a + b);
        c = b + Complex::new(a, 0.0) / c;
        let delta = c * d;
        h *= delta;
        if (delta.re - 1.0).abs() + delta.im.abs() < CONVERGENCE {
            break;
        }
    }

    h *= Complex::new(ax, -ax);
    let phase = Complex::new((0.5 * pix2).cos(), (0.5 * pix2).sin());
    let cs = Complex::new(0.5, 0.5) * (one - phase * h);
    (cs.im, cs.re)
}

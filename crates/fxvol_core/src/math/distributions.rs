//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! All functions are generic over `T: Float` so the pricing formulas built on
//! top of them stay generic as well.
//!
//! The CDF uses the Hart (1968) rational approximation in the double-precision
//! form given by West (2005), accurate to roughly machine precision for `f64`.
//! That accuracy matters here: the implied-volatility solver divides price
//! residuals near 1e-5 by vega, so a 1e-7-accurate CDF would leak visible
//! error into the solved volatility.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// sqrt(2 * pi)
const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) using Hart's rational approximation
/// for the upper tail, reflected for negative arguments.
///
/// # Mathematical Definition
/// Φ(x) = (1 / sqrt(2π)) ∫_-∞^x e^(-t²/2) dt
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x) for standard normal X, in range [0, 1].
///
/// # Accuracy
/// Full double precision (relative error below 1e-15) when evaluated as
/// `f64`; the tail is truncated to exactly 0 or 1 beyond |x| = 37.
///
/// # Examples
/// ```
/// use fxvol_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0_f64) - 0.8413447460685429).abs() < 1e-15);
/// assert!(norm_cdf(-38.0_f64) == 0.0);
/// ```
pub fn norm_cdf<T: Float>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let half = T::from(0.5).unwrap();

    let z = x.abs();

    let upper_tail = if z > T::from(37.0).unwrap() {
        zero
    } else {
        let e = (-half * z * z).exp();

        if z < T::from(7.071_067_811_865_47).unwrap() {
            // Hart 1968 rational approximation, Horner form.
            let mut num = T::from(3.526_249_659_989_11e-2).unwrap() * z
                + T::from(0.700_383_064_443_688).unwrap();
            num = num * z + T::from(6.373_962_203_531_65).unwrap();
            num = num * z + T::from(33.912_866_078_383).unwrap();
            num = num * z + T::from(112.079_291_497_871).unwrap();
            num = num * z + T::from(221.213_596_169_931).unwrap();
            num = num * z + T::from(220.206_867_912_376).unwrap();

            let mut den = T::from(8.838_834_764_831_84e-2).unwrap() * z
                + T::from(1.755_667_163_182_64).unwrap();
            den = den * z + T::from(16.064_177_579_207).unwrap();
            den = den * z + T::from(86.780_732_202_946_1).unwrap();
            den = den * z + T::from(296.564_248_779_674).unwrap();
            den = den * z + T::from(637.333_633_378_831).unwrap();
            den = den * z + T::from(793.826_512_519_948).unwrap();
            den = den * z + T::from(440.413_735_824_752).unwrap();

            e * num / den
        } else {
            // Far tail: continued-fraction expansion of the Mills ratio.
            let four = T::from(4.0).unwrap();
            let three = T::from(3.0).unwrap();
            let two = T::from(2.0).unwrap();

            let mut b = z + T::from(0.65).unwrap();
            b = z + four / b;
            b = z + three / b;
            b = z + two / b;
            b = z + one / b;

            e / (b * T::from(SQRT_2PI).unwrap())
        }
    };

    if x > zero {
        one - upper_tail
    } else {
        upper_tail
    }
}

/// Standard normal probability density function.
///
/// Computes the density φ(x) = (1 / sqrt(2π)) * exp(-x² / 2).
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use fxvol_core::math::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0_f64) - 0.3989422804014327).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}

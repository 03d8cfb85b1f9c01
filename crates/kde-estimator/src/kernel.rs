//! Kernels

/// 1 / sqrt(2π)
const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard Gaussian kernel: K(u) = e^(-u²/2) / sqrt(2π)
#[inline]
pub fn gaussian(u: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * u * u).exp()
}

/// Gaussian kernel centred at `center` with bandwidth `h`, evaluated at `x`
#[inline]
pub fn scaled_gaussian(x: f64, center: f64, h: f64) -> f64 {
    gaussian((x - center) / h) / h
}

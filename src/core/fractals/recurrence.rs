use crate::core::data::complex::Complex;

const ESCAPE_RADIUS: f64 = 2.0;

/// Runs `z = z² + c` from `z` for exactly `iterations` steps and counts the
/// steps whose result lies strictly inside radius 2.
///
/// There is no early exit: every step is executed and contributes 0 or 1.
/// An escaped orbit grows without bound (eventually to inf/NaN, both of
/// which compare as outside), so the count equals the escape time.
#[inline]
#[must_use]
pub fn count_bounded_steps(mut z: Complex, c: Complex, iterations: u32) -> u32 {
    let mut bounded = 0;

    for _ in 0..iterations {
        z = z.square() + c;
        bounded += u32::from(z.magnitude() < ESCAPE_RADIUS);
    }

    bounded
}

//! Integer helpers shared by the initializer and the elimination engine.

/// Integer square root, exact for all u64 values.
/// Corrected from an f64 seed by stepping ±1 until `x² <= n < (x + 1)²`.
#[inline]
pub fn isqrt(n: u64) -> u64 {
    if n == 0 { return 0; }
    let mut x = (n as f64).sqrt() as u64;
    while x > 0 && x.checked_mul(x).map_or(true, |sq| sq > n) { x -= 1; }
    while (x + 1).checked_mul(x + 1).map_or(false, |sq| sq <= n) { x += 1; }
    x
}

/// Square root rounded to the nearest integer, computed without f64 error.
///
/// With `s = isqrt(n)`, `sqrt(n)` rounds up exactly when `n >= s² + s + 1`,
/// since `(s + ½)² = s² + s + ¼`. The square root of an integer is never an
/// exact half, so there is no tie to break.
#[inline]
pub fn rounded_sqrt(n: u64) -> u64 {
    let s = isqrt(n);
    if n - s * s > s { s + 1 } else { s }
}

/// Number of u64 words needed to hold `bits` bits.
#[inline]
pub fn words_for(bits: u64) -> u64 {
    bits.div_ceil(64)
}

/// Identity curve.
#[inline]
pub fn linear(t: f32) -> f32 {
    t
}

/// Piecewise quadratic ease: accelerates up to 0.5, decelerates after.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Quadratic ease-out.
#[inline]
pub fn quad_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Linear interpolation, exact at `t == 0` and `t == 1`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Byte channel to `[0, 1]`.
#[inline(always)]
pub(crate) fn unit(v: u8) -> f32 {
    f32::from(v) / 255.0
}

/// `[0, 1]` channel back to a byte, rounding to nearest.
#[inline(always)]
pub(crate) fn byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Floor a non-negative product `r * span` into `[0, span)`.
///
/// `r` is expected in `[0, 1)`; values at or above 1 saturate to `span - 1`.
#[inline]
pub(crate) fn scale_floor(r: f64, span: u32) -> u32 {
    if span == 0 {
        return 0;
    }
    let v = (r * f64::from(span)).floor();
    if v <= 0.0 {
        0
    } else {
        (v as u32).min(span - 1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

use crate::foundation::math::{byte, unit};

/// How a fill or blit combines with the pixels already in a buffer.
///
/// Source-over compositing is used for every mode except [`BlendMode::Lighter`], which is the
/// Porter-Duff `plus` operator. The blend function `B(backdrop, source)` follows W3C Compositing
/// Level 1 and operates on straight-alpha channels in whatever color space the buffer stores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Alpha-over.
    #[default]
    Normal,
    /// `B = cb * cs`. Darkens.
    Multiply,
    /// Additive (`plus`), clamped. Brightens.
    Lighter,
    /// Source saturation applied to the backdrop's hue and luminosity.
    Saturation,
}

impl BlendMode {
    /// Every mode, in declaration order.
    pub const ALL: [BlendMode; 4] = [
        BlendMode::Normal,
        BlendMode::Multiply,
        BlendMode::Lighter,
        BlendMode::Saturation,
    ];
}

/// Blend mode plus global opacity for a single draw call.
///
/// Draw calls carry their own composite instead of mutating state on the target, so an effect
/// cannot leave a buffer in a modified drawing state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Composite {
    /// Blend mode.
    pub mode: BlendMode,
    /// Multiplier on source alpha. Clamped into `[0, 1]` when drawing.
    pub opacity: f32,
}

impl Composite {
    /// Build a composite from its parts.
    pub const fn new(mode: BlendMode, opacity: f32) -> Self {
        Self { mode, opacity }
    }

    /// Alpha-over at `opacity`.
    pub const fn normal(opacity: f32) -> Self {
        Self::new(BlendMode::Normal, opacity)
    }
}

impl Default for Composite {
    fn default() -> Self {
        Self::normal(1.0)
    }
}

/// Blend modes a buffer's backend implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlendCaps {
    /// `normal` support.
    pub normal: bool,
    /// `multiply` support.
    pub multiply: bool,
    /// `lighter` support.
    pub lighter: bool,
    /// `saturation` support.
    pub saturation: bool,
}

impl Default for BlendCaps {
    fn default() -> Self {
        Self::ALL
    }
}

impl BlendCaps {
    /// Every mode supported.
    pub const ALL: Self = Self {
        normal: true,
        multiply: true,
        lighter: true,
        saturation: true,
    };

    /// Return `true` when `mode` is implemented.
    pub fn supports(self, mode: BlendMode) -> bool {
        match mode {
            BlendMode::Normal => self.normal,
            BlendMode::Multiply => self.multiply,
            BlendMode::Lighter => self.lighter,
            BlendMode::Saturation => self.saturation,
        }
    }

    /// Copy of `self` with `mode` marked unsupported.
    pub fn without(mut self, mode: BlendMode) -> Self {
        match mode {
            BlendMode::Normal => self.normal = false,
            BlendMode::Multiply => self.multiply = false,
            BlendMode::Lighter => self.lighter = false,
            BlendMode::Saturation => self.saturation = false,
        }
        self
    }
}

/// Composite a run of source pixels onto `dst` (straight RGBA8, `dst.len() / 4` pixels).
///
/// `src_at(i)` yields the straight-alpha source pixel for the `i`-th destination pixel of the run.
pub(crate) fn composite_run<S>(dst: &mut [u8], src_at: S, comp: Composite)
where
    S: FnMut(usize) -> [u8; 4],
{
    let opacity = comp.opacity.clamp(0.0, 1.0);
    // Also rejects NaN.
    if !(opacity > 0.0) {
        return;
    }

    // Mode dispatch happens once per run; each arm monomorphizes its own kernel.
    match comp.mode {
        BlendMode::Normal => source_over(dst, src_at, opacity, |_, s| s),
        BlendMode::Multiply => source_over(dst, src_at, opacity, |b, s| {
            [b[0] * s[0], b[1] * s[1], b[2] * s[2]]
        }),
        BlendMode::Saturation => source_over(dst, src_at, opacity, |b, s| {
            set_lum(set_sat(b, sat(s)), lum(b))
        }),
        BlendMode::Lighter => plus(dst, src_at, opacity),
    }
}

#[inline(always)]
fn source_over<S, F>(dst: &mut [u8], mut src_at: S, opacity: f32, blend_fn: F)
where
    S: FnMut(usize) -> [u8; 4],
    F: Fn([f32; 3], [f32; 3]) -> [f32; 3],
{
    for (i, d) in dst.chunks_exact_mut(4).enumerate() {
        let s = src_at(i);
        let sa = unit(s[3]) * opacity;
        if sa <= 0.0 {
            continue;
        }
        let ba = unit(d[3]);
        let cs = [unit(s[0]), unit(s[1]), unit(s[2])];
        let cb = [unit(d[0]), unit(d[1]), unit(d[2])];
        let mixed = blend_fn(cb, cs);

        // co = as * ((1 - ab) * cs + ab * B(cb, cs)) + ab * cb * (1 - as)
        let out_a = sa + ba * (1.0 - sa);
        for c in 0..3 {
            let cs_prime = (1.0 - ba) * cs[c] + ba * mixed[c];
            let co = sa * cs_prime + ba * cb[c] * (1.0 - sa);
            d[c] = byte(co / out_a);
        }
        d[3] = byte(out_a);
    }
}

#[inline(always)]
fn plus<S>(dst: &mut [u8], mut src_at: S, opacity: f32)
where
    S: FnMut(usize) -> [u8; 4],
{
    for (i, d) in dst.chunks_exact_mut(4).enumerate() {
        let s = src_at(i);
        let sa = unit(s[3]) * opacity;
        if sa <= 0.0 {
            continue;
        }
        let ba = unit(d[3]);
        let out_a = (sa + ba).min(1.0);
        for c in 0..3 {
            let co = (sa * unit(s[c]) + ba * unit(d[c])).min(1.0);
            d[c] = byte(co / out_a);
        }
        d[3] = byte(out_a);
    }
}

fn lum(c: [f32; 3]) -> f32 {
    0.3 * c[0] + 0.59 * c[1] + 0.11 * c[2]
}

fn clip_color(c: [f32; 3]) -> [f32; 3] {
    let l = lum(c);
    let n = c[0].min(c[1]).min(c[2]);
    let x = c[0].max(c[1]).max(c[2]);
    let mut out = c;
    if n < 0.0 {
        for v in &mut out {
            *v = l + (*v - l) * l / (l - n);
        }
    }
    if x > 1.0 {
        for v in &mut out {
            *v = l + (*v - l) * (1.0 - l) / (x - l);
        }
    }
    out
}

fn set_lum(c: [f32; 3], l: f32) -> [f32; 3] {
    let d = l - lum(c);
    clip_color([c[0] + d, c[1] + d, c[2] + d])
}

fn sat(c: [f32; 3]) -> f32 {
    c[0].max(c[1]).max(c[2]) - c[0].min(c[1]).min(c[2])
}

fn set_sat(c: [f32; 3], s: f32) -> [f32; 3] {
    let max = c[0].max(c[1]).max(c[2]);
    let min = c[0].min(c[1]).min(c[2]);
    if max <= min {
        return [0.0; 3];
    }
    let range = max - min;
    let mut out = [0.0; 3];
    for (o, &v) in out.iter_mut().zip(c.iter()) {
        *o = if v >= max {
            s
        } else if v <= min {
            0.0
        } else {
            (v - min) * s / range
        };
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blend.rs"]
mod tests;

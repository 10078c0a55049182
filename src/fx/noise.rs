use crate::fx::context::FxContext;
use crate::fx::rng::RandomSource;
use crate::raster::frame::FrameBuffer;

/// Options for [`noise`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NoiseOpts {
    /// Probability that a sampled pixel is replaced.
    pub intensity: f64,
    /// Sampling stride in pixels along both axes. `0` is treated as `1`.
    pub scale: u32,
    /// Alpha written to replaced pixels; `None` keeps each pixel's alpha.
    pub alpha: Option<u8>,
    /// Gray noise when `true`, independent random channels otherwise.
    pub monochrome: bool,
}

impl Default for NoiseOpts {
    fn default() -> Self {
        Self {
            intensity: 0.5,
            scale: 16,
            alpha: Some(200),
            monochrome: true,
        }
    }
}

/// Sparse speckle noise on a strided sample grid.
///
/// Only pixels at `(i * scale, j * scale)` are eligible; each is replaced with probability
/// `intensity`. Everything else is left untouched.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(w = frame.width(), h = frame.height(), scale = opts.scale)
)]
pub fn noise(ctx: &mut FxContext, frame: &mut FrameBuffer, opts: &NoiseOpts) {
    if frame.is_empty() {
        return;
    }
    let rng = ctx.rng_mut();
    let (w, h) = (frame.width() as usize, frame.height() as usize);
    let step = opts.scale.max(1) as usize;
    let data = frame.data_mut();

    for y in (0..h).step_by(step) {
        for x in (0..w).step_by(step) {
            if !(rng.next_f64() < opts.intensity) {
                continue;
            }
            let i = (y * w + x) * 4;
            if opts.monochrome {
                let v = rng.byte();
                data[i..i + 3].fill(v);
            } else {
                data[i] = rng.byte();
                data[i + 1] = rng.byte();
                data[i + 2] = rng.byte();
            }
            if let Some(a) = opts.alpha {
                data[i + 3] = a;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fx/noise.rs"]
mod tests;

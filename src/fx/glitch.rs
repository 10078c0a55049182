use crate::foundation::core::{PixelRect, Rgb8, Rgba8};
use crate::fx::context::FxContext;
use crate::fx::rng::RandomSource;
use crate::raster::blend::Composite;
use crate::raster::frame::FrameBuffer;
use crate::raster::paint::Paint;

const GAP: Rgba8 = Rgba8::new(0, 0, 0, 255);

/// Options for [`glitch`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlitchOpts {
    /// Number of slices displaced per call.
    pub slices: u32,
    /// Largest horizontal displacement, in either direction.
    pub max_offset: u32,
    /// Smallest slice height.
    pub min_height: u32,
    /// Upper bound (exclusive unless equal to `min_height`) on slice height.
    pub max_height: u32,
    /// Opacity of the random full-frame color wash; `0` disables it.
    pub tint_opacity: f32,
}

impl Default for GlitchOpts {
    fn default() -> Self {
        Self {
            slices: 3,
            max_offset: 10,
            min_height: 2,
            max_height: 10,
            tint_opacity: 0.05,
        }
    }
}

/// One horizontal strip displaced by a glitch pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slice {
    /// Top row.
    pub y: u32,
    /// Rows covered.
    pub height: u32,
    /// Horizontal shift; positive moves right.
    pub dx: i32,
}

impl Slice {
    /// Draw a random slice for a frame `frame_height` rows tall.
    ///
    /// Returns `None` when the frame is shorter than the drawn slice height.
    pub fn random(
        rng: &mut (impl RandomSource + ?Sized),
        frame_height: u32,
        opts: &GlitchOpts,
    ) -> Option<Self> {
        let span = opts.max_height.saturating_sub(opts.min_height);
        let height = opts.min_height + rng.below(span);
        if height == 0 || height > frame_height {
            return None;
        }
        let y = rng.below(frame_height - height);
        let max = i32::try_from(opts.max_offset).unwrap_or(i32::MAX);
        let dx = rng.range_i32(-max, max);
        Some(Self { y, height, dx })
    }
}

/// Displace random horizontal slices sideways, then optionally wash the frame with a random color.
///
/// Each slice is read out, written back shifted by `dx` (columns pushed past an edge are dropped,
/// not wrapped) and the uncovered gap is filled with opaque black. Slices with `dx == 0` are
/// skipped. Output is non-deterministic unless the context's random source is seeded.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(w = frame.width(), h = frame.height(), slices = opts.slices)
)]
pub fn glitch(ctx: &mut FxContext, frame: &mut FrameBuffer, opts: &GlitchOpts) {
    if frame.is_empty() {
        return;
    }
    let rng = ctx.rng_mut();

    for _ in 0..opts.slices {
        let Some(slice) = Slice::random(rng, frame.height(), opts) else {
            continue;
        };
        displace(frame, slice);
    }

    if opts.tint_opacity > 0.0 {
        let wash = Rgb8::new(rng.byte(), rng.byte(), rng.byte());
        frame.fill(&Paint::Solid(wash.opaque()), Composite::normal(opts.tint_opacity));
    }
}

/// Shift one slice horizontally and black out the gap it leaves.
pub fn displace(frame: &mut FrameBuffer, slice: Slice) {
    if slice.dx == 0 || slice.height == 0 {
        return;
    }
    let w = frame.width();
    let y = i32::try_from(slice.y).unwrap_or(i32::MAX);
    let strip = frame.get_image_data(PixelRect::new(0, y, w, slice.height));
    frame.put_image_data(&strip, slice.dx, y);

    let gap = slice.dx.unsigned_abs().min(w);
    let gap_x = if slice.dx > 0 {
        0
    } else {
        i32::try_from(w - gap).unwrap_or(i32::MAX)
    };
    frame.set_rect(PixelRect::new(gap_x, y, gap, slice.height), GAP);
}

#[cfg(test)]
#[path = "../../tests/unit/fx/glitch.rs"]
mod tests;

use crate::foundation::core::Rgba8;
use crate::fx::context::FxContext;
use crate::raster::blend::{BlendMode, Composite};
use crate::raster::frame::FrameBuffer;
use crate::raster::paint::Paint;

const RED: Paint = Paint::Solid(Rgba8::new(255, 0, 0, 255));
const BLUE: Paint = Paint::Solid(Rgba8::new(0, 0, 255, 255));

/// Options for [`chromatic`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChromaticOpts {
    /// Horizontal channel displacement in pixels. Red shifts left, blue shifts right.
    pub offset: i32,
    /// Opacity of each shifted channel copy.
    pub opacity: f32,
}

impl Default for ChromaticOpts {
    fn default() -> Self {
        Self {
            offset: 4,
            opacity: 0.3,
        }
    }
}

/// Chromatic aberration: red and blue channel copies shifted in opposite directions.
///
/// Works purely with compositing. A channel is isolated by multiplying the source against a flat
/// pure-channel fill in the auxiliary buffer, then that buffer is composited back onto `frame`:
/// red at `-offset` with `multiply`, blue at `+offset` with `lighter`.
///
/// With `source == None` the frame is snapshotted first, so both passes read the pre-effect
/// pixels. An external `source` is drawn at the origin and may differ in size from `frame`.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(w = frame.width(), h = frame.height(), offset = opts.offset)
)]
pub fn chromatic(
    ctx: &mut FxContext,
    frame: &mut FrameBuffer,
    opts: &ChromaticOpts,
    source: Option<&FrameBuffer>,
) {
    if frame.is_empty() {
        return;
    }

    match source {
        Some(src) => {
            let aux = ctx.cache_mut().acquire(frame);
            run_passes(frame, aux, src, opts);
        }
        None => {
            let (aux, snapshot) = ctx.cache_mut().acquire_with_snapshot(frame);
            snapshot.copy_from(frame);
            run_passes(frame, aux, snapshot, opts);
        }
    }
}

fn run_passes(
    frame: &mut FrameBuffer,
    aux: &mut FrameBuffer,
    source: &FrameBuffer,
    opts: &ChromaticOpts,
) {
    channel_pass(
        frame,
        aux,
        source,
        &RED,
        opts.offset.saturating_neg(),
        Composite::new(BlendMode::Multiply, opts.opacity),
    );
    channel_pass(
        frame,
        aux,
        source,
        &BLUE,
        opts.offset,
        Composite::new(BlendMode::Lighter, opts.opacity),
    );
}

fn channel_pass(
    frame: &mut FrameBuffer,
    aux: &mut FrameBuffer,
    source: &FrameBuffer,
    channel: &Paint,
    dx: i32,
    comp: Composite,
) {
    aux.clear();
    aux.draw_buffer(source, 0, 0, Composite::normal(1.0));
    aux.fill(channel, Composite::new(BlendMode::Multiply, 1.0));
    frame.draw_buffer(aux, dx, 0, comp);
}

#[cfg(test)]
#[path = "../../tests/unit/fx/chromatic.rs"]
mod tests;

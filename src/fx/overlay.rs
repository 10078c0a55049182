//! Single-fill overlay effects.
//!
//! None of these read pixels: each is one (or, for scanlines, a few) fills composited onto the
//! frame at an opacity. They need no context.

use crate::foundation::core::{PixelRect, Point, Rgb8};
use crate::raster::blend::{BlendMode, Composite};
use crate::raster::frame::FrameBuffer;
use crate::raster::paint::{Paint, RadialGradient};

/// Options for [`brightness`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrightnessOpts {
    /// Brightness on a 0-100 scale; 50 is neutral.
    pub value: f32,
    /// Region left edge.
    pub x: i32,
    /// Region top edge.
    pub y: i32,
    /// Region width; the frame width when `None`.
    pub width: Option<u32>,
    /// Region height; the frame height when `None`.
    pub height: Option<u32>,
}

impl Default for BrightnessOpts {
    fn default() -> Self {
        Self {
            value: 50.0,
            x: 0,
            y: 0,
            width: None,
            height: None,
        }
    }
}

impl BrightnessOpts {
    fn region(&self, frame: &FrameBuffer) -> PixelRect {
        PixelRect::new(
            self.x,
            self.y,
            self.width.unwrap_or(frame.width()),
            self.height.unwrap_or(frame.height()),
        )
    }
}

/// Darken (below 50) or brighten (above 50) with a black or white overlay.
pub fn brightness(frame: &mut FrameBuffer, opts: &BrightnessOpts) {
    if opts.value == 50.0 {
        return;
    }
    let (color, opacity) = if opts.value < 50.0 {
        (Rgb8::BLACK, 1.0 - opts.value / 50.0)
    } else {
        (Rgb8::WHITE, (opts.value - 50.0) / 50.0)
    };
    frame.fill_rect(
        opts.region(frame),
        &Paint::Solid(color.opaque()),
        Composite::normal(opacity),
    );
}

/// Options for [`tint`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TintOpts {
    /// Tint color.
    pub color: Rgb8,
    /// Tint opacity.
    pub opacity: f32,
}

impl Default for TintOpts {
    fn default() -> Self {
        Self {
            color: Rgb8::new(0, 30, 0),
            opacity: 0.08,
        }
    }
}

/// Wash the whole frame with a flat color.
pub fn tint(frame: &mut FrameBuffer, opts: &TintOpts) {
    frame.fill(&Paint::Solid(opts.color.opaque()), Composite::normal(opts.opacity));
}

/// Options for [`flash`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlashOpts {
    /// Flash color.
    pub color: Rgb8,
    /// Flash opacity.
    pub opacity: f32,
}

impl Default for FlashOpts {
    fn default() -> Self {
        Self {
            color: Rgb8::WHITE,
            opacity: 1.0,
        }
    }
}

/// Solid full-frame flash. Same fill as [`tint`], with flash-style defaults.
pub fn flash(frame: &mut FrameBuffer, opts: &FlashOpts) {
    frame.fill(&Paint::Solid(opts.color.opaque()), Composite::normal(opts.opacity));
}

/// Options for [`scanlines`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanlinesOpts {
    /// Rows between bars.
    pub gap: u32,
    /// Bar height in rows.
    pub width: u32,
    /// Bar opacity.
    pub opacity: f32,
    /// Bar color.
    pub color: Rgb8,
}

impl Default for ScanlinesOpts {
    fn default() -> Self {
        Self {
            gap: 4,
            width: 2,
            opacity: 0.12,
            color: Rgb8::BLACK,
        }
    }
}

/// Horizontal bars `width` rows tall, repeating every `gap + width` rows from the top.
pub fn scanlines(frame: &mut FrameBuffer, opts: &ScanlinesOpts) {
    let period = opts.gap.saturating_add(opts.width);
    if period == 0 || opts.width == 0 {
        return;
    }
    let paint = Paint::Solid(opts.color.opaque());
    let comp = Composite::normal(opts.opacity);
    let w = frame.width();
    for y in (0..frame.height()).step_by(period as usize) {
        let y = i32::try_from(y).unwrap_or(i32::MAX);
        frame.fill_rect(PixelRect::new(0, y, w, opts.width), &paint, comp);
    }
}

/// Options for [`vignette`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VignetteOpts {
    /// Radius where darkening starts, as a fraction of `max(w, h)`.
    pub inner_radius: f64,
    /// Radius where darkening reaches `opacity`, as a fraction of `max(w, h)`.
    pub outer_radius: f64,
    /// Edge opacity.
    pub opacity: f32,
    /// Edge color.
    pub color: Rgb8,
}

impl Default for VignetteOpts {
    fn default() -> Self {
        Self {
            inner_radius: 0.3,
            outer_radius: 0.75,
            opacity: 0.5,
            color: Rgb8::BLACK,
        }
    }
}

/// Darken the frame edges with a radial gradient centred on the frame.
pub fn vignette(frame: &mut FrameBuffer, opts: &VignetteOpts) {
    let (w, h) = (f64::from(frame.width()), f64::from(frame.height()));
    let max_dim = w.max(h);
    let edge_alpha = (opts.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    let gradient = RadialGradient {
        center: Point::new(w / 2.0, h / 2.0),
        inner_radius: max_dim * opts.inner_radius,
        outer_radius: max_dim * opts.outer_radius,
        inner: opts.color.with_alpha(0),
        outer: opts.color.with_alpha(edge_alpha),
    };
    frame.fill(&Paint::Radial(gradient), Composite::normal(1.0));
}

/// Options for [`desaturate`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesaturateOpts {
    /// Desaturation strength, 0 (none) to 1 (grayscale).
    pub intensity: f32,
}

impl Default for DesaturateOpts {
    fn default() -> Self {
        Self { intensity: 0.6 }
    }
}

/// Drain color toward gray with a `saturation`-mode gray fill.
///
/// No-op where the frame's backend lacks the `saturation` blend mode.
pub fn desaturate(frame: &mut FrameBuffer, opts: &DesaturateOpts) {
    if opts.intensity <= 0.0 {
        return;
    }
    frame.fill(
        &Paint::Solid(Rgb8::new(128, 128, 128).opaque()),
        Composite::new(BlendMode::Saturation, opts.intensity.min(1.0)),
    );
}

/// Options for [`nightvision`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NightvisionOpts {
    /// Overall strength, 0-1.
    pub intensity: f32,
    /// Darkening layer color.
    pub dark_color: Rgb8,
    /// Tint layer color.
    pub tint_color: Rgb8,
    /// Whether to desaturate after tinting.
    pub desaturate: bool,
}

impl Default for NightvisionOpts {
    fn default() -> Self {
        Self {
            intensity: 0.6,
            dark_color: Rgb8::new(0, 0, 10),
            tint_color: Rgb8::new(10, 15, 45),
            desaturate: true,
        }
    }
}

/// Dark tint, blue tint, then desaturation.
pub fn nightvision(frame: &mut FrameBuffer, opts: &NightvisionOpts) {
    tint(
        frame,
        &TintOpts {
            color: opts.dark_color,
            opacity: opts.intensity * 0.65,
        },
    );
    tint(
        frame,
        &TintOpts {
            color: opts.tint_color,
            opacity: opts.intensity * 0.25,
        },
    );
    if opts.desaturate {
        desaturate(
            frame,
            &DesaturateOpts {
                intensity: opts.intensity,
            },
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fx/overlay.rs"]
mod tests;

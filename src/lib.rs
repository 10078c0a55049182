//! Real-time post-processing effects for RGBA8 frame buffers.
//!
//! Call one effect per frame with the frame buffer and its options:
//!
//! - compositing effects: [`chromatic`] (channel-isolated multi-pass blend through a cached
//!   auxiliary buffer) and the overlay fills in [`fx::overlay`]
//! - pixel effects: [`glitch`] (slice displacement) and [`noise`] (strided speckle)
//!
//! Effects never fail. Empty frames and blend modes a buffer does not support are silent no-ops.
//! State that outlives a call (auxiliary buffers, randomness) lives in an [`FxContext`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Effects and their supporting state.
pub mod fx;
/// CPU frame-buffer backend.
pub mod raster;

pub use crate::foundation::core::{PixelRect, Point, Rgb8, Rgba8, Vec2};
pub use crate::foundation::error::{FxError, FxResult};

pub use crate::fx::cache::{AuxCache, AuxCacheStats};
pub use crate::fx::chain::{Effect, EffectChain};
pub use crate::fx::chromatic::{ChromaticOpts, chromatic};
pub use crate::fx::context::FxContext;
pub use crate::fx::glitch::{GlitchOpts, Slice, glitch};
pub use crate::fx::noise::{NoiseOpts, noise};
pub use crate::fx::overlay::{
    BrightnessOpts, DesaturateOpts, FlashOpts, NightvisionOpts, ScanlinesOpts, TintOpts,
    VignetteOpts, brightness, desaturate, flash, nightvision, scanlines, tint, vignette,
};
pub use crate::fx::rng::RandomSource;
pub use crate::fx::shake::{ShakeOpts, shake};
pub use crate::raster::{BlendCaps, BlendMode, Composite, FrameBuffer, FrameId, ImageData, Paint};

//! CPU frame-buffer backend: storage, blend kernels, and the drawing primitives effects use.

/// Blend modes and per-pixel compositing kernels.
pub mod blend;
/// Frame buffers and detached pixel blocks.
pub mod frame;
/// Fill paints.
pub mod paint;

pub use blend::{BlendCaps, BlendMode, Composite};
pub use frame::{FrameBuffer, FrameId, ImageData};
pub use paint::{Paint, RadialGradient};

//! Effects applied to a [`FrameBuffer`](crate::FrameBuffer) once per frame.

/// Auxiliary buffer cache keyed by frame identity.
pub mod cache;
/// Ordered, JSON-configurable effect lists.
pub mod chain;
/// Chromatic aberration.
pub mod chromatic;
/// Per-thread effect state.
pub mod context;
/// Slice displacement.
pub mod glitch;
/// Strided speckle noise.
pub mod noise;
/// Flat and gradient overlay fills.
pub mod overlay;
/// Injectable randomness.
pub mod rng;
/// Screen-shake offsets.
pub mod shake;

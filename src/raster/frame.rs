use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use crate::foundation::core::{PixelRect, Rgba8};
use crate::foundation::error::{FxError, FxResult};
use crate::raster::blend::{BlendCaps, BlendMode, Composite, composite_run};
use crate::raster::paint::Paint;

static NEXT_FRAME_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a [`FrameBuffer`].
///
/// Allocated once per buffer from a process-wide counter. Clones get a fresh id: they are distinct
/// buffers and never share auxiliary state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(u64);

impl FrameId {
    fn next() -> Self {
        Self(NEXT_FRAME_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw counter value, for diagnostics.
    pub fn get(self) -> u64 {
        self.0
    }
}

fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
}

/// Straight-alpha RGBA8 raster, tightly packed, row-major.
///
/// This is the CPU backend every effect draws through. A width or height of zero is a valid,
/// empty buffer on which every operation is a no-op.
pub struct FrameBuffer {
    id: FrameId,
    alive: Arc<()>,
    width: u32,
    height: u32,
    data: Vec<u8>,
    caps: BlendCaps,
}

impl FrameBuffer {
    /// Transparent-black buffer of the given size.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 4` overflows `usize`. Use [`FrameBuffer::from_rgba`] for
    /// untrusted sizes.
    pub fn new(width: u32, height: u32) -> Self {
        let len = byte_len(width, height)
            .unwrap_or_else(|| panic!("frame buffer size overflows usize: {width}x{height}"));
        Self {
            id: FrameId::next(),
            alive: Arc::new(()),
            width,
            height,
            data: vec![0; len],
            caps: BlendCaps::ALL,
        }
    }

    /// Buffer filled with one color.
    pub fn solid(width: u32, height: u32, color: Rgba8) -> Self {
        let mut fb = Self::new(width, height);
        for px in fb.data.chunks_exact_mut(4) {
            px.copy_from_slice(&color.to_array());
        }
        fb
    }

    /// Wrap caller-provided RGBA8 bytes.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> FxResult<Self> {
        let expected = byte_len(width, height)
            .ok_or_else(|| FxError::validation("frame buffer size overflow"))?;
        if data.len() != expected {
            return Err(FxError::validation(format!(
                "frame buffer expects {expected} bytes for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            id: FrameId::next(),
            alive: Arc::new(()),
            width,
            height,
            data,
            caps: BlendCaps::ALL,
        })
    }

    /// Resize in place, keeping this buffer's identity. All pixels become transparent black.
    pub fn resize(&mut self, width: u32, height: u32) {
        let len = byte_len(width, height)
            .unwrap_or_else(|| panic!("frame buffer size overflows usize: {width}x{height}"));
        self.width = width;
        self.height = height;
        self.data.clear();
        self.data.resize(len, 0);
    }

    /// Replace the set of blend modes this buffer's backend implements.
    pub fn with_capabilities(mut self, caps: BlendCaps) -> Self {
        self.caps = caps;
        self
    }

    /// Identity used to key auxiliary state.
    pub fn id(&self) -> FrameId {
        self.id
    }

    /// Token that stops upgrading once this buffer is dropped.
    pub(crate) fn liveness(&self) -> Weak<()> {
        Arc::downgrade(&self.alive)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Return `true` when the buffer has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Blend modes implemented for this buffer.
    pub fn capabilities(&self) -> BlendCaps {
        self.caps
    }

    /// Return `true` when `mode` can be drawn on this buffer.
    pub fn supports(&self, mode: BlendMode) -> bool {
        self.caps.supports(mode)
    }

    /// Raw pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw pixel bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer, returning its bytes.
    pub fn into_rgba(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some(Rgba8::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    /// Overwrite the pixel at `(x, y)`. Out-of-bounds writes are dropped.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&color.to_array());
    }

    /// Set every pixel to transparent black.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Fill the whole buffer with `paint`.
    pub fn fill(&mut self, paint: &Paint, comp: Composite) {
        self.fill_rect(PixelRect::full(self.width, self.height), paint, comp);
    }

    /// Composite `paint` over `rect`, clipped to the buffer.
    pub fn fill_rect(&mut self, rect: PixelRect, paint: &Paint, comp: Composite) {
        if !self.supports(comp.mode) {
            tracing::debug!(mode = ?comp.mode, "blend mode unsupported; fill skipped");
            return;
        }
        if paint.paints_nothing() {
            return;
        }
        let Some((x0, y0, x1, y1)) = rect.clip_to(self.width, self.height) else {
            return;
        };

        for y in y0..y1 {
            let start = self.offset(x0, y);
            let end = self.offset(x1, y);
            let row = &mut self.data[start..end];
            match paint {
                Paint::Solid(c) => {
                    let px = c.to_array();
                    composite_run(row, |_| px, comp);
                }
                Paint::Radial(g) => composite_run(row, |i| g.sample(x0 + i as u32, y), comp),
            }
        }
    }

    /// Overwrite every pixel of `rect` with `color`, clipped, without blending.
    ///
    /// Like [`FrameBuffer::put_image_data`] this is a raw write and ignores the buffer's
    /// capabilities.
    pub fn set_rect(&mut self, rect: PixelRect, color: Rgba8) {
        let Some((x0, y0, x1, y1)) = rect.clip_to(self.width, self.height) else {
            return;
        };
        let px = color.to_array();
        for y in y0..y1 {
            let (start, end) = (self.offset(x0, y), self.offset(x1, y));
            for dst in self.data[start..end].chunks_exact_mut(4) {
                dst.copy_from_slice(&px);
            }
        }
    }

    /// Composite `src` with its top-left corner at `(dx, dy)`.
    ///
    /// Source pixels landing outside this buffer are dropped.
    pub fn draw_buffer(&mut self, src: &FrameBuffer, dx: i32, dy: i32, comp: Composite) {
        if !self.supports(comp.mode) {
            tracing::debug!(mode = ?comp.mode, "blend mode unsupported; blit skipped");
            return;
        }
        let rect = PixelRect::new(dx, dy, src.width, src.height);
        let Some((x0, y0, x1, y1)) = rect.clip_to(self.width, self.height) else {
            return;
        };

        let sx0 = (i64::from(x0) - i64::from(dx)) as u32;
        let sx1 = (i64::from(x1) - i64::from(dx)) as u32;
        for y in y0..y1 {
            let sy = (i64::from(y) - i64::from(dy)) as u32;
            let s_row = &src.data[src.offset(sx0, sy)..src.offset(sx1, sy)];
            let start = self.offset(x0, y);
            let end = self.offset(x1, y);
            composite_run(
                &mut self.data[start..end],
                |i| {
                    let j = i * 4;
                    [s_row[j], s_row[j + 1], s_row[j + 2], s_row[j + 3]]
                },
                comp,
            );
        }
    }

    /// Make this buffer an exact copy of `src`'s pixels.
    ///
    /// Buffers of different sizes are left untouched.
    pub fn copy_from(&mut self, src: &FrameBuffer) {
        if self.width != src.width || self.height != src.height {
            tracing::debug!(
                dst_w = self.width,
                dst_h = self.height,
                src_w = src.width,
                src_h = src.height,
                "copy_from size mismatch; skipped"
            );
            return;
        }
        self.data.copy_from_slice(&src.data);
    }

    /// Read `rect` into a new [`ImageData`].
    ///
    /// The result always has `rect`'s size; parts outside the buffer read as transparent black.
    pub fn get_image_data(&self, rect: PixelRect) -> ImageData {
        let mut out = ImageData::new(rect.width, rect.height);
        let Some((x0, y0, x1, y1)) = rect.clip_to(self.width, self.height) else {
            return out;
        };
        let ox = (i64::from(x0) - i64::from(rect.x)) as u32;
        for y in y0..y1 {
            let oy = (i64::from(y) - i64::from(rect.y)) as u32;
            let src = &self.data[self.offset(x0, y)..self.offset(x1, y)];
            let start = out.offset(ox, oy);
            out.data[start..start + src.len()].copy_from_slice(src);
        }
        out
    }

    /// Write `img` with its top-left corner at `(dx, dy)`, replacing pixels without blending.
    ///
    /// Columns and rows falling outside the buffer are dropped, never wrapped.
    pub fn put_image_data(&mut self, img: &ImageData, dx: i32, dy: i32) {
        let rect = PixelRect::new(dx, dy, img.width, img.height);
        let Some((x0, y0, x1, y1)) = rect.clip_to(self.width, self.height) else {
            return;
        };
        let ix0 = (i64::from(x0) - i64::from(dx)) as u32;
        let ix1 = (i64::from(x1) - i64::from(dx)) as u32;
        for y in y0..y1 {
            let iy = (i64::from(y) - i64::from(dy)) as u32;
            let src = &img.data[img.offset(ix0, iy)..img.offset(ix1, iy)];
            let start = self.offset(x0, y);
            self.data[start..start + src.len()].copy_from_slice(src);
        }
    }
}

impl Clone for FrameBuffer {
    fn clone(&self) -> Self {
        Self {
            id: FrameId::next(),
            alive: Arc::new(()),
            width: self.width,
            height: self.height,
            data: self.data.clone(),
            caps: self.caps,
        }
    }
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("id", &self.id)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("caps", &self.caps)
            .finish_non_exhaustive()
    }
}

/// Detached RGBA8 pixel block, as read by [`FrameBuffer::get_image_data`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageData {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ImageData {
    /// Transparent-black block of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        let len = byte_len(width, height)
            .unwrap_or_else(|| panic!("image data size overflows usize: {width}x{height}"));
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Wrap caller-provided RGBA8 bytes.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> FxResult<Self> {
        let expected = byte_len(width, height)
            .ok_or_else(|| FxError::validation("image data size overflow"))?;
        if data.len() != expected {
            return Err(FxError::validation(format!(
                "image data expects {expected} bytes for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw pixel bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/frame.rs"]
mod tests;

use super::*;
use std::collections::VecDeque;

struct Scripted(VecDeque<f64>);

impl Scripted {
    fn new(values: &[f64]) -> Self {
        Self(values.iter().copied().collect())
    }
}

impl RandomSource for Scripted {
    fn next_f64(&mut self) -> f64 {
        self.0.pop_front().unwrap_or(0.0)
    }
}

fn numbered(w: u32, h: u32) -> FrameBuffer {
    let mut fb = FrameBuffer::new(w, h);
    for y in 0..h {
        for x in 0..w {
            fb.set_pixel(x, y, Rgba8::new(x as u8 + 1, y as u8 + 1, 100, 255));
        }
    }
    fb
}

#[test]
fn zero_max_offset_never_mutates() {
    let mut ctx = FxContext::with_seed(3);
    let mut frame = numbered(12, 12);
    let before = frame.data().to_vec();
    let opts = GlitchOpts {
        slices: 1,
        max_offset: 0,
        tint_opacity: 0.0,
        ..GlitchOpts::default()
    };
    for _ in 0..20 {
        glitch(&mut ctx, &mut frame, &opts);
    }
    assert_eq!(frame.data(), &before[..]);
}

#[test]
fn full_height_slice_shifts_right_by_two() {
    // height draw, y draw, then dx: -3 + floor(0.75 * 7) = 2
    let mut ctx = FxContext::with_rng(Scripted::new(&[0.0, 0.0, 0.75]));
    let original = numbered(10, 10);
    let mut frame = original.clone();
    let opts = GlitchOpts {
        slices: 1,
        min_height: 10,
        max_height: 10,
        max_offset: 3,
        tint_opacity: 0.0,
    };
    glitch(&mut ctx, &mut frame, &opts);

    for y in 0..10 {
        for x in 0..2 {
            assert_eq!(frame.pixel(x, y), Some(Rgba8::new(0, 0, 0, 255)));
        }
        for x in 2..10 {
            assert_eq!(frame.pixel(x, y), original.pixel(x - 2, y));
        }
    }
}

#[test]
fn negative_shift_blacks_out_right_edge() {
    let mut frame = numbered(6, 4);
    let original = frame.clone();
    displace(
        &mut frame,
        Slice {
            y: 1,
            height: 2,
            dx: -2,
        },
    );
    for y in 1..3 {
        for x in 0..4 {
            assert_eq!(frame.pixel(x, y), original.pixel(x + 2, y));
        }
        assert_eq!(frame.pixel(4, y), Some(Rgba8::new(0, 0, 0, 255)));
        assert_eq!(frame.pixel(5, y), Some(Rgba8::new(0, 0, 0, 255)));
    }
    for y in [0, 3] {
        for x in 0..6 {
            assert_eq!(frame.pixel(x, y), original.pixel(x, y));
        }
    }
}

#[test]
fn shift_wider_than_frame_blacks_out_whole_slice() {
    let mut frame = numbered(4, 2);
    displace(
        &mut frame,
        Slice {
            y: 0,
            height: 1,
            dx: 9,
        },
    );
    for x in 0..4 {
        assert_eq!(frame.pixel(x, 0), Some(Rgba8::new(0, 0, 0, 255)));
    }
    assert_eq!(frame.pixel(0, 1), Some(Rgba8::new(1, 2, 100, 255)));
}

#[test]
fn displaced_rows_only_contain_original_or_black_pixels() {
    let mut ctx = FxContext::with_seed(42);
    let original = numbered(24, 24);
    let mut frame = original.clone();
    let opts = GlitchOpts {
        slices: 6,
        max_offset: 5,
        tint_opacity: 0.0,
        ..GlitchOpts::default()
    };
    glitch(&mut ctx, &mut frame, &opts);

    let black = Rgba8::new(0, 0, 0, 255);
    for y in 0..24 {
        let row: Vec<_> = (0..24).map(|x| original.pixel(x, y).unwrap()).collect();
        for x in 0..24 {
            let px = frame.pixel(x, y).unwrap();
            assert!(px == black || row.contains(&px), "({x},{y}) = {px:?}");
        }
    }
}

#[test]
fn frame_shorter_than_slice_is_noop() {
    let mut ctx = FxContext::with_seed(9);
    let mut frame = numbered(8, 1);
    let before = frame.data().to_vec();
    let opts = GlitchOpts {
        tint_opacity: 0.0,
        ..GlitchOpts::default()
    };
    glitch(&mut ctx, &mut frame, &opts);
    assert_eq!(frame.data(), &before[..]);
}

#[test]
fn tint_wash_touches_every_pixel() {
    // No slices; wash color (255, 255, 255) at full opacity.
    let mut ctx = FxContext::with_rng(Scripted::new(&[0.9999, 0.9999, 0.9999]));
    let mut frame = numbered(3, 3);
    let opts = GlitchOpts {
        slices: 0,
        tint_opacity: 1.0,
        ..GlitchOpts::default()
    };
    glitch(&mut ctx, &mut frame, &opts);
    assert!(
        frame
            .data()
            .chunks_exact(4)
            .all(|px| px == [255, 255, 255, 255])
    );
}

#[test]
fn empty_frame_is_noop() {
    let mut ctx = FxContext::with_seed(1);
    let mut frame = FrameBuffer::new(5, 0);
    glitch(&mut ctx, &mut frame, &GlitchOpts::default());
    assert!(frame.data().is_empty());
}

#[test]
fn gap_is_blacked_out_without_normal_blending() {
    use crate::raster::blend::{BlendCaps, BlendMode};

    let mut frame = numbered(5, 1).with_capabilities(BlendCaps::ALL.without(BlendMode::Normal));
    displace(
        &mut frame,
        Slice {
            y: 0,
            height: 1,
            dx: 2,
        },
    );
    assert_eq!(frame.pixel(0, 0), Some(Rgba8::new(0, 0, 0, 255)));
    assert_eq!(frame.pixel(1, 0), Some(Rgba8::new(0, 0, 0, 255)));
    assert_eq!(frame.pixel(2, 0), Some(Rgba8::new(1, 1, 100, 255)));
}

use super::*;
use crate::foundation::core::Rgba8;

fn on_grid(x: u32, y: u32, scale: u32) -> bool {
    x % scale == 0 && y % scale == 0
}

#[test]
fn only_grid_points_change() {
    let mut ctx = FxContext::with_seed(5);
    let original = FrameBuffer::solid(37, 29, Rgba8::new(10, 20, 30, 40));
    let mut frame = original.clone();
    let opts = NoiseOpts {
        intensity: 1.0,
        scale: 6,
        monochrome: false,
        ..NoiseOpts::default()
    };
    noise(&mut ctx, &mut frame, &opts);

    for y in 0..29 {
        for x in 0..37 {
            if !on_grid(x, y, 6) {
                assert_eq!(frame.pixel(x, y), original.pixel(x, y), "({x},{y})");
            }
        }
    }
}

#[test]
fn zero_intensity_is_noop() {
    let mut ctx = FxContext::with_seed(5);
    let mut frame = FrameBuffer::solid(16, 16, Rgba8::new(1, 2, 3, 4));
    let before = frame.data().to_vec();
    let opts = NoiseOpts {
        intensity: 0.0,
        scale: 1,
        ..NoiseOpts::default()
    };
    noise(&mut ctx, &mut frame, &opts);
    assert_eq!(frame.data(), &before[..]);
}

#[test]
fn full_intensity_monochrome_is_gray_at_every_grid_point() {
    let mut ctx = FxContext::with_seed(11);
    let mut frame = FrameBuffer::solid(20, 20, Rgba8::new(200, 10, 60, 255));
    let opts = NoiseOpts {
        intensity: 1.0,
        scale: 3,
        alpha: Some(77),
        monochrome: true,
    };
    noise(&mut ctx, &mut frame, &opts);

    for y in (0..20).step_by(3) {
        for x in (0..20).step_by(3) {
            let px = frame.pixel(x, y).unwrap();
            assert_eq!(px.r, px.g);
            assert_eq!(px.g, px.b);
            assert_eq!(px.a, 77);
        }
    }
}

#[test]
fn unchanged_alpha_sentinel_preserves_alpha() {
    let mut ctx = FxContext::with_seed(2);
    let mut frame = FrameBuffer::new(9, 9);
    for y in 0..9 {
        for x in 0..9 {
            frame.set_pixel(x, y, Rgba8::new(0, 0, 0, (x * 9 + y) as u8));
        }
    }
    let before = frame.clone();
    let opts = NoiseOpts {
        intensity: 1.0,
        scale: 2,
        alpha: None,
        monochrome: false,
    };
    noise(&mut ctx, &mut frame, &opts);

    for y in 0..9 {
        for x in 0..9 {
            assert_eq!(frame.pixel(x, y).unwrap().a, before.pixel(x, y).unwrap().a);
        }
    }
}

#[test]
fn zero_scale_samples_every_pixel() {
    let mut ctx = FxContext::with_seed(8);
    let mut frame = FrameBuffer::solid(4, 4, Rgba8::new(0, 0, 0, 0));
    let opts = NoiseOpts {
        intensity: 1.0,
        scale: 0,
        alpha: Some(255),
        monochrome: true,
    };
    noise(&mut ctx, &mut frame, &opts);
    assert!(frame.data().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn null_alpha_deserializes_to_sentinel() {
    let opts: NoiseOpts = serde_json::from_str(r#"{ "alpha": null }"#).unwrap();
    assert_eq!(opts.alpha, None);
    let opts: NoiseOpts = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, NoiseOpts::default());
}

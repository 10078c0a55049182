use super::*;

fn row(fb: &FrameBuffer) -> Vec<Rgba8> {
    (0..fb.width()).map(|x| fb.pixel(x, 0).unwrap()).collect()
}

#[test]
fn empty_frame_is_untouched_and_not_cached() {
    let mut ctx = FxContext::with_seed(1);
    let mut frame = FrameBuffer::new(0, 3);
    chromatic(&mut ctx, &mut frame, &ChromaticOpts::default(), None);
    assert!(frame.data().is_empty());
    assert!(ctx.cache().is_empty());
}

#[test]
fn zero_opacity_leaves_frame_unchanged() {
    let mut ctx = FxContext::with_seed(1);
    let mut frame = FrameBuffer::solid(6, 3, Rgba8::new(120, 60, 200, 255));
    frame.set_pixel(2, 1, Rgba8::new(1, 2, 3, 40));
    let before = frame.data().to_vec();

    let opts = ChromaticOpts {
        offset: 3,
        opacity: 0.0,
    };
    chromatic(&mut ctx, &mut frame, &opts, None);
    assert_eq!(frame.data(), &before[..]);
}

#[test]
fn zero_offset_still_tints() {
    let mut ctx = FxContext::with_seed(1);
    let mut frame = FrameBuffer::solid(4, 4, Rgba8::new(128, 128, 128, 255));
    let before = frame.data().to_vec();

    let opts = ChromaticOpts {
        offset: 0,
        opacity: 0.3,
    };
    chromatic(&mut ctx, &mut frame, &opts, None);
    assert_ne!(frame.data(), &before[..]);
}

#[test]
fn opaque_black_is_a_fixed_point() {
    let mut ctx = FxContext::with_seed(1);
    let mut frame = FrameBuffer::solid(5, 2, Rgba8::new(0, 0, 0, 255));
    let before = frame.data().to_vec();
    chromatic(&mut ctx, &mut frame, &ChromaticOpts::default(), None);
    assert_eq!(frame.data(), &before[..]);
}

#[test]
fn red_shifts_left_and_blue_shifts_right() {
    let mut ctx = FxContext::with_seed(1);
    let mut frame = FrameBuffer::solid(8, 1, Rgba8::new(255, 255, 255, 255));
    let opts = ChromaticOpts {
        offset: 2,
        opacity: 1.0,
    };
    chromatic(&mut ctx, &mut frame, &opts, None);

    let red = Rgba8::new(255, 0, 0, 255);
    let magenta = Rgba8::new(255, 0, 255, 255);
    let white = Rgba8::new(255, 255, 255, 255);
    assert_eq!(
        row(&frame),
        vec![red, red, magenta, magenta, magenta, magenta, white, white]
    );
}

#[test]
fn external_source_replaces_snapshot() {
    let mut ctx = FxContext::with_seed(1);
    let mut frame = FrameBuffer::solid(4, 1, Rgba8::new(0, 0, 0, 255));
    let source = FrameBuffer::solid(4, 1, Rgba8::new(255, 255, 255, 255));
    let opts = ChromaticOpts {
        offset: 0,
        opacity: 1.0,
    };
    chromatic(&mut ctx, &mut frame, &opts, Some(&source));
    assert!(row(&frame).iter().all(|&px| px == Rgba8::new(0, 0, 255, 255)));
}

#[test]
fn auxiliary_buffer_is_reused_across_frames() {
    let mut ctx = FxContext::with_seed(1);
    let mut frame = FrameBuffer::solid(4, 4, Rgba8::new(90, 90, 90, 255));
    for _ in 0..3 {
        chromatic(&mut ctx, &mut frame, &ChromaticOpts::default(), None);
    }
    assert_eq!(ctx.cache().len(), 1);
    assert_eq!(ctx.cache().stats().allocations, 1);
    assert_eq!(ctx.cache().stats().reuses, 2);
}

#[test]
fn options_default_and_ignore_unknown_fields() {
    let opts: ChromaticOpts = serde_json::from_str(r#"{ "offset": -2, "bogus": 1 }"#).unwrap();
    assert_eq!(opts.offset, -2);
    assert_eq!(opts.opacity, 0.3);
}

#[test]
fn external_source_needs_no_snapshot_buffer() {
    let mut ctx = FxContext::with_seed(1);
    let mut frame = FrameBuffer::solid(4, 4, Rgba8::new(90, 90, 90, 255));
    let source = FrameBuffer::solid(4, 4, Rgba8::new(200, 10, 10, 255));

    chromatic(&mut ctx, &mut frame, &ChromaticOpts::default(), Some(&source));
    assert_eq!(ctx.cache().retained_bytes(), 4 * 4 * 4);

    chromatic(&mut ctx, &mut frame, &ChromaticOpts::default(), None);
    assert_eq!(ctx.cache().retained_bytes(), 2 * 4 * 4 * 4);
}

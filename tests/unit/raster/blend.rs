use super::*;

fn one(dst: [u8; 4], src: [u8; 4], comp: Composite) -> [u8; 4] {
    let mut d = dst;
    composite_run(&mut d, |_| src, comp);
    d
}

#[test]
fn opacity_0_is_noop_for_every_mode() {
    let dst = [10, 20, 30, 40];
    for mode in BlendMode::ALL {
        assert_eq!(one(dst, [200, 100, 50, 255], Composite::new(mode, 0.0)), dst);
        assert_eq!(one(dst, [200, 100, 50, 255], Composite::new(mode, -1.0)), dst);
        assert_eq!(one(dst, [200, 100, 50, 255], Composite::new(mode, f32::NAN)), dst);
    }
}

#[test]
fn src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(one(dst, [255, 255, 255, 0], Composite::normal(1.0)), dst);
}

#[test]
fn normal_opaque_src_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(one(dst, src, Composite::normal(1.0)), src);
}

#[test]
fn normal_half_opacity_mixes() {
    let out = one([0, 0, 0, 255], [255, 255, 255, 255], Composite::normal(0.5));
    assert_eq!(out[3], 255);
    assert!((127..=128).contains(&out[0]));
}

#[test]
fn multiply_by_pure_red_isolates_red() {
    let out = one(
        [120, 80, 200, 255],
        [255, 0, 0, 255],
        Composite::new(BlendMode::Multiply, 1.0),
    );
    assert_eq!(out, [120, 0, 0, 255]);
}

#[test]
fn multiply_by_white_is_identity_on_opaque() {
    let dst = [120, 80, 200, 255];
    let out = one(dst, [255, 255, 255, 255], Composite::new(BlendMode::Multiply, 1.0));
    assert_eq!(out, dst);
}

#[test]
fn multiply_onto_transparent_shows_source() {
    let out = one(
        [0, 0, 0, 0],
        [0, 0, 255, 255],
        Composite::new(BlendMode::Multiply, 1.0),
    );
    assert_eq!(out, [0, 0, 255, 255]);
}

#[test]
fn lighter_adds_and_saturates() {
    let out = one(
        [200, 10, 0, 255],
        [100, 20, 0, 255],
        Composite::new(BlendMode::Lighter, 1.0),
    );
    assert_eq!(out, [255, 30, 0, 255]);

    let dst = [40, 50, 60, 255];
    let out = one(dst, [0, 0, 0, 255], Composite::new(BlendMode::Lighter, 1.0));
    assert_eq!(out, dst);
}

#[test]
fn saturation_with_gray_source_desaturates_fully() {
    let out = one(
        [200, 40, 90, 255],
        [128, 128, 128, 255],
        Composite::new(BlendMode::Saturation, 1.0),
    );
    assert_eq!(out[0], out[1]);
    assert_eq!(out[1], out[2]);
    assert_eq!(out[3], 255);
}

#[test]
fn saturation_keeps_gray_backdrop_gray() {
    let dst = [90, 90, 90, 255];
    let out = one(dst, [255, 0, 0, 255], Composite::new(BlendMode::Saturation, 1.0));
    assert_eq!(out, dst);
}

#[test]
fn caps_without_drops_one_mode() {
    let caps = BlendCaps::ALL.without(BlendMode::Saturation);
    assert!(!caps.supports(BlendMode::Saturation));
    assert!(caps.supports(BlendMode::Multiply));
    assert_eq!(BlendCaps::default(), BlendCaps::ALL);
}

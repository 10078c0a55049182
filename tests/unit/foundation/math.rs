use super::*;

#[test]
fn unit_and_byte_are_inverse_on_bytes() {
    for v in [0u8, 1, 64, 128, 200, 255] {
        assert_eq!(byte(unit(v)), v);
    }
    assert_eq!(byte(-0.5), 0);
    assert_eq!(byte(1.5), 255);
}

#[test]
fn scale_floor_stays_in_span() {
    assert_eq!(scale_floor(0.0, 10), 0);
    assert_eq!(scale_floor(0.999, 10), 9);
    assert_eq!(scale_floor(1.0, 10), 9);
    assert_eq!(scale_floor(0.5, 0), 0);
}

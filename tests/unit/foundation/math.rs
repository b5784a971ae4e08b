use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(255, 0), 0);
}

#[test]
fn premultiply_clears_transparent_pixels() {
    let mut px = [10u8, 20, 30, 0, 200, 100, 50, 255];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [0, 0, 0, 0, 200, 100, 50, 255]);
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut px = [128u8, 64, 0, 128];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [255, 128, 0, 128]);
}

#[test]
fn premul_roundtrip_is_stable_for_opaque_and_clear() {
    let src = [1u8, 2, 3, 255, 9, 9, 9, 0];
    let mut px = src;
    premultiply_rgba8_in_place(&mut px);
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &src[..4]);
    assert_eq!(&px[4..], &[0, 0, 0, 0]);
}

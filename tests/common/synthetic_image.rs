use image::Rgba;
use pixelsort::Rgba16Image;

/// Opaque horizontal gray ramp, darkest on the left.
pub fn gray_ramp(width: u32, height: u32) -> Rgba16Image {
    assert!(width > 1, "ramp needs at least two columns");
    Rgba16Image::from_fn(width, height, |x, _| {
        let v = (x as u64 * 65535 / (width as u64 - 1)) as u16;
        Rgba([v, v, v, 65535])
    })
}

/// Deterministic pseudo-random pixels with a mix of alpha values.
pub fn noise(width: u32, height: u32, seed: u32) -> Rgba16Image {
    Rgba16Image::from_fn(width, height, |x, y| {
        let mut h = seed ^ x.wrapping_mul(0x9E37_79B9) ^ y.wrapping_mul(0x85EB_CA6B);
        h ^= h >> 15;
        h = h.wrapping_mul(0x2C1B_3C6D);
        h ^= h >> 12;
        Rgba([h as u16, (h >> 8) as u16, (h >> 16) as u16, (h >> 4) as u16])
    })
}

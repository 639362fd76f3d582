use palette::Srgb;

use crate::error::DownsampleError;

/// Pixels with alpha below this fraction are treated as background.
pub const ALPHA_THRESHOLD: f64 = 0.5;

/// Pack 8-bit channels into a `0xAARRGGBB` word.
#[inline]
pub fn pack_argb(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Split a `0xAARRGGBB` word into `[a, r, g, b]`.
#[inline]
pub fn unpack_argb(px: u32) -> [u8; 4] {
    px.to_be_bytes()
}

/// Returns the RGB of an opaque enough pixel, or `None` if it should be skipped.
#[inline(always)]
pub fn decode_pixel(px: u32) -> Option<Srgb<f64>> {
    let [a, r, g, b] = unpack_argb(px);
    let alpha = a as f64 / 255.0;
    if alpha < ALPHA_THRESHOLD {
        return None;
    }
    Some(Srgb::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0))
}

/// Validate the caller-supplied dimensions against the buffer and return the
/// `height * width` samples that make up the image.
pub fn image_samples(data: &[u32], height: u32, width: u32) -> Result<&[u32], DownsampleError> {
    if height == 0 || width == 0 {
        return Err(DownsampleError::InvalidDimensions {
            height: height as i64,
            width: width as i64,
        });
    }
    let n = (height as usize)
        .checked_mul(width as usize)
        .ok_or(DownsampleError::DimensionsOverflow { height, width })?;
    if data.len() < n {
        return Err(DownsampleError::BufferTooShort { expected: n, actual: data.len() });
    }
    Ok(&data[..n])
}

/// Convert signed host dimensions, rejecting anything not strictly positive.
pub fn js_dims(height: i32, width: i32) -> Result<(u32, u32), DownsampleError> {
    match (u32::try_from(height), u32::try_from(width)) {
        (Ok(h), Ok(w)) if h > 0 && w > 0 => Ok((h, w)),
        _ => Err(DownsampleError::InvalidDimensions {
            height: height as i64,
            width: width as i64,
        }),
    }
}

/// Iterate the opaque pixels of a validated sample slice, in buffer order.
pub fn opaque_pixels(samples: &[u32]) -> impl Iterator<Item = Srgb<f64>> + '_ {
    samples.iter().copied().filter_map(decode_pixel)
}

/// Repack an `image` RGBA buffer into `0xAARRGGBB` words, row-major.
#[cfg(not(target_arch = "wasm32"))]
pub fn argb_from_rgba(img: &image::RgbaImage) -> Vec<u32> {
    img.pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            pack_argb(r, g, b, a)
        })
        .collect()
}

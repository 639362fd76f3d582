use js_sys::Array;
use log::debug;
use wasm_bindgen::prelude::*;

pub mod error;
pub mod histogram;
pub mod hsv;
pub mod pixel;

pub use error::DownsampleError;
pub use histogram::{Bucket, DominantColor, Histogram, N_BUCKETS, TOP_K};
pub use hsv::{ACHROMATIC_EPSILON, Hsv, hsv_to_rgb, rgb_to_hsv};
pub use pixel::{ALPHA_THRESHOLD, pack_argb, unpack_argb};
#[cfg(not(target_arch = "wasm32"))]
pub use pixel::argb_from_rgba;

/// Reusable dominant-color extractor.
///
/// Owns one histogram that is reset at the start of every call, so a single
/// value can process many images without reallocating. Taking `&mut self`
/// keeps calls on one extractor from overlapping.
#[derive(Clone, Debug, Default)]
pub struct Downsampler {
    hist: Histogram,
}

impl Downsampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the `TOP_K` dominant colors of a packed ARGB image.
    ///
    /// `data` holds at least `height * width` samples in row-major order;
    /// anything past that is ignored. Images with no pixel at or above the
    /// alpha threshold produce four zero-weight black entries.
    pub fn downsample(
        &mut self,
        data: &[u32],
        height: u32,
        width: u32,
    ) -> Result<[DominantColor; TOP_K], DownsampleError> {
        let samples = pixel::image_samples(data, height, width)?;

        self.hist.reset();
        for rgb in pixel::opaque_pixels(samples) {
            self.hist.accumulate(rgb_to_hsv(rgb));
        }

        debug!(
            "downsample {height}x{width}: {} of {} pixels opaque",
            self.hist.effective_count(),
            samples.len()
        );

        Ok(self.hist.dominant())
    }
}

/// One-shot version of [`Downsampler::downsample`] with a fresh histogram.
pub fn downsample(
    data: &[u32],
    height: u32,
    width: u32,
) -> Result<[DominantColor; TOP_K], DownsampleError> {
    Downsampler::new().downsample(data, height, width)
}

/// Dominant colors of a decoded `image` buffer.
#[cfg(not(target_arch = "wasm32"))]
pub fn dominant_colors_rgba(
    img: &image::RgbaImage,
) -> Result<[DominantColor; TOP_K], DownsampleError> {
    let (w, h) = img.dimensions();
    downsample(&argb_from_rgba(img), h, w)
}

/// JavaScript entry point.
///
/// Returns an array of four `[r, g, b, weight]` arrays in descending
/// prevalence.
#[wasm_bindgen(js_name = downsample)]
pub fn downsample_js(data: &[u32], height: i32, width: i32) -> Result<Array, JsValue> {
    let (h, w) = pixel::js_dims(height, width).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let colors = downsample(data, h, w).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let result = Array::new();
    for c in colors.iter() {
        let entry = Array::new();
        for v in c.to_array() {
            entry.push(&JsValue::from_f64(v));
        }
        result.push(&entry);
    }
    Ok(result)
}

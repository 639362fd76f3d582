use log::trace;
use palette::Srgb;

use crate::hsv::{Hsv, hsv_to_rgb};

// ------------------------------------------------------------
// Buckets and results
// ------------------------------------------------------------

/// Number of hue buckets in the histogram.
pub const N_BUCKETS: usize = 128;

/// Number of dominant colors reported per image.
pub const TOP_K: usize = 4;

/// Running totals for one hue slice.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bucket {
    pub count: u64,
    pub total_h: f64,
    pub total_s: f64,
    pub total_v: f64,
}

impl Bucket {
    /// Mean HSV of the pixels in this bucket; black when empty.
    pub fn mean(&self) -> Hsv {
        if self.count == 0 {
            return Hsv::new(0.0, 0.0, 0.0);
        }
        let n = self.count as f64;
        Hsv::new(self.total_h / n, self.total_s / n, self.total_v / n)
    }
}

/// A representative color and the share of opaque pixels it stands for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DominantColor {
    pub color: Srgb<f64>,
    pub weight: f64,
}

impl Default for DominantColor {
    fn default() -> Self {
        Self { color: Srgb::new(0.0, 0.0, 0.0), weight: 0.0 }
    }
}

impl DominantColor {
    /// Red channel in `[0, 1]`.
    pub fn r(&self) -> f64 {
        self.color.red
    }

    /// Green channel in `[0, 1]`.
    pub fn g(&self) -> f64 {
        self.color.green
    }

    /// Blue channel in `[0, 1]`.
    pub fn b(&self) -> f64 {
        self.color.blue
    }

    /// Uppercase `RRGGBB`.
    pub fn to_hex(&self) -> String {
        let c: Srgb<u8> = self.color.into_format::<u8>();
        format!("{:02X}{:02X}{:02X}", c.red, c.green, c.blue)
    }

    /// `[r, g, b, weight]`, the layout handed to hosts.
    pub fn to_array(&self) -> [f64; 4] {
        [self.r(), self.g(), self.b(), self.weight]
    }
}

// ------------------------------------------------------------
// Histogram
// ------------------------------------------------------------

/// Fixed-resolution hue histogram.
#[derive(Clone, Debug)]
pub struct Histogram {
    buckets: [Bucket; N_BUCKETS],
    effective: u64,
}

impl Default for Histogram {
    fn default() -> Self {
        Self { buckets: [Bucket::default(); N_BUCKETS], effective: 0 }
    }
}

/// Map a hue to its bucket. Undefined hues go to bucket 0.
#[inline]
pub fn bucket_index(hue: Option<f64>) -> usize {
    match hue {
        Some(h) if h.is_finite() => {
            let idx = (h / 360.0 * (N_BUCKETS - 1) as f64).floor();
            idx.clamp(0.0, (N_BUCKETS - 1) as f64) as usize
        }
        _ => 0,
    }
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.buckets.fill(Bucket::default());
        self.effective = 0;
    }

    pub fn accumulate(&mut self, hsv: Hsv) {
        let bucket = &mut self.buckets[bucket_index(hsv.hue)];
        bucket.count += 1;
        bucket.total_h += hsv.hue.unwrap_or(0.0);
        bucket.total_s += hsv.saturation;
        bucket.total_v += hsv.value;
        self.effective += 1;
    }

    /// Number of pixels accumulated since the last reset.
    pub fn effective_count(&self) -> u64 {
        self.effective
    }

    pub fn buckets(&self) -> &[Bucket; N_BUCKETS] {
        &self.buckets
    }

    /// The `TOP_K` most populated buckets as colors with normalized weights.
    ///
    /// Buckets with equal counts keep ascending index order. With zero
    /// effective pixels every entry is zero-weight black.
    pub fn dominant(&self) -> [DominantColor; TOP_K] {
        let mut ranked: [(usize, Bucket); N_BUCKETS] =
            std::array::from_fn(|i| (i, self.buckets[i]));
        // stable: ties stay in index order
        ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count));

        let mut out = [DominantColor::default(); TOP_K];
        if self.effective == 0 {
            return out;
        }

        let total = self.effective as f64;
        for (slot, (idx, bucket)) in out.iter_mut().zip(ranked.iter()) {
            trace!("bucket {idx}: count {}", bucket.count);
            *slot = DominantColor {
                color: hsv_to_rgb(bucket.mean()),
                weight: bucket.count as f64 / total,
            };
        }
        out
    }
}

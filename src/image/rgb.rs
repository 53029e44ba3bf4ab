//! Owned three-channel f32 image, row-major with interleaved RGB samples.
//!
//! Each row holds `3 * w` floats. Values are 0–255 straight after decode,
//! [−1, 1] while travelling through the generator, and back to 0–255 before
//! encoding; see `normalize`.
#[derive(Clone, Debug)]
pub struct RgbImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order, 3 samples (R, G, B) per pixel
    pub data: Vec<f32>,
}

impl RgbImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h * 3],
        }
    }

    /// Wrap an existing interleaved sample buffer.
    ///
    /// Returns `None` when `data.len() != w * h * 3`.
    pub fn from_raw(w: usize, h: usize, data: Vec<f32>) -> Option<Self> {
        (data.len() == w * h * 3).then_some(Self { w, h, data })
    }

    #[inline]
    /// Linear index of the R sample of the pixel at (x, y).
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.w + x) * 3
    }

    #[inline]
    /// Get the (R, G, B) samples at (x, y).
    pub fn get_pixel(&self, x: usize, y: usize) -> [f32; 3] {
        let i = self.idx(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    /// Set the (R, G, B) samples at (x, y).
    pub fn set_pixel(&mut self, x: usize, y: usize, px: [f32; 3]) {
        let i = self.idx(x, y);
        self.data[i..i + 3].copy_from_slice(&px);
    }

    #[inline]
    /// Borrow row `y` as a slice of `3 * w` interleaved samples.
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.w * 3;
        &self.data[start..start + self.w * 3]
    }

    #[inline]
    /// Borrow row `y` mutably.
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.w * 3;
        let end = start + self.w * 3;
        &mut self.data[start..end]
    }

    /// (width, height) pair, handy for shape checks.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.w, self.h)
    }
}

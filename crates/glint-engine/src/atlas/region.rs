use glint_math::Vec2;

/// Texture coordinates of a rectangular sub-image.
///
/// Four `(u, v)` pairs in the order bottom-left, bottom-right, top-right,
/// top-left. Pixel rectangles are given with a top-left origin (image space);
/// `v` is flipped so the region samples correctly from a texture whose `v`
/// axis points up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureRegion {
    data: [f32; 8],
}

const FLIP_X: [usize; 8] = [2, 3, 0, 1, 6, 7, 4, 5];
const FLIP_Y: [usize; 8] = [6, 7, 4, 5, 2, 3, 0, 1];
const FLIP_XY: [usize; 8] = [4, 5, 6, 7, 0, 1, 2, 3];

impl Default for TextureRegion {
    fn default() -> Self {
        Self::FULL
    }
}

impl TextureRegion {
    /// The whole texture.
    pub const FULL: Self = Self {
        data: [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
    };

    /// Region for the pixel rectangle `(x, y, width, height)` inside an
    /// `atlas_width × atlas_height` texture.
    pub fn new(x: f32, y: f32, width: f32, height: f32, atlas_width: f32, atlas_height: f32) -> Self {
        let mut region = Self::FULL;
        region.set(x, y, width, height, atlas_width, atlas_height);
        region
    }

    #[inline]
    pub const fn from_array(data: [f32; 8]) -> Self {
        Self { data }
    }

    /// Recomputes the coordinates in place.
    pub fn set(&mut self, x: f32, y: f32, width: f32, height: f32, atlas_width: f32, atlas_height: f32) {
        let wr = width / atlas_width;
        let hr = height / atlas_height;
        let xr = x / atlas_width;
        let yr = (atlas_height - y) / atlas_height;
        self.data = [xr, yr - hr, xr + wr, yr - hr, xr + wr, yr, xr, yr];
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 8] {
        &self.data
    }

    /// Corner `i` (0 bottom-left, 1 bottom-right, 2 top-right, 3 top-left).
    ///
    /// Panics if `i > 3`.
    #[inline]
    pub fn corner(&self, i: usize) -> Vec2 {
        Vec2::new(self.data[2 * i], self.data[2 * i + 1])
    }

    fn permuted(&self, table: &[usize; 8]) -> Self {
        Self {
            data: core::array::from_fn(|i| self.data[table[i]]),
        }
    }

    // ── flips ─────────────────────────────────────────────────────────────

    /// Mirrors horizontally.
    pub fn flip_x(&self) -> Self {
        self.permuted(&FLIP_X)
    }

    pub fn flip_x_into<'o>(&self, out: &'o mut Self) -> &'o mut Self {
        *out = self.flip_x();
        out
    }

    /// Mirrors vertically.
    pub fn flip_y(&self) -> Self {
        self.permuted(&FLIP_Y)
    }

    pub fn flip_y_into<'o>(&self, out: &'o mut Self) -> &'o mut Self {
        *out = self.flip_y();
        out
    }

    /// Half-turn rotation (both axes).
    pub fn flip_xy(&self) -> Self {
        self.permuted(&FLIP_XY)
    }

    pub fn flip_xy_into<'o>(&self, out: &'o mut Self) -> &'o mut Self {
        *out = self.flip_xy();
        out
    }
}

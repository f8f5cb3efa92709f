use crate::vector::Vec2;

use super::Mat3;

impl Mat3 {
    /// Builds from three columns given as consecutive values.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub const fn new(
        a0: f32, a1: f32, a2: f32,
        b0: f32, b1: f32, b2: f32,
        c0: f32, c1: f32, c2: f32,
    ) -> Self {
        Self::from_cols([[a0, a1, a2], [b0, b1, b2], [c0, c1, c2]])
    }

    #[inline]
    pub const fn from_cols_array(v: [f32; 9]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7], v[8])
    }

    pub fn from_rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
    }

    pub fn from_rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
    }

    /// In-plane (2D homogeneous) rotation; identical to a rotation about Z.
    pub fn from_rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
    }

    // ── scale ─────────────────────────────────────────────────────────────

    /// Scales columns 0, 1, 2 by `x`, `y`, `z`.
    pub fn scale(&self, x: f32, y: f32, z: f32) -> Self {
        let k = [x, y, z];
        Self::from_fn(|c, r| self.cols[c][r] * k[c])
    }

    #[inline]
    pub fn scale_into<'o>(&self, x: f32, y: f32, z: f32, out: &'o mut Self) -> &'o mut Self {
        *out = self.scale(x, y, z);
        out
    }

    #[inline]
    pub fn scale_in_place(&mut self, x: f32, y: f32, z: f32) {
        *self = self.scale(x, y, z);
    }

    // ── 2D translation ────────────────────────────────────────────────────

    /// Accumulates `self · [x, y, 1]` into the third column.
    pub fn translate_2d(&self, v: Vec2) -> Self {
        let mut out = *self;
        out.translate_2d_in_place(v);
        out
    }

    #[inline]
    pub fn translate_2d_into<'o>(&self, v: Vec2, out: &'o mut Self) -> &'o mut Self {
        *out = self.translate_2d(v);
        out
    }

    pub fn translate_2d_in_place(&mut self, v: Vec2) {
        let (x, y) = (v.x(), v.y());
        for r in 0..3 {
            self.cols[2][r] += self.cols[0][r] * x + self.cols[1][r] * y;
        }
    }

    // ── rotation ──────────────────────────────────────────────────────────

    /// `self · Rz(angle)`; the translation column is unchanged.
    #[inline]
    pub fn rotate_2d(&self, angle: f32) -> Self {
        self.multiply_matrix(&Self::from_rotation_z(angle))
    }

    #[inline]
    pub fn rotate_2d_into<'o>(&self, angle: f32, out: &'o mut Self) -> &'o mut Self {
        *out = self.rotate_2d(angle);
        out
    }

    #[inline]
    pub fn rotate_2d_in_place(&mut self, angle: f32) {
        self.multiply_matrix_assign(&Self::from_rotation_z(angle));
    }

    #[inline]
    pub fn rotate_x(&self, angle: f32) -> Self {
        self.multiply_matrix(&Self::from_rotation_x(angle))
    }

    #[inline]
    pub fn rotate_y(&self, angle: f32) -> Self {
        self.multiply_matrix(&Self::from_rotation_y(angle))
    }

    #[inline]
    pub fn rotate_z(&self, angle: f32) -> Self {
        self.rotate_2d(angle)
    }
}

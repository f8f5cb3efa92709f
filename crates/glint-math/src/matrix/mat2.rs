use super::Mat2;

impl Mat2 {
    /// Builds from column values: first column `(a0, a1)`, second `(b0, b1)`.
    #[inline]
    pub const fn new(a0: f32, a1: f32, b0: f32, b1: f32) -> Self {
        Self::from_cols([[a0, a1], [b0, b1]])
    }

    #[inline]
    pub const fn from_cols_array(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    /// Counter-clockwise rotation by `angle` radians.
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, s, -s, c)
    }

    /// Scales the first column by `x` and the second by `y`.
    #[inline]
    pub fn scale(&self, x: f32, y: f32) -> Self {
        Self::from_cols([
            [self.cols[0][0] * x, self.cols[0][1] * x],
            [self.cols[1][0] * y, self.cols[1][1] * y],
        ])
    }

    #[inline]
    pub fn scale_into<'o>(&self, x: f32, y: f32, out: &'o mut Self) -> &'o mut Self {
        *out = self.scale(x, y);
        out
    }

    #[inline]
    pub fn scale_in_place(&mut self, x: f32, y: f32) {
        *self = self.scale(x, y);
    }

    /// `self · R(angle)`.
    #[inline]
    pub fn rotate(&self, angle: f32) -> Self {
        self.multiply_matrix(&Self::from_angle(angle))
    }

    #[inline]
    pub fn rotate_into<'o>(&self, angle: f32, out: &'o mut Self) -> &'o mut Self {
        *out = self.rotate(angle);
        out
    }

    #[inline]
    pub fn rotate_in_place(&mut self, angle: f32) {
        *self = self.rotate(angle);
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::vector::Vec2;

    #[test]
    fn quarter_turn_maps_x_to_y() {
        let v = Mat2::IDENTITY.rotate(FRAC_PI_2).multiply_vector(Vec2::new(1.0, 0.0));
        assert!(v.approx_eq(Vec2::new(0.0, 1.0), 1e-6));
    }

    #[test]
    fn scale_columns() {
        let m = Mat2::new(1.0, 2.0, 3.0, 4.0).scale(2.0, 10.0);
        assert_eq!(m, Mat2::new(2.0, 4.0, 30.0, 40.0));

        let mut ip = Mat2::IDENTITY;
        ip.scale_in_place(3.0, 4.0);
        assert_eq!(ip.multiply_vector(Vec2::new(1.0, 1.0)), Vec2::new(3.0, 4.0));
    }
}

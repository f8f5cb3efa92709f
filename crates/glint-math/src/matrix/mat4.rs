use crate::vector::{Vec3, Vec4};

use super::Mat4;

impl Mat4 {
    #[inline]
    pub const fn from_cols_array(v: [f32; 16]) -> Self {
        Self::from_cols([
            [v[0], v[1], v[2], v[3]],
            [v[4], v[5], v[6], v[7]],
            [v[8], v[9], v[10], v[11]],
            [v[12], v[13], v[14], v[15]],
        ])
    }

    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        Self::IDENTITY.translate(v)
    }

    #[inline]
    pub fn from_scale(v: Vec3) -> Self {
        Self::IDENTITY.scale(v)
    }

    pub fn from_rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn from_rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn from_rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    // ── projection / view ─────────────────────────────────────────────────

    /// Orthographic projection for the box `[left, right] × [bottom, top] × [near, far]`.
    ///
    /// Matches the classic OpenGL formulation bit for bit:
    /// diagonal `-2/(l-r)`, `-2/(b-t)`, `2/(n-f)`; translation
    /// `(l+r)/(l-r)`, `(t+b)/(b-t)`, `(f+n)/(n-f)`.
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let lr = 1.0 / (left - right);
        let bt = 1.0 / (bottom - top);
        let nf = 1.0 / (near - far);
        Self::from_cols([
            [-2.0 * lr, 0.0, 0.0, 0.0],
            [0.0, -2.0 * bt, 0.0, 0.0],
            [0.0, 0.0, 2.0 * nf, 0.0],
            [(left + right) * lr, (top + bottom) * bt, (far + near) * nf, 1.0],
        ])
    }

    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn ortho_into<'o>(
        out: &'o mut Self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> &'o mut Self {
        *out = Self::ortho(left, right, bottom, top, near, far);
        out
    }

    /// Right-handed view matrix looking from `eye` towards `target`.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);
        Self::from_cols([
            [s.x(), u.x(), -f.x(), 0.0],
            [s.y(), u.y(), -f.y(), 0.0],
            [s.z(), u.z(), -f.z(), 0.0],
            [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
        ])
    }

    // ── scale ─────────────────────────────────────────────────────────────

    /// Scales the first three columns by `v`; the translation column is untouched.
    pub fn scale(&self, v: Vec3) -> Self {
        let k = [v.x(), v.y(), v.z(), 1.0];
        Self::from_fn(|c, r| self.cols[c][r] * k[c])
    }

    #[inline]
    pub fn scale_into<'o>(&self, v: Vec3, out: &'o mut Self) -> &'o mut Self {
        *out = self.scale(v);
        out
    }

    #[inline]
    pub fn scale_in_place(&mut self, v: Vec3) {
        *self = self.scale(v);
    }

    // ── translate ─────────────────────────────────────────────────────────

    /// Returns a copy with `self · [x, y, z, 1]` in the translation column.
    pub fn translate(&self, v: Vec3) -> Self {
        let mut out = *self;
        out.translate_in_place(v);
        out
    }

    /// Copies the linear block into `out` and writes the accumulated translation.
    #[inline]
    pub fn translate_into<'o>(&self, v: Vec3, out: &'o mut Self) -> &'o mut Self {
        *out = self.translate(v);
        out
    }

    /// Accumulates `self · [x, y, z, 1]` into the existing translation column.
    pub fn translate_in_place(&mut self, v: Vec3) {
        let t = self.multiply_vector(v.extend(1.0));
        self.cols[3] = t.0;
    }

    // ── rotate ────────────────────────────────────────────────────────────

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
        self.multiply_matrix(&Self::from_rotation_z(angle))
    }

    #[inline]
    pub fn rotate_x_in_place(&mut self, angle: f32) {
        self.multiply_matrix_assign(&Self::from_rotation_x(angle));
    }

    #[inline]
    pub fn rotate_y_in_place(&mut self, angle: f32) {
        self.multiply_matrix_assign(&Self::from_rotation_y(angle));
    }

    #[inline]
    pub fn rotate_z_in_place(&mut self, angle: f32) {
        self.multiply_matrix_assign(&Self::from_rotation_z(angle));
    }

    // ── homogeneous helpers ───────────────────────────────────────────────

    /// Maps a point (`w = 1`). No perspective divide.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.multiply_vector(p.extend(1.0)).truncate()
    }

    /// Maps a direction (`w = 0`); translation does not apply.
    #[inline]
    pub fn transform_direction(&self, d: Vec3) -> Vec3 {
        self.multiply_vector(d.extend(0.0)).truncate()
    }

    #[inline]
    pub fn translation(&self) -> Vec4 {
        self.col(3)
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::FRAC_PI_2;

    use super::*;

    // ── ortho ─────────────────────────────────────────────────────────────

    #[test]
    fn ortho_unit_box_flips_z_only() {
        let m = Mat4::ortho(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
        assert_eq!(
            m.as_slice(),
            &[
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, -1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ]
        );
    }

    #[test]
    fn ortho_screen_space() {
        // 800x600 top-left origin, the usual 2D sprite setup.
        let m = Mat4::ortho(0.0, 800.0, 600.0, 0.0, -1.0, 1.0);
        assert_eq!(m[0], 2.0 / 800.0);
        assert_eq!(m[5], -2.0 / 600.0);
        let tl = m.transform_point(Vec3::new(0.0, 0.0, 0.0));
        let br = m.transform_point(Vec3::new(800.0, 600.0, 0.0));
        assert!(tl.approx_eq(Vec3::new(-1.0, 1.0, 0.0), 1e-6));
        assert!(br.approx_eq(Vec3::new(1.0, -1.0, 0.0), 1e-6));

        let mut out = Mat4::ZERO;
        Mat4::ortho_into(&mut out, 0.0, 800.0, 600.0, 0.0, -1.0, 1.0);
        assert_eq!(out, m);
    }

    // ── translate / scale ─────────────────────────────────────────────────

    #[test]
    fn translate_accumulates_through_linear_block() {
        let m = Mat4::from_scale(Vec3::new(2.0, 2.0, 2.0)).translate(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.translation(), Vec4::new(2.0, 4.0, 6.0, 1.0));

        let mut ip = m;
        ip.translate_in_place(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ip.translation(), Vec4::new(4.0, 4.0, 6.0, 1.0));
    }

    #[test]
    fn translate_into_copies_linear_block() {
        let src = Mat4::from_rotation_z(0.3);
        let mut out = Mat4::ZERO;
        src.translate_into(Vec3::new(1.0, 0.0, 0.0), &mut out);
        assert_eq!(out.col(0), src.col(0));
        assert_eq!(out.col(2), src.col(2));
        assert_eq!(src.translation(), Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn scale_leaves_translation_column() {
        let m = Mat4::from_translation(Vec3::new(5.0, 6.0, 7.0)).scale(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(m.translation(), Vec4::new(5.0, 6.0, 7.0, 1.0));
        assert_eq!(m.transform_point(Vec3::new(1.0, 1.0, 1.0)), Vec3::new(7.0, 9.0, 11.0));

        let mut out = Mat4::ZERO;
        Mat4::IDENTITY.scale_into(Vec3::new(2.0, 2.0, 2.0), &mut out);
        assert_eq!(out.determinant(), 8.0);
    }

    // ── rotate ────────────────────────────────────────────────────────────

    #[test]
    fn principal_axis_rotations() {
        let p = Mat4::IDENTITY.rotate_z(FRAC_PI_2).transform_point(Vec3::X);
        assert!(p.approx_eq(Vec3::Y, 1e-6));
        let p = Mat4::IDENTITY.rotate_x(FRAC_PI_2).transform_point(Vec3::Y);
        assert!(p.approx_eq(Vec3::Z, 1e-6));
        let p = Mat4::IDENTITY.rotate_y(FRAC_PI_2).transform_point(Vec3::Z);
        assert!(p.approx_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn in_place_rotation_matches_allocating() {
        let base = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let mut m = base;
        m.rotate_y_in_place(0.7);
        assert!(m.approx_eq(&base.rotate_y(0.7), 1e-6));
        m.rotate_x_in_place(-0.2);
        m.rotate_z_in_place(1.1);
        assert!(m.approx_eq(&base.rotate_y(0.7).rotate_x(-0.2).rotate_z(1.1), 1e-6));
    }

    #[test]
    fn direction_ignores_translation() {
        let m = Mat4::from_translation(Vec3::new(9.0, 9.0, 9.0));
        assert_eq!(m.transform_direction(Vec3::X), Vec3::X);
    }

    // ── look_at ───────────────────────────────────────────────────────────

    #[test]
    fn look_at_moves_target_onto_negative_z() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let view = Mat4::look_at(eye, Vec3::zero(), Vec3::Y);
        assert!(view.transform_point(Vec3::zero()).approx_eq(Vec3::new(0.0, 0.0, -5.0), 1e-5));
        assert!(view.transform_point(eye).approx_eq(Vec3::zero(), 1e-5));
    }
}

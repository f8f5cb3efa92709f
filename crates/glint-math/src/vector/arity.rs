use super::{Vec2, Vec3, Vec4};

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self([x, y])
    }

    #[inline]
    pub const fn x(self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub const fn y(self) -> f32 {
        self.0[1]
    }

    /// Extends with `z`.
    #[inline]
    pub const fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.0[0], self.0[1], z)
    }
}

impl Vec3 {
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    #[inline]
    pub const fn x(self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub const fn y(self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub const fn z(self) -> f32 {
        self.0[2]
    }

    /// Extends with `w` (1 for points, 0 for directions).
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.0[0], self.0[1], self.0[2], w)
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = rhs.0;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl Vec4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    #[inline]
    pub const fn x(self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub const fn y(self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub const fn z(self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub const fn w(self) -> f32 {
        self.0[3]
    }

    /// Drops `w` without dividing by it.
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Y.cross(Vec3::X), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn extend_and_truncate() {
        let v = Vec2::new(1.0, 2.0).extend(3.0).extend(1.0);
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(v.truncate(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.w(), 1.0);
    }
}

//! Fixed-arity vectors.
//!
//! `Vector<N>` is a plain `[f32; N]` with value semantics. The aliases
//! [`Vec2`], [`Vec3`] and [`Vec4`] are the arities the renderer uses.
//!
//! Vector-vs-scalar operands are chosen statically: `add_vec` / `add_scalar`
//! (and the operator overloads `v + w`, `v + 1.0`) never inspect a runtime
//! length.

mod arity;
mod ops;

/// Fixed-length vector of `N` single-precision components.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct Vector<const N: usize>(pub [f32; N]);

pub type Vec2 = Vector<2>;
pub type Vec3 = Vector<3>;
pub type Vec4 = Vector<4>;

impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> Vector<N> {
    /// Number of components.
    pub const LEN: usize = N;

    #[inline]
    pub const fn from_array(components: [f32; N]) -> Self {
        Self(components)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self([0.0; N])
    }

    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self([value; N])
    }

    #[inline]
    pub const fn to_array(self) -> [f32; N] {
        self.0
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    #[inline]
    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self(core::array::from_fn(|i| f(self.0[i])))
    }

    #[inline]
    fn zip(self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self(core::array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }

    // ── metrics ───────────────────────────────────────────────────────────

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.0.iter().zip(rhs.0.iter()).map(|(a, b)| a * b).sum()
    }

    #[inline]
    pub fn squared_magnitude(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length, `sqrt(sum of squares)`.
    #[inline]
    pub fn magnitude(self) -> f32 {
        self.squared_magnitude().sqrt()
    }

    #[inline]
    pub fn distance(self, rhs: Self) -> f32 {
        self.squared_distance(rhs).sqrt()
    }

    /// Squared distance; skips the square root for comparison-heavy code.
    #[inline]
    pub fn squared_distance(self, rhs: Self) -> f32 {
        self.0
            .iter()
            .zip(rhs.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }

    // ── componentwise arithmetic ──────────────────────────────────────────

    #[inline]
    pub fn add_vec(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }

    #[inline]
    pub fn sub_vec(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }

    #[inline]
    pub fn mul_vec(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a * b)
    }

    #[inline]
    pub fn div_vec(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a / b)
    }

    #[inline]
    pub fn add_vec_into(self, rhs: Self, out: &mut Self) -> &mut Self {
        *out = self.add_vec(rhs);
        out
    }

    #[inline]
    pub fn sub_vec_into(self, rhs: Self, out: &mut Self) -> &mut Self {
        *out = self.sub_vec(rhs);
        out
    }

    #[inline]
    pub fn mul_vec_into(self, rhs: Self, out: &mut Self) -> &mut Self {
        *out = self.mul_vec(rhs);
        out
    }

    #[inline]
    pub fn div_vec_into(self, rhs: Self, out: &mut Self) -> &mut Self {
        *out = self.div_vec(rhs);
        out
    }

    // ── scalar broadcast ──────────────────────────────────────────────────

    #[inline]
    pub fn add_scalar(self, f: f32) -> Self {
        self.map(|a| a + f)
    }

    #[inline]
    pub fn sub_scalar(self, f: f32) -> Self {
        self.map(|a| a - f)
    }

    #[inline]
    pub fn mul_scalar(self, f: f32) -> Self {
        self.map(|a| a * f)
    }

    #[inline]
    pub fn div_scalar(self, f: f32) -> Self {
        self.map(|a| a / f)
    }

    #[inline]
    pub fn add_scalar_into(self, f: f32, out: &mut Self) -> &mut Self {
        *out = self.add_scalar(f);
        out
    }

    #[inline]
    pub fn sub_scalar_into(self, f: f32, out: &mut Self) -> &mut Self {
        *out = self.sub_scalar(f);
        out
    }

    #[inline]
    pub fn mul_scalar_into(self, f: f32, out: &mut Self) -> &mut Self {
        *out = self.mul_scalar(f);
        out
    }

    #[inline]
    pub fn div_scalar_into(self, f: f32, out: &mut Self) -> &mut Self {
        *out = self.div_scalar(f);
        out
    }

    // ── derived ───────────────────────────────────────────────────────────

    /// Unit vector in the same direction.
    ///
    /// No zero check: a zero vector yields NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        self.div_scalar(self.magnitude())
    }

    #[inline]
    pub fn normalize_into(self, out: &mut Self) -> &mut Self {
        *out = self.normalize();
        out
    }

    #[inline]
    pub fn normalize_in_place(&mut self) {
        *self = self.normalize();
    }

    /// Projection of `self` onto `onto`: `(self·onto / |onto|²) · onto`.
    ///
    /// Projecting onto a zero vector yields NaN components.
    #[inline]
    pub fn project(self, onto: Self) -> Self {
        let comp = self.dot(onto) / onto.squared_magnitude();
        onto.mul_scalar(comp)
    }

    #[inline]
    pub fn project_into(self, onto: Self, out: &mut Self) -> &mut Self {
        *out = self.project(onto);
        out
    }

    /// Linear interpolation; `t = 0` gives `self`, `t = 1` gives `rhs`.
    #[inline]
    pub fn lerp(self, rhs: Self, t: f32) -> Self {
        self.zip(rhs, |a, b| a + (b - a) * t)
    }

    /// Componentwise comparison within `eps`.
    #[inline]
    pub fn approx_eq(self, rhs: Self, eps: f32) -> bool {
        self.0.iter().zip(rhs.0.iter()).all(|(a, b)| (a - b).abs() <= eps)
    }
}

use crate::matrix::Mat4;
use crate::vector::Vec3;

/// Eye position, look target and up vector, with the view and projection
/// matrices derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub model_view: Mat4,
    pub projection: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// At the origin, up = +Y, identity matrices.
    pub fn new() -> Self {
        Self {
            position: Vec3::zero(),
            target: Vec3::zero(),
            up: Vec3::Y,
            model_view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        }
    }

    /// Rebuilds `model_view` from position, target and up.
    ///
    /// Position equal to target leaves the view matrix full of NaN.
    pub fn look_at(&mut self) -> &Mat4 {
        self.model_view = Mat4::look_at(self.position, self.target, self.up);
        &self.model_view
    }

    pub fn set_ortho(&mut self, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) {
        self.projection = Mat4::ortho(left, right, bottom, top, near, far);
    }

    /// `projection · model_view`.
    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection.multiply_matrix(&self.model_view)
    }
}

//! Textured, tinted quads.

use glint_math::{Mat4, Vec2, Vec3};

use crate::atlas::TextureRegion;
use crate::vertex::{BufferError, VertexBuffer, VertexBufferBuilder};

/// Attribute names and component counts of [`Sprite::vertices`], in memory
/// order.
pub const SPRITE_ATTRIBUTES: [(&str, usize); 3] = [("a_position", 3), ("a_color", 4), ("a_tex_coord", 2)];

/// Unit quad corners (local space) paired with the region corner each one
/// samples. Two counter-clockwise triangles.
const QUAD: [([f32; 3], usize); 6] = [
    ([0.0, 0.0, 0.0], 0),
    ([1.0, 0.0, 0.0], 1),
    ([0.0, 1.0, 0.0], 3),
    ([0.0, 1.0, 0.0], 3),
    ([1.0, 0.0, 0.0], 1),
    ([1.0, 1.0, 0.0], 2),
];

/// A quad with its own placement. Geometry is a unit square; position, size
/// and angle live in [`model_matrix`](Self::model_matrix).
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub position: Vec3,
    pub size: Vec2,
    /// Rotation about +Z in radians, counter-clockwise.
    pub angle: f32,
    /// RGBA tint, multiplied with the texture sample.
    pub color: [f32; 4],
    pub region: TextureRegion,
}

impl Sprite {
    pub fn new(position: Vec3, size: Vec2, region: TextureRegion) -> Self {
        Self {
            position,
            size,
            angle: 0.0,
            color: [1.0; 4],
            region,
        }
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Interleaved position / color / texture-coordinate data for six vertices.
    pub fn vertices(&self) -> Result<VertexBuffer, BufferError> {
        let mut payload = Vec::with_capacity(QUAD.len() * 9);
        for (pos, corner) in QUAD {
            let uv = self.region.corner(corner);
            payload.extend_from_slice(&pos);
            payload.extend_from_slice(&self.color);
            payload.extend_from_slice(&[uv.x(), uv.y()]);
        }

        SPRITE_ATTRIBUTES
            .iter()
            .fold(VertexBufferBuilder::new(), |b, &(name, n)| b.attribute(name, n))
            .build(payload)
    }

    /// `translate(position) · rotate_z(angle) · scale(size, 1)`.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            .rotate_z(self.angle)
            .scale(self.size.extend(1.0))
    }
}

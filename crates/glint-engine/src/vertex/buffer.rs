use glint_math::FLOAT_BYTES;

use super::AttributeDescriptor;

/// Expected update frequency of a buffer's contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BufferUsage {
    /// Written once, drawn many times.
    #[default]
    Static,
    /// Rewritten between draws.
    Dynamic,
}

/// Validated interleaved vertex data.
///
/// Built by [`VertexBufferBuilder`](super::VertexBufferBuilder); fields are
/// read-only so the layout cannot drift from the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexBuffer {
    pub(super) payload: Vec<f32>,
    pub(super) attributes: Vec<AttributeDescriptor>,
    pub(super) stride_bytes: usize,
    pub(super) vertex_count: usize,
    pub(super) usage: BufferUsage,
}

impl VertexBuffer {
    #[inline]
    pub fn payload(&self) -> &[f32] {
        &self.payload
    }

    /// Raw bytes of the payload, ready for a GPU upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.payload)
    }

    #[inline]
    pub fn attributes(&self) -> &[AttributeDescriptor] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Declared stride: 0 when the buffer has a single attribute.
    #[inline]
    pub fn stride_bytes(&self) -> usize {
        self.stride_bytes
    }

    /// Stride with 0 resolved to the tightly packed vertex size.
    ///
    /// wgpu reads an `array_stride` of 0 as "do not advance", unlike GL.
    #[inline]
    pub fn effective_stride(&self) -> usize {
        if self.stride_bytes == 0 {
            self.components_per_vertex() * FLOAT_BYTES
        } else {
            self.stride_bytes
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn usage(&self) -> BufferUsage {
        self.usage
    }

    pub fn components_per_vertex(&self) -> usize {
        self.attributes.iter().map(|a| a.component_count).sum()
    }

    /// Replaces the payload, keeping the layout.
    ///
    /// The new payload must hold whole vertices.
    pub fn set_payload(&mut self, payload: Vec<f32>) -> Result<(), super::BufferError> {
        let per_vertex = self.components_per_vertex();
        if payload.len() % per_vertex != 0 {
            return Err(super::BufferError::DegenerateBuffer {
                len: payload.len(),
                per_vertex,
            });
        }
        self.vertex_count = payload.len() / per_vertex;
        self.payload = payload;
        Ok(())
    }

    pub fn into_payload(self) -> Vec<f32> {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::{BufferError, VertexBufferBuilder};

    fn quad() -> VertexBuffer {
        VertexBufferBuilder::new()
            .attribute("a_position", 2)
            .attribute("a_tex_coord", 2)
            .usage(BufferUsage::Dynamic)
            .build(vec![0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0])
            .unwrap()
    }

    #[test]
    fn bytes_cover_payload() {
        let vb = quad();
        assert_eq!(vb.as_bytes().len(), vb.payload().len() * 4);
        assert_eq!(&vb.as_bytes()[12..16], &1.0f32.to_ne_bytes());
    }

    #[test]
    fn lookup_by_name() {
        let vb = quad();
        assert_eq!(vb.attribute("a_tex_coord").map(|a| a.byte_offset), Some(8));
        assert!(vb.attribute("a_color").is_none());
        assert_eq!(vb.usage(), BufferUsage::Dynamic);
        assert_eq!(vb.effective_stride(), vb.stride_bytes());
    }

    #[test]
    fn set_payload_recounts() {
        let mut vb = quad();
        vb.set_payload(vec![0.0; 16]).unwrap();
        assert_eq!(vb.vertex_count(), 4);
        assert_eq!(
            vb.set_payload(vec![0.0; 5]),
            Err(BufferError::DegenerateBuffer { len: 5, per_vertex: 4 })
        );
        assert_eq!(vb.vertex_count(), 4);
    }
}

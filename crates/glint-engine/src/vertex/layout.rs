use glint_math::FLOAT_BYTES;

use super::{BufferError, BufferUsage, VertexBuffer};

/// One named attribute inside an interleaved vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    pub name: String,
    /// Number of `f32` components (1..=4 for anything the draw layer binds).
    pub component_count: usize,
    /// Offset in bytes from the start of the vertex.
    pub byte_offset: usize,
}

/// Declares the attribute layout of a vertex buffer, then validates a payload
/// against it.
///
/// ```
/// use glint_engine::vertex::VertexBufferBuilder;
///
/// let vb = VertexBufferBuilder::new()
///     .attribute("a_position", 3)
///     .attribute("a_normal", 3)
///     .build(vec![0.0; 12])
///     .unwrap();
/// assert_eq!(vb.stride_bytes(), 24);
/// assert_eq!(vb.vertex_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VertexBufferBuilder {
    attributes: Vec<(String, usize)>,
    usage: BufferUsage,
}

impl VertexBufferBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute. Declaration order is memory order.
    pub fn attribute(mut self, name: impl Into<String>, component_count: usize) -> Self {
        self.attributes.push((name.into(), component_count));
        self
    }

    pub fn usage(mut self, usage: BufferUsage) -> Self {
        self.usage = usage;
        self
    }

    /// Computes offsets and stride and checks `payload` holds whole vertices.
    pub fn build(self, payload: impl Into<Vec<f32>>) -> Result<VertexBuffer, BufferError> {
        let payload = payload.into();
        let (attributes, per_vertex) = lay_out(self.attributes)?;

        if payload.len() % per_vertex != 0 {
            return Err(BufferError::DegenerateBuffer {
                len: payload.len(),
                per_vertex,
            });
        }

        // A single attribute is tightly packed; stride 0 means exactly that.
        let stride_bytes = if attributes.len() > 1 {
            per_vertex * FLOAT_BYTES
        } else {
            0
        };
        let vertex_count = payload.len() / per_vertex;

        log::trace!(
            "vertex layout: {} attributes, {per_vertex} floats/vertex, {vertex_count} vertices",
            attributes.len()
        );

        Ok(VertexBuffer {
            payload,
            attributes,
            stride_bytes,
            vertex_count,
            usage: self.usage,
        })
    }
}

/// Running-sum offsets. Returns the descriptors and the floats per vertex.
fn lay_out(declared: Vec<(String, usize)>) -> Result<(Vec<AttributeDescriptor>, usize), BufferError> {
    if declared.is_empty() {
        return Err(BufferError::EmptyLayout);
    }

    let mut out: Vec<AttributeDescriptor> = Vec::with_capacity(declared.len());
    let mut offset = 0usize;

    for (name, component_count) in declared {
        if component_count == 0 {
            return Err(BufferError::ZeroComponents { name });
        }
        if out.iter().any(|a| a.name == name) {
            return Err(BufferError::DuplicateAttribute { name });
        }
        out.push(AttributeDescriptor {
            name,
            component_count,
            byte_offset: offset * FLOAT_BYTES,
        });
        offset += component_count;
    }

    Ok((out, offset))
}

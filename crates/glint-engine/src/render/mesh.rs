use wgpu::util::DeviceExt;

use crate::vertex::{AttributeDescriptor, BufferUsage, VertexBuffer};

use super::{RenderCtx, RenderError};

fn buffer_usages(usage: BufferUsage) -> wgpu::BufferUsages {
    match usage {
        BufferUsage::Static => wgpu::BufferUsages::VERTEX,
        BufferUsage::Dynamic => wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    }
}

/// Vertex count as a draw range bound.
fn draw_count(count: usize) -> Result<u32, RenderError> {
    u32::try_from(count).map_err(|_| RenderError::TooManyVertices { count })
}

/// A [`VertexBuffer`] uploaded to the device, with its layout kept for binding.
pub struct GpuVertexBuffer {
    buffer: wgpu::Buffer,
    capacity: u64,
    attributes: Vec<AttributeDescriptor>,
    stride: u64,
    vertex_count: u32,
    usage: BufferUsage,
}

impl GpuVertexBuffer {
    /// Fails when the vertex count does not fit a `u32` draw range.
    pub fn upload(ctx: &RenderCtx<'_>, vertices: &VertexBuffer) -> Result<Self, RenderError> {
        let vertex_count = draw_count(vertices.vertex_count())?;
        let buffer = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glint vertex buffer"),
            contents: vertices.as_bytes(),
            usage: buffer_usages(vertices.usage()),
        });

        Ok(Self {
            buffer,
            capacity: vertices.as_bytes().len() as u64,
            attributes: vertices.attributes().to_vec(),
            stride: vertices.effective_stride() as u64,
            vertex_count,
            usage: vertices.usage(),
        })
    }

    /// Replaces the contents. Dynamic buffers with room are written in place;
    /// anything else is re-created. On error the old contents stay.
    pub fn update(&mut self, ctx: &RenderCtx<'_>, vertices: &VertexBuffer) -> Result<(), RenderError> {
        let vertex_count = draw_count(vertices.vertex_count())?;
        let bytes = vertices.as_bytes();
        let fits = self.usage == BufferUsage::Dynamic
            && vertices.usage() == BufferUsage::Dynamic
            && bytes.len() as u64 <= self.capacity;

        if fits {
            ctx.queue.write_buffer(&self.buffer, 0, bytes);
            self.attributes = vertices.attributes().to_vec();
            self.stride = vertices.effective_stride() as u64;
            self.vertex_count = vertex_count;
        } else {
            log::trace!("re-creating vertex buffer ({} bytes)", bytes.len());
            *self = Self::upload(ctx, vertices)?;
        }
        Ok(())
    }

    #[inline]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    #[inline]
    pub fn attributes(&self) -> &[AttributeDescriptor] {
        &self.attributes
    }

    /// Stride in bytes, never 0.
    #[inline]
    pub fn stride(&self) -> u64 {
        self.stride
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_count_fits_u32() {
        assert_eq!(draw_count(6), Ok(6));
        assert_eq!(draw_count(u32::MAX as usize), Ok(u32::MAX));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn draw_count_rejects_overflow() {
        let count = u32::MAX as usize + 1;
        assert_eq!(draw_count(count), Err(RenderError::TooManyVertices { count }));
    }
}

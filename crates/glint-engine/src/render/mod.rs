//! GPU drawing.
//!
//! A [`ShaderProgram`] owns a shader module and its matrix uniform; a
//! [`GpuVertexBuffer`] owns uploaded vertex data. [`draw_vertex_buffer`]
//! binds the buffer's attributes to the program's locations and issues one
//! triangle-list draw.
//!
//! Convention: geometry goes through `u_p · u_mv`; build both with
//! `glint_math` (typically `Mat4::ortho` and a `MatrixStack`).

mod ctx;
mod error;
mod layout;
mod mesh;
mod program;

pub use ctx::{RenderCtx, RenderTarget};
pub use error::RenderError;
pub use layout::{AttributeLocations, vertex_attributes};
pub use mesh::GpuVertexBuffer;
pub use program::{SPRITE_WGSL, ShaderProgram};

/// Draws every vertex of `buffer` as a triangle list with `program`.
///
/// Loads (does not clear) the target. Fails before recording anything when an
/// attribute cannot be bound.
pub fn draw_vertex_buffer(
    ctx: &RenderCtx<'_>,
    target: &mut RenderTarget<'_>,
    program: &mut ShaderProgram,
    buffer: &GpuVertexBuffer,
) -> Result<(), RenderError> {
    let attributes = vertex_attributes(buffer.attributes(), program.locations())?;

    if buffer.vertex_count() == 0 {
        return Ok(());
    }

    program.ensure_pipeline(ctx, buffer.stride(), &attributes);
    let Some(pipeline) = program.pipeline(buffer.stride(), &attributes) else {
        return Ok(());
    };

    let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("glint draw pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target.color_view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Load,
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    });

    rpass.set_pipeline(pipeline);
    rpass.set_bind_group(0, program.bind_group(), &[]);
    rpass.set_vertex_buffer(0, buffer.buffer().slice(..));
    rpass.draw(0..buffer.vertex_count(), 0..1);

    Ok(())
}

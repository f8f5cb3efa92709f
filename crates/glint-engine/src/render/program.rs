use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use glint_math::Mat4;

use super::{AttributeLocations, RenderCtx};

/// WGSL for textureless sprites, matching [`SPRITE_ATTRIBUTES`](crate::sprite::SPRITE_ATTRIBUTES)
/// at locations 0, 1, 2.
pub const SPRITE_WGSL: &str = include_str!("shaders/sprite.wgsl");

// ── matrix uniform ────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MatrixUniform {
    model_view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
}

fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

/// Vertex layout a pipeline was built for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LayoutKey {
    stride: u64,
    attributes: Vec<wgpu::VertexAttribute>,
}

/// A shader module plus the state needed to draw with it.
///
/// The program binds one uniform block at `@group(0) @binding(0)`:
/// `struct { u_mv: mat4x4<f32>, u_p: mat4x4<f32> }`. Entry points are
/// `vs_main` / `fs_main`. Pipelines are created lazily, one per distinct
/// vertex layout drawn with the program.
pub struct ShaderProgram {
    label: String,
    module: wgpu::ShaderModule,
    locations: AttributeLocations,
    target_format: wgpu::TextureFormat,

    pipeline_layout: wgpu::PipelineLayout,
    uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    pipelines: HashMap<LayoutKey, wgpu::RenderPipeline>,
}

impl ShaderProgram {
    pub fn new(ctx: &RenderCtx<'_>, label: &str, wgsl: &str, locations: AttributeLocations) -> Self {
        let module = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(wgsl.into()),
        });

        let uniform_size = size_of::<MatrixUniform>() as u64;

        let bind_group_layout = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("glint matrices bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(uniform_size),
                },
                count: None,
            }],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("glint program pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let uniform = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("glint matrices ubo"),
            size: uniform_size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("glint matrices bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform.as_entire_binding(),
            }],
        });

        let program = Self {
            label: label.to_owned(),
            module,
            locations,
            target_format: ctx.target_format,
            pipeline_layout,
            uniform,
            bind_group,
            pipelines: HashMap::new(),
        };
        program.set_matrices(ctx.queue, &Mat4::IDENTITY, &Mat4::IDENTITY);
        program
    }

    /// The built-in sprite program.
    pub fn sprite(ctx: &RenderCtx<'_>) -> Self {
        let locations = crate::sprite::SPRITE_ATTRIBUTES
            .iter()
            .enumerate()
            .map(|(i, &(name, _))| (name, i as u32))
            .collect();
        Self::new(ctx, "glint sprite shader", SPRITE_WGSL, locations)
    }

    /// Uploads `u_mv` and `u_p`. Takes effect for draws submitted afterwards.
    pub fn set_matrices(&self, queue: &wgpu::Queue, model_view: &Mat4, projection: &Mat4) {
        let u = MatrixUniform {
            model_view: *model_view.as_cols(),
            projection: *projection.as_cols(),
        };
        queue.write_buffer(&self.uniform, 0, bytemuck::bytes_of(&u));
    }

    pub fn attribute_location(&self, name: &str) -> Option<u32> {
        self.locations.get(name)
    }

    #[inline]
    pub fn locations(&self) -> &AttributeLocations {
        &self.locations
    }

    #[inline]
    pub(super) fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    /// Pipelines built so far.
    pub fn pipeline_count(&self) -> usize {
        self.pipelines.len()
    }

    pub(super) fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>, stride: u64, attributes: &[wgpu::VertexAttribute]) {
        if ctx.target_format != self.target_format {
            log::debug!(
                "{}: target format changed {:?} -> {:?}, dropping pipelines",
                self.label,
                self.target_format,
                ctx.target_format
            );
            self.pipelines.clear();
            self.target_format = ctx.target_format;
        }

        let key = LayoutKey {
            stride,
            attributes: attributes.to_vec(),
        };
        if self.pipelines.contains_key(&key) {
            return;
        }

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&self.label),
            layout: Some(&self.pipeline_layout),

            vertex: wgpu::VertexState {
                module: &self.module,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: stride,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes,
                }],
            },

            fragment: Some(wgpu::FragmentState {
                module: &self.module,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: self.target_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!(
            "{}: built pipeline #{} (stride {stride}, {} attributes)",
            self.label,
            self.pipelines.len() + 1,
            attributes.len()
        );
        self.pipelines.insert(key, pipeline);
    }

    pub(super) fn pipeline(&self, stride: u64, attributes: &[wgpu::VertexAttribute]) -> Option<&wgpu::RenderPipeline> {
        self.pipelines.get(&LayoutKey {
            stride,
            attributes: attributes.to_vec(),
        })
    }
}

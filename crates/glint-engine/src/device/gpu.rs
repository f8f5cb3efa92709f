use anyhow::{Context, Result};
use image::RgbaImage;

use crate::render::{RenderCtx, RenderTarget};

/// Initialization parameters for the headless GPU context.
#[derive(Debug, Clone)]
pub struct GpuInit {
    pub power_preference: wgpu::PowerPreference,

    /// Accept a software adapter when no hardware one is available.
    pub force_fallback_adapter: bool,

    /// Required wgpu features. Empty unless a draw path needs one.
    pub required_features: wgpu::Features,

    pub required_limits: wgpu::Limits,

    /// Color format of offscreen targets and of every pipeline built for them.
    pub target_format: wgpu::TextureFormat,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            target_format: wgpu::TextureFormat::Rgba8UnormSrgb,
        }
    }
}

/// Owns the wgpu adapter, device and queue.
///
/// There is no global context: create one, pass references down, drop it to
/// release the device.
pub struct Gpu {
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
    target_format: wgpu::TextureFormat,
}

/// Color texture rendered into instead of a window surface.
pub struct OffscreenTarget {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub width: u32,
    pub height: u32,
}

impl Gpu {
    /// Acquires an adapter and device without a surface.
    pub async fn new_headless(init: GpuInit) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: None,
                force_fallback_adapter: init.force_fallback_adapter,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let info = adapter.get_info();
        log::info!("adapter: {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("glint device"),
                required_features: init.required_features,
                required_limits: init.required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        Ok(Gpu {
            adapter,
            device,
            queue,
            target_format: init.target_format,
        })
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn target_format(&self) -> wgpu::TextureFormat {
        self.target_format
    }

    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.adapter.get_info()
    }

    /// Context for drawing into `target`.
    pub fn render_ctx(&self, target: &OffscreenTarget) -> RenderCtx<'_> {
        RenderCtx::new(
            &self.device,
            &self.queue,
            self.target_format,
            (target.width, target.height),
        )
    }

    /// Allocates a color target that can be rendered to and read back.
    pub fn offscreen_target(&self, width: u32, height: u32) -> Result<OffscreenTarget> {
        anyhow::ensure!(width > 0 && height > 0, "offscreen target has zero size");

        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("glint offscreen target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.target_format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Ok(OffscreenTarget {
            texture,
            view,
            width,
            height,
        })
    }

    /// Records `draw` against `target` and submits it.
    pub fn render_to<R>(
        &self,
        target: &OffscreenTarget,
        draw: impl FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>) -> R,
    ) -> R {
        let ctx = self.render_ctx(target);
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("glint offscreen encoder"),
            });

        let out = {
            let mut rt = RenderTarget::new(&mut encoder, &target.view);
            draw(&ctx, &mut rt)
        };

        self.queue.submit(std::iter::once(encoder.finish()));
        out
    }

    /// Copies `target` back to the CPU. Blocks until the GPU is done.
    pub fn read_back(&self, target: &OffscreenTarget) -> Result<RgbaImage> {
        anyhow::ensure!(
            self.target_format.block_copy_size(None) == Some(4),
            "read back needs a 4-byte color format, target is {:?}",
            self.target_format
        );

        let unpadded = target.width * 4;
        let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
        let padded = unpadded.div_ceil(align) * align;

        let buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("glint read back"),
            size: u64::from(padded) * u64::from(target.height),
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("glint read back encoder"),
            });
        encoder.copy_texture_to_buffer(
            target.texture.as_image_copy(),
            wgpu::TexelCopyBufferInfo {
                buffer: &buffer,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded),
                    rows_per_image: None,
                },
            },
            wgpu::Extent3d {
                width: target.width,
                height: target.height,
                depth_or_array_layers: 1,
            },
        );
        self.queue.submit(std::iter::once(encoder.finish()));

        let slice = buffer.slice(..);
        let (tx, rx) = futures::channel::oneshot::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        self.device
            .poll(wgpu::PollType::wait_indefinitely())
            .context("device poll failed")?;
        pollster::block_on(rx)
            .context("map callback dropped")?
            .context("failed to map read back buffer")?;

        let mut pixels = Vec::with_capacity((unpadded * target.height) as usize);
        {
            let mapped = slice.get_mapped_range();
            for row in mapped.chunks(padded as usize) {
                pixels.extend_from_slice(&row[..unpadded as usize]);
            }
        }
        buffer.unmap();

        RgbaImage::from_raw(target.width, target.height, pixels)
            .context("read back size does not match target")
    }
}

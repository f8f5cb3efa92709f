//! Builds a small atlas from generated tiles, writes it as PNG, then renders a
//! few sprites offscreen and writes the frame next to it.
//!
//! Usage: `glint-demo [OUTPUT_PNG]` (default `glint-atlas.png`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glint_engine::atlas::{AtlasConfig, AtlasPacker, MemorySource, TextureRegion};
use glint_engine::device::{Gpu, GpuInit};
use glint_engine::logging::{LoggingConfig, init_logging};
use glint_engine::render::{GpuVertexBuffer, ShaderProgram, draw_vertex_buffer};
use glint_engine::sprite::Sprite;
use glint_math::{Mat4, MatrixStack, Vec2, Vec3};
use image::{Rgba, RgbaImage};

const FRAME: (u32, u32) = (320, 240);
const CLEAR: wgpu::Color = wgpu::Color {
    r: 0.08,
    g: 0.08,
    b: 0.1,
    a: 1.0,
};

fn checker(size: u32, a: [u8; 4], b: [u8; 4]) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 { Rgba(a) } else { Rgba(b) }
    })
}

fn build_atlas(out: &Path) -> Result<Vec<TextureRegion>> {
    let mut src = MemorySource::new();
    src.insert_image("red", checker(32, [220, 40, 40, 255], [120, 20, 20, 255]))
        .insert_image("green", checker(32, [40, 200, 40, 255], [20, 100, 20, 255]))
        .insert_image("blue", checker(16, [40, 40, 220, 255], [20, 20, 120, 255]));

    let mut packer = AtlasPacker::new(
        AtlasConfig {
            width: 128,
            height: 128,
            cell_size: 32,
        },
        src,
    );

    let regions = vec![
        packer.load_image("red", 0, 0, None),
        packer.load_image("green", 1, 0, Some((1, 1))),
        // Upscaled from 16 px to two cells wide.
        packer.load_image("blue", 0, 1, Some((2, 1))),
    ];

    let atlas = packer.finish_blocking().context("failed to build atlas")?;
    for failure in &atlas.failures {
        log::warn!("tile `{}` missing: {}", failure.id, failure.error);
    }
    atlas.save_png(out).with_context(|| format!("failed to write {}", out.display()))?;
    log::info!("atlas written to {}", out.display());

    Ok(regions)
}

fn render_frame(regions: &[TextureRegion], out: &Path) -> Result<()> {
    let gpu = pollster::block_on(Gpu::new_headless(GpuInit::default()))?;
    let target = gpu.offscreen_target(FRAME.0, FRAME.1)?;
    let ctx = gpu.render_ctx(&target);
    let mut program = ShaderProgram::sprite(&ctx);

    let mut stack = MatrixStack::new();
    *stack.projection_mut() = Mat4::ortho(0.0, FRAME.0 as f32, FRAME.1 as f32, 0.0, -1.0, 1.0);

    let colors = [[1.0, 0.3, 0.3, 1.0], [0.3, 1.0, 0.3, 1.0], [0.3, 0.3, 1.0, 0.8]];
    let sprites: Vec<Sprite> = regions
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(i, (region, color))| {
            Sprite::new(Vec3::new(60.0 + 90.0 * i as f32, 80.0, 0.0), Vec2::new(64.0, 64.0), *region)
                .with_angle(0.25 * i as f32)
                .with_color(color)
        })
        .collect();

    // One submission per sprite so each draw sees its own matrices.
    gpu.render_to(&target, |_, rt| rt.clear(CLEAR));
    for sprite in &sprites {
        let vertices = sprite.vertices()?;
        let mesh = GpuVertexBuffer::upload(&ctx, &vertices)?;

        stack.with_model_view(|s| -> Result<()> {
            s.model_view_mut().multiply_matrix_assign(&sprite.model_matrix());
            let (mv, p) = s.current();
            program.set_matrices(ctx.queue, mv, p);
            gpu.render_to(&target, |ctx, rt| draw_vertex_buffer(ctx, rt, &mut program, &mesh))?;
            Ok(())
        })?;
    }

    let frame = gpu.read_back(&target)?;
    frame.save(out).with_context(|| format!("failed to write {}", out.display()))?;
    log::info!("frame written to {}", out.display());
    Ok(())
}

fn frame_path(atlas: &Path) -> PathBuf {
    let stem = atlas.file_stem().and_then(|s| s.to_str()).unwrap_or("glint");
    atlas.with_file_name(format!("{stem}-frame.png"))
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let atlas_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("glint-atlas.png"));

    let regions = build_atlas(&atlas_path)?;

    // No adapter is a normal situation on headless CI; the atlas is still useful.
    if let Err(e) = render_frame(&regions, &frame_path(&atlas_path)) {
        log::warn!("skipping offscreen render: {e:#}");
    }

    Ok(())
}

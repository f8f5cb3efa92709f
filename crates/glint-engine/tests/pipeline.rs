//! Atlas → sprite → vertex buffer → attribute binding, without a GPU.

use glint_engine::atlas::{AtlasConfig, AtlasPacker, MemorySource, TextureRegion};
use glint_engine::logging::{LoggingConfig, init_logging};
use glint_engine::render::{AttributeLocations, vertex_attributes};
use glint_engine::sprite::{SPRITE_ATTRIBUTES, Sprite};
use glint_engine::vertex::BufferUsage;
use glint_math::{Mat4, MatrixStack, Vec2, Vec3, Vec4};
use image::{Rgba, RgbaImage};

fn atlas_with_two_tiles() -> (AtlasPacker, TextureRegion, TextureRegion) {
    let mut src = MemorySource::new();
    src.insert_image("grass", RgbaImage::from_pixel(64, 64, Rgba([40, 200, 40, 255])))
        .insert_image("stone", RgbaImage::from_pixel(32, 32, Rgba([128, 128, 128, 255])));

    let cfg = AtlasConfig {
        width: 1024,
        height: 1024,
        cell_size: 64,
    };
    let mut packer = AtlasPacker::new(cfg, src);
    let grass = packer.load_image("grass", 1, 1, Some((1, 1)));
    let stone = packer.load_image("stone", 2, 0, Some((1, 1)));
    (packer, grass, stone)
}

#[test]
fn atlas_regions_feed_sprite_vertices() {
    init_logging(LoggingConfig::for_tests());

    let (packer, grass, stone) = atlas_with_two_tiles();
    assert_eq!(packer.outstanding(), 2);

    let done = packer.finish_blocking().expect("atlas encodes");
    assert!(done.failures.is_empty());
    // Stone was upscaled from 32 px to fill its 64 px cell.
    assert_eq!(done.image.get_pixel(128 + 63, 63).0[3], 255);
    assert_eq!(done.image.get_pixel(64, 64).0, [40, 200, 40, 255]);

    let sprite = Sprite::new(Vec3::new(100.0, 50.0, 0.0), Vec2::new(64.0, 64.0), grass);
    let vb = sprite.vertices().expect("sprite layout is valid");
    assert_eq!(vb.vertex_count(), 6);
    assert_eq!(vb.usage(), BufferUsage::Static);

    let uv0 = &vb.payload()[7..9];
    assert_eq!(uv0, &grass.as_array()[0..2]);
    assert_ne!(grass, stone);
}

#[test]
fn sprite_layout_binds_to_sprite_locations() {
    let sprite = Sprite::new(Vec3::zero(), Vec2::new(1.0, 1.0), TextureRegion::default());
    let vb = sprite.vertices().unwrap();

    let locations: AttributeLocations = SPRITE_ATTRIBUTES
        .iter()
        .enumerate()
        .map(|(i, &(name, _))| (name, i as u32))
        .collect();
    let attrs = vertex_attributes(vb.attributes(), &locations).unwrap();

    assert_eq!(attrs.len(), 3);
    assert_eq!(attrs.iter().map(|a| a.offset).collect::<Vec<_>>(), [0, 12, 28]);
    assert_eq!(vb.effective_stride(), 36);
}

#[test]
fn stack_transforms_sprite_into_clip_space() {
    let mut stack = MatrixStack::new();
    *stack.projection_mut() = Mat4::ortho(0.0, 800.0, 600.0, 0.0, -1.0, 1.0);

    let sprite = Sprite::new(Vec3::new(400.0, 300.0, 0.0), Vec2::new(100.0, 100.0), TextureRegion::default());

    let clip = stack.with_model_view(|s| {
        s.model_view_mut().multiply_matrix_assign(&sprite.model_matrix());
        let (mv, p) = s.current();
        p.multiply_matrix(mv).multiply_vector(Vec4::new(0.0, 0.0, 0.0, 1.0))
    });

    // Sprite origin sits at the screen centre.
    assert!(clip.approx_eq(Vec4::new(0.0, 0.0, 0.0, 1.0), 1e-6));
    assert_eq!(stack.model_view_depth(), 0);
}

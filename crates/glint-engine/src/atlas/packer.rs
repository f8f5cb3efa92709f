use std::io::Cursor;
use std::path::Path;

use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use log::{debug, info, warn};

use super::{AtlasError, DecodeError, DecodeFailure, ImageSource, TextureRegion};

/// Atlas surface size and grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Edge length of one grid cell in pixels. `1` addresses pixels directly.
    pub cell_size: u32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            cell_size: 1,
        }
    }
}

/// Where a decoded image goes once it arrives, in pixels.
#[derive(Debug, Clone)]
struct Placement {
    id: String,
    origin: (u32, u32),
    /// Target size when the caller asked for one.
    size: Option<(u32, u32)>,
}

struct Decoded {
    placement: Placement,
    result: Result<RgbaImage, DecodeError>,
}

/// Composes images into one RGBA surface on a cell grid.
///
/// [`load_image`](Self::load_image) hands back the UV region right away and
/// queues the decode. The pixels land when the decode completes, either via
/// [`pump`](Self::pump) or when [`finish`](Self::finish) drains the queue.
pub struct AtlasPacker {
    config: AtlasConfig,
    source: Box<dyn ImageSource>,
    surface: RgbaImage,
    pending: FuturesUnordered<BoxFuture<'static, Decoded>>,
    failures: Vec<DecodeFailure>,
    placed: usize,
}

impl AtlasPacker {
    pub fn new(config: AtlasConfig, source: impl ImageSource + 'static) -> Self {
        let config = AtlasConfig {
            cell_size: config.cell_size.max(1),
            ..config
        };
        debug!(
            "atlas {}x{} px, cell {} px",
            config.width, config.height, config.cell_size
        );
        Self {
            config,
            source: Box::new(source),
            surface: RgbaImage::new(config.width, config.height),
            pending: FuturesUnordered::new(),
            failures: Vec::new(),
            placed: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &AtlasConfig {
        &self.config
    }

    /// Surface as composed so far.
    #[inline]
    pub fn surface(&self) -> &RgbaImage {
        &self.surface
    }

    /// Queues `id` for placement at cell `(cell_x, cell_y)`.
    ///
    /// With `size = Some((w, h))` the image is scaled to `w × h` cells and the
    /// region covers exactly that. With `None` the region covers one cell, but
    /// the image is drawn at its decoded size, which may spill past it. A size
    /// with a zero extent counts as `None`.
    ///
    /// A placement whose pixel coordinates overflow `u32` is not decoded; it
    /// is reported in [`failures`](Self::failures) as
    /// [`DecodeError::OutOfRange`].
    pub fn load_image(
        &mut self,
        id: impl Into<String>,
        cell_x: u32,
        cell_y: u32,
        size: Option<(u32, u32)>,
    ) -> TextureRegion {
        let id = id.into();
        let size = size.filter(|&(w, h)| {
            let usable = w > 0 && h > 0;
            if !usable {
                debug!("`{id}` requested {w}x{h} cells; treating as unsized");
            }
            usable
        });

        let cell = self.config.cell_size;
        let (atlas_w, atlas_h) = (self.config.width as f32, self.config.height as f32);

        let Some((x, y, w, h)) = pixel_rect(cell, cell_x, cell_y, size) else {
            warn!("`{id}` at cell ({cell_x}, {cell_y}) overflows pixel coordinates; skipped");
            let c = cell as f32;
            let (w, h) = size.unwrap_or((1, 1));
            self.failures.push(DecodeFailure {
                id,
                error: DecodeError::OutOfRange {
                    cell: (cell_x, cell_y),
                },
            });
            return TextureRegion::new(
                cell_x as f32 * c,
                cell_y as f32 * c,
                w as f32 * c,
                h as f32 * c,
                atlas_w,
                atlas_h,
            );
        };

        if x >= self.config.width || y >= self.config.height {
            warn!("`{id}` placed at ({x}, {y}) px, outside the {}x{} atlas", self.config.width, self.config.height);
        }

        let region = TextureRegion::new(x as f32, y as f32, w as f32, h as f32, atlas_w, atlas_h);

        let placement = Placement {
            id,
            origin: (x, y),
            size: size.map(|_| (w, h)),
        };
        debug!("queued `{}` at {:?} px", placement.id, placement.origin);

        let decode = self.source.decode(&placement.id);
        self.pending
            .push(decode.map(move |result| Decoded { placement, result }).boxed());

        region
    }

    /// Decodes still in flight.
    #[inline]
    pub fn outstanding(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Failures collected so far.
    #[inline]
    pub fn failures(&self) -> &[DecodeFailure] {
        &self.failures
    }

    /// Applies every decode that has already completed, without waiting.
    /// Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(Some(done)) = self.pending.next().now_or_never() {
            self.apply(done);
            applied += 1;
        }
        applied
    }

    /// Drops every in-flight decode; their placements stay empty.
    /// Returns how many were dropped.
    pub fn cancel(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending = FuturesUnordered::new();
        if dropped > 0 {
            debug!("cancelled {dropped} pending decodes");
        }
        dropped
    }

    /// Waits for every outstanding decode, then encodes the surface as PNG.
    ///
    /// Decode failures do not fail the atlas; they are listed in
    /// [`FinishedAtlas::failures`].
    pub async fn finish(mut self) -> Result<FinishedAtlas, AtlasError> {
        while let Some(done) = self.pending.next().await {
            self.apply(done);
        }

        let mut png = Vec::new();
        self.surface
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        info!(
            "atlas finished: {} placed, {} failed, {} bytes",
            self.placed,
            self.failures.len(),
            png.len()
        );

        Ok(FinishedAtlas {
            image: self.surface,
            png,
            failures: self.failures,
        })
    }

    /// [`finish`](Self::finish) on the current thread.
    pub fn finish_blocking(self) -> Result<FinishedAtlas, AtlasError> {
        pollster::block_on(self.finish())
    }

    fn apply(&mut self, done: Decoded) {
        let Decoded { placement, result } = done;

        let image = match result {
            Ok(image) => image,
            Err(error) => {
                warn!("`{}` failed: {error}", placement.id);
                self.failures.push(DecodeFailure {
                    id: placement.id,
                    error,
                });
                return;
            }
        };

        let cell = self.config.cell_size;
        let image = match placement.size {
            Some((w, h)) => {
                if image.dimensions() == (w, h) {
                    image
                } else {
                    imageops::resize(&image, w, h, FilterType::Triangle)
                }
            }
            None => {
                if image.dimensions() != (cell, cell) {
                    debug!(
                        "`{}` is {}x{} px; its region assumed one {cell} px cell",
                        placement.id,
                        image.width(),
                        image.height()
                    );
                }
                image
            }
        };

        let (x, y) = placement.origin;
        imageops::replace(&mut self.surface, &image, i64::from(x), i64::from(y));
        self.placed += 1;
        debug!("placed `{}` at ({x}, {y}) px", placement.id);
    }
}

/// Pixel origin and extent of a placement, or `None` if any of it overflows.
fn pixel_rect(
    cell: u32,
    cell_x: u32,
    cell_y: u32,
    size: Option<(u32, u32)>,
) -> Option<(u32, u32, u32, u32)> {
    let (w, h) = size.unwrap_or((1, 1));
    Some((
        cell_x.checked_mul(cell)?,
        cell_y.checked_mul(cell)?,
        w.checked_mul(cell)?,
        h.checked_mul(cell)?,
    ))
}

/// Result of [`AtlasPacker::finish`].
#[derive(Debug)]
pub struct FinishedAtlas {
    pub image: RgbaImage,
    /// `image` encoded as PNG.
    pub png: Vec<u8>,
    pub failures: Vec<DecodeFailure>,
}

impl FinishedAtlas {
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), AtlasError> {
        std::fs::write(path, &self.png)?;
        Ok(())
    }
}

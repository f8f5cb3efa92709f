use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::{self, BoxFuture};
use image::RgbaImage;

use super::DecodeError;

/// Produces decoded RGBA pixels for an image id.
///
/// The returned future must not borrow `self`; the packer may hold many
/// decodes in flight at once.
pub trait ImageSource: Send + Sync {
    fn decode(&self, id: &str) -> BoxFuture<'static, Result<RgbaImage, DecodeError>>;
}

// ── files ─────────────────────────────────────────────────────────────────

/// Loads images from disk, one background thread per decode.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    root: Option<PathBuf>,
}

impl FileSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves relative ids against `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, id: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(id),
            None => PathBuf::from(id),
        }
    }
}

fn decode_file(path: &Path) -> Result<RgbaImage, DecodeError> {
    let bytes = std::fs::read(path)?;
    Ok(image::load_from_memory(&bytes)?.to_rgba8())
}

impl ImageSource for FileSource {
    fn decode(&self, id: &str) -> BoxFuture<'static, Result<RgbaImage, DecodeError>> {
        let path = self.resolve(id);
        let (tx, rx) = oneshot::channel();

        let spawned = std::thread::Builder::new()
            .name("glint-decode".into())
            .spawn(move || {
                // Receiver gone means the decode was cancelled.
                let _ = tx.send(decode_file(&path));
            });

        if let Err(e) = spawned {
            return future::ready(Err(DecodeError::Io(e))).boxed();
        }

        rx.map(|r| r.unwrap_or(Err(DecodeError::Cancelled))).boxed()
    }
}

// ── memory ────────────────────────────────────────────────────────────────

#[derive(Debug)]
enum Stored {
    Pixels(RgbaImage),
    Encoded(Vec<u8>),
}

/// Images registered up front, either as pixels or as encoded bytes.
///
/// Decodes complete immediately.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    images: HashMap<String, Arc<Stored>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_image(&mut self, id: impl Into<String>, image: RgbaImage) -> &mut Self {
        self.images.insert(id.into(), Arc::new(Stored::Pixels(image)));
        self
    }

    /// Registers encoded bytes (any format the `image` crate is built with).
    pub fn insert_encoded(&mut self, id: impl Into<String>, bytes: Vec<u8>) -> &mut Self {
        self.images.insert(id.into(), Arc::new(Stored::Encoded(bytes)));
        self
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageSource for MemorySource {
    fn decode(&self, id: &str) -> BoxFuture<'static, Result<RgbaImage, DecodeError>> {
        let result = match self.images.get(id).map(Arc::as_ref) {
            None => Err(DecodeError::NotFound(id.to_owned())),
            Some(Stored::Pixels(img)) => Ok(img.clone()),
            Some(Stored::Encoded(bytes)) => image::load_from_memory(bytes)
                .map(|d| d.to_rgba8())
                .map_err(DecodeError::from),
        };
        future::ready(result).boxed()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba};

    use super::*;

    fn png_bytes(img: &RgbaImage) -> Vec<u8> {
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png).unwrap();
        out
    }

    #[test]
    fn memory_source_pixels_and_encoded() {
        let img = RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 255]));
        let mut src = MemorySource::new();
        src.insert_image("raw", img.clone())
            .insert_encoded("png", png_bytes(&img));
        assert_eq!(src.len(), 2);

        let raw = pollster::block_on(src.decode("raw")).unwrap();
        let png = pollster::block_on(src.decode("png")).unwrap();
        assert_eq!(raw, img);
        assert_eq!(png, img);
    }

    #[test]
    fn memory_source_unknown_id() {
        let src = MemorySource::new();
        assert!(matches!(
            pollster::block_on(src.decode("nope")),
            Err(DecodeError::NotFound(id)) if id == "nope"
        ));
    }

    #[test]
    fn memory_source_bad_bytes() {
        let mut src = MemorySource::new();
        src.insert_encoded("junk", vec![0, 1, 2, 3]);
        assert!(matches!(
            pollster::block_on(src.decode("junk")),
            Err(DecodeError::Image(_))
        ));
    }

    #[test]
    fn file_source_missing_file_is_io_error() {
        let src = FileSource::with_root(std::env::temp_dir());
        assert!(matches!(
            pollster::block_on(src.decode("glint-definitely-missing.png")),
            Err(DecodeError::Io(_))
        ));
    }

    #[test]
    fn file_source_reads_png() {
        let dir = std::env::temp_dir();
        let name = format!("glint-source-test-{}.png", std::process::id());
        let img = RgbaImage::from_pixel(4, 4, Rgba([9, 8, 7, 255]));
        std::fs::write(dir.join(&name), png_bytes(&img)).unwrap();

        let got = pollster::block_on(FileSource::with_root(&dir).decode(&name)).unwrap();
        assert_eq!(got, img);
        let _ = std::fs::remove_file(dir.join(&name));
    }
}

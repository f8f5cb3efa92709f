//! Texture atlas building.
//!
//! Images are placed on a fixed cell grid; each placement yields a
//! [`TextureRegion`] immediately, while the pixels arrive asynchronously from
//! an [`ImageSource`].

mod error;
mod packer;
mod region;
mod source;

pub use error::{AtlasError, DecodeError, DecodeFailure};
pub use packer::{AtlasConfig, AtlasPacker, FinishedAtlas};
pub use region::TextureRegion;
pub use source::{FileSource, ImageSource, MemorySource};

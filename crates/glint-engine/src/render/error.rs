use thiserror::Error;

/// Why a vertex buffer cannot be uploaded or bound to a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The buffer declares an attribute the program has no location for.
    #[error("program has no location for attribute `{name}`")]
    UnknownAttribute { name: String },

    /// Only 1 to 4 `f32` components map to a vertex format.
    #[error("attribute `{name}` has {count} components; 1 to 4 are supported")]
    UnsupportedComponentCount { name: String, count: usize },

    /// More vertices than a `u32` draw range can address.
    #[error("{count} vertices exceed the u32 draw range")]
    TooManyVertices { count: usize },
}

use thiserror::Error;

/// Reasons a vertex layout or payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("vertex layout declares no attributes")]
    EmptyLayout,

    #[error("attribute `{name}` has zero components")]
    ZeroComponents { name: String },

    #[error("attribute `{name}` declared more than once")]
    DuplicateAttribute { name: String },

    /// Payload length is not a whole number of vertices.
    #[error("payload of {len} floats is not a multiple of {per_vertex} floats per vertex")]
    DegenerateBuffer { len: usize, per_vertex: usize },
}

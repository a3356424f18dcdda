pub mod stl;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Generic I/O and format‑conversion errors.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Error bubbled up from the filesystem or the encoder's writer.
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),

    /// The triangle count does not fit the format's 32-bit count field.
    #[error("{count} triangles exceed the STL limit of {} per file", u32::MAX)]
    TooManyTriangles { count: usize },
}

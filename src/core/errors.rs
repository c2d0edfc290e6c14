use std::path::PathBuf;

/// All domain errors for Pixlock.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum PixlockError {
    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists.\n  \
         Run 'pixlock inspect <file>' to see what Pixlock thinks of a file."
    )]
    FileNotFound { path: PathBuf },

    #[error(
        "File too large: {size} bytes (limit: {limit} bytes)\n\n  \
         The service rejects uploads above the limit, so Pixlock refuses\n  \
         to start them. Resize or re-export the file and try again."
    )]
    FileTooLarge { size: u64, limit: u64 },

    #[error(
        "Unsupported image type: {detected}\n\n  \
         The encrypt flow accepts JPEG, PNG, GIF, BMP and TIFF images.\n  \
         Convert the file to one of those formats and retry."
    )]
    UnsupportedImageType { detected: String },

    #[error(
        "Not an encrypted package: {detected}\n\n  \
         The decrypt flow accepts only ZIP packages produced by\n  \
         'pixlock encrypt' (application/zip or a .zip extension)."
    )]
    NotAPackage { detected: String },

    #[error("Server rejected the request (HTTP {status}): {message}")]
    ServerRejected { status: u16, message: String },

    #[error(
        "Received an empty package from the server\n\n  \
         The encrypt request succeeded but the response body was empty.\n  \
         Nothing was saved. Try again; if it persists, check the service logs."
    )]
    EmptyPackage,

    #[error(
        "Decrypt response did not contain an image\n\n  \
         The server answered successfully but without an 'image_url' field,\n  \
         so there is nothing to fetch. Check the service version."
    )]
    MissingImageUrl,

    #[error(
        "Could not reach the server: {reason}\n\n  \
         Check the server URL ('pixlock status' probes it) and your network.\n  \
         The request was not retried; run the command again when ready."
    )]
    Network { reason: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PixlockError>;

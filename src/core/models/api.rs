use serde::Deserialize;

/// Error payload the service attaches to non-success responses.
///
/// The body is not guaranteed to be JSON at all; callers fall back
/// to a generic message when parsing fails or `error` is absent.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// Successful response from `POST /decrypt`.
///
/// `image_url` points at the reconstructed image, usually as a
/// service-relative path like `/download/decrypted/<name>.png`.
#[derive(Debug, Deserialize)]
pub struct DecryptResponse {
    pub image_url: Option<String>,
}

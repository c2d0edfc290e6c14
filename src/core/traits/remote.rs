use crate::core::errors::Result;
use crate::core::models::api::DecryptResponse;
use crate::core::models::health::HealthState;
use crate::core::models::selected_file::SelectedFile;

/// Port for the remote encryption service.
///
/// The implementation lives in `adapters::api` (HttpRemote). The core
/// layer only depends on this trait, never on a concrete transport.
pub trait RemoteCipher {
    /// Upload an image to `/encrypt` and return the package body as-is.
    ///
    /// An empty body is returned untouched; the caller decides what an
    /// empty package means.
    fn encrypt_image(&self, upload: &SelectedFile) -> Result<Vec<u8>>;

    /// Upload a package to `/decrypt` and return the parsed response.
    fn decrypt_package(&self, upload: &SelectedFile) -> Result<DecryptResponse>;

    /// Fetch a decrypted image by the URL the service handed back.
    fn fetch_image(&self, image_url: &str) -> Result<Vec<u8>>;

    /// Probe the service root once and classify the outcome.
    fn probe(&self) -> HealthState;
}

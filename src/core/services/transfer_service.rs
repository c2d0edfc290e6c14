use crate::core::errors::{PixlockError, Result};
use crate::core::models::selected_file::SelectedFile;
use crate::core::services::validation;
use crate::core::traits::remote::RemoteCipher;

/// Orchestrates one upload round-trip against a `RemoteCipher`.
///
/// Validation runs before any request is issued; the interpretation
/// of the response body (empty package, missing image reference)
/// lives here rather than in the transport.
pub struct TransferService<R: RemoteCipher> {
    pub remote: R,
}

/// What a successful decrypt round-trip produced.
#[derive(Debug)]
pub struct DecryptedImage {
    /// URL the service handed back, already usable for display.
    pub image_url: String,
    /// The fetched image bytes.
    pub bytes: Vec<u8>,
}

impl<R: RemoteCipher> TransferService<R> {
    /// Validate and upload an image, returning the encrypted package.
    ///
    /// A 2xx response with an empty body is a failure of its own:
    /// the server claims success but produced nothing to save.
    pub fn encrypt(&self, upload: &SelectedFile) -> Result<Vec<u8>> {
        validation::validate_image(upload)?;
        let package = self.remote.encrypt_image(upload)?;
        if package.is_empty() {
            return Err(PixlockError::EmptyPackage);
        }
        Ok(package)
    }

    /// Validate and upload a package, then fetch the decrypted image.
    pub fn decrypt(&self, upload: &SelectedFile) -> Result<DecryptedImage> {
        validation::validate_package(upload)?;
        let response = self.remote.decrypt_package(upload)?;
        let image_url = response.image_url.ok_or(PixlockError::MissingImageUrl)?;
        let bytes = self.remote.fetch_image(&image_url)?;
        Ok(DecryptedImage { image_url, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::api::DecryptResponse;
    use crate::core::models::health::HealthState;
    use std::path::PathBuf;

    /// Canned remote: answers from fixed data, records nothing.
    struct FakeRemote {
        encrypt_body: Vec<u8>,
        image_url: Option<String>,
    }

    impl RemoteCipher for FakeRemote {
        fn encrypt_image(&self, _upload: &SelectedFile) -> Result<Vec<u8>> {
            Ok(self.encrypt_body.clone())
        }

        fn decrypt_package(&self, _upload: &SelectedFile) -> Result<DecryptResponse> {
            Ok(DecryptResponse {
                image_url: self.image_url.clone(),
            })
        }

        fn fetch_image(&self, _image_url: &str) -> Result<Vec<u8>> {
            Ok(vec![0x89, b'P', b'N', b'G'])
        }

        fn probe(&self) -> HealthState {
            HealthState::Healthy
        }
    }

    fn image_upload() -> SelectedFile {
        SelectedFile {
            path: PathBuf::from("photo.png"),
            name: "photo.png".to_string(),
            size: 2048,
            mime: "image/png".to_string(),
            modified: None,
        }
    }

    fn package_upload() -> SelectedFile {
        SelectedFile {
            path: PathBuf::from("encrypted_package.zip"),
            name: "encrypted_package.zip".to_string(),
            size: 2048,
            mime: "application/zip".to_string(),
            modified: None,
        }
    }

    #[test]
    fn encrypt_returns_package_bytes() {
        let service = TransferService {
            remote: FakeRemote {
                encrypt_body: b"PK\x03\x04...".to_vec(),
                image_url: None,
            },
        };
        let package = service.encrypt(&image_upload()).unwrap();
        assert!(package.starts_with(b"PK"));
    }

    #[test]
    fn encrypt_empty_body_is_empty_package_error() {
        let service = TransferService {
            remote: FakeRemote {
                encrypt_body: Vec::new(),
                image_url: None,
            },
        };
        assert!(matches!(
            service.encrypt(&image_upload()).unwrap_err(),
            PixlockError::EmptyPackage
        ));
    }

    #[test]
    fn encrypt_rejects_invalid_upload_before_any_request() {
        let service = TransferService {
            remote: FakeRemote {
                encrypt_body: b"PK".to_vec(),
                image_url: None,
            },
        };
        let mut upload = image_upload();
        upload.mime = "text/plain".to_string();
        assert!(matches!(
            service.encrypt(&upload).unwrap_err(),
            PixlockError::UnsupportedImageType { .. }
        ));
    }

    #[test]
    fn decrypt_fetches_image_from_returned_url() {
        let service = TransferService {
            remote: FakeRemote {
                encrypt_body: Vec::new(),
                image_url: Some("/download/decrypted/abc.png".to_string()),
            },
        };
        let result = service.decrypt(&package_upload()).unwrap();
        assert_eq!(result.image_url, "/download/decrypted/abc.png");
        assert!(!result.bytes.is_empty());
    }

    #[test]
    fn decrypt_without_image_url_fails() {
        let service = TransferService {
            remote: FakeRemote {
                encrypt_body: Vec::new(),
                image_url: None,
            },
        };
        assert!(matches!(
            service.decrypt(&package_upload()).unwrap_err(),
            PixlockError::MissingImageUrl
        ));
    }

    #[test]
    fn decrypt_rejects_non_zip_before_any_request() {
        let service = TransferService {
            remote: FakeRemote {
                encrypt_body: Vec::new(),
                image_url: Some("/x.png".to_string()),
            },
        };
        assert!(matches!(
            service.decrypt(&image_upload()).unwrap_err(),
            PixlockError::NotAPackage { .. }
        ));
    }
}

use std::time::Duration;

use url::Url;

use crate::core::errors::{PixlockError, Result};
use crate::core::models::api::{DecryptResponse, ErrorBody};
use crate::core::models::health::HealthState;
use crate::core::models::selected_file::SelectedFile;
use crate::core::traits::remote::RemoteCipher;

/// Timeout for the liveness probe; a health check should answer fast.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP implementation of `RemoteCipher` against the pixlock service.
///
/// Each call spins up a current-thread runtime and blocks on it, so the
/// rest of the crate stays synchronous. At most one request is in flight
/// per invocation.
#[derive(Debug)]
pub struct HttpRemote {
    base_url: Url,
    timeout: Duration,
}

impl HttpRemote {
    /// Build a remote for the given base URL and upload timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| PixlockError::InvalidConfig {
            detail: format!("Invalid server URL '{base_url}': {e}"),
        })?;
        Ok(Self { base_url, timeout })
    }

    /// Build a reqwest client with the given timeout.
    fn build_client(&self, timeout: Duration) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("pixlock/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PixlockError::Network {
                reason: format!("Failed to create HTTP client: {e}"),
            })
    }

    fn runtime() -> Result<tokio::runtime::Runtime> {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| PixlockError::Network {
                reason: format!("Failed to create async runtime: {e}"),
            })
    }

    /// Join an endpoint or service-relative path against the base URL.
    fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(|e| PixlockError::Network {
            reason: format!("Invalid URL '{path}': {e}"),
        })
    }

    /// POST the file as multipart form data (field `file`) and hand back
    /// the raw response. Non-success statuses become `ServerRejected`,
    /// with the message pulled from the JSON `{error}` body when present.
    async fn post_multipart(
        &self,
        client: &reqwest::Client,
        endpoint: &str,
        upload: &SelectedFile,
        fallback_message: &str,
    ) -> Result<reqwest::Response> {
        let part = reqwest::multipart::Part::bytes(upload.read_bytes()?)
            .file_name(upload.name.clone())
            .mime_str(&upload.mime)
            .map_err(|e| PixlockError::Network {
                reason: format!("Invalid MIME type '{}': {e}", upload.mime),
            })?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = client
            .post(self.resolve(endpoint)?)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PixlockError::Network {
                reason: format!("Request to {endpoint} failed: {e}"),
            })?;

        let status = resp.status();
        if !status.is_success() {
            // The body may be anything; only a JSON `{error}` is trusted.
            let message = resp
                .text()
                .await
                .ok()
                .and_then(|text| serde_json::from_str::<ErrorBody>(&text).ok())
                .and_then(|body| body.error)
                .unwrap_or_else(|| fallback_message.to_string());
            return Err(PixlockError::ServerRejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp)
    }
}

impl RemoteCipher for HttpRemote {
    fn encrypt_image(&self, upload: &SelectedFile) -> Result<Vec<u8>> {
        let rt = Self::runtime()?;
        rt.block_on(async {
            let client = self.build_client(self.timeout)?;
            let resp = self
                .post_multipart(&client, "/encrypt", upload, "Encryption failed.")
                .await?;
            resp.bytes()
                .await
                .map(|b| b.to_vec())
                .map_err(|e| PixlockError::Network {
                    reason: format!("Failed to read package body: {e}"),
                })
        })
    }

    fn decrypt_package(&self, upload: &SelectedFile) -> Result<DecryptResponse> {
        let rt = Self::runtime()?;
        rt.block_on(async {
            let client = self.build_client(self.timeout)?;
            let resp = self
                .post_multipart(&client, "/decrypt", upload, "Decryption failed.")
                .await?;
            resp.json::<DecryptResponse>()
                .await
                .map_err(|e| PixlockError::Network {
                    reason: format!("Failed to parse decrypt response: {e}"),
                })
        })
    }

    fn fetch_image(&self, image_url: &str) -> Result<Vec<u8>> {
        let url = self.resolve(image_url)?;
        let rt = Self::runtime()?;
        rt.block_on(async {
            let client = self.build_client(self.timeout)?;
            let resp = client.get(url).send().await.map_err(|e| PixlockError::Network {
                reason: format!("Image download failed: {e}"),
            })?;

            let status = resp.status();
            if !status.is_success() {
                return Err(PixlockError::ServerRejected {
                    status: status.as_u16(),
                    message: "Could not download the decrypted image.".to_string(),
                });
            }

            resp.bytes()
                .await
                .map(|b| b.to_vec())
                .map_err(|e| PixlockError::Network {
                    reason: format!("Failed to read image body: {e}"),
                })
        })
    }

    /// Probe the service root. Never errors: every outcome maps to a state.
    fn probe(&self) -> HealthState {
        let Ok(rt) = Self::runtime() else {
            return HealthState::Unreachable;
        };
        rt.block_on(async {
            let Ok(client) = self.build_client(PROBE_TIMEOUT) else {
                return HealthState::Unreachable;
            };
            match client.get(self.base_url.clone()).send().await {
                Ok(resp) => HealthState::from_status(resp.status().as_u16()),
                Err(_) => HealthState::Unreachable,
            }
        })
    }
}

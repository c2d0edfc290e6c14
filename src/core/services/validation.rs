use crate::core::errors::{PixlockError, Result};
use crate::core::models::selected_file::SelectedFile;

/// Upload size limit, both flows. Matches the service-side limit.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Image types the encrypt flow accepts.
pub const ALLOWED_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/bmp",
    "image/tiff",
];

/// Validate a file for the encrypt flow.
///
/// Size is checked first: an oversize file is rejected regardless
/// of its type. Then the detected MIME type must be on the allow-list.
pub fn validate_image(file: &SelectedFile) -> Result<()> {
    check_size(file)?;
    if !ALLOWED_IMAGE_TYPES.contains(&file.mime.as_str()) {
        return Err(PixlockError::UnsupportedImageType {
            detected: file.mime.clone(),
        });
    }
    Ok(())
}

/// Validate a file for the decrypt flow.
///
/// Accepts a ZIP by MIME type or by a `.zip` extension; either is enough.
pub fn validate_package(file: &SelectedFile) -> Result<()> {
    check_size(file)?;
    if file.mime != "application/zip" && !file.has_extension("zip") {
        return Err(PixlockError::NotAPackage {
            detected: file.mime.clone(),
        });
    }
    Ok(())
}

fn check_size(file: &SelectedFile) -> Result<()> {
    if file.size > MAX_FILE_SIZE {
        return Err(PixlockError::FileTooLarge {
            size: file.size,
            limit: MAX_FILE_SIZE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(name: &str, size: u64, mime: &str) -> SelectedFile {
        SelectedFile {
            path: PathBuf::from(name),
            name: name.to_string(),
            size,
            mime: mime.to_string(),
            modified: None,
        }
    }

    #[test]
    fn oversize_image_rejected_even_with_allowed_type() {
        let f = file("big.png", MAX_FILE_SIZE + 1, "image/png");
        assert!(matches!(
            validate_image(&f).unwrap_err(),
            PixlockError::FileTooLarge { .. }
        ));
    }

    #[test]
    fn oversize_package_rejected_even_with_zip_type() {
        let f = file("big.zip", MAX_FILE_SIZE + 1, "application/zip");
        assert!(matches!(
            validate_package(&f).unwrap_err(),
            PixlockError::FileTooLarge { .. }
        ));
    }

    #[test]
    fn file_at_exact_limit_is_accepted() {
        let f = file("edge.png", MAX_FILE_SIZE, "image/png");
        assert!(validate_image(&f).is_ok());
    }

    #[test]
    fn each_allowed_image_type_passes() {
        for mime in ALLOWED_IMAGE_TYPES {
            let f = file("img", 1024, mime);
            assert!(validate_image(&f).is_ok(), "{mime} should be accepted");
        }
    }

    #[test]
    fn disallowed_image_type_rejected_under_limit() {
        let f = file("anim.webp", 1024, "image/webp");
        assert!(matches!(
            validate_image(&f).unwrap_err(),
            PixlockError::UnsupportedImageType { .. }
        ));
    }

    #[test]
    fn zip_by_mime_accepted() {
        let f = file("package", 1024, "application/zip");
        assert!(validate_package(&f).is_ok());
    }

    #[test]
    fn zip_by_extension_accepted_despite_mime() {
        let f = file("package.zip", 1024, "application/octet-stream");
        assert!(validate_package(&f).is_ok());
    }

    #[test]
    fn non_zip_rejected_for_decrypt() {
        let f = file("photo.png", 1024, "image/png");
        assert!(matches!(
            validate_package(&f).unwrap_err(),
            PixlockError::NotAPackage { .. }
        ));
    }
}

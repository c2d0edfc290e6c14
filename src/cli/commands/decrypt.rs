use std::path::{Path, PathBuf};

use crate::adapters::api::http_remote::HttpRemote;
use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::selected_file::{format_bytes, SelectedFile};
use crate::core::services::transfer_service::TransferService;

/// Fallback name when the server's image URL has no usable basename.
const DEFAULT_IMAGE_NAME: &str = "decrypted_image.png";

/// Execute the `pixlock decrypt` command.
///
/// Validates the package locally, uploads it to `POST /decrypt`,
/// fetches the image the server points at, and saves it.
pub fn execute(ctx: &Context, file: &str, output_path: Option<&str>) -> Result<()> {
    let upload = SelectedFile::from_path(Path::new(file))?;

    if !ctx.quiet {
        output::header("Pixlock — Decrypt");
        output::detail(&format!("Package: {}", upload.name));
        output::detail(&format!("Size: {}", format_bytes(upload.size)));
    }

    let remote = HttpRemote::new(&ctx.server_url, ctx.timeout)?;
    let service = TransferService { remote };

    let sp = (!ctx.quiet).then(|| output::spinner("Rebuilding the image..."));
    let result = service.decrypt(&upload);
    let image = match result {
        Ok(image) => image,
        Err(e) => {
            if let Some(sp) = sp {
                sp.finish_and_clear();
            }
            return Err(e);
        }
    };
    if let Some(sp) = sp {
        output::finish_spinner(
            sp,
            &format!("Received image ({})", format_bytes(image.bytes.len() as u64)),
        );
    }

    let dest = match output_path {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(derive_image_name(&image.image_url)),
    };
    std::fs::write(&dest, &image.bytes)?;

    output::success(&format!(
        "Image decrypted successfully. Saved to {}",
        dest.display()
    ));
    if ctx.verbose {
        output::detail(&format!("Server reference: {}", image.image_url));
    }

    Ok(())
}

/// Derive a local file name from the URL the server handed back,
/// e.g. `/download/decrypted/abc.png` becomes `abc.png`.
fn derive_image_name(image_url: &str) -> String {
    image_url
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty() && name.contains('.'))
        .map(|name| name.to_string())
        .unwrap_or_else(|| DEFAULT_IMAGE_NAME.to_string())
}

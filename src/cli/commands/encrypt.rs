use std::path::{Path, PathBuf};

use crate::adapters::api::http_remote::HttpRemote;
use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::selected_file::{format_bytes, SelectedFile};
use crate::core::services::transfer_service::TransferService;

/// Default name of the saved package, matching what the service produces.
const DEFAULT_PACKAGE_NAME: &str = "encrypted_package.zip";

/// Execute the `pixlock encrypt` command.
///
/// Validates the image locally, uploads it to `POST /encrypt`, and
/// saves the returned ZIP package. The upload only starts once the
/// file has passed the size and type checks.
pub fn execute(ctx: &Context, file: &str, output_path: Option<&str>) -> Result<()> {
    let upload = SelectedFile::from_path(Path::new(file))?;

    if !ctx.quiet {
        output::header("Pixlock — Encrypt");
        output::detail(&format!("File: {}", upload.name));
        output::detail(&format!("Size: {}", format_bytes(upload.size)));
        if ctx.verbose {
            output::detail(&format!("Type: {}", upload.mime));
        }
    }

    let remote = HttpRemote::new(&ctx.server_url, ctx.timeout)?;
    let service = TransferService { remote };

    let sp = (!ctx.quiet).then(|| output::spinner(&format!("Encrypting {}...", upload.name)));
    let result = service.encrypt(&upload);
    let package = match result {
        Ok(package) => package,
        Err(e) => {
            if let Some(sp) = sp {
                sp.finish_and_clear();
            }
            return Err(e);
        }
    };
    if let Some(sp) = sp {
        output::finish_spinner(sp, &format!("Received package ({})", format_bytes(package.len() as u64)));
    }

    let dest = PathBuf::from(output_path.unwrap_or(DEFAULT_PACKAGE_NAME));
    std::fs::write(&dest, &package)?;

    output::success(&format!(
        "Encryption successful! Package saved to {}",
        dest.display()
    ));
    println!("\n  Run 'pixlock decrypt {}' to get the image back.", dest.display());

    Ok(())
}
